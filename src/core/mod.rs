//! Core-Domänentypen: Punkte, Farben, Kurven, Dokument, Fehler.

pub mod color;
pub mod curve;
pub mod error;
/// Text-Kodierung von Punkten und Dezimalzahlen
pub mod point;

pub use color::Argb;
pub use curve::{BaseCurve, CurveDocument, ReducedCurve};
pub use error::{ErrorKind, StorageError};
pub use point::{decode_offset, encode_offset, format_decimal, format_point, parse_decimal, parse_point};
