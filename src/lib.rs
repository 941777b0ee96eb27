//! BezierToy Library.
//! Dokument-Speicherung (Basis-Kurve + reduzierte Kurven) als Library
//! exportiert für Editor, Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod reducer;
pub mod shared;
pub mod xml;

pub use app::{CanvasSource, CurveModel};
pub use core::{Argb, BaseCurve, CurveDocument, ErrorKind, ReducedCurve, StorageError};
pub use reducer::{ConstrainedReducer, Reducer, ReducerRegistry, UnconstrainedReducer};
pub use shared::EditorOptions;
pub use xml::{parse_curve_document, write_curve_document};
