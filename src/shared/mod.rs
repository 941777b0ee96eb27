//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Konfiguration, die `app` und Host-Anwendung teilen.

pub mod options;

pub use options::EditorOptions;
pub use options::{DEFAULT_EXPORT_FORMAT, DEFAULT_REDUCED_DEGREE};
