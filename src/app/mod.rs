//! Application-Layer: Modell-Zustand und Use-Cases (Speichern, Laden, Export).

/// Modell-Zustand
///
/// Dieses Modul verwaltet das Dokument, den Dateipfad und die Selektion.
pub mod state;
pub mod use_cases;

pub use state::CurveModel;
pub use use_cases::{export_canvas, load_file, save_current_file, save_file, CanvasSource};
