//! Use-Cases der Application-Layer-Orchestrierung.

pub mod export;
pub mod file_io;

pub use export::{export_canvas, export_canvas_with_options, CanvasSource};
pub use file_io::{load_file, save_current_file, save_file};
