//! Bildexport der Zeichenfläche.
//!
//! Die Zeichenfläche wird als Parameter übergeben; das Zeichnen selbst
//! bleibt Sache des UI.

use crate::core::StorageError;
use crate::shared::EditorOptions;
use image::{DynamicImage, ImageFormat, RgbaImage};
use std::path::Path;

/// Liefert Größe und Inhalt der Zeichenfläche für den Export.
pub trait CanvasSource {
    /// Breite und Höhe in Pixeln
    fn size(&self) -> (u32, u32);

    /// Zeichnet den aktuellen Inhalt in `target` (bereits in `size()`).
    fn draw_into(&self, target: &mut RgbaImage);
}

/// Rendert die Zeichenfläche in einen Offscreen-Puffer und speichert ihn.
///
/// Der Puffer lebt nur für die Dauer des Aufrufs.
pub fn export_canvas(
    canvas: &dyn CanvasSource,
    path: impl AsRef<Path>,
    format: ImageFormat,
) -> Result<(), StorageError> {
    let path = path.as_ref();
    let (width, height) = canvas.size();
    if width == 0 || height == 0 {
        return Err(StorageError::Invariant(format!(
            "Zeichenflaeche {width}x{height} kann nicht exportiert werden"
        )));
    }

    let mut buffer = RgbaImage::new(width, height);
    canvas.draw_into(&mut buffer);

    let image = match format {
        // JPEG kennt keinen Alpha-Kanal
        ImageFormat::Jpeg => DynamicImage::ImageRgb8(DynamicImage::ImageRgba8(buffer).to_rgb8()),
        _ => DynamicImage::ImageRgba8(buffer),
    };
    image.save_with_format(path, format)?;

    log::info!(
        "Canvas exportiert: {}x{} als {:?} -> {}",
        width,
        height,
        format,
        path.display()
    );
    Ok(())
}

/// Wie [`export_canvas`], Format aus `EditorOptions::export_format`.
pub fn export_canvas_with_options(
    canvas: &dyn CanvasSource,
    path: impl AsRef<Path>,
    options: &EditorOptions,
) -> Result<(), StorageError> {
    let format = ImageFormat::from_extension(&options.export_format).ok_or_else(|| {
        StorageError::format(
            "export_format",
            format!("Unbekanntes Bildformat '{}'", options.export_format),
        )
    })?;
    export_canvas(canvas, path, format)
}
