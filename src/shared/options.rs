//! Zentrale Konfiguration für BezierToy.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::Argb;
use serde::{Deserialize, Serialize};

// ── Kurven ──────────────────────────────────────────────────────────

/// Standard-Farbe der Basis-Kurve (opakes Schwarz).
pub const BASE_CURVE_COLOR: Argb = Argb::BLACK;
/// Standard-Farbe neuer reduzierter Kurven (opakes Rot).
pub const REDUCED_CURVE_COLOR: Argb = Argb::RED;
/// Standard-Grad neuer reduzierter Kurven.
pub const DEFAULT_REDUCED_DEGREE: u32 = 3;

// ── Dateien ─────────────────────────────────────────────────────────

/// Standard-Bildformat für den Export (Dateiendung).
pub const DEFAULT_EXPORT_FORMAT: &str = "png";
/// Name der Optionen-Datei neben der Binary.
pub const OPTIONS_FILE_NAME: &str = "bezier_toy.toml";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `bezier_toy.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    /// Farbe der Basis-Kurve in neuen Dokumenten (`AARRGGBB`)
    pub base_curve_color: Argb,
    /// Farbe neu angelegter reduzierter Kurven (`AARRGGBB`)
    pub reduced_curve_color: Argb,
    /// Grad neu angelegter reduzierter Kurven
    pub default_degree: u32,
    /// Bildformat für den Export als Dateiendung (`png`, `jpg`, `bmp`)
    #[serde(default = "default_export_format")]
    pub export_format: String,
    /// Speichern über temporäre Datei + Umbenennen
    #[serde(default = "default_atomic_save")]
    pub atomic_save: bool,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            base_curve_color: BASE_CURVE_COLOR,
            reduced_curve_color: REDUCED_CURVE_COLOR,
            default_degree: DEFAULT_REDUCED_DEGREE,
            export_format: DEFAULT_EXPORT_FORMAT.to_string(),
            atomic_save: true,
        }
    }
}

/// Serde-Default für `export_format` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_export_format() -> String {
    DEFAULT_EXPORT_FORMAT.to_string()
}

/// Serde-Default für `atomic_save`.
fn default_atomic_save() -> bool {
    true
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("bezier_toy"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join(OPTIONS_FILE_NAME)
    }
}
