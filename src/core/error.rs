//! Fehlertypen der Dokument-Speicherung.

use std::path::PathBuf;
use thiserror::Error;

/// Grobe Fehlerklasse für die Darstellung im UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Fehlendes oder ungültiges Feld beim Dekodieren
    Format,
    /// Unbekannter Reducer-Bezeichner oder nicht registrierte Instanz
    Lookup,
    /// Strukturelle Vorbedingung verletzt
    Invariant,
    /// Datei nicht les- oder schreibbar
    Resource,
}

/// Fehler beim Speichern, Laden oder Exportieren eines Kurven-Dokuments.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Feld/Attribut fehlt oder lässt sich nicht parsen.
    #[error("Formatfehler in {location}: {message}")]
    Format {
        /// Element bzw. Attribut, in dem der Fehler auftrat (z.B. `reduced-curve[1]@degree`)
        location: String,
        /// Beschreibung des Fehlers
        message: String,
    },
    /// Beim Laden: `method`-Attribut passt zu keinem registrierten Reducer.
    #[error("Unbekannter Reducer-Bezeichner '{0}'")]
    UnknownReducer(String),
    /// Beim Speichern: Reducer-Instanz wurde nicht über eine registrierte Factory erzeugt.
    #[error("Reducer-Instanz ist in keiner Factory registriert: {0}")]
    UnregisteredReducer(String),
    /// Strukturelle Vorbedingung verletzt (z.B. Basis-Kurve ohne Punkte).
    #[error("Invariante verletzt: {0}")]
    Invariant(String),
    /// I/O-Fehler der darunterliegenden Datei.
    #[error("Datei {path:?} konnte nicht verarbeitet werden: {source}")]
    Resource {
        /// Betroffener Pfad
        path: PathBuf,
        /// Ursprünglicher I/O-Fehler
        #[source]
        source: std::io::Error,
    },
    /// Fehler beim Kodieren/Schreiben des Export-Bildes.
    #[error("Bildexport fehlgeschlagen: {0}")]
    Image(#[from] image::ImageError),
}

impl StorageError {
    /// Erzeugt einen Formatfehler mit Ortsangabe.
    pub fn format(location: impl Into<String>, message: impl Into<String>) -> Self {
        StorageError::Format {
            location: location.into(),
            message: message.into(),
        }
    }

    /// Erzeugt einen Ressourcenfehler für `path`.
    pub fn resource(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StorageError::Resource {
            path: path.into(),
            source,
        }
    }

    /// Ordnet den Fehler einer der vier Fehlerklassen zu.
    pub fn kind(&self) -> ErrorKind {
        match self {
            StorageError::Format { .. } => ErrorKind::Format,
            StorageError::UnknownReducer(_) | StorageError::UnregisteredReducer(_) => {
                ErrorKind::Lookup
            }
            StorageError::Invariant(_) => ErrorKind::Invariant,
            StorageError::Resource { .. } | StorageError::Image(_) => ErrorKind::Resource,
        }
    }

    /// Ersetzt den Ort eines Formatfehlers.
    ///
    /// Andere Fehlerarten bleiben unverändert.
    pub fn located(self, location: impl Into<String>) -> Self {
        match self {
            StorageError::Format { message, .. } => StorageError::Format {
                location: location.into(),
                message,
            },
            other => other,
        }
    }

    /// Ergänzt einen Formatfehler um einen äußeren Ort (`outer/inner`).
    ///
    /// Andere Fehlerarten bleiben unverändert.
    pub fn within(self, outer: &str) -> Self {
        match self {
            StorageError::Format { location, message } => StorageError::Format {
                location: format!("{outer}/{location}"),
                message,
            },
            other => other,
        }
    }
}
