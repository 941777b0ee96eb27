//! Modell-Zustand: zentrale Datenhaltung des Editors.

use crate::core::{CurveDocument, ReducedCurve, StorageError};
use crate::reducer::ReducerRegistry;
use crate::shared::EditorOptions;
use glam::DVec2;
use std::path::PathBuf;

/// Wurzel des Editors: Dokument, Dateipfad, Selektion und Optionen.
#[derive(Debug, Clone)]
pub struct CurveModel {
    /// Aktuelles Dokument (Basis-Kurve + reduzierte Kurven)
    pub document: CurveDocument,
    /// Pfad der zuletzt geladenen/gespeicherten Datei
    pub file_path: Option<PathBuf>,
    /// Index der selektierten reduzierten Kurve
    pub selected_curve: Option<usize>,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
}

impl Default for CurveModel {
    fn default() -> Self {
        Self::new()
    }
}

impl CurveModel {
    /// Erstellt ein leeres Modell mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt ein leeres Modell mit den gegebenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            document: CurveDocument::new(options.base_curve_color),
            file_path: None,
            selected_curve: None,
            options,
        }
    }

    /// Hängt einen Kontrollpunkt an die Basis-Kurve an.
    pub fn add_point(&mut self, point: DVec2) {
        self.document.base_curve.points.push(point);
    }

    /// Legt eine reduzierte Kurve mit Standard-Grad und -Farbe an.
    ///
    /// Der Reducer wird über die Registry erzeugt, damit er später beim
    /// Speichern wieder seinem Bezeichner zugeordnet werden kann.
    /// Gibt den Index der neuen Kurve zurück.
    pub fn add_reduced_curve(
        &mut self,
        registry: &ReducerRegistry,
        identifier: &str,
    ) -> Result<usize, StorageError> {
        let reducer = registry.produce(identifier)?;
        self.document.reduced_curves.push(ReducedCurve::new(
            reducer,
            self.options.default_degree,
            self.options.reduced_curve_color,
        ));
        Ok(self.document.reduced_curves.len() - 1)
    }

    /// Entfernt eine reduzierte Kurve; passt die Selektion an.
    pub fn remove_reduced_curve(&mut self, index: usize) -> Option<ReducedCurve> {
        if index >= self.document.reduced_curves.len() {
            return None;
        }
        let removed = self.document.reduced_curves.remove(index);
        self.selected_curve = match self.selected_curve {
            Some(sel) if sel == index => None,
            Some(sel) if sel > index => Some(sel - 1),
            other => other,
        };
        Some(removed)
    }

    /// Selektiert eine reduzierte Kurve (`None` hebt die Selektion auf).
    pub fn select_curve(&mut self, index: Option<usize>) {
        self.selected_curve = index.filter(|i| *i < self.document.reduced_curves.len());
    }

    /// Die selektierte reduzierte Kurve, falls vorhanden.
    pub fn selected(&self) -> Option<&ReducedCurve> {
        self.selected_curve
            .and_then(|i| self.document.reduced_curves.get(i))
    }

    /// Setzt das Modell auf ein leeres Dokument zurück.
    pub fn clear(&mut self) {
        self.document = CurveDocument::new(self.options.base_curve_color);
        self.file_path = None;
        self.selected_curve = None;
    }

    /// Ersetzt das Dokument vollständig (z.B. nach erfolgreichem Laden).
    pub fn replace_document(&mut self, document: CurveDocument) {
        self.document = document;
        self.selected_curve = None;
    }
}
