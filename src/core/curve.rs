//! Basis-Kurve, reduzierte Kurven und das Dokument, das beide enthält.

use super::Argb;
use crate::reducer::Reducer;
use glam::DVec2;

/// Vom Benutzer gesetzte Kontrollpunkt-Kurve.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseCurve {
    /// Zeichenfarbe
    pub color: Argb,
    /// Kontrollpunkte in Reihenfolge (bestimmt die Parametrisierung)
    pub points: Vec<DVec2>,
}

impl BaseCurve {
    /// Erstellt eine leere Basis-Kurve.
    pub fn new(color: Argb) -> Self {
        Self {
            color,
            points: Vec::new(),
        }
    }

    /// Erster Punkt der Kurve, Anker für die relative Speicherung.
    pub fn start_point(&self) -> Option<DVec2> {
        self.points.first().copied()
    }

    /// Anzahl der Kontrollpunkte
    pub fn point_count(&self) -> usize {
        self.points.len()
    }
}

impl Default for BaseCurve {
    fn default() -> Self {
        Self::new(Argb::BLACK)
    }
}

/// Aus der Basis-Kurve abgeleitete Kurve eines Reduktions-Algorithmus.
///
/// Die Punkte der Basis-Kurve gehören dem Dokument; die reduzierte Kurve
/// speichert nur Grad, Farbe und die Konfiguration ihres Reducers.
#[derive(Debug)]
pub struct ReducedCurve {
    /// Reducer-Instanz samt algorithmus-spezifischer Konfiguration
    pub reducer: Box<dyn Reducer>,
    /// Ziel-Grad der Reduktion
    pub degree: u32,
    /// Zeichenfarbe
    pub color: Argb,
}

impl ReducedCurve {
    /// Erstellt eine reduzierte Kurve.
    pub fn new(reducer: Box<dyn Reducer>, degree: u32, color: Argb) -> Self {
        Self {
            reducer,
            degree,
            color,
        }
    }
}

impl Clone for ReducedCurve {
    fn clone(&self) -> Self {
        Self {
            reducer: self.reducer.clone_box(),
            degree: self.degree,
            color: self.color,
        }
    }
}

impl PartialEq for ReducedCurve {
    fn eq(&self, other: &Self) -> bool {
        self.degree == other.degree
            && self.color == other.color
            && self.reducer.eq_dyn(other.reducer.as_ref())
    }
}

/// Inhalt einer Datei: eine Basis-Kurve und beliebig viele reduzierte Kurven.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CurveDocument {
    /// Basis-Kurve
    pub base_curve: BaseCurve,
    /// Reduzierte Kurven in Anzeige-Reihenfolge
    pub reduced_curves: Vec<ReducedCurve>,
}

impl CurveDocument {
    /// Erstellt ein Dokument mit leerer Basis-Kurve der Farbe `color`.
    pub fn new(color: Argb) -> Self {
        Self {
            base_curve: BaseCurve::new(color),
            reduced_curves: Vec::new(),
        }
    }

    /// Anzahl der reduzierten Kurven
    pub fn reduced_curve_count(&self) -> usize {
        self.reduced_curves.len()
    }
}
