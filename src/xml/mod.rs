//! XML Import/Export für BezierToy-Kurvendokumente.
//!
//! Das Format ist eine Property-List: Basis-Kurve (Farbe, Startpunkt,
//! relative Punkte mit gespiegelter Y-Achse) und reduzierte Kurven, deren
//! algorithmus-spezifische Felder als Attribute inline stehen.

pub mod parser;
pub mod writer;

pub use parser::parse_curve_document;
pub use writer::write_curve_document;
