//! Attribut-Senke und -Quelle für algorithmus-spezifische Felder.

use crate::core::StorageError;
use std::str::FromStr;

/// Sammelt die Attribute des aktuellen `reduced-curve`-Elements.
///
/// Reihenfolge bleibt erhalten; Escaping übernimmt der Writer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeSink {
    attributes: Vec<(String, String)>,
}

impl AttributeSink {
    /// Erstellt eine leere Senke.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fügt ein Attribut hinzu.
    pub fn write(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.push((name.into(), value.into()));
    }

    /// Schreibt eine Ganzzahl als Klartext.
    pub fn write_int(&mut self, name: impl Into<String>, value: i64) {
        self.write(name, value.to_string());
    }

    /// Alle Attribute in Schreib-Reihenfolge
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Gibt die Attribute frei.
    pub fn into_attributes(self) -> Vec<(String, String)> {
        self.attributes
    }
}

/// Lesesicht auf die Attribute eines `reduced-curve`-Elements.
#[derive(Debug, Clone, Copy)]
pub struct AttributeSource<'a> {
    location: &'a str,
    attributes: &'a [(String, String)],
}

impl<'a> AttributeSource<'a> {
    /// `location` erscheint in Fehlermeldungen (z.B. `reduced-curve[2]`).
    pub fn new(location: &'a str, attributes: &'a [(String, String)]) -> Self {
        Self {
            location,
            attributes,
        }
    }

    /// Wert eines Attributs, falls vorhanden.
    pub fn get(&self, name: &str) -> Option<&'a str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Wert eines Pflicht-Attributs.
    pub fn require(&self, name: &str) -> Result<&'a str, StorageError> {
        self.get(name).ok_or_else(|| {
            StorageError::format(
                format!("{}@{}", self.location, name),
                "Pflicht-Attribut fehlt",
            )
        })
    }

    /// Liest ein Pflicht-Attribut als Ganzzahl (keine Nachkommastellen).
    pub fn parse_int<T>(&self, name: &str) -> Result<T, StorageError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let raw = self.require(name)?;
        raw.trim().parse::<T>().map_err(|e| {
            StorageError::format(
                format!("{}@{}", self.location, name),
                format!("'{raw}' ist keine gueltige Ganzzahl: {e}"),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_sink_keeps_order() {
        let mut sink = AttributeSink::new();
        sink.write_int("b", 2);
        sink.write("a", "x");
        assert_eq!(sink.attributes(), attrs(&[("b", "2"), ("a", "x")]).as_slice());
    }

    #[test]
    fn test_parse_int_is_strict() {
        let list = attrs(&[("n", "3"), ("f", "1.5"), ("w", "abc")]);
        let source = AttributeSource::new("reduced-curve[0]", &list);

        assert_eq!(source.parse_int::<i32>("n").unwrap(), 3);
        assert!(source.parse_int::<i32>("f").is_err());
        assert!(source.parse_int::<i32>("w").is_err());
    }

    #[test]
    fn test_missing_attribute_names_location() {
        let list = attrs(&[]);
        let source = AttributeSource::new("reduced-curve[4]", &list);
        let err = source.require("degree").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Formatfehler in reduced-curve[4]@degree: Pflicht-Attribut fehlt"
        );
    }
}
