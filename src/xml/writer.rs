//! Writer für BezierToy-Kurvendokumente.

use crate::core::{encode_offset, format_decimal, CurveDocument, ReducedCurve, StorageError};
use crate::reducer::{AttributeSink, ReducerRegistry};
use std::collections::HashSet;

/// Vom Codec selbst belegte Attribute des `reduced-curve`-Elements.
const RESERVED_ATTRIBUTES: [&str; 3] = ["method", "degree", "color"];

/// Schreibt ein Kurvendokument als XML-String.
///
/// # Parameter
/// - `document`: Das zu speichernde Dokument (Basis-Kurve mit mindestens einem Punkt)
/// - `registry`: Registry, aus der die Bezeichner der Reducer aufgelöst werden
pub fn write_curve_document(
    document: &CurveDocument,
    registry: &ReducerRegistry,
) -> Result<String, StorageError> {
    let base_curve = &document.base_curve;
    let start_point = base_curve.start_point().ok_or_else(|| {
        StorageError::Invariant("Basis-Kurve ohne Punkte kann nicht gespeichert werden".into())
    })?;

    let mut writer = DocumentWriter::new();
    writer.line("<?xml version=\"1.0\" encoding=\"utf-8\" standalone=\"yes\"?>");
    writer.line(
        "<!DOCTYPE plist PUBLIC \"-//Apple Computer//DTD PLIST 1.0//EN\" \
         \"http://www.apple.com/DTDs/PropertyList-1.0.dtd\">",
    );
    writer.open("plist", &[("version", "1.0")]);
    writer.open("dict", &[]);

    let color = base_curve.color.to_hex();
    writer.empty("base-curve", &[("color", color.as_str())]);
    let x = format_decimal(start_point.x);
    let y = format_decimal(start_point.y);
    writer.empty("startPoint", &[("x", x.as_str()), ("y", y.as_str())]);

    writer.text_element("key", "points");
    writer.open("array", &[]);
    for (index, point) in base_curve.points.iter().enumerate() {
        let entry = encode_offset(*point, start_point).map_err(|err| match err {
            StorageError::Invariant(message) => {
                StorageError::Invariant(format!("array/string[{index}]: {message}"))
            }
            other => other,
        })?;
        writer.text_element("string", &entry);
    }
    writer.close("array");

    for (index, curve) in document.reduced_curves.iter().enumerate() {
        write_reduced_curve(&mut writer, curve, registry)
            .map_err(|e| e.within(&format!("reduced-curve[{index}]")))?;
    }

    writer.close("dict");
    writer.close("plist");

    Ok(writer.finish())
}

fn write_reduced_curve(
    writer: &mut DocumentWriter,
    curve: &ReducedCurve,
    registry: &ReducerRegistry,
) -> Result<(), StorageError> {
    let record = registry.find_by_instance(curve.reducer.as_ref())?;

    let mut sink = AttributeSink::new();
    sink.write("method", record.identifier.as_str());
    sink.write("degree", curve.degree.to_string());
    sink.write("color", curve.color.to_hex());
    curve.reducer.write_attributes(&mut sink);

    let attributes = sink.into_attributes();
    let mut seen = HashSet::new();
    for (index, (name, _)) in attributes.iter().enumerate() {
        if index >= RESERVED_ATTRIBUTES.len() && RESERVED_ATTRIBUTES.contains(&name.as_str()) {
            return Err(StorageError::Invariant(format!(
                "Reducer '{}' ueberschreibt das Attribut '{name}'",
                record.identifier
            )));
        }
        if !is_valid_name(name) || !seen.insert(name.as_str()) {
            return Err(StorageError::Invariant(format!(
                "Reducer '{}' schreibt ungueltiges oder doppeltes Attribut '{name}'",
                record.identifier
            )));
        }
    }

    log::debug!(
        "reduced-curve: method={}, degree={}, {} Attribute",
        record.identifier,
        curve.degree,
        attributes.len()
    );

    let borrowed: Vec<(&str, &str)> = attributes
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    writer.empty("reduced-curve", &borrowed);
    Ok(())
}

/// XML-Ausgabe mit Einrückung (4 Leerzeichen pro Ebene).
struct DocumentWriter {
    output: String,
    depth: usize,
}

impl DocumentWriter {
    fn new() -> Self {
        Self {
            output: String::new(),
            depth: 0,
        }
    }

    fn line(&mut self, content: &str) {
        for _ in 0..self.depth {
            self.output.push_str("    ");
        }
        self.output.push_str(content);
        self.output.push('\n');
    }

    fn open(&mut self, tag: &str, attributes: &[(&str, &str)]) {
        self.line(&format!("<{}{}>", tag, render_attributes(attributes)));
        self.depth += 1;
    }

    fn close(&mut self, tag: &str) {
        self.depth = self.depth.saturating_sub(1);
        self.line(&format!("</{}>", tag));
    }

    fn empty(&mut self, tag: &str, attributes: &[(&str, &str)]) {
        self.line(&format!("<{}{} />", tag, render_attributes(attributes)));
    }

    fn text_element(&mut self, tag: &str, text: &str) {
        self.line(&format!("<{}>{}</{}>", tag, escape_xml(text), tag));
    }

    fn finish(self) -> String {
        self.output
    }
}

fn render_attributes(attributes: &[(&str, &str)]) -> String {
    attributes
        .iter()
        .map(|(key, value)| format!(" {}=\"{}\"", key, escape_xml(value)))
        .collect()
}

/// Erlaubt sind XML-Namen aus ASCII-Buchstaben, Ziffern, `-`, `_` und `.`.
fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

fn escape_xml(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Argb, ErrorKind};
    use crate::reducer::{AttributeSource, ConstrainedReducer, Reducer};
    use glam::DVec2;
    use std::any::Any;

    fn sample_document() -> CurveDocument {
        let mut document = CurveDocument::new(Argb(0xFF11_2233));
        document.base_curve.points = vec![
            DVec2::new(10.0, 20.0),
            DVec2::new(15.0, 20.0),
            DVec2::new(10.0, 25.0),
        ];
        document.reduced_curves.push(ReducedCurve::new(
            Box::new(ConstrainedReducer::new(1, 2)),
            3,
            Argb::BLUE,
        ));
        document
    }

    #[test]
    fn test_writes_relative_y_flipped_points() {
        let registry = ReducerRegistry::with_builtin_reducers();
        let xml = write_curve_document(&sample_document(), &registry).unwrap();

        assert!(xml.contains("<base-curve color=\"FF112233\" />"));
        assert!(xml.contains("<startPoint x=\"10\" y=\"20\" />"));
        assert!(xml.contains("<key>points</key>"));
        let entries: Vec<&str> = xml
            .lines()
            .map(str::trim)
            .filter(|l| l.starts_with("<string>"))
            .collect();
        assert_eq!(
            entries,
            vec![
                "<string>{0,0}</string>",
                "<string>{5,0}</string>",
                "<string>{0,-5}</string>"
            ]
        );
    }

    #[test]
    fn test_writes_reduced_curve_with_plugin_attributes() {
        let registry = ReducerRegistry::with_builtin_reducers();
        let xml = write_curve_document(&sample_document(), &registry).unwrap();
        assert!(xml.contains(
            "<reduced-curve method=\"constrained\" degree=\"3\" color=\"FF0000FF\" \
             continuity-0=\"1\" continuity-1=\"2\" />"
        ));
    }

    #[test]
    fn test_framing_and_indentation() {
        let registry = ReducerRegistry::with_builtin_reducers();
        let xml = write_curve_document(&sample_document(), &registry).unwrap();
        let lines: Vec<&str> = xml.lines().collect();
        assert!(lines[0].starts_with("<?xml"));
        assert!(lines[1].starts_with("<!DOCTYPE plist"));
        assert_eq!(lines[2], "<plist version=\"1.0\">");
        assert_eq!(lines[3], "    <dict>");
        assert_eq!(lines.last().copied(), Some("</plist>"));
    }

    #[test]
    fn test_overflowing_offset_is_invariant_error_with_index() {
        let registry = ReducerRegistry::with_builtin_reducers();
        let mut document = CurveDocument::new(Argb::BLACK);
        document.base_curve.points = vec![DVec2::new(-1e308, 0.0), DVec2::new(1e308, 0.0)];

        match write_curve_document(&document, &registry) {
            Err(StorageError::Invariant(message)) => {
                assert!(message.starts_with("array/string[1]"), "{message}")
            }
            other => panic!("Unerwartetes Ergebnis: {other:?}"),
        }
    }

    #[test]
    fn test_non_finite_start_point_is_invariant_error() {
        let registry = ReducerRegistry::with_builtin_reducers();
        let mut document = CurveDocument::new(Argb::BLACK);
        document.base_curve.points = vec![DVec2::new(f64::NAN, 1.0)];

        let err = write_curve_document(&document, &registry).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Invariant);
    }

    #[test]
    fn test_empty_base_curve_is_invariant_error() {
        let registry = ReducerRegistry::with_builtin_reducers();
        let err = write_curve_document(&CurveDocument::default(), &registry).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Invariant);
    }

    #[test]
    fn test_unregistered_reducer_is_lookup_error() {
        let document = sample_document();
        let err = write_curve_document(&document, &ReducerRegistry::new()).unwrap_err();
        assert!(matches!(err, StorageError::UnregisteredReducer(_)));
    }

    #[derive(Debug, Default)]
    struct HijackingReducer;

    impl Reducer for HijackingReducer {
        fn write_attributes(&self, sink: &mut AttributeSink) {
            sink.write("degree", "99");
        }

        fn read_attributes(&mut self, _source: &AttributeSource<'_>) -> Result<(), StorageError> {
            Ok(())
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn clone_box(&self) -> Box<dyn Reducer> {
            Box::new(HijackingReducer)
        }

        fn eq_dyn(&self, other: &dyn Reducer) -> bool {
            other.as_any().is::<Self>()
        }
    }

    #[test]
    fn test_plugin_cannot_overwrite_reserved_attribute() {
        let mut registry = ReducerRegistry::new();
        registry.register(
            "hijack",
            "Hijack",
            Box::new(crate::reducer::DefaultFactory::<HijackingReducer>::new()),
        );
        let mut document = sample_document();
        document.reduced_curves =
            vec![ReducedCurve::new(Box::new(HijackingReducer), 2, Argb::RED)];

        let err = write_curve_document(&document, &registry).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Invariant);
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a<b & \"c\""), "a&lt;b &amp; &quot;c&quot;");
    }
}
