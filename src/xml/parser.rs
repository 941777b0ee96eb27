//! Parser für BezierToy-Kurvendokumente.

use crate::core::{decode_offset, parse_decimal, Argb, BaseCurve, CurveDocument};
use crate::core::{ReducedCurve, StorageError};
use crate::reducer::{AttributeSource, ReducerRegistry};
use glam::DVec2;
use quick_xml::events::{BytesRef, BytesStart, Event};
use quick_xml::Reader;

/// Erwartete Version im `plist`-Wurzelelement.
const FORMAT_VERSION: &str = "1.0";

/// Rohdaten eines Elements: Attribute in Dokument-Reihenfolge.
type RawAttributes = Vec<(String, String)>;

/// Parsed ein Kurvendokument aus einem XML-String.
///
/// Das Ergebnis ist immer ein neues Dokument; bei einem Fehler wird nichts
/// zurückgegeben, was halb befüllt wäre.
pub fn parse_curve_document(
    xml_content: &str,
    registry: &ReducerRegistry,
) -> Result<CurveDocument, StorageError> {
    let mut reader = Reader::from_str(xml_content);
    reader.config_mut().trim_text(true);

    let mut buffer = Vec::new();

    let mut path: Vec<String> = Vec::new();
    let mut root_seen = false;
    let mut dict_seen = false;

    let mut base_curve_attrs: Option<RawAttributes> = None;
    let mut start_point_attrs: Option<RawAttributes> = None;
    let mut point_entries: Vec<String> = Vec::new();
    let mut current_entry: Option<String> = None;
    let mut reduced_curve_attrs: Vec<RawAttributes> = Vec::new();

    loop {
        match reader.read_event_into(&mut buffer) {
            Ok(Event::Start(ref e)) => {
                let tag = element_name(e)?;

                if path.is_empty() {
                    check_root(&tag, e, root_seen)?;
                    root_seen = true;
                } else if is_at(&path, &["plist"]) && tag == "dict" {
                    dict_seen = true;
                } else if is_at(&path, &["plist", "dict", "array"]) && tag == "string" {
                    current_entry = Some(String::new());
                } else if is_at(&path, &["plist", "dict"]) {
                    collect_dict_child(
                        &tag,
                        e,
                        &mut base_curve_attrs,
                        &mut start_point_attrs,
                        &mut reduced_curve_attrs,
                    )?;
                }

                path.push(tag);
            }
            Ok(Event::Empty(ref e)) => {
                let tag = element_name(e)?;

                if path.is_empty() {
                    // <plist/> ohne Inhalt: Wurzel ok, aber <dict> fehlt später
                    check_root(&tag, e, root_seen)?;
                    root_seen = true;
                } else if is_at(&path, &["plist", "dict", "array"]) && tag == "string" {
                    point_entries.push(String::new());
                } else if is_at(&path, &["plist", "dict"]) {
                    collect_dict_child(
                        &tag,
                        e,
                        &mut base_curve_attrs,
                        &mut start_point_attrs,
                        &mut reduced_curve_attrs,
                    )?;
                }
            }
            Ok(Event::Text(e)) => {
                if let Some(entry) = current_entry.as_mut() {
                    let text = e
                        .xml_content()
                        .map_err(|err| StorageError::format("array/string", err.to_string()))?;
                    entry.push_str(&text);
                }
            }
            Ok(Event::GeneralRef(ref e)) => {
                if let Some(entry) = current_entry.as_mut() {
                    entry.push_str(&resolve_reference(e)?);
                }
            }
            Ok(Event::CData(ref e)) => {
                if let Some(entry) = current_entry.as_mut() {
                    let text = std::str::from_utf8(e)
                        .map_err(|err| StorageError::format("array/string", err.to_string()))?;
                    entry.push_str(text);
                }
            }
            Ok(Event::End(ref e)) => {
                let name = e.name();
                let tag = std::str::from_utf8(name.as_ref())
                    .map_err(|err| StorageError::format("XML", err.to_string()))?;
                if tag == "string" && is_at(&path, &["plist", "dict", "array", "string"]) {
                    point_entries.push(current_entry.take().unwrap_or_default());
                }
                path.pop();
            }
            Ok(Event::Eof) => break,
            Err(err) => {
                return Err(StorageError::format(
                    format!("XML (Byte {})", reader.buffer_position()),
                    err.to_string(),
                ))
            }
            _ => {}
        }

        buffer.clear();
    }

    if !root_seen {
        return Err(StorageError::format("plist", "Wurzelelement fehlt"));
    }
    if !path.is_empty() {
        return Err(StorageError::format(
            path.join("/"),
            "Dokument endet vor dem schliessenden Tag",
        ));
    }
    if !dict_seen {
        return Err(StorageError::format("plist/dict", "Element fehlt"));
    }

    let base_curve_attrs =
        base_curve_attrs.ok_or_else(|| StorageError::format("base-curve", "Element fehlt"))?;
    let start_point_attrs =
        start_point_attrs.ok_or_else(|| StorageError::format("startPoint", "Element fehlt"))?;

    let base_source = AttributeSource::new("base-curve", &base_curve_attrs);
    let color = Argb::from_hex(base_source.require("color")?)
        .map_err(|e| e.located("base-curve@color"))?;

    let start_source = AttributeSource::new("startPoint", &start_point_attrs);
    let start_point = DVec2::new(
        parse_decimal(start_source.require("x")?).map_err(|e| e.located("startPoint@x"))?,
        parse_decimal(start_source.require("y")?).map_err(|e| e.located("startPoint@y"))?,
    );

    if point_entries.is_empty() {
        return Err(StorageError::format(
            "array",
            "Basis-Kurve enthaelt keine Punkte",
        ));
    }

    let mut base_curve = BaseCurve::new(color);
    base_curve.points.reserve(point_entries.len());
    for (index, entry) in point_entries.iter().enumerate() {
        let point = decode_offset(entry, start_point)
            .map_err(|e| e.within(&format!("array/string[{index}]")))?;
        base_curve.points.push(point);
    }

    let mut reduced_curves = Vec::with_capacity(reduced_curve_attrs.len());
    for (index, attributes) in reduced_curve_attrs.iter().enumerate() {
        let location = format!("reduced-curve[{index}]");
        reduced_curves.push(build_reduced_curve(&location, attributes, registry)?);
    }

    Ok(CurveDocument {
        base_curve,
        reduced_curves,
    })
}

/// Erzeugt den Reducer über die Registry und lässt ihn seine Attribute lesen.
fn build_reduced_curve(
    location: &str,
    attributes: &[(String, String)],
    registry: &ReducerRegistry,
) -> Result<ReducedCurve, StorageError> {
    let source = AttributeSource::new(location, attributes);
    let method = source.require("method")?;
    let record = registry.find_by_identifier(method)?;

    let mut reducer = record.factory.produce();
    reducer.read_attributes(&source)?;

    let degree = source.parse_int::<u32>("degree")?;
    let color = Argb::from_hex(source.require("color")?)
        .map_err(|e| e.located(format!("{location}@color")))?;

    Ok(ReducedCurve::new(reducer, degree, color))
}

fn collect_dict_child(
    tag: &str,
    element: &BytesStart<'_>,
    base_curve_attrs: &mut Option<RawAttributes>,
    start_point_attrs: &mut Option<RawAttributes>,
    reduced_curve_attrs: &mut Vec<RawAttributes>,
) -> Result<(), StorageError> {
    match tag {
        "base-curve" => *base_curve_attrs = Some(collect_attributes(element, tag)?),
        "startPoint" => *start_point_attrs = Some(collect_attributes(element, tag)?),
        "reduced-curve" => reduced_curve_attrs.push(collect_attributes(
            element,
            &format!("reduced-curve[{}]", reduced_curve_attrs.len()),
        )?),
        other => log::debug!("Unbekanntes Element <{}> wird ignoriert", other),
    }
    Ok(())
}

fn check_root(tag: &str, element: &BytesStart<'_>, root_seen: bool) -> Result<(), StorageError> {
    if root_seen {
        return Err(StorageError::format(tag, "Mehr als ein Wurzelelement"));
    }
    if tag != "plist" {
        return Err(StorageError::format(
            tag,
            "Wurzelelement muss <plist> sein",
        ));
    }

    let attributes = collect_attributes(element, "plist")?;
    let version = AttributeSource::new("plist", &attributes).require("version")?;
    if version != FORMAT_VERSION {
        return Err(StorageError::format(
            "plist@version",
            format!("Nicht unterstuetzte Version '{version}'"),
        ));
    }
    Ok(())
}

/// Löst Zeichen- (`&#45;`) und vordefinierte Entity-Referenzen (`&amp;`) auf.
fn resolve_reference(reference: &BytesRef<'_>) -> Result<String, StorageError> {
    let resolved = reference
        .resolve_char_ref()
        .map_err(|err| StorageError::format("array/string", err.to_string()))?;
    if let Some(ch) = resolved {
        return Ok(ch.to_string());
    }

    let name = std::str::from_utf8(reference)
        .map_err(|err| StorageError::format("array/string", err.to_string()))?;
    quick_xml::escape::resolve_predefined_entity(name)
        .map(str::to_string)
        .ok_or_else(|| {
            StorageError::format("array/string", format!("Unbekannte Entity '&{name};'"))
        })
}

fn element_name(element: &BytesStart<'_>) -> Result<String, StorageError> {
    let name = element.name();
    std::str::from_utf8(name.as_ref())
        .map(str::to_string)
        .map_err(|err| StorageError::format("XML", err.to_string()))
}

fn collect_attributes(
    element: &BytesStart<'_>,
    location: &str,
) -> Result<RawAttributes, StorageError> {
    let mut attributes = Vec::new();
    for attr in element.attributes() {
        let attr = attr.map_err(|err| StorageError::format(location, err.to_string()))?;
        let key = std::str::from_utf8(attr.key.as_ref())
            .map_err(|err| StorageError::format(location, err.to_string()))?
            .to_string();
        let value = attr
            .unescape_value()
            .map_err(|err| StorageError::format(format!("{location}@{key}"), err.to_string()))?
            .into_owned();
        attributes.push((key, value));
    }
    Ok(attributes)
}

fn is_at(path: &[String], expected: &[&str]) -> bool {
    path.len() == expected.len() && path.iter().zip(expected).all(|(a, b)| a.as_str() == *b)
}
