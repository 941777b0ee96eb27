//! Text-Kodierung von 2D-Punkten (`{x,y}`) und Dezimalzahlen.
//!
//! Das Format ist kulturunabhängig: `.` als Dezimaltrenner, keine
//! Tausendertrenner, keine Exponentenschreibweise. Geschrieben wird immer die
//! kürzeste Darstellung, die beim Parsen exakt denselben `f64` ergibt.

use super::StorageError;
use glam::DVec2;

/// Formatiert eine Koordinate als kürzeste, rundreisefähige Dezimalzahl.
///
/// `-0.0` wird als `0` geschrieben.
pub fn format_decimal(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    // Display von f64 liefert nie Exponenten und immer die kürzeste Rundreise-Form
    format!("{value}")
}

/// Parst eine Dezimalzahl im Format von [`format_decimal`].
///
/// Akzeptiert optionales führendes `-`, Ziffern und höchstens einen `.`.
/// Exponenten, `inf`/`NaN` und lokalisierte Formate werden abgelehnt.
pub fn parse_decimal(text: &str) -> Result<f64, StorageError> {
    let trimmed = text.trim();
    let digits = trimmed.strip_prefix('-').unwrap_or(trimmed);

    let mut digit_count = 0usize;
    let mut dot_count = 0usize;
    for ch in digits.chars() {
        match ch {
            '0'..='9' => digit_count += 1,
            '.' => dot_count += 1,
            _ => {
                return Err(StorageError::format(
                    "decimal",
                    format!("Ungueltiges Zeichen '{ch}' in '{}'", truncate_for_error(trimmed)),
                ))
            }
        }
    }
    if digit_count == 0 || dot_count > 1 {
        return Err(StorageError::format(
            "decimal",
            format!("'{}' ist keine Dezimalzahl", truncate_for_error(trimmed)),
        ));
    }

    let value = trimmed.parse::<f64>().map_err(|e| {
        StorageError::format("decimal", format!("'{}': {e}", truncate_for_error(trimmed)))
    })?;
    if !value.is_finite() {
        return Err(StorageError::format(
            "decimal",
            format!("'{}' ist nicht endlich", truncate_for_error(trimmed)),
        ));
    }
    Ok(value)
}

/// Formatiert einen Punkt als `{x,y}`.
pub fn format_point(point: DVec2) -> String {
    format!("{{{},{}}}", format_decimal(point.x), format_decimal(point.y))
}

/// Parst einen Punkt im Format `{x,y}`.
pub fn parse_point(text: &str) -> Result<DVec2, StorageError> {
    let trimmed = text.trim();
    let inner = trimmed
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
        .ok_or_else(|| {
            StorageError::format(
                "point",
                format!(
                    "'{}' ist nicht in geschweifte Klammern gefasst",
                    truncate_for_error(trimmed)
                ),
            )
        })?;

    let fields: Vec<&str> = inner.split(',').collect();
    if fields.len() != 2 {
        return Err(StorageError::format(
            "point",
            format!(
                "'{}' muss genau ein Komma enthalten",
                truncate_for_error(trimmed)
            ),
        ));
    }

    let x = parse_decimal(fields[0]).map_err(|e| e.located("x"))?;
    let y = parse_decimal(fields[1]).map_err(|e| e.located("y"))?;
    Ok(DVec2::new(x, y))
}

/// Anzahl benachbarter `f64`-Offsets, die je Richtung geprüft werden.
const OFFSET_SEARCH_STEPS: usize = 4;

/// Kodiert `point` relativ zu `start` mit gespiegelter Y-Achse.
///
/// Der Startpunkt selbst ergibt immer `{0,0}`. Geschrieben wird der Offset,
/// für den `start + offset` wieder exakt `point` ergibt. Liegt `point`
/// feiner als das Raster von `start`, gibt es keinen solchen Offset; dann
/// wird die Differenz selbst geschrieben und der nächstgelegene Wert geladen.
pub fn encode_offset(point: DVec2, start: DVec2) -> Result<String, StorageError> {
    if !point.is_finite() || !start.is_finite() {
        return Err(StorageError::Invariant(format!(
            "Punkt {point} bzw. Startpunkt {start} ist nicht endlich"
        )));
    }
    let delta = DVec2::new(
        exact_delta(point.x, start.x),
        exact_delta(point.y, start.y),
    );
    if !delta.is_finite() {
        return Err(StorageError::Invariant(format!(
            "Offset von {point} zum Startpunkt {start} ist nicht endlich"
        )));
    }
    // 0.0 - y statt -y: kein "-0" für waagerechte Offsets
    Ok(format_point(DVec2::new(delta.x, 0.0 - delta.y)))
}

/// Umkehrung von [`encode_offset`]: Y-Spiegelung zurücknehmen, Startpunkt addieren.
pub fn decode_offset(text: &str, start: DVec2) -> Result<DVec2, StorageError> {
    let offset = parse_point(text)?;
    let point = start + DVec2::new(offset.x, -offset.y);
    if !point.is_finite() {
        return Err(StorageError::format(
            "point",
            format!(
                "'{}' verlaesst relativ zum Startpunkt {start} den Wertebereich",
                truncate_for_error(text.trim())
            ),
        ));
    }
    Ok(point)
}

/// Sucht um `target - start` herum einen Offset mit `start + offset == target`.
fn exact_delta(target: f64, start: f64) -> f64 {
    let delta = target - start;
    if !delta.is_finite() || start + delta == target {
        return delta;
    }

    let mut below = delta;
    let mut above = delta;
    for _ in 0..OFFSET_SEARCH_STEPS {
        below = next_toward(below, f64::NEG_INFINITY);
        above = next_toward(above, f64::INFINITY);
        if start + below == target {
            return below;
        }
        if start + above == target {
            return above;
        }
    }
    delta
}

/// Nächster darstellbarer `f64` von `value` in Richtung `direction`.
fn next_toward(value: f64, direction: f64) -> f64 {
    if value == 0.0 {
        return if direction > 0.0 {
            f64::from_bits(1)
        } else {
            -f64::from_bits(1)
        };
    }
    let bits = value.to_bits();
    // Betrag wächst, wenn Vorzeichen und Richtung übereinstimmen
    if (value > 0.0) == (direction > 0.0) {
        f64::from_bits(bits + 1)
    } else {
        f64::from_bits(bits - 1)
    }
}

/// Kürzt einen String für Fehlermeldungen auf max. 40 Zeichen.
fn truncate_for_error(s: &str) -> &str {
    match s.char_indices().nth(40) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
