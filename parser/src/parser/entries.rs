//! Per-line entry parsing shared by the section handlers.

use profile_sync_core::{StatValue, Tier};

/// Marker prefix for primary positions and present skills/styles.
pub const MARKER: char = '*';

/// Why a line inside a known section contributed no data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The line has no colon separator.
    MissingColon,
    /// The text before the first colon is blank.
    EmptyLabel,
    /// A skills/styles line without the marker prefix.
    UnmarkedEntry,
    /// A marker with nothing after it, or an empty list entry.
    EmptyEntry,
}

/// Splits `label: value` on the first colon, trimming both sides.
///
/// The value may be empty; the label may not.
pub fn split_label_value(line: &str) -> Result<(&str, &str), SkipReason> {
    let (label, value) = line.split_once(':').ok_or(SkipReason::MissingColon)?;
    let label = label.trim();
    if label.is_empty() {
        return Err(SkipReason::EmptyLabel);
    }
    Ok((label, value.trim()))
}

/// Parses a comma-separated position list such as `*RWF, CF,AMF`.
///
/// Entries are trimmed independently. A leading marker makes the entry
/// primary ([`Tier::A`]), otherwise it is secondary ([`Tier::B`]). Empty
/// entries (`"RWF,,CF"` or a lone `*`) are dropped.
pub fn parse_positions(value: &str) -> Vec<(String, Tier)> {
    value
        .split(',')
        .filter_map(|entry| {
            let entry = entry.trim();
            let (marked, code) = match entry.strip_prefix(MARKER) {
                Some(rest) => (true, rest.trim()),
                None => (false, entry),
            };
            (!code.is_empty()).then(|| (code.to_string(), Tier::from_marked(marked)))
        })
        .collect()
}

/// Extracts the name from a marker-prefixed skills/styles line.
pub fn parse_marked_entry(line: &str) -> Result<&str, SkipReason> {
    let rest = line.strip_prefix(MARKER).ok_or(SkipReason::UnmarkedEntry)?;
    let name = rest.trim();
    if name.is_empty() {
        return Err(SkipReason::EmptyEntry);
    }
    Ok(name)
}

/// Coerces a raw stat token to a number when the whole trimmed token is one.
///
/// Leading zeros, a sign, a decimal point and an exponent are accepted.
/// Partial numbers (`"85+"`), non-finite spellings (`"inf"`, `"NaN"`) and
/// empty values stay text.
pub fn coerce_stat(raw: &str) -> StatValue {
    let trimmed = raw.trim();
    if looks_numeric(trimmed) {
        match trimmed.parse::<f64>() {
            Ok(number) if number.is_finite() => return StatValue::Number(number),
            _ => {}
        }
    }
    StatValue::Text(trimmed.to_string())
}

fn looks_numeric(token: &str) -> bool {
    !token.is_empty()
        && token
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '.' | '+' | '-' | 'e' | 'E'))
        && token.chars().any(|ch| ch.is_ascii_digit())
}
