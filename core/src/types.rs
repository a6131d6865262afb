//! Record type definitions for player profile modeling.
//!
//! This module defines the data model produced by the profile parser and
//! consumed by the synchronization engine. The types are designed for
//! serialization with [`serde`] and round-trip through JSON using the
//! camelCase field names of the pasted-profile format.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Labels the synchronization engine reads from [`PlayerRecord::basic`]
/// and [`PlayerRecord::appearance`].
pub mod keys {
    /// Player name (`basic`).
    pub const NAME: &str = "Name";
    /// Shirt name shared by the club and national kits (`basic`).
    pub const SHIRT_NAME: &str = "Shirt Name";
    /// Age (`basic`).
    pub const AGE: &str = "Age";
    /// Stronger foot (`basic`).
    pub const FOOT: &str = "Foot";
    /// Reputation (`basic`).
    pub const REPUTATION: &str = "Reputation";
    /// Nationality (`basic`).
    pub const NATIONALITY: &str = "Nationality";
    /// Registered position code (`basic`).
    pub const POSITION: &str = "Position";
    /// Comma-separated position list; routed to [`PlayerRecord::positions`].
    ///
    /// [`PlayerRecord::positions`]: crate::PlayerRecord::positions
    pub const POSITIONS: &str = "Positions";
    /// Height with unit suffix (`appearance`).
    pub const HEIGHT: &str = "Height";
    /// Weight with unit suffix (`appearance`).
    pub const WEIGHT: &str = "Weight";
}

/// Position priority tier.
///
/// Parsed positions are either primary ([`Tier::A`]) or secondary
/// ([`Tier::B`]). [`Tier::C`] is the form's default for positions the
/// record does not mention.
///
/// # Examples
///
/// ```
/// use profile_sync_core::Tier;
///
/// assert_eq!(Tier::A.symbol(), "A");
/// assert_eq!(Tier::from_marked(true), Tier::A);
/// assert_eq!(Tier::from_marked(false), Tier::B);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    /// Primary position.
    A,
    /// Secondary position.
    B,
    /// Unused position (form default).
    C,
}

impl Tier {
    /// Returns the tier symbol used as the radio option value.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
        }
    }

    /// Maps a marker-prefixed entry to `A` and an unmarked one to `B`.
    pub fn from_marked(marked: bool) -> Self {
        if marked { Self::A } else { Self::B }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A stat value: numeric when the raw token is a number, raw text otherwise.
///
/// Serialized untagged, so JSON shows either a number or a string.
///
/// # Examples
///
/// ```
/// use profile_sync_core::StatValue;
///
/// assert_eq!(StatValue::Number(85.0).to_string(), "85");
/// assert_eq!(StatValue::Number(1.5).to_string(), "1.5");
/// assert_eq!(StatValue::Text("RWF".into()).to_string(), "RWF");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Number(f64),
    Text(String),
}

impl StatValue {
    /// Returns the numeric value, if any.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Display for StatValue {
    /// Integral numbers render without a fractional part (`85`, not `85.0`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{}", *n as i64),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for StatValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for StatValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Structured player profile record.
///
/// Produced fresh for every synchronization run and not mutated once the
/// parser returns it. Every map key is trimmed and non-empty.
///
/// # Examples
///
/// ```
/// use profile_sync_core::{PlayerRecord, Tier, keys};
///
/// let mut record = PlayerRecord::default();
/// record.basic.insert(keys::NAME.into(), "L. Messi".into());
/// record.positions.insert("RWF".into(), Tier::A);
///
/// assert_eq!(record.basic_value(keys::NAME), Some("L. Messi"));
/// assert_eq!(record.tier_of("RWF"), Some(Tier::A));
/// assert!(record.basic_value(keys::AGE).is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerRecord {
    /// Default-section `label: value` pairs.
    pub basic: BTreeMap<String, String>,
    /// Appearance values with their unit suffixes still attached.
    pub appearance: BTreeMap<String, String>,
    /// Ability stats.
    pub stats: BTreeMap<String, StatValue>,
    /// Card player skills that are present.
    pub skills: BTreeMap<String, bool>,
    /// COM playing styles that are present.
    pub com_playing_styles: BTreeMap<String, bool>,
    /// Position code → tier.
    pub positions: BTreeMap<String, Tier>,
    /// Playing style, if the section had any line.
    pub playing_style: Option<String>,
}

impl PlayerRecord {
    /// Looks up a default-section value.
    pub fn basic_value(&self, key: &str) -> Option<&str> {
        self.basic.get(key).map(String::as_str)
    }

    /// Looks up an appearance value.
    pub fn appearance_value(&self, key: &str) -> Option<&str> {
        self.appearance.get(key).map(String::as_str)
    }

    /// Returns the tier parsed for a position code.
    pub fn tier_of(&self, position: &str) -> Option<Tier> {
        self.positions.get(position).copied()
    }

    /// Iterates skill names whose flag is set.
    pub fn enabled_skills(&self) -> impl Iterator<Item = &str> {
        enabled(&self.skills)
    }

    /// Iterates COM playing style names whose flag is set.
    pub fn enabled_com_styles(&self) -> impl Iterator<Item = &str> {
        enabled(&self.com_playing_styles)
    }

    /// Returns `true` when no section produced any data.
    pub fn is_empty(&self) -> bool {
        self.basic.is_empty()
            && self.appearance.is_empty()
            && self.stats.is_empty()
            && self.skills.is_empty()
            && self.com_playing_styles.is_empty()
            && self.positions.is_empty()
            && self.playing_style.is_none()
    }
}

fn enabled(flags: &BTreeMap<String, bool>) -> impl Iterator<Item = &str> {
    flags
        .iter()
        .filter(|(_, set)| **set)
        .map(|(name, _)| name.as_str())
}

/// Parses the leading integer of a value such as `"180cm"` or `" 75 kg"`.
///
/// Mirrors the usual "read digits until the first non-digit" integer
/// parse: leading whitespace and one sign are accepted, anything after the
/// digits is ignored, and a value without leading digits yields `None`.
///
/// # Examples
///
/// ```
/// use profile_sync_core::leading_integer;
///
/// assert_eq!(leading_integer("180cm"), Some(180));
/// assert_eq!(leading_integer(" 75 kg"), Some(75));
/// assert_eq!(leading_integer("-3x"), Some(-3));
/// assert_eq!(leading_integer("cm180"), None);
/// ```
pub fn leading_integer(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let magnitude: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serializes_camel_case_sections() {
        let mut record = PlayerRecord::default();
        record.com_playing_styles.insert("Trickster".into(), true);
        record.playing_style = Some("Creative Playmaker".into());

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["comPlayingStyles"]["Trickster"], true);
        assert_eq!(json["playingStyle"], "Creative Playmaker");
    }

    #[test]
    fn test_stat_value_untagged_json() {
        let mut record = PlayerRecord::default();
        record.stats.insert("Speed".into(), StatValue::Number(85.0));
        record.stats.insert("Form".into(), StatValue::Text("B".into()));

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["stats"]["Speed"], 85.0);
        assert_eq!(json["stats"]["Form"], "B");

        let back: PlayerRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_missing_sections_deserialize_to_defaults() {
        let record: PlayerRecord = serde_json::from_str(r#"{"basic":{"Name":"X"}}"#).unwrap();
        assert_eq!(record.basic_value("Name"), Some("X"));
        assert!(record.stats.is_empty());
        assert!(record.playing_style.is_none());
    }

    #[test]
    fn test_tier_serializes_as_symbol() {
        assert_eq!(serde_json::to_string(&Tier::B).unwrap(), "\"B\"");
        assert_eq!(Tier::C.to_string(), "C");
    }

    #[test]
    fn test_enabled_skills_skip_false_flags() {
        let mut record = PlayerRecord::default();
        record.skills.insert("Heading".into(), true);
        record.skills.insert("Scissors Feint".into(), false);

        let skills: Vec<_> = record.enabled_skills().collect();
        assert_eq!(skills, vec!["Heading"]);
    }

    #[test]
    fn test_stat_display_large_and_negative() {
        assert_eq!(StatValue::Number(-4.0).to_string(), "-4");
        assert_eq!(StatValue::Number(0.25).to_string(), "0.25");
    }

    #[test]
    fn test_leading_integer_rejects_empty() {
        assert_eq!(leading_integer(""), None);
        assert_eq!(leading_integer("  "), None);
        assert_eq!(leading_integer("+"), None);
        assert_eq!(leading_integer("007kg"), Some(7));
    }
}
