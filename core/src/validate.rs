//! Record validation.
//!
//! Checks the structural invariants of a [`PlayerRecord`]: every map key
//! is trimmed and non-empty, parsed positions carry only the `A`/`B`
//! tiers, and boolean sections hold only `true` flags. The parser always
//! produces records that pass; validation exists for records that were
//! hand-edited or deserialized from JSON.
//!
//! Value semantics (stat ranges, known nationalities) are not checked.
//!
//! # Examples
//!
//! ```
//! use profile_sync_core::*;
//!
//! let mut record = PlayerRecord::default();
//! record.basic.insert("Name".into(), "L. Messi".into());
//! assert!(validate_record(&record).is_empty());
//!
//! // Invalid: label with surrounding whitespace
//! record.stats.insert(" Speed".into(), StatValue::Number(90.0));
//! assert!(!validate_record(&record).is_empty());
//! ```

use std::collections::BTreeMap;

use thiserror::Error;

use crate::{PlayerRecord, Tier};

/// Record validation errors.
///
/// Each variant names the section and key where the problem was found.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A key is empty or whitespace-only.
    #[error("empty key in section {section}")]
    EmptyKey { section: &'static str },
    /// A key has leading or trailing whitespace.
    #[error("untrimmed key in section {section}: {key:?}")]
    UntrimmedKey { section: &'static str, key: String },
    /// A position carries a tier the parser never emits.
    #[error("position {0} has unexpected tier C")]
    UnexpectedTier(String),
    /// A boolean section stores an explicit `false`.
    #[error("flag {key} in section {section} is false; absent entries mean unset")]
    FalseFlag { section: &'static str, key: String },
    /// The playing style is present but blank.
    #[error("playing style cannot be blank")]
    BlankPlayingStyle,
}

/// Validates a player record.
///
/// Returns every problem found, in section order.
///
/// # Examples
///
/// ```
/// use profile_sync_core::*;
///
/// let mut record = PlayerRecord::default();
/// record.positions.insert("CF".into(), Tier::C);
/// let errors = validate_record(&record);
/// assert_eq!(errors, vec![ValidationError::UnexpectedTier("CF".into())]);
/// ```
pub fn validate_record(record: &PlayerRecord) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    check_keys(&mut errors, "basic", record.basic.keys());
    check_keys(&mut errors, "appearance", record.appearance.keys());
    check_keys(&mut errors, "stats", record.stats.keys());
    check_flags(&mut errors, "skills", &record.skills);
    check_flags(&mut errors, "comPlayingStyles", &record.com_playing_styles);
    check_keys(&mut errors, "positions", record.positions.keys());

    for (position, tier) in &record.positions {
        if *tier == Tier::C {
            errors.push(ValidationError::UnexpectedTier(position.clone()));
        }
    }

    if record
        .playing_style
        .as_deref()
        .is_some_and(|style| style.trim().is_empty())
    {
        errors.push(ValidationError::BlankPlayingStyle);
    }

    errors
}

fn check_keys<'a>(
    errors: &mut Vec<ValidationError>,
    section: &'static str,
    keys: impl Iterator<Item = &'a String>,
) {
    for key in keys {
        if key.trim().is_empty() {
            errors.push(ValidationError::EmptyKey { section });
        } else if key.trim() != key {
            errors.push(ValidationError::UntrimmedKey {
                section,
                key: key.clone(),
            });
        }
    }
}

fn check_flags(
    errors: &mut Vec<ValidationError>,
    section: &'static str,
    flags: &BTreeMap<String, bool>,
) {
    check_keys(errors, section, flags.keys());
    for (key, set) in flags {
        if !set {
            errors.push(ValidationError::FalseFlag {
                section,
                key: key.clone(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StatValue;

    #[test]
    fn test_empty_record_is_valid() {
        assert!(validate_record(&PlayerRecord::default()).is_empty());
    }

    #[test]
    fn test_empty_key_detected() {
        let mut record = PlayerRecord::default();
        record.appearance.insert("  ".into(), "180cm".into());
        assert_eq!(
            validate_record(&record),
            vec![ValidationError::EmptyKey {
                section: "appearance"
            }]
        );
    }

    #[test]
    fn test_untrimmed_stat_key_detected() {
        let mut record = PlayerRecord::default();
        record.stats.insert("Speed ".into(), StatValue::Number(1.0));
        let errors = validate_record(&record);
        assert!(matches!(
            errors.as_slice(),
            [ValidationError::UntrimmedKey { section: "stats", .. }]
        ));
    }

    #[test]
    fn test_false_flag_detected() {
        let mut record = PlayerRecord::default();
        record.com_playing_styles.insert("Trickster".into(), false);
        let errors = validate_record(&record);
        assert!(errors.iter().any(|e| matches!(
            e,
            ValidationError::FalseFlag {
                section: "comPlayingStyles",
                ..
            }
        )));
    }

    #[test]
    fn test_blank_playing_style_detected() {
        let record = PlayerRecord {
            playing_style: Some("   ".into()),
            ..PlayerRecord::default()
        };
        assert_eq!(
            validate_record(&record),
            vec![ValidationError::BlankPlayingStyle]
        );
    }
}
