//! Core record types for player profile synchronization.
//!
//! This crate defines the data model shared by the profile parser and the
//! form synchronization engine:
//!
//! - [`PlayerRecord`] — the structured profile: basic info, appearance,
//!   stats, skills, COM playing styles, positions and playing style.
//! - [`StatValue`] — a stat that is numeric when its raw token is a number.
//! - [`Tier`] — position priority (`A` primary, `B` secondary, `C` unused).
//! - [`keys`] — the record labels the engine reads.
//!
//! Validation ([`validate_record`]) catches structural problems such as
//! empty or untrimmed keys in records that did not come from the parser.
//!
//! # Example
//!
//! ```
//! use profile_sync_core::*;
//!
//! let mut record = PlayerRecord::default();
//! record.basic.insert(keys::NAME.into(), "L. Messi".into());
//! record.stats.insert("Offensive Awareness".into(), StatValue::Number(85.0));
//! record.skills.insert("Long Range Drive".into(), true);
//! record.positions.insert("RWF".into(), Tier::A);
//!
//! assert_eq!(record.basic_value(keys::NAME), Some("L. Messi"));
//! assert_eq!(record.stats["Offensive Awareness"].as_number(), Some(85.0));
//! assert!(validate_record(&record).is_empty());
//! ```

mod types;
mod validate;

pub use types::*;
pub use validate::{ValidationError, validate_record};
