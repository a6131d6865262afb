//! Tolerant parsing of pasted player profile text.
//!
//! This crate turns the loosely formatted text copied from a player card
//! page into a structured [`PlayerRecord`]. Parsing never fails: malformed
//! lines are skipped, and what was skipped is available as diagnostics.
//!
//! # Main entry points
//!
//! - [`parse_record`] — parse profile text into a record.
//! - [`parse_record_with_report`] — same, with diagnostics and warnings.
//!
//! # Example
//!
//! ```
//! use profile_sync_core::{StatValue, Tier};
//! use profile_sync_parser::parse_record;
//!
//! let text = "\
//! Name: L. Messi
//! Positions: *RWF,CF,AMF
//! STATS:
//! Offensive Awareness: 85
//! CARD PLAYER SKILL:
//! *Long Range Drive
//! ";
//!
//! let record = parse_record(text);
//! assert_eq!(record.basic_value("Name"), Some("L. Messi"));
//! assert_eq!(record.tier_of("RWF"), Some(Tier::A));
//! assert_eq!(record.stats["Offensive Awareness"], StatValue::Number(85.0));
//! assert_eq!(record.skills.get("Long Range Drive"), Some(&true));
//! ```
//!
//! [`PlayerRecord`]: profile_sync_core::PlayerRecord

pub mod parser;

use profile_sync_core::PlayerRecord;
use serde::Serialize;

use parser::{ParseDiagnostics, RecordParser};

/// Record plus everything the parser noticed while building it.
#[derive(Debug, Clone, Serialize)]
pub struct ParseRun {
    pub record: PlayerRecord,
    pub diagnostics: ParseDiagnostics,
    pub warnings: Vec<String>,
}

/// Parses profile text into a record.
///
/// # Examples
///
/// ```
/// use profile_sync_parser::parse_record;
///
/// let record = parse_record("Name: A\nnot a field\nAge: 30");
/// assert_eq!(record.basic.len(), 2);
/// ```
pub fn parse_record(text: &str) -> PlayerRecord {
    RecordParser::new(text).parse()
}

/// Parses profile text and keeps the diagnostics.
///
/// # Examples
///
/// ```
/// use profile_sync_parser::parse_record_with_report;
///
/// let run = parse_record_with_report("Name: A\nnot a field");
/// assert_eq!(run.diagnostics.skipped_lines.len(), 1);
/// assert!(!run.warnings.is_empty());
/// ```
pub fn parse_record_with_report(text: &str) -> ParseRun {
    let mut parser = RecordParser::new(text);
    let record = parser.parse();
    ParseRun {
        record,
        diagnostics: parser.diagnostics().clone(),
        warnings: parser.warnings().to_vec(),
    }
}
