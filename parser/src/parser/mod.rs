//! Section-based parser for pasted player profiles.
//!
//! Profiles are copied from a card page as plain text: a block of
//! `Label: value` lines, followed by sections introduced by fixed headers.
//!
//! ```text
//! Name: L. Messi
//! Positions: *RWF,CF,AMF
//! APPEARANCE:
//! Height: 170cm
//! STATS:
//! Offensive Awareness: 85
//! CARD PLAYER SKILL:
//! *Long Range Drive
//! CARD STYLE COM:
//! *Trickster
//! PLAYING STYLE:
//! Creative Playmaker
//! ```
//!
//! There is no grammar to violate: a line that does not fit its section is
//! skipped and recorded in [`ParseDiagnostics`], never reported as an error.
//!
//! The primary entry point is [`RecordParser::new`] followed by
//! [`RecordParser::parse`], but most consumers should use the higher-level
//! [`parse_record`](crate::parse_record) function instead.

mod entries;
mod normalize;

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;
use tracing::debug;

use profile_sync_core::{PlayerRecord, keys};

pub use entries::{MARKER, SkipReason, coerce_stat, parse_positions};

/// Section a profile line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    /// Lines before any header.
    Basic,
    Appearance,
    Stats,
    Skills,
    ComPlayingStyles,
    PlayingStyle,
}

/// A line that contributed no data, with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedLine {
    /// Zero-based line index in the normalized input.
    pub index: usize,
    pub section: Section,
    pub text: String,
    pub reason: SkipReason,
}

/// Diagnostics for a single parse run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ParseDiagnostics {
    /// Non-empty lines seen, headers included.
    pub relevant_lines: usize,
    /// Lines that were a header or contributed data.
    pub recognized_lines: usize,
    /// Section headers in input order.
    pub headers: Vec<Section>,
    pub skipped_lines: Vec<SkippedLine>,
}

impl ParseDiagnostics {
    pub fn coverage(&self) -> f64 {
        if self.relevant_lines == 0 {
            return 0.0;
        }
        self.recognized_lines as f64 / self.relevant_lines as f64
    }
}

#[derive(Debug, Clone)]
pub(crate) struct IndexedLine {
    pub(crate) index: usize,
    pub(crate) text: String,
}

/// Section header patterns, tested in order.
static PATTERNS: LazyLock<SectionPatterns> = LazyLock::new(SectionPatterns::new);

struct SectionPatterns {
    headers: Vec<(Regex, Section)>,
}

impl SectionPatterns {
    fn new() -> Self {
        // All regexes here are compile-time constants. An expect() failure indicates
        // a programmer error in the pattern, not a runtime condition.
        let header = |name: &str| {
            Regex::new(&format!(r"(?i)^{name}\s*:$")).expect("static regex must compile")
        };
        Self {
            headers: vec![
                (header("appearance"), Section::Appearance),
                (header("stats"), Section::Stats),
                (header(r"card\s+player\s+skill"), Section::Skills),
                (header(r"card\s+style\s+com"), Section::ComPlayingStyles),
                (header(r"playing\s+style"), Section::PlayingStyle),
            ],
        }
    }

    fn detect(&self, trimmed: &str) -> Option<Section> {
        self.headers
            .iter()
            .find(|(pattern, _)| pattern.is_match(trimmed))
            .map(|(_, section)| *section)
    }
}

/// Parser for pasted profile text.
pub struct RecordParser {
    raw_text: String,
    warnings: Vec<String>,
    diagnostics: ParseDiagnostics,
}

impl RecordParser {
    /// Creates a new parser for the given profile text.
    pub fn new(raw_text: &str) -> Self {
        Self {
            raw_text: raw_text.to_string(),
            warnings: Vec::new(),
            diagnostics: ParseDiagnostics::default(),
        }
    }

    /// Parses the profile text into a record.
    ///
    /// Always returns a record; empty or unrecognizable input yields an
    /// empty one plus a warning.
    pub fn parse(&mut self) -> PlayerRecord {
        self.warnings.clear();
        self.diagnostics = ParseDiagnostics::default();

        let mut record = PlayerRecord::default();
        if self.raw_text.trim().is_empty() {
            self.warnings.push("Empty profile text".to_string());
            return record;
        }

        let normalized = normalize::normalize_profile_text(&self.raw_text);
        let lines = normalize::to_indexed_lines(&normalized);
        let mut section = Section::Basic;

        for line in &lines {
            self.diagnostics.relevant_lines += 1;

            if let Some(next) = PATTERNS.detect(&line.text) {
                self.diagnostics.headers.push(next);
                self.diagnostics.recognized_lines += 1;
                section = next;
                continue;
            }

            match Self::apply_line(&mut record, section, &line.text) {
                Ok(()) => self.diagnostics.recognized_lines += 1,
                Err(reason) => {
                    debug!(index = line.index, ?section, ?reason, "Skipped profile line");
                    self.diagnostics.skipped_lines.push(SkippedLine {
                        index: line.index,
                        section,
                        text: line.text.clone(),
                        reason,
                    });
                }
            }
        }

        if record.is_empty() {
            self.warnings
                .push("Profile text produced no record fields".to_string());
        }
        if !self.diagnostics.skipped_lines.is_empty() {
            self.warnings.push(format!(
                "Skipped {} of {} lines",
                self.diagnostics.skipped_lines.len(),
                self.diagnostics.relevant_lines
            ));
        }

        record
    }

    fn apply_line(
        record: &mut PlayerRecord,
        section: Section,
        line: &str,
    ) -> Result<(), SkipReason> {
        match section {
            Section::Basic => {
                let (label, value) = entries::split_label_value(line)?;
                if label == keys::POSITIONS {
                    let positions = entries::parse_positions(value);
                    if positions.is_empty() {
                        return Err(SkipReason::EmptyEntry);
                    }
                    record.positions.extend(positions);
                } else {
                    record.basic.insert(label.to_string(), value.to_string());
                }
            }
            Section::Appearance => {
                let (label, value) = entries::split_label_value(line)?;
                record
                    .appearance
                    .insert(label.to_string(), value.to_string());
            }
            Section::Stats => {
                let (label, value) = entries::split_label_value(line)?;
                record
                    .stats
                    .insert(label.to_string(), entries::coerce_stat(value));
            }
            Section::Skills => {
                let name = entries::parse_marked_entry(line)?;
                record.skills.insert(name.to_string(), true);
            }
            Section::ComPlayingStyles => {
                let name = entries::parse_marked_entry(line)?;
                record.com_playing_styles.insert(name.to_string(), true);
            }
            Section::PlayingStyle => {
                record.playing_style = Some(line.to_string());
            }
        }
        Ok(())
    }

    /// Returns warnings from the most recent parse call.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Returns diagnostics for the most recent parse call.
    pub fn diagnostics(&self) -> &ParseDiagnostics {
        &self.diagnostics
    }
}
