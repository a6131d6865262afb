//! Per-field outcome reporting.
//!
//! A synchronization run never stops at a missing label or option. Each
//! attempted field gets a [`FieldOutcome`], each pass a [`PassSummary`],
//! and the whole run a [`SyncReport`] the caller can print or serialize.

use chrono::Utc;
use serde::Serialize;

/// The five synchronization passes, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PassKind {
    Info,
    Position,
    Ability,
    Skills,
    ComStyles,
}

impl PassKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Position => "position",
            Self::Ability => "ability",
            Self::Skills => "skills",
            Self::ComStyles => "com_styles",
        }
    }
}

impl std::fmt::Display for PassKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of writing one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FieldStatus {
    /// The requested value was written.
    Applied,
    /// The requested option was not offered; the fallback was selected.
    AppliedFallback { option: String },
    /// The record has no value for this field; nothing was written.
    NoValue,
    /// The label, control or option could not be found.
    NotFound,
}

impl FieldStatus {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied | Self::AppliedFallback { .. })
    }
}

/// Outcome of one field in one pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldOutcome {
    pub pass: PassKind,
    /// Form label (or record key, for bulk-cleared sections) of the field.
    pub field: String,
    #[serde(flatten)]
    pub status: FieldStatus,
}

/// Summary of one pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PassSummary {
    pub pass: PassKind,
    /// Whether the section heading and its region were found.
    pub region_found: bool,
    /// Controls changed by the bulk default step, if the pass has one.
    pub bulk_changed: usize,
}

/// Everything a synchronization run did.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SyncReport {
    /// RFC 3339 start time.
    pub started_at: String,
    pub passes: Vec<PassSummary>,
    pub fields: Vec<FieldOutcome>,
}

impl SyncReport {
    pub fn new() -> Self {
        Self {
            started_at: Utc::now().to_rfc3339(),
            passes: Vec::new(),
            fields: Vec::new(),
        }
    }

    pub(crate) fn record(&mut self, pass: PassKind, field: &str, status: FieldStatus) {
        self.fields.push(FieldOutcome {
            pass,
            field: field.to_string(),
            status,
        });
    }

    pub(crate) fn finish_pass(&mut self, pass: PassKind, region_found: bool, bulk_changed: usize) {
        self.passes.push(PassSummary {
            pass,
            region_found,
            bulk_changed,
        });
    }

    /// Fields written, fallbacks included.
    pub fn applied_count(&self) -> usize {
        self.fields
            .iter()
            .filter(|outcome| outcome.status.is_applied())
            .count()
    }

    /// Fields whose label, control or option was missing.
    pub fn failures(&self) -> impl Iterator<Item = &FieldOutcome> {
        self.fields
            .iter()
            .filter(|outcome| outcome.status == FieldStatus::NotFound)
    }

    /// Fields where a fallback option was selected.
    pub fn fallbacks(&self) -> impl Iterator<Item = &FieldOutcome> {
        self.fields
            .iter()
            .filter(|outcome| matches!(outcome.status, FieldStatus::AppliedFallback { .. }))
    }

    /// Passes whose section heading was not found.
    pub fn missing_sections(&self) -> Vec<PassKind> {
        self.passes
            .iter()
            .filter(|summary| !summary.region_found)
            .map(|summary| summary.pass)
            .collect()
    }

    pub fn outcome(&self, pass: PassKind, field: &str) -> Option<&FieldStatus> {
        self.fields
            .iter()
            .find(|outcome| outcome.pass == pass && outcome.field == field)
            .map(|outcome| &outcome.status)
    }

    pub fn pass(&self, pass: PassKind) -> Option<&PassSummary> {
        self.passes.iter().find(|summary| summary.pass == pass)
    }
}

impl Default for SyncReport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SyncReport {
        let mut report = SyncReport::new();
        report.record(PassKind::Info, "Age", FieldStatus::Applied);
        report.record(
            PassKind::Info,
            "Nationality",
            FieldStatus::AppliedFallback {
                option: "Others".to_string(),
            },
        );
        report.record(PassKind::Info, "Height", FieldStatus::NoValue);
        report.record(PassKind::Ability, "Speed", FieldStatus::NotFound);
        report.finish_pass(PassKind::Info, true, 0);
        report.finish_pass(PassKind::Skills, false, 0);
        report
    }

    #[test]
    fn test_counts() {
        let report = sample();
        assert_eq!(report.applied_count(), 2);
        assert_eq!(report.failures().count(), 1);
        assert_eq!(report.fallbacks().count(), 1);
        assert_eq!(report.missing_sections(), vec![PassKind::Skills]);
    }

    #[test]
    fn test_outcome_lookup() {
        let report = sample();
        assert_eq!(
            report.outcome(PassKind::Info, "Height"),
            Some(&FieldStatus::NoValue)
        );
        assert!(report.outcome(PassKind::Ability, "Height").is_none());
    }

    #[test]
    fn test_serializes_flat_status() {
        let report = sample();
        let json = serde_json::to_value(&report).unwrap();
        let fallback = &json["fields"][1];
        assert_eq!(fallback["pass"], "info");
        assert_eq!(fallback["status"], "applied_fallback");
        assert_eq!(fallback["option"], "Others");
        assert!(json["started_at"].as_str().is_some());
    }
}
