//! Profile-text normalization utilities.

use regex::Regex;
use std::sync::LazyLock;

use super::IndexedLine;

/// Strips terminal escape sequences and unifies line endings.
///
/// Pasted text occasionally carries ANSI color codes or a byte-order mark
/// from the source page; neither should end up in a label.
pub fn normalize_profile_text(raw: &str) -> String {
    // SAFETY: These regexes are compile-time constants and are validated by tests.
    static ANSI_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"\x1b\[[0-9;?]*[ -/]*[@-~]").expect("static regex must compile"));

    let stripped = ANSI_RE.replace_all(raw.trim_start_matches('\u{feff}'), "");
    stripped.replace("\r\n", "\n").replace('\r', "\n")
}

/// Splits normalized text into trimmed, non-empty lines, keeping the
/// original line index for diagnostics.
pub fn to_indexed_lines(normalized: &str) -> Vec<IndexedLine> {
    normalized
        .lines()
        .enumerate()
        .filter_map(|(index, text)| {
            let trimmed = text.trim();
            (!trimmed.is_empty()).then(|| IndexedLine {
                index,
                text: trimmed.to_string(),
            })
        })
        .collect()
}
