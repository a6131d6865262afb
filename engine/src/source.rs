//! Reading profile text and running a full fill.

use std::io::Read;

use profile_sync_core::validate_record;
use profile_sync_parser::{ParseRun, parse_record_with_report};
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::SyncConfig;
use crate::error::{Result, SyncError};
use crate::passes::synchronize;
use crate::report::SyncReport;
use crate::tree::ManagedHost;

/// Where profile text comes from (the clipboard, a file, stdin).
pub trait TextSource {
    fn read_text(&mut self) -> std::io::Result<String>;
}

impl TextSource for &str {
    fn read_text(&mut self) -> std::io::Result<String> {
        Ok(self.to_string())
    }
}

impl TextSource for String {
    fn read_text(&mut self) -> std::io::Result<String> {
        Ok(self.clone())
    }
}

/// Reads the whole of an [`std::io::Read`] as profile text.
pub struct ReaderSource<R: Read> {
    reader: R,
}

impl<R: Read> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: Read> TextSource for ReaderSource<R> {
    fn read_text(&mut self) -> std::io::Result<String> {
        let mut text = String::new();
        self.reader.read_to_string(&mut text)?;
        Ok(text)
    }
}

/// Parse result and synchronization report of one fill.
#[derive(Debug, Clone, Serialize)]
pub struct FillRun {
    pub parse: ParseRun,
    pub report: SyncReport,
}

/// Reads, parses and synchronizes in one go.
///
/// # Errors
///
/// Returns [`SyncError::SourceUnavailable`] when the text cannot be read,
/// before anything is parsed or written. Host errors from
/// [`synchronize`] propagate unchanged.
pub async fn fill_from_source<S, H>(
    source: &mut S,
    host: &mut H,
    config: &SyncConfig,
) -> Result<FillRun>
where
    S: TextSource + ?Sized,
    H: ManagedHost,
{
    let text = source
        .read_text()
        .map_err(|err| SyncError::SourceUnavailable(err.to_string()))?;
    debug!(bytes = text.len(), "Read profile text");

    let parse = parse_record_with_report(&text);
    for warning in &parse.warnings {
        warn!("{warning}");
    }
    for issue in validate_record(&parse.record) {
        warn!(%issue, "Parsed record is malformed");
    }

    let report = synchronize(host, &parse.record, config).await?;
    Ok(FillRun { parse, report })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Broken;

    impl TextSource for Broken {
        fn read_text(&mut self) -> std::io::Result<String> {
            Err(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "clipboard locked",
            ))
        }
    }

    #[test]
    fn test_reader_source_reads_everything() {
        let mut source = ReaderSource::new("Name: A\nAge: 3".as_bytes());
        assert_eq!(source.read_text().unwrap(), "Name: A\nAge: 3");
    }

    #[test]
    fn test_str_source_can_be_read_twice() {
        let mut source = "Name: A";
        assert_eq!(source.read_text().unwrap(), "Name: A");
        assert_eq!(source.read_text().unwrap(), "Name: A");
    }

    #[tokio::test]
    async fn test_unreadable_source_aborts_before_writing() {
        use crate::document::{FormDocument, NodeSpec};

        let mut doc = FormDocument::from_spec(&NodeSpec::element(
            "main",
            vec![
                NodeSpec::element("h2", vec![NodeSpec::text("Player Info")]),
                NodeSpec::element(
                    "label",
                    vec![NodeSpec::text("Age"), NodeSpec::text_input("20")],
                ),
            ],
        ));
        let err = fill_from_source(&mut Broken, &mut doc, &SyncConfig::default())
            .await
            .unwrap_err();

        assert!(matches!(err, SyncError::SourceUnavailable(ref reason) if reason.contains("clipboard locked")));
        assert!(doc.events().is_empty());
    }
}
