//! Directory conversion: legacy files in, one JSON file per file out.
//!
//! Each file is handled start to finish before the next one. A failure on
//! one file is recorded in the report and the batch moves on.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::{SerializationError, SourceError};
use crate::extraction::{DecodedRecord, FieldExtractor};
use crate::locator::locate;
use crate::serialization::{output_path_for, write_records_file};
use crate::source::{LegacyFiles, RFB_EXTENSION};

/// Default record tag.
pub const DEFAULT_TAG: &str = "R10";

/// What to look for and where.
#[derive(Debug, Clone)]
pub struct ConversionOptions {
    pub tag: String,
    pub extension: String,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            tag: DEFAULT_TAG.to_string(),
            extension: RFB_EXTENSION.to_string(),
        }
    }
}

/// Why a single file could not be converted.
#[derive(Debug, thiserror::Error)]
pub enum FileFailure {
    #[error(transparent)]
    Read(#[from] SourceError),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: SerializationError,
    },
}

/// Result of one input file.
#[derive(Debug)]
pub enum FileStatus {
    Converted { output: PathBuf, records: usize },
    /// The tag does not occur in the file; nothing is written.
    NoMatches,
    Failed(FileFailure),
}

#[derive(Debug)]
pub struct FileOutcome {
    pub source: PathBuf,
    pub status: FileStatus,
}

/// Per-file outcomes of one conversion run, in processing order.
#[derive(Debug, Default)]
pub struct ConversionReport {
    pub outcomes: Vec<FileOutcome>,
}

impl ConversionReport {
    /// Number of files for which a JSON file was written.
    pub fn converted(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, FileStatus::Converted { .. }))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, FileStatus::Failed(_)))
            .count()
    }
}

/// Locate and decode every `tag` record in already-read lines.
pub fn decode_lines<S: AsRef<str>>(
    lines: &[S],
    tag: &str,
    extractor: &FieldExtractor,
) -> Vec<DecodedRecord> {
    let indices = locate(lines, tag);
    extractor.extract(lines, &indices)
}

/// Convert every legacy file in `dir`.
///
/// Only an unreadable directory fails the whole run.
pub fn convert_directory(
    dir: &Path,
    extractor: &FieldExtractor,
    options: &ConversionOptions,
) -> Result<ConversionReport, SourceError> {
    let mut report = ConversionReport::default();

    for (source, lines) in LegacyFiles::open(dir, &options.extension)? {
        let status = match lines {
            Ok(lines) => convert_lines(&source, &lines, extractor, &options.tag),
            Err(e) => FileStatus::Failed(FileFailure::Read(e)),
        };

        match &status {
            FileStatus::Converted { output, records } => {
                info!(source = %source.display(), output = %output.display(), records, "converted");
            }
            FileStatus::NoMatches => {
                info!(source = %source.display(), tag = %options.tag, "no tagged records");
            }
            FileStatus::Failed(e) => {
                warn!(source = %source.display(), error = %e, "conversion failed");
            }
        }

        report.outcomes.push(FileOutcome { source, status });
    }

    Ok(report)
}

fn convert_lines(
    source: &Path,
    lines: &[String],
    extractor: &FieldExtractor,
    tag: &str,
) -> FileStatus {
    let records = decode_lines(lines, tag, extractor);
    if records.is_empty() {
        return FileStatus::NoMatches;
    }

    let output = output_path_for(source);
    match write_records_file(&output, &records) {
        Ok(()) => FileStatus::Converted {
            output,
            records: records.len(),
        },
        Err(e) => FileStatus::Failed(FileFailure::Write {
            path: output,
            source: e,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Layout;
    use std::fs;

    fn extractor() -> FieldExtractor {
        FieldExtractor::new(Layout::r10().unwrap())
    }

    #[test]
    fn test_decode_lines_uses_tag() {
        let lines = vec!["R01 header", "R10 12.345.678/0001-95", "R11"];
        let records = decode_lines(&lines, "R10", &extractor());

        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["Tipo"], "R10");
    }

    #[test]
    fn test_convert_directory_outcomes() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.rfb"), "R01\nR10 first\nR10 second\n").unwrap();
        fs::write(dir.path().join("b.rfb"), "R01\nR11\n").unwrap();
        fs::write(dir.path().join("notes.txt"), "R10 ignored\n").unwrap();

        let report =
            convert_directory(dir.path(), &extractor(), &ConversionOptions::default()).unwrap();

        assert_eq!(report.outcomes.len(), 2);
        assert_eq!(report.converted(), 1);
        assert_eq!(report.failed(), 0);
        assert!(matches!(
            report.outcomes[0].status,
            FileStatus::Converted { records: 2, .. }
        ));
        assert!(matches!(report.outcomes[1].status, FileStatus::NoMatches));
        assert!(dir.path().join("a.json").exists());
        assert!(!dir.path().join("b.json").exists());
        assert!(!dir.path().join("notes.json").exists());
    }

    #[test]
    fn test_write_failure_does_not_stop_batch() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.rfb"), "R10 first\n").unwrap();
        fs::create_dir(dir.path().join("a.json")).unwrap();
        fs::write(dir.path().join("b.rfb"), "R10 second\n").unwrap();

        let report =
            convert_directory(dir.path(), &extractor(), &ConversionOptions::default()).unwrap();

        assert!(matches!(
            report.outcomes[0].status,
            FileStatus::Failed(FileFailure::Write { .. })
        ));
        assert_eq!(report.failed(), 1);
        assert_eq!(report.converted(), 1);
        assert!(dir.path().join("b.json").is_file());
    }

    #[test]
    fn test_custom_tag_and_extension() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "R20 only\n").unwrap();

        let options = ConversionOptions {
            tag: "R20".to_string(),
            extension: "txt".to_string(),
        };
        let report = convert_directory(dir.path(), &extractor(), &options).unwrap();

        assert_eq!(report.converted(), 1);
        assert!(dir.path().join("a.json").exists());
    }

    #[test]
    fn test_missing_directory_is_run_error() {
        let result = convert_directory(
            Path::new("/nonexistent/rfb"),
            &extractor(),
            &ConversionOptions::default(),
        );
        assert!(result.is_err());
    }
}
