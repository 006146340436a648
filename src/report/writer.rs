//! Report sink with an append-only error log as fallback.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::ValueEnum;

use crate::error::ReportError;
use crate::ingestion::observability::unix_ts;

use super::format::SalesReport;

/// Output encoding of the report file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    /// Plain-text sections, amounts with two decimals.
    #[default]
    #[value(alias = "txt")]
    Text,
    /// The same sections as one JSON document.
    Json,
}

/// Render `report` and write it to `path`, replacing any previous file.
pub fn write_report(path: &Path, report: &SalesReport, format: ReportFormat) -> Result<(), ReportError> {
    let body = match format {
        ReportFormat::Text => report.render_text(),
        ReportFormat::Json => report.render_json()?,
    };
    fs::write(path, body).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Append-only log of report failures.
///
/// Unlike [`crate::ingestion::FileObserver`], appends here are fallible: the caller has to
/// learn when the fallback itself failed.
#[derive(Debug, Clone)]
pub struct ErrorLog {
    path: PathBuf,
}

impl ErrorLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one timestamped entry.
    pub fn append(&self, message: &str) -> std::io::Result<()> {
        let mut f = OpenOptions::new().create(true).append(true).open(&self.path)?;
        writeln!(f, "{} error: {message}", unix_ts())
    }
}

/// What happened when the report was emitted.
#[derive(Debug)]
pub enum ReportOutcome {
    /// Report written.
    Written,
    /// Report failed; the failure was recorded in the error log.
    Logged(ReportError),
    /// Report failed and the error log could not be written either.
    Unrecorded {
        report: ReportError,
        log: std::io::Error,
    },
}

impl ReportOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, Self::Written)
    }
}

/// Write the report, degrading to the error log on failure. Never returns an error.
pub fn emit_report(
    path: &Path,
    report: &SalesReport,
    format: ReportFormat,
    error_log: &ErrorLog,
) -> ReportOutcome {
    match write_report(path, report, format) {
        Ok(()) => ReportOutcome::Written,
        Err(report_err) => match error_log.append(&report_err.to_string()) {
            Ok(()) => ReportOutcome::Logged(report_err),
            Err(log) => ReportOutcome::Unrecorded {
                report: report_err,
                log,
            },
        },
    }
}
