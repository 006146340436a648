//! Unified loading entrypoint.
//!
//! Most callers should use [`load_records`], which reads a delimited file into typed domain
//! records. [`ingest_from_path`] stops one step earlier and returns the positional
//! [`crate::types::DataSet`].
//!
//! - If [`IngestionOptions::format`] is `None`, the format is inferred from the file
//!   extension.
//! - If an [`super::observability::IngestionObserver`] is provided, success/failure/alerts and
//!   skipped rows are reported to it.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{IngestionError, IngestionResult};
use crate::types::{Record, Schema};

use super::csv::{self, Ingested, RowErrorPolicy};
use super::observability::{IngestionContext, IngestionObserver, IngestionSeverity, IngestionStats};

/// Supported delimited formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestionFormat {
    /// Comma-separated values.
    Csv,
    /// Tab-separated values.
    Tsv,
}

impl IngestionFormat {
    /// Parse a format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "csv" | "txt" => Some(Self::Csv),
            "tsv" | "tab" => Some(Self::Tsv),
            _ => None,
        }
    }

    /// Field delimiter for this format.
    pub fn delimiter(self) -> u8 {
        match self {
            Self::Csv => b',',
            Self::Tsv => b'\t',
        }
    }
}

/// Options controlling loading behavior.
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct IngestionOptions {
    /// If `None`, auto-detect format from file extension.
    pub format: Option<IngestionFormat>,
    /// Overrides the format's delimiter. Also allows loading files with unknown extensions.
    pub delimiter: Option<u8>,
    /// What to do with unparseable lines.
    pub row_error_policy: RowErrorPolicy,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn IngestionObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: IngestionSeverity,
}

impl fmt::Debug for IngestionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IngestionOptions")
            .field("format", &self.format)
            .field("delimiter", &self.delimiter.map(char::from))
            .field("row_error_policy", &self.row_error_policy)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for IngestionOptions {
    fn default() -> Self {
        Self {
            format: None,
            delimiter: None,
            row_error_policy: RowErrorPolicy::Abort,
            observer: None,
            alert_at_or_above: IngestionSeverity::Critical,
        }
    }
}

/// Load a delimited file into typed records, in file order.
///
/// ```no_run
/// use sales_report::ingestion::{load_records, IngestionOptions};
/// use sales_report::types::Sale;
///
/// # fn main() -> Result<(), sales_report::IngestionError> {
/// let sales: Vec<Sale> = load_records("sales.csv", &IngestionOptions::default())?;
/// println!("sales={}", sales.len());
/// # Ok(())
/// # }
/// ```
pub fn load_records<T: Record>(
    path: impl AsRef<Path>,
    options: &IngestionOptions,
) -> IngestionResult<Vec<T>> {
    let ingested = ingest_from_path(path, &T::schema(), options)?;
    ingested.dataset.into_records()
}

/// Path-based entry point returning the positional dataset.
///
/// When an observer is configured, this function reports:
///
/// - `on_row_skipped` for each dropped row (skip policy only)
/// - `on_success` on success, with row/skip count stats
/// - `on_failure` on failure, with a computed severity
/// - `on_alert` on failure when the computed severity is >= `options.alert_at_or_above`
pub fn ingest_from_path(
    path: impl AsRef<Path>,
    schema: &Schema,
    options: &IngestionOptions,
) -> IngestionResult<Ingested> {
    let path = path.as_ref();
    let fmt = match (options.format, options.delimiter) {
        (Some(f), _) => f,
        (None, Some(_)) => infer_format_from_path(path).unwrap_or(IngestionFormat::Csv),
        (None, None) => infer_format_from_path(path)?,
    };
    let delimiter = options.delimiter.unwrap_or(fmt.delimiter());

    let ctx = IngestionContext {
        path: path.to_path_buf(),
        format: fmt,
    };

    let result = csv::ingest_csv_from_path(path, schema, delimiter, options.row_error_policy);

    if let Some(obs) = options.observer.as_ref() {
        match &result {
            Ok(ingested) => {
                for e in &ingested.skipped {
                    obs.on_row_skipped(&ctx, e);
                }
                obs.on_success(
                    &ctx,
                    IngestionStats {
                        rows: ingested.dataset.row_count(),
                        skipped: ingested.skipped.len(),
                    },
                );
            }
            Err(e) => {
                let sev = severity_for_error(e);
                obs.on_failure(&ctx, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, sev, e);
                }
            }
        }
    }

    result
}

fn severity_for_error(e: &IngestionError) -> IngestionSeverity {
    match e {
        IngestionError::Io(_) => IngestionSeverity::Critical,
        IngestionError::Csv(err) => match err.kind() {
            ::csv::ErrorKind::Io(_) => IngestionSeverity::Critical,
            _ => IngestionSeverity::Error,
        },
        IngestionError::SchemaMismatch { .. }
        | IngestionError::FieldCount { .. }
        | IngestionError::ParseError { .. }
        | IngestionError::Encoding { .. } => IngestionSeverity::Error,
    }
}

fn infer_format_from_path(path: &Path) -> IngestionResult<IngestionFormat> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .ok_or_else(|| IngestionError::SchemaMismatch {
            message: format!(
                "cannot infer format: path has no extension ({})",
                path.display()
            ),
        })?;

    IngestionFormat::from_extension(ext).ok_or_else(|| IngestionError::SchemaMismatch {
        message: format!(
            "cannot infer format from extension '{ext}' for path ({})",
            path.display()
        ),
    })
}

/// Owned load request: a path plus the options to load it with.
#[derive(Debug, Clone)]
pub struct LoadRequest {
    /// Path to the input file.
    pub path: PathBuf,
    /// Options controlling loading.
    pub options: IngestionOptions,
}

impl LoadRequest {
    pub fn new(path: impl Into<PathBuf>, options: IngestionOptions) -> Self {
        Self {
            path: path.into(),
            options,
        }
    }

    /// Execute the request by calling [`load_records`].
    pub fn run<T: Record>(&self) -> IngestionResult<Vec<T>> {
        load_records(&self.path, &self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_extension_is_case_insensitive() {
        assert_eq!(IngestionFormat::from_extension("CSV"), Some(IngestionFormat::Csv));
        assert_eq!(IngestionFormat::from_extension("tsv"), Some(IngestionFormat::Tsv));
        assert_eq!(IngestionFormat::from_extension("json"), None);
        assert_eq!(IngestionFormat::Tsv.delimiter(), b'\t');
    }

    #[test]
    fn unknown_extension_without_delimiter_is_rejected() {
        let err = infer_format_from_path(Path::new("data.bin")).unwrap_err();
        assert!(err.to_string().contains("extension 'bin'"));
        let err = infer_format_from_path(Path::new("data")).unwrap_err();
        assert!(err.to_string().contains("no extension"));
    }

    #[test]
    fn missing_file_is_critical() {
        let err = IngestionError::Io(std::io::Error::from(std::io::ErrorKind::NotFound));
        assert_eq!(severity_for_error(&err), IngestionSeverity::Critical);
        let err = IngestionError::FieldCount {
            row: 2,
            expected: 3,
            found: 1,
            raw: "x".to_string(),
        };
        assert_eq!(severity_for_error(&err), IngestionSeverity::Error);
    }
}
