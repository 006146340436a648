//! Command-line parsing.
//!
//! Flags only fill in a [`RunConfig`]; the run itself lives in [`crate::app`].

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use crate::app::RunConfig;
use crate::ingestion::{CompositeObserver, FileObserver, IngestionObserver, RowErrorPolicy, StdErrObserver};
use crate::processing::DEFAULT_RANK_SIZE;
use crate::report::ReportFormat;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "sales-report",
    version,
    about = "Sales totals, product rankings and customer queries over three CSV files"
)]
pub struct Cli {
    /// Directory the default file names are resolved against.
    #[arg(long, env = "SALES_REPORT_DIR", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Sales dataset [default: sales.csv].
    #[arg(long, value_name = "PATH")]
    pub sales: Option<PathBuf>,

    /// Products dataset [default: products.csv].
    #[arg(long, value_name = "PATH")]
    pub products: Option<PathBuf>,

    /// Customers dataset [default: customers.csv].
    #[arg(long, value_name = "PATH")]
    pub customers: Option<PathBuf>,

    /// Report output [default: sales_report.txt].
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Append-only log for report failures [default: error_report.txt].
    #[arg(long, value_name = "PATH")]
    pub error_log: Option<PathBuf>,

    /// Report encoding.
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Size of the top/bottom product lists.
    #[arg(long, value_name = "N", default_value_t = DEFAULT_RANK_SIZE)]
    pub top: usize,

    /// Field delimiter (one ASCII character, or `tab`); overrides extension detection.
    #[arg(long, value_name = "C", value_parser = parse_delimiter)]
    pub delimiter: Option<u8>,

    /// Drop unparseable lines with a warning instead of aborting the load.
    #[arg(long)]
    pub skip_bad_rows: bool,

    /// Append load events to this file.
    #[arg(long, value_name = "PATH")]
    pub load_log: Option<PathBuf>,

    /// Log load events to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Resolve flags into a run configuration. Unset paths keep their default names.
    pub fn into_config(self) -> RunConfig {
        let mut config = match self.data_dir {
            Some(dir) => RunConfig::in_dir(dir),
            None => RunConfig::default(),
        };

        let overrides = [
            (self.sales, &mut config.sales_path),
            (self.products, &mut config.products_path),
            (self.customers, &mut config.customers_path),
            (self.report, &mut config.report_path),
            (self.error_log, &mut config.error_log_path),
        ];
        for (flag, slot) in overrides {
            if let Some(path) = flag {
                *slot = path;
            }
        }

        config.report_format = self.format;
        config.rank_size = self.top;
        config.ingestion.delimiter = self.delimiter;
        if self.skip_bad_rows {
            config.ingestion.row_error_policy = RowErrorPolicy::SkipWithWarning;
        }

        let mut observers = CompositeObserver::default();
        if self.verbose {
            observers.push(Arc::new(StdErrObserver));
        }
        if let Some(path) = self.load_log {
            observers.push(Arc::new(FileObserver::new(path)));
        }
        if !observers.is_empty() {
            config.ingestion.observer = Some(Arc::new(observers) as Arc<dyn IngestionObserver>);
        }

        config
    }
}

fn parse_delimiter(raw: &str) -> Result<u8, String> {
    match raw {
        "\\t" | "tab" => Ok(b'\t'),
        _ if raw.len() == 1 && raw.is_ascii() => Ok(raw.as_bytes()[0]),
        _ => Err(format!("expected a single ASCII character, got '{raw}'")),
    }
}
