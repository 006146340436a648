//! One batch run: load → aggregate → prompt → report.
//!
//! Console input/output are injected so a whole run can be driven from tests.

use std::ffi::OsString;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::cli::Cli;
use crate::error::AppError;
use crate::ingestion::{IngestionOptions, LoadRequest};
use crate::processing::{bottom_products, customers_above, product_trend, top_products, Aggregates, DEFAULT_RANK_SIZE};
use crate::report::format::{format_customers, format_products, format_total, format_trend};
use crate::report::{emit_report, ErrorLog, ProductLine, ReportFormat, ReportInputs, ReportOutcome, SalesReport};
use crate::types::{Customer, Product, Record, Sale};

pub const TREND_PROMPT: &str = "Enter product code to analyze sales trend";
pub const AMOUNT_PROMPT: &str = "Enter minimum purchase amount";

/// Everything one run needs to know.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub sales_path: PathBuf,
    pub products_path: PathBuf,
    pub customers_path: PathBuf,
    pub report_path: PathBuf,
    pub error_log_path: PathBuf,
    pub report_format: ReportFormat,
    pub rank_size: usize,
    pub ingestion: IngestionOptions,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            sales_path: PathBuf::from("sales.csv"),
            products_path: PathBuf::from("products.csv"),
            customers_path: PathBuf::from("customers.csv"),
            report_path: PathBuf::from("sales_report.txt"),
            error_log_path: PathBuf::from("error_report.txt"),
            report_format: ReportFormat::Text,
            rank_size: DEFAULT_RANK_SIZE,
            ingestion: IngestionOptions::default(),
        }
    }
}

impl RunConfig {
    /// Defaults with every file resolved against `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        let d = Self::default();
        Self {
            sales_path: dir.join(d.sales_path),
            products_path: dir.join(d.products_path),
            customers_path: dir.join(d.customers_path),
            report_path: dir.join(d.report_path),
            error_log_path: dir.join(d.error_log_path),
            ..d
        }
    }

    /// One load request per input file, in load order.
    pub fn load_requests(&self) -> [LoadRequest; 3] {
        [&self.sales_path, &self.products_path, &self.customers_path]
            .map(|path| LoadRequest::new(path, self.ingestion.clone()))
    }
}

/// Result of a completed run.
#[derive(Debug)]
pub struct RunSummary {
    pub report: SalesReport,
    pub outcome: ReportOutcome,
}

fn load<T: Record>(request: &LoadRequest) -> Result<Vec<T>, AppError> {
    request.run().map_err(|source| AppError::Load {
        path: request.path.clone(),
        source,
    })
}

fn prompt<R: BufRead, W: Write>(input: &mut R, console: &mut W, question: &str) -> Result<String, AppError> {
    write!(console, "{question}: ")?;
    console.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(AppError::Input(format!("no answer to '{question}'")));
    }
    Ok(line.trim().to_string())
}

/// Execute one full run against `config`.
///
/// Load failures and bad interactive input are returned as errors. A report that cannot be
/// written is not an error; see [`RunSummary::outcome`].
pub fn run<R: BufRead, W: Write>(config: &RunConfig, input: &mut R, console: &mut W) -> Result<RunSummary, AppError> {
    let [sales_req, products_req, customers_req] = config.load_requests();
    let sales: Vec<Sale> = load(&sales_req)?;
    let products: Vec<Product> = load(&products_req)?;
    let customers: Vec<Customer> = load(&customers_req)?;

    let agg = Aggregates::from_sales(&sales);
    let top_lines = ProductLine::from_ranked(&top_products(&products, &agg.product_frequency, config.rank_size), &agg);
    let bottom_lines =
        ProductLine::from_ranked(&bottom_products(&products, &agg.product_frequency, config.rank_size), &agg);

    writeln!(console, "{}", format_total(agg.total_sales))?;
    write!(console, "{}", format_products("2) Top products", &top_lines))?;
    write!(console, "{}", format_products("3) Bottom products", &bottom_lines))?;

    // Every aggregate above is final before the first prompt.
    let product_code = prompt(input, console, TREND_PROMPT)?;
    let trend = product_trend(&sales, &product_code);

    let raw_amount = prompt(input, console, AMOUNT_PROMPT)?;
    let min_amount = raw_amount
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| AppError::Input(format!("minimum amount must be a number, got '{raw_amount}'")))?;
    let above = customers_above(&customers, &agg.customer_totals, min_amount);

    let report = SalesReport::assemble(ReportInputs {
        total_sales: agg.total_sales,
        top: top_lines,
        bottom: bottom_lines,
        min_amount,
        customers: &above,
        product_code: &product_code,
        trend: &trend,
    });

    write!(console, "{}", format_trend(&report.trend, ""))?;
    write!(console, "{}", format_customers(&report.customers_above, ""))?;

    let error_log = ErrorLog::new(&config.error_log_path);
    let outcome = emit_report(&config.report_path, &report, config.report_format, &error_log);
    match &outcome {
        ReportOutcome::Written => {
            writeln!(console, "Report written to {}", config.report_path.display())?;
        }
        ReportOutcome::Logged(err) => {
            writeln!(
                console,
                "Report not written ({err}); recorded in {}",
                error_log.path().display()
            )?;
        }
        ReportOutcome::Unrecorded { report, log } => {
            writeln!(
                console,
                "Report not written ({report}); could not write {} either: {log}",
                error_log.path().display()
            )?;
        }
    }

    Ok(RunSummary { report, outcome })
}

/// Entry point used by the binary. `args` includes the program name. Returns the process
/// exit code.
pub fn run_with_args<I, T, R, W>(args: I, input: &mut R, console: &mut W) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    R: BufRead,
    W: Write,
{
    let config = match Cli::try_parse_from(args) {
        Ok(cli) => cli.into_config(),
        // --help and --version
        Err(err) if !err.use_stderr() => {
            let _ = write!(console, "{err}");
            return 0;
        }
        Err(err) => {
            let err = AppError::Usage(err.to_string());
            eprint!("{err}");
            return err.exit_code();
        }
    };

    match run(&config, input, console) {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("error: {err}");
            err.exit_code()
        }
    }
}
