//! Report assembly and output.
//!
//! - [`format`]: the [`SalesReport`] model plus text/JSON rendering
//! - [`writer`]: file sink, fallback error log, and [`emit_report`]

pub mod format;
pub mod writer;

pub use format::{
    format_amount, CustomerLine, ProductLine, ReportInputs, SalesReport, ThresholdSection, TrendPoint, TrendSection,
};
pub use writer::{emit_report, write_report, ErrorLog, ReportFormat, ReportOutcome};
