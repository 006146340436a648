//! `sales-report` loads three related delimited datasets (sales, products, customers) into
//! typed in-memory records, derives sales aggregates, answers a trend query and a purchase
//! threshold query, and writes a sales report.
//!
//! ## Pipeline
//!
//! 1. [`ingestion::load_records`] reads each file: the header line is skipped, fields are
//!    mapped by position, numeric columns are parsed strictly.
//! 2. [`processing::Aggregates::from_sales`] computes the total, sale count per product and
//!    purchase total per customer in one pass.
//! 3. [`processing::top_products`] / [`processing::bottom_products`] rank the catalog by
//!    sale count (ties keep catalog order); [`processing::product_trend`] and
//!    [`processing::customers_above`] answer the two interactive queries.
//! 4. [`report::SalesReport`] collects the views; [`report::emit_report`] writes it and
//!    falls back to an append-only error log when the report file cannot be written.
//!
//! [`app::run`] drives the whole sequence with injected console input/output.
//!
//! ## Loading example
//!
//! ```no_run
//! use sales_report::ingestion::{load_records, IngestionOptions, RowErrorPolicy};
//! use sales_report::types::Product;
//!
//! # fn main() -> Result<(), sales_report::IngestionError> {
//! let opts = IngestionOptions {
//!     row_error_policy: RowErrorPolicy::SkipWithWarning,
//!     ..Default::default()
//! };
//! let products: Vec<Product> = load_records("products.csv", &opts)?;
//! println!("products={}", products.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: delimited loading, format inference, observers
//! - [`types`]: positional schema, dataset and domain records
//! - [`processing`]: aggregation, ranking and filtering
//! - [`report`]: report model, rendering and output
//! - [`app`]: run configuration, prompts and console echo
//! - [`cli`]: command-line flags mapped onto a run configuration
//! - [`error`]: error types

pub mod app;
pub mod cli;
pub mod error;
pub mod ingestion;
pub mod processing;
pub mod report;
pub mod types;

pub use error::{AppError, IngestionError, IngestionResult, ReportError};
