//! Loading entrypoints and implementations.
//!
//! Most callers should use [`load_records`] (from [`unified`]) which:
//!
//! - auto-detects the delimiter by file extension (or you can override via [`IngestionOptions`])
//! - skips the header line and maps fields by position into typed records
//! - optionally reports success/failure/alerts/skipped rows to an [`IngestionObserver`]

pub mod csv;
pub mod observability;
pub mod unified;

pub use csv::{Ingested, RowErrorPolicy};
pub use observability::{
    CompositeObserver, FileObserver, IngestionContext, IngestionObserver, IngestionSeverity, IngestionStats,
    StdErrObserver,
};
pub use unified::{ingest_from_path, load_records, IngestionFormat, IngestionOptions, LoadRequest};
