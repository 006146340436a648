//! Delimited-text ingestion implementation.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{IngestionError, IngestionResult};
use crate::types::{DataSet, DataType, Schema, Value};

/// What to do with a data line that cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowErrorPolicy {
    /// Fail the whole load on the first bad line.
    #[default]
    Abort,
    /// Drop the bad line, keep loading, and report it in [`Ingested::skipped`].
    SkipWithWarning,
}

/// Result of a successful delimited load.
#[derive(Debug)]
pub struct Ingested {
    /// Parsed rows, in file order.
    pub dataset: DataSet,
    /// Row-level errors for lines dropped under [`RowErrorPolicy::SkipWithWarning`].
    pub skipped: Vec<IngestionError>,
}

/// Ingest a delimited file into an in-memory [`DataSet`].
///
/// Rules:
///
/// - The first physical line is a header and is skipped without being inspected.
/// - Fields are matched to the schema by position; extra trailing fields are ignored.
/// - Every value is trimmed, then parsed according to the schema field type.
/// - Numeric fields must be present and well-formed.
pub fn ingest_csv_from_path(
    path: impl AsRef<Path>,
    schema: &Schema,
    delimiter: u8,
    policy: RowErrorPolicy,
) -> IngestionResult<Ingested> {
    let file = File::open(path)?;
    ingest_csv_from_reader(BufReader::new(file), schema, delimiter, policy)
}

/// Ingest delimited data from any buffered reader, following the same rules as
/// [`ingest_csv_from_path`].
pub fn ingest_csv_from_reader<R: BufRead>(
    mut input: R,
    schema: &Schema,
    delimiter: u8,
    policy: RowErrorPolicy,
) -> IngestionResult<Ingested> {
    // Line 1 is dropped as raw bytes: it may be blank, badly quoted or not UTF-8.
    input.read_until(b'\n', &mut Vec::new())?;

    // `flexible` lets short lines reach the field-count check.
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(input);

    let mut rows: Vec<Vec<Value>> = Vec::new();
    let mut line_numbers = Vec::new();
    let mut skipped = Vec::new();

    for (row_idx0, result) in rdr.byte_records().enumerate() {
        // Only reader-level failures (I/O) end up here; they are never skippable.
        let record = result?;
        // The reader starts counting at line 2 of the file.
        let user_row = record
            .position()
            .map(|p| p.line() as usize + 1)
            .unwrap_or(row_idx0 + 2);

        let parsed = csv::StringRecord::from_byte_record(record)
            .map_err(|e| encoding_error(user_row, e))
            .and_then(|record| parse_record(user_row, &record, schema));

        match parsed {
            Ok(row) => {
                rows.push(row);
                line_numbers.push(user_row);
            }
            Err(e) => match policy {
                RowErrorPolicy::Abort => return Err(e),
                RowErrorPolicy::SkipWithWarning => skipped.push(e),
            },
        }
    }

    Ok(Ingested {
        dataset: DataSet {
            schema: schema.clone(),
            rows,
            line_numbers,
        },
        skipped,
    })
}

fn encoding_error(row: usize, err: csv::FromUtf8Error) -> IngestionError {
    let message = err.utf8_error().to_string();
    let raw = err
        .into_byte_record()
        .iter()
        .map(String::from_utf8_lossy)
        .collect::<Vec<_>>()
        .join(",");
    IngestionError::Encoding { row, raw, message }
}

fn parse_record(
    row: usize,
    record: &csv::StringRecord,
    schema: &Schema,
) -> IngestionResult<Vec<Value>> {
    if record.len() < schema.width() {
        return Err(IngestionError::FieldCount {
            row,
            expected: schema.width(),
            found: record.len(),
            raw: record.iter().collect::<Vec<_>>().join(","),
        });
    }

    schema
        .fields
        .iter()
        .zip(record.iter())
        .map(|(field, raw)| parse_typed_value(row, &field.name, field.data_type, raw))
        .collect()
}

fn parse_typed_value(
    row: usize,
    column: &str,
    data_type: DataType,
    raw: &str,
) -> IngestionResult<Value> {
    let trimmed = raw.trim();
    let parse_err = |message: String| IngestionError::ParseError {
        row,
        column: column.to_owned(),
        raw: raw.to_owned(),
        message,
    };

    match data_type {
        DataType::Utf8 => Ok(Value::Utf8(trimmed.to_owned())),
        DataType::Int64 => trimmed
            .parse::<i64>()
            .map(Value::Int64)
            .map_err(|e| parse_err(e.to_string())),
        DataType::Float64 => trimmed
            .parse::<f64>()
            .map(Value::Float64)
            .map_err(|e| parse_err(e.to_string())),
    }
}
