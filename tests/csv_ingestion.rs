use sales_report::ingestion::csv::{ingest_csv_from_path, ingest_csv_from_reader};
use sales_report::ingestion::RowErrorPolicy;
use sales_report::types::{Product, Record, Sale, Value};
use sales_report::IngestionError;

#[test]
fn ingest_csv_from_path_happy_path() {
    let out = ingest_csv_from_path("tests/fixtures/sales.csv", &Sale::schema(), b',', RowErrorPolicy::Abort).unwrap();

    assert_eq!(out.dataset.row_count(), 8);
    assert!(out.skipped.is_empty());
    assert_eq!(
        out.dataset.rows[0],
        vec![
            Value::Int64(1),
            Value::Utf8("2024-01-03 09:15".to_string()),
            Value::Utf8("C1".to_string()),
            Value::Utf8("P1".to_string()),
            Value::Float64(100.0),
        ]
    );
}

#[test]
fn ingest_csv_maps_by_position_not_header_name() {
    // Header names are shuffled, values are still read positionally.
    let input = "price,code,name\nP1,Pen,2.5\n";
    let out = ingest_csv_from_reader(input.as_bytes(), &Product::schema(), b',', RowErrorPolicy::Abort).unwrap();
    assert_eq!(out.dataset.rows[0][0], Value::Utf8("P1".to_string()));
    assert_eq!(out.dataset.rows[0][2], Value::Float64(2.5));
}

#[test]
fn ingest_csv_errors_on_short_line() {
    let input = "code,name,price\nP1,Pen\n";
    let err = ingest_csv_from_reader(input.as_bytes(), &Product::schema(), b',', RowErrorPolicy::Abort).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("row 2 has 2 field(s), expected at least 3"));
    assert!(msg.contains("raw='P1,Pen'"));
}

#[test]
fn ingest_csv_errors_on_type_parse() {
    let err = ingest_csv_from_path("tests/fixtures/bad_sales.csv", &Sale::schema(), b',', RowErrorPolicy::Abort)
        .unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("failed to parse value at row 3"));
    assert!(msg.contains("column 'amount'"));
    assert!(msg.contains("raw='fifty'"));
}

#[test]
fn ingest_csv_skip_policy_drops_only_bad_lines() {
    let out = ingest_csv_from_path(
        "tests/fixtures/bad_sales.csv",
        &Sale::schema(),
        b',',
        RowErrorPolicy::SkipWithWarning,
    )
    .unwrap();

    assert_eq!(out.dataset.row_count(), 2);
    assert_eq!(out.dataset.line_numbers, vec![2, 5]);
    assert_eq!(out.skipped.len(), 2);
    assert!(matches!(out.skipped[0], IngestionError::ParseError { row: 3, .. }));
    assert!(matches!(out.skipped[1], IngestionError::FieldCount { row: 4, found: 3, .. }));
}

#[test]
fn ingest_csv_header_only_file_is_empty() {
    let input = "id,timestamp,customerCode,productCode,amount\n";
    let out = ingest_csv_from_reader(input.as_bytes(), &Sale::schema(), b',', RowErrorPolicy::Abort).unwrap();
    assert_eq!(out.dataset.row_count(), 0);
}

#[test]
fn ingest_csv_skips_exactly_one_physical_line() {
    let path = std::env::temp_dir().join(format!(
        "sales_report_blank_header_{}.csv",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    std::fs::write(&path, "\nP1,Pen,1.0\nP2,Pad,2.0\n").unwrap();

    let out = ingest_csv_from_path(&path, &Product::schema(), b',', RowErrorPolicy::Abort).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(out.dataset.row_count(), 2);
    assert_eq!(out.dataset.rows[0][0], Value::Utf8("P1".to_string()));
    assert_eq!(out.dataset.line_numbers, vec![2, 3]);
}
