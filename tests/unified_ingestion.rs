use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use sales_report::ingestion::{load_records, IngestionOptions, LoadRequest};
use sales_report::types::{Customer, Product, Sale};

fn tmp_file(ext: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("sales-report-unified-{nanos}.{ext}"))
}

#[test]
fn loads_all_three_datasets_in_file_order() {
    let opts = IngestionOptions::default();
    let sales: Vec<Sale> = load_records("tests/fixtures/sales.csv", &opts).unwrap();
    let products: Vec<Product> = load_records("tests/fixtures/products.csv", &opts).unwrap();
    let customers: Vec<Customer> = load_records("tests/fixtures/customers.csv", &opts).unwrap();

    assert_eq!(sales.iter().map(|s| s.id).collect::<Vec<_>>(), (1..=8).collect::<Vec<_>>());
    assert_eq!(sales[3].amount, 12.5);
    assert_eq!(products[0].name, "Fountain Pen");
    assert_eq!(products[4].price, 9.9);
    assert_eq!(customers[1].contact_info, "+7 900 000 00 00");
    // Trailing empty field is an empty contact, not an error.
    assert_eq!(customers[3].contact_info, "");
}

#[test]
fn tsv_is_detected_by_extension() {
    let products: Vec<Product> = load_records("tests/fixtures/products.tsv", &IngestionOptions::default()).unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(products[1].name, "Notebook A5");
}

#[test]
fn delimiter_override_allows_unknown_extension() {
    let path = tmp_file("dat");
    fs::write(&path, "code;name;price\nP1;Pen;1.5\n").unwrap();

    let err = load_records::<Product>(&path, &IngestionOptions::default()).unwrap_err();
    assert!(err.to_string().contains("cannot infer format from extension 'dat'"));

    let opts = IngestionOptions {
        delimiter: Some(b';'),
        ..Default::default()
    };
    let products: Vec<Product> = load_records(&path, &opts).unwrap();
    assert_eq!(products[0].code, "P1");
    assert_eq!(products[0].price, 1.5);

    let _ = fs::remove_file(&path);
}

#[test]
fn duplicate_keys_are_kept() {
    let path = tmp_file("csv");
    fs::write(&path, "code,name,price\nP1,Pen,1\nP1,Pen (blue),2\n").unwrap();

    let products: Vec<Product> = LoadRequest::new(&path, IngestionOptions::default()).run().unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(products[1].name, "Pen (blue)");

    let _ = fs::remove_file(&path);
}

#[test]
fn missing_file_is_an_io_error() {
    let err = load_records::<Customer>("tests/fixtures/nope.csv", &IngestionOptions::default()).unwrap_err();
    assert!(err.to_string().starts_with("io error"));
}
