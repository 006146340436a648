//! Core data model types.
//!
//! Loading happens in two steps: a delimited file is read into an untyped-by-record
//! [`DataSet`] whose cells are typed [`Value`]s matching a positional [`Schema`], then each
//! row is converted into a domain record ([`Sale`], [`Product`], [`Customer`]) through the
//! [`Record`] trait.

use serde::Serialize;

use crate::error::{IngestionError, IngestionResult};

/// Logical data type for a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    /// 64-bit signed integer.
    Int64,
    /// 64-bit floating point number.
    Float64,
    /// UTF-8 string.
    Utf8,
}

/// A single named, typed field in a [`Schema`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Field/column name, used in diagnostics only.
    pub name: String,
    /// Field data type.
    pub data_type: DataType,
}

impl Field {
    /// Create a new field.
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }
}

/// A positional list of fields: field `i` is read from column `i` of each line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    /// Ordered list of fields.
    pub fields: Vec<Field>,
}

impl Schema {
    /// Create a new schema from fields.
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Number of leading columns every data line must have.
    pub fn width(&self) -> usize {
        self.fields.len()
    }

    /// Iterate field names in order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Returns the index of a field by name, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }
}

/// A single typed value in a [`DataSet`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// 64-bit signed integer.
    Int64(i64),
    /// 64-bit float.
    Float64(f64),
    /// UTF-8 string (possibly empty).
    Utf8(String),
}

/// In-memory tabular dataset.
///
/// Rows are stored in file order; `line_numbers[i]` is the 1-based source line of `rows[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSet {
    /// Schema describing row shape.
    pub schema: Schema,
    /// Row-major value storage.
    pub rows: Vec<Vec<Value>>,
    /// Source line of each row.
    pub line_numbers: Vec<usize>,
}

impl DataSet {
    /// Create a dataset from schema and rows, numbering rows as if they followed a header.
    ///
    /// Loaded datasets carry the real source lines instead; this is for hand-built fixtures.
    #[cfg(test)]
    pub(crate) fn new(schema: Schema, rows: Vec<Vec<Value>>) -> Self {
        let line_numbers = (0..rows.len()).map(|i| i + 2).collect();
        Self {
            schema,
            rows,
            line_numbers,
        }
    }

    /// Number of rows in the dataset.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Convert every row into a domain record, in order.
    pub fn into_records<T: Record>(self) -> IngestionResult<Vec<T>> {
        self.rows
            .iter()
            .zip(self.line_numbers.iter())
            .map(|(row, &line)| T::from_row(line, row))
            .collect()
    }
}

/// A domain record that can be built from one positional row.
pub trait Record: Sized {
    /// Positional schema of the source file.
    fn schema() -> Schema;

    /// Build the record from a row already typed according to [`Record::schema`].
    fn from_row(row: usize, values: &[Value]) -> IngestionResult<Self>;
}

/// One sales transaction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sale {
    pub id: i64,
    /// Free-form; never parsed into a date.
    pub timestamp: String,
    pub customer_code: String,
    pub product_code: String,
    pub amount: f64,
}

/// One catalog product. `price` is loaded but not used by any computation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub code: String,
    pub name: String,
    pub price: f64,
}

/// One customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    pub code: String,
    pub name: String,
    pub contact_info: String,
}

impl Record for Sale {
    fn schema() -> Schema {
        Schema::new(vec![
            Field::new("id", DataType::Int64),
            Field::new("timestamp", DataType::Utf8),
            Field::new("customerCode", DataType::Utf8),
            Field::new("productCode", DataType::Utf8),
            Field::new("amount", DataType::Float64),
        ])
    }

    fn from_row(row: usize, values: &[Value]) -> IngestionResult<Self> {
        let schema = Self::schema();
        let cols = Cells::new(row, &schema, values);
        Ok(Self {
            id: cols.int(0)?,
            timestamp: cols.text(1)?,
            customer_code: cols.text(2)?,
            product_code: cols.text(3)?,
            amount: cols.float(4)?,
        })
    }
}

impl Record for Product {
    fn schema() -> Schema {
        Schema::new(vec![
            Field::new("code", DataType::Utf8),
            Field::new("name", DataType::Utf8),
            Field::new("price", DataType::Float64),
        ])
    }

    fn from_row(row: usize, values: &[Value]) -> IngestionResult<Self> {
        let schema = Self::schema();
        let cols = Cells::new(row, &schema, values);
        Ok(Self {
            code: cols.text(0)?,
            name: cols.text(1)?,
            price: cols.float(2)?,
        })
    }
}

impl Record for Customer {
    fn schema() -> Schema {
        Schema::new(vec![
            Field::new("code", DataType::Utf8),
            Field::new("name", DataType::Utf8),
            Field::new("contactInfo", DataType::Utf8),
        ])
    }

    fn from_row(row: usize, values: &[Value]) -> IngestionResult<Self> {
        let schema = Self::schema();
        let cols = Cells::new(row, &schema, values);
        Ok(Self {
            code: cols.text(0)?,
            name: cols.text(1)?,
            contact_info: cols.text(2)?,
        })
    }
}

/// Typed accessor over one row, producing row/column-aware errors.
struct Cells<'a> {
    row: usize,
    schema: &'a Schema,
    values: &'a [Value],
}

impl<'a> Cells<'a> {
    fn new(row: usize, schema: &'a Schema, values: &'a [Value]) -> Self {
        Self { row, schema, values }
    }

    fn mismatch(&self, idx: usize, expected: &str) -> IngestionError {
        let column = self
            .schema
            .fields
            .get(idx)
            .map(|f| f.name.clone())
            .unwrap_or_else(|| format!("#{idx}"));
        IngestionError::ParseError {
            row: self.row,
            column,
            raw: self
                .values
                .get(idx)
                .map(|v| format!("{v:?}"))
                .unwrap_or_default(),
            message: format!("expected {expected}"),
        }
    }

    fn int(&self, idx: usize) -> IngestionResult<i64> {
        match self.values.get(idx) {
            Some(Value::Int64(v)) => Ok(*v),
            _ => Err(self.mismatch(idx, "integer")),
        }
    }

    fn float(&self, idx: usize) -> IngestionResult<f64> {
        match self.values.get(idx) {
            Some(Value::Float64(v)) => Ok(*v),
            _ => Err(self.mismatch(idx, "decimal")),
        }
    }

    fn text(&self, idx: usize) -> IngestionResult<String> {
        match self.values.get(idx) {
            Some(Value::Utf8(s)) => Ok(s.clone()),
            _ => Err(self.mismatch(idx, "text")),
        }
    }
}
