//! Report model and rendering.
//!
//! [`SalesReport`] owns everything it prints so it can be rendered or serialized after the
//! source collections are gone. Text rendering always emits the sections in the same order:
//! total, top products, bottom products, customers above threshold, product trend.

use std::fmt::Write as _;

use serde::Serialize;

use crate::error::ReportError;
use crate::processing::Aggregates;
use crate::types::{Customer, Product, Sale};

/// One ranked product line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductLine {
    pub code: String,
    pub name: String,
    pub sales_count: u64,
}

impl ProductLine {
    /// Lines for an already ranked product list, in the same order.
    pub fn from_ranked(ranked: &[&Product], agg: &Aggregates) -> Vec<Self> {
        ranked
            .iter()
            .map(|p| Self {
                code: p.code.clone(),
                name: p.name.clone(),
                sales_count: agg.frequency_of(&p.code),
            })
            .collect()
    }
}

/// One customer above the purchase threshold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerLine {
    pub code: String,
    pub name: String,
    pub total: f64,
}

/// One sale in a product trend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub sale_id: i64,
    pub timestamp: String,
    pub amount: f64,
}

/// Customers section together with the threshold that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThresholdSection {
    pub min_amount: f64,
    pub customers: Vec<CustomerLine>,
}

/// Trend section together with the queried code.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendSection {
    pub product_code: String,
    pub sales: Vec<TrendPoint>,
}

/// Complete sales report, in section order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesReport {
    pub total_sales: f64,
    pub top_products: Vec<ProductLine>,
    pub bottom_products: Vec<ProductLine>,
    pub customers_above: ThresholdSection,
    pub trend: TrendSection,
}

/// Inputs for [`SalesReport::assemble`]. Product lines are moved in as built.
#[derive(Debug, Clone)]
pub struct ReportInputs<'a> {
    pub total_sales: f64,
    pub top: Vec<ProductLine>,
    pub bottom: Vec<ProductLine>,
    pub min_amount: f64,
    pub customers: &'a [(&'a Customer, f64)],
    pub product_code: &'a str,
    pub trend: &'a [&'a Sale],
}

impl SalesReport {
    pub fn assemble(inputs: ReportInputs<'_>) -> Self {
        Self {
            total_sales: inputs.total_sales,
            top_products: inputs.top,
            bottom_products: inputs.bottom,
            customers_above: ThresholdSection {
                min_amount: inputs.min_amount,
                customers: inputs
                    .customers
                    .iter()
                    .map(|(c, total)| CustomerLine {
                        code: c.code.clone(),
                        name: c.name.clone(),
                        total: *total,
                    })
                    .collect(),
            },
            trend: TrendSection {
                product_code: inputs.product_code.to_string(),
                sales: inputs
                    .trend
                    .iter()
                    .map(|s| TrendPoint {
                        sale_id: s.id,
                        timestamp: s.timestamp.clone(),
                        amount: s.amount,
                    })
                    .collect(),
            },
        }
    }

    /// Render as human-readable text.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str("Sales report\n");
        out.push_str(&format_total(self.total_sales));
        out.push('\n');

        out.push_str(&format_products("2) Top products", &self.top_products));
        out.push_str(&format_products("3) Bottom products", &self.bottom_products));
        out.push_str(&format_customers(&self.customers_above, "4) "));
        out.push_str(&format_trend(&self.trend, "5) "));
        out
    }

    /// Render as pretty-printed JSON.
    pub fn render_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Monetary amounts are always shown with two decimals.
pub fn format_amount(amount: f64) -> String {
    format!("{amount:.2}")
}

pub fn format_total(total: f64) -> String {
    format!("1) Total sales: {}", format_amount(total))
}

/// Product names under a heading, one per line.
pub fn format_products(heading: &str, lines: &[ProductLine]) -> String {
    let mut out = format!("{heading}:\n");
    if lines.is_empty() {
        out.push_str("  (no products with sales)\n");
    }
    for line in lines {
        let _ = writeln!(out, "  {}", line.name);
    }
    out
}

pub fn format_customers(section: &ThresholdSection, prefix: &str) -> String {
    let mut out = format!(
        "{prefix}Customers with purchases above {}:\n",
        format_amount(section.min_amount)
    );
    if section.customers.is_empty() {
        out.push_str("  (no customers found)\n");
    }
    for c in &section.customers {
        let _ = writeln!(out, "  {} - {}", c.name, format_amount(c.total));
    }
    out
}

pub fn format_trend(section: &TrendSection, prefix: &str) -> String {
    let mut out = format!("{prefix}Sales trend for product {}:\n", section.product_code);
    if section.sales.is_empty() {
        let _ = writeln!(out, "  (no sales found for product {})", section.product_code);
    }
    for s in &section.sales {
        let _ = writeln!(out, "  {} - {}", s.timestamp, format_amount(s.amount));
    }
    out
}
