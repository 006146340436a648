//! Selection queries over loaded records.

use std::collections::HashMap;

use crate::types::{Customer, Sale};

/// Sales of one product, in load order.
///
/// Matching is exact. An unknown code yields an empty list; the order is chronological only if
/// the source file was.
pub fn product_trend<'a>(sales: &'a [Sale], product_code: &str) -> Vec<&'a Sale> {
    sales
        .iter()
        .filter(|s| s.product_code == product_code)
        .collect()
}

/// Customers whose purchase total is strictly greater than `min_amount`, in catalog order.
///
/// Customers without sales count as `0.0`.
pub fn customers_above<'a>(
    customers: &'a [Customer],
    totals: &HashMap<String, f64>,
    min_amount: f64,
) -> Vec<(&'a Customer, f64)> {
    customers
        .iter()
        .map(|c| (c, totals.get(&c.code).copied().unwrap_or(0.0)))
        .filter(|&(_, total)| total > min_amount)
        .collect()
}
