//! Grouped aggregations over the sales collection.
//!
//! Each mapping is built in one linear pass: update-or-insert into a key → accumulator map.
//! Keys are exactly the codes that occur in the sales passed in, never the catalog.

use std::collections::HashMap;

use crate::types::Sale;

/// Sum of all sale amounts. `0.0` for no sales.
pub fn total_sales(sales: &[Sale]) -> f64 {
    sales.iter().map(|s| s.amount).sum()
}

/// Number of sales per product code.
pub fn product_frequency(sales: &[Sale]) -> HashMap<String, u64> {
    let mut out: HashMap<String, u64> = HashMap::new();
    for sale in sales {
        *out.entry(sale.product_code.clone()).or_insert(0) += 1;
    }
    out
}

/// Sum of sale amounts per customer code.
pub fn customer_totals(sales: &[Sale]) -> HashMap<String, f64> {
    let mut out: HashMap<String, f64> = HashMap::new();
    for sale in sales {
        *out.entry(sale.customer_code.clone()).or_insert(0.0) += sale.amount;
    }
    out
}

/// All sales aggregates, computed together in a single scan.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregates {
    pub total_sales: f64,
    pub product_frequency: HashMap<String, u64>,
    pub customer_totals: HashMap<String, f64>,
}

impl Aggregates {
    pub fn from_sales(sales: &[Sale]) -> Self {
        let mut agg = Self::default();
        for sale in sales {
            agg.total_sales += sale.amount;
            *agg
                .product_frequency
                .entry(sale.product_code.clone())
                .or_insert(0) += 1;
            *agg
                .customer_totals
                .entry(sale.customer_code.clone())
                .or_insert(0.0) += sale.amount;
        }
        agg
    }

    /// Sale count for `product_code`; `0` if it never sold.
    pub fn frequency_of(&self, product_code: &str) -> u64 {
        self.product_frequency.get(product_code).copied().unwrap_or(0)
    }

    /// Purchase total for `customer_code`; `0.0` if it never bought.
    pub fn total_for(&self, customer_code: &str) -> f64 {
        self.customer_totals.get(customer_code).copied().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sale(id: i64, customer: &str, product: &str, amount: f64) -> Sale {
        Sale {
            id,
            timestamp: format!("t{id}"),
            customer_code: customer.to_string(),
            product_code: product.to_string(),
            amount,
        }
    }

    fn worked_example() -> Vec<Sale> {
        vec![
            sale(1, "C1", "P1", 100.0),
            sale(2, "C2", "P1", 50.0),
            sale(3, "C1", "P2", 30.0),
        ]
    }

    #[test]
    fn worked_example_aggregates() {
        let sales = worked_example();
        assert!((total_sales(&sales) - 180.0).abs() < 1e-9);

        let freq = product_frequency(&sales);
        assert_eq!(freq.len(), 2);
        assert_eq!(freq["P1"], 2);
        assert_eq!(freq["P2"], 1);

        let totals = customer_totals(&sales);
        assert_eq!(totals.len(), 2);
        assert!((totals["C1"] - 130.0).abs() < 1e-9);
        assert!((totals["C2"] - 50.0).abs() < 1e-9);
    }

    #[test]
    fn single_pass_matches_individual_functions() {
        let sales = worked_example();
        let agg = Aggregates::from_sales(&sales);
        assert_eq!(agg.product_frequency, product_frequency(&sales));
        assert_eq!(agg.customer_totals, customer_totals(&sales));
        assert!((agg.total_sales - total_sales(&sales)).abs() < 1e-9);
    }

    #[test]
    fn absent_keys_default_to_zero() {
        let agg = Aggregates::from_sales(&worked_example());
        assert_eq!(agg.frequency_of("P9"), 0);
        assert_eq!(agg.total_for("C9"), 0.0);
    }

    #[test]
    fn empty_sales() {
        let agg = Aggregates::from_sales(&[]);
        assert_eq!(agg.total_sales, 0.0);
        assert!(agg.product_frequency.is_empty());
        assert!(agg.customer_totals.is_empty());
    }

    #[test]
    fn total_is_order_independent() {
        let mut sales: Vec<Sale> = (0..50)
            .map(|i| sale(i, "C", "P", (i as f64) * 0.1 + 0.01))
            .collect();
        let forward = total_sales(&sales);
        sales.reverse();
        let backward = total_sales(&sales);
        assert!((forward - backward).abs() < 1e-9);
    }

    #[test]
    fn frequencies_sum_to_sale_count() {
        let sales = vec![
            sale(1, "C1", "A", 1.0),
            sale(2, "C2", "B", 1.0),
            sale(3, "C3", "A", 1.0),
            sale(4, "C1", "C", 1.0),
            sale(5, "C1", "A", 1.0),
        ];
        let freq = product_frequency(&sales);
        assert_eq!(freq.values().sum::<u64>(), sales.len() as u64);
    }
}
