//! Product popularity rankings.

use std::collections::HashMap;

use crate::types::Product;

/// Default size of the top/bottom lists.
pub const DEFAULT_RANK_SIZE: usize = 5;

/// Sort direction for [`rank_products`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankOrder {
    /// Most sales first.
    MostSold,
    /// Fewest sales first.
    LeastSold,
}

/// Rank catalog products by sale count and keep the first `n`.
///
/// Products whose code never appears in `frequency` are dropped, so zero-sale products never
/// rank. Equal counts keep catalog order (the sort is stable). Duplicate catalog entries are
/// ranked independently.
pub fn rank_products<'a>(
    products: &'a [Product],
    frequency: &HashMap<String, u64>,
    order: RankOrder,
    n: usize,
) -> Vec<&'a Product> {
    let mut sold: Vec<(&Product, u64)> = products
        .iter()
        .filter_map(|p| frequency.get(&p.code).map(|&count| (p, count)))
        .collect();

    match order {
        RankOrder::MostSold => sold.sort_by(|a, b| b.1.cmp(&a.1)),
        RankOrder::LeastSold => sold.sort_by(|a, b| a.1.cmp(&b.1)),
    }

    sold.into_iter().take(n).map(|(p, _)| p).collect()
}

/// The `n` most frequently sold catalog products.
pub fn top_products<'a>(
    products: &'a [Product],
    frequency: &HashMap<String, u64>,
    n: usize,
) -> Vec<&'a Product> {
    rank_products(products, frequency, RankOrder::MostSold, n)
}

/// The `n` least frequently sold catalog products (among those sold at least once).
pub fn bottom_products<'a>(
    products: &'a [Product],
    frequency: &HashMap<String, u64>,
    n: usize,
) -> Vec<&'a Product> {
    rank_products(products, frequency, RankOrder::LeastSold, n)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(code: &str) -> Product {
        Product {
            code: code.to_string(),
            name: format!("name-{code}"),
            price: 1.0,
        }
    }

    fn freq(pairs: &[(&str, u64)]) -> HashMap<String, u64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    fn codes(ranked: &[&Product]) -> Vec<String> {
        ranked.iter().map(|p| p.code.clone()).collect()
    }

    #[test]
    fn worked_example_top_has_only_sold_products() {
        let products = vec![product("P1"), product("P2"), product("P3")];
        let f = freq(&[("P1", 2), ("P2", 1)]);
        assert_eq!(codes(&top_products(&products, &f, 5)), vec!["P1", "P2"]);
        assert_eq!(codes(&bottom_products(&products, &f, 5)), vec!["P2", "P1"]);
    }

    #[test]
    fn length_is_capped_at_n() {
        let products: Vec<Product> = (0..8).map(|i| product(&format!("P{i}"))).collect();
        let f: HashMap<String, u64> = (0..8).map(|i| (format!("P{i}"), i as u64 + 1)).collect();
        let top = top_products(&products, &f, DEFAULT_RANK_SIZE);
        assert_eq!(codes(&top), vec!["P7", "P6", "P5", "P4", "P3"]);
        let bottom = bottom_products(&products, &f, DEFAULT_RANK_SIZE);
        assert_eq!(codes(&bottom), vec!["P0", "P1", "P2", "P3", "P4"]);
    }

    #[test]
    fn ties_keep_catalog_order_in_both_directions() {
        let products = vec![product("B"), product("A"), product("C"), product("D")];
        let f = freq(&[("A", 2), ("B", 2), ("C", 2), ("D", 1)]);
        assert_eq!(codes(&top_products(&products, &f, 5)), vec!["B", "A", "C", "D"]);
        assert_eq!(codes(&bottom_products(&products, &f, 5)), vec!["D", "B", "A", "C"]);
    }

    #[test]
    fn sales_for_unknown_products_never_rank() {
        let products = vec![product("P1")];
        let f = freq(&[("P1", 1), ("GHOST", 10)]);
        assert_eq!(codes(&top_products(&products, &f, 5)), vec!["P1"]);
    }

    #[test]
    fn duplicate_catalog_entries_rank_independently() {
        let products = vec![product("P1"), product("P1")];
        let f = freq(&[("P1", 3)]);
        assert_eq!(top_products(&products, &f, 5).len(), 2);
    }

    #[test]
    fn empty_frequency_yields_empty_rankings() {
        let products = vec![product("P1")];
        assert!(top_products(&products, &HashMap::new(), 5).is_empty());
        assert!(bottom_products(&products, &HashMap::new(), 5).is_empty());
    }
}
