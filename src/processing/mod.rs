//! In-memory aggregations, rankings and filters.
//!
//! The processing layer operates on the records produced by [`crate::ingestion`]. Every
//! function here is pure: inputs are borrowed, results are freshly built.
//!
//! - [`aggregate`]: total sales, sale count per product, purchase total per customer
//! - [`rank`]: top/bottom products by sale count
//! - [`filter`]: sales trend for one product, customers above a purchase threshold
//!
//! ## Example
//!
//! ```rust
//! use sales_report::processing::{customers_above, product_trend, top_products, Aggregates};
//! use sales_report::types::{Customer, Product, Sale};
//!
//! let sale = |id: i64, c: &str, p: &str, amount: f64| Sale {
//!     id,
//!     timestamp: format!("t{id}"),
//!     customer_code: c.to_string(),
//!     product_code: p.to_string(),
//!     amount,
//! };
//! let sales = vec![sale(1, "C1", "P1", 100.0), sale(2, "C2", "P1", 50.0), sale(3, "C1", "P2", 30.0)];
//! let products = vec![
//!     Product { code: "P1".into(), name: "Pen".into(), price: 1.0 },
//!     Product { code: "P2".into(), name: "Pad".into(), price: 2.0 },
//! ];
//! let customers = vec![
//!     Customer { code: "C1".into(), name: "Ann".into(), contact_info: String::new() },
//!     Customer { code: "C2".into(), name: "Bob".into(), contact_info: String::new() },
//! ];
//!
//! let agg = Aggregates::from_sales(&sales);
//! assert_eq!(agg.total_sales, 180.0);
//!
//! let top = top_products(&products, &agg.product_frequency, 5);
//! assert_eq!(top.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(), vec!["Pen", "Pad"]);
//!
//! assert_eq!(product_trend(&sales, "P1").len(), 2);
//! assert_eq!(customers_above(&customers, &agg.customer_totals, 40.0).len(), 2);
//! ```

pub mod aggregate;
pub mod filter;
pub mod rank;

pub use aggregate::{customer_totals, product_frequency, total_sales, Aggregates};
pub use filter::{customers_above, product_trend};
pub use rank::{bottom_products, rank_products, top_products, RankOrder, DEFAULT_RANK_SIZE};
