use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use sales_report::processing::{bottom_products, customers_above, product_trend, top_products, Aggregates};
use sales_report::types::{Customer, Product, Sale};

fn synthetic(n_sales: usize) -> (Vec<Sale>, Vec<Product>, Vec<Customer>) {
    let products: Vec<Product> = (0..500)
        .map(|i| Product {
            code: format!("P{i}"),
            name: format!("Product {i}"),
            price: (i % 97) as f64 + 0.99,
        })
        .collect();
    let customers: Vec<Customer> = (0..2_000)
        .map(|i| Customer {
            code: format!("C{i}"),
            name: format!("Customer {i}"),
            contact_info: format!("c{i}@example.com"),
        })
        .collect();
    let sales: Vec<Sale> = (0..n_sales)
        .map(|i| Sale {
            id: i as i64,
            timestamp: format!("2024-01-{:02} 12:00", i % 28 + 1),
            customer_code: format!("C{}", (i * 7) % 2_000),
            product_code: format!("P{}", (i * i) % 500),
            amount: ((i % 1_000) as f64) * 0.37,
        })
        .collect();
    (sales, products, customers)
}

fn bench_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregation");
    for &n in &[10_000usize, 100_000] {
        let (sales, products, customers) = synthetic(n);

        group.bench_with_input(BenchmarkId::new("aggregates_from_sales", n), &sales, |b, sales| {
            b.iter(|| Aggregates::from_sales(black_box(sales)))
        });

        let agg = Aggregates::from_sales(&sales);
        group.bench_with_input(BenchmarkId::new("rank_top_bottom", n), &products, |b, products| {
            b.iter(|| {
                let top = top_products(black_box(products), &agg.product_frequency, 5);
                let bottom = bottom_products(black_box(products), &agg.product_frequency, 5);
                (top.len(), bottom.len())
            })
        });

        group.bench_with_input(BenchmarkId::new("trend_and_threshold", n), &sales, |b, sales| {
            b.iter(|| {
                let trend = product_trend(black_box(sales), "P42");
                let above = customers_above(&customers, &agg.customer_totals, 500.0);
                (trend.len(), above.len())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_aggregation);
criterion_main!(benches);
