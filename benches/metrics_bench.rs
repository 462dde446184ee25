//! Benchmarks for the dashboard metrics aggregator
//!
//! Run with: cargo bench

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use dealer_home::{summarize, MetricsMemo, Opportunity, Order};

const STAGES: [&str; 5] = ["Open", "Qualified", "Proposal", "Won", "Lost"];

fn create_opportunities(count: usize) -> Vec<Opportunity> {
    (0..count)
        .map(|i| {
            let stage = STAGES[i % STAGES.len()];
            if i % 2 == 0 {
                Opportunity::new(stage, i as f64 * 125.5)
            } else {
                Opportunity::with_text(stage, format!("${},{:03}.50", i / 1000, i % 1000))
            }
        })
        .collect()
}

fn bench_summarize(c: &mut Criterion) {
    let mut group = c.benchmark_group("summarize");

    for size in [100, 1000, 10000] {
        let opportunities = create_opportunities(size);
        let orders = vec![Order::default(); size / 10];

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("summarize_{}", size), |b| {
            b.iter(|| summarize(black_box(&opportunities), black_box(&orders)))
        });
    }

    group.finish();
}

fn bench_memo(c: &mut Criterion) {
    let opportunities: Arc<[Opportunity]> = create_opportunities(10000).into();
    let orders: Arc<[Order]> = vec![Order::default(); 1000].into();
    let mut memo = MetricsMemo::new();

    c.bench_function("memo_hit_10000", |b| {
        b.iter(|| memo.get(black_box(&opportunities), black_box(&orders)).projects)
    });
}

criterion_group!(benches, bench_summarize, bench_memo);
criterion_main!(benches);
