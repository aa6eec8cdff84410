//! Criterion benchmarks for series building

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use trendline::services::{Aggregator, ComparisonEngine, StreakEngine};
use trendline::types::{CalendarDate, Granularity, Record, Window};

const CATEGORIES: [&str; 6] = ["food", "rent", "gym", "travel", "books", "coffee"];

/// Deterministic synthetic records spread over roughly three years
fn make_records(count: usize) -> Vec<Record> {
    let base = CalendarDate::from_ymd(2022, 1, 1).unwrap();
    (0..count)
        .map(|i| {
            let offset = ((i * 7919) % 1100) as i64;
            Record {
                date: base.add_days(offset).unwrap(),
                value: ((i * 31) % 500) as f64 / 10.0,
                category: Some(CATEGORIES[i % CATEGORIES.len()].to_string()),
            }
        })
        .collect()
}

fn full_window() -> Window {
    Window::new(
        CalendarDate::from_ymd(2022, 1, 1).unwrap(),
        CalendarDate::from_ymd(2024, 12, 31).unwrap(),
    )
}

fn bench_series_by_granularity(c: &mut Criterion) {
    let records = make_records(10_000);
    let window = full_window();

    let mut group = c.benchmark_group("series_at");
    group.throughput(Throughput::Elements(records.len() as u64));

    for granularity in [Granularity::Day, Granularity::Week, Granularity::Month] {
        group.bench_with_input(
            BenchmarkId::from_parameter(granularity.label()),
            &granularity,
            |b, &granularity| {
                b.iter(|| Aggregator::series_at(black_box(&records), &window, granularity))
            },
        );
    }

    group.finish();
}

fn bench_series_by_size(c: &mut Criterion) {
    let window = full_window();
    let mut group = c.benchmark_group("series");

    for size in [100, 1_000, 10_000, 100_000] {
        let records = make_records(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &records, |b, records| {
            b.iter(|| Aggregator::series(black_box(records), &window))
        });
    }

    group.finish();
}

fn bench_comparison_and_streak(c: &mut Criterion) {
    let records = make_records(10_000);
    let window = Window::new(
        CalendarDate::from_ymd(2024, 1, 1).unwrap(),
        CalendarDate::from_ymd(2024, 6, 30).unwrap(),
    );
    let today = CalendarDate::from_ymd(2024, 12, 31).unwrap();

    c.bench_function("compare", |b| {
        b.iter(|| ComparisonEngine::compare(black_box(&records), &window))
    });
    c.bench_function("streak_longest", |b| {
        b.iter(|| StreakEngine::longest(black_box(&records)))
    });
    c.bench_function("streak_current", |b| {
        b.iter(|| StreakEngine::current(black_box(&records), today))
    });
}

criterion_group!(
    benches,
    bench_series_by_granularity,
    bench_series_by_size,
    bench_comparison_and_streak
);
criterion_main!(benches);
