//! Benchmarks for indicator implementations.

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nova_core::traits::Indicator;
use nova_core::types::{PriceBar, PriceSeries};
use nova_indicators::{Ema, IndicatorEngine, IndicatorParams, Rsi, Sma};

fn generate_test_data(size: usize) -> Vec<f64> {
    (0..size)
        .map(|i| 100.0 + (i as f64 * 0.1).sin() * 10.0)
        .collect()
}

fn generate_series(size: usize) -> PriceSeries {
    let start = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
    let bars = generate_test_data(size)
        .into_iter()
        .enumerate()
        .map(|(i, close)| {
            PriceBar::new(
                "BENCH",
                start + chrono::Days::new(i as u64),
                close,
                close + 1.0,
                close - 1.0,
                close,
                1_000_000.0,
            )
        })
        .collect();
    PriceSeries::new("BENCH", bars).unwrap()
}

fn benchmark_single_indicators(c: &mut Criterion) {
    let mut group = c.benchmark_group("single");

    for size in [1000, 10000, 100000].iter() {
        let data = generate_test_data(*size);

        group.bench_with_input(BenchmarkId::new("sma_20", size), &data, |b, data| {
            let sma = Sma::new(20);
            b.iter(|| sma.calculate_aligned(black_box(data)))
        });

        group.bench_with_input(BenchmarkId::new("ema_50", size), &data, |b, data| {
            let ema = Ema::new(50);
            b.iter(|| ema.calculate_aligned(black_box(data)))
        });

        group.bench_with_input(BenchmarkId::new("rsi_14", size), &data, |b, data| {
            let rsi = Rsi::new(14);
            b.iter(|| rsi.calculate_aligned(black_box(data)))
        });
    }

    group.finish();
}

fn benchmark_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine");
    let engine = IndicatorEngine::new(IndicatorParams::default()).unwrap();

    for size in [1000, 10000].iter() {
        let series = generate_series(*size);
        group.bench_with_input(BenchmarkId::new("full_set", size), &series, |b, series| {
            b.iter(|| engine.compute(black_box(series)))
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_single_indicators, benchmark_engine);
criterion_main!(benches);
