//! Performance benchmarks for the Experience Engine.
//!
//! Covers the duration calculator, the aggregator at increasing input sizes,
//! and a full `/summary` request through the router.

use axum::body::Body;
use axum::http::Request;
use chrono::{Days, NaiveDate};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use tower::ServiceExt;

use experience_engine::api::{AppState, PeriodRequest, SummaryRequest, create_router};
use experience_engine::calculation::{
    calculate_duration, calculate_duration_from_str, sum_durations,
};
use experience_engine::config::ConfigLoader;
use experience_engine::models::{Duration, ExperiencePeriod};

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 31).unwrap()
}

/// Builds `count` back-to-back periods of varying length.
fn create_periods(count: usize) -> Vec<ExperiencePeriod> {
    let mut start = base_date();
    (0..count)
        .map(|i| {
            let end = start + Days::new(30 + (i as u64 * 37) % 700);
            let period = ExperiencePeriod::with_id(format!("period_{:04}", i), start, end);
            start = end + Days::new(1);
            period
        })
        .collect()
}

fn create_durations(count: usize) -> Vec<Duration> {
    create_periods(count).iter().map(|p| p.duration()).collect()
}

/// Benchmark: single duration from parsed dates.
fn bench_calculate_duration(c: &mut Criterion) {
    let start = base_date();
    let end = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();

    c.bench_function("calculate_duration", |b| {
        b.iter(|| black_box(calculate_duration(black_box(start), black_box(end))))
    });
}

/// Benchmark: single duration including parsing both dates.
fn bench_calculate_duration_from_str(c: &mut Criterion) {
    c.bench_function("calculate_duration_from_str", |b| {
        b.iter(|| {
            black_box(calculate_duration_from_str(
                black_box("2000-01-31"),
                black_box("29/02/2024"),
            ))
        })
    });
}

/// Benchmark: aggregation at increasing sizes.
fn bench_sum_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("sum_durations");

    for count in [10usize, 100, 1000] {
        let durations = create_durations(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("durations", count), &durations, |b, d| {
            b.iter(|| black_box(sum_durations(d.iter().copied())))
        });
    }

    group.finish();
}

/// Benchmark: `/summary` with 100 periods through the router.
fn bench_summary_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(AppState::new(ConfigLoader::default()));
    let request = SummaryRequest {
        periods: create_periods(100)
            .into_iter()
            .map(PeriodRequest::from)
            .collect(),
    };
    let body = serde_json::to_string(&request).unwrap();

    c.bench_function("summary_100_periods", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/summary")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_calculate_duration,
    bench_calculate_duration_from_str,
    bench_sum_scaling,
    bench_summary_endpoint,
);
criterion_main!(benches);
