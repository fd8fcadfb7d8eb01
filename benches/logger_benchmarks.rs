//! Criterion benchmarks for rust_service_logger

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rust_service_logger::prelude::*;
use std::io;

fn discard_logger(level: &str) -> Logger {
    Logger::builder("bench").level(level).writer(io::sink()).build()
}

// ============================================================================
// Level Gate Benchmarks
// ============================================================================

fn bench_filtered(c: &mut Criterion) {
    let mut group = c.benchmark_group("filtered");
    group.throughput(Throughput::Elements(1));

    let logger = discard_logger("error");
    let fields = [field("user_id", 42), field("action", "login")];

    group.bench_function("debug_no_fields", |b| {
        b.iter(|| logger.debug(black_box("Debug message"), &[]));
    });

    group.bench_function("debug_with_fields", |b| {
        b.iter(|| logger.debug(black_box("Debug message"), black_box(&fields)));
    });

    group.finish();
}

// ============================================================================
// Emission Benchmarks
// ============================================================================

fn bench_emitted(c: &mut Criterion) {
    let mut group = c.benchmark_group("emitted");
    group.throughput(Throughput::Elements(1));

    let logger = discard_logger("debug");

    group.bench_function("info_no_fields", |b| {
        b.iter(|| logger.info(black_box("Info message"), &[]));
    });

    let fields = [
        field("user_id", 42),
        field("action", "login"),
        field("latency", std::time::Duration::from_micros(350)),
    ];
    group.bench_function("info_call_fields", |b| {
        b.iter(|| logger.info(black_box("Info message"), black_box(&fields)));
    });

    let derived = logger.with_fields(fields.clone());
    group.bench_function("info_context_fields", |b| {
        b.iter(|| derived.info(black_box("Info message"), &[]));
    });

    group.finish();
}

// ============================================================================
// Derivation Benchmarks
// ============================================================================

fn bench_derivation(c: &mut Criterion) {
    let mut group = c.benchmark_group("derivation");
    group.throughput(Throughput::Elements(1));

    let logger = discard_logger("info").with_fields((0..8).map(|i| field(format!("k{}", i), i)));

    group.bench_function("with_field", |b| {
        b.iter(|| black_box(logger.with_field(field("request_id", "abc-123"))));
    });

    group.bench_function("with_fields_empty", |b| {
        b.iter(|| black_box(logger.with_fields(Vec::new())));
    });

    group.finish();
}

criterion_group!(benches, bench_filtered, bench_emitted, bench_derivation);
criterion_main!(benches);
