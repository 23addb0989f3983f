//! Criterion benchmarks for driver_logger_system

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use driver_logger_system::prelude::*;
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

/// Accepts everything and does nothing, isolating dispatch overhead
struct NullDriver;

impl Driver for NullDriver {
    fn log(&self, entry: &LogEntry) -> Result<()> {
        black_box(entry);
        Ok(())
    }

    fn close(&self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "null"
    }
}

fn null_logger(drivers: usize) -> Logger {
    let mut builder = Logger::builder();
    for _ in 0..drivers {
        builder = builder.driver(NullDriver);
    }
    builder.build()
}

fn sample_attrs() -> Attributes {
    let mut attrs = Attributes::new();
    attrs.insert("user_id".to_string(), "12345".to_string());
    attrs.insert("request_id".to_string(), "req-abc-123".to_string());
    attrs.insert("duration_ms".to_string(), "42".to_string());
    attrs
}

// ============================================================================
// Dispatch Benchmarks
// ============================================================================

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    group.throughput(Throughput::Elements(1));

    for drivers in [1usize, 4, 16] {
        let logger = null_logger(drivers);
        group.bench_with_input(BenchmarkId::new("info", drivers), &logger, |b, logger| {
            b.iter(|| logger.info(black_box("Info message")));
        });
    }

    let logger = null_logger(1);
    group.bench_function("with_attributes", |b| {
        b.iter(|| logger.info_with_attrs(black_box("Request handled"), sample_attrs()));
    });

    group.bench_function("transaction", |b| {
        let tx = logger.transaction("tx-bench");
        b.iter(|| tx.info(black_box("In transaction")));
    });

    group.finish();
}

// ============================================================================
// Driver Benchmarks
// ============================================================================

fn bench_file_drivers(c: &mut Criterion) {
    let mut group = c.benchmark_group("file_drivers");
    group.throughput(Throughput::Elements(1));

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let entry = LogEntry::new(LogLevel::Info, "Request handled")
        .with_attributes(sample_attrs())
        .with_transaction_id("tx-bench");

    let json = JsonFileDriver::new(temp_dir.path().join("bench.jsonl"))
        .expect("Failed to create json driver");
    group.bench_function("json_file", |b| {
        b.iter(|| json.log(black_box(&entry)));
    });

    let text = TextFileDriver::new(temp_dir.path().join("bench.log"))
        .expect("Failed to create text driver");
    group.bench_function("text_file", |b| {
        b.iter(|| text.log(black_box(&entry)));
    });

    let filtered = JsonFileDriver::new(temp_dir.path().join("filtered.jsonl"))
        .expect("Failed to create json driver")
        .with_min_level(LogLevel::Error);
    group.bench_function("below_threshold", |b| {
        b.iter(|| filtered.log(black_box(&entry)));
    });

    group.finish();
}

fn bench_timestamp_formats(c: &mut Criterion) {
    let mut group = c.benchmark_group("timestamp_format");
    let now = chrono::Utc::now();

    let formats = [
        ("rfc3339", TimestampFormat::Rfc3339),
        ("iso8601_millis", TimestampFormat::Iso8601Millis),
        ("custom", TimestampFormat::Custom("%Y/%m/%d %H:%M:%S".to_string())),
    ];
    for (name, format) in formats {
        group.bench_function(name, |b| b.iter(|| format.format(black_box(&now))));
    }

    group.finish();
}

// ============================================================================
// Concurrency Benchmarks
// ============================================================================

fn bench_concurrent_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_logging");

    for threads in [2usize, 4, 8] {
        group.throughput(Throughput::Elements((threads * 100) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(threads), &threads, |b, &threads| {
            let logger = Arc::new(null_logger(2));
            b.iter(|| {
                let handles: Vec<_> = (0..threads)
                    .map(|_| {
                        let logger = Arc::clone(&logger);
                        thread::spawn(move || {
                            for i in 0..100 {
                                let _ = logger.info(format!("message {}", i));
                            }
                        })
                    })
                    .collect();
                for handle in handles {
                    let _ = handle.join();
                }
            });
        });
    }

    group.finish();
}

fn bench_level_parsing(c: &mut Criterion) {
    c.bench_function("level_parse", |b| {
        b.iter(|| black_box("warn").parse::<LogLevel>());
    });
}

criterion_group!(
    benches,
    bench_dispatch,
    bench_file_drivers,
    bench_timestamp_formats,
    bench_concurrent_logging,
    bench_level_parsing,
);

criterion_main!(benches);
