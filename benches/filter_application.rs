use std::hint::black_box;

use chat_analyzer::filters::apply::apply_filters;
use chat_analyzer::filters::parser::parse_filter;
use chat_analyzer::models::{ChatRecord, ChatRecordSet};
use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

/// Generate synthetic records, one every 20 minutes from 1 January 2024
fn generate_records(num_records: usize) -> ChatRecordSet {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();

    let records = (0..num_records)
        .map(|i| {
            ChatRecord::new(
                Some(format!("User {}", i % 5)),
                format!("Test message {}", i),
                start + chrono::Duration::minutes(i as i64 * 20),
            )
        })
        .collect();

    ChatRecordSet::new(records)
}

fn bench_filter_application(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_application");

    // Benchmark author filter (string comparison)
    for size in [1_000, 10_000, 50_000].iter() {
        let records = generate_records(*size);
        let filter = parse_filter("user:\"User 1\"").unwrap();

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("author_filter", size), size, |b, _| {
            b.iter(|| apply_filters(black_box(&records), black_box(&filter)));
        });
    }

    // Benchmark date range filter (date comparison)
    for size in [1_000, 10_000, 50_000].iter() {
        let records = generate_records(*size);
        let filter = parse_filter("from:2024-01-15 to:2024-02-15").unwrap();

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("date_filter", size), size, |b, _| {
            b.iter(|| apply_filters(black_box(&records), black_box(&filter)));
        });
    }

    // Benchmark combined filter (date range AND author)
    for size in [1_000, 10_000, 50_000].iter() {
        let records = generate_records(*size);
        let filter = parse_filter("user:\"User 1\" from:2024-01-15 to:2024-02-15").unwrap();

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("combined_filter", size), size, |b, _| {
            b.iter(|| apply_filters(black_box(&records), black_box(&filter)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_filter_application);
criterion_main!(benches);
