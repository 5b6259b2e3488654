use chrono::{DateTime, Duration, TimeZone, Utc};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dayspan::{merge_overlapping, Event};
use std::hint::black_box;

fn base() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap()
}

/// `count` events with a deterministic mix of gaps, touches and overlaps.
fn generate_events(count: usize) -> Vec<Event> {
    (0..count as i64)
        .map(|i| {
            let start = base() + Duration::minutes(i * 20 + (i * 7919) % 13);
            let end = start + Duration::minutes(15 + (i * 104_729) % 40);
            Event::new("", start, end, None, None, false).unwrap()
        })
        .collect()
}

fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge_overlapping");

    for &count in &[10usize, 100, 1_000, 10_000] {
        let sorted = generate_events(count);
        let mut reversed = sorted.clone();
        reversed.reverse();

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("sorted", count), &sorted, |b, events| {
            b.iter(|| merge_overlapping(black_box(events)))
        });
        group.bench_with_input(BenchmarkId::new("reversed", count), &reversed, |b, events| {
            b.iter(|| merge_overlapping(black_box(events)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_merge);
criterion_main!(benches);
