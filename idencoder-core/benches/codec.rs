//! Benchmarks for id encoding and decoding with the reference configuration.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use idencoder_core::{Config, DEFAULT_MIN_LENGTH};

/// Ids spread over small, block-sized and full-width values
const SAMPLE_IDS: [u64; 3] = [42, 1 << 24, u64::MAX];

fn bench_encode(c: &mut Criterion) {
    let encoder = Config::default().build().unwrap();

    let mut group = c.benchmark_group("encode");
    for &n in &SAMPLE_IDS {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| encoder.encode(black_box(n), DEFAULT_MIN_LENGTH));
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let encoder = Config::default().build().unwrap();

    let mut group = c.benchmark_group("decode");
    for &n in &SAMPLE_IDS {
        let id = encoder.encode(n, DEFAULT_MIN_LENGTH);
        group.bench_with_input(BenchmarkId::from_parameter(n), &id, |b, id| {
            b.iter(|| encoder.decode(black_box(id)));
        });
    }
    group.finish();
}

/// Encode then decode a run of sequential ids, the way a database would hand them out
fn bench_round_trip_sequence(c: &mut Criterion) {
    let encoder = Config::default().build().unwrap();

    c.bench_function("round_trip_1000", |b| {
        b.iter(|| {
            for n in 0..1000u64 {
                let id = encoder.encode(black_box(n), DEFAULT_MIN_LENGTH);
                black_box(encoder.decode(&id).unwrap());
            }
        });
    });
}

criterion_group!(benches, bench_encode, bench_decode, bench_round_trip_sequence);
criterion_main!(benches);
