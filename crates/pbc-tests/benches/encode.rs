use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use pbc_encoder::{EncoderConfig, MessageEncoder, SizingMode};
use pbc_tests::{AllTypes, Sample};

fn bench_encode_small(c: &mut Criterion) {
    let msg = Sample {
        id: Some(150),
        name: Some("hello".to_string()),
        flags: Some(vec![true, false, true]),
    };

    c.bench_function("encode_small", |b| {
        b.iter(|| MessageEncoder::new().encode_to_vec(black_box(&msg)).unwrap());
    });
}

fn bench_encode_all_types(c: &mut Criterion) {
    let msg = AllTypes::populated();

    c.bench_function("encode_all_types", |b| {
        b.iter(|| MessageEncoder::new().encode_to_vec(black_box(&msg)).unwrap());
    });
}

fn bench_encoded_len(c: &mut Criterion) {
    let msg = AllTypes::populated();

    let mut group = c.benchmark_group("encoded_len");

    for (name, sizing) in [("exact", SizingMode::Exact), ("legacy", SizingMode::Legacy)] {
        let encoder = MessageEncoder::with_config(EncoderConfig {
            sizing,
            ..EncoderConfig::default()
        });
        group.bench_function(name, |b| {
            b.iter(|| encoder.encoded_len(black_box(&msg)).unwrap());
        });
    }

    group.finish();
}

fn bench_encode_repeated(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_repeated");

    for len in [16i64, 256, 4096] {
        let msg = AllTypes {
            deltas: (0..len).map(|i| i * 7919 - 1_000_000).collect(),
            tags: (0..len).map(|i| format!("tag-{i}")).collect(),
            ..AllTypes::default()
        };
        let encoded = MessageEncoder::new().encode_to_vec(&msg).unwrap();
        group.throughput(Throughput::Bytes(encoded.len() as u64));

        group.bench_with_input(BenchmarkId::from_parameter(len), &msg, |b, msg| {
            b.iter(|| MessageEncoder::new().encode_to_vec(black_box(msg)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_encode_small,
    bench_encode_all_types,
    bench_encoded_len,
    bench_encode_repeated
);
criterion_main!(benches);
