use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use jsonsum_core::{digest, Blake3Hasher, Crc32Hasher, Sha256Hasher, Token};
use serde::de::IgnoredAny;

/// An array of `n` small records with nested objects, numbers and strings.
fn records(n: usize) -> String {
    let items: Vec<String> = (0..n)
        .map(|i| {
            format!(
                r#"{{"id":{i},"name":"record-{i}","score":{i}.25e-1,"tags":["a","b\n"],"meta":{{"active":true,"parent":null}}}}"#
            )
        })
        .collect();
    format!("[{}]", items.join(","))
}

fn bench_digest(c: &mut Criterion) {
    let json = records(1_000);
    let mut group = c.benchmark_group("digest");
    group.throughput(Throughput::Bytes(json.len() as u64));

    group.bench_function("parse only", |b| {
        b.iter(|| serde_json::from_str::<IgnoredAny>(black_box(&json)))
    });
    group.bench_function("tokens", |b| {
        b.iter(|| {
            let mut tokens: Vec<Token<'static>> = Vec::new();
            jsonsum_core::json::feed_str(black_box(&json), &mut tokens).map(|()| tokens.len())
        })
    });
    group.bench_function("sha256", |b| {
        b.iter(|| digest(black_box(&json), Sha256Hasher::new))
    });
    group.bench_function("blake3", |b| {
        b.iter(|| digest(black_box(&json), Blake3Hasher::new))
    });
    group.bench_function("crc32", |b| {
        b.iter(|| digest(black_box(&json), Crc32Hasher::new))
    });
    group.finish();
}

criterion_group!(benches, bench_digest);
criterion_main!(benches);
