//! Performance benchmarks for content hashing and proof signing.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use capture_sdk::crypto::{build_integrity_proof, sha256_hex, sign_integrity_proof};

// Throwaway key for benchmarks only.
const BENCH_KEY: &str = "0x0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";

/// Benchmark content hashing across asset sizes
fn bench_content_hashing(c: &mut Criterion) {
    let mut group = c.benchmark_group("content_hashing");

    for size in [1024usize, 64 * 1024, 1024 * 1024] {
        let data = vec![0xabu8; size];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("sha256_hex", size), &data, |b, data| {
            b.iter(|| black_box(sha256_hex(data)));
        });
    }

    group.finish();
}

/// Benchmark proof construction and EIP-191 signing
fn bench_proof_signing(c: &mut Criterion) {
    let data = vec![0xabu8; 64 * 1024];

    c.bench_function("build_integrity_proof", |b| {
        b.iter(|| black_box(build_integrity_proof(&data, "image/jpeg")));
    });

    let proof = build_integrity_proof(&data, "image/jpeg");
    c.bench_function("sign_integrity_proof", |b| {
        b.iter(|| black_box(sign_integrity_proof(&proof, BENCH_KEY).unwrap()));
    });
}

criterion_group!(benches, bench_content_hashing, bench_proof_signing);
criterion_main!(benches);
