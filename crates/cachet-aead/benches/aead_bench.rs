//! Performance benchmarks for cachet-aead.
//!
//! Run with: `cargo bench -p cachet-aead`
//!
//! The interesting comparison is the raw-key path (key schedule expanded per
//! call) against the precomputed-context path, per algorithm and message
//! size. AES-256-GCM groups are skipped on hosts without hardware support.

use cachet_aead::{ALGORITHMS, AeadCipher, Algorithm};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

const SIZES: [usize; 4] = [64, 1024, 16384, 65536];

fn bench_inputs(algorithm: Algorithm) -> (Vec<u8>, Vec<u8>) {
    let key = vec![0x42u8; algorithm.key_len()];
    let nonce = vec![0x24u8; algorithm.nonce_len()];
    (key, nonce)
}

fn bench_encrypt_with_key(c: &mut Criterion) {
    let engine = AeadCipher::new();

    for algorithm in ALGORITHMS {
        if !engine.is_available(algorithm) {
            continue;
        }

        let mut group = c.benchmark_group(format!("encrypt_with_key/{algorithm}"));
        let (key, nonce) = bench_inputs(algorithm);

        for size in SIZES {
            let plaintext = vec![0xAA; size];
            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
                b.iter(|| {
                    engine.encrypt(
                        algorithm,
                        black_box(&plaintext),
                        black_box(Some(b"aad")),
                        black_box(&nonce),
                        black_box(&key),
                    )
                })
            });
        }

        group.finish();
    }
}

fn bench_encrypt_with_context(c: &mut Criterion) {
    let engine = AeadCipher::new();

    for algorithm in ALGORITHMS {
        if !engine.is_available(algorithm) {
            continue;
        }

        let mut group = c.benchmark_group(format!("encrypt_with_context/{algorithm}"));
        let (key, nonce) = bench_inputs(algorithm);
        let context = engine.build_context(algorithm, &key).unwrap();

        for size in SIZES {
            let plaintext = vec![0xAA; size];
            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
                b.iter(|| {
                    context.encrypt(
                        black_box(&plaintext),
                        black_box(Some(b"aad")),
                        black_box(&nonce),
                    )
                })
            });
        }

        group.finish();
    }
}

fn bench_decrypt_with_context(c: &mut Criterion) {
    let engine = AeadCipher::new();

    for algorithm in ALGORITHMS {
        if !engine.is_available(algorithm) {
            continue;
        }

        let mut group = c.benchmark_group(format!("decrypt_with_context/{algorithm}"));
        let (key, nonce) = bench_inputs(algorithm);
        let context = engine.build_context(algorithm, &key).unwrap();

        for size in SIZES {
            let plaintext = vec![0xBB; size];
            let combined = context.encrypt(&plaintext, Some(b"aad"), &nonce).unwrap();

            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
                b.iter(|| {
                    context.decrypt(black_box(&combined), black_box(Some(b"aad")), black_box(&nonce))
                })
            });
        }

        group.finish();
    }
}

fn bench_build_context(c: &mut Criterion) {
    let engine = AeadCipher::new();
    let mut group = c.benchmark_group("build_context");

    for algorithm in ALGORITHMS {
        if !engine.is_available(algorithm) {
            continue;
        }

        let (key, _) = bench_inputs(algorithm);
        group.bench_function(algorithm.name(), |b| {
            b.iter(|| engine.build_context(algorithm, black_box(&key)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_encrypt_with_key,
    bench_encrypt_with_context,
    bench_decrypt_with_context,
    bench_build_context
);
criterion_main!(benches);
