//! Benchmarks for digest, mining and verification

use std::time::Duration;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use pow512_core::{
    FixedClock, Miner, PayloadBuffer, RngNonceSource, Verifier, digest_hex,
};

fn bench_digest(c: &mut Criterion) {
    let mut payload = PayloadBuffer::new(b"benchmark input data for sha512 proof of work", 0);

    c.bench_function("digest_varying_nonce", |b| {
        let mut nonce: i64 = 0;
        b.iter(|| {
            payload.set_nonce(nonce);
            nonce = nonce.wrapping_add(1);
            digest_hex(black_box(payload.as_bytes()))
        })
    });
}

fn bench_mine(c: &mut Criterion) {
    let mut group = c.benchmark_group("mine");

    for leading_zeros in [1, 2, 3] {
        group.bench_with_input(
            BenchmarkId::from_parameter(leading_zeros),
            &leading_zeros,
            |b, &leading_zeros| {
                let mut miner = Miner::with_parts(RngNonceSource::seeded(3), FixedClock(0));
                b.iter(|| miner.mine(black_box(b"dit is een test"), leading_zeros).unwrap())
            },
        );
    }

    group.finish();
}

fn bench_verify(c: &mut Criterion) {
    let proof = Miner::with_parts(RngNonceSource::seeded(3), FixedClock(0))
        .mine(b"dit is een test", 2)
        .unwrap();
    let verifier = Verifier::with_clock(FixedClock(0));
    let max_age = Duration::from_secs(7200);

    c.bench_function("verify_valid", |b| {
        b.iter(|| verifier.verify(black_box(b"dit is een test"), black_box(&proof), max_age))
    });

    c.bench_function("verify_tampered", |b| {
        b.iter(|| verifier.verify(black_box(b"dit is geen test"), black_box(&proof), max_age))
    });
}

criterion_group!(benches, bench_digest, bench_mine, bench_verify);
criterion_main!(benches);
