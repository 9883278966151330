//! MNT6-298 pairing benchmarks

use criterion::{Criterion, criterion_group, criterion_main};
use mnt6_298::{Engine, G1Affine, G2Affine, Mnt6_298};
use std::hint::black_box;

fn bench_pairing(c: &mut Criterion) {
    let mut group = c.benchmark_group("pairing");
    let p = Mnt6_298::prepare_g1(&G1Affine::GENERATOR);
    let q = Mnt6_298::prepare_g2(&G2Affine::GENERATOR);
    let f = Mnt6_298::miller_loop(&p, &q);

    group.bench_function("prepare_g2", |b| {
        b.iter(|| Mnt6_298::prepare_g2(black_box(&G2Affine::GENERATOR)))
    });
    group.bench_function("miller_loop", |b| {
        b.iter(|| Mnt6_298::miller_loop(black_box(&p), black_box(&q)))
    });
    group.bench_function("final_exponentiation", |b| {
        b.iter(|| Mnt6_298::final_exponentiation(black_box(&f)))
    });
    group.finish();
}

criterion_group!(benches, bench_pairing);
criterion_main!(benches);
