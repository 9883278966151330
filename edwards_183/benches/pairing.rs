//! Edwards-183 pairing benchmarks

use criterion::{Criterion, criterion_group, criterion_main};
use edwards_183::{Edwards183, Engine, G1Affine, G2Affine};
use std::hint::black_box;

fn bench_pairing(c: &mut Criterion) {
    let mut group = c.benchmark_group("pairing");
    let p = Edwards183::prepare_g1(&G1Affine::GENERATOR);
    let q = Edwards183::prepare_g2(&G2Affine::GENERATOR);
    let f = Edwards183::miller_loop(&p, &q);

    group.bench_function("prepare_g2", |b| {
        b.iter(|| Edwards183::prepare_g2(black_box(&G2Affine::GENERATOR)))
    });
    group.bench_function("miller_loop", |b| {
        b.iter(|| Edwards183::miller_loop(black_box(&p), black_box(&q)))
    });
    group.bench_function("final_exponentiation", |b| {
        b.iter(|| Edwards183::final_exponentiation(black_box(&f)))
    });

    let p = Edwards183::tate_prepare_g1(&G1Affine::GENERATOR);
    let q = Edwards183::tate_prepare_g2(&G2Affine::GENERATOR);
    group.bench_function("tate_miller_loop", |b| {
        b.iter(|| Edwards183::tate_miller_loop(black_box(&p), black_box(&q)))
    });
    group.finish();
}

criterion_group!(benches, bench_pairing);
criterion_main!(benches);
