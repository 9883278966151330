//! Jubjub scalar multiplication benchmarks

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use jubjub::{ExtendedPoint, Fr};

fn bench_scalar_mul(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalar multiplication");
    let g = ExtendedPoint::generator();
    let k = Fr::from_hex("02e5f0fbadd72321ce14a56699d73f0021480683f5c19ce6f6849c795e316f58");

    group.bench_function("double", |b| b.iter(|| black_box(&g).double()));
    group.bench_function("scalar_mul", |b| b.iter(|| black_box(&g).scalar_mul(black_box(&k))));
    group.bench_function("mul_vartime", |b| b.iter(|| black_box(&g).mul_vartime(black_box(&k))));
    group.finish();
}

criterion_group!(benches, bench_scalar_mul);
criterion_main!(benches);
