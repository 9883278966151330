//! Baby Jubjub scalar multiplication benchmarks

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use babyjubjub::{ExtendedPoint, Fr};

fn bench_scalar_mul(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalar multiplication");
    let g = ExtendedPoint::generator();
    let k = Fr::from_hex("04d6d4a51684f66a926e6d5f0cf355a2ef658af9c74d8b3b85f54649c74db8c1");

    group.bench_function("double", |b| b.iter(|| black_box(&g).double()));
    group.bench_function("scalar_mul", |b| b.iter(|| black_box(&g).scalar_mul(black_box(&k))));
    group.bench_function("mul_vartime", |b| b.iter(|| black_box(&g).mul_vartime(black_box(&k))));
    group.finish();
}

criterion_group!(benches, bench_scalar_mul);
criterion_main!(benches);
