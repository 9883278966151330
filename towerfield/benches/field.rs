//! Prime field and runtime modular integer benchmarks

use criterion::{
    BenchmarkGroup, Criterion, criterion_group, criterion_main, measurement::Measurement,
};
use hex_literal::hex;
use towerfield::{Fp, Modulus, bigint::U256, field_params};

field_params!(
    name: FrParams,
    modulus: "73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001",
    uint: U256,
    bytes: 32,
    multiplicative_generator: 7,
    doc: "BLS12-381 scalar field"
);

type Fr = Fp<FrParams, { U256::LIMBS }>;

fn test_element() -> Fr {
    Fr::from_slice(&hex!(
        "1ccbe91c075fc7f4f033bfa248db8fccd3565de94bbfb12f3c59ff46c271bf83"
    ))
    .unwrap()
}

fn bench_fp_invert<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let x = test_element();
    group.bench_function("invert (fermat)", |b| b.iter(|| x.invert()));
    group.bench_function("invert (euclid)", |b| b.iter(|| x.invert_vartime()));
}

fn bench_fp_sqrt<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let x = test_element().square();
    group.bench_function("sqrt", |b| b.iter(|| x.sqrt()));
}

fn bench_modular_mul<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let a = U256::from_be_hex("1ccbe91c075fc7f4f033bfa248db8fccd3565de94bbfb12f3c59ff46c271bf83");
    let b = U256::from_be_hex("0e4014c68811f9a21a1fdb2c0e6113e06db7ca93b7404e78dc7ccd5ca89a4ca9");

    let odd = Modulus::new(Fr::modulus()).unwrap();
    let (x, y) = (odd.element(&a), odd.element(&b));
    group.bench_function("mul (montgomery)", |bench| bench.iter(|| x * y));

    let even = Modulus::new(&Fr::modulus().wrapping_add(&U256::ONE)).unwrap();
    let (x, y) = (even.element(&a), even.element(&b));
    group.bench_function("mul (barrett)", |bench| bench.iter(|| x * y));
}

fn bench_field(c: &mut Criterion) {
    let mut group = c.benchmark_group("prime field operations");
    bench_fp_invert(&mut group);
    bench_fp_sqrt(&mut group);
    bench_modular_mul(&mut group);
    group.finish();
}

criterion_group!(benches, bench_field);
criterion_main!(benches);
