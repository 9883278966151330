//! BLS12-381 base field and tower benchmarks

use bls12_381::{Fq, Fq2, Fq12, G1Affine, G2Affine};
use criterion::{criterion_group, criterion_main};

fn fq_a() -> Fq {
    *G1Affine::GENERATOR.x()
}

fn fq_b() -> Fq {
    *G1Affine::GENERATOR.y()
}

mod fq {
    use super::*;
    towerfield::bench_field!(bench_fq, "Fq operations", fq_a(), fq_b());
}

mod fq2 {
    use super::*;
    towerfield::bench_field!(
        bench_fq2,
        "Fq2 operations",
        *G2Affine::GENERATOR.x(),
        *G2Affine::GENERATOR.y()
    );
}

mod fq12 {
    use super::*;

    fn element(seed: Fq2) -> Fq12 {
        let fq6 = bls12_381::Fq6::new(seed, seed.square(), seed.double());
        Fq12::new(fq6, fq6.square())
    }

    towerfield::bench_field!(
        bench_fq12,
        "Fq12 operations",
        element(*G2Affine::GENERATOR.x()),
        element(*G2Affine::GENERATOR.y())
    );
}

criterion_group!(benches, fq::bench_fq, fq2::bench_fq2, fq12::bench_fq12);
criterion_main!(benches);
