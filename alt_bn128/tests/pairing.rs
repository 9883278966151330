//! Pairing tests for alt_bn128.

use alt_bn128::{Bn254, Engine, Fq, Fq2, Fq6, Fq12, Fr, G1Affine, G1Projective, G2Affine};

pairing::test_engine!(Bn254);

/// `e(G1, G2)`, coefficients listed from `c0.c0.c0` to `c1.c2.c1`.
const GENERATOR_PAIRING: [&str; 12] = [
    "262b253feda94cfe0da01bde280a3ed6f87e5feb898578b55e1f63739d870e95",
    "02e02d2cc795a2000a1b1f823879abbd397c4dea0918ed66b49d34b48efb8a4a",
    "13a9f2d6e29b128da5b1ad44b31977935fd2957387ecb1fc4e135402fdbd1de0",
    "040ba9fa500f1a5c4b31984a74e68659c4b420bd699ce630b130b08a6ea1162b",
    "0afc2f3fd870678fbe359d7f9873f052478f590b211ce30bf5e3eeaef89eafdb",
    "1c54a530398c9064bdc662d929e645cadda9a712cc5a8243f9cddbd2d98dd1f0",
    "095c0fbf5d5a1ac023794a0d856f92591ba990ecfd4b7aef5c0d58c5dc2429fe",
    "14d3d6ca72d8a950a31dc10f7b4053c9e9ad9ebb590cb4a60f8215d4b99f2b4a",
    "1dc0e7bbc3d70e6689dc206b4b91c85759dc1a23043c585fdfaf545838ca7429",
    "0b53320e5a6488cb98a855ffc837d2a75ab90d61ac16cc1b7ab2cd3ed5e22b97",
    "13a8afd3085dae4c6c91476ef36cd1d318ce07bac42a9c0f9bd7fddaf5ebd723",
    "00f97b5221474526b601f3730a3afa965ceee1b343940c383e5314859e762c97",
];

fn fq12_from_hex(coeffs: [&str; 12]) -> Fq12 {
    let fq2 = |i: usize| Fq2::new(Fq::from_hex(coeffs[2 * i]), Fq::from_hex(coeffs[2 * i + 1]));
    Fq12::new(
        Fq6::new(fq2(0), fq2(1), fq2(2)),
        Fq6::new(fq2(3), fq2(4), fq2(5)),
    )
}

#[test]
fn generator_pairing_value() {
    let e = Bn254::pairing(&G1Affine::GENERATOR, &G2Affine::GENERATOR);
    assert_eq!(e, fq12_from_hex(GENERATOR_PAIRING));
}

#[test]
fn pairing_of_four_g1() {
    let four_g1 = (G1Projective::GENERATOR * Fr::from_u64(4)).to_affine();
    let e = fq12_from_hex(GENERATOR_PAIRING);
    assert_eq!(
        Bn254::pairing(&four_g1, &G2Affine::GENERATOR),
        e.square().square()
    );
}

#[test]
fn ethereum_style_product_check() {
    // e(-2G1, G2) · e(G1, 2G2) == 1
    let two = Fr::from_u64(2);
    let lhs = (-(G1Projective::GENERATOR * two)).to_affine();
    let rhs = (alt_bn128::G2Projective::GENERATOR * two).to_affine();
    assert!(Bn254::pairing_product_is_one(&[
        (lhs, G2Affine::GENERATOR),
        (G1Affine::GENERATOR, rhs),
    ]));
}
