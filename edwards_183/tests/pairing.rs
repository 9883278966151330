//! Pairing tests for Edwards-183.

use edwards_183::{Edwards183, Engine, Fq, Fq3, Fq6, Fr, G1Affine, G1Extended, G2Affine, G2Extended};
use towerfield::Field;

pairing::test_engine!(Edwards183);

/// Ate `e(G1, G2)`, coefficients listed from `c0.c0` to `c1.c2`.
const GENERATOR_PAIRING: [&str; 6] = [
    "00007457af4174323f4fec279e5a6b1336ff6b5a6986770a",
    "001223597a75fee3711e0ac6336897035094ddcdc26ae306",
    "001c858d5452cdc7e6195317c43659392484a89af6905191",
    "0019f76ddbe340016e03a95e45c16ac2ec1fe534ed690505",
    "0028350fc2a2b3ca9e81f5b3d292f4b5da4148635916a530",
    "002ec2710ff9f9b2b0115ac4689e4dde705573c0677a163a",
];

/// Reduced Tate `e(G1, G2)`.
const GENERATOR_TATE_PAIRING: [&str; 6] = [
    "00078763fef18ed65e264188dd2ed554d2acfa495668b84f",
    "000a9d926dc2766c5aeafeb33fe9e4bf5409104c503d2aa3",
    "002bea68604e1d09a91fcb156f2ac34bcdfecf0e0c45d5bb",
    "001eb0c974d8a90e251ced6aa570a21be0cf024619bff6d7",
    "0004f9ba29f4fd1e10e59dfb8f49999794ce83c10e1619c9",
    "000082dec1580c61f2bcef07d2dbc3c6f37e74cc00b10cc4",
];

fn fq6_from_hex(coeffs: [&str; 6]) -> Fq6 {
    let fq3 = |c: &[&str]| Fq3::new(Fq::from_hex(c[0]), Fq::from_hex(c[1]), Fq::from_hex(c[2]));
    Fq6::new(fq3(&coeffs[..3]), fq3(&coeffs[3..]))
}

#[test]
fn generator_pairing_value() {
    let e = Edwards183::pairing(&G1Affine::GENERATOR, &G2Affine::GENERATOR);
    assert_eq!(e, fq6_from_hex(GENERATOR_PAIRING));
}

#[test]
fn pairing_of_four_g1() {
    let four_g1 = (G1Extended::generator() * Fr::from_u64(4)).to_affine();
    let e = fq6_from_hex(GENERATOR_PAIRING);
    assert_eq!(Edwards183::pairing(&four_g1, &G2Affine::GENERATOR), e.square().square());
}

#[test]
fn generator_tate_pairing_value() {
    let e = Edwards183::tate_pairing(&G1Affine::GENERATOR, &G2Affine::GENERATOR);
    assert_eq!(e, fq6_from_hex(GENERATOR_TATE_PAIRING));
}

#[test]
fn tate_pairing_is_bilinear() {
    let p = (G1Extended::generator() * Fr::from_u64(3)).to_affine();
    let q = (G2Extended::generator() * Fr::from_u64(5)).to_affine();
    let e = fq6_from_hex(GENERATOR_TATE_PAIRING);

    assert_eq!(Edwards183::tate_pairing(&p, &G2Affine::GENERATOR), Field::pow_vartime(&e, &[3]));
    assert_eq!(Edwards183::tate_pairing(&G1Affine::GENERATOR, &q), Field::pow_vartime(&e, &[5]));
    assert_eq!(Edwards183::tate_pairing(&p, &q), Field::pow_vartime(&e, &[15]));
}

#[test]
fn tate_pairing_of_identity_is_one() {
    assert_eq!(
        Edwards183::tate_pairing(&G1Affine::IDENTITY, &G2Affine::GENERATOR),
        Fq6::ONE
    );
    assert_eq!(
        Edwards183::tate_pairing(&G1Affine::GENERATOR, &G2Affine::IDENTITY),
        Fq6::ONE
    );
}
