//! Projective arithmetic tests on G1 and G2.

use bls12_381::{Fq, Fq2, Fr, G1Affine, G1Projective, G2Affine, G2Projective};
use hex_literal::hex;
use towerfield::subtle::Choice;

mod g1 {
    curvegroup::test_weierstrass_group!(bls12_381::G1Params);

    mod multiexp {
        curvegroup::test_multiexp!(bls12_381::G1Projective);
    }
}

mod g2 {
    curvegroup::test_weierstrass_group!(bls12_381::G2Params);
}

#[test]
fn double_double_generator_is_four_g() {
    let four_g = G1Affine::from_coordinates(
        Fq::from_hex(
            "0c9b60d5afcbd5663a8a44b7c5a02f19e9a77ab0a35bd65809bb5c67ec582c897feb04decc694b13e08587f3ff9b5b60",
        ),
        Fq::from_hex(
            "143be6d078c2b79a7d4f1d1b21486a030ec93f56aa54e1de880db5a66dd833a652a95bee27c824084006cb5644cbd43f",
        ),
    )
    .unwrap();

    let g = G1Projective::GENERATOR;
    assert_eq!(g.double().double().to_affine(), four_g);
    assert_eq!((g * Fr::from_u64(4)).to_affine(), four_g);
}

#[test]
fn generator_encoding() {
    let compressed = G1Affine::GENERATOR.to_compressed();
    assert_eq!(compressed.len(), 49);
    // The generator's y-coordinate is odd.
    assert_eq!(compressed[0], 0x03);
    assert_eq!(
        &compressed[1..],
        hex!(
            "17f1d3a73197d7942695638c4fa9ac0fc3688c4f9774b905a14e3a3f171bac586c55e83ff97a1aeffb3af00adb22c6bb"
        )
    );
    assert_eq!(G1Affine::from_bytes(&compressed).unwrap(), G1Affine::GENERATOR);

    let uncompressed = G2Affine::GENERATOR.to_uncompressed();
    assert_eq!(uncompressed.len(), 1 + 4 * 48);
    assert_eq!(G2Affine::from_bytes(&uncompressed).unwrap(), G2Affine::GENERATOR);
}

#[test]
fn g1_cofactor_clearing() {
    let point = (1..)
        .map(Fq::from_u64)
        .find_map(|x| G1Affine::decompress(x, Choice::from(0)).ok())
        .unwrap();

    assert!(bool::from(point.is_on_curve()));
    assert!(!bool::from(point.is_torsion_free()));
    assert_eq!(
        G1Affine::from_bytes(&point.to_compressed()),
        Err(curvegroup::Error::NotInSubgroup)
    );

    let cleared = G1Projective::from(point).clear_cofactor();
    assert!(bool::from(cleared.is_torsion_free()));
    assert!(!bool::from(cleared.is_identity()));
}

#[test]
fn g2_cofactor_clearing() {
    let point = (1..)
        .map(|i| Fq2::new(Fq::from_u64(i), Fq::ONE))
        .find_map(|x| G2Affine::decompress(x, Choice::from(1)).ok())
        .unwrap();

    assert!(!bool::from(point.is_torsion_free()));
    let cleared = G2Projective::from(point).clear_cofactor();
    assert!(bool::from(cleared.is_torsion_free()));
    assert!(!bool::from(cleared.is_identity()));
}
