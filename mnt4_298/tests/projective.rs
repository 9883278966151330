//! Projective arithmetic tests on G1 and G2.

use mnt4_298::{Fq, Fq2, Fr, G1Affine, G1Projective, G2Affine, G2Projective};
use towerfield::subtle::Choice;

mod g1 {
    curvegroup::test_weierstrass_group!(mnt4_298::G1Params);

    mod multiexp {
        curvegroup::test_multiexp!(mnt4_298::G1Projective);
    }
}

mod g2 {
    curvegroup::test_weierstrass_group!(mnt4_298::G2Params);
}

#[test]
fn double_double_generator_is_four_g() {
    let four_g = G1Affine::from_coordinates(
        Fq::from_hex("00000325ba91d8dfc6cdec4843a953e3dc684ea7c0b998a9e1ba5907c6e09728a621f84250e5c20e"),
        Fq::from_hex("00000258b3f2913e3d1a16a1adb531e8019a0bd97a9cb36185398e883aaf3b7c719e22d6cd398a35"),
    )
    .unwrap();

    let g = G1Projective::GENERATOR;
    assert_eq!(g.double().double().to_affine(), four_g);
    assert_eq!((g * Fr::from_u64(4)).to_affine(), four_g);
}

#[test]
fn generator_encoding() {
    let compressed = G1Affine::GENERATOR.to_compressed();
    assert_eq!(compressed.len(), 39);
    assert_eq!(G1Affine::from_bytes(&compressed).unwrap(), G1Affine::GENERATOR);

    let compressed = G2Affine::GENERATOR.to_compressed();
    assert_eq!(compressed.len(), 1 + 2 * 38);
    assert_eq!(G2Affine::from_bytes(&compressed).unwrap(), G2Affine::GENERATOR);
}

#[test]
fn g2_cofactor_clearing() {
    let point = (1..)
        .map(|i| Fq2::new(Fq::from_u64(i), Fq::ONE))
        .find_map(|x| G2Affine::decompress(x, Choice::from(0)).ok())
        .unwrap();

    assert!(!bool::from(point.is_torsion_free()));
    let cleared = G2Projective::from(point).clear_cofactor();
    assert!(bool::from(cleared.is_torsion_free()));
    assert!(!bool::from(cleared.is_identity()));
}
