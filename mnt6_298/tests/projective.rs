//! Projective arithmetic tests on G1 and G2.

use mnt6_298::{Fq, Fq3, Fr, G1Affine, G1Projective, G2Affine, G2Projective};
use towerfield::subtle::Choice;

mod g1 {
    curvegroup::test_weierstrass_group!(mnt6_298::G1Params);

    mod multiexp {
        curvegroup::test_multiexp!(mnt6_298::G1Projective);
    }
}

mod g2 {
    curvegroup::test_weierstrass_group!(mnt6_298::G2Params);
}

#[test]
fn double_double_generator_is_four_g() {
    let four_g = G1Affine::from_coordinates(
        Fq::from_hex("000002f33ab72d969a29545de20ba5288ec5b43ee5ce32d1bbd6eb92d51463a6febc020e72e47de2"),
        Fq::from_hex("000000004828a96535a671e4f4ac053a03e7e78354c5e037a9d6c3521c1e60873fc8cb399c9fa01c"),
    )
    .unwrap();

    let g = G1Projective::GENERATOR;
    assert_eq!(g.double().double().to_affine(), four_g);
    assert_eq!((g * Fr::from_u64(4)).to_affine(), four_g);
}

#[test]
fn generator_encoding() {
    let compressed = G2Affine::GENERATOR.to_compressed();
    assert_eq!(compressed.len(), 1 + 3 * 38);
    assert_eq!(G2Affine::from_bytes(&compressed).unwrap(), G2Affine::GENERATOR);

    let uncompressed = G1Affine::GENERATOR.to_uncompressed();
    assert_eq!(uncompressed.len(), 1 + 2 * 38);
    assert_eq!(G1Affine::from_bytes(&uncompressed).unwrap(), G1Affine::GENERATOR);
}

#[test]
fn g2_cofactor_clearing() {
    let point = (1..)
        .map(|i| Fq3::new(Fq::from_u64(i), Fq::ONE, Fq::ZERO))
        .find_map(|x| G2Affine::decompress(x, Choice::from(0)).ok())
        .unwrap();

    assert!(!bool::from(point.is_torsion_free()));
    let cleared = G2Projective::from(point).clear_cofactor();
    assert!(bool::from(cleared.is_torsion_free()));
    assert!(!bool::from(cleared.is_identity()));
}
