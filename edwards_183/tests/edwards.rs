//! Edwards group law tests on G1 and G2.

use edwards_183::{Fq, Fq3, Fr, G1Affine, G1Extended, G2Affine, G2Extended};
use towerfield::subtle::Choice;

mod g1 {
    curvegroup::test_edwards_group!(edwards_183::G1Params);

    mod multiexp {
        curvegroup::test_multiexp!(edwards_183::G1Extended);
    }
}

mod g2 {
    curvegroup::test_edwards_group!(edwards_183::G2Params);
}

#[test]
fn double_double_generator_is_four_g() {
    let four_g = G1Affine::from_coordinates(
        Fq::from_hex("0032c31142efb094d0d05daba5caa5af5a8f6186ba916d7a"),
        Fq::from_hex("000de359f217a059b7043f58bb80a9eeec04d66aec2a971a"),
    )
    .unwrap();

    let g = G1Extended::generator();
    assert_eq!(g.double().double().to_affine(), four_g);
    assert_eq!((g * Fr::from_u64(4)).to_affine(), four_g);
}

#[test]
fn generator_encoding() {
    let bytes = G1Affine::GENERATOR.to_bytes();
    assert_eq!(bytes.len(), 24);
    assert_eq!(G1Affine::from_bytes(&bytes).unwrap(), G1Affine::GENERATOR);

    let bytes = G2Affine::GENERATOR.to_bytes();
    assert_eq!(bytes.len(), 3 * 24);
    assert_eq!(G2Affine::from_bytes(&bytes).unwrap(), G2Affine::GENERATOR);
}

#[test]
fn g1_cofactor_clearing() {
    // (0, -1) has order two.
    let two_torsion = G1Affine::from_coordinates_unchecked(Fq::ZERO, -Fq::ONE);
    assert_eq!(
        G1Affine::from_bytes(&two_torsion.to_bytes()),
        Err(curvegroup::Error::NotInSubgroup)
    );

    let point = &G1Extended::generator() + &two_torsion;
    assert!(bool::from(point.is_on_curve()));
    assert!(!bool::from(point.is_torsion_free()));

    let cleared = point.clear_cofactor();
    assert!(bool::from(cleared.is_torsion_free()));
    assert_eq!(cleared, G1Extended::generator() * Fr::from_u64(4));
}

#[test]
fn g2_cofactor_clearing() {
    let point = G2Affine::decompress(Fq3::new(Fq::from_u64(3), Fq::ONE, Fq::ZERO), Choice::from(0))
        .unwrap();
    assert!(bool::from(point.is_on_curve()));

    let point = G2Extended::from(point);
    assert!(!bool::from(point.is_torsion_free()));

    let cleared = point.clear_cofactor();
    assert!(bool::from(cleared.is_torsion_free()));
    assert!(!bool::from(cleared.is_identity()));
}
