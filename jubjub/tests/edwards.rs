//! Edwards group law tests.

use jubjub::{AffinePoint, ExtendedPoint, Fq, Fr};
use towerfield::subtle::Choice;

mod group {
    curvegroup::test_edwards_group!(jubjub::JubjubParams);

    mod multiexp {
        curvegroup::test_multiexp!(jubjub::ExtendedPoint);
    }
}

#[test]
fn double_double_generator_is_four_g() {
    let four_g = AffinePoint::from_coordinates(
        Fq::from_hex("4700c53930f4ecfa0d58a6d76f3bf22c7faeb657e16ef540bc6c3368c7e2531f"),
        Fq::from_hex("03fb7bf5eb8791a69b20113a1d33668dd4e629381ed8b99011a2e36e866d07c8"),
    )
    .unwrap();

    let g = ExtendedPoint::generator();
    assert_eq!(g.double().double().to_affine(), four_g);
    assert_eq!((g * Fr::from_u64(4)).to_affine(), four_g);
}

#[test]
fn generator_encoding() {
    let bytes = AffinePoint::GENERATOR.to_bytes();
    assert_eq!(bytes.len(), 32);
    // The generator's x-coordinate is odd.
    assert_eq!(bytes[0] & 0x80, 0x80);
    assert_eq!(&bytes[1..], &Fq::from_hex("1d523cf1ddab1a1793132e78c866c0c33e26ba5cc220fed7cc3f870e59d292aa").to_bytes().as_ref()[1..]);
    assert_eq!(AffinePoint::from_bytes(&bytes).unwrap(), AffinePoint::GENERATOR);
}

#[test]
fn identity_is_zero_one() {
    let identity = ExtendedPoint::IDENTITY.to_affine();
    assert_eq!(*identity.x(), Fq::ZERO);
    assert_eq!(*identity.y(), Fq::ONE);
    assert_eq!(identity, AffinePoint::IDENTITY);
    assert_eq!(&ExtendedPoint::generator() + &identity, ExtendedPoint::generator());
}

#[test]
fn small_order_points_are_rejected() {
    // (0, -1) has order two.
    let two_torsion = AffinePoint::from_coordinates_unchecked(Fq::ZERO, -Fq::ONE);
    assert!(bool::from(two_torsion.is_on_curve()));
    assert_eq!(two_torsion.to_extended().double(), ExtendedPoint::IDENTITY);
    assert_eq!(
        AffinePoint::from_bytes(&two_torsion.to_bytes()),
        Err(curvegroup::Error::NotInSubgroup)
    );
}

#[test]
fn cofactor_clearing() {
    let two_torsion = AffinePoint::from_coordinates_unchecked(Fq::ZERO, -Fq::ONE);
    let point = &ExtendedPoint::generator() + &two_torsion;
    assert!(bool::from(point.is_on_curve()));
    assert!(!bool::from(point.is_torsion_free()));

    let cleared = point.clear_cofactor();
    assert!(bool::from(cleared.is_torsion_free()));
    assert_eq!(cleared, ExtendedPoint::generator() * Fr::from_u64(8));
}

#[test]
fn decompression_recovers_the_sign() {
    let g = AffinePoint::GENERATOR;
    let positive = AffinePoint::decompress(*g.y(), Choice::from(0)).unwrap();
    let negative = AffinePoint::decompress(*g.y(), Choice::from(1)).unwrap();
    assert_eq!(negative, -positive);
    assert!(positive == g || negative == g);
}
