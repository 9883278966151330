//! Weierstrass group law on BN254 G1 (`a = 0`) and NIST P-256 (`a = -3`).

use curvegroup::weierstrass::{
    AffinePoint, ProjectivePoint, WeierstrassParams,
    point_arithmetic::{EquationAIsGeneric, EquationAIsZero},
};
use hex_literal::hex;
use towerfield::{Fp, bigint::U256, field_params};

mod bn254 {
    use super::*;

    field_params!(
        name: FqParams,
        modulus: "30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd47",
        uint: U256,
        bytes: 32,
        multiplicative_generator: 3,
        doc: "BN254 base field"
    );

    field_params!(
        name: FrParams,
        modulus: "30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000001",
        uint: U256,
        bytes: 32,
        multiplicative_generator: 5,
        doc: "BN254 scalar field"
    );

    pub type Fq = Fp<FqParams, { U256::LIMBS }>;
    pub type Fr = Fp<FrParams, { U256::LIMBS }>;

    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct G1;

    impl WeierstrassParams for G1 {
        type Base = Fq;
        type Scalar = Fr;
        type PointArithmetic = EquationAIsZero;

        const A: Fq = Fq::ZERO;
        const B: Fq = Fq::from_u64(3);
        const GENERATOR: (Fq, Fq) = (Fq::ONE, Fq::from_u64(2));
        const COFACTOR: &'static [u64] = &[1];
    }

    curvegroup::test_weierstrass_group!(G1);

    mod multiexp {
        curvegroup::test_multiexp!(curvegroup::weierstrass::ProjectivePoint<super::G1>);
    }
}

mod p256 {
    use super::*;

    field_params!(
        name: FieldParams,
        modulus: "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff",
        uint: U256,
        bytes: 32,
        multiplicative_generator: 6,
        doc: "P-256 base field"
    );

    field_params!(
        name: ScalarParams,
        modulus: "ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551",
        uint: U256,
        bytes: 32,
        multiplicative_generator: 7,
        doc: "P-256 scalar field"
    );

    pub type FieldElement = Fp<FieldParams, { U256::LIMBS }>;
    pub type Scalar = Fp<ScalarParams, { U256::LIMBS }>;

    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct NistP256;

    impl WeierstrassParams for NistP256 {
        type Base = FieldElement;
        type Scalar = Scalar;
        type PointArithmetic = EquationAIsGeneric;

        const A: FieldElement =
            FieldElement::from_hex("ffffffff00000001000000000000000000000000fffffffffffffffffffffffc");
        const B: FieldElement =
            FieldElement::from_hex("5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b");
        const GENERATOR: (FieldElement, FieldElement) = (
            FieldElement::from_hex("6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296"),
            FieldElement::from_hex("4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5"),
        );
        const COFACTOR: &'static [u64] = &[1];
    }

    curvegroup::test_weierstrass_group!(NistP256);

    mod multiexp {
        curvegroup::test_multiexp!(curvegroup::weierstrass::ProjectivePoint<super::NistP256>);
    }
}

#[test]
fn bn254_double_generator() {
    let double = ProjectivePoint::<bn254::G1>::GENERATOR.double().to_affine();
    let expected = AffinePoint::<bn254::G1>::from_coordinates(
        bn254::Fq::from_hex("030644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd3"),
        bn254::Fq::from_hex("15ed738c0e0a7c92e7845f96b2ae9c0a68a6a449e3538fc7ff3ebf7a5a18a2c4"),
    )
    .unwrap();
    assert_eq!(double, expected);
}

#[test]
fn p256_double_generator_encoding() {
    let double = ProjectivePoint::<p256::NistP256>::GENERATOR.double().to_affine();
    assert_eq!(
        double.to_uncompressed(),
        hex!(
            "04"
            "7cf27b188d034f7e8a52380304b51ac3c08969e277f21b35a60b48fc47669978"
            "07775510db8ed040293d9ac69f7430dbba7dade63ce982299e04b79d227873d1"
        )
    );
}

#[test]
fn compressed_sign_follows_y_parity() {
    // y = 2 is even.
    let generator = AffinePoint::<bn254::G1>::GENERATOR;
    let compressed = generator.to_compressed();
    assert_eq!(compressed[0], 0x02);
    assert_eq!(&compressed[1..], &hex!("0000000000000000000000000000000000000000000000000000000000000001"));
    assert_eq!(
        AffinePoint::<bn254::G1>::decompress(bn254::Fq::ONE, 0.into()).unwrap(),
        generator
    );
}

#[test]
fn x_off_the_curve_fails_decompression() {
    // 0^3 + 3 = 3 is a non-residue mod the BN254 base field prime.
    let mut bytes = [0u8; 33];
    bytes[0] = 0x02;
    assert_eq!(
        AffinePoint::<bn254::G1>::from_bytes(&bytes),
        Err(curvegroup::Error::NotOnCurve)
    );
}

/// `y^2 = x^3 + 1` over the BN254 base field, which has the 2-torsion point `(-1, 0)`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
struct TwoTorsion;

impl WeierstrassParams for TwoTorsion {
    type Base = bn254::Fq;
    type Scalar = bn254::Fr;
    type PointArithmetic = EquationAIsZero;

    const A: bn254::Fq = bn254::Fq::ZERO;
    const B: bn254::Fq = bn254::Fq::ONE;
    const GENERATOR: (bn254::Fq, bn254::Fq) = (bn254::Fq::ZERO, bn254::Fq::ONE);
    const COFACTOR: &'static [u64] = &[1];
}

#[test]
fn zero_y_only_decompresses_with_even_sign() {
    let x = -bn254::Fq::ONE;
    assert_eq!(
        AffinePoint::<TwoTorsion>::decompress(x, 1.into()),
        Err(curvegroup::Error::InvalidEncoding)
    );

    let point = AffinePoint::<TwoTorsion>::decompress(x, 0.into()).unwrap();
    assert_eq!(*point.y(), bn254::Fq::ZERO);

    let mut bytes = point.to_compressed();
    assert_eq!(bytes[0], 0x02);
    assert_eq!(
        AffinePoint::<TwoTorsion>::from_bytes_unchecked(&bytes).unwrap(),
        point
    );
    bytes[0] = 0x03;
    assert_eq!(
        AffinePoint::<TwoTorsion>::from_bytes_unchecked(&bytes),
        Err(curvegroup::Error::InvalidEncoding)
    );
}
