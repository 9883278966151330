//! Group operations on MNT4-298 and its quadratic twist.

pub(crate) mod field;
pub(crate) mod scalar;
pub mod tower;

use self::{field::Fq, scalar::Fr, tower::Fq2};
use curvegroup::weierstrass::{
    AffinePoint, ProjectivePoint, WeierstrassParams, point_arithmetic::EquationAIsGeneric,
};

/// G1 point in affine coordinates.
pub type G1Affine = AffinePoint<G1Params>;

/// G1 point in projective coordinates.
pub type G1Projective = ProjectivePoint<G1Params>;

/// G2 point in affine coordinates.
pub type G2Affine = AffinePoint<G2Params>;

/// G2 point in projective coordinates.
pub type G2Projective = ProjectivePoint<G2Params>;

/// `E: y^2 = x^3 + 2x + b` over `Fq`, a curve of prime order.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, PartialOrd, Ord)]
pub struct G1Params;

impl WeierstrassParams for G1Params {
    type Base = Fq;
    type Scalar = Fr;
    type PointArithmetic = EquationAIsGeneric;

    const A: Fq = Fq::from_u64(2);
    const B: Fq = Fq::from_hex("000003545a27639415585ea4d523234fc3edd2a2070a085c7b980f4e9cd21a515d4b0ef528ec0fd5");
    const GENERATOR: (Fq, Fq) = (
        Fq::from_hex("0000007a2caf82a1ba85213fe6ca3875aee86aba8f73d69060c4079492b948dea216b5b9c8d2af46"),
        Fq::from_hex("000002db619461cc82672f7f159fec2e89d0148dcc9862d36778c1afd96a71e29cba48e710a48ab2"),
    );
    const COFACTOR: &'static [u64] = &[1];
}

/// `E': y^2 = x^3 + 2u^2·x + b·u^3` over `Fq2`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, PartialOrd, Ord)]
pub struct G2Params;

impl WeierstrassParams for G2Params {
    type Base = Fq2;
    type Scalar = Fr;
    type PointArithmetic = EquationAIsGeneric;

    const A: Fq2 = Fq2::from_base(Fq::from_u64(34));
    const B: Fq2 = Fq2::new(
        Fq::ZERO,
        Fq::from_hex("00000087788d2a0ee6e223b5540063ee1ecd2ff0038ab06a5c24b1b1a912ec4d6a3b6efb12b30d16"),
    );
    const GENERATOR: (Fq2, Fq2) = (
        Fq2::new(
            Fq::from_hex("00000371780491c5660571ff542f2ef89001f205151e12a72cb14f01a931e72dba7903df6c09a9a4"),
            Fq::from_hex("0000004ba59a3f72da165def838081af697c851f002f576303302bb6c02c712c968be32c0ae0a989"),
        ),
        Fq2::new(
            Fq::from_hex("0000004b471f33ffaad868a1c47d6605d31e5c4b3b2e0b60ec98f0f610a5aafd0d9522bca4e79f22"),
            Fq::from_hex("00000355d05a1c69a5031f3f81a5c100cb7d982f78ec9cfc3b5168ed8d75c7c484fb61a3cbf0e0f1"),
        ),
    );
    const COFACTOR: &'static [u64] = &[
        0xd6d67810e2cc0001,
        0x880a7ab50fe2b151,
        0xcaeec9635d32203f,
        0xa266249da7b0548e,
        0x000003bcf7bcd473,
    ];
}
