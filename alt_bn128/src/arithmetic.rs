//! Group operations on alt_bn128 and its sextic twist.

pub(crate) mod field;
pub(crate) mod scalar;
pub mod tower;

use self::{field::Fq, scalar::Fr, tower::Fq2};
use curvegroup::weierstrass::{
    AffinePoint, ProjectivePoint, WeierstrassParams, point_arithmetic::EquationAIsZero,
};

/// G1 point in affine coordinates.
pub type G1Affine = AffinePoint<G1Params>;

/// G1 point in projective coordinates.
pub type G1Projective = ProjectivePoint<G1Params>;

/// G2 point in affine coordinates.
pub type G2Affine = AffinePoint<G2Params>;

/// G2 point in projective coordinates.
pub type G2Projective = ProjectivePoint<G2Params>;

/// `E: y^2 = x^3 + 3` over `Fq`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, PartialOrd, Ord)]
pub struct G1Params;

impl WeierstrassParams for G1Params {
    type Base = Fq;
    type Scalar = Fr;
    type PointArithmetic = EquationAIsZero;

    const A: Fq = Fq::ZERO;
    const B: Fq = Fq::from_u64(3);
    const GENERATOR: (Fq, Fq) = (Fq::ONE, Fq::from_u64(2));
    const COFACTOR: &'static [u64] = &[1];
}

/// `E': y^2 = x^3 + 3/(u + 9)` over `Fq2`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, PartialOrd, Ord)]
pub struct G2Params;

impl WeierstrassParams for G2Params {
    type Base = Fq2;
    type Scalar = Fr;
    type PointArithmetic = EquationAIsZero;

    const A: Fq2 = Fq2::ZERO;
    const B: Fq2 = Fq2::new(
        Fq::from_hex("2b149d40ceb8aaae81be18991be06ac3b5b4c5e559dbefa33267e6dc24a138e5"),
        Fq::from_hex("009713b03af0fed4cd2cafadeed8fdf4a74fa084e52d1852e4a2bd0685c315d2"),
    );
    const GENERATOR: (Fq2, Fq2) = (
        Fq2::new(
            Fq::from_hex("1800deef121f1e76426a00665e5c4479674322d4f75edadd46debd5cd992f6ed"),
            Fq::from_hex("198e9393920d483a7260bfb731fb5d25f1aa493335a9e71297e485b7aef312c2"),
        ),
        Fq2::new(
            Fq::from_hex("12c85ea5db8c6deb4aab71808dcb408fe3d1e7690c43d37b4ce6cc0166fa7daa"),
            Fq::from_hex("090689d0585ff075ec9e99ad690c3395bc4b313370b38ef355acdadcd122975b"),
        ),
    );
    /// `2p - r`
    const COFACTOR: &'static [u64] = &[
        0x345f2299c0f9fa8d,
        0x06ceecda572a2489,
        0xb85045b68181585e,
        0x30644e72e131a029,
    ];
}
