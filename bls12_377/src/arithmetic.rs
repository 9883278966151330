//! Group operations on BLS12-377 and its sextic twist.

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

/// `E: y^2 = x^3 + 1` over `Fq`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, PartialOrd, Ord)]
pub struct G1Params;

impl WeierstrassParams for G1Params {
    type Base = Fq;
    type Scalar = Fr;
    type PointArithmetic = EquationAIsZero;

    const A: Fq = Fq::ZERO;
    const B: Fq = Fq::ONE;
    const GENERATOR: (Fq, Fq) = (
        Fq::from_hex(
            "008848defe740a67c8fc6225bf87ff5485951e2caa9d41bb188282c8bd37cb5cd5481512ffcd394eeab9b16eb21be9ef",
        ),
        Fq::from_hex(
            "01914a69c5102eff1f674f5d30afeec4bd7fb348ca3e52d96d182ad44fb82305c2fe3d3634a9591afd82de55559c8ea6",
        ),
    );
    /// `(x - 1)^2 / 3`
    const COFACTOR: &'static [u64] = &[0x0000000000000000, 0x170b5d4430000000];
}

/// `E': y^2 = x^3 + 1/u` over `Fq2`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, PartialOrd, Ord)]
pub struct G2Params;

impl WeierstrassParams for G2Params {
    type Base = Fq2;
    type Scalar = Fr;
    type PointArithmetic = EquationAIsZero;

    const A: Fq2 = Fq2::ZERO;
    const B: Fq2 = Fq2::new(
        Fq::ZERO,
        Fq::from_hex(
            "010222f6db0fd6f343bd03737460c589dc7b4f91cd5fd889129207b63c6bf8000dd39e5c1ccccccd1c9ed9999999999a",
        ),
    );
    const GENERATOR: (Fq2, Fq2) = (
        Fq2::new(
            Fq::from_hex(
                "00b997fef930828fe1b9e6a1707b8aa508a3dbfd7fe2246499c709226a0a6fef49f85b3a375363f4f8f6ea3fbd159f8a",
            ),
            Fq::from_hex(
                "00d6ac33b84947d9845f81a57a136bfa326e915fabc8cd6a57ff133b42d00f62e4e1af460228cd5184deae976fa62596",
            ),
        ),
        Fq2::new(
            Fq::from_hex(
                "0118dd509b2e9a13744a507d515a595dbb7e3b63df568866473790184bdf83636c94df2b7a962cb2af4337f07cb7e622",
            ),
            Fq::from_hex(
                "0185067c6ca76d992f064a432bd9f9be832b0cac2d824d0518f77d39e76c3e146afb825f2092218d038867d7f337a010",
            ),
        ),
    );
    const COFACTOR: &'static [u64] = &[
        0x0000000000000001,
        0x452217cc90000000,
        0xa0f3622fba094800,
        0xd693e8c36676bd09,
        0x8c505634fae2e189,
        0xfbb36b00e1dcc40c,
        0xddd88d99a6f6a829,
        0x0026ba558ae9562a,
    ];
}
