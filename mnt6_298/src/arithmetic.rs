//! Group operations on MNT6-298 and its cubic twist.

pub mod tower;

use self::tower::Fq3;
use curvegroup::weierstrass::{
    AffinePoint, ProjectivePoint, WeierstrassParams, point_arithmetic::EquationAIsGeneric,
};

/// Base field of MNT6-298: the scalar field of MNT4-298.
pub type Fq = mnt4_298::Fr;

/// Scalar field of MNT6-298: the base field of MNT4-298.
pub type Fr = mnt4_298::Fq;

/// G1 point in affine coordinates.
pub type G1Affine = AffinePoint<G1Params>;

/// G1 point in projective coordinates.
pub type G1Projective = ProjectivePoint<G1Params>;

/// G2 point in affine coordinates.
pub type G2Affine = AffinePoint<G2Params>;

/// G2 point in projective coordinates.
pub type G2Projective = ProjectivePoint<G2Params>;

/// `E: y^2 = x^3 + 11x + b` over `Fq`, a curve of prime order.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, PartialOrd, Ord)]
pub struct G1Params;

impl WeierstrassParams for G1Params {
    type Base = Fq;
    type Scalar = Fr;
    type PointArithmetic = EquationAIsGeneric;

    const A: Fq = Fq::from_u64(11);
    const B: Fq = Fq::from_hex("000000d68c7b1dc5dd042e957b71c44d3d6c24e683fc09b420b1a2d263fde47ddba59463d0c65282");
    const GENERATOR: (Fq, Fq) = (
        Fq::from_hex("000002a4feee24fd2c69d1d90471b2ba61ed56f9bad79b57e0b4c671392584bdadebc01abbc0447d"),
        Fq::from_hex("0000032986c245f6db2f82f4e037bf7afd69cbfcbff07fc25d71e9c75e1b97208a333d73d91d3028"),
    );
    const COFACTOR: &'static [u64] = &[1];
}

/// `E': y^2 = x^3 + 11v^2·x + b·v^3` over `Fq3`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, PartialOrd, Ord)]
pub struct G2Params;

impl WeierstrassParams for G2Params {
    type Base = Fq3;
    type Scalar = Fr;
    type PointArithmetic = EquationAIsGeneric;

    const A: Fq3 = Fq3::new(Fq::ZERO, Fq::ZERO, Fq::from_u64(11));
    const B: Fq3 = Fq3::from_base(Fq::from_hex(
        "00000073c6aac069aeaec44dc18880f3682def1d36f7eeefa82ee21461980ba18ef8b14f13df9c89",
    ));
    const GENERATOR: (Fq3, Fq3) = (
        Fq3::new(
            Fq::from_hex("0000034f7320a12b56ce532bccb3b44902cbaa723cd60035ada7404b743ad2e644ad76257e4c6813"),
            Fq::from_hex("000000cf41620baa52eec50e61a70ab5b45f681952e0109340fec84f1b2890aba9b15cac5a0c80fa"),
            Fq::from_hex("0000011f99170e10e326433cccb8032fb48007ca3c4e105cf31b056ac767e2cb01258391bd4917ce"),
        ),
        Fq3::new(
            Fq::from_hex("000003a65968f03cc64d62ad05c79c415e07ebd38b363ec48309487c0b83e1717a582c1b60fecc91"),
            Fq::from_hex("000000ca5e8427e5db1506c1a24cefc2451ab3accaea5db82dcb0c7117cc74402faa5b2c37685c6e"),
            Fq::from_hex("000000f75d2dd88302c9a4ef941307629a1b3e197277d83abb715f647c2e55a27baf782f5c60e7f7"),
        ),
    );
    const COFACTOR: &'static [u64] = &[
        0xd4719dec00000000,
        0x94104081d31771ef,
        0x3f4d65a5b22e7f61,
        0x33124e28403e0b41,
        0xf096e99fb6a637b9,
        0x95209870c0f7ffbb,
        0xf292d23620350240,
        0xe98b8b1cd454f1a1,
        0x3a10ace4c868d35e,
        0x00000000000df94b,
    ];
}
