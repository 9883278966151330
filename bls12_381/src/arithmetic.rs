//! Group operations on BLS12-381 and its sextic twist.

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

/// `E: y^2 = x^3 + 4` over `Fq`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, PartialOrd, Ord)]
pub struct G1Params;

impl WeierstrassParams for G1Params {
    type Base = Fq;
    type Scalar = Fr;
    type PointArithmetic = EquationAIsZero;

    const A: Fq = Fq::ZERO;
    const B: Fq = Fq::from_u64(4);
    const GENERATOR: (Fq, Fq) = (
        Fq::from_hex(
            "17f1d3a73197d7942695638c4fa9ac0fc3688c4f9774b905a14e3a3f171bac586c55e83ff97a1aeffb3af00adb22c6bb",
        ),
        Fq::from_hex(
            "08b3f481e3aaa0f1a09e30ed741d8ae4fcf5e095d5d00af600db18cb2c04b3edd03cc744a2888ae40caa232946c5e7e1",
        ),
    );
    /// `(x - 1)^2 / 3`
    const COFACTOR: &'static [u64] = &[0x8c00aaab0000aaab, 0x396c8c005555e156];
}

/// `E': y^2 = x^3 + 4(u + 1)` over `Fq2`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, PartialOrd, Ord)]
pub struct G2Params;

impl WeierstrassParams for G2Params {
    type Base = Fq2;
    type Scalar = Fr;
    type PointArithmetic = EquationAIsZero;

    const A: Fq2 = Fq2::ZERO;
    const B: Fq2 = Fq2::new(Fq::from_u64(4), Fq::from_u64(4));
    const GENERATOR: (Fq2, Fq2) = (
        Fq2::new(
            Fq::from_hex(
                "024aa2b2f08f0a91260805272dc51051c6e47ad4fa403b02b4510b647ae3d1770bac0326a805bbefd48056c8c121bdb8",
            ),
            Fq::from_hex(
                "13e02b6052719f607dacd3a088274f65596bd0d09920b61ab5da61bbdc7f5049334cf11213945d57e5ac7d055d042b7e",
            ),
        ),
        Fq2::new(
            Fq::from_hex(
                "0ce5d527727d6e118cc9cdc6da2e351aadfd9baa8cbdd3a76d429a695160d12c923ac9cc3baca289e193548608b82801",
            ),
            Fq::from_hex(
                "0606c4a02ea734cc32acd2b02bc28b99cb3e287e85a763af267492ab572e99ab3f370d275cec1da1aaa9075ff05f79be",
            ),
        ),
    );
    const COFACTOR: &'static [u64] = &[
        0xcf1c38e31c7238e5,
        0x1616ec6e786f0c70,
        0x21537e293a6691ae,
        0xa628f1cb4d9e82ef,
        0xa68a205b2e5a7ddf,
        0xcd91de4547085aba,
        0x091d50792876a202,
        0x05d543a95414e7f1,
    ];
}
