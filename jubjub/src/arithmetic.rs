//! Group operations on Jubjub.

pub(crate) mod scalar;

use self::scalar::Fr;
use curvegroup::edwards::{self, EdwardsParams};

/// Base field of Jubjub: the scalar field of BLS12-381.
pub type Fq = bls12_381::Fr;

/// Point in affine coordinates.
pub type AffinePoint = edwards::AffinePoint<JubjubParams>;

/// Point in extended coordinates.
pub type ExtendedPoint = edwards::ExtendedPoint<JubjubParams>;

/// `-1·x^2 + y^2 = 1 + d·x^2·y^2` with `d = -(10240/10241)`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, PartialOrd, Ord)]
pub struct JubjubParams;

impl EdwardsParams for JubjubParams {
    type Base = Fq;
    type Scalar = Fr;

    const A: Fq = Fq::ONE.neg();
    const D: Fq = Fq::from_hex("2a9318e74bfa2b48f5fd9207e6bd7fd4292d7f6d37579d2601065fd6d6343eb1");
    const GENERATOR: (Fq, Fq) = (
        Fq::from_hex("11dafe5d23e1218086a365b99fbf3d3be72f6afd7d1f72623e6b071492d1122b"),
        Fq::from_hex("1d523cf1ddab1a1793132e78c866c0c33e26ba5cc220fed7cc3f870e59d292aa"),
    );
    const COFACTOR: &'static [u64] = &[8];
}
