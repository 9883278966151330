//! Group operations on Baby Jubjub.

pub(crate) mod scalar;

use self::scalar::Fr;
use curvegroup::edwards::{self, EdwardsParams};

/// Base field of Baby Jubjub: the scalar field of alt_bn128.
pub type Fq = alt_bn128::Fr;

/// Point in affine coordinates.
pub type AffinePoint = edwards::AffinePoint<BabyJubjubParams>;

/// Point in extended coordinates.
pub type ExtendedPoint = edwards::ExtendedPoint<BabyJubjubParams>;

/// `168700·x^2 + y^2 = 1 + d·x^2·y^2` with `d = 168696`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, PartialOrd, Ord)]
pub struct BabyJubjubParams;

impl EdwardsParams for BabyJubjubParams {
    type Base = Fq;
    type Scalar = Fr;

    const A: Fq = Fq::from_u64(168_700);
    const D: Fq = Fq::from_u64(168_696);
    const GENERATOR: (Fq, Fq) = (
        Fq::from_hex("0bb77a6ad63e739b4eacb2e09d6277c12ab8d8010534e0b62893f3f6bb957051"),
        Fq::from_hex("25797203f7a0b24925572e1cd16bf9edfce0051fb9e133774b3c257a872d7d8b"),
    );
    const COFACTOR: &'static [u64] = &[8];
}
