//! Group operations on Edwards-183 and its cubic twist.

pub(crate) mod field;
pub(crate) mod scalar;
pub mod tower;

use self::{field::Fq, scalar::Fr, tower::Fq3};
use curvegroup::edwards::{AffinePoint, EdwardsParams, ExtendedPoint};

/// G1 point in affine coordinates.
pub type G1Affine = AffinePoint<G1Params>;

/// G1 point in extended coordinates.
pub type G1Extended = ExtendedPoint<G1Params>;

/// G2 point in affine coordinates.
pub type G2Affine = AffinePoint<G2Params>;

/// G2 point in extended coordinates.
pub type G2Extended = ExtendedPoint<G2Params>;

/// Coefficient `d` of G1.
const D: Fq = Fq::from_hex("00064536d55979879327cf1306bb5a6277d254ef9776ce70");

/// `E: x^2 + y^2 = 1 + d·x^2·y^2` over `Fq`, of order `4r`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, PartialOrd, Ord)]
pub struct G1Params;

impl EdwardsParams for G1Params {
    type Base = Fq;
    type Scalar = Fr;

    const A: Fq = Fq::ONE;
    const D: Fq = D;
    const GENERATOR: (Fq, Fq) = (
        Fq::from_hex("0026c5df4587aa6a5d345efc9f2d47f8b1656517ef618f7a"),
        Fq::from_hex("0032d83d8aaa0c500f57b15fda90b1ad111067f812c7dd27"),
    );
    const COFACTOR: &'static [u64] = &[4];
}

/// `E': v·x^2 + y^2 = 1 + d·v·x^2·y^2` over `Fq3`.
///
/// `a = v` is not a square, so the addition law has exceptional pairs; none of
/// them lies in the odd-order subgroup.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, PartialOrd, Ord)]
pub struct G2Params;

impl EdwardsParams for G2Params {
    type Base = Fq3;
    type Scalar = Fr;

    const A: Fq3 = Fq3::new(Fq::ZERO, Fq::ONE, Fq::ZERO);
    const D: Fq3 = Fq3::new(Fq::ZERO, D, Fq::ZERO);
    const GENERATOR: (Fq3, Fq3) = (
        Fq3::new(
            Fq::from_hex("002f501f9482c0d0d6e80ac55a79fd4d4594caf187952660"),
            Fq::from_hex("0037bf8f1b1cda11a81e8bb8f41b5ff462c9a13dc7de1578"),
            Fq::from_hex("002962f0da0c7928b2cfbbace3d0354652b6922a764c12d8"),
        ),
        Fq3::new(
            Fq::from_hex("0003ce954c85ad30f53b1bb4c4f87029780f4141927feb19"),
            Fq::from_hex("002214eb976de3a4d9df9c8d5f7aedfec337e03a20b32fff"),
            Fq::from_hex("00249774ab0edc7fe2e665ddbfe08594f3071e0b3ac994c3"),
        ),
    );
    const COFACTOR: &'static [u64] = &[
        0xa84db14100000000,
        0xd24e30baf43d09a8,
        0x3e92a06d2247386d,
        0xc73a8911cfc52edf,
        0xf26443b9e16fcbc4,
        0x000041aec4b3afaa,
    ];
}
