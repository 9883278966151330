//! Short Weierstrass curves `y^2 = x^3 + ax + b` over any [`SqrtField`].

pub mod point_arithmetic;

mod affine;
mod projective;

pub use self::{affine::AffinePoint, projective::ProjectivePoint};

use core::fmt::Debug;
use ff::PrimeField;
use towerfield::SqrtField;

/// Parameters of a short Weierstrass curve group.
///
/// The curve may be defined over an extension field, e.g. the sextic twist carrying
/// a pairing's G2.
pub trait WeierstrassParams: Copy + Debug + Default + Eq + Send + Sync + 'static {
    /// Field of the coordinates.
    type Base: SqrtField;

    /// Scalar field: the prime order of the subgroup generated by [`Self::GENERATOR`].
    type Scalar: PrimeField;

    /// Formulas specialized to the curve's `a`-coefficient.
    type PointArithmetic: point_arithmetic::PointArithmetic<Self>;

    /// Coefficient `a` in the curve equation.
    const A: Self::Base;

    /// Coefficient `b` in the curve equation.
    const B: Self::Base;

    /// Generator point's affine coordinates: (x, y).
    const GENERATOR: (Self::Base, Self::Base);

    /// Cofactor `#E / r` as little-endian words.
    const COFACTOR: &'static [u64];
}
