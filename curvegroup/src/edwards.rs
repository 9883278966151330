//! Twisted Edwards curves `a x^2 + y^2 = 1 + d x^2 y^2` over any [`SqrtField`].
//!
//! Arithmetic uses extended coordinates `(X : Y : Z : T)` with `x = X/Z`, `y = Y/Z` and
//! `T = XY/Z`. The formulas are complete when `a` is a square and `d` a non-square.
//! Otherwise exceptional inputs exist, but only among points of even order, so the
//! prime-order subgroup is still handled without special cases.

mod affine;
mod extended;

pub use self::{affine::AffinePoint, extended::ExtendedPoint};

use core::fmt::Debug;
use ff::PrimeField;
use towerfield::SqrtField;

/// Parameters of a twisted Edwards curve group.
pub trait EdwardsParams: Copy + Debug + Default + Eq + Send + Sync + 'static {
    /// Field of the coordinates.
    ///
    /// Its encoding must leave the most significant bit unused, which carries the sign
    /// of `x` in compressed points.
    type Base: SqrtField;

    /// Scalar field: the prime order of the subgroup generated by [`Self::GENERATOR`].
    type Scalar: PrimeField;

    /// Coefficient `a`.
    const A: Self::Base;

    /// Coefficient `d`.
    const D: Self::Base;

    /// Generator point's affine coordinates: (x, y).
    const GENERATOR: (Self::Base, Self::Base);

    /// Cofactor `#E / r` as little-endian words.
    const COFACTOR: &'static [u64];
}
