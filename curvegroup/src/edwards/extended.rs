//! Extended twisted Edwards points.

#![allow(non_snake_case)]

use super::{AffinePoint, EdwardsParams};
use crate::{
    lookup_table,
    macros::{
        define_add_assign_variants, define_add_variants, define_sub_assign_variants,
        define_sub_variants,
    },
};
use alloc::vec::Vec;
use core::{
    borrow::Borrow,
    iter::Sum,
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};
use ff::Field as _;
use group::{Curve, Group};
use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use towerfield::Field;
use zeroize::DefaultIsZeroes;

/// Point on a twisted Edwards curve in extended coordinates.
#[derive(Clone, Copy, Debug)]
pub struct ExtendedPoint<C: EdwardsParams> {
    pub(crate) X: C::Base,
    pub(crate) Y: C::Base,
    pub(crate) Z: C::Base,
    pub(crate) T: C::Base,
}

impl<C: EdwardsParams> ExtendedPoint<C> {
    /// The identity point `(0, 1)`.
    pub const IDENTITY: Self = Self {
        X: C::Base::ZERO,
        Y: C::Base::ONE,
        Z: C::Base::ONE,
        T: C::Base::ZERO,
    };

    /// Base point of the curve.
    pub fn generator() -> Self {
        AffinePoint::<C>::GENERATOR.to_extended()
    }

    /// Add two points
    ///
    /// Unified addition in extended coordinates (Hisil-Wong-Carter-Dawson 2008,
    /// section 3.1).
    pub fn add(&self, other: &Self) -> Self {
        let a = self.X * other.X;
        let b = self.Y * other.Y;
        let c = C::D * self.T * other.T;
        let d = self.Z * other.Z;
        let e = (self.X + self.Y) * (other.X + other.Y) - a - b;
        let f = d - c;
        let g = d + c;
        let h = b - C::A * a;

        Self {
            X: e * f,
            Y: g * h,
            Z: f * g,
            T: e * h,
        }
    }

    /// Double this point
    ///
    /// Dedicated doubling (Hisil-Wong-Carter-Dawson 2008, section 3.3), which does not
    /// read `T`.
    pub fn double(&self) -> Self {
        let a = self.X.square();
        let b = self.Y.square();
        let c = self.Z.square().double();
        let d = C::A * a;
        let e = (self.X + self.Y).square() - a - b;
        let g = d + b;
        let f = g - c;
        let h = d - b;

        Self {
            X: e * f,
            Y: g * h,
            Z: f * g,
            T: e * h,
        }
    }

    /// Compute the negation of this point's `x`-coordinate.
    pub fn negate(&self) -> Self {
        Self {
            X: -self.X,
            Y: self.Y,
            Z: self.Z,
            T: -self.T,
        }
    }

    /// Is this the identity point?
    pub fn is_identity(&self) -> Choice {
        self.ct_eq(&Self::IDENTITY)
    }

    /// Check if this point is on the curve
    ///
    /// `(a X^2 + Y^2) Z^2 == Z^4 + d X^2 Y^2` and `XY == ZT`.
    pub fn is_on_curve(&self) -> Choice {
        let XX = self.X.square();
        let YY = self.Y.square();
        let ZZ = self.Z.square();

        let lhs = (C::A * XX + YY) * ZZ;
        let rhs = ZZ.square() + C::D * XX * YY;

        lhs.ct_eq(&rhs) & (self.X * self.Y).ct_eq(&(self.Z * self.T)) & !self.Z.is_zero()
    }

    /// Determine if this point is in the prime-order subgroup.
    pub fn is_torsion_free(&self) -> Choice {
        (self.scalar_mul(&-C::Scalar::ONE) + self).is_identity()
    }

    /// Multiplies by the cofactor, mapping curve points into the prime-order subgroup.
    pub fn clear_cofactor(&self) -> Self {
        self.mul_by_words_vartime(C::COFACTOR)
    }

    /// Returns `[k] self` in constant time.
    pub fn scalar_mul(&self, k: &C::Scalar) -> Self {
        lookup_table::mul_fixed_window(self, k)
    }

    /// Returns `[k] self`. **Variable time with respect to `k`.**
    pub fn mul_vartime(&self, k: &C::Scalar) -> Self {
        lookup_table::mul_wnaf_vartime(self, k)
    }

    /// Returns `[k] self` for little-endian words. **Variable time with respect to `k`.**
    pub fn mul_by_words_vartime(&self, k: &[u64]) -> Self {
        lookup_table::mul_words_vartime(self, k)
    }

    /// Convert this point to an [`AffinePoint`].
    pub fn to_affine(&self) -> AffinePoint<C> {
        // Z is never zero for points on the curve.
        let inv_z = self.Z.invert().unwrap_or(C::Base::ZERO);
        AffinePoint {
            x: self.X * inv_z,
            y: self.Y * inv_z,
        }
    }
}

impl<C: EdwardsParams> ConditionallySelectable for ExtendedPoint<C> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        ExtendedPoint {
            X: C::Base::conditional_select(&a.X, &b.X, choice),
            Y: C::Base::conditional_select(&a.Y, &b.Y, choice),
            Z: C::Base::conditional_select(&a.Z, &b.Z, choice),
            T: C::Base::conditional_select(&a.T, &b.T, choice),
        }
    }
}

impl<C: EdwardsParams> ConstantTimeEq for ExtendedPoint<C> {
    fn ct_eq(&self, other: &Self) -> Choice {
        let XZ = self.X * other.Z;
        let ZX = self.Z * other.X;

        let YZ = self.Y * other.Z;
        let ZY = self.Z * other.Y;

        (XZ.ct_eq(&ZX)) & (YZ.ct_eq(&ZY))
    }
}

impl<C: EdwardsParams> Default for ExtendedPoint<C> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<C: EdwardsParams> DefaultIsZeroes for ExtendedPoint<C> {}

impl<C: EdwardsParams> Eq for ExtendedPoint<C> {}

impl<C: EdwardsParams> PartialEq for ExtendedPoint<C> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<C: EdwardsParams> From<AffinePoint<C>> for ExtendedPoint<C> {
    fn from(value: AffinePoint<C>) -> Self {
        value.to_extended()
    }
}

impl<C: EdwardsParams> From<&AffinePoint<C>> for ExtendedPoint<C> {
    fn from(value: &AffinePoint<C>) -> Self {
        value.to_extended()
    }
}

impl<C: EdwardsParams> Group for ExtendedPoint<C> {
    type Scalar = C::Scalar;

    fn random(mut rng: impl RngCore) -> Self {
        Self::generator() * <C::Scalar as ff::Field>::random(&mut rng)
    }

    fn identity() -> Self {
        Self::IDENTITY
    }

    fn generator() -> Self {
        ExtendedPoint::generator()
    }

    fn is_identity(&self) -> Choice {
        ExtendedPoint::is_identity(self)
    }

    fn double(&self) -> Self {
        ExtendedPoint::double(self)
    }
}

impl<C: EdwardsParams> Curve for ExtendedPoint<C> {
    type AffineRepr = AffinePoint<C>;

    fn to_affine(&self) -> AffinePoint<C> {
        ExtendedPoint::to_affine(self)
    }

    fn batch_normalize(projective: &[Self], affine: &mut [Self::AffineRepr]) {
        assert_eq!(projective.len(), affine.len());

        let mut prefix = Vec::with_capacity(projective.len());
        let mut acc = C::Base::ONE;
        for point in projective {
            prefix.push(acc);
            acc *= point.Z;
        }

        let mut inv = acc.invert().unwrap_or(C::Base::ZERO);
        for ((point, prefix), out) in projective.iter().zip(prefix).zip(affine.iter_mut()).rev() {
            let inv_z = inv * prefix;
            inv *= point.Z;
            *out = AffinePoint {
                x: point.X * inv_z,
                y: point.Y * inv_z,
            };
        }
    }
}

// ------------------------------------------------------------------------
// Addition and Subtraction
// ------------------------------------------------------------------------

impl<C: EdwardsParams> Add<&ExtendedPoint<C>> for &ExtendedPoint<C> {
    type Output = ExtendedPoint<C>;

    fn add(self, other: &ExtendedPoint<C>) -> ExtendedPoint<C> {
        ExtendedPoint::add(self, other)
    }
}

define_add_variants!(Params = EdwardsParams, LHS = ExtendedPoint, RHS = ExtendedPoint, Output = ExtendedPoint);
define_add_assign_variants!(Params = EdwardsParams, LHS = ExtendedPoint, RHS = ExtendedPoint);

impl<C: EdwardsParams> Add<&AffinePoint<C>> for &ExtendedPoint<C> {
    type Output = ExtendedPoint<C>;

    fn add(self, other: &AffinePoint<C>) -> ExtendedPoint<C> {
        self.add(&other.to_extended())
    }
}

define_add_variants!(Params = EdwardsParams, LHS = ExtendedPoint, RHS = AffinePoint, Output = ExtendedPoint);
define_add_assign_variants!(Params = EdwardsParams, LHS = ExtendedPoint, RHS = AffinePoint);

impl<C: EdwardsParams> Sub<&ExtendedPoint<C>> for &ExtendedPoint<C> {
    type Output = ExtendedPoint<C>;

    fn sub(self, other: &ExtendedPoint<C>) -> ExtendedPoint<C> {
        self.add(&other.negate())
    }
}

define_sub_variants!(Params = EdwardsParams, LHS = ExtendedPoint, RHS = ExtendedPoint, Output = ExtendedPoint);
define_sub_assign_variants!(Params = EdwardsParams, LHS = ExtendedPoint, RHS = ExtendedPoint);

impl<C: EdwardsParams> Sub<&AffinePoint<C>> for &ExtendedPoint<C> {
    type Output = ExtendedPoint<C>;

    fn sub(self, other: &AffinePoint<C>) -> ExtendedPoint<C> {
        self.add(&other.to_extended().negate())
    }
}

define_sub_variants!(Params = EdwardsParams, LHS = ExtendedPoint, RHS = AffinePoint, Output = ExtendedPoint);
define_sub_assign_variants!(Params = EdwardsParams, LHS = ExtendedPoint, RHS = AffinePoint);

impl<C, T> Sum<T> for ExtendedPoint<C>
where
    C: EdwardsParams,
    T: Borrow<ExtendedPoint<C>>,
{
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        iter.fold(Self::IDENTITY, |acc, item| acc + item.borrow())
    }
}

// ------------------------------------------------------------------------
// Negation
// ------------------------------------------------------------------------

impl<C: EdwardsParams> Neg for &ExtendedPoint<C> {
    type Output = ExtendedPoint<C>;

    fn neg(self) -> ExtendedPoint<C> {
        self.negate()
    }
}

impl<C: EdwardsParams> Neg for ExtendedPoint<C> {
    type Output = Self;

    fn neg(self) -> Self {
        -&self
    }
}

// ------------------------------------------------------------------------
// Scalar multiplication
// ------------------------------------------------------------------------

impl<C, S> Mul<S> for ExtendedPoint<C>
where
    C: EdwardsParams,
    S: Borrow<C::Scalar>,
{
    type Output = Self;

    fn mul(self, scalar: S) -> Self {
        self.scalar_mul(scalar.borrow())
    }
}

impl<C, S> Mul<S> for &ExtendedPoint<C>
where
    C: EdwardsParams,
    S: Borrow<C::Scalar>,
{
    type Output = ExtendedPoint<C>;

    fn mul(self, scalar: S) -> ExtendedPoint<C> {
        self.scalar_mul(scalar.borrow())
    }
}

impl<C, S> MulAssign<S> for ExtendedPoint<C>
where
    C: EdwardsParams,
    S: Borrow<C::Scalar>,
{
    fn mul_assign(&mut self, scalar: S) {
        *self = self.scalar_mul(scalar.borrow());
    }
}
