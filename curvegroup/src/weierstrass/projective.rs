//! Projective curve points.

#![allow(clippy::op_ref)]

use super::{AffinePoint, WeierstrassParams, point_arithmetic::PointArithmetic};
use crate::lookup_table;
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

/// Point on a Weierstrass curve in homogeneous projective coordinates `(X : Y : Z)`,
/// representing the affine point `(X/Z, Y/Z)`.
///
/// The identity is `(0 : Y : 0)` for any non-zero `Y`.
#[derive(Clone, Copy, Debug)]
pub struct ProjectivePoint<C: WeierstrassParams> {
    pub(crate) x: C::Base,
    pub(crate) y: C::Base,
    pub(crate) z: C::Base,
}

impl<C> ProjectivePoint<C>
where
    C: WeierstrassParams,
{
    /// Additive identity of the group a.k.a. the point at infinity.
    pub const IDENTITY: Self = Self {
        x: C::Base::ZERO,
        y: C::Base::ONE,
        z: C::Base::ZERO,
    };

    /// Base point of the curve.
    pub const GENERATOR: Self = Self {
        x: C::GENERATOR.0,
        y: C::GENERATOR.1,
        z: C::Base::ONE,
    };

    /// Builds a point from raw projective coordinates, checking only the curve equation.
    pub fn from_coordinates_unchecked(x: C::Base, y: C::Base, z: C::Base) -> Self {
        Self { x, y, z }
    }

    /// The `X` coordinate.
    pub fn x(&self) -> &C::Base {
        &self.x
    }

    /// The `Y` coordinate.
    pub fn y(&self) -> &C::Base {
        &self.y
    }

    /// The `Z` coordinate.
    pub fn z(&self) -> &C::Base {
        &self.z
    }

    /// Returns the affine representation of this point.
    pub fn to_affine(&self) -> AffinePoint<C> {
        self.z
            .invert()
            .map(|zinv| self.to_affine_internal(zinv))
            .unwrap_or(AffinePoint::IDENTITY)
    }

    fn to_affine_internal(self, zinv: C::Base) -> AffinePoint<C> {
        AffinePoint {
            x: self.x * &zinv,
            y: self.y * &zinv,
            infinity: 0,
        }
    }

    /// Is this the point at infinity?
    pub fn is_identity(&self) -> Choice {
        self.z.is_zero()
    }

    /// Does this point satisfy `Y^2 Z = X^3 + a X Z^2 + b Z^3`?
    ///
    /// The identity satisfies the equation.
    pub fn is_on_curve(&self) -> Choice {
        let z2 = self.z.square();
        let lhs = self.y.square() * &self.z;
        let rhs = (self.x.square() + C::A * z2) * &self.x + C::B * z2 * &self.z;
        lhs.ct_eq(&rhs) & !(self.z.is_zero() & self.y.is_zero())
    }

    /// Is this point in the prime-order subgroup?
    ///
    /// Checks `[r] P == O` as `[r - 1] P == -P`.
    pub fn is_torsion_free(&self) -> Choice {
        (self.mul(&-C::Scalar::ONE) + self).is_identity()
    }

    /// Multiplies by the curve's cofactor, mapping curve points into the prime-order
    /// subgroup.
    pub fn clear_cofactor(&self) -> Self {
        self.mul_by_words_vartime(C::COFACTOR)
    }

    /// Returns `-self`.
    pub fn neg(&self) -> Self {
        Self {
            x: self.x,
            y: -self.y,
            z: self.z,
        }
    }

    /// Returns `self + other`.
    pub fn add(&self, other: &Self) -> Self {
        C::PointArithmetic::add(self, other)
    }

    /// Returns `self + other`.
    pub fn add_mixed(&self, other: &AffinePoint<C>) -> Self {
        C::PointArithmetic::add_mixed(self, other)
    }

    /// Returns `self - other`.
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Returns `self - other`.
    pub fn sub_mixed(&self, other: &AffinePoint<C>) -> Self {
        self.add_mixed(&other.neg())
    }

    /// Returns `self + self`.
    pub fn double(&self) -> Self {
        C::PointArithmetic::double(self)
    }

    /// Returns `[k] self` in constant time.
    pub fn mul(&self, k: &C::Scalar) -> Self {
        lookup_table::mul_fixed_window(self, k)
    }

    /// Returns `[k] self`. **Variable time with respect to `k`.**
    pub fn mul_vartime(&self, k: &C::Scalar) -> Self {
        lookup_table::mul_wnaf_vartime(self, k)
    }

    /// Returns `[k] self` for an integer given as little-endian words, which need not be
    /// reduced. **Variable time with respect to `k`.**
    pub fn mul_by_words_vartime(&self, k: &[u64]) -> Self {
        lookup_table::mul_words_vartime(self, k)
    }
}

impl<C> ConditionallySelectable for ProjectivePoint<C>
where
    C: WeierstrassParams,
{
    #[inline(always)]
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: C::Base::conditional_select(&a.x, &b.x, choice),
            y: C::Base::conditional_select(&a.y, &b.y, choice),
            z: C::Base::conditional_select(&a.z, &b.z, choice),
        }
    }
}

impl<C> ConstantTimeEq for ProjectivePoint<C>
where
    C: WeierstrassParams,
{
    /// Compares `X1 Z2 == X2 Z1` and `Y1 Z2 == Y2 Z1`, which also equates all
    /// representations of the identity.
    fn ct_eq(&self, other: &Self) -> Choice {
        (self.x * &other.z).ct_eq(&(other.x * &self.z))
            & (self.y * &other.z).ct_eq(&(other.y * &self.z))
    }
}

impl<C> Default for ProjectivePoint<C>
where
    C: WeierstrassParams,
{
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<C> DefaultIsZeroes for ProjectivePoint<C> where C: WeierstrassParams {}

impl<C> Eq for ProjectivePoint<C> where C: WeierstrassParams {}

impl<C> PartialEq for ProjectivePoint<C>
where
    C: WeierstrassParams,
{
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<C> From<AffinePoint<C>> for ProjectivePoint<C>
where
    C: WeierstrassParams,
{
    fn from(p: AffinePoint<C>) -> Self {
        let projective = ProjectivePoint {
            x: p.x,
            y: p.y,
            z: C::Base::ONE,
        };
        Self::conditional_select(&projective, &Self::IDENTITY, p.is_identity())
    }
}

impl<C> From<&AffinePoint<C>> for ProjectivePoint<C>
where
    C: WeierstrassParams,
{
    fn from(p: &AffinePoint<C>) -> Self {
        Self::from(*p)
    }
}

impl<C> Group for ProjectivePoint<C>
where
    C: WeierstrassParams,
{
    type Scalar = C::Scalar;

    fn random(mut rng: impl RngCore) -> Self {
        Self::GENERATOR * <C::Scalar as ff::Field>::random(&mut rng)
    }

    fn identity() -> Self {
        Self::IDENTITY
    }

    fn generator() -> Self {
        Self::GENERATOR
    }

    fn is_identity(&self) -> Choice {
        ProjectivePoint::is_identity(self)
    }

    fn double(&self) -> Self {
        ProjectivePoint::double(self)
    }
}

impl<C> Curve for ProjectivePoint<C>
where
    C: WeierstrassParams,
{
    type AffineRepr = AffinePoint<C>;

    fn to_affine(&self) -> AffinePoint<C> {
        ProjectivePoint::to_affine(self)
    }

    fn batch_normalize(projective: &[Self], affine: &mut [Self::AffineRepr]) {
        assert_eq!(projective.len(), affine.len());
        batch_normalize_generic(projective, affine);
    }
}

/// Normalizes every point with a single field inversion (Montgomery's trick).
///
/// Points at infinity contribute a dummy `1` to the running product and map to
/// [`AffinePoint::IDENTITY`].
fn batch_normalize_generic<C: WeierstrassParams>(
    points: &[ProjectivePoint<C>],
    out: &mut [AffinePoint<C>],
) {
    let mut prefix = Vec::with_capacity(points.len());
    let mut acc = C::Base::ONE;
    for point in points {
        prefix.push(acc);
        acc *= C::Base::conditional_select(&point.z, &C::Base::ONE, point.z.is_zero());
    }

    // The product of non-zero values is non-zero.
    let mut inv = acc.invert().unwrap_or(C::Base::ZERO);

    for ((point, prefix), out) in points.iter().zip(prefix).zip(out.iter_mut()).rev() {
        let is_identity = point.z.is_zero();
        let z = C::Base::conditional_select(&point.z, &C::Base::ONE, is_identity);
        let zinv = inv * prefix;
        inv *= z;

        *out = AffinePoint::conditional_select(
            &point.to_affine_internal(zinv),
            &AffinePoint::IDENTITY,
            is_identity,
        );
    }
}

//
// Arithmetic trait impls
//

impl<C> Add<ProjectivePoint<C>> for ProjectivePoint<C>
where
    C: WeierstrassParams,
{
    type Output = ProjectivePoint<C>;

    fn add(self, other: ProjectivePoint<C>) -> ProjectivePoint<C> {
        ProjectivePoint::add(&self, &other)
    }
}

impl<C> Add<&ProjectivePoint<C>> for &ProjectivePoint<C>
where
    C: WeierstrassParams,
{
    type Output = ProjectivePoint<C>;

    fn add(self, other: &ProjectivePoint<C>) -> ProjectivePoint<C> {
        ProjectivePoint::add(self, other)
    }
}

impl<C> Add<&ProjectivePoint<C>> for ProjectivePoint<C>
where
    C: WeierstrassParams,
{
    type Output = ProjectivePoint<C>;

    fn add(self, other: &ProjectivePoint<C>) -> ProjectivePoint<C> {
        ProjectivePoint::add(&self, other)
    }
}

impl<C> AddAssign<ProjectivePoint<C>> for ProjectivePoint<C>
where
    C: WeierstrassParams,
{
    fn add_assign(&mut self, rhs: ProjectivePoint<C>) {
        *self = ProjectivePoint::add(self, &rhs);
    }
}

impl<C> AddAssign<&ProjectivePoint<C>> for ProjectivePoint<C>
where
    C: WeierstrassParams,
{
    fn add_assign(&mut self, rhs: &ProjectivePoint<C>) {
        *self = ProjectivePoint::add(self, rhs);
    }
}

impl<C> Add<AffinePoint<C>> for ProjectivePoint<C>
where
    C: WeierstrassParams,
{
    type Output = ProjectivePoint<C>;

    fn add(self, other: AffinePoint<C>) -> ProjectivePoint<C> {
        ProjectivePoint::add_mixed(&self, &other)
    }
}

impl<C> Add<&AffinePoint<C>> for &ProjectivePoint<C>
where
    C: WeierstrassParams,
{
    type Output = ProjectivePoint<C>;

    fn add(self, other: &AffinePoint<C>) -> ProjectivePoint<C> {
        ProjectivePoint::add_mixed(self, other)
    }
}

impl<C> Add<&AffinePoint<C>> for ProjectivePoint<C>
where
    C: WeierstrassParams,
{
    type Output = ProjectivePoint<C>;

    fn add(self, other: &AffinePoint<C>) -> ProjectivePoint<C> {
        ProjectivePoint::add_mixed(&self, other)
    }
}

impl<C> AddAssign<AffinePoint<C>> for ProjectivePoint<C>
where
    C: WeierstrassParams,
{
    fn add_assign(&mut self, rhs: AffinePoint<C>) {
        *self = ProjectivePoint::add_mixed(self, &rhs);
    }
}

impl<C> AddAssign<&AffinePoint<C>> for ProjectivePoint<C>
where
    C: WeierstrassParams,
{
    fn add_assign(&mut self, rhs: &AffinePoint<C>) {
        *self = ProjectivePoint::add_mixed(self, rhs);
    }
}

impl<C> Sum for ProjectivePoint<C>
where
    C: WeierstrassParams,
{
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(ProjectivePoint::IDENTITY, |a, b| a + b)
    }
}

impl<'a, C> Sum<&'a ProjectivePoint<C>> for ProjectivePoint<C>
where
    C: WeierstrassParams,
{
    fn sum<I: Iterator<Item = &'a ProjectivePoint<C>>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl<C> Sub<ProjectivePoint<C>> for ProjectivePoint<C>
where
    C: WeierstrassParams,
{
    type Output = ProjectivePoint<C>;

    fn sub(self, other: ProjectivePoint<C>) -> ProjectivePoint<C> {
        ProjectivePoint::sub(&self, &other)
    }
}

impl<C> Sub<&ProjectivePoint<C>> for &ProjectivePoint<C>
where
    C: WeierstrassParams,
{
    type Output = ProjectivePoint<C>;

    fn sub(self, other: &ProjectivePoint<C>) -> ProjectivePoint<C> {
        ProjectivePoint::sub(self, other)
    }
}

impl<C> Sub<&ProjectivePoint<C>> for ProjectivePoint<C>
where
    C: WeierstrassParams,
{
    type Output = ProjectivePoint<C>;

    fn sub(self, other: &ProjectivePoint<C>) -> ProjectivePoint<C> {
        ProjectivePoint::sub(&self, other)
    }
}

impl<C> SubAssign<ProjectivePoint<C>> for ProjectivePoint<C>
where
    C: WeierstrassParams,
{
    fn sub_assign(&mut self, rhs: ProjectivePoint<C>) {
        *self = ProjectivePoint::sub(self, &rhs);
    }
}

impl<C> SubAssign<&ProjectivePoint<C>> for ProjectivePoint<C>
where
    C: WeierstrassParams,
{
    fn sub_assign(&mut self, rhs: &ProjectivePoint<C>) {
        *self = ProjectivePoint::sub(self, rhs);
    }
}

impl<C> Sub<AffinePoint<C>> for ProjectivePoint<C>
where
    C: WeierstrassParams,
{
    type Output = ProjectivePoint<C>;

    fn sub(self, other: AffinePoint<C>) -> ProjectivePoint<C> {
        ProjectivePoint::sub_mixed(&self, &other)
    }
}

impl<C> Sub<&AffinePoint<C>> for &ProjectivePoint<C>
where
    C: WeierstrassParams,
{
    type Output = ProjectivePoint<C>;

    fn sub(self, other: &AffinePoint<C>) -> ProjectivePoint<C> {
        ProjectivePoint::sub_mixed(self, other)
    }
}

impl<C> Sub<&AffinePoint<C>> for ProjectivePoint<C>
where
    C: WeierstrassParams,
{
    type Output = ProjectivePoint<C>;

    fn sub(self, other: &AffinePoint<C>) -> ProjectivePoint<C> {
        ProjectivePoint::sub_mixed(&self, other)
    }
}

impl<C> SubAssign<AffinePoint<C>> for ProjectivePoint<C>
where
    C: WeierstrassParams,
{
    fn sub_assign(&mut self, rhs: AffinePoint<C>) {
        *self = ProjectivePoint::sub_mixed(self, &rhs);
    }
}

impl<C> SubAssign<&AffinePoint<C>> for ProjectivePoint<C>
where
    C: WeierstrassParams,
{
    fn sub_assign(&mut self, rhs: &AffinePoint<C>) {
        *self = ProjectivePoint::sub_mixed(self, rhs);
    }
}

impl<C, S> Mul<S> for ProjectivePoint<C>
where
    C: WeierstrassParams,
    S: Borrow<C::Scalar>,
{
    type Output = Self;

    fn mul(self, scalar: S) -> Self {
        ProjectivePoint::mul(&self, scalar.borrow())
    }
}

impl<C, S> Mul<S> for &ProjectivePoint<C>
where
    C: WeierstrassParams,
    S: Borrow<C::Scalar>,
{
    type Output = ProjectivePoint<C>;

    fn mul(self, scalar: S) -> ProjectivePoint<C> {
        ProjectivePoint::mul(self, scalar.borrow())
    }
}

impl<C, S> MulAssign<S> for ProjectivePoint<C>
where
    C: WeierstrassParams,
    S: Borrow<C::Scalar>,
{
    fn mul_assign(&mut self, scalar: S) {
        *self = ProjectivePoint::mul(self, scalar.borrow());
    }
}

impl<C> Neg for ProjectivePoint<C>
where
    C: WeierstrassParams,
{
    type Output = ProjectivePoint<C>;

    fn neg(self) -> ProjectivePoint<C> {
        ProjectivePoint::neg(&self)
    }
}

impl<C> Neg for &ProjectivePoint<C>
where
    C: WeierstrassParams,
{
    type Output = ProjectivePoint<C>;

    fn neg(self) -> ProjectivePoint<C> {
        ProjectivePoint::neg(self)
    }
}
