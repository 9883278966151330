//! Affine curve points.

#![allow(clippy::op_ref)]

use super::{ProjectivePoint, WeierstrassParams};
use crate::{Error, Result};
use alloc::{vec, vec::Vec};
use core::{
    borrow::Borrow,
    ops::{Mul, Neg},
};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use towerfield::{Field, SqrtField};
use zeroize::DefaultIsZeroes;

/// Encoding tag of the point at infinity.
const TAG_IDENTITY: u8 = 0x00;

/// Encoding tag of a compressed point with `sgn0(y) == 0`; `| 1` for `sgn0(y) == 1`.
const TAG_COMPRESSED: u8 = 0x02;

/// Encoding tag of an uncompressed point.
const TAG_UNCOMPRESSED: u8 = 0x04;

/// Point on a Weierstrass curve in affine coordinates.
#[derive(Clone, Copy, Debug)]
pub struct AffinePoint<C: WeierstrassParams> {
    /// x-coordinate
    pub(crate) x: C::Base,

    /// y-coordinate
    pub(crate) y: C::Base,

    /// Is this point the point at infinity? 0 = no, 1 = yes
    ///
    /// This is a proxy for [`Choice`], but uses `u8` instead to permit `const`
    /// constructors for `IDENTITY` and `GENERATOR`.
    pub(crate) infinity: u8,
}

impl<C> AffinePoint<C>
where
    C: WeierstrassParams,
{
    /// Additive identity of the group a.k.a. the point at infinity.
    pub const IDENTITY: Self = Self {
        x: C::Base::ZERO,
        y: C::Base::ZERO,
        infinity: 1,
    };

    /// Base point of the curve.
    pub const GENERATOR: Self = Self {
        x: C::GENERATOR.0,
        y: C::GENERATOR.1,
        infinity: 0,
    };

    /// Length of [`AffinePoint::to_compressed`] output for points other than the identity.
    pub const COMPRESSED_LEN: usize = 1 + C::Base::ENCODED_LEN;

    /// Length of [`AffinePoint::to_uncompressed`] output for points other than the identity.
    pub const UNCOMPRESSED_LEN: usize = 1 + 2 * C::Base::ENCODED_LEN;

    /// Builds a point from its coordinates, checking the curve equation and subgroup
    /// membership.
    pub fn from_coordinates(x: C::Base, y: C::Base) -> Result<Self> {
        let point = Self::from_coordinates_unchecked(x, y);

        if !bool::from(point.is_on_curve()) {
            return Err(Error::NotOnCurve);
        }

        if !bool::from(point.is_torsion_free()) {
            return Err(Error::NotInSubgroup);
        }

        Ok(point)
    }

    /// Builds a point from its coordinates without any validation.
    pub const fn from_coordinates_unchecked(x: C::Base, y: C::Base) -> Self {
        Self { x, y, infinity: 0 }
    }

    /// The x-coordinate; zero for the identity.
    pub fn x(&self) -> &C::Base {
        &self.x
    }

    /// The y-coordinate; zero for the identity.
    pub fn y(&self) -> &C::Base {
        &self.y
    }

    /// Is this point the point at infinity?
    pub fn is_identity(&self) -> Choice {
        Choice::from(self.infinity)
    }

    /// Does this point satisfy `y^2 = x^3 + ax + b`? The identity always does.
    pub fn is_on_curve(&self) -> Choice {
        self.y.square().ct_eq(&curve_rhs::<C>(&self.x)) | self.is_identity()
    }

    /// Is this point in the prime-order subgroup?
    pub fn is_torsion_free(&self) -> Choice {
        ProjectivePoint::from(self).is_torsion_free()
    }

    /// Recovers the point with x-coordinate `x` whose y-coordinate has sign `sign`.
    pub fn decompress(x: C::Base, sign: Choice) -> Result<Self> {
        let beta = curve_rhs::<C>(&x).try_sqrt().map_err(|_| Error::NotOnCurve)?;
        // `sqrt` returns the root with sgn0 == 0.
        let y = C::Base::conditional_select(&beta, &-beta, sign);

        if bool::from(y.is_zero() & sign) {
            return Err(Error::InvalidEncoding);
        }

        Ok(Self::from_coordinates_unchecked(x, y))
    }

    /// Compressed encoding: `0x02 | sgn0(y)` followed by `x`, or the single byte `0x00`
    /// for the identity.
    pub fn to_compressed(&self) -> Vec<u8> {
        if bool::from(self.is_identity()) {
            return vec![TAG_IDENTITY];
        }

        let mut bytes = vec![0u8; Self::COMPRESSED_LEN];
        bytes[0] = TAG_COMPRESSED | self.y.sgn0().unwrap_u8();
        self.x.write_bytes(&mut bytes[1..]);
        bytes
    }

    /// Uncompressed encoding: `0x04` followed by `x` and `y`, or the single byte `0x00`
    /// for the identity.
    pub fn to_uncompressed(&self) -> Vec<u8> {
        if bool::from(self.is_identity()) {
            return vec![TAG_IDENTITY];
        }

        let len = C::Base::ENCODED_LEN;
        let mut bytes = vec![0u8; Self::UNCOMPRESSED_LEN];
        bytes[0] = TAG_UNCOMPRESSED;
        self.x.write_bytes(&mut bytes[1..1 + len]);
        self.y.write_bytes(&mut bytes[1 + len..]);
        bytes
    }

    /// Decodes either encoding, checking the curve equation and subgroup membership.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let point = Self::from_bytes_unchecked(bytes)?;

        if !bool::from(point.is_torsion_free()) {
            return Err(Error::NotInSubgroup);
        }

        Ok(point)
    }

    /// Decodes either encoding, checking the curve equation but not subgroup membership.
    pub fn from_bytes_unchecked(bytes: &[u8]) -> Result<Self> {
        let (&tag, body) = bytes.split_first().ok_or(Error::InvalidEncoding)?;
        let len = C::Base::ENCODED_LEN;

        match tag {
            TAG_IDENTITY if body.is_empty() => Ok(Self::IDENTITY),
            t if t & !1 == TAG_COMPRESSED && body.len() == len => {
                let x = read_coordinate::<C>(body)?;
                Self::decompress(x, Choice::from(t & 1))
            }
            TAG_UNCOMPRESSED if body.len() == 2 * len => {
                let x = read_coordinate::<C>(&body[..len])?;
                let y = read_coordinate::<C>(&body[len..])?;
                let point = Self::from_coordinates_unchecked(x, y);

                if bool::from(point.is_on_curve()) {
                    Ok(point)
                } else {
                    Err(Error::NotOnCurve)
                }
            }
            _ => Err(Error::InvalidEncoding),
        }
    }
}

/// `x^3 + ax + b`
fn curve_rhs<C: WeierstrassParams>(x: &C::Base) -> C::Base {
    (x.square() + C::A) * x + C::B
}

fn read_coordinate<C: WeierstrassParams>(bytes: &[u8]) -> Result<C::Base> {
    Option::from(C::Base::read_bytes(bytes)).ok_or(Error::InvalidEncoding)
}

impl<C> ConditionallySelectable for AffinePoint<C>
where
    C: WeierstrassParams,
{
    #[inline(always)]
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: C::Base::conditional_select(&a.x, &b.x, choice),
            y: C::Base::conditional_select(&a.y, &b.y, choice),
            infinity: u8::conditional_select(&a.infinity, &b.infinity, choice),
        }
    }
}

impl<C> ConstantTimeEq for AffinePoint<C>
where
    C: WeierstrassParams,
{
    fn ct_eq(&self, other: &Self) -> Choice {
        let both_identity = self.is_identity() & other.is_identity();
        let same_point = self.x.ct_eq(&other.x)
            & self.y.ct_eq(&other.y)
            & self.infinity.ct_eq(&other.infinity);
        both_identity | same_point
    }
}

impl<C> Default for AffinePoint<C>
where
    C: WeierstrassParams,
{
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<C> DefaultIsZeroes for AffinePoint<C> where C: WeierstrassParams {}

impl<C> Eq for AffinePoint<C> where C: WeierstrassParams {}

impl<C> PartialEq for AffinePoint<C>
where
    C: WeierstrassParams,
{
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<C> From<ProjectivePoint<C>> for AffinePoint<C>
where
    C: WeierstrassParams,
{
    fn from(p: ProjectivePoint<C>) -> AffinePoint<C> {
        p.to_affine()
    }
}

impl<C> From<&ProjectivePoint<C>> for AffinePoint<C>
where
    C: WeierstrassParams,
{
    fn from(p: &ProjectivePoint<C>) -> AffinePoint<C> {
        p.to_affine()
    }
}

impl<C, S> Mul<S> for AffinePoint<C>
where
    C: WeierstrassParams,
    S: Borrow<C::Scalar>,
{
    type Output = ProjectivePoint<C>;

    fn mul(self, scalar: S) -> ProjectivePoint<C> {
        ProjectivePoint::<C>::from(self) * scalar
    }
}

impl<C> Neg for AffinePoint<C>
where
    C: WeierstrassParams,
{
    type Output = Self;

    fn neg(self) -> Self {
        AffinePoint {
            x: self.x,
            y: C::Base::conditional_select(&-self.y, &self.y, self.is_identity()),
            infinity: self.infinity,
        }
    }
}

impl<C> Neg for &AffinePoint<C>
where
    C: WeierstrassParams,
{
    type Output = AffinePoint<C>;

    fn neg(self) -> AffinePoint<C> {
        -(*self)
    }
}
