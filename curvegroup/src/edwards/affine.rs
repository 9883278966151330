use super::{EdwardsParams, ExtendedPoint};
use crate::{Error, Result};
use alloc::{vec, vec::Vec};
use core::{
    borrow::Borrow,
    ops::{Mul, Neg},
};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use towerfield::{Field, SqrtField};
use zeroize::DefaultIsZeroes;

/// Affine point on a twisted Edwards curve.
///
/// The identity `(0, 1)` is an ordinary affine point.
#[derive(Copy, Clone, Debug)]
pub struct AffinePoint<C: EdwardsParams> {
    pub(crate) x: C::Base,
    pub(crate) y: C::Base,
}

impl<C: EdwardsParams> AffinePoint<C> {
    /// The identity point
    pub const IDENTITY: Self = Self {
        x: C::Base::ZERO,
        y: C::Base::ONE,
    };

    /// Base point of the curve.
    pub const GENERATOR: Self = Self {
        x: C::GENERATOR.0,
        y: C::GENERATOR.1,
    };

    /// Length of [`AffinePoint::to_bytes`] output.
    pub const ENCODED_LEN: usize = C::Base::ENCODED_LEN;

    /// Builds a point from its coordinates, checking the curve equation and subgroup
    /// membership.
    pub fn from_coordinates(x: C::Base, y: C::Base) -> Result<Self> {
        let point = Self { x, y };

        if !bool::from(point.is_on_curve()) {
            return Err(Error::NotOnCurve);
        }

        if !bool::from(point.to_extended().is_torsion_free()) {
            return Err(Error::NotInSubgroup);
        }

        Ok(point)
    }

    /// Builds a point from its coordinates without any validation.
    pub const fn from_coordinates_unchecked(x: C::Base, y: C::Base) -> Self {
        Self { x, y }
    }

    /// The x-coordinate.
    pub fn x(&self) -> &C::Base {
        &self.x
    }

    /// The y-coordinate.
    pub fn y(&self) -> &C::Base {
        &self.y
    }

    /// Is this the identity point?
    pub fn is_identity(&self) -> Choice {
        self.ct_eq(&Self::IDENTITY)
    }

    /// Check if this point is on the curve
    pub fn is_on_curve(&self) -> Choice {
        // a x^2 + y^2 == 1 + d x^2 y^2
        let xx = self.x.square();
        let yy = self.y.square();
        let lhs = C::A * xx + yy;
        let rhs = C::Base::ONE + C::D * xx * yy;

        lhs.ct_eq(&rhs)
    }

    /// Convert to edwards extended point
    pub fn to_extended(&self) -> ExtendedPoint<C> {
        ExtendedPoint {
            X: self.x,
            Y: self.y,
            Z: C::Base::ONE,
            T: self.x * self.y,
        }
    }

    /// Recovers the point with y-coordinate `y` whose x-coordinate has sign `sign`,
    /// solving `x^2 = (y^2 - 1) / (d y^2 - a)`.
    pub fn decompress(y: C::Base, sign: Choice) -> Result<Self> {
        let yy = y.square();
        let den = (C::D * yy - C::A).invert();
        let den = Option::<C::Base>::from(den).ok_or(Error::NotOnCurve)?;
        let x = ((yy - C::Base::ONE) * den)
            .try_sqrt()
            .map_err(|_| Error::NotOnCurve)?;

        if bool::from(x.is_zero() & sign) {
            return Err(Error::InvalidEncoding);
        }

        Ok(Self {
            x: C::Base::conditional_select(&x, &-x, sign),
            y,
        })
    }

    /// Standard compression; store `y` with the sign of `x` in the top bit.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = vec![0u8; Self::ENCODED_LEN];
        self.y.write_bytes(&mut bytes);
        bytes[0] |= self.x.sgn0().unwrap_u8() << 7;
        bytes
    }

    /// Decodes [`AffinePoint::to_bytes`] output, checking subgroup membership.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let point = Self::from_bytes_unchecked(bytes)?;

        if !bool::from(point.to_extended().is_torsion_free()) {
            return Err(Error::NotInSubgroup);
        }

        Ok(point)
    }

    /// Decodes [`AffinePoint::to_bytes`] output without a subgroup check.
    pub fn from_bytes_unchecked(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != Self::ENCODED_LEN {
            return Err(Error::InvalidEncoding);
        }

        let mut y_bytes = bytes.to_vec();
        let sign = Choice::from(y_bytes[0] >> 7);
        y_bytes[0] &= 0x7f;

        let y = Option::from(C::Base::read_bytes(&y_bytes)).ok_or(Error::InvalidEncoding)?;
        Self::decompress(y, sign)
    }
}

impl<C: EdwardsParams> Default for AffinePoint<C> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<C: EdwardsParams> DefaultIsZeroes for AffinePoint<C> {}

impl<C: EdwardsParams> ConditionallySelectable for AffinePoint<C> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: C::Base::conditional_select(&a.x, &b.x, choice),
            y: C::Base::conditional_select(&a.y, &b.y, choice),
        }
    }
}

impl<C: EdwardsParams> ConstantTimeEq for AffinePoint<C> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.x.ct_eq(&other.x) & self.y.ct_eq(&other.y)
    }
}

impl<C: EdwardsParams> Eq for AffinePoint<C> {}

impl<C: EdwardsParams> PartialEq for AffinePoint<C> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<C: EdwardsParams> From<ExtendedPoint<C>> for AffinePoint<C> {
    fn from(value: ExtendedPoint<C>) -> Self {
        value.to_affine()
    }
}

impl<C: EdwardsParams> From<&ExtendedPoint<C>> for AffinePoint<C> {
    fn from(value: &ExtendedPoint<C>) -> Self {
        value.to_affine()
    }
}

impl<C: EdwardsParams> Neg for AffinePoint<C> {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: self.y,
        }
    }
}

impl<C, S> Mul<S> for AffinePoint<C>
where
    C: EdwardsParams,
    S: Borrow<C::Scalar>,
{
    type Output = ExtendedPoint<C>;

    fn mul(self, scalar: S) -> ExtendedPoint<C> {
        self.to_extended().scalar_mul(scalar.borrow())
    }
}
