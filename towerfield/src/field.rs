//! The field interface shared by prime fields and their extensions.

use crate::{Error, Result};
use core::{
    fmt::Debug,
    iter::{Product, Sum},
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};
use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

/// Arithmetic available in every field of an extension tower.
///
/// Operator impls for owned and borrowed right-hand sides are required so generic code
/// can avoid copies of large extension elements.
pub trait Field:
    Sized
    + Copy
    + Debug
    + Default
    + Eq
    + Send
    + Sync
    + 'static
    + ConditionallySelectable
    + ConstantTimeEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
    + for<'a> Add<&'a Self, Output = Self>
    + for<'a> Sub<&'a Self, Output = Self>
    + for<'a> Mul<&'a Self, Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + for<'a> AddAssign<&'a Self>
    + for<'a> SubAssign<&'a Self>
    + for<'a> MulAssign<&'a Self>
    + Sum
    + Product
{
    /// Additive identity.
    const ZERO: Self;

    /// Multiplicative identity.
    const ONE: Self;

    /// Degree of the field over its prime subfield.
    const DEGREE: usize;

    /// Length in bytes of [`Field::write_bytes`] output.
    const ENCODED_LEN: usize;

    /// Uniformly random element.
    fn random(rng: impl RngCore) -> Self;

    /// Is this the additive identity?
    fn is_zero(&self) -> Choice {
        self.ct_eq(&Self::ZERO)
    }

    /// Squares this element.
    #[must_use]
    fn square(&self) -> Self;

    /// Doubles this element.
    #[must_use]
    fn double(&self) -> Self;

    /// Multiplicative inverse, `None` for zero.
    fn invert(&self) -> CtOption<Self>;

    /// Raises to the `p^power`-th power.
    #[must_use]
    fn frobenius_map(&self, power: usize) -> Self;

    /// The sign of an element per RFC 9380, section 4.1.
    fn sgn0(&self) -> Choice;

    /// Writes the big-endian encoding, coefficients in ascending order, into `out`.
    ///
    /// `out` must be exactly [`Field::ENCODED_LEN`] bytes long.
    fn write_bytes(&self, out: &mut [u8]);

    /// Decodes the output of [`Field::write_bytes`], rejecting bad lengths and
    /// unreduced coefficients.
    fn read_bytes(bytes: &[u8]) -> CtOption<Self>;

    /// Raises to a little-endian `u64` exponent.
    ///
    /// **Variable time with respect to `exp`.**
    #[must_use]
    fn pow_vartime(&self, exp: &[u64]) -> Self {
        let mut res = Self::ONE;
        for word in exp.iter().rev() {
            for i in (0..64).rev() {
                res = res.square();
                if (word >> i) & 1 == 1 {
                    res *= self;
                }
            }
        }
        res
    }

    /// Raises to a little-endian `u64` exponent with a fixed sequence of operations.
    #[must_use]
    fn pow(&self, exp: &[u64]) -> Self {
        let mut res = Self::ONE;
        for word in exp.iter().rev() {
            for i in (0..64).rev() {
                res = res.square();
                let product = res * self;
                res.conditional_assign(&product, Choice::from(((word >> i) & 1) as u8));
            }
        }
        res
    }
}

/// Fields supporting square roots.
pub trait SqrtField: Field {
    /// The square root with `sgn0 == 0`, or `None` for a non-residue.
    fn sqrt(&self) -> CtOption<Self>;

    /// Like [`SqrtField::sqrt`], reporting [`Error::NonResidue`] when there is no root.
    fn try_sqrt(&self) -> Result<Self> {
        Option::from(self.sqrt()).ok_or(Error::NonResidue)
    }
}

/// Constants for [`ressol`] in a field whose multiplicative group has order `2^S * T`, `T` odd.
pub trait RessolParams<F: Field> {
    /// `S`, the two-adicity of the multiplicative group.
    const TWO_ADICITY: u32;

    /// `(T - 1) / 2` as little-endian words.
    const T_MINUS_ONE_DIV_TWO: &'static [u64];

    /// A quadratic non-residue raised to the power `T`.
    const NQR_TO_T: F;
}

/// Square root by the Tonelli-Shanks algorithm, normalized to `sgn0 == 0`.
///
/// **Variable time.** Works in any field given its [`RessolParams`].
pub fn ressol<F: Field, R: RessolParams<F>>(a: &F) -> CtOption<F> {
    if bool::from(a.is_zero()) {
        return CtOption::new(F::ZERO, Choice::from(1));
    }

    let mut v = R::TWO_ADICITY;
    let mut z = R::NQR_TO_T;
    let w = a.pow_vartime(R::T_MINUS_ONE_DIV_TWO);
    let mut x = *a * w;
    let mut b = x * w;

    while b != F::ONE {
        let mut m = 0;
        let mut b2m = b;
        while b2m != F::ONE {
            b2m = b2m.square();
            m += 1;
            if m >= v {
                return CtOption::new(F::ZERO, Choice::from(0));
            }
        }

        let mut w = z;
        for _ in 0..(v - m - 1) {
            w = w.square();
        }

        z = w.square();
        b *= z;
        x *= w;
        v = m;
    }

    let root = F::conditional_select(&x, &-x, x.sgn0());
    CtOption::new(root, root.square().ct_eq(a))
}
