//! Quadratic extensions `Base[u] / (u^2 - β)`.

use crate::{Field, RessolParams, SqrtField, ressol};
use core::fmt::{self, Debug};
use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

/// Parameters of a quadratic extension.
pub trait QuadExtConfig: Copy + Debug + Default + Eq + Send + Sync + 'static {
    /// The field being extended.
    type Base: Field;

    /// Field holding the Frobenius coefficients, either `Base` or one of its subfields.
    type FrobCoeff: Field;

    /// `β^((p^i - 1) / 2)` for `i` in `0..len`, indexed by the Frobenius power.
    const FROBENIUS_COEFF_C1: &'static [Self::FrobCoeff];

    /// Multiplies a base element by the non-residue `β`.
    fn mul_base_by_nonresidue(x: &Self::Base) -> Self::Base;

    /// Multiplies a base element by a Frobenius coefficient.
    fn mul_base_by_frob_coeff(x: &Self::Base, coeff: &Self::FrobCoeff) -> Self::Base;
}

/// Element `c0 + c1·u` of a quadratic extension.
pub struct QuadExt<C: QuadExtConfig> {
    /// Constant coefficient.
    pub c0: C::Base,
    /// Coefficient of `u`.
    pub c1: C::Base,
}

impl<C: QuadExtConfig> QuadExt<C> {
    /// Zero element.
    pub const ZERO: Self = Self::new(C::Base::ZERO, C::Base::ZERO);

    /// Multiplicative identity.
    pub const ONE: Self = Self::new(C::Base::ONE, C::Base::ZERO);

    /// Builds `c0 + c1·u`.
    pub const fn new(c0: C::Base, c1: C::Base) -> Self {
        Self { c0, c1 }
    }

    /// Embeds a base field element.
    pub const fn from_base(c0: C::Base) -> Self {
        Self::new(c0, C::Base::ZERO)
    }

    /// Add elements.
    pub fn add(&self, rhs: &Self) -> Self {
        Self::new(self.c0 + rhs.c0, self.c1 + rhs.c1)
    }

    /// Subtract elements.
    pub fn sub(&self, rhs: &Self) -> Self {
        Self::new(self.c0 - rhs.c0, self.c1 - rhs.c1)
    }

    /// Negate element.
    pub fn neg(&self) -> Self {
        Self::new(-self.c0, -self.c1)
    }

    /// Double element.
    #[must_use]
    pub fn double(&self) -> Self {
        Self::new(self.c0.double(), self.c1.double())
    }

    /// Karatsuba multiplication.
    pub fn multiply(&self, rhs: &Self) -> Self {
        let v0 = self.c0 * rhs.c0;
        let v1 = self.c1 * rhs.c1;
        let c0 = v0 + C::mul_base_by_nonresidue(&v1);
        let c1 = (self.c0 + self.c1) * (rhs.c0 + rhs.c1) - v0 - v1;
        Self::new(c0, c1)
    }

    /// Complex squaring.
    #[must_use]
    pub fn square(&self) -> Self {
        let ab = self.c0 * self.c1;
        let c0 = (self.c0 + self.c1) * (self.c0 + C::mul_base_by_nonresidue(&self.c1))
            - ab
            - C::mul_base_by_nonresidue(&ab);
        Self::new(c0, ab.double())
    }

    /// Multiplies both coefficients by a base field element.
    pub fn scale(&self, k: &C::Base) -> Self {
        Self::new(self.c0 * k, self.c1 * k)
    }

    /// Multiplies by `u`.
    pub fn mul_by_nonresidue(&self) -> Self {
        Self::new(C::mul_base_by_nonresidue(&self.c1), self.c0)
    }

    /// The conjugate `c0 - c1·u`, which equals the `p^(d/2)`-th power for extension degree `d`.
    pub fn conjugate(&self) -> Self {
        Self::new(self.c0, -self.c1)
    }

    /// Inverse of an element of norm one, i.e. its conjugate.
    pub fn unitary_inverse(&self) -> Self {
        self.conjugate()
    }

    /// The norm `c0^2 - β·c1^2` down to the base field.
    pub fn norm(&self) -> C::Base {
        self.c0.square() - C::mul_base_by_nonresidue(&self.c1.square())
    }

    /// Multiplicative inverse, `None` for zero.
    pub fn invert(&self) -> CtOption<Self> {
        self.norm()
            .invert()
            .map(|t| Self::new(self.c0 * t, -(self.c1 * t)))
    }

    /// Raises to the `p^power`-th power.
    #[must_use]
    pub fn frobenius_map(&self, power: usize) -> Self {
        let coeffs = C::FROBENIUS_COEFF_C1;
        Self::new(
            self.c0.frobenius_map(power),
            C::mul_base_by_frob_coeff(&self.c1.frobenius_map(power), &coeffs[power % coeffs.len()]),
        )
    }

    /// Squaring valid only for elements of norm one.
    ///
    /// Uses `c0^2 - β·c1^2 = 1` to replace the multiplication by `β` with a subtraction.
    #[must_use]
    pub fn cyclotomic_square(&self) -> Self {
        let t0 = self.c0.square();
        let t1 = self.c1.square();
        let c1 = (self.c0 + self.c1).square() - t0 - t1;
        Self::new(t0.double() - C::Base::ONE, c1)
    }

    /// Exponentiation of a norm-one element via [`QuadExt::cyclotomic_square`].
    ///
    /// **Variable time with respect to `exp`.**
    #[must_use]
    pub fn cyclotomic_exp(&self, exp: &[u64]) -> Self {
        let mut res = Self::ONE;
        let mut found_one = false;

        for word in exp.iter().rev() {
            for i in (0..64).rev() {
                if found_one {
                    res = res.cyclotomic_square();
                }

                if (word >> i) & 1 == 1 {
                    found_one = true;
                    res *= self;
                }
            }
        }

        res
    }
}

impl<C: QuadExtConfig> Clone for QuadExt<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: QuadExtConfig> Copy for QuadExt<C> {}

impl<C: QuadExtConfig> Debug for QuadExt<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuadExt")
            .field("c0", &self.c0)
            .field("c1", &self.c1)
            .finish()
    }
}

impl<C: QuadExtConfig> Default for QuadExt<C> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<C: QuadExtConfig> ConditionallySelectable for QuadExt<C> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self::new(
            C::Base::conditional_select(&a.c0, &b.c0, choice),
            C::Base::conditional_select(&a.c1, &b.c1, choice),
        )
    }
}

impl<C: QuadExtConfig> ConstantTimeEq for QuadExt<C> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1)
    }
}

impl<C: QuadExtConfig> PartialEq for QuadExt<C> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<C: QuadExtConfig> Eq for QuadExt<C> {}

impl<C: QuadExtConfig> From<u64> for QuadExt<C>
where
    C::Base: From<u64>,
{
    fn from(n: u64) -> Self {
        Self::from_base(C::Base::from(n))
    }
}

crate::ops::impl_ext_ops!(QuadExt, QuadExtConfig);

impl<C: QuadExtConfig> Field for QuadExt<C> {
    const ZERO: Self = Self::ZERO;
    const ONE: Self = Self::ONE;
    const DEGREE: usize = 2 * C::Base::DEGREE;
    const ENCODED_LEN: usize = 2 * C::Base::ENCODED_LEN;

    fn random(mut rng: impl RngCore) -> Self {
        Self::new(C::Base::random(&mut rng), C::Base::random(&mut rng))
    }

    fn square(&self) -> Self {
        QuadExt::square(self)
    }

    fn double(&self) -> Self {
        QuadExt::double(self)
    }

    fn invert(&self) -> CtOption<Self> {
        QuadExt::invert(self)
    }

    fn frobenius_map(&self, power: usize) -> Self {
        QuadExt::frobenius_map(self, power)
    }

    fn sgn0(&self) -> Choice {
        self.c0.sgn0() | (self.c0.is_zero() & self.c1.sgn0())
    }

    fn write_bytes(&self, out: &mut [u8]) {
        let (lo, hi) = out.split_at_mut(C::Base::ENCODED_LEN);
        self.c0.write_bytes(lo);
        self.c1.write_bytes(hi);
    }

    fn read_bytes(bytes: &[u8]) -> CtOption<Self> {
        if bytes.len() != Self::ENCODED_LEN {
            return CtOption::new(Self::ZERO, Choice::from(0));
        }

        let (lo, hi) = bytes.split_at(C::Base::ENCODED_LEN);
        let c0 = C::Base::read_bytes(lo);
        let c1 = C::Base::read_bytes(hi);
        let is_some = c0.is_some() & c1.is_some();
        CtOption::new(
            Self::new(c0.unwrap_or(C::Base::ZERO), c1.unwrap_or(C::Base::ZERO)),
            is_some,
        )
    }
}

impl<C> SqrtField for QuadExt<C>
where
    C: QuadExtConfig + RessolParams<QuadExt<C>>,
{
    fn sqrt(&self) -> CtOption<Self> {
        ressol::<Self, C>(self)
    }
}
