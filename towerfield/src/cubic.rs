//! Cubic extensions `Base[v] / (v^3 - ξ)`.

use crate::{Field, RessolParams, SqrtField, ressol};
use core::fmt::{self, Debug};
use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

/// Parameters of a cubic extension.
pub trait CubicExtConfig: Copy + Debug + Default + Eq + Send + Sync + 'static {
    /// The field being extended.
    type Base: Field;

    /// Field holding the Frobenius coefficients, either `Base` or one of its subfields.
    type FrobCoeff: Field;

    /// `ξ^((p^i - 1) / 3)` for `i` in `0..len`.
    const FROBENIUS_COEFF_C1: &'static [Self::FrobCoeff];

    /// `ξ^(2(p^i - 1) / 3)` for `i` in `0..len`.
    const FROBENIUS_COEFF_C2: &'static [Self::FrobCoeff];

    /// Multiplies a base element by the non-residue `ξ`.
    fn mul_base_by_nonresidue(x: &Self::Base) -> Self::Base;

    /// Multiplies a base element by a Frobenius coefficient.
    fn mul_base_by_frob_coeff(x: &Self::Base, coeff: &Self::FrobCoeff) -> Self::Base;
}

/// Element `c0 + c1·v + c2·v^2` of a cubic extension.
pub struct CubicExt<C: CubicExtConfig> {
    /// Constant coefficient.
    pub c0: C::Base,
    /// Coefficient of `v`.
    pub c1: C::Base,
    /// Coefficient of `v^2`.
    pub c2: C::Base,
}

impl<C: CubicExtConfig> CubicExt<C> {
    /// Zero element.
    pub const ZERO: Self = Self::new(C::Base::ZERO, C::Base::ZERO, C::Base::ZERO);

    /// Multiplicative identity.
    pub const ONE: Self = Self::new(C::Base::ONE, C::Base::ZERO, C::Base::ZERO);

    /// Builds `c0 + c1·v + c2·v^2`.
    pub const fn new(c0: C::Base, c1: C::Base, c2: C::Base) -> Self {
        Self { c0, c1, c2 }
    }

    /// Embeds a base field element.
    pub const fn from_base(c0: C::Base) -> Self {
        Self::new(c0, C::Base::ZERO, C::Base::ZERO)
    }

    /// Add elements.
    pub fn add(&self, rhs: &Self) -> Self {
        Self::new(self.c0 + rhs.c0, self.c1 + rhs.c1, self.c2 + rhs.c2)
    }

    /// Subtract elements.
    pub fn sub(&self, rhs: &Self) -> Self {
        Self::new(self.c0 - rhs.c0, self.c1 - rhs.c1, self.c2 - rhs.c2)
    }

    /// Negate element.
    pub fn neg(&self) -> Self {
        Self::new(-self.c0, -self.c1, -self.c2)
    }

    /// Double element.
    #[must_use]
    pub fn double(&self) -> Self {
        Self::new(self.c0.double(), self.c1.double(), self.c2.double())
    }

    /// Karatsuba-style multiplication with six base multiplications.
    pub fn multiply(&self, rhs: &Self) -> Self {
        let (a0, a1, a2) = (self.c0, self.c1, self.c2);
        let (b0, b1, b2) = (rhs.c0, rhs.c1, rhs.c2);

        let v0 = a0 * b0;
        let v1 = a1 * b1;
        let v2 = a2 * b2;

        let c0 = v0 + C::mul_base_by_nonresidue(&((a1 + a2) * (b1 + b2) - v1 - v2));
        let c1 = (a0 + a1) * (b0 + b1) - v0 - v1 + C::mul_base_by_nonresidue(&v2);
        let c2 = (a0 + a2) * (b0 + b2) - v0 - v2 + v1;
        Self::new(c0, c1, c2)
    }

    /// Squaring (Chung-Hasan SQR2).
    #[must_use]
    pub fn square(&self) -> Self {
        let s0 = self.c0.square();
        let ab = self.c0 * self.c1;
        let s1 = ab.double();
        let s2 = (self.c0 - self.c1 + self.c2).square();
        let bc = self.c1 * self.c2;
        let s3 = bc.double();
        let s4 = self.c2.square();

        Self::new(
            s0 + C::mul_base_by_nonresidue(&s3),
            s1 + C::mul_base_by_nonresidue(&s4),
            s1 + s2 + s3 - s0 - s4,
        )
    }

    /// Multiplies every coefficient by a base field element.
    pub fn scale(&self, k: &C::Base) -> Self {
        Self::new(self.c0 * k, self.c1 * k, self.c2 * k)
    }

    /// Multiplies by `v`.
    pub fn mul_by_nonresidue(&self) -> Self {
        Self::new(C::mul_base_by_nonresidue(&self.c2), self.c0, self.c1)
    }

    /// Multiplies by the sparse element `b0 + b1·v`.
    pub fn mul_by_01(&self, b0: &C::Base, b1: &C::Base) -> Self {
        let v0 = self.c0 * b0;
        let v1 = self.c1 * b1;

        let c0 = C::mul_base_by_nonresidue(&(self.c2 * b1)) + v0;
        let c1 = (self.c0 + self.c1) * (*b0 + b1) - v0 - v1;
        let c2 = self.c2 * b0 + v1;
        Self::new(c0, c1, c2)
    }

    /// Multiplies by the sparse element `b0 + b2·v^2`.
    pub fn mul_by_02(&self, b0: &C::Base, b2: &C::Base) -> Self {
        let v0 = self.c0 * b0;
        let v2 = self.c2 * b2;

        let c0 = v0 + C::mul_base_by_nonresidue(&(self.c1 * b2));
        let c1 = self.c1 * b0 + C::mul_base_by_nonresidue(&v2);
        let c2 = (self.c0 + self.c2) * (*b0 + b2) - v0 - v2;
        Self::new(c0, c1, c2)
    }

    /// Multiplies by the sparse element `b1·v`.
    pub fn mul_by_1(&self, b1: &C::Base) -> Self {
        Self::new(
            C::mul_base_by_nonresidue(&(self.c2 * b1)),
            self.c0 * b1,
            self.c1 * b1,
        )
    }

    /// Multiplicative inverse, `None` for zero.
    pub fn invert(&self) -> CtOption<Self> {
        let (a0, a1, a2) = (self.c0, self.c1, self.c2);

        let t0 = a0.square() - C::mul_base_by_nonresidue(&(a1 * a2));
        let t1 = C::mul_base_by_nonresidue(&a2.square()) - a0 * a1;
        let t2 = a1.square() - a0 * a2;
        let t3 = a0 * t0 + C::mul_base_by_nonresidue(&(a2 * t1 + a1 * t2));

        t3.invert().map(|t| Self::new(t0 * t, t1 * t, t2 * t))
    }

    /// Raises to the `p^power`-th power.
    #[must_use]
    pub fn frobenius_map(&self, power: usize) -> Self {
        let (coeffs1, coeffs2) = (C::FROBENIUS_COEFF_C1, C::FROBENIUS_COEFF_C2);
        Self::new(
            self.c0.frobenius_map(power),
            C::mul_base_by_frob_coeff(
                &self.c1.frobenius_map(power),
                &coeffs1[power % coeffs1.len()],
            ),
            C::mul_base_by_frob_coeff(
                &self.c2.frobenius_map(power),
                &coeffs2[power % coeffs2.len()],
            ),
        )
    }
}

impl<C: CubicExtConfig> Clone for CubicExt<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: CubicExtConfig> Copy for CubicExt<C> {}

impl<C: CubicExtConfig> Debug for CubicExt<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CubicExt")
            .field("c0", &self.c0)
            .field("c1", &self.c1)
            .field("c2", &self.c2)
            .finish()
    }
}

impl<C: CubicExtConfig> Default for CubicExt<C> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<C: CubicExtConfig> ConditionallySelectable for CubicExt<C> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self::new(
            C::Base::conditional_select(&a.c0, &b.c0, choice),
            C::Base::conditional_select(&a.c1, &b.c1, choice),
            C::Base::conditional_select(&a.c2, &b.c2, choice),
        )
    }
}

impl<C: CubicExtConfig> ConstantTimeEq for CubicExt<C> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1) & self.c2.ct_eq(&other.c2)
    }
}

impl<C: CubicExtConfig> PartialEq for CubicExt<C> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<C: CubicExtConfig> Eq for CubicExt<C> {}

impl<C: CubicExtConfig> From<u64> for CubicExt<C>
where
    C::Base: From<u64>,
{
    fn from(n: u64) -> Self {
        Self::from_base(C::Base::from(n))
    }
}

crate::ops::impl_ext_ops!(CubicExt, CubicExtConfig);

impl<C: CubicExtConfig> Field for CubicExt<C> {
    const ZERO: Self = Self::ZERO;
    const ONE: Self = Self::ONE;
    const DEGREE: usize = 3 * C::Base::DEGREE;
    const ENCODED_LEN: usize = 3 * C::Base::ENCODED_LEN;

    fn random(mut rng: impl RngCore) -> Self {
        Self::new(
            C::Base::random(&mut rng),
            C::Base::random(&mut rng),
            C::Base::random(&mut rng),
        )
    }

    fn square(&self) -> Self {
        CubicExt::square(self)
    }

    fn double(&self) -> Self {
        CubicExt::double(self)
    }

    fn invert(&self) -> CtOption<Self> {
        CubicExt::invert(self)
    }

    fn frobenius_map(&self, power: usize) -> Self {
        CubicExt::frobenius_map(self, power)
    }

    fn sgn0(&self) -> Choice {
        let (z0, z1) = (self.c0.is_zero(), self.c1.is_zero());
        self.c0.sgn0() | (z0 & self.c1.sgn0()) | (z0 & z1 & self.c2.sgn0())
    }

    fn write_bytes(&self, out: &mut [u8]) {
        let len = C::Base::ENCODED_LEN;
        self.c0.write_bytes(&mut out[..len]);
        self.c1.write_bytes(&mut out[len..2 * len]);
        self.c2.write_bytes(&mut out[2 * len..]);
    }

    fn read_bytes(bytes: &[u8]) -> CtOption<Self> {
        if bytes.len() != Self::ENCODED_LEN {
            return CtOption::new(Self::ZERO, Choice::from(0));
        }

        let len = C::Base::ENCODED_LEN;
        let c0 = C::Base::read_bytes(&bytes[..len]);
        let c1 = C::Base::read_bytes(&bytes[len..2 * len]);
        let c2 = C::Base::read_bytes(&bytes[2 * len..]);
        let is_some = c0.is_some() & c1.is_some() & c2.is_some();
        CtOption::new(
            Self::new(
                c0.unwrap_or(C::Base::ZERO),
                c1.unwrap_or(C::Base::ZERO),
                c2.unwrap_or(C::Base::ZERO),
            ),
            is_some,
        )
    }
}

impl<C> SqrtField for CubicExt<C>
where
    C: CubicExtConfig + RessolParams<CubicExt<C>>,
{
    fn sqrt(&self) -> CtOption<Self> {
        ressol::<Self, C>(self)
    }
}
