//! Modular integers with a modulus chosen at runtime.
//!
//! Odd moduli are reduced with `crypto-bigint`'s runtime Montgomery arithmetic
//! ([`DynResidueParams`]), even moduli with Barrett reduction ([`BarrettParams`]).
//! [`Modulus::new`] picks the strategy from the parity of the modulus.

use crate::{Error, Result};
use bigint::{
    Limb, NonZero, Uint,
    modular::runtime_mod::{DynResidue, DynResidueParams},
};
use core::ops::{Add, Mul, Neg, Sub};
use subtle::{Choice, ConditionallySelectable};

/// Barrett reduction parameters (HAC 14.42, radix 2) for a modulus `m` of `k` bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BarrettParams<const LIMBS: usize> {
    /// The modulus `m`.
    modulus: Uint<LIMBS>,

    /// `floor(2^(2k) / m)`.
    mu: Uint<LIMBS>,

    /// Bit length of `m`.
    k: usize,
}

impl<const LIMBS: usize> BarrettParams<LIMBS> {
    /// Compute the parameters for `modulus`.
    ///
    /// Returns `None` unless `1 < modulus < 2^(Uint::BITS - 1)`.
    pub fn new(modulus: &Uint<LIMBS>) -> Option<Self> {
        let k = modulus.bits_vartime();
        if k < 2 || k >= Uint::<LIMBS>::BITS {
            return None;
        }

        // Long division of 2^(2k) by m; the quotient has at most k + 1 bits.
        let mut mu = Uint::ZERO;
        let mut rem = Uint::<LIMBS>::ONE;
        for i in (0..2 * k).rev() {
            rem = rem.shl_vartime(1);
            if rem >= *modulus {
                rem = rem.wrapping_sub(modulus);
                mu |= Uint::ONE.shl_vartime(i);
            }
        }

        Some(Self {
            modulus: *modulus,
            mu,
            k,
        })
    }

    /// The modulus.
    pub const fn modulus(&self) -> &Uint<LIMBS> {
        &self.modulus
    }

    /// Reduce the double-width value `hi * 2^Uint::BITS + lo`, which must be below `m^2`.
    pub fn reduce_wide(&self, lo: &Uint<LIMBS>, hi: &Uint<LIMBS>) -> Uint<LIMBS> {
        let q1 = Uint::shr_vartime_wide((*lo, *hi), self.k - 1).0;
        let q3 = Uint::shr_vartime_wide(q1.mul_wide(&self.mu), self.k + 1).0;
        let (qm_lo, qm_hi) = q3.mul_wide(&self.modulus);

        // x - q3 * m lies in [0, 3m).
        let (mut r_lo, borrow) = lo.sbb(&qm_lo, Limb::ZERO);
        let mut r_hi = hi.sbb(&qm_hi, borrow).0;

        while r_hi != Uint::ZERO || r_lo >= self.modulus {
            let (lo, borrow) = r_lo.sbb(&self.modulus, Limb::ZERO);
            r_lo = lo;
            r_hi = r_hi.sbb(&Uint::ZERO, borrow).0;
        }

        r_lo
    }

    /// Modular product `a * b mod m` for `a, b < m`.
    pub fn mul(&self, a: &Uint<LIMBS>, b: &Uint<LIMBS>) -> Uint<LIMBS> {
        let (lo, hi) = a.mul_wide(b);
        self.reduce_wide(&lo, &hi)
    }
}

/// A modulus together with its reduction strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Modulus<const LIMBS: usize> {
    /// Odd modulus, elements kept in Montgomery form.
    Montgomery(DynResidueParams<LIMBS>),

    /// Even modulus, elements kept as canonical residues.
    Barrett(BarrettParams<LIMBS>),
}

impl<const LIMBS: usize> Modulus<LIMBS> {
    /// Choose the reduction strategy for `modulus` by parity.
    pub fn new(modulus: &Uint<LIMBS>) -> Result<Self> {
        if *modulus < Uint::from_u64(2) {
            return Err(Error::InvalidModulus);
        }

        if modulus.bit_vartime(0) {
            Ok(Self::Montgomery(DynResidueParams::new(modulus)))
        } else {
            BarrettParams::new(modulus)
                .map(Self::Barrett)
                .ok_or(Error::InvalidModulus)
        }
    }

    /// The modulus value.
    pub fn value(&self) -> &Uint<LIMBS> {
        match self {
            Self::Montgomery(params) => params.modulus(),
            Self::Barrett(params) => params.modulus(),
        }
    }

    /// Reduce an arbitrary integer into an element of this ring.
    pub fn element(&self, value: &Uint<LIMBS>) -> ModularInteger<'_, LIMBS> {
        let inner = match self {
            Self::Montgomery(params) => *DynResidue::new(value, *params).as_montgomery(),
            Self::Barrett(params) => value.const_rem(params.modulus()).0,
        };
        ModularInteger::from_inner(inner, self)
    }

    /// The additive identity.
    pub fn zero(&self) -> ModularInteger<'_, LIMBS> {
        ModularInteger::from_inner(Uint::ZERO, self)
    }

    /// The multiplicative identity.
    pub fn one(&self) -> ModularInteger<'_, LIMBS> {
        let inner = match self {
            Self::Montgomery(params) => *DynResidue::one(*params).as_montgomery(),
            Self::Barrett(_) => Uint::ONE,
        };
        ModularInteger::from_inner(inner, self)
    }

    fn mul(&self, a: &Uint<LIMBS>, b: &Uint<LIMBS>) -> Uint<LIMBS> {
        match self {
            Self::Montgomery(params) => {
                let product = DynResidue::mul(
                    &DynResidue::from_montgomery(*a, *params),
                    &DynResidue::from_montgomery(*b, *params),
                );
                *product.as_montgomery()
            }
            Self::Barrett(params) => params.mul(a, b),
        }
    }
}

/// An integer reduced modulo a runtime [`Modulus`].
///
/// Values are kept in the representation of the modulus' reduction strategy; use
/// [`ModularInteger::retrieve`] to obtain the canonical residue.
#[derive(Clone, Copy, Debug)]
pub struct ModularInteger<'m, const LIMBS: usize> {
    inner: Uint<LIMBS>,
    modulus: &'m Modulus<LIMBS>,
}

impl<'m, const LIMBS: usize> ModularInteger<'m, LIMBS> {
    /// Wrap an already-reduced value in the modulus' internal representation.
    pub(crate) fn from_inner(inner: Uint<LIMBS>, modulus: &'m Modulus<LIMBS>) -> Self {
        Self { inner, modulus }
    }

    /// The internal representation (Montgomery form for odd moduli).
    pub(crate) fn inner(&self) -> &Uint<LIMBS> {
        &self.inner
    }

    /// The modulus this integer is reduced by.
    pub fn modulus(&self) -> &'m Modulus<LIMBS> {
        self.modulus
    }

    /// The canonical residue in `[0, m)`.
    pub fn retrieve(&self) -> Uint<LIMBS> {
        match self.modulus {
            Modulus::Montgomery(params) => {
                DynResidue::from_montgomery(self.inner, *params).retrieve()
            }
            Modulus::Barrett(_) => self.inner,
        }
    }

    /// Is this the zero residue?
    pub fn is_zero(&self) -> bool {
        self.inner == Uint::ZERO
    }

    /// Compute `self^2`.
    pub fn square(&self) -> Self {
        Self::from_inner(self.modulus.mul(&self.inner, &self.inner), self.modulus)
    }

    /// Compute `self^exp` with a fixed sequence of squarings and multiplications
    /// for every exponent of the same width.
    pub fn pow(&self, exp: &Uint<LIMBS>) -> Self {
        if let Modulus::Montgomery(params) = self.modulus {
            let power = DynResidue::from_montgomery(self.inner, *params).pow(exp);
            return Self::from_inner(*power.as_montgomery(), self.modulus);
        }

        let mut acc = self.modulus.one();
        for i in (0..Uint::<LIMBS>::BITS).rev() {
            acc = acc.square();
            let product = acc * *self;
            let choice = Choice::from(exp.bit(i));
            acc.inner = Uint::conditional_select(&acc.inner, &product.inner, choice);
        }

        acc
    }

    /// Multiplicative inverse by the extended Euclidean algorithm. Variable time.
    ///
    /// Fails with [`Error::NotInvertible`] when `gcd(self, m) != 1`.
    pub fn inverse(&self) -> Result<Self> {
        let (mut r0, mut r1) = (*self.modulus.value(), self.retrieve());
        let (mut t0, mut t1) = (self.modulus.zero(), self.modulus.one());

        while let Some(divisor) = Option::<NonZero<Uint<LIMBS>>>::from(NonZero::new(r1)) {
            let (q, r) = r0.div_rem(&divisor);
            let t2 = t0 - self.modulus.element(&q) * t1;
            (r0, r1) = (r1, r);
            (t0, t1) = (t1, t2);
        }

        if r0 == Uint::ONE {
            Ok(t0)
        } else {
            Err(Error::NotInvertible)
        }
    }

    /// Compute `self / rhs`, failing when `rhs` is not invertible.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self> {
        rhs.inverse().map(|inv| *self * inv)
    }
}

impl<const LIMBS: usize> PartialEq for ModularInteger<'_, LIMBS> {
    fn eq(&self, other: &Self) -> bool {
        self.modulus == other.modulus && self.inner == other.inner
    }
}

impl<const LIMBS: usize> Eq for ModularInteger<'_, LIMBS> {}

impl<'m, const LIMBS: usize> Add for ModularInteger<'m, LIMBS> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        debug_assert_eq!(self.modulus, rhs.modulus);
        let inner = self.inner.add_mod(&rhs.inner, self.modulus.value());
        Self::from_inner(inner, self.modulus)
    }
}

impl<'m, const LIMBS: usize> Sub for ModularInteger<'m, LIMBS> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        debug_assert_eq!(self.modulus, rhs.modulus);
        let inner = self.inner.sub_mod(&rhs.inner, self.modulus.value());
        Self::from_inner(inner, self.modulus)
    }
}

impl<'m, const LIMBS: usize> Mul for ModularInteger<'m, LIMBS> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        debug_assert_eq!(self.modulus, rhs.modulus);
        Self::from_inner(self.modulus.mul(&self.inner, &rhs.inner), self.modulus)
    }
}

impl<'m, const LIMBS: usize> Neg for ModularInteger<'m, LIMBS> {
    type Output = Self;

    fn neg(self) -> Self {
        let inner = self.inner.neg_mod(self.modulus.value());
        Self::from_inner(inner, self.modulus)
    }
}

#[cfg(test)]
mod tests {
    use super::{BarrettParams, Modulus};
    use crate::Error;
    use bigint::{U256, U64, Uint};
    use proptest::prelude::*;

    const BLS12_381_R: &str = "73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001";

    fn u64_mod(m: u64) -> Modulus<{ U64::LIMBS }> {
        Modulus::new(&U64::from_u64(m)).unwrap()
    }

    #[test]
    fn strategy_follows_parity() {
        assert!(matches!(u64_mod(101), Modulus::Montgomery(_)));
        assert!(matches!(u64_mod(100), Modulus::Barrett(_)));
        assert_eq!(Modulus::new(&U64::ZERO), Err(Error::InvalidModulus));
        assert_eq!(Modulus::new(&U64::ONE), Err(Error::InvalidModulus));
        assert_eq!(Modulus::new(&U64::MAX.wrapping_sub(&U64::ONE)), Err(Error::InvalidModulus));
    }

    #[test]
    fn montgomery_round_trip() {
        let modulus = Modulus::new(&U256::from_be_hex(BLS12_381_R)).unwrap();
        let x = U256::from_u64(0xdead_beef);
        assert_eq!(modulus.element(&x).retrieve(), x);
        assert_eq!(modulus.one().retrieve(), U256::ONE);
        assert_ne!(*modulus.one().inner(), U256::ONE);
    }

    #[test]
    fn inverse_of_five() {
        let modulus = Modulus::new(&U256::from_be_hex(BLS12_381_R)).unwrap();
        let five = modulus.element(&U256::from_u64(5));
        let inv = five.inverse().unwrap();
        assert_eq!(five * inv, modulus.one());
        assert_eq!(
            inv.retrieve(),
            U256::from_be_hex("458e97984c2b4b2b51ef819e6c2de803323e959b66656a65cccccccc33333334")
        );
    }

    #[test]
    fn non_units_are_rejected() {
        let modulus = u64_mod(100);
        assert_eq!(modulus.element(&U64::from_u64(10)).inverse(), Err(Error::NotInvertible));
        assert_eq!(modulus.zero().inverse(), Err(Error::NotInvertible));
        let seven = modulus.element(&U64::from_u64(7));
        assert_eq!((seven * seven.inverse().unwrap()).retrieve(), U64::ONE);
        assert_eq!(modulus.one().checked_div(&modulus.zero()), Err(Error::NotInvertible));
    }

    #[test]
    fn pow_matches_repeated_multiplication() {
        for m in [1_000_003u64, 1 << 40] {
            let modulus = u64_mod(m);
            let base = modulus.element(&U64::from_u64(12345));
            let mut expected = modulus.one();
            for _ in 0..37 {
                expected = expected * base;
            }
            assert_eq!(base.pow(&U64::from_u64(37)), expected);
        }
    }

    #[test]
    fn barrett_rejects_full_width_modulus() {
        assert!(BarrettParams::new(&U256::MAX.wrapping_sub(&U256::ONE)).is_none());
        assert!(BarrettParams::new(&U256::ONE).is_none());
        assert!(BarrettParams::new(&U256::ONE.shl_vartime(254)).is_some());
    }

    #[test]
    fn barrett_reduces_across_limb_boundaries() {
        // 2^192 + 2, so the shifts in `reduce_wide` straddle limb boundaries.
        let m = U256::ONE.shl_vartime(192).wrapping_add(&U256::from_u64(2));
        let params = BarrettParams::new(&m).unwrap();
        let a = m.wrapping_sub(&U256::ONE);
        let (lo, hi) = a.mul_wide(&a);
        assert_eq!(params.mul(&a, &a), Uint::const_rem_wide((lo, hi), &m).0);
        assert_eq!(params.mul(&a, &a), U256::ONE);
    }

    proptest! {
        #[test]
        fn matches_u128_arithmetic(m in 2u64..(1 << 62), a in any::<u64>(), b in any::<u64>()) {
            let modulus = u64_mod(m);
            let (x, y) = (modulus.element(&U64::from_u64(a)), modulus.element(&U64::from_u64(b)));
            let (a, b, m) = (u128::from(a % m), u128::from(b % m), u128::from(m));

            prop_assert_eq!(x.retrieve(), U64::from_u64(a as u64));
            prop_assert_eq!((x + y).retrieve(), U64::from_u64(((a + b) % m) as u64));
            prop_assert_eq!((x - y).retrieve(), U64::from_u64(((a + m - b) % m) as u64));
            prop_assert_eq!((x * y).retrieve(), U64::from_u64((a * b % m) as u64));
            prop_assert_eq!((-x).retrieve(), U64::from_u64(((m - a) % m) as u64));
        }

        #[test]
        fn division_inverts_multiplication(m in 3u64..(1 << 62), a in any::<u64>(), b in any::<u64>()) {
            let modulus = u64_mod(m);
            let (x, y) = (modulus.element(&U64::from_u64(a)), modulus.element(&U64::from_u64(b)));
            if let Ok(q) = (x * y).checked_div(&y) {
                prop_assert_eq!(q, x);
            }
        }

        #[test]
        fn barrett_matches_wide_remainder(
            m in any::<[u64; 4]>(),
            a in any::<[u64; 4]>(),
            b in any::<[u64; 4]>(),
        ) {
            // Even and below 2^255.
            let m = U256::from_words(m).shr_vartime(2).shl_vartime(1);
            prop_assume!(m.bits_vartime() >= 2);

            let modulus = Modulus::new(&m).unwrap();
            prop_assert!(matches!(modulus, Modulus::Barrett(_)));

            let (a, b) = (U256::from_words(a), U256::from_words(b));
            let (x, y) = (modulus.element(&a), modulus.element(&b));
            let (a, b) = (a.const_rem(&m).0, b.const_rem(&m).0);

            prop_assert_eq!(x.retrieve(), a);
            prop_assert_eq!((x * y).retrieve(), Uint::const_rem_wide(a.mul_wide(&b), &m).0);
            prop_assert_eq!(x.square().retrieve(), Uint::const_rem_wide(a.mul_wide(&a), &m).0);
            prop_assert_eq!((x + y).retrieve(), a.add_mod(&b, &m));
            prop_assert_eq!((x - y).retrieve(), a.sub_mod(&b, &m));
        }
    }
}
