//! Prime field elements stored in Montgomery form.

mod sqrt;

use crate::{
    Error, Result,
    modular::{ModularInteger, Modulus},
};
use bigint::{
    Limb, Uint, Word,
    modular::{
        constant_mod::{Residue, ResidueParams},
        runtime_mod::DynResidueParams,
    },
};
use core::{
    cmp::Ordering,
    fmt::{self, Debug},
    iter::{Product, Sum},
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};
use ff::PrimeField;
use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, ConstantTimeLess, CtOption};

/// Compile-time description of a prime field.
///
/// The Montgomery constants come from the [`ResidueParams`] supertrait. Usually
/// implemented with the [`field_params!`][crate::field_params] macro.
pub trait FieldParams<const LIMBS: usize>: ResidueParams<LIMBS> {
    /// Big-endian hexadecimal modulus, zero-padded to `LIMBS` words.
    const MODULUS_HEX: &'static str;

    /// Length of the byte encoding of an element.
    const BYTES: usize;

    /// Generator of the multiplicative group, used for the `ff` root of unity constants.
    const MULTIPLICATIVE_GENERATOR: u64;

    /// Byte representation of an element.
    type Repr: AsRef<[u8]> + AsMut<[u8]> + Copy + Debug + Default + Eq + Send + Sync + 'static;
}

/// Big-endian encoding of a prime field element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FieldBytes<const N: usize>(pub [u8; N]);

impl<const N: usize> Default for FieldBytes<N> {
    fn default() -> Self {
        Self([0; N])
    }
}

impl<const N: usize> AsRef<[u8]> for FieldBytes<N> {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl<const N: usize> AsMut<[u8]> for FieldBytes<N> {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.0
    }
}

impl<const N: usize> From<[u8; N]> for FieldBytes<N> {
    fn from(bytes: [u8; N]) -> Self {
        Self(bytes)
    }
}

impl<const N: usize> From<FieldBytes<N>> for [u8; N] {
    fn from(bytes: FieldBytes<N>) -> Self {
        bytes.0
    }
}

/// Element of the prime field described by `P`.
///
/// Wraps a `crypto-bigint` [`Residue`], which keeps the value reduced and in
/// Montgomery form.
pub struct Fp<P: FieldParams<LIMBS>, const LIMBS: usize>(Residue<P, LIMBS>);

impl<P: FieldParams<LIMBS>, const LIMBS: usize> Fp<P, LIMBS> {
    /// Zero element.
    pub const ZERO: Self = Self(Residue::ZERO);

    /// Multiplicative identity.
    pub const ONE: Self = Self(Residue::ONE);

    /// `T` such that `p - 1 = 2^S * T` with `T` odd.
    const T: Uint<LIMBS> = {
        let p_minus_one = P::MODULUS.wrapping_sub(&Uint::ONE);
        p_minus_one.shr_vartime(p_minus_one.trailing_zeros_vartime())
    };

    /// The modulus as an integer.
    pub const fn modulus() -> &'static Uint<LIMBS> {
        &Self::MODULUS_UINT
    }

    const MODULUS_UINT: Uint<LIMBS> = P::MODULUS;

    /// Parse a big-endian hex string.
    ///
    /// # Panics
    ///
    /// If the string is malformed or the value is not below the modulus.
    pub const fn from_hex(hex: &str) -> Self {
        let uint = Uint::from_be_hex(hex);
        assert!(
            uint.cmp_vartime(&P::MODULUS).is_lt(),
            "hex encoded field element overflows modulus"
        );
        Self::from_uint_unchecked(&uint)
    }

    /// Convert a `u64`, reducing it if the modulus is small.
    pub const fn from_u64(w: u64) -> Self {
        Self::from_uint_unchecked(&Uint::from_u64(w))
    }

    /// Convert a canonical integer, returning `None` if it is not below the modulus.
    pub fn from_uint(uint: &Uint<LIMBS>) -> CtOption<Self> {
        CtOption::new(Self::from_uint_unchecked(uint), uint.ct_lt(&P::MODULUS))
    }

    /// Convert an integer without a range check; values at or above the modulus are
    /// reduced.
    pub(crate) const fn from_uint_unchecked(uint: &Uint<LIMBS>) -> Self {
        Self(Residue::new(uint))
    }

    /// Canonical integer representative in `[0, p)`.
    pub const fn to_canonical(&self) -> Uint<LIMBS> {
        Residue::retrieve(&self.0)
    }

    /// Big-endian encoding.
    pub fn to_bytes(&self) -> P::Repr {
        let mut repr = P::Repr::default();
        write_be_bytes(&self.to_canonical(), repr.as_mut());
        repr
    }

    /// Decode a big-endian encoding, rejecting values not below the modulus.
    pub fn from_bytes(bytes: &P::Repr) -> CtOption<Self> {
        match uint_from_be_bytes(bytes.as_ref()) {
            Some(uint) => Self::from_uint(&uint),
            None => CtOption::new(Self::ZERO, Choice::from(0)),
        }
    }

    /// Decode a big-endian byte string of exactly [`FieldParams::BYTES`] bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != P::BYTES {
            return Err(Error::InvalidEncoding);
        }

        let mut repr = P::Repr::default();
        repr.as_mut().copy_from_slice(bytes);
        Option::from(Self::from_bytes(&repr)).ok_or(Error::InvalidEncoding)
    }

    /// Interpret an arbitrary-length big-endian byte string as an integer and reduce it.
    pub fn from_bytes_reduced(bytes: &[u8]) -> Self {
        let radix = Self::from_u64(256);
        bytes.iter().fold(Self::ZERO, |acc, &byte| {
            acc.multiply(&radix).add(&Self::from_u64(u64::from(byte)))
        })
    }

    /// Add elements.
    #[inline]
    pub const fn add(&self, rhs: &Self) -> Self {
        Self(Residue::add(&self.0, &rhs.0))
    }

    /// Double element.
    #[inline]
    #[must_use]
    pub const fn double(&self) -> Self {
        self.add(self)
    }

    /// Subtract elements.
    #[inline]
    pub const fn sub(&self, rhs: &Self) -> Self {
        Self(Residue::sub(&self.0, &rhs.0))
    }

    /// Negate element.
    #[inline]
    pub const fn neg(&self) -> Self {
        Self(Residue::neg(&self.0))
    }

    /// Multiply elements.
    #[inline]
    pub const fn multiply(&self, rhs: &Self) -> Self {
        Self(Residue::mul(&self.0, &rhs.0))
    }

    /// Square element.
    #[inline]
    #[must_use]
    pub const fn square(&self) -> Self {
        Self(Residue::square(&self.0))
    }

    /// Returns `self^(2^n)`.
    pub const fn sqn_vartime(&self, n: usize) -> Self {
        let mut x = *self;
        let mut i = 0;
        while i < n {
            x = x.square();
            i += 1;
        }
        x
    }

    /// Returns `self^exp`.
    ///
    /// **Variable time with respect to the bit length of `exp`.**
    pub const fn pow_uint_vartime(&self, exp: &Uint<LIMBS>) -> Self {
        Self(self.0.pow_bounded_exp(exp, exp.bits_vartime()))
    }

    /// Returns `self^exp` for a little-endian `u64` exponent.
    ///
    /// **Variable time with respect to `exp`.**
    pub fn pow_vartime<S: AsRef<[u64]>>(&self, exp: S) -> Self {
        <Self as crate::Field>::pow_vartime(self, exp.as_ref())
    }

    /// Is this element zero?
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Self::ZERO)
    }

    /// Is the canonical representative odd?
    pub fn is_odd(&self) -> Choice {
        self.to_canonical().bit(0).into()
    }

    /// Sign of the element as defined by RFC 9380: the parity of its canonical value.
    pub fn sgn0(&self) -> Choice {
        self.is_odd()
    }

    /// Multiplicative inverse by Fermat's little theorem, `None` for zero.
    pub fn invert(&self) -> CtOption<Self> {
        let inverse = self.pow_uint_vartime(&Self::P_MINUS_TWO);
        CtOption::new(inverse, !self.is_zero())
    }

    const P_MINUS_TWO: Uint<LIMBS> = P::MODULUS.wrapping_sub(&Uint::from_u64(2));

    /// Inverse usable in constant expressions.
    ///
    /// # Panics
    ///
    /// If `self` is zero.
    pub const fn const_invert(&self) -> Self {
        assert!(
            self.0.as_montgomery().bits_vartime() != 0,
            "input to invert should be non-zero"
        );
        self.pow_uint_vartime(&Self::P_MINUS_TWO)
    }

    /// Multiplicative inverse by the extended Euclidean algorithm.
    ///
    /// **Variable time.**
    pub fn invert_vartime(&self) -> Result<Self> {
        let modulus = Modulus::Montgomery(DynResidueParams::from_residue_params::<P>());
        let inverse = ModularInteger::from_inner(*self.0.as_montgomery(), &modulus).inverse()?;
        Ok(Self(Residue::from_montgomery(*inverse.inner())))
    }

    /// Uniformly random element by rejection sampling.
    pub fn random(mut rng: impl RngCore) -> Self {
        let excess = P::BYTES * 8 - P::MODULUS.bits_vartime();
        let mut bytes = P::Repr::default();

        loop {
            rng.fill_bytes(bytes.as_mut());
            bytes.as_mut()[0] &= 0xff >> excess;

            if let Some(fe) = Option::from(Self::from_bytes(&bytes)) {
                return fe;
            }
        }
    }

    /// Bit length of the modulus.
    pub const MODULUS_BITS: u32 = P::MODULUS.bits_vartime() as u32;
}

/// Decodes a big-endian byte string of at most `Uint::<LIMBS>::BYTES` bytes.
fn uint_from_be_bytes<const LIMBS: usize>(bytes: &[u8]) -> Option<Uint<LIMBS>> {
    if bytes.len() > Uint::<LIMBS>::BYTES {
        return None;
    }

    let mut words = [Word::default(); LIMBS];
    for (pos, byte) in bytes.iter().rev().enumerate() {
        words[pos / Limb::BYTES] |= Word::from(*byte) << (8 * (pos % Limb::BYTES));
    }

    Some(Uint::from_words(words))
}

/// Encodes `uint` big-endian into `out`, truncating to `out.len()` bytes.
fn write_be_bytes<const LIMBS: usize>(uint: &Uint<LIMBS>, out: &mut [u8]) {
    let words = uint.as_words();

    for (pos, byte) in out.iter_mut().rev().enumerate() {
        *byte = match words.get(pos / Limb::BYTES) {
            Some(word) => (word >> (8 * (pos % Limb::BYTES))) as u8,
            None => 0,
        };
    }
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> Clone for Fp<P, LIMBS> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> Copy for Fp<P, LIMBS> {}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> Default for Fp<P, LIMBS> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> ConditionallySelectable for Fp<P, LIMBS> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self(Residue::conditional_select(&a.0, &b.0, choice))
    }
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> ConstantTimeEq for Fp<P, LIMBS> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> PartialEq for Fp<P, LIMBS> {
    fn eq(&self, rhs: &Self) -> bool {
        self.ct_eq(rhs).into()
    }
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> Eq for Fp<P, LIMBS> {}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> PartialOrd for Fp<P, LIMBS> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Ordering of the canonical representatives. **Variable time.**
impl<P: FieldParams<LIMBS>, const LIMBS: usize> Ord for Fp<P, LIMBS> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_canonical().cmp(&other.to_canonical())
    }
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> From<u64> for Fp<P, LIMBS> {
    fn from(n: u64) -> Self {
        Self::from_u64(n)
    }
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> From<u32> for Fp<P, LIMBS> {
    fn from(n: u32) -> Self {
        Self::from_u64(n.into())
    }
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> zeroize::DefaultIsZeroes for Fp<P, LIMBS> {}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> Debug for Fp<P, LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fp(0x{self:X})")
    }
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> fmt::Display for Fp<P, LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{self:X}")
    }
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> fmt::LowerHex for Fp<P, LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.to_bytes().as_ref() {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> fmt::UpperHex for Fp<P, LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.to_bytes().as_ref() {
            write!(f, "{byte:02X}")?;
        }
        Ok(())
    }
}

/// Implements a binary operator for all combinations of owned and borrowed operands.
macro_rules! fp_op {
    ($op:ident, $op_fn:ident, $assign:ident, $assign_fn:ident, $inner:ident) => {
        impl<P: FieldParams<LIMBS>, const LIMBS: usize> $op for Fp<P, LIMBS> {
            type Output = Self;

            #[inline]
            fn $op_fn(self, rhs: Self) -> Self {
                Fp::$inner(&self, &rhs)
            }
        }

        impl<P: FieldParams<LIMBS>, const LIMBS: usize> $op<&Fp<P, LIMBS>> for Fp<P, LIMBS> {
            type Output = Self;

            #[inline]
            fn $op_fn(self, rhs: &Self) -> Self {
                Fp::$inner(&self, rhs)
            }
        }

        impl<P: FieldParams<LIMBS>, const LIMBS: usize> $op<&Fp<P, LIMBS>> for &Fp<P, LIMBS> {
            type Output = Fp<P, LIMBS>;

            #[inline]
            fn $op_fn(self, rhs: &Fp<P, LIMBS>) -> Fp<P, LIMBS> {
                Fp::$inner(self, rhs)
            }
        }

        impl<P: FieldParams<LIMBS>, const LIMBS: usize> $assign for Fp<P, LIMBS> {
            #[inline]
            fn $assign_fn(&mut self, rhs: Self) {
                *self = Fp::$inner(self, &rhs);
            }
        }

        impl<P: FieldParams<LIMBS>, const LIMBS: usize> $assign<&Fp<P, LIMBS>> for Fp<P, LIMBS> {
            #[inline]
            fn $assign_fn(&mut self, rhs: &Self) {
                *self = Fp::$inner(self, rhs);
            }
        }
    };
}

fp_op!(Add, add, AddAssign, add_assign, add);
fp_op!(Sub, sub, SubAssign, sub_assign, sub);
fp_op!(Mul, mul, MulAssign, mul_assign, multiply);

impl<P: FieldParams<LIMBS>, const LIMBS: usize> Neg for Fp<P, LIMBS> {
    type Output = Self;

    fn neg(self) -> Self {
        Fp::neg(&self)
    }
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> Neg for &Fp<P, LIMBS> {
    type Output = Fp<P, LIMBS>;

    fn neg(self) -> Fp<P, LIMBS> {
        Fp::neg(self)
    }
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> Sum for Fp<P, LIMBS> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.reduce(|a, b| a + b).unwrap_or(Self::ZERO)
    }
}

impl<'a, P: FieldParams<LIMBS>, const LIMBS: usize> Sum<&'a Fp<P, LIMBS>> for Fp<P, LIMBS> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> Product for Fp<P, LIMBS> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.reduce(|a, b| a * b).unwrap_or(Self::ONE)
    }
}

impl<'a, P: FieldParams<LIMBS>, const LIMBS: usize> Product<&'a Fp<P, LIMBS>> for Fp<P, LIMBS> {
    fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().product()
    }
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> crate::Field for Fp<P, LIMBS> {
    const ZERO: Self = Self::ZERO;
    const ONE: Self = Self::ONE;
    const DEGREE: usize = 1;
    const ENCODED_LEN: usize = P::BYTES;

    fn random(rng: impl RngCore) -> Self {
        Fp::random(rng)
    }

    fn is_zero(&self) -> Choice {
        Fp::is_zero(self)
    }

    fn square(&self) -> Self {
        Fp::square(self)
    }

    fn double(&self) -> Self {
        Fp::double(self)
    }

    fn invert(&self) -> CtOption<Self> {
        Fp::invert(self)
    }

    fn frobenius_map(&self, _power: usize) -> Self {
        *self
    }

    fn sgn0(&self) -> Choice {
        Fp::sgn0(self)
    }

    fn write_bytes(&self, out: &mut [u8]) {
        write_be_bytes(&self.to_canonical(), out);
    }

    fn read_bytes(bytes: &[u8]) -> CtOption<Self> {
        match Self::from_slice(bytes) {
            Ok(fe) => CtOption::new(fe, Choice::from(1)),
            Err(_) => CtOption::new(Self::ZERO, Choice::from(0)),
        }
    }
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> crate::SqrtField for Fp<P, LIMBS> {
    fn sqrt(&self) -> CtOption<Self> {
        Fp::sqrt(self)
    }
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> ff::Field for Fp<P, LIMBS> {
    const ZERO: Self = Self::ZERO;
    const ONE: Self = Self::ONE;

    fn random(rng: impl RngCore) -> Self {
        Fp::random(rng)
    }

    fn is_zero(&self) -> Choice {
        Fp::is_zero(self)
    }

    fn square(&self) -> Self {
        Fp::square(self)
    }

    fn double(&self) -> Self {
        Fp::double(self)
    }

    fn invert(&self) -> CtOption<Self> {
        Fp::invert(self)
    }

    fn sqrt(&self) -> CtOption<Self> {
        Fp::sqrt(self)
    }

    fn sqrt_ratio(num: &Self, div: &Self) -> (Choice, Self) {
        ff::helpers::sqrt_ratio_generic(num, div)
    }
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> PrimeField for Fp<P, LIMBS> {
    type Repr = P::Repr;

    const MODULUS: &'static str = P::MODULUS_HEX;
    const NUM_BITS: u32 = Self::MODULUS_BITS;
    const CAPACITY: u32 = Self::MODULUS_BITS - 1;
    const TWO_INV: Self =
        Self::from_uint_unchecked(&P::MODULUS.shr_vartime(1).wrapping_add(&Uint::ONE));
    const MULTIPLICATIVE_GENERATOR: Self = Self::from_u64(P::MULTIPLICATIVE_GENERATOR);
    const S: u32 = P::MODULUS.wrapping_sub(&Uint::ONE).trailing_zeros_vartime() as u32;
    const ROOT_OF_UNITY: Self = Self::from_u64(P::MULTIPLICATIVE_GENERATOR).pow_uint_vartime(&Self::T);
    const ROOT_OF_UNITY_INV: Self = Self::ROOT_OF_UNITY.const_invert();
    const DELTA: Self = Self::from_u64(P::MULTIPLICATIVE_GENERATOR).sqn_vartime(Self::S as usize);

    fn from_repr(bytes: P::Repr) -> CtOption<Self> {
        Self::from_bytes(&bytes)
    }

    fn to_repr(&self) -> P::Repr {
        self.to_bytes()
    }

    fn is_odd(&self) -> Choice {
        Fp::is_odd(self)
    }
}
