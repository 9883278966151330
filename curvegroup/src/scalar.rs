//! Bit access to scalars through their canonical big-endian encoding.
//!
//! Scalar fields used with this crate must encode `PrimeField::Repr` big-endian, as
//! `towerfield::Fp` does.

use alloc::vec::Vec;
use ff::PrimeField;

/// The canonical value of a scalar as a big-endian byte string.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ScalarBits<R> {
    repr: R,
}

impl<R: AsRef<[u8]>> ScalarBits<R> {
    /// Bits of `scalar`.
    pub(crate) fn new<S: PrimeField<Repr = R>>(scalar: &S) -> Self {
        Self {
            repr: scalar.to_repr(),
        }
    }

    fn bytes(&self) -> &[u8] {
        self.repr.as_ref()
    }

    /// Total number of bits in the encoding, including leading zeros.
    pub(crate) fn capacity(&self) -> usize {
        self.bytes().len() * 8
    }

    /// Bit `index`, counted from the least significant bit.
    pub(crate) fn bit(&self, index: usize) -> bool {
        let bytes = self.bytes();
        if index >= bytes.len() * 8 {
            return false;
        }
        (bytes[bytes.len() - 1 - index / 8] >> (index % 8)) & 1 == 1
    }

    /// `width` bits starting at bit `start`, as an integer. `width` is at most 32.
    pub(crate) fn window(&self, start: usize, width: usize) -> usize {
        (0..width).fold(0, |acc, i| acc | (usize::from(self.bit(start + i)) << i))
    }

    /// Number of significant bits. **Variable time.**
    pub(crate) fn bit_len(&self) -> usize {
        self.bytes()
            .iter()
            .position(|&byte| byte != 0)
            .map_or(0, |pos| {
                let remaining = self.bytes().len() - pos;
                remaining * 8 - self.bytes()[pos].leading_zeros() as usize
            })
    }

    /// 4-bit windows from most to least significant, for fixed-window multiplication.
    pub(crate) fn nibbles(&self) -> impl Iterator<Item = u8> + '_ {
        self.bytes().iter().flat_map(|&byte| [byte >> 4, byte & 0xf])
    }

    /// Width-`w` non-adjacent form, least significant digit first. **Variable time.**
    ///
    /// Every non-zero digit is odd and lies in `(-2^(w-1), 2^(w-1))`.
    pub(crate) fn wnaf(&self, w: usize) -> Vec<i64> {
        debug_assert!((2..=16).contains(&w));

        let width = 1i64 << w;
        let half = width >> 1;
        let mut digits = Vec::with_capacity(self.capacity() + 1);
        let mut carry = 0i64;
        let mut pos = 0;

        while pos < self.capacity() + 1 {
            let bit = i64::from(self.bit(pos)) + carry;
            if bit & 1 == 0 {
                carry = bit >> 1;
                digits.push(0);
                pos += 1;
                continue;
            }

            let mut window = carry + self.window(pos, w) as i64;
            carry = 0;
            if window >= half {
                window -= width;
                carry = 1;
            }

            digits.push(window);
            digits.extend(core::iter::repeat_n(0, w - 1));
            pos += w;
        }

        while digits.last() == Some(&0) {
            digits.pop();
        }

        digits
    }
}

/// Compares two scalars as integers. **Variable time.**
pub(crate) fn cmp_vartime<S: PrimeField>(a: &S, b: &S) -> core::cmp::Ordering {
    a.to_repr().as_ref().cmp(b.to_repr().as_ref())
}
