//! Constant-time fixed-window scalar multiplication.

use crate::scalar::ScalarBits;
use ff::PrimeField;
use group::Group;
use subtle::{ConditionallySelectable, ConstantTimeEq};

/// Internal constant for the number of entries in a [`LookupTable`].
const LUT_SIZE: usize = 16;

/// Lookup table containing precomputed values `[0, p, 2p, ..., 15p]`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct LookupTable<Point> {
    points: [Point; LUT_SIZE],
}

impl<Point> LookupTable<Point>
where
    Point: ConditionallySelectable + Group,
{
    /// Compute a new lookup table from the given point.
    pub(crate) fn new(p: Point) -> Self {
        let mut points = [Point::identity(); LUT_SIZE];
        points[1] = p;

        for i in 2..LUT_SIZE {
            points[i] = if i % 2 == 0 {
                points[i / 2].double()
            } else {
                points[i - 1] + p
            };
        }

        Self { points }
    }

    /// Given `0 <= x < 16`, returns `x * p` in constant time.
    pub(crate) fn select(&self, x: u8) -> Point {
        debug_assert!(usize::from(x) < LUT_SIZE);

        let mut t = Point::identity();
        for (j, point) in self.points.iter().enumerate().skip(1) {
            t.conditional_assign(point, x.ct_eq(&(j as u8)));
        }
        t
    }
}

/// Computes `[k] p` with a 4-bit fixed window: four doublings and one table addition per
/// nibble of the scalar encoding, independent of the scalar value.
pub(crate) fn mul_fixed_window<Point>(p: &Point, k: &Point::Scalar) -> Point
where
    Point: ConditionallySelectable + Group,
    Point::Scalar: PrimeField,
{
    let table = LookupTable::new(*p);
    let bits = ScalarBits::new(k);

    bits.nibbles().fold(Point::identity(), |acc, nibble| {
        acc.double().double().double().double() + table.select(nibble)
    })
}

/// Computes `[k] p` for a little-endian word exponent by double-and-add. **Variable time.**
pub(crate) fn mul_words_vartime<Point: Group>(p: &Point, k: &[u64]) -> Point {
    let mut acc = Point::identity();
    for word in k.iter().rev() {
        for i in (0..64).rev() {
            acc = acc.double();
            if (word >> i) & 1 == 1 {
                acc += p;
            }
        }
    }
    acc
}

/// Computes `[k] p` using width-4 NAF. **Variable time.**
pub(crate) fn mul_wnaf_vartime<Point>(p: &Point, k: &Point::Scalar) -> Point
where
    Point: Group,
    Point::Scalar: PrimeField,
{
    const WINDOW: usize = 4;

    // Odd multiples p, 3p, 5p, 7p.
    let double = p.double();
    let mut odd = [*p; 1 << (WINDOW - 2)];
    for i in 1..odd.len() {
        odd[i] = odd[i - 1] + double;
    }

    let digits = ScalarBits::new(k).wnaf(WINDOW);
    digits.iter().rev().fold(Point::identity(), |acc, &digit| {
        let acc = acc.double();
        let index = (digit.unsigned_abs() / 2) as usize;
        match digit {
            0 => acc,
            d if d > 0 => acc + odd[index],
            _ => acc - odd[index],
        }
    })
}
