//! Multi-scalar multiplication `Σ [k_i] P_i`.
//!
//! Every method is generic over [`Group`] and runs in variable time: inputs are public
//! (e.g. proof verification), never secret scalars.

use crate::{
    Error, Result,
    lookup_table::mul_wnaf_vartime,
    scalar::{ScalarBits, cmp_vartime},
};
use alloc::{collections::BinaryHeap, vec, vec::Vec};
use core::cmp::Ordering;
use ff::{Field as _, PrimeField};
use group::Group;
use tracing::{instrument, trace};

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Algorithm used by [`multiexp`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum MultiexpMethod {
    /// One scalar multiplication per term.
    Naive,

    /// Bos-Coster: repeatedly rewrite `a A + b B` as `(a - b) A + b (A + B)`.
    BosCoster,

    /// Pippenger's bucket method (Bernstein-Doumen-Lange-Oosterwijk 2012 variant).
    #[default]
    Pippenger,
}

/// Computes `Σ [scalars_i] points_i` with the given method.
///
/// Returns [`Error::LengthMismatch`] if the slices differ in length; empty input yields
/// the identity.
pub fn multiexp<G: Group>(
    method: MultiexpMethod,
    points: &[G],
    scalars: &[G::Scalar],
) -> Result<G> {
    match method {
        MultiexpMethod::Naive => multiexp_naive(points, scalars),
        MultiexpMethod::BosCoster => multiexp_bos_coster(points, scalars),
        MultiexpMethod::Pippenger => multiexp_pippenger(points, scalars),
    }
}

fn check_lengths<G: Group>(points: &[G], scalars: &[G::Scalar]) -> Result<()> {
    if points.len() == scalars.len() {
        Ok(())
    } else {
        Err(Error::LengthMismatch)
    }
}

/// Sum of independent scalar multiplications.
#[instrument(level = "debug", skip_all, fields(n = points.len()))]
pub fn multiexp_naive<G: Group>(points: &[G], scalars: &[G::Scalar]) -> Result<G> {
    check_lengths(points, scalars)?;

    Ok(points
        .iter()
        .zip(scalars)
        .map(|(point, scalar)| mul_wnaf_vartime(point, scalar))
        .sum())
}

/// A scalar in the Bos-Coster max-heap, ordered by integer value.
struct HeapEntry<S> {
    scalar: S,
    index: usize,
}

impl<S: PrimeField> PartialEq for HeapEntry<S> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<S: PrimeField> Eq for HeapEntry<S> {}

impl<S: PrimeField> PartialOrd for HeapEntry<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S: PrimeField> Ord for HeapEntry<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_vartime(&self.scalar, &other.scalar).then(self.index.cmp(&other.index))
    }
}

/// Bos-Coster multi-exponentiation, with the cut-off heuristic of Bernstein, Duif,
/// Lange, Schwabe and Yang (CHES 2011).
///
/// While the two largest scalars `a >= b` are close in size, the term `a A + b B` is
/// rewritten as `(a - b) A + b (A + B)`; once `a` is much longer than `b` it is cheaper
/// to multiply `A` by `a` directly.
#[instrument(level = "debug", skip_all, fields(n = points.len()))]
pub fn multiexp_bos_coster<G: Group>(points: &[G], scalars: &[G::Scalar]) -> Result<G> {
    check_lengths(points, scalars)?;

    let mut bases = points.to_vec();
    let mut heap: BinaryHeap<_> = scalars
        .iter()
        .enumerate()
        .map(|(index, &scalar)| HeapEntry { scalar, index })
        .collect();

    let mut result = G::identity();
    let mut steps = 0usize;

    while let Some(mut a) = heap.pop() {
        let (b_scalar, b_index) = match heap.peek() {
            Some(b) if !bool::from(b.scalar.is_zero()) => (b.scalar, b.index),
            _ => {
                result += mul_wnaf_vartime(&bases[a.index], &a.scalar);
                break;
            }
        };

        let abits = ScalarBits::new(&a.scalar).bit_len();
        let bbits = ScalarBits::new(&b_scalar).bit_len();
        let limit = (abits - bbits).min(20);

        if bbits < 1 << limit {
            result += mul_wnaf_vartime(&bases[a.index], &a.scalar);
            a.scalar = G::Scalar::ZERO;
        } else {
            // a >= b as integers, so the field difference is the integer difference.
            a.scalar -= b_scalar;
            let sum = bases[b_index] + bases[a.index];
            bases[b_index] = sum;
        }

        heap.push(a);
        steps += 1;
    }

    trace!(steps, "bos-coster finished");
    Ok(result)
}

/// Window width `c = log2(n) - log2(n)/3 + 2` for `n` terms.
fn pippenger_window(n: usize) -> usize {
    let log2 = n.max(1).ilog2() as usize;
    log2 - log2 / 3 + 2
}

/// Pippenger's bucket method.
///
/// Scalars are cut into `c`-bit windows. Within a window every point is added to the
/// bucket named by its digit, and the buckets are combined with a running sum so that
/// bucket `j` is counted `j` times. Windows are then joined by `c` doublings each.
/// With the `rayon` feature windows are processed in parallel.
#[instrument(level = "debug", skip_all, fields(n = points.len()))]
pub fn multiexp_pippenger<G: Group>(points: &[G], scalars: &[G::Scalar]) -> Result<G> {
    check_lengths(points, scalars)?;

    if points.is_empty() {
        return Ok(G::identity());
    }

    let bits: Vec<_> = scalars.iter().map(ScalarBits::new).collect();
    let num_bits = bits.iter().map(ScalarBits::bit_len).max().unwrap_or(0).max(1);
    let c = pippenger_window(points.len());
    let num_windows = num_bits.div_ceil(c);
    trace!(c, num_bits, num_windows, "pippenger parameters");

    #[cfg(feature = "rayon")]
    let window_sums: Vec<G> = (0..num_windows)
        .into_par_iter()
        .map(|k| window_sum(points, &bits, k * c, c))
        .collect();

    #[cfg(not(feature = "rayon"))]
    let window_sums: Vec<G> = (0..num_windows)
        .map(|k| window_sum(points, &bits, k * c, c))
        .collect();

    Ok(window_sums.iter().rev().fold(G::identity(), |acc, sum| {
        let mut acc = acc;
        for _ in 0..c {
            acc = acc.double();
        }
        acc + sum
    }))
}

/// `Σ digit_i · P_i` for the `c`-bit digits starting at bit `start`.
fn window_sum<G: Group, R: AsRef<[u8]>>(
    points: &[G],
    bits: &[ScalarBits<R>],
    start: usize,
    c: usize,
) -> G {
    let mut buckets = vec![G::identity(); (1 << c) - 1];

    for (point, bits) in points.iter().zip(bits) {
        let digit = bits.window(start, c);
        if digit != 0 {
            buckets[digit - 1] += point;
        }
    }

    let mut running_sum = G::identity();
    let mut sum = G::identity();
    for bucket in buckets.iter().rev() {
        running_sum += bucket;
        sum += running_sum;
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::pippenger_window;

    #[test]
    fn window_grows_with_batch_size() {
        assert_eq!(pippenger_window(0), 2);
        assert_eq!(pippenger_window(1), 2);
        assert_eq!(pippenger_window(2), 3);
        assert_eq!(pippenger_window(1000), 8);
        assert_eq!(pippenger_window(1 << 16), 13);
    }
}
