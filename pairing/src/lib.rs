#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

extern crate alloc;

pub mod bls12;
pub mod bn;
pub mod edwards;
pub mod mnt;
pub mod sextic;

mod dev;
mod loop_count;

pub use crate::{
    bls12::{Bls12, Bls12Params},
    bn::{Bn, BnParams},
    edwards::{EdwardsPairing, EdwardsPairingParams},
    mnt::{Mnt, MntParams},
    sextic::{SexticTwistParams, TwistType},
};
pub use curvegroup;
pub use ff;
pub use towerfield;

use alloc::vec::Vec;
use core::{fmt::Debug, ops::Neg};
use ff::PrimeField;
use group::Curve;
use subtle::{Choice, ConstantTimeEq, CtOption};
use towerfield::Field;

/// A pairing `e: G1 × G2 → GT` together with its precomputation stages.
///
/// `G1` and `G2` are prime-order subgroups of order `r`; `GT` is the subgroup of
/// `r`-th roots of unity in [`Engine::Gt`]. The source groups may live on Weierstrass
/// or twisted Edwards curves. Callers are expected to pass validated points, e.g.
/// decoded with `AffinePoint::from_bytes`.
pub trait Engine: Sized + Send + Sync + 'static {
    /// Scalar field of order `r` shared by both source groups.
    type Scalar: PrimeField;

    /// First source group.
    type G1: Curve<Scalar = Self::Scalar, AffineRepr = Self::G1Affine> + From<Self::G1Affine>;

    /// Affine representation of [`Self::G1`].
    type G1Affine: Copy + Debug + Eq + Neg<Output = Self::G1Affine> + Send + Sync;

    /// Second source group, usually on a twist.
    type G2: Curve<Scalar = Self::Scalar, AffineRepr = Self::G2Affine> + From<Self::G2Affine>;

    /// Affine representation of [`Self::G2`].
    type G2Affine: Copy + Debug + Eq + Neg<Output = Self::G2Affine> + Send + Sync;

    /// Target field; pairing values live in its order-`r` subgroup.
    type Gt: Field;

    /// A G1 point prepared for the Miller loop.
    type G1Prepared: Clone + Debug + Send + Sync;

    /// Line coefficients of a G2 point, reusable across G1 points.
    type G2Prepared: Clone + Debug + Send + Sync;

    /// Prepares a G1 point.
    fn prepare_g1(p: &Self::G1Affine) -> Self::G1Prepared;

    /// Precomputes the doubling and addition line coefficients of a G2 point.
    fn prepare_g2(q: &Self::G2Affine) -> Self::G2Prepared;

    /// Evaluates the product of the Miller loops of every pair, sharing the squarings.
    ///
    /// Pairs with an identity point contribute one.
    fn multi_miller_loop(terms: &[(&Self::G1Prepared, &Self::G2Prepared)]) -> Self::Gt;

    /// Raises a Miller loop output to `(p^k - 1) / r`.
    ///
    /// Returns `None` for zero, which no Miller loop over valid points produces.
    fn final_exponentiation(f: &Self::Gt) -> CtOption<Self::Gt>;

    /// Miller loop of a single pair.
    fn miller_loop(p: &Self::G1Prepared, q: &Self::G2Prepared) -> Self::Gt {
        Self::multi_miller_loop(&[(p, q)])
    }

    /// Miller loop of two pairs sharing the squarings.
    fn double_miller_loop(
        p1: &Self::G1Prepared,
        q1: &Self::G2Prepared,
        p2: &Self::G1Prepared,
        q2: &Self::G2Prepared,
    ) -> Self::Gt {
        Self::multi_miller_loop(&[(p1, q1), (p2, q2)])
    }

    /// Computes `e(p, q)`. Either point being the identity gives one.
    fn pairing(p: &Self::G1Affine, q: &Self::G2Affine) -> Self::Gt {
        let f = Self::miller_loop(&Self::prepare_g1(p), &Self::prepare_g2(q));
        Self::final_exponentiation(&f).unwrap_or(Self::Gt::ZERO)
    }

    /// Checks `∏ e(p_i, q_i) == 1` with a single final exponentiation.
    fn pairing_product_is_one(terms: &[(Self::G1Affine, Self::G2Affine)]) -> bool {
        let prepared: Vec<_> = terms
            .iter()
            .map(|(p, q)| (Self::prepare_g1(p), Self::prepare_g2(q)))
            .collect();
        let refs: Vec<_> = prepared.iter().map(|(p, q)| (p, q)).collect();

        Self::final_exponentiation(&Self::multi_miller_loop(&refs))
            .map(|gt| gt.ct_eq(&Self::Gt::ONE))
            .unwrap_or(Choice::from(0))
            .into()
    }
}
