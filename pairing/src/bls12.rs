//! Optimal ate pairing on BLS12 curves.
//!
//! The Miller loop runs over the curve parameter `x`; a negative `x` conjugates the
//! accumulator. The hard part of the final exponentiation uses the addition chain
//! of [Hayashida-Hayasaka-Teruya 2020] in terms of exponentiation by `x`.
//!
//! [Hayashida-Hayasaka-Teruya 2020]: https://eprint.iacr.org/2020/875

use crate::{
    Engine,
    sextic::{self, Fp12, G2Prepared, SexticTwistParams},
};
use alloc::vec::Vec;
use core::marker::PhantomData;
use curvegroup::weierstrass::{AffinePoint, ProjectivePoint, WeierstrassParams};
use subtle::CtOption;
use tracing::instrument;

/// Parameters of a BLS12 curve.
pub trait Bls12Params: SexticTwistParams {
    /// Absolute value of the curve parameter `x`.
    const X: u64;

    /// Is `x` negative?
    const X_IS_NEGATIVE: bool;
}

/// The BLS12 pairing engine for the curve described by `P`.
pub struct Bls12<P: Bls12Params>(PhantomData<P>);

/// Raises an element of the cyclotomic subgroup to the signed power `x`.
fn exp_by_x<P: Bls12Params>(f: &Fp12<P>) -> Fp12<P> {
    let res = f.cyclotomic_exp(&[P::X]);
    if P::X_IS_NEGATIVE {
        res.conjugate()
    } else {
        res
    }
}

/// Raises an element of the cyclotomic subgroup to `3 (p^4 - p^2 + 1) / r`.
fn hard_part<P: Bls12Params>(elt: &Fp12<P>) -> Fp12<P> {
    let t0 = elt.cyclotomic_square().conjugate();
    let t1 = exp_by_x::<P>(elt);
    let t2 = t1.cyclotomic_square();
    let t3 = t0 * t1;

    let t4 = exp_by_x::<P>(&t3);
    let t5 = exp_by_x::<P>(&t4);
    let t6 = exp_by_x::<P>(&t5);
    let t7 = t6 * t2;
    let t8 = exp_by_x::<P>(&t7);

    let t9 = *elt * (t3.conjugate() * t8);
    let t10 = (t4 * elt).frobenius_map(3);
    let t11 = (t7 * elt.conjugate()).frobenius_map(1);
    let t12 = (t1 * t5).frobenius_map(2);

    t12 * t10 * t11 * t9
}

impl<P: Bls12Params> Engine for Bls12<P> {
    type Scalar = <P::G1 as WeierstrassParams>::Scalar;
    type G1 = ProjectivePoint<P::G1>;
    type G1Affine = AffinePoint<P::G1>;
    type G2 = ProjectivePoint<P::G2>;
    type G2Affine = AffinePoint<P::G2>;
    type Gt = Fp12<P>;
    type G1Prepared = AffinePoint<P::G1>;
    type G2Prepared = G2Prepared<P>;

    fn prepare_g1(p: &AffinePoint<P::G1>) -> Self::G1Prepared {
        *p
    }

    #[instrument(level = "debug", skip_all)]
    fn prepare_g2(q: &AffinePoint<P::G2>) -> Self::G2Prepared {
        match sextic::prepare_loop::<P>(q, &[P::X]) {
            Some((_, coeffs)) => G2Prepared {
                infinity: false,
                coeffs,
            },
            None => G2Prepared {
                infinity: true,
                coeffs: Vec::new(),
            },
        }
    }

    #[instrument(level = "debug", skip_all, fields(pairs = terms.len()))]
    fn multi_miller_loop(terms: &[(&Self::G1Prepared, &Self::G2Prepared)]) -> Self::Gt {
        sextic::multi_miller_loop::<P>(terms, &[P::X], P::X_IS_NEGATIVE, 0)
    }

    #[instrument(level = "debug", skip_all)]
    fn final_exponentiation(f: &Self::Gt) -> CtOption<Self::Gt> {
        sextic::final_exponentiation_easy_part::<P>(f).map(|elt| hard_part::<P>(&elt))
    }
}
