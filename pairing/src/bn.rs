//! Optimal ate pairing on BN curves.
//!
//! The Miller loop runs over `6x + 2` and finishes with the lines through
//! `π(Q)` and `-π^2(Q)`, where `π` is the Frobenius endomorphism carried to the
//! twist. The hard part follows [Fuentes-Castañeda-Knapp-Rodríguez-Henríquez 2011].
//!
//! [Fuentes-Castañeda-Knapp-Rodríguez-Henríquez 2011]: https://doi.org/10.1007/978-3-642-28496-0_25

use crate::{
    Engine,
    sextic::{self, Fp2, Fp12, G2Prepared, SexticTwistParams},
};
use alloc::vec::Vec;
use core::marker::PhantomData;
use curvegroup::weierstrass::{AffinePoint, ProjectivePoint, WeierstrassParams};
use subtle::CtOption;
use tracing::instrument;

/// Parameters of a BN curve.
pub trait BnParams: SexticTwistParams {
    /// Absolute value of the curve parameter `x`.
    const X: u64;

    /// Is `x` negative?
    const X_IS_NEGATIVE: bool;

    /// `|6x + 2|` as little-endian words.
    const ATE_LOOP_COUNT: &'static [u64];

    /// `ξ^((p - 1) / 3)`, applied to the x-coordinate by the twisted Frobenius.
    const TWIST_MUL_BY_Q_X: Fp2<Self>;

    /// `ξ^((p - 1) / 2)`, applied to the y-coordinate by the twisted Frobenius.
    const TWIST_MUL_BY_Q_Y: Fp2<Self>;
}

/// The BN pairing engine for the curve described by `P`.
pub struct Bn<P: BnParams>(PhantomData<P>);

/// The twisted Frobenius `π(x, y) = (x^p·c_x, y^p·c_y)` on affine coordinates.
fn mul_by_q<P: BnParams>((x, y): (Fp2<P>, Fp2<P>)) -> (Fp2<P>, Fp2<P>) {
    (
        x.frobenius_map(1) * P::TWIST_MUL_BY_Q_X,
        y.frobenius_map(1) * P::TWIST_MUL_BY_Q_Y,
    )
}

/// Raises an element of the cyclotomic subgroup to the power `-x`.
fn exp_by_neg_x<P: BnParams>(f: &Fp12<P>) -> Fp12<P> {
    let res = f.cyclotomic_exp(&[P::X]);
    if P::X_IS_NEGATIVE {
        res
    } else {
        res.conjugate()
    }
}

/// Raises an element of the cyclotomic subgroup to a multiple of `(p^4 - p^2 + 1) / r`
/// coprime to `r`.
fn hard_part<P: BnParams>(elt: &Fp12<P>) -> Fp12<P> {
    let a = exp_by_neg_x::<P>(elt);
    let b = a.cyclotomic_square();
    let c = b.cyclotomic_square();
    let d = c * b;

    let e = exp_by_neg_x::<P>(&d);
    let f = e.cyclotomic_square();
    let g = exp_by_neg_x::<P>(&f);
    let h = d.conjugate();
    let i = g.conjugate();

    let j = i * e;
    let k = j * h;
    let l = k * b;
    let m = k * e;
    let n = m * elt;

    let o = l.frobenius_map(1);
    let p = o * n;
    let q = k.frobenius_map(2);
    let r = q * p;

    let s = elt.conjugate();
    let t = s * l;
    let u = t.frobenius_map(3);
    u * r
}

impl<P: BnParams> Engine for Bn<P> {
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
        let Some((mut r, mut coeffs)) = sextic::prepare_loop::<P>(q, P::ATE_LOOP_COUNT) else {
            return G2Prepared {
                infinity: true,
                coeffs: Vec::new(),
            };
        };

        let q1 = mul_by_q::<P>((*q.x(), *q.y()));
        let (q2x, q2y) = mul_by_q::<P>(q1);

        if P::X_IS_NEGATIVE {
            r.y = -r.y;
        }

        coeffs.push(r.add_in_place(&q1.0, &q1.1));
        coeffs.push(r.add_in_place(&q2x, &-q2y));

        G2Prepared {
            infinity: false,
            coeffs,
        }
    }

    #[instrument(level = "debug", skip_all, fields(pairs = terms.len()))]
    fn multi_miller_loop(terms: &[(&Self::G1Prepared, &Self::G2Prepared)]) -> Self::Gt {
        sextic::multi_miller_loop::<P>(terms, P::ATE_LOOP_COUNT, P::X_IS_NEGATIVE, 2)
    }

    #[instrument(level = "debug", skip_all)]
    fn final_exponentiation(f: &Self::Gt) -> CtOption<Self::Gt> {
        sextic::final_exponentiation_easy_part::<P>(f).map(|elt| hard_part::<P>(&elt))
    }
}
