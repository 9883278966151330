//! Line functions shared by the BLS12 and BN families.
//!
//! G2 lives on a sextic twist over `Fp2`, and the target field is
//! `Fp12 = Fp6[w] / (w^2 - v)` with `Fp6 = Fp2[v] / (v^3 - ξ)`. The doubling and
//! addition steps work in homogeneous projective coordinates following
//! [Costello-Lange-Naehrig 2010] and [Aranha et al. 2013].
//!
//! [Costello-Lange-Naehrig 2010]: https://eprint.iacr.org/2009/615
//! [Aranha et al. 2013]: https://eprint.iacr.org/2012/408

use crate::loop_count::bits_below_msb;
use alloc::vec::Vec;
use core::fmt::Debug;
use curvegroup::weierstrass::{AffinePoint, WeierstrassParams};
use ff::PrimeField;
use subtle::CtOption;
use towerfield::{CubicExt, CubicExtConfig, QuadExt, QuadExtConfig, RessolParams, SqrtField};

/// Quadratic extension carrying G2.
pub type Fp2<P> = QuadExt<<P as SexticTwistParams>::Fp2Config>;

/// Cubic extension of [`Fp2`].
pub type Fp6<P> = CubicExt<<P as SexticTwistParams>::Fp6Config>;

/// Target field, a quadratic extension of [`Fp6`].
pub type Fp12<P> = QuadExt<<P as SexticTwistParams>::Fp12Config>;

/// How the twist `E'` relates to `E: y^2 = x^3 + b`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TwistType {
    /// `E': y^2 = x^3 + b·ξ`.
    M,
    /// `E': y^2 = x^3 + b / ξ`.
    D,
}

/// Tower and curve types of a pairing-friendly curve with a sextic twist.
pub trait SexticTwistParams: Copy + Debug + Default + Eq + Send + Sync + 'static {
    /// Base prime field.
    type Fp: SqrtField + PrimeField;

    /// `Fp2` configuration.
    type Fp2Config: QuadExtConfig<Base = Self::Fp> + RessolParams<QuadExt<Self::Fp2Config>>;

    /// `Fp6` configuration; its non-residue is the twisting element `ξ`.
    type Fp6Config: CubicExtConfig<Base = QuadExt<Self::Fp2Config>>;

    /// `Fp12` configuration; its non-residue is `v`.
    type Fp12Config: QuadExtConfig<Base = CubicExt<Self::Fp6Config>>;

    /// The curve over `Fp`.
    type G1: WeierstrassParams<Base = Self::Fp>;

    /// The sextic twist over `Fp2`.
    type G2: WeierstrassParams<
            Base = QuadExt<Self::Fp2Config>,
            Scalar = <Self::G1 as WeierstrassParams>::Scalar,
        >;

    /// Twist type of [`Self::G2`].
    const TWIST_TYPE: TwistType;
}

/// Coefficients `(ell_0, ell_VW, ell_VV)` of one line, evaluated at a G1 point as
/// `ell_0 + ell_VW·y_P + ell_VV·x_P` placed in the sparse slots of `Fp12`.
pub(crate) type LineCoeffs<P> = (Fp2<P>, Fp2<P>, Fp2<P>);

/// Line coefficients of a G2 point.
#[derive(Clone, Debug)]
pub struct G2Prepared<P: SexticTwistParams> {
    pub(crate) infinity: bool,
    pub(crate) coeffs: Vec<LineCoeffs<P>>,
}

impl<P: SexticTwistParams> G2Prepared<P> {
    /// Was this prepared from the identity?
    pub fn is_identity(&self) -> bool {
        self.infinity
    }
}

/// The running point `T` of the precomputation, in homogeneous projective coordinates.
pub(crate) struct TwistPoint<P: SexticTwistParams> {
    pub(crate) x: Fp2<P>,
    pub(crate) y: Fp2<P>,
    pub(crate) z: Fp2<P>,
}

impl<P: SexticTwistParams> TwistPoint<P> {
    fn from_affine(x: Fp2<P>, y: Fp2<P>) -> Self {
        Self {
            x,
            y,
            z: Fp2::<P>::ONE,
        }
    }

    /// Multiplies a line coefficient by `ξ` on D-type twists.
    fn twist_ell_0(ell_0: Fp2<P>) -> Fp2<P> {
        match P::TWIST_TYPE {
            TwistType::M => ell_0,
            TwistType::D => P::Fp6Config::mul_base_by_nonresidue(&ell_0),
        }
    }

    /// `T ← 2T`, returning the tangent line at `T`.
    pub(crate) fn double_in_place(&mut self) -> LineCoeffs<P> {
        let two_inv = <P::Fp as PrimeField>::TWO_INV;
        let b_twist = <P::G2 as WeierstrassParams>::B;

        let a = (self.x * self.y).scale(&two_inv);
        let b = self.y.square();
        let c = self.z.square();
        let e = b_twist * (c.double() + c);
        let f = e.double() + e;
        let g = (b + f).scale(&two_inv);
        let h = (self.y + self.z).square() - (b + c);
        let i = e - b;
        let j = self.x.square();
        let e_square = e.square();

        self.x = a * (b - f);
        self.y = g.square() - (e_square.double() + e_square);
        self.z = b * h;

        (Self::twist_ell_0(i), -h, j.double() + j)
    }

    /// `T ← T + Q` for affine `Q`, returning the line through `T` and `Q`.
    pub(crate) fn add_in_place(&mut self, qx: &Fp2<P>, qy: &Fp2<P>) -> LineCoeffs<P> {
        let d = self.x - *qx * self.z;
        let e = self.y - *qy * self.z;
        let f = d.square();
        let g = e.square();
        let h = d * f;
        let i = self.x * f;
        let j = h + self.z * g - i.double();

        let y = e * (i - j) - h * self.y;
        self.x = d * j;
        self.y = y;
        self.z *= h;

        let ell_0 = e * qx - d * qy;
        (Self::twist_ell_0(ell_0), d, -e)
    }
}

/// Runs the doubling-and-addition schedule of `loop_count` from `Q`.
///
/// Returns the final running point for the curve-specific tail, or `None` for the
/// identity.
pub(crate) fn prepare_loop<P: SexticTwistParams>(
    q: &AffinePoint<P::G2>,
    loop_count: &[u64],
) -> Option<(TwistPoint<P>, Vec<LineCoeffs<P>>)> {
    if bool::from(q.is_identity()) {
        return None;
    }

    let (qx, qy) = (*q.x(), *q.y());
    let mut r = TwistPoint::<P>::from_affine(qx, qy);
    let mut coeffs = Vec::new();

    for bit in bits_below_msb(loop_count) {
        coeffs.push(r.double_in_place());
        if bit {
            coeffs.push(r.add_in_place(&qx, &qy));
        }
    }

    Some((r, coeffs))
}

/// Multiplies `f` by a line evaluated at the affine G1 point `p`.
pub(crate) fn ell<P: SexticTwistParams>(
    f: &Fp12<P>,
    coeffs: &LineCoeffs<P>,
    p: &AffinePoint<P::G1>,
) -> Fp12<P> {
    let (ell_0, ell_vw, ell_vv) = coeffs;
    let vw = ell_vw.scale(p.y());
    let vv = ell_vv.scale(p.x());

    let bb = f.c1.mul_by_1(&vw);
    let sum = f.c0 + f.c1;
    let (aa, c1) = match P::TWIST_TYPE {
        TwistType::M => (
            f.c0.mul_by_01(ell_0, &vv),
            sum.mul_by_01(ell_0, &(vv + vw)),
        ),
        TwistType::D => (
            f.c0.mul_by_02(ell_0, &vv),
            sum * Fp6::<P>::new(*ell_0, vw, vv),
        ),
    };

    Fp12::<P>::new(
        P::Fp12Config::mul_base_by_nonresidue(&bb) + aa,
        c1 - aa - bb,
    )
}

/// Folds the line coefficients of every pair into one `Fp12` accumulator.
///
/// `tail` lines after the main loop are evaluated once the accumulator has been
/// conjugated for a negative loop count.
pub(crate) fn multi_miller_loop<P: SexticTwistParams>(
    terms: &[(&AffinePoint<P::G1>, &G2Prepared<P>)],
    loop_count: &[u64],
    negative: bool,
    tail: usize,
) -> Fp12<P> {
    let pairs: Vec<_> = terms
        .iter()
        .filter(|(p, q)| !bool::from(p.is_identity()) && !q.infinity)
        .collect();

    if pairs.is_empty() {
        return Fp12::<P>::ONE;
    }

    let mut f = Fp12::<P>::ONE;
    let mut idx = 0;
    let add_lines = |f: &mut Fp12<P>, idx: &mut usize| {
        for (p, q) in &pairs {
            *f = ell::<P>(f, &q.coeffs[*idx], p);
        }
        *idx += 1;
    };

    for bit in bits_below_msb(loop_count) {
        f = f.square();
        add_lines(&mut f, &mut idx);
        if bit {
            add_lines(&mut f, &mut idx);
        }
    }

    if negative {
        f = f.conjugate();
    }

    for _ in 0..tail {
        add_lines(&mut f, &mut idx);
    }

    f
}

/// Raises `f` to `(p^6 - 1)(p^2 + 1)`, landing in the cyclotomic subgroup.
pub(crate) fn final_exponentiation_easy_part<P: SexticTwistParams>(
    f: &Fp12<P>,
) -> CtOption<Fp12<P>> {
    f.invert().map(|f_inv| {
        let r = f.conjugate() * f_inv;
        r.frobenius_map(2) * r
    })
}
