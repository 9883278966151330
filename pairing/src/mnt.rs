//! Ate pairing on MNT curves of embedding degree 4 and 6.
//!
//! G2 lives on a quadratic (MNT4) or cubic (MNT6) twist over `Fqe = Fq^(k/2)`, and
//! the target field is `Fqk = Fqe[w] / (w^2 - twist)`. The precomputation keeps the
//! running point in Jacobian coordinates with `T = Z^2`, following the flipped
//! Miller loop of [Ben-Sasson-Chiesa-Tromer-Virza 2014].
//!
//! [Ben-Sasson-Chiesa-Tromer-Virza 2014]: https://eprint.iacr.org/2013/879

use crate::{Engine, loop_count::bits_below_msb};
use alloc::vec::Vec;
use core::{fmt::Debug, marker::PhantomData};
use curvegroup::weierstrass::{AffinePoint, ProjectivePoint, WeierstrassParams};
use subtle::CtOption;
use towerfield::{Field, QuadExt, QuadExtConfig, SqrtField};
use tracing::instrument;

/// Target field of an MNT curve.
pub type Fqk<P> = QuadExt<<P as MntParams>::FqkConfig>;

/// Parameters of an MNT curve.
pub trait MntParams: Copy + Debug + Default + Eq + Send + Sync + 'static {
    /// Embedding degree `k`, either 4 or 6.
    const EMBEDDING_DEGREE: usize;

    /// Base prime field.
    type Fq: SqrtField;

    /// Twist field `Fq^(k/2)`.
    type Fqe: SqrtField;

    /// Configuration of `Fqk` over [`Self::Fqe`].
    type FqkConfig: QuadExtConfig<Base = Self::Fqe>;

    /// The curve over `Fq`.
    type G1: WeierstrassParams<Base = Self::Fq>;

    /// The twist over `Fqe`.
    type G2: WeierstrassParams<
            Base = Self::Fqe,
            Scalar = <Self::G1 as WeierstrassParams>::Scalar,
        >;

    /// The twisting element: `u` in `Fq2` or `v` in `Fq3`.
    const TWIST: Self::Fqe;

    /// Inverse of [`Self::TWIST`].
    const TWIST_INV: Self::Fqe;

    /// `|loop count|` as little-endian words.
    const ATE_LOOP_COUNT: &'static [u64];

    /// Is the loop count negative?
    const ATE_IS_LOOP_COUNT_NEG: bool;

    /// `w1` in the last chunk `w1·q + w0` of the final exponent.
    const FINAL_EXPONENT_LAST_CHUNK_W1: &'static [u64];

    /// `|w0|` in the last chunk `w1·q + w0` of the final exponent.
    const FINAL_EXPONENT_LAST_CHUNK_ABS_OF_W0: &'static [u64];

    /// Is `w0` negative?
    const FINAL_EXPONENT_LAST_CHUNK_W0_IS_NEG: bool;

    /// Embeds a base field element into the twist field.
    fn embed(x: &Self::Fq) -> Self::Fqe;
}

/// A G1 point with its coordinates multiplied by the twist.
#[derive(Clone, Debug)]
pub struct G1Prepared<P: MntParams> {
    infinity: bool,
    x: P::Fqe,
    x_twist: P::Fqe,
    y_twist: P::Fqe,
}

/// Coefficients of one doubling line.
#[derive(Clone, Debug)]
struct DoublingCoeffs<F> {
    c_h: F,
    c_4c: F,
    c_j: F,
    c_l: F,
}

/// Coefficients of one addition line.
#[derive(Clone, Debug)]
struct AdditionCoeffs<F> {
    c_l1: F,
    c_rz: F,
}

/// Line coefficients of a G2 point.
#[derive(Clone, Debug)]
pub struct G2Prepared<P: MntParams> {
    infinity: bool,
    x_over_twist: P::Fqe,
    y_over_twist: P::Fqe,
    doubling_coeffs: Vec<DoublingCoeffs<P::Fqe>>,
    addition_coeffs: Vec<AdditionCoeffs<P::Fqe>>,
}

impl<P: MntParams> G2Prepared<P> {
    /// Was this prepared from the identity?
    pub fn is_identity(&self) -> bool {
        self.infinity
    }
}

/// Running point `(X : Y : Z)` in Jacobian coordinates with `T = Z^2`.
struct ExtendedJacobian<F> {
    x: F,
    y: F,
    z: F,
    t: F,
}

impl<F: Field> ExtendedJacobian<F> {
    /// `R ← 2R` for the twist `y^2 = x^3 + a·x + b`.
    fn double_in_place(&mut self, a: &F) -> DoublingCoeffs<F> {
        let t_sq = self.t.square();
        let x_sq = self.x.square();
        let y_sq = self.y.square();
        let y_4 = y_sq.square();

        let e = (self.x + y_sq).square() - x_sq - y_4;
        let f = x_sq.double() + x_sq + *a * t_sq;
        let g = f.square();

        let x = g - e.double().double();
        let y = f * (e.double() - x) - y_4.double().double().double();
        let z = (self.y + self.z).square() - y_sq - self.t;
        let t = z.square();

        let coeffs = DoublingCoeffs {
            c_h: (z + self.t).square() - t - t_sq,
            c_4c: y_sq.double().double(),
            c_j: (f + self.t).square() - g - t_sq,
            c_l: (f + self.x).square() - g - x_sq,
        };

        *self = Self { x, y, z, t };
        coeffs
    }

    /// `R ← R + Q` for affine `Q = (x, y)` with `y_sq = y^2`.
    fn add_in_place(&mut self, x: &F, y: &F, y_sq: &F) -> AdditionCoeffs<F> {
        let b = *x * self.t;
        let d = ((*y + self.z).square() - y_sq - self.t) * self.t;
        let h = b - self.x;
        let i = h.square();
        let e = i.double().double();
        let j = h * e;
        let v = self.x * e;
        let l1 = d - self.y.double();

        let x3 = l1.square() - j - v.double();
        let y3 = l1 * (v - x3) - self.y.double() * j;
        let z3 = (self.z + h).square() - self.t - i;
        let t3 = z3.square();

        *self = Self {
            x: x3,
            y: y3,
            z: z3,
            t: t3,
        };

        AdditionCoeffs { c_l1: l1, c_rz: z3 }
    }
}

/// The MNT pairing engine for the curve described by `P`.
pub struct Mnt<P: MntParams>(PhantomData<P>);

impl<P: MntParams> Mnt<P> {
    /// Evaluates an addition line at a prepared G1 point.
    fn addition_line(
        p: &G1Prepared<P>,
        q: &G2Prepared<P>,
        coeffs: &AdditionCoeffs<P::Fqe>,
    ) -> Fqk<P> {
        let l1_coeff = p.x - q.x_over_twist;
        Fqk::<P>::new(
            coeffs.c_rz * p.y_twist,
            -(q.y_over_twist * coeffs.c_rz + l1_coeff * coeffs.c_l1),
        )
    }

    /// Evaluates a doubling line at a prepared G1 point.
    fn doubling_line(p: &G1Prepared<P>, coeffs: &DoublingCoeffs<P::Fqe>) -> Fqk<P> {
        Fqk::<P>::new(
            -coeffs.c_4c - coeffs.c_j * p.x_twist + coeffs.c_l,
            coeffs.c_h * p.y_twist,
        )
    }
}

impl<P: MntParams> Engine for Mnt<P> {
    type Scalar = <P::G1 as WeierstrassParams>::Scalar;
    type G1 = ProjectivePoint<P::G1>;
    type G1Affine = AffinePoint<P::G1>;
    type G2 = ProjectivePoint<P::G2>;
    type G2Affine = AffinePoint<P::G2>;
    type Gt = Fqk<P>;
    type G1Prepared = G1Prepared<P>;
    type G2Prepared = G2Prepared<P>;

    fn prepare_g1(p: &AffinePoint<P::G1>) -> Self::G1Prepared {
        let (x, y) = (P::embed(p.x()), P::embed(p.y()));
        G1Prepared {
            infinity: p.is_identity().into(),
            x,
            x_twist: x * P::TWIST,
            y_twist: y * P::TWIST,
        }
    }

    #[instrument(level = "debug", skip_all)]
    fn prepare_g2(q: &AffinePoint<P::G2>) -> Self::G2Prepared {
        let (x, y) = (*q.x(), *q.y());
        let y_sq = y.square();
        let mut prepared = G2Prepared {
            infinity: q.is_identity().into(),
            x_over_twist: x * P::TWIST_INV,
            y_over_twist: y * P::TWIST_INV,
            doubling_coeffs: Vec::new(),
            addition_coeffs: Vec::new(),
        };

        if prepared.infinity {
            return prepared;
        }

        let a = <P::G2 as WeierstrassParams>::A;
        let mut r = ExtendedJacobian {
            x,
            y,
            z: P::Fqe::ONE,
            t: P::Fqe::ONE,
        };

        for bit in bits_below_msb(P::ATE_LOOP_COUNT) {
            prepared.doubling_coeffs.push(r.double_in_place(&a));
            if bit {
                prepared.addition_coeffs.push(r.add_in_place(&x, &y, &y_sq));
            }
        }

        if P::ATE_IS_LOOP_COUNT_NEG {
            // R is a multiple of Q below its order, so Z is non-zero.
            let z_inv = r.z.invert().unwrap_or(P::Fqe::ZERO);
            let z_inv_sq = z_inv.square();
            let minus_rx = r.x * z_inv_sq;
            let minus_ry = -(r.y * z_inv_sq * z_inv);
            let minus_ry_sq = minus_ry.square();
            prepared
                .addition_coeffs
                .push(r.add_in_place(&minus_rx, &minus_ry, &minus_ry_sq));
        }

        prepared
    }

    #[instrument(level = "debug", skip_all, fields(pairs = terms.len()))]
    fn multi_miller_loop(terms: &[(&Self::G1Prepared, &Self::G2Prepared)]) -> Self::Gt {
        let pairs: Vec<_> = terms
            .iter()
            .filter(|(p, q)| !p.infinity && !q.infinity)
            .collect();

        if pairs.is_empty() {
            return Fqk::<P>::ONE;
        }

        let mut f = Fqk::<P>::ONE;
        let (mut dbl_idx, mut add_idx) = (0, 0);

        for bit in bits_below_msb(P::ATE_LOOP_COUNT) {
            f = f.square();
            for (p, q) in &pairs {
                f *= Self::doubling_line(p, &q.doubling_coeffs[dbl_idx]);
            }
            dbl_idx += 1;

            if bit {
                for (p, q) in &pairs {
                    f *= Self::addition_line(p, q, &q.addition_coeffs[add_idx]);
                }
                add_idx += 1;
            }
        }

        if P::ATE_IS_LOOP_COUNT_NEG {
            for (p, q) in &pairs {
                f *= Self::addition_line(p, q, &q.addition_coeffs[add_idx]);
            }
            f = f.invert().unwrap_or(Fqk::<P>::ZERO);
        }

        f
    }

    #[instrument(level = "debug", skip_all)]
    fn final_exponentiation(f: &Self::Gt) -> CtOption<Self::Gt> {
        final_exponentiation(
            f,
            P::EMBEDDING_DEGREE,
            P::FINAL_EXPONENT_LAST_CHUNK_W1,
            P::FINAL_EXPONENT_LAST_CHUNK_ABS_OF_W0,
            P::FINAL_EXPONENT_LAST_CHUNK_W0_IS_NEG,
        )
    }
}

/// Raises `f` to `(q^k - 1) / r` for `k` in {4, 6}.
///
/// The easy part is `(q^(k/2) - 1)(q + 1)` for `k = 6` and `q^2 - 1` for `k = 4`; the
/// remaining cyclotomic factor `Φ_k(q) / r` is split as `w1·q + w0`.
pub(crate) fn final_exponentiation<C: QuadExtConfig>(
    f: &QuadExt<C>,
    embedding_degree: usize,
    w1: &[u64],
    abs_w0: &[u64],
    w0_is_neg: bool,
) -> CtOption<QuadExt<C>> {
    f.invert().map(|f_inv| {
        // f^(q^(k/2) - 1)
        let mut elt = f.conjugate() * f_inv;
        if embedding_degree == 6 {
            // ^(q + 1)
            elt *= elt.frobenius_map(1);
        }

        let w1_part = elt.frobenius_map(1).cyclotomic_exp(w1);
        let w0_base = if w0_is_neg { elt.conjugate() } else { elt };
        w1_part * w0_base.cyclotomic_exp(abs_w0)
    })
}
