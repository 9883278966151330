//! Ate and Tate pairings on Edwards curves of embedding degree 6.
//!
//! G1 is an Edwards curve `a x^2 + y^2 = 1 + d x^2 y^2` over `Fq` and G2 lives on its
//! twist by `v` over `Fq3`; the target field is `Fq6 = Fq3[w] / (w^2 - v)`. Miller loop
//! functions are conics through the running point, kept in extended coordinates
//! `(X : Y : Z : T)`, after [Arène-Lange-Naehrig-Ritzenthaler 2011].
//!
//! The [`Engine`] implementation is the ate pairing with the flipped Miller loop (the
//! lines are computed on G2). The reduced Tate pairing is available through
//! [`EdwardsPairing::tate_pairing`].
//!
//! [Arène-Lange-Naehrig-Ritzenthaler 2011]: https://eprint.iacr.org/2009/155

use crate::{Engine, loop_count::bits_below_msb, mnt};
use alloc::vec::Vec;
use core::{fmt::Debug, marker::PhantomData};
use curvegroup::edwards::{AffinePoint, EdwardsParams, ExtendedPoint};
use subtle::CtOption;
use towerfield::{Field, QuadExt, QuadExtConfig, SqrtField};
use tracing::instrument;

/// Target field of an Edwards pairing.
pub type Fqk<P> = QuadExt<<P as EdwardsPairingParams>::FqkConfig>;

/// Parameters of a pairing-friendly Edwards curve of embedding degree 6.
pub trait EdwardsPairingParams: Copy + Debug + Default + Eq + Send + Sync + 'static {
    /// Base prime field.
    type Fq: SqrtField;

    /// Twist field `Fq3`.
    type Fqe: SqrtField;

    /// Configuration of `Fq6` over [`Self::Fqe`], with `w^2 = ` [`Self::TWIST`].
    type FqkConfig: QuadExtConfig<Base = Self::Fqe>;

    /// The curve over `Fq`.
    type G1: EdwardsParams<Base = Self::Fq>;

    /// The twist over `Fqe`, with coefficients `v·a` and `v·d`.
    type G2: EdwardsParams<Base = Self::Fqe, Scalar = <Self::G1 as EdwardsParams>::Scalar>;

    /// The twisting element `v`.
    const TWIST: Self::Fqe;

    /// The group order `r` as little-endian words: the Tate loop count.
    const SCALAR_MODULUS: &'static [u64];

    /// `|t - 1|` for the trace of Frobenius `t`, as little-endian words.
    const ATE_LOOP_COUNT: &'static [u64];

    /// `w1` in the last chunk `w1·q + w0` of the final exponent.
    const FINAL_EXPONENT_LAST_CHUNK_W1: &'static [u64];

    /// `|w0|` in the last chunk `w1·q + w0` of the final exponent.
    const FINAL_EXPONENT_LAST_CHUNK_ABS_OF_W0: &'static [u64];

    /// Is `w0` negative?
    const FINAL_EXPONENT_LAST_CHUNK_W0_IS_NEG: bool;

    /// Embeds a base field element into the twist field.
    fn embed(x: &Self::Fq) -> Self::Fqe;
}

/// Coefficients `c_ZZ`, `c_XY` and `c_XZ` of the conic through the running point.
#[derive(Clone, Debug)]
struct ConicCoeffs<F> {
    c_zz: F,
    c_xy: F,
    c_xz: F,
}

/// Running point `(X : Y : Z : T)` with `x = X/Z`, `y = Y/Z` and `T = XY/Z`.
#[derive(Clone, Debug)]
struct ExtendedCoords<F> {
    x: F,
    y: F,
    z: F,
    t: F,
}

impl<F: Field> ExtendedCoords<F> {
    fn from_affine(x: F, y: F) -> Self {
        Self {
            x,
            y,
            z: F::ONE,
            t: x * y,
        }
    }

    /// `R ← 2R` on `a x^2 + y^2 = 1 + d x^2 y^2`.
    fn double_in_place(&mut self, a: &F) -> ConicCoeffs<F> {
        let xx = self.x.square();
        let yy = self.y.square();
        let zz = self.z.square();
        let f = (self.x + self.y).square() - xx - yy;
        let g = (self.y + self.z).square() - yy - zz;
        let h = *a * xx;
        let i = h + yy;
        let j = zz - i;
        let k = j + zz;

        let coeffs = ConicCoeffs {
            c_zz: (self.y * (self.t - self.x)).double(),
            c_xy: j.double() + g,
            c_xz: (*a * self.x * self.t - yy).double(),
        };

        let yy_minus_h = yy - h;
        *self = Self {
            x: f * k,
            y: i * yy_minus_h,
            z: i * k,
            t: f * yy_minus_h,
        };
        coeffs
    }

    /// `R ← R + B` for a base point `B` with `Z = 1`.
    fn add_in_place(&mut self, base: &Self, a: &F) -> ConicCoeffs<F> {
        let xx = self.x * base.x;
        let yy = self.y * base.y;
        let c = self.z * base.t;
        let e = self.t + c;
        let f = (self.x - self.y) * (base.x + base.y) + yy - xx;
        let g = yy + *a * xx;
        let h = self.t - c;
        let i = self.t * base.t;

        let coeffs = ConicCoeffs {
            c_zz: *a * ((self.t - self.x) * (base.t + base.x) - i + xx),
            c_xy: self.x - base.x * self.z + f,
            c_xz: (self.y - self.t) * (base.y + base.t) - yy + i - h,
        };

        *self = Self {
            x: e * f,
            y: g * h,
            z: f * g,
            t: e * h,
        };
        coeffs
    }
}

/// Conic coefficients along the doubling-and-add chain of `loop_count`, starting at
/// `(x, y)`.
fn conic_chain<F: Field>(x: F, y: F, a: &F, loop_count: &[u64]) -> Vec<ConicCoeffs<F>> {
    let base = ExtendedCoords::from_affine(x, y);
    let mut r = base.clone();
    let mut coeffs = Vec::new();

    for bit in bits_below_msb(loop_count) {
        coeffs.push(r.double_in_place(a));
        if bit {
            coeffs.push(r.add_in_place(&base, a));
        }
    }

    coeffs
}

/// A G1 point prepared for the ate Miller loop.
#[derive(Clone, Debug)]
pub struct G1Prepared<P: EdwardsPairingParams> {
    infinity: bool,
    p_xy: P::Fqe,
    p_xz: P::Fqe,
    p_zz_plus_yz: P::Fqe,
}

/// Conic coefficients of a G2 point for the ate Miller loop.
#[derive(Clone, Debug)]
pub struct G2Prepared<P: EdwardsPairingParams> {
    infinity: bool,
    coeffs: Vec<ConicCoeffs<P::Fqe>>,
}

impl<P: EdwardsPairingParams> G2Prepared<P> {
    /// Was this prepared from the identity?
    pub fn is_identity(&self) -> bool {
        self.infinity
    }
}

/// Conic coefficients of a G1 point for the Tate Miller loop.
#[derive(Clone, Debug)]
pub struct TateG1Prepared<P: EdwardsPairingParams> {
    infinity: bool,
    coeffs: Vec<ConicCoeffs<P::Fq>>,
}

/// A G2 point prepared for the Tate Miller loop: `y` and `(1 + y) / (v·x)`.
#[derive(Clone, Debug)]
pub struct TateG2Prepared<P: EdwardsPairingParams> {
    infinity: bool,
    y0: P::Fqe,
    eta: P::Fqe,
}

/// The pairing engine for the Edwards curve described by `P`.
pub struct EdwardsPairing<P: EdwardsPairingParams>(PhantomData<P>);

impl<P: EdwardsPairingParams> EdwardsPairing<P> {
    /// Evaluates a doubling conic at a prepared G1 point.
    fn doubling_conic(p: &G1Prepared<P>, c: &ConicCoeffs<P::Fqe>) -> Fqk<P> {
        Fqk::<P>::new(p.p_xy * c.c_xy + p.p_xz * c.c_xz, p.p_zz_plus_yz * c.c_zz)
    }

    /// Evaluates an addition conic at a prepared G1 point.
    fn addition_conic(p: &G1Prepared<P>, c: &ConicCoeffs<P::Fqe>) -> Fqk<P> {
        Fqk::<P>::new(p.p_zz_plus_yz * c.c_zz, p.p_xy * c.c_xy + p.p_xz * c.c_xz)
    }

    /// Evaluates a G1 conic at a prepared G2 point.
    fn tate_conic(q: &TateG2Prepared<P>, c: &ConicCoeffs<P::Fq>) -> Fqk<P> {
        Fqk::<P>::new(
            P::embed(&c.c_xz) + P::embed(&c.c_xy) * q.y0,
            P::embed(&c.c_zz) * q.eta,
        )
    }

    /// Precomputes the conic coefficients of a G1 point along `r`.
    #[instrument(level = "debug", skip_all)]
    pub fn tate_prepare_g1(p: &AffinePoint<P::G1>) -> TateG1Prepared<P> {
        if bool::from(p.is_identity()) {
            return TateG1Prepared {
                infinity: true,
                coeffs: Vec::new(),
            };
        }

        let a = <P::G1 as EdwardsParams>::A;
        TateG1Prepared {
            infinity: false,
            coeffs: conic_chain(*p.x(), *p.y(), &a, P::SCALAR_MODULUS),
        }
    }

    /// Prepares a G2 point for the Tate Miller loop.
    pub fn tate_prepare_g2(q: &AffinePoint<P::G2>) -> TateG2Prepared<P> {
        let eta = (P::TWIST * q.x()).invert();
        let infinity = bool::from(q.is_identity() | !eta.is_some());

        TateG2Prepared {
            infinity,
            y0: *q.y(),
            eta: (P::Fqe::ONE + q.y()) * eta.unwrap_or(P::Fqe::ZERO),
        }
    }

    /// Tate Miller loop of a single pair. Either side being the identity gives one.
    #[instrument(level = "debug", skip_all)]
    pub fn tate_miller_loop(p: &TateG1Prepared<P>, q: &TateG2Prepared<P>) -> Fqk<P> {
        if p.infinity || q.infinity {
            return Fqk::<P>::ONE;
        }

        let mut f = Fqk::<P>::ONE;
        let mut idx = 0;

        for bit in bits_below_msb(P::SCALAR_MODULUS) {
            f = f.square() * Self::tate_conic(q, &p.coeffs[idx]);
            idx += 1;

            if bit {
                f *= Self::tate_conic(q, &p.coeffs[idx]);
                idx += 1;
            }
        }

        f
    }

    /// Computes the reduced Tate pairing `e(p, q)`.
    pub fn tate_pairing(p: &AffinePoint<P::G1>, q: &AffinePoint<P::G2>) -> Fqk<P> {
        let f = Self::tate_miller_loop(&Self::tate_prepare_g1(p), &Self::tate_prepare_g2(q));
        Self::final_exponentiation(&f).unwrap_or(Fqk::<P>::ZERO)
    }
}

impl<P: EdwardsPairingParams> Engine for EdwardsPairing<P> {
    type Scalar = <P::G1 as EdwardsParams>::Scalar;
    type G1 = ExtendedPoint<P::G1>;
    type G1Affine = AffinePoint<P::G1>;
    type G2 = ExtendedPoint<P::G2>;
    type G2Affine = AffinePoint<P::G2>;
    type Gt = Fqk<P>;
    type G1Prepared = G1Prepared<P>;
    type G2Prepared = G2Prepared<P>;

    fn prepare_g1(p: &AffinePoint<P::G1>) -> Self::G1Prepared {
        let (x, y) = (P::embed(p.x()), P::embed(p.y()));
        G1Prepared {
            infinity: p.is_identity().into(),
            p_xy: x * y,
            p_xz: x,
            p_zz_plus_yz: P::Fqe::ONE + y,
        }
    }

    #[instrument(level = "debug", skip_all)]
    fn prepare_g2(q: &AffinePoint<P::G2>) -> Self::G2Prepared {
        if bool::from(q.is_identity()) {
            return G2Prepared {
                infinity: true,
                coeffs: Vec::new(),
            };
        }

        let a = <P::G2 as EdwardsParams>::A;
        G2Prepared {
            infinity: false,
            coeffs: conic_chain(*q.x(), *q.y(), &a, P::ATE_LOOP_COUNT),
        }
    }

    #[instrument(level = "debug", skip_all, fields(pairs = terms.len()))]
    fn multi_miller_loop(terms: &[(&Self::G1Prepared, &Self::G2Prepared)]) -> Self::Gt {
        let pairs: Vec<_> = terms
            .iter()
            .filter(|(p, q)| !p.infinity && !q.infinity)
            .collect();

        let mut f = Fqk::<P>::ONE;
        if pairs.is_empty() {
            return f;
        }

        let mut idx = 0;
        for bit in bits_below_msb(P::ATE_LOOP_COUNT) {
            f = f.square();
            for (p, q) in &pairs {
                f *= Self::doubling_conic(p, &q.coeffs[idx]);
            }
            idx += 1;

            if bit {
                for (p, q) in &pairs {
                    f *= Self::addition_conic(p, &q.coeffs[idx]);
                }
                idx += 1;
            }
        }

        f
    }

    #[instrument(level = "debug", skip_all)]
    fn final_exponentiation(f: &Self::Gt) -> CtOption<Self::Gt> {
        mnt::final_exponentiation(
            f,
            6,
            P::FINAL_EXPONENT_LAST_CHUNK_W1,
            P::FINAL_EXPONENT_LAST_CHUNK_ABS_OF_W0,
            P::FINAL_EXPONENT_LAST_CHUNK_W0_IS_NEG,
        )
    }
}
