#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

pub mod arithmetic;

pub use crate::arithmetic::{
    Fq, Fr, G1Affine, G1Params, G1Projective, G2Affine, G2Params, G2Projective,
    tower::{Fq3, Fq3Config, Fq6, Fq6Config},
};
pub use curvegroup;
pub use pairing::{self, Engine};
pub use towerfield;

use pairing::{Mnt, MntParams};

/// The MNT6-298 curve.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, PartialOrd, Ord)]
pub struct Mnt6_298Params;

impl MntParams for Mnt6_298Params {
    const EMBEDDING_DEGREE: usize = 6;

    type Fq = Fq;
    type Fqe = Fq3;
    type FqkConfig = Fq6Config;
    type G1 = G1Params;
    type G2 = G2Params;

    const TWIST: Fq3 = Fq3::new(Fq::ZERO, Fq::ONE, Fq::ZERO);
    const TWIST_INV: Fq3 = Fq3::new(Fq::ZERO, Fq::ZERO, Fq::from_u64(5).const_invert());

    /// `|q + 1 - #E|`; the trace of Frobenius is negative.
    const ATE_LOOP_COUNT: &'static [u64] = &[
        0x0dc9a1b671660000,
        0x46609756bec2a33f,
        0x00000000001eef55,
    ];
    const ATE_IS_LOOP_COUNT_NEG: bool = true;

    const FINAL_EXPONENT_LAST_CHUNK_W1: &'static [u64] = &[1];
    const FINAL_EXPONENT_LAST_CHUNK_ABS_OF_W0: &'static [u64] = &[
        0x0dc9a1b671660000,
        0x46609756bec2a33f,
        0x00000000001eef55,
    ];
    const FINAL_EXPONENT_LAST_CHUNK_W0_IS_NEG: bool = true;

    fn embed(x: &Fq) -> Fq3 {
        Fq3::from_base(*x)
    }
}

/// Ate pairing on MNT6-298.
pub type Mnt6_298 = Mnt<Mnt6_298Params>;

/// Pairing target field; pairing values lie in its order-`r` subgroup.
pub type Gt = Fq6;
