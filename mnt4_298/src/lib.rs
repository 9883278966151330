#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

pub mod arithmetic;

pub use crate::arithmetic::{
    G1Affine, G1Params, G1Projective, G2Affine, G2Params, G2Projective,
    field::{Fq, FqParams},
    scalar::{Fr, FrParams},
    tower::{Fq2, Fq2Config, Fq4, Fq4Config},
};
pub use curvegroup;
pub use pairing::{self, Engine};
pub use towerfield;

use pairing::{Mnt, MntParams};

/// Order of G1 and G2 (i.e. scalar modulus) in hexadecimal.
const ORDER_HEX: &str = "000003bcf7bcd473a266249da7b0548ecaeec9635cf44194fb494c07925d6ad3bb4334a400000001";

/// The MNT4-298 curve.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, PartialOrd, Ord)]
pub struct Mnt4_298Params;

impl MntParams for Mnt4_298Params {
    const EMBEDDING_DEGREE: usize = 4;

    type Fq = Fq;
    type Fqe = Fq2;
    type FqkConfig = Fq4Config;
    type G1 = G1Params;
    type G2 = G2Params;

    const TWIST: Fq2 = Fq2::new(Fq::ZERO, Fq::ONE);
    const TWIST_INV: Fq2 = Fq2::new(Fq::ZERO, Fq::from_u64(17).const_invert());

    /// `q + 1 - #E`, the trace of Frobenius.
    const ATE_LOOP_COUNT: &'static [u64] = &[
        0x0dc9a1b671660000,
        0x46609756bec2a33f,
        0x00000000001eef55,
    ];
    const ATE_IS_LOOP_COUNT_NEG: bool = false;

    const FINAL_EXPONENT_LAST_CHUNK_W1: &'static [u64] = &[1];
    const FINAL_EXPONENT_LAST_CHUNK_ABS_OF_W0: &'static [u64] = &[
        0x0dc9a1b671660001,
        0x46609756bec2a33f,
        0x00000000001eef55,
    ];
    const FINAL_EXPONENT_LAST_CHUNK_W0_IS_NEG: bool = false;

    fn embed(x: &Fq) -> Fq2 {
        Fq2::from_base(*x)
    }
}

/// Ate pairing on MNT4-298.
pub type Mnt4_298 = Mnt<Mnt4_298Params>;

/// Pairing target field; pairing values lie in its order-`r` subgroup.
pub type Gt = Fq4;
