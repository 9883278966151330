#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

pub mod arithmetic;

pub use crate::arithmetic::{
    G1Affine, G1Extended, G1Params, G2Affine, G2Extended, G2Params,
    field::{Fq, FqParams},
    scalar::{Fr, FrParams},
    tower::{Fq3, Fq3Config, Fq6, Fq6Config},
};
pub use curvegroup;
pub use pairing::{self, Engine};
pub use towerfield;

use pairing::{EdwardsPairing, EdwardsPairingParams};

/// Order of G1 and G2 (i.e. scalar modulus) in hexadecimal.
const ORDER_HEX: &str = "0010357f274a8e56c4e2e493b92e12cc1de5532780000001";

/// The Edwards-183 curve.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, PartialOrd, Ord)]
pub struct Edwards183Params;

impl EdwardsPairingParams for Edwards183Params {
    type Fq = Fq;
    type Fqe = Fq3;
    type FqkConfig = Fq6Config;
    type G1 = G1Params;
    type G2 = G2Params;

    const TWIST: Fq3 = Fq3::new(Fq::ZERO, Fq::ONE, Fq::ZERO);

    const SCALAR_MODULUS: &'static [u64] = &[
        0x1de5532780000001,
        0xc4e2e493b92e12cc,
        0x0010357f274a8e56,
    ];

    /// `t = q + 1 - 4r` is negative here, so this is `-(t - 1)`.
    const ATE_LOOP_COUNT: &'static [u64] = &[0xc0a9e39280000003, 0x000000000e841dee];

    const FINAL_EXPONENT_LAST_CHUNK_W1: &'static [u64] = &[4];
    const FINAL_EXPONENT_LAST_CHUNK_ABS_OF_W0: &'static [u64] =
        &[0x02a78e4a00000003, 0x000000003a1077bb];
    const FINAL_EXPONENT_LAST_CHUNK_W0_IS_NEG: bool = true;

    fn embed(x: &Fq) -> Fq3 {
        Fq3::from_base(*x)
    }
}

/// Ate pairing on Edwards-183.
pub type Edwards183 = EdwardsPairing<Edwards183Params>;

/// Pairing target field; pairing values lie in its order-`r` subgroup.
pub type Gt = Fq6;
