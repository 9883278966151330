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
    tower::{Fq2, Fq2Config, Fq6, Fq6Config, Fq12, Fq12Config},
};
pub use curvegroup;
pub use pairing::{self, Engine};
pub use towerfield;

use pairing::{Bls12, Bls12Params, SexticTwistParams, TwistType};

/// Order of the BLS12-381 prime-order subgroups (i.e. scalar modulus) in hexadecimal.
const ORDER_HEX: &str = "73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001";

/// The BLS12-381 curve, parameterized by `x = -0xd201000000010000`.
///
/// ```text
/// p = (x - 1)^2 (x^4 - x^2 + 1) / 3 + x
/// r = x^4 - x^2 + 1
/// E:  y^2 = x^3 + 4
/// E': y^2 = x^3 + 4(u + 1)
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, PartialOrd, Ord)]
pub struct Bls12_381Params;

impl SexticTwistParams for Bls12_381Params {
    type Fp = Fq;
    type Fp2Config = Fq2Config;
    type Fp6Config = Fq6Config;
    type Fp12Config = Fq12Config;
    type G1 = G1Params;
    type G2 = G2Params;

    const TWIST_TYPE: TwistType = TwistType::M;
}

impl Bls12Params for Bls12_381Params {
    const X: u64 = 0xd201_0000_0001_0000;
    const X_IS_NEGATIVE: bool = true;
}

/// Optimal ate pairing on BLS12-381.
pub type Bls12_381 = Bls12<Bls12_381Params>;

/// Pairing target field; pairing values lie in its order-`r` subgroup.
pub type Gt = Fq12;
