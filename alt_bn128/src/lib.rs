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

use pairing::{Bn, BnParams, SexticTwistParams, TwistType};

/// Order of G1 and G2 (i.e. scalar modulus) in hexadecimal.
const ORDER_HEX: &str = "30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000001";

/// The alt_bn128 curve, parameterized by `x = 4965661367192848881`.
///
/// ```text
/// p = 36x^4 + 36x^3 + 24x^2 + 6x + 1
/// r = 36x^4 + 36x^3 + 18x^2 + 6x + 1
/// E:  y^2 = x^3 + 3
/// E': y^2 = x^3 + 3/(u + 9)
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, PartialOrd, Ord)]
pub struct Bn254Params;

impl SexticTwistParams for Bn254Params {
    type Fp = Fq;
    type Fp2Config = Fq2Config;
    type Fp6Config = Fq6Config;
    type Fp12Config = Fq12Config;
    type G1 = G1Params;
    type G2 = G2Params;

    const TWIST_TYPE: TwistType = TwistType::D;
}

impl BnParams for Bn254Params {
    const X: u64 = 4_965_661_367_192_848_881;
    const X_IS_NEGATIVE: bool = false;
    /// `6x + 2`
    const ATE_LOOP_COUNT: &'static [u64] = &[0x9d79_7039_be76_3ba8, 0x1];

    const TWIST_MUL_BY_Q_X: Fq2 = Fq2::new(
        Fq::from_hex("2fb347984f7911f74c0bec3cf559b143b78cc310c2c3330c99e39557176f553d"),
        Fq::from_hex("16c9e55061ebae204ba4cc8bd75a079432ae2a1d0b7c9dce1665d51c640fcba2"),
    );
    const TWIST_MUL_BY_Q_Y: Fq2 = Fq2::new(
        Fq::from_hex("063cf305489af5dcdc5ec698b6e2f9b9dbaae0eda9c95998dc54014671a0135a"),
        Fq::from_hex("07c03cbcac41049a0704b5a7ec796f2b21807dc98fa25bd282d37f632623b0e3"),
    );
}

/// Optimal ate pairing on alt_bn128.
pub type Bn254 = Bn<Bn254Params>;

/// Pairing target field; pairing values lie in its order-`r` subgroup.
pub type Gt = Fq12;
