#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

pub mod arithmetic;

pub use crate::arithmetic::{
    AffinePoint, ExtendedPoint, Fq, JubjubParams,
    scalar::{Fr, FrParams},
};
pub use curvegroup;
pub use towerfield;

/// Order of the prime-order subgroup (i.e. scalar modulus) in hexadecimal.
const ORDER_HEX: &str = "0e7db4ea6533afa906673b0101343b00a6682093ccc81082d0970e5ed6f72cb7";
