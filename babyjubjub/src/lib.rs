#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

pub mod arithmetic;

pub use crate::arithmetic::{
    AffinePoint, ExtendedPoint, Fq, BabyJubjubParams,
    scalar::{Fr, FrParams},
};
pub use curvegroup;
pub use towerfield;

/// Order of the prime-order subgroup (i.e. scalar modulus) in hexadecimal.
const ORDER_HEX: &str = "060c89ce5c263405370a08b6d0302b0bab3eedb83920ee0a677297dc392126f1";
