#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

mod cubic;
mod dev;
mod error;
mod field;
mod fp;
mod macros;
mod modular;
mod ops;
mod quadratic;

pub use crate::{
    cubic::{CubicExt, CubicExtConfig},
    error::{Error, Result},
    field::{Field, RessolParams, SqrtField, ressol},
    fp::{FieldBytes, FieldParams, Fp},
    modular::{BarrettParams, ModularInteger, Modulus},
    quadratic::{QuadExt, QuadExtConfig},
};
pub use bigint;
pub use ff;
pub use rand_core;
pub use subtle;
pub use zeroize;
