#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

extern crate alloc;

pub mod edwards;
pub mod multiexp;
pub mod weierstrass;

mod dev;
mod error;
mod lookup_table;
mod macros;
mod scalar;

pub use crate::{
    error::{Error, Result},
    multiexp::{MultiexpMethod, multiexp},
};
pub use ff;
pub use group;
pub use towerfield;
