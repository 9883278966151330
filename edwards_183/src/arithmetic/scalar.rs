//! Scalar field of Edwards-183.

use crate::ORDER_HEX;
use towerfield::{Fp, bigint::U192, field_params};

field_params!(
    name: FrParams,
    modulus: ORDER_HEX,
    uint: U192,
    bytes: 24,
    multiplicative_generator: 19,
    doc: "Edwards-183 scalar field modulus"
);

/// Element of the Edwards-183 scalar field, in Montgomery form.
pub type Fr = Fp<FrParams, { U192::LIMBS }>;
