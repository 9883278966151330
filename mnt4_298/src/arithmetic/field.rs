//! Base field of MNT4-298, which is also the scalar field of MNT6-298.

use towerfield::{Fp, bigint::U320, field_params};

field_params!(
    name: FqParams,
    modulus: "000003bcf7bcd473a266249da7b0548ecaeec9635d1330ea41a9e35e51200e12c90cd65a71660001",
    uint: U320,
    bytes: 38,
    multiplicative_generator: 17,
    doc: "MNT4-298 base field modulus"
);

/// Element of the MNT4-298 base field, in Montgomery form.
pub type Fq = Fp<FqParams, { U320::LIMBS }>;
