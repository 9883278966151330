//! Scalar field of MNT4-298, which is also the base field of MNT6-298.

use crate::ORDER_HEX;
use towerfield::{Fp, bigint::U320, field_params};

field_params!(
    name: FrParams,
    modulus: ORDER_HEX,
    uint: U320,
    bytes: 38,
    multiplicative_generator: 10,
    doc: "MNT4-298 scalar field modulus"
);

/// Element of the MNT4-298 scalar field, in Montgomery form.
pub type Fr = Fp<FrParams, { U320::LIMBS }>;

#[cfg(test)]
mod tests {
    use super::Fr;
    use towerfield::ff::PrimeField;

    towerfield::test_field!(Fr);
    towerfield::test_sqrt_field!(Fr);
    towerfield::test_prime_field!(Fr);

    #[test]
    fn two_adicity() {
        assert_eq!(Fr::S, 34);
    }

    #[test]
    fn inverse_of_five() {
        let five = Fr::from_u64(5);
        let inv = five.invert().unwrap();
        assert_eq!(five * inv, Fr::ONE);
        assert_eq!(five.invert_vartime().unwrap(), inv);
    }
}
