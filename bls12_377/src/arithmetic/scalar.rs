//! Scalar field of BLS12-377.
//!
//! `r - 1` is divisible by `2^47`.

use crate::ORDER_HEX;
use towerfield::{Fp, bigint::U256, field_params};

field_params!(
    name: FrParams,
    modulus: ORDER_HEX,
    uint: U256,
    bytes: 32,
    multiplicative_generator: 22,
    doc: "BLS12-377 scalar field modulus"
);

/// Element of the BLS12-377 scalar field, in Montgomery form.
pub type Fr = Fp<FrParams, { U256::LIMBS }>;

#[cfg(test)]
mod tests {
    use super::Fr;
    use towerfield::ff::PrimeField;

    towerfield::test_field!(Fr);
    towerfield::test_sqrt_field!(Fr);
    towerfield::test_prime_field!(Fr);

    #[test]
    fn two_adicity() {
        assert_eq!(Fr::S, 47);
    }

    #[test]
    fn inverse_of_five() {
        let five = Fr::from_u64(5);
        let inv = five.invert().unwrap();
        assert_eq!(
            inv,
            Fr::from_hex("0eef844bae8a1ddeb3c370e51692f33447bb926573333334080e000000000001")
        );
        assert_eq!(five * inv, Fr::ONE);
        assert_eq!(five.invert_vartime().unwrap(), inv);
    }
}
