//! Scalar field of Jubjub: integers modulo the order `r` of its prime-order subgroup.

use crate::ORDER_HEX;
use towerfield::{Fp, bigint::U256, field_params};

field_params!(
    name: FrParams,
    modulus: ORDER_HEX,
    uint: U256,
    bytes: 32,
    multiplicative_generator: 6,
    doc: "Jubjub scalar field modulus"
);

/// Element of the Jubjub scalar field, in Montgomery form.
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
        assert_eq!(Fr::S, 1);
    }

    #[test]
    fn inverse_of_five() {
        let five = Fr::from_u64(5);
        let inv = five.invert().unwrap();
        assert_eq!(
            inv,
            Fr::from_hex("02e5f0fbadd72321ce14a56699d73f0021480683f5c19ce6f6849c795e316f58")
        );
        assert_eq!(five * inv, Fr::ONE);
    }
}
