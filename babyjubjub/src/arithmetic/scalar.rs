//! Scalar field of Baby Jubjub: integers modulo the order `r` of its prime-order subgroup.

use crate::ORDER_HEX;
use towerfield::{Fp, bigint::U256, field_params};

field_params!(
    name: FrParams,
    modulus: ORDER_HEX,
    uint: U256,
    bytes: 32,
    multiplicative_generator: 31,
    doc: "Baby Jubjub scalar field modulus"
);

/// Element of the Baby Jubjub scalar field, in Montgomery form.
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
        assert_eq!(Fr::S, 4);
    }

    #[test]
    fn inverse_of_five() {
        let five = Fr::from_u64(5);
        let inv = five.invert().unwrap();
        assert_eq!(
            inv,
            Fr::from_hex("04d6d4a51684f66a926e6d5f0cf355a2ef658af9c74d8b3b85f54649c74db8c1")
        );
        assert_eq!(five * inv, Fr::ONE);
    }
}
