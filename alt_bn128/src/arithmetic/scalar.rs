//! Scalar field of alt_bn128.

use crate::ORDER_HEX;
use towerfield::{Fp, bigint::U256, field_params};

field_params!(
    name: FrParams,
    modulus: ORDER_HEX,
    uint: U256,
    bytes: 32,
    multiplicative_generator: 5,
    doc: "alt_bn128 scalar field modulus"
);

/// Element of the alt_bn128 scalar field, in Montgomery form.
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
        assert_eq!(Fr::S, 28);
    }

    #[test]
    fn inverse_of_five() {
        let five = Fr::from_u64(5);
        let inv = five.invert().unwrap();
        assert_eq!(
            inv,
            Fr::from_hex("135b52945a13d9aa49b9b57c33cd568ba9ae5ce9ca4a2d06e7f3fbd4c6666667")
        );
        assert_eq!(five * inv, Fr::ONE);
    }
}
