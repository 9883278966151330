//! Scalar field of BLS12-381: integers modulo the order `r` of G1 and G2.
//!
//! `r - 1` is divisible by `2^32`, so square roots use Tonelli-Shanks.

use crate::ORDER_HEX;
use towerfield::{Fp, bigint::U256, field_params};

field_params!(
    name: FrParams,
    modulus: ORDER_HEX,
    uint: U256,
    bytes: 32,
    multiplicative_generator: 7,
    doc: "BLS12-381 scalar field modulus"
);

/// Element of the BLS12-381 scalar field, in Montgomery form.
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
        assert_eq!(Fr::S, 32);
    }

    #[test]
    fn inverse_of_five() {
        let five = Fr::from_u64(5);
        let inv = five.invert().unwrap();
        assert_eq!(
            inv,
            Fr::from_hex("458e97984c2b4b2b51ef819e6c2de803323e959b66656a65cccccccc33333334")
        );
        assert_eq!(five * inv, Fr::ONE);
        assert_eq!(five.invert_vartime().unwrap(), inv);
    }
}
