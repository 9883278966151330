//! Base field of BLS12-381.
//!
//! `p ≡ 3 (mod 4)`, so square roots cost one exponentiation by `(p + 1) / 4`.

use towerfield::{Fp, bigint::U384, field_params};

field_params!(
    name: FqParams,
    modulus: "1a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaab",
    uint: U384,
    bytes: 48,
    multiplicative_generator: 2,
    doc: "BLS12-381 base field modulus"
);

/// Element of the BLS12-381 base field, in Montgomery form.
pub type Fq = Fp<FqParams, { U384::LIMBS }>;

#[cfg(test)]
mod tests {
    use super::Fq;
    use towerfield::ff::PrimeField;

    towerfield::test_field!(Fq);
    towerfield::test_sqrt_field!(Fq);
    towerfield::test_prime_field!(Fq);

    #[test]
    fn modulus_is_three_mod_four() {
        assert_eq!(Fq::modulus().as_words()[0] & 3, 3);
        assert_eq!(Fq::S, 1);
    }

    #[test]
    fn minus_one_is_not_a_square() {
        assert!(bool::from(Fq::sqrt(&-Fq::ONE).is_none()));
        assert_eq!(Fq::sqrt(&Fq::from_u64(4)).unwrap(), Fq::from_u64(2));
    }
}
