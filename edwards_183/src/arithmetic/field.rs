//! Base field of Edwards-183.

use towerfield::{Fp, bigint::U192, field_params};

field_params!(
    name: FqParams,
    modulus: "0040d5fc9d2a395b138b924ed6342d41b6eb690b80000001",
    uint: U192,
    bytes: 24,
    multiplicative_generator: 61,
    doc: "Edwards-183 base field modulus"
);

/// Element of the Edwards-183 base field, in Montgomery form.
pub type Fq = Fp<FqParams, { U192::LIMBS }>;

#[cfg(test)]
mod tests {
    use super::Fq;
    use towerfield::ff::PrimeField;

    towerfield::test_field!(Fq);
    towerfield::test_sqrt_field!(Fq);
    towerfield::test_prime_field!(Fq);

    #[test]
    fn two_adicity() {
        assert_eq!(Fq::S, 31);
        assert_eq!(Fq::NUM_BITS, 183);
    }

    #[test]
    fn sixty_one_is_not_a_square() {
        assert!(bool::from(Fq::from_u64(61).sqrt().is_none()));
    }
}
