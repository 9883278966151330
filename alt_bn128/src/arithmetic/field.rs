//! Base field of alt_bn128.

use towerfield::{Fp, bigint::U256, field_params};

field_params!(
    name: FqParams,
    modulus: "30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd47",
    uint: U256,
    bytes: 32,
    multiplicative_generator: 3,
    doc: "alt_bn128 base field modulus"
);

/// Element of the alt_bn128 base field, in Montgomery form.
pub type Fq = Fp<FqParams, { U256::LIMBS }>;

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
    fn generator_lies_on_the_curve() {
        let (x, y) = (Fq::ONE, Fq::from_u64(2));
        assert_eq!(y.square(), x.square() * x + Fq::from_u64(3));
    }
}
