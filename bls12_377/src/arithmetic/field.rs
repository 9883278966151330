//! Base field of BLS12-377.

use towerfield::{Fp, bigint::U384, field_params};

field_params!(
    name: FqParams,
    modulus: "01ae3a4617c510eac63b05c06ca1493b1a22d9f300f5138f1ef3622fba094800170b5d44300000008508c00000000001",
    uint: U384,
    bytes: 48,
    multiplicative_generator: 15,
    doc: "BLS12-377 base field modulus"
);

/// Element of the BLS12-377 base field, in Montgomery form.
pub type Fq = Fp<FqParams, { U384::LIMBS }>;

#[cfg(test)]
mod tests {
    use super::Fq;
    use towerfield::ff::PrimeField;

    towerfield::test_field!(Fq);
    towerfield::test_sqrt_field!(Fq);
    towerfield::test_prime_field!(Fq);

    #[test]
    fn two_adicity() {
        assert_eq!(Fq::S, 46);
    }

    #[test]
    fn minus_five_is_not_a_square() {
        let minus_five = -Fq::from_u64(5);
        assert!(bool::from(minus_five.sqrt().is_none()));
        assert!(bool::from(minus_five.square().sqrt().is_some()));
    }
}
