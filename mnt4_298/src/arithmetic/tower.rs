//! Extension tower of MNT4-298:
//!
//! ```text
//! Fq2 = Fq[u] / (u^2 - 17)
//! Fq4 = Fq2[w] / (w^2 - u)
//! ```

use super::field::Fq;
use towerfield::{QuadExt, QuadExtConfig, RessolParams};

/// Element of `Fq2`, the field of definition of G2.
pub type Fq2 = QuadExt<Fq2Config>;

/// Element of `Fq4`, the field containing the pairing target group.
pub type Fq4 = QuadExt<Fq4Config>;

/// `Fq2 = Fq[u] / (u^2 - 17)`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Fq2Config;

impl QuadExtConfig for Fq2Config {
    type Base = Fq;
    type FrobCoeff = Fq;

    const FROBENIUS_COEFF_C1: &'static [Fq] = &[
        Fq::ONE,
        Fq::from_hex("000003bcf7bcd473a266249da7b0548ecaeec9635d1330ea41a9e35e51200e12c90cd65a71660000"),
    ];

    /// Multiplies by `17`.
    fn mul_base_by_nonresidue(x: &Fq) -> Fq {
        x.double().double().double().double() + x
    }

    fn mul_base_by_frob_coeff(x: &Fq, coeff: &Fq) -> Fq {
        x * coeff
    }
}

/// `q^2 - 1 = 2^18 · T`; the non-residue is `8 + u`.
impl RessolParams<Fq2> for Fq2Config {
    const TWO_ADICITY: u32 = 18;
    const T_MINUS_ONE_DIV_TWO: &'static [u64] = &[
        0x07e801019c2b1c59,
        0x4507f977fbd351d4,
        0x00c87ff0e6db217c,
        0xbb95077b5f54de53,
        0xbb90b3d4243819ea,
        0x8c2288186594bf9d,
        0x9e3469afbd18966d,
        0x1a6bdd3171639a8a,
        0xbf296742159c990d,
        0x0000000000000001,
    ];
    const NQR_TO_T: Fq2 = Fq2::new(
        Fq::ZERO,
        Fq::from_hex("0000003b1f45391287a9cb585b8e5504c24bf1ec2010553885078c85899acd708205080134a9be6a"),
    );
}

/// `Fq4 = Fq2[w] / (w^2 - u)`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Fq4Config;

impl QuadExtConfig for Fq4Config {
    type Base = Fq2;
    type FrobCoeff = Fq;

    const FROBENIUS_COEFF_C1: &'static [Fq] = &[
        Fq::ONE,
        Fq::from_hex("0000000f73779fe09916dfdcc2fd1f968d534beb17daf7518cd9fae5c1f7bdcf94dd5d7def6980c4"),
        Fq::from_hex("000003bcf7bcd473a266249da7b0548ecaeec9635d1330ea41a9e35e51200e12c90cd65a71660000"),
        Fq::from_hex("000003ad84453493094f44c0e4b334f83d9b7d7845383998b4cfe8788f285043342f78dc81fc7f3d"),
    ];

    /// Multiplies by `u`.
    fn mul_base_by_nonresidue(x: &Fq2) -> Fq2 {
        x.mul_by_nonresidue()
    }

    fn mul_base_by_frob_coeff(x: &Fq2, coeff: &Fq) -> Fq2 {
        x.scale(coeff)
    }
}

#[cfg(test)]
mod tests {
    use super::{Fq2, Fq4};
    use crate::Fq;
    use towerfield::{Field, SqrtField};

    mod fq2 {
        towerfield::test_field!(super::Fq2);
        towerfield::test_sqrt_field!(super::Fq2);
    }

    mod fq4 {
        towerfield::test_field!(super::Fq4);
    }

    #[test]
    fn tower_non_residues() {
        let u = Fq2::new(Fq::ZERO, Fq::ONE);
        assert_eq!(u.square(), Fq2::from(17u64));
        assert!(bool::from(u.sqrt().is_none()));

        let w = Fq4::new(Fq2::ZERO, Fq2::ONE);
        assert_eq!(w.square(), Fq4::from_base(u));
    }

    #[test]
    fn frobenius_is_the_q_power() {
        let q = Fq::modulus().to_words();
        let a = Fq4::new(Fq2::new(Fq::from_u64(3), Fq::ONE), Fq2::new(Fq::from_u64(5), Fq::from_u64(7)));
        assert_eq!(a.frobenius_map(1), Field::pow_vartime(&a, &q));
        assert_eq!(a.frobenius_map(2), a.conjugate());
    }
}
