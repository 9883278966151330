//! Extension tower of Edwards-183:
//!
//! ```text
//! Fq3 = Fq[v] / (v^3 - 61)
//! Fq6 = Fq3[w] / (w^2 - v)
//! ```

use super::field::Fq;
use towerfield::{CubicExt, CubicExtConfig, QuadExt, QuadExtConfig, RessolParams};

/// Element of `Fq3`, the field of definition of G2.
pub type Fq3 = CubicExt<Fq3Config>;

/// Element of `Fq6`, the field containing the pairing target group.
pub type Fq6 = QuadExt<Fq6Config>;

/// `Fq3 = Fq[v] / (v^3 - 61)`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Fq3Config;

impl CubicExtConfig for Fq3Config {
    type Base = Fq;
    type FrobCoeff = Fq;

    const FROBENIUS_COEFF_C1: &'static [Fq] = &[
        Fq::ONE,
        Fq::from_hex("000b35e3665a18365954d018902935d4419423f84321bc3d"),
        Fq::from_hex("0035a01936d02124ba36c236460af76d755745133cde43c3"),
    ];
    const FROBENIUS_COEFF_C2: &'static [Fq] = &[
        Fq::ONE,
        Fq::from_hex("0035a01936d02124ba36c236460af76d755745133cde43c3"),
        Fq::from_hex("000b35e3665a18365954d018902935d4419423f84321bc3d"),
    ];

    /// Multiplies by `61`.
    fn mul_base_by_nonresidue(x: &Fq) -> Fq {
        x * &Fq::from_u64(61)
    }

    fn mul_base_by_frob_coeff(x: &Fq, coeff: &Fq) -> Fq {
        x * coeff
    }
}

/// `q^3 - 1 = 2^31 · T`; the non-residue is `61`.
impl RessolParams<Fq3> for Fq3Config {
    const TWO_ADICITY: u32 = 31;
    const T_MINUS_ONE_DIV_TWO: &'static [u64] = &[
        0x8342d651e4c23b22,
        0xea84a0a49d4f15a5,
        0x024fd9e9d8f1048a,
        0xbde0e9eaca04fb54,
        0xf94253de46487722,
        0xda4ff5e9f0ef2d1d,
        0xd50f203bb8c60fc9,
        0x28a619bc8433204a,
        0x0000000000000004,
    ];
    const NQR_TO_T: Fq3 = Fq3::from_base(Fq::from_hex(
        "003c6daac8b745ad5a05cc2c199e2f43f0c522924215b006",
    ));
}

/// `Fq6 = Fq3[w] / (w^2 - v)`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Fq6Config;

impl QuadExtConfig for Fq6Config {
    type Base = Fq3;
    type FrobCoeff = Fq;

    const FROBENIUS_COEFF_C1: &'static [Fq] = &[
        Fq::ONE,
        Fq::from_hex("000b35e3665a18365954d018902935d4419423f84321bc3e"),
        Fq::from_hex("000b35e3665a18365954d018902935d4419423f84321bc3d"),
        Fq::from_hex("0040d5fc9d2a395b138b924ed6342d41b6eb690b80000000"),
        Fq::from_hex("0035a01936d02124ba36c236460af76d755745133cde43c3"),
        Fq::from_hex("0035a01936d02124ba36c236460af76d755745133cde43c4"),
    ];

    /// Multiplies by `v`.
    fn mul_base_by_nonresidue(x: &Fq3) -> Fq3 {
        x.mul_by_nonresidue()
    }

    fn mul_base_by_frob_coeff(x: &Fq3, coeff: &Fq) -> Fq3 {
        x.scale(coeff)
    }
}

#[cfg(test)]
mod tests {
    use super::{Fq, Fq3, Fq6};
    use towerfield::{Field, SqrtField};

    mod fq3 {
        towerfield::test_field!(super::Fq3);
        towerfield::test_sqrt_field!(super::Fq3);
    }

    mod fq6 {
        towerfield::test_field!(super::Fq6);
    }

    #[test]
    fn tower_non_residues() {
        let v = Fq3::new(Fq::ZERO, Fq::ONE, Fq::ZERO);
        assert_eq!(v * v * v, Fq3::from(61u64));
        assert!(bool::from(v.sqrt().is_none()));

        let w = Fq6::new(Fq3::ZERO, Fq3::ONE);
        assert_eq!(w.square(), Fq6::from_base(v));
    }

    #[test]
    fn frobenius_is_the_q_power() {
        let q = Fq::modulus().to_words();
        let a = Fq6::new(
            Fq3::new(Fq::from_u64(7), Fq::from_u64(2), Fq::ONE),
            Fq3::new(Fq::from_u64(3), Fq::from_u64(8), Fq::from_u64(5)),
        );
        assert_eq!(a.frobenius_map(1), Field::pow_vartime(&a, &q));
        assert_eq!(a.frobenius_map(3), a.conjugate());

        let b = a.c0;
        assert_eq!(b.frobenius_map(1), Field::pow_vartime(&b, &q));
        assert_eq!(b.frobenius_map(2), Field::pow_vartime(&b.frobenius_map(1), &q));
    }
}
