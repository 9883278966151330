//! Extension tower of MNT6-298:
//!
//! ```text
//! Fq3 = Fq[v] / (v^3 - 5)
//! Fq6 = Fq3[w] / (w^2 - v)
//! ```

use super::Fq;
use towerfield::{CubicExt, CubicExtConfig, QuadExt, QuadExtConfig, RessolParams};

/// Element of `Fq3`, the field of definition of G2.
pub type Fq3 = CubicExt<Fq3Config>;

/// Element of `Fq6`, the field containing the pairing target group.
pub type Fq6 = QuadExt<Fq6Config>;

/// `Fq3 = Fq[v] / (v^3 - 5)`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Fq3Config;

impl CubicExtConfig for Fq3Config {
    type Base = Fq;
    type FrobCoeff = Fq;

    const FROBENIUS_COEFF_C1: &'static [Fq] = &[
        Fq::ONE,
        Fq::from_hex("000003b48e50a1662e26f0e834e15faf68204a9845655f46b277a6d05b75068ad3f6801655344bec"),
        Fq::from_hex("00000008696c330d743f33b572cef4df62ce7ecb178ee24e48d1a53736e86448e74cb48daacbb414"),
    ];
    const FROBENIUS_COEFF_C2: &'static [Fq] = &[
        Fq::ONE,
        Fq::from_hex("00000008696c330d743f33b572cef4df62ce7ecb178ee24e48d1a53736e86448e74cb48daacbb414"),
        Fq::from_hex("000003b48e50a1662e26f0e834e15faf68204a9845655f46b277a6d05b75068ad3f6801655344bec"),
    ];

    /// Multiplies by `5`.
    fn mul_base_by_nonresidue(x: &Fq) -> Fq {
        x.double().double() + x
    }

    fn mul_base_by_frob_coeff(x: &Fq, coeff: &Fq) -> Fq {
        x * coeff
    }
}

/// `q^3 - 1 = 2^34 · T`; the non-residue is `2 + v`.
impl RessolParams<Fq3> for Fq3Config {
    const TWO_ADICITY: u32 = 34;
    const T_MINUS_ONE_DIV_TWO: &'static [u64] = &[
        0x69232b75663933bd,
        0x0ca650efcfc00ee0,
        0x77ca3963fe36f720,
        0xe4cb46632f9bcf7e,
        0xef510453f08f9f30,
        0x9dd5b8fc72f02d83,
        0x7f8d017ed86608ab,
        0xeb2219b3697c97a4,
        0xc8663846ab96996f,
        0x833cd532053eac7d,
        0x1d5b73dfb20bd3cc,
        0x6f5f6da606b59873,
        0x62e990f43dfc42d6,
        0x0000000006878f58,
    ];
    const NQR_TO_T: Fq3 = Fq3::from_base(Fq::from_hex(
        "0000032f0895dca815b9e4624cd339f90c6f3b5cc5bcb7c00f6dd5190f8b5de7ed6cd019163a82db",
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
        Fq::from_hex("000003b48e50a1662e26f0e834e15faf68204a9845655f46b277a6d05b75068ad3f6801655344bed"),
        Fq::from_hex("000003b48e50a1662e26f0e834e15faf68204a9845655f46b277a6d05b75068ad3f6801655344bec"),
        Fq::from_hex("000003bcf7bcd473a266249da7b0548ecaeec9635cf44194fb494c07925d6ad3bb4334a400000000"),
        Fq::from_hex("00000008696c330d743f33b572cef4df62ce7ecb178ee24e48d1a53736e86448e74cb48daacbb414"),
        Fq::from_hex("00000008696c330d743f33b572cef4df62ce7ecb178ee24e48d1a53736e86448e74cb48daacbb415"),
    ];

    /// Multiplies by `v`.
    fn mul_base_by_nonresidue(x: &Fq3) -> Fq3 {
        x.mul_by_nonresidue()
    }

    fn mul_base_by_frob_coeff(x: &Fq3, coeff: &Fq) -> Fq3 {
        x.scale(coeff)
    }
}
