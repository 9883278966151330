//! Extension tower of alt_bn128:
//!
//! ```text
//! Fq2  = Fq[u] / (u^2 + 1)
//! Fq6  = Fq2[v] / (v^3 - (u + 9))
//! Fq12 = Fq6[w] / (w^2 - v)
//! ```

use super::field::Fq;
use towerfield::{CubicExt, CubicExtConfig, QuadExt, QuadExtConfig, RessolParams};

/// Element of `Fq2`, the field of definition of G2.
pub type Fq2 = QuadExt<Fq2Config>;

/// Element of `Fq6`.
pub type Fq6 = CubicExt<Fq6Config>;

/// Element of `Fq12`, the field containing the pairing target group.
pub type Fq12 = QuadExt<Fq12Config>;

/// `Fq2 = Fq[u] / (u^2 + 1)`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Fq2Config;

impl QuadExtConfig for Fq2Config {
    type Base = Fq;
    type FrobCoeff = Fq;

    const FROBENIUS_COEFF_C1: &'static [Fq] = &[
        Fq::ONE,
        Fq::from_hex("30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd46"),
    ];

    /// Multiplies by `-1`.
    fn mul_base_by_nonresidue(x: &Fq) -> Fq {
        -x
    }

    fn mul_base_by_frob_coeff(x: &Fq, coeff: &Fq) -> Fq {
        x * coeff
    }
}

/// `q^2 - 1 = 2^4 · T`; the non-residue is `2 + u`.
impl RessolParams<Fq2> for Fq2Config {
    const TWO_ADICITY: u32 = 4;
    const T_MINUS_ONE_DIV_TWO: &'static [u64] = &[
        0x09daa2c5113aeb4d,
        0xe5301039684f5608,
        0x425280c4e36cb656,
        0x682344f4abd09216,
        0x31376fd2e1a6359c,
        0xe5805c2a88b1bab0,
        0xe2ccd37be01a4690,
        0x00492e25c3b1e5fc,
    ];
    const NQR_TO_T: Fq2 = Fq2::new(
        Fq::from_hex("0b20dcb5704e326a0dd3ecd4f30515275398a41a4e1dc5d347cfbbedda71cf82"),
        Fq::from_hex("00b1ffefd8885bf22252522c29527d19f05cfc50e9715370ab0f3a6ca462390c"),
    );
}

/// `Fq6 = Fq2[v] / (v^3 - ξ)` with `ξ = u + 9`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Fq6Config;

impl CubicExtConfig for Fq6Config {
    type Base = Fq2;
    type FrobCoeff = Fq2;

    const FROBENIUS_COEFF_C1: &'static [Fq2] = &[
        Fq2::ONE,
        Fq2::new(
            Fq::from_hex("2fb347984f7911f74c0bec3cf559b143b78cc310c2c3330c99e39557176f553d"),
            Fq::from_hex("16c9e55061ebae204ba4cc8bd75a079432ae2a1d0b7c9dce1665d51c640fcba2"),
        ),
        Fq2::new(
            Fq::from_hex("30644e72e131a0295e6dd9e7e0acccb0c28f069fbb966e3de4bd44e5607cfd48"),
            Fq::ZERO,
        ),
        Fq2::new(
            Fq::from_hex("0856e078b755ef0abaff1c77959f25ac805ffd3d5d6942d37b746ee87bdcfb6d"),
            Fq::from_hex("04f1de41b3d1766fa9f30e6dec26094f0fdf31bf98ff2631380cab2baaa586de"),
        ),
        Fq2::new(
            Fq::from_hex("000000000000000059e26bcea0d48bacd4f263f1acdb5c4f5763473177fffffe"),
            Fq::ZERO,
        ),
        Fq2::new(
            Fq::from_hex("28be74d4bb943f51699582b87809d9caf71614d4b0b71f3a62e913ee1dada9e4"),
            Fq::from_hex("14a88ae0cb747b99c2b86abcbe01477a54f40eb4c3f6068dedae0bcec9c7aac7"),
        ),
    ];
    const FROBENIUS_COEFF_C2: &'static [Fq2] = &[
        Fq2::ONE,
        Fq2::new(
            Fq::from_hex("05b54f5e64eea80180f3c0b75a181e84d33365f7be94ec72848a1f55921ea762"),
            Fq::from_hex("2c145edbe7fd8aee9f3a80b03b0b1c923685d2ea1bdec763c13b4711cd2b8126"),
        ),
        Fq2::new(
            Fq::from_hex("000000000000000059e26bcea0d48bacd4f263f1acdb5c4f5763473177fffffe"),
            Fq::ZERO,
        ),
        Fq2::new(
            Fq::from_hex("0bc58c6611c08dab19bee0f7b5b2444ee633094575b06bcb0e1a92bc3ccbf066"),
            Fq::from_hex("23d5e999e1910a12feb0f6ef0cd21d04a44a9e08737f96e55fe3ed9d730c239f"),
        ),
        Fq2::new(
            Fq::from_hex("30644e72e131a0295e6dd9e7e0acccb0c28f069fbb966e3de4bd44e5607cfd48"),
            Fq::ZERO,
        ),
        Fq2::new(
            Fq::from_hex("1ee972ae6a826a7d1d9da40771b6f589de1afb54342c724fa97bda050992657f"),
            Fq::from_hex("10de546ff8d4ab51d2b513cdbb25772454326430418536d15721e37e70c255c9"),
        ),
    ];

    /// Multiplies by `ξ = u + 9`.
    fn mul_base_by_nonresidue(x: &Fq2) -> Fq2 {
        let nine = x.double().double().double() + x;
        Fq2::new(nine.c0 - x.c1, nine.c1 + x.c0)
    }

    fn mul_base_by_frob_coeff(x: &Fq2, coeff: &Fq2) -> Fq2 {
        x * coeff
    }
}

/// `Fq12 = Fq6[w] / (w^2 - v)`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Fq12Config;

impl QuadExtConfig for Fq12Config {
    type Base = Fq6;
    type FrobCoeff = Fq2;

    const FROBENIUS_COEFF_C1: &'static [Fq2] = &[
        Fq2::ONE,
        Fq2::new(
            Fq::from_hex("1284b71c2865a7dfe8b99fdd76e68b605c521e08292f2176d60b35dadcc9e470"),
            Fq::from_hex("246996f3b4fae7e6a6327cfe12150b8e747992778eeec7e5ca5cf05f80f362ac"),
        ),
        Fq2::new(
            Fq::from_hex("30644e72e131a0295e6dd9e7e0acccb0c28f069fbb966e3de4bd44e5607cfd49"),
            Fq::ZERO,
        ),
        Fq2::new(
            Fq::from_hex("19dc81cfcc82e4bbefe9608cd0acaa90894cb38dbe55d24ae86f7d391ed4a67f"),
            Fq::from_hex("00abf8b60be77d7306cbeee33576139d7f03a5e397d439ec7694aa2bf4c0c101"),
        ),
        Fq2::new(
            Fq::from_hex("30644e72e131a0295e6dd9e7e0acccb0c28f069fbb966e3de4bd44e5607cfd48"),
            Fq::ZERO,
        ),
        Fq2::new(
            Fq::from_hex("0757cab3a41d3cdc072fc0af59c61f302cfa95859526b0d41264475e420ac20f"),
            Fq::from_hex("0ca6b035381e35b618e9b79ba4e2606ca20b7dfd71573c93e85845e34c4a5b9c"),
        ),
        Fq2::new(
            Fq::from_hex("30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd46"),
            Fq::ZERO,
        ),
        Fq2::new(
            Fq::from_hex("1ddf9756b8cbf849cf96a5d90a9accfd3b2f4c893f42a9166615563bfbb318d7"),
            Fq::from_hex("0bfab77f2c36b843121dc8b86f6c4ccf2307d819d98302a771c39bb757899a9b"),
        ),
        Fq2::new(
            Fq::from_hex("000000000000000059e26bcea0d48bacd4f263f1acdb5c4f5763473177fffffe"),
            Fq::ZERO,
        ),
        Fq2::new(
            Fq::from_hex("1687cca314aebb6dc866e529b0d4adcd0e34b703aa1bf84253b10eddb9a856c8"),
            Fq::from_hex("2fb855bcd54a22b6b18456d34c0b44c0187dc4add09d90a0c58be1eae3bc3c46"),
        ),
        Fq2::new(
            Fq::from_hex("000000000000000059e26bcea0d48bacd4f263f1acdb5c4f5763473177ffffff"),
            Fq::ZERO,
        ),
        Fq2::new(
            Fq::from_hex("290c83bf3d14634db120850727bb392d6a86d50bd34b19b929bc44b896723b38"),
            Fq::from_hex("23bd9e3da9136a739f668e1adc9ef7f0f575ec93f71a8df953c846338c32a1ab"),
        ),
    ];

    fn mul_base_by_nonresidue(x: &Fq6) -> Fq6 {
        x.mul_by_nonresidue()
    }

    fn mul_base_by_frob_coeff(x: &Fq6, coeff: &Fq2) -> Fq6 {
        x.scale(coeff)
    }
}
