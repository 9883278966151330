//! Extension tower of BLS12-381:
//!
//! ```text
//! Fq2  = Fq[u] / (u^2 + 1)
//! Fq6  = Fq2[v] / (v^3 - (u + 1))
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
        Fq::from_hex("1a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaaa"),
    ];

    /// Multiplies by `-1`.
    fn mul_base_by_nonresidue(x: &Fq) -> Fq {
        -x
    }

    fn mul_base_by_frob_coeff(x: &Fq, coeff: &Fq) -> Fq {
        x * coeff
    }
}

/// `q^2 - 1 = 2^3 · T`; the non-residue is `1 + u`.
impl RessolParams<Fq2> for Fq2Config {
    const TWO_ADICITY: u32 = 3;
    const T_MINUS_ONE_DIV_TWO: &'static [u64] = &[
        0xb26aa00001c718e3,
        0xd7ced6b1d76382ea,
        0x3162c338362113cf,
        0x966bf91ed3e71b74,
        0xb292e85a87091a04,
        0x11d68619c86185c7,
        0xef53149330978ef0,
        0x050a62cfd16ddca6,
        0x466e59e49349e8bd,
        0x9e2dc90e50e7046b,
        0x74bd278eaa22f25e,
        0x002a437a4b8c35fc,
    ];
    const NQR_TO_T: Fq2 = Fq2::new(
        Fq::from_hex("06af0e0437ff400b6831e36d6bd17ffe48395dabc2d3435e77f76e17009241c5ee67992f72ec05f4c81084fbede3cc09"),
        Fq::from_hex("135203e60180a68ee2e9c448d77a2cd91c3dedd930b1cf60ef396489f61eb45e304466cf3e67fa0af1ee7b04121bdea2"),
    );
}

/// `Fq6 = Fq2[v] / (v^3 - ξ)` with `ξ = u + 1`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Fq6Config;

impl CubicExtConfig for Fq6Config {
    type Base = Fq2;
    type FrobCoeff = Fq2;

    const FROBENIUS_COEFF_C1: &'static [Fq2] = &[
        Fq2::ONE,
        Fq2::new(
            Fq::ZERO,
            Fq::from_hex("1a0111ea397fe699ec02408663d4de85aa0d857d89759ad4897d29650fb85f9b409427eb4f49fffd8bfd00000000aaac"),
        ),
        Fq2::new(
            Fq::from_hex("00000000000000005f19672fdf76ce51ba69c6076a0f77eaddb3a93be6f89688de17d813620a00022e01fffffffefffe"),
            Fq::ZERO,
        ),
        Fq2::new(Fq::ZERO, Fq::ONE),
        Fq2::new(
            Fq::from_hex("1a0111ea397fe699ec02408663d4de85aa0d857d89759ad4897d29650fb85f9b409427eb4f49fffd8bfd00000000aaac"),
            Fq::ZERO,
        ),
        Fq2::new(
            Fq::ZERO,
            Fq::from_hex("00000000000000005f19672fdf76ce51ba69c6076a0f77eaddb3a93be6f89688de17d813620a00022e01fffffffefffe"),
        ),
    ];
    const FROBENIUS_COEFF_C2: &'static [Fq2] = &[
        Fq2::ONE,
        Fq2::new(
            Fq::from_hex("1a0111ea397fe699ec02408663d4de85aa0d857d89759ad4897d29650fb85f9b409427eb4f49fffd8bfd00000000aaad"),
            Fq::ZERO,
        ),
        Fq2::new(
            Fq::from_hex("1a0111ea397fe699ec02408663d4de85aa0d857d89759ad4897d29650fb85f9b409427eb4f49fffd8bfd00000000aaac"),
            Fq::ZERO,
        ),
        Fq2::new(
            Fq::from_hex("1a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaaa"),
            Fq::ZERO,
        ),
        Fq2::new(
            Fq::from_hex("00000000000000005f19672fdf76ce51ba69c6076a0f77eaddb3a93be6f89688de17d813620a00022e01fffffffefffe"),
            Fq::ZERO,
        ),
        Fq2::new(
            Fq::from_hex("00000000000000005f19672fdf76ce51ba69c6076a0f77eaddb3a93be6f89688de17d813620a00022e01fffffffeffff"),
            Fq::ZERO,
        ),
    ];

    /// Multiplies by `ξ = u + 1`.
    fn mul_base_by_nonresidue(x: &Fq2) -> Fq2 {
        Fq2::new(x.c0 - x.c1, x.c0 + x.c1)
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
            Fq::from_hex("1904d3bf02bb0667c231beb4202c0d1f0fd603fd3cbd5f4f7b2443d784bab9c4f67ea53d63e7813d8d0775ed92235fb8"),
            Fq::from_hex("00fc3e2b36c4e03288e9e902231f9fb854a14787b6c7b36fec0c8ec971f63c5f282d5ac14d6c7ec22cf78a126ddc4af3"),
        ),
        Fq2::new(
            Fq::from_hex("00000000000000005f19672fdf76ce51ba69c6076a0f77eaddb3a93be6f89688de17d813620a00022e01fffffffeffff"),
            Fq::ZERO,
        ),
        Fq2::new(
            Fq::from_hex("135203e60180a68ee2e9c448d77a2cd91c3dedd930b1cf60ef396489f61eb45e304466cf3e67fa0af1ee7b04121bdea2"),
            Fq::from_hex("06af0e0437ff400b6831e36d6bd17ffe48395dabc2d3435e77f76e17009241c5ee67992f72ec05f4c81084fbede3cc09"),
        ),
        Fq2::new(
            Fq::from_hex("00000000000000005f19672fdf76ce51ba69c6076a0f77eaddb3a93be6f89688de17d813620a00022e01fffffffefffe"),
            Fq::ZERO,
        ),
        Fq2::new(
            Fq::from_hex("144e4211384586c16bd3ad4afa99cc9170df3560e77982d0db45f3536814f0bd5871c1908bd478cd1ee605167ff82995"),
            Fq::from_hex("05b2cfd9013a5fd8df47fa6b48b1e045f39816240c0b8fee8beadf4d8e9c0566c63a3e6e257f87329b18fae980078116"),
        ),
        Fq2::new(
            Fq::from_hex("1a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaaa"),
            Fq::ZERO,
        ),
        Fq2::new(
            Fq::from_hex("00fc3e2b36c4e03288e9e902231f9fb854a14787b6c7b36fec0c8ec971f63c5f282d5ac14d6c7ec22cf78a126ddc4af3"),
            Fq::from_hex("1904d3bf02bb0667c231beb4202c0d1f0fd603fd3cbd5f4f7b2443d784bab9c4f67ea53d63e7813d8d0775ed92235fb8"),
        ),
        Fq2::new(
            Fq::from_hex("1a0111ea397fe699ec02408663d4de85aa0d857d89759ad4897d29650fb85f9b409427eb4f49fffd8bfd00000000aaac"),
            Fq::ZERO,
        ),
        Fq2::new(
            Fq::from_hex("06af0e0437ff400b6831e36d6bd17ffe48395dabc2d3435e77f76e17009241c5ee67992f72ec05f4c81084fbede3cc09"),
            Fq::from_hex("135203e60180a68ee2e9c448d77a2cd91c3dedd930b1cf60ef396489f61eb45e304466cf3e67fa0af1ee7b04121bdea2"),
        ),
        Fq2::new(
            Fq::from_hex("1a0111ea397fe699ec02408663d4de85aa0d857d89759ad4897d29650fb85f9b409427eb4f49fffd8bfd00000000aaad"),
            Fq::ZERO,
        ),
        Fq2::new(
            Fq::from_hex("05b2cfd9013a5fd8df47fa6b48b1e045f39816240c0b8fee8beadf4d8e9c0566c63a3e6e257f87329b18fae980078116"),
            Fq::from_hex("144e4211384586c16bd3ad4afa99cc9170df3560e77982d0db45f3536814f0bd5871c1908bd478cd1ee605167ff82995"),
        ),
    ];

    fn mul_base_by_nonresidue(x: &Fq6) -> Fq6 {
        x.mul_by_nonresidue()
    }

    fn mul_base_by_frob_coeff(x: &Fq6, coeff: &Fq2) -> Fq6 {
        x.scale(coeff)
    }
}

#[cfg(test)]
mod tests {
    use super::{Fq2, Fq6, Fq12};
    use crate::Fq;
    use towerfield::{Field, SqrtField};

    mod fq2 {
        towerfield::test_field!(super::Fq2);
        towerfield::test_sqrt_field!(super::Fq2);
    }

    mod fq6 {
        towerfield::test_field!(super::Fq6);
    }

    mod fq12 {
        towerfield::test_field!(super::Fq12);
    }

    #[test]
    fn tower_non_residues() {
        let u = Fq2::new(Fq::ZERO, Fq::ONE);
        assert_eq!(u.square(), -Fq2::ONE);

        let xi = Fq2::new(Fq::ONE, Fq::ONE);
        let v = Fq6::new(Fq2::ZERO, Fq2::ONE, Fq2::ZERO);
        assert_eq!(v * v * v, Fq6::from_base(xi));

        let w = Fq12::new(Fq6::ZERO, Fq6::ONE);
        assert_eq!(w.square(), Fq12::from_base(v));
    }

    #[test]
    fn xi_is_not_a_square() {
        let xi = Fq2::new(Fq::ONE, Fq::ONE);
        assert!(bool::from(xi.sqrt().is_none()));
        assert!(bool::from((xi * xi).sqrt().is_some()));
    }

    #[test]
    fn frobenius_is_the_q_power() {
        let q = Fq::modulus().to_words();
        let a = Fq12::new(
            Fq6::new(Fq2::from(3u64), Fq2::from(5u64), Fq2::new(Fq::ONE, Fq::from_u64(7))),
            Fq6::new(Fq2::from(11u64), Fq2::ONE, Fq2::new(Fq::from_u64(2), Fq::ONE)),
        );
        assert_eq!(a.frobenius_map(1), Field::pow_vartime(&a, &q));
        assert_eq!(a.frobenius_map(6), a.conjugate());
    }
}
