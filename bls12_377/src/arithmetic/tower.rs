//! Extension tower of BLS12-377:
//!
//! ```text
//! Fq2  = Fq[u] / (u^2 + 5)
//! Fq6  = Fq2[v] / (v^3 - u)
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

/// `Fq2 = Fq[u] / (u^2 + 5)`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Fq2Config;

impl QuadExtConfig for Fq2Config {
    type Base = Fq;
    type FrobCoeff = Fq;

    const FROBENIUS_COEFF_C1: &'static [Fq] = &[
        Fq::ONE,
        Fq::from_hex("01ae3a4617c510eac63b05c06ca1493b1a22d9f300f5138f1ef3622fba094800170b5d44300000008508c00000000000"),
    ];

    /// Multiplies by `-5`.
    fn mul_base_by_nonresidue(x: &Fq) -> Fq {
        -(x.double().double() + x)
    }

    fn mul_base_by_frob_coeff(x: &Fq, coeff: &Fq) -> Fq {
        x * coeff
    }
}

/// `q^2 - 1 = 2^47 · T`; the non-residue is `5 + u`.
impl RessolParams<Fq2> for Fq2Config {
    const TWO_ADICITY: u32 = 47;
    const T_MINUS_ONE_DIV_TWO: &'static [u64] = &[
        0xd254f00000010a11,
        0x268f2e1bd8007338,
        0xfbd235f1c09a4ada,
        0x24b958638c9d6bcb,
        0xaaaa8bb70ae03183,
        0xe712502a4d6c460a,
        0x18afb90660cdc014,
        0x71413dda4d5c09d0,
        0xb87da4aee93f1f5e,
        0x913bb361263c4bb8,
        0xd307d0bbaffb2256,
        0x0000000000000002,
    ];
    const NQR_TO_T: Fq2 = Fq2::new(
        Fq::ZERO,
        Fq::from_hex("0104022f48def9c08e995ffb55e2995f6c518afc50929d89e4687f13a38cf8fafcf2903bc9b095a510fbbecd5dd58304"),
    );
}

/// `Fq6 = Fq2[v] / (v^3 - ξ)` with `ξ = u`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Fq6Config;

impl CubicExtConfig for Fq6Config {
    type Base = Fq2;
    type FrobCoeff = Fq2;

    const FROBENIUS_COEFF_C1: &'static [Fq2] = &[
        Fq2::ONE,
        Fq2::new(
            Fq::from_hex("000000000000000009b3af05dd14f6ec619aaf7d34594aabc5ed1347970dec00452217cc900000008508c00000000002"),
            Fq::ZERO,
        ),
        Fq2::new(
            Fq::from_hex("000000000000000009b3af05dd14f6ec619aaf7d34594aabc5ed1347970dec00452217cc900000008508c00000000001"),
            Fq::ZERO,
        ),
        Fq2::new(
            Fq::from_hex("01ae3a4617c510eac63b05c06ca1493b1a22d9f300f5138f1ef3622fba094800170b5d44300000008508c00000000000"),
            Fq::ZERO,
        ),
        Fq2::new(
            Fq::from_hex("01ae3a4617c510eabc8756ba8f8c524eb8882a75cc9bc8e359064ee822fb5bffd1e945779fffffffffffffffffffffff"),
            Fq::ZERO,
        ),
        Fq2::new(
            Fq::from_hex("01ae3a4617c510eabc8756ba8f8c524eb8882a75cc9bc8e359064ee822fb5bffd1e94577a00000000000000000000000"),
            Fq::ZERO,
        ),
    ];
    const FROBENIUS_COEFF_C2: &'static [Fq2] = &[
        Fq2::ONE,
        Fq2::new(
            Fq::from_hex("000000000000000009b3af05dd14f6ec619aaf7d34594aabc5ed1347970dec00452217cc900000008508c00000000001"),
            Fq::ZERO,
        ),
        Fq2::new(
            Fq::from_hex("01ae3a4617c510eabc8756ba8f8c524eb8882a75cc9bc8e359064ee822fb5bffd1e945779fffffffffffffffffffffff"),
            Fq::ZERO,
        ),
        Fq2::ONE,
        Fq2::new(
            Fq::from_hex("000000000000000009b3af05dd14f6ec619aaf7d34594aabc5ed1347970dec00452217cc900000008508c00000000001"),
            Fq::ZERO,
        ),
        Fq2::new(
            Fq::from_hex("01ae3a4617c510eabc8756ba8f8c524eb8882a75cc9bc8e359064ee822fb5bffd1e945779fffffffffffffffffffffff"),
            Fq::ZERO,
        ),
    ];

    /// Multiplies by `ξ = u`.
    fn mul_base_by_nonresidue(x: &Fq2) -> Fq2 {
        Fq2::new(Fq2Config::mul_base_by_nonresidue(&x.c1), x.c0)
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
            Fq::from_hex("009a9975399c019633c1e30682567f915c8a45e0f94ebc8ec681bf34a3aa559db57668e558eb0188e938a9d1104f2031"),
            Fq::ZERO,
        ),
        Fq2::new(
            Fq::from_hex("000000000000000009b3af05dd14f6ec619aaf7d34594aabc5ed1347970dec00452217cc900000008508c00000000002"),
            Fq::ZERO,
        ),
        Fq2::new(
            Fq::from_hex("01680a40796537cac0c534db1a79beb1400398f50ad1dec1bce649cf436b0f6299588459bff27d8e6e76d5ecf1391c63"),
            Fq::ZERO,
        ),
        Fq2::new(
            Fq::from_hex("000000000000000009b3af05dd14f6ec619aaf7d34594aabc5ed1347970dec00452217cc900000008508c00000000001"),
            Fq::ZERO,
        ),
        Fq2::new(
            Fq::from_hex("00cd70cb3fc936348d0351d498233f1fe379531411832232f6648a9a9fc0b9c4e3e21b7467077c05853e2c1be0e9fc32"),
            Fq::ZERO,
        ),
        Fq2::new(
            Fq::from_hex("01ae3a4617c510eac63b05c06ca1493b1a22d9f300f5138f1ef3622fba094800170b5d44300000008508c00000000000"),
            Fq::ZERO,
        ),
        Fq2::new(
            Fq::from_hex("0113a0d0de290f54927922b9ea4ac9a9bd98941207a657005871a2fb165ef2626194f45ed714fe779bd0162eefb0dfd0"),
            Fq::ZERO,
        ),
        Fq2::new(
            Fq::from_hex("01ae3a4617c510eabc8756ba8f8c524eb8882a75cc9bc8e359064ee822fb5bffd1e945779fffffffffffffffffffffff"),
            Fq::ZERO,
        ),
        Fq2::new(
            Fq::from_hex("004630059e5fd9200575d0e552278a89da1f40fdf62334cd620d1860769e389d7db2d8ea700d82721691ea130ec6e39e"),
            Fq::ZERO,
        ),
        Fq2::new(
            Fq::from_hex("01ae3a4617c510eabc8756ba8f8c524eb8882a75cc9bc8e359064ee822fb5bffd1e94577a00000000000000000000000"),
            Fq::ZERO,
        ),
        Fq2::new(
            Fq::from_hex("00e0c97ad7fbdab63937b3ebd47e0a1b36a986deef71f15c288ed7951a488e3b332941cfc8f883faffca93e41f1603cf"),
            Fq::ZERO,
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
        assert_eq!(u.square(), -Fq2::from(5u64));

        let v = Fq6::new(Fq2::ZERO, Fq2::ONE, Fq2::ZERO);
        assert_eq!(v * v * v, Fq6::from_base(u));

        let w = Fq12::new(Fq6::ZERO, Fq6::ONE);
        assert_eq!(w.square(), Fq12::from_base(v));
    }

    #[test]
    fn u_is_not_a_square() {
        let u = Fq2::new(Fq::ZERO, Fq::ONE);
        assert!(bool::from(u.sqrt().is_none()));
        assert_eq!(Fq2::from(4u64).sqrt().unwrap().square(), Fq2::from(4u64));
    }

    #[test]
    fn frobenius_is_the_q_power() {
        let q = Fq::modulus().to_words();
        let a = Fq12::new(
            Fq6::new(Fq2::from(2u64), Fq2::new(Fq::ONE, Fq::from_u64(9)), Fq2::ONE),
            Fq6::new(Fq2::from(13u64), Fq2::new(Fq::from_u64(4), Fq::ONE), Fq2::ZERO),
        );
        assert_eq!(a.frobenius_map(1), Field::pow_vartime(&a, &q));
        assert_eq!(a.frobenius_map(12), a);
    }
}
