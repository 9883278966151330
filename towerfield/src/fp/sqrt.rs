//! Square roots in prime fields, adapted from <https://eprint.iacr.org/2012/685.pdf>.

use super::{FieldParams, Fp};
use bigint::Uint;
use ff::PrimeField;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

/// Square root algorithms.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Algorithm {
    /// Shanks algorithm for `q ≡ 3 (mod 4)`.
    Shanks,

    /// Tonelli-Shanks algorithm for any odd prime.
    TonelliShanks,
}

impl Algorithm {
    const fn for_modulus<const LIMBS: usize>(p: &Uint<LIMBS>) -> Self {
        if p.as_limbs()[0].0 & 3 == 3 {
            Self::Shanks
        } else {
            Self::TonelliShanks
        }
    }
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> Fp<P, LIMBS> {
    const SQRT_ALGORITHM: Algorithm = Algorithm::for_modulus(&P::MODULUS);

    /// Returns the square root of `self` whose canonical value is even, or `None` if
    /// `self` is a non-residue.
    pub fn sqrt(&self) -> CtOption<Self> {
        let root = match Self::SQRT_ALGORITHM {
            Algorithm::Shanks => self.sqrt_shanks(),
            Algorithm::TonelliShanks => self.sqrt_tonelli_shanks(),
        };

        root.map(|x| Self::conditional_select(&x, &-x, x.sgn0()))
    }

    /// Legendre symbol test: is `self` a square (zero included)?
    pub fn is_square(&self) -> Choice {
        let legendre = self.pow_uint_vartime(&Self::P_MINUS_ONE_DIV_TWO);
        legendre.ct_eq(&Self::ONE) | self.is_zero()
    }

    const P_MINUS_ONE_DIV_TWO: Uint<LIMBS> = P::MODULUS.shr_vartime(1);

    /// Shanks algorithm for `q ≡ 3 (mod 4)`: a single exponentiation by `(q + 1) / 4`.
    fn sqrt_shanks(&self) -> CtOption<Self> {
        debug_assert!(Self::SQRT_ALGORITHM == Algorithm::Shanks);

        let sqrt = self.pow_uint_vartime(&Self::P_PLUS_ONE_DIV_FOUR);
        CtOption::new(sqrt, sqrt.square().ct_eq(self))
    }

    const P_PLUS_ONE_DIV_FOUR: Uint<LIMBS> = P::MODULUS.wrapping_add(&Uint::ONE).shr_vartime(2);

    /// Constant-time Tonelli-Shanks, valid for every odd prime.
    fn sqrt_tonelli_shanks(&self) -> CtOption<Self> {
        let w = self.pow_uint_vartime(&Self::T_MINUS_ONE_DIV_TWO);

        let mut v = <Self as PrimeField>::S;
        let mut x = *self * w;
        let mut b = x * w;
        let mut z = <Self as PrimeField>::ROOT_OF_UNITY;

        for max_v in (1..=<Self as PrimeField>::S).rev() {
            let mut k = 1;
            let mut tmp = b.square();
            let mut j_less_than_v = Choice::from(1);

            for j in 2..max_v {
                let tmp_is_one = tmp.ct_eq(&Self::ONE);
                let squared = Self::conditional_select(&tmp, &z, tmp_is_one).square();
                tmp = Self::conditional_select(&squared, &tmp, tmp_is_one);
                let new_z = Self::conditional_select(&z, &squared, tmp_is_one);
                j_less_than_v &= !j.ct_eq(&v);
                k = u32::conditional_select(&j, &k, tmp_is_one);
                z = Self::conditional_select(&z, &new_z, j_less_than_v);
            }

            let result = x * z;
            x = Self::conditional_select(&result, &x, b.ct_eq(&Self::ONE));
            z = z.square();
            b *= z;
            v = k;
        }

        CtOption::new(x, x.square().ct_eq(self))
    }

    const T_MINUS_ONE_DIV_TWO: Uint<LIMBS> = Self::T.shr_vartime(1);
}

#[cfg(test)]
mod tests {
    use super::Algorithm;
    use crate::{Fp, field_params};
    use bigint::U256;

    field_params!(
        name: Bn254BaseParams,
        modulus: "30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd47",
        uint: U256,
        bytes: 32,
        multiplicative_generator: 3,
        doc: "BN254 base field"
    );

    field_params!(
        name: Bls12ScalarParams,
        modulus: "73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001",
        uint: U256,
        bytes: 32,
        multiplicative_generator: 7,
        doc: "BLS12-381 scalar field"
    );

    type Bn254Base = Fp<Bn254BaseParams, { U256::LIMBS }>;
    type Bls12Scalar = Fp<Bls12ScalarParams, { U256::LIMBS }>;

    fn roots_of_small_squares<P: crate::FieldParams<{ U256::LIMBS }>>() {
        for n in [0u64, 1, 4, 9, 16, 25, 36, 49, 64, 1 << 40] {
            let fe = Fp::<P, { U256::LIMBS }>::from_u64(n);
            let root = fe.sqrt().unwrap();
            assert_eq!(root.square(), fe);
            assert!(!bool::from(root.sgn0()));
            assert!(bool::from(fe.is_square()));
        }
    }

    #[test]
    fn shanks() {
        assert_eq!(Bn254Base::SQRT_ALGORITHM, Algorithm::Shanks);
        roots_of_small_squares::<Bn254BaseParams>();
    }

    #[test]
    fn tonelli_shanks() {
        assert_eq!(Bls12Scalar::SQRT_ALGORITHM, Algorithm::TonelliShanks);
        roots_of_small_squares::<Bls12ScalarParams>();
    }

    #[test]
    fn non_residues_have_no_root() {
        // 3 generates the BN254 base field's multiplicative group.
        let three = Bn254Base::from_u64(3);
        assert!(bool::from(three.sqrt().is_none()));
        assert!(!bool::from(three.is_square()));

        let seven = Bls12Scalar::from_u64(7);
        assert!(bool::from(seven.sqrt().is_none()));
    }
}
