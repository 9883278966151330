//! A small tower over the BN254 base field: `Fp2 = Fp[u]/(u^2 + 1)` and
//! `Fp3 = Fp[w]/(w^3 - 3)`.

use towerfield::{
    CubicExt, CubicExtConfig, Field, Fp, QuadExt, QuadExtConfig, RessolParams, SqrtField,
    bigint::U256, field_params,
};

field_params!(
    name: FqParams,
    modulus: "30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd47",
    uint: U256,
    bytes: 32,
    multiplicative_generator: 3,
    doc: "BN254 base field"
);

type Fq = Fp<FqParams, { U256::LIMBS }>;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
struct Fq2Config;

impl QuadExtConfig for Fq2Config {
    type Base = Fq;
    type FrobCoeff = Fq;

    const FROBENIUS_COEFF_C1: &'static [Fq] = &[
        Fq::ONE,
        Fq::from_hex("30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd46"),
    ];

    fn mul_base_by_nonresidue(x: &Fq) -> Fq {
        -x
    }

    fn mul_base_by_frob_coeff(x: &Fq, coeff: &Fq) -> Fq {
        x * coeff
    }
}

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

type Fq2 = QuadExt<Fq2Config>;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
struct Fq3Config;

impl CubicExtConfig for Fq3Config {
    type Base = Fq;
    type FrobCoeff = Fq;

    const FROBENIUS_COEFF_C1: &'static [Fq] = &[
        Fq::ONE,
        Fq::from_hex("30644e72e131a0295e6dd9e7e0acccb0c28f069fbb966e3de4bd44e5607cfd48"),
        Fq::from_hex("000000000000000059e26bcea0d48bacd4f263f1acdb5c4f5763473177fffffe"),
    ];
    const FROBENIUS_COEFF_C2: &'static [Fq] = &[
        Fq::ONE,
        Fq::from_hex("000000000000000059e26bcea0d48bacd4f263f1acdb5c4f5763473177fffffe"),
        Fq::from_hex("30644e72e131a0295e6dd9e7e0acccb0c28f069fbb966e3de4bd44e5607cfd48"),
    ];

    fn mul_base_by_nonresidue(x: &Fq) -> Fq {
        x.double() + x
    }

    fn mul_base_by_frob_coeff(x: &Fq, coeff: &Fq) -> Fq {
        x * coeff
    }
}

type Fq3 = CubicExt<Fq3Config>;

mod fq {
    towerfield::test_field!(super::Fq);
    towerfield::test_sqrt_field!(super::Fq);
    towerfield::test_prime_field!(super::Fq);
}

mod fq2 {
    towerfield::test_field!(super::Fq2);
    towerfield::test_sqrt_field!(super::Fq2);
}

mod fq3 {
    towerfield::test_field!(super::Fq3);
}

#[test]
fn u_squared_is_the_nonresidue() {
    let u = Fq2::new(Fq::ZERO, Fq::ONE);
    assert_eq!(u.square(), -Fq2::ONE);
    assert_eq!(u.mul_by_nonresidue(), -Fq2::ONE);
}

#[test]
fn w_cubed_is_the_nonresidue() {
    let w = Fq3::new(Fq::ZERO, Fq::ONE, Fq::ZERO);
    assert_eq!(w * w * w, Fq3::from_base(Fq::from_u64(3)));
    assert_eq!(w.square(), w.mul_by_nonresidue());
}

#[test]
fn frobenius_is_the_p_power() {
    let a = Fq2::new(Fq::from_u64(7), Fq::from_u64(11));
    let p = Fq::modulus().to_words();
    assert_eq!(a.frobenius_map(1), Field::pow_vartime(&a, &p));
    assert_eq!(a.frobenius_map(1), a.conjugate());

    let b = Fq3::new(Fq::from_u64(2), Fq::from_u64(3), Fq::from_u64(5));
    assert_eq!(b.frobenius_map(1), Field::pow_vartime(&b, &p));
}

#[test]
fn sparse_cubic_multiplication() {
    let a = Fq3::new(Fq::from_u64(2), Fq::from_u64(3), Fq::from_u64(5));
    let (b0, b1) = (Fq::from_u64(7), Fq::from_u64(13));
    assert_eq!(a.mul_by_01(&b0, &b1), a * Fq3::new(b0, b1, Fq::ZERO));
    assert_eq!(a.mul_by_02(&b0, &b1), a * Fq3::new(b0, Fq::ZERO, b1));
    assert_eq!(a.mul_by_1(&b1), a * Fq3::new(Fq::ZERO, b1, Fq::ZERO));
}

#[test]
fn cyclotomic_operations_on_unitary_elements() {
    let a = Fq2::new(Fq::from_u64(3), Fq::from_u64(4));
    // a^(p - 1) has norm one.
    let unitary = a.conjugate() * a.invert().unwrap();
    assert_eq!(unitary.norm(), Fq::ONE);
    assert_eq!(unitary.cyclotomic_square(), unitary.square());
    assert_eq!(unitary.unitary_inverse(), unitary.invert().unwrap());

    let exp = [0xdead_beef_u64, 1];
    assert_eq!(unitary.cyclotomic_exp(&exp), Field::pow_vartime(&unitary, &exp));
}

#[test]
fn non_residue_in_fq2_has_no_root() {
    let nqr = Fq2::new(Fq::from_u64(2), Fq::ONE);
    assert!(bool::from(nqr.sqrt().is_none()));
    assert!(nqr.try_sqrt().is_err());
}

#[test]
fn fq2_sign_uses_c1_when_c0_is_zero() {
    let odd_c1 = Fq2::new(Fq::ZERO, Fq::ONE);
    assert!(bool::from(odd_c1.sgn0()));
    assert!(!bool::from((-odd_c1).sgn0()));
    let even_c0 = Fq2::new(Fq::from_u64(2), Fq::ONE);
    assert!(!bool::from(even_c0.sgn0()));
}
