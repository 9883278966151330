//! Pairing tests for MNT6-298.

use mnt6_298::{Engine, Fq, Fq3, Fq6, Fr, G1Affine, G1Projective, G2Affine, Mnt6_298};

pairing::test_engine!(Mnt6_298);

/// `e(G1, G2)`, coefficients listed from `c0.c0` to `c1.c2`.
const GENERATOR_PAIRING: [&str; 6] = [
    "0000014ac12149eebffe74a1c75a7225deb91ca243c49eef01392080ff519ab6209431f81b50ec03",
    "000001ba8ab5bc93186b5bc2b1936fee360528228ab953fbce3c7b84f71d6c0e87b293d0de36eb93",
    "00000323a5728ce32f5a04635ca9f84857882e9c13a2b415a021985921c79f303f1f0b69557c5c3d",
    "0000032e067f62de41a786c2a43da960855694f3e0da14a964377a32ddad42cf9dd6b80bdc8d4300",
    "000000bf02fd56dcd4f6b1d132c8b56a9f8801696d77cdb911a35335360f07eba30bc3083ecaa394",
    "0000028a449b7699751b6bf17003c141307311241614b886c0fb6ffaf5b39896e182bddd85859e9c",
];

fn fq6_from_hex(coeffs: [&str; 6]) -> Fq6 {
    let fq3 = |i: usize| {
        Fq3::new(
            Fq::from_hex(coeffs[3 * i]),
            Fq::from_hex(coeffs[3 * i + 1]),
            Fq::from_hex(coeffs[3 * i + 2]),
        )
    };
    Fq6::new(fq3(0), fq3(1))
}

#[test]
fn generator_pairing_value() {
    let e = Mnt6_298::pairing(&G1Affine::GENERATOR, &G2Affine::GENERATOR);
    assert_eq!(e, fq6_from_hex(GENERATOR_PAIRING));
}

#[test]
fn pairing_of_four_g1() {
    let four_g1 = (G1Projective::GENERATOR * Fr::from_u64(4)).to_affine();
    let e = fq6_from_hex(GENERATOR_PAIRING);
    assert_eq!(Mnt6_298::pairing(&four_g1, &G2Affine::GENERATOR), e.square().square());
}
