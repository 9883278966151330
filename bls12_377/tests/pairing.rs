//! Pairing tests for BLS12-377.

use bls12_377::{Bls12_377, Engine, Fq, Fq2, Fq6, Fq12, G1Affine, G1Projective, G2Affine, G2Projective};

pairing::test_engine!(Bls12_377);

/// `e(G1, G2)`, coefficients listed from `c0.c0.c0` to `c1.c2.c1`.
const GENERATOR_PAIRING: [&str; 12] = [
    "0155e71458362f2e2d2b00fda36ebff22f47b3d367186f3aac18ebc6a965bcb15ef3e7a7580c387ad5ff06f833642029",
    "0137abb2220de5290e7e3af3109dfb7cbe8bf5e7d55af91be0aa4484be1bc86312773c454e026302611a56838844646f",
    "00dc5b9d2f5ed7f6ff305b1299614a7459a1abb60ea884f5feea9f636dc7d8f4e6e5887ae0b6dc89894682621218ebf4",
    "0010461ccc646e537eac865e5d604c804d3a89b493b2250a5378f3f5be8f441c35b0942724f501eb2e1da811f476f557",
    "017adbe040839f28b259fb88dea5a9be919751ce94ac99765cd0dd7cd7fe3e1eebb577e30af1485cc9b145c02fc83d2d",
    "01296a7da8461181e2f28b35e7a190db93141fed139073e1601229bcd1db0a72d480206f627ea2a5ae6c0bd986cace0c",
    "0027a6ff7a66582f46332e8729285940a9eef2d3e0fcb025b637c5fbcc1b36c55af968beea44e956985be32fd0f7cf4a",
    "0101c8e9c21d83905751b304206ed66ed49707435f48d68cb553b5351a6306586d80aaa85b268106733e610aa25c4b34",
    "00900569693c85427ad66c196a9e9e567e61069152afaf2c5af017aaa9c07ecd97b7fd9962f4bdc7524f8a56e98672d7",
    "014dc4e288867ce5fbdf6e536ca5b54f600539655daf6f8e3d0fb81dddb4e479f5903b573411d91beac1e1cde9a7100f",
    "00d17b62876ba3979b35b3fbea55efd6a090ac41a3a7ff23a5b16277f1bb1070c1dc7bcabf209f4d3ab4402c9dc179ca",
    "0111248c2ee01241562eadac0beffa9c445a82fbbe3b345813d188e5c1f0a6db20541ac2121cbba0035ca9b3acbd9055",
];

fn fq12_from_hex(coeffs: [&str; 12]) -> Fq12 {
    let fq2 = |i: usize| Fq2::new(Fq::from_hex(coeffs[2 * i]), Fq::from_hex(coeffs[2 * i + 1]));
    Fq12::new(
        Fq6::new(fq2(0), fq2(1), fq2(2)),
        Fq6::new(fq2(3), fq2(4), fq2(5)),
    )
}

#[test]
fn generator_pairing_value() {
    let e = Bls12_377::pairing(&G1Affine::GENERATOR, &G2Affine::GENERATOR);
    assert_eq!(e, fq12_from_hex(GENERATOR_PAIRING));
}

#[test]
fn doubling_either_argument_squares_the_pairing() {
    let e = fq12_from_hex(GENERATOR_PAIRING);
    let two_g1 = G1Projective::GENERATOR.double().to_affine();
    let two_g2 = G2Projective::GENERATOR.double().to_affine();
    assert_eq!(Bls12_377::pairing(&two_g1, &G2Affine::GENERATOR), e.square());
    assert_eq!(Bls12_377::pairing(&G1Affine::GENERATOR, &two_g2), e.square());
}
