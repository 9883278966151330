//! Scalar arithmetic tests.

use bls12_381::Fr;
use hex_literal::hex;
use proptest::prelude::*;

prop_compose! {
    fn scalar()(bytes in any::<[u8; 32]>()) -> Fr {
        Fr::from_bytes_reduced(&bytes)
    }
}

proptest! {
    #[test]
    fn invert_and_invert_vartime_are_equivalent(w in scalar()) {
        let inv: Option<Fr> = w.invert().into();
        prop_assert_eq!(inv, w.invert_vartime().ok());
    }

    #[test]
    fn bytes_round_trip(w in scalar()) {
        prop_assert_eq!(Fr::from_slice(w.to_bytes().as_ref()), Ok(w));
    }
}

#[test]
fn reduction_wraps_the_modulus() {
    let modulus = hex!("73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001");
    assert_eq!(Fr::from_bytes_reduced(&modulus), Fr::ZERO);
    assert!(Fr::from_slice(&modulus).is_err());
}
