//! Development-related functionality.

/// Implement bilinearity, identity and multi-pairing tests for an
/// [`Engine`][crate::Engine] over Weierstrass or Edwards source groups.
///
/// Requires `rand` as a dev-dependency of the calling crate.
#[macro_export]
macro_rules! test_engine {
    ($engine:ty) => {
        use $crate::Engine as _;
        use $crate::curvegroup::group::{Curve as _, Group as _};

        type TestScalar = <$engine as $crate::Engine>::Scalar;
        type TestGt = <$engine as $crate::Engine>::Gt;
        type TestG1 = <$engine as $crate::Engine>::G1Affine;
        type TestG2 = <$engine as $crate::Engine>::G2Affine;
        type TestG1Projective = <$engine as $crate::Engine>::G1;
        type TestG2Projective = <$engine as $crate::Engine>::G2;

        fn pairing_test_rng() -> ::rand::rngs::StdRng {
            ::rand::SeedableRng::seed_from_u64(0x9a1f)
        }

        fn random_scalar(rng: &mut ::rand::rngs::StdRng) -> TestScalar {
            <TestScalar as $crate::ff::Field>::random(rng)
        }

        fn g1_generator() -> TestG1 {
            TestG1Projective::generator().to_affine()
        }

        fn g2_generator() -> TestG2 {
            TestG2Projective::generator().to_affine()
        }

        fn g1_identity() -> TestG1 {
            TestG1Projective::identity().to_affine()
        }

        fn g2_identity() -> TestG2 {
            TestG2Projective::identity().to_affine()
        }

        fn g1_mul(k: &TestScalar) -> TestG1 {
            (TestG1Projective::generator() * k).to_affine()
        }

        fn g2_mul(k: &TestScalar) -> TestG2 {
            (TestG2Projective::generator() * k).to_affine()
        }

        /// Little-endian words of a scalar's canonical value.
        fn scalar_words(k: &TestScalar) -> ::std::vec::Vec<u64> {
            let repr = <TestScalar as $crate::ff::PrimeField>::to_repr(k);
            let bytes = repr.as_ref();
            let mut words = ::std::vec![0u64; bytes.len().div_ceil(8)];
            for (i, byte) in bytes.iter().rev().enumerate() {
                words[i / 8] |= u64::from(*byte) << (8 * (i % 8));
            }
            words
        }

        fn gt_pow(e: &TestGt, k: &TestScalar) -> TestGt {
            <TestGt as $crate::towerfield::Field>::pow_vartime(e, &scalar_words(k))
        }

        fn gt_one() -> TestGt {
            <TestGt as $crate::towerfield::Field>::ONE
        }

        /// `e^r == 1`, checked as `e^(r - 1) · e == 1`.
        fn has_order_r(e: &TestGt) -> bool {
            let r_minus_one = -<TestScalar as $crate::ff::Field>::ONE;
            gt_pow(e, &r_minus_one) * e == gt_one()
        }

        #[test]
        fn pairing_is_non_degenerate() {
            let e = <$engine>::pairing(&g1_generator(), &g2_generator());
            assert_ne!(e, gt_one());
            assert!(has_order_r(&e));
        }

        #[test]
        fn pairing_is_bilinear() {
            let mut rng = pairing_test_rng();
            let a = random_scalar(&mut rng);
            let b = random_scalar(&mut rng);

            let e = <$engine>::pairing(&g1_generator(), &g2_generator());
            let e_ab = <$engine>::pairing(&g1_mul(&a), &g2_mul(&b));
            assert_eq!(e_ab, gt_pow(&e, &(a * b)));

            let e_a_left = <$engine>::pairing(&g1_mul(&a), &g2_generator());
            let e_a_right = <$engine>::pairing(&g1_generator(), &g2_mul(&a));
            assert_eq!(e_a_left, e_a_right);
        }

        #[test]
        fn pairing_is_linear_in_each_argument() {
            let mut rng = pairing_test_rng();
            let p1 = g1_mul(&random_scalar(&mut rng));
            let p2 = g1_mul(&random_scalar(&mut rng));
            let q = g2_mul(&random_scalar(&mut rng));

            let sum = (TestG1Projective::from(p1) + p2).to_affine();
            assert_eq!(
                <$engine>::pairing(&sum, &q),
                <$engine>::pairing(&p1, &q) * <$engine>::pairing(&p2, &q)
            );
            assert_eq!(
                <$engine>::pairing(&-p1, &q) * <$engine>::pairing(&p1, &q),
                gt_one()
            );
        }

        #[test]
        fn identity_maps_to_one() {
            assert_eq!(
                <$engine>::pairing(&g1_identity(), &g2_generator()),
                gt_one()
            );
            assert_eq!(
                <$engine>::pairing(&g1_generator(), &g2_identity()),
                gt_one()
            );
            assert_eq!(
                <$engine>::pairing(&g1_identity(), &g2_identity()),
                gt_one()
            );
        }

        #[test]
        fn double_miller_loop_matches_product() {
            let mut rng = pairing_test_rng();
            let p1 = g1_mul(&random_scalar(&mut rng));
            let p2 = g1_mul(&random_scalar(&mut rng));
            let q1 = g2_mul(&random_scalar(&mut rng));
            let q2 = g2_mul(&random_scalar(&mut rng));

            let f = <$engine>::double_miller_loop(
                &<$engine>::prepare_g1(&p1),
                &<$engine>::prepare_g2(&q1),
                &<$engine>::prepare_g1(&p2),
                &<$engine>::prepare_g2(&q2),
            );
            let product = <$engine>::pairing(&p1, &q1) * <$engine>::pairing(&p2, &q2);
            assert_eq!(<$engine>::final_exponentiation(&f).unwrap(), product);
        }

        #[test]
        fn multi_miller_loop_skips_identity() {
            let p = g1_generator();
            let q = <$engine>::prepare_g2(&g2_generator());
            let identity_g1 = <$engine>::prepare_g1(&g1_identity());
            let identity_g2 = <$engine>::prepare_g2(&g2_identity());
            let p = <$engine>::prepare_g1(&p);

            let single = <$engine>::miller_loop(&p, &q);
            let padded =
                <$engine>::multi_miller_loop(&[(&identity_g1, &q), (&p, &q), (&p, &identity_g2)]);
            assert_eq!(single, padded);
            assert_eq!(<$engine>::multi_miller_loop(&[]), gt_one());
        }

        #[test]
        fn prepared_g2_is_reusable() {
            let mut rng = pairing_test_rng();
            let a = random_scalar(&mut rng);
            let q = <$engine>::prepare_g2(&g2_generator());

            let e1 = <$engine>::miller_loop(&<$engine>::prepare_g1(&g1_generator()), &q);
            let ea = <$engine>::miller_loop(&<$engine>::prepare_g1(&g1_mul(&a)), &q);
            let e1 = <$engine>::final_exponentiation(&e1).unwrap();
            let ea = <$engine>::final_exponentiation(&ea).unwrap();
            assert_eq!(ea, gt_pow(&e1, &a));
        }

        #[test]
        fn pairing_product_check() {
            let mut rng = pairing_test_rng();
            let a = random_scalar(&mut rng);
            let b = random_scalar(&mut rng);

            // e(aP, Q) · e(-P, aQ) == 1
            let balanced = [
                (g1_mul(&a), g2_generator()),
                (-g1_generator(), g2_mul(&a)),
            ];
            assert!(<$engine>::pairing_product_is_one(&balanced));

            let unbalanced = [
                (g1_mul(&a), g2_generator()),
                (-g1_generator(), g2_mul(&b)),
            ];
            assert!(!<$engine>::pairing_product_is_one(&unbalanced));
            assert!(<$engine>::pairing_product_is_one(&[]));
        }

        #[test]
        fn final_exponentiation_lands_in_gt() {
            let mut rng = pairing_test_rng();
            let f = <TestGt as $crate::towerfield::Field>::random(&mut rng);
            let e = <$engine>::final_exponentiation(&f).unwrap();
            assert!(has_order_r(&e));
            assert_eq!(<$engine>::final_exponentiation(&gt_one()).unwrap(), gt_one());
        }

        #[test]
        fn final_exponentiation_rejects_zero() {
            let zero = <TestGt as $crate::towerfield::Field>::ZERO;
            assert!(bool::from(<$engine>::final_exponentiation(&zero).is_none()));
        }
    };
}
