//! Development-related functionality.

/// Implement group law, scalar multiplication and encoding tests for a
/// [`WeierstrassParams`][crate::weierstrass::WeierstrassParams] type.
///
/// Requires `rand` as a dev-dependency of the calling crate.
#[macro_export]
macro_rules! test_weierstrass_group {
    ($params:ty) => {
        type TestProjective = $crate::weierstrass::ProjectivePoint<$params>;
        type TestAffine = $crate::weierstrass::AffinePoint<$params>;
        type TestScalar = <$params as $crate::weierstrass::WeierstrassParams>::Scalar;
        type TestBase = <$params as $crate::weierstrass::WeierstrassParams>::Base;

        fn group_test_rng() -> ::rand::rngs::StdRng {
            ::rand::SeedableRng::seed_from_u64(0x6b0b)
        }

        fn random_scalar(rng: &mut ::rand::rngs::StdRng) -> TestScalar {
            <TestScalar as $crate::ff::Field>::random(rng)
        }

        #[test]
        fn affine_to_projective() {
            let basepoint_affine = TestAffine::GENERATOR;
            let basepoint_projective = TestProjective::GENERATOR;

            assert_eq!(TestProjective::from(basepoint_affine), basepoint_projective);
            assert_eq!(basepoint_projective.to_affine(), basepoint_affine);
            assert!(!bool::from(basepoint_projective.to_affine().is_identity()));
            assert!(bool::from(TestProjective::IDENTITY.to_affine().is_identity()));
        }

        #[test]
        fn generator_is_valid() {
            assert!(bool::from(TestAffine::GENERATOR.is_on_curve()));
            assert!(bool::from(TestProjective::GENERATOR.is_on_curve()));
            assert!(bool::from(TestProjective::GENERATOR.is_torsion_free()));
            assert!(bool::from(TestProjective::IDENTITY.is_on_curve()));
        }

        #[test]
        fn projective_identity_addition() {
            let identity = TestProjective::IDENTITY;
            let generator = TestProjective::GENERATOR;

            assert_eq!(identity + &generator, generator);
            assert_eq!(generator + &identity, generator);
            assert_eq!(identity + &identity, identity);
            assert_eq!(identity.double(), identity);
            assert_eq!(generator - &generator, identity);
        }

        #[test]
        fn projective_mixed_addition() {
            let identity = TestProjective::IDENTITY;
            let basepoint_affine = TestAffine::GENERATOR;
            let basepoint_projective = TestProjective::GENERATOR;

            assert_eq!(identity + &basepoint_affine, basepoint_projective);
            assert_eq!(
                basepoint_projective + &basepoint_affine,
                basepoint_projective + &basepoint_projective
            );
            assert_eq!(basepoint_projective + TestAffine::IDENTITY, basepoint_projective);
        }

        #[test]
        fn projective_add_vs_double() {
            let generator = TestProjective::GENERATOR;
            assert_eq!(generator + &generator, generator.double());
            assert_eq!(
                generator.double().double(),
                generator * TestScalar::from(4u64)
            );
        }

        #[test]
        fn projective_add_and_sub() {
            let basepoint_affine = TestAffine::GENERATOR;
            let basepoint_projective = TestProjective::GENERATOR;

            assert_eq!(
                (basepoint_projective + &basepoint_projective) - &basepoint_projective,
                basepoint_projective
            );
            assert_eq!(
                (basepoint_projective + &basepoint_affine) - &basepoint_affine,
                basepoint_projective
            );
        }

        #[test]
        fn equality_ignores_representation() {
            let generator = TestProjective::GENERATOR;
            let lambda = $crate::towerfield::Field::double(&<TestBase as $crate::towerfield::Field>::ONE);
            let scaled = TestProjective::from_coordinates_unchecked(
                *generator.x() * lambda,
                *generator.y() * lambda,
                *generator.z() * lambda,
            );
            assert_eq!(scaled, generator);
            assert_ne!(scaled, generator.double());
        }

        #[test]
        fn group_axioms() {
            let mut rng = group_test_rng();
            for _ in 0..4 {
                let p = TestProjective::GENERATOR * random_scalar(&mut rng);
                let q = TestProjective::GENERATOR * random_scalar(&mut rng);
                let r = TestProjective::GENERATOR * random_scalar(&mut rng);

                assert_eq!(p + q, q + p);
                assert_eq!((p + q) + r, p + (q + r));
                assert_eq!(p + (-p), TestProjective::IDENTITY);
                assert!(bool::from(p.is_on_curve()));
            }
        }

        #[test]
        fn scalar_multiplication() {
            let mut rng = group_test_rng();
            let generator = TestProjective::GENERATOR;
            let (a, b) = (random_scalar(&mut rng), random_scalar(&mut rng));

            assert_eq!(generator * (a + b), generator * a + generator * b);
            assert_eq!((generator * a) * b, generator * (a * b));
            assert_eq!(generator.mul_vartime(&a), generator * a);
            assert_eq!(
                generator * <TestScalar as $crate::ff::Field>::ZERO,
                TestProjective::IDENTITY
            );
            assert_eq!(generator * -<TestScalar as $crate::ff::Field>::ONE, -generator);
            assert_eq!(
                generator.mul_by_words_vartime(&[5]),
                generator * TestScalar::from(5u64)
            );
        }

        #[test]
        fn batch_normalize_matches_to_affine() {
            use $crate::group::Curve as _;

            let generator = TestProjective::GENERATOR;
            let points = [
                generator,
                TestProjective::IDENTITY,
                generator.double(),
                generator * TestScalar::from(7u64),
            ];
            let mut affine = [TestAffine::IDENTITY; 4];
            TestProjective::batch_normalize(&points, &mut affine);

            for (point, affine) in points.iter().zip(affine.iter()) {
                assert_eq!(point.to_affine(), *affine);
            }
        }

        #[test]
        fn point_encoding() {
            let mut rng = group_test_rng();
            let point = (TestProjective::GENERATOR * random_scalar(&mut rng)).to_affine();

            let compressed = point.to_compressed();
            assert_eq!(compressed.len(), TestAffine::COMPRESSED_LEN);
            assert_eq!(TestAffine::from_bytes(&compressed).unwrap(), point);

            let negated = (-point).to_compressed();
            assert_ne!(negated[0], compressed[0]);
            assert_eq!(TestAffine::from_bytes(&negated).unwrap(), -point);

            let uncompressed = point.to_uncompressed();
            assert_eq!(uncompressed.len(), TestAffine::UNCOMPRESSED_LEN);
            assert_eq!(TestAffine::from_bytes(&uncompressed).unwrap(), point);

            let identity = TestAffine::IDENTITY.to_compressed();
            assert_eq!(identity, [0u8]);
            assert!(bool::from(TestAffine::from_bytes(&identity).unwrap().is_identity()));
        }

        #[test]
        fn point_decoding_errors() {
            let point = TestAffine::GENERATOR;

            let mut bad_tag = point.to_compressed();
            bad_tag[0] = 0x05;
            assert_eq!(
                TestAffine::from_bytes(&bad_tag),
                Err($crate::Error::InvalidEncoding)
            );

            let truncated = point.to_uncompressed();
            assert_eq!(
                TestAffine::from_bytes(&truncated[..truncated.len() - 1]),
                Err($crate::Error::InvalidEncoding)
            );
            assert_eq!(TestAffine::from_bytes(&[]), Err($crate::Error::InvalidEncoding));

            let off_curve = TestAffine::from_coordinates(*point.x(), *point.x());
            assert_eq!(off_curve, Err($crate::Error::NotOnCurve));
        }
    };
}

/// Implement group law, scalar multiplication and encoding tests for an
/// [`EdwardsParams`][crate::edwards::EdwardsParams] type.
///
/// Requires `rand` as a dev-dependency of the calling crate.
#[macro_export]
macro_rules! test_edwards_group {
    ($params:ty) => {
        type TestExtended = $crate::edwards::ExtendedPoint<$params>;
        type TestAffine = $crate::edwards::AffinePoint<$params>;
        type TestScalar = <$params as $crate::edwards::EdwardsParams>::Scalar;

        fn group_test_rng() -> ::rand::rngs::StdRng {
            ::rand::SeedableRng::seed_from_u64(0xed)
        }

        fn random_scalar(rng: &mut ::rand::rngs::StdRng) -> TestScalar {
            <TestScalar as $crate::ff::Field>::random(rng)
        }

        #[test]
        fn generator_is_valid() {
            let generator = TestAffine::GENERATOR;
            assert!(bool::from(generator.is_on_curve()));
            assert!(bool::from(generator.to_extended().is_on_curve()));
            assert!(bool::from(generator.to_extended().is_torsion_free()));
            assert!(bool::from(TestAffine::IDENTITY.is_on_curve()));
        }

        #[test]
        fn identity_laws() {
            let identity = TestExtended::IDENTITY;
            let generator = TestExtended::generator();

            assert_eq!(identity + generator, generator);
            assert_eq!(generator + identity, generator);
            assert_eq!(identity.double(), identity);
            assert_eq!(generator - generator, identity);
            assert!(bool::from((generator - generator).is_identity()));
            assert_eq!(identity.to_affine(), TestAffine::IDENTITY);
        }

        #[test]
        fn add_vs_double() {
            let generator = TestExtended::generator();
            assert_eq!(generator + generator, generator.double());
            assert_eq!(
                generator.double().double(),
                generator * TestScalar::from(4u64)
            );
        }

        #[test]
        fn group_axioms() {
            let mut rng = group_test_rng();
            for _ in 0..4 {
                let p = TestExtended::generator() * random_scalar(&mut rng);
                let q = TestExtended::generator() * random_scalar(&mut rng);
                let r = TestExtended::generator() * random_scalar(&mut rng);

                assert_eq!(p + q, q + p);
                assert_eq!((p + q) + r, p + (q + r));
                assert_eq!(p + (-p), TestExtended::IDENTITY);
                assert!(bool::from(p.is_on_curve()));
            }
        }

        #[test]
        fn scalar_multiplication() {
            let mut rng = group_test_rng();
            let generator = TestExtended::generator();
            let (a, b) = (random_scalar(&mut rng), random_scalar(&mut rng));

            assert_eq!(generator * (a + b), generator * a + generator * b);
            assert_eq!(generator.mul_vartime(&a), generator * a);
            assert_eq!(
                generator * <TestScalar as $crate::ff::Field>::ZERO,
                TestExtended::IDENTITY
            );
        }

        #[test]
        fn cofactor_clearing() {
            let generator = TestExtended::generator();
            let cofactor = <$params as $crate::edwards::EdwardsParams>::COFACTOR;
            assert_eq!(
                generator.clear_cofactor(),
                generator.mul_by_words_vartime(cofactor)
            );
            assert!(bool::from(generator.clear_cofactor().is_torsion_free()));
        }

        #[test]
        fn point_encoding() {
            let mut rng = group_test_rng();
            let point = (TestExtended::generator() * random_scalar(&mut rng)).to_affine();

            let bytes = point.to_bytes();
            assert_eq!(bytes.len(), TestAffine::ENCODED_LEN);
            assert_eq!(TestAffine::from_bytes(&bytes).unwrap(), point);
            assert_eq!(TestAffine::from_bytes(&(-point).to_bytes()).unwrap(), -point);
            assert_eq!(
                TestAffine::from_bytes(&TestAffine::IDENTITY.to_bytes()).unwrap(),
                TestAffine::IDENTITY
            );
            assert_eq!(
                TestAffine::from_bytes(&bytes[1..]),
                Err($crate::Error::InvalidEncoding)
            );
        }
    };
}

/// Implement tests cross-checking every multiexp method against each other.
///
/// `$point` must impl [`group::Group`]. Requires `rand` as a dev-dependency.
#[macro_export]
macro_rules! test_multiexp {
    ($point:ty) => {
        fn multiexp_inputs(
            n: usize,
        ) -> (
            ::std::vec::Vec<$point>,
            ::std::vec::Vec<<$point as $crate::group::Group>::Scalar>,
        ) {
            use $crate::group::Group as _;

            let mut rng: ::rand::rngs::StdRng = ::rand::SeedableRng::seed_from_u64(n as u64);
            let base = <$point>::random(&mut rng);
            let mut points = ::std::vec::Vec::with_capacity(n);
            let mut point = base;
            for _ in 0..n {
                points.push(point);
                point = point.double() + base;
            }
            let scalars = (0..n)
                .map(|_| <<$point as $crate::group::Group>::Scalar as $crate::ff::Field>::random(&mut rng))
                .collect();
            (points, scalars)
        }

        fn check_multiexp_methods_agree(n: usize) {
            use $crate::multiexp::{MultiexpMethod, multiexp};

            let (points, scalars) = multiexp_inputs(n);
            let naive = multiexp(MultiexpMethod::Naive, &points, &scalars).unwrap();
            let bos_coster = multiexp(MultiexpMethod::BosCoster, &points, &scalars).unwrap();
            let pippenger = multiexp(MultiexpMethod::Pippenger, &points, &scalars).unwrap();

            assert_eq!(naive, bos_coster, "bos-coster disagrees at n = {n}");
            assert_eq!(naive, pippenger, "pippenger disagrees at n = {n}");
        }

        #[test]
        fn multiexp_single_term() {
            check_multiexp_methods_agree(1);
            let (points, scalars) = multiexp_inputs(1);
            assert_eq!(
                $crate::multiexp::multiexp_pippenger(&points, &scalars).unwrap(),
                points[0] * scalars[0]
            );
        }

        #[test]
        fn multiexp_two_terms() {
            check_multiexp_methods_agree(2);
        }

        #[test]
        fn multiexp_ten_terms() {
            check_multiexp_methods_agree(10);
        }

        #[test]
        fn multiexp_thousand_terms() {
            check_multiexp_methods_agree(1000);
        }

        #[test]
        fn multiexp_edge_cases() {
            use $crate::group::Group as _;
            use $crate::multiexp::{MultiexpMethod, multiexp};

            let methods = [
                MultiexpMethod::Naive,
                MultiexpMethod::BosCoster,
                MultiexpMethod::Pippenger,
            ];
            let (points, scalars) = multiexp_inputs(3);
            let zero = <<$point as $crate::group::Group>::Scalar as $crate::ff::Field>::ZERO;
            let one = <<$point as $crate::group::Group>::Scalar as $crate::ff::Field>::ONE;

            for method in methods {
                assert!(bool::from(multiexp::<$point>(method, &[], &[]).unwrap().is_identity()));
                assert_eq!(
                    multiexp(method, &points, &scalars[..2]),
                    Err($crate::Error::LengthMismatch)
                );
                assert!(bool::from(
                    multiexp(method, &points, &[zero; 3]).unwrap().is_identity()
                ));
                assert_eq!(
                    multiexp(method, &points, &[one; 3]).unwrap(),
                    points[0] + points[1] + points[2]
                );
                assert_eq!(
                    multiexp(method, &points[..2], &[scalars[0], scalars[0]]).unwrap(),
                    (points[0] + points[1]) * scalars[0]
                );
            }
        }
    };
}
