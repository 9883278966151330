//! Test and benchmark helpers shared by the curve crates.

/// Write a series of `criterion`-based benchmarks for a field implementation.
#[macro_export]
macro_rules! bench_field {
    { $name:ident, $desc:expr, $fe_a:expr, $fe_b:expr } => {
        fn bench_add<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let x = core::hint::black_box($fe_a);
            let y = core::hint::black_box($fe_b);
            group.bench_function("add", |b| b.iter(|| x + y));
        }

        fn bench_mul<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let x = core::hint::black_box($fe_a);
            let y = core::hint::black_box($fe_b);
            group.bench_function("mul", |b| b.iter(|| x * y));
        }

        fn bench_square<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let x = core::hint::black_box($fe_a);
            group.bench_function("square", |b| b.iter(|| $crate::Field::square(&x)));
        }

        fn bench_invert<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let x = core::hint::black_box($fe_a);
            group.bench_function("invert", |b| b.iter(|| $crate::Field::invert(&x)));
        }

        fn bench_frobenius<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let x = core::hint::black_box($fe_a);
            group.bench_function("frobenius_map", |b| {
                b.iter(|| $crate::Field::frobenius_map(&x, 1))
            });
        }

        pub fn $name(c: &mut ::criterion::Criterion) {
            let mut group = c.benchmark_group($desc);
            bench_add(&mut group);
            bench_mul(&mut group);
            bench_square(&mut group);
            bench_invert(&mut group);
            bench_frobenius(&mut group);
            group.finish();
        }
    };
}

/// Implement the field axiom, Frobenius and encoding tests for a type which impls
/// [`Field`][crate::Field].
///
/// Requires `rand` as a dev-dependency of the calling crate.
#[macro_export]
macro_rules! test_field {
    ($fe:ty) => {
        fn field_test_rng() -> ::rand::rngs::StdRng {
            ::rand::SeedableRng::seed_from_u64(0x5eed)
        }

        fn random_element(rng: &mut ::rand::rngs::StdRng) -> $fe {
            <$fe as $crate::Field>::random(rng)
        }

        #[test]
        fn additive_group() {
            let mut rng = field_test_rng();
            for _ in 0..16 {
                let (a, b, c) = (
                    random_element(&mut rng),
                    random_element(&mut rng),
                    random_element(&mut rng),
                );
                let zero = <$fe as $crate::Field>::ZERO;
                assert_eq!(a + b, b + a);
                assert_eq!((a + b) + c, a + (b + c));
                assert_eq!(a + zero, a);
                assert_eq!(a + (-a), zero);
                assert_eq!(a - b, a + (-b));
                assert_eq!($crate::Field::double(&a), a + a);
            }
        }

        #[test]
        fn multiplicative_group() {
            let mut rng = field_test_rng();
            for _ in 0..16 {
                let (a, b, c) = (
                    random_element(&mut rng),
                    random_element(&mut rng),
                    random_element(&mut rng),
                );
                let one = <$fe as $crate::Field>::ONE;
                assert_eq!(a * b, b * a);
                assert_eq!((a * b) * c, a * (b * c));
                assert_eq!(a * (b + c), a * b + a * c);
                assert_eq!(a * one, a);
                assert_eq!($crate::Field::square(&a), a * a);

                let inverse = $crate::Field::invert(&a).unwrap();
                assert_eq!(a * inverse, one);
            }
        }

        #[test]
        fn zero_is_not_invertible() {
            let zero = <$fe as $crate::Field>::ZERO;
            assert!(bool::from($crate::Field::invert(&zero).is_none()));
            assert!(bool::from($crate::Field::is_zero(&zero)));
        }

        #[test]
        fn frobenius_map() {
            let mut rng = field_test_rng();
            let (a, b) = (random_element(&mut rng), random_element(&mut rng));
            let degree = <$fe as $crate::Field>::DEGREE;

            assert_eq!($crate::Field::frobenius_map(&a, 0), a);
            assert_eq!(
                $crate::Field::frobenius_map(&(a * b), 1),
                $crate::Field::frobenius_map(&a, 1) * $crate::Field::frobenius_map(&b, 1)
            );

            let mut iterated = a;
            for power in 1..=degree {
                iterated = $crate::Field::frobenius_map(&iterated, 1);
                assert_eq!(iterated, $crate::Field::frobenius_map(&a, power));
            }
            assert_eq!(iterated, a);
        }

        #[test]
        fn pow_matches_constant_time_pow() {
            let mut rng = field_test_rng();
            let a = random_element(&mut rng);
            let exp = [0x0123_4567_89ab_cdef_u64, 0x42];
            assert_eq!(
                $crate::Field::pow_vartime(&a, &exp),
                $crate::Field::pow(&a, &exp)
            );
            assert_eq!(
                $crate::Field::pow_vartime(&a, &[3]),
                a * a * a
            );
        }

        #[test]
        fn byte_encoding() {
            let mut rng = field_test_rng();
            let a = random_element(&mut rng);
            let mut bytes = [0u8; <$fe as $crate::Field>::ENCODED_LEN];
            $crate::Field::write_bytes(&a, &mut bytes);
            assert_eq!(<$fe as $crate::Field>::read_bytes(&bytes).unwrap(), a);
            assert!(bool::from(
                <$fe as $crate::Field>::read_bytes(&bytes[1..]).is_none()
            ));

            // An all-ones encoding overflows every coefficient.
            let overflow = [0xffu8; <$fe as $crate::Field>::ENCODED_LEN];
            assert!(bool::from(
                <$fe as $crate::Field>::read_bytes(&overflow).is_none()
            ));
        }
    };
}

/// Implement square root tests for a type which impls [`SqrtField`][crate::SqrtField].
#[macro_export]
macro_rules! test_sqrt_field {
    ($fe:ty) => {
        #[test]
        fn sqrt_of_squares() {
            let mut rng: ::rand::rngs::StdRng = ::rand::SeedableRng::seed_from_u64(0x5eed);
            for _ in 0..8 {
                let a = <$fe as $crate::Field>::random(&mut rng);
                let square = $crate::Field::square(&a);
                let root = $crate::SqrtField::sqrt(&square).unwrap();
                assert!(root == a || root == -a);
                assert!(!bool::from($crate::Field::sgn0(&root)));
            }
        }

        #[test]
        fn sqrt_of_zero() {
            let zero = <$fe as $crate::Field>::ZERO;
            assert_eq!($crate::SqrtField::sqrt(&zero).unwrap(), zero);
        }
    };
}

/// Implement tests for the constants of an [`Fp`][crate::Fp] instantiation's `PrimeField` impl.
#[macro_export]
macro_rules! test_prime_field {
    ($fe:ty) => {
        #[test]
        fn two_inv_constant() {
            use $crate::ff::PrimeField as _;
            assert_eq!(<$fe>::from_u64(2) * <$fe>::TWO_INV, <$fe>::ONE);
        }

        #[test]
        fn root_of_unity_constants() {
            use $crate::ff::PrimeField as _;
            assert_eq!(<$fe>::ROOT_OF_UNITY.sqn_vartime(<$fe>::S as usize), <$fe>::ONE);
            assert_eq!(<$fe>::ROOT_OF_UNITY * <$fe>::ROOT_OF_UNITY_INV, <$fe>::ONE);
            assert_ne!(
                <$fe>::ROOT_OF_UNITY.sqn_vartime(<$fe>::S as usize - 1),
                <$fe>::ONE
            );
        }

        #[test]
        fn multiplicative_generator_is_non_residue() {
            use $crate::ff::PrimeField as _;
            assert!(!bool::from(<$fe>::MULTIPLICATIVE_GENERATOR.is_square()));
        }

        #[test]
        fn encoding_width_matches_modulus() {
            use $crate::ff::PrimeField as _;
            let bytes = <$fe as $crate::Field>::ENCODED_LEN;
            assert_eq!(bytes, (<$fe>::NUM_BITS as usize).div_ceil(8));
        }
    };
}
