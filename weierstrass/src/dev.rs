//! Development-related functionality.

/// Implement group law tests for a [`CurveGroup`][`crate::CurveGroup`].
///
/// `$group` is an expression evaluating to `&CurveGroup`. The optional
/// vectors are slices of big-endian `(x, y)` pairs for `G, 2G, ...` and of
/// `(k, x, y)` triples for `k·G`.
#[macro_export]
macro_rules! impl_group_law_tests {
    ($group:expr) => {
        use $crate::num_bigint::{BigInt, BigUint};

        /// A handful of points of the prime order subgroup.
        fn sample_points(group: &$crate::CurveGroup) -> impl Iterator<Item = $crate::Point<'_>> {
            [1i64, 2, 3, 0x1234_5678, -7]
                .into_iter()
                .map(move |k| group.new_point_from_scalar(&BigInt::from(k)))
        }

        #[test]
        fn generator_is_on_curve() {
            let group = $group;
            let generator = group.generator();

            assert!(generator.is_on_curve());
            assert!(!generator.is_infinity());
            assert_eq!(
                group.new_point(
                    generator.x().unwrap().clone(),
                    generator.y().unwrap().clone()
                ),
                Ok(generator.clone())
            );
        }

        #[test]
        fn identity_addition() {
            let group = $group;
            let identity = group.infinity_point();

            assert_eq!(&identity + &identity, identity);
            for p in sample_points(group) {
                assert_eq!(&identity + &p, p);
                assert_eq!(&p + &identity, p);
            }
        }

        #[test]
        fn inverse_addition() {
            let group = $group;

            for p in sample_points(group) {
                assert!((&p + &p.negate()).is_infinity());
                assert!((&p - &p).is_infinity());
            }
        }

        #[test]
        fn double_matches_addition() {
            let group = $group;

            for p in sample_points(group) {
                assert_eq!(p.double(), &p + &p);
                assert!(p.double().is_on_curve());
            }

            // a prime order generator never doubles to the identity
            assert!(!group.generator().double().is_infinity());
        }

        #[test]
        fn multiplication_by_special_scalars() {
            let group = $group;
            let n = BigInt::from(group.order().clone());
            let one = BigInt::from(1);

            for p in sample_points(group) {
                assert!(p.multiply_by_scalar(&BigInt::from(0)).is_infinity());
                assert!(p.multiply_by_scalar(&n).is_infinity());
                assert_eq!(p.multiply_by_scalar(&(&n + &one)), p);
                assert_eq!(p.multiply_by_scalar(&(&n - &one)), p.negate());
                assert_eq!(p.multiply_by_scalar(&-&one), p.negate());
            }
        }

        #[test]
        fn scalar_from_generator() {
            let group = $group;
            let generator = group.generator();

            let mut expected = group.infinity_point();
            for d in 0..16i64 {
                assert_eq!(group.new_point_from_scalar(&BigInt::from(d)), expected);
                expected += &generator;
            }
        }

        #[test]
        fn addition_is_commutative_and_associative() {
            let group = $group;
            let points: Vec<_> = sample_points(group).collect();

            for a in &points {
                for b in &points {
                    assert_eq!(a + b, b + a);
                    for c in &points {
                        assert_eq!(&(a + b) + c, a + &(b + c));
                    }
                }
            }
        }

        #[test]
        fn lincomb_matches_sum_of_products() {
            let group = $group;
            let generator = group.generator();
            let q = group.new_point_from_scalar(&BigInt::from(0xdead_beefu32));
            let (u1, u2) = (
                BigInt::from(group.order().clone() - BigUint::from(5u32)),
                BigInt::from(0x1357_9bdfu32),
            );

            assert_eq!(
                group.lincomb(&[(&generator, &u1), (&q, &u2)]),
                &(&generator * &u1) + &(&q * &u2)
            );
        }

        #[test]
        fn generator_from_x() {
            let group = $group;
            let generator = group.generator();
            let (x, y) = (generator.x().unwrap(), generator.y().unwrap());

            let roots = group.solve_for_y(x);
            assert_eq!(roots.len(), 2);
            assert!(roots.contains(y));
            assert_eq!(group.point_from_x(x.clone(), y.bit(0)), Ok(generator.clone()));
            assert_eq!(
                group.point_from_x(x.clone(), !y.bit(0)),
                Ok(generator.negate())
            );
        }
    };
    ($group:expr, $add_vectors:expr, $mul_vectors:expr) => {
        $crate::impl_group_law_tests!($group);

        /// Assert that the provided point matches the given test vector.
        macro_rules! assert_point_eq {
            ($actual:expr, $expected_x:expr, $expected_y:expr) => {
                let actual = $actual;
                assert_eq!(
                    actual.x(),
                    Some(&BigUint::from_bytes_be(&$expected_x[..]))
                );
                assert_eq!(
                    actual.y(),
                    Some(&BigUint::from_bytes_be(&$expected_y[..]))
                );
            };
        }

        #[test]
        fn test_vector_repeated_add() {
            let group = $group;
            let generator = group.generator();
            let mut p = generator.clone();

            for (x, y) in $add_vectors.iter() {
                assert_point_eq!(&p, x, y);
                p += &generator;
            }
        }

        #[test]
        fn test_vector_double_generator() {
            let group = $group;
            let (x, y) = &$add_vectors[1];
            assert_point_eq!(group.generator().double(), x, y);
        }

        #[test]
        fn test_vector_scalar_mult() {
            let group = $group;
            let generator = group.generator();

            for (k, x, y) in $mul_vectors.iter() {
                let k = BigUint::from_bytes_be(&k[..]);
                assert_point_eq!(&generator * &k, x, y);
                assert_point_eq!(group.new_point_from_scalar(&BigInt::from(k)), x, y);
            }
        }
    };
}
