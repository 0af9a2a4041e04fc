//! Property-based tests for the coefficient rings.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{Field, Ring, Q, Z, Zp};

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn small_rational() -> impl Strategy<Value = Q> {
        (small_int(), prop_oneof![(-50i64..=-1i64), (1i64..=50i64)]).prop_map(|(n, d)| Q::new(n, d))
    }

    proptest! {
        #[test]
        fn integer_distributive(a in small_int(), b in small_int(), c in small_int()) {
            let (a, b, c) = (Z::new(a), Z::new(b), Z::new(c));
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn integer_mul_by_scalar_matches_product(a in small_int(), n in small_int()) {
            prop_assert_eq!(Z::new(a).mul_by_scalar(n), Z::new(a * n));
        }

        #[test]
        fn rational_add_inverse(a in small_rational()) {
            prop_assert!((a.clone() + (-a)).is_zero());
        }

        #[test]
        fn rational_mul_associative(a in small_rational(), b in small_rational(), c in small_rational()) {
            prop_assert_eq!(
                (a.clone() * b.clone()) * c.clone(),
                a * (b * c)
            );
        }

        #[test]
        fn rational_inverse(a in small_rational()) {
            prop_assume!(!a.is_zero());
            let inv = a.inv().unwrap();
            prop_assert!((a * inv).is_one());
        }

        #[test]
        fn prime_field_from_i64_is_ring_map(a in small_int(), b in small_int()) {
            type F = Zp<101>;
            prop_assert_eq!(F::from_i64(a) * F::from_i64(b), F::from_i64(a * b));
            prop_assert_eq!(F::from_i64(a) + F::from_i64(b), F::from_i64(a + b));
        }
    }
}
