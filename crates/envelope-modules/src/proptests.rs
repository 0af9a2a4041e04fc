//! Property-based tests for linear combinations.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::Combination;
    use envelope_rings::Z;

    fn small_combination() -> impl Strategy<Value = Combination<u8, Z>> {
        proptest::collection::vec((0u8..6, -5i64..5), 0..8)
            .prop_map(|terms| Combination::from_terms(terms.into_iter().map(|(b, c)| (b, Z::new(c)))))
    }

    proptest! {
        #[test]
        fn add_commutative(a in small_combination(), b in small_combination()) {
            prop_assert_eq!(a.clone() + b.clone(), b + a);
        }

        #[test]
        fn add_associative(a in small_combination(), b in small_combination(), c in small_combination()) {
            prop_assert_eq!((a.clone() + b.clone()) + c.clone(), a + (b + c));
        }

        #[test]
        fn sub_self_is_zero(a in small_combination()) {
            prop_assert!((a.clone() - a).is_zero());
        }

        #[test]
        fn no_zero_coefficients(a in small_combination(), b in small_combination()) {
            let sum = a - b;
            prop_assert!(sum.iter().all(|(_, c)| *c != Z::new(0)));
        }

        #[test]
        fn scale_distributes(a in small_combination(), b in small_combination(), k in -4i64..4) {
            let k = Z::new(k);
            prop_assert_eq!((a.clone() + b.clone()).scale(&k), a.scale(&k) + b.scale(&k));
        }
    }
}
