//! Property-based tests for group algebras.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use proptest::prelude::*;

    use crate::{GroupAlgebra, GroupAlgebraElement, Magma, PermutationGroup};
    use envelope_rings::{Ring, Z};

    fn s4() -> GroupAlgebra<PermutationGroup, Z> {
        GroupAlgebra::new(Arc::new(PermutationGroup::symmetric(4)))
    }

    fn element() -> impl Strategy<Value = GroupAlgebraElement<PermutationGroup, Z>> {
        proptest::collection::vec((0usize..24, -5i64..5), 0..6).prop_map(|terms| {
            let algebra = s4();
            let elements = algebra.group().sorted_elements().to_vec();
            terms
                .into_iter()
                .map(|(k, c)| (elements[k].clone(), Z::from(c)))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn multiplication_associative(x in element(), y in element(), z in element()) {
            let algebra = s4();
            let left = algebra.multiply(&algebra.multiply(&x, &y), &z);
            let right = algebra.multiply(&x, &algebra.multiply(&y, &z));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn augmentation_is_multiplicative(x in element(), y in element()) {
            let algebra = s4();
            let product = algebra.augmentation(&algebra.multiply(&x, &y));
            prop_assert_eq!(product, algebra.augmentation(&x) * algebra.augmentation(&y));
        }

        #[test]
        fn antipode_is_an_involution(x in element()) {
            let algebra = s4();
            prop_assert_eq!(algebra.antipode(&algebra.antipode(&x)), x);
        }

        #[test]
        fn closure_is_closed(i in 0usize..24, j in 0usize..24) {
            let group = PermutationGroup::symmetric(4);
            let elements = group.sorted_elements();
            prop_assert!(group.contains(&group.op(&elements[i], &elements[j])));
        }

        #[test]
        fn one_is_identity(x in element()) {
            let algebra = s4();
            prop_assert_eq!(algebra.multiply(&algebra.one(), &x), x.clone());
            prop_assert_eq!(algebra.multiply(&x, &algebra.one()), x);
            prop_assert!(algebra.augmentation(&algebra.one()).is_one());
        }
    }
}
