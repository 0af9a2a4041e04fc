//! Property-based tests for Lie brackets.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{sl2, GeneralLinear, LieAlgebra};
    use envelope_modules::Combination;
    use envelope_rings::Q;

    fn sl2_element() -> impl Strategy<Value = Combination<&'static str, Q>> {
        proptest::collection::vec((prop::sample::select(vec!["E", "F", "H"]), -4i64..4), 0..5)
            .prop_map(|terms| Combination::from_terms(terms.into_iter().map(|(b, c)| (b, Q::from_integer(c)))))
    }

    fn gl3_element() -> impl Strategy<Value = Combination<(usize, usize), Q>> {
        proptest::collection::vec(((0usize..3, 0usize..3), -4i64..4), 0..6)
            .prop_map(|terms| Combination::from_terms(terms.into_iter().map(|(b, c)| (b, Q::from_integer(c)))))
    }

    proptest! {
        #[test]
        fn sl2_bracket_antisymmetric(x in sl2_element(), y in sl2_element()) {
            let sl2 = sl2::<Q>().unwrap();
            let xy = sl2.bracket(&x, &y).unwrap();
            let yx = sl2.bracket(&y, &x).unwrap();
            prop_assert!((xy + yx).is_zero());
        }

        #[test]
        fn gl3_jacobi(x in gl3_element(), y in gl3_element(), z in gl3_element()) {
            let gl3 = GeneralLinear::<Q>::new(3);
            let jacobi = gl3.bracket(&x, &gl3.bracket(&y, &z).unwrap()).unwrap()
                + gl3.bracket(&y, &gl3.bracket(&z, &x).unwrap()).unwrap()
                + gl3.bracket(&z, &gl3.bracket(&x, &y).unwrap()).unwrap();
            prop_assert!(jacobi.is_zero());
        }
    }
}
