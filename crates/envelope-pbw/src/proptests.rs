//! Property-based tests for PBW arithmetic.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use proptest::prelude::*;

    use crate::{ElementOf, NaturalOrder, PbwBasis, PbwMonomial, ReverseOrder};
    use envelope_lie::{sl2, LieAlgebra, StructureCoefficients};
    use envelope_modules::Combination;
    use envelope_rings::Q;

    type Sl2 = StructureCoefficients<&'static str, Q>;

    fn sl2_pbw() -> PbwBasis<Sl2, NaturalOrder> {
        PbwBasis::new(Arc::new(sl2().unwrap()), NaturalOrder).unwrap()
    }

    fn lie_element() -> impl Strategy<Value = Combination<&'static str, Q>> {
        proptest::collection::vec((prop::sample::select(vec!["E", "F", "H"]), -3i64..3), 0..4)
            .prop_map(|terms| Combination::from_terms(terms.into_iter().map(|(b, c)| (b, Q::from_integer(c)))))
    }

    /// Small elements: up to three terms, each a product of up to three
    /// generators in arbitrary order.
    fn element() -> impl Strategy<Value = ElementOf<Sl2>> {
        let word = proptest::collection::vec(prop::sample::select(vec!["E", "F", "H"]), 0..3);
        proptest::collection::vec((word, -3i64..3), 0..3).prop_map(|terms| {
            let pbw = sl2_pbw();
            let mut result = pbw.zero();
            for (word, c) in terms {
                let factors: Vec<_> = word.into_iter().map(|g| pbw.gen(g).unwrap()).collect();
                let product = pbw.multiply_all(&factors).unwrap();
                result.add_scaled(&product, &Q::from_integer(c));
            }
            result
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn multiplication_associative(x in element(), y in element(), z in element()) {
            let pbw = sl2_pbw();
            let left = pbw.multiply(&pbw.multiply(&x, &y).unwrap(), &z).unwrap();
            let right = pbw.multiply(&x, &pbw.multiply(&y, &z).unwrap()).unwrap();
            prop_assert_eq!(left, right);
        }

        #[test]
        fn one_is_identity(x in element()) {
            let pbw = sl2_pbw();
            prop_assert_eq!(pbw.multiply(&pbw.one(), &x).unwrap(), x.clone());
            prop_assert_eq!(pbw.multiply(&x, &pbw.one()).unwrap(), x);
        }

        #[test]
        fn degree_is_subadditive(x in element(), y in element()) {
            let pbw = sl2_pbw();
            let product = pbw.multiply(&x, &y).unwrap();
            if let (Some(dx), Some(dy), Some(d)) =
                (pbw.maximal_degree(&x), pbw.maximal_degree(&y), pbw.maximal_degree(&product))
            {
                prop_assert!(d <= dx + dy);
            }
        }

        #[test]
        fn commutator_of_lifts_is_lifted_bracket(x in lie_element(), y in lie_element()) {
            let pbw = sl2_pbw();
            let (ux, uy) = (pbw.lift(&x).unwrap(), pbw.lift(&y).unwrap());
            let bracket = pbw.lie_algebra().bracket(&x, &y).unwrap();
            prop_assert_eq!(pbw.commutator(&ux, &uy).unwrap(), pbw.lift(&bracket).unwrap());
        }

        #[test]
        fn lift_then_retract(x in lie_element()) {
            let pbw = sl2_pbw();
            prop_assert_eq!(pbw.retract(&pbw.lift(&x).unwrap()).unwrap(), x);
        }

        #[test]
        fn products_agree_across_orders(x in element(), y in element()) {
            let natural = sl2_pbw();
            let reverse = PbwBasis::new(Arc::clone(natural.lie_algebra()), ReverseOrder).unwrap();

            let product = natural.multiply(&x, &y).unwrap();
            let (rx, ry) = (reverse.convert_from(&natural, &x).unwrap(), reverse.convert_from(&natural, &y).unwrap());
            let reverse_product = reverse.multiply(&rx, &ry).unwrap();

            prop_assert_eq!(natural.convert_from(&reverse, &reverse_product).unwrap(), product);
        }

        #[test]
        fn sorted_monomials_multiply_without_rewriting(e in 0u32..4, f in 0u32..4, h in 0u32..4) {
            let pbw = sl2_pbw();
            let m = pbw.monomial_from_exponents([("E", e), ("F", f), ("H", h)]).unwrap();
            let split = pbw.multiply_all([
                &pbw.monomial(PbwMonomial::power("E", e)),
                &pbw.monomial(PbwMonomial::power("F", f)),
                &pbw.monomial(PbwMonomial::power("H", h)),
            ]).unwrap();
            prop_assert_eq!(split, pbw.monomial(m));
        }
    }
}
