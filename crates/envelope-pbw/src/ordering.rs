//! Orders on Lie algebra basis indices.
//!
//! The order decides which monomials are sorted (and therefore basis
//! elements of the PBW basis) and which pairs must be rewritten. It is
//! given by a sort key per index, compared with `Ord`.

use std::cmp::{Ordering, Reverse};
use std::hash::Hash;
use std::marker::PhantomData;

use rustc_hash::FxHashMap;

use crate::monomial::PbwMonomial;

/// A total order on basis indices, given by a sort key.
///
/// Distinct indices must receive distinct keys. `PbwBasis` checks this
/// for finite-dimensional Lie algebras when it is built.
pub trait BasisKey<I> {
    /// The sort key.
    type Key: Ord;

    /// Returns the sort key of an index.
    fn key(&self, index: &I) -> Self::Key;

    /// Compares two indices.
    fn compare(&self, a: &I, b: &I) -> Ordering {
        self.key(a).cmp(&self.key(b))
    }
}

/// The comparison key of a monomial: longer monomials first, then the
/// sort keys of its letters, lexicographically.
pub type MonomialKey<K> = (Reverse<u32>, Vec<K>);

/// Computes the [`MonomialKey`] of a monomial.
pub fn monomial_key<I, O: BasisKey<I>>(order: &O, m: &PbwMonomial<I>) -> MonomialKey<O::Key> {
    (Reverse(m.length()), m.word_list().map(|index| order.key(index)).collect())
}

/// The order given by the index type's own `Ord`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<I: Ord + Clone> BasisKey<I> for NaturalOrder {
    type Key = I;

    fn key(&self, index: &I) -> I {
        index.clone()
    }

    fn compare(&self, a: &I, b: &I) -> Ordering {
        a.cmp(b)
    }
}

/// The reverse of the index type's own `Ord`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReverseOrder;

impl<I: Ord + Clone> BasisKey<I> for ReverseOrder {
    type Key = Reverse<I>;

    fn key(&self, index: &I) -> Reverse<I> {
        Reverse(index.clone())
    }

    fn compare(&self, a: &I, b: &I) -> Ordering {
        b.cmp(a)
    }
}

/// The order in which indices appear in an explicit list.
///
/// Indices missing from the list sort after every listed index, among
/// themselves by their own `Ord`.
#[derive(Clone, Debug)]
pub struct Positional<I> {
    ranks: FxHashMap<I, usize>,
}

impl<I: Eq + Hash> Positional<I> {
    /// Orders indices by their first position in `order`.
    pub fn new<T: IntoIterator<Item = I>>(order: T) -> Self {
        let mut ranks = FxHashMap::default();
        for (rank, index) in order.into_iter().enumerate() {
            ranks.entry(index).or_insert(rank);
        }
        Self { ranks }
    }

    /// The position of an index, if listed.
    #[must_use]
    pub fn rank(&self, index: &I) -> Option<usize> {
        self.ranks.get(index).copied()
    }
}

impl<I: Ord + Clone + Hash> BasisKey<I> for Positional<I> {
    type Key = (usize, Option<I>);

    fn key(&self, index: &I) -> (usize, Option<I>) {
        match self.rank(index) {
            Some(rank) => (rank, None),
            None => (usize::MAX, Some(index.clone())),
        }
    }
}

/// An order given by an arbitrary key function.
///
/// ```rust,ignore
/// // Sort the sl2 basis E, F, H in reverse.
/// let order = ByKey::new(|x: &&str| -(["E", "F", "H"].iter().position(|y| y == x).unwrap() as i64));
/// ```
pub struct ByKey<F, K> {
    f: F,
    _key: PhantomData<fn() -> K>,
}

impl<F, K> ByKey<F, K> {
    /// Wraps a key function.
    pub fn new(f: F) -> Self {
        Self { f, _key: PhantomData }
    }
}

impl<I, K, F> BasisKey<I> for ByKey<F, K>
where
    K: Ord,
    F: Fn(&I) -> K,
{
    type Key = K;

    fn key(&self, index: &I) -> K {
        (self.f)(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_natural_and_reverse() {
        assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
        assert_eq!(ReverseOrder.compare(&1, &2), Ordering::Greater);
        assert_eq!(BasisKey::<i32>::key(&ReverseOrder, &3), Reverse(3));
    }

    #[test]
    fn test_positional() {
        let order = Positional::new(["H", "E", "F", "E"]);
        assert_eq!(order.compare(&"H", &"E"), Ordering::Less);
        assert_eq!(order.compare(&"F", &"E"), Ordering::Greater);
        assert_eq!(order.rank(&"E"), Some(1));
        assert_eq!(order.key(&"X"), (usize::MAX, Some("X")));
        assert_eq!(order.compare(&"X", &"F"), Ordering::Greater);
        assert_eq!(order.compare(&"X", &"Y"), Ordering::Less);
    }

    #[test]
    fn test_by_key() {
        let order = ByKey::new(|x: &i64| x.abs());
        assert_eq!(order.compare(&-1, &2), Ordering::Less);
        assert_eq!(order.compare(&-3, &2), Ordering::Greater);
    }

    #[test]
    fn test_monomial_key_prefers_longer_monomials() {
        let order = NaturalOrder;
        let long = PbwMonomial::from_exponents([(2, 2)], &order);
        let short = PbwMonomial::from_exponents([(1, 1)], &order);
        assert!(monomial_key(&order, &long) < monomial_key(&order, &short));

        let ab = PbwMonomial::from_exponents([(1, 1), (2, 1)], &order);
        let bb = PbwMonomial::from_exponents([(2, 2)], &order);
        assert_eq!(monomial_key(&order, &ab), (Reverse(2), vec![1, 2]));
        assert!(monomial_key(&order, &ab) < monomial_key(&order, &bb));
    }
}
