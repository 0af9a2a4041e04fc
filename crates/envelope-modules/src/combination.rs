//! Finite linear combinations of basis elements.
//!
//! Terms are stored as a hash map from basis key to coefficient. Zero
//! coefficients are never stored, so two combinations are equal exactly
//! when their term maps are equal, regardless of how they were built.

use std::collections::hash_map::{self, Entry};
use std::fmt;
use std::hash::Hash;
use std::ops::{Add, Neg, Sub};

use envelope_rings::Ring;
use rustc_hash::FxHashMap;

/// A finite linear combination `sum c_b * b` with `c_b` in a ring `R`.
///
/// # Invariant
///
/// No stored coefficient is zero.
#[derive(Clone)]
pub struct Combination<B, R> {
    terms: FxHashMap<B, R>,
}

impl<B: Eq + Hash, R: Ring> Combination<B, R> {
    /// The zero combination.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            terms: FxHashMap::default(),
        }
    }

    /// The basis element `b` with coefficient 1.
    #[must_use]
    pub fn monomial(b: B) -> Self {
        Self::term(b, R::one())
    }

    /// The single term `c * b` (zero if `c` is zero).
    #[must_use]
    pub fn term(b: B, c: R) -> Self {
        let mut result = Self::zero();
        result.add_term(b, c);
        result
    }

    /// Sums a sequence of terms, merging repeated keys.
    #[must_use]
    pub fn from_terms<I: IntoIterator<Item = (B, R)>>(terms: I) -> Self {
        let mut result = Self::zero();
        for (b, c) in terms {
            result.add_term(b, c);
        }
        result
    }

    /// Adds `c * b` in place.
    pub fn add_term(&mut self, b: B, c: R) {
        if c.is_zero() {
            return;
        }

        match self.terms.entry(b) {
            Entry::Occupied(mut entry) => {
                let old = std::mem::replace(entry.get_mut(), R::zero());
                let sum = old + c;
                if sum.is_zero() {
                    entry.remove();
                } else {
                    *entry.get_mut() = sum;
                }
            }
            Entry::Vacant(entry) => {
                entry.insert(c);
            }
        }
    }

    /// Adds `c * other` in place.
    pub fn add_scaled(&mut self, other: &Self, c: &R)
    where
        B: Clone,
    {
        if c.is_zero() {
            return;
        }
        for (b, x) in &other.terms {
            self.add_term(b.clone(), x.clone() * c.clone());
        }
    }

    /// Returns the coefficient of `b` (zero if `b` is not in the support).
    #[must_use]
    pub fn coefficient(&self, b: &B) -> R {
        self.terms.get(b).cloned().unwrap_or_else(R::zero)
    }

    /// Returns the coefficient of `b` if it is nonzero.
    #[must_use]
    pub fn get(&self, b: &B) -> Option<&R> {
        self.terms.get(b)
    }

    /// Returns true if `b` has a nonzero coefficient.
    #[must_use]
    pub fn contains(&self, b: &B) -> bool {
        self.terms.contains_key(b)
    }

    /// Returns true if this is the zero combination.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns true if there are no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Iterates over the basis keys with nonzero coefficient.
    pub fn support(&self) -> impl Iterator<Item = &B> {
        self.terms.keys()
    }

    /// Iterates over the terms in unspecified order.
    pub fn iter(&self) -> hash_map::Iter<'_, B, R> {
        self.terms.iter()
    }

    /// Returns the single term if this combination has exactly one.
    #[must_use]
    pub fn as_single_term(&self) -> Option<(&B, &R)> {
        if self.terms.len() == 1 {
            self.terms.iter().next()
        } else {
            None
        }
    }

    /// Multiplies every coefficient by `c`.
    #[must_use]
    pub fn scale(&self, c: &R) -> Self
    where
        B: Clone,
    {
        let mut result = Self::zero();
        result.add_scaled(self, c);
        result
    }

    /// Re-indexes the terms through `f`, merging keys that collide.
    #[must_use]
    pub fn map_support<C, F>(self, mut f: F) -> Combination<C, R>
    where
        C: Eq + Hash,
        F: FnMut(B) -> C,
    {
        Combination::from_terms(self.terms.into_iter().map(|(b, c)| (f(b), c)))
    }

    /// Re-indexes the terms through a fallible `f`.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `f`.
    pub fn try_map_support<C, E, F>(self, mut f: F) -> Result<Combination<C, R>, E>
    where
        C: Eq + Hash,
        F: FnMut(B) -> Result<C, E>,
    {
        let mut result = Combination::zero();
        for (b, c) in self.terms {
            result.add_term(f(b)?, c);
        }
        Ok(result)
    }

    /// Applies a ring map to every coefficient, dropping terms sent to zero.
    #[must_use]
    pub fn map_coefficients<S, F>(self, mut f: F) -> Combination<B, S>
    where
        S: Ring,
        F: FnMut(R) -> S,
    {
        Combination::from_terms(self.terms.into_iter().map(|(b, c)| (b, f(c))))
    }

    /// Returns the terms sorted by a key on the basis.
    ///
    /// This is the only deterministic view of the terms.
    #[must_use]
    pub fn sorted_by_key<K, F>(&self, mut key: F) -> Vec<(&B, &R)>
    where
        K: Ord,
        F: FnMut(&B) -> K,
    {
        let mut terms: Vec<(K, (&B, &R))> = self.terms.iter().map(|t| (key(t.0), t)).collect();
        terms.sort_by(|a, b| a.0.cmp(&b.0));
        terms.into_iter().map(|(_, t)| t).collect()
    }
}

impl<B: Eq + Hash, R: Ring> Default for Combination<B, R> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<B: Eq + Hash, R: PartialEq> PartialEq for Combination<B, R> {
    fn eq(&self, other: &Self) -> bool {
        self.terms == other.terms
    }
}

impl<B: Eq + Hash, R: Eq> Eq for Combination<B, R> {}

impl<B: fmt::Debug, R: fmt::Debug> fmt::Debug for Combination<B, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.terms.iter()).finish()
    }
}

impl<B: Eq + Hash, R: Ring> FromIterator<(B, R)> for Combination<B, R> {
    fn from_iter<I: IntoIterator<Item = (B, R)>>(iter: I) -> Self {
        Self::from_terms(iter)
    }
}

impl<B: Eq + Hash, R: Ring> Extend<(B, R)> for Combination<B, R> {
    fn extend<I: IntoIterator<Item = (B, R)>>(&mut self, iter: I) {
        for (b, c) in iter {
            self.add_term(b, c);
        }
    }
}

impl<B, R> IntoIterator for Combination<B, R> {
    type Item = (B, R);
    type IntoIter = hash_map::IntoIter<B, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.into_iter()
    }
}

impl<'a, B, R> IntoIterator for &'a Combination<B, R> {
    type Item = (&'a B, &'a R);
    type IntoIter = hash_map::Iter<'a, B, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

impl<B: Eq + Hash, R: Ring> Add for Combination<B, R> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self.extend(rhs);
        self
    }
}

impl<B: Eq + Hash, R: Ring> Neg for Combination<B, R> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            terms: self.terms.into_iter().map(|(b, c)| (b, -c)).collect(),
        }
    }
}

impl<B: Eq + Hash, R: Ring> Sub for Combination<B, R> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + (-rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use envelope_rings::{Zp, Q, Z};

    #[test]
    fn test_cancellation_drops_terms() {
        let mut x = Combination::from_terms([("a", Z::new(2)), ("b", Z::new(1))]);
        x.add_term("a", Z::new(-2));
        assert_eq!(x.len(), 1);
        assert!(!x.contains(&"a"));
        assert_eq!(x.coefficient(&"a"), Z::new(0));
        assert_eq!(x.coefficient(&"b"), Z::new(1));
    }

    #[test]
    fn test_equality_ignores_insertion_order() {
        let x = Combination::from_terms([(1, Q::new(1, 2)), (2, Q::from_integer(3))]);
        let y = Combination::from_terms([(2, Q::from_integer(1)), (1, Q::new(1, 2)), (2, Q::from_integer(2))]);
        assert_eq!(x, y);
    }

    #[test]
    fn test_zero_terms_never_stored() {
        let x: Combination<&str, Z> = Combination::term("a", Z::new(0));
        assert!(x.is_zero());
        assert_eq!(x, Combination::zero());
    }

    #[test]
    fn test_arithmetic() {
        let x = Combination::from_terms([("a", Z::new(1)), ("b", Z::new(2))]);
        let y = Combination::from_terms([("b", Z::new(2)), ("c", Z::new(5))]);

        let diff = x.clone() - y.clone();
        assert_eq!(diff, Combination::from_terms([("a", Z::new(1)), ("c", Z::new(-5))]));

        let sum = x.clone() + y;
        assert_eq!(sum.coefficient(&"b"), Z::new(4));

        assert!((x.clone() - x.clone()).is_zero());
        assert_eq!(x.scale(&Z::new(3)).coefficient(&"b"), Z::new(6));
        assert!(x.scale(&Z::new(0)).is_zero());
    }

    #[test]
    fn test_map_support_merges_collisions() {
        let x = Combination::from_terms([(1, Z::new(1)), (-1, Z::new(-1)), (2, Z::new(4))]);
        let squared = x.map_support(|k: i32| k * k);
        assert_eq!(squared, Combination::term(4, Z::new(4)));
    }

    #[test]
    fn test_try_map_support() {
        let x = Combination::from_terms([(1u8, Z::new(1)), (7u8, Z::new(1))]);
        let result: Result<Combination<u8, Z>, u8> =
            x.try_map_support(|k| if k < 5 { Ok(k) } else { Err(k) });
        assert_eq!(result, Err(7));
    }

    #[test]
    fn test_map_coefficients_drops_zeros() {
        let x = Combination::from_terms([("a", Z::new(7)), ("b", Z::new(3))]);
        let reduced = x.map_coefficients(|c| Zp::<7>::from_signed(c.to_i64().unwrap()));
        assert_eq!(reduced, Combination::term("b", Zp::<7>::new(3)));
    }

    #[test]
    fn test_sorted_by_key() {
        let x = Combination::from_terms([(3, Z::new(1)), (1, Z::new(2)), (2, Z::new(3))]);
        let keys: Vec<i32> = x.sorted_by_key(|k| *k).into_iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec![1, 2, 3]);
        let rev: Vec<i32> = x.sorted_by_key(|k| -k).into_iter().map(|(k, _)| *k).collect();
        assert_eq!(rev, vec![3, 2, 1]);
    }
}
