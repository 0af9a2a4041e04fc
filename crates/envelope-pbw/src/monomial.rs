//! Monomials of the PBW basis.
//!
//! A monomial `b_i1^e1 b_i2^e2 ... b_ik^ek` is stored as its list of
//! `(index, exponent)` factors. In canonical form the indices are strictly
//! increasing in the basis order and every exponent is at least 1; the
//! empty list is the identity. The constructors that take an order
//! produce canonical form; the monomial itself does not remember the order.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use smallvec::SmallVec;

use crate::ordering::BasisKey;

/// Inline capacity; most monomials in practice involve few generators.
const INLINE_FACTORS: usize = 4;

/// A sorted monomial in the generators of a Lie algebra.
#[derive(Clone, PartialEq, Eq)]
pub struct PbwMonomial<I> {
    factors: SmallVec<[(I, u32); INLINE_FACTORS]>,
}

impl<I> PbwMonomial<I> {
    /// The identity monomial.
    #[must_use]
    pub fn one() -> Self {
        Self {
            factors: SmallVec::new(),
        }
    }

    /// The monomial `b_index`.
    #[must_use]
    pub fn gen(index: I) -> Self {
        Self::power(index, 1)
    }

    /// The monomial `b_index^exponent`.
    #[must_use]
    pub fn power(index: I, exponent: u32) -> Self {
        let mut factors = SmallVec::new();
        if exponent > 0 {
            factors.push((index, exponent));
        }
        Self { factors }
    }

    /// Returns true if this is the identity.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.factors.is_empty()
    }

    /// The `(index, exponent)` factors, in order.
    #[must_use]
    pub fn factors(&self) -> &[(I, u32)] {
        &self.factors
    }

    /// The number of distinct generators.
    #[must_use]
    pub fn num_factors(&self) -> usize {
        self.factors.len()
    }

    /// The total degree (sum of exponents).
    #[must_use]
    pub fn length(&self) -> u32 {
        self.factors.iter().map(|(_, e)| e).sum()
    }

    /// The first (smallest) generator.
    #[must_use]
    pub fn leading_support(&self) -> Option<&I> {
        self.factors.first().map(|(index, _)| index)
    }

    /// The last (largest) generator.
    #[must_use]
    pub fn trailing_support(&self) -> Option<&I> {
        self.factors.last().map(|(index, _)| index)
    }

    /// The letters of the monomial, with repetition.
    pub fn word_list(&self) -> impl Iterator<Item = &I> {
        self.factors
            .iter()
            .flat_map(|(index, e)| std::iter::repeat(index).take(*e as usize))
    }
}

impl<I: Clone + Eq> PbwMonomial<I> {
    /// Builds a canonical monomial from factors in any order.
    ///
    /// Repeated indices have their exponents added; zero exponents are
    /// dropped.
    #[must_use]
    pub fn from_exponents<T, O>(factors: T, order: &O) -> Self
    where
        T: IntoIterator<Item = (I, u32)>,
        O: BasisKey<I>,
    {
        let mut sorted: Vec<(I, u32)> = factors.into_iter().filter(|(_, e)| *e > 0).collect();
        sorted.sort_by(|a, b| order.compare(&a.0, &b.0));

        let mut factors: SmallVec<[(I, u32); INLINE_FACTORS]> = SmallVec::with_capacity(sorted.len());
        for (index, e) in sorted {
            match factors.last_mut() {
                Some((last, total)) if *last == index => *total += e,
                _ => factors.push((index, e)),
            }
        }
        Self { factors }
    }

    /// The exponent of `index` (zero if absent).
    #[must_use]
    pub fn exponent(&self, index: &I) -> u32 {
        self.factors
            .iter()
            .find(|(i, _)| i == index)
            .map_or(0, |(_, e)| *e)
    }

    /// Product in the free abelian monoid: merges two canonical monomials.
    ///
    /// This is the PBW product only when every generator of `self` is at
    /// most every generator of `other`.
    #[must_use]
    pub fn mul_with<O: BasisKey<I>>(&self, other: &Self, order: &O) -> Self {
        let (a, b) = (&self.factors, &other.factors);
        let mut factors = SmallVec::with_capacity(a.len() + b.len());
        let (mut i, mut j) = (0, 0);

        while i < a.len() && j < b.len() {
            let ((x, e), (y, f)) = (&a[i], &b[j]);
            match order.compare(x, y) {
                Ordering::Less => {
                    factors.push((x.clone(), *e));
                    i += 1;
                }
                Ordering::Greater => {
                    factors.push((y.clone(), *f));
                    j += 1;
                }
                Ordering::Equal if x == y => {
                    factors.push((x.clone(), e + f));
                    i += 1;
                    j += 1;
                }
                Ordering::Equal => {
                    factors.push((x.clone(), *e));
                    i += 1;
                }
            }
        }
        factors.extend(a[i..].iter().cloned());
        factors.extend(b[j..].iter().cloned());

        Self { factors }
    }

    /// Divides off one copy of the leading generator.
    #[must_use]
    pub fn without_leading(&self) -> Self {
        let mut factors = self.factors.clone();
        if let Some((_, e)) = factors.first_mut() {
            *e -= 1;
            if *e == 0 {
                factors.remove(0);
            }
        }
        Self { factors }
    }

    /// Divides off one copy of the trailing generator.
    #[must_use]
    pub fn without_trailing(&self) -> Self {
        let mut factors = self.factors.clone();
        if let Some((_, e)) = factors.last_mut() {
            *e -= 1;
            if *e == 0 {
                factors.pop();
            }
        }
        Self { factors }
    }
}

impl<I> Default for PbwMonomial<I> {
    fn default() -> Self {
        Self::one()
    }
}

impl<I: Hash> Hash for PbwMonomial<I> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.factors.as_slice().hash(state);
    }
}

impl<I: fmt::Debug> fmt::Debug for PbwMonomial<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.factors.is_empty() {
            return f.write_str("1");
        }
        for (k, (index, e)) in self.factors.iter().enumerate() {
            if k > 0 {
                f.write_str("*")?;
            }
            if *e == 1 {
                write!(f, "{index:?}")?;
            } else {
                write!(f, "{index:?}^{e}")?;
            }
        }
        Ok(())
    }
}
