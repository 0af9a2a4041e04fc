//! Multiplication in the PBW basis.
//!
//! The product of two sorted monomials is sorted again by the rewrite
//!
//! ```text
//! (m b_t) (b_l n) = m (b_l b_t + [b_t, b_l]) n        (b_t > b_l)
//! ```
//!
//! applied at the junction of the two monomials, where `b_t` is the
//! trailing generator of the left factor and `b_l` the leading generator
//! of the right one. If `b_t <= b_l` the concatenation is already sorted
//! and the product is a single monomial.

use std::cmp::Ordering;

use envelope_lie::LieAlgebra;
use envelope_modules::Combination;
use envelope_rings::Ring;
use rayon::prelude::*;
use tracing::trace;

use crate::basis::{ElementOf, PbwBasis};
use crate::error::PbwError;
use crate::monomial::PbwMonomial;
use crate::ordering::BasisKey;

impl<L, O> PbwBasis<L, O>
where
    L: LieAlgebra,
    O: BasisKey<L::Index>,
{
    /// The product of two basis monomials.
    ///
    /// # Errors
    ///
    /// Propagates bracket failures from the Lie algebra.
    pub fn product_on_basis(
        &self,
        lhs: &PbwMonomial<L::Index>,
        rhs: &PbwMonomial<L::Index>,
    ) -> Result<ElementOf<L>, PbwError> {
        let (trail, lead) = match (lhs.trailing_support(), rhs.leading_support()) {
            (Some(trail), Some(lead)) => (trail, lead),
            _ => return Ok(self.monomial(lhs.mul_with(rhs, &self.order))),
        };

        if self.order.compare(trail, lead) != Ordering::Greater {
            return Ok(self.monomial(lhs.mul_with(rhs, &self.order)));
        }

        if self.config.cache_products {
            if let Some(product) = self.products.get(lhs, rhs) {
                return Ok(product);
            }
        }

        let mut correction: ElementOf<L> = self.lie.bracket_on_basis(trail, lead)?.map_support(PbwMonomial::gen);
        correction.add_term(
            PbwMonomial::from_exponents([(lead.clone(), 1), (trail.clone(), 1)], &self.order),
            <L::Coeff as Ring>::one(),
        );

        let left = self.multiply(&self.monomial(lhs.without_trailing()), &correction)?;
        let product = self.multiply(&left, &self.monomial(rhs.without_leading()))?;

        trace!(?lhs, ?rhs, terms = product.len(), "rewrote PBW product");

        if self.config.cache_products {
            self.products.insert(lhs, rhs, &product);
        }
        Ok(product)
    }

    /// The product of two elements, extended bilinearly from
    /// [`PbwBasis::product_on_basis`].
    ///
    /// # Errors
    ///
    /// Propagates bracket failures from the Lie algebra.
    pub fn multiply(&self, x: &ElementOf<L>, y: &ElementOf<L>) -> Result<ElementOf<L>, PbwError> {
        let mut result = Combination::zero();
        for (a, c) in x {
            for (b, d) in y {
                let product = self.product_on_basis(a, b)?;
                result.add_scaled(&product, &(c.clone() * d.clone()));
            }
        }
        Ok(result)
    }

    /// The product of a sequence of elements, left to right; `1` if empty.
    ///
    /// # Errors
    ///
    /// Propagates bracket failures from the Lie algebra.
    pub fn multiply_all<'a, T>(&self, factors: T) -> Result<ElementOf<L>, PbwError>
    where
        T: IntoIterator<Item = &'a ElementOf<L>>,
        ElementOf<L>: 'a,
    {
        let mut result = self.one();
        for x in factors {
            result = self.multiply(&result, x)?;
        }
        Ok(result)
    }

    /// Computes `x^n` by repeated squaring; `x^0 = 1`.
    ///
    /// # Errors
    ///
    /// Propagates bracket failures from the Lie algebra.
    pub fn pow(&self, x: &ElementOf<L>, mut n: u32) -> Result<ElementOf<L>, PbwError> {
        let mut result = self.one();
        let mut base = x.clone();
        while n > 0 {
            if n & 1 == 1 {
                result = self.multiply(&result, &base)?;
            }
            n >>= 1;
            if n > 0 {
                base = self.multiply(&base, &base)?;
            }
        }
        Ok(result)
    }

    /// The commutator `xy - yx`.
    ///
    /// # Errors
    ///
    /// Propagates bracket failures from the Lie algebra.
    pub fn commutator(&self, x: &ElementOf<L>, y: &ElementOf<L>) -> Result<ElementOf<L>, PbwError> {
        Ok(self.multiply(x, y)? - self.multiply(y, x)?)
    }

    /// Multiplies many pairs in parallel, sharing the product cache.
    ///
    /// # Errors
    ///
    /// Returns the first bracket failure encountered.
    pub fn multiply_batch(&self, pairs: &[(ElementOf<L>, ElementOf<L>)]) -> Result<Vec<ElementOf<L>>, PbwError>
    where
        Self: Sync,
        ElementOf<L>: Send + Sync,
    {
        pairs.par_iter().map(|(x, y)| self.multiply(x, y)).collect()
    }
}
