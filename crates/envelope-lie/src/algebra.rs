//! The `LieAlgebra` trait.
//!
//! A Lie algebra is known to the rest of the workspace only through its
//! basis and its bracket on pairs of basis elements. Everything else
//! (the bracket of general elements, embeddings into enveloping algebras)
//! is derived from these by bilinearity.

use std::fmt::Debug;
use std::hash::Hash;

use envelope_modules::Combination;
use envelope_rings::CommutativeRing;

use crate::error::LieError;

/// An element of a Lie algebra, as a combination of basis indices.
pub type LieElement<L> = Combination<<L as LieAlgebra>::Index, <L as LieAlgebra>::Coeff>;

/// A Lie algebra with a distinguished basis.
///
/// # Laws
///
/// - `[x, x] = 0` (hence `[x, y] = -[y, x]`)
/// - `[x, [y, z]] + [y, [z, x]] + [z, [x, y]] = 0`
///
/// Implementations are trusted to satisfy these; `StructureCoefficients`
/// checks them when it is built.
pub trait LieAlgebra {
    /// Identifies one basis element.
    type Index: Clone + Eq + Hash + Debug;

    /// The base ring.
    type Coeff: CommutativeRing;

    /// Returns true if `index` names a basis element.
    fn contains(&self, index: &Self::Index) -> bool;

    /// Lists the basis, or `None` for an infinite-dimensional algebra.
    fn basis_indices(&self) -> Option<Vec<Self::Index>>;

    /// Computes `[b_a, b_b]` as a combination of basis elements.
    ///
    /// # Errors
    ///
    /// Returns `LieError::UnknownIndex` if either index is not in the basis.
    fn bracket_on_basis(
        &self,
        a: &Self::Index,
        b: &Self::Index,
    ) -> Result<Combination<Self::Index, Self::Coeff>, LieError>;

    /// The dimension, or `None` if infinite.
    fn dimension(&self) -> Option<usize> {
        self.basis_indices().map(|basis| basis.len())
    }

    /// Checks that `index` names a basis element.
    ///
    /// # Errors
    ///
    /// Returns `LieError::UnknownIndex` otherwise.
    fn check_index(&self, index: &Self::Index) -> Result<(), LieError> {
        if self.contains(index) {
            Ok(())
        } else {
            Err(LieError::UnknownIndex(format!("{index:?}")))
        }
    }

    /// The basis element `b_index`.
    ///
    /// # Errors
    ///
    /// Returns `LieError::UnknownIndex` if the index is not in the basis.
    fn monomial(&self, index: Self::Index) -> Result<Combination<Self::Index, Self::Coeff>, LieError> {
        self.check_index(&index)?;
        Ok(Combination::monomial(index))
    }

    /// The bracket of two arbitrary elements, extended bilinearly.
    ///
    /// # Errors
    ///
    /// Propagates `bracket_on_basis` failures.
    fn bracket(
        &self,
        x: &Combination<Self::Index, Self::Coeff>,
        y: &Combination<Self::Index, Self::Coeff>,
    ) -> Result<Combination<Self::Index, Self::Coeff>, LieError> {
        let mut result = Combination::zero();
        for (a, c) in x {
            for (b, d) in y {
                let term = self.bracket_on_basis(a, b)?;
                result.add_scaled(&term, &(c.clone() * d.clone()));
            }
        }
        Ok(result)
    }
}
