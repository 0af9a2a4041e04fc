//! Magmas, monoids and groups.
//!
//! The algebra constructor only needs to multiply elements and test
//! membership; identity and inverses unlock `one`, `pow` and `antipode`.

use std::fmt::Debug;
use std::hash::Hash;

/// A set with a binary operation.
pub trait Magma {
    /// The element type.
    type Element: Clone + Eq + Hash + Debug;

    /// Returns true if `x` is an element.
    fn contains(&self, x: &Self::Element) -> bool;

    /// Computes `x y`.
    ///
    /// Both arguments must be elements; implementations may panic otherwise.
    fn op(&self, x: &Self::Element, y: &Self::Element) -> Self::Element;

    /// Lists the elements, or `None` if there are infinitely many.
    fn elements(&self) -> Option<Vec<Self::Element>>;

    /// A generating set.
    fn generators(&self) -> Vec<Self::Element>;

    /// The number of elements, or `None` if infinite.
    fn order(&self) -> Option<usize> {
        self.elements().map(|elements| elements.len())
    }
}

/// An associative magma with identity.
pub trait Monoid: Magma {
    /// The identity element.
    fn identity(&self) -> Self::Element;
}

/// A monoid in which every element is invertible.
pub trait Group: Monoid {
    /// The inverse of `x`.
    fn inverse(&self, x: &Self::Element) -> Self::Element;
}
