//! Errors raised when building groups and their algebras.

use thiserror::Error;

/// Errors that can occur in group and group-algebra construction.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GroupAlgebraError {
    /// A multiplication table is not square or has out-of-range entries.
    #[error("invalid multiplication table: {0}")]
    InvalidTable(String),

    /// `(a b) c != a (b c)` for the given triple.
    #[error("operation is not associative: ({0} {1}) {2} != {0} ({1} {2})")]
    NotAssociative(usize, usize, usize),

    /// No element is a two-sided identity.
    #[error("no two-sided identity element")]
    MissingIdentity,

    /// The given element has no two-sided inverse.
    #[error("element {0} has no inverse")]
    MissingInverse(usize),

    /// The element does not belong to the group.
    #[error("{0} is not an element of the group")]
    NotInGroup(String),

    /// A permutation was given malformed images or cycles.
    #[error("invalid permutation: {0}")]
    InvalidPermutation(String),
}
