//! Errors raised by Lie algebra construction and bracket evaluation.

use thiserror::Error;

/// Errors that can occur when building or evaluating a Lie algebra.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LieError {
    /// The index does not name a basis element.
    #[error("{0} is not a basis index of the Lie algebra")]
    UnknownIndex(String),

    /// The same index was listed twice in a basis.
    #[error("basis index {0} appears more than once")]
    DuplicateIndex(String),

    /// A relation assigns a nonzero value to `[x, x]`.
    #[error("the bracket [{0}, {0}] must vanish")]
    NonZeroSelfBracket(String),

    /// `[x, y]` and `[y, x]` were both given and are not negatives.
    #[error("relations for [{left}, {right}] and [{right}, {left}] are not negatives of each other")]
    InconsistentBracket {
        /// Left operand of the first relation.
        left: String,
        /// Right operand of the first relation.
        right: String,
    },

    /// `[x, [y, z]] + [y, [z, x]] + [z, [x, y]]` is nonzero.
    #[error("the Jacobi identity fails for ({0}, {1}, {2})")]
    JacobiViolation(String, String, String),
}
