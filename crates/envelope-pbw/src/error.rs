//! Errors raised by PBW basis construction and arithmetic.

use envelope_lie::LieError;
use thiserror::Error;

/// Errors that can occur in a PBW basis.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PbwError {
    /// The Lie algebra rejected an index or a bracket.
    #[error(transparent)]
    Lie(#[from] LieError),

    /// The element has no preimage in the Lie algebra.
    #[error("{0} is not in the image")]
    NotInImage(String),

    /// Two distinct basis indices received the same sort key.
    #[error("the basis order does not separate {0} and {1}")]
    OrderNotTotal(String, String),

    /// The operation needs a finite basis.
    #[error("the Lie algebra is infinite-dimensional")]
    NotFiniteDimensional,

    /// The two PBW bases are built on different Lie algebras.
    #[error("the PBW bases belong to different Lie algebras")]
    IncompatibleLieAlgebras,
}
