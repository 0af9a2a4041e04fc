//! Small standard Lie algebras.
//!
//! Every constructor goes through `StructureCoefficients::new`, so the
//! relations below are checked for antisymmetry and the Jacobi identity
//! like any user-supplied table.

use std::fmt::Debug;
use std::hash::Hash;

use envelope_rings::CommutativeRing;

use crate::error::LieError;
use crate::structure_coefficients::StructureCoefficients;

/// `sl_2` in the basis `E, F, H` with
///
/// ```text
/// [E, F] = H,   [H, E] = 2E,   [H, F] = -2F
/// ```
///
/// # Errors
///
/// Never fails for a commutative ring; the result is still validated.
pub fn sl2<R: CommutativeRing>() -> Result<StructureCoefficients<&'static str, R>, LieError> {
    StructureCoefficients::new(
        vec!["E", "F", "H"],
        vec![
            (("E", "F"), vec![("H", R::one())]),
            (("H", "E"), vec![("E", R::from_i64(2))]),
            (("H", "F"), vec![("F", R::from_i64(-2))]),
        ],
    )
}

/// `(R^3, ×)`, the cross product algebra, in the basis `X, Y, Z` with
///
/// ```text
/// [X, Y] = Z,   [Y, Z] = X,   [Z, X] = Y
/// ```
///
/// # Errors
///
/// Never fails for a commutative ring; the result is still validated.
pub fn cross_product<R: CommutativeRing>() -> Result<StructureCoefficients<&'static str, R>, LieError> {
    StructureCoefficients::new(
        vec!["X", "Y", "Z"],
        vec![
            (("X", "Y"), vec![("Z", R::one())]),
            (("Y", "Z"), vec![("X", R::one())]),
            (("Z", "X"), vec![("Y", R::one())]),
        ],
    )
}

/// Basis index of a Heisenberg algebra.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HeisenbergIndex {
    /// `p_i`, for `1 <= i <= n`.
    P(usize),
    /// `q_i`, for `1 <= i <= n`.
    Q(usize),
    /// The central element `z`.
    Z,
}

/// The `(2n + 1)`-dimensional Heisenberg algebra: `[p_i, q_i] = z`, all
/// other brackets of basis elements zero.
///
/// # Errors
///
/// Never fails; the result is still validated.
pub fn heisenberg<R: CommutativeRing>(
    n: usize,
) -> Result<StructureCoefficients<HeisenbergIndex, R>, LieError> {
    let basis = (1..=n)
        .map(HeisenbergIndex::P)
        .chain((1..=n).map(HeisenbergIndex::Q))
        .chain(std::iter::once(HeisenbergIndex::Z))
        .collect();
    let relations = (1..=n).map(|i| {
        (
            (HeisenbergIndex::P(i), HeisenbergIndex::Q(i)),
            vec![(HeisenbergIndex::Z, R::one())],
        )
    });
    StructureCoefficients::new(basis, relations)
}

/// The abelian Lie algebra on the given basis.
///
/// # Errors
///
/// Returns `DuplicateIndex` if the basis repeats an index.
pub fn abelian<I, R>(basis: Vec<I>) -> Result<StructureCoefficients<I, R>, LieError>
where
    I: Clone + Eq + Hash + Debug,
    R: CommutativeRing,
{
    StructureCoefficients::new(basis, Vec::<((I, I), Vec<(I, R)>)>::new())
}
