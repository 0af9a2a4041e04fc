//! The Lie algebra of regular vector fields on `C^×` (the Witt algebra).

use std::marker::PhantomData;

use envelope_modules::Combination;
use envelope_rings::CommutativeRing;

use crate::algebra::LieAlgebra;
use crate::error::LieError;

/// The Witt algebra, with basis `d_i` for every integer `i` and
///
/// ```text
/// [d_i, d_j] = (j - i) d_{i+j}
/// ```
///
/// This algebra is infinite-dimensional, so `basis_indices` is `None`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegularVectorFields<R> {
    _ring: PhantomData<fn() -> R>,
}

impl<R> RegularVectorFields<R> {
    /// Creates the Witt algebra.
    #[must_use]
    pub fn new() -> Self {
        Self { _ring: PhantomData }
    }
}

impl<R> Default for RegularVectorFields<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: CommutativeRing> LieAlgebra for RegularVectorFields<R> {
    type Index = i64;
    type Coeff = R;

    fn contains(&self, _index: &i64) -> bool {
        true
    }

    fn basis_indices(&self) -> Option<Vec<i64>> {
        None
    }

    fn bracket_on_basis(&self, &i: &i64, &j: &i64) -> Result<Combination<i64, R>, LieError> {
        if i == j {
            return Ok(Combination::zero());
        }

        let index = i
            .checked_add(j)
            .ok_or_else(|| LieError::UnknownIndex(format!("d_({i} + {j})")))?;
        let coeff = j
            .checked_sub(i)
            .ok_or_else(|| LieError::UnknownIndex(format!("coefficient of d_{index}")))?;

        Ok(Combination::term(index, R::from_i64(coeff)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use envelope_rings::Q;

    #[test]
    fn test_bracket() {
        let witt = RegularVectorFields::<Q>::new();

        // [d_3, d_2] = -d_5
        assert_eq!(witt.bracket_on_basis(&3, &2).unwrap(), Combination::term(5, Q::from_integer(-1)));
        // [d_-2, d_3] = 5 d_1
        assert_eq!(witt.bracket_on_basis(&-2, &3).unwrap(), Combination::term(1, Q::from_integer(5)));
        assert!(witt.bracket_on_basis(&4, &4).unwrap().is_zero());
    }

    #[test]
    fn test_infinite_dimensional() {
        let witt = RegularVectorFields::<Q>::new();
        assert_eq!(witt.dimension(), None);
        assert!(witt.contains(&-1_000_000));
    }

    #[test]
    fn test_overflow_reported() {
        let witt = RegularVectorFields::<Q>::new();
        assert!(witt.bracket_on_basis(&i64::MAX, &1).is_err());
    }
}
