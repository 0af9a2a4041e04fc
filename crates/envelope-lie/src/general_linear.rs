//! The general linear Lie algebra `gl(n)`.

use std::marker::PhantomData;

use envelope_modules::Combination;
use envelope_rings::CommutativeRing;

use crate::algebra::LieAlgebra;
use crate::error::LieError;

/// `gl(n)`, the `n x n` matrices under the commutator bracket.
///
/// The basis is the matrix units `E_ij`, indexed by `(i, j)` with
/// `0 <= i, j < n`, and
///
/// ```text
/// [E_ij, E_kl] = δ_jk E_il - δ_li E_kj
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneralLinear<R> {
    n: usize,
    _ring: PhantomData<fn() -> R>,
}

impl<R> GeneralLinear<R> {
    /// Creates `gl(n)`.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            n,
            _ring: PhantomData,
        }
    }

    /// The matrix size `n`.
    #[must_use]
    pub fn size(&self) -> usize {
        self.n
    }
}

impl<R: CommutativeRing> LieAlgebra for GeneralLinear<R> {
    type Index = (usize, usize);
    type Coeff = R;

    fn contains(&self, &(i, j): &(usize, usize)) -> bool {
        i < self.n && j < self.n
    }

    fn basis_indices(&self) -> Option<Vec<(usize, usize)>> {
        Some((0..self.n).flat_map(|i| (0..self.n).map(move |j| (i, j))).collect())
    }

    fn dimension(&self) -> Option<usize> {
        Some(self.n * self.n)
    }

    fn bracket_on_basis(
        &self,
        a: &(usize, usize),
        b: &(usize, usize),
    ) -> Result<Combination<(usize, usize), R>, LieError> {
        self.check_index(a)?;
        self.check_index(b)?;

        let (&(i, j), &(k, l)) = (a, b);
        let mut result = Combination::zero();
        if j == k {
            result.add_term((i, l), R::one());
        }
        if l == i {
            result.add_term((k, j), -R::one());
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use envelope_rings::Z;

    #[test]
    fn test_basis() {
        let gl2 = GeneralLinear::<Z>::new(2);
        assert_eq!(gl2.dimension(), Some(4));
        assert_eq!(gl2.basis_indices().unwrap(), vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
        assert!(!gl2.contains(&(2, 0)));
    }

    #[test]
    fn test_commutators() {
        let gl2 = GeneralLinear::<Z>::new(2);

        // [E_01, E_10] = E_00 - E_11
        let h = gl2.bracket_on_basis(&(0, 1), &(1, 0)).unwrap();
        assert_eq!(h, Combination::from_terms([((0, 0), Z::new(1)), ((1, 1), Z::new(-1))]));

        // [E_00, E_01] = E_01
        assert_eq!(gl2.bracket_on_basis(&(0, 0), &(0, 1)).unwrap(), Combination::monomial((0, 1)));

        // Diagonal units commute.
        assert!(gl2.bracket_on_basis(&(0, 0), &(1, 1)).unwrap().is_zero());
        assert!(gl2.bracket_on_basis(&(1, 1), &(1, 1)).unwrap().is_zero());
    }

    #[test]
    fn test_out_of_range_index() {
        let gl2 = GeneralLinear::<Z>::new(2);
        assert!(matches!(gl2.bracket_on_basis(&(0, 0), &(0, 5)), Err(LieError::UnknownIndex(_))));
    }
}
