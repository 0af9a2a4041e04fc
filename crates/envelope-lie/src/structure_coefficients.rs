//! Finite-dimensional Lie algebras given by structure coefficients.
//!
//! The algebra is described by a basis `b_1, ..., b_n` and relations
//! `[b_i, b_j] = sum_k c_ij^k b_k`. Pairs without a relation bracket to
//! zero. Only one of `[b_i, b_j]` and `[b_j, b_i]` is stored; the other
//! is served by negation.

use std::fmt::Debug;
use std::hash::Hash;

use envelope_modules::Combination;
use envelope_rings::CommutativeRing;
use rustc_hash::FxHashMap;

use crate::algebra::LieAlgebra;
use crate::error::LieError;

/// A Lie algebra defined by a table of structure coefficients.
#[derive(Clone, Debug)]
pub struct StructureCoefficients<I, R> {
    /// The basis, in the order it was given.
    basis: Vec<I>,
    /// Position of each index in `basis`.
    positions: FxHashMap<I, usize>,
    /// `[basis[p], basis[q]]` for `p < q`, nonzero entries only.
    relations: FxHashMap<(usize, usize), Combination<I, R>>,
}

impl<I, R> StructureCoefficients<I, R>
where
    I: Clone + Eq + Hash + Debug,
    R: CommutativeRing,
{
    /// Builds the Lie algebra from a basis and bracket relations.
    ///
    /// Each relation `((a, b), terms)` states `[b_a, b_b] = sum c * b_i`
    /// over `(i, c)` in `terms`.
    ///
    /// # Errors
    ///
    /// - `DuplicateIndex` if the basis repeats an index
    /// - `UnknownIndex` if a relation mentions an index outside the basis
    /// - `NonZeroSelfBracket` if `[x, x]` is given a nonzero value
    /// - `InconsistentBracket` if `[x, y]` and `[y, x]` disagree
    /// - `JacobiViolation` if the relations do not define a Lie algebra
    pub fn new<Rel, T>(basis: Vec<I>, relations: Rel) -> Result<Self, LieError>
    where
        Rel: IntoIterator<Item = ((I, I), T)>,
        T: IntoIterator<Item = (I, R)>,
    {
        let algebra = Self::from_antisymmetric(basis, relations)?;
        algebra.check_jacobi()?;
        Ok(algebra)
    }

    /// Builds the table, enforcing everything except the Jacobi identity.
    fn from_antisymmetric<Rel, T>(basis: Vec<I>, relations: Rel) -> Result<Self, LieError>
    where
        Rel: IntoIterator<Item = ((I, I), T)>,
        T: IntoIterator<Item = (I, R)>,
    {
        let mut positions = FxHashMap::default();
        for (p, index) in basis.iter().enumerate() {
            if positions.insert(index.clone(), p).is_some() {
                return Err(LieError::DuplicateIndex(format!("{index:?}")));
            }
        }

        let position = |index: &I| {
            positions
                .get(index)
                .copied()
                .ok_or_else(|| LieError::UnknownIndex(format!("{index:?}")))
        };

        let mut given: FxHashMap<(usize, usize), Combination<I, R>> = FxHashMap::default();
        for ((a, b), terms) in relations {
            let (pa, pb) = (position(&a)?, position(&b)?);

            let mut value = Combination::zero();
            for (index, c) in terms {
                position(&index)?;
                value.add_term(index, c);
            }

            if pa == pb {
                if value.is_zero() {
                    continue;
                }
                return Err(LieError::NonZeroSelfBracket(format!("{a:?}")));
            }

            let (key, value) = if pa < pb { ((pa, pb), value) } else { ((pb, pa), -value) };
            if let Some(existing) = given.get(&key) {
                if *existing != value {
                    return Err(LieError::InconsistentBracket {
                        left: format!("{a:?}"),
                        right: format!("{b:?}"),
                    });
                }
            } else {
                given.insert(key, value);
            }
        }

        // Zero brackets are checked above but not stored.
        given.retain(|_, value| !value.is_zero());
        let table = given;

        Ok(Self {
            basis,
            positions,
            relations: table,
        })
    }

    /// Verifies the Jacobi identity on every triple of distinct basis elements.
    ///
    /// # Errors
    ///
    /// Returns `JacobiViolation` naming the first failing triple.
    pub fn check_jacobi(&self) -> Result<(), LieError> {
        let n = self.basis.len();
        for i in 0..n {
            for j in (i + 1)..n {
                for k in (j + 1)..n {
                    let (x, y, z) = (&self.basis[i], &self.basis[j], &self.basis[k]);
                    let jacobi = self.nested_bracket(x, y, z)?
                        + self.nested_bracket(y, z, x)?
                        + self.nested_bracket(z, x, y)?;
                    if !jacobi.is_zero() {
                        return Err(LieError::JacobiViolation(
                            format!("{x:?}"),
                            format!("{y:?}"),
                            format!("{z:?}"),
                        ));
                    }
                }
            }
        }
        Ok(())
    }

    /// `[x, [y, z]]`
    fn nested_bracket(&self, x: &I, y: &I, z: &I) -> Result<Combination<I, R>, LieError> {
        let inner = self.bracket_on_basis(y, z)?;
        self.bracket(&Combination::monomial(x.clone()), &inner)
    }

    /// The basis in the order it was given.
    #[must_use]
    pub fn basis(&self) -> &[I] {
        &self.basis
    }

    /// Iterates over the nonzero structure coefficients as `((a, b), [a, b])`
    /// with `a` listed before `b` in the basis.
    pub fn relations(&self) -> impl Iterator<Item = ((&I, &I), &Combination<I, R>)> {
        self.relations
            .iter()
            .map(|(&(p, q), value)| ((&self.basis[p], &self.basis[q]), value))
    }

    /// Returns true if every bracket vanishes.
    #[must_use]
    pub fn is_abelian(&self) -> bool {
        self.relations.is_empty()
    }

    fn position(&self, index: &I) -> Result<usize, LieError> {
        self.positions
            .get(index)
            .copied()
            .ok_or_else(|| LieError::UnknownIndex(format!("{index:?}")))
    }
}

impl<I, R> LieAlgebra for StructureCoefficients<I, R>
where
    I: Clone + Eq + Hash + Debug,
    R: CommutativeRing,
{
    type Index = I;
    type Coeff = R;

    fn contains(&self, index: &I) -> bool {
        self.positions.contains_key(index)
    }

    fn basis_indices(&self) -> Option<Vec<I>> {
        Some(self.basis.clone())
    }

    fn dimension(&self) -> Option<usize> {
        Some(self.basis.len())
    }

    fn bracket_on_basis(&self, a: &I, b: &I) -> Result<Combination<I, R>, LieError> {
        let (pa, pb) = (self.position(a)?, self.position(b)?);
        match pa.cmp(&pb) {
            std::cmp::Ordering::Equal => Ok(Combination::zero()),
            std::cmp::Ordering::Less => Ok(self.relations.get(&(pa, pb)).cloned().unwrap_or_default()),
            std::cmp::Ordering::Greater => Ok(self
                .relations
                .get(&(pb, pa))
                .map(|value| -value.clone())
                .unwrap_or_default()),
        }
    }
}
