//! Permutations and the groups they generate.

use std::collections::VecDeque;
use std::fmt;

use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use tracing::debug;

use crate::error::GroupAlgebraError;
use crate::magma::{Group, Magma, Monoid};

/// Inline capacity for the images of small permutations.
const INLINE_POINTS: usize = 8;

/// A permutation of `{0, ..., n - 1}`.
///
/// Points are 0-based internally; cycle notation (construction and
/// display) is 1-based. The product `p * q` applies `p` first:
/// `(p * q)(i) = q(p(i))`.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Permutation {
    images: SmallVec<[usize; INLINE_POINTS]>,
}

impl Permutation {
    /// The identity on `n` points.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        Self {
            images: (0..n).collect(),
        }
    }

    /// Builds a permutation from its list of images.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPermutation` unless `images` is a rearrangement of
    /// `0..images.len()`.
    pub fn from_images(images: Vec<usize>) -> Result<Self, GroupAlgebraError> {
        let n = images.len();
        let mut seen = vec![false; n];
        for &i in &images {
            if i >= n || seen[i] {
                return Err(GroupAlgebraError::InvalidPermutation(format!("{images:?} is not a bijection")));
            }
            seen[i] = true;
        }
        Ok(Self {
            images: images.into_iter().collect(),
        })
    }

    /// Builds a permutation of `n` points from disjoint 1-based cycles.
    ///
    /// ```rust,ignore
    /// let p = Permutation::from_cycles(4, [vec![1, 2], vec![3, 4]])?;
    /// assert_eq!(p.to_string(), "(1,2)(3,4)");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `InvalidPermutation` if a point is out of range or appears
    /// twice.
    pub fn from_cycles<T, C>(n: usize, cycles: T) -> Result<Self, GroupAlgebraError>
    where
        T: IntoIterator<Item = C>,
        C: AsRef<[usize]>,
    {
        let mut images: SmallVec<[usize; INLINE_POINTS]> = (0..n).collect();
        let mut seen = vec![false; n];

        for cycle in cycles {
            let cycle = cycle.as_ref();
            for &point in cycle {
                if point == 0 || point > n {
                    return Err(GroupAlgebraError::InvalidPermutation(format!(
                        "point {point} is not in 1..={n}"
                    )));
                }
                if seen[point - 1] {
                    return Err(GroupAlgebraError::InvalidPermutation(format!(
                        "point {point} appears in more than one place"
                    )));
                }
                seen[point - 1] = true;
            }
            for (k, &point) in cycle.iter().enumerate() {
                images[point - 1] = cycle[(k + 1) % cycle.len()] - 1;
            }
        }
        Ok(Self { images })
    }

    /// The number of points acted on.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.images.len()
    }

    /// The image of the 0-based point `i` (fixed if out of range).
    #[must_use]
    pub fn apply(&self, i: usize) -> usize {
        self.images.get(i).copied().unwrap_or(i)
    }

    /// The list of images.
    #[must_use]
    pub fn images(&self) -> &[usize] {
        &self.images
    }

    /// Returns true for the identity.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.images.iter().enumerate().all(|(i, &j)| i == j)
    }

    /// The product `self * other`, applying `self` first.
    ///
    /// Permutations of different degrees are composed on the larger set.
    #[must_use]
    pub fn compose(&self, other: &Self) -> Self {
        let n = self.degree().max(other.degree());
        Self {
            images: (0..n).map(|i| other.apply(self.apply(i))).collect(),
        }
    }

    /// The inverse permutation.
    #[must_use]
    pub fn inverse(&self) -> Self {
        let mut images: SmallVec<[usize; INLINE_POINTS]> = SmallVec::from_elem(0, self.degree());
        for (i, &j) in self.images.iter().enumerate() {
            images[j] = i;
        }
        Self { images }
    }

    /// The same permutation acting on `n >= degree` points.
    #[must_use]
    pub fn extend_to(&self, n: usize) -> Self {
        let mut images = self.images.clone();
        images.extend(self.degree()..n);
        Self { images }
    }

    /// The nontrivial cycles, 1-based, each starting at its smallest point.
    #[must_use]
    pub fn cycles(&self) -> Vec<Vec<usize>> {
        let mut seen = vec![false; self.degree()];
        let mut cycles = Vec::new();
        for start in 0..self.degree() {
            if seen[start] || self.images[start] == start {
                continue;
            }
            let mut cycle = Vec::new();
            let mut i = start;
            while !seen[i] {
                seen[i] = true;
                cycle.push(i + 1);
                i = self.images[i];
            }
            cycles.push(cycle);
        }
        cycles
    }
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cycles = self.cycles();
        if cycles.is_empty() {
            return write!(f, "()");
        }
        for cycle in cycles {
            let points: Vec<String> = cycle.iter().map(ToString::to_string).collect();
            write!(f, "({})", points.join(","))?;
        }
        Ok(())
    }
}

impl fmt::Debug for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// The group generated by a set of permutations of `n` points.
#[derive(Clone, Debug)]
pub struct PermutationGroup {
    degree: usize,
    generators: Vec<Permutation>,
    elements: Vec<Permutation>,
    members: FxHashSet<Permutation>,
}

impl PermutationGroup {
    /// The group generated by `generators`, acting on `degree` points.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPermutation` if a generator acts on a different
    /// number of points.
    pub fn new(degree: usize, generators: Vec<Permutation>) -> Result<Self, GroupAlgebraError> {
        if let Some(g) = generators.iter().find(|g| g.degree() != degree) {
            return Err(GroupAlgebraError::InvalidPermutation(format!(
                "{g} acts on {} points, expected {degree}",
                g.degree()
            )));
        }
        Ok(Self::generated_by(degree, generators))
    }

    /// Breadth-first closure of the generators under right multiplication.
    fn generated_by(degree: usize, generators: Vec<Permutation>) -> Self {
        let identity = Permutation::identity(degree);
        let mut members = FxHashSet::default();
        members.insert(identity.clone());
        let mut queue = VecDeque::from([identity]);

        while let Some(x) = queue.pop_front() {
            for g in &generators {
                let y = x.compose(g);
                if members.insert(y.clone()) {
                    queue.push_back(y);
                }
            }
        }

        let mut elements: Vec<_> = members.iter().cloned().collect();
        elements.sort();
        debug!(degree, generators = generators.len(), order = elements.len(), "generated permutation group");

        Self {
            degree,
            generators,
            elements,
            members,
        }
    }

    /// The symmetric group `S_n`, generated by `(1,2)` and `(1,2,...,n)`.
    #[must_use]
    pub fn symmetric(n: usize) -> Self {
        let mut generators = Vec::new();
        if n >= 2 {
            generators.push(Self::rotation(n));
            let mut swap = Permutation::identity(n);
            swap.images.swap(0, 1);
            generators.push(swap);
        }
        Self::generated_by(n, generators)
    }

    /// The cyclic group generated by `(1,2,...,n)`.
    #[must_use]
    pub fn cyclic(n: usize) -> Self {
        let generators = if n >= 2 { vec![Self::rotation(n)] } else { Vec::new() };
        Self::generated_by(n, generators)
    }

    /// The symmetries of a regular `n`-gon acting on its vertices, of
    /// order `2n` for `n >= 3`.
    #[must_use]
    pub fn dihedral(n: usize) -> Self {
        let reflection = Permutation {
            images: (0..n).map(|i| n - 1 - i).collect(),
        };
        let mut generators = vec![reflection];
        if n >= 2 {
            generators.push(Self::rotation(n));
        }
        Self::generated_by(n, generators)
    }

    fn rotation(n: usize) -> Permutation {
        Permutation {
            images: (0..n).map(|i| (i + 1) % n).collect(),
        }
    }

    /// The number of points acted on.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// The elements, in increasing order of their image lists.
    #[must_use]
    pub fn sorted_elements(&self) -> &[Permutation] {
        &self.elements
    }

    /// Parses 1-based cycles into an element of this group.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPermutation` for malformed cycles and `NotInGroup`
    /// if the permutation is not in the group.
    pub fn element<T, C>(&self, cycles: T) -> Result<Permutation, GroupAlgebraError>
    where
        T: IntoIterator<Item = C>,
        C: AsRef<[usize]>,
    {
        let p = Permutation::from_cycles(self.degree, cycles)?;
        if self.contains(&p) {
            Ok(p)
        } else {
            Err(GroupAlgebraError::NotInGroup(p.to_string()))
        }
    }
}

impl Magma for PermutationGroup {
    type Element = Permutation;

    fn contains(&self, x: &Permutation) -> bool {
        self.members.contains(x)
    }

    fn op(&self, x: &Permutation, y: &Permutation) -> Permutation {
        x.compose(y)
    }

    fn elements(&self) -> Option<Vec<Permutation>> {
        Some(self.elements.clone())
    }

    fn generators(&self) -> Vec<Permutation> {
        self.generators.clone()
    }

    fn order(&self) -> Option<usize> {
        Some(self.elements.len())
    }
}

impl Monoid for PermutationGroup {
    fn identity(&self) -> Permutation {
        Permutation::identity(self.degree)
    }
}

impl Group for PermutationGroup {
    fn inverse(&self, x: &Permutation) -> Permutation {
        x.inverse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_notation() {
        let p = Permutation::from_cycles(4, [vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(p.images(), &[1, 0, 3, 2]);
        assert_eq!(p.to_string(), "(1,2)(3,4)");
        assert_eq!(Permutation::identity(3).to_string(), "()");

        let q = Permutation::from_cycles(3, [[2, 3, 1]]).unwrap();
        assert_eq!(q.to_string(), "(1,2,3)");
    }

    #[test]
    fn test_invalid_cycles() {
        assert!(matches!(
            Permutation::from_cycles(3, [vec![1, 4]]),
            Err(GroupAlgebraError::InvalidPermutation(_))
        ));
        assert!(matches!(
            Permutation::from_cycles(3, [vec![1, 2], vec![2, 3]]),
            Err(GroupAlgebraError::InvalidPermutation(_))
        ));
        assert!(Permutation::from_cycles(3, [vec![0]]).is_err());
        assert!(Permutation::from_images(vec![0, 0, 1]).is_err());
        assert!(Permutation::from_images(vec![2, 0, 1]).is_ok());
    }

    #[test]
    fn test_product_applies_left_factor_first() {
        let s = Permutation::from_cycles(3, [[1, 2]]).unwrap();
        let r = Permutation::from_cycles(3, [[1, 2, 3]]).unwrap();
        assert_eq!(s.compose(&r).to_string(), "(1,3)");
        assert_eq!(r.compose(&s).to_string(), "(2,3)");
    }

    #[test]
    fn test_inverse() {
        let r = Permutation::from_cycles(4, [[1, 2, 3, 4]]).unwrap();
        assert_eq!(r.inverse().to_string(), "(1,4,3,2)");
        assert!(r.compose(&r.inverse()).is_identity());
    }

    #[test]
    fn test_group_orders() {
        assert_eq!(PermutationGroup::symmetric(4).order(), Some(24));
        assert_eq!(PermutationGroup::symmetric(1).order(), Some(1));
        assert_eq!(PermutationGroup::cyclic(5).order(), Some(5));
        assert_eq!(PermutationGroup::dihedral(4).order(), Some(8));
        assert_eq!(PermutationGroup::dihedral(3).order(), Some(6));
    }

    #[test]
    fn test_membership() {
        let c4 = PermutationGroup::cyclic(4);
        assert!(c4.element([[1, 3], [2, 4]]).is_ok());
        assert_eq!(
            c4.element([[1, 2]]),
            Err(GroupAlgebraError::NotInGroup("(1,2)".to_string()))
        );
    }

    #[test]
    fn test_generator_degree_checked() {
        let g = Permutation::from_cycles(3, [[1, 2]]).unwrap();
        assert!(PermutationGroup::new(4, vec![g.clone()]).is_err());
        assert_eq!(PermutationGroup::new(3, vec![g]).unwrap().order(), Some(2));
    }

    #[test]
    fn test_extend() {
        let p = Permutation::from_cycles(2, [[1, 2]]).unwrap().extend_to(4);
        assert_eq!(p.images(), &[1, 0, 2, 3]);
        assert_eq!(p.to_string(), "(1,2)");
    }
}
