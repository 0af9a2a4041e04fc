//! Finite magmas and groups given by multiplication tables.
//!
//! Elements are `0..n`; entry `[a][b]` of the table is the product `a b`.

use crate::error::GroupAlgebraError;
use crate::magma::{Group, Magma, Monoid};

/// A finite magma given by its multiplication table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CayleyTable {
    table: Vec<Vec<usize>>,
}

impl CayleyTable {
    /// Wraps a multiplication table.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTable` if the table is not square or an entry is
    /// out of range.
    pub fn new(table: Vec<Vec<usize>>) -> Result<Self, GroupAlgebraError> {
        let n = table.len();
        for (a, row) in table.iter().enumerate() {
            if row.len() != n {
                return Err(GroupAlgebraError::InvalidTable(format!(
                    "row {a} has {} entries, expected {n}",
                    row.len()
                )));
            }
            if let Some(b) = row.iter().position(|&c| c >= n) {
                return Err(GroupAlgebraError::InvalidTable(format!(
                    "entry ({a}, {b}) = {} is out of range",
                    row[b]
                )));
            }
        }
        Ok(Self { table })
    }

    /// The number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns true for the empty magma.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// The rows of the table.
    #[must_use]
    pub fn rows(&self) -> &[Vec<usize>] {
        &self.table
    }

    /// Finds a triple violating associativity.
    #[must_use]
    pub fn non_associative_triple(&self) -> Option<(usize, usize, usize)> {
        let n = self.len();
        for a in 0..n {
            for b in 0..n {
                let ab = self.table[a][b];
                for c in 0..n {
                    if self.table[ab][c] != self.table[a][self.table[b][c]] {
                        return Some((a, b, c));
                    }
                }
            }
        }
        None
    }

    /// Finds the two-sided identity, if any.
    #[must_use]
    pub fn identity_element(&self) -> Option<usize> {
        (0..self.len()).find(|&e| (0..self.len()).all(|a| self.table[e][a] == a && self.table[a][e] == a))
    }

    /// Picks generators greedily in index order, skipping every element
    /// already reachable from `start` and the generators chosen so far.
    fn greedy_generators(&self, start: &[usize]) -> Vec<usize> {
        let mut reached = vec![false; self.len()];
        let mut members = Vec::new();
        for &x in start {
            if !reached[x] {
                reached[x] = true;
                members.push(x);
            }
        }

        let mut generators = Vec::new();
        for g in 0..self.len() {
            if reached[g] {
                continue;
            }
            generators.push(g);
            reached[g] = true;
            members.push(g);

            // Close under products with every member, old or new.
            let mut next = 0;
            while next < members.len() {
                let x = members[next];
                let mut i = 0;
                while i < members.len() {
                    let y = members[i];
                    for z in [self.table[x][y], self.table[y][x]] {
                        if !reached[z] {
                            reached[z] = true;
                            members.push(z);
                        }
                    }
                    i += 1;
                }
                next += 1;
            }
        }
        generators
    }
}

impl Magma for CayleyTable {
    type Element = usize;

    fn contains(&self, x: &usize) -> bool {
        *x < self.len()
    }

    fn op(&self, x: &usize, y: &usize) -> usize {
        self.table[*x][*y]
    }

    fn elements(&self) -> Option<Vec<usize>> {
        Some((0..self.len()).collect())
    }

    /// Elements in index order that are not products of earlier picks.
    fn generators(&self) -> Vec<usize> {
        self.greedy_generators(&[])
    }
}

/// A finite group given by a validated multiplication table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FiniteGroup {
    table: CayleyTable,
    identity: usize,
    inverses: Vec<usize>,
}

impl FiniteGroup {
    /// Builds a group from its multiplication table.
    ///
    /// # Errors
    ///
    /// - `InvalidTable` if the table is malformed or empty
    /// - `NotAssociative` for the first failing triple
    /// - `MissingIdentity` if no element is a two-sided identity
    /// - `MissingInverse` for the first element without an inverse
    pub fn from_table(table: Vec<Vec<usize>>) -> Result<Self, GroupAlgebraError> {
        let table = CayleyTable::new(table)?;
        if table.is_empty() {
            return Err(GroupAlgebraError::InvalidTable("a group cannot be empty".to_string()));
        }
        if let Some((a, b, c)) = table.non_associative_triple() {
            return Err(GroupAlgebraError::NotAssociative(a, b, c));
        }
        let identity = table.identity_element().ok_or(GroupAlgebraError::MissingIdentity)?;

        let inverses = (0..table.len())
            .map(|a| {
                (0..table.len())
                    .find(|&b| table.op(&a, &b) == identity && table.op(&b, &a) == identity)
                    .ok_or(GroupAlgebraError::MissingInverse(a))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            table,
            identity,
            inverses,
        })
    }

    /// The cyclic group `Z/n` as addition modulo `n`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTable` for `n = 0`.
    pub fn cyclic(n: usize) -> Result<Self, GroupAlgebraError> {
        Self::from_table((0..n).map(|a| (0..n).map(|b| (a + b) % n).collect()).collect())
    }

    /// The underlying table.
    #[must_use]
    pub fn table(&self) -> &CayleyTable {
        &self.table
    }

    /// Returns true if the group is abelian.
    #[must_use]
    pub fn is_abelian(&self) -> bool {
        let n = self.table.len();
        (0..n).all(|a| (0..a).all(|b| self.table.op(&a, &b) == self.table.op(&b, &a)))
    }
}

impl Magma for FiniteGroup {
    type Element = usize;

    fn contains(&self, x: &usize) -> bool {
        self.table.contains(x)
    }

    fn op(&self, x: &usize, y: &usize) -> usize {
        self.table.op(x, y)
    }

    fn elements(&self) -> Option<Vec<usize>> {
        self.table.elements()
    }

    /// Like the table's, but the identity is never a generator.
    fn generators(&self) -> Vec<usize> {
        self.table.greedy_generators(&[self.identity])
    }
}

impl Monoid for FiniteGroup {
    fn identity(&self) -> usize {
        self.identity
    }
}

impl Group for FiniteGroup {
    fn inverse(&self, x: &usize) -> usize {
        self.inverses[*x]
    }
}
