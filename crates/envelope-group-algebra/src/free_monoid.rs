//! The free monoid on a finite alphabet.

use std::fmt::Debug;
use std::hash::Hash;

use rustc_hash::FxHashSet;

use crate::magma::{Magma, Monoid};

/// Words over a finite alphabet under concatenation.
///
/// This monoid is infinite; its algebra is the free associative algebra
/// on the alphabet.
#[derive(Clone, Debug)]
pub struct FreeMonoid<A> {
    alphabet: Vec<A>,
    letters: FxHashSet<A>,
}

impl<A: Clone + Eq + Hash + Debug> FreeMonoid<A> {
    /// The free monoid on `alphabet`; repeated letters are ignored.
    #[must_use]
    pub fn new<T: IntoIterator<Item = A>>(alphabet: T) -> Self {
        let mut letters = FxHashSet::default();
        let alphabet = alphabet.into_iter().filter(|a| letters.insert(a.clone())).collect();
        Self { alphabet, letters }
    }

    /// The alphabet, in the order given.
    #[must_use]
    pub fn alphabet(&self) -> &[A] {
        &self.alphabet
    }
}

impl<A: Clone + Eq + Hash + Debug> Magma for FreeMonoid<A> {
    type Element = Vec<A>;

    fn contains(&self, x: &Vec<A>) -> bool {
        x.iter().all(|a| self.letters.contains(a))
    }

    fn op(&self, x: &Vec<A>, y: &Vec<A>) -> Vec<A> {
        let mut word = Vec::with_capacity(x.len() + y.len());
        word.extend_from_slice(x);
        word.extend_from_slice(y);
        word
    }

    fn elements(&self) -> Option<Vec<Vec<A>>> {
        if self.alphabet.is_empty() {
            Some(vec![Vec::new()])
        } else {
            None
        }
    }

    fn generators(&self) -> Vec<Vec<A>> {
        self.alphabet.iter().map(|a| vec![a.clone()]).collect()
    }
}

impl<A: Clone + Eq + Hash + Debug> Monoid for FreeMonoid<A> {
    fn identity(&self) -> Vec<A> {
        Vec::new()
    }
}
