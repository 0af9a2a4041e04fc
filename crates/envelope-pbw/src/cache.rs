//! Memoization for PBW arithmetic.
//!
//! Monomials are immutable values, so cached results never go stale.
//! Both caches are shared behind `RwLock`s so a `PbwBasis` can be used
//! from several threads at once.

use std::hash::Hash;
use std::sync::Arc;

use envelope_modules::Combination;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::monomial::PbwMonomial;
use crate::ordering::MonomialKey;

type ProductKey<I> = (PbwMonomial<I>, PbwMonomial<I>);

/// Products of basis elements that needed rewriting, keyed by operands.
pub struct ProductCache<I, R> {
    entries: RwLock<FxHashMap<ProductKey<I>, Combination<PbwMonomial<I>, R>>>,
    limit: usize,
}

impl<I: Clone + Eq + Hash, R: Clone> ProductCache<I, R> {
    /// Creates an empty cache holding at most `limit` products.
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self {
            entries: RwLock::new(FxHashMap::default()),
            limit,
        }
    }

    /// Looks up the product `lhs * rhs`.
    #[must_use]
    pub fn get(&self, lhs: &PbwMonomial<I>, rhs: &PbwMonomial<I>) -> Option<Combination<PbwMonomial<I>, R>> {
        let key = (lhs.clone(), rhs.clone());
        self.entries.read().get(&key).cloned()
    }

    /// Stores the product `lhs * rhs`.
    ///
    /// Returns false if the cache is full and the product was not stored.
    pub fn insert(
        &self,
        lhs: &PbwMonomial<I>,
        rhs: &PbwMonomial<I>,
        product: &Combination<PbwMonomial<I>, R>,
    ) -> bool {
        let mut entries = self.entries.write();
        if entries.len() >= self.limit {
            return false;
        }
        entries.insert((lhs.clone(), rhs.clone()), product.clone());
        if entries.len() == self.limit {
            debug!(limit = self.limit, "PBW product cache is full");
        }
        true
    }

    /// Returns the number of cached products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns true if the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Clears the cache.
    pub fn clear(&self) {
        self.entries.write().clear();
    }
}

/// Comparison keys of monomials.
pub struct KeyCache<I, K> {
    entries: RwLock<FxHashMap<PbwMonomial<I>, Arc<MonomialKey<K>>>>,
    limit: usize,
}

impl<I: Clone + Eq + Hash, K> KeyCache<I, K> {
    /// Creates an empty cache holding at most `limit` keys.
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self {
            entries: RwLock::new(FxHashMap::default()),
            limit,
        }
    }

    /// Returns the cached key of `m`, computing it with `compute` if needed.
    ///
    /// Once the cache is full, keys of new monomials are computed but not
    /// stored.
    pub fn get_or_insert_with<F>(&self, m: &PbwMonomial<I>, compute: F) -> Arc<MonomialKey<K>>
    where
        F: FnOnce() -> MonomialKey<K>,
    {
        if let Some(key) = self.entries.read().get(m) {
            return Arc::clone(key);
        }
        let key = Arc::new(compute());

        let mut entries = self.entries.write();
        if let Some(existing) = entries.get(m) {
            return Arc::clone(existing);
        }
        if entries.len() >= self.limit {
            return key;
        }
        entries.insert(m.clone(), Arc::clone(&key));
        if entries.len() == self.limit {
            debug!(limit = self.limit, "PBW key cache is full");
        }
        key
    }

    /// Returns the number of cached keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns true if the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
