//! The PBW basis object.
//!
//! A `PbwBasis` ties together a Lie algebra (the source of brackets), an
//! order on its basis, and the caches used by multiplication. It is
//! immutable once built; elements are plain `Combination` values.

use std::sync::Arc;

use envelope_lie::{LieAlgebra, LieElement};
use envelope_modules::Combination;
use tracing::debug;

use crate::cache::{KeyCache, ProductCache};
use crate::config::PbwConfig;
use crate::error::PbwError;
use crate::monomial::PbwMonomial;
use crate::ordering::{monomial_key, BasisKey, MonomialKey};

/// An element of a universal enveloping algebra in the PBW basis.
pub type PbwElement<I, R> = Combination<PbwMonomial<I>, R>;

/// The PBW element type for a Lie algebra `L`.
pub type ElementOf<L> = PbwElement<<L as LieAlgebra>::Index, <L as LieAlgebra>::Coeff>;

/// The Poincaré–Birkhoff–Witt basis of `U(g)` for a Lie algebra `g`.
pub struct PbwBasis<L: LieAlgebra, O: BasisKey<L::Index>> {
    pub(crate) lie: Arc<L>,
    pub(crate) order: O,
    pub(crate) config: PbwConfig,
    pub(crate) products: ProductCache<L::Index, L::Coeff>,
    keys: KeyCache<L::Index, O::Key>,
}

impl<L, O> PbwBasis<L, O>
where
    L: LieAlgebra,
    O: BasisKey<L::Index>,
{
    /// Builds the PBW basis of `lie` with respect to `order`.
    ///
    /// # Errors
    ///
    /// Returns `OrderNotTotal` if `lie` is finite-dimensional and two of its
    /// basis indices share a sort key.
    pub fn new(lie: Arc<L>, order: O) -> Result<Self, PbwError> {
        Self::with_config(lie, order, PbwConfig::default())
    }

    /// Builds the PBW basis with explicit options.
    ///
    /// # Errors
    ///
    /// See [`PbwBasis::new`].
    pub fn with_config(lie: Arc<L>, order: O, config: PbwConfig) -> Result<Self, PbwError> {
        if let Some(basis) = lie.basis_indices() {
            let mut keyed: Vec<(O::Key, &L::Index)> = basis.iter().map(|i| (order.key(i), i)).collect();
            keyed.sort_by(|a, b| a.0.cmp(&b.0));
            if let Some(pair) = keyed.windows(2).find(|pair| pair[0].0 == pair[1].0) {
                return Err(PbwError::OrderNotTotal(
                    format!("{:?}", pair[0].1),
                    format!("{:?}", pair[1].1),
                ));
            }
        }

        debug!(
            prefix = %config.prefix,
            dimension = ?lie.dimension(),
            cache_products = config.cache_products,
            "constructed PBW basis"
        );

        Ok(Self {
            products: ProductCache::new(config.product_cache_limit),
            keys: KeyCache::new(config.key_cache_limit),
            lie,
            order,
            config,
        })
    }

    /// The underlying Lie algebra.
    #[must_use]
    pub fn lie_algebra(&self) -> &Arc<L> {
        &self.lie
    }

    /// The order on basis indices.
    #[must_use]
    pub fn order(&self) -> &O {
        &self.order
    }

    /// The options this basis was built with.
    #[must_use]
    pub fn config(&self) -> &PbwConfig {
        &self.config
    }

    /// The number of memoized products.
    #[must_use]
    pub fn cached_products(&self) -> usize {
        self.products.len()
    }

    /// The number of memoized monomial keys.
    #[must_use]
    pub fn cached_keys(&self) -> usize {
        self.keys.len()
    }

    /// The monomial indexing `1`.
    #[must_use]
    pub fn one_basis(&self) -> PbwMonomial<L::Index> {
        PbwMonomial::one()
    }

    /// The unit element.
    #[must_use]
    pub fn one(&self) -> ElementOf<L> {
        Combination::monomial(self.one_basis())
    }

    /// The zero element.
    #[must_use]
    pub fn zero(&self) -> ElementOf<L> {
        Combination::zero()
    }

    /// The basis element indexed by `m`.
    #[must_use]
    pub fn monomial(&self, m: PbwMonomial<L::Index>) -> ElementOf<L> {
        Combination::monomial(m)
    }

    /// The generator `b_index`.
    ///
    /// # Errors
    ///
    /// Returns `PbwError::Lie` if `index` is not a basis index.
    pub fn gen(&self, index: L::Index) -> Result<ElementOf<L>, PbwError> {
        self.lie.check_index(&index)?;
        Ok(self.monomial(PbwMonomial::gen(index)))
    }

    /// The algebra generators `b_i`, sorted by the basis order.
    ///
    /// # Errors
    ///
    /// Returns `NotFiniteDimensional` for an infinite basis.
    pub fn algebra_generators(&self) -> Result<Vec<(L::Index, ElementOf<L>)>, PbwError> {
        let mut basis = self.lie.basis_indices().ok_or(PbwError::NotFiniteDimensional)?;
        basis.sort_by(|a, b| self.order.compare(a, b));
        Ok(basis
            .into_iter()
            .map(|i| (i.clone(), self.monomial(PbwMonomial::gen(i))))
            .collect())
    }

    /// Builds the canonical monomial with the given exponents.
    ///
    /// # Errors
    ///
    /// Returns `PbwError::Lie` if an index is not a basis index.
    pub fn monomial_from_exponents<T>(&self, factors: T) -> Result<PbwMonomial<L::Index>, PbwError>
    where
        T: IntoIterator<Item = (L::Index, u32)>,
    {
        let factors: Vec<_> = factors.into_iter().collect();
        for (index, _) in &factors {
            self.lie.check_index(index)?;
        }
        Ok(PbwMonomial::from_exponents(factors, &self.order))
    }

    /// The degree of a basis monomial: the sum of its exponents.
    #[must_use]
    pub fn degree_on_basis(&self, m: &PbwMonomial<L::Index>) -> u32 {
        m.length()
    }

    /// The largest degree of a term of `x`, or `None` if `x` is zero.
    #[must_use]
    pub fn maximal_degree(&self, x: &ElementOf<L>) -> Option<u32> {
        x.support().map(|m| self.degree_on_basis(m)).max()
    }

    /// The terms of `x` of exactly the given degree.
    #[must_use]
    pub fn homogeneous_component(&self, x: &ElementOf<L>, degree: u32) -> ElementOf<L> {
        x.iter()
            .filter(|(m, _)| self.degree_on_basis(m) == degree)
            .map(|(m, c)| (m.clone(), c.clone()))
            .collect()
    }

    /// Embeds a Lie algebra element: `b_i` maps to the degree-1 monomial.
    ///
    /// # Errors
    ///
    /// Returns `PbwError::Lie` if `x` mentions an index outside the basis.
    pub fn lift(&self, x: &LieElement<L>) -> Result<ElementOf<L>, PbwError> {
        let mut result = Combination::zero();
        for (index, c) in x {
            self.lie.check_index(index)?;
            result.add_term(PbwMonomial::gen(index.clone()), c.clone());
        }
        Ok(result)
    }

    /// The preimage of `x` under [`PbwBasis::lift`].
    ///
    /// # Errors
    ///
    /// Returns `NotInImage` unless every term of `x` is a single generator
    /// to the first power.
    pub fn retract(&self, x: &ElementOf<L>) -> Result<LieElement<L>, PbwError> {
        let mut result = Combination::zero();
        for (m, c) in self.sorted_terms(x) {
            match m.factors() {
                [(index, 1)] => result.add_term(index.clone(), c.clone()),
                _ => return Err(PbwError::NotInImage(self.describe_monomial(m))),
            }
        }
        Ok(result)
    }

    /// Rewrites an element of another PBW basis of the same Lie algebra
    /// into this one.
    ///
    /// # Errors
    ///
    /// Returns `IncompatibleLieAlgebras` unless both bases share the same
    /// `Arc`'d Lie algebra, and propagates bracket failures.
    pub fn convert_from<P>(&self, source: &PbwBasis<L, P>, x: &ElementOf<L>) -> Result<ElementOf<L>, PbwError>
    where
        P: BasisKey<L::Index>,
    {
        if !Arc::ptr_eq(&self.lie, &source.lie) {
            return Err(PbwError::IncompatibleLieAlgebras);
        }

        let mut result = Combination::zero();
        for (m, c) in x {
            let mut image = self.one();
            for (index, e) in m.factors() {
                let power = self.monomial(PbwMonomial::power(index.clone(), *e));
                image = self.multiply(&image, &power)?;
            }
            result.add_scaled(&image, c);
        }
        Ok(result)
    }

    /// The comparison key of a monomial (see [`MonomialKey`]), memoized.
    pub fn monomial_key(&self, m: &PbwMonomial<L::Index>) -> Arc<MonomialKey<O::Key>> {
        self.keys.get_or_insert_with(m, || monomial_key(&self.order, m))
    }

    /// The terms of `x`, highest degree first, then by the basis order.
    #[must_use]
    pub fn sorted_terms<'a>(&self, x: &'a ElementOf<L>) -> Vec<(&'a PbwMonomial<L::Index>, &'a L::Coeff)> {
        x.sorted_by_key(|m| self.monomial_key(m))
    }

    /// Describes a monomial as `PREFIX[i]^e*...`, for error reports.
    #[must_use]
    pub fn describe_monomial(&self, m: &PbwMonomial<L::Index>) -> String {
        if m.is_one() {
            return "1".to_string();
        }
        m.factors()
            .iter()
            .map(|(index, e)| {
                if *e == 1 {
                    format!("{}[{index:?}]", self.config.prefix)
                } else {
                    format!("{}[{index:?}]^{e}", self.config.prefix)
                }
            })
            .collect::<Vec<_>>()
            .join("*")
    }
}
