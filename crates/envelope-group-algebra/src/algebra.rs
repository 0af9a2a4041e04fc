//! The algebra `R[G]` of a magma `G` over a ring `R`.
//!
//! Elements are finite combinations `sum c_g g`; the product is the
//! bilinear extension of the magma operation. Depending on what `G`
//! provides, the algebra is unital (monoids) and has an antipode (groups).

use std::hash::Hash;
use std::marker::PhantomData;
use std::sync::Arc;

use envelope_modules::Combination;
use envelope_rings::Ring;
use tracing::debug;

use crate::error::GroupAlgebraError;
use crate::magma::{Group, Magma, Monoid};

/// An element of the algebra of `G` over `R`.
pub type GroupAlgebraElement<G, R> = Combination<<G as Magma>::Element, R>;

/// The magma algebra `R[G]`.
pub struct GroupAlgebra<G: Magma, R> {
    group: Arc<G>,
    _ring: PhantomData<fn() -> R>,
}

impl<G: Magma, R> Clone for GroupAlgebra<G, R> {
    fn clone(&self) -> Self {
        Self {
            group: Arc::clone(&self.group),
            _ring: PhantomData,
        }
    }
}

impl<G: Magma, R: Ring> GroupAlgebra<G, R> {
    /// The algebra of `group` over `R`.
    #[must_use]
    pub fn new(group: Arc<G>) -> Self {
        debug!(
            order = ?group.order(),
            generators = group.generators().len(),
            ring = std::any::type_name::<R>(),
            "constructed group algebra"
        );
        Self {
            group,
            _ring: PhantomData,
        }
    }

    /// The underlying magma.
    #[must_use]
    pub fn group(&self) -> &Arc<G> {
        &self.group
    }

    /// The zero element.
    #[must_use]
    pub fn zero(&self) -> GroupAlgebraElement<G, R> {
        Combination::zero()
    }

    /// The basis element `g`.
    ///
    /// # Errors
    ///
    /// Returns `NotInGroup` if `g` is not an element of the magma.
    pub fn monomial(&self, g: G::Element) -> Result<GroupAlgebraElement<G, R>, GroupAlgebraError> {
        if !self.group.contains(&g) {
            return Err(GroupAlgebraError::NotInGroup(format!("{g:?}")));
        }
        Ok(Combination::monomial(g))
    }

    /// The image of `g` under the coercion `G -> R[G]`.
    ///
    /// # Errors
    ///
    /// Returns `NotInGroup` if `g` is not an element of the magma.
    pub fn from_group_element(&self, g: &G::Element) -> Result<GroupAlgebraElement<G, R>, GroupAlgebraError> {
        self.monomial(g.clone())
    }

    /// The images of the magma's generators.
    #[must_use]
    pub fn algebra_generators(&self) -> Vec<(G::Element, GroupAlgebraElement<G, R>)> {
        self.group
            .generators()
            .into_iter()
            .map(|g| (g.clone(), Combination::monomial(g)))
            .collect()
    }

    /// The product of two basis elements.
    #[must_use]
    pub fn product_on_basis(&self, g: &G::Element, h: &G::Element) -> GroupAlgebraElement<G, R> {
        Combination::monomial(self.group.op(g, h))
    }

    /// The product of two elements.
    #[must_use]
    pub fn multiply(&self, x: &GroupAlgebraElement<G, R>, y: &GroupAlgebraElement<G, R>) -> GroupAlgebraElement<G, R> {
        let mut result = Combination::zero();
        for (g, c) in x {
            for (h, d) in y {
                result.add_term(self.group.op(g, h), c.clone() * d.clone());
            }
        }
        result
    }

    /// The augmentation `sum c_g g -> sum c_g`.
    #[must_use]
    pub fn augmentation(&self, x: &GroupAlgebraElement<G, R>) -> R {
        x.iter().fold(R::zero(), |acc, (_, c)| acc + c.clone())
    }

    /// Returns true if all pairs of basis elements commute.
    ///
    /// Returns `None` for an infinite magma.
    #[must_use]
    pub fn is_commutative(&self) -> Option<bool> {
        let elements = self.group.elements()?;
        Some(elements.iter().enumerate().all(|(i, g)| {
            elements[..i]
                .iter()
                .all(|h| self.group.op(g, h) == self.group.op(h, g))
        }))
    }

    /// The same magma's algebra over another ring.
    #[must_use]
    pub fn base_change<S: Ring>(&self) -> GroupAlgebra<G, S> {
        GroupAlgebra::new(Arc::clone(&self.group))
    }

    /// Coerces coefficients from a ring `S` that maps into `R`, as in
    /// `Z[G] -> Q[G]`.
    #[must_use]
    pub fn coerce_scalars<S>(&self, x: &GroupAlgebraElement<G, S>) -> GroupAlgebraElement<G, R>
    where
        S: Ring,
        R: From<S>,
    {
        x.clone().map_coefficients(R::from)
    }

    /// Pushes an element of `S[H]` forward along a map `f: H -> G`,
    /// coercing coefficients into `R`.
    ///
    /// # Errors
    ///
    /// Returns `NotInGroup` if `f` leaves the magma.
    pub fn pushforward<B, S, F>(
        &self,
        x: &Combination<B, S>,
        mut f: F,
    ) -> Result<GroupAlgebraElement<G, R>, GroupAlgebraError>
    where
        B: Eq + Hash,
        S: Ring,
        R: From<S>,
        F: FnMut(&B) -> G::Element,
    {
        let mut result = Combination::zero();
        for (h, c) in x {
            let g = f(h);
            if !self.group.contains(&g) {
                return Err(GroupAlgebraError::NotInGroup(format!("{g:?}")));
            }
            result.add_term(g, R::from(c.clone()));
        }
        Ok(result)
    }
}

impl<G: Monoid, R: Ring> GroupAlgebra<G, R> {
    /// The unit, the basis element of the identity.
    #[must_use]
    pub fn one(&self) -> GroupAlgebraElement<G, R> {
        Combination::monomial(self.group.identity())
    }

    /// Computes `x^n` by repeated squaring; `x^0 = 1`.
    #[must_use]
    pub fn pow(&self, x: &GroupAlgebraElement<G, R>, mut n: u32) -> GroupAlgebraElement<G, R> {
        let mut result = self.one();
        let mut base = x.clone();
        while n > 0 {
            if n & 1 == 1 {
                result = self.multiply(&result, &base);
            }
            n >>= 1;
            if n > 0 {
                base = self.multiply(&base, &base);
            }
        }
        result
    }
}

impl<G: Group, R: Ring> GroupAlgebra<G, R> {
    /// The antipode `g -> g^{-1}`, extended linearly.
    #[must_use]
    pub fn antipode(&self, x: &GroupAlgebraElement<G, R>) -> GroupAlgebraElement<G, R> {
        x.iter().map(|(g, c)| (self.group.inverse(g), c.clone())).collect()
    }
}
