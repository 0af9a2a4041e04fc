//! # envelope-group-algebra
//!
//! Algebras of magmas, monoids and groups over a ring.
//!
//! For a magma `G` and a ring `R`, the algebra `R[G]` has basis `G` and
//! multiplication extended bilinearly from the operation of `G`. When `G`
//! is a monoid the algebra is unital; when it is a group the algebra also
//! carries an antipode `g -> g^{-1}`.
//!
//! ## Components
//!
//! - [`Magma`], [`Monoid`], [`Group`]: what the algebra needs from `G`
//! - [`CayleyTable`], [`FiniteGroup`]: finite structures from tables
//! - [`Permutation`], [`PermutationGroup`]: permutation groups
//! - [`FreeMonoid`]: words, whose algebra is the free associative algebra
//! - [`GroupAlgebra`]: the algebra `R[G]` and its coercions
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use envelope_group_algebra::{GroupAlgebra, PermutationGroup};
//! use envelope_rings::Q;
//!
//! let algebra = GroupAlgebra::<_, Q>::new(Arc::new(PermutationGroup::symmetric(3)));
//! let s = algebra.monomial(algebra.group().element([[1, 2]])?)?;
//! assert_eq!(algebra.multiply(&s, &s), algebra.one());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algebra;
pub mod cayley;
pub mod error;
pub mod free_monoid;
pub mod magma;
pub mod permutation;

#[cfg(test)]
mod proptests;

pub use algebra::{GroupAlgebra, GroupAlgebraElement};
pub use cayley::{CayleyTable, FiniteGroup};
pub use error::GroupAlgebraError;
pub use free_monoid::FreeMonoid;
pub use magma::{Group, Magma, Monoid};
pub use permutation::{Permutation, PermutationGroup};
