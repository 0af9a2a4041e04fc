//! # envelope-lie
//!
//! Lie algebras over a commutative ring, described by their bracket on a
//! basis.
//!
//! This crate provides:
//! - The `LieAlgebra` trait: basis membership and the bracket on basis
//!   elements, extended bilinearly
//! - `StructureCoefficients`: finite-dimensional Lie algebras from a table
//!   of relations, validated for antisymmetry and the Jacobi identity
//! - `GeneralLinear`: `gl(n)` on matrix units
//! - `RegularVectorFields`: the Witt algebra, an infinite-dimensional example
//! - A catalog of small standard Lie algebras (`sl2`, `cross_product`, ...)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algebra;
pub mod catalog;
pub mod error;
pub mod general_linear;
pub mod structure_coefficients;
pub mod vector_fields;

#[cfg(test)]
mod proptests;

pub use algebra::{LieAlgebra, LieElement};
pub use catalog::{abelian, cross_product, heisenberg, sl2, HeisenbergIndex};
pub use error::LieError;
pub use general_linear::GeneralLinear;
pub use structure_coefficients::StructureCoefficients;
pub use vector_fields::RegularVectorFields;
