//! # envelope-pbw
//!
//! The Poincaré–Birkhoff–Witt basis of a universal enveloping algebra.
//!
//! Given a Lie algebra with an ordered basis `b_1 < b_2 < ... < b_n`, the
//! universal enveloping algebra `U(g)` has the basis of sorted monomials
//! `b_1^e_1 b_2^e_2 ... b_n^e_n`. Products are brought back into this
//! form by repeatedly rewriting an out-of-order pair with
//!
//! ```text
//! x y = y x + [x, y]        (x > y)
//! ```
//!
//! Every rewrite trades one inversion for a sorted pair plus a term of
//! lower degree, so the result is a filtered basis: the product of
//! monomials of degrees `d1` and `d2` has terms of degree at most `d1 + d2`.
//!
//! ## Components
//!
//! - [`BasisKey`]: the order on Lie algebra basis indices
//! - [`PbwMonomial`]: sorted monomials with exponents
//! - [`PbwBasis`]: the algebra itself, with the rewriting product,
//!   degree bookkeeping, and coercions to and from the Lie algebra
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use envelope_lie::sl2;
//! use envelope_pbw::{NaturalOrder, PbwBasis};
//! use envelope_rings::Q;
//!
//! let pbw = PbwBasis::new(Arc::new(sl2::<Q>()?), NaturalOrder)?;
//! let (e, f) = (pbw.gen("E")?, pbw.gen("F")?);
//! let fe = pbw.multiply(&f, &e)?; // E*F - H
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod basis;
pub mod cache;
pub mod config;
pub mod error;
pub mod monomial;
pub mod ordering;
pub mod product;

#[cfg(test)]
mod proptests;

pub use basis::{ElementOf, PbwBasis, PbwElement};
pub use config::PbwConfig;
pub use error::PbwError;
pub use monomial::PbwMonomial;
pub use ordering::{BasisKey, ByKey, MonomialKey, NaturalOrder, Positional, ReverseOrder};
