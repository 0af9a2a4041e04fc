//! # envelope-rings
//!
//! Coefficient rings for the envelope algebra workspace.
//!
//! This crate provides:
//! - Abstract traits: `Ring`, `CommutativeRing`, `Field`
//! - Concrete implementations: Z, Q (arbitrary precision, via `dashu`)
//! - Prime fields Z/p with a compile-time modulus
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Ring
//!  └── CommutativeRing
//!       └── Field
//! ```
//!
//! Every algebra in the workspace (linear combinations, universal
//! enveloping algebras, group algebras) is generic over a `Ring`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integers;
pub mod modular;
pub mod rationals;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use integers::Z;
pub use modular::Zp;
pub use rationals::Q;
pub use traits::{CommutativeRing, Field, Ring};
