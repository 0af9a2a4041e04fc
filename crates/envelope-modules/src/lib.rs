//! # envelope-modules
//!
//! Free modules with a distinguished basis.
//!
//! An element of the free module `R^(B)` is a finite linear combination of
//! basis keys `B` with coefficients in a ring `R`. Universal enveloping
//! algebras and group algebras are both free modules of this kind, with a
//! product defined on basis elements and extended bilinearly.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod combination;

#[cfg(test)]
mod proptests;

pub use combination::Combination;
