//! # Envelope
//!
//! Universal enveloping algebras in the Poincaré–Birkhoff–Witt basis, and
//! algebras of groups and monoids, over exact coefficient rings.
//!
//! ## Features
//!
//! - **Coefficient Rings**: big integers, rationals, prime fields
//! - **Lie Algebras**: structure-constant tables, `gl_n`, the Witt algebra
//! - **PBW Bases**: normal-form multiplication by commutator rewriting
//! - **Group Algebras**: permutation groups, Cayley tables, free monoids
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use envelope::prelude::*;
//! use std::sync::Arc;
//!
//! let pbw = PbwBasis::new(Arc::new(sl2::<Q>()?), NaturalOrder)?;
//! let (e, f) = (pbw.gen("E")?, pbw.gen("F")?);
//! let h = pbw.commutator(&e, &f)?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod logging;

pub use envelope_group_algebra as group_algebra;
pub use envelope_lie as lie;
pub use envelope_modules as modules;
pub use envelope_pbw as pbw;
pub use envelope_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use envelope_group_algebra::{
        CayleyTable, FiniteGroup, FreeMonoid, Group, GroupAlgebra, GroupAlgebraError, Magma, Monoid,
        Permutation, PermutationGroup,
    };
    pub use envelope_lie::{
        abelian, cross_product, heisenberg, sl2, GeneralLinear, LieAlgebra, LieError, RegularVectorFields,
        StructureCoefficients,
    };
    pub use envelope_modules::Combination;
    pub use envelope_pbw::{
        NaturalOrder, PbwBasis, PbwConfig, PbwError, PbwMonomial, Positional, ReverseOrder,
    };
    pub use envelope_rings::{CommutativeRing, Field, Ring, Zp, Q, Z};
}
