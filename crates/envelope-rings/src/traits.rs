//! Algebraic structure traits.
//!
//! These traits describe the coefficient rings that linear combinations,
//! enveloping algebras and group algebras are built over.

use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

/// A ring is a set with addition and multiplication operations.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative with identity `one()`
/// - Multiplication distributes over addition
/// - Every element has an additive inverse (`neg`)
pub trait Ring:
    Clone + Eq + Debug + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Neg<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool;

    /// Returns true if this is the multiplicative identity.
    fn is_one(&self) -> bool;

    /// Computes self + self + ... (n times), by doubling.
    #[must_use]
    fn mul_by_scalar(&self, n: i64) -> Self {
        let mut result = Self::zero();
        let mut addend = self.clone();
        let mut k = n.unsigned_abs();

        while k > 0 {
            if k & 1 == 1 {
                result = result + addend.clone();
            }
            addend = addend.clone() + addend;
            k >>= 1;
        }

        if n < 0 {
            -result
        } else {
            result
        }
    }

    /// The image of an integer under the unique ring map Z -> Self.
    #[must_use]
    fn from_i64(n: i64) -> Self {
        Self::one().mul_by_scalar(n)
    }

    /// Computes self^n for non-negative n.
    #[must_use]
    fn pow(&self, n: u32) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base.clone();
            }
            base = base.clone() * base;
            exp >>= 1;
        }

        result
    }
}

/// A ring whose multiplication is commutative.
///
/// Coefficients of every algebra in this workspace commute with the
/// algebra's basis elements, so the algebra constructors ask for this.
pub trait CommutativeRing: Ring {}

/// A field is a commutative ring where every non-zero element is invertible.
pub trait Field: CommutativeRing {
    /// Computes the multiplicative inverse.
    ///
    /// Returns `None` if the element is zero.
    fn inv(&self) -> Option<Self>;
}
