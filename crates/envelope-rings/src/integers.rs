//! The ring of integers Z.

use dashu::integer::IBig;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::traits::{CommutativeRing, Ring};

/// The ring of integers, with arbitrary precision.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Z(IBig);

impl Z {
    /// Creates a new integer.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(IBig::from(value))
    }

    /// Returns the inner `dashu::IBig`.
    #[must_use]
    pub fn into_inner(self) -> IBig {
        self.0
    }

    /// Returns a reference to the inner `dashu::IBig`.
    #[must_use]
    pub fn as_inner(&self) -> &IBig {
        &self.0
    }

    /// Attempts to convert to an i64.
    ///
    /// Returns `None` if the value doesn't fit in an i64.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        self.0.clone().try_into().ok()
    }
}

impl Ring for Z {
    fn zero() -> Self {
        Self(IBig::ZERO)
    }

    fn one() -> Self {
        Self(IBig::ONE)
    }

    fn is_zero(&self) -> bool {
        self.0 == IBig::ZERO
    }

    fn is_one(&self) -> bool {
        self.0 == IBig::ONE
    }
}

impl CommutativeRing for Z {}

impl num_traits::Zero for Z {
    fn zero() -> Self {
        <Self as Ring>::zero()
    }

    fn is_zero(&self) -> bool {
        <Self as Ring>::is_zero(self)
    }
}

impl num_traits::One for Z {
    fn one() -> Self {
        <Self as Ring>::one()
    }
}

impl Add for Z {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Z {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Mul for Z {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Neg for Z {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<i64> for Z {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<IBig> for Z {
    fn from(value: IBig) -> Self {
        Self(value)
    }
}

impl fmt::Debug for Z {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Z({})", self.0)
    }
}

impl fmt::Display for Z {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_laws() {
        let a = Z::new(10);
        let b = Z::new(3);

        assert!(Z::zero().is_zero());
        assert!(Z::one().is_one());

        assert_eq!((a.clone() + b.clone()).to_i64(), Some(13));
        assert_eq!((a.clone() - b.clone()).to_i64(), Some(7));
        assert_eq!((a * b).to_i64(), Some(30));
    }

    #[test]
    fn test_big_values() {
        let big = Z::new(i64::MAX) * Z::new(i64::MAX);
        assert_eq!(big.to_i64(), None);
        assert_eq!((big.clone() - big).to_i64(), Some(0));
    }

    #[test]
    fn test_num_traits_bridge() {
        use num_traits::{One, Zero};
        assert!(Zero::is_zero(&<Z as Zero>::zero()));
        assert!(!Zero::is_zero(&<Z as One>::one()));
        assert_eq!(<Z as One>::one(), Z::new(1));
    }
}
