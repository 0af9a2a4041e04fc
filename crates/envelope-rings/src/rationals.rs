//! The field of rational numbers Q.

use dashu::base::{Inverse, UnsignedAbs};
use dashu::integer::IBig;
use dashu::rational::RBig;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::integers::Z;
use crate::traits::{CommutativeRing, Field, Ring};

/// The field of rational numbers.
///
/// Rationals are always stored in lowest terms with a positive denominator,
/// so structural equality is numeric equality.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Q(RBig);

impl Q {
    /// Creates a new rational from numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn new(num: i64, den: i64) -> Self {
        assert!(den != 0, "denominator cannot be zero");
        let num = if den < 0 { -IBig::from(num) } else { IBig::from(num) };
        Self(RBig::from_parts(num, IBig::from(den).unsigned_abs()))
    }

    /// Creates a rational from an integer.
    #[must_use]
    pub fn from_integer(n: i64) -> Self {
        Self(RBig::from(IBig::from(n)))
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numerator(&self) -> Z {
        Z::from(self.0.numerator().clone())
    }

    /// Returns the denominator.
    #[must_use]
    pub fn denominator(&self) -> Z {
        Z::from(IBig::from(self.0.denominator().clone()))
    }

    /// Returns the inner `dashu::RBig`.
    #[must_use]
    pub fn into_inner(self) -> RBig {
        self.0
    }
}

impl Ring for Q {
    fn zero() -> Self {
        Self(RBig::ZERO)
    }

    fn one() -> Self {
        Self(RBig::ONE)
    }

    fn is_zero(&self) -> bool {
        self.0 == RBig::ZERO
    }

    fn is_one(&self) -> bool {
        self.0 == RBig::ONE
    }
}

impl CommutativeRing for Q {}

impl Field for Q {
    fn inv(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            Some(Self(self.0.clone().inv()))
        }
    }
}

impl Add for Q {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Q {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Mul for Q {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Neg for Q {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<i64> for Q {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

// The coercion Z -> Q.
impl From<Z> for Q {
    fn from(value: Z) -> Self {
        Self(RBig::from(value.into_inner()))
    }
}

impl fmt::Debug for Q {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q({})", self.0)
    }
}

impl fmt::Display for Q {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_laws() {
        let a = Q::new(2, 3);
        let b = Q::new(3, 4);

        // 2/3 + 3/4 = 17/12
        let sum = a.clone() + b.clone();
        assert_eq!(sum.numerator(), Z::new(17));
        assert_eq!(sum.denominator(), Z::new(12));

        // 2/3 * 3/4 = 1/2
        assert_eq!(a * b, Q::new(1, 2));
    }

    #[test]
    fn test_normalized_sign() {
        assert_eq!(Q::new(1, -2), Q::new(-1, 2));
        assert_eq!(Q::new(-4, -8), Q::new(1, 2));
        assert_eq!(Q::new(-1, 2).denominator(), Z::new(2));
    }

    #[test]
    fn test_inverse() {
        let a = Q::new(3, 5);
        let inv = a.inv().unwrap();
        assert!((a * inv).is_one());
        assert!(Q::zero().inv().is_none());
    }

    #[test]
    fn test_from_integer_ring() {
        assert_eq!(Q::from(Z::new(-7)), Q::from_integer(-7));
    }

    #[test]
    #[should_panic(expected = "denominator cannot be zero")]
    fn test_zero_denominator() {
        let _ = Q::new(1, 0);
    }
}
