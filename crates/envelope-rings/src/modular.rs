//! Prime fields Z/p.
//!
//! Group algebras over Z/p are the natural setting for modular
//! representation theory, where Maschke's theorem fails.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::traits::{CommutativeRing, Field, Ring};

/// An integer modulo a compile-time prime `P`.
///
/// `P` must be prime for the `Field` implementation to be sound;
/// this is not checked.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Zp<const P: u64>(u64);

impl<const P: u64> Zp<P> {
    /// Creates a new residue.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value % P)
    }

    /// Creates a residue from a signed value.
    #[must_use]
    pub fn from_signed(value: i64) -> Self {
        let r = i128::from(value).rem_euclid(i128::from(P));
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Self(r as u64)
    }

    /// Returns the canonical representative in `0..P`.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Returns the modulus.
    #[must_use]
    pub const fn modulus() -> u64 {
        P
    }
}

impl<const P: u64> Ring for Zp<P> {
    fn zero() -> Self {
        Self(0)
    }

    fn one() -> Self {
        Self::new(1)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }

    fn is_one(&self) -> bool {
        self.0 == 1 % P
    }

    fn from_i64(n: i64) -> Self {
        Self::from_signed(n)
    }
}

impl<const P: u64> CommutativeRing for Zp<P> {}

impl<const P: u64> Field for Zp<P> {
    fn inv(&self) -> Option<Self> {
        if self.0 == 0 {
            return None;
        }

        // Extended Euclidean algorithm on (P, self)
        let (mut t, mut new_t) = (0i128, 1i128);
        let (mut r, mut new_r) = (i128::from(P), i128::from(self.0));

        while new_r != 0 {
            let quotient = r / new_r;
            (t, new_t) = (new_t, t - quotient * new_t);
            (r, new_r) = (new_r, r - quotient * new_r);
        }

        if r > 1 {
            return None;
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Some(Self(t.rem_euclid(i128::from(P)) as u64))
    }
}

impl<const P: u64> Add for Zp<P> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        #[allow(clippy::cast_possible_truncation)]
        Self(((u128::from(self.0) + u128::from(rhs.0)) % u128::from(P)) as u64)
    }
}

impl<const P: u64> Sub for Zp<P> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + (-rhs)
    }
}

impl<const P: u64> Mul for Zp<P> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        #[allow(clippy::cast_possible_truncation)]
        Self(((u128::from(self.0) * u128::from(rhs.0)) % u128::from(P)) as u64)
    }
}

impl<const P: u64> Neg for Zp<P> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        if self.0 == 0 {
            Self(0)
        } else {
            Self(P - self.0)
        }
    }
}

impl<const P: u64> From<i64> for Zp<P> {
    fn from(value: i64) -> Self {
        Self::from_signed(value)
    }
}

impl<const P: u64> fmt::Debug for Zp<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (mod {})", self.0, P)
    }
}

impl<const P: u64> fmt::Display for Zp<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
