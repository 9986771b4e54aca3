//! # Exact rational numbers
//!
//! At the moment, this is just wrapping the `num::BigRational` type, following the newtype pattern.
//! This is needed because some of the methods in this module (rendering, parsing, rounding) are not
//! provided by `num` in the shape the solver needs. Methods on this type can be modified and
//! specialized as needed.
//!
//! The inner value is always kept in reduced form with a positive denominator; `num` normalizes
//! after every operation.
use std::fmt;

use num::{BigInt, BigRational, One, Signed};

pub use parse::ParseRationalError;

mod macros;
mod parse;
mod wrapping;

/// An arbitrary precision rational number.
#[derive(Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
pub struct ExactRational(BigRational);

impl ExactRational {
    /// Create a new instance by converting the two provided numbers into arbitrary size ints.
    ///
    /// # Panics
    ///
    /// When the denominator is zero.
    pub fn new(numer: i64, denom: i64) -> Self {
        Self(BigRational::new(numer.into(), denom.into()))
    }

    /// Create a rational number with denominator one.
    pub fn from_integer(value: i64) -> Self {
        Self(BigRational::from_integer(value.into()))
    }

    /// Exact conversion of a finite float.
    ///
    /// # Return value
    ///
    /// `None` if the value is not finite.
    pub fn from_float(value: f64) -> Option<Self> {
        BigRational::from_float(value).map(Self)
    }

    /// Numerator of the reduced fraction, carries the sign.
    pub fn numer(&self) -> &BigInt {
        self.0.numer()
    }

    /// Denominator of the reduced fraction, always positive.
    pub fn denom(&self) -> &BigInt {
        self.0.denom()
    }

    /// Whether the value is a whole number.
    ///
    /// Because the fraction is always reduced, this is the case exactly when the denominator is
    /// one.
    pub fn is_integer(&self) -> bool {
        self.0.denom().is_one()
    }

    /// Whether the value is strictly smaller than zero.
    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// Whether the value is strictly larger than zero.
    pub fn is_positive(&self) -> bool {
        self.0.is_positive()
    }

    /// Absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Round towards zero.
    #[must_use]
    pub fn trunc(&self) -> Self {
        Self(self.0.trunc())
    }

    /// Round towards minus infinity.
    #[must_use]
    pub fn floor(&self) -> Self {
        Self(self.0.floor())
    }
}

impl From<i64> for ExactRational {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl From<BigRational> for ExactRational {
    fn from(value: BigRational) -> Self {
        Self(value)
    }
}

impl fmt::Display for ExactRational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numer())
        } else {
            write!(f, "{}/{}", self.numer(), self.denom())
        }
    }
}
