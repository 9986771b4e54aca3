//! # Values with a symbolic large constant
//!
//! The Big-M method penalizes artificial variables with a cost `M` that is larger than any number
//! it is compared with. Instead of choosing a literal large number, values are represented as
//! `a·M + b` with both parts exact. Two such values compare on their `M` part first, and only if
//! those are equal on the finite part.
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Neg, Sub};

use num_traits::{One, Zero};

use crate::data::number_types::rational::ExactRational;

/// A value of the form `multiplier · M + constant`.
///
/// The field order matters: the derived ordering is lexicographic, which is the ordering of values
/// when `M` is arbitrarily large.
#[derive(Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
pub struct BigM {
    multiplier: ExactRational,
    constant: ExactRational,
}

impl BigM {
    /// Create a new value `multiplier · M + constant`.
    pub fn new(multiplier: ExactRational, constant: ExactRational) -> Self {
        Self { multiplier, constant }
    }

    /// The large constant itself.
    pub fn m() -> Self {
        Self::new(ExactRational::one(), ExactRational::zero())
    }

    /// How many times `M` is contained in this value.
    pub fn multiplier(&self) -> &ExactRational {
        &self.multiplier
    }

    /// The finite part of this value.
    pub fn constant(&self) -> &ExactRational {
        &self.constant
    }

    /// Whether the value contains no `M` term.
    pub fn is_finite(&self) -> bool {
        self.multiplier.is_zero()
    }

    /// Whether the value is below zero for any sufficiently large `M`.
    pub fn is_negative(&self) -> bool {
        self.multiplier.is_negative() || (self.multiplier.is_zero() && self.constant.is_negative())
    }

    /// Whether the value is above zero for any sufficiently large `M`.
    pub fn is_positive(&self) -> bool {
        self.multiplier.is_positive() || (self.multiplier.is_zero() && self.constant.is_positive())
    }
}

impl From<ExactRational> for BigM {
    fn from(constant: ExactRational) -> Self {
        Self::new(ExactRational::zero(), constant)
    }
}

impl Add for BigM {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.multiplier + rhs.multiplier, self.constant + rhs.constant)
    }
}

impl Add<&BigM> for BigM {
    type Output = Self;

    fn add(self, rhs: &Self) -> Self::Output {
        Self::new(self.multiplier + &rhs.multiplier, self.constant + &rhs.constant)
    }
}

impl Sub<&BigM> for BigM {
    type Output = Self;

    fn sub(self, rhs: &Self) -> Self::Output {
        Self::new(self.multiplier - &rhs.multiplier, self.constant - &rhs.constant)
    }
}

impl Neg for BigM {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.multiplier, -self.constant)
    }
}

impl Mul<&ExactRational> for &BigM {
    type Output = BigM;

    fn mul(self, rhs: &ExactRational) -> Self::Output {
        BigM::new(&self.multiplier * rhs, &self.constant * rhs)
    }
}

impl Zero for BigM {
    fn zero() -> Self {
        Self::new(ExactRational::zero(), ExactRational::zero())
    }

    fn is_zero(&self) -> bool {
        self.multiplier.is_zero() && self.constant.is_zero()
    }
}

impl Sum for BigM {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |total, value| total + value)
    }
}

/// Renders like `7M - 11`, `-M`, `(1/2)M + 3` or, without an `M` term, just the constant.
impl fmt::Display for BigM {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.multiplier.is_zero() {
            return write!(f, "{}", self.constant);
        }

        if self.multiplier.is_one() {
            write!(f, "M")?;
        } else if (-&self.multiplier).is_one() {
            write!(f, "-M")?;
        } else if self.multiplier.is_integer() {
            write!(f, "{}M", self.multiplier)?;
        } else {
            write!(f, "({})M", self.multiplier)?;
        }

        if self.constant.is_positive() {
            write!(f, " + {}", self.constant)
        } else if self.constant.is_negative() {
            write!(f, " - {}", self.constant.abs())
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod test {
    use num_traits::Zero;

    use crate::data::number_types::big_m::BigM;
    use crate::RB;

    #[test]
    fn ordering() {
        let m = BigM::m();
        assert!(m > BigM::from(RB!(1_000_000)));
        assert!(BigM::new(RB!(1), RB!(-11)) < BigM::new(RB!(1), RB!(0)));
        assert!(BigM::new(RB!(-1, 2), RB!(100)) < BigM::zero());
        assert!(BigM::new(RB!(-1, 2), RB!(100)).is_negative());
        assert!(BigM::from(RB!(3)).is_positive());
        assert!(!BigM::zero().is_positive() && !BigM::zero().is_negative());
    }

    #[test]
    fn arithmetic() {
        let value = &BigM::new(RB!(2), RB!(3)) * &RB!(1, 2);
        assert_eq!(value, BigM::new(RB!(1), RB!(3, 2)));

        let total = vec![BigM::m(), BigM::from(RB!(-2)), BigM::new(RB!(6), RB!(-9))].into_iter().sum::<BigM>();
        assert_eq!(total, BigM::new(RB!(7), RB!(-11)));
        assert_eq!(total - &BigM::m(), BigM::new(RB!(6), RB!(-11)));
        assert_eq!(-BigM::m(), BigM::new(RB!(-1), RB!(0)));
    }

    #[test]
    fn display() {
        assert_eq!(BigM::new(RB!(7), RB!(-11)).to_string(), "7M - 11");
        assert_eq!(BigM::new(RB!(1), RB!(0)).to_string(), "M");
        assert_eq!(BigM::new(RB!(-1), RB!(5, 2)).to_string(), "-M + 5/2");
        assert_eq!(BigM::new(RB!(1, 2), RB!(3)).to_string(), "(1/2)M + 3");
        assert_eq!(BigM::new(RB!(-3), RB!(0)).to_string(), "-3M");
        assert_eq!(BigM::from(RB!(-4)).to_string(), "-4");
        assert_eq!(BigM::zero().to_string(), "0");
    }
}
