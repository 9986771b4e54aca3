//! # Wrapping existing methods
//!
//! Standard operations, simply wrapping the operations already defined on the inner type.
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num::{BigRational, One, Zero};

use crate::data::number_types::rational::ExactRational;

/// Implement a binary operator for all four combinations of owned and borrowed operands, together
/// with its assigning variant.
macro_rules! forward_binary_operator {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident) => {
        impl $trait for ExactRational {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self::Output {
                Self($trait::$method(self.0, rhs.0))
            }
        }

        impl $trait<&ExactRational> for ExactRational {
            type Output = Self;

            fn $method(self, rhs: &Self) -> Self::Output {
                Self($trait::$method(self.0, &rhs.0))
            }
        }

        impl $trait<ExactRational> for &ExactRational {
            type Output = ExactRational;

            fn $method(self, rhs: ExactRational) -> Self::Output {
                ExactRational($trait::$method(&self.0, rhs.0))
            }
        }

        impl $trait for &ExactRational {
            type Output = ExactRational;

            fn $method(self, rhs: Self) -> Self::Output {
                ExactRational($trait::$method(&self.0, &rhs.0))
            }
        }

        impl $assign_trait for ExactRational {
            fn $assign_method(&mut self, rhs: Self) {
                $assign_trait::$assign_method(&mut self.0, rhs.0)
            }
        }

        impl $assign_trait<&ExactRational> for ExactRational {
            fn $assign_method(&mut self, rhs: &Self) {
                $assign_trait::$assign_method(&mut self.0, &rhs.0)
            }
        }
    };
}

forward_binary_operator!(Add, add, AddAssign, add_assign);
forward_binary_operator!(Sub, sub, SubAssign, sub_assign);
forward_binary_operator!(Mul, mul, MulAssign, mul_assign);
forward_binary_operator!(Div, div, DivAssign, div_assign);

impl Neg for ExactRational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Neg for &ExactRational {
    type Output = ExactRational;

    fn neg(self) -> Self::Output {
        ExactRational(-&self.0)
    }
}

impl Sum for ExactRational {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self(iter.map(|item| item.0).sum())
    }
}

impl<'a> Sum<&'a ExactRational> for ExactRational {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |total, item| total + item)
    }
}

impl Zero for ExactRational {
    fn zero() -> Self {
        Self(BigRational::zero())
    }

    fn set_zero(&mut self) {
        self.0.set_zero()
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for ExactRational {
    fn one() -> Self {
        Self(BigRational::one())
    }

    fn set_one(&mut self) {
        self.0.set_one()
    }

    fn is_one(&self) -> bool {
        self.0.is_one()
    }
}
