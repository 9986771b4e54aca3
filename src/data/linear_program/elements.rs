//! # Building blocks to describe linear programs.
use std::ops::Neg;

use num_traits::One;

use crate::data::number_types::big_m::BigM;
use crate::data::number_types::rational::ExactRational;

/// A `Constraint` is a type of (in)equality.
///
/// These are read "from constraint to constraint value", so `Less` means `<a, x> <= b`.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ConstraintType {
    Equal,
    Greater,
    Less,
}

/// Multiplying both sides of a constraint by `-1` flips the inequality.
impl Neg for ConstraintType {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            ConstraintType::Equal => ConstraintType::Equal,
            ConstraintType::Greater => ConstraintType::Less,
            ConstraintType::Less => ConstraintType::Greater,
        }
    }
}

/// Direction of optimization.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Objective {
    #[default]
    Maximize,
    Minimize,
}

impl Objective {
    /// Cost of an artificial variable under the Big-M method.
    ///
    /// Artificial variables are penalized such that any solution using them is worse than any
    /// solution that doesn't: `-M` when maximizing, `M` when minimizing.
    #[must_use]
    pub fn artificial_cost(self) -> BigM {
        match self {
            Objective::Maximize => -BigM::m(),
            Objective::Minimize => BigM::m(),
        }
    }

    /// Whether a reduced cost indicates that bringing a variable into the basis improves the
    /// objective value.
    pub fn is_improving(self, reduced_cost: &BigM) -> bool {
        match self {
            Objective::Maximize => reduced_cost.is_negative(),
            Objective::Minimize => reduced_cost.is_positive(),
        }
    }
}

/// Coefficient a slack variable gets in the row of its constraint.
///
/// Equality constraints don't get a slack.
pub(crate) fn slack_coefficient(constraint_type: ConstraintType) -> Option<ExactRational> {
    match constraint_type {
        ConstraintType::Less => Some(ExactRational::one()),
        ConstraintType::Greater => Some(-ExactRational::one()),
        ConstraintType::Equal => None,
    }
}
