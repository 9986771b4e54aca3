//! # Representing linear programs
//!
//! A linear program consists of an objective function and a list of constraints, each of which
//! may be any of `<=`, `>=` or `=`. All variables are implicitly nonnegative.
//!
//! Besides the decision variables, a linear program keeps track of the slack and artificial
//! variables that are appended while it is brought into a form from which the Simplex method can
//! start. See the `canonical_form` module for those transformations.
use std::str::FromStr;

use crate::data::linear_program::elements::{ConstraintType, Objective};
use crate::data::linear_program::error::ProblemError;
use crate::data::number_types::big_m::BigM;
use crate::data::number_types::rational::ExactRational;

pub mod canonical_form;
pub mod elements;
pub mod error;
pub mod solution;

/// A single (in)equality `<coefficients, x> (<=|>=|=) right_hand_side`.
///
/// There is one coefficient for each variable of the linear program that owns the constraint,
/// which includes any slack and artificial variables appended so far.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Constraint {
    coefficients: Vec<ExactRational>,
    constraint_type: ConstraintType,
    right_hand_side: ExactRational,
}

impl Constraint {
    /// Create a new constraint.
    pub fn new(
        coefficients: Vec<ExactRational>,
        constraint_type: ConstraintType,
        right_hand_side: ExactRational,
    ) -> Self {
        Self { coefficients, constraint_type, right_hand_side }
    }

    /// Create a new constraint from numbers in text form, as an input form would provide them.
    ///
    /// # Errors
    ///
    /// If any of the numbers can't be read.
    pub fn parse(
        coefficients: &[&str],
        constraint_type: ConstraintType,
        right_hand_side: &str,
    ) -> Result<Self, ProblemError> {
        let coefficients = coefficients.iter()
            .map(|text| ExactRational::from_str(text))
            .collect::<Result<Vec<_>, _>>()?;
        let right_hand_side = ExactRational::from_str(right_hand_side)?;

        Ok(Self::new(coefficients, constraint_type, right_hand_side))
    }

    /// Coefficients, one for each variable.
    pub fn coefficients(&self) -> &[ExactRational] {
        &self.coefficients
    }

    /// Type of (in)equality.
    pub fn constraint_type(&self) -> ConstraintType {
        self.constraint_type
    }

    /// The constant on the right-hand side.
    pub fn right_hand_side(&self) -> &ExactRational {
        &self.right_hand_side
    }
}

/// A linear program.
///
/// Cloning produces a fully independent copy; the Simplex method keeps several clones as snapshots
/// of the transformations it applied.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LinearProgram {
    /// Which direction does the objective function go?
    objective: Objective,
    /// Cost of each of the decision variables.
    objective_coefficients: Vec<ExactRational>,
    /// Cost of each of the slack variables, empty until slacks are added.
    slack_coefficients: Vec<ExactRational>,
    /// Cost of each of the artificial variables, empty until artificial variables are added.
    artificial_coefficients: Vec<BigM>,
    /// All constraints, each with a coefficient for every variable.
    constraints: Vec<Constraint>,
}

/// Check whether the dimensions of the `LinearProgram` are consistent.
///
/// Used in debug assertions; it can be viewed as documentation for the requirements on the fields
/// of the struct.
fn is_consistent(linear_program: &LinearProgram) -> bool {
    let nr_variables = linear_program.nr_variables();

    !linear_program.objective_coefficients.is_empty()
        && !linear_program.constraints.is_empty()
        && linear_program.constraints.iter()
            .all(|constraint| constraint.coefficients.len() == nr_variables)
}

impl LinearProgram {
    /// Create a new linear program with only decision variables.
    ///
    /// # Errors
    ///
    /// If there are no variables or constraints, or if a constraint doesn't have a coefficient for
    /// exactly every variable.
    pub fn new(
        objective: Objective,
        objective_coefficients: Vec<ExactRational>,
        constraints: Vec<Constraint>,
    ) -> Result<Self, ProblemError> {
        if objective_coefficients.is_empty() {
            return Err(ProblemError::NoVariables);
        }
        if constraints.is_empty() {
            return Err(ProblemError::NoConstraints);
        }
        let expected = objective_coefficients.len();
        if let Some((constraint, found)) = constraints.iter()
            .map(|constraint| constraint.coefficients.len())
            .enumerate()
            .find(|&(_, found)| found != expected) {
            return Err(ProblemError::CoefficientCount { constraint, expected, found });
        }

        let linear_program = Self {
            objective,
            objective_coefficients,
            slack_coefficients: Vec::new(),
            artificial_coefficients: Vec::new(),
            constraints,
        };
        debug_assert!(is_consistent(&linear_program));

        Ok(linear_program)
    }

    /// Direction of optimization.
    pub fn objective(&self) -> Objective {
        self.objective
    }

    /// Cost of the decision variables.
    pub fn objective_coefficients(&self) -> &[ExactRational] {
        &self.objective_coefficients
    }

    /// Cost of the slack variables, if they were added.
    pub fn slack_coefficients(&self) -> &[ExactRational] {
        &self.slack_coefficients
    }

    /// Cost of the artificial variables, if they were added.
    pub fn artificial_coefficients(&self) -> &[BigM] {
        &self.artificial_coefficients
    }

    /// All constraints.
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Number of constraints.
    pub fn nr_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Number of variables the problem was created with.
    pub fn nr_decision_variables(&self) -> usize {
        self.objective_coefficients.len()
    }

    /// Number of slack variables.
    pub fn nr_slack_variables(&self) -> usize {
        self.slack_coefficients.len()
    }

    /// Number of artificial variables.
    pub fn nr_artificial_variables(&self) -> usize {
        self.artificial_coefficients.len()
    }

    /// Total number of variables: decision, slack and artificial.
    ///
    /// This is also the number of coefficients of each constraint.
    pub fn nr_variables(&self) -> usize {
        self.nr_decision_variables() + self.nr_slack_variables() + self.nr_artificial_variables()
    }

    /// Cost of a variable in the objective function.
    ///
    /// # Arguments
    ///
    /// * `j`: Variable index in range `0` until `self.nr_variables()`. Decision variables come
    /// first, then the slacks, then the artificial variables.
    pub fn cost(&self, j: usize) -> BigM {
        debug_assert!(j < self.nr_variables());

        let nr_decision = self.nr_decision_variables();
        let nr_slack = self.nr_slack_variables();
        if j < nr_decision {
            BigM::from(self.objective_coefficients[j].clone())
        } else if j < nr_decision + nr_slack {
            BigM::from(self.slack_coefficients[j - nr_decision].clone())
        } else {
            self.artificial_coefficients[j - nr_decision - nr_slack].clone()
        }
    }

    /// Whether a variable is an artificial one.
    pub fn is_artificial(&self, j: usize) -> bool {
        debug_assert!(j < self.nr_variables());

        j >= self.nr_decision_variables() + self.nr_slack_variables()
    }
}
