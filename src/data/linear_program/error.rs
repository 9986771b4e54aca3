//! # Rejecting malformed linear programs
//!
//! These errors are returned before any tableau is built. They describe an inconsistent problem
//! description, not an infeasible or unbounded problem.
use thiserror::Error;

use crate::data::number_types::rational::ParseRationalError;

/// A linear program description is inconsistent.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum ProblemError {
    /// A constraint has a coefficient count that differs from the number of variables.
    #[error("constraint {constraint} has {found} coefficients, expected one for each of the {expected} variables")]
    CoefficientCount {
        /// Index of the offending constraint.
        constraint: usize,
        /// Number of decision variables.
        expected: usize,
        /// Number of coefficients of the constraint.
        found: usize,
    },
    /// The objective function has no variables.
    #[error("a linear program needs at least one variable")]
    NoVariables,
    /// There are no constraints.
    #[error("a linear program needs at least one constraint")]
    NoConstraints,
    /// A number handed over as text could not be read.
    #[error(transparent)]
    ParseRational(#[from] ParseRationalError),
}
