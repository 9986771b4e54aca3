//! # Ways in which solving can stop early
use thiserror::Error;

use crate::algorithm::gomory::GomoryHistory;
use crate::algorithm::simplex::SimplexHistory;

/// Reason why the Simplex method or the cutting plane method stopped without an optimum.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum SolveError {
    /// An artificial variable is basic at a nonzero value while no column improves the objective.
    #[error("the problem is infeasible")]
    Infeasible,
    /// The column improves the objective but has no positive entry to limit its increase.
    #[error("the problem is unbounded along the variable of column {column}")]
    Unbounded {
        /// Column that was selected to enter the basis.
        column: usize,
    },
    /// No variable could be made basic in a row.
    #[error("no initial basic variable for row {row}")]
    NoInitialBasis {
        /// Row without unit column.
        row: usize,
    },
    /// A cut can't be derived because the source row has no fractional coefficient.
    #[error("row {row} has no fractional coefficient to derive a cut from, no integer solution")]
    NoFractionalCoefficient {
        /// Row that was selected as the source of the cut.
        row: usize,
    },
    /// The row selected by the dual Simplex method has no negative entry.
    #[error("row {row} has no negative entry to pivot on, no integer solution")]
    PivotColumnNotFound {
        /// Row with the most negative right-hand side.
        row: usize,
    },
    /// The solution is already integer, no cuts are needed.
    #[error("the solution is already integer")]
    AlreadyInteger,
}

/// The Simplex method stopped early, with the history recorded until that point.
#[derive(Error, Debug)]
#[error("Simplex method stopped: {error}")]
pub struct SimplexFailure {
    /// What happened.
    pub error: SolveError,
    /// Snapshots and steps up to and including the terminal tableau.
    pub history: SimplexHistory,
}

/// The cutting plane method stopped early, with the cuts applied until that point.
#[derive(Error, Debug)]
#[error("cutting plane method stopped: {error}")]
pub struct GomoryFailure {
    /// What happened.
    pub error: SolveError,
    /// All cuts derived so far, the last one possibly incomplete.
    pub history: Vec<GomoryHistory>,
}
