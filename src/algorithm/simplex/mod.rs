//! # The Simplex algorithm
//!
//! A tableau implementation of the primal Simplex method that finds its initial basis with the
//! Big-M method. Artificial variables get a cost of `-M` when maximizing and `M` when minimizing,
//! where `M` is kept symbolic.
//!
//! Every pivot is recorded together with a copy of the tableau it was applied to, such that the
//! derivation can be replayed.
use log::{debug, trace};
use num_traits::{One, Zero};

use crate::algorithm::error::{SimplexFailure, SolveError};
use crate::algorithm::simplex::strategy::pivot_rule::{PivotRule, SteepestDescentAlongVariable};
use crate::algorithm::tableau::{variable_name, Tableau, Theta};
use crate::data::linear_program::LinearProgram;
use crate::data::number_types::rational::ExactRational;

pub mod strategy;

/// Position of a pivot element in a tableau.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Pivot {
    /// Row of the variable leaving the basis.
    pub row: usize,
    /// Column of the variable entering the basis, at least `1`.
    pub column: usize,
}

/// A tableau as it was at one moment, and the pivot that was applied to it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SimplexStep {
    pivot: Option<Pivot>,
    tableau: Tableau,
}

impl SimplexStep {
    pub(crate) fn new(pivot: Option<Pivot>, tableau: Tableau) -> Self {
        Self { pivot, tableau }
    }

    /// The pivot applied to this tableau, `None` for a snapshot after which nothing happened.
    pub fn pivot(&self) -> Option<Pivot> {
        self.pivot
    }

    /// The tableau before the pivot.
    pub fn tableau(&self) -> &Tableau {
        &self.tableau
    }
}

/// Everything the Simplex method did.
#[derive(Clone, Debug)]
pub struct SimplexHistory {
    initial_problem: LinearProgram,
    slack_problem: LinearProgram,
    artificial_problem: LinearProgram,
    initial_basis: Vec<(String, ExactRational)>,
    steps: Vec<SimplexStep>,
    optimal_tableau: Option<Tableau>,
}

impl SimplexHistory {
    /// The problem after making all right-hand sides nonnegative.
    pub fn initial_problem(&self) -> &LinearProgram {
        &self.initial_problem
    }

    /// The problem after adding slack variables.
    pub fn slack_problem(&self) -> &LinearProgram {
        &self.slack_problem
    }

    /// The problem after adding artificial variables, from which the first tableau is built.
    pub fn artificial_problem(&self) -> &LinearProgram {
        &self.artificial_problem
    }

    /// The initial basic variables and their values, in row order.
    pub fn initial_basis(&self) -> &[(String, ExactRational)] {
        &self.initial_basis
    }

    /// All pivots, each with the tableau it was applied to, and possibly a final snapshot without
    /// pivot when the method stopped early.
    pub fn steps(&self) -> &[SimplexStep] {
        &self.steps
    }

    /// The optimal tableau without artificial columns, if an optimum was found.
    pub fn optimal_tableau(&self) -> Option<&Tableau> {
        self.optimal_tableau.as_ref()
    }

    /// Take the optimal tableau out, for example to continue with cutting planes.
    pub fn into_optimal_tableau(self) -> Option<Tableau> {
        self.optimal_tableau
    }
}

/// Solve a linear program with the default pivot rule.
///
/// # Errors
///
/// When the problem is infeasible or unbounded. The returned failure contains everything that was
/// recorded until that point.
pub fn solve(problem: &LinearProgram) -> Result<SimplexHistory, SimplexFailure> {
    solve_with::<SteepestDescentAlongVariable>(problem)
}

/// Solve a linear program.
///
/// The problem itself is not modified; the transformed versions are kept in the history.
///
/// # Errors
///
/// When the problem is infeasible or unbounded. The returned failure contains everything that was
/// recorded until that point.
pub fn solve_with<PR: PivotRule>(problem: &LinearProgram) -> Result<SimplexHistory, SimplexFailure> {
    let mut working = problem.clone();
    working.canonicalize();
    let initial_problem = working.clone();
    working.add_slack_variables();
    let slack_problem = working.clone();
    working.add_artificial_variables();
    let artificial_problem = working.clone();

    let mut history = SimplexHistory {
        initial_problem,
        slack_problem,
        artificial_problem,
        initial_basis: Vec::new(),
        steps: Vec::new(),
        optimal_tableau: None,
    };

    let (basis, fallback_rows) = match initial_basis(&working) {
        Ok(basis) => basis,
        Err(error) => {
            debug!("No initial basis: {}", error);
            return Err(SimplexFailure { error, history });
        },
    };
    history.initial_basis = basis.iter().zip(working.constraints())
        .map(|(&j, constraint)| (variable_name(j), constraint.right_hand_side().clone()))
        .collect();
    debug!("Initial basis: {:?}", history.initial_basis.iter().map(|(name, _)| name).collect::<Vec<_>>());

    let mut tableau = Tableau::from_problem(&working, &basis);
    // A basic decision variable may have a coefficient other than 1, or appear in other rows.
    for row in fallback_rows {
        tableau.pivot(row, basis[row]);
    }

    let rule = PR::new(&tableau);
    let state = State {
        tableau,
        rule,
        first_artificial: 1 + working.nr_decision_variables() + working.nr_slack_variables(),
        history,
    };

    state.run()
}

/// Choose a basic variable for every row.
///
/// Auxiliary columns that are a unit vector are preferred, rows that have none of those get the
/// first decision variable with coefficient `1` or `-1` in that row.
///
/// # Return value
///
/// The basic column of each row, and the rows that got a decision variable.
fn initial_basis(problem: &LinearProgram) -> Result<(Vec<usize>, Vec<usize>), SolveError> {
    let nr_decision = problem.nr_decision_variables();
    let constraints = problem.constraints();

    let mut basis = vec![None; problem.nr_constraints()];
    for j in nr_decision..problem.nr_variables() {
        let mut nonzero = constraints.iter()
            .enumerate()
            .filter(|(_, constraint)| !constraint.coefficients()[j].is_zero());
        if let (Some((row, constraint)), None) = (nonzero.next(), nonzero.next()) {
            if constraint.coefficients()[j].is_one() && basis[row].is_none() {
                basis[row] = Some(j + 1);
            }
        }
    }

    let mut fallback_rows = Vec::new();
    for (row, slot) in basis.iter_mut().enumerate() {
        if slot.is_none() {
            *slot = constraints[row].coefficients()[..nr_decision].iter()
                .position(|coefficient| coefficient.abs().is_one())
                .map(|j| j + 1);
            fallback_rows.push(row);
        }
    }

    let basis = basis.into_iter()
        .enumerate()
        .map(|(row, column)| column.ok_or(SolveError::NoInitialBasis { row }))
        .collect::<Result<Vec<_>, _>>()?;

    Ok((basis, fallback_rows))
}

/// State owned by a single solve.
struct State<PR> {
    tableau: Tableau,
    rule: PR,
    /// Columns from this index onwards belong to artificial variables.
    first_artificial: usize,
    history: SimplexHistory,
}

impl<PR: PivotRule> State<PR> {
    fn run(mut self) -> Result<SimplexHistory, SimplexFailure> {
        match self.iterate() {
            Ok(()) => {
                let nr_artificial = self.tableau.nr_columns() - self.first_artificial;
                if nr_artificial > 0 {
                    debug!("Removing {} artificial columns", nr_artificial);
                }
                self.tableau.truncate_columns(self.first_artificial);
                debug!(
                    "Optimum reached after {} steps, objective value {}",
                    self.history.steps.len(),
                    self.tableau.objective_function_value(),
                );
                trace!("Optimal tableau:\n{}", self.tableau);
                self.history.optimal_tableau = Some(self.tableau);
                Ok(self.history)
            },
            Err(error) => {
                debug!("Stopped after {} steps: {}", self.history.steps.len(), error);
                Err(SimplexFailure { error, history: self.history })
            },
        }
    }

    fn iterate(&mut self) -> Result<(), SolveError> {
        loop {
            while let Some((column, _)) = self.rule.select_primal_pivot_column(&self.tableau) {
                self.primal_pivot(column)?;
            }
            debug_assert!(self.tableau.is_optimal());

            if !self.remove_artificial_basis_variables()? {
                return Ok(());
            }
        }
    }

    /// Pivot a column into the basis, with the row chosen by the minimum ratio test.
    ///
    /// The first row with the smallest ratio is chosen.
    fn primal_pivot(&mut self, column: usize) -> Result<(), SolveError> {
        let ratios = (0..self.tableau.nr_rows())
            .map(|row| {
                let entry = self.tableau.value(row, column);
                entry.is_positive().then(|| self.tableau.value(row, 0) / entry)
            })
            .collect::<Vec<_>>();

        let chosen = ratios.iter()
            .enumerate()
            .filter_map(|(row, ratio)| ratio.as_ref().map(|ratio| (row, ratio)))
            .min_by(|(_, left), (_, right)| left.cmp(right))
            .map(|(row, _)| row);
        self.tableau.set_theta(Theta::Primal(ratios));

        match chosen {
            Some(row) => {
                self.pivot(row, column);
                Ok(())
            },
            None => {
                self.history.steps.push(SimplexStep::new(None, self.tableau.clone()));
                Err(SolveError::Unbounded { column })
            },
        }
    }

    /// Deal with artificial variables that are still in the basis at an optimum.
    ///
    /// At a nonzero value, the problem is infeasible. At value zero, each is exchanged for the
    /// first non-artificial column with a nonzero entry in its row, or if there is no such column,
    /// the row is redundant and removed. These pivots don't change any basic value.
    ///
    /// # Return value
    ///
    /// Whether the tableau was changed.
    fn remove_artificial_basis_variables(&mut self) -> Result<bool, SolveError> {
        let is_artificial_row = |tableau: &Tableau, row: usize| !tableau.row_variables()[row].1.is_finite();

        if (0..self.tableau.nr_rows())
            .any(|row| is_artificial_row(&self.tableau, row) && !self.tableau.value(row, 0).is_zero()) {
            self.history.steps.push(SimplexStep::new(None, self.tableau.clone()));
            return Err(SolveError::Infeasible);
        }

        let mut changed = false;
        while let Some(row) = (0..self.tableau.nr_rows()).find(|&row| is_artificial_row(&self.tableau, row)) {
            let column = (1..self.first_artificial)
                .find(|&column| !self.tableau.value(row, column).is_zero());
            match column {
                Some(column) => {
                    debug!("Artificial variable {} is basic at zero", self.tableau.row_variables()[row].0);
                    self.pivot(row, column);
                },
                None => {
                    debug!("Row {} is redundant, removing it", row);
                    self.tableau.remove_row(row);
                },
            }
            changed = true;
        }

        Ok(changed)
    }

    fn pivot(&mut self, row: usize, column: usize) {
        self.history.steps.push(SimplexStep::new(Some(Pivot { row, column }), self.tableau.clone()));
        trace!("Pivoting on ({}, {}) in\n{}", row, column, self.tableau);

        let leaving = self.tableau.pivot(row, column);
        debug!(
            "Step {}: {} enters in row {}, {} leaves, objective value {}",
            self.history.steps.len(),
            variable_name(column),
            row,
            leaving,
            self.tableau.objective_function_value(),
        );
    }
}
