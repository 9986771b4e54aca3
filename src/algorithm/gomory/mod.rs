//! # Gomory's fractional cutting plane method
//!
//! Starting from an optimal tableau of the linear relaxation, cuts are added until every decision
//! variable has an integer value. After each cut, primal feasibility is restored with the dual
//! Simplex method; the cut makes exactly one right-hand side negative.
//!
//! Each cut gets its own history entry with the pivots that were needed to apply it.
use itertools::Itertools;
use log::{debug, trace};

use crate::algorithm::error::{GomoryFailure, SolveError};
use crate::algorithm::gomory::cut::BranchCut;
use crate::algorithm::simplex::{Pivot, SimplexStep};
use crate::algorithm::tableau::{variable_name, Tableau, Theta};
use crate::data::linear_program::LinearProgram;
use crate::data::number_types::rational::ExactRational;

pub mod cut;

/// The basic variable a cut was derived from.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CutSource {
    /// Row of the variable in the tableau the cut was derived from.
    pub row: usize,
    /// Name of the variable.
    pub variable: String,
    /// Its fractional value.
    pub value: ExactRational,
}

/// One cut and the steps taken to apply it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GomoryHistory {
    source: CutSource,
    cut: BranchCut,
    steps: Vec<SimplexStep>,
}

impl GomoryHistory {
    /// The variable that triggered the cut.
    pub fn source(&self) -> &CutSource {
        &self.source
    }

    /// The cut.
    pub fn cut(&self) -> &BranchCut {
        &self.cut
    }

    /// Dual Simplex pivots, each recorded as the tableau before the pivot followed by the tableau
    /// after it.
    pub fn steps(&self) -> &[SimplexStep] {
        &self.steps
    }

    /// The tableau after the last recorded step.
    pub fn last_tableau(&self) -> Option<&Tableau> {
        self.steps.last().map(SimplexStep::tableau)
    }
}

/// Add cuts to an optimal tableau until all decision variables are integer.
///
/// # Arguments
///
/// * `tableau`: An optimal tableau without artificial columns.
/// * `problem`: The problem the tableau belongs to.
///
/// # Errors
///
/// `AlreadyInteger` when no cut was needed. `NoFractionalCoefficient` or `PivotColumnNotFound`
/// when the problem has no integer solution. The cuts applied until then are kept in the failure.
pub fn solve(tableau: Tableau, problem: &LinearProgram) -> Result<Vec<GomoryHistory>, GomoryFailure> {
    let mut state = State { tableau, nr_decision_variables: problem.nr_decision_variables(), history: Vec::new() };

    match state.run() {
        Ok(()) if state.history.is_empty() => {
            debug!("Solution is already integer");
            Err(GomoryFailure { error: SolveError::AlreadyInteger, history: state.history })
        },
        Ok(()) => {
            debug!(
                "Integer solution after {} cuts, objective value {}",
                state.history.len(),
                state.tableau.objective_function_value(),
            );
            Ok(state.history)
        },
        Err(error) => {
            debug!("Stopped after {} cuts: {}", state.history.len(), error);
            Err(GomoryFailure { error, history: state.history })
        },
    }
}

/// State owned by a single solve.
struct State {
    tableau: Tableau,
    nr_decision_variables: usize,
    history: Vec<GomoryHistory>,
}

impl State {
    fn run(&mut self) -> Result<(), SolveError> {
        loop {
            if self.tableau.is_primal_feasible() {
                match self.fractional_source() {
                    None => return Ok(()),
                    Some(source) => self.add_cut(source)?,
                }
            }

            self.dual_pivot()?;
        }
    }

    /// The decision variable with the largest fractional part, the first one on a tie.
    fn fractional_source(&self) -> Option<(usize, usize, ExactRational)> {
        let mut best: Option<(usize, usize, ExactRational, ExactRational)> = None;
        for j in 1..=self.nr_decision_variables {
            let Some(row) = self.tableau.basis_row(&variable_name(j)) else {
                // Not basic, so zero.
                continue;
            };
            let value = self.tableau.value(row, 0);
            let fraction = value - value.trunc();
            if fraction.is_positive() && best.as_ref().is_none_or(|(.., largest)| &fraction > largest) {
                best = Some((j, row, value.clone(), fraction));
            }
        }

        best.map(|(j, row, value, _)| (j, row, value))
    }

    fn add_cut(&mut self, (variable, row, value): (usize, usize, ExactRational)) -> Result<(), SolveError> {
        let source = &self.tableau.values()[row];
        if source[1..].iter().all(ExactRational::is_integer) {
            return Err(SolveError::NoFractionalCoefficient { row });
        }

        let cut = BranchCut::new(variable, source);
        debug!("Cut {} from {} = {} in row {}", self.history.len() + 1, variable_name(variable), value, row);
        self.tableau.add_row_with_basic_column(cut.cut_expression().to_vec());
        self.history.push(GomoryHistory {
            source: CutSource { row, variable: variable_name(variable), value },
            cut,
            steps: Vec::new(),
        });

        Ok(())
    }

    /// Pivot on the row with the most negative right-hand side, in the column of the negative
    /// entry with the smallest ratio `|delta_j / a_ij|`.
    fn dual_pivot(&mut self) -> Result<(), SolveError> {
        let Some(entry) = self.history.last_mut() else {
            // Infeasible before any cut was added.
            return Err(SolveError::Infeasible);
        };

        let Some(row) = self.tableau.values().iter()
            .map(|values| &values[0])
            .position_min()
            .filter(|&row| self.tableau.value(row, 0).is_negative()) else {
            return Ok(());
        };

        let ratios = (0..self.tableau.nr_columns())
            .map(|j| {
                let value = self.tableau.value(row, j);
                (j > 0 && value.is_negative()).then(|| {
                    let reduced_cost = &self.tableau.reduced_costs()[j];
                    debug_assert!(reduced_cost.is_finite());
                    (reduced_cost.constant() / value).abs()
                })
            })
            .collect::<Vec<_>>();
        let column = ratios.iter()
            .enumerate()
            .filter_map(|(j, ratio)| ratio.as_ref().map(|ratio| (j, ratio)))
            .min_by(|(_, left), (_, right)| left.cmp(right))
            .map(|(j, _)| j);
        self.tableau.set_theta(Theta::Dual(ratios));

        let Some(column) = column else {
            entry.steps.push(SimplexStep::new(None, self.tableau.clone()));
            return Err(SolveError::PivotColumnNotFound { row });
        };

        entry.steps.push(SimplexStep::new(Some(Pivot { row, column }), self.tableau.clone()));
        trace!("Dual pivot on ({}, {}) in\n{}", row, column, self.tableau);
        let leaving = self.tableau.pivot(row, column);
        debug!("Dual pivot: {} enters in row {}, {} leaves", variable_name(column), row, leaving);
        entry.steps.push(SimplexStep::new(None, self.tableau.clone()));

        Ok(())
    }
}
