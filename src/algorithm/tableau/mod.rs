//! # Simplex tableaus
//!
//! A dense tableau of exact values. Column `A0` holds the right-hand side, column `Aj` for `j > 0`
//! holds the coefficients of variable `xj`. Every row has a basic variable, whose value can be
//! read from the right-hand side of that row.
//!
//! Below the rows sits the reduced cost (delta) row, which has an entry for each column and may
//! contain multiples of the symbolic constant `M`. Its entry in column `A0` is the objective
//! function value of the current basic solution.
use std::cmp::max;
use std::collections::HashMap;
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::mem;

use num_traits::Zero;

use crate::data::linear_program::LinearProgram;
use crate::data::linear_program::elements::Objective;
use crate::data::number_types::big_m::BigM;
use crate::data::number_types::rational::ExactRational;

/// Name of the variable that belongs to column `j`.
pub fn variable_name(j: usize) -> String {
    format!("x{j}")
}

/// Name of column `j`, `A0` is the right-hand side column.
pub fn column_name(j: usize) -> String {
    format!("A{j}")
}

/// Ratios computed while choosing a pivot.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Theta {
    /// Minimum ratio test `b_i / a_ij`, one entry per row. Rows with a nonpositive entry in the
    /// pivot column have no ratio.
    Primal(Vec<Option<ExactRational>>),
    /// Dual ratio test `|delta_j / a_ij|`, one entry per column. Column `A0` and columns with a
    /// nonnegative entry in the pivot row have no ratio.
    Dual(Vec<Option<ExactRational>>),
}

/// The state of one Simplex iteration.
///
/// Cloning copies everything, including the grid. Snapshots kept in a history never share data
/// with the tableau that continues to be pivoted.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Tableau {
    objective: Objective,
    /// Basic variable and its cost, one for each row, in row order.
    row_variables: Vec<(String, BigM)>,
    /// Column name and the cost of its variable, `A0` has no cost.
    column_variables: Vec<(String, Option<BigM>)>,
    /// Grid of `nr_rows` rows of `nr_columns` values.
    values: Vec<Vec<ExactRational>>,
    /// One entry for each column.
    reduced_costs: Vec<BigM>,
    theta: Option<Theta>,
    /// Row of each basic variable, derived from `row_variables`.
    row_index: HashMap<String, usize>,
}

impl Tableau {
    /// Create a new tableau and compute its reduced costs.
    ///
    /// # Arguments
    ///
    /// * `row_variables`: Basic variable name and its cost, for each row.
    /// * `column_variables`: Column name and cost, starting with the cost-less `A0`.
    /// * `values`: One row of values for each basic variable, each starting with the right-hand
    /// side.
    pub fn new(
        objective: Objective,
        row_variables: Vec<(String, BigM)>,
        column_variables: Vec<(String, Option<BigM>)>,
        values: Vec<Vec<ExactRational>>,
    ) -> Self {
        debug_assert_eq!(row_variables.len(), values.len());
        debug_assert!(values.iter().all(|row| row.len() == column_variables.len()));
        debug_assert!(column_variables.first().is_some_and(|(_, cost)| cost.is_none()));

        let mut tableau = Self {
            objective,
            row_variables,
            column_variables,
            values,
            reduced_costs: Vec::new(),
            theta: None,
            row_index: HashMap::new(),
        };
        tableau.index_rows();
        tableau.compute_reduced_costs();

        tableau
    }

    /// Build the tableau of a linear program for a given basis.
    ///
    /// # Arguments
    ///
    /// * `basis`: For each constraint, the column (at least `1`) of the variable that is basic in
    /// that row.
    pub fn from_problem(problem: &LinearProgram, basis: &[usize]) -> Self {
        debug_assert_eq!(basis.len(), problem.nr_constraints());
        debug_assert!(basis.iter().all(|&j| 0 < j && j <= problem.nr_variables()));

        let row_variables = basis.iter()
            .map(|&j| (variable_name(j), problem.cost(j - 1)))
            .collect();
        let column_variables = (0..=problem.nr_variables())
            .map(|j| (column_name(j), if j == 0 { None } else { Some(problem.cost(j - 1)) }))
            .collect();
        let values = problem.constraints().iter()
            .map(|constraint| {
                let mut row = Vec::with_capacity(1 + constraint.coefficients().len());
                row.push(constraint.right_hand_side().clone());
                row.extend(constraint.coefficients().iter().cloned());
                row
            })
            .collect();

        Self::new(problem.objective(), row_variables, column_variables, values)
    }

    fn index_rows(&mut self) {
        self.row_index.clear();
        for (i, (name, _)) in self.row_variables.iter().enumerate() {
            self.row_index.entry(name.clone()).or_insert(i);
        }
    }

    /// Recompute the delta row: `sum_i c_B(i) a_ij - c_j` for every column `j`.
    ///
    /// For column `A0`, this is the objective function value.
    pub fn compute_reduced_costs(&mut self) {
        self.reduced_costs = (0..self.nr_columns())
            .map(|j| {
                let total = self.row_variables.iter().zip(&self.values)
                    .map(|((_, cost), row)| cost * &row[j])
                    .sum::<BigM>();
                match &self.column_variables[j].1 {
                    Some(cost) => total - cost,
                    None => total,
                }
            })
            .collect();
    }

    /// Whether no column has a reduced cost that improves the objective.
    pub fn is_optimal(&self) -> bool {
        !self.reduced_costs[1..].iter().any(|cost| self.objective.is_improving(cost))
    }

    /// Whether all basic variables are nonnegative.
    pub fn is_primal_feasible(&self) -> bool {
        self.values.iter().all(|row| !row[0].is_negative())
    }

    /// Exchange the basic variable of `row` for the variable of `column`.
    ///
    /// The pivot row is divided by the pivot element, after which the pivot column is eliminated
    /// from all other rows. The reduced costs are recomputed and the theta row is cleared.
    ///
    /// # Return value
    ///
    /// The name of the variable that left the basis.
    pub fn pivot(&mut self, row: usize, column: usize) -> String {
        debug_assert!(row < self.nr_rows());
        debug_assert!(0 < column && column < self.nr_columns());

        let pivot_value = self.values[row][column].clone();
        debug_assert!(!pivot_value.is_zero());
        for value in &mut self.values[row] {
            *value /= &pivot_value;
        }

        let pivot_row = self.values[row].clone();
        for (i, other) in self.values.iter_mut().enumerate() {
            if i == row || other[column].is_zero() {
                continue;
            }
            let factor = other[column].clone();
            for (value, pivot_value) in other.iter_mut().zip(&pivot_row) {
                *value -= &factor * pivot_value;
            }
        }

        let entering = (variable_name(column), self.column_cost(column));
        let (leaving, _) = mem::replace(&mut self.row_variables[row], entering);
        self.row_index.remove(&leaving);
        self.row_index.insert(variable_name(column), row);

        self.theta = None;
        self.compute_reduced_costs();

        leaving
    }

    /// Remove all columns from `first` onwards.
    pub fn truncate_columns(&mut self, first: usize) {
        debug_assert!(0 < first && first <= self.nr_columns());

        self.column_variables.truncate(first);
        for row in &mut self.values {
            row.truncate(first);
        }
        self.theta = None;
        self.compute_reduced_costs();
    }

    /// Remove a row and its basic variable.
    pub fn remove_row(&mut self, row: usize) {
        debug_assert!(row < self.nr_rows());

        self.row_variables.remove(row);
        self.values.remove(row);
        self.index_rows();
        self.theta = None;
        self.compute_reduced_costs();
    }

    /// Append a row and column for a new constraint with a zero-cost basic variable.
    ///
    /// # Arguments
    ///
    /// * `row`: The new row including its right-hand side. It has one more value than the tableau
    /// has columns: the last value is the entry of the new basic variable itself.
    pub fn add_row_with_basic_column(&mut self, row: Vec<ExactRational>) {
        debug_assert_eq!(row.len(), self.nr_columns() + 1);

        let new = self.nr_columns();
        for existing in &mut self.values {
            existing.push(ExactRational::zero());
        }
        self.column_variables.push((column_name(new), Some(BigM::zero())));
        self.row_index.insert(variable_name(new), self.nr_rows());
        self.row_variables.push((variable_name(new), BigM::zero()));
        self.values.push(row);

        self.theta = None;
        self.compute_reduced_costs();
    }

    /// Record the ratios of a pivot selection.
    pub fn set_theta(&mut self, theta: Theta) {
        debug_assert!(match &theta {
            Theta::Primal(ratios) => ratios.len() == self.nr_rows(),
            Theta::Dual(ratios) => ratios.len() == self.nr_columns(),
        });

        self.theta = Some(theta);
    }

    /// Row in which a variable is basic.
    pub fn basis_row(&self, name: &str) -> Option<usize> {
        self.row_index.get(name).copied()
    }

    /// Value of variable `xj` in the current basic solution, zero when it is not basic.
    pub fn variable_value(&self, j: usize) -> ExactRational {
        match self.basis_row(&variable_name(j)) {
            Some(i) => self.values[i][0].clone(),
            None => ExactRational::zero(),
        }
    }

    /// Objective value of the current basic solution.
    pub fn objective_function_value(&self) -> &BigM {
        &self.reduced_costs[0]
    }

    /// Cost of the variable of column `j`, zero for `A0`.
    pub fn column_cost(&self, j: usize) -> BigM {
        self.column_variables[j].1.clone().unwrap_or_else(BigM::zero)
    }

    /// Direction of optimization.
    pub fn objective(&self) -> Objective {
        self.objective
    }

    /// Basic variables and their costs, in row order.
    pub fn row_variables(&self) -> &[(String, BigM)] {
        &self.row_variables
    }

    /// Column names and costs, in column order.
    pub fn column_variables(&self) -> &[(String, Option<BigM>)] {
        &self.column_variables
    }

    /// The grid, row by row.
    pub fn values(&self) -> &[Vec<ExactRational>] {
        &self.values
    }

    /// A single value of the grid.
    pub fn value(&self, row: usize, column: usize) -> &ExactRational {
        &self.values[row][column]
    }

    /// The delta row.
    pub fn reduced_costs(&self) -> &[BigM] {
        &self.reduced_costs
    }

    /// The ratios of the last pivot selection, if any were recorded since the last change.
    pub fn theta(&self) -> Option<&Theta> {
        self.theta.as_ref()
    }

    /// Number of rows, not counting the delta row.
    pub fn nr_rows(&self) -> usize {
        self.row_variables.len()
    }

    /// Number of columns, including `A0`.
    pub fn nr_columns(&self) -> usize {
        self.column_variables.len()
    }
}

fn ratio_text(ratio: &Option<ExactRational>) -> String {
    match ratio {
        Some(value) => value.to_string(),
        None => "-".to_string(),
    }
}

impl Display for Tableau {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        let primal_theta = match &self.theta {
            Some(Theta::Primal(ratios)) => Some(ratios),
            _ => None,
        };

        let mut header = vec!["basis".to_string(), "cost".to_string()];
        header.extend(self.column_variables.iter().map(|(name, _)| name.clone()));
        let mut costs = vec![String::new(), String::new()];
        costs.extend(self.column_variables.iter().map(|(_, cost)| {
            cost.as_ref().map(ToString::to_string).unwrap_or_default()
        }));
        let mut rows = self.row_variables.iter().zip(&self.values)
            .map(|((name, cost), values)| {
                let mut row = vec![name.clone(), cost.to_string()];
                row.extend(values.iter().map(ToString::to_string));
                row
            })
            .collect::<Vec<_>>();
        if let Some(ratios) = primal_theta {
            header.push("θ".to_string());
            costs.push(String::new());
            for (row, ratio) in rows.iter_mut().zip(ratios) {
                row.push(ratio_text(ratio));
            }
        }
        let mut footer = vec![{
            let mut delta = vec!["Δ".to_string(), String::new()];
            delta.extend(self.reduced_costs.iter().map(ToString::to_string));
            delta
        }];
        if let Some(Theta::Dual(ratios)) = &self.theta {
            let mut theta = vec!["θ".to_string(), String::new()];
            theta.extend(ratios.iter().map(ratio_text));
            footer.push(theta);
        }

        let nr_fields = header.len();
        let width = (0..nr_fields)
            .map(|k| {
                [&header, &costs].into_iter()
                    .chain(&rows)
                    .chain(&footer)
                    .filter_map(|line| line.get(k))
                    .map(|text| text.chars().count())
                    .fold(0, max)
            })
            .collect::<Vec<_>>();
        let total_width = width.iter().map(|w| w + 3).sum::<usize>();

        let write_line = |f: &mut Formatter<'_>, line: &[String]| -> FormatResult {
            for (k, text) in line.iter().enumerate() {
                let separator = if k == 1 || k == 2 { " |" } else { "" };
                write!(f, "{separator} {text:>w$}", w = width[k])?;
            }
            writeln!(f)
        };

        write_line(f, &header)?;
        write_line(f, &costs)?;
        writeln!(f, "{}", "-".repeat(total_width))?;
        for row in &rows {
            write_line(f, row)?;
        }
        writeln!(f, "{}", "-".repeat(total_width))?;
        for line in &footer {
            write_line(f, line)?;
        }

        Ok(())
    }
}
