//! # Representation of solutions
//!
//! Once a linear program is solved, the values of the decision variables and the objective value
//! are read from the final tableau. Slack, artificial and cut variables are not part of the
//! solution.
use std::fmt::{Display, Formatter, Result as FormatResult};

use itertools::Itertools;

use crate::algorithm::tableau::{variable_name, Tableau};
use crate::data::linear_program::LinearProgram;
use crate::data::number_types::rational::ExactRational;

/// The values of the decision variables of a linear program in a basic solution.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Solution {
    /// Value of the objective function for this solution.
    objective_value: ExactRational,
    /// (variable name, solution value) tuples for all decision variables, in order.
    solution_values: Vec<(String, ExactRational)>,
}

impl Solution {
    /// Create a new `Solution` instance.
    pub fn new(objective_value: ExactRational, solution_values: Vec<(String, ExactRational)>) -> Self {
        Self { objective_value, solution_values }
    }

    /// Read the solution from an optimal tableau.
    ///
    /// Decision variables that are not basic have value zero.
    ///
    /// # Arguments
    ///
    /// * `tableau`: Tableau without artificial variables in the basis, such as the optimal tableau
    /// of the Simplex method or the last tableau of the cutting plane method.
    /// * `problem`: Problem the tableau belongs to, used for the number of decision variables.
    pub fn from_tableau(tableau: &Tableau, problem: &LinearProgram) -> Self {
        let objective_value = tableau.objective_function_value();
        debug_assert!(objective_value.is_finite());

        let solution_values = (1..=problem.nr_decision_variables())
            .map(|j| (variable_name(j), tableau.variable_value(j)))
            .collect();

        Self::new(objective_value.constant().clone(), solution_values)
    }

    /// Value of the objective function.
    pub fn objective_value(&self) -> &ExactRational {
        &self.objective_value
    }

    /// Value of each decision variable, by name.
    pub fn solution_values(&self) -> &[(String, ExactRational)] {
        &self.solution_values
    }

    /// Whether all decision variables have an integer value.
    pub fn is_integer(&self) -> bool {
        self.solution_values.iter().all(|(_, value)| value.is_integer())
    }
}

/// Renders like `x1 = 2, x2 = 6, F = 36`.
impl Display for Solution {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        let values = self.solution_values.iter()
            .map(|(name, value)| format!("{name} = {value}"))
            .chain(std::iter::once(format!("F = {}", self.objective_value)))
            .join(", ");
        f.write_str(&values)
    }
}

#[cfg(test)]
mod test {
    use crate::data::linear_program::solution::Solution;
    use crate::tests::problem_1;
    use crate::RB;

    #[test]
    fn from_tableau() {
        let solution = Solution::from_tableau(&problem_1::optimal_tableau(), &problem_1::create());

        assert_eq!(solution.objective_value(), &RB!(36));
        assert_eq!(solution.solution_values(), &[("x1".to_string(), RB!(2)), ("x2".to_string(), RB!(6))]);
        assert!(solution.is_integer());
    }

    #[test]
    fn display() {
        let solution = Solution::new(RB!(3, 2), vec![("x1".to_string(), RB!(1)), ("x2".to_string(), RB!(0))]);
        assert_eq!(solution.to_string(), "x1 = 1, x2 = 0, F = 3/2");
        assert!(!Solution::new(RB!(0), vec![("x1".to_string(), RB!(1, 2))]).is_integer());
    }
}
