//! # Bringing a linear program into a form the Simplex method can start from
//!
//! Three transformations are applied in order, each of them changes the problem in place:
//!
//! 1. Make all right-hand sides nonnegative.
//! 2. Add a slack variable for every inequality.
//! 3. Add an artificial variable for every `>=` and `=` constraint.
//!
//! Afterwards, every row contains a column that is a unit vector, such that an initial basis can
//! be read off directly.
use log::debug;
use num::Zero;

use crate::data::linear_program::LinearProgram;
use crate::data::linear_program::elements::{slack_coefficient, ConstraintType};
use crate::data::number_types::rational::ExactRational;
use crate::data::linear_program::is_consistent;

impl LinearProgram {
    /// Multiply every constraint with a negative right-hand side by `-1`.
    ///
    /// The inequality direction is flipped along with it. Constraints with a nonnegative
    /// right-hand side are left untouched, so applying this twice changes nothing the second time.
    pub fn canonicalize(&mut self) {
        let mut nr_flipped = 0;
        for constraint in &mut self.constraints {
            if constraint.right_hand_side.is_negative() {
                for coefficient in &mut constraint.coefficients {
                    *coefficient = -&*coefficient;
                }
                constraint.right_hand_side = -&constraint.right_hand_side;
                constraint.constraint_type = -constraint.constraint_type;
                nr_flipped += 1;
            }
        }

        debug!("Canonicalized, {} of {} constraints negated", nr_flipped, self.nr_constraints());
    }

    /// Whether all right-hand sides are nonnegative.
    pub fn is_canonical(&self) -> bool {
        self.constraints.iter().all(|constraint| !constraint.right_hand_side.is_negative())
    }

    /// Add a slack variable with zero cost for every inequality constraint.
    ///
    /// The slack has coefficient `1` in the row of a `<=` constraint and `-1` in the row of a `>=`
    /// constraint.
    ///
    /// # Return value
    ///
    /// The number of slack variables added.
    pub fn add_slack_variables(&mut self) -> usize {
        debug_assert!(self.nr_artificial_variables() == 0);

        let slacks = self.constraints.iter()
            .enumerate()
            .filter_map(|(i, constraint)| {
                slack_coefficient(constraint.constraint_type).map(|coefficient| (i, coefficient))
            })
            .collect::<Vec<_>>();
        for (row, coefficient) in &slacks {
            self.append_column(*row, coefficient.clone());
            self.slack_coefficients.push(ExactRational::zero());
        }
        debug_assert!(is_consistent(self));

        debug!("Added {} slack variables", slacks.len());
        slacks.len()
    }

    /// Add an artificial variable for every `>=` and `=` constraint.
    ///
    /// The artificial variable has coefficient `1` in its row and a cost of `-M` when maximizing,
    /// `M` when minimizing.
    ///
    /// # Return value
    ///
    /// The number of artificial variables added.
    pub fn add_artificial_variables(&mut self) -> usize {
        let rows = self.constraints.iter()
            .enumerate()
            .filter(|(_, constraint)| constraint.constraint_type != ConstraintType::Less)
            .map(|(i, _)| i)
            .collect::<Vec<_>>();
        let cost = self.objective.artificial_cost();
        for &row in &rows {
            self.append_column(row, ExactRational::from(1));
            self.artificial_coefficients.push(cost.clone());
        }
        debug_assert!(is_consistent(self));

        debug!("Added {} artificial variables with cost {}", rows.len(), cost);
        rows.len()
    }

    /// Extend every constraint with one coefficient: `value` in `row`, zero elsewhere.
    fn append_column(&mut self, row: usize, value: ExactRational) {
        for (i, constraint) in self.constraints.iter_mut().enumerate() {
            constraint.coefficients.push(if i == row { value.clone() } else { ExactRational::zero() });
        }
    }
}

#[cfg(test)]
mod test {
    use crate::data::linear_program::{Constraint, LinearProgram};
    use crate::data::linear_program::elements::{ConstraintType, Objective};
    use crate::data::number_types::big_m::BigM;
    use crate::RB;

    fn mixed() -> LinearProgram {
        LinearProgram::new(
            Objective::Maximize,
            vec![RB!(1), RB!(1)],
            vec![
                Constraint::new(vec![RB!(-1), RB!(-1)], ConstraintType::Greater, RB!(-4)),
                Constraint::new(vec![RB!(1), RB!(-1)], ConstraintType::Equal, RB!(1)),
                Constraint::new(vec![RB!(2), RB!(1)], ConstraintType::Greater, RB!(1, 2)),
            ],
        ).unwrap()
    }

    #[test]
    fn canonicalize() {
        let mut problem = mixed();
        assert!(!problem.is_canonical());
        problem.canonicalize();
        assert!(problem.is_canonical());

        let first = &problem.constraints()[0];
        assert_eq!(first.coefficients(), &[RB!(1), RB!(1)]);
        assert_eq!(first.constraint_type(), ConstraintType::Less);
        assert_eq!(first.right_hand_side(), &RB!(4));
        assert_eq!(problem.constraints()[1], mixed().constraints()[1]);
    }

    #[test]
    fn canonicalize_idempotent() {
        let mut problem = mixed();
        problem.canonicalize();
        let once = problem.clone();
        problem.canonicalize();

        assert_eq!(problem, once);
    }

    #[test]
    fn slack_and_artificial() {
        let mut problem = mixed();
        problem.canonicalize();

        assert_eq!(problem.add_slack_variables(), 2);
        assert_eq!(problem.slack_coefficients(), &[RB!(0), RB!(0)]);
        assert_eq!(problem.constraints()[0].coefficients(), &[RB!(1), RB!(1), RB!(1), RB!(0)]);
        assert_eq!(problem.constraints()[1].coefficients(), &[RB!(1), RB!(-1), RB!(0), RB!(0)]);
        assert_eq!(problem.constraints()[2].coefficients(), &[RB!(2), RB!(1), RB!(0), RB!(-1)]);

        assert_eq!(problem.add_artificial_variables(), 2);
        assert_eq!(problem.artificial_coefficients(), &[-BigM::m(), -BigM::m()]);
        assert_eq!(problem.nr_variables(), 6);
        assert_eq!(
            problem.constraints()[2].coefficients(),
            &[RB!(2), RB!(1), RB!(0), RB!(-1), RB!(0), RB!(1)],
        );
        assert!(problem.is_artificial(4));
        assert!(!problem.is_artificial(3));
        assert_eq!(problem.cost(0), BigM::from(RB!(1)));
        assert_eq!(problem.cost(5), -BigM::m());
    }

    #[test]
    fn artificial_cost_minimize() {
        let mut problem = LinearProgram::new(
            Objective::Minimize,
            vec![RB!(2), RB!(3)],
            vec![Constraint::new(vec![RB!(1), RB!(1)], ConstraintType::Greater, RB!(10))],
        ).unwrap();
        problem.canonicalize();
        problem.add_slack_variables();
        problem.add_artificial_variables();

        assert_eq!(problem.cost(3), BigM::m());
    }
}
