//! Properties that hold for arbitrary inputs.
use num::BigInt;
use num::Zero;
use proptest::prelude::*;

use relp_cut::algorithm::gomory::cut::BranchCut;
use relp_cut::algorithm::simplex;
use relp_cut::data::linear_program::{Constraint, LinearProgram};
use relp_cut::data::linear_program::elements::{ConstraintType, Objective};
use relp_cut::data::linear_program::solution::Solution;
use relp_cut::data::number_types::big_m::BigM;
use relp_cut::data::number_types::rational::ExactRational;

fn rational() -> impl Strategy<Value = ExactRational> {
    (-50_i64..50, 1_i64..20).prop_map(|(numer, denom)| ExactRational::new(numer, denom))
}

fn nonzero_rational() -> impl Strategy<Value = ExactRational> {
    rational().prop_filter("nonzero", |value| !value.is_zero())
}

fn constraint_type() -> impl Strategy<Value = ConstraintType> {
    prop_oneof![Just(ConstraintType::Less), Just(ConstraintType::Greater), Just(ConstraintType::Equal)]
}

/// Problems of the form `maximize c x` subject to `A x <= b` with `A > 0` and `b >= 0`, which are
/// always feasible and bounded.
fn bounded_problem() -> impl Strategy<Value = (Vec<i64>, Vec<(Vec<i64>, i64)>)> {
    (1_usize..4, 1_usize..4).prop_flat_map(|(nr_variables, nr_constraints)| {
        (
            prop::collection::vec(-3_i64..6, nr_variables),
            prop::collection::vec(
                (prop::collection::vec(1_i64..6, nr_variables), 0_i64..20),
                nr_constraints,
            ),
        )
    })
}

proptest! {
    #[test]
    fn rational_arithmetic_is_exact(a in rational(), b in nonzero_rational()) {
        prop_assert_eq!(&(&a + &b) - &b, a.clone());
        prop_assert_eq!(&(&a * &b) / &b, a.clone());
        prop_assert!(*(&a / &b).denom() > BigInt::zero());
    }

    #[test]
    fn rational_text_form(a in rational()) {
        prop_assert_eq!(a.to_string().parse::<ExactRational>(), Ok(a));
    }

    #[test]
    fn big_m_dominates_constant(
        (small, large) in (rational(), rational()).prop_filter("distinct", |(a, b)| a < b),
        first in rational(),
        second in rational(),
    ) {
        prop_assert!(BigM::new(small, first) < BigM::new(large, second));
    }

    #[test]
    fn canonicalize_is_idempotent(
        rows in prop::collection::vec(
            (prop::collection::vec(rational(), 2), constraint_type(), rational()),
            1..5,
        ),
    ) {
        let constraints = rows.into_iter()
            .map(|(coefficients, constraint_type, rhs)| Constraint::new(coefficients, constraint_type, rhs))
            .collect();
        let mut problem = LinearProgram::new(
            Objective::Maximize,
            vec![ExactRational::from_integer(1), ExactRational::from_integer(1)],
            constraints,
        ).unwrap();

        problem.canonicalize();
        prop_assert!(problem.is_canonical());
        let once = problem.clone();
        problem.canonicalize();
        prop_assert_eq!(problem, once);
    }

    #[test]
    fn cut_keeps_fractional_parts(row in prop::collection::vec(rational(), 2..6)) {
        let cut = BranchCut::new(1, &row);

        prop_assert_eq!(cut.cut_expression().len(), row.len() + 1);
        prop_assert_eq!(cut.cut_expression().last(), Some(&ExactRational::from_integer(1)));
        for (element, value) in cut.fractional_elements().iter().zip(&row) {
            prop_assert!(element.integer_part().is_integer());
            prop_assert_eq!(&(element.integer_part() + &element.fraction()), value);
            if !value.is_negative() {
                prop_assert!(!element.fraction().is_negative());
                prop_assert!(element.fraction() < ExactRational::from_integer(1));
            }
        }
    }

    #[test]
    fn optimum_is_feasible((cost, rows) in bounded_problem()) {
        let constraints = rows.iter()
            .map(|(coefficients, rhs)| Constraint::new(
                coefficients.iter().map(|&value| ExactRational::from_integer(value)).collect(),
                ConstraintType::Less,
                ExactRational::from_integer(*rhs),
            ))
            .collect();
        let problem = LinearProgram::new(
            Objective::Maximize,
            cost.iter().map(|&value| ExactRational::from_integer(value)).collect(),
            constraints,
        ).unwrap();

        let history = simplex::solve(&problem).unwrap();
        let solution = Solution::from_tableau(history.optimal_tableau().unwrap(), &problem);
        let values = solution.solution_values().iter().map(|(_, value)| value).collect::<Vec<_>>();

        prop_assert!(values.iter().all(|value| !value.is_negative()));
        for (coefficients, rhs) in &rows {
            let lhs = coefficients.iter()
                .zip(&values)
                .map(|(&coefficient, &value)| ExactRational::from_integer(coefficient) * value)
                .sum::<ExactRational>();
            prop_assert!(lhs <= ExactRational::from_integer(*rhs));
        }
        let objective = cost.iter()
            .zip(&values)
            .map(|(&coefficient, &value)| ExactRational::from_integer(coefficient) * value)
            .sum::<ExactRational>();
        prop_assert_eq!(solution.objective_value(), &objective);
        // The origin is feasible, so the optimum is at least as good.
        prop_assert!(!objective.is_negative());
    }
}
