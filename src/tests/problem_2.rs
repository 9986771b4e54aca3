//! Problems that need artificial variables or integer solutions.
//!
//! * `create`: minimize `2 x1 + 3 x2` subject to `x1 + x2 >= 10`, optimal at `x1 = 10` with
//! objective value `20`.
//! * `integer`: maximize `7 x1 + 9 x2` subject to `-x1 + 3 x2 <= 6` and `7 x1 + x2 <= 35`. The
//! relaxation is optimal at `x1 = 9/2`, `x2 = 7/2` with objective value `63`, the integer optimum
//! is `x1 = 4`, `x2 = 3` with objective value `55`.
use crate::algorithm::simplex;
use crate::algorithm::simplex::Pivot;
use crate::algorithm::tableau::{Tableau, Theta};
use crate::data::linear_program::{Constraint, LinearProgram};
use crate::data::linear_program::elements::{ConstraintType, Objective};
use crate::data::linear_program::solution::Solution;
use crate::data::number_types::big_m::BigM;
use crate::RB;

#[test]
fn conversion_pipeline() {
    let problem = create();

    let history = simplex::solve(&problem).unwrap();
    assert_eq!(history.artificial_problem(), &artificial_form());
    assert_eq!(history.initial_basis(), &[("x4".to_string(), RB!(10))]);

    let steps = history.steps();
    assert_eq!(steps.len(), 1);
    assert_eq!(steps[0].pivot(), Some(Pivot { row: 0, column: 1 }));
    assert_eq!(
        steps[0].tableau().reduced_costs(),
        &[
            BigM::new(RB!(10), RB!(0)),
            BigM::new(RB!(1), RB!(-2)),
            BigM::new(RB!(1), RB!(-3)),
            BigM::new(RB!(-1), RB!(0)),
            BigM::new(RB!(0), RB!(0)),
        ],
    );
    assert_eq!(steps[0].tableau().theta(), Some(&Theta::Primal(vec![Some(RB!(10))])));
    assert_eq!(history.optimal_tableau(), Some(&optimal_tableau()));

    let solution = Solution::from_tableau(&optimal_tableau(), &problem);
    assert_eq!(solution.to_string(), "x1 = 10, x2 = 0, F = 20");
}

/// The minimization problem as it is handed over.
pub fn create() -> LinearProgram {
    LinearProgram::new(
        Objective::Minimize,
        vec![RB!(2), RB!(3)],
        vec![Constraint::new(vec![RB!(1), RB!(1)], ConstraintType::Greater, RB!(10))],
    ).unwrap()
}

/// After adding the surplus variable `x3` and the artificial variable `x4`.
pub fn artificial_form() -> LinearProgram {
    let mut problem = create();
    problem.add_slack_variables();
    problem.add_artificial_variables();
    problem
}

/// The optimal tableau, after removing the artificial column.
pub fn optimal_tableau() -> Tableau {
    let cost = |value| Some(BigM::from(RB!(value)));

    Tableau::new(
        Objective::Minimize,
        vec![("x1".to_string(), BigM::from(RB!(2)))],
        vec![("A0".to_string(), None), ("A1".to_string(), cost(2)), ("A2".to_string(), cost(3)), ("A3".to_string(), cost(0))],
        vec![vec![RB!(10), RB!(1), RB!(1), RB!(-1)]],
    )
}

/// The integer problem as it is handed over.
pub fn integer() -> LinearProgram {
    LinearProgram::new(
        Objective::Maximize,
        vec![RB!(7), RB!(9)],
        vec![
            Constraint::new(vec![RB!(-1), RB!(3)], ConstraintType::Less, RB!(6)),
            Constraint::new(vec![RB!(7), RB!(1)], ConstraintType::Less, RB!(35)),
        ],
    ).unwrap()
}

/// The optimal tableau of the relaxation of the integer problem.
pub fn integer_relaxation_tableau() -> Tableau {
    let cost = |value| Some(BigM::from(RB!(value)));

    Tableau::new(
        Objective::Maximize,
        vec![("x2".to_string(), BigM::from(RB!(9))), ("x1".to_string(), BigM::from(RB!(7)))],
        vec![
            ("A0".to_string(), None),
            ("A1".to_string(), cost(7)),
            ("A2".to_string(), cost(9)),
            ("A3".to_string(), cost(0)),
            ("A4".to_string(), cost(0)),
        ],
        vec![
            vec![RB!(7, 2), RB!(0), RB!(1), RB!(7, 22), RB!(1, 22)],
            vec![RB!(9, 2), RB!(1), RB!(0), RB!(-1, 22), RB!(3, 22)],
        ],
    )
}

#[test]
fn integer_relaxation() {
    let history = simplex::solve(&integer()).unwrap();

    let pivots = history.steps().iter().map(|step| step.pivot()).collect::<Vec<_>>();
    assert_eq!(pivots, vec![Some(Pivot { row: 0, column: 2 }), Some(Pivot { row: 1, column: 1 })]);
    let optimal = history.optimal_tableau().unwrap();
    assert_eq!(optimal, &integer_relaxation_tableau());
    assert_eq!(
        optimal.reduced_costs(),
        &[RB!(63), RB!(0), RB!(0), RB!(28, 11), RB!(15, 11)].map(BigM::from),
    );
}
