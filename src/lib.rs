//! # An exact linear program solver with cutting planes
//!
//! Linear programs are solved with a tableau Simplex method that uses the Big-M method to find an
//! initial basis. All arithmetic is done with arbitrary precision rational numbers, so no pivot
//! error accumulates. When an integer solution is required, Gomory's fractional cutting planes
//! are added to the optimal tableau until the basic solution is integral.
//!
//! Every intermediate tableau is kept, such that the whole derivation can be replayed afterwards.
//!
//! ```
//! use relp_cut::RB;
//! use relp_cut::algorithm::simplex;
//! use relp_cut::data::linear_program::{Constraint, LinearProgram};
//! use relp_cut::data::linear_program::elements::{ConstraintType, Objective};
//! use relp_cut::data::linear_program::solution::Solution;
//!
//! let problem = LinearProgram::new(
//!     Objective::Maximize,
//!     vec![RB!(3), RB!(5)],
//!     vec![
//!         Constraint::new(vec![RB!(1), RB!(0)], ConstraintType::Less, RB!(4)),
//!         Constraint::new(vec![RB!(0), RB!(2)], ConstraintType::Less, RB!(12)),
//!         Constraint::new(vec![RB!(3), RB!(2)], ConstraintType::Less, RB!(18)),
//!     ],
//! ).unwrap();
//!
//! let history = simplex::solve(&problem).unwrap();
//! let solution = Solution::from_tableau(history.optimal_tableau().unwrap(), &problem);
//! assert_eq!(solution.objective_value(), &RB!(36));
//! ```
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;

#[cfg(test)]
mod tests;
