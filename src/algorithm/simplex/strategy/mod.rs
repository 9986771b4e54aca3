//! # Strategies for the Simplex algorithm
//!
//! The strategy is chosen at compile time with a type parameter of `simplex::solve_with`.
pub mod pivot_rule;
