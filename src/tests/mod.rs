//! # Integration tests that require a look inside the crate.
//!
//! Convention for function names:
//!
//! * `fn create()`: the problem as it is handed over
//! * `fn slack_form()`, `fn artificial_form()`: the problem after adding auxiliary variables
//! * `fn initial_tableau()`: the tableau of the first basis
//! * `fn optimal_tableau()`: the tableau at the optimum
pub mod problem_2;
