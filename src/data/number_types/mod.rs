//! # Number types
//!
//! The solver computes exclusively with exact numbers. Rational numbers are used for all tableau
//! entries, and a pair of rational numbers represents values that contain the symbolic, arbitrarily
//! large constant `M` of the Big-M method.
pub mod big_m;
pub mod rational;
