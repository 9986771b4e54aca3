//! # Algorithms
//!
//! The Simplex method solves the linear relaxation, after which the optimal tableau can be handed
//! to the cutting plane method when an integer solution is required.
pub mod error;
pub mod gomory;
pub mod simplex;
pub mod tableau;
