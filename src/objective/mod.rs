//! Objective functions.
//!
//! The local search treats the objective as a black box that scores
//! solutions and proposed moves. [`Qbf`] is the quadratic binary function
//! implementation, usable directly or through its inverse for maximization.
//!
//! # References
//!
//! - Kochenberger, G. et al. (2014). "The unconstrained binary quadratic
//!   programming problem: a survey", *Journal of Combinatorial Optimization* 28(1), 58-81.

mod qbf;
mod types;

pub use qbf::{Qbf, QbfError};
pub use types::Objective;
