//! GRASP local search with adjacency repair for binary optimization.
//!
//! Solves problems over binary variables `x_0..x_{n-1}` where a solution is
//! the set of indices set to one, the objective is minimized, and no two
//! consecutive indices may both be selected.
//!
//! - **Objective**: black-box cost and move deltas ([`Objective`]), with a
//!   quadratic binary function implementation ([`Qbf`]).
//! - **Local search**: insertion, removal and exchange moves under best- or
//!   first-improvement, candidate and trash pools, and periodic repair of
//!   adjacency violations ([`local_search`]).
//!
//! # Architecture
//!
//! This crate is the improvement step of a GRASP. Building the initial
//! solution, counting outer iterations and reading instances belong to the
//! driver that calls [`LocalSearchRunner::run_with_rng`] once per
//! iteration, passing its own generator.
//!
//! [`LocalSearchRunner::run_with_rng`]: local_search::LocalSearchRunner::run_with_rng

pub mod local_search;
pub mod objective;
pub mod random;
pub mod solution;

pub use objective::{Objective, Qbf, QbfError};
pub use random::RandomSource;
pub use solution::Solution;
