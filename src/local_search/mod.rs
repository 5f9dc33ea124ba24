//! GRASP local search with adjacency repair.
//!
//! Improves a subset solution with insertion, removal and exchange moves
//! until no move lowers the cost. Moves may select two consecutive
//! indices, which the problem forbids; a repair pass removes one element of
//! each such pair every few rounds and once more before returning.
//!
//! Indices dropped by repair go to a trash pool instead of the candidate
//! list. Under best improvement the trash is re-scanned every few rounds,
//! so a dropped index can come back when it is again the best insertion.
//!
//! # References
//!
//! - Feo, T. A. & Resende, M. G. C. (1995). "Greedy randomized adaptive
//!   search procedures", *Journal of Global Optimization* 6(2), 109-133.
//! - Resende, M. G. C. & Ribeiro, C. C. (2016). *Optimization by GRASP*,
//!   Springer.

mod config;
mod moves;
mod pools;
mod repair;
mod runner;

#[cfg(test)]
mod testing;

pub use config::{ConfigError, LocalSearchConfig, MovePolicy, RepairStrategy};
pub use moves::{best_move, first_move, Move, ScoredMove};
pub use pools::{CandidatePools, Slot};
pub use repair::Repairer;
pub use runner::{AppliedMove, LocalSearchResult, LocalSearchRunner};
