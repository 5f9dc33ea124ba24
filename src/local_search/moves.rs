//! Neighborhood moves and their evaluation.
//!
//! Three neighborhoods are scanned, always in this order:
//!
//! 1. **Insertion**: add a CL candidate (and, on trash-admission rounds,
//!    a trashed index).
//! 2. **Removal**: drop a solution element.
//! 3. **Exchange**: drop a solution element and add a CL candidate.
//!
//! Candidates are scanned in ascending index order, solution elements in
//! insertion order, exchanges with the candidate as the outer loop.

use super::pools::CandidatePools;
use crate::objective::Objective;
use crate::solution::Solution;

/// A single neighborhood move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// Add a CL candidate.
    Insert { candidate: usize },
    /// Add an index back from the trash.
    Reinsert { candidate: usize },
    /// Drop a selected element.
    Remove { element: usize },
    /// Drop `element` and add `candidate`.
    Exchange { candidate: usize, element: usize },
}

impl Move {
    /// Index that enters the solution, if any.
    pub fn incoming(&self) -> Option<usize> {
        match *self {
            Move::Insert { candidate }
            | Move::Reinsert { candidate }
            | Move::Exchange { candidate, .. } => Some(candidate),
            Move::Remove { .. } => None,
        }
    }

    /// Index that leaves the solution, if any.
    pub fn outgoing(&self) -> Option<usize> {
        match *self {
            Move::Remove { element } | Move::Exchange { element, .. } => Some(element),
            Move::Insert { .. } | Move::Reinsert { .. } => None,
        }
    }

    /// Applies the move to the solution and the pools.
    ///
    /// The outgoing element returns to the CL; the incoming one leaves
    /// whichever pool it came from. The solution cost is not touched.
    pub fn apply(self, solution: &mut Solution, pools: &mut CandidatePools) {
        if let Some(out) = self.outgoing() {
            solution.remove(out);
            pools.release(out);
        }
        if let Some(inc) = self.incoming() {
            solution.push(inc);
            pools.select(inc);
        }
    }
}

/// A move with its delta cost.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredMove {
    pub mv: Move,
    pub delta: f64,
}

/// Keeps the first strict minimum among offered moves.
struct Best {
    delta: f64,
    mv: Option<Move>,
}

impl Best {
    fn new() -> Self {
        Self {
            delta: f64::INFINITY,
            mv: None,
        }
    }

    fn offer(&mut self, mv: Move, delta: f64) {
        if delta < self.delta {
            self.delta = delta;
            self.mv = Some(mv);
        }
    }

    fn finish(self) -> Option<ScoredMove> {
        self.mv.map(|mv| ScoredMove {
            mv,
            delta: self.delta,
        })
    }
}

/// Best-improvement scan over every move.
///
/// Returns the move with the lowest delta, whether improving or not; ties
/// keep the earliest move in scan order. Trashed indices are offered as
/// insertions right after the CL insertions when `scan_trash` is set.
/// Returns `None` only if there is no move at all.
pub fn best_move<O: Objective + ?Sized>(
    objective: &O,
    solution: &Solution,
    pools: &CandidatePools,
    scan_trash: bool,
) -> Option<ScoredMove> {
    let mut best = Best::new();

    for candidate in pools.candidates() {
        let delta = objective.insertion_cost(candidate, solution);
        best.offer(Move::Insert { candidate }, delta);
    }

    if scan_trash {
        for candidate in pools.trash() {
            let delta = objective.insertion_cost(candidate, solution);
            best.offer(Move::Reinsert { candidate }, delta);
        }
    }

    for element in solution.iter() {
        let delta = objective.removal_cost(element, solution);
        best.offer(Move::Remove { element }, delta);
    }

    for candidate in pools.candidates() {
        for element in solution.iter() {
            let delta = objective.exchange_cost(candidate, element, solution);
            best.offer(Move::Exchange { candidate, element }, delta);
        }
    }

    best.finish()
}

/// First-improvement scan.
///
/// Scans insertions, then removals, then exchanges, and returns the first
/// move whose delta is below the running minimum. The minimum starts at
/// `+∞`, so any move with a comparable delta ends the scan; acceptance is
/// left to the caller. The trash is never scanned.
pub fn first_move<O: Objective + ?Sized>(
    objective: &O,
    solution: &Solution,
    pools: &CandidatePools,
) -> Option<ScoredMove> {
    let min_delta = f64::INFINITY;

    for candidate in pools.candidates() {
        let delta = objective.insertion_cost(candidate, solution);
        if delta < min_delta {
            return Some(ScoredMove {
                mv: Move::Insert { candidate },
                delta,
            });
        }
    }

    for element in solution.iter() {
        let delta = objective.removal_cost(element, solution);
        if delta < min_delta {
            return Some(ScoredMove {
                mv: Move::Remove { element },
                delta,
            });
        }
    }

    for candidate in pools.candidates() {
        for element in solution.iter() {
            let delta = objective.exchange_cost(candidate, element, solution);
            if delta < min_delta {
                return Some(ScoredMove {
                    mv: Move::Exchange { candidate, element },
                    delta,
                });
            }
        }
    }

    None
}
