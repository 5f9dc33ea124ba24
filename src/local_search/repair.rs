//! Adjacency repair.
//!
//! Feasibility forbids selecting two consecutive indices. Moves ignore that
//! rule, so the search periodically walks the sorted solution and, for every
//! pair `(a, a + 1)`, removes one of the two. Removed indices go to the
//! trash rather than back to the CL.
//!
//! The walk keeps a stack of survivors. When the left element of a pair is
//! dropped, the right one becomes the new top and is compared with the next
//! value, so runs like `3, 4, 5` are fully resolved in one pass. Dropping
//! an element never makes two survivors adjacent, hence a second pass
//! removes nothing.

use tracing::{debug, trace};

use super::config::RepairStrategy;
use super::pools::CandidatePools;
use crate::objective::Objective;
use crate::random::RandomSource;
use crate::solution::Solution;

/// Resolves adjacency violations with a fixed strategy.
#[derive(Debug, Clone, Copy)]
pub struct Repairer {
    strategy: RepairStrategy,
    left_removal_probability: f64,
}

impl Repairer {
    /// Creates a repairer. `left_removal_probability` is only used by
    /// [`RepairStrategy::Randomized`].
    pub fn new(strategy: RepairStrategy, left_removal_probability: f64) -> Self {
        Self {
            strategy,
            left_removal_probability,
        }
    }

    pub fn strategy(&self) -> RepairStrategy {
        self.strategy
    }

    /// Removes one element of every adjacent pair and re-evaluates the
    /// solution cost.
    ///
    /// Returns the removed indices in the order they were removed. Each of
    /// them is moved to the trash.
    pub fn repair<O, R>(
        &self,
        objective: &O,
        solution: &mut Solution,
        pools: &mut CandidatePools,
        rng: &mut R,
    ) -> Vec<usize>
    where
        O: Objective + ?Sized,
        R: RandomSource + ?Sized,
    {
        let sorted = solution.sorted();
        let mut kept: Vec<usize> = Vec::with_capacity(sorted.len());
        let mut removed = Vec::new();

        for value in sorted {
            let prev = match kept.last() {
                Some(&prev) if prev + 1 == value => prev,
                _ => {
                    kept.push(value);
                    continue;
                }
            };

            let victim = if self.drop_left(prev, value, objective, solution, rng) {
                kept.pop();
                kept.push(value);
                prev
            } else {
                value
            };

            solution.remove(victim);
            pools.discard(victim);
            removed.push(victim);
        }

        solution.cost = objective.evaluate(solution);

        if removed.is_empty() {
            trace!(event = "repair", removed = 0usize, cost = solution.cost);
        } else {
            debug!(
                event = "repair",
                strategy = ?self.strategy,
                removed = removed.len(),
                size = solution.len(),
                cost = solution.cost,
            );
        }

        removed
    }

    fn drop_left<O, R>(
        &self,
        left: usize,
        right: usize,
        objective: &O,
        solution: &Solution,
        rng: &mut R,
    ) -> bool
    where
        O: Objective + ?Sized,
        R: RandomSource + ?Sized,
    {
        match self.strategy {
            RepairStrategy::RightElement => false,
            RepairStrategy::CheaperRemoval => {
                objective.removal_cost(left, solution) <= objective.removal_cost(right, solution)
            }
            RepairStrategy::Randomized => rng.next_unit() <= self.left_removal_probability,
        }
    }
}
