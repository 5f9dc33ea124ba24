//! Local search execution engine.
//!
//! # Algorithm
//!
//! 1. Build the pools: every unselected index is a candidate, trash empty
//! 2. Draw the repair interval, then the trash interval; only best
//!    improvement ever admits the trash
//! 3. Each round:
//!    a. Tick both cadences; a due trash cadence admits the trash into
//!    this round's scan and picks its next interval
//!    b. Find the best (or first) move
//!    c. Stop if its delta is not below `-improvement_epsilon`
//!    d. Apply it and re-evaluate the solution
//!    e. If the repair cadence is due, repair and draw a new interval
//! 4. Repair once more and return
//!
//! # Reference
//!
//! Feo, T. A. & Resende, M. G. C. (1995). "Greedy randomized adaptive search
//! procedures", *Journal of Global Optimization* 6(2), 109-133.

use tracing::{debug, trace};
use u_numflow::random::create_rng;

use super::config::{ConfigError, LocalSearchConfig, MovePolicy};
use super::moves::{best_move, first_move, Move};
use super::pools::CandidatePools;
use super::repair::Repairer;
use crate::objective::Objective;
use crate::random::RandomSource;
use crate::solution::Solution;

/// A move accepted during the search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppliedMove {
    /// Round (1-based) in which the move was applied.
    pub round: usize,
    pub mv: Move,
    /// Delta reported by the objective.
    pub delta: f64,
    /// Solution cost before the move.
    pub cost_before: f64,
    /// Re-evaluated solution cost right after the move, before any repair.
    pub cost_after: f64,
}

/// Result of a local search run.
///
/// The solution itself is improved in place; this records how.
#[derive(Debug, Clone)]
pub struct LocalSearchResult {
    /// Rounds executed, including the final non-improving one.
    pub rounds: usize,
    /// Accepted moves in order.
    pub moves: Vec<AppliedMove>,
    /// Repair passes, including the final one.
    pub repairs: usize,
    /// Indices removed by repair, in removal order.
    pub repaired: Vec<usize>,
    /// Trash contents when the search returned, ascending.
    pub trash: Vec<usize>,
    /// Cost of the returned solution.
    pub final_cost: f64,
}

impl LocalSearchResult {
    fn count(&self, pred: impl Fn(&Move) -> bool) -> usize {
        self.moves.iter().filter(|m| pred(&m.mv)).count()
    }

    pub fn insertions(&self) -> usize {
        self.count(|m| matches!(m, Move::Insert { .. }))
    }

    pub fn reinsertions(&self) -> usize {
        self.count(|m| matches!(m, Move::Reinsert { .. }))
    }

    pub fn removals(&self) -> usize {
        self.count(|m| matches!(m, Move::Remove { .. }))
    }

    pub fn exchanges(&self) -> usize {
        self.count(|m| matches!(m, Move::Exchange { .. }))
    }

    /// Cost right after each accepted move.
    pub fn cost_history(&self) -> Vec<f64> {
        self.moves.iter().map(|m| m.cost_after).collect()
    }
}

/// Round counter that fires when it reaches its interval.
struct Cadence {
    count: usize,
    interval: usize,
}

impl Cadence {
    fn new(interval: usize) -> Self {
        Self { count: 0, interval }
    }

    fn tick(&mut self) {
        self.count += 1;
    }

    fn is_due(&self) -> bool {
        self.count == self.interval
    }

    fn restart(&mut self, interval: usize) {
        self.count = 0;
        self.interval = interval;
    }
}

fn draw_repair_interval<R>(config: &LocalSearchConfig, rng: &mut R) -> usize
where
    R: RandomSource + ?Sized,
{
    rng.next_index(config.max_repair_interval) + 1
}

fn draw_trash_interval<R>(config: &LocalSearchConfig, rng: &mut R) -> usize
where
    R: RandomSource + ?Sized,
{
    rng.next_index(config.trash_interval_max - config.trash_interval_min) + config.trash_interval_min
}

fn next_trash_interval<R>(config: &LocalSearchConfig, rng: &mut R) -> usize
where
    R: RandomSource + ?Sized,
{
    if rng.next_unit() <= config.trash_redraw_probability {
        draw_trash_interval(config, rng)
    } else {
        config.trash_interval_constant
    }
}

/// Local search runner.
pub struct LocalSearchRunner;

impl LocalSearchRunner {
    /// Runs the local search with a generator seeded from `config.seed`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_grasp::local_search::{LocalSearchConfig, LocalSearchRunner};
    /// use u_grasp::{Qbf, Solution};
    ///
    /// let qbf = Qbf::new(vec![
    ///     vec![-2.0, 0.0, 0.0],
    ///     vec![0.0, 1.0, 0.0],
    ///     vec![0.0, 0.0, -3.0],
    /// ]).unwrap();
    ///
    /// let mut sol = Solution::empty();
    /// let config = LocalSearchConfig::default().with_seed(42);
    /// let result = LocalSearchRunner::run(&qbf, &mut sol, &config).unwrap();
    ///
    /// assert_eq!(sol.sorted(), vec![0, 2]);
    /// assert_eq!(result.final_cost, -5.0);
    /// ```
    pub fn run<O: Objective + ?Sized>(
        objective: &O,
        solution: &mut Solution,
        config: &LocalSearchConfig,
    ) -> Result<LocalSearchResult, ConfigError> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        Ok(Self::search(objective, solution, config, &mut rng))
    }

    /// Runs the local search drawing from the caller's generator.
    ///
    /// This is the entry point for an outer metaheuristic loop that owns a
    /// single generator across iterations. `config.seed` is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration is invalid.
    pub fn run_with_rng<O, R>(
        objective: &O,
        solution: &mut Solution,
        config: &LocalSearchConfig,
        rng: &mut R,
    ) -> Result<LocalSearchResult, ConfigError>
    where
        O: Objective + ?Sized,
        R: RandomSource + ?Sized,
    {
        config.validate()?;
        Ok(Self::search(objective, solution, config, rng))
    }

    fn search<O, R>(
        objective: &O,
        solution: &mut Solution,
        config: &LocalSearchConfig,
        rng: &mut R,
    ) -> LocalSearchResult
    where
        O: Objective + ?Sized,
        R: RandomSource + ?Sized,
    {
        let mut pools = CandidatePools::new(objective.domain_size(), solution);
        let repairer = Repairer::new(config.repair, config.left_removal_probability);
        let threshold = -config.improvement_epsilon;

        solution.cost = objective.evaluate(solution);

        let mut repair_cadence = Cadence::new(draw_repair_interval(config, rng));
        let trash_interval = draw_trash_interval(config, rng);
        let mut trash_cadence = match config.policy {
            MovePolicy::BestImprovement => Some(Cadence::new(trash_interval)),
            MovePolicy::FirstImprovement => None,
        };

        debug!(
            event = "local_search_start",
            policy = ?config.policy,
            repair = ?config.repair,
            domain_size = pools.domain_size(),
            size = solution.len(),
            cost = solution.cost,
        );

        let mut rounds = 0usize;
        let mut moves = Vec::new();
        let mut repairs = 0usize;
        let mut repaired = Vec::new();

        loop {
            rounds += 1;
            pools.update_candidates(solution);
            repair_cadence.tick();

            let scan_trash = match trash_cadence.as_mut() {
                Some(cadence) => {
                    cadence.tick();
                    if cadence.is_due() {
                        cadence.restart(next_trash_interval(config, rng));
                        true
                    } else {
                        false
                    }
                }
                None => false,
            };

            let chosen = match config.policy {
                MovePolicy::BestImprovement => best_move(objective, solution, &pools, scan_trash),
                MovePolicy::FirstImprovement => first_move(objective, solution, &pools),
            };

            let Some(scored) = chosen.filter(|m| m.delta < threshold) else {
                break;
            };

            let cost_before = solution.cost;
            scored.mv.apply(solution, &mut pools);
            solution.cost = objective.evaluate(solution);
            debug_assert!(pools.is_consistent_with(solution));

            trace!(
                event = "move",
                round = rounds,
                mv = ?scored.mv,
                delta = scored.delta,
                cost = solution.cost,
            );
            moves.push(AppliedMove {
                round: rounds,
                mv: scored.mv,
                delta: scored.delta,
                cost_before,
                cost_after: solution.cost,
            });

            if repair_cadence.is_due() {
                repaired.extend(repairer.repair(objective, solution, &mut pools, rng));
                repairs += 1;
                repair_cadence.restart(draw_repair_interval(config, rng));
                debug_assert!(pools.is_consistent_with(solution));
            }
        }

        repaired.extend(repairer.repair(objective, solution, &mut pools, rng));
        repairs += 1;

        debug!(
            event = "local_search_end",
            rounds = rounds,
            moves = moves.len(),
            repairs = repairs,
            repaired = repaired.len(),
            size = solution.len(),
            cost = solution.cost,
        );

        LocalSearchResult {
            rounds,
            moves,
            repairs,
            repaired,
            trash: pools.trash().collect(),
            final_cost: solution.cost,
        }
    }
}
