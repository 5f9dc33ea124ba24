//! Local search configuration.

use thiserror::Error;

/// Configuration error.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("improvement_epsilon must be finite and non-negative, got {0}")]
    Epsilon(f64),

    #[error("max_repair_interval must be at least 1")]
    RepairInterval,

    #[error("trash interval range [{min}, {max}) must be non-empty and start at 1 or more")]
    TrashIntervalRange { min: usize, max: usize },

    #[error("trash_interval_constant must be at least 1")]
    TrashIntervalConstant,

    #[error("{name} must be in [0, 1], got {value}")]
    Probability { name: &'static str, value: f64 },
}

/// How each round picks its move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MovePolicy {
    /// Evaluate every move and apply the lowest delta. Trashed indices are
    /// re-considered on trash-admission rounds.
    #[default]
    BestImprovement,

    /// Take the first move scanned in insertion → removal → exchange order
    /// and apply it only if it improves. Never looks at the trash.
    FirstImprovement,
}

/// Which element of an adjacent pair the repair removes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RepairStrategy {
    /// Always the right (larger) index.
    RightElement,

    /// The element whose removal lowers the cost more; the left one on a tie.
    CheaperRemoval,

    /// The left one with probability `left_removal_probability`, otherwise
    /// the right one.
    #[default]
    Randomized,
}

/// Configuration parameters for the local search.
///
/// # Cadences
///
/// Repair runs every `k` rounds with `k` drawn uniformly from
/// `[1, max_repair_interval]`, re-drawn after every repair.
///
/// Under best improvement the trash is scanned every `t` rounds. The first
/// `t` is drawn from `[trash_interval_min, trash_interval_max)`; after each
/// admission round the next `t` is `trash_interval_constant`, except with
/// probability `trash_redraw_probability` when it is drawn again.
///
/// # Examples
///
/// ```
/// use u_grasp::local_search::{LocalSearchConfig, MovePolicy, RepairStrategy};
///
/// let config = LocalSearchConfig::default()
///     .with_policy(MovePolicy::FirstImprovement)
///     .with_repair(RepairStrategy::CheaperRemoval)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.max_repair_interval, 4);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LocalSearchConfig {
    /// Move selection policy.
    pub policy: MovePolicy,

    /// Repair strategy.
    pub repair: RepairStrategy,

    /// A move is applied only if its delta is below `-improvement_epsilon`.
    pub improvement_epsilon: f64,

    /// Upper bound (inclusive) of the repair interval.
    pub max_repair_interval: usize,

    /// Lower bound (inclusive) of a drawn trash interval.
    pub trash_interval_min: usize,

    /// Upper bound (exclusive) of a drawn trash interval.
    pub trash_interval_max: usize,

    /// Trash interval used after an admission round unless re-drawn.
    pub trash_interval_constant: usize,

    /// Probability of drawing a fresh trash interval instead of the constant.
    pub trash_redraw_probability: f64,

    /// Probability that randomized repair removes the left element.
    pub left_removal_probability: f64,

    /// Random seed for [`LocalSearchRunner::run`](super::LocalSearchRunner::run).
    pub seed: Option<u64>,
}

impl Default for LocalSearchConfig {
    fn default() -> Self {
        Self {
            policy: MovePolicy::default(),
            repair: RepairStrategy::default(),
            improvement_epsilon: 1e-9,
            max_repair_interval: 4,
            trash_interval_min: 4,
            trash_interval_max: 8,
            trash_interval_constant: 5,
            trash_redraw_probability: 0.1,
            left_removal_probability: 0.5,
            seed: None,
        }
    }
}

impl LocalSearchConfig {
    /// Sets the move selection policy.
    pub fn with_policy(mut self, policy: MovePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the repair strategy.
    pub fn with_repair(mut self, repair: RepairStrategy) -> Self {
        self.repair = repair;
        self
    }

    /// Sets the acceptance epsilon.
    pub fn with_improvement_epsilon(mut self, epsilon: f64) -> Self {
        self.improvement_epsilon = epsilon;
        self
    }

    /// Sets the inclusive upper bound of the repair interval.
    pub fn with_max_repair_interval(mut self, n: usize) -> Self {
        self.max_repair_interval = n;
        self
    }

    /// Sets the half-open range `[min, max)` trash intervals are drawn from.
    pub fn with_trash_interval_range(mut self, min: usize, max: usize) -> Self {
        self.trash_interval_min = min;
        self.trash_interval_max = max;
        self
    }

    /// Sets the trash interval used after an admission round.
    pub fn with_trash_interval_constant(mut self, n: usize) -> Self {
        self.trash_interval_constant = n;
        self
    }

    /// Sets the probability of re-drawing the trash interval.
    pub fn with_trash_redraw_probability(mut self, p: f64) -> Self {
        self.trash_redraw_probability = p;
        self
    }

    /// Sets the probability that randomized repair removes the left element.
    pub fn with_left_removal_probability(mut self, p: f64) -> Self {
        self.left_removal_probability = p;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.improvement_epsilon.is_finite() || self.improvement_epsilon < 0.0 {
            return Err(ConfigError::Epsilon(self.improvement_epsilon));
        }
        if self.max_repair_interval == 0 {
            return Err(ConfigError::RepairInterval);
        }
        if self.trash_interval_min == 0 || self.trash_interval_min >= self.trash_interval_max {
            return Err(ConfigError::TrashIntervalRange {
                min: self.trash_interval_min,
                max: self.trash_interval_max,
            });
        }
        if self.trash_interval_constant == 0 {
            return Err(ConfigError::TrashIntervalConstant);
        }
        for (name, value) in [
            ("trash_redraw_probability", self.trash_redraw_probability),
            ("left_removal_probability", self.left_removal_probability),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Probability { name, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LocalSearchConfig::default();
        assert_eq!(config.policy, MovePolicy::BestImprovement);
        assert_eq!(config.repair, RepairStrategy::Randomized);
        assert_eq!(config.max_repair_interval, 4);
        assert_eq!(config.trash_interval_min, 4);
        assert_eq!(config.trash_interval_max, 8);
        assert_eq!(config.trash_interval_constant, 5);
        assert!((config.trash_redraw_probability - 0.1).abs() < 1e-15);
        assert!((config.left_removal_probability - 0.5).abs() < 1e-15);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_validate_ok() {
        assert!(LocalSearchConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_bad_epsilon() {
        let config = LocalSearchConfig::default().with_improvement_epsilon(-1e-3);
        assert_eq!(config.validate(), Err(ConfigError::Epsilon(-1e-3)));

        let config = LocalSearchConfig::default().with_improvement_epsilon(f64::NAN);
        assert!(matches!(config.validate(), Err(ConfigError::Epsilon(_))));
    }

    #[test]
    fn test_validate_zero_repair_interval() {
        let config = LocalSearchConfig::default().with_max_repair_interval(0);
        assert_eq!(config.validate(), Err(ConfigError::RepairInterval));
    }

    #[test]
    fn test_validate_empty_trash_range() {
        let config = LocalSearchConfig::default().with_trash_interval_range(6, 6);
        assert_eq!(
            config.validate(),
            Err(ConfigError::TrashIntervalRange { min: 6, max: 6 })
        );

        let config = LocalSearchConfig::default().with_trash_interval_range(0, 3);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_trash_constant() {
        let config = LocalSearchConfig::default().with_trash_interval_constant(0);
        assert_eq!(config.validate(), Err(ConfigError::TrashIntervalConstant));
    }

    #[test]
    fn test_validate_bad_probability() {
        let config = LocalSearchConfig::default().with_left_removal_probability(1.5);
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "left_removal_probability must be in [0, 1], got 1.5"
        );
    }

    #[test]
    fn test_config_builder() {
        let config = LocalSearchConfig::default()
            .with_policy(MovePolicy::FirstImprovement)
            .with_repair(RepairStrategy::RightElement)
            .with_improvement_epsilon(1e-6)
            .with_max_repair_interval(2)
            .with_trash_interval_range(3, 10)
            .with_trash_interval_constant(4)
            .with_trash_redraw_probability(0.25)
            .with_left_removal_probability(0.75)
            .with_seed(123);

        assert_eq!(config.policy, MovePolicy::FirstImprovement);
        assert_eq!(config.repair, RepairStrategy::RightElement);
        assert_eq!(config.max_repair_interval, 2);
        assert_eq!(config.trash_interval_min, 3);
        assert_eq!(config.trash_interval_max, 10);
        assert_eq!(config.trash_interval_constant, 4);
        assert_eq!(config.seed, Some(123));
        assert!(config.validate().is_ok());
    }
}
