//! Core trait for objective functions over subset solutions.

use crate::solution::Solution;

/// Objective function of a binary-variable minimization problem.
///
/// Solutions are subsets of the domain `0..domain_size()`. All methods take
/// the solution by shared reference: an objective scores solutions, it never
/// edits them. The local search writes [`evaluate`](Objective::evaluate)
/// results into [`Solution::cost`] itself.
///
/// Delta methods return the change in cost the move would cause, so a
/// negative value is an improvement.
///
/// # Examples
///
/// ```
/// use u_grasp::{Objective, Solution};
///
/// /// Each selected index `i` costs `weights[i]`.
/// struct Linear {
///     weights: Vec<f64>,
/// }
///
/// impl Objective for Linear {
///     fn domain_size(&self) -> usize { self.weights.len() }
///     fn evaluate(&self, sol: &Solution) -> f64 {
///         sol.iter().map(|i| self.weights[i]).sum()
///     }
///     fn insertion_cost(&self, c: usize, sol: &Solution) -> f64 {
///         if sol.contains(c) { 0.0 } else { self.weights[c] }
///     }
///     fn removal_cost(&self, e: usize, sol: &Solution) -> f64 {
///         if sol.contains(e) { -self.weights[e] } else { 0.0 }
///     }
///     fn exchange_cost(&self, c: usize, e: usize, sol: &Solution) -> f64 {
///         self.insertion_cost(c, sol) + self.removal_cost(e, sol)
///     }
/// }
///
/// let obj = Linear { weights: vec![1.0, -2.0] };
/// assert_eq!(obj.insertion_cost(1, &Solution::empty()), -2.0);
/// ```
pub trait Objective: Send + Sync {
    /// Number of binary variables.
    fn domain_size(&self) -> usize;

    /// Full cost of `solution`. Lower is better.
    fn evaluate(&self, solution: &Solution) -> f64;

    /// Cost change of adding `candidate` to `solution`.
    fn insertion_cost(&self, candidate: usize, solution: &Solution) -> f64;

    /// Cost change of removing `element` from `solution`.
    fn removal_cost(&self, element: usize, solution: &Solution) -> f64;

    /// Cost change of removing `element` and adding `candidate` in one move.
    fn exchange_cost(&self, candidate: usize, element: usize, solution: &Solution) -> f64;
}
