//! Quadratic binary function objective.
//!
//! `f(x) = Σ_i Σ_j x_i · x_j · A[i][j]` over `x ∈ {0,1}^n`, where the
//! selected indices of a [`Solution`] are the variables set to one.
//!
//! The local search minimizes. To maximize a QBF, minimize its inverse
//! `-f(x)` built with [`Qbf::inverse`].
//!
//! # Delta costs
//!
//! With `S` the current selection, the contribution of index `i` is
//!
//! ```text
//! c(i, S) = A[i][i] + Σ_{j ∈ S, j ≠ i} (A[i][j] + A[j][i])
//! ```
//!
//! Insertion of `i ∉ S` changes the cost by `c(i, S)`, removal of `i ∈ S`
//! by `-c(i, S)`. An exchange that adds `i` and drops `o` additionally
//! discounts the `i`/`o` cross terms, since `o` leaves as `i` enters.

use thiserror::Error;

use super::types::Objective;
use crate::solution::Solution;

/// Errors raised while building a [`Qbf`].
#[derive(Debug, Error, PartialEq)]
pub enum QbfError {
    #[error("coefficient matrix row {row} has {len} entries, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("coefficient A[{row}][{col}] is not finite")]
    NonFinite { row: usize, col: usize },
}

/// A quadratic binary function with a dense coefficient matrix.
///
/// # Examples
///
/// ```
/// use u_grasp::{Objective, Qbf, Solution};
///
/// let qbf = Qbf::new(vec![
///     vec![-1.0, 2.0],
///     vec![0.0, -3.0],
/// ]).unwrap();
///
/// let sol = Solution::from_elements([0, 1]);
/// assert_eq!(qbf.evaluate(&sol), -2.0);
/// assert_eq!(qbf.inverse().evaluate(&sol), 2.0);
/// ```
#[derive(Debug, Clone)]
pub struct Qbf {
    size: usize,
    /// Row-major `size × size` coefficients.
    coefficients: Vec<f64>,
    /// `1.0` for `f`, `-1.0` for the inverse `-f`.
    sign: f64,
}

impl Qbf {
    /// Builds a QBF from a square coefficient matrix.
    ///
    /// # Errors
    ///
    /// Returns [`QbfError`] if the matrix is not square or contains a
    /// non-finite coefficient.
    pub fn new(matrix: Vec<Vec<f64>>) -> Result<Self, QbfError> {
        let size = matrix.len();
        let mut coefficients = Vec::with_capacity(size * size);

        for (row, values) in matrix.into_iter().enumerate() {
            if values.len() != size {
                return Err(QbfError::NotSquare {
                    row,
                    len: values.len(),
                    expected: size,
                });
            }
            if let Some(col) = values.iter().position(|v| !v.is_finite()) {
                return Err(QbfError::NonFinite { row, col });
            }
            coefficients.extend(values);
        }

        Ok(Self {
            size,
            coefficients,
            sign: 1.0,
        })
    }

    /// Returns the inverse function `-f`, turning maximization of `f` into
    /// minimization.
    pub fn inverse(mut self) -> Self {
        self.sign = -self.sign;
        self
    }

    /// Returns `true` if this is the inverse form.
    pub fn is_inverse(&self) -> bool {
        self.sign < 0.0
    }

    /// Coefficient `A[i][j]` of the underlying (non-inverted) function.
    pub fn coefficient(&self, i: usize, j: usize) -> f64 {
        self.coefficients[i * self.size + j]
    }

    fn cross(&self, i: usize, j: usize) -> f64 {
        self.coefficient(i, j) + self.coefficient(j, i)
    }

    /// Contribution of `i` against the current selection, without sign.
    fn contribution(&self, i: usize, solution: &Solution) -> f64 {
        let mut sum = self.coefficient(i, i);
        for j in solution.iter().filter(|&j| j != i) {
            sum += self.cross(i, j);
        }
        sum
    }
}

impl Objective for Qbf {
    fn domain_size(&self) -> usize {
        self.size
    }

    fn evaluate(&self, solution: &Solution) -> f64 {
        let mut sum = 0.0;
        for i in solution.iter() {
            for j in solution.iter() {
                sum += self.coefficient(i, j);
            }
        }
        self.sign * sum
    }

    fn insertion_cost(&self, candidate: usize, solution: &Solution) -> f64 {
        if solution.contains(candidate) {
            return 0.0;
        }
        self.sign * self.contribution(candidate, solution)
    }

    fn removal_cost(&self, element: usize, solution: &Solution) -> f64 {
        if !solution.contains(element) {
            return 0.0;
        }
        -self.sign * self.contribution(element, solution)
    }

    fn exchange_cost(&self, candidate: usize, element: usize, solution: &Solution) -> f64 {
        if candidate == element {
            return 0.0;
        }
        if solution.contains(candidate) {
            return self.removal_cost(element, solution);
        }
        if !solution.contains(element) {
            return self.insertion_cost(candidate, solution);
        }

        let delta = self.contribution(candidate, solution)
            - self.contribution(element, solution)
            - self.cross(candidate, element);
        self.sign * delta
    }
}
