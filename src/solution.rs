//! Solution container for subset-selection problems.

/// An ordered, duplicate-free set of selected domain indices with a cached
/// objective cost.
///
/// Elements keep the order in which they were added; removal is by value.
/// The `cost` field is a cache: it is only as fresh as the last call to
/// [`Objective::evaluate`](crate::objective::Objective::evaluate) that wrote it.
///
/// # Examples
///
/// ```
/// use u_grasp::Solution;
///
/// let mut sol = Solution::empty();
/// sol.push(7);
/// sol.push(3);
/// assert!(sol.contains(3));
/// assert_eq!(sol.sorted(), vec![3, 7]);
/// assert!(sol.remove(7));
/// assert_eq!(sol.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Solution {
    elements: Vec<usize>,
    /// Cached objective value of this solution.
    pub cost: f64,
}

impl Solution {
    /// Creates an empty solution.
    ///
    /// The cost is `0.0`: with every binary variable at zero a quadratic
    /// binary function evaluates to zero.
    pub fn empty() -> Self {
        Self {
            elements: Vec::new(),
            cost: 0.0,
        }
    }

    /// Builds a solution from indices, dropping repeated values.
    ///
    /// The cost is left at `0.0` and must be evaluated by the caller.
    pub fn from_elements<I: IntoIterator<Item = usize>>(elements: I) -> Self {
        let mut sol = Self::empty();
        for e in elements {
            if !sol.contains(e) {
                sol.elements.push(e);
            }
        }
        sol
    }

    /// Returns `true` if `element` is selected.
    pub fn contains(&self, element: usize) -> bool {
        self.elements.contains(&element)
    }

    /// Appends an element that is not yet selected.
    pub fn push(&mut self, element: usize) {
        debug_assert!(
            !self.contains(element),
            "element {element} is already in the solution"
        );
        self.elements.push(element);
    }

    /// Removes `element` by value. Returns `false` if it was not selected.
    pub fn remove(&mut self, element: usize) -> bool {
        match self.elements.iter().position(|&e| e == element) {
            Some(pos) => {
                self.elements.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Number of selected indices.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Element at insertion-order position `index`.
    pub fn get(&self, index: usize) -> Option<usize> {
        self.elements.get(index).copied()
    }

    /// Selected indices in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.elements.iter().copied()
    }

    /// Selected indices as a slice, in insertion order.
    pub fn as_slice(&self) -> &[usize] {
        &self.elements
    }

    /// Selected indices in ascending order.
    pub fn sorted(&self) -> Vec<usize> {
        let mut sorted = self.elements.clone();
        sorted.sort_unstable();
        sorted
    }

    /// Number of selected pairs `(a, a + 1)`.
    pub fn adjacency_violations(&self) -> usize {
        self.sorted().windows(2).filter(|w| w[0] + 1 == w[1]).count()
    }

    /// Returns `true` if no two selected indices are consecutive integers.
    pub fn is_feasible(&self) -> bool {
        self.adjacency_violations() == 0
    }
}

impl<'a> IntoIterator for &'a Solution {
    type Item = usize;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, usize>>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter().copied()
    }
}
