//! Candidate pools: the active candidate list (CL) and the trash list.
//!
//! Every domain index is in exactly one of three places: the solution, the
//! CL, or the trash. Instead of three lists kept disjoint by hand, each
//! index carries one [`Slot`] tag in a flat vector, so every transition is a
//! single write and no index can ever sit in two places.

use crate::solution::Solution;

/// Where a domain index currently lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Unselected and eligible for insertion this round.
    Candidate,
    /// Unselected, removed by repair, withheld until a trash-admission round.
    Trashed,
    /// Part of the solution.
    Selected,
}

/// CL and trash bookkeeping for one local-search call.
///
/// # Examples
///
/// ```
/// use u_grasp::local_search::{CandidatePools, Slot};
/// use u_grasp::Solution;
///
/// let sol = Solution::from_elements([1, 3]);
/// let mut pools = CandidatePools::new(5, &sol);
/// assert_eq!(pools.active_list(), vec![0, 2, 4]);
///
/// pools.discard(3);
/// assert_eq!(pools.slot(3), Slot::Trashed);
/// assert_eq!(pools.trash().collect::<Vec<_>>(), vec![3]);
/// ```
#[derive(Debug, Clone)]
pub struct CandidatePools {
    slots: Vec<Slot>,
    candidate_count: usize,
    trash_count: usize,
}

impl CandidatePools {
    /// Builds the pools for `solution` over `0..domain_size`.
    ///
    /// Every index outside the solution is a candidate; the trash starts
    /// empty.
    pub fn new(domain_size: usize, solution: &Solution) -> Self {
        let mut slots = vec![Slot::Candidate; domain_size];
        for e in solution.iter() {
            debug_assert!(e < domain_size, "index {e} outside domain 0..{domain_size}");
            slots[e] = Slot::Selected;
        }
        let candidate_count = domain_size - solution.len();
        Self {
            slots,
            candidate_count,
            trash_count: 0,
        }
    }

    /// Materializes the active candidate list in ascending index order.
    pub fn active_list(&self) -> Vec<usize> {
        self.candidates().collect()
    }

    /// Refreshes the candidate list for the current solution.
    ///
    /// Every unselected, untrashed index stays viable, so there is nothing
    /// to filter.
    pub fn update_candidates(&mut self, _solution: &Solution) {}

    /// Number of domain indices tracked.
    pub fn domain_size(&self) -> usize {
        self.slots.len()
    }

    /// Pool that `index` currently belongs to.
    pub fn slot(&self, index: usize) -> Slot {
        self.slots[index]
    }

    /// Number of CL members.
    pub fn candidate_count(&self) -> usize {
        self.candidate_count
    }

    /// Number of trashed indices.
    pub fn trash_count(&self) -> usize {
        self.trash_count
    }

    /// CL members in ascending index order.
    pub fn candidates(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices_in(Slot::Candidate)
    }

    /// Trash members in ascending index order.
    pub fn trash(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices_in(Slot::Trashed)
    }

    fn indices_in(&self, wanted: Slot) -> impl Iterator<Item = usize> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(move |&(_, &s)| s == wanted)
            .map(|(i, _)| i)
    }

    /// Moves a candidate or trashed index into the solution.
    pub fn select(&mut self, index: usize) {
        debug_assert_ne!(
            self.slots[index],
            Slot::Selected,
            "index {index} is already selected"
        );
        match self.slots[index] {
            Slot::Candidate => self.candidate_count -= 1,
            Slot::Trashed => self.trash_count -= 1,
            Slot::Selected => {}
        }
        self.slots[index] = Slot::Selected;
    }

    /// Returns a selected index to the candidate list.
    pub fn release(&mut self, index: usize) {
        debug_assert_eq!(self.slots[index], Slot::Selected);
        self.slots[index] = Slot::Candidate;
        self.candidate_count += 1;
    }

    /// Sends a selected index to the trash.
    pub fn discard(&mut self, index: usize) {
        debug_assert_eq!(self.slots[index], Slot::Selected);
        self.slots[index] = Slot::Trashed;
        self.trash_count += 1;
    }

    /// Returns `true` if the slot tags agree with `solution` membership.
    pub fn is_consistent_with(&self, solution: &Solution) -> bool {
        let selected = self.slots.iter().filter(|&&s| s == Slot::Selected).count();
        selected == solution.len()
            && solution
                .iter()
                .all(|e| self.slots.get(e) == Some(&Slot::Selected))
            && selected + self.candidate_count + self.trash_count == self.slots.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_splits_domain() {
        let sol = Solution::from_elements([0, 4]);
        let pools = CandidatePools::new(6, &sol);
        assert_eq!(pools.active_list(), vec![1, 2, 3, 5]);
        assert_eq!(pools.candidate_count(), 4);
        assert_eq!(pools.trash_count(), 0);
        assert_eq!(pools.domain_size(), 6);
        assert!(pools.is_consistent_with(&sol));
    }

    #[test]
    fn test_transitions_keep_counts() {
        let mut sol = Solution::from_elements([2]);
        let mut pools = CandidatePools::new(4, &sol);

        sol.push(0);
        pools.select(0);
        assert_eq!(pools.slot(0), Slot::Selected);
        assert_eq!(pools.candidate_count(), 2);

        sol.remove(2);
        pools.discard(2);
        assert_eq!(pools.trash().collect::<Vec<_>>(), vec![2]);
        assert!(pools.is_consistent_with(&sol));

        sol.push(2);
        pools.select(2);
        assert_eq!(pools.trash_count(), 0);
        assert!(pools.is_consistent_with(&sol));

        sol.remove(0);
        pools.release(0);
        assert_eq!(pools.active_list(), vec![0, 1, 3]);
        assert!(pools.is_consistent_with(&sol));
    }

    #[test]
    fn test_update_candidates_is_noop() {
        let sol = Solution::from_elements([1]);
        let mut pools = CandidatePools::new(3, &sol);
        let before = pools.active_list();
        pools.update_candidates(&sol);
        assert_eq!(pools.active_list(), before);
    }

    #[test]
    fn test_empty_domain() {
        let pools = CandidatePools::new(0, &Solution::empty());
        assert!(pools.active_list().is_empty());
        assert_eq!(pools.trash().count(), 0);
    }
}
