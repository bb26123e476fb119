//! The growth frontier: every colony site with at least one empty face
//! neighbour.
//!
//! # Invariants
//!
//! Between steps the set is exact:
//! - no duplicates (it is a set),
//! - no stale members: every member is a colony site with an `Empty`
//!   face neighbour,
//! - completeness: every such site is a member.
//!
//! [`FrontierSet::discover`] establishes these with one full scan.
//! [`FrontierSet::update`] preserves them after a single growth event
//! by touching only the grown cell and its six neighbours.

use eden_core::{CellIndex, UniformSource};
use eden_space::Lattice;
use indexmap::IndexSet;
use smallvec::SmallVec;

/// Change made to a [`FrontierSet`] by one [`update`](FrontierSet::update).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrontierDelta {
    /// Former members that lost their last empty neighbour, in
    /// face-offset order around the grown cell.
    pub removed: SmallVec<[CellIndex; 6]>,
    /// Whether the grown cell joined the frontier.
    pub inserted: bool,
}

impl FrontierDelta {
    /// Net change in frontier size.
    pub fn net_change(&self) -> isize {
        isize::from(self.inserted) - self.removed.len() as isize
    }
}

/// The set of sites eligible to grow.
///
/// Backed by an insertion-ordered hash set, which gives O(1) membership,
/// O(1) removal (by swapping the last member into the hole) and O(1)
/// positional access for uniform random choice. The order of members is
/// a pure function of the sequence of updates, so runs are reproducible.
#[derive(Clone, Debug, Default)]
pub struct FrontierSet {
    members: IndexSet<CellIndex>,
}

impl FrontierSet {
    /// Build the frontier of `lattice` with a full scan.
    ///
    /// Visits sites in canonical order and keeps every colony site with
    /// an `Empty` face neighbour. O(cells × 6).
    pub fn discover(lattice: &Lattice) -> Self {
        let members = (0..lattice.cell_count())
            .filter(|&i| lattice.is_growable(i))
            .collect();
        Self { members }
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the frontier is empty, i.e. growth is stuck.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Whether `index` is a member.
    pub fn contains(&self, index: CellIndex) -> bool {
        self.members.contains(&index)
    }

    /// Member at `position` in the current internal order.
    pub fn get(&self, position: usize) -> Option<CellIndex> {
        self.members.get_index(position).copied()
    }

    /// Iterate members in the current internal order.
    pub fn iter(&self) -> impl Iterator<Item = CellIndex> + '_ {
        self.members.iter().copied()
    }

    /// Members in ascending index order.
    pub fn sorted(&self) -> Vec<CellIndex> {
        let mut v: Vec<_> = self.iter().collect();
        v.sort_unstable();
        v
    }

    /// Draw a member uniformly at random. Returns `None` without drawing
    /// when the frontier is empty.
    pub fn choose<R: UniformSource + ?Sized>(&self, rng: &mut R) -> Option<CellIndex> {
        if self.is_empty() {
            return None;
        }
        self.get(rng.uniform_index(self.len()))
    }

    /// Restore the invariants after `grown` changed from `Empty` to a
    /// colony type by growth from `parent`.
    ///
    /// The only state change is `grown` losing its `Empty` status, so
    /// the only sites whose eligibility can change are `grown` itself
    /// and its occupied face neighbours (which include `parent`):
    ///
    /// 1. every member neighbour of `grown` with no `Empty` neighbour
    ///    left is removed;
    /// 2. `grown` is inserted if it has an `Empty` neighbour.
    ///
    /// Non-member neighbours cannot become eligible: they lost an empty
    /// neighbour and gained none.
    pub fn update(
        &mut self,
        lattice: &Lattice,
        parent: CellIndex,
        grown: CellIndex,
    ) -> FrontierDelta {
        let neighbours = lattice.cube().neighbour_indices(grown);
        debug_assert!(
            neighbours.contains(&Some(parent)),
            "parent {parent} is not a face neighbour of {grown}"
        );
        debug_assert!(!self.contains(grown), "grown cell {grown} already a member");

        let mut delta = FrontierDelta::default();
        for n in neighbours.into_iter().flatten() {
            if self.members.contains(&n) && !lattice.has_empty_neighbour(n) {
                self.members.swap_remove(&n);
                delta.removed.push(n);
            }
        }
        if lattice.is_growable(grown) {
            delta.inserted = self.members.insert(grown);
        }
        delta
    }

    /// Compare against a fresh [`discover`](Self::discover) of `lattice`.
    ///
    /// O(cells); intended for tests and debug assertions.
    pub fn matches_rescan(&self, lattice: &Lattice) -> bool {
        let expected = Self::discover(lattice);
        expected.len() == self.len() && expected.iter().all(|i| self.contains(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::init;
    use eden_core::SiteState;
    use eden_test_utils::{expected_frontier, FixedSource};

    fn idx(lattice: &Lattice, coord: [i32; 3]) -> CellIndex {
        lattice.cube().index_of(&coord).unwrap()
    }

    #[test]
    fn discover_radius_one_seed() {
        let (lattice, _) = init::initialize(7, 1, 9).unwrap();
        let frontier = FrontierSet::discover(&lattice);
        // Centre is enclosed; the six face cells each touch empty space.
        assert_eq!(frontier.len(), 6);
        assert!(!frontier.contains(idx(&lattice, [3, 3, 3])));
        assert!(frontier.contains(idx(&lattice, [2, 3, 3])));
        assert_eq!(frontier.sorted(), expected_frontier(&lattice));
    }

    #[test]
    fn discover_empty_lattice() {
        let lattice = Lattice::new(4).unwrap();
        assert!(FrontierSet::discover(&lattice).is_empty());
    }

    #[test]
    fn obstacles_never_join() {
        let mut lattice = Lattice::new(3).unwrap();
        lattice.set(&[1, 1, 1], SiteState::Obstacle).unwrap();
        assert!(FrontierSet::discover(&lattice).is_empty());
    }

    #[test]
    fn choose_on_empty_does_not_draw() {
        let frontier = FrontierSet::default();
        let mut src = FixedSource::new(0);
        assert_eq!(frontier.choose(&mut src), None);
        assert_eq!(src.draws(), 0);
    }

    #[test]
    fn update_inserts_grown_and_keeps_parent() {
        let mut lattice = Lattice::new(5).unwrap();
        lattice.set(&[2, 2, 2], SiteState::TypeA).unwrap();
        let mut frontier = FrontierSet::discover(&lattice);
        let p = idx(&lattice, [2, 2, 2]);
        let g = idx(&lattice, [3, 2, 2]);
        lattice.set_index(g, SiteState::TypeA);
        let delta = frontier.update(&lattice, p, g);
        assert!(delta.inserted);
        assert!(delta.removed.is_empty());
        assert_eq!(delta.net_change(), 1);
        assert_eq!(frontier.sorted(), vec![p, g]);
    }

    #[test]
    fn update_removes_every_saturated_neighbour() {
        // Two occupied cells each missing only the shared empty cell g.
        let mut lattice = Lattice::new(3).unwrap();
        for i in 0..lattice.cell_count() {
            lattice.set_index(i, SiteState::TypeB);
        }
        let g = idx(&lattice, [1, 1, 1]);
        lattice.set_index(g, SiteState::Empty);
        let mut frontier = FrontierSet::discover(&lattice);
        assert_eq!(frontier.len(), 6);

        let p = idx(&lattice, [1, 1, 0]);
        lattice.set_index(g, SiteState::TypeB);
        let delta = frontier.update(&lattice, p, g);

        // All six face neighbours lost their only empty neighbour, not
        // just the parent.
        assert_eq!(delta.removed.len(), 6);
        assert!(!delta.inserted);
        assert_eq!(delta.net_change(), -6);
        assert!(frontier.is_empty());
        assert!(frontier.matches_rescan(&lattice));
    }

    #[test]
    fn update_tracks_rescan_through_a_walk() {
        let (mut lattice, _) = init::initialize(5, 1, 3).unwrap();
        let mut frontier = FrontierSet::discover(&lattice);
        let mut src = FixedSource::new(0);
        for _ in 0..40 {
            let Some(p) = frontier.choose(&mut src) else {
                break;
            };
            let empties = lattice.empty_neighbours(p);
            let g = empties[0];
            let kind = lattice.get_index(p);
            lattice.set_index(g, kind);
            frontier.update(&lattice, p, g);
            assert_eq!(frontier.sorted(), expected_frontier(&lattice));
        }
    }
}
