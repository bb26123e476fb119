//! Per-type projections of a lattice.
//!
//! Each function returns a new lattice of the same size in which the
//! selected sites keep their state and every other site is `Empty`.
//! The input is never modified.

use eden_core::SiteState;
use eden_space::Lattice;

/// Keep only sites in `state`.
///
/// ```
/// use eden_core::SiteState;
/// use eden_obs::filter_type;
/// use eden_space::Lattice;
///
/// let mut lattice = Lattice::new(2).unwrap();
/// lattice.set(&[0, 0, 0], SiteState::TypeA).unwrap();
/// lattice.set(&[1, 0, 0], SiteState::TypeB).unwrap();
///
/// let a = filter_type(&lattice, SiteState::TypeA);
/// assert_eq!(a.get(&[0, 0, 0]), SiteState::TypeA);
/// assert_eq!(a.get(&[1, 0, 0]), SiteState::Empty);
/// ```
pub fn filter_type(lattice: &Lattice, state: SiteState) -> Lattice {
    lattice.map(|s| if s == state { s } else { SiteState::Empty })
}

/// Keep only obstacles.
pub fn filter_obstacles(lattice: &Lattice) -> Lattice {
    filter_type(lattice, SiteState::Obstacle)
}

/// Keep both colony types, dropping obstacles.
pub fn filter_colonies(lattice: &Lattice) -> Lattice {
    lattice.map(|s| if s.is_colony() { s } else { SiteState::Empty })
}
