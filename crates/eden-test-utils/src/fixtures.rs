//! Hand-built lattices for scenario tests.

use eden_core::{Coord, SiteState};
use eden_space::Lattice;

/// A lattice of side `side` with every site set to `state`.
pub fn filled(side: u32, state: SiteState) -> Lattice {
    let count = (side as usize).pow(3);
    Lattice::from_sites(side, vec![state; count]).expect("valid fixture side")
}

/// An empty lattice with one site set to `state`.
pub fn single_site(side: u32, coord: Coord, state: SiteState) -> Lattice {
    let mut lattice = Lattice::new(side).expect("valid fixture side");
    lattice.set(&coord, state).expect("fixture coord in range");
    lattice
}

/// A saturated lattice whose only `Empty` site is the centre, sealed
/// off by `Obstacle` on all six faces. Every other site is `TypeA`.
///
/// No colony site touches empty space, so the frontier is empty.
pub fn walled_pocket(side: u32) -> Lattice {
    assert!(side >= 3, "pocket needs room for its walls");
    let mut lattice = filled(side, SiteState::TypeA);
    let c = (side / 2) as i32;
    let centre = [c, c, c];
    lattice.set(&centre, SiteState::Empty).expect("centre in range");
    for wall in lattice.neighbours6(&centre).into_iter().flatten() {
        lattice.set(&wall, SiteState::Obstacle).expect("wall in range");
    }
    lattice
}
