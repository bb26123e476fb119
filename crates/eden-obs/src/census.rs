//! Site counts per state.

use std::fmt;

use eden_core::SiteState;
use eden_space::Lattice;

/// How many sites of a lattice are in each state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ColonyCensus {
    /// Unoccupied sites.
    pub empty: usize,
    /// Colony A sites.
    pub type_a: usize,
    /// Colony B sites.
    pub type_b: usize,
    /// Obstacle sites.
    pub obstacle: usize,
}

impl ColonyCensus {
    /// Count every site of `lattice` in one pass.
    pub fn of(lattice: &Lattice) -> Self {
        let mut census = Self::default();
        for &s in lattice.sites() {
            match s {
                SiteState::Empty => census.empty += 1,
                SiteState::TypeA => census.type_a += 1,
                SiteState::TypeB => census.type_b += 1,
                SiteState::Obstacle => census.obstacle += 1,
            }
        }
        census
    }

    /// Sites held by either colony.
    pub fn colonies(&self) -> usize {
        self.type_a + self.type_b
    }

    /// Every site counted.
    pub fn total(&self) -> usize {
        self.empty + self.type_a + self.type_b + self.obstacle
    }

    /// Share of colony sites held by colony A, or `None` with no
    /// colony sites.
    pub fn fraction_a(&self) -> Option<f64> {
        let n = self.colonies();
        (n > 0).then(|| self.type_a as f64 / n as f64)
    }
}

impl fmt::Display for ColonyCensus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "A={} B={} empty={} obstacle={}",
            self.type_a, self.type_b, self.empty, self.obstacle
        )
    }
}
