//! Test utilities for Eden development.
//!
//! Provides deterministic [`UniformSource`] implementations for driving
//! stochastic code down known paths, lattice [`fixtures`], and a naive
//! frontier rescan to check incremental bookkeeping against.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{filled, single_site, walled_pocket};

use eden_core::{CellIndex, SiteState, UniformSource};
use eden_space::Lattice;

/// Source that always answers `k % n`.
///
/// Counts how many draws were made so tests can assert that an
/// operation did or did not consume randomness.
#[derive(Clone, Debug)]
pub struct FixedSource {
    k: usize,
    draws: usize,
}

impl FixedSource {
    pub fn new(k: usize) -> Self {
        Self { k, draws: 0 }
    }

    /// Number of draws made so far.
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl UniformSource for FixedSource {
    fn uniform_index(&mut self, n: usize) -> usize {
        self.draws += 1;
        self.k % n
    }
}

/// Source that replays a fixed script of answers, each reduced `% n`.
///
/// A one-shot script panics when it runs out, which flags an
/// unexpected extra draw. A cycling script wraps around forever.
#[derive(Clone, Debug)]
pub struct ScriptedSource {
    script: Vec<usize>,
    pos: usize,
    cycle: bool,
}

impl ScriptedSource {
    pub fn new(script: impl IntoIterator<Item = usize>) -> Self {
        Self {
            script: script.into_iter().collect(),
            pos: 0,
            cycle: false,
        }
    }

    pub fn cycle(script: impl IntoIterator<Item = usize>) -> Self {
        let script: Vec<usize> = script.into_iter().collect();
        assert!(!script.is_empty(), "cycling script must not be empty");
        Self {
            script,
            pos: 0,
            cycle: true,
        }
    }

    /// Number of draws made so far.
    pub fn draws(&self) -> usize {
        self.pos
    }
}

impl UniformSource for ScriptedSource {
    fn uniform_index(&mut self, n: usize) -> usize {
        let i = if self.cycle {
            self.pos % self.script.len()
        } else {
            self.pos
        };
        let value = *self
            .script
            .get(i)
            .unwrap_or_else(|| panic!("script exhausted after {} draws", self.pos));
        self.pos += 1;
        value % n
    }
}

/// Every colony site with an `Empty` face neighbour, by brute force,
/// in ascending index order.
pub fn expected_frontier(lattice: &Lattice) -> Vec<CellIndex> {
    let cube = lattice.cube();
    (0..lattice.cell_count())
        .filter(|&i| lattice.get_index(i).is_colony())
        .filter(|&i| {
            cube.neighbour_indices(i)
                .into_iter()
                .flatten()
                .any(|n| lattice.get_index(n) == SiteState::Empty)
        })
        .collect()
}
