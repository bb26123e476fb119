//! Site-state storage on a cubic lattice.

use std::fmt;

use crate::cube6::Cube6;
use crate::error::SpaceError;
use eden_core::{CellIndex, Coord, SiteState};
use smallvec::SmallVec;

/// A cube of [`SiteState`]s.
///
/// Owns one state per cell of its [`Cube6`], stored x-fastest. Reads of
/// coordinates outside the cube return [`SiteState::Obstacle`], so
/// neighbour scans near the edge never see an empty off-lattice cell.
///
/// # Examples
///
/// ```
/// use eden_core::SiteState;
/// use eden_space::Lattice;
///
/// let mut lattice = Lattice::new(3).unwrap();
/// lattice.set(&[1, 1, 1], SiteState::TypeA).unwrap();
/// assert_eq!(lattice.get(&[1, 1, 1]), SiteState::TypeA);
/// assert_eq!(lattice.get(&[3, 0, 0]), SiteState::Obstacle);
/// assert_eq!(lattice.count(SiteState::Empty), 26);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Lattice {
    cube: Cube6,
    sites: Vec<SiteState>,
}

impl Lattice {
    /// Create an all-empty lattice of side length `side`.
    ///
    /// Returns `Err(SpaceError::AllocationFailed)` if the site buffer
    /// cannot be reserved.
    pub fn new(side: u32) -> Result<Self, SpaceError> {
        let cube = Cube6::new(side)?;
        let cells = cube.cell_count();
        let mut sites = Vec::new();
        sites
            .try_reserve_exact(cells)
            .map_err(|_| SpaceError::AllocationFailed { side, cells })?;
        sites.resize(cells, SiteState::Empty);
        Ok(Self { cube, sites })
    }

    /// Wrap an existing site buffer, which must hold exactly `side³`
    /// states in canonical order.
    pub fn from_sites(side: u32, sites: Vec<SiteState>) -> Result<Self, SpaceError> {
        let cube = Cube6::new(side)?;
        if sites.len() != cube.cell_count() {
            return Err(SpaceError::SizeMismatch {
                expected: cube.cell_count(),
                actual: sites.len(),
            });
        }
        Ok(Self { cube, sites })
    }

    /// The underlying geometry.
    pub fn cube(&self) -> &Cube6 {
        &self.cube
    }

    /// Side length.
    pub fn side(&self) -> u32 {
        self.cube.side()
    }

    /// Total number of cells, `side³`.
    pub fn cell_count(&self) -> usize {
        self.sites.len()
    }

    /// State at `coord`. Off-lattice coordinates read as `Obstacle`.
    pub fn get(&self, coord: &Coord) -> SiteState {
        self.cube
            .index_of(coord)
            .map_or(SiteState::Obstacle, |i| self.sites[i])
    }

    /// State at a flat index. Out-of-range indices read as `Obstacle`.
    pub fn get_index(&self, index: CellIndex) -> SiteState {
        self.sites.get(index).copied().unwrap_or(SiteState::Obstacle)
    }

    /// Overwrite the state at `coord`.
    pub fn set(&mut self, coord: &Coord, state: SiteState) -> Result<(), SpaceError> {
        let index = self
            .cube
            .index_of(coord)
            .ok_or(SpaceError::CoordOutOfBounds {
                coord: *coord,
                side: self.side(),
            })?;
        self.sites[index] = state;
        Ok(())
    }

    /// Overwrite the state at a flat index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= cell_count()`.
    pub fn set_index(&mut self, index: CellIndex, state: SiteState) {
        self.sites[index] = state;
    }

    /// The six face neighbours of `coord`; `None` marks an off-lattice
    /// neighbour.
    pub fn neighbours6(&self, coord: &Coord) -> [Option<Coord>; 6] {
        self.cube.neighbours6(coord)
    }

    /// Whether any in-range face neighbour of `index` is `Empty`.
    pub fn has_empty_neighbour(&self, index: CellIndex) -> bool {
        self.cube
            .neighbour_indices(index)
            .into_iter()
            .flatten()
            .any(|n| self.sites[n].is_empty())
    }

    /// The `Empty` face neighbours of `index`, in face-offset order.
    pub fn empty_neighbours(&self, index: CellIndex) -> SmallVec<[CellIndex; 6]> {
        self.cube
            .neighbour_indices(index)
            .into_iter()
            .flatten()
            .filter(|&n| self.sites[n].is_empty())
            .collect()
    }

    /// Growth eligibility: the site belongs to a colony and has at least
    /// one `Empty` face neighbour.
    pub fn is_growable(&self, index: CellIndex) -> bool {
        self.get_index(index).is_colony() && self.has_empty_neighbour(index)
    }

    /// All site states in canonical order.
    pub fn sites(&self) -> &[SiteState] {
        &self.sites
    }

    /// Every coordinate in canonical order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cube.coords()
    }

    /// Iterate `(coord, state)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, SiteState)> + '_ {
        self.cube.coords().zip(self.sites.iter().copied())
    }

    /// Indices of every colony site (both types), in canonical order.
    pub fn occupied(&self) -> Vec<CellIndex> {
        self.sites
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_colony())
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of sites in `state`.
    pub fn count(&self, state: SiteState) -> usize {
        self.sites.iter().filter(|&&s| s == state).count()
    }

    /// A new lattice of the same size with `f` applied to every site.
    pub fn map(&self, mut f: impl FnMut(SiteState) -> SiteState) -> Lattice {
        Lattice {
            cube: self.cube,
            sites: self.sites.iter().map(|&s| f(s)).collect(),
        }
    }
}

impl fmt::Debug for Lattice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lattice")
            .field("side", &self.side())
            .field("empty", &self.count(SiteState::Empty))
            .field("type_a", &self.count(SiteState::TypeA))
            .field("type_b", &self.count(SiteState::TypeB))
            .field("obstacle", &self.count(SiteState::Obstacle))
            .finish()
    }
}

/// Prints each z-slice as rows of site codes, y rows by x columns,
/// slices separated by a blank line.
impl fmt::Display for Lattice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.side() as usize;
        for (z, slice) in self.sites.chunks(s * s).enumerate() {
            if z > 0 {
                writeln!(f)?;
            }
            for row in slice.chunks(s) {
                let mut first = true;
                for site in row {
                    if !first {
                        write!(f, " ")?;
                    }
                    write!(f, "{site}")?;
                    first = false;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
