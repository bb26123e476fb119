//! Error types for lattice construction and site access.

use eden_core::{ConfigError, Coord};
use std::fmt;

/// Errors arising from lattice construction or coordinate access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpaceError {
    /// Attempted to construct a lattice with zero cells.
    EmptySpace,
    /// The side length does not fit the `i32` coordinate type.
    DimensionTooLarge {
        /// The configured side length.
        value: u32,
        /// Largest accepted side length.
        max: u32,
    },
    /// `side³` does not fit in `usize` or exceeds the cell limit.
    CellCountOverflow {
        /// The configured side length.
        side: u32,
    },
    /// The site buffer could not be allocated.
    AllocationFailed {
        /// The configured side length.
        side: u32,
        /// Number of sites requested.
        cells: usize,
    },
    /// A coordinate is outside the bounds of the lattice.
    CoordOutOfBounds {
        /// The offending coordinate.
        coord: Coord,
        /// Lattice side length.
        side: u32,
    },
    /// A site buffer does not have `side³` entries.
    SizeMismatch {
        /// Expected number of sites.
        expected: usize,
        /// Number of sites supplied.
        actual: usize,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySpace => write!(f, "lattice must have at least one cell"),
            Self::DimensionTooLarge { value, max } => {
                write!(f, "side length {value} exceeds maximum {max}")
            }
            Self::CellCountOverflow { side } => {
                write!(f, "lattice of side {side} has too many cells")
            }
            Self::AllocationFailed { side, cells } => {
                write!(f, "cannot allocate {cells} sites for lattice of side {side}")
            }
            Self::CoordOutOfBounds { coord, side } => {
                write!(f, "coordinate {coord:?} out of bounds: each axis in [0, {side})")
            }
            Self::SizeMismatch { expected, actual } => {
                write!(f, "expected {expected} sites, got {actual}")
            }
        }
    }
}

impl std::error::Error for SpaceError {}

impl SpaceError {
    /// Express a construction failure as a configuration error.
    ///
    /// Returns `None` for access errors, which are not configuration
    /// problems.
    pub fn as_config_error(&self) -> Option<ConfigError> {
        match *self {
            Self::EmptySpace => Some(ConfigError::EmptyLattice),
            Self::DimensionTooLarge { value, .. } => Some(ConfigError::LatticeTooLarge {
                side: u64::from(value),
            }),
            Self::CellCountOverflow { side } | Self::AllocationFailed { side, .. } => {
                Some(ConfigError::LatticeTooLarge {
                    side: u64::from(side),
                })
            }
            Self::CoordOutOfBounds { .. } | Self::SizeMismatch { .. } => None,
        }
    }
}
