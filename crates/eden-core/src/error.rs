//! Error types for the Eden growth model.
//!
//! Configuration problems surface as [`ConfigError`]; everything that can
//! end a growth run is a [`GrowthError`]. All variants are fatal to the
//! current run and none are retried.

use std::error::Error;
use std::fmt;

use crate::id::Coord;

/// Errors detected while validating a run configuration.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Lattice side length is zero.
    EmptyLattice,
    /// Lattice side length does not fit the coordinate type, or its
    /// cell count overflows `usize`.
    LatticeTooLarge {
        /// The configured side length.
        side: u64,
    },
    /// The seed sphere does not fit inside the lattice around its centre.
    SeedRadiusTooLarge {
        /// The configured radius.
        radius: u32,
        /// Largest radius that fits.
        max: u32,
    },
    /// The checkpoint interval is NaN, infinite, zero, or negative.
    InvalidCheckpointInterval {
        /// The invalid value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyLattice => write!(f, "lattice side length must be at least 1"),
            Self::LatticeTooLarge { side } => {
                write!(f, "lattice side length {side} is too large")
            }
            Self::SeedRadiusTooLarge { radius, max } => {
                write!(f, "seed radius {radius} exceeds lattice bounds (max {max})")
            }
            Self::InvalidCheckpointInterval { value } => {
                write!(
                    f,
                    "checkpoint interval must be finite and positive, got {value}"
                )
            }
        }
    }
}

impl Error for ConfigError {}

/// Errors that end a growth run.
#[derive(Clone, Debug, PartialEq)]
pub enum GrowthError {
    /// The run could not be set up.
    InvalidConfiguration(ConfigError),
    /// Growth reached the outer shell of the lattice while the
    /// fail-fast boundary policy was in effect. Nothing was written.
    BoundaryExceeded {
        /// The target site that touches the boundary.
        coord: Coord,
        /// Steps completed before the aborted step.
        steps_completed: u64,
    },
    /// The frontier emptied before the requested step count was reached.
    NoFrontier {
        /// Steps completed before the frontier ran out.
        steps_completed: u64,
    },
}

impl fmt::Display for GrowthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration(e) => write!(f, "invalid configuration: {e}"),
            Self::BoundaryExceeded {
                coord,
                steps_completed,
            } => write!(
                f,
                "growth into {coord:?} would leave the lattice (after {steps_completed} steps)"
            ),
            Self::NoFrontier { steps_completed } => {
                write!(f, "frontier exhausted after {steps_completed} steps")
            }
        }
    }
}

impl Error for GrowthError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidConfiguration(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for GrowthError {
    fn from(e: ConfigError) -> Self {
        Self::InvalidConfiguration(e)
    }
}
