//! Run configuration and validation.
//!
//! [`GrowthConfig`] is the input for constructing a
//! [`Simulation`](crate::Simulation). [`validate()`](GrowthConfig::validate)
//! checks every structural invariant up front so a run never starts
//! from a configuration that cannot work.

use std::fmt;

use eden_core::{ConfigError, Coord};
use eden_space::{BoundaryPolicy, Cube6};

use crate::init::{config_error, max_seed_radius};

// ── ObstacleSphere ─────────────────────────────────────────────────

/// A solid ball of `Obstacle` sites carved before growth starts.
///
/// The sphere may extend past the lattice; it is clipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ObstacleSphere {
    /// Centre of the sphere. May lie outside the lattice.
    pub center: Coord,
    /// Euclidean radius, inclusive.
    pub radius: u32,
}

// ── GrowthConfig ───────────────────────────────────────────────────

/// Everything needed to set up and run one growth simulation.
#[derive(Clone, PartialEq)]
pub struct GrowthConfig {
    /// Lattice side length. Default: 20.
    pub size: u32,
    /// Radius of the seed sphere at the lattice centre. Default: 3.
    pub seed_radius: u32,
    /// Seed for the random source. Default: 522130432.
    pub rng_seed: u64,
    /// Number of growth steps per [`run()`](crate::Simulation::run). Default: 100.
    pub steps: u64,
    /// Edge behaviour. Default: [`BoundaryPolicy::Obstacle`].
    pub boundary: BoundaryPolicy,
    /// Obstacles carved after seeding, in order. Default: none.
    pub obstacles: Vec<ObstacleSphere>,
    /// Simulated-time interval between checkpoints, or `None` for no
    /// checkpoints. Default: `None`.
    pub checkpoint_interval: Option<f64>,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            size: 20,
            seed_radius: 3,
            rng_seed: 522_130_432,
            steps: 100,
            boundary: BoundaryPolicy::Obstacle,
            obstacles: Vec::new(),
            checkpoint_interval: None,
        }
    }
}

impl GrowthConfig {
    /// Check structural invariants.
    ///
    /// # Errors
    ///
    /// - `EmptyLattice` if `size` is zero.
    /// - `LatticeTooLarge` if the cell count exceeds
    ///   [`Cube6::MAX_CELLS`].
    /// - `SeedRadiusTooLarge` if the seed sphere leaves the lattice.
    /// - `InvalidCheckpointInterval` if the interval is not finite and
    ///   positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Cube6::new(self.size).map_err(|e| config_error(e, self.size))?;

        let max = max_seed_radius(self.size);
        if self.seed_radius > max {
            return Err(ConfigError::SeedRadiusTooLarge {
                radius: self.seed_radius,
                max,
            });
        }

        if let Some(value) = self.checkpoint_interval {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidCheckpointInterval { value });
            }
        }

        Ok(())
    }
}

impl fmt::Debug for GrowthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrowthConfig")
            .field("size", &self.size)
            .field("seed_radius", &self.seed_radius)
            .field("rng_seed", &self.rng_seed)
            .field("steps", &self.steps)
            .field("boundary", &self.boundary)
            .field("obstacles", &self.obstacles.len())
            .field("checkpoint_interval", &self.checkpoint_interval)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = GrowthConfig::default();
        assert_eq!(config.size, 20);
        assert_eq!(config.seed_radius, 3);
        assert_eq!(config.rng_seed, 522_130_432);
        assert_eq!(config.steps, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_zero_size_fails() {
        let config = GrowthConfig {
            size: 0,
            seed_radius: 0,
            ..GrowthConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptyLattice));
    }

    #[test]
    fn validate_oversize_fails() {
        let config = GrowthConfig {
            size: u32::MAX,
            seed_radius: 0,
            ..GrowthConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::LatticeTooLarge { .. })
        ));
    }

    #[test]
    fn validate_rejects_side_over_cell_limit() {
        let config = GrowthConfig {
            size: 200_000,
            seed_radius: 0,
            ..GrowthConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::LatticeTooLarge { side: 200_000 })
        );
    }

    #[test]
    fn validate_seed_radius_fails() {
        let config = GrowthConfig {
            size: 6,
            seed_radius: 3,
            ..GrowthConfig::default()
        };
        // Centre is 3; the far side only has room for 2.
        assert_eq!(
            config.validate(),
            Err(ConfigError::SeedRadiusTooLarge { radius: 3, max: 2 })
        );
    }

    #[test]
    fn validate_radius_zero_on_unit_lattice() {
        let config = GrowthConfig {
            size: 1,
            seed_radius: 0,
            ..GrowthConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_checkpoint_interval() {
        for bad in [0.0, -0.5, f64::NAN, f64::NEG_INFINITY] {
            let config = GrowthConfig {
                checkpoint_interval: Some(bad),
                ..GrowthConfig::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::InvalidCheckpointInterval { .. })
            ));
        }
        let ok = GrowthConfig {
            checkpoint_interval: Some(0.25),
            ..GrowthConfig::default()
        };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn obstacles_outside_lattice_are_allowed() {
        let config = GrowthConfig {
            obstacles: vec![ObstacleSphere {
                center: [-5, 40, 3],
                radius: 2,
            }],
            ..GrowthConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn debug_summarises_obstacles() {
        let config = GrowthConfig::default();
        let s = format!("{config:?}");
        assert!(s.contains("obstacles: 0"));
        assert!(s.contains("size: 20"));
    }
}
