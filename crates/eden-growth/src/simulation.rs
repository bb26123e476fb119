//! Owning wrapper around a configured growth run.
//!
//! [`Simulation`] ties a lattice to the random source that seeded it,
//! so the whole history of a run is one reproducible stream. Repeated
//! calls to [`run()`](Simulation::run) continue the same trajectory, the
//! same simulated clock and the same checkpoint numbering.

use eden_core::{ConfigError, GrowthError};
use eden_space::Lattice;
use tracing::info;

use crate::config::GrowthConfig;
use crate::engine::GrowthEngine;
use crate::init;
use crate::metrics::RunStats;
use crate::observer::{GrowthObserver, NoopObserver};
use crate::rng::SeededSource;

/// A seeded lattice plus the random source and clock that continue it.
///
/// # Example
///
/// ```
/// use eden_growth::{GrowthConfig, Simulation};
///
/// let mut sim = Simulation::new(GrowthConfig {
///     size: 11,
///     seed_radius: 1,
///     steps: 50,
///     ..GrowthConfig::default()
/// })
/// .unwrap();
/// let stats = sim.run().unwrap();
/// assert_eq!(stats.steps_completed, 50);
/// assert_eq!(sim.lattice().occupied().len(), 7 + 50);
/// ```
pub struct Simulation {
    config: GrowthConfig,
    lattice: Lattice,
    rng: SeededSource,
    time: f64,
    steps: u64,
    checkpoints: u64,
    last_checkpoint: f64,
}

impl Simulation {
    /// Validate `config`, seed the lattice and carve its obstacles.
    ///
    /// Obstacles are carved after seeding and override seeded sites.
    ///
    /// # Errors
    ///
    /// Any [`ConfigError`] from [`GrowthConfig::validate()`].
    pub fn new(config: GrowthConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = SeededSource::new(config.rng_seed);
        let mut lattice = init::initialize_with(config.size, config.seed_radius, &mut rng)?;
        let seeded = lattice.occupied().len();
        let carved: usize = config
            .obstacles
            .iter()
            .map(|o| init::carve_obstacle(&mut lattice, o.center, o.radius))
            .sum();
        info!(
            size = config.size,
            seed_radius = config.seed_radius,
            rng_seed = config.rng_seed,
            seeded,
            obstacles = config.obstacles.len(),
            carved,
            "simulation initialized"
        );
        Ok(Self {
            config,
            lattice,
            rng,
            time: 0.0,
            steps: 0,
            checkpoints: 0,
            last_checkpoint: 0.0,
        })
    }

    /// Grow [`GrowthConfig::steps`] more sites.
    ///
    /// # Errors
    ///
    /// See [`GrowthEngine::step()`]. Growth done before the error is
    /// kept and counted.
    pub fn run(&mut self) -> Result<RunStats, GrowthError> {
        self.run_observed(&mut NoopObserver)
    }

    /// Like [`run()`](Self::run), reporting to `observer`.
    ///
    /// # Errors
    ///
    /// See [`GrowthEngine::step()`].
    pub fn run_observed<O: GrowthObserver + ?Sized>(
        &mut self,
        observer: &mut O,
    ) -> Result<RunStats, GrowthError> {
        let mut engine = GrowthEngine::new(&mut self.lattice, self.config.steps)
            .with_boundary(self.config.boundary)
            .with_start_time(self.time)
            .with_checkpoint_history(self.checkpoints, self.last_checkpoint);
        if let Some(interval) = self.config.checkpoint_interval {
            engine = engine.with_checkpoint_interval(interval)?;
        }
        let result = engine.run_observed(&mut self.rng, observer);
        let stats = engine.stats();
        self.time = stats.simulated_time;
        self.steps += stats.steps_completed;
        (self.checkpoints, self.last_checkpoint) = engine.checkpoint_history();
        result
    }

    /// The configuration this simulation was built from.
    pub fn config(&self) -> &GrowthConfig {
        &self.config
    }

    /// The current lattice.
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// Consume the simulation, keeping the lattice.
    pub fn into_lattice(self) -> Lattice {
        self.lattice
    }

    /// Simulated time across all runs.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Sites grown across all runs.
    pub fn steps_completed(&self) -> u64 {
        self.steps
    }

    /// Checkpoints fired across all runs.
    pub fn checkpoints(&self) -> u64 {
        self.checkpoints
    }
}
