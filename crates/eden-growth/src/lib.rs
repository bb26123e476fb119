//! Frontier tracking and the stochastic growth engine.
//!
//! The growth model repeatedly picks a random site on the colony
//! frontier and extends that site's colony into one of its empty face
//! neighbours. This crate provides every piece of that loop:
//!
//! - [`SeededSource`]: the ChaCha8-backed random source threaded
//!   through a whole run
//! - [`init`]: seed-sphere placement and obstacle carving
//! - [`FrontierSet`]: the set of sites eligible to grow, kept exact by
//!   incremental updates
//! - [`GrowthEngine`]: the step state machine and run loop
//! - [`GrowthConfig`] / [`Simulation`]: validated configuration and an
//!   owning wrapper that ties lattice and random source together
//!
//! # Quick start
//!
//! ```
//! use eden_growth::{run_growth, init};
//!
//! let (mut lattice, mut rng) = init::initialize(9, 1, 42).unwrap();
//! let stats = run_growth(&mut lattice, 20, &mut rng).unwrap();
//! assert_eq!(stats.steps_completed, 20);
//! assert_eq!(lattice.occupied().len(), 7 + 20);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod engine;
pub mod frontier;
pub mod init;
pub mod metrics;
pub mod observer;
pub mod rng;
pub mod simulation;

pub use config::{GrowthConfig, ObstacleSphere};
pub use engine::{run_growth, EngineState, Growth, GrowthEngine, StepOutcome};
pub use frontier::{FrontierDelta, FrontierSet};
pub use metrics::RunStats;
pub use observer::{Checkpoint, GrowthObserver, NoopObserver};
pub use rng::SeededSource;
pub use simulation::Simulation;
