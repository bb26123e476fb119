//! Eden: stochastic growth of two competing colonies on a 3D lattice.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Eden sub-crates. For most users, adding `eden` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use eden::prelude::*;
//!
//! let config = GrowthConfig {
//!     size: 15,
//!     seed_radius: 2,
//!     steps: 200,
//!     obstacles: vec![ObstacleSphere { center: [12, 7, 7], radius: 2 }],
//!     ..GrowthConfig::default()
//! };
//! let mut sim = Simulation::new(config).unwrap();
//! let stats = sim.run().unwrap();
//! assert_eq!(stats.steps_completed, 200);
//!
//! let census = ColonyCensus::of(sim.lattice());
//! assert_eq!(census.colonies(), 33 + 200);
//!
//! // Per-colony views for visualization.
//! let a = filter_type(sim.lattice(), SiteState::TypeA);
//! assert_eq!(a.count(SiteState::TypeA), census.type_a);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `eden-core` | Site states, coordinates, the random-source trait, errors |
//! | [`space`] | `eden-space` | Cube geometry, lattice storage, balls, boundary policy |
//! | [`growth`] | `eden-growth` | Initializer, frontier set, growth engine, simulation |
//! | [`obs`] | `eden-obs` | Extractors, census, slices, hashing, checkpoint recorder |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and errors (`eden-core`).
///
/// Contains [`types::SiteState`], the [`types::UniformSource`] trait and
/// the error enums shared by every layer.
pub use eden_core as types;

/// Lattice geometry and storage (`eden-space`).
///
/// [`space::Cube6`] answers index and neighbour questions,
/// [`space::Lattice`] holds the site states.
pub use eden_space as space;

/// Seeding, frontier tracking and growth (`eden-growth`).
///
/// [`growth::Simulation`] for configured runs, [`growth::GrowthEngine`]
/// for step-level control.
pub use eden_growth as growth;

/// Derived lattice views (`eden-obs`).
pub use eden_obs as obs;

/// Common imports for typical Eden usage.
///
/// ```rust
/// use eden::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use eden_core::{CellIndex, Coord, SiteState, UniformSource};

    // Errors
    pub use eden_core::{ConfigError, GrowthError};

    // Space
    pub use eden_space::{BoundaryPolicy, Lattice};

    // Growth
    pub use eden_growth::{
        run_growth, Checkpoint, GrowthConfig, GrowthEngine, GrowthObserver, ObstacleSphere,
        RunStats, SeededSource, Simulation, StepOutcome,
    };

    // Observation
    pub use eden_obs::{filter_colonies, filter_obstacles, filter_type, ColonyCensus};
}
