//! Eden Quickstart: seed a lattice, grow two colonies, inspect the result.
//!
//! Demonstrates:
//!   1. Building a GrowthConfig and Simulation
//!   2. Watching checkpoints through a GrowthObserver
//!   3. Running and reading back statistics
//!   4. Counting each colony on the final lattice
//!
//! Run with:
//!   RUST_LOG=eden_growth=debug cargo run --example quickstart

use eden_core::SiteState;
use eden_growth::{Checkpoint, GrowthConfig, GrowthObserver, ObstacleSphere, Simulation};
use tracing_subscriber::EnvFilter;

// ─── Observer ───────────────────────────────────────────────────

/// Prints colony sizes each time simulated time passes a whole unit.
struct Progress;

impl GrowthObserver for Progress {
    fn on_checkpoint(&mut self, c: &Checkpoint<'_>) {
        println!(
            "  t={:7.3}  step {:5}  A={:5}  B={:5}",
            c.time,
            c.steps,
            c.lattice.count(SiteState::TypeA),
            c.lattice.count(SiteState::TypeB),
        );
    }
}

// ─── Main ───────────────────────────────────────────────────────

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Eden Quickstart ===\n");

    // 1. Configure: 24³ lattice, radius-3 seed, one obstacle off to the side.
    let config = GrowthConfig {
        size: 24,
        seed_radius: 3,
        steps: 2_000,
        obstacles: vec![ObstacleSphere {
            center: [18, 12, 12],
            radius: 3,
        }],
        checkpoint_interval: Some(1.0),
        ..GrowthConfig::default()
    };

    // 2. Seed.
    let mut sim = Simulation::new(config)?;
    println!(
        "Seeded {} sites, {} obstacle sites\n",
        sim.lattice().occupied().len(),
        sim.lattice().count(SiteState::Obstacle),
    );

    // 3. Grow.
    let stats = sim.run_observed(&mut Progress)?;
    println!(
        "\nGrew {} sites in simulated time {:.3} ({} checkpoints, frontier {})",
        stats.steps_completed, stats.simulated_time, stats.checkpoints, stats.frontier_len,
    );

    // 4. Final composition.
    let lattice = sim.lattice();
    println!(
        "Final: A={} B={} empty={} obstacle={}",
        lattice.count(SiteState::TypeA),
        lattice.count(SiteState::TypeB),
        lattice.count(SiteState::Empty),
        lattice.count(SiteState::Obstacle),
    );

    Ok(())
}
