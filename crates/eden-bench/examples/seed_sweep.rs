//! Seed sweep example.
//!
//! Demonstrates: build config → Simulation → run → census, repeated over
//! several seeds to show how the colony A/B split varies with the draw.

use eden_bench::reference_profile;
use eden_growth::Simulation;
use eden_obs::{lattice_hash, ColonyCensus};

fn main() {
    println!("=== Eden Seed Sweep ===\n");
    println!("{:>6}  {:>7}  {:>7}  {:>8}  {:>9}  {:>18}", "seed", "A", "B", "A share", "time", "hash");

    for seed in 0..8u64 {
        let mut sim = Simulation::new(reference_profile(seed)).unwrap();
        let stats = sim.run().unwrap();
        let census = ColonyCensus::of(sim.lattice());
        println!(
            "{:>6}  {:>7}  {:>7}  {:>8.3}  {:>9.3}  {:#018x}",
            seed,
            census.type_a,
            census.type_b,
            census.fraction_a().unwrap_or(0.0),
            stats.simulated_time,
            lattice_hash(sim.lattice()),
        );
    }
}
