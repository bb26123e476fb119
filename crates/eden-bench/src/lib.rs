//! Benchmark profiles and utilities for the Eden growth model.
//!
//! Provides pre-built [`GrowthConfig`] profiles for benchmarking and examples:
//!
//! - [`reference_profile`]: 64³ lattice (262K sites), 20K growth steps
//! - [`stress_profile`]: 128³ lattice (~2.1M sites), 200K growth steps
//! - [`scatter_obstacles`]: deterministic obstacle placement via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use eden_growth::{GrowthConfig, ObstacleSphere};
use eden_space::BoundaryPolicy;

/// Reference benchmark profile: 64³ lattice, radius-3 seed, 20K steps,
/// eight radius-4 obstacles.
pub fn reference_profile(seed: u64) -> GrowthConfig {
    GrowthConfig {
        size: 64,
        seed_radius: 3,
        rng_seed: seed,
        steps: 20_000,
        boundary: BoundaryPolicy::Obstacle,
        obstacles: scatter_obstacles(64, 8, 4, seed),
        checkpoint_interval: None,
    }
}

/// Stress benchmark profile: 128³ lattice, 200K steps, no obstacles.
///
/// Same shape as [`reference_profile`] at 8x the site count.
pub fn stress_profile(seed: u64) -> GrowthConfig {
    GrowthConfig {
        size: 128,
        seed_radius: 3,
        rng_seed: seed,
        steps: 200_000,
        ..GrowthConfig::default()
    }
}

/// Generate `n` deterministic obstacle spheres of `radius` in a
/// lattice of side `side`.
///
/// Centres come from a simple hash of the seed and are kept at least
/// `side / 4` away from the lattice centre on some axis, so the seed
/// sphere stays clear.
pub fn scatter_obstacles(side: u32, n: u16, radius: u32, seed: u64) -> Vec<ObstacleSphere> {
    let s = u64::from(side.max(1));
    let c = i64::from(side / 2);
    let clearance = i64::from(side / 4);
    let mut out = Vec::with_capacity(n as usize);
    let mut state = seed;
    while out.len() < n as usize {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let x = ((state >> 16) % s) as i32;
        let y = ((state >> 32) % s) as i32;
        let z = ((state >> 48) % s) as i32;
        let far = [x, y, z]
            .iter()
            .any(|&v| (i64::from(v) - c).abs() >= clearance);
        if far || clearance == 0 {
            out.push(ObstacleSphere {
                center: [x, y, z],
                radius,
            });
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_profile_validates() {
        reference_profile(42).validate().unwrap();
    }

    #[test]
    fn stress_profile_validates() {
        stress_profile(42).validate().unwrap();
    }

    #[test]
    fn scatter_obstacles_in_bounds_and_clear() {
        let spheres = scatter_obstacles(64, 20, 4, 7);
        assert_eq!(spheres.len(), 20);
        for o in &spheres {
            assert!(o.center.iter().all(|&v| (0..64).contains(&v)));
            assert!(o.center.iter().any(|&v| (v - 32).abs() >= 16));
        }
    }

    #[test]
    fn scatter_obstacles_deterministic() {
        assert_eq!(scatter_obstacles(32, 5, 2, 42), scatter_obstacles(32, 5, 2, 42));
        assert_ne!(scatter_obstacles(32, 5, 2, 42), scatter_obstacles(32, 5, 2, 43));
    }
}
