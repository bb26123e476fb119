//! Hashing utilities for lattice and configuration comparison.
//!
//! Uses FNV-1a for fast, deterministic hashing. These hashes are not
//! cryptographically secure; they exist to compare runs cheaply.

use eden_growth::GrowthConfig;
use eden_space::{BoundaryPolicy, Lattice};

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

#[inline]
fn fnv1a_bytes(mut hash: u64, bytes: &[u8]) -> u64 {
    for &b in bytes {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

/// Digest of a lattice: its side length, then every site code in
/// canonical order.
pub fn lattice_hash(lattice: &Lattice) -> u64 {
    let mut hash = fnv1a_bytes(FNV_OFFSET, &lattice.side().to_le_bytes());
    for s in lattice.sites() {
        hash = fnv1a_byte(hash, s.code());
    }
    hash
}

/// Digest of every field of a [`GrowthConfig`] that affects the
/// trajectory of a run.
pub fn config_hash(config: &GrowthConfig) -> u64 {
    let mut hash = FNV_OFFSET;
    hash = fnv1a_bytes(hash, &config.size.to_le_bytes());
    hash = fnv1a_bytes(hash, &config.seed_radius.to_le_bytes());
    hash = fnv1a_bytes(hash, &config.rng_seed.to_le_bytes());
    hash = fnv1a_bytes(hash, &config.steps.to_le_bytes());
    let boundary: u8 = match config.boundary {
        BoundaryPolicy::Obstacle => 0,
        BoundaryPolicy::Fail => 1,
    };
    hash = fnv1a_byte(hash, boundary);
    hash = fnv1a_bytes(hash, &(config.obstacles.len() as u64).to_le_bytes());
    for o in &config.obstacles {
        for c in o.center {
            hash = fnv1a_bytes(hash, &c.to_le_bytes());
        }
        hash = fnv1a_bytes(hash, &o.radius.to_le_bytes());
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;
    use eden_core::SiteState;
    use eden_growth::ObstacleSphere;
    use eden_test_utils::filled;

    #[test]
    fn fnv1a_known_vector() {
        // FNV-1a 64 of "a".
        assert_eq!(fnv1a_bytes(FNV_OFFSET, b"a"), 0xaf63dc4c8601ec8c);
    }

    #[test]
    fn lattice_hash_sees_one_site() {
        let a = filled(3, SiteState::Empty);
        let mut b = a.clone();
        b.set(&[2, 2, 2], SiteState::TypeA).unwrap();
        assert_ne!(lattice_hash(&a), lattice_hash(&b));
        assert_eq!(lattice_hash(&a), lattice_hash(&a.clone()));
    }

    #[test]
    fn lattice_hash_sees_side() {
        // Same codes (none), different geometry.
        let a = filled(1, SiteState::Empty);
        let b = filled(2, SiteState::Empty);
        assert_ne!(lattice_hash(&a), lattice_hash(&b));
    }

    #[test]
    fn config_hash_ignores_checkpoints_only() {
        let base = GrowthConfig::default();
        let with_checkpoints = GrowthConfig {
            checkpoint_interval: Some(1.0),
            ..base.clone()
        };
        assert_eq!(config_hash(&base), config_hash(&with_checkpoints));

        let with_obstacle = GrowthConfig {
            obstacles: vec![ObstacleSphere {
                center: [1, 2, 3],
                radius: 1,
            }],
            ..base.clone()
        };
        assert_ne!(config_hash(&base), config_hash(&with_obstacle));

        let failing = GrowthConfig {
            boundary: BoundaryPolicy::Fail,
            ..base.clone()
        };
        assert_ne!(config_hash(&base), config_hash(&failing));
    }
}
