//! Seed-sphere placement and obstacle carving.
//!
//! Both operations run before growth starts. Obstacles carved here are
//! never touched again: the growth engine only ever writes to sites that
//! were `Empty`.

use eden_core::{ConfigError, Coord, SiteState, UniformSource};
use eden_space::{Ball, Lattice, SpaceError};

use crate::rng::SeededSource;

/// Fill every cell within Euclidean `radius` of `center` with a colony
/// type drawn 50/50 from `rng`.
///
/// Cells are visited in canonical order, one draw per cell, so the
/// result depends only on the lattice size, the ball and the state of
/// `rng`. Cells outside the ball are left untouched. Returns the number
/// of cells seeded.
pub fn seed<R: UniformSource + ?Sized>(
    lattice: &mut Lattice,
    center: Coord,
    radius: u32,
    rng: &mut R,
) -> usize {
    let cube = *lattice.cube();
    let mut seeded = 0;
    for index in Ball::new(center, radius).cells(&cube) {
        let kind = SiteState::COLONIES[rng.uniform_index(SiteState::COLONIES.len())];
        lattice.set_index(index, kind);
        seeded += 1;
    }
    seeded
}

/// Mark every cell within Euclidean `radius` of `center` as `Obstacle`,
/// overriding whatever was there. The sphere is clipped to the lattice.
/// Returns the number of cells carved.
pub fn carve_obstacle(lattice: &mut Lattice, center: Coord, radius: u32) -> usize {
    let cube = *lattice.cube();
    let mut carved = 0;
    for index in Ball::new(center, radius).cells(&cube) {
        lattice.set_index(index, SiteState::Obstacle);
        carved += 1;
    }
    carved
}

/// Centre cell of a lattice of side `side`: `(side/2, side/2, side/2)`.
pub fn lattice_center(side: u32) -> Coord {
    let c = (side / 2) as i32;
    [c, c, c]
}

/// Largest seed radius that keeps a sphere at [`lattice_center`] inside
/// the lattice.
pub fn max_seed_radius(side: u32) -> u32 {
    let c = side / 2;
    c.min(side.saturating_sub(1) - c)
}

/// Build an empty lattice of side `size` and seed a sphere of
/// `seed_radius` at its centre, drawing types from `rng`.
///
/// # Errors
///
/// `ConfigError::EmptyLattice` for `size == 0`,
/// `ConfigError::LatticeTooLarge` if the lattice exceeds the cell limit
/// or cannot be allocated,
/// `ConfigError::SeedRadiusTooLarge` if the sphere would leave the lattice.
pub fn initialize_with<R: UniformSource + ?Sized>(
    size: u32,
    seed_radius: u32,
    rng: &mut R,
) -> Result<Lattice, ConfigError> {
    let mut lattice = Lattice::new(size).map_err(|e| config_error(e, size))?;
    let max = max_seed_radius(size);
    if seed_radius > max {
        return Err(ConfigError::SeedRadiusTooLarge {
            radius: seed_radius,
            max,
        });
    }
    seed(&mut lattice, lattice_center(size), seed_radius, rng);
    Ok(lattice)
}

/// Build a seeded lattice from a `u64` seed.
///
/// Returns the lattice together with the random source, positioned just
/// after the seeding draws. Pass that same source on to
/// [`run_growth`](crate::run_growth) so the whole run stays one
/// reproducible stream.
pub fn initialize(
    size: u32,
    seed_radius: u32,
    rng_seed: u64,
) -> Result<(Lattice, SeededSource), ConfigError> {
    let mut rng = SeededSource::new(rng_seed);
    let lattice = initialize_with(size, seed_radius, &mut rng)?;
    Ok((lattice, rng))
}

/// Lattice construction only fails for size reasons.
pub(crate) fn config_error(e: SpaceError, size: u32) -> ConfigError {
    e.as_config_error().unwrap_or(ConfigError::LatticeTooLarge {
        side: u64::from(size),
    })
}
