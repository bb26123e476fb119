//! Coordinate and cell-index aliases.

/// A coordinate on the cubic lattice, as `[x, y, z]`.
///
/// Signed so that neighbour offsets can step below zero before the
/// lattice decides whether the result is in range. Valid coordinates
/// satisfy `0 <= axis < side` on every axis.
pub type Coord = [i32; 3];

/// Flat index of a cell within a lattice.
///
/// Cells are laid out x-fastest: `x + side * (y + side * z)`. This is
/// also the canonical iteration order used by seeding, discovery, and
/// the raw volume projection.
pub type CellIndex = usize;
