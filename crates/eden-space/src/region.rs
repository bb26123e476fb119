//! Euclidean ball regions.

use crate::cube6::Cube6;
use eden_core::{CellIndex, Coord};

/// All cells whose Euclidean distance from `center` is at most `radius`.
///
/// Membership is tested in exact integer arithmetic,
/// `dx² + dy² + dz² <= radius²`, which is identical to comparing the
/// square-rooted distance against `radius` for integer coordinates.
/// The centre may lie outside the lattice; the ball is clipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ball {
    /// Centre coordinate.
    pub center: Coord,
    /// Radius in lattice units (inclusive).
    pub radius: u32,
}

impl Ball {
    /// Create a ball.
    pub fn new(center: Coord, radius: u32) -> Self {
        Self { center, radius }
    }

    /// Whether `coord` lies within the ball.
    pub fn contains(&self, coord: &Coord) -> bool {
        let d2: i64 = (0..3)
            .map(|a| {
                let d = i64::from(coord[a]) - i64::from(self.center[a]);
                d * d
            })
            .sum();
        let r = i64::from(self.radius);
        d2 <= r * r
    }

    /// Whether the whole ball lies inside `cube`.
    pub fn fits_within(&self, cube: &Cube6) -> bool {
        let r = i64::from(self.radius);
        let side = i64::from(cube.side());
        self.center
            .iter()
            .all(|&c| i64::from(c) - r >= 0 && i64::from(c) + r < side)
    }

    /// Cells of the ball inside `cube`, in canonical (x-fastest) order.
    ///
    /// Only the clipped bounding box is visited, so cost scales with the
    /// ball volume rather than the lattice volume.
    pub fn cells<'a>(&'a self, cube: &'a Cube6) -> impl Iterator<Item = CellIndex> + 'a {
        let r = i64::from(self.radius);
        let last = i64::from(cube.side()) - 1;
        let span = |axis: usize| {
            let c = i64::from(self.center[axis]);
            (c - r).max(0)..=(c + r).min(last)
        };
        let (xs, ys, zs) = (span(0), span(1), span(2));
        zs.flat_map(move |z| {
            let xs = xs.clone();
            ys.clone()
                .flat_map(move |y| xs.clone().map(move |x| [x as i32, y as i32, z as i32]))
        })
        .filter(move |coord| self.contains(coord))
        .filter_map(move |coord| cube.index_of(&coord))
    }
}
