//! 3D cubic lattice with 6-connected (face) neighbourhood.

use crate::error::SpaceError;
use eden_core::{CellIndex, Coord};

/// The six face offsets, in the fixed order `+x, -x, +y, -y, +z, -z`.
///
/// Every neighbour enumeration in the workspace uses this order, which
/// keeps random neighbour choices reproducible.
pub const FACE_OFFSETS: [Coord; 6] = [
    [1, 0, 0],
    [-1, 0, 0],
    [0, 1, 0],
    [0, -1, 0],
    [0, 0, 1],
    [0, 0, -1],
];

/// A cube of `side³` cells with 6-connected neighbourhood.
///
/// Each cell has coordinate `[x, y, z]` with `0 <= x, y, z < side`.
/// Cells are stored and enumerated x-fastest: the flat index of
/// `[x, y, z]` is `x + side * (y + side * z)`.
///
/// Neighbours that fall outside the cube are reported as `None` rather
/// than wrapped or clamped, so a corner cell has three in-range
/// neighbours and an interior cell has six.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cube6 {
    side: u32,
    /// Precomputed `side * side`.
    plane: usize,
    /// Precomputed `side³`.
    cell_count: usize,
}

impl Cube6 {
    /// Maximum side length: coordinates use `i32`, so each axis must fit.
    pub const MAX_SIDE: u32 = i32::MAX as u32;

    /// Maximum number of cells, `2^36` (a side of 4096).
    pub const MAX_CELLS: u64 = 1 << 36;

    /// Create a cube of side length `side`.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` for `side == 0`,
    /// `Err(SpaceError::DimensionTooLarge)` if `side` exceeds `i32::MAX`,
    /// or `Err(SpaceError::CellCountOverflow)` if `side³` overflows `usize`
    /// or exceeds [`Cube6::MAX_CELLS`].
    ///
    /// # Examples
    ///
    /// ```
    /// use eden_space::Cube6;
    ///
    /// let cube = Cube6::new(4).unwrap();
    /// assert_eq!(cube.cell_count(), 64);
    ///
    /// // Corner cell [0, 0, 0]: three of six neighbours are off-lattice.
    /// let present = cube.neighbours6(&[0, 0, 0]).iter().flatten().count();
    /// assert_eq!(present, 3);
    /// ```
    pub fn new(side: u32) -> Result<Self, SpaceError> {
        if side == 0 {
            return Err(SpaceError::EmptySpace);
        }
        if side > Self::MAX_SIDE {
            return Err(SpaceError::DimensionTooLarge {
                value: side,
                max: Self::MAX_SIDE,
            });
        }
        let s = side as usize;
        let plane = s
            .checked_mul(s)
            .ok_or(SpaceError::CellCountOverflow { side })?;
        let cell_count = plane
            .checked_mul(s)
            .filter(|&n| n as u64 <= Self::MAX_CELLS)
            .ok_or(SpaceError::CellCountOverflow { side })?;
        Ok(Self {
            side,
            plane,
            cell_count,
        })
    }

    /// Side length.
    pub fn side(&self) -> u32 {
        self.side
    }

    /// Total number of cells, `side³`.
    pub fn cell_count(&self) -> usize {
        self.cell_count
    }

    /// Always returns `false`: construction rejects empty cubes.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `coord` lies inside the cube.
    pub fn contains(&self, coord: &Coord) -> bool {
        let side = self.side as i64;
        coord.iter().all(|&a| (0..side).contains(&i64::from(a)))
    }

    /// Flat index of `coord`, or `None` if it is outside the cube.
    pub fn index_of(&self, coord: &Coord) -> Option<CellIndex> {
        if !self.contains(coord) {
            return None;
        }
        let s = self.side as usize;
        let [x, y, z] = coord.map(|a| a as usize);
        Some(x + s * y + self.plane * z)
    }

    /// Coordinate of a flat index, or `None` if `index >= cell_count()`.
    pub fn coord_of(&self, index: CellIndex) -> Option<Coord> {
        if index >= self.cell_count {
            return None;
        }
        let s = self.side as usize;
        let x = index % s;
        let y = (index / s) % s;
        let z = index / self.plane;
        Some([x as i32, y as i32, z as i32])
    }

    /// The six face neighbours of `coord` in [`FACE_OFFSETS`] order.
    ///
    /// An entry is `None` when that neighbour would fall outside the
    /// cube. `coord` itself is not required to be inside.
    pub fn neighbours6(&self, coord: &Coord) -> [Option<Coord>; 6] {
        FACE_OFFSETS.map(|[dx, dy, dz]| {
            let n = [
                coord[0].checked_add(dx)?,
                coord[1].checked_add(dy)?,
                coord[2].checked_add(dz)?,
            ];
            self.contains(&n).then_some(n)
        })
    }

    /// Flat-index form of [`neighbours6`](Self::neighbours6).
    ///
    /// Avoids coordinate round-trips on the growth hot path. Returns all
    /// `None` for an out-of-range `index`.
    pub fn neighbour_indices(&self, index: CellIndex) -> [Option<CellIndex>; 6] {
        let Some([x, y, z]) = self.coord_of(index) else {
            return [None; 6];
        };
        let last = self.side as i32 - 1;
        let s = self.side as usize;
        [
            (x < last).then(|| index + 1),
            (x > 0).then(|| index - 1),
            (y < last).then(|| index + s),
            (y > 0).then(|| index - s),
            (z < last).then(|| index + self.plane),
            (z > 0).then(|| index - self.plane),
        ]
    }

    /// Whether `index` is on the outermost shell, i.e. at least one of
    /// its face neighbours is off-lattice.
    pub fn on_shell(&self, index: CellIndex) -> bool {
        self.neighbour_indices(index).iter().any(Option::is_none)
    }

    /// All coordinates in canonical (x-fastest) order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.cell_count).filter_map(move |i| self.coord_of(i))
    }
}
