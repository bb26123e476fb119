//! Geometry compliance test helpers.
//!
//! These functions verify that a [`Cube6`] satisfies the invariants the
//! lattice and frontier code rely on. Reused by the cube and lattice
//! test modules.

use crate::cube6::Cube6;
use indexmap::IndexSet;

/// Assert that `b in neighbours(a)` implies `a in neighbours(b)`.
pub fn assert_neighbours_symmetric(cube: &Cube6) {
    for coord in cube.coords() {
        for nb in cube.neighbours6(&coord).into_iter().flatten() {
            assert!(
                cube.neighbours6(&nb).contains(&Some(coord)),
                "neighbour symmetry violated: {nb:?} in N({coord:?}) but {coord:?} not in N({nb:?})"
            );
        }
    }
}

/// Assert that every reported neighbour is inside the cube and at unit
/// Manhattan distance.
pub fn assert_neighbours_in_range(cube: &Cube6) {
    for coord in cube.coords() {
        for nb in cube.neighbours6(&coord).into_iter().flatten() {
            assert!(cube.contains(&nb), "neighbour {nb:?} of {coord:?} is off-lattice");
            let dist: i32 = (0..3).map(|a| (nb[a] - coord[a]).abs()).sum();
            assert_eq!(dist, 1, "neighbour {nb:?} of {coord:?} is not face-adjacent");
        }
    }
}

/// Assert that the canonical ordering returns exactly `cell_count`
/// unique coordinates whose indices are `0..cell_count` in order.
pub fn assert_canonical_ordering_complete(cube: &Cube6) {
    let ordering: Vec<_> = cube.coords().collect();
    assert_eq!(
        ordering.len(),
        cube.cell_count(),
        "canonical ordering length ({}) != cell_count ({})",
        ordering.len(),
        cube.cell_count()
    );
    let unique: IndexSet<_> = ordering.iter().collect();
    assert_eq!(unique.len(), cube.cell_count(), "canonical ordering has duplicates");
    for (i, coord) in ordering.iter().enumerate() {
        assert_eq!(cube.index_of(coord), Some(i), "rank of {coord:?} is not {i}");
    }
}

/// Assert that the shell test agrees with the coordinate bounds.
pub fn assert_shell_matches_faces(cube: &Cube6) {
    let last = cube.side() as i32 - 1;
    for (i, coord) in cube.coords().enumerate() {
        let expected = coord.iter().any(|&a| a == 0 || a == last);
        assert_eq!(cube.on_shell(i), expected, "shell mismatch at {coord:?}");
    }
}

/// Run all compliance checks on a cube.
pub fn run_full_compliance(cube: &Cube6) {
    assert_neighbours_symmetric(cube);
    assert_neighbours_in_range(cube);
    assert_canonical_ordering_complete(cube);
    assert_shell_matches_faces(cube);
}
