//! Flat code projections for export.
//!
//! Codes are the stable [`SiteState::code`](eden_core::SiteState::code)
//! bytes. Both projections follow canonical order, so a z-slice is a
//! contiguous window of the raw volume.

use eden_space::Lattice;

/// The `side × side` codes of plane `z`, row-major with `y` rows and
/// `x` columns. `None` if `z` is outside the lattice.
///
/// ```
/// use eden_core::SiteState;
/// use eden_obs::z_slice;
/// use eden_space::Lattice;
///
/// let mut lattice = Lattice::new(2).unwrap();
/// lattice.set(&[1, 0, 1], SiteState::TypeB).unwrap();
/// assert_eq!(z_slice(&lattice, 1), Some(vec![0, 2, 0, 0]));
/// assert_eq!(z_slice(&lattice, 2), None);
/// ```
pub fn z_slice(lattice: &Lattice, z: u32) -> Option<Vec<u8>> {
    if z >= lattice.side() {
        return None;
    }
    let plane = (lattice.side() as usize).pow(2);
    let start = z as usize * plane;
    Some(
        lattice.sites()[start..start + plane]
            .iter()
            .map(|s| s.code())
            .collect(),
    )
}

/// All `side³` codes in canonical order (`x` fastest, then `y`, then
/// `z`): the byte layout of a raw volume dump.
pub fn raw_codes(lattice: &Lattice) -> Vec<u8> {
    lattice.sites().iter().map(|s| s.code()).collect()
}
