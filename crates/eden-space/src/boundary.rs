//! What happens when growth reaches the lattice edge.

/// How a growth run treats the outer edge of the lattice.
///
/// Neighbour queries themselves never leave the lattice: coordinates
/// outside `[0, side)` are reported as absent and read as
/// [`SiteState::Obstacle`](eden_core::SiteState::Obstacle). The policy
/// only decides whether reaching the outermost shell of cells is
/// acceptable.
///
/// # Examples
///
/// ```
/// use eden_space::{BoundaryPolicy, Cube6};
///
/// let cube = Cube6::new(5).unwrap();
/// let corner = cube.index_of(&[0, 0, 0]).unwrap();
/// let centre = cube.index_of(&[2, 2, 2]).unwrap();
///
/// // Under Fail, growing into a shell cell aborts the run.
/// assert!(BoundaryPolicy::Fail.rejects(&cube, corner));
/// assert!(!BoundaryPolicy::Fail.rejects(&cube, centre));
///
/// // Under Obstacle, the edge simply acts as a wall.
/// assert!(!BoundaryPolicy::Obstacle.rejects(&cube, corner));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BoundaryPolicy {
    /// Out-of-range neighbours behave as permanent obstacles. Colonies
    /// grow up to the edge and stop there.
    #[default]
    Obstacle,
    /// Growing into a cell on the outer shell aborts the run with
    /// `BoundaryExceeded` before anything is written.
    Fail,
}

impl BoundaryPolicy {
    /// Whether growth into `index` must be refused under this policy.
    pub fn rejects(self, cube: &crate::Cube6, index: eden_core::CellIndex) -> bool {
        match self {
            Self::Obstacle => false,
            Self::Fail => cube.on_shell(index),
        }
    }
}
