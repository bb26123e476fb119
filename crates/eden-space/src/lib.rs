//! Lattice geometry and site storage for the Eden growth model.
//!
//! This crate defines the cubic lattice topology ([`Cube6`]), the
//! site-state grid that lives on it ([`Lattice`]), Euclidean ball
//! regions used for seeding and obstacle carving ([`Ball`]), and the
//! policy for growth that reaches the lattice edge ([`BoundaryPolicy`]).
//!
//! # Boundary handling
//!
//! Neighbour queries never index outside the lattice. A neighbour that
//! would fall outside `[0, side)` on any axis is reported as `None`, and
//! [`Lattice::get`] reads such coordinates as
//! [`SiteState::Obstacle`](eden_core::SiteState::Obstacle), so growth can
//! never enter them.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod boundary;
pub mod cube6;
pub mod error;
pub mod lattice;
pub mod region;

#[cfg(test)]
pub(crate) mod compliance;

pub use boundary::BoundaryPolicy;
pub use cube6::Cube6;
pub use error::SpaceError;
pub use lattice::Lattice;
pub use region::Ball;
