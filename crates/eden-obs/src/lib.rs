//! Derived views of Eden lattices.
//!
//! Everything here reads a lattice and produces something new; nothing
//! writes back. These are the hand-off points to downstream
//! visualization and analysis, which do their own file I/O.
//!
//! - [`extract`]: per-type lattices (one colony, obstacles, all colonies)
//! - [`ColonyCensus`]: site counts per state
//! - [`slice`]: z-plane and raw-volume code projections
//! - [`hash`]: FNV-1a digests for determinism checks
//! - [`SliceRecorder`]: an observer that keeps z-slices at checkpoints

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod census;
pub mod extract;
pub mod hash;
pub mod recorder;
pub mod slice;

pub use census::ColonyCensus;
pub use extract::{filter_colonies, filter_obstacles, filter_type};
pub use hash::{config_hash, lattice_hash};
pub use recorder::{RecordedSlice, SliceRecorder};
pub use slice::{raw_codes, z_slice};
