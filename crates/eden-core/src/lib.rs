//! Core types and traits for the Eden two-colony growth model.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Eden workspace:
//! site states, coordinates, error types, and the random-source trait.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod site;
pub mod traits;

pub use error::{ConfigError, GrowthError};
pub use id::{CellIndex, Coord};
pub use site::SiteState;
pub use traits::UniformSource;
