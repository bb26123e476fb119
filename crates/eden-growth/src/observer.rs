//! Hooks for watching a run without owning the lattice.
//!
//! The engine holds the only mutable borrow of the lattice for the
//! whole run. Observers receive shared views at defined points: after
//! every growth event and at every checkpoint of simulated time.

use eden_space::Lattice;

use crate::engine::Growth;

/// A point in simulated time at which the lattice is offered for
/// inspection.
///
/// Checkpoints fire once simulated time has advanced by at least the
/// engine's checkpoint interval since the previous one (or since the
/// start of the clock).
#[derive(Clone, Copy, Debug)]
pub struct Checkpoint<'a> {
    /// 1-based sequence number. Runs that continue an earlier one keep
    /// counting from it.
    pub index: u64,
    /// Simulated time when the checkpoint fired.
    pub time: f64,
    /// Steps completed so far in the run.
    pub steps: u64,
    /// The lattice at this point.
    pub lattice: &'a Lattice,
}

/// Receives growth events and checkpoints from a running engine.
///
/// Both methods default to doing nothing, so an observer only
/// implements the events it cares about.
pub trait GrowthObserver {
    /// Called after every successful growth step.
    fn on_growth(&mut self, _growth: &Growth) {}

    /// Called when a checkpoint fires.
    fn on_checkpoint(&mut self, _checkpoint: &Checkpoint<'_>) {}
}

impl<O: GrowthObserver + ?Sized> GrowthObserver for &mut O {
    fn on_growth(&mut self, growth: &Growth) {
        (**self).on_growth(growth);
    }

    fn on_checkpoint(&mut self, checkpoint: &Checkpoint<'_>) {
        (**self).on_checkpoint(checkpoint);
    }
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl GrowthObserver for NoopObserver {}
