//! Run statistics for the growth engine.
//!
//! [`RunStats`] is the summary returned by a completed run: how far
//! simulated time got, how many sites grew, and how large the frontier
//! was at the end.

/// Summary of a growth run.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RunStats {
    /// Simulated time at the end of the run. Each step advances it by
    /// `1 / |frontier|` measured after the step.
    pub simulated_time: f64,
    /// Number of sites grown.
    pub steps_completed: u64,
    /// Frontier size at the end of the run.
    pub frontier_len: usize,
    /// Number of checkpoints delivered to the observer.
    pub checkpoints: u64,
}

impl RunStats {
    /// Mean simulated time per step, or `0.0` if nothing grew.
    pub fn mean_step_time(&self) -> f64 {
        if self.steps_completed == 0 {
            0.0
        } else {
            self.simulated_time / self.steps_completed as f64
        }
    }
}
