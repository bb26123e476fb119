//! In-memory checkpoint recorder.

use eden_growth::{Checkpoint, GrowthObserver};

use crate::slice::z_slice;

/// One z-plane captured at a checkpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedSlice {
    /// Checkpoint sequence number (1-based, unique across the runs of
    /// one simulation).
    pub checkpoint: u64,
    /// Simulated time of the checkpoint.
    pub time: f64,
    /// Plane index.
    pub z: u32,
    /// Row-major codes, see [`z_slice`].
    pub codes: Vec<u8>,
}

/// Observer that copies z-slices of the lattice at every checkpoint.
///
/// Either every plane is kept (the full time series of the volume) or
/// a single chosen plane.
#[derive(Clone, Debug, Default)]
pub struct SliceRecorder {
    plane: Option<u32>,
    slices: Vec<RecordedSlice>,
}

impl SliceRecorder {
    /// Record every plane at every checkpoint.
    pub fn all_planes() -> Self {
        Self::default()
    }

    /// Record only plane `z`. Checkpoints on lattices too small to have
    /// that plane record nothing.
    pub fn plane(z: u32) -> Self {
        Self {
            plane: Some(z),
            slices: Vec::new(),
        }
    }

    /// Everything recorded so far, in checkpoint then plane order.
    pub fn slices(&self) -> &[RecordedSlice] {
        &self.slices
    }

    /// Take the recording, leaving the recorder empty.
    pub fn take(&mut self) -> Vec<RecordedSlice> {
        std::mem::take(&mut self.slices)
    }

    fn record(&mut self, c: &Checkpoint<'_>, z: u32) {
        if let Some(codes) = z_slice(c.lattice, z) {
            self.slices.push(RecordedSlice {
                checkpoint: c.index,
                time: c.time,
                z,
                codes,
            });
        }
    }
}

impl GrowthObserver for SliceRecorder {
    fn on_checkpoint(&mut self, checkpoint: &Checkpoint<'_>) {
        match self.plane {
            Some(z) => self.record(checkpoint, z),
            None => {
                for z in 0..checkpoint.lattice.side() {
                    self.record(checkpoint, z);
                }
            }
        }
    }
}
