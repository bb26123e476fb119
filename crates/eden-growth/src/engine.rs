//! The growth step state machine and run loop.
//!
//! [`GrowthEngine`] borrows a seeded lattice exclusively for the whole
//! run, so nothing else can touch the lattice (obstacles included)
//! until the engine is dropped. Each [`step()`](GrowthEngine::step):
//!
//! 1. draws a parent `p` uniformly from the frontier,
//! 2. draws a target `g` uniformly among the `Empty` face neighbours of
//!    `p` (enumerated in `+x, -x, +y, -y, +z, -z` order),
//! 3. checks the boundary policy,
//! 4. writes `state(g) := state(p)` and updates the frontier,
//! 5. advances simulated time by `1 / |frontier|`.
//!
//! The random source is passed into every call and drawn from exactly
//! twice per successful step, so a run is a pure function of the
//! lattice and the source state.

use eden_core::{CellIndex, ConfigError, GrowthError, SiteState, UniformSource};
use eden_space::{BoundaryPolicy, Lattice};
use tracing::{debug, trace, warn};

use crate::frontier::{FrontierDelta, FrontierSet};
use crate::metrics::RunStats;
use crate::observer::{Checkpoint, GrowthObserver, NoopObserver};

// ── EngineState ─────────────────────────────────────────────────

/// Lifecycle state of a [`GrowthEngine`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineState {
    /// More steps remain.
    Running,
    /// The requested steps are done, or the run aborted.
    Finished,
}

// ── Growth / StepOutcome ────────────────────────────────────────

/// One growth event.
#[derive(Clone, Debug, PartialEq)]
pub struct Growth {
    /// The frontier site that grew.
    pub parent: CellIndex,
    /// The formerly empty site that was filled.
    pub child: CellIndex,
    /// Colony type written to `child` (always the parent's type).
    pub state: SiteState,
    /// How the frontier changed.
    pub delta: FrontierDelta,
    /// Frontier size after the step.
    pub frontier_len: usize,
    /// Simulated time after the step.
    pub time: f64,
}

/// Result of a successful [`GrowthEngine::step()`] call.
#[derive(Clone, Debug, PartialEq)]
pub enum StepOutcome {
    /// A site grew.
    Grew(Growth),
    /// The engine had already finished; nothing happened.
    Finished,
}

// ── GrowthEngine ────────────────────────────────────────────────

/// Drives growth on a borrowed lattice.
///
/// Construction runs a full frontier discovery. After that every step
/// is O(1) expected time.
pub struct GrowthEngine<'l> {
    lattice: &'l mut Lattice,
    frontier: FrontierSet,
    boundary: BoundaryPolicy,
    state: EngineState,
    requested: u64,
    completed: u64,
    time: f64,
    checkpoint_interval: Option<f64>,
    last_checkpoint: f64,
    checkpoints: u64,
    /// Checkpoints fired before this engine was built.
    prior_checkpoints: u64,
}

impl<'l> GrowthEngine<'l> {
    /// Prepare to grow `lattice` by `steps` sites.
    ///
    /// A request for zero steps yields an engine that is already
    /// [`Finished`](EngineState::Finished).
    pub fn new(lattice: &'l mut Lattice, steps: u64) -> Self {
        let frontier = FrontierSet::discover(lattice);
        let state = if steps == 0 {
            EngineState::Finished
        } else {
            EngineState::Running
        };
        debug!(
            side = lattice.side(),
            frontier = frontier.len(),
            steps,
            "growth engine ready"
        );
        Self {
            lattice,
            frontier,
            boundary: BoundaryPolicy::default(),
            state,
            requested: steps,
            completed: 0,
            time: 0.0,
            checkpoint_interval: None,
            last_checkpoint: 0.0,
            checkpoints: 0,
            prior_checkpoints: 0,
        }
    }

    /// Use `policy` at the lattice edge.
    pub fn with_boundary(mut self, policy: BoundaryPolicy) -> Self {
        self.boundary = policy;
        self
    }

    /// Fire a checkpoint every time simulated time advances by at least
    /// `interval`.
    ///
    /// # Errors
    ///
    /// `ConfigError::InvalidCheckpointInterval` unless `interval` is
    /// finite and positive.
    pub fn with_checkpoint_interval(mut self, interval: f64) -> Result<Self, ConfigError> {
        if !interval.is_finite() || interval <= 0.0 {
            return Err(ConfigError::InvalidCheckpointInterval { value: interval });
        }
        self.checkpoint_interval = Some(interval);
        Ok(self)
    }

    /// Start the simulated clock at `time` instead of zero, for runs
    /// that continue an earlier one on the same lattice.
    pub fn with_start_time(mut self, time: f64) -> Self {
        self.time = time;
        self.last_checkpoint = time;
        self
    }

    /// Continue checkpoint numbering from an earlier run: `fired`
    /// checkpoints have already been delivered, the last at simulated
    /// time `last`. The next checkpoint gets index `fired + 1` and fires
    /// one interval after `last`.
    ///
    /// Call after [`with_start_time()`](Self::with_start_time), which
    /// resets the checkpoint reference time.
    pub fn with_checkpoint_history(mut self, fired: u64, last: f64) -> Self {
        self.checkpoints = fired;
        self.prior_checkpoints = fired;
        self.last_checkpoint = last;
        self
    }

    /// Index of the latest checkpoint and the simulated time it fired,
    /// including checkpoints from earlier runs.
    pub fn checkpoint_history(&self) -> (u64, f64) {
        (self.checkpoints, self.last_checkpoint)
    }

    /// Current lifecycle state.
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Simulated time so far.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Steps completed so far.
    pub fn steps_completed(&self) -> u64 {
        self.completed
    }

    /// The current frontier.
    pub fn frontier(&self) -> &FrontierSet {
        &self.frontier
    }

    /// Read-only view of the lattice being grown.
    pub fn lattice(&self) -> &Lattice {
        self.lattice
    }

    /// Statistics for the run so far.
    pub fn stats(&self) -> RunStats {
        RunStats {
            simulated_time: self.time,
            steps_completed: self.completed,
            frontier_len: self.frontier.len(),
            checkpoints: self.checkpoints - self.prior_checkpoints,
        }
    }

    /// Execute one growth step.
    ///
    /// Returns [`StepOutcome::Finished`] without drawing once the
    /// engine is finished.
    ///
    /// # Errors
    ///
    /// - [`GrowthError::NoFrontier`] if no site can grow. Nothing is
    ///   drawn or written.
    /// - [`GrowthError::BoundaryExceeded`] if the boundary policy
    ///   refuses the chosen target. Both draws happen, nothing is
    ///   written.
    ///
    /// Either error finishes the engine.
    pub fn step<R: UniformSource + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<StepOutcome, GrowthError> {
        if self.state == EngineState::Finished {
            return Ok(StepOutcome::Finished);
        }

        let Some(parent) = self.frontier.choose(rng) else {
            return Err(self.abort(GrowthError::NoFrontier {
                steps_completed: self.completed,
            }));
        };

        let empties = self.lattice.empty_neighbours(parent);
        debug_assert!(!empties.is_empty(), "frontier member {parent} is stale");
        let child = empties[rng.uniform_index(empties.len())];

        let cube = *self.lattice.cube();
        if self.boundary.rejects(&cube, child) {
            let coord = cube.coord_of(child).unwrap_or_default();
            return Err(self.abort(GrowthError::BoundaryExceeded {
                coord,
                steps_completed: self.completed,
            }));
        }

        let state = self.lattice.get_index(parent);
        debug_assert!(state.is_colony());
        self.lattice.set_index(child, state);
        let delta = self.frontier.update(self.lattice, parent, child);

        if !self.frontier.is_empty() {
            self.time += 1.0 / self.frontier.len() as f64;
        }
        self.completed += 1;
        if self.completed >= self.requested {
            self.state = EngineState::Finished;
        }

        Ok(StepOutcome::Grew(Growth {
            parent,
            child,
            state,
            delta,
            frontier_len: self.frontier.len(),
            time: self.time,
        }))
    }

    /// Run the remaining steps.
    ///
    /// # Errors
    ///
    /// The first error from [`step()`](Self::step).
    pub fn run<R: UniformSource + ?Sized>(&mut self, rng: &mut R) -> Result<RunStats, GrowthError> {
        self.run_observed(rng, &mut NoopObserver)
    }

    /// Run the remaining steps, reporting every growth event and
    /// checkpoint to `observer`.
    ///
    /// # Errors
    ///
    /// The first error from [`step()`](Self::step). Events delivered
    /// before the error stand.
    pub fn run_observed<R, O>(&mut self, rng: &mut R, observer: &mut O) -> Result<RunStats, GrowthError>
    where
        R: UniformSource + ?Sized,
        O: GrowthObserver + ?Sized,
    {
        while let StepOutcome::Grew(growth) = self.step(rng)? {
            observer.on_growth(&growth);
            self.poll_checkpoint(observer);
        }
        let stats = self.stats();
        debug!(
            steps = stats.steps_completed,
            time = stats.simulated_time,
            frontier = stats.frontier_len,
            checkpoints = stats.checkpoints,
            "growth run finished"
        );
        Ok(stats)
    }

    fn poll_checkpoint<O: GrowthObserver + ?Sized>(&mut self, observer: &mut O) {
        let Some(interval) = self.checkpoint_interval else {
            return;
        };
        if self.time - self.last_checkpoint < interval {
            return;
        }
        self.last_checkpoint = self.time;
        self.checkpoints += 1;
        trace!(
            index = self.checkpoints,
            time = self.time,
            steps = self.completed,
            "checkpoint"
        );
        observer.on_checkpoint(&Checkpoint {
            index: self.checkpoints,
            time: self.time,
            steps: self.completed,
            lattice: self.lattice,
        });
    }

    fn abort(&mut self, err: GrowthError) -> GrowthError {
        self.state = EngineState::Finished;
        warn!(error = %err, time = self.time, "growth run aborted");
        err
    }
}

/// Grow `lattice` by `steps` sites with the default boundary policy
/// and no checkpoints.
///
/// # Errors
///
/// [`GrowthError::NoFrontier`] if the colony is enclosed before `steps`
/// sites have grown. The lattice keeps the growth done up to that
/// point.
pub fn run_growth<R: UniformSource + ?Sized>(
    lattice: &mut Lattice,
    steps: u64,
    rng: &mut R,
) -> Result<RunStats, GrowthError> {
    GrowthEngine::new(lattice, steps).run(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::init;
    use eden_test_utils::{expected_frontier, FixedSource, ScriptedSource};

    #[derive(Default)]
    struct Recorder {
        growths: Vec<Growth>,
        checkpoints: Vec<(u64, f64, u64)>,
    }

    impl GrowthObserver for Recorder {
        fn on_growth(&mut self, growth: &Growth) {
            self.growths.push(growth.clone());
        }

        fn on_checkpoint(&mut self, c: &Checkpoint<'_>) {
            self.checkpoints.push((c.index, c.time, c.steps));
        }
    }

    fn seeded(side: u32, radius: u32) -> Lattice {
        init::initialize_with(side, radius, &mut FixedSource::new(0)).unwrap()
    }

    // ── Lifecycle ───────────────────────────────────────────────

    #[test]
    fn zero_steps_finishes_immediately() {
        let mut lattice = seeded(7, 1);
        let before = lattice.clone();
        let mut src = FixedSource::new(0);
        let mut engine = GrowthEngine::new(&mut lattice, 0);
        assert_eq!(engine.state(), EngineState::Finished);
        assert_eq!(engine.step(&mut src).unwrap(), StepOutcome::Finished);
        assert_eq!(src.draws(), 0);
        drop(engine);
        assert_eq!(lattice, before);
    }

    #[test]
    fn finishes_after_requested_steps() {
        let mut lattice = seeded(9, 1);
        let mut src = FixedSource::new(0);
        let mut engine = GrowthEngine::new(&mut lattice, 3);
        for _ in 0..3 {
            assert_eq!(engine.state(), EngineState::Running);
            assert!(matches!(engine.step(&mut src).unwrap(), StepOutcome::Grew(_)));
        }
        assert_eq!(engine.state(), EngineState::Finished);
        assert_eq!(engine.step(&mut src).unwrap(), StepOutcome::Finished);
        assert_eq!(engine.steps_completed(), 3);
        assert_eq!(src.draws(), 6);
    }

    // ── Step semantics ──────────────────────────────────────────

    #[test]
    fn first_step_with_zero_source() {
        let mut lattice = seeded(7, 1);
        let cube = *lattice.cube();
        let mut engine = GrowthEngine::new(&mut lattice, 1);
        let StepOutcome::Grew(g) = engine.step(&mut FixedSource::new(0)).unwrap() else {
            panic!("expected growth");
        };
        // First frontier member in canonical order is (3,3,2); its first
        // empty neighbour in face order is +x.
        assert_eq!(g.parent, cube.index_of(&[3, 3, 2]).unwrap());
        assert_eq!(g.child, cube.index_of(&[4, 3, 2]).unwrap());
        assert_eq!(g.state, SiteState::TypeA);
        assert!(g.delta.inserted);
        assert!(g.delta.removed.is_empty());
        assert_eq!(g.frontier_len, 7);
        assert!((g.time - 1.0 / 7.0).abs() < 1e-15);
    }

    #[test]
    fn second_draw_picks_among_empty_neighbours() {
        let mut lattice = seeded(7, 1);
        let cube = *lattice.cube();
        let mut engine = GrowthEngine::new(&mut lattice, 1);
        // Parent (3,3,2) has empties +x, -x, +y, -y, -z; index 4 is -z.
        let mut src = ScriptedSource::new([0, 4]);
        let StepOutcome::Grew(g) = engine.step(&mut src).unwrap() else {
            panic!("expected growth");
        };
        assert_eq!(g.child, cube.index_of(&[3, 3, 1]).unwrap());
    }

    #[test]
    fn frontier_stays_exact() {
        let mut lattice = seeded(5, 1);
        let mut src = ScriptedSource::cycle([3, 1, 4, 1, 5, 9, 2, 6]);
        let mut engine = GrowthEngine::new(&mut lattice, 60);
        loop {
            match engine.step(&mut src) {
                Ok(StepOutcome::Grew(_)) => {
                    assert_eq!(engine.frontier().sorted(), expected_frontier(engine.lattice()));
                }
                Ok(StepOutcome::Finished) | Err(GrowthError::NoFrontier { .. }) => break,
                Err(e) => panic!("unexpected error: {e}"),
            }
        }
    }

    // ── Errors ──────────────────────────────────────────────────

    #[test]
    fn empty_frontier_is_no_frontier() {
        let mut lattice = Lattice::new(3).unwrap();
        let mut src = FixedSource::new(0);
        let mut engine = GrowthEngine::new(&mut lattice, 5);
        let err = engine.step(&mut src).unwrap_err();
        assert_eq!(err, GrowthError::NoFrontier { steps_completed: 0 });
        assert_eq!(engine.state(), EngineState::Finished);
        assert_eq!(src.draws(), 0);
    }

    #[test]
    fn fail_policy_rejects_shell_target() {
        // Radius 1 in a 3-cube reaches straight into the shell.
        let mut lattice = seeded(3, 1);
        let before = lattice.clone();
        let mut engine =
            GrowthEngine::new(&mut lattice, 1).with_boundary(BoundaryPolicy::Fail);
        let err = engine.step(&mut FixedSource::new(0)).unwrap_err();
        assert!(matches!(
            err,
            GrowthError::BoundaryExceeded {
                steps_completed: 0,
                ..
            }
        ));
        assert_eq!(engine.state(), EngineState::Finished);
        drop(engine);
        assert_eq!(lattice, before);
    }

    #[test]
    fn obstacle_policy_grows_into_shell() {
        let mut lattice = seeded(3, 1);
        let stats = run_growth(&mut lattice, 1, &mut FixedSource::new(0)).unwrap();
        assert_eq!(stats.steps_completed, 1);
        assert_eq!(lattice.occupied().len(), 8);
    }

    #[test]
    fn invalid_checkpoint_interval_rejected() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let mut lattice = seeded(5, 1);
            let err = GrowthEngine::new(&mut lattice, 1)
                .with_checkpoint_interval(bad)
                .err()
                .unwrap();
            assert!(matches!(err, ConfigError::InvalidCheckpointInterval { .. }));
        }
    }

    // ── Observers ───────────────────────────────────────────────

    #[test]
    fn observer_sees_every_growth() {
        let mut lattice = seeded(9, 1);
        let mut rec = Recorder::default();
        let stats = GrowthEngine::new(&mut lattice, 25)
            .run_observed(&mut FixedSource::new(2), &mut rec)
            .unwrap();
        assert_eq!(rec.growths.len(), 25);
        assert_eq!(stats.steps_completed, 25);
        let last = rec.growths.last().unwrap();
        assert_eq!(last.time, stats.simulated_time);
        assert_eq!(last.frontier_len, stats.frontier_len);
    }

    #[test]
    fn checkpoints_fire_per_interval() {
        let mut lattice = seeded(15, 2);
        let mut rec = Recorder::default();
        let stats = GrowthEngine::new(&mut lattice, 400)
            .with_checkpoint_interval(1.0)
            .unwrap()
            .run_observed(&mut FixedSource::new(1), &mut rec)
            .unwrap();
        assert_eq!(stats.checkpoints, rec.checkpoints.len() as u64);
        assert!(!rec.checkpoints.is_empty());
        assert!(stats.checkpoints <= stats.simulated_time.floor() as u64);
        let mut last = 0.0;
        for (i, (index, time, _)) in rec.checkpoints.iter().enumerate() {
            assert_eq!(*index, i as u64 + 1);
            assert!(time - last >= 1.0);
            last = *time;
        }
    }

    #[test]
    fn start_time_offsets_clock() {
        let mut lattice = seeded(7, 1);
        let stats = GrowthEngine::new(&mut lattice, 1)
            .with_start_time(10.0)
            .run(&mut FixedSource::new(0))
            .unwrap();
        assert!((stats.simulated_time - (10.0 + 1.0 / 7.0)).abs() < 1e-12);
    }

    #[test]
    fn checkpoint_history_continues_numbering() {
        let mut lattice = seeded(15, 2);
        let mut rng = crate::rng::SeededSource::new(3);
        let mut first = Recorder::default();
        let mut engine = GrowthEngine::new(&mut lattice, 200)
            .with_checkpoint_interval(0.5)
            .unwrap();
        engine.run_observed(&mut rng, &mut first).unwrap();
        let time = engine.time();
        let (fired, last) = engine.checkpoint_history();
        assert_eq!(fired, first.checkpoints.len() as u64);
        assert!(fired > 0);
        assert!(last <= time);

        let mut second = Recorder::default();
        let mut engine = GrowthEngine::new(&mut lattice, 200)
            .with_start_time(time)
            .with_checkpoint_history(fired, last)
            .with_checkpoint_interval(0.5)
            .unwrap();
        let stats = engine.run_observed(&mut rng, &mut second).unwrap();
        assert!(stats.checkpoints > 0);
        assert_eq!(stats.checkpoints, second.checkpoints.len() as u64);
        for (i, &(index, _, _)) in second.checkpoints.iter().enumerate() {
            assert_eq!(index, fired + 1 + i as u64);
        }
        assert!(second.checkpoints[0].1 - last >= 0.5);
        assert_eq!(engine.checkpoint_history().0, fired + stats.checkpoints);
    }
}
