#![forbid(unsafe_code)]

//! Side-by-side comparison driver.
//!
//! A [`Comparison`] owns one initial snapshot and two [`Lane`]s. Each lane
//! runs its own [`SortRun`] over its own copy of the snapshot; the lanes
//! share nothing mutable and are interleaved on the caller's thread by
//! [`Comparison::tick`].
//!
//! # State machine
//!
//! ```text
//!          start              pause
//!   Idle ────────▶ Running ◀────────▶ Paused
//!    ▲               │       start
//!    │ reset         │ both lanes complete
//!    └───────────── Finished
//! ```
//!
//! `reset` from any state returns to `Idle` and discards both runs. Config
//! changes that alter the sequence or the algorithms also reset. `start`
//! from `Finished` resets first and runs again.
//!
//! # Invariants
//!
//! 1. A run only ever starts from the initial snapshot, never from the last
//!    observed state.
//! 2. Pausing loses and skips no step; the final step is the same as for an
//!    uninterrupted run.
//! 3. Elapsed time only accumulates while `Running`.
//! 4. Each lane reports completion exactly once per run.

use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::algorithm::AlgorithmId;
use crate::config::VisualizerConfig;
use crate::distribution::{Distribution, generate_with};
use crate::element::{Element, Metrics, Step};
use crate::engine::{self, SortRun};
use crate::pacing::Pacer;
use crate::stopwatch::Stopwatch;
use crate::tone::{SilentBackend, ToneBackend, ToneChannel};

// ---------------------------------------------------------------------------
// Identifiers
// ---------------------------------------------------------------------------

/// Which of the two lanes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LaneId {
    /// The first lane. Its steps drive the tone channel.
    A,
    /// The second lane.
    B,
}

impl LaneId {
    /// Both lanes, in display order.
    pub const BOTH: [LaneId; 2] = [LaneId::A, LaneId::B];

    #[inline]
    const fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
        }
    }
}

/// Session status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    /// Showing the initial snapshot; no runs exist.
    #[default]
    Idle,
    /// Lanes are consuming steps.
    Running,
    /// Runs are suspended at a yield boundary.
    Paused,
    /// Both lanes have completed.
    Finished,
}

// ---------------------------------------------------------------------------
// Lane
// ---------------------------------------------------------------------------

/// What a single lane did during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LaneEvent {
    /// Not enough time has passed, or the lane is already complete.
    Waiting,
    /// A step was consumed.
    Stepped,
    /// The final step was consumed. Reported once per run.
    Completed,
}

/// One algorithm slot of a comparison.
#[derive(Debug)]
pub struct Lane {
    algorithm: AlgorithmId,
    run: Option<SortRun>,
    current: Step,
    stopwatch: Stopwatch,
    pacer: Pacer,
    complete: bool,
}

impl Lane {
    fn new(algorithm: AlgorithmId, initial: &[Element], speed: u32) -> Self {
        Self {
            algorithm,
            run: None,
            current: Step::initial(initial),
            stopwatch: Stopwatch::new(),
            pacer: Pacer::new(speed),
            complete: false,
        }
    }

    /// The algorithm this lane runs.
    #[must_use]
    pub fn algorithm(&self) -> AlgorithmId {
        self.algorithm
    }

    /// The most recently consumed step, or the initial snapshot.
    #[must_use]
    pub fn step(&self) -> &Step {
        &self.current
    }

    /// Elements of the current step.
    #[must_use]
    pub fn elements(&self) -> &[Element] {
        self.current.elements()
    }

    /// Whether the lane's run has handed out its final step.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Metrics derived from the steps consumed so far.
    #[must_use]
    pub fn metrics(&self) -> Metrics {
        Metrics {
            comparisons: self.current.comparisons(),
            time_elapsed: self.stopwatch.elapsed(),
            is_complete: self.complete,
        }
    }

    /// Panel title, e.g. `"Bubble Sort: Sorting 30 Elements"`.
    #[must_use]
    pub fn title(&self) -> String {
        format!(
            "{}: Sorting {} Elements",
            self.algorithm.display_name(),
            self.current.len()
        )
    }

    /// Completion summary, once the lane is complete.
    #[must_use]
    pub fn summary(&self) -> Option<String> {
        if !self.complete {
            return None;
        }
        let m = self.metrics();
        Some(format!(
            "{} finished sorting {} elements. Comparisons: {}, Time: {:.2} seconds.",
            self.algorithm.display_name(),
            self.current.len(),
            m.comparisons,
            m.time_elapsed_seconds()
        ))
    }

    fn begin(&mut self, initial: &[Element]) {
        self.restore(initial);
        self.run = Some(engine::run(self.algorithm, initial));
        self.stopwatch.start();
    }

    fn restore(&mut self, initial: &[Element]) {
        self.run = None;
        self.current = Step::initial(initial);
        self.stopwatch.reset();
        self.pacer.reset();
        self.complete = false;
    }

    fn resume(&mut self) {
        if !self.complete {
            self.stopwatch.start();
        }
    }

    fn hold(&mut self) {
        self.stopwatch.stop();
    }

    fn tick(&mut self, dt: Duration) -> LaneEvent {
        if self.complete {
            return LaneEvent::Waiting;
        }
        let Some(run) = self.run.as_mut() else {
            return LaneEvent::Waiting;
        };
        self.stopwatch.tick(dt);
        if !self.pacer.tick(dt) {
            return LaneEvent::Waiting;
        }
        match run.next() {
            Some(step) => {
                self.current = step;
                if run.is_finished() {
                    self.finish()
                } else {
                    LaneEvent::Stepped
                }
            }
            None => self.finish(),
        }
    }

    fn finish(&mut self) -> LaneEvent {
        self.complete = true;
        self.stopwatch.stop();
        crate::info!(
            algorithm = self.algorithm.id(),
            comparisons = self.current.comparisons(),
            elapsed_ms = self.stopwatch.elapsed().as_millis() as u64,
            "lane complete"
        );
        LaneEvent::Completed
    }
}

// ---------------------------------------------------------------------------
// Comparison
// ---------------------------------------------------------------------------

/// Two algorithms racing over the same initial snapshot.
pub struct Comparison {
    config: VisualizerConfig,
    initial: Vec<Element>,
    lanes: [Lane; 2],
    status: Status,
    rng: StdRng,
    tone_backend: Box<dyn ToneBackend>,
    tone: Option<ToneChannel>,
}

impl Comparison {
    /// Create a session with the silent tone backend and an entropy-seeded RNG.
    #[must_use]
    pub fn new(config: VisualizerConfig) -> Self {
        Self::build(config, StdRng::from_entropy(), Box::new(SilentBackend))
    }

    /// Create a session whose random sequences are reproducible.
    #[must_use]
    pub fn with_seed(config: VisualizerConfig, seed: u64) -> Self {
        Self::build(config, StdRng::seed_from_u64(seed), Box::new(SilentBackend))
    }

    /// Replace the tone backend. Reopens the channel if sound is enabled.
    #[must_use]
    pub fn with_tone_backend(mut self, backend: Box<dyn ToneBackend>) -> Self {
        self.tone = None;
        self.tone_backend = backend;
        let enabled = self.config.sound_enabled;
        self.set_sound(enabled);
        self
    }

    fn build(config: VisualizerConfig, mut rng: StdRng, backend: Box<dyn ToneBackend>) -> Self {
        let config = config.clamped();
        let initial = generate_with(config.size, config.distribution, &mut rng);
        let lanes = [
            Lane::new(config.algorithm_a, &initial, config.speed),
            Lane::new(config.algorithm_b, &initial, config.speed),
        ];
        let mut session = Self {
            config,
            initial,
            lanes,
            status: Status::Idle,
            rng,
            tone_backend: backend,
            tone: None,
        };
        let enabled = session.config.sound_enabled;
        session.set_sound(enabled);
        session
    }

    // -- Accessors ----------------------------------------------------------

    /// Current (clamped) configuration.
    #[must_use]
    pub fn config(&self) -> &VisualizerConfig {
        &self.config
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// The snapshot every run starts from.
    #[must_use]
    pub fn initial(&self) -> &[Element] {
        &self.initial
    }

    /// One lane.
    #[must_use]
    pub fn lane(&self, id: LaneId) -> &Lane {
        &self.lanes[id.index()]
    }

    /// Whether both lanes have completed.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status == Status::Finished
    }

    /// Whether a tone channel is currently held.
    #[must_use]
    pub fn sound_active(&self) -> bool {
        self.tone.is_some()
    }

    // -- Controls -----------------------------------------------------------

    /// Start fresh runs, or resume if paused.
    pub fn start(&mut self) {
        match self.status {
            Status::Running => {}
            Status::Paused => {
                for lane in &mut self.lanes {
                    lane.resume();
                }
                self.set_status(Status::Running);
            }
            Status::Finished => {
                self.reset();
                self.start();
            }
            Status::Idle => {
                for lane in &mut self.lanes {
                    lane.begin(&self.initial);
                }
                self.set_status(Status::Running);
            }
        }
    }

    /// Suspend step consumption. Only meaningful while running.
    pub fn pause(&mut self) {
        if self.status != Status::Running {
            return;
        }
        for lane in &mut self.lanes {
            lane.hold();
        }
        self.set_status(Status::Paused);
    }

    /// Discard both runs and show the initial snapshot again.
    pub fn reset(&mut self) {
        for lane in &mut self.lanes {
            lane.restore(&self.initial);
        }
        self.set_status(Status::Idle);
    }

    /// Change the element count. Regenerates the snapshot and resets.
    pub fn set_size(&mut self, size: usize) {
        self.config.size = size;
        self.config = self.config.clone().clamped();
        self.regenerate();
    }

    /// Change the distribution. Regenerates the snapshot and resets.
    pub fn set_distribution(&mut self, distribution: Distribution) {
        self.config.distribution = distribution;
        self.regenerate();
    }

    /// Change one lane's algorithm. Both lanes reset so they start together.
    pub fn set_algorithm(&mut self, lane: LaneId, algorithm: AlgorithmId) {
        match lane {
            LaneId::A => self.config.algorithm_a = algorithm,
            LaneId::B => self.config.algorithm_b = algorithm,
        }
        self.lanes[lane.index()].algorithm = algorithm;
        self.reset();
    }

    /// Change the pacing speed without resetting.
    pub fn set_speed(&mut self, speed: u32) {
        self.config.speed = speed;
        self.config = self.config.clone().clamped();
        for lane in &mut self.lanes {
            lane.pacer.set_speed(self.config.speed);
        }
    }

    /// Enable or disable the tone channel.
    ///
    /// Enabling acquires a sink from the backend; if that fails the error
    /// is logged and sound stays off. Disabling drops the sink.
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    pub fn set_sound(&mut self, enabled: bool) {
        if !enabled {
            self.tone = None;
            self.config.sound_enabled = false;
            return;
        }
        if self.tone.is_some() {
            return;
        }
        match ToneChannel::open(self.tone_backend.as_ref()) {
            Ok(channel) => {
                self.tone = Some(channel);
                self.config.sound_enabled = true;
            }
            Err(err) => {
                crate::warn!(error = %err, "sound disabled: tone backend unavailable");
                self.config.sound_enabled = false;
            }
        }
    }

    /// Advance both lanes by `dt`. Returns how many steps were consumed.
    pub fn tick(&mut self, dt: Duration) -> usize {
        if self.status != Status::Running {
            return 0;
        }
        let mut consumed = 0;
        for (idx, lane) in self.lanes.iter_mut().enumerate() {
            match lane.tick(dt) {
                LaneEvent::Waiting => continue,
                LaneEvent::Stepped | LaneEvent::Completed => consumed += 1,
            }
            // Only the first lane is audible.
            if idx == LaneId::A.index()
                && let Some(tone) = self.tone.as_mut()
            {
                tone.emit_for(&lane.current);
            }
        }
        if self.lanes.iter().all(Lane::is_complete) {
            self.set_status(Status::Finished);
        }
        consumed
    }

    fn regenerate(&mut self) {
        self.initial = generate_with(self.config.size, self.config.distribution, &mut self.rng);
        crate::debug!(
            size = self.config.size,
            distribution = self.config.distribution.id(),
            "initial sequence regenerated"
        );
        self.reset();
    }

    fn set_status(&mut self, status: Status) {
        if self.status != status {
            crate::info!(from = ?self.status, to = ?status, "comparison status");
            self.status = status;
        }
    }
}

impl std::fmt::Debug for Comparison {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Comparison")
            .field("config", &self.config)
            .field("status", &self.status)
            .field("lanes", &self.lanes)
            .field("sound_active", &self.tone.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEP: Duration = Duration::from_millis(10);

    fn config(a: AlgorithmId, b: AlgorithmId, distribution: Distribution) -> VisualizerConfig {
        VisualizerConfig {
            algorithm_a: a,
            algorithm_b: b,
            size: 10,
            distribution,
            speed: 50,
            sound_enabled: false,
        }
    }

    #[test]
    fn new_session_is_idle_with_initial_snapshot() {
        let s = Comparison::new(config(
            AlgorithmId::Bubble,
            AlgorithmId::Quick,
            Distribution::Descending,
        ));
        assert_eq!(s.status(), Status::Idle);
        assert_eq!(s.lane(LaneId::A).step().values(), s.lane(LaneId::B).step().values());
        assert_eq!(s.lane(LaneId::A).metrics(), Metrics::default());
    }

    #[test]
    fn tick_does_nothing_until_started() {
        let mut s = Comparison::new(VisualizerConfig::default());
        assert_eq!(s.tick(Duration::from_secs(1)), 0);
        assert_eq!(s.lane(LaneId::A).metrics().comparisons, 0);
    }

    #[test]
    fn one_step_per_lane_per_delay() {
        let mut s = Comparison::new(config(
            AlgorithmId::Bubble,
            AlgorithmId::Bubble,
            Distribution::Descending,
        ));
        s.start();
        assert_eq!(s.tick(Duration::from_millis(5)), 0);
        assert_eq!(s.tick(Duration::from_millis(5)), 2);
        assert_eq!(s.lane(LaneId::A).metrics().comparisons, 1);
    }

    #[test]
    fn title_and_summary() {
        let mut s = Comparison::new(config(
            AlgorithmId::Insertion,
            AlgorithmId::Heap,
            Distribution::Ascending,
        ));
        assert_eq!(s.lane(LaneId::A).title(), "Insertion Sort: Sorting 10 Elements");
        assert!(s.lane(LaneId::A).summary().is_none());
        s.start();
        while !s.is_finished() {
            s.tick(STEP);
        }
        let summary = s.lane(LaneId::A).summary().unwrap();
        assert!(summary.starts_with("Insertion Sort finished sorting 10 elements. Comparisons: 9,"));
        assert!(summary.ends_with("seconds."));
    }

    #[test]
    fn config_changes_reset() {
        let mut s = Comparison::new(config(
            AlgorithmId::Bubble,
            AlgorithmId::Quick,
            Distribution::Descending,
        ));
        s.start();
        s.tick(STEP);
        s.set_distribution(Distribution::Ascending);
        assert_eq!(s.status(), Status::Idle);
        assert_eq!(s.initial()[0].value, 1);

        s.start();
        s.tick(STEP);
        s.set_size(3);
        assert_eq!(s.status(), Status::Idle);
        assert_eq!(s.initial().len(), 10, "size is clamped to the minimum");

        s.start();
        s.set_algorithm(LaneId::B, AlgorithmId::Merge);
        assert_eq!(s.status(), Status::Idle);
        assert_eq!(s.lane(LaneId::B).algorithm(), AlgorithmId::Merge);
        assert_eq!(s.config().algorithm_b, AlgorithmId::Merge);
    }

    #[test]
    fn speed_change_keeps_running() {
        let mut s = Comparison::new(config(
            AlgorithmId::Bubble,
            AlgorithmId::Quick,
            Distribution::Descending,
        ));
        s.start();
        s.set_speed(100);
        assert_eq!(s.status(), Status::Running);
        assert_eq!(s.tick(Duration::from_millis(5)), 2);
        s.set_speed(0);
        assert_eq!(s.config().speed, 1);
    }

    #[test]
    fn seeded_sessions_share_initial_snapshot() {
        let a = Comparison::with_seed(VisualizerConfig::default(), 9);
        let b = Comparison::with_seed(VisualizerConfig::default(), 9);
        assert_eq!(a.initial(), b.initial());
    }
}
