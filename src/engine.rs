//! Run state machine and tick scheduling
//!
//! The engine owns the simulation state, the score tracker, the seeded
//! RNG, and the persistence store. External stimuli arrive two ways:
//! discrete events (`handle`), applied synchronously the instant they
//! arrive, and wall-clock time (`pump`), converted into fixed-period
//! ticks by an explicit timer that is armed only while a run is live.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::SimConfig;
use crate::consts::*;
use crate::score::{RunVerdict, ScoreTracker};
use crate::sim::{GamePhase, GameState, Pipe, initialize_pipes, tick};
use crate::storage::KeyValueStore;

/// Discrete input events, already stripped of any device detail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The splash screen finished (timed out or was dismissed)
    IntroEnded,
    /// Flap. Starts the run when idle; ignored on the splash screen
    /// and while frozen
    Jump,
    /// Begin a fresh run. Only meaningful while frozen
    Restart,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub bird_y: f32,
    /// Nearest pipe first
    pub pipes: Vec<Pipe>,
    pub pipe_width: f32,
    pub pipe_gap: f32,
    pub score: u32,
    pub high_score: u32,
    pub phase: GamePhase,
    /// Cosmetic emphasis flag; true while the score sits on a milestone
    pub milestone: bool,
}

/// Fixed-period tick timer
///
/// Accumulates elapsed wall-clock time and pays it out as whole ticks,
/// capped per pump so a long stall cannot trigger a catch-up spiral.
/// Armed only while the run phase is Running.
#[derive(Debug, Clone)]
struct TickTimer {
    period_ms: f64,
    accumulator_ms: f64,
    armed: bool,
}

impl TickTimer {
    fn new(period_ms: f64) -> Self {
        Self {
            period_ms,
            accumulator_ms: 0.0,
            armed: false,
        }
    }

    fn start(&mut self) {
        self.armed = true;
        self.accumulator_ms = 0.0;
    }

    fn stop(&mut self) {
        self.armed = false;
        self.accumulator_ms = 0.0;
    }

    /// Convert elapsed time into due ticks
    fn advance(&mut self, elapsed_ms: f64) -> u32 {
        if !self.armed {
            return 0;
        }
        self.accumulator_ms += elapsed_ms;
        let mut due = 0;
        while self.accumulator_ms >= self.period_ms && due < MAX_TICKS_PER_PUMP {
            self.accumulator_ms -= self.period_ms;
            due += 1;
        }
        if due == MAX_TICKS_PER_PUMP {
            // Hit the cap: drop the backlog instead of chasing it
            self.accumulator_ms = 0.0;
        }
        due
    }
}

/// The simulation engine: one run lifecycle at a time
pub struct Engine<S: KeyValueStore> {
    cfg: SimConfig,
    state: GameState,
    score: ScoreTracker,
    rng: Pcg32,
    timer: TickTimer,
    store: S,
}

impl<S: KeyValueStore> Engine<S> {
    /// Build an engine at the splash screen, loading the stored high
    /// score (missing or corrupt values default to zero)
    pub fn new(cfg: SimConfig, store: S, seed: u64) -> Self {
        let stored = store.get(HIGH_SCORE_KEY);
        let score = ScoreTracker::from_stored(stored.as_deref());
        log::info!("Engine up, high score {}", score.high());
        Self {
            cfg,
            state: GameState::new(),
            score,
            rng: Pcg32::seed_from_u64(seed),
            timer: TickTimer::new(TICK_PERIOD_MS),
            store,
        }
    }

    /// Apply a discrete input event immediately
    ///
    /// Events never queue behind the tick: a flap received between
    /// ticks moves the bird right now.
    pub fn handle(&mut self, event: GameEvent) {
        match (self.state.phase, event) {
            (GamePhase::Intro, GameEvent::IntroEnded) => {
                self.state.phase = GamePhase::Idle;
            }
            (GamePhase::Idle, GameEvent::Jump) => {
                self.begin_run();
                self.state.bird.apply_jump();
            }
            (GamePhase::Running, GameEvent::Jump) => {
                self.state.bird.apply_jump();
            }
            (GamePhase::GameOver, GameEvent::Restart) => {
                log::info!(
                    "Restart after scoring {} (verdict: {:?})",
                    self.score.current(),
                    self.score.verdict()
                );
                self.score.reset();
                self.begin_run();
            }
            // Flaps on the splash screen or while frozen, restarts
            // mid-run, and duplicate intro-end signals are all ignored
            _ => {}
        }
    }

    /// Feed elapsed wall-clock time; runs however many fixed ticks are
    /// due and returns that count. A no-op unless the phase is Running.
    pub fn pump(&mut self, elapsed_ms: f64) -> u32 {
        let due = self.timer.advance(elapsed_ms);
        let mut ran = 0;
        for _ in 0..due {
            self.step();
            ran += 1;
            if self.state.phase != GamePhase::Running {
                break;
            }
        }
        ran
    }

    /// Snapshot for the presentation layer
    pub fn snapshot(&self) -> FrameSnapshot {
        let score = self.score.current();
        FrameSnapshot {
            bird_y: self.state.bird.y,
            pipes: self.state.pipes.clone(),
            pipe_width: PIPE_WIDTH,
            pipe_gap: PIPE_GAP,
            score,
            high_score: self.score.high(),
            phase: self.state.phase,
            milestone: score > 0 && score.is_multiple_of(MILESTONE_INTERVAL),
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn score(&self) -> &ScoreTracker {
        &self.score
    }

    /// Simulation state, read-only (the demo autopilot steers off this)
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &SimConfig {
        &self.cfg
    }

    /// Verdict for the finished (or current) run
    pub fn verdict(&self) -> RunVerdict {
        self.score.verdict()
    }

    /// Reset the run-scoped state and go live: fresh bird, a new pipe
    /// batch generated at score 0, timer armed
    fn begin_run(&mut self) {
        self.state.reset_run();
        self.state.pipes = initialize_pipes(&self.cfg, self.score.current(), &mut self.rng);
        self.state.phase = GamePhase::Running;
        self.timer.start();
    }

    /// One fixed tick: simulate, then settle scoring and termination
    fn step(&mut self) {
        let outcome = tick(&mut self.state, &self.cfg, self.score.current(), &mut self.rng);

        if outcome.passed_pipe {
            let event = self.score.on_pipe_passed();
            if event.new_high {
                // Write-through on every new record; the store is
                // best-effort and the tracker stays authoritative
                self.store.set(HIGH_SCORE_KEY, &event.score.to_string());
                log::info!("New high score: {}", event.score);
            }
            if event.milestone {
                log::info!("Milestone: {}", event.score);
            }
        }

        if outcome.collided {
            self.timer.stop();
            log::info!(
                "Crash at score {} after {} ticks",
                self.score.current(),
                self.state.tick_count
            );
        }
    }
}
