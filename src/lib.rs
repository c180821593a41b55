//! Flappy Sim - a side-scrolling gap-dodging arcade simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bird physics, pipe queue, collisions)
//! - `engine`: Run state machine, tick scheduler, render-facing snapshots
//! - `config`: Data-driven game balance (viewport + difficulty curve)
//! - `score`: Score/high-score tracking and end-of-run verdicts
//! - `storage`: Key-value persistence port (LocalStorage on web)

pub mod config;
pub mod engine;
pub mod score;
pub mod sim;
pub mod storage;

pub use config::{DifficultyConfig, SimConfig};
pub use engine::{Engine, FrameSnapshot, GameEvent};
pub use score::ScoreTracker;
pub use storage::{KeyValueStore, MemoryStore};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation tick period in milliseconds
    pub const TICK_PERIOD_MS: f64 = 20.0;
    /// Maximum ticks processed per pump to prevent spiral of death
    pub const MAX_TICKS_PER_PUMP: u32 = 8;

    /// Downward position delta applied each tick (not an acceleration)
    pub const GRAVITY: f32 = 3.0;
    /// Upward position delta applied per flap (not a velocity)
    pub const JUMP_STRENGTH: f32 = 60.0;

    /// Bird hitbox - authoritative for gameplay, narrower than any sprite
    pub const BIRD_X: f32 = 50.0;
    pub const BIRD_WIDTH: f32 = 40.0;
    pub const BIRD_HEIGHT: f32 = 30.0;
    pub const BIRD_START_Y: f32 = 50.0;

    /// Pipe geometry (shared by every pipe)
    pub const PIPE_WIDTH: f32 = 80.0;
    pub const PIPE_GAP: f32 = 200.0;
    /// Number of pipes kept in flight ahead of the bird
    pub const NUM_PIPES: usize = 3;
    /// Gap tops never come closer than this to either viewport edge
    pub const GAP_MARGIN: f32 = 50.0;

    /// Score multiples that raise the cosmetic milestone flag
    pub const MILESTONE_INTERVAL: u32 = 100;

    /// Storage key for the persisted high score
    pub const HIGH_SCORE_KEY: &str = "highScore";
}
