//! Game state and core simulation types

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Current phase of a run
///
/// Exactly one phase is active at a time; every lifecycle question
/// ("is the game frozen?", "has the run started?") is answered by this
/// single variant rather than a set of flags kept in sync by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Splash screen is up; input is ignored
    Intro,
    /// Waiting for the first flap
    Idle,
    /// Active gameplay, ticks flowing
    Running,
    /// Run ended; simulation frozen until a restart
    GameOver,
}

/// The controllable bird
///
/// Holds only a vertical position. There is deliberately no stored
/// velocity: gravity and flaps are independent position deltas, which
/// produces the characteristic staircase fall and instant rise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bird {
    /// Distance from the top of the viewport to the hitbox top
    pub y: f32,
}

impl Bird {
    pub fn new() -> Self {
        Self { y: BIRD_START_Y }
    }

    /// One tick of fall, clamped at the floor
    pub fn apply_gravity(&mut self, viewport_h: f32) {
        self.y = (self.y + GRAVITY).min(viewport_h - BIRD_HEIGHT);
    }

    /// One flap of rise, clamped at the ceiling
    pub fn apply_jump(&mut self) {
        self.y = (self.y - JUMP_STRENGTH).max(0.0);
    }

    /// Floor contact counts as a crash; the ceiling is only a clamp
    pub fn on_floor(&self, viewport_h: f32) -> bool {
        self.y >= viewport_h - BIRD_HEIGHT
    }
}

impl Default for Bird {
    fn default() -> Self {
        Self::new()
    }
}

/// A pipe pair: two solid regions separated by a passable gap
///
/// `gap_top` plus the shared `PIPE_GAP` constant defines the gap band;
/// width is the shared `PIPE_WIDTH`. Pipes only ever translate left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pipe {
    /// Left edge, in viewport coordinates (may go negative while scrolling off)
    pub x: f32,
    /// Top of the passable gap
    pub gap_top: f32,
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Current phase
    pub phase: GamePhase,
    /// The bird
    pub bird: Bird,
    /// Pipes in flight, leftmost (nearest) first; always `NUM_PIPES` long
    /// while a run is active
    pub pipes: Vec<Pipe>,
    /// Simulation tick counter for the current run
    pub tick_count: u64,
}

impl GameState {
    /// Fresh state at the splash screen, before any run exists
    pub fn new() -> Self {
        Self {
            phase: GamePhase::Intro,
            bird: Bird::new(),
            pipes: Vec::new(),
            tick_count: 0,
        }
    }

    /// Reset the run-scoped parts (bird, tick counter); the caller
    /// re-seeds the pipe queue and sets the phase
    pub fn reset_run(&mut self) {
        self.bird = Bird::new();
        self.tick_count = 0;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    #[test]
    fn gravity_is_a_fixed_step() {
        let mut bird = Bird::new();
        bird.apply_gravity(720.0);
        assert_eq!(bird.y, BIRD_START_Y + GRAVITY);
    }

    #[test]
    fn gravity_clamps_at_floor_and_stays_there() {
        let viewport_h = 720.0;
        let mut bird = Bird { y: viewport_h };
        bird.apply_gravity(viewport_h);
        let floor = viewport_h - BIRD_HEIGHT;
        assert_eq!(bird.y, floor);
        // Repeated ticks at the floor are a no-op
        bird.apply_gravity(viewport_h);
        bird.apply_gravity(viewport_h);
        assert_eq!(bird.y, floor);
        assert!(bird.on_floor(viewport_h));
    }

    #[test]
    fn jump_clamps_at_ceiling() {
        let mut bird = Bird { y: 20.0 };
        bird.apply_jump();
        assert_eq!(bird.y, 0.0);
        bird.apply_jump();
        assert_eq!(bird.y, 0.0);
    }

    #[test]
    fn jump_is_a_fixed_step() {
        let mut bird = Bird { y: 300.0 };
        bird.apply_jump();
        assert_eq!(bird.y, 300.0 - JUMP_STRENGTH);
    }
}
