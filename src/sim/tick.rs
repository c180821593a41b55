//! Fixed timestep simulation tick
//!
//! One tick applies gravity, scrolls the pipes, recycles the lead pipe
//! if it left the screen, and checks for a crash - in that order. Ticks
//! only run while the phase is Running.

use rand::Rng;

use super::collision::check_collision;
use super::pipes::{advance_pipes, recycle_pipes};
use super::state::{GamePhase, GameState};
use crate::config::SimConfig;

/// What a single tick produced, for the caller to act on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// The lead pipe was recycled this tick: a scoring event
    pub passed_pipe: bool,
    /// The bird crashed this tick; the state is now GameOver
    pub collided: bool,
}

/// Advance the simulation by one fixed tick
///
/// `score` is the run's current score, used to evaluate the difficulty
/// curve for scroll speed and recycled-pipe placement. On a crash the
/// phase flips to GameOver and the state stops mutating on later calls.
pub fn tick(
    state: &mut GameState,
    cfg: &SimConfig,
    score: u32,
    rng: &mut impl Rng,
) -> TickOutcome {
    if state.phase != GamePhase::Running {
        return TickOutcome::default();
    }

    state.tick_count += 1;
    state.bird.apply_gravity(cfg.viewport_h);
    advance_pipes(&mut state.pipes, cfg.difficulty.speed(score));
    let passed_pipe = recycle_pipes(&mut state.pipes, cfg, score, rng);

    let collided = check_collision(&state.bird, &state.pipes, cfg);
    if collided {
        state.phase = GamePhase::GameOver;
    }

    TickOutcome {
        passed_pipe,
        collided,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::pipes::initialize_pipes;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn running_state(cfg: &SimConfig, rng: &mut Pcg32) -> GameState {
        let mut state = GameState::new();
        state.phase = GamePhase::Running;
        state.pipes = initialize_pipes(cfg, 0, rng);
        state
    }

    #[test]
    fn tick_is_a_no_op_outside_running() {
        let cfg = SimConfig::default();
        let mut rng = Pcg32::seed_from_u64(3);
        for phase in [GamePhase::Intro, GamePhase::Idle, GamePhase::GameOver] {
            let mut state = running_state(&cfg, &mut rng);
            state.phase = phase;
            let before = state.clone();
            let outcome = tick(&mut state, &cfg, 0, &mut rng);
            assert_eq!(outcome, TickOutcome::default());
            assert_eq!(state.bird, before.bird);
            assert_eq!(state.pipes, before.pipes);
            assert_eq!(state.tick_count, before.tick_count);
        }
    }

    #[test]
    fn tick_applies_gravity_and_scrolls() {
        let cfg = SimConfig::default();
        let mut rng = Pcg32::seed_from_u64(3);
        let mut state = running_state(&cfg, &mut rng);
        let bird_y = state.bird.y;
        let pipe_x = state.pipes[0].x;
        tick(&mut state, &cfg, 0, &mut rng);
        assert_eq!(state.bird.y, bird_y + GRAVITY);
        assert_eq!(state.pipes[0].x, pipe_x - cfg.difficulty.speed(0));
        assert_eq!(state.tick_count, 1);
    }

    #[test]
    fn recycle_reports_a_scoring_event() {
        let cfg = SimConfig::default();
        let mut rng = Pcg32::seed_from_u64(3);
        let mut state = running_state(&cfg, &mut rng);
        // Park the lead pipe so this tick's scroll pushes it past the edge
        state.pipes[0].x = -PIPE_WIDTH + cfg.difficulty.speed(0);
        let outcome = tick(&mut state, &cfg, 0, &mut rng);
        assert!(outcome.passed_pipe);
        assert_eq!(state.pipes.len(), NUM_PIPES);
    }

    #[test]
    fn crash_freezes_the_run() {
        let cfg = SimConfig::default();
        let mut rng = Pcg32::seed_from_u64(3);
        let mut state = running_state(&cfg, &mut rng);
        state.bird.y = cfg.floor_y() - 1.0; // gravity lands it on the floor
        let outcome = tick(&mut state, &cfg, 0, &mut rng);
        assert!(outcome.collided);
        assert_eq!(state.phase, GamePhase::GameOver);

        // Further ticks leave the frozen state untouched
        let frozen = state.clone();
        tick(&mut state, &cfg, 0, &mut rng);
        assert_eq!(state.bird, frozen.bird);
        assert_eq!(state.pipes, frozen.pipes);
    }
}
