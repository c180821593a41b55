//! Headless demo: an autopilot plays a few runs and logs the results
//!
//! Useful for eyeballing the difficulty curve and the engine lifecycle
//! without any frontend. The autopilot flaps whenever the bird sits
//! below the center of the next gap it has to thread.

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use flappy_sim::consts::*;
    use flappy_sim::sim::GamePhase;
    use flappy_sim::{Engine, GameEvent, MemoryStore, SimConfig};

    /// Ticks across all runs before the demo gives up
    const TICK_BUDGET: u64 = 2_000_000;

    /// Flap if the bird's hitbox center is below the next gap's center
    fn autopilot_wants_jump(engine: &Engine<MemoryStore>) -> bool {
        let bird_center = engine.state().bird.y + BIRD_HEIGHT / 2.0;
        let next_gap = engine
            .state()
            .pipes
            .iter()
            .find(|pipe| pipe.x + PIPE_WIDTH > BIRD_X)
            .map(|pipe| pipe.gap_top + PIPE_GAP / 2.0);
        match next_gap {
            Some(gap_center) => bird_center > gap_center,
            None => bird_center > engine.config().viewport_h / 2.0,
        }
    }

    pub fn run() {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .init();

        let runs: u32 = std::env::args()
            .nth(1)
            .and_then(|arg| arg.parse().ok())
            .unwrap_or(5);

        let mut engine = Engine::new(SimConfig::default(), MemoryStore::new(), 0xF1AB);
        engine.handle(GameEvent::IntroEnded);
        engine.handle(GameEvent::Jump);

        let mut completed = 0;
        let mut ticks: u64 = 0;
        while completed < runs && ticks < TICK_BUDGET {
            if engine.phase() == GamePhase::GameOver {
                let snap = engine.snapshot();
                log::info!(
                    "Run {} over: score {}, high score {} - {}",
                    completed + 1,
                    snap.score,
                    snap.high_score,
                    engine.verdict().message()
                );
                completed += 1;
                if completed < runs {
                    engine.handle(GameEvent::Restart);
                }
                continue;
            }

            if autopilot_wants_jump(&engine) {
                engine.handle(GameEvent::Jump);
            }
            ticks += u64::from(engine.pump(TICK_PERIOD_MS));
        }

        let snap = engine.snapshot();
        println!("{} runs complete, best score {}", completed, snap.high_score);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    demo::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The wasm surface is the library; hosts drive the engine directly.
}
