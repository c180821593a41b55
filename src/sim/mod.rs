//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only, passed in by the caller
//! - No rendering or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod pipes;
pub mod state;
pub mod tick;

pub use collision::{Rect, check_collision};
pub use difficulty::DifficultyConfig;
pub use pipes::{advance_pipes, initialize_pipes, recycle_pipes};
pub use state::{Bird, GamePhase, GameState, Pipe};
pub use tick::{TickOutcome, tick};
