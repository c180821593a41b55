//! Data-driven game balance
//!
//! Viewport dimensions plus the difficulty curve parameters, bundled so
//! a host can load the whole balance sheet from JSON. Read once at
//! engine construction; nothing is live-tuned mid-run.

use serde::{Deserialize, Serialize};

use crate::consts::*;
pub use crate::sim::difficulty::DifficultyConfig;

/// Simulation configuration, fixed for the lifetime of an engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Viewport width in position units
    pub viewport_w: f32,
    /// Viewport height in position units
    pub viewport_h: f32,
    /// Difficulty curve parameters
    pub difficulty: DifficultyConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            viewport_w: 1280.0,
            viewport_h: 720.0,
            difficulty: DifficultyConfig::default(),
        }
    }
}

impl SimConfig {
    /// Parse a balance sheet from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Highest bird position that still touches the floor
    pub fn floor_y(&self) -> f32 {
        self.viewport_h - BIRD_HEIGHT
    }

    /// Valid range for a pipe's gap top, inclusive on both ends
    pub fn gap_top_range(&self) -> (f32, f32) {
        (GAP_MARGIN, self.viewport_h - PIPE_GAP - GAP_MARGIN)
    }

    /// Gap top that centers the gap vertically in the viewport
    pub fn centered_gap_top(&self) -> f32 {
        (self.viewport_h - PIPE_GAP) / 2.0
    }
}
