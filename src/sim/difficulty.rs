//! Difficulty curve: pure step functions of the current score
//!
//! The game only ever hardens as the score grows. Speed steps up,
//! spacing steps down toward a floor, gap variance steps up toward a
//! ceiling. Nothing here reads any state besides the score passed in.

use serde::{Deserialize, Serialize};

/// Parameters of the three difficulty step functions
///
/// Data-driven so balance tweaks never touch simulation code. Defaults
/// reproduce the classic feel: speed +0.75 every 10 points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifficultyConfig {
    /// Pipe scroll speed at score 0, in position units per tick
    pub base_speed: f32,
    /// Points between speed increases
    pub speed_interval: u32,
    /// Speed added per interval
    pub speed_step: f32,

    /// Horizontal distance between consecutive pipes at score 0
    pub base_spacing: f32,
    /// Points between spacing reductions
    pub spacing_interval: u32,
    /// Spacing removed per interval
    pub spacing_step: f32,
    /// Spacing never drops below this
    pub min_spacing: f32,

    /// Gap random-walk half-window at score 0
    pub base_variance: f32,
    /// Points between variance increases
    pub variance_interval: u32,
    /// Variance added per interval
    pub variance_step: f32,
    /// Variance never rises above this
    pub max_variance: f32,
}

impl Default for DifficultyConfig {
    fn default() -> Self {
        Self {
            base_speed: 5.0,
            speed_interval: 10,
            speed_step: 0.75,

            base_spacing: 400.0,
            spacing_interval: 20,
            spacing_step: 12.5,
            min_spacing: 260.0,

            base_variance: 120.0,
            variance_interval: 15,
            variance_step: 20.0,
            max_variance: 240.0,
        }
    }
}

impl DifficultyConfig {
    /// Scroll speed at the given score (non-decreasing, unbounded)
    pub fn speed(&self, score: u32) -> f32 {
        self.base_speed + (score / self.speed_interval) as f32 * self.speed_step
    }

    /// Pipe spacing at the given score (non-increasing, floored)
    pub fn spacing(&self, score: u32) -> f32 {
        let reduced =
            self.base_spacing - (score / self.spacing_interval) as f32 * self.spacing_step;
        reduced.max(self.min_spacing)
    }

    /// Gap-walk variance at the given score (non-decreasing, capped)
    pub fn variance(&self, score: u32) -> f32 {
        let grown =
            self.base_variance + (score / self.variance_interval) as f32 * self.variance_step;
        grown.min(self.max_variance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn speed_matches_classic_curve() {
        let cfg = DifficultyConfig::default();
        assert_eq!(cfg.speed(0), 5.0);
        assert_eq!(cfg.speed(9), 5.0);
        assert_eq!(cfg.speed(10), 5.75);
        assert_eq!(cfg.speed(25), 6.5);
    }

    #[test]
    fn spacing_hits_its_floor() {
        let cfg = DifficultyConfig::default();
        assert_eq!(cfg.spacing(0), 400.0);
        assert_eq!(cfg.spacing(100_000), cfg.min_spacing);
    }

    #[test]
    fn variance_hits_its_cap() {
        let cfg = DifficultyConfig::default();
        assert_eq!(cfg.variance(0), 120.0);
        assert_eq!(cfg.variance(100_000), cfg.max_variance);
    }

    proptest! {
        #[test]
        fn speed_steps_by_exactly_one_step_per_interval(score in 0u32..100_000) {
            let cfg = DifficultyConfig::default();
            let next = cfg.speed(score + cfg.speed_interval);
            prop_assert!((next - (cfg.speed(score) + cfg.speed_step)).abs() < 1e-3);
        }

        #[test]
        fn spacing_is_non_increasing_and_floored(score in 0u32..100_000) {
            let cfg = DifficultyConfig::default();
            prop_assert!(cfg.spacing(score + 1) <= cfg.spacing(score));
            prop_assert!(cfg.spacing(score) >= cfg.min_spacing);
        }

        #[test]
        fn variance_is_non_decreasing_and_capped(score in 0u32..100_000) {
            let cfg = DifficultyConfig::default();
            prop_assert!(cfg.variance(score + 1) >= cfg.variance(score));
            prop_assert!(cfg.variance(score) <= cfg.max_variance);
        }

        #[test]
        fn speed_never_decreases(score in 0u32..100_000) {
            let cfg = DifficultyConfig::default();
            prop_assert!(cfg.speed(score + 1) >= cfg.speed(score));
        }
    }
}
