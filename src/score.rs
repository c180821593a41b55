//! Score and high-score tracking
//!
//! The tracker is pure bookkeeping; the engine performs the actual
//! store write the moment a new record is reported.

use serde::{Deserialize, Serialize};

use crate::consts::MILESTONE_INTERVAL;

/// Result of a single scoring event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreEvent {
    /// Score after the increment
    pub score: u32,
    /// This increment set a new record; persist it now
    pub new_high: bool,
    /// The new score is a milestone multiple (cosmetic only)
    pub milestone: bool,
}

/// End-of-run verdict for the game-over board
///
/// Judged against the high score as it stood when the run started, so
/// a run that just set the record still reads as a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunVerdict {
    /// Scored nothing at all
    Oops,
    /// Beat the previous high score
    NewHighScore,
    /// Within 80% of the previous high
    SoClose,
    /// Over half of the previous high
    Great,
    /// Over 30% of the previous high
    Nice,
    KeepPracticing,
}

impl RunVerdict {
    pub fn message(&self) -> &'static str {
        match self {
            RunVerdict::Oops => "Oops! Better luck next time!",
            RunVerdict::NewHighScore => "Wow! New high score!",
            RunVerdict::SoClose => "So close to the high score!",
            RunVerdict::Great => "Great job!",
            RunVerdict::Nice => "Nice try!",
            RunVerdict::KeepPracticing => "Keep practicing!",
        }
    }
}

/// Current score, the all-time record, and the record as of run start
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreTracker {
    current: u32,
    high: u32,
    previous_high: u32,
}

impl ScoreTracker {
    /// Initialize from whatever the store held; missing or corrupt
    /// values fall back to zero rather than failing the engine
    pub fn from_stored(stored: Option<&str>) -> Self {
        let high = match stored {
            None => 0,
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                log::warn!("Ignoring corrupt stored high score {raw:?}");
                0
            }),
        };
        Self {
            current: 0,
            high,
            previous_high: high,
        }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn high(&self) -> u32 {
        self.high
    }

    pub fn previous_high(&self) -> u32 {
        self.previous_high
    }

    /// One pipe cleared: bump the score and update the record if beaten
    pub fn on_pipe_passed(&mut self) -> ScoreEvent {
        self.current += 1;
        let new_high = self.current > self.high;
        if new_high {
            self.high = self.current;
        }
        ScoreEvent {
            score: self.current,
            new_high,
            milestone: self.current.is_multiple_of(MILESTONE_INTERVAL),
        }
    }

    /// New run: zero the score, snapshot the record for commentary.
    /// The record itself is never reset.
    pub fn reset(&mut self) {
        self.previous_high = self.high;
        self.current = 0;
    }

    /// Verdict for the run as it stands now
    pub fn verdict(&self) -> RunVerdict {
        let score = self.current as f32;
        let prev = self.previous_high as f32;
        if self.current == 0 {
            RunVerdict::Oops
        } else if score > prev {
            RunVerdict::NewHighScore
        } else if score > prev * 0.8 {
            RunVerdict::SoClose
        } else if score > prev * 0.5 {
            RunVerdict::Great
        } else if score > prev * 0.3 {
            RunVerdict::Nice
        } else {
            RunVerdict::KeepPracticing
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker_at(current: u32, high: u32) -> ScoreTracker {
        let mut t = ScoreTracker::from_stored(Some(&high.to_string()));
        for _ in 0..current {
            t.on_pipe_passed();
        }
        t
    }

    #[test]
    fn missing_store_defaults_to_zero() {
        let t = ScoreTracker::from_stored(None);
        assert_eq!(t.high(), 0);
        assert_eq!(t.previous_high(), 0);
    }

    #[test]
    fn corrupt_store_defaults_to_zero() {
        let t = ScoreTracker::from_stored(Some("not a number"));
        assert_eq!(t.high(), 0);
    }

    #[test]
    fn stored_value_seeds_both_high_and_previous_high() {
        let t = ScoreTracker::from_stored(Some("57"));
        assert_eq!(t.high(), 57);
        assert_eq!(t.previous_high(), 57);
        assert_eq!(t.current(), 0);
    }

    #[test]
    fn passing_a_pipe_increments_and_beats_the_record() {
        let mut t = tracker_at(40, 40);
        let event = t.on_pipe_passed();
        assert_eq!(event.score, 41);
        assert!(event.new_high);
        assert_eq!(t.high(), 41);
    }

    #[test]
    fn record_updates_the_instant_it_is_exceeded() {
        let mut t = tracker_at(0, 3);
        assert!(!t.on_pipe_passed().new_high); // 1
        assert!(!t.on_pipe_passed().new_high); // 2
        assert!(!t.on_pipe_passed().new_high); // 3 ties, no record
        assert!(t.on_pipe_passed().new_high); // 4 beats it
        assert_eq!(t.high(), 4);
    }

    #[test]
    fn milestone_fires_on_the_interval() {
        let mut t = tracker_at(MILESTONE_INTERVAL - 1, 0);
        let event = t.on_pipe_passed();
        assert!(event.milestone);
        assert!(!t.on_pipe_passed().milestone);
    }

    #[test]
    fn reset_snapshots_the_record_and_keeps_it() {
        let mut t = tracker_at(57, 0);
        assert_eq!(t.high(), 57);
        t.reset();
        assert_eq!(t.current(), 0);
        assert_eq!(t.previous_high(), 57);
        assert_eq!(t.high(), 57);
    }

    #[test]
    fn verdict_thresholds() {
        assert_eq!(tracker_at(0, 100).verdict(), RunVerdict::Oops);
        assert_eq!(tracker_at(101, 100).verdict(), RunVerdict::NewHighScore);
        assert_eq!(tracker_at(90, 100).verdict(), RunVerdict::SoClose);
        assert_eq!(tracker_at(60, 100).verdict(), RunVerdict::Great);
        assert_eq!(tracker_at(35, 100).verdict(), RunVerdict::Nice);
        assert_eq!(tracker_at(10, 100).verdict(), RunVerdict::KeepPracticing);
    }
}
