//! Pipe queue: generation, scrolling, and recycling
//!
//! A fixed-length queue of pipes scrolls left; when the lead pipe is
//! fully off-screen it is recycled into a fresh trailing pipe. Gap
//! placement is a bounded random walk: each new gap is drawn near the
//! previous one, so two consecutive gaps can never sit at opposite
//! viewport extremes.

use rand::Rng;

use super::state::Pipe;
use crate::config::SimConfig;
use crate::consts::*;

/// Draw the next gap top near `anchor`, clamped to the valid band
fn walk_gap_top(cfg: &SimConfig, anchor: f32, variance: f32, rng: &mut impl Rng) -> f32 {
    let (lo, hi) = cfg.gap_top_range();
    rng.random_range(anchor - variance..=anchor + variance).clamp(lo, hi)
}

/// Build the initial queue of `NUM_PIPES` pipes ahead of the right edge
///
/// Spacing and variance are evaluated once, at the score the run starts
/// with, for the whole batch. The walk is anchored at the vertically
/// centered gap, so the first pipe lands near the middle of the screen.
pub fn initialize_pipes(cfg: &SimConfig, score: u32, rng: &mut impl Rng) -> Vec<Pipe> {
    let spacing = cfg.difficulty.spacing(score);
    let variance = cfg.difficulty.variance(score);

    let mut anchor = cfg.centered_gap_top();
    let mut pipes = Vec::with_capacity(NUM_PIPES);
    for i in 0..NUM_PIPES {
        let gap_top = walk_gap_top(cfg, anchor, variance, rng);
        anchor = gap_top;
        pipes.push(Pipe {
            x: cfg.viewport_w + i as f32 * spacing,
            gap_top,
        });
    }
    pipes
}

/// Scroll every pipe left by `speed` position units
pub fn advance_pipes(pipes: &mut [Pipe], speed: f32) {
    for pipe in pipes {
        pipe.x -= speed;
    }
}

/// Recycle the lead pipe once it has fully scrolled off the left edge
///
/// The replacement is appended one spacing interval behind the current
/// rearmost pipe, with spacing and variance taken from the live score.
/// Its gap walks from the removed pipe's gap top. At most one pipe is
/// recycled per call, so the queue length never changes. Returns true
/// if a pipe was recycled, which is the scoring event.
pub fn recycle_pipes(
    pipes: &mut Vec<Pipe>,
    cfg: &SimConfig,
    score: u32,
    rng: &mut impl Rng,
) -> bool {
    let Some(front) = pipes.first() else {
        return false;
    };
    if front.x > -PIPE_WIDTH {
        return false;
    }

    let removed = pipes.remove(0);
    let back_x = pipes.last().map(|p| p.x).unwrap_or(cfg.viewport_w);
    let gap_top = walk_gap_top(cfg, removed.gap_top, cfg.difficulty.variance(score), rng);
    pipes.push(Pipe {
        x: back_x + cfg.difficulty.spacing(score),
        gap_top,
    });
    debug_assert_eq!(pipes.len(), NUM_PIPES, "pipe queue length must stay fixed");
    true
}
