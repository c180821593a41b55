//! Axis-aligned collision detection
//!
//! The bird's hitbox is tested against each pipe's two solid regions
//! and against the floor. All tests use strict inequalities: rectangles
//! that merely touch along an edge do not collide.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Bird, Pipe};
use crate::config::SimConfig;
use crate::consts::*;

/// An axis-aligned rectangle, origin at the top-left
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Strict AABB overlap; shared edges do not count
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.pos.x < other.right()
            && self.right() > other.pos.x
            && self.pos.y < other.bottom()
            && self.bottom() > other.pos.y
    }
}

/// The bird's hitbox at its fixed horizontal station
pub fn bird_rect(bird: &Bird) -> Rect {
    Rect::new(BIRD_X, bird.y, BIRD_WIDTH, BIRD_HEIGHT)
}

/// The two solid regions of a pipe, top then bottom
pub fn pipe_rects(pipe: &Pipe, viewport_h: f32) -> [Rect; 2] {
    let bottom_top = pipe.gap_top + PIPE_GAP;
    [
        Rect::new(pipe.x, 0.0, PIPE_WIDTH, pipe.gap_top),
        Rect::new(pipe.x, bottom_top, PIPE_WIDTH, viewport_h - bottom_top),
    ]
}

/// True if the bird is crashing: overlapping any pipe region, or on the floor
pub fn check_collision(bird: &Bird, pipes: &[Pipe], cfg: &SimConfig) -> bool {
    if bird.on_floor(cfg.viewport_h) {
        return true;
    }
    let hitbox = bird_rect(bird);
    pipes
        .iter()
        .flat_map(|pipe| pipe_rects(pipe, cfg.viewport_h))
        .any(|region| hitbox.overlaps(&region))
}
