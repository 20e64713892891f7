//! Playfield bounds

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};

/// The rectangle `[0, width) x [0, height)` every entity lives in.
///
/// Positions are the top-left corner of an axis-aligned box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Default for Playfield {
    fn default() -> Self {
        Self::new(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT)
    }
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Top-left position that centers a box of `size` in the field
    #[inline]
    pub fn centered(&self, size: Vec2) -> Vec2 {
        (self.size() - size) / 2.0
    }
}
