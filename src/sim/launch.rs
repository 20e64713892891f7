//! Launch-direction selection for ball respawns
//!
//! Two strategies:
//! - Fixed permutation: the four sign combinations are drawn without
//!   replacement, so the first balls of a session never repeat a direction.
//! - True random: each axis flips independently with probability 1/2.
//!
//! Drawing from an empty pool switches to true-random for good.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// Sign applied to a ball's default velocity on launch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LaunchDirection {
    pub flip_x: bool,
    pub flip_y: bool,
}

impl LaunchDirection {
    /// The full starting-direction pool
    pub const ALL: [LaunchDirection; 4] = [
        LaunchDirection::new(true, true),
        LaunchDirection::new(true, false),
        LaunchDirection::new(false, true),
        LaunchDirection::new(false, false),
    ];

    pub const fn new(flip_x: bool, flip_y: bool) -> Self {
        Self { flip_x, flip_y }
    }

    /// Apply the flips to a velocity (magnitudes untouched)
    pub fn apply(self, vel: Vec2) -> Vec2 {
        let x = if self.flip_x { -vel.x } else { vel.x };
        let y = if self.flip_y { -vel.y } else { vel.y };
        Vec2::new(x, y)
    }
}

/// Direction selection strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DirectionMode {
    FixedPermutation,
    TrueRandom,
}

/// Starting-direction pool plus the seeded RNG that draws from it
#[derive(Debug, Clone)]
pub struct Launcher {
    pool: Vec<LaunchDirection>,
    mode: DirectionMode,
    rng: Pcg32,
}

impl Launcher {
    pub fn new(seed: u64) -> Self {
        Self {
            pool: LaunchDirection::ALL.to_vec(),
            mode: DirectionMode::FixedPermutation,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn mode(&self) -> DirectionMode {
        self.mode
    }

    /// Directions left in the pool
    pub fn remaining(&self) -> usize {
        self.pool.len()
    }

    /// Put all four directions back and return to fixed-permutation mode
    pub fn refill(&mut self) {
        self.pool.clear();
        self.pool.extend_from_slice(&LaunchDirection::ALL);
        self.mode = DirectionMode::FixedPermutation;
    }

    pub fn enable_true_random(&mut self) {
        self.mode = DirectionMode::TrueRandom;
    }

    /// Pick the direction for the next launch
    pub fn next_direction(&mut self) -> LaunchDirection {
        if self.mode == DirectionMode::FixedPermutation {
            if !self.pool.is_empty() {
                let index = self.rng.random_range(0..self.pool.len());
                return self.pool.swap_remove(index);
            }
            log::debug!("Starting-direction pool exhausted, switching to true-random launches");
            self.mode = DirectionMode::TrueRandom;
        }

        LaunchDirection::new(self.rng.random_bool(0.5), self.rng.random_bool(0.5))
    }
}
