//! Ball physics: motion, wall bounce, paddle contact and scoring

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{classify_crossing, within_tolerance};
use super::field::Playfield;
use super::launch::{LaunchDirection, Launcher};
use super::paddle::{Paddle, Side};
use crate::consts::BALL_SIZE;
use crate::render::RenderTarget;

/// What happened when a ball reached a paddle plane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleContact {
    /// Inside the bounce band: x velocity reversed
    Bounce(Side),
    /// Outside the band: the round is lost for this ball
    Slipped(Side),
}

/// Outcome of one ball update
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BallStep {
    pub contact: Option<PaddleContact>,
    /// Player credited with a point (the ball has already been reset)
    pub scorer: Option<Side>,
}

/// A ball entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Pixels per frame. Positive `vel.y` moves the ball *up* the screen.
    pub vel: Vec2,
    /// Magnitudes restored on every reset
    pub default_vel: Vec2,
    /// False once the ball has slipped past a paddle; cleared by `reset`
    pub round_valid: bool,
}

impl Ball {
    /// New ball at the field center moving with `default_vel` (not yet launched)
    pub fn new(id: u32, field: &Playfield, default_vel: Vec2) -> Self {
        let size = Vec2::splat(BALL_SIZE);
        Self {
            id,
            pos: field.centered(size),
            size,
            vel: default_vel,
            default_vel,
            round_valid: true,
        }
    }

    /// Vertical center, used for the paddle bounce band
    #[inline]
    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    /// Advance one frame.
    ///
    /// Order: move, wall bounce, paddle contact, scoring. A ball that leaves
    /// the field is reset in place with a direction from `launcher`.
    pub fn update(
        &mut self,
        field: &Playfield,
        left: &Paddle,
        right: &Paddle,
        launcher: &mut Launcher,
    ) -> BallStep {
        let mut step = BallStep::default();

        self.pos.x += self.vel.x;
        self.pos.y -= self.vel.y;

        // Both walls checked independently
        if self.pos.y <= 0.0 {
            self.vel.y = -self.vel.y;
        }
        if self.pos.y >= field.height - self.size.y {
            self.vel.y = -self.vel.y;
        }

        let crossed = classify_crossing(self.pos.x, left, right).side();
        if let Some(side) = crossed {
            if self.round_valid {
                let paddle = match side {
                    Side::Left => left,
                    Side::Right => right,
                };
                if within_tolerance(self.center_y(), paddle) {
                    self.vel.x = -self.vel.x;
                    step.contact = Some(PaddleContact::Bounce(side));
                } else {
                    self.round_valid = false;
                    step.contact = Some(PaddleContact::Slipped(side));
                }
            }
        }

        if self.pos.x < -self.size.x {
            step.scorer = Some(Side::Right);
        }
        if self.pos.x > field.width {
            step.scorer = Some(Side::Left);
        }
        if step.scorer.is_some() {
            self.reset(field, launcher.next_direction());
        }

        step
    }

    /// Re-center, restore default speed and relaunch in `direction`
    pub fn reset(&mut self, field: &Playfield, direction: LaunchDirection) {
        self.round_valid = true;
        self.pos = field.centered(self.size);
        self.vel = direction.apply(self.default_vel);
    }

    pub fn draw(&self, target: &mut dyn RenderTarget) {
        target.fill_rect(self.pos.x, self.pos.y, self.size.x, self.size.y);
    }
}
