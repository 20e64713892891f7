//! Player paddles

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::field::Playfield;
use super::input::InputState;
use crate::consts::*;
use crate::render::RenderTarget;

/// Which player a paddle (or a score slot) belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    /// Index into `[left, right]` arrays (paddles, score)
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }

    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// Up/down key identifiers for one paddle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    pub up: String,
    pub down: String,
}

impl KeyBindings {
    /// Default bindings: W/S on the left, arrow keys on the right
    pub fn for_side(side: Side) -> Self {
        let (up, down) = match side {
            Side::Left => (KEY_LEFT_UP, KEY_LEFT_DOWN),
            Side::Right => (KEY_RIGHT_UP, KEY_RIGHT_DOWN),
        };
        Self {
            up: up.to_owned(),
            down: down.to_owned(),
        }
    }
}

/// A player's paddle. `pos` is the top-left corner; only `pos.y` moves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2,
    pub size: Vec2,
    /// Pixels per frame while a movement key is held
    pub speed: f32,
    pub keys: KeyBindings,
}

impl Paddle {
    pub fn new(side: Side, field: &Playfield, speed: f32) -> Self {
        let size = Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT);
        let x = match side {
            Side::Left => PADDLE_MARGIN,
            Side::Right => field.width - PADDLE_MARGIN - size.x,
        };
        Self {
            side,
            pos: Vec2::new(x, (field.height - size.y) / 2.0),
            size,
            speed,
            keys: KeyBindings::for_side(side),
        }
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Move by the held keys, then clamp into the field.
    ///
    /// Up and down are applied independently, so holding both cancels out.
    pub fn update(&mut self, input: &InputState, field: &Playfield) {
        if input.is_held(&self.keys.up) {
            self.pos.y -= self.speed;
        }
        if input.is_held(&self.keys.down) {
            self.pos.y += self.speed;
        }
        self.clamp_to(field);
    }

    fn clamp_to(&mut self, field: &Playfield) {
        // Not f32::clamp: a field shorter than the paddle must not panic
        let max_y = field.height - self.size.y;
        if self.pos.y < 0.0 {
            self.pos.y = 0.0;
        }
        if self.pos.y > max_y {
            self.pos.y = max_y;
        }
    }

    pub fn draw(&self, target: &mut dyn RenderTarget) {
        target.fill_rect(self.pos.x, self.pos.y, self.size.x, self.size.y);
    }
}
