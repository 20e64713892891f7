//! Pong Duel - a two-player paddle-and-ball arcade game
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (input, paddles, balls, session)
//! - `render`: Drawing-surface abstraction plus recording/ASCII targets
//! - `platform`: Browser host wiring (canvas, keyboard, sliders)
//! - `settings`: Session configuration and host slider settings

pub mod platform;
pub mod render;
pub mod settings;
pub mod sim;

pub use render::{AsciiCanvas, DrawCommand, DrawList, RenderTarget};
pub use settings::{GameConfig, Settings};
pub use sim::{GameEvent, GameSession};

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (canvas size)
    pub const PLAYFIELD_WIDTH: f32 = 650.0;
    pub const PLAYFIELD_HEIGHT: f32 = 500.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;
    /// Gap between a paddle and its side wall
    pub const PADDLE_MARGIN: f32 = 30.0;
    /// Pixels per frame while a movement key is held
    pub const PADDLE_SPEED: f32 = 10.0;
    pub const PADDLE_SPEED_MAX: f32 = 50.0;
    /// Forgiveness band above and below a paddle where the ball still bounces
    pub const PADDLE_TOLERANCE: f32 = 40.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 15.0;
    /// Pixels per frame on each axis
    pub const BALL_SPEED: f32 = 3.0;
    /// Upper bound on balls per session
    pub const MAX_BALL_COUNT: usize = 100;

    /// Slider ranges of the host controls
    pub const PADDLE_SLIDER_MAX: f32 = 200.0;
    pub const BALL_SLIDER_MAX: f32 = 150.0;

    /// Score text anchors (left player, right player)
    pub const SCORE_LEFT_POS: (f32, f32) = (100.0, 100.0);
    pub const SCORE_RIGHT_POS: (f32, f32) = (500.0, 100.0);
    pub const SCORE_FONT: &str = "80px Arial";

    /// Key identifiers (browser `KeyboardEvent.key` values)
    pub const KEY_LEFT_UP: &str = "w";
    pub const KEY_LEFT_DOWN: &str = "s";
    pub const KEY_RIGHT_UP: &str = "ArrowUp";
    pub const KEY_RIGHT_DOWN: &str = "ArrowDown";
    pub const KEY_PAUSE: &str = " ";

    /// Seed used when the configuration does not provide one
    pub const DEFAULT_SEED: u64 = 0x5eed_1e55;
}
