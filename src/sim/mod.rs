//! Frame-stepped simulation module
//!
//! All gameplay logic lives here. Nothing in this module touches the host:
//! - Fixed per-frame pixel deltas, no wall-clock timing
//! - Seeded RNG only
//! - Stable update order (paddles, then balls by index)
//! - Drawing goes through the `RenderTarget` trait

pub mod ball;
pub mod collision;
pub mod field;
pub mod input;
pub mod launch;
pub mod paddle;
pub mod session;

pub use ball::{Ball, BallStep, PaddleContact};
pub use collision::{Crossing, classify_crossing, within_tolerance};
pub use field::Playfield;
pub use input::InputState;
pub use launch::{DirectionMode, LaunchDirection, Launcher};
pub use paddle::{KeyBindings, Paddle, Side};
pub use session::{GameEvent, GameSession};
