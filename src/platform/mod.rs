//! Platform abstraction layer
//!
//! Host adapters that wire the simulation to a real surface:
//! - `web`: canvas 2D rendering, keyboard events, slider/button controls and
//!   the animation-frame loop (wasm32 only)

#[cfg(target_arch = "wasm32")]
pub mod web;
