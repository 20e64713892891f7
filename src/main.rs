//! Pong Duel entry point
//!
//! Browser builds start from `wasm_main`. Native builds run a scripted,
//! headless match and print the final frame.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    pong_duel::platform::web::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// One minute at 60 frames per second
#[cfg(not(target_arch = "wasm32"))]
const DEMO_FRAMES: u32 = 60 * 60;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use pong_duel::{AsciiCanvas, GameConfig, GameSession, RenderTarget};

    env_logger::init();
    log::info!("Pong Duel (native) starting...");
    log::info!("Interactive play runs in the browser - running a scripted demo match");

    let frames = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(DEMO_FRAMES);

    // PONG_DUEL_CONFIG may hold a JSON GameConfig
    let mut config = std::env::var("PONG_DUEL_CONFIG")
        .ok()
        .and_then(|json| GameConfig::from_json(&json))
        .unwrap_or_default();
    if config.seed.is_none() {
        config.seed = Some(clock_seed());
    }
    log::info!("Demo seed: {:?}, {} frames", config.seed, frames);

    let mut session = GameSession::new(&config);
    for frame in 0..frames {
        scripted_keys(frame, &mut session);
        session.update();
    }

    let mut canvas = AsciiCanvas::new(config.width, config.height, 65, 25);
    canvas.clear();
    session.draw(&mut canvas);
    println!("{canvas}");

    let [left, right] = session.score();
    println!("Final score after {frames} frames: {left} - {right}");
}

/// Fixed input script: both paddles sweep up and down at different rates,
/// and the last second of every 20 is spent paused.
#[cfg(not(target_arch = "wasm32"))]
fn scripted_keys(frame: u32, session: &mut pong_duel::GameSession) {
    use pong_duel::consts::*;

    let input = session.input_mut();
    input.clear();

    input.press(if (frame / 60) % 2 == 0 { KEY_LEFT_UP } else { KEY_LEFT_DOWN });
    input.press(if (frame / 45) % 2 == 0 { KEY_RIGHT_DOWN } else { KEY_RIGHT_UP });

    // A single-frame press is one toggle
    let phase = frame % 1200;
    if phase == 1140 || phase == 1199 {
        input.press(KEY_PAUSE);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn clock_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(pong_duel::consts::DEFAULT_SEED)
}
