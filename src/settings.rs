//! Game configuration and host control settings
//!
//! `GameConfig` is everything a session is built from. `Settings` holds the
//! raw positions of the host's sliders, read from the page when needed.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Map the paddle-speed slider (0..=200) onto pixels per frame (0..=50)
pub fn paddle_speed_from_slider(raw: f32) -> f32 {
    let raw = sanitize(raw).min(PADDLE_SLIDER_MAX);
    (raw / PADDLE_SLIDER_MAX) * PADDLE_SPEED_MAX
}

/// Map the ball-speed slider (0..=150) onto pixels per frame (1/3..=8 1/3)
pub fn ball_speed_from_slider(raw: f32) -> f32 {
    let raw = sanitize(raw).min(BALL_SLIDER_MAX);
    (8.0 / 150.0) * raw + 1.0 / 3.0
}

/// Non-finite or negative values collapse to zero
fn sanitize(value: f32) -> f32 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

/// Everything a `GameSession` is constructed from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: f32,
    pub height: f32,
    pub ball_count: usize,
    /// Paddle pixels per frame
    pub paddle_speed: f32,
    /// Ball default velocity magnitudes, per axis
    pub ball_speed_x: f32,
    pub ball_speed_y: f32,
    /// RNG seed for launch directions (`DEFAULT_SEED` when absent)
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
            ball_count: 1,
            paddle_speed: PADDLE_SPEED,
            ball_speed_x: BALL_SPEED,
            ball_speed_y: BALL_SPEED,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Replace unusable values: a degenerate field falls back to the default
    /// size, speeds are made finite and non-negative.
    pub fn sanitized(mut self) -> Self {
        if !(self.width.is_finite() && self.width > 0.0) {
            log::warn!("Invalid playfield width {}, using default", self.width);
            self.width = PLAYFIELD_WIDTH;
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            log::warn!("Invalid playfield height {}, using default", self.height);
            self.height = PLAYFIELD_HEIGHT;
        }
        self.paddle_speed = sanitize(self.paddle_speed);
        self.ball_speed_x = sanitize(self.ball_speed_x);
        self.ball_speed_y = sanitize(self.ball_speed_y);
        if self.ball_count > MAX_BALL_COUNT {
            log::warn!(
                "Ball count {} exceeds {}, clamping",
                self.ball_count,
                MAX_BALL_COUNT
            );
            self.ball_count = MAX_BALL_COUNT;
        }
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parse from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Option<Self> {
        match serde_json::from_str::<Self>(json) {
            Ok(config) => Some(config.sanitized()),
            Err(e) => {
                log::warn!("Ignoring malformed game config: {}", e);
                None
            }
        }
    }
}

/// Raw slider positions from the host controls
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Paddle-speed slider, 0..=200
    pub paddle_speed_slider: f32,
    /// Ball-speed slider, 0..=150
    pub ball_speed_slider: f32,
    pub ball_count: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            // 40 -> 10 px/frame, 50 -> 3 px/frame
            paddle_speed_slider: 40.0,
            ball_speed_slider: 50.0,
            ball_count: 1,
        }
    }
}

impl Settings {
    pub fn paddle_speed(&self) -> f32 {
        paddle_speed_from_slider(self.paddle_speed_slider)
    }

    pub fn ball_speed(&self) -> f32 {
        ball_speed_from_slider(self.ball_speed_slider)
    }

    /// Build a session config from these settings.
    ///
    /// The ball slider drives only the horizontal speed; vertical keeps the
    /// base value.
    pub fn to_config(&self, base: &GameConfig) -> GameConfig {
        GameConfig {
            ball_count: self.ball_count,
            paddle_speed: self.paddle_speed(),
            ball_speed_x: self.ball_speed(),
            ..base.clone()
        }
        .sanitized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn test_paddle_slider_mapping() {
        assert_eq!(paddle_speed_from_slider(0.0), 0.0);
        assert_eq!(paddle_speed_from_slider(40.0), 10.0);
        assert_eq!(paddle_speed_from_slider(200.0), 50.0);
        // Out of range input is clamped into 0..=50
        assert_eq!(paddle_speed_from_slider(1000.0), 50.0);
        assert_eq!(paddle_speed_from_slider(-5.0), 0.0);
        assert_eq!(paddle_speed_from_slider(f32::NAN), 0.0);
    }

    #[test]
    fn test_ball_slider_mapping() {
        assert!(approx(ball_speed_from_slider(0.0), 1.0 / 3.0));
        assert!(approx(ball_speed_from_slider(50.0), 3.0));
        assert!(approx(ball_speed_from_slider(150.0), 8.0 + 1.0 / 3.0));
    }

    #[test]
    fn test_default_settings_match_default_config() {
        let config = Settings::default().to_config(&GameConfig::default());
        let base = GameConfig::default();
        assert_eq!(config.ball_count, base.ball_count);
        assert!(approx(config.paddle_speed, base.paddle_speed));
        assert!(approx(config.ball_speed_x, base.ball_speed_x));
        assert_eq!(config.ball_speed_y, base.ball_speed_y);
    }

    #[test]
    fn test_config_json_defaults_missing_fields() {
        let config = GameConfig::from_json(r#"{"ball_count": 3, "seed": 42}"#).unwrap();
        assert_eq!(config.ball_count, 3);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.width, PLAYFIELD_WIDTH);
        assert_eq!(config.paddle_speed, PADDLE_SPEED);

        assert!(GameConfig::from_json("not json").is_none());
    }

    #[test]
    fn test_config_sanitized() {
        let config = GameConfig {
            width: 0.0,
            height: f32::INFINITY,
            paddle_speed: -4.0,
            ball_speed_x: f32::NAN,
            ..Default::default()
        }
        .sanitized();

        assert_eq!(config.width, PLAYFIELD_WIDTH);
        assert_eq!(config.height, PLAYFIELD_HEIGHT);
        assert_eq!(config.paddle_speed, 0.0);
        assert_eq!(config.ball_speed_x, 0.0);
        assert_eq!(config.ball_speed_y, BALL_SPEED);
    }

    #[test]
    fn test_ball_count_clamped() {
        let config = GameConfig {
            ball_count: MAX_BALL_COUNT + 1,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(config.ball_count, MAX_BALL_COUNT);

        let settings = Settings {
            ball_count: usize::MAX,
            ..Default::default()
        };
        assert_eq!(
            settings.to_config(&GameConfig::default()).ball_count,
            MAX_BALL_COUNT
        );

        let config = GameConfig::from_json(r#"{"ball_count": 1000000000000}"#).unwrap();
        assert_eq!(config.ball_count, MAX_BALL_COUNT);
    }
}
