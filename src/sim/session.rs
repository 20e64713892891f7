//! Game session: two paddles, N balls, the score and the pause state
//!
//! The host calls `draw` then `update` once per animation frame, and feeds
//! key events into `input_mut()` whenever they arrive.

use glam::Vec2;

use super::ball::{Ball, PaddleContact};
use super::field::Playfield;
use super::input::InputState;
use super::launch::{DirectionMode, Launcher};
use super::paddle::{Paddle, Side};
use crate::consts::*;
use crate::render::RenderTarget;
use crate::settings::GameConfig;

/// Notable things that happened during the last `update`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    PauseToggled { active: bool },
    PaddleBounce { ball: u32, side: Side },
    BallSlipped { ball: u32, side: Side },
    Goal { ball: u32, scorer: Side, score: [u32; 2] },
}

/// A running two-player game
#[derive(Debug, Clone)]
pub struct GameSession {
    field: Playfield,
    paddles: [Paddle; 2],
    balls: Vec<Ball>,
    score: [u32; 2],
    active: bool,
    input: InputState,
    launcher: Launcher,
    /// Events from the most recent update
    events: Vec<GameEvent>,
}

impl GameSession {
    pub fn new(config: &GameConfig) -> Self {
        let config = config.clone().sanitized();
        let field = Playfield::new(config.width, config.height);
        let default_vel = Vec2::new(config.ball_speed_x, config.ball_speed_y);

        let balls = (0..config.ball_count)
            .map(|i| Ball::new(i as u32 + 1, &field, default_vel))
            .collect();

        let mut session = Self {
            field,
            paddles: [
                Paddle::new(Side::Left, &field, config.paddle_speed),
                Paddle::new(Side::Right, &field, config.paddle_speed),
            ],
            balls,
            score: [0, 0],
            active: true,
            input: InputState::new(),
            launcher: Launcher::new(config.seed.unwrap_or(DEFAULT_SEED)),
            events: Vec::new(),
        };

        session.reset();

        log::info!(
            "Session started: {}x{} field, {} ball(s)",
            field.width,
            field.height,
            session.balls.len()
        );

        session
    }

    /// Refill the direction pool and relaunch every ball.
    ///
    /// Only this first wave of launches uses the fixed permutation; every
    /// respawn after a reset is true-random.
    pub fn reset(&mut self) {
        self.launcher.refill();
        for ball in &mut self.balls {
            ball.reset(&self.field, self.launcher.next_direction());
        }
        self.launcher.enable_true_random();
    }

    /// Advance one frame: pause edge, then paddles, then balls in order
    pub fn update(&mut self) {
        self.events.clear();

        if self.input.was_just_pressed(KEY_PAUSE) {
            self.active = !self.active;
            log::debug!("{}", if self.active { "Resumed" } else { "Paused" });
            self.events.push(GameEvent::PauseToggled {
                active: self.active,
            });
        }

        if self.active {
            for paddle in &mut self.paddles {
                paddle.update(&self.input, &self.field);
            }

            let [left, right] = &self.paddles;
            for ball in &mut self.balls {
                let step = ball.update(&self.field, left, right, &mut self.launcher);

                match step.contact {
                    Some(PaddleContact::Bounce(side)) => {
                        self.events.push(GameEvent::PaddleBounce { ball: ball.id, side })
                    }
                    Some(PaddleContact::Slipped(side)) => {
                        self.events.push(GameEvent::BallSlipped { ball: ball.id, side })
                    }
                    None => {}
                }

                if let Some(scorer) = step.scorer {
                    self.score[scorer.index()] += 1;
                    log::info!(
                        "Point to {} player: {} - {}",
                        scorer.as_str(),
                        self.score[0],
                        self.score[1]
                    );
                    self.events.push(GameEvent::Goal {
                        ball: ball.id,
                        scorer,
                        score: self.score,
                    });
                }
            }
        }

        self.input.end_frame();
    }

    /// Draw paddles, balls, then both scores. Not gated by pause.
    pub fn draw(&self, target: &mut dyn RenderTarget) {
        for paddle in &self.paddles {
            paddle.draw(target);
        }
        for ball in &self.balls {
            ball.draw(target);
        }

        let (lx, ly) = SCORE_LEFT_POS;
        let (rx, ry) = SCORE_RIGHT_POS;
        target.fill_text(&self.score[0].to_string(), lx, ly);
        target.fill_text(&self.score[1].to_string(), rx, ry);
    }

    /// Set both paddles' speed; applies from the next frame
    pub fn set_paddle_speed(&mut self, speed: f32) {
        let speed = if speed.is_finite() { speed.max(0.0) } else { 0.0 };
        for paddle in &mut self.paddles {
            paddle.speed = speed;
        }
        log::info!("Paddle speed set to {:.2}", speed);
    }

    /// Set every ball's default horizontal speed; applies at its next respawn
    pub fn set_ball_speed(&mut self, speed: f32) {
        let speed = if speed.is_finite() { speed.max(0.0) } else { 0.0 };
        for ball in &mut self.balls {
            ball.default_vel.x = speed;
        }
        log::info!("Ball speed set to {:.2}", speed);
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    pub fn field(&self) -> &Playfield {
        &self.field
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        &self.paddles[side.index()]
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        &mut self.paddles[side.index()]
    }

    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    pub fn balls_mut(&mut self) -> &mut [Ball] {
        &mut self.balls
    }

    pub fn score(&self) -> [u32; 2] {
        self.score
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn direction_mode(&self) -> DirectionMode {
        self.launcher.mode()
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }
}
