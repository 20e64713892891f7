//! End-to-end checks driving a session through the public API

use glam::Vec2;
use pong_duel::consts::*;
use pong_duel::sim::{DirectionMode, GameEvent, Side};
use pong_duel::{DrawList, GameConfig, GameSession, Settings};

fn session_from_json(json: &str) -> GameSession {
    let config = GameConfig::from_json(json).expect("valid config");
    GameSession::new(&config)
}

#[test]
fn test_slip_then_goal_for_left_player() {
    let mut session = session_from_json(r#"{"ball_count": 1, "seed": 7}"#);
    {
        let ball = &mut session.balls_mut()[0];
        ball.pos = Vec2::new(588.0, 450.0);
        ball.vel = Vec2::new(3.0, 3.0);
    }

    session.update();
    assert_eq!(
        session.events(),
        &[GameEvent::BallSlipped {
            ball: 1,
            side: Side::Right
        }]
    );

    let mut frames = 1;
    while session.score() == [0, 0] {
        session.update();
        frames += 1;
        assert!(frames < 100, "ball never left the field");
    }

    assert_eq!(session.score(), [1, 0]);
    let ball = &session.balls()[0];
    assert!(ball.round_valid);
    assert_eq!(ball.pos, Vec2::new(317.5, 242.5));
}

#[test]
fn test_rally_keeps_round_valid() {
    let mut session = session_from_json(r#"{"seed": 3}"#);
    {
        let ball = &mut session.balls_mut()[0];
        ball.pos = Vec2::new(588.0, 240.0);
        ball.vel = Vec2::new(3.0, 3.0);
    }

    session.update();
    assert!(session.events().contains(&GameEvent::PaddleBounce {
        ball: 1,
        side: Side::Right
    }));
    assert_eq!(session.balls()[0].vel.x, -3.0);
    assert!(session.balls()[0].round_valid);
    assert_eq!(session.score(), [0, 0]);
}

#[test]
fn test_paddles_stay_in_bounds_over_long_play() {
    let mut session = session_from_json(r#"{"ball_count": 3, "paddle_speed": 50, "seed": 11}"#);
    let max_y = session.field().height - PADDLE_HEIGHT;

    for frame in 0..2_000u32 {
        let input = session.input_mut();
        input.clear();
        if (frame / 17) % 2 == 0 {
            input.press(KEY_LEFT_UP);
            input.press(KEY_RIGHT_DOWN);
        } else {
            input.press(KEY_LEFT_DOWN);
            input.press(KEY_RIGHT_UP);
        }
        session.update();

        for side in Side::BOTH {
            let y = session.paddle(side).y();
            assert!((0.0..=max_y).contains(&y), "paddle out of bounds: {y}");
        }
        for ball in session.balls() {
            assert_eq!(ball.vel.abs(), Vec2::splat(BALL_SPEED));
        }
    }
}

#[test]
fn test_pause_round_trip_and_draw() {
    let mut session = GameSession::new(&GameConfig::default().with_seed(1));

    session.input_mut().press(KEY_PAUSE);
    session.update();
    assert!(!session.is_active());
    session.update();
    assert!(!session.is_active());

    let mut list = DrawList::new();
    session.draw(&mut list);
    assert_eq!(list.rects().count(), 3);
    assert_eq!(list.texts().collect::<Vec<_>>(), vec!["0", "0"]);

    session.input_mut().release(KEY_PAUSE);
    session.update();
    session.input_mut().press(KEY_PAUSE);
    session.update();
    assert!(session.is_active());
}

#[test]
fn test_settings_drive_session() {
    let settings = Settings {
        paddle_speed_slider: 200.0,
        ball_speed_slider: 150.0,
        ball_count: 5,
    };
    let config = settings.to_config(&GameConfig::default()).with_seed(5);
    let session = GameSession::new(&config);

    assert_eq!(session.balls().len(), 5);
    assert_eq!(session.paddle(Side::Left).speed, 50.0);
    assert_eq!(session.direction_mode(), DirectionMode::TrueRandom);
    for ball in session.balls() {
        assert!((ball.vel.x.abs() - (8.0 + 1.0 / 3.0)).abs() < 1e-4);
        assert_eq!(ball.vel.y.abs(), BALL_SPEED);
    }
}
