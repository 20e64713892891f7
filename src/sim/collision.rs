//! Ball/paddle collision classification
//!
//! Pong collisions here are deliberately coarse: a ball "crosses" a paddle
//! once its x passes the paddle's plane, and it is returned if its vertical
//! center lies inside a band that extends `PADDLE_TOLERANCE` pixels beyond
//! both ends of the paddle.

use super::paddle::{Paddle, Side};
use crate::consts::PADDLE_TOLERANCE;

/// Which paddle plane (if any) a ball is past this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crossing {
    None,
    Left,
    Right,
}

impl Crossing {
    pub fn side(self) -> Option<Side> {
        match self {
            Crossing::None => None,
            Crossing::Left => Some(Side::Left),
            Crossing::Right => Some(Side::Right),
        }
    }
}

/// Classify a ball's x against both paddle planes.
///
/// The right check runs last and wins when both match, which can only
/// happen on a playfield narrower than the two paddle gaps.
pub fn classify_crossing(ball_x: f32, left: &Paddle, right: &Paddle) -> Crossing {
    let mut crossing = Crossing::None;
    if ball_x <= left.x() + left.width() {
        crossing = Crossing::Left;
    }
    if ball_x >= right.x() - right.width() {
        crossing = Crossing::Right;
    }
    crossing
}

/// Whether a ball center at `center_y` is inside the paddle's bounce band
pub fn within_tolerance(center_y: f32, paddle: &Paddle) -> bool {
    let top = paddle.y() - PADDLE_TOLERANCE;
    let bottom = paddle.y() + paddle.height() + PADDLE_TOLERANCE;
    (top..=bottom).contains(&center_y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Playfield;

    fn paddles(field: &Playfield) -> (Paddle, Paddle) {
        (
            Paddle::new(Side::Left, field, 10.0),
            Paddle::new(Side::Right, field, 10.0),
        )
    }

    #[test]
    fn test_classify_crossing() {
        let field = Playfield::default();
        let (left, right) = paddles(&field);

        assert_eq!(classify_crossing(317.5, &left, &right), Crossing::None);
        // Left plane: 30 + 15
        assert_eq!(classify_crossing(45.0, &left, &right), Crossing::Left);
        assert_eq!(classify_crossing(45.1, &left, &right), Crossing::None);
        assert_eq!(classify_crossing(-20.0, &left, &right), Crossing::Left);
        // Right plane: 605 - 15
        assert_eq!(classify_crossing(590.0, &left, &right), Crossing::Right);
        assert_eq!(classify_crossing(589.9, &left, &right), Crossing::None);
    }

    #[test]
    fn test_right_wins_on_narrow_field() {
        let field = Playfield::new(100.0, 500.0);
        let (left, right) = paddles(&field);
        // Left plane at 45, right plane at 55 - 15 = 40
        assert_eq!(classify_crossing(42.0, &left, &right), Crossing::Right);
        assert_eq!(Crossing::Right.side(), Some(Side::Right));
        assert_eq!(Crossing::None.side(), None);
    }

    #[test]
    fn test_tolerance_band() {
        let field = Playfield::default();
        let (left, _) = paddles(&field);
        // Paddle spans 210..290, band spans 170..=330
        assert!(within_tolerance(250.0, &left));
        assert!(within_tolerance(170.0, &left));
        assert!(within_tolerance(330.0, &left));
        assert!(!within_tolerance(169.9, &left));
        assert!(!within_tolerance(330.1, &left));
    }
}
