//! Pointer autopilot for headless runs
//!
//! Produces the pointer position a player would give, from a read-only view of
//! the field. The result feeds `GameField::pointer_move` like real input.

use super::ball::Ball;
use super::collision::FieldBounds;
use super::powerup::PowerUpKind;
use super::rng::RandomSource;
use super::state::GameField;

/// Phase step of the aiming offset per tick
const OFFSET_RATE: f32 = 0.05;

/// Where to put the pointer this tick, or `None` with nothing in play
pub fn autopilot_target<R: RandomSource>(field: &GameField<R>) -> Option<(i32, i32)> {
    let bounds = field.bounds();
    let paddle_y = field.settings.paddle_ceiling();
    let mid_field = field.settings.field_height as f32 / 2.0;

    let threat = field
        .balls
        .iter()
        .filter(|b| b.vel.y > 0.0)
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y));

    if let Some(ball) = threat.filter(|b| b.pos.y > mid_field) {
        return Some((aim_at(field, ball, &bounds, paddle_y), paddle_y));
    }

    let pickup = field
        .power_ups
        .iter()
        .filter(|p| p.kind != PowerUpKind::Shrink)
        .max_by_key(|p| p.y);
    if let Some(p) = pickup {
        return Some((p.x + p.width / 2, paddle_y));
    }

    let ball = threat.or_else(|| field.balls.first())?;
    Some((aim_at(field, ball, &bounds, paddle_y), paddle_y))
}

fn aim_at<R: RandomSource>(
    field: &GameField<R>,
    ball: &Ball,
    bounds: &FieldBounds,
    paddle_y: i32,
) -> i32 {
    let landing = predict_landing_x(ball, bounds, paddle_y as f32);
    let reach = field.paddle.width as f32 / 3.0;
    let offset = (field.ticks as f32 * OFFSET_RATE).sin() * reach;
    (landing + offset).round() as i32
}

/// Centre x the ball will have when its bottom reaches `line_y`, bouncing
/// off the side walls on the way. Rising or level balls are taken where
/// they are.
pub fn predict_landing_x(ball: &Ball, bounds: &FieldBounds, line_y: f32) -> f32 {
    let vy = ball.vel.y;
    let drop = line_y - ball.bottom();
    if vy <= 0.0 || drop <= 0.0 {
        return ball.pos.x;
    }

    let x = ball.pos.x + ball.vel.x * drop / vy;

    let lo = bounds.left as f32 + ball.radius;
    let hi = bounds.right as f32 - ball.radius;
    let span = hi - lo;
    if span <= 0.0 {
        return ball.pos.x;
    }

    let period = 2.0 * span;
    let m = (x - lo).rem_euclid(period);
    if m <= span { lo + m } else { lo + period - m }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::settings::Settings;
    use crate::sim::ball::BallTint;
    use crate::sim::powerup::PowerUp;

    fn ball(x: f32, y: f32, vx: f32, vy: f32) -> Ball {
        Ball::new(Vec2::new(x, y), 7.0, Vec2::new(vx, vy), true, BallTint::Light)
    }

    fn field_with(balls: Vec<Ball>) -> GameField {
        let mut field = GameField::with_seed(Settings::default(), 3);
        field.balls = balls;
        field
    }

    #[test]
    fn test_straight_drop_lands_below() {
        let field = field_with(vec![ball(200.0, 300.0, 0.0, 5.0)]);
        assert_eq!(autopilot_target(&field), Some((200, 375)));
    }

    #[test]
    fn test_landing_folds_off_right_wall() {
        let bounds = field_with(Vec::new()).bounds();
        // Unfolded landing at x = 595.2, past the right limit of 573
        let x = predict_landing_x(&ball(500.0, 300.0, 7.0, 5.0), &bounds, 375.0);
        assert!((x - 550.8).abs() < 1e-3, "{x}");
    }

    #[test]
    fn test_rising_ball_is_tracked_in_place() {
        let bounds = field_with(Vec::new()).bounds();
        let x = predict_landing_x(&ball(120.0, 300.0, 4.0, -5.0), &bounds, 375.0);
        assert_eq!(x, 120.0);
    }

    #[test]
    fn test_lowest_descending_ball_wins() {
        let field = field_with(vec![
            ball(100.0, 260.0, 0.0, 3.0),
            ball(400.0, 340.0, 0.0, 3.0),
            ball(250.0, 360.0, 0.0, -3.0),
        ]);
        assert_eq!(autopilot_target(&field), Some((400, 375)));
    }

    #[test]
    fn test_chases_pickup_when_safe() {
        let mut field = field_with(vec![ball(100.0, 200.0, 0.0, -5.0)]);
        field.power_ups.push(PowerUp::new(PowerUpKind::Stretch, 330, 150));
        field.power_ups.push(PowerUp::new(PowerUpKind::Shrink, 450, 300));
        assert_eq!(autopilot_target(&field), Some((330, 375)));
    }

    #[test]
    fn test_threat_beats_pickup() {
        let mut field = field_with(vec![ball(100.0, 300.0, 0.0, 5.0)]);
        field.power_ups.push(PowerUp::new(PowerUpKind::Multi, 330, 150));
        assert_eq!(autopilot_target(&field), Some((100, 375)));
    }

    #[test]
    fn test_offset_stays_within_paddle_reach() {
        let mut field = field_with(vec![ball(300.0, 300.0, 0.0, 5.0)]);
        for ticks in 0..200 {
            field.ticks = ticks;
            let (x, _) = autopilot_target(&field).unwrap();
            assert!((x - 300).abs() <= 17, "tick {ticks}: {x}");
        }
    }

    #[test]
    fn test_nothing_in_play() {
        let field = field_with(Vec::new());
        assert_eq!(autopilot_target(&field), None);
    }
}
