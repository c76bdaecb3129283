//! Ball motion and paddle reflection

use std::f32::consts::TAU;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::paddle::Paddle;
use crate::consts::PADDLE_NUDGE_RATIO;
use crate::{cartesian_to_polar, polar_to_cartesian};

/// Ball colour; released balls are drawn dark until caught
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallTint {
    Light,
    Dark,
}

/// A ball entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Centre position
    pub pos: Vec2,
    /// Displacement per tick. Each component stays within `[-radius, radius]`.
    pub vel: Vec2,
    pub radius: f32,
    /// Active balls collide with walls and bricks. A ball released from a
    /// brick stays inactive until it first touches the paddle.
    pub active: bool,
    pub tint: BallTint,
}

impl Ball {
    pub fn new(pos: Vec2, radius: f32, vel: Vec2, active: bool, tint: BallTint) -> Self {
        let mut ball = Self {
            pos,
            vel,
            radius,
            active,
            tint,
        };
        ball.clamp_speed();
        ball
    }

    /// An inactive ball dropping straight down from inside a brick
    pub fn released(pos: Vec2, radius: f32) -> Self {
        Self::new(pos, radius, Vec2::new(0.0, radius), false, BallTint::Dark)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Move by one tick of velocity
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    pub fn reverse_x(&mut self) {
        self.vel.x = -self.vel.x;
    }

    pub fn reverse_y(&mut self) {
        self.vel.y = -self.vel.y;
    }

    /// Bounce off the paddle.
    ///
    /// The vertical direction always flips. If the ball is about to clip a top
    /// corner of the paddle while moving toward it, the horizontal direction
    /// flips too. A quarter of the paddle's own motion since the last tick is
    /// then added to the ball, and the result is clamped to the radius.
    /// Contact also activates balls released from bricks.
    pub fn collide_with_paddle(&mut self, paddle: &Paddle) {
        self.reverse_y();

        let (vx, vy) = (self.vel.x, self.vel.y);
        let top = paddle.top() as f32;
        let left = paddle.left() as f32;
        let right = paddle.right() as f32;

        let straddles_top = top > self.top() + vy && top < self.bottom() + vy;
        let clips_left = vx > 0.0 && left > self.left() + vx && left < self.right() + vx;
        let clips_right = vx < 0.0 && right > self.left() + vx && right < self.right() + vx;
        if straddles_top && (clips_left || clips_right) {
            self.reverse_x();
        }

        let nudge = paddle.velocity() / PADDLE_NUDGE_RATIO;
        self.vel += nudge.as_vec2();
        self.clamp_speed();

        self.active = true;
    }

    /// Keep each velocity component within the radius so the one-step
    /// lookahead cannot skip over a brick, wall or the paddle
    pub fn clamp_speed(&mut self) {
        let r = self.radius;
        self.vel = self.vel.clamp(Vec2::splat(-r), Vec2::splat(r));
    }

    /// Two copies of this ball heading off at ±120° from its direction,
    /// at the same speed. Angles are measured with y pointing up.
    pub fn split(&self) -> [Ball; 2] {
        let (speed, theta) = cartesian_to_polar(Vec2::new(self.vel.x, -self.vel.y));
        [theta + TAU / 3.0, theta - TAU / 3.0].map(|angle| {
            let v = polar_to_cartesian(speed, angle);
            Ball::new(
                self.pos,
                self.radius,
                Vec2::new(v.x, -v.y),
                true,
                self.tint,
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ball(x: f32, y: f32, vx: f32, vy: f32) -> Ball {
        Ball::new(Vec2::new(x, y), 7.0, Vec2::new(vx, vy), true, BallTint::Light)
    }

    fn paddle_at(x: i32, y: i32, prev_x: i32, prev_y: i32) -> Paddle {
        let mut paddle = Paddle::new(prev_x, prev_y, 50, 10);
        paddle.store_position();
        paddle.x = x;
        paddle.y = y;
        paddle
    }

    #[test]
    fn test_advance() {
        let mut b = ball(10.0, 20.0, 3.0, -2.0);
        b.advance();
        assert_eq!(b.pos, Vec2::new(13.0, 18.0));
    }

    #[test]
    fn test_bounds() {
        let b = ball(100.0, 50.0, 0.0, 0.0);
        assert_eq!(b.left(), 93.0);
        assert_eq!(b.right(), 107.0);
        assert_eq!(b.top(), 43.0);
        assert_eq!(b.bottom(), 57.0);
    }

    #[test]
    fn test_constructor_clamps() {
        let b = ball(0.0, 0.0, 20.0, -20.0);
        assert_eq!(b.vel, Vec2::new(7.0, -7.0));
    }

    #[test]
    fn test_flat_hit_with_moving_paddle() {
        // Paddle moved +5 in x since the last tick
        let paddle = paddle_at(90, 105, 85, 105);
        let mut b = ball(100.0, 100.0, 5.0, 5.0);
        b.collide_with_paddle(&paddle);

        assert_eq!(b.vel.y, -5.0);
        // 5 / 4 == 1 in integer division
        assert_eq!(b.vel.x, 6.0);
        assert!(b.active);
    }

    #[test]
    fn test_flat_hit_still_paddle() {
        let paddle = paddle_at(90, 105, 90, 105);
        let mut b = ball(115.0, 100.0, -2.0, 4.0);
        b.collide_with_paddle(&paddle);
        assert_eq!(b.vel, Vec2::new(-2.0, -4.0));
    }

    #[test]
    fn test_left_corner_hit_reverses_x() {
        // Ball centred on the paddle's top edge, just left of its left end
        let paddle = paddle_at(90, 105, 90, 105);
        let mut b = ball(88.0, 105.0, 3.0, 3.0);
        b.collide_with_paddle(&paddle);
        assert_eq!(b.vel, Vec2::new(-3.0, -3.0));
    }

    #[test]
    fn test_right_corner_hit_reverses_x() {
        let paddle = paddle_at(90, 105, 90, 105);
        let mut b = ball(142.0, 105.0, -3.0, 3.0);
        b.collide_with_paddle(&paddle);
        assert_eq!(b.vel, Vec2::new(3.0, -3.0));
    }

    #[test]
    fn test_corner_needs_matching_direction() {
        // Over the left corner but moving left: flat bounce only
        let paddle = paddle_at(90, 105, 90, 105);
        let mut b = ball(88.0, 105.0, -3.0, 3.0);
        b.collide_with_paddle(&paddle);
        assert_eq!(b.vel, Vec2::new(-3.0, -3.0));
    }

    #[test]
    fn test_fast_paddle_is_clamped() {
        let paddle = paddle_at(90, 105, 40, 105);
        let mut b = ball(100.0, 100.0, 5.0, 5.0);
        b.collide_with_paddle(&paddle);
        assert_eq!(b.vel.x, 7.0);
    }

    #[test]
    fn test_paddle_activates_released_ball() {
        let paddle = paddle_at(90, 105, 90, 105);
        let mut b = Ball::released(Vec2::new(110.0, 100.0), 4.0);
        assert!(!b.active);
        b.collide_with_paddle(&paddle);
        assert!(b.active);
        assert_eq!(b.vel.y, -4.0);
    }

    #[test]
    fn test_split_rotates_by_a_third_turn() {
        let parent = ball(200.0, 300.0, 0.0, 7.0);
        let [a, b] = parent.split();

        for clone in [&a, &b] {
            assert!((clone.speed() - 7.0).abs() < 1e-4);
            assert_eq!(clone.pos, parent.pos);
            assert!(clone.active);
            // 120° from straight down leaves a component pointing up
            assert!((clone.vel.y - (-3.5)).abs() < 1e-4);
        }
        let sin_120 = 7.0 * (TAU / 3.0).sin();
        assert!((a.vel.x.abs() - sin_120).abs() < 1e-4);
        assert!((a.vel.x + b.vel.x).abs() < 1e-4, "mirror images");
        // Parent untouched
        assert_eq!(parent.vel, Vec2::new(0.0, 7.0));
    }

    proptest! {
        #[test]
        fn prop_paddle_bounce_respects_radius(
            x in 0.0f32..600.0,
            y in 0.0f32..500.0,
            vx in -7.0f32..=7.0,
            vy in -7.0f32..=7.0,
            px in 0i32..600,
            dx in -300i32..300,
            dy in -100i32..100,
        ) {
            let paddle = paddle_at(px, 400, px - dx, 400 - dy);
            let mut b = ball(x, y, vx, vy);
            b.collide_with_paddle(&paddle);
            prop_assert!(b.vel.x.abs() <= b.radius);
            prop_assert!(b.vel.y.abs() <= b.radius);
        }
    }
}
