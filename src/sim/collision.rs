//! Collision detection for axis-aligned bricks, walls and the paddle
//!
//! Every predicate looks one step ahead: it tests where the ball will be after
//! adding its velocity, not where it is now. That only works while no velocity
//! component exceeds the ball radius, which `Ball` guarantees by clamping.

use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::brick::Brick;
use super::paddle::Paddle;

/// Integer rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// True if the interiors overlap; touching edges do not count
    pub fn intersects(&self, other: &Rect) -> bool {
        other.x < self.right()
            && self.x < other.right()
            && other.y < self.bottom()
            && self.y < other.bottom()
    }
}

/// Inner edges of the field walls. The bottom is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldBounds {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    /// Anything whose top passes this line has left the field
    pub bottom: i32,
}

/// Result of a collision check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CollisionResult {
    /// Whether a collision occurred
    pub hit: bool,
    /// The ball's horizontal direction should flip
    pub reverse_x: bool,
    /// The ball's vertical direction should flip
    pub reverse_y: bool,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self::default()
    }

    /// Fold another result into this one
    pub fn merge(&mut self, other: CollisionResult) {
        self.hit |= other.hit;
        self.reverse_x |= other.reverse_x;
        self.reverse_y |= other.reverse_y;
    }
}

/// Check whether the ball is about to cross a side or top wall
pub fn ball_wall_collision(ball: &Ball, bounds: &FieldBounds) -> CollisionResult {
    let (vx, vy) = (ball.vel.x, ball.vel.y);
    let mut result = CollisionResult::miss();

    if ball.right() + vx > bounds.right as f32 || ball.left() + vx < bounds.left as f32 {
        result.hit = true;
        result.reverse_x = true;
    }
    if ball.top() + vy < bounds.top as f32 {
        result.hit = true;
        result.reverse_y = true;
    }

    result
}

/// Check whether the ball is about to enter a brick, and from which side.
///
/// Each approach direction requires the velocity sign to match, the leading
/// edge to cross the brick edge it faces while the trailing edge has not, and
/// the orthogonal spans to overlap. Inert bricks never collide.
pub fn ball_brick_collision(ball: &Ball, brick: &Brick) -> CollisionResult {
    if !brick.is_live() {
        return CollisionResult::miss();
    }

    let (vx, vy) = (ball.vel.x, ball.vel.y);
    let left = ball.left() + vx;
    let right = ball.right() + vx;
    let top = ball.top() + vy;
    let bottom = ball.bottom() + vy;

    let b = brick.rect();
    let (b_left, b_right) = (b.left() as f32, b.right() as f32);
    let (b_top, b_bottom) = (b.top() as f32, b.bottom() as f32);

    let x_overlap = right >= b_left && left <= b_right;
    let y_overlap = bottom >= b_top && top <= b_bottom;

    let upward = vy < 0.0 && top < b_bottom && bottom > b_bottom && x_overlap;
    let downward = vy > 0.0 && bottom > b_top && top < b_top && x_overlap;
    let rightward = vx > 0.0 && left < b_left && right > b_left && y_overlap;
    let leftward = vx < 0.0 && right > b_right && left < b_right && y_overlap;

    let reverse_y = upward || downward;
    let reverse_x = rightward || leftward;

    CollisionResult {
        hit: reverse_x || reverse_y,
        reverse_x,
        reverse_y,
    }
}

/// Check whether a descending (or level) ball is about to touch the paddle
pub fn ball_paddle_collision(ball: &Ball, paddle: &Paddle) -> bool {
    let (vx, vy) = (ball.vel.x, ball.vel.y);
    let p = paddle.rect();

    ball.right() + vx > p.left() as f32
        && ball.left() + vx < p.right() as f32
        && ball.bottom() + vy > p.top() as f32
        && ball.top() + vy < p.bottom() as f32
        && vy >= 0.0
}
