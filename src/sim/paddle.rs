use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;

/// The player's paddle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    /// Position at the end of the previous tick
    pub prev_x: i32,
    pub prev_y: i32,
}

impl Paddle {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            prev_x: x,
            prev_y: y,
        }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Remember the current position; called once per tick after collisions
    pub fn store_position(&mut self) {
        self.prev_x = self.x;
        self.prev_y = self.y;
    }

    /// Movement since the last `store_position`
    pub fn velocity(&self) -> IVec2 {
        IVec2::new(self.x - self.prev_x, self.y - self.prev_y)
    }

    /// Narrow by `step`, unless that would drop below `min_width`
    pub fn shrink(&mut self, step: i32, min_width: i32) {
        if self.width - step >= min_width {
            self.width -= step;
        }
    }

    /// Widen by `step`
    pub fn stretch(&mut self, step: i32) {
        self.width += step;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_velocity_from_stored_position() {
        let mut paddle = Paddle::new(100, 400, 50, 10);
        assert_eq!(paddle.velocity(), IVec2::ZERO);

        paddle.x = 112;
        paddle.y = 396;
        assert_eq!(paddle.velocity(), IVec2::new(12, -4));

        paddle.store_position();
        assert_eq!(paddle.velocity(), IVec2::ZERO);
    }

    #[test]
    fn test_shrink_floor() {
        let mut paddle = Paddle::new(0, 0, 80, 10);
        paddle.shrink(20, 40);
        assert_eq!(paddle.width, 60);
        paddle.shrink(20, 40);
        assert_eq!(paddle.width, 40);
        paddle.shrink(20, 40);
        assert_eq!(paddle.width, 40);
    }

    #[test]
    fn test_stretch_has_no_cap() {
        let mut paddle = Paddle::new(0, 0, 50, 10);
        for _ in 0..10 {
            paddle.stretch(20);
        }
        assert_eq!(paddle.width, 250);
    }
}
