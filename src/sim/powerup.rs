use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::{POWER_UP_FALL_SPEED, POWER_UP_HEIGHT, POWER_UP_WIDTH};

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerUpKind {
    /// Paddle narrows
    Shrink,
    /// Paddle widens
    Stretch,
    /// The first ball splits into three
    Multi,
    /// An extra ball drops out of the brick immediately (never falls as a pickup)
    BallInside,
}

impl PowerUpKind {
    /// Label drawn on the falling pickup
    pub fn label(&self) -> &'static str {
        match self {
            PowerUpKind::Shrink => "Shrink",
            PowerUpKind::Stretch => "Stretch",
            PowerUpKind::Multi => "Multi",
            PowerUpKind::BallInside => "Ball",
        }
    }
}

/// A falling pickup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerUp {
    pub kind: PowerUpKind,
    /// Top-left corner
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    /// Fall speed per tick
    pub vy: i32,
}

impl PowerUp {
    /// A pickup centred on `(center_x, center_y)`
    pub fn new(kind: PowerUpKind, center_x: i32, center_y: i32) -> Self {
        Self {
            kind,
            x: center_x - POWER_UP_WIDTH / 2,
            y: center_y - POWER_UP_HEIGHT / 2,
            width: POWER_UP_WIDTH,
            height: POWER_UP_HEIGHT,
            vy: POWER_UP_FALL_SPEED,
        }
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Fall by one tick
    pub fn advance(&mut self) {
        self.y += self.vy;
    }
}
