//! Brick Breaker - a ball-and-paddle brick game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, collisions, game field)
//! - `renderer`: Read-only shape descriptors for whatever draws the field
//! - `platform`: Sound/message collaborator the simulation calls into
//! - `settings`: Field, grid and gameplay configuration

pub mod audio;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::SettingsError;
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Default field size (pixels)
    pub const FIELD_WIDTH: i32 = 600;
    pub const FIELD_HEIGHT: i32 = 500;
    /// Width of the solid border at the left, top and right edges
    pub const BORDER_WIDTH: i32 = 20;

    /// Brick grid defaults
    pub const BRICK_COLUMNS: usize = 10;
    pub const BRICK_ROWS: usize = 7;
    pub const BRICK_HEIGHT: i32 = 20;
    pub const BRICK_PADDING: i32 = 5;
    pub const GRID_MARGIN: i32 = 50;
    /// Highest strength a fresh brick can roll
    pub const BRICK_MAX_STRENGTH: u8 = 3;
    /// Number of brick materials (textures) a brick can roll
    pub const BRICK_MATERIALS: u8 = 4;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 7.0;
    /// Radius range for balls released from a brick
    pub const CAPTURED_BALL_MIN_RADIUS: i32 = 3;
    pub const CAPTURED_BALL_MAX_RADIUS: i32 = 7;

    /// Paddle defaults
    pub const PADDLE_WIDTH: i32 = 50;
    pub const PADDLE_HEIGHT: i32 = 10;
    pub const PADDLE_MIN_WIDTH: i32 = 40;
    pub const PADDLE_RESIZE_STEP: i32 = 20;
    /// Paddle speed : ball speed change ratio on contact
    pub const PADDLE_NUDGE_RATIO: i32 = 4;

    /// Falling power-up geometry
    pub const POWER_UP_WIDTH: i32 = 40;
    pub const POWER_UP_HEIGHT: i32 = 10;
    pub const POWER_UP_FALL_SPEED: i32 = 4;

    /// Lives at the start of a game
    pub const STARTING_LIVES: i32 = 3;
    /// Base score of a brick hit before dividing by strength
    pub const BRICK_BASE_SCORE: u32 = 10;

    /// Timer interval driving the simulation
    pub const TICK_INTERVAL_MS: u64 = 20;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Convert cartesian (x, y) to polar (r, theta)
#[inline]
pub fn cartesian_to_polar(pos: Vec2) -> (f32, f32) {
    (pos.length(), pos.y.atan2(pos.x))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_polar_round_trip_up() {
        let v = polar_to_cartesian(7.0, FRAC_PI_2);
        assert!(v.x.abs() < 1e-5);
        assert!((v.y - 7.0).abs() < 1e-5);

        let (r, theta) = cartesian_to_polar(v);
        assert!((r - 7.0).abs() < 1e-5);
        assert!((theta - FRAC_PI_2).abs() < 1e-5);
    }
}
