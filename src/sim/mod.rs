//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick, positions in field pixels
//! - Seeded RNG only, owned by the field
//! - Stable iteration order (column-major bricks, reverse-index balls)
//! - No rendering or platform dependencies beyond the `Platform` trait

pub mod autopilot;
pub mod ball;
pub mod brick;
pub mod collision;
pub mod paddle;
pub mod powerup;
pub mod rng;
pub mod state;
pub mod tick;

pub use autopilot::autopilot_target;
pub use ball::{Ball, BallTint};
pub use brick::{Brick, BrickGrid};
pub use collision::{
    CollisionResult, FieldBounds, Rect, ball_brick_collision, ball_paddle_collision,
    ball_wall_collision,
};
pub use paddle::Paddle;
pub use powerup::{PowerUp, PowerUpKind};
pub use rng::{PcgRandom, RandomSource};
pub use state::{GameField, GamePhase};
pub use tick::{apply_power_up, tick};
