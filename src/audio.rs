//! Sound effects the simulation asks the platform to play

use serde::{Deserialize, Serialize};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundEffect {
    /// Ball hits the left, right or top border
    WallHit,
    /// Ball hits a brick (broken or not)
    BrickHit,
    /// Ball hits the paddle
    PaddleHit,
}

impl SoundEffect {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundEffect::WallHit => "wall",
            SoundEffect::BrickHit => "brick",
            SoundEffect::PaddleHit => "paddle",
        }
    }
}
