//! Game field state
//!
//! The field exclusively owns every entity. Renderers read it through `&GameField`;
//! only `tick` and the input methods below mutate it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ball::{Ball, BallTint};
use super::brick::BrickGrid;
use super::collision::FieldBounds;
use super::paddle::Paddle;
use super::powerup::PowerUp;
use super::rng::{PcgRandom, RandomSource};
use crate::consts::{CAPTURED_BALL_MAX_RADIUS, CAPTURED_BALL_MIN_RADIUS};
use crate::settings::Settings;

/// Whether ticks are being delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the player to start (new game, lost ball, level cleared)
    Waiting,
    /// Active gameplay
    Playing,
}

/// Complete game state
#[derive(Debug, Clone, Serialize)]
#[serde(bound(serialize = ""))]
pub struct GameField<R = PcgRandom> {
    pub settings: Settings,
    pub paddle: Paddle,
    pub bricks: BrickGrid,
    /// Balls in play, oldest first
    pub balls: Vec<Ball>,
    /// Falling pickups, oldest first
    pub power_ups: Vec<PowerUp>,
    pub score: u64,
    /// May dip below zero for the instant before game over resets it
    pub lives: i32,
    /// Current level (1-based); multiplies brick scores
    pub level: u32,
    /// Bricks that still have strength
    pub bricks_remaining: u32,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub ticks: u64,
    #[serde(skip)]
    pub(crate) rng: R,
}

impl GameField<PcgRandom> {
    /// Create a field driven by a seeded PCG generator
    pub fn with_seed(settings: Settings, seed: u64) -> Self {
        Self::new(settings, PcgRandom::new(seed))
    }
}

impl<R: RandomSource> GameField<R> {
    /// Create a new game at level 1, waiting for `start`
    pub fn new(settings: Settings, rng: R) -> Self {
        let lives = settings.starting_lives;
        let mut field = Self {
            paddle: Self::start_paddle(&settings),
            bricks: BrickGrid::default(),
            balls: Vec::new(),
            power_ups: Vec::new(),
            score: 0,
            lives,
            level: 1,
            bricks_remaining: 0,
            phase: GamePhase::Waiting,
            ticks: 0,
            settings,
            rng,
        };
        field.reset_level();
        field
    }

    fn start_paddle(settings: &Settings) -> Paddle {
        Paddle::new(
            (settings.field_width - settings.paddle_width) / 2,
            settings.paddle_ceiling(),
            settings.paddle_width,
            settings.paddle_height,
        )
    }

    /// Wall edges the balls bounce between
    pub fn bounds(&self) -> FieldBounds {
        let s = &self.settings;
        FieldBounds {
            left: s.border_width,
            right: s.field_width - s.border_width,
            top: s.border_width,
            bottom: s.field_height,
        }
    }

    /// Fresh grid, paddle and serve ball; clears falling pickups.
    /// Score, lives and level are left alone.
    pub fn reset_level(&mut self) {
        self.bricks_remaining = self.settings.brick_count();
        self.power_ups.clear();
        self.paddle = Self::start_paddle(&self.settings);
        self.reset_ball();
        self.bricks = BrickGrid::generate(&self.settings, &mut self.rng);
        log::info!(
            "Level {} ready: {} bricks, {} lives",
            self.level,
            self.bricks_remaining,
            self.lives
        );
    }

    /// Replace every ball with one serve ball in the middle of the field,
    /// heading downward at a random angle
    pub fn reset_ball(&mut self) {
        let radius = self.settings.ball_radius;
        let r = radius as i32;
        let vx = self.rng.range(-r, r - 1);
        let vy = self.rng.range(1, (r - 1).max(1));

        self.balls.clear();
        self.balls.push(Ball::new(
            Vec2::new(
                self.settings.field_width as f32 / 2.0,
                self.settings.field_height as f32 / 2.0,
            ),
            radius,
            Vec2::new(vx as f32, vy as f32),
            true,
            BallTint::Light,
        ));
    }

    /// Drop an inactive ball of random size from `(x, y)`
    pub fn release_ball(&mut self, x: i32, y: i32) {
        let radius = self
            .rng
            .range(CAPTURED_BALL_MIN_RADIUS, CAPTURED_BALL_MAX_RADIUS);
        self.balls
            .push(Ball::released(Vec2::new(x as f32, y as f32), radius as f32));
    }

    /// Resume tick delivery
    pub fn start(&mut self) {
        if self.phase != GamePhase::Playing {
            log::debug!("Starting play at tick {}", self.ticks);
        }
        self.phase = GamePhase::Playing;
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// Centre the paddle on the pointer. The paddle never rises above
    /// three quarters of the field height.
    pub fn pointer_move(&mut self, x: i32, y: i32) {
        self.paddle.x = x - self.paddle.width / 2;
        self.paddle.y = y.max(self.settings.paddle_ceiling());
    }
}
