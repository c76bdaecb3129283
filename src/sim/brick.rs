//! Bricks and the per-level brick grid

use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::powerup::PowerUpKind;
use super::rng::RandomSource;
use crate::consts::{BRICK_BASE_SCORE, BRICK_MATERIALS, BRICK_MAX_STRENGTH};
use crate::settings::Settings;

/// A brick entity. Bricks are never removed during a level; a brick with
/// strength 0 is inert (not drawn, not collidable).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brick {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    /// Hits left before the brick becomes inert
    strength: u8,
    /// Texture index for rendering
    pub material: u8,
    /// Power-up released when the brick is destroyed
    pub power: Option<PowerUpKind>,
}

impl Brick {
    /// A brick with random strength, material and power-up
    pub fn new(x: i32, y: i32, width: i32, height: i32, rng: &mut impl RandomSource) -> Self {
        let strength = rng.range(1, BRICK_MAX_STRENGTH as i32) as u8;
        let material = rng.range(0, BRICK_MATERIALS as i32 - 1) as u8;
        let power = Self::power_from_roll(rng.range(0, 100));
        Self {
            x,
            y,
            width,
            height,
            strength,
            material,
            power,
        }
    }

    /// A plain brick with a fixed strength
    pub fn with_strength(x: i32, y: i32, width: i32, height: i32, strength: u8) -> Self {
        Self {
            x,
            y,
            width,
            height,
            strength: strength.min(BRICK_MAX_STRENGTH),
            material: 0,
            power: None,
        }
    }

    /// Map a roll in `0..=100` to at most one power-up
    pub fn power_from_roll(roll: i32) -> Option<PowerUpKind> {
        match roll {
            0..=4 => Some(PowerUpKind::BallInside),
            5..=9 => Some(PowerUpKind::Multi),
            91..=95 => Some(PowerUpKind::Shrink),
            96..=100 => Some(PowerUpKind::Stretch),
            _ => None,
        }
    }

    pub fn strength(&self) -> u8 {
        self.strength
    }

    pub fn is_live(&self) -> bool {
        self.strength > 0
    }

    pub fn has_ball_inside(&self) -> bool {
        self.power == Some(PowerUpKind::BallInside)
    }

    pub fn has_multi_ball(&self) -> bool {
        self.power == Some(PowerUpKind::Multi)
    }

    pub fn has_shrink_paddle(&self) -> bool {
        self.power == Some(PowerUpKind::Shrink)
    }

    pub fn has_stretch_paddle(&self) -> bool {
        self.power == Some(PowerUpKind::Stretch)
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn center(&self) -> (i32, i32) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Take one hit. No effect once the brick is inert.
    pub fn hit(&mut self) {
        if self.strength > 0 {
            self.strength -= 1;
        }
    }

    /// Base score for the hit just taken, from the strength left after it:
    /// the destroying hit is worth 10, earlier hits 5 or 3.
    pub fn calculate_score(&self) -> u32 {
        BRICK_BASE_SCORE / (self.strength as u32 + 1)
    }
}

/// Fixed-size arena of bricks, one per grid cell
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrickGrid {
    columns: usize,
    rows: usize,
    /// Column-major: all rows of column 0, then column 1, ...
    cells: Vec<Brick>,
}

impl BrickGrid {
    /// Lay out a full grid of random bricks
    pub fn generate(settings: &Settings, rng: &mut impl RandomSource) -> Self {
        let columns = settings.brick_columns;
        let rows = settings.brick_rows;
        let column_width = settings.column_width();
        let brick_width = settings.brick_width();
        let row_height = settings.row_height();
        let margin = settings.grid_margin;

        let mut cells = Vec::with_capacity(columns * rows);
        for i in 0..columns {
            for j in 0..rows {
                let x = margin + i as i32 * column_width;
                let y = margin + j as i32 * row_height;
                cells.push(Brick::new(x, y, brick_width, settings.brick_height, rng));
            }
        }

        Self {
            columns,
            rows,
            cells,
        }
    }

    /// Build a grid from explicit bricks (column-major)
    #[cfg(test)]
    pub(crate) fn from_cells(columns: usize, rows: usize, cells: Vec<Brick>) -> Self {
        assert_eq!(cells.len(), columns * rows, "grid size mismatch");
        Self {
            columns,
            rows,
            cells,
        }
    }

    pub fn get(&self, column: usize, row: usize) -> Option<&Brick> {
        if column < self.columns && row < self.rows {
            self.cells.get(column * self.rows + row)
        } else {
            None
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Brick> {
        self.cells.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Brick> {
        self.cells.iter_mut()
    }

    /// Bricks that still have strength
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|b| b.is_live()).count()
    }
}
