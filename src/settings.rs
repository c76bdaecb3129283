//! Game settings
//!
//! Field geometry, brick grid layout and gameplay tuning. Persisted as JSON;
//! missing keys fall back to the defaults in `crate::consts`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SettingsError;

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Field ===
    /// Field width in pixels
    pub field_width: i32,
    /// Field height in pixels (the bottom edge is open)
    pub field_height: i32,
    /// Solid border at the left, top and right edges
    pub border_width: i32,

    // === Brick grid ===
    pub brick_columns: usize,
    pub brick_rows: usize,
    pub brick_height: i32,
    /// Gap between neighbouring bricks
    pub brick_padding: i32,
    /// Gap between the field edge and the grid
    pub grid_margin: i32,

    // === Ball ===
    pub ball_radius: f32,

    // === Paddle ===
    pub paddle_width: i32,
    pub paddle_height: i32,
    /// Shrink power-ups never take the paddle below this width
    pub paddle_min_width: i32,
    /// Width change applied by Shrink/Stretch
    pub paddle_resize_step: i32,

    // === Rules ===
    pub starting_lives: i32,

    // === Driver ===
    /// Timer interval between ticks
    pub tick_interval_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            border_width: BORDER_WIDTH,

            brick_columns: BRICK_COLUMNS,
            brick_rows: BRICK_ROWS,
            brick_height: BRICK_HEIGHT,
            brick_padding: BRICK_PADDING,
            grid_margin: GRID_MARGIN,

            ball_radius: BALL_RADIUS,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_min_width: PADDLE_MIN_WIDTH,
            paddle_resize_step: PADDLE_RESIZE_STEP,

            starting_lives: STARTING_LIVES,

            tick_interval_ms: TICK_INTERVAL_MS,
        }
    }
}

impl Settings {
    /// Horizontal distance between the left edges of neighbouring columns
    pub fn column_width(&self) -> i32 {
        (self.field_width - self.grid_margin * 2) / self.brick_columns as i32
    }

    /// Width of a single brick
    pub fn brick_width(&self) -> i32 {
        self.column_width() - self.brick_padding
    }

    /// Vertical distance between the top edges of neighbouring rows
    pub fn row_height(&self) -> i32 {
        self.brick_height + self.brick_padding
    }

    /// Highest point the paddle may be moved to
    pub fn paddle_ceiling(&self) -> i32 {
        3 * self.field_height / 4
    }

    /// Number of bricks in a full grid
    pub fn brick_count(&self) -> u32 {
        (self.brick_columns * self.brick_rows) as u32
    }

    /// Check the settings describe a playable field
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.field_width <= 0 || self.field_height <= 0 {
            return Err(SettingsError::invalid(
                "field_width",
                format!(
                    "field must be non-empty, got {}x{}",
                    self.field_width, self.field_height
                ),
            ));
        }
        if self.border_width < 0 || self.border_width * 2 >= self.field_width {
            return Err(SettingsError::invalid(
                "border_width",
                format!("{} leaves no room between the side walls", self.border_width),
            ));
        }
        if self.brick_columns == 0 || self.brick_rows == 0 {
            return Err(SettingsError::invalid(
                "brick_columns",
                format!(
                    "grid must have at least one brick, got {}x{}",
                    self.brick_columns, self.brick_rows
                ),
            ));
        }
        if self.brick_height <= 0 {
            return Err(SettingsError::invalid("brick_height", "must be positive"));
        }
        if self.brick_width() <= 0 {
            return Err(SettingsError::invalid(
                "brick_columns",
                format!(
                    "{} columns do not fit in a {}px field",
                    self.brick_columns, self.field_width
                ),
            ));
        }
        let grid_bottom = self.grid_margin + self.brick_rows as i32 * self.row_height();
        if grid_bottom >= self.paddle_ceiling() {
            return Err(SettingsError::invalid(
                "brick_rows",
                format!(
                    "grid reaches y={grid_bottom}, below the paddle zone at y={}",
                    self.paddle_ceiling()
                ),
            ));
        }
        if self.ball_radius < 1.0 {
            return Err(SettingsError::invalid(
                "ball_radius",
                format!("must be at least 1, got {}", self.ball_radius),
            ));
        }
        if self.paddle_height <= 0 || self.paddle_min_width <= 0 {
            return Err(SettingsError::invalid("paddle_height", "must be positive"));
        }
        if self.paddle_min_width > self.paddle_width {
            return Err(SettingsError::invalid(
                "paddle_min_width",
                format!(
                    "{} exceeds the starting width {}",
                    self.paddle_min_width, self.paddle_width
                ),
            ));
        }
        if self.starting_lives < 0 {
            return Err(SettingsError::invalid("starting_lives", "must not be negative"));
        }
        Ok(())
    }

    /// Load and validate settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Settings = serde_json::from_str(&json)?;
        settings.validate()?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings as pretty-printed JSON
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
