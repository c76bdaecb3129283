//! Shape descriptors for the field's entities
//!
//! Each shape is plain data a canvas can draw without looking at the
//! simulation types. Colors are linear RGBA.

use glam::Vec2;

use crate::sim::{
    Ball, BallTint, Brick, GameField, Paddle, PowerUp, PowerUpKind, RandomSource, Rect,
};

pub type Color = [f32; 4];

/// Named colors
pub mod palette {
    use super::Color;

    pub const WHITE: Color = [1.0, 1.0, 1.0, 1.0];
    pub const BLACK: Color = [0.0, 0.0, 0.0, 1.0];
    pub const LIME: Color = [0.0, 1.0, 0.0, 1.0];
    pub const ORANGE: Color = [1.0, 0.647, 0.0, 1.0];
    pub const RED: Color = [1.0, 0.0, 0.0, 1.0];
    pub const LIGHT_BLUE: Color = [0.678, 0.847, 0.902, 1.0];
    pub const LIGHT_GREEN: Color = [0.565, 0.933, 0.565, 1.0];
    pub const PINK: Color = [1.0, 0.753, 0.796, 1.0];
}

/// Base color per brick material: orange, purple, tan, stone
const MATERIAL_COLORS: [Color; 4] = [
    [0.85, 0.45, 0.15, 1.0],
    [0.50, 0.25, 0.60, 1.0],
    [0.82, 0.71, 0.55, 1.0],
    [0.55, 0.55, 0.55, 1.0],
];

/// Traffic-light indicator: lime for one hit left, orange for two, red for three
pub fn strength_color(strength: u8) -> Option<Color> {
    match strength {
        0 => None,
        1 => Some(palette::LIME),
        2 => Some(palette::ORANGE),
        _ => Some(palette::RED),
    }
}

pub fn power_up_color(kind: PowerUpKind) -> Color {
    match kind {
        PowerUpKind::Shrink => palette::LIGHT_BLUE,
        PowerUpKind::Stretch => palette::LIGHT_GREEN,
        PowerUpKind::Multi => palette::PINK,
        PowerUpKind::BallInside => palette::WHITE,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallShape {
    pub center: Vec2,
    pub radius: f32,
    pub color: Color,
}

impl BallShape {
    pub fn from_ball(ball: &Ball) -> Self {
        let color = match ball.tint {
            BallTint::Light => palette::WHITE,
            BallTint::Dark => palette::BLACK,
        };
        Self {
            center: ball.pos,
            radius: ball.radius,
            color,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrickShape {
    pub rect: Rect,
    /// Texture index, for canvases that have brick images
    pub material: u8,
    /// Flat stand-in for the texture
    pub fill: Color,
    pub outline: Color,
    pub indicator_center: (i32, i32),
    pub indicator_radius: i32,
    pub indicator: Color,
}

impl BrickShape {
    /// `None` for inert bricks, which are not drawn
    pub fn from_brick(brick: &Brick) -> Option<Self> {
        let indicator = strength_color(brick.strength())?;
        let fill = MATERIAL_COLORS[brick.material as usize % MATERIAL_COLORS.len()];
        Some(Self {
            rect: brick.rect(),
            material: brick.material,
            fill,
            outline: palette::BLACK,
            indicator_center: brick.center(),
            indicator_radius: brick.height / 6,
            indicator,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleShape {
    pub rect: Rect,
    pub color: Color,
}

impl PaddleShape {
    pub fn from_paddle(paddle: &Paddle) -> Self {
        Self {
            rect: paddle.rect(),
            color: palette::BLACK,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerUpShape {
    pub rect: Rect,
    pub color: Color,
    pub label: &'static str,
    pub label_color: Color,
}

impl PowerUpShape {
    pub fn from_power_up(power_up: &PowerUp) -> Self {
        Self {
            rect: power_up.rect(),
            color: power_up_color(power_up.kind),
            label: power_up.kind.label(),
            label_color: palette::BLACK,
        }
    }
}

/// Borders and status text
#[derive(Debug, Clone, PartialEq)]
pub struct HudShape {
    /// Left, top and right walls
    pub borders: [Rect; 3],
    pub border_color: Color,
    /// Top-left text
    pub status: String,
    /// Top-right text
    pub lives: String,
    pub text_color: Color,
    /// Background image index; alternates every level
    pub background: u32,
}

impl HudShape {
    pub fn from_field<R: RandomSource>(field: &GameField<R>) -> Self {
        let s = &field.settings;
        let (w, h, bw) = (s.field_width, s.field_height, s.border_width);
        Self {
            borders: [
                Rect::new(0, 0, bw, h),
                Rect::new(0, 0, w, bw),
                Rect::new(w - bw, 0, bw, h),
            ],
            border_color: palette::BLACK,
            status: format!("Level: {} Score: {}", field.level, field.score),
            lives: format!("Lives: {}", field.lives),
            text_color: palette::WHITE,
            background: field.level % 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    #[test]
    fn test_strength_indicator() {
        assert_eq!(strength_color(0), None);
        assert_eq!(strength_color(1), Some(palette::LIME));
        assert_eq!(strength_color(2), Some(palette::ORANGE));
        assert_eq!(strength_color(3), Some(palette::RED));
    }

    #[test]
    fn test_brick_shape() {
        let brick = Brick::with_strength(50, 50, 45, 20, 2);
        let shape = BrickShape::from_brick(&brick).unwrap();
        assert_eq!(shape.rect, Rect::new(50, 50, 45, 20));
        assert_eq!(shape.indicator_center, (72, 60));
        assert_eq!(shape.indicator_radius, 3);
        assert_eq!(shape.indicator, palette::ORANGE);

        let inert = Brick::with_strength(50, 50, 45, 20, 0);
        assert!(BrickShape::from_brick(&inert).is_none());
    }

    #[test]
    fn test_ball_tints() {
        let serve = Ball::new(Vec2::new(1.0, 2.0), 7.0, Vec2::ZERO, true, BallTint::Light);
        assert_eq!(BallShape::from_ball(&serve).color, palette::WHITE);
        let released = Ball::released(Vec2::new(1.0, 2.0), 4.0);
        let shape = BallShape::from_ball(&released);
        assert_eq!(shape.color, palette::BLACK);
        assert_eq!(shape.radius, 4.0);
    }

    #[test]
    fn test_power_up_shape() {
        let shape = PowerUpShape::from_power_up(&PowerUp::new(PowerUpKind::Multi, 100, 100));
        assert_eq!(shape.color, palette::PINK);
        assert_eq!(shape.label, "Multi");
    }

    #[test]
    fn test_hud_text() {
        let mut field = GameField::with_seed(Settings::default(), 1);
        field.level = 3;
        field.score = 125;
        let hud = HudShape::from_field(&field);
        assert_eq!(hud.status, "Level: 3 Score: 125");
        assert_eq!(hud.lives, "Lives: 3");
        assert_eq!(hud.background, 1);
        assert_eq!(hud.borders[2], Rect::new(580, 0, 20, 500));
    }
}
