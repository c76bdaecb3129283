//! Rendering module
//!
//! The field is drawn through a [`Canvas`], which receives one shape per
//! visible entity. Painting only reads the field.

pub mod shapes;

pub use shapes::{BallShape, BrickShape, Color, HudShape, PaddleShape, PowerUpShape, palette};

use crate::sim::{GameField, RandomSource};

/// Drawing surface supplied by the platform
pub trait Canvas {
    fn draw_hud(&mut self, hud: &HudShape);
    fn draw_brick(&mut self, brick: &BrickShape);
    fn draw_paddle(&mut self, paddle: &PaddleShape);
    fn draw_power_up(&mut self, power_up: &PowerUpShape);
    fn draw_ball(&mut self, ball: &BallShape);
}

/// Draw one frame: HUD, live bricks, paddle, pickups, then balls on top
pub fn paint<R: RandomSource>(field: &GameField<R>, canvas: &mut impl Canvas) {
    canvas.draw_hud(&HudShape::from_field(field));

    for shape in field.bricks.iter().filter_map(BrickShape::from_brick) {
        canvas.draw_brick(&shape);
    }

    canvas.draw_paddle(&PaddleShape::from_paddle(&field.paddle));

    for power_up in &field.power_ups {
        canvas.draw_power_up(&PowerUpShape::from_power_up(power_up));
    }

    for ball in &field.balls {
        canvas.draw_ball(&BallShape::from_ball(ball));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::{Brick, BrickGrid, PowerUp, PowerUpKind};

    #[derive(Default)]
    struct Recorder {
        calls: Vec<&'static str>,
        bricks: Vec<BrickShape>,
    }

    impl Canvas for Recorder {
        fn draw_hud(&mut self, _hud: &HudShape) {
            self.calls.push("hud");
        }

        fn draw_brick(&mut self, brick: &BrickShape) {
            self.calls.push("brick");
            self.bricks.push(*brick);
        }

        fn draw_paddle(&mut self, _paddle: &PaddleShape) {
            self.calls.push("paddle");
        }

        fn draw_power_up(&mut self, _power_up: &PowerUpShape) {
            self.calls.push("power_up");
        }

        fn draw_ball(&mut self, _ball: &BallShape) {
            self.calls.push("ball");
        }
    }

    #[test]
    fn test_paint_order_and_inert_bricks_skipped() {
        let mut field = GameField::with_seed(Settings::default(), 5);
        field.bricks = BrickGrid::from_cells(
            1,
            3,
            vec![
                Brick::with_strength(50, 50, 45, 20, 1),
                Brick::with_strength(50, 75, 45, 20, 0),
                Brick::with_strength(50, 100, 45, 20, 3),
            ],
        );
        field.power_ups.push(PowerUp::new(PowerUpKind::Stretch, 200, 200));

        let mut canvas = Recorder::default();
        paint(&field, &mut canvas);

        assert_eq!(
            canvas.calls,
            vec!["hud", "brick", "brick", "paddle", "power_up", "ball"]
        );
        assert_eq!(canvas.bricks[1].rect.y, 100);
    }

    #[test]
    fn test_fresh_level_draws_every_brick() {
        let field = GameField::with_seed(Settings::default(), 5);
        let mut canvas = Recorder::default();
        paint(&field, &mut canvas);
        assert_eq!(canvas.bricks.len(), 70);
    }
}
