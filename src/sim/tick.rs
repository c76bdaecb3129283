//! Simulation tick
//!
//! One call per timer interval. Each tick runs to completion: balls, then
//! pickups, then the life-lost and level-cleared checks.

use super::ball::Ball;
use super::collision::{
    CollisionResult, ball_brick_collision, ball_paddle_collision, ball_wall_collision,
};
use super::powerup::{PowerUp, PowerUpKind};
use super::rng::RandomSource;
use super::state::{GameField, GamePhase};
use crate::audio::SoundEffect;
use crate::platform::Platform;

/// Advance the game by one tick. Does nothing unless the field is playing.
pub fn tick<R: RandomSource>(field: &mut GameField<R>, platform: &mut dyn Platform) {
    if field.phase != GamePhase::Playing {
        return;
    }

    field.ticks += 1;

    update_balls(field, platform);
    update_power_ups(field);

    if field.balls.is_empty() {
        lose_life(field, platform);
    }

    // Velocity inference on the next tick uses this tick's final position
    field.paddle.store_position();

    if field.bricks_remaining == 0 {
        next_level(field, platform);
    }
}

/// Collide and move every ball, newest first, dropping the ones that fell out
fn update_balls<R: RandomSource>(field: &mut GameField<R>, platform: &mut dyn Platform) {
    let bounds = field.bounds();

    // Balls released from bricks are appended during the scan; iterating
    // downward leaves them untouched until the next tick.
    for n in (0..field.balls.len()).rev() {
        let mut ball = field.balls[n];

        if ball.active {
            let wall = ball_wall_collision(&ball, &bounds);
            if wall.reverse_x {
                ball.reverse_x();
            }
            if wall.reverse_y {
                ball.reverse_y();
            }
            if wall.hit {
                platform.play_sound(SoundEffect::WallHit);
            }

            check_bricks(field, &mut ball, wall, platform);
        }

        if ball_paddle_collision(&ball, &field.paddle) {
            ball.collide_with_paddle(&field.paddle);
            platform.play_sound(SoundEffect::PaddleHit);
        }

        ball.advance();

        if ball.top() > bounds.bottom as f32 {
            field.balls.remove(n);
            log::debug!("Ball fell out, {} left", field.balls.len());
        } else {
            field.balls[n] = ball;
        }
    }
}

/// Hit every brick the ball is about to enter, then bounce at most once per
/// axis however many bricks were hit. An axis the wall already reversed this
/// tick is not reversed again.
fn check_bricks<R: RandomSource>(
    field: &mut GameField<R>,
    ball: &mut Ball,
    wall: CollisionResult,
    platform: &mut dyn Platform,
) {
    let mut pending = CollisionResult::miss();
    let mut destroyed = Vec::new();

    for brick in field.bricks.iter_mut() {
        let contact = ball_brick_collision(ball, brick);
        if !contact.hit {
            continue;
        }

        brick.hit();
        if !brick.is_live() {
            field.bricks_remaining = field.bricks_remaining.saturating_sub(1);
            if let Some(kind) = brick.power {
                destroyed.push((kind, brick.center()));
            }
        }
        field.score += u64::from(field.level) * u64::from(brick.calculate_score());
        platform.play_sound(SoundEffect::BrickHit);

        pending.merge(contact);
    }

    if pending.reverse_y && !wall.reverse_y {
        ball.reverse_y();
    }
    if pending.reverse_x && !wall.reverse_x {
        ball.reverse_x();
    }

    for (kind, (x, y)) in destroyed {
        release_power_up(field, kind, x, y);
    }
}

/// Surface the power-up of a destroyed brick centred at `(x, y)`
fn release_power_up<R: RandomSource>(field: &mut GameField<R>, kind: PowerUpKind, x: i32, y: i32) {
    match kind {
        PowerUpKind::BallInside => {
            field.release_ball(x, y);
            log::debug!("Extra ball released at ({x}, {y})");
        }
        kind => {
            field.power_ups.push(PowerUp::new(kind, x, y));
            log::debug!("{} power-up dropped at ({x}, {y})", kind.label());
        }
    }
}

/// Move pickups, applying the ones the paddle catches. Removal happens after
/// each pickup's checks.
fn update_power_ups<R: RandomSource>(field: &mut GameField<R>) {
    let bottom = field.bounds().bottom;

    for n in (0..field.power_ups.len()).rev() {
        let power_up = &field.power_ups[n];
        let kind = power_up.kind;

        let mut remove = false;
        if power_up.top() > bottom {
            remove = true;
        } else if power_up.rect().intersects(&field.paddle.rect()) {
            apply_power_up(field, kind);
            remove = true;
        }

        if remove {
            field.power_ups.remove(n);
        } else {
            field.power_ups[n].advance();
        }
    }
}

/// Apply a caught power-up
pub fn apply_power_up<R: RandomSource>(field: &mut GameField<R>, kind: PowerUpKind) {
    let step = field.settings.paddle_resize_step;
    match kind {
        PowerUpKind::Shrink => field.paddle.shrink(step, field.settings.paddle_min_width),
        PowerUpKind::Stretch => field.paddle.stretch(step),
        PowerUpKind::Multi => match field.balls.first() {
            Some(first) => {
                let clones = first.split();
                field.balls.extend(clones);
            }
            None => log::debug!("Multi caught with no ball in play"),
        },
        // Released the moment its brick breaks
        PowerUpKind::BallInside => {}
    }
    log::debug!(
        "{} applied: paddle width {}, {} balls",
        kind.label(),
        field.paddle.width,
        field.balls.len()
    );
}

/// Every ball is gone: pause with a fresh serve ball, or end the game
fn lose_life<R: RandomSource>(field: &mut GameField<R>, platform: &mut dyn Platform) {
    field.lives -= 1;
    field.phase = GamePhase::Waiting;
    field.reset_ball();
    field.power_ups.clear();
    log::info!("Ball lost, {} lives left", field.lives);

    if field.lives < 0 {
        game_over(field, platform);
    }
}

fn game_over<R: RandomSource>(field: &mut GameField<R>, platform: &mut dyn Platform) {
    log::info!("Game over at level {} with {} points", field.level, field.score);
    platform.show_message(&format!("Game Over. Your score: {} points", field.score));

    field.lives = field.settings.starting_lives;
    field.score = 0;
    field.reset_level();
}

/// Every brick is broken: bonus life, next level
fn next_level<R: RandomSource>(field: &mut GameField<R>, platform: &mut dyn Platform) {
    field.phase = GamePhase::Waiting;
    field.lives += 1;
    field.level += 1;
    log::info!("Level cleared, advancing to level {}", field.level);
    platform.show_message("Congratulations! New Level - Extra life");

    field.reset_level();
}
