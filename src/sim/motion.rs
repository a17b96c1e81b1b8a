//! Direction-driven ball stepping with boundary re-direction

use glam::Vec2;
use rand::Rng;

use super::direction::{Component, Direction};
use super::state::Ball;
use crate::consts::FIELD_EXTENT;

/// Advance a ball by one step.
///
/// Components are checked in `Up, Right, Down, Left` order against the
/// ball's current direction. A component whose boundary is already reached
/// draws a new random direction instead of moving, and later components are
/// then tested against that new direction. A ball sitting in a corner can
/// therefore re-draw twice in one step.
pub fn move_one_step<R: Rng>(ball: &mut Ball, rng: &mut R) {
    let min = -FIELD_EXTENT + ball.radius;
    let max = FIELD_EXTENT - ball.radius;

    for component in Component::ORDER {
        if !ball.direction.has(component) {
            continue;
        }

        let pos = ball.pos;
        let (can_move, step) = match component {
            Component::Up => (pos.y > min, Vec2::new(0.0, -ball.speed)),
            Component::Right => (pos.x < max, Vec2::new(ball.speed, 0.0)),
            Component::Down => (pos.y < max, Vec2::new(0.0, ball.speed)),
            Component::Left => (pos.x > min, Vec2::new(-ball.speed, 0.0)),
        };

        if can_move {
            ball.pos += step;
        } else {
            ball.direction = Direction::random(rng);
        }
    }
}
