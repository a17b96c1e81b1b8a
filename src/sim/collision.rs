//! Ball-vs-brick collision detection and response
//!
//! Detection is a plain box test against the brick's half-extent. Response is
//! arcade-style: the ball gets a fresh random direction and a fixed nudge,
//! there is no reflection vector and no penetration resolution.

use glam::Vec2;
use rand::Rng;

use super::direction::Direction;
use super::state::{Ball, Brick, BrickKind};
use crate::consts::{NUDGE_X, NUDGE_Y};

/// Result of a collision check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionResult {
    /// Guard failed or the ball is outside the box
    Miss,
    /// Ball was redirected, brick unchanged
    Bounced,
    /// Destructible brick lost a health point and is still on
    Damaged { remaining: i32 },
    /// Destructible brick lost its last health point and switched off
    Destroyed,
}

impl CollisionResult {
    #[inline]
    pub fn hit(self) -> bool {
        self != CollisionResult::Miss
    }
}

/// Whether a brick of this kind reacts to this ball at all.
///
/// The paddle ignores the ball's own power state, unlike the other kinds.
fn guard(ball: &Ball, brick: &Brick) -> bool {
    match brick.kind {
        BrickKind::Reflective => ball.is_on() && brick.is_on(),
        BrickKind::Paddle => brick.is_on(),
        BrickKind::Destructible => brick.is_on() && brick.health > 0 && ball.is_on(),
    }
}

/// Check one ball against one brick and apply the reaction on overlap
pub fn check_collision<R: Rng>(
    ball: &mut Ball,
    brick: &mut Brick,
    rng: &mut R,
) -> CollisionResult {
    if !guard(ball, brick) || !brick.contains(ball.pos) {
        return CollisionResult::Miss;
    }

    let result = match brick.kind {
        BrickKind::Reflective | BrickKind::Paddle => CollisionResult::Bounced,
        BrickKind::Destructible => {
            if brick.take_hit() {
                log::info!("Brick at ({:.2}, {:.2}) destroyed", brick.pos.x, brick.pos.y);
                CollisionResult::Destroyed
            } else {
                CollisionResult::Damaged {
                    remaining: brick.health,
                }
            }
        }
    };

    ball.direction = Direction::random(rng);
    ball.pos += Vec2::new(NUDGE_X, NUDGE_Y);

    log::trace!(
        "{:?} hit at ({:.3}, {:.3}) -> {:?}, new direction {}",
        brick.kind,
        ball.pos.x,
        ball.pos.y,
        result,
        ball.direction.code()
    );

    result
}
