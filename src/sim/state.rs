//! World state and core simulation types
//!
//! Everything the frame loop mutates lives in [`World`]; no global storage.

use glam::{Vec2, Vec3};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::direction::Direction;
use crate::consts::*;
use crate::settings::{BrickSpec, Settings, Tuning};

/// On/off switch shared by bricks and balls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Power {
    #[default]
    On,
    Off,
}

/// Brick behaviour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrickKind {
    /// Bounces balls, never wears out
    Reflective,
    /// Loses one health per hit, switches off at zero
    Destructible,
    /// Player controlled, never destroyed
    Paddle,
}

/// A static square obstacle
#[derive(Debug, Clone, PartialEq)]
pub struct Brick {
    pub kind: BrickKind,
    /// Center
    pub pos: Vec2,
    /// Half-extent for collisions; the drawn square uses `width / 2`
    pub width: f32,
    pub color: Vec3,
    pub health: i32,
    pub power: Power,
}

impl Brick {
    pub fn new(kind: BrickKind, pos: Vec2, width: f32, color: Vec3) -> Self {
        Self {
            kind,
            pos,
            width,
            color,
            health: BRICK_HEALTH,
            power: Power::On,
        }
    }

    pub fn from_spec(spec: &BrickSpec) -> Self {
        Self::new(
            spec.kind,
            Vec2::from(spec.pos),
            spec.width,
            Vec3::from(spec.color),
        )
    }

    #[inline]
    pub fn is_on(&self) -> bool {
        self.power == Power::On
    }

    /// Box overlap test: left/bottom edges exclusive, right/top inclusive
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x > self.pos.x - self.width
            && point.x <= self.pos.x + self.width
            && point.y > self.pos.y - self.width
            && point.y <= self.pos.y + self.width
    }

    /// Apply one hit. Returns true if the brick switched off.
    pub fn take_hit(&mut self) -> bool {
        self.health -= 1;
        self.color.y = 1.0;
        if self.health <= 0 {
            self.power = Power::Off;
            return true;
        }
        false
    }
}

/// A moving circle
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub radius: f32,
    pub color: Vec3,
    /// Distance covered per axis per step
    pub speed: f32,
    pub direction: Direction,
    pub power: Power,
}

impl Ball {
    pub fn new(pos: Vec2, radius: f32, direction: Direction, color: Vec3) -> Self {
        Self {
            pos,
            radius,
            color,
            speed: BALL_SPEED,
            direction,
            power: Power::On,
        }
    }

    #[inline]
    pub fn is_on(&self) -> bool {
        self.power == Power::On
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct World {
    /// Seed the RNG was built from
    pub seed: u64,
    pub rng: Pcg32,
    /// Ball population, insertion ordered
    pub balls: Vec<Ball>,
    /// Bricks in declared (collision) order
    pub bricks: Vec<Brick>,
    pub paddle: Brick,
    pub tuning: Tuning,
    /// Frames simulated so far
    pub frame: u64,
    /// Set once quit has been requested; the world stops stepping after that
    pub close_requested: bool,
}

impl World {
    /// Build the default level with the given seed
    pub fn new(seed: u64) -> Self {
        Self::from_settings(&Settings::default(), seed)
    }

    pub fn from_settings(settings: &Settings, seed: u64) -> Self {
        let mut paddle = Brick::from_spec(&settings.paddle);
        paddle.kind = BrickKind::Paddle;

        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            balls: Vec::new(),
            bricks: settings.bricks.iter().map(Brick::from_spec).collect(),
            paddle,
            tuning: settings.tuning,
            frame: 0,
            close_requested: false,
        }
    }

    /// Append one ball at the spawn point, heading right
    pub fn spawn_ball(&mut self) -> &Ball {
        let color = Vec3::new(
            self.random_channel(),
            self.random_channel(),
            self.random_channel(),
        );
        let mut ball = Ball::new(
            Vec2::from(self.tuning.spawn_point),
            self.tuning.ball_radius,
            Direction::Right,
            color,
        );
        ball.speed = self.tuning.ball_speed;
        self.balls.push(ball);
        log::debug!("Spawned ball #{} color={:?}", self.balls.len(), color);
        &self.balls[self.balls.len() - 1]
    }

    /// Coarse color channel: a 15-bit draw integer-divided, so one of 0..=3
    /// before the renderer clamps it.
    fn random_channel(&mut self) -> f32 {
        (self.rng.random_range(0..=COLOR_RAW_MAX) / COLOR_DIVISOR) as f32
    }

    /// Shift the paddle horizontally. Not clamped to the playfield.
    pub fn move_paddle(&mut self, dx: f32) {
        self.paddle.pos.x += dx;
    }

    /// Bricks that are still switched on
    pub fn live_bricks(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter().filter(|b| b.is_on())
    }
}
