//! Brick Bounce - balls, bricks and a paddle in a [-1, 1] box
//!
//! Core modules:
//! - `sim`: Simulation (entities, collisions, motion, per-frame tick)
//! - `renderer`: Flat-colored polygon draw lists
//! - `platform`: Window/input seam and the frame loop
//! - `settings`: Data-driven tuning and level layout

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Half-extent of the playfield in normalized device coordinates
    pub const FIELD_EXTENT: f32 = 1.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 0.05;
    pub const BALL_SPEED: f32 = 0.03;

    /// Offset applied to a ball after any brick hit so it does not re-trigger
    /// the same brick next frame. Not a physical bounce.
    pub const NUDGE_X: f32 = 0.03;
    pub const NUDGE_Y: f32 = 0.04;

    /// Brick defaults
    pub const BRICK_HEALTH: i32 = 10;
    pub const BRICK_WIDTH: f32 = 0.2;

    /// Paddle defaults - starts centered on the bottom edge
    pub const PADDLE_X: f32 = 0.0;
    pub const PADDLE_Y: f32 = -1.0;
    pub const PADDLE_WIDTH: f32 = 0.3;
    /// Paddle x change per frame while an arrow key is held
    pub const PADDLE_STEP: f32 = 0.05;

    /// Spawned ball color channels are `raw / COLOR_DIVISOR` with raw in
    /// `0..=COLOR_RAW_MAX`, integer division.
    pub const COLOR_RAW_MAX: u32 = 32767;
    pub const COLOR_DIVISOR: u32 = 10_000;

    /// Vertices used to draw one ball (one per degree)
    pub const CIRCLE_SEGMENTS: u32 = 360;

    /// Window defaults
    pub const WINDOW_WIDTH: u32 = 480;
    pub const WINDOW_HEIGHT: u32 = 480;
}
