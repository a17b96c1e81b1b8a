//! Platform abstraction layer
//!
//! The windowing shell (window, GL/GPU context, keyboard) lives outside this
//! crate and implements [`Platform`]. This module owns the frame loop that
//! drives it:
//! - Input polled once per frame (held keys repeat)
//! - Simulation stepped
//! - Draw list presented

pub mod headless;

use std::fmt;

use crate::renderer::DrawList;
use crate::sim::{TickInput, World, tick};

pub use headless::{KeyScript, ScriptError, ScriptedPlatform};

/// Keys the game reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    Space,
    Left,
    Right,
}

/// Fatal platform start-up failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    /// Windowing library could not be initialized
    Init(String),
    /// Window or rendering context could not be created
    CreateWindow {
        width: u32,
        height: u32,
        reason: String,
    },
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::Init(reason) => write!(f, "platform init failed: {reason}"),
            PlatformError::CreateWindow {
                width,
                height,
                reason,
            } => write!(f, "cannot create {width}x{height} window: {reason}"),
        }
    }
}

impl std::error::Error for PlatformError {}

/// What the frame loop needs from a windowing shell
pub trait Platform {
    /// Current framebuffer size in pixels
    fn framebuffer_size(&self) -> (u32, u32);
    /// Whether a key is held right now
    fn key_down(&self, key: Key) -> bool;
    fn should_close(&self) -> bool;
    fn set_should_close(&mut self, close: bool);
    /// Draw one frame and swap buffers
    fn present(&mut self, frame: &DrawList);
    /// Pump window events; key state may change afterwards
    fn poll_events(&mut self);
}

/// Sample the keyboard into a tick input
pub fn poll_input<P: Platform + ?Sized>(platform: &P) -> TickInput {
    TickInput {
        quit: platform.key_down(Key::Escape),
        spawn_ball: platform.key_down(Key::Space),
        paddle_left: platform.key_down(Key::Left),
        paddle_right: platform.key_down(Key::Right),
    }
}

/// Totals for a finished run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub balls: usize,
    pub hits: u64,
    pub bricks_destroyed: u64,
}

/// Run frames until the platform reports it should close
pub fn run<P: Platform + ?Sized>(platform: &mut P, world: &mut World) -> RunSummary {
    let mut summary = RunSummary::default();

    while !platform.should_close() {
        let viewport = platform.framebuffer_size();
        let input = poll_input(&*platform);

        let report = tick(world, &input);
        if report.stepped {
            summary.frames += 1;
            summary.hits += u64::from(report.hits);
            summary.bricks_destroyed += u64::from(report.bricks_destroyed);
        }
        if world.close_requested {
            platform.set_should_close(true);
        }

        platform.present(&DrawList::from_world(world, viewport));
        platform.poll_events();
    }

    summary.balls = world.balls.len();
    log::info!(
        "Loop finished after {} frames (seed {}): {} balls, {} hits, {} bricks destroyed",
        summary.frames,
        world.seed,
        summary.balls,
        summary.hits,
        summary.bricks_destroyed
    );
    summary
}
