//! Simulation module
//!
//! All gameplay logic lives here. It must stay free of rendering and
//! platform dependencies:
//! - One step per frame, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (insertion order for balls, declared order for bricks)

pub mod collision;
pub mod direction;
pub mod motion;
pub mod state;
pub mod tick;

pub use collision::{CollisionResult, check_collision};
pub use direction::{Component, Direction};
pub use motion::move_one_step;
pub use state::{Ball, Brick, BrickKind, Power, World};
pub use tick::{TickInput, TickReport, apply_input, tick};
