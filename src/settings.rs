//! Game settings and level layout
//!
//! Loaded from an optional JSON file. Every field has a default, so a file
//! only needs to mention what it changes.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::BrickKind;

/// Window the platform should open
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            title: "Brick Bounce".to_string(),
        }
    }
}

/// Simulation tuning knobs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Step size of a spawned ball
    pub ball_speed: f32,
    pub ball_radius: f32,
    /// Where Space drops new balls
    pub spawn_point: [f32; 2],
    /// Paddle x change per frame while an arrow is held
    pub paddle_step: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            ball_speed: BALL_SPEED,
            ball_radius: BALL_RADIUS,
            spawn_point: [0.0, 0.0],
            paddle_step: PADDLE_STEP,
        }
    }
}

/// Placement of one brick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrickSpec {
    pub kind: BrickKind,
    pub pos: [f32; 2],
    #[serde(default = "default_brick_width")]
    pub width: f32,
    pub color: [f32; 3],
}

fn default_brick_width() -> f32 {
    BRICK_WIDTH
}

impl BrickSpec {
    pub fn new(kind: BrickKind, x: f32, y: f32, color: [f32; 3]) -> Self {
        Self {
            kind,
            pos: [x, y],
            width: BRICK_WIDTH,
            color,
        }
    }
}

/// Classic five-brick layout, in collision order
pub fn default_bricks() -> Vec<BrickSpec> {
    const YELLOW: [f32; 3] = [1.0, 1.0, 0.0];
    const WHITE: [f32; 3] = [1.0, 1.0, 1.0];
    const ORANGE: [f32; 3] = [1.0, 0.5, 0.0];
    vec![
        BrickSpec::new(BrickKind::Destructible, 0.5, -0.33, YELLOW),
        BrickSpec::new(BrickKind::Reflective, -0.5, 0.33, YELLOW),
        BrickSpec::new(BrickKind::Destructible, -0.5, -0.33, WHITE),
        BrickSpec::new(BrickKind::Destructible, 0.0, 0.0, ORANGE),
        BrickSpec::new(BrickKind::Destructible, -0.5, -0.33, YELLOW),
    ]
}

pub fn default_paddle() -> BrickSpec {
    BrickSpec {
        kind: BrickKind::Paddle,
        pos: [PADDLE_X, PADDLE_Y],
        width: PADDLE_WIDTH,
        color: [1.0, 1.0, 1.0],
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window: WindowSettings,
    /// Fixed RNG seed; `None` seeds from the clock
    pub seed: Option<u64>,
    pub tuning: Tuning,
    pub paddle: BrickSpec,
    pub bricks: Vec<BrickSpec>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window: WindowSettings::default(),
            seed: None,
            tuning: Tuning::default(),
            paddle: default_paddle(),
            bricks: default_bricks(),
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    return settings;
                }
                Err(e) => log::warn!("Ignoring bad settings file {}: {}", path.display(), e),
            },
            Err(e) => log::warn!("Cannot read settings file {}: {}", path.display(), e),
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = self.to_json().map_err(std::io::Error::other)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    /// Configured seed, or one taken from the clock
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0)
        })
    }
}
