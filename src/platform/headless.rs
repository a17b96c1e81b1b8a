//! Headless platform that replays a key script
//!
//! Script syntax: comma-separated frames, each a string of key letters
//! (`E` Escape, `S` Space, `L` Left, `R` Right, `.` nothing). A `*N` suffix
//! repeats a frame N times: `"S*3,.*10,L*5,E"`. When the script runs out the
//! platform asks to close, like a user closing the window.

use std::fmt;

use super::{Key, Platform, PlatformError};
use crate::renderer::DrawList;
use crate::settings::WindowSettings;

/// Keys held during one scripted frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeySet {
    pub escape: bool,
    pub space: bool,
    pub left: bool,
    pub right: bool,
}

impl KeySet {
    pub fn contains(&self, key: Key) -> bool {
        match key {
            Key::Escape => self.escape,
            Key::Space => self.space,
            Key::Left => self.left,
            Key::Right => self.right,
        }
    }
}

/// Bad key script
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    UnknownKey(char),
    BadRepeat(String),
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::UnknownKey(c) => write!(f, "unknown key '{c}' (expected E, S, L, R or .)"),
            ScriptError::BadRepeat(s) => write!(f, "bad repeat count '{s}'"),
        }
    }
}

impl std::error::Error for ScriptError {}

/// Per-frame key states
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyScript {
    frames: Vec<KeySet>,
}

impl KeyScript {
    pub fn parse(script: &str) -> Result<Self, ScriptError> {
        let mut frames = Vec::new();

        for token in script.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            let (keys, repeat) = match token.split_once('*') {
                Some((keys, count)) => {
                    let n = count
                        .trim()
                        .parse::<usize>()
                        .map_err(|_| ScriptError::BadRepeat(count.to_string()))?;
                    (keys, n)
                }
                None => (token, 1),
            };

            let mut set = KeySet::default();
            for c in keys.chars() {
                match c.to_ascii_uppercase() {
                    'E' => set.escape = true,
                    'S' => set.space = true,
                    'L' => set.left = true,
                    'R' => set.right = true,
                    '.' | ' ' => {}
                    other => return Err(ScriptError::UnknownKey(other)),
                }
            }
            frames.extend(std::iter::repeat_n(set, repeat));
        }

        Ok(Self { frames })
    }

    /// A script with no keys pressed for `frames` frames
    pub fn idle(frames: usize) -> Self {
        Self {
            frames: vec![KeySet::default(); frames],
        }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frame(&self, index: usize) -> Option<KeySet> {
        self.frames.get(index).copied()
    }
}

/// Windowless [`Platform`] for the CLI runner and tests
#[derive(Debug)]
pub struct ScriptedPlatform {
    size: (u32, u32),
    script: KeyScript,
    cursor: usize,
    should_close: bool,
    frames_presented: u64,
    last_frame: Option<DrawList>,
}

impl ScriptedPlatform {
    /// "Open a window". Fails the same way a real shell would on a
    /// zero-sized surface.
    pub fn open(window: &WindowSettings, script: KeyScript) -> Result<Self, PlatformError> {
        if window.width == 0 || window.height == 0 {
            return Err(PlatformError::CreateWindow {
                width: window.width,
                height: window.height,
                reason: "zero-sized surface".to_string(),
            });
        }

        log::info!(
            "Opened headless window '{}' {}x{} with {} scripted frames",
            window.title,
            window.width,
            window.height,
            script.len()
        );

        Ok(Self {
            size: (window.width, window.height),
            should_close: script.is_empty(),
            script,
            cursor: 0,
            frames_presented: 0,
            last_frame: None,
        })
    }

    /// Parse `source` as a key script and open on it. The script is this
    /// platform's input backend, so a script that does not parse fails
    /// initialization.
    pub fn from_source(window: &WindowSettings, source: &str) -> Result<Self, PlatformError> {
        let script = KeyScript::parse(source)
            .map_err(|e| PlatformError::Init(format!("key script: {e}")))?;
        Self::open(window, script)
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// Most recently presented frame
    pub fn last_frame(&self) -> Option<&DrawList> {
        self.last_frame.as_ref()
    }

    /// Simulate a window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.size = (width, height);
    }
}

impl Platform for ScriptedPlatform {
    fn framebuffer_size(&self) -> (u32, u32) {
        self.size
    }

    fn key_down(&self, key: Key) -> bool {
        self.script
            .frame(self.cursor)
            .is_some_and(|set| set.contains(key))
    }

    fn should_close(&self) -> bool {
        self.should_close
    }

    fn set_should_close(&mut self, close: bool) {
        self.should_close = close;
    }

    fn present(&mut self, frame: &DrawList) {
        self.frames_presented += 1;
        self.last_frame = Some(frame.clone());
    }

    fn poll_events(&mut self) {
        self.cursor += 1;
        if self.cursor >= self.script.len() {
            self.should_close = true;
        }
    }
}
