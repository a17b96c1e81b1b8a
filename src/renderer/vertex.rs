//! Vertex types for 2D polygons

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// 2D vertex in normalized device coordinates with a flat color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 3],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 3]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    #[inline]
    pub fn at(pos: Vec2, color: [f32; 3]) -> Self {
        Self::new(pos.x, pos.y, color)
    }
}

/// Colors for non-entity elements
pub mod colors {
    pub const BACKGROUND: [f32; 3] = [0.0, 0.0, 0.0];
}
