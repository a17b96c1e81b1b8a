//! Shape generation for 2D primitives
//!
//! Every shape is a convex polygon given as an ordered vertex loop, ready to
//! be drawn as a triangle fan.

use glam::{Vec2, Vec3};
use std::f32::consts::TAU;

use super::vertex::Vertex;

/// Clamp a color to the displayable range
#[inline]
pub fn display_color(color: Vec3) -> [f32; 3] {
    color.clamp(Vec3::ZERO, Vec3::ONE).to_array()
}

/// Filled circle as a `segments`-gon, starting at angle 0
pub fn circle(center: Vec2, radius: f32, color: [f32; 3], segments: u32) -> Vec<Vertex> {
    (0..segments)
        .map(|i| {
            let theta = (i as f32 / segments as f32) * TAU;
            Vertex::at(center + Vec2::new(theta.cos(), theta.sin()) * radius, color)
        })
        .collect()
}

/// Axis-aligned square with the given half side, clockwise from top-right
pub fn square(center: Vec2, half_side: f32, color: [f32; 3]) -> Vec<Vertex> {
    let h = half_side;
    [
        Vec2::new(h, h),
        Vec2::new(h, -h),
        Vec2::new(-h, -h),
        Vec2::new(-h, h),
    ]
    .into_iter()
    .map(|offset| Vertex::at(center + offset, color))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_vertices_lie_on_radius() {
        let verts = circle(Vec2::new(0.2, -0.1), 0.05, [1.0; 3], 360);
        assert_eq!(verts.len(), 360);
        for v in &verts {
            let d = Vec2::from(v.position) - Vec2::new(0.2, -0.1);
            assert!((d.length() - 0.05).abs() < 1e-5);
        }
        assert!((verts[0].position[0] - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_square_corners() {
        let verts = square(Vec2::new(0.5, -0.33), 0.1, [1.0, 1.0, 0.0]);
        let corners: Vec<[f32; 2]> = verts.iter().map(|v| v.position).collect();
        let expect = [[0.6, -0.23], [0.6, -0.43], [0.4, -0.43], [0.4, -0.23]];
        for (got, want) in corners.iter().zip(expect) {
            assert!((got[0] - want[0]).abs() < 1e-6);
            assert!((got[1] - want[1]).abs() < 1e-6);
        }
    }

    #[test]
    fn test_display_color_clamps() {
        assert_eq!(display_color(Vec3::new(3.0, 0.5, -1.0)), [1.0, 0.5, 0.0]);
    }
}
