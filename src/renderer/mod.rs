//! Draw-list renderer
//!
//! Turns the world into flat-colored convex polygons in normalized device
//! coordinates. Presenting them is up to the platform.

pub mod shapes;
pub mod vertex;

pub use vertex::Vertex;

use crate::consts::CIRCLE_SEGMENTS;
use crate::sim::{Brick, World};

/// One filled convex polygon, vertices in loop order
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub vertices: Vec<Vertex>,
}

/// Everything to draw for one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    /// Framebuffer size in pixels, used as the viewport
    pub viewport: (u32, u32),
    pub clear_color: [f32; 3],
    pub polygons: Vec<Polygon>,
}

impl DrawList {
    pub fn new(viewport: (u32, u32)) -> Self {
        Self {
            viewport,
            clear_color: vertex::colors::BACKGROUND,
            polygons: Vec::new(),
        }
    }

    /// Build the frame: balls first, then the paddle, then bricks
    pub fn from_world(world: &World, viewport: (u32, u32)) -> Self {
        let mut list = Self::new(viewport);

        for ball in &world.balls {
            list.push(shapes::circle(
                ball.pos,
                ball.radius,
                shapes::display_color(ball.color),
                CIRCLE_SEGMENTS,
            ));
        }

        list.push_brick(&world.paddle);
        for brick in &world.bricks {
            list.push_brick(brick);
        }

        list
    }

    fn push(&mut self, vertices: Vec<Vertex>) {
        self.polygons.push(Polygon { vertices });
    }

    /// Switched-off bricks are skipped. The drawn half side is `width / 2`.
    fn push_brick(&mut self, brick: &Brick) {
        if !brick.is_on() {
            return;
        }
        self.push(shapes::square(
            brick.pos,
            brick.width / 2.0,
            shapes::display_color(brick.color),
        ));
    }

    /// Flatten into a triangle list for backends without polygon support
    pub fn triangles(&self) -> Vec<Vertex> {
        let mut out = Vec::new();
        for poly in &self.polygons {
            let v = &poly.vertices;
            for i in 1..v.len().saturating_sub(1) {
                out.extend_from_slice(&[v[0], v[i], v[i + 1]]);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Power;

    #[test]
    fn test_empty_world_draws_paddle_and_bricks() {
        let world = World::new(1);
        let list = DrawList::from_world(&world, (480, 480));
        assert_eq!(list.viewport, (480, 480));
        assert_eq!(list.polygons.len(), 6);
        assert!(list.polygons.iter().all(|p| p.vertices.len() == 4));
    }

    #[test]
    fn test_off_brick_is_not_drawn() {
        let mut world = World::new(1);
        world.bricks[0].power = Power::Off;
        let list = DrawList::from_world(&world, (480, 480));
        assert_eq!(list.polygons.len(), 5);
    }

    #[test]
    fn test_balls_drawn_first_as_circles() {
        let mut world = World::new(1);
        world.spawn_ball();
        world.spawn_ball();
        let list = DrawList::from_world(&world, (100, 50));
        assert_eq!(list.polygons.len(), 8);
        assert_eq!(list.polygons[0].vertices.len(), 360);
        assert_eq!(list.polygons[1].vertices.len(), 360);
        for v in &list.polygons[0].vertices {
            assert!(v.color.iter().all(|c| (0.0..=1.0).contains(c)));
        }
    }

    #[test]
    fn test_brick_square_uses_half_width() {
        let world = World::new(1);
        let list = DrawList::from_world(&world, (480, 480));
        // Paddle at (0, -1), width 0.3 -> corners at +-0.15
        let paddle = &list.polygons[0];
        assert!((paddle.vertices[0].position[0] - 0.15).abs() < 1e-6);
        assert!((paddle.vertices[0].position[1] - (-0.85)).abs() < 1e-6);
    }

    #[test]
    fn test_triangle_fan() {
        let world = World::new(1);
        let list = DrawList::from_world(&world, (480, 480));
        // Six quads, two triangles each
        assert_eq!(list.triangles().len(), 6 * 2 * 3);
    }
}
