//! Per-frame simulation step
//!
//! Input is applied first, then every ball is tested against the paddle and
//! each brick in declared order, then moved one step.

use super::collision::{CollisionResult, check_collision};
use super::motion::move_one_step;
use super::state::World;

/// Keys held during one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Escape: request termination after this frame
    pub quit: bool,
    /// Space: append a ball (repeats every frame while held)
    pub spawn_ball: bool,
    /// Left arrow
    pub paddle_left: bool,
    /// Right arrow
    pub paddle_right: bool,
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// False if the world had already been closed and nothing ran
    pub stepped: bool,
    pub spawned: u32,
    /// Collisions that produced a reaction (not deduplicated)
    pub hits: u32,
    pub bricks_destroyed: u32,
}

impl TickReport {
    fn record(&mut self, result: CollisionResult) {
        if result.hit() {
            self.hits += 1;
        }
        if result == CollisionResult::Destroyed {
            self.bricks_destroyed += 1;
        }
    }
}

/// Apply input mutations to the world
pub fn apply_input(world: &mut World, input: &TickInput) -> u32 {
    if input.quit {
        log::info!("Quit requested at frame {}", world.frame);
        world.close_requested = true;
    }

    let mut spawned = 0;
    if input.spawn_ball {
        world.spawn_ball();
        spawned += 1;
    }

    let step = world.tuning.paddle_step;
    if input.paddle_left {
        world.move_paddle(-step);
    }
    if input.paddle_right {
        world.move_paddle(step);
    }
    spawned
}

/// Advance the world by one frame
pub fn tick(world: &mut World, input: &TickInput) -> TickReport {
    if world.close_requested {
        return TickReport::default();
    }

    let mut report = TickReport {
        stepped: true,
        spawned: apply_input(world, input),
        ..Default::default()
    };

    let World {
        balls,
        bricks,
        paddle,
        rng,
        ..
    } = world;

    for ball in balls.iter_mut() {
        report.record(check_collision(ball, paddle, rng));
        for brick in bricks.iter_mut() {
            report.record(check_collision(ball, brick, rng));
        }

        move_one_step(ball, rng);
    }

    world.frame += 1;
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::direction::Direction;
    use crate::sim::state::{Ball, Brick, BrickKind, Power};
    use glam::{Vec2, Vec3};
    use proptest::prelude::*;

    fn press(f: impl FnOnce(&mut TickInput)) -> TickInput {
        let mut input = TickInput::default();
        f(&mut input);
        input
    }

    #[test]
    fn test_space_spawns_exactly_one_ball_per_frame() {
        let mut world = World::new(12345);
        let space = press(|i| i.spawn_ball = true);

        let report = tick(&mut world, &space);
        assert_eq!(report.spawned, 1);
        assert_eq!(world.balls.len(), 1);

        tick(&mut world, &space);
        assert_eq!(world.balls.len(), 2);

        tick(&mut world, &TickInput::default());
        assert_eq!(world.balls.len(), 2);
    }

    #[test]
    fn test_spawned_ball_starts_at_origin_heading_right() {
        let mut world = World::new(1);
        apply_input(&mut world, &press(|i| i.spawn_ball = true));
        assert_eq!(world.balls[0].pos, Vec2::ZERO);
        assert_eq!(world.balls[0].direction.code(), 2);
    }

    #[test]
    fn test_escape_stops_further_steps() {
        let mut world = World::new(5);
        tick(&mut world, &press(|i| i.spawn_ball = true));

        // The quit frame itself still completes
        let report = tick(&mut world, &press(|i| i.quit = true));
        assert!(report.stepped);
        assert!(world.close_requested);
        let frame = world.frame;
        let balls = world.balls.clone();

        let report = tick(&mut world, &press(|i| i.spawn_ball = true));
        assert!(!report.stepped);
        assert_eq!(world.frame, frame);
        assert_eq!(world.balls, balls);
    }

    #[test]
    fn test_left_and_right_move_paddle() {
        let mut world = World::new(0);
        let x0 = world.paddle.pos.x;
        tick(&mut world, &press(|i| i.paddle_left = true));
        assert!((world.paddle.pos.x - (x0 - 0.05)).abs() < 1e-6);
        tick(&mut world, &press(|i| i.paddle_right = true));
        tick(&mut world, &press(|i| i.paddle_right = true));
        assert!((world.paddle.pos.x - (x0 + 0.05)).abs() < 1e-6);

        // Both held cancel out
        let before = world.paddle.pos.x;
        tick(
            &mut world,
            &press(|i| {
                i.paddle_left = true;
                i.paddle_right = true;
            }),
        );
        assert!((world.paddle.pos.x - before).abs() < 1e-6);
    }

    #[test]
    fn test_overlapping_bricks_each_react() {
        // Two destructible bricks at the same spot both take the hit
        let mut world = World::new(9);
        world.bricks = vec![
            Brick::new(BrickKind::Destructible, Vec2::new(0.6, 0.6), 0.2, Vec3::ONE),
            Brick::new(BrickKind::Destructible, Vec2::new(0.6, 0.6), 0.5, Vec3::ONE),
        ];
        world.balls.push(Ball::new(
            Vec2::new(0.6, 0.6),
            0.05,
            Direction::Right,
            Vec3::ZERO,
        ));

        let report = tick(&mut world, &TickInput::default());
        // The first nudge keeps the ball inside the wider second brick
        assert_eq!(report.hits, 2);
        assert_eq!(world.bricks[0].health, 9);
        assert_eq!(world.bricks[1].health, 9);
    }

    #[test]
    fn test_destroyed_brick_is_reported_once() {
        let mut world = World::new(2);
        world.bricks = vec![Brick::new(
            BrickKind::Destructible,
            Vec2::new(0.5, 0.5),
            0.2,
            Vec3::ONE,
        )];
        world.bricks[0].health = 1;
        world.balls.push(Ball::new(
            Vec2::new(0.5, 0.5),
            0.05,
            Direction::Right,
            Vec3::ZERO,
        ));
        let report = tick(&mut world, &TickInput::default());
        assert_eq!(report.bricks_destroyed, 1);
        assert_eq!(world.bricks[0].power, Power::Off);

        world.balls[0].pos = Vec2::new(0.5, 0.5);
        let report = tick(&mut world, &TickInput::default());
        assert_eq!(report.hits, 0);
    }

    #[test]
    fn test_determinism() {
        let mut world1 = World::new(99999);
        let mut world2 = World::new(99999);

        let inputs = [
            press(|i| i.spawn_ball = true),
            press(|i| i.paddle_left = true),
            press(|i| i.spawn_ball = true),
            TickInput::default(),
        ];

        for _ in 0..50 {
            for input in &inputs {
                tick(&mut world1, input);
                tick(&mut world2, input);
            }
        }

        assert_eq!(world1.frame, world2.frame);
        assert_eq!(world1.balls, world2.balls);
        assert_eq!(world1.bricks, world2.bricks);
        assert_eq!(world1.paddle, world2.paddle);
    }

    proptest! {
        #[test]
        fn prop_left_moves_paddle_by_exact_step(frames in 1usize..200) {
            let mut world = World::new(0);
            let left = press(|i| i.paddle_left = true);
            for _ in 0..frames {
                let before = world.paddle.pos.x;
                tick(&mut world, &left);
                prop_assert!((world.paddle.pos.x - (before - 0.05)).abs() < 1e-5);
            }
            // No lower bound
            prop_assert!(world.paddle.pos.x <= -0.05 * frames as f32 + 1e-3);
        }

        #[test]
        fn prop_destructible_health_never_increases(seed in any::<u64>(), frames in 1usize..300) {
            let mut world = World::new(seed);
            let space = press(|i| i.spawn_ball = true);
            let mut last: Vec<i32> = world.bricks.iter().map(|b| b.health).collect();
            let mut was_off: Vec<bool> = world.bricks.iter().map(|b| !b.is_on()).collect();
            for n in 0..frames {
                let input = if n % 10 == 0 { space } else { TickInput::default() };
                tick(&mut world, &input);
                for (i, brick) in world.bricks.iter().enumerate() {
                    prop_assert!(brick.health <= last[i]);
                    prop_assert!(brick.health >= 0);
                    if was_off[i] {
                        prop_assert!(!brick.is_on());
                    }
                    last[i] = brick.health;
                    was_off[i] = !brick.is_on();
                }
            }
        }
    }
}
