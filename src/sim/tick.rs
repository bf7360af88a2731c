//! Per-frame simulation step
//!
//! Order within a step is fixed: ship movement, boundary check, bullets,
//! asteroids (homing, spin, collisions), then star drift.

use glam::Vec2;

use super::collision::{bullet_hit, ship_hit};
use super::input::TickInput;
use super::state::{GameOverCause, GameState};
use crate::settings::Settings;

/// Advance the session by one display refresh
///
/// Returns the cause if this step ended the session. Does nothing once the
/// session has stopped.
pub fn tick(state: &mut GameState, input: &TickInput, settings: &Settings) -> Option<GameOverCause> {
    if !state.running {
        return None;
    }
    state.frames += 1;

    move_ship(state, input);

    if state.arena.ship_outside(&state.ship) {
        state.finish(GameOverCause::LeftSafeZone);
        return Some(GameOverCause::LeftSafeZone);
    }

    let arena = state.arena;
    state.bullets.retain(|b| arena.contains(b.pos));
    for bullet in &mut state.bullets {
        bullet.pos += bullet.vel;
    }

    if let Some(cause) = update_asteroids(state, settings) {
        state.finish(cause);
        return Some(cause);
    }

    let height = state.arena.height;
    for star in &mut state.stars {
        star.drift(height);
    }

    None
}

/// Sum per-key contributions; opposing keys cancel and diagonals are not
/// normalized, so diagonal movement is faster than axial movement.
fn move_ship(state: &mut GameState, input: &TickInput) {
    let ship = &mut state.ship;
    let mut vel = Vec2::ZERO;
    if input.up {
        vel.y -= ship.speed;
    }
    if input.down {
        vel.y += ship.speed;
    }
    if input.left {
        vel.x -= ship.speed;
    }
    if input.right {
        vel.x += ship.speed;
    }

    if vel != Vec2::ZERO {
        ship.angle = vel.y.atan2(vel.x);
    }
    ship.pos += vel;
}

/// Home every asteroid on the ship and resolve collisions
///
/// Iterates in reverse so asteroids and bullets can be removed in place.
fn update_asteroids(state: &mut GameState, settings: &Settings) -> Option<GameOverCause> {
    let target = state.ship.center();
    let hit_factor = settings.asteroids.hit_radius_factor;

    for i in (0..state.asteroids.len()).rev() {
        let asteroid = &mut state.asteroids[i];

        let to_ship = target - asteroid.pos;
        let dist = to_ship.length();
        // Zero distance has no direction; the asteroid stalls for a frame
        if dist > 0.0 {
            asteroid.pos += to_ship / dist * asteroid.speed;
        }
        asteroid.angle += asteroid.rotation_speed;

        if ship_hit(dist, asteroid, &state.ship, hit_factor) {
            return Some(GameOverCause::Hit);
        }

        let asteroid = &state.asteroids[i];
        let struck = (0..state.bullets.len())
            .rev()
            .find(|&j| bullet_hit(&state.bullets[j], asteroid));
        if let Some(j) = struck {
            state.asteroids.remove(i);
            state.bullets.remove(j);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::collision::Arena;
    use crate::sim::entities::{Asteroid, Bullet};
    use proptest::prelude::*;

    fn empty_state() -> (GameState, Settings) {
        let settings = Settings::default();
        let mut state = GameState::new(Arena::new(800.0, 600.0), &settings, 12345);
        state.asteroids.clear();
        (state, settings)
    }

    fn asteroid(pos: Vec2, size: f32, speed: f32) -> Asteroid {
        Asteroid {
            pos,
            size,
            speed,
            angle: 0.0,
            rotation_speed: 0.005,
            shape: Vec::new(),
        }
    }

    #[test]
    fn test_idle_step_keeps_ship() {
        let settings = Settings::default();
        let mut state = GameState::new(Arena::new(800.0, 600.0), &settings, 12345);
        let pos = state.ship.pos;
        let angle = state.ship.angle;

        assert_eq!(tick(&mut state, &TickInput::default(), &settings), None);
        assert_eq!(state.ship.pos, pos);
        assert_eq!(state.ship.angle, angle);
        assert!(state.running);
        assert_eq!(state.frames, 1);
    }

    #[test]
    fn test_stopped_state_is_noop() {
        let (mut state, settings) = empty_state();
        state.running = false;
        let input = TickInput {
            right: true,
            ..Default::default()
        };
        let pos = state.ship.pos;

        assert_eq!(tick(&mut state, &input, &settings), None);
        assert_eq!(state.ship.pos, pos);
        assert_eq!(state.frames, 0);
    }

    #[test]
    fn test_diagonal_movement_and_facing() {
        let (mut state, settings) = empty_state();
        let input = TickInput {
            down: true,
            right: true,
            ..Default::default()
        };
        let start = state.ship.pos;

        tick(&mut state, &input, &settings);
        assert_eq!(state.ship.pos, start + Vec2::new(4.0, 4.0));
        assert!((state.ship.angle - std::f32::consts::FRAC_PI_4).abs() < 1e-6);
    }

    #[test]
    fn test_opposing_keys_cancel_and_keep_angle() {
        let (mut state, settings) = empty_state();
        state.ship.angle = 1.0;
        let input = TickInput {
            left: true,
            right: true,
            ..Default::default()
        };
        let start = state.ship.pos;

        tick(&mut state, &input, &settings);
        assert_eq!(state.ship.pos, start);
        assert_eq!(state.ship.angle, 1.0);
    }

    #[test]
    fn test_leaving_arena_ends_before_collisions() {
        let (mut state, settings) = empty_state();
        state.ship.pos.x = 2.0;
        // Overlapping asteroid would be a hit, but the boundary check runs first
        let center = state.ship.center();
        state.asteroids.push(asteroid(center, 40.0, 1.0));
        let input = TickInput {
            left: true,
            ..Default::default()
        };

        assert_eq!(
            tick(&mut state, &input, &settings),
            Some(GameOverCause::LeftSafeZone)
        );
        assert!(!state.running);
        assert_eq!(state.asteroids[0].pos, center);
    }

    #[test]
    fn test_asteroid_homes_by_exactly_speed() {
        let (mut state, settings) = empty_state();
        let center = state.ship.center();
        // Directly above the ship, well outside 30 + 16
        state.asteroids.push(asteroid(center - Vec2::new(0.0, 200.0), 60.0, 1.5));

        assert_eq!(tick(&mut state, &TickInput::default(), &settings), None);
        assert!(state.running);
        let a = &state.asteroids[0];
        assert_eq!(a.pos.x, center.x);
        assert!((a.pos.y - (center.y - 198.5)).abs() < 1e-4);
        assert!((a.angle - 0.005).abs() < 1e-7);
    }

    #[test]
    fn test_homing_recomputed_each_frame() {
        let (mut state, settings) = empty_state();
        let center = state.ship.center();
        state.asteroids.push(asteroid(center + Vec2::new(300.0, 0.0), 30.0, 2.0));
        let up = TickInput {
            up: true,
            ..Default::default()
        };

        for _ in 0..10 {
            tick(&mut state, &up, &settings);
        }
        // The ship moved up, so the asteroid bends upward too
        assert!(state.asteroids[0].pos.y < center.y);
    }

    #[test]
    fn test_zero_distance_stalls() {
        let (mut state, mut settings) = empty_state();
        // Shrink the hit radius to nothing so the overlap does not end the game
        settings.asteroids.hit_radius_factor = 0.0;
        let center = state.ship.center();
        state.asteroids.push(asteroid(center, 0.0, 2.0));

        assert_eq!(tick(&mut state, &TickInput::default(), &settings), None);
        assert_eq!(state.asteroids[0].pos, center);
    }

    #[test]
    fn test_overlap_is_hit() {
        let (mut state, settings) = empty_state();
        let center = state.ship.center();
        state.asteroids.push(asteroid(center + Vec2::new(10.0, 0.0), 40.0, 1.0));

        assert_eq!(
            tick(&mut state, &TickInput::default(), &settings),
            Some(GameOverCause::Hit)
        );
        assert!(!state.running);
        assert_eq!(state.outcome, Some(GameOverCause::Hit));
    }

    #[test]
    fn test_hit_stops_processing_remaining_asteroids() {
        let (mut state, settings) = empty_state();
        let center = state.ship.center();
        let far = center - Vec2::new(0.0, 250.0);
        // Index 0 is processed last; index 1 hits first
        state.asteroids.push(asteroid(far, 40.0, 1.0));
        state.asteroids.push(asteroid(center, 40.0, 1.0));

        tick(&mut state, &TickInput::default(), &settings);
        assert_eq!(state.asteroids[0].pos, far);
    }

    #[test]
    fn test_bullet_destroys_asteroid() {
        let (mut state, settings) = empty_state();
        let center = state.ship.center();
        let pos = center + Vec2::new(200.0, 0.0);
        state.asteroids.push(asteroid(pos, 40.0, 1.0));
        state.bullets.push(Bullet {
            pos: pos - Vec2::new(10.0, 0.0),
            vel: Vec2::ZERO,
            radius: 4.0,
        });
        state.bullets.push(Bullet {
            pos: pos - Vec2::new(12.0, 0.0),
            vel: Vec2::ZERO,
            radius: 4.0,
        });

        tick(&mut state, &TickInput::default(), &settings);
        assert!(state.asteroids.is_empty());
        // Only one bullet is spent per asteroid: the later one in the list
        assert_eq!(state.bullets.len(), 1);
        assert_eq!(state.bullets[0].pos, pos - Vec2::new(10.0, 0.0));
    }

    #[test]
    fn test_bullet_leaves_arena() {
        let (mut state, settings) = empty_state();
        state.ship.angle = 0.0;
        state.fire(&settings);
        let start = state.bullets[0].pos;

        let mut steps = 0;
        while !state.bullets.is_empty() {
            let before = state.bullets[0].pos;
            tick(&mut state, &TickInput::default(), &settings);
            steps += 1;
            if before.x >= 800.0 {
                // Removed on the first step that sees it outside
                assert!(state.bullets.is_empty());
            } else {
                assert_eq!(state.bullets.len(), 1);
            }
        }

        let expected = ((800.0 - start.x) / 7.0).ceil() as usize + 1;
        assert_eq!(steps, expected);
    }

    #[test]
    fn test_stars_drift() {
        let (mut state, settings) = empty_state();
        let before: Vec<f32> = state.stars.iter().map(|s| s.pos.y).collect();

        tick(&mut state, &TickInput::default(), &settings);
        for (star, y) in state.stars.iter().zip(before) {
            let moved = star.pos.y - y;
            assert!(star.pos.y == 0.0 || (moved - star.speed).abs() < 1e-4);
        }
    }

    proptest! {
        #[test]
        fn prop_released_keys_keep_angle(angle in -3.14f32..3.14, frames in 1usize..60) {
            let (mut state, settings) = empty_state();
            state.ship.angle = angle;
            for _ in 0..frames {
                tick(&mut state, &TickInput::default(), &settings);
            }
            prop_assert_eq!(state.ship.angle, angle);
        }

        #[test]
        fn prop_bullet_travels_straight(angle in -3.14f32..3.14, frames in 1u32..20) {
            let (mut state, settings) = empty_state();
            state.ship.angle = angle;
            state.fire(&settings);
            let origin = state.bullets[0].pos;

            for _ in 0..frames {
                tick(&mut state, &TickInput::default(), &settings);
            }

            // 20 frames at 7 px cannot leave an 800x600 arena from the center
            let expected = origin + Vec2::new(angle.cos(), angle.sin()) * 7.0 * frames as f32;
            prop_assert!((state.bullets[0].pos - expected).length() < 1e-2);
        }
    }
}
