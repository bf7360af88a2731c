//! Procedural generation: asteroid spawns, outlines and the starfield
//!
//! All randomness comes from the caller's RNG, so a seeded state always
//! produces the same arena.

use glam::Vec2;
use rand::Rng;

use super::collision::Arena;
use super::entities::{Asteroid, ShapePoint, Star, StarTint};
use crate::consts::{SHAPE_MAX_JITTER, SHAPE_MAX_POINTS, SHAPE_MIN_JITTER, SHAPE_MIN_POINTS};
use crate::settings::{AsteroidSettings, StarSettings};

/// Arena edge an asteroid enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Left, Edge::Right, Edge::Top, Edge::Bottom];

    /// Point on this edge at fraction `t` (0..1) along it
    pub fn point(self, arena: &Arena, t: f32) -> Vec2 {
        match self {
            Edge::Left => Vec2::new(0.0, t * arena.height),
            Edge::Right => Vec2::new(arena.width, t * arena.height),
            Edge::Top => Vec2::new(t * arena.width, 0.0),
            Edge::Bottom => Vec2::new(t * arena.width, arena.height),
        }
    }
}

/// Create an asteroid on a random arena edge
pub fn spawn_asteroid<R: Rng>(rng: &mut R, arena: &Arena, tuning: &AsteroidSettings) -> Asteroid {
    let size = rng.random_range(tuning.min_size..=tuning.max_size);
    let edge = Edge::ALL[rng.random_range(0..Edge::ALL.len())];
    let pos = edge.point(arena, rng.random::<f32>());
    let speed = rng.random_range(tuning.min_speed..=tuning.max_speed);
    let rotation_speed = rng.random_range(-tuning.max_spin..=tuning.max_spin);
    let shape = asteroid_shape(rng, size);

    Asteroid {
        pos,
        size,
        speed,
        angle: 0.0,
        rotation_speed,
        shape,
    }
}

/// Irregular outline: evenly spaced angles with jittered radii
///
/// Angles increase monotonically, so the polygon never self-intersects.
pub fn asteroid_shape<R: Rng>(rng: &mut R, size: f32) -> Vec<ShapePoint> {
    let points = rng.random_range(SHAPE_MIN_POINTS..=SHAPE_MAX_POINTS);
    let step = std::f32::consts::TAU / points as f32;

    (0..points)
        .map(|i| ShapePoint {
            angle: i as f32 * step,
            radius: size / 2.0 * rng.random_range(SHAPE_MIN_JITTER..SHAPE_MAX_JITTER),
        })
        .collect()
}

/// Scatter the background starfield across the arena
pub fn generate_stars<R: Rng>(rng: &mut R, arena: &Arena, tuning: &StarSettings) -> Vec<Star> {
    (0..tuning.count)
        .map(|_| Star {
            pos: Vec2::new(
                rng.random::<f32>() * arena.width,
                rng.random::<f32>() * arena.height,
            ),
            radius: rng.random_range(0.0..=tuning.max_radius),
            speed: rng.random_range(tuning.min_speed..=tuning.max_speed),
            tint: StarTint::ALL[rng.random_range(0..StarTint::ALL.len())],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn on_edge(arena: &Arena, p: Vec2) -> bool {
        let along_x = (0.0..=arena.width).contains(&p.x);
        let along_y = (0.0..=arena.height).contains(&p.y);
        (p.x == 0.0 || p.x == arena.width) && along_y
            || (p.y == 0.0 || p.y == arena.height) && along_x
    }

    #[test]
    fn test_spawn_on_edge_within_ranges() {
        let mut rng = Pcg32::seed_from_u64(7);
        let arena = Arena::new(800.0, 600.0);
        let tuning = AsteroidSettings::default();

        for _ in 0..200 {
            let a = spawn_asteroid(&mut rng, &arena, &tuning);
            assert!(on_edge(&arena, a.pos), "{:?} not on an edge", a.pos);
            assert!((30.0..=60.0).contains(&a.size));
            assert!((1.0..=2.5).contains(&a.speed));
            assert!(a.rotation_speed.abs() <= 0.01);
            assert_eq!(a.angle, 0.0);
        }
    }

    #[test]
    fn test_spawn_reaches_every_edge() {
        let mut rng = Pcg32::seed_from_u64(11);
        let arena = Arena::new(800.0, 600.0);
        let tuning = AsteroidSettings::default();
        let mut seen = [false; 4];

        for _ in 0..200 {
            let a = spawn_asteroid(&mut rng, &arena, &tuning);
            let p = a.pos;
            if p.x == 0.0 {
                seen[0] = true;
            } else if p.x == arena.width {
                seen[1] = true;
            } else if p.y == 0.0 {
                seen[2] = true;
            } else if p.y == arena.height {
                seen[3] = true;
            }
        }

        assert_eq!(seen, [true; 4]);
    }

    #[test]
    fn test_shape_angles_evenly_spaced() {
        let mut rng = Pcg32::seed_from_u64(3);
        let shape = asteroid_shape(&mut rng, 50.0);
        let step = std::f32::consts::TAU / shape.len() as f32;

        for (i, p) in shape.iter().enumerate() {
            assert!((p.angle - i as f32 * step).abs() < 1e-5);
        }
    }

    #[test]
    fn test_stars() {
        let mut rng = Pcg32::seed_from_u64(5);
        let arena = Arena::new(800.0, 600.0);
        let stars = generate_stars(&mut rng, &arena, &StarSettings::default());

        assert_eq!(stars.len(), 80);
        for s in &stars {
            assert!((0.0..=800.0).contains(&s.pos.x));
            assert!((0.0..=600.0).contains(&s.pos.y));
            assert!((0.0..=1.5).contains(&s.radius));
            assert!((0.1..=0.3).contains(&s.speed));
        }
    }

    #[test]
    fn test_same_seed_same_asteroid() {
        let arena = Arena::new(800.0, 600.0);
        let tuning = AsteroidSettings::default();
        let a = spawn_asteroid(&mut Pcg32::seed_from_u64(42), &arena, &tuning);
        let b = spawn_asteroid(&mut Pcg32::seed_from_u64(42), &arena, &tuning);

        assert_eq!(a.pos, b.pos);
        assert_eq!(a.size, b.size);
        assert_eq!(a.shape, b.shape);
    }

    proptest! {
        #[test]
        fn prop_shape_vertex_count_and_radii(seed in any::<u64>(), size in 30.0f32..=60.0) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let shape = asteroid_shape(&mut rng, size);

            prop_assert!((7..=10).contains(&shape.len()));
            for p in &shape {
                prop_assert!(p.radius >= 0.4 * size - 1e-4);
                prop_assert!(p.radius <= 0.6 * size + 1e-4);
            }
        }
    }
}
