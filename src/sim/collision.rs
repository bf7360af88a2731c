//! Arena bounds and collision tests
//!
//! Everything here is a plain circle or box test; the interesting part is
//! which radius each pairing uses:
//! - ship vs asteroid: asteroid radius + a fraction of the ship size
//! - bullet vs asteroid: asteroid radius only (the bullet is a point)

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entities::{Asteroid, Bullet, Ship};

/// The rectangular play area, anchored at the origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Strictly inside (points on an edge are outside)
    pub fn contains(&self, p: Vec2) -> bool {
        p.x > 0.0 && p.x < self.width && p.y > 0.0 && p.y < self.height
    }

    /// Whether the ship's bounding box touches or crosses any edge
    pub fn ship_outside(&self, ship: &Ship) -> bool {
        let max = ship.max();
        ship.pos.x <= 0.0 || max.x >= self.width || ship.pos.y <= 0.0 || max.y >= self.height
    }
}

/// Ship/asteroid overlap, given the precomputed center distance
#[inline]
pub fn ship_hit(dist: f32, asteroid: &Asteroid, ship: &Ship, hit_radius_factor: f32) -> bool {
    dist < asteroid.radius() + hit_radius_factor * ship.size
}

/// Bullet/asteroid overlap; the bullet's own radius is not added
#[inline]
pub fn bullet_hit(bullet: &Bullet, asteroid: &Asteroid) -> bool {
    bullet.pos.distance(asteroid.pos) < asteroid.radius()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asteroid_at(pos: Vec2, size: f32) -> Asteroid {
        Asteroid {
            pos,
            size,
            speed: 1.0,
            angle: 0.0,
            rotation_speed: 0.0,
            shape: Vec::new(),
        }
    }

    #[test]
    fn test_contains_is_strict() {
        let arena = Arena::new(800.0, 600.0);
        assert!(arena.contains(Vec2::new(400.0, 300.0)));
        assert!(!arena.contains(Vec2::new(0.0, 300.0)));
        assert!(!arena.contains(Vec2::new(800.0, 300.0)));
        assert!(!arena.contains(Vec2::new(400.0, 600.0)));
        assert!(!arena.contains(Vec2::new(-1.0, 300.0)));
    }

    #[test]
    fn test_ship_touching_edge_is_outside() {
        let arena = Arena::new(800.0, 600.0);
        let mut ship = Ship::centered(arena.size(), 40.0, 4.0);
        assert!(!arena.ship_outside(&ship));

        ship.pos.x = 0.0;
        assert!(arena.ship_outside(&ship));

        ship.pos.x = 760.0;
        assert!(arena.ship_outside(&ship));

        ship.pos.x = 759.9;
        assert!(!arena.ship_outside(&ship));

        ship.pos.y = 560.0;
        assert!(arena.ship_outside(&ship));
    }

    #[test]
    fn test_ship_hit_uses_fraction_of_ship_size() {
        let ship = Ship::centered(Vec2::new(800.0, 600.0), 40.0, 4.0);
        let asteroid = asteroid_at(Vec2::ZERO, 40.0);
        // 20 + 0.4 * 40 = 36
        assert!(ship_hit(35.9, &asteroid, &ship, 0.4));
        assert!(!ship_hit(36.0, &asteroid, &ship, 0.4));
    }

    #[test]
    fn test_bullet_radius_not_counted() {
        let asteroid = asteroid_at(Vec2::new(100.0, 100.0), 40.0);
        let mut bullet = Bullet {
            pos: Vec2::new(121.0, 100.0),
            vel: Vec2::ZERO,
            radius: 4.0,
        };
        // Within radius + bullet radius, but not within radius alone
        assert!(!bullet_hit(&bullet, &asteroid));

        bullet.pos.x = 119.0;
        assert!(bullet_hit(&bullet, &asteroid));
    }
}
