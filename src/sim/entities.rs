//! Entity records: ship, asteroids, bullets and background stars

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::polar_to_cartesian;

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    /// Top-left corner of the bounding box
    pub pos: Vec2,
    /// Side length of the bounding box
    pub size: f32,
    /// Speed per held direction key (pixels/frame)
    pub speed: f32,
    /// Facing angle (radians), kept while the ship is idle
    pub angle: f32,
}

impl Ship {
    /// Ship centered in an arena of the given size, facing right
    pub fn centered(arena_size: Vec2, size: f32, speed: f32) -> Self {
        Self {
            pos: arena_size / 2.0 - Vec2::splat(size / 2.0),
            size,
            speed,
            angle: 0.0,
        }
    }

    /// Center of the bounding box
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size / 2.0)
    }

    /// Bottom-right corner of the bounding box
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size)
    }

    /// Point on the bounding circle the ship is facing (where bullets leave)
    pub fn nose(&self) -> Vec2 {
        self.center() + polar_to_cartesian(self.size / 2.0, self.angle)
    }
}

/// One outline vertex in the asteroid's local, rotating frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapePoint {
    pub angle: f32,
    pub radius: f32,
}

impl ShapePoint {
    /// Local cartesian position of this vertex
    pub fn local(&self) -> Vec2 {
        polar_to_cartesian(self.radius, self.angle)
    }
}

/// A homing asteroid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asteroid {
    /// Center position
    pub pos: Vec2,
    /// Diameter, fixed at spawn
    pub size: f32,
    /// Homing speed (pixels/frame); only ever increases
    pub speed: f32,
    /// Current rotation (radians)
    pub angle: f32,
    /// Rotation per frame (radians, signed)
    pub rotation_speed: f32,
    /// Irregular outline, fixed at spawn
    pub shape: Vec<ShapePoint>,
}

impl Asteroid {
    /// Collision radius
    #[inline]
    pub fn radius(&self) -> f32 {
        self.size / 2.0
    }
}

/// A player bullet
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

/// Background star tint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StarTint {
    White,
    Blue,
    Amber,
}

impl StarTint {
    pub const ALL: [StarTint; 3] = [StarTint::White, StarTint::Blue, StarTint::Amber];
}

/// A background star (decoration only)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Star {
    pub pos: Vec2,
    pub radius: f32,
    /// Downward drift per frame
    pub speed: f32,
    pub tint: StarTint,
}

impl Star {
    /// Drift down, wrapping to the top once past `height`
    pub fn drift(&mut self, height: f32) {
        self.pos.y += self.speed;
        if self.pos.y > height {
            self.pos.y = 0.0;
        }
    }
}
