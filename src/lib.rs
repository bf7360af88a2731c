//! Asteroid Drift - a single-screen survival arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ship, homing asteroids, bullets, difficulty)
//! - `session`: Session lifecycle (start, fire, game over) wired to a host
//! - `renderer`: Stateless scene drawing onto a 2D surface
//! - `platform`: Browser/headless host abstraction
//! - `settings`: Data-driven game tuning

pub mod error;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;

pub use error::ConfigError;
pub use session::Session;
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants (defaults for [`Settings`])
pub mod consts {
    /// Arena dimensions used when no canvas dictates them
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Ship side length (pixels)
    pub const SHIP_SIZE: f32 = 40.0;
    /// Ship speed per pressed direction key (pixels/frame)
    pub const SHIP_SPEED: f32 = 4.0;

    /// Bullet speed (pixels/frame)
    pub const BULLET_SPEED: f32 = 7.0;
    pub const BULLET_RADIUS: f32 = 4.0;

    /// Asteroids spawned when a session starts
    pub const INITIAL_ASTEROIDS: u32 = 10;
    /// Asteroid diameter range at spawn
    pub const ASTEROID_MIN_SIZE: f32 = 30.0;
    pub const ASTEROID_MAX_SIZE: f32 = 60.0;
    /// Asteroid homing speed range at spawn (pixels/frame)
    pub const ASTEROID_MIN_SPEED: f32 = 1.0;
    pub const ASTEROID_MAX_SPEED: f32 = 2.5;
    /// Maximum rotation per frame, either direction (radians)
    pub const ASTEROID_MAX_SPIN: f32 = 0.01;
    /// Ship collision radius as a fraction of ship size
    pub const SHIP_HIT_RADIUS_FACTOR: f32 = 0.4;

    /// Outline vertex count range (inclusive)
    pub const SHAPE_MIN_POINTS: usize = 7;
    pub const SHAPE_MAX_POINTS: usize = 10;
    /// Outline radius jitter, as a multiple of size/2 (half-open)
    pub const SHAPE_MIN_JITTER: f32 = 0.8;
    pub const SHAPE_MAX_JITTER: f32 = 1.2;

    /// Difficulty scheduler period (milliseconds)
    pub const DIFFICULTY_TICK_MS: u32 = 1000;
    /// Seconds between asteroid bursts
    pub const WAVE_EVERY: u32 = 5;
    /// Burst size grows by one every this many seconds
    pub const BURST_GROWTH: u32 = 10;
    /// Speed added to every asteroid on each burst
    pub const SPEED_STEP: f32 = 0.1;

    /// Background starfield
    pub const STAR_COUNT: u32 = 80;
    pub const STAR_MAX_RADIUS: f32 = 1.5;
    pub const STAR_MIN_SPEED: f32 = 0.1;
    pub const STAR_MAX_SPEED: f32 = 0.3;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Unit vector pointing along `theta`
#[inline]
pub fn heading(theta: f32) -> Vec2 {
    polar_to_cartesian(1.0, theta)
}
