//! Session state and terminal outcomes
//!
//! One [`GameState`] is one play-through. It is rebuilt from scratch on every
//! start and owned by the session controller.

use std::fmt;

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Arena;
use super::entities::{Asteroid, Bullet, Ship, Star};
use super::spawn::{generate_stars, spawn_asteroid};
use crate::heading;
use crate::settings::Settings;

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverCause {
    /// Ship bounding box touched the arena edge
    LeftSafeZone,
    /// Ship collided with an asteroid
    Hit,
}

impl GameOverCause {
    pub fn message(&self) -> &'static str {
        match self {
            GameOverCause::LeftSafeZone => "You left the safe zone!",
            GameOverCause::Hit => "You were hit!",
        }
    }
}

impl fmt::Display for GameOverCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// End-of-session report surfaced to the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOver {
    pub cause: GameOverCause,
    /// Whole seconds survived
    pub score: u32,
}

impl fmt::Display for GameOver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Your time was: {} seconds.", self.cause, self.score)
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the session RNG was created from
    pub seed: u64,
    pub arena: Arena,
    pub ship: Ship,
    pub asteroids: Vec<Asteroid>,
    pub bullets: Vec<Bullet>,
    pub stars: Vec<Star>,
    /// Seconds survived
    pub score: u32,
    pub running: bool,
    /// Set once the session has ended
    pub outcome: Option<GameOverCause>,
    /// Frames simulated this session
    pub frames: u64,
    rng: Pcg32,
}

impl GameState {
    /// Idle state: ship centered, nothing spawned, not running
    pub fn idle(arena: Arena, settings: &Settings) -> Self {
        Self {
            seed: 0,
            arena,
            ship: Ship::centered(arena.size(), settings.ship.size, settings.ship.speed),
            asteroids: Vec::new(),
            bullets: Vec::new(),
            stars: Vec::new(),
            score: 0,
            running: false,
            outcome: None,
            frames: 0,
            rng: Pcg32::seed_from_u64(0),
        }
    }

    /// Fresh running session: centered ship, starfield and the initial asteroids
    pub fn new(arena: Arena, settings: &Settings, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let stars = generate_stars(&mut rng, &arena, &settings.stars);

        let mut state = Self {
            seed,
            stars,
            running: true,
            rng,
            ..Self::idle(arena, settings)
        };
        state.spawn_asteroids(settings.asteroids.initial_count, settings);
        state
    }

    /// Append `count` asteroids on random edges
    pub fn spawn_asteroids(&mut self, count: u32, settings: &Settings) {
        for _ in 0..count {
            let asteroid = spawn_asteroid(&mut self.rng, &self.arena, &settings.asteroids);
            self.asteroids.push(asteroid);
        }
    }

    /// Fire from the ship's nose along its facing angle
    pub fn fire(&mut self, settings: &Settings) -> bool {
        if !self.running {
            return false;
        }
        self.bullets.push(Bullet {
            pos: self.ship.nose(),
            vel: heading(self.ship.angle) * settings.bullet.speed,
            radius: settings.bullet.radius,
        });
        true
    }

    /// Stop the session, recording why. Only the first cause sticks.
    pub fn finish(&mut self, cause: GameOverCause) {
        self.running = false;
        self.outcome.get_or_insert(cause);
    }

    /// Report for a finished session
    pub fn game_over(&self) -> Option<GameOver> {
        self.outcome.map(|cause| GameOver {
            cause,
            score: self.score,
        })
    }
}
