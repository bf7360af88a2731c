//! Game settings and tuning
//!
//! Every section falls back to the compile-time defaults in [`crate::consts`],
//! so a settings document only needs the values it overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Arena size for hosts without a canvas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaSettings {
    pub width: f32,
    pub height: f32,
}

impl Default for ArenaSettings {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
        }
    }
}

/// Player ship
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipSettings {
    /// Side length of the ship's bounding box
    pub size: f32,
    /// Velocity contributed by each held direction key
    pub speed: f32,
}

impl Default for ShipSettings {
    fn default() -> Self {
        Self {
            size: SHIP_SIZE,
            speed: SHIP_SPEED,
        }
    }
}

/// Player bullets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BulletSettings {
    pub speed: f32,
    pub radius: f32,
}

impl Default for BulletSettings {
    fn default() -> Self {
        Self {
            speed: BULLET_SPEED,
            radius: BULLET_RADIUS,
        }
    }
}

/// Asteroid spawning and collision
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AsteroidSettings {
    pub initial_count: u32,
    pub min_size: f32,
    pub max_size: f32,
    pub min_speed: f32,
    pub max_speed: f32,
    /// Largest rotation per frame in either direction
    pub max_spin: f32,
    /// Ship collision radius = factor * ship size
    pub hit_radius_factor: f32,
}

impl Default for AsteroidSettings {
    fn default() -> Self {
        Self {
            initial_count: INITIAL_ASTEROIDS,
            min_size: ASTEROID_MIN_SIZE,
            max_size: ASTEROID_MAX_SIZE,
            min_speed: ASTEROID_MIN_SPEED,
            max_speed: ASTEROID_MAX_SPEED,
            max_spin: ASTEROID_MAX_SPIN,
            hit_radius_factor: SHIP_HIT_RADIUS_FACTOR,
        }
    }
}

/// Once-per-second difficulty escalation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultySettings {
    /// Scheduler period in milliseconds
    pub tick_ms: u32,
    /// A burst fires whenever score is a multiple of this
    pub wave_every: u32,
    /// Burst size is `score / burst_growth + 1`
    pub burst_growth: u32,
    /// Speed added to every live asteroid per burst
    pub speed_step: f32,
}

impl Default for DifficultySettings {
    fn default() -> Self {
        Self {
            tick_ms: DIFFICULTY_TICK_MS,
            wave_every: WAVE_EVERY,
            burst_growth: BURST_GROWTH,
            speed_step: SPEED_STEP,
        }
    }
}

/// Background starfield
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarSettings {
    pub count: u32,
    pub max_radius: f32,
    pub min_speed: f32,
    pub max_speed: f32,
}

impl Default for StarSettings {
    fn default() -> Self {
        Self {
            count: STAR_COUNT,
            max_radius: STAR_MAX_RADIUS,
            min_speed: STAR_MIN_SPEED,
            max_speed: STAR_MAX_SPEED,
        }
    }
}

/// Key bindings, matched against lowercased key identifiers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Controls {
    pub up: String,
    pub down: String,
    pub left: String,
    pub right: String,
    pub fire: String,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            up: "w".into(),
            down: "s".into(),
            left: "a".into(),
            right: "d".into(),
            fire: " ".into(),
        }
    }
}

impl Controls {
    /// Whether `key` (already normalized) is the fire binding
    pub fn is_fire(&self, key: &str) -> bool {
        key == self.fire.to_lowercase()
    }

    fn bindings(&self) -> [(&'static str, &str); 5] {
        [
            ("controls.up", self.up.as_str()),
            ("controls.down", self.down.as_str()),
            ("controls.left", self.left.as_str()),
            ("controls.right", self.right.as_str()),
            ("controls.fire", self.fire.as_str()),
        ]
    }
}

/// Complete game settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub arena: ArenaSettings,
    pub ship: ShipSettings,
    pub bullet: BulletSettings,
    pub asteroids: AsteroidSettings,
    pub difficulty: DifficultySettings,
    pub stars: StarSettings,
    pub controls: Controls,
}

impl Settings {
    /// Parse and validate a JSON settings document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read, parse and validate a JSON settings file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("arena.width", self.arena.width)?;
        positive("arena.height", self.arena.height)?;
        positive("ship.size", self.ship.size)?;
        positive("ship.speed", self.ship.speed)?;
        positive("bullet.speed", self.bullet.speed)?;
        positive("bullet.radius", self.bullet.radius)?;

        let a = &self.asteroids;
        positive("asteroids.min_size", a.min_size)?;
        ordered("asteroids.max_size", a.min_size, a.max_size)?;
        positive("asteroids.min_speed", a.min_speed)?;
        ordered("asteroids.max_speed", a.min_speed, a.max_speed)?;
        non_negative("asteroids.max_spin", a.max_spin)?;
        positive("asteroids.hit_radius_factor", a.hit_radius_factor)?;

        let d = &self.difficulty;
        if d.tick_ms == 0 {
            return Err(ConfigError::invalid("difficulty.tick_ms", "must be at least 1"));
        }
        if d.wave_every == 0 {
            return Err(ConfigError::invalid("difficulty.wave_every", "must be at least 1"));
        }
        if d.burst_growth == 0 {
            return Err(ConfigError::invalid("difficulty.burst_growth", "must be at least 1"));
        }
        non_negative("difficulty.speed_step", d.speed_step)?;

        let s = &self.stars;
        non_negative("stars.max_radius", s.max_radius)?;
        non_negative("stars.min_speed", s.min_speed)?;
        ordered("stars.max_speed", s.min_speed, s.max_speed)?;

        let bindings = self.controls.bindings();
        for (i, &(field, key)) in bindings.iter().enumerate() {
            if key.is_empty() {
                return Err(ConfigError::invalid(field, "key binding is empty"));
            }
            let key = key.to_lowercase();
            if bindings[..i].iter().any(|(_, other)| other.to_lowercase() == key) {
                return Err(ConfigError::invalid(field, format!("key {key:?} is bound twice")));
            }
        }

        Ok(())
    }

    /// Load settings from the page's `game-config` JSON element (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::CONFIG_ELEMENT))
            .and_then(|el| el.text_content());

        let Some(json) = json else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from #{}", Self::CONFIG_ELEMENT);
                settings
            }
            Err(e) => {
                log::warn!("Ignoring #{}: {}", Self::CONFIG_ELEMENT, e);
                Self::default()
            }
        }
    }

    /// Element id holding an optional JSON settings document
    #[cfg(target_arch = "wasm32")]
    const CONFIG_ELEMENT: &'static str = "game-config";
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("must be positive, got {value}")))
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("must not be negative, got {value}")))
    }
}

fn ordered(field: &'static str, min: f32, max: f32) -> Result<(), ConfigError> {
    if max.is_finite() && max >= min {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("must be at least {min}, got {max}")))
    }
}
