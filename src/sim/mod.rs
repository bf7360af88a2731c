//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One step per display refresh, one scheduler tick per second
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod entities;
pub mod input;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::Arena;
pub use difficulty::{SecondTick, on_second};
pub use entities::{Asteroid, Bullet, ShapePoint, Ship, Star, StarTint};
pub use input::{InputState, TickInput};
pub use spawn::{asteroid_shape, generate_stars, spawn_asteroid};
pub use state::{GameOver, GameOverCause, GameState};
pub use tick::tick;
