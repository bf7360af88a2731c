//! Once-per-second difficulty escalation
//!
//! Each tick adds a second of survival. Every `wave_every` seconds a burst of
//! asteroids spawns and every live asteroid speeds up, permanently.

use super::state::GameState;
use crate::settings::Settings;

/// What one scheduler tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecondTick {
    /// Score after this tick
    pub score: u32,
    /// Asteroids added by this tick (0 between bursts)
    pub spawned: u32,
}

/// Number of asteroids a burst at `score` adds
pub fn burst_size(score: u32, settings: &Settings) -> u32 {
    score / settings.difficulty.burst_growth + 1
}

/// Run one scheduler tick; does nothing once the session has stopped
pub fn on_second(state: &mut GameState, settings: &Settings) -> Option<SecondTick> {
    if !state.running {
        return None;
    }

    state.score += 1;
    let score = state.score;

    let spawned = if score % settings.difficulty.wave_every == 0 {
        let count = burst_size(score, settings);
        state.spawn_asteroids(count, settings);
        // Includes the burst just spawned
        for asteroid in &mut state.asteroids {
            asteroid.speed += settings.difficulty.speed_step;
        }
        log::info!(
            "{}s survived: +{} asteroids ({} live)",
            score,
            count,
            state.asteroids.len()
        );
        count
    } else {
        0
    };

    log::debug!("Score: {}", score);
    Some(SecondTick { score, spawned })
}
