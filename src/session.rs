//! Game session controller
//!
//! Owns the session state and wires input, simulation, difficulty and
//! rendering to a [`Host`]. Each public method is one atomic unit of work:
//! a frame, a scheduler tick, or a key event never observes another one
//! half-done.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::platform::Host;
use crate::renderer::{Surface, draw_scene};
use crate::settings::Settings;
use crate::sim::input::normalize_key;
use crate::sim::{Arena, GameOverCause, GameState, InputState, SecondTick, on_second, tick};

pub struct Session<H: Host> {
    settings: Settings,
    arena: Arena,
    state: GameState,
    input: InputState,
    host: H,
    /// Draws one seed per started session
    seeds: Pcg32,
}

impl<H: Host> Session<H> {
    /// Idle controller; nothing runs until [`Session::start`]
    pub fn new(settings: Settings, arena: Arena, host: H, seed: u64) -> Self {
        Self {
            state: GameState::idle(arena, &settings),
            settings,
            arena,
            input: InputState::new(),
            host,
            seeds: Pcg32::seed_from_u64(seed),
        }
    }

    /// Start a fresh session, cancelling whatever was running
    pub fn start(&mut self) {
        self.host.stop_loops();

        let seed = self.seeds.random::<u64>();
        self.state = GameState::new(self.arena, &self.settings, seed);
        self.input.clear();
        log::info!(
            "Session started (seed {}, {} asteroids, arena {}x{})",
            seed,
            self.state.asteroids.len(),
            self.arena.width,
            self.arena.height
        );

        self.host.show_score(self.state.score);
        self.host.start_loops();
    }

    /// Shoot from the ship's nose; ignored unless running
    pub fn fire(&mut self) -> bool {
        self.state.fire(&self.settings)
    }

    /// Stop a running session and report `cause` with the final score.
    /// Ignored once the session has ended or before it started.
    pub fn end(&mut self, cause: GameOverCause) {
        if !self.state.running {
            return;
        }
        self.state.finish(cause);
        self.conclude();
    }

    /// Cancel the loops and report the outcome the state already recorded
    fn conclude(&mut self) {
        self.host.stop_loops();

        if let Some(report) = self.state.game_over() {
            log::info!("Game over: {} (score {})", report.cause, report.score);
            self.host.game_over(&report);
        }
    }

    /// One simulation step; returns whether the session is still running
    pub fn advance(&mut self) -> bool {
        if !self.state.running {
            return false;
        }

        let input = self.input.movement(&self.settings.controls);
        match tick(&mut self.state, &input, &self.settings) {
            Some(_) => {
                self.conclude();
                false
            }
            None => true,
        }
    }

    /// Step, draw the result and request the next frame
    pub fn frame<S: Surface>(&mut self, surface: &mut S) -> bool {
        if !self.advance() {
            return false;
        }
        draw_scene(&self.state, surface);
        self.host.next_frame();
        true
    }

    /// One difficulty scheduler tick
    pub fn second(&mut self) -> Option<SecondTick> {
        let tick = on_second(&mut self.state, &self.settings)?;
        self.host.show_score(tick.score);
        Some(tick)
    }

    /// Key pressed; returns true if it fired a bullet
    pub fn key_down(&mut self, key: &str) -> bool {
        let key = normalize_key(key);
        self.input.press(&key);
        self.settings.controls.is_fire(&key) && self.fire()
    }

    pub fn key_up(&mut self, key: &str) {
        self.input.release(key);
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}
