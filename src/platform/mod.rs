//! Platform abstraction layer
//!
//! The session drives two periodic tasks (the display-refresh frame loop and
//! the one-second difficulty timer) and reports to a presentation layer.
//! A [`Host`] supplies all of that:
//! - `web`: requestAnimationFrame, setInterval, DOM text and `alert`
//! - `headless`: deterministic in-process driver for native runs and tests

pub mod headless;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use headless::HeadlessHost;

use crate::sim::GameOver;

/// Timing and presentation collaborators of a session
pub trait Host {
    /// Register the frame loop and the difficulty timer for a new session
    fn start_loops(&mut self);
    /// Request one more frame from a running frame loop
    fn next_frame(&mut self);
    /// Cancel both registrations; must take effect before returning
    fn stop_loops(&mut self);
    /// Show the current survival score
    fn show_score(&mut self, score: u32);
    /// Surface the end-of-session report
    fn game_over(&mut self, report: &GameOver);
}

/// Score text shown to the player
pub fn score_label(score: u32) -> String {
    format!("Time: {score}s")
}
