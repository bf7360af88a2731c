//! In-process host for native runs and tests
//!
//! Nothing is scheduled for real: the host only records what the session
//! asked for, and [`run`] plays those requests back on a fixed cadence.

use super::Host;
use crate::renderer::Surface;
use crate::session::Session;
use crate::sim::GameOver;

#[derive(Debug, Default)]
pub struct HeadlessHost {
    frame_pending: bool,
    interval_armed: bool,
    /// Times both loops were registered
    pub registrations: u32,
    /// Times live loops were cancelled
    pub cancellations: u32,
    /// Every score shown, in order
    pub scores: Vec<u32>,
    /// Every game-over report, in order
    pub reports: Vec<GameOver>,
}

impl HeadlessHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the session has asked for another frame
    pub fn frame_pending(&self) -> bool {
        self.frame_pending
    }

    /// Whether the difficulty timer is registered
    pub fn interval_armed(&self) -> bool {
        self.interval_armed
    }

    /// Consume the pending frame request, if any
    fn take_frame(&mut self) -> bool {
        std::mem::take(&mut self.frame_pending)
    }
}

impl Host for HeadlessHost {
    fn start_loops(&mut self) {
        self.registrations += 1;
        self.frame_pending = true;
        self.interval_armed = true;
    }

    fn next_frame(&mut self) {
        self.frame_pending = true;
    }

    fn stop_loops(&mut self) {
        if self.frame_pending || self.interval_armed {
            self.cancellations += 1;
        }
        self.frame_pending = false;
        self.interval_armed = false;
    }

    fn show_score(&mut self, score: u32) {
        self.scores.push(score);
    }

    fn game_over(&mut self, report: &GameOver) {
        self.reports.push(*report);
    }
}

/// Play the session forward: `frames_per_second` frames, then one scheduler
/// tick, repeated for up to `max_seconds` or until the session ends.
///
/// Returns the report if the session ended.
pub fn run<S: Surface>(
    session: &mut Session<HeadlessHost>,
    surface: &mut S,
    frames_per_second: u32,
    max_seconds: u32,
) -> Option<GameOver> {
    for _ in 0..max_seconds {
        for _ in 0..frames_per_second {
            if !session.host_mut().take_frame() {
                break;
            }
            session.frame(surface);
        }

        if !session.host().interval_armed() {
            break;
        }
        session.second();
    }

    session.state().game_over()
}
