//! Keyboard state tracking
//!
//! Key events arrive asynchronously; the simulation samples the tracked
//! state once per frame through [`InputState::movement`].

use std::collections::HashSet;

use crate::settings::Controls;

/// Movement keys held during one simulation step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// Pressed/released state per key identifier (case-insensitive)
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pressed: HashSet<String>,
}

/// Normalize a key identifier ("W" and "w" are the same key)
pub fn normalize_key(key: &str) -> String {
    key.to_lowercase()
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: &str) {
        self.pressed.insert(normalize_key(key));
    }

    pub fn release(&mut self, key: &str) {
        self.pressed.remove(&normalize_key(key));
    }

    /// Forget every held key (session start)
    pub fn clear(&mut self) {
        self.pressed.clear();
    }

    pub fn is_pressed(&self, key: &str) -> bool {
        self.pressed.contains(&normalize_key(key))
    }

    /// Sample the movement bindings for this frame
    pub fn movement(&self, controls: &Controls) -> TickInput {
        TickInput {
            up: self.is_pressed(&controls.up),
            down: self.is_pressed(&controls.down),
            left: self.is_pressed(&controls.left),
            right: self.is_pressed(&controls.right),
        }
    }
}
