//! A surface that only counts what would have been drawn
//!
//! Used by headless runs and tests in place of a real canvas.

use glam::Vec2;

use super::{PathStyle, Rgb, Surface};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrawStats {
    pub rects: u64,
    pub polygons: u64,
    pub segments: u64,
    pub ellipses: u64,
    pub circles: u64,
    /// Current save/restore nesting depth
    pub depth: u32,
    /// Deepest nesting reached
    pub max_depth: u32,
}

impl DrawStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total primitives drawn
    pub fn primitives(&self) -> u64 {
        self.rects + self.polygons + self.segments + self.ellipses + self.circles
    }
}

impl Surface for DrawStats {
    fn fill_rect(&mut self, _origin: Vec2, _size: Vec2, _color: Rgb) {
        self.rects += 1;
    }

    fn save(&mut self) {
        self.depth += 1;
        self.max_depth = self.max_depth.max(self.depth);
    }

    fn restore(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    fn translate(&mut self, _offset: Vec2) {}

    fn rotate(&mut self, _angle: f32) {}

    fn polygon(&mut self, _points: &[Vec2], _style: PathStyle) {
        self.polygons += 1;
    }

    fn segments(&mut self, segments: &[(Vec2, Vec2)], _color: Rgb, _line_width: f32) {
        self.segments += segments.len() as u64;
    }

    fn ellipse(&mut self, _center: Vec2, _radii: Vec2, _style: PathStyle) {
        self.ellipses += 1;
    }

    fn circle(&mut self, _center: Vec2, _radius: f32, _color: Rgb, _glow: f32) {
        self.circles += 1;
    }
}
