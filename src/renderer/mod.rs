//! 2D rendering module
//!
//! Drawing is a pure function of [`crate::sim::GameState`]: the scene is
//! rebuilt from scratch every frame onto a [`Surface`].

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod scene;
pub mod shapes;
pub mod stats;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use scene::draw_scene;
pub use stats::DrawStats;

use std::fmt;

use glam::Vec2;

/// An opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
    /// CSS hex notation (`#rrggbb`)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Fill and/or outline for a closed shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathStyle {
    pub fill: Option<Rgb>,
    pub stroke: Option<(Rgb, f32)>,
}

impl PathStyle {
    pub fn filled(color: Rgb) -> Self {
        Self {
            fill: Some(color),
            stroke: None,
        }
    }

    pub fn outlined(fill: Rgb, stroke: Rgb, line_width: f32) -> Self {
        Self {
            fill: Some(fill),
            stroke: Some((stroke, line_width)),
        }
    }
}

/// Primitive drawing operations of a 2D canvas
///
/// Coordinates are in arena pixels, relative to the current transform.
pub trait Surface {
    /// Fill an axis-aligned rectangle
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgb);

    /// Push the current transform
    fn save(&mut self);
    /// Pop back to the last saved transform
    fn restore(&mut self);
    fn translate(&mut self, offset: Vec2);
    fn rotate(&mut self, angle: f32);

    /// Closed polygon through `points`
    fn polygon(&mut self, points: &[Vec2], style: PathStyle);
    /// Independent line segments sharing one stroke
    fn segments(&mut self, segments: &[(Vec2, Vec2)], color: Rgb, line_width: f32);
    /// Axis-aligned ellipse
    fn ellipse(&mut self, center: Vec2, radii: Vec2, style: PathStyle);
    /// Filled circle with an optional glow (blur radius, 0 for none)
    fn circle(&mut self, center: Vec2, radius: f32, color: Rgb, glow: f32);
}
