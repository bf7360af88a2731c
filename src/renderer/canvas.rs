//! HTML canvas 2D backend

use glam::Vec2;
use web_sys::CanvasRenderingContext2d;

use super::{PathStyle, Rgb, Surface};

/// [`Surface`] over a `CanvasRenderingContext2d`
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    fn finish_path(&self, style: PathStyle) {
        if let Some(fill) = style.fill {
            self.ctx.set_fill_style_str(&fill.to_string());
            self.ctx.fill();
        }
        if let Some((stroke, width)) = style.stroke {
            self.ctx.set_stroke_style_str(&stroke.to_string());
            self.ctx.set_line_width(width as f64);
            self.ctx.stroke();
        }
    }
}

impl Surface for CanvasSurface {
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgb) {
        self.ctx.set_shadow_blur(0.0);
        self.ctx.set_fill_style_str(&color.to_string());
        self.ctx
            .fill_rect(origin.x as f64, origin.y as f64, size.x as f64, size.y as f64);
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, offset: Vec2) {
        let _ = self.ctx.translate(offset.x as f64, offset.y as f64);
    }

    fn rotate(&mut self, angle: f32) {
        let _ = self.ctx.rotate(angle as f64);
    }

    fn polygon(&mut self, points: &[Vec2], style: PathStyle) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.ctx.set_shadow_blur(0.0);
        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.ctx.close_path();
        self.finish_path(style);
    }

    fn segments(&mut self, segments: &[(Vec2, Vec2)], color: Rgb, line_width: f32) {
        self.ctx.set_shadow_blur(0.0);
        self.ctx.begin_path();
        for (a, b) in segments {
            self.ctx.move_to(a.x as f64, a.y as f64);
            self.ctx.line_to(b.x as f64, b.y as f64);
        }
        self.ctx.set_stroke_style_str(&color.to_string());
        self.ctx.set_line_width(line_width as f64);
        self.ctx.stroke();
    }

    fn ellipse(&mut self, center: Vec2, radii: Vec2, style: PathStyle) {
        self.ctx.set_shadow_blur(0.0);
        self.ctx.begin_path();
        let _ = self.ctx.ellipse(
            center.x as f64,
            center.y as f64,
            radii.x as f64,
            radii.y as f64,
            0.0,
            0.0,
            std::f64::consts::TAU,
        );
        self.finish_path(style);
    }

    fn circle(&mut self, center: Vec2, radius: f32, color: Rgb, glow: f32) {
        let css = color.to_string();
        self.ctx.begin_path();
        self.ctx.set_fill_style_str(&css);
        self.ctx.set_shadow_color(&css);
        self.ctx.set_shadow_blur(glow as f64);
        let _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        );
        self.ctx.fill();
        self.ctx.set_shadow_blur(0.0);
    }
}
