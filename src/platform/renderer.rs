/// Abstract rendering interface.

use crate::core::types::{Color, Vec2};
use std::path::Path;

pub trait Renderer {
    fn begin_frame(&mut self, width: i32, height: i32);
    fn end_frame(&mut self);

    // Primitives
    fn fill_rect(&self, x: f64, y: f64, w: f64, h: f64, color: Color);
    fn fill_rounded_rect(&self, x: f64, y: f64, w: f64, h: f64, radius: f64, color: Color);
    fn stroke_rounded_rect(
        &self,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        radius: f64,
        color: Color,
        line_width: f64,
    );
    fn draw_line(&self, from: Vec2, to: Vec2, color: Color, line_width: f64);
    fn fill_circle(&self, cx: f64, cy: f64, radius: f64, color: Color);

    // Text, centered on (cx, cy)
    fn draw_text_centered(&self, cx: f64, cy: f64, text: &str, size: f64, color: Color);

    /// Draw the image at `path` scaled into the rect. Returns false if the
    /// image is missing or undecodable; nothing is drawn in that case.
    fn draw_image(&self, path: &Path, x: f64, y: f64, w: f64, h: f64, opacity: f64) -> bool;

    // Transform: rotate by `degrees` about `center`
    fn push_rotation(&self, center: Vec2, degrees: f64);
    fn pop_transform(&self);

    // Shadow (soft drop shadow)
    fn draw_shadow(
        &self,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        radius: f64,
        color: Color,
        blur: f64,
    );
}
