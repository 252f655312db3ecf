/// Cairo-based renderer implementation with a decoded card-image cache.

use crate::core::types::{Color, Vec2};
use crate::platform::renderer::Renderer;
use cairo::{Context, Format, ImageSurface};
use std::cell::RefCell;
use std::collections::HashMap;
use std::f64::consts::PI;
use std::path::{Path, PathBuf};

pub struct RendererCairo {
    cr: Context,
    // None marks a path that failed to load, so it is not retried every frame.
    images: RefCell<HashMap<PathBuf, Option<ImageSurface>>>,
}

impl RendererCairo {
    pub fn new(cr: Context) -> Self {
        Self {
            cr,
            images: RefCell::new(HashMap::new()),
        }
    }

    /// Update the Cairo context (e.g., after window resize).
    pub fn set_context(&mut self, cr: Context) {
        self.cr = cr;
    }

    fn set_color(&self, color: Color) {
        self.cr.set_source_rgba(color.r, color.g, color.b, color.a);
    }

    fn rounded_rect_path(&self, x: f64, y: f64, w: f64, h: f64, r: f64) {
        self.cr.new_path();
        self.cr.arc(x + w - r, y + r, r, -PI / 2.0, 0.0);
        self.cr.arc(x + w - r, y + h - r, r, 0.0, PI / 2.0);
        self.cr.arc(x + r, y + h - r, r, PI / 2.0, PI);
        self.cr.arc(x + r, y + r, r, PI, 3.0 * PI / 2.0);
        self.cr.close_path();
    }
}

/// Decode an image file into a premultiplied ARGB32 surface.
fn load_image(path: &Path) -> Option<ImageSurface> {
    let rgba = match image::open(path) {
        Ok(img) => img.to_rgba8(),
        Err(e) => {
            log::warn!("card image {} unavailable: {}", path.display(), e);
            return None;
        }
    };

    let (w, h) = rgba.dimensions();
    let stride = Format::ARgb32.stride_for_width(w).ok()?;
    let mut data = vec![0u8; stride as usize * h as usize];

    for (x, y, px) in rgba.enumerate_pixels() {
        let [r, g, b, a] = px.0;
        let pre = |c: u8| ((c as u32 * a as u32 + 127) / 255) & 0xFF;
        let argb = (a as u32) << 24 | pre(r) << 16 | pre(g) << 8 | pre(b);
        let off = y as usize * stride as usize + x as usize * 4;
        data[off..off + 4].copy_from_slice(&argb.to_ne_bytes());
    }

    match ImageSurface::create_for_data(data, Format::ARgb32, w as i32, h as i32, stride) {
        Ok(surface) => {
            log::debug!("decoded {} ({}x{})", path.display(), w, h);
            Some(surface)
        }
        Err(e) => {
            log::warn!("card image {} rejected by cairo: {}", path.display(), e);
            None
        }
    }
}

impl Renderer for RendererCairo {
    fn begin_frame(&mut self, _width: i32, _height: i32) {
        self.cr.save().ok();
        // Draw off-screen, then blit in end_frame.
        self.cr.push_group();
    }

    fn end_frame(&mut self) {
        if self.cr.pop_group_to_source().is_ok() {
            self.cr.paint().ok();
        }
        self.cr.restore().ok();
    }

    fn fill_rect(&self, x: f64, y: f64, w: f64, h: f64, color: Color) {
        self.set_color(color);
        self.cr.rectangle(x, y, w, h);
        self.cr.fill().ok();
    }

    fn fill_rounded_rect(&self, x: f64, y: f64, w: f64, h: f64, radius: f64, color: Color) {
        self.set_color(color);
        self.rounded_rect_path(x, y, w, h, radius);
        self.cr.fill().ok();
    }

    fn stroke_rounded_rect(
        &self,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        radius: f64,
        color: Color,
        line_width: f64,
    ) {
        self.set_color(color);
        self.cr.set_line_width(line_width);
        self.rounded_rect_path(x, y, w, h, radius);
        self.cr.stroke().ok();
    }

    fn draw_line(&self, from: Vec2, to: Vec2, color: Color, line_width: f64) {
        self.set_color(color);
        self.cr.set_line_width(line_width);
        self.cr.new_path();
        self.cr.move_to(from.x, from.y);
        self.cr.line_to(to.x, to.y);
        self.cr.stroke().ok();
    }

    fn fill_circle(&self, cx: f64, cy: f64, radius: f64, color: Color) {
        self.set_color(color);
        self.cr.new_path();
        self.cr.arc(cx, cy, radius, 0.0, 2.0 * PI);
        self.cr.fill().ok();
    }

    fn draw_text_centered(&self, cx: f64, cy: f64, text: &str, size: f64, color: Color) {
        self.set_color(color);
        self.cr
            .select_font_face("sans-serif", cairo::FontSlant::Normal, cairo::FontWeight::Bold);
        self.cr.set_font_size(size);
        let (x, y) = match self.cr.text_extents(text) {
            Ok(ext) => (
                cx - (ext.width() / 2.0 + ext.x_bearing()),
                cy - (ext.height() / 2.0 + ext.y_bearing()),
            ),
            Err(_) => (cx, cy),
        };
        self.cr.move_to(x, y);
        self.cr.show_text(text).ok();
    }

    fn draw_image(&self, path: &Path, x: f64, y: f64, w: f64, h: f64, opacity: f64) -> bool {
        let mut images = self.images.borrow_mut();
        let img = match images
            .entry(path.to_path_buf())
            .or_insert_with(|| load_image(path))
        {
            Some(img) => img,
            None => return false,
        };

        let (iw, ih) = (img.width() as f64, img.height() as f64);
        if iw <= 0.0 || ih <= 0.0 {
            return false;
        }

        // Cover-fit: fill the rect, crop the overflow.
        let scale = (w / iw).max(h / ih);
        self.cr.save().ok();
        self.cr.rectangle(x, y, w, h);
        self.cr.clip();
        self.cr.translate(x + (w - iw * scale) / 2.0, y + (h - ih * scale) / 2.0);
        self.cr.scale(scale, scale);
        if self.cr.set_source_surface(&**img, 0.0, 0.0).is_ok() {
            self.cr.paint_with_alpha(opacity).ok();
        }
        self.cr.restore().ok();
        true
    }

    fn push_rotation(&self, center: Vec2, degrees: f64) {
        self.cr.save().ok();
        self.cr.translate(center.x, center.y);
        self.cr.rotate(degrees.to_radians());
        self.cr.translate(-center.x, -center.y);
    }

    fn pop_transform(&self) {
        self.cr.restore().ok();
    }

    fn draw_shadow(
        &self,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        radius: f64,
        color: Color,
        blur: f64,
    ) {
        // Approximate shadow with multiple expanding rounded rects
        let steps = 5;
        for i in 0..steps {
            let expand = blur * (i as f64 + 1.0) / steps as f64;
            let alpha = color.a * (1.0 - i as f64 / steps as f64) * 0.3;
            self.fill_rounded_rect(
                x - expand,
                y - expand + 2.0,
                w + expand * 2.0,
                h + expand * 2.0,
                radius + expand,
                color.with_alpha(alpha),
            );
        }
    }
}
