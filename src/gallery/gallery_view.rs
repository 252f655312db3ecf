/// Draws the gallery surface: background, cards, heading and section dots.

use crate::core::config;
use crate::core::types::*;
use crate::platform::renderer::Renderer;
use crate::platform::surface::{Element, Surface};

pub struct GalleryView;

impl GalleryView {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        renderer: &dyn Renderer,
        surface: &Surface,
        geometry: &Geometry,
        active_section: usize,
    ) {
        renderer.fill_rect(
            0.0,
            0.0,
            geometry.width,
            geometry.height,
            Color::from_hex(config::BG_COLOR, 1.0),
        );

        // Heading sits behind the cards.
        let heading = surface.heading();
        if heading.opacity > 0.0 {
            renderer.draw_text_centered(
                geometry.center_x,
                geometry.center_y,
                &heading.text,
                config::HEADING_FONT_SIZE,
                Color::from_hex(config::TEXT_PRIMARY, heading.opacity.clamp(0.0, 1.0)),
            );
        }

        for (_, element) in surface.elements() {
            self.render_card(renderer, element);
        }

        self.render_section_dots(renderer, geometry, active_section);
    }

    fn render_card(&self, renderer: &dyn Renderer, element: &Element) {
        let pose = element.pose;
        let opacity = pose.opacity.clamp(0.0, 1.0);
        let w = config::CARD_W;
        let h = config::CARD_H;
        let x = pose.x - w / 2.0;
        let y = pose.y - h / 2.0;
        let r = config::CARD_CORNER_RADIUS;
        let inset = config::CARD_INSET;

        renderer.push_rotation(Vec2::new(pose.x, pose.y), pose.rotation);

        renderer.draw_shadow(
            x,
            y,
            w,
            h,
            r,
            Color::from_hex(0x000000, 0.6 * opacity),
            config::CARD_SHADOW_BLUR,
        );
        renderer.fill_rounded_rect(x, y, w, h, r, Color::from_hex(config::CARD_FRAME, opacity));

        let (ix, iy, iw, ih) = (x + inset, y + inset, w - 2.0 * inset, h - 2.0 * inset);
        if !renderer.draw_image(&element.image_path, ix, iy, iw, ih, opacity) {
            self.render_broken_image(renderer, ix, iy, iw, ih, opacity);
        }

        renderer.stroke_rounded_rect(
            x,
            y,
            w,
            h,
            r,
            Color::from_hex(config::CARD_BORDER, opacity),
            1.0,
        );

        renderer.pop_transform();
    }

    /// Placeholder for an image that could not be loaded.
    fn render_broken_image(
        &self,
        renderer: &dyn Renderer,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        opacity: f64,
    ) {
        renderer.fill_rect(x, y, w, h, Color::from_hex(config::BROKEN_IMAGE_BG, opacity));

        let mark = Color::from_hex(config::BROKEN_IMAGE_MARK, 0.8 * opacity);
        let (cx, cy) = (x + w / 2.0, y + h / 2.0);
        let s = w.min(h) * 0.15;
        renderer.draw_line(Vec2::new(cx - s, cy - s), Vec2::new(cx + s, cy + s), mark, 3.0);
        renderer.draw_line(Vec2::new(cx - s, cy + s), Vec2::new(cx + s, cy - s), mark, 3.0);
    }

    fn render_section_dots(&self, renderer: &dyn Renderer, geometry: &Geometry, active: usize) {
        let x = geometry.width - config::DOT_MARGIN;
        let total = (config::SECTION_COUNT - 1) as f64 * config::DOT_SPACING;
        let start_y = geometry.center_y - total / 2.0;

        for i in 0..config::SECTION_COUNT {
            let (color, radius) = if i == active {
                (Color::from_hex(config::DOT_ACTIVE, 1.0), config::DOT_RADIUS * 1.4)
            } else {
                (Color::from_hex(config::DOT_IDLE, 1.0), config::DOT_RADIUS)
            };
            renderer.fill_circle(x, start_y + i as f64 * config::DOT_SPACING, radius, color);
        }
    }
}

impl Default for GalleryView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::viewport::compute_geometry;
    use crate::platform::surface::Pose;
    use std::cell::RefCell;
    use std::path::{Path, PathBuf};

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Image(PathBuf),
        Line,
        Text(String, f64),
        Circle(f64),
        Push(f64),
        Pop,
    }

    /// Records the calls the view cares about; images under "missing/" fail.
    #[derive(Default)]
    struct RecordingRenderer {
        calls: RefCell<Vec<Call>>,
    }

    impl RecordingRenderer {
        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }
    }

    impl Renderer for RecordingRenderer {
        fn begin_frame(&mut self, _width: i32, _height: i32) {}
        fn end_frame(&mut self) {}
        fn fill_rect(&self, _x: f64, _y: f64, _w: f64, _h: f64, _color: Color) {}
        fn fill_rounded_rect(&self, _x: f64, _y: f64, _w: f64, _h: f64, _r: f64, _c: Color) {}
        fn stroke_rounded_rect(
            &self,
            _x: f64,
            _y: f64,
            _w: f64,
            _h: f64,
            _radius: f64,
            _color: Color,
            _line_width: f64,
        ) {
        }
        fn draw_line(&self, _from: Vec2, _to: Vec2, _color: Color, _line_width: f64) {
            self.calls.borrow_mut().push(Call::Line);
        }
        fn fill_circle(&self, _cx: f64, _cy: f64, radius: f64, _color: Color) {
            self.calls.borrow_mut().push(Call::Circle(radius));
        }
        fn draw_text_centered(&self, _cx: f64, _cy: f64, text: &str, _size: f64, color: Color) {
            self.calls
                .borrow_mut()
                .push(Call::Text(text.to_string(), color.a));
        }
        fn draw_image(&self, path: &Path, _x: f64, _y: f64, _w: f64, _h: f64, _o: f64) -> bool {
            self.calls.borrow_mut().push(Call::Image(path.to_path_buf()));
            !path.starts_with("missing")
        }
        fn push_rotation(&self, _center: Vec2, degrees: f64) {
            self.calls.borrow_mut().push(Call::Push(degrees));
        }
        fn pop_transform(&self) {
            self.calls.borrow_mut().push(Call::Pop);
        }
        fn draw_shadow(
            &self,
            _x: f64,
            _y: f64,
            _w: f64,
            _h: f64,
            _radius: f64,
            _color: Color,
            _blur: f64,
        ) {
        }
    }

    fn pose(rotation: f64) -> Pose {
        Pose {
            x: 100.0,
            y: 100.0,
            rotation,
            opacity: 1.0,
        }
    }

    #[test]
    fn test_cards_drawn_in_order_with_balanced_transforms() {
        let mut surface = Surface::new("Heading");
        surface.create(PathBuf::from("assets/set1/img1.jpg"), pose(10.0));
        surface.create(PathBuf::from("assets/set1/img2.jpg"), pose(-5.0));
        let renderer = RecordingRenderer::default();

        GalleryView::new().render(&renderer, &surface, &compute_geometry(800.0, 600.0), 0);

        let calls = renderer.calls();
        let images: Vec<&Call> = calls.iter().filter(|c| matches!(c, Call::Image(_))).collect();
        assert_eq!(
            images,
            vec![
                &Call::Image(PathBuf::from("assets/set1/img1.jpg")),
                &Call::Image(PathBuf::from("assets/set1/img2.jpg")),
            ]
        );
        let pushes = calls.iter().filter(|c| matches!(c, Call::Push(_))).count();
        let pops = calls.iter().filter(|c| **c == Call::Pop).count();
        assert_eq!((pushes, pops), (2, 2));
        assert!(calls.contains(&Call::Push(10.0)));
    }

    #[test]
    fn test_missing_image_draws_placeholder() {
        let mut surface = Surface::new("Heading");
        surface.create(PathBuf::from("missing/img1.jpg"), pose(0.0));
        let renderer = RecordingRenderer::default();

        GalleryView::new().render(&renderer, &surface, &compute_geometry(800.0, 600.0), 0);

        let lines = renderer.calls().iter().filter(|c| **c == Call::Line).count();
        assert_eq!(lines, 2);
    }

    #[test]
    fn test_heading_hidden_at_zero_opacity() {
        let mut surface = Surface::new("Heading");
        let renderer = RecordingRenderer::default();
        let geometry = compute_geometry(800.0, 600.0);

        GalleryView::new().render(&renderer, &surface, &geometry, 0);
        assert!(renderer
            .calls()
            .contains(&Call::Text("Heading".to_string(), 1.0)));

        surface.apply(
            crate::platform::surface::Target::Heading,
            crate::platform::surface::Props::opacity(0.0),
        );
        let renderer = RecordingRenderer::default();
        GalleryView::new().render(&renderer, &surface, &geometry, 0);
        assert!(!renderer.calls().iter().any(|c| matches!(c, Call::Text(..))));
    }

    #[test]
    fn test_active_section_dot_is_enlarged() {
        let surface = Surface::new("Heading");
        let renderer = RecordingRenderer::default();
        GalleryView::new().render(&renderer, &surface, &compute_geometry(800.0, 600.0), 2);

        let radii: Vec<f64> = renderer
            .calls()
            .iter()
            .filter_map(|c| match c {
                Call::Circle(r) => Some(*r),
                _ => None,
            })
            .collect();
        assert_eq!(radii.len(), 4);
        assert!(radii[2] > radii[0]);
        assert_eq!(radii[0], radii[1]);
        assert_eq!(radii[1], radii[3]);
    }
}
