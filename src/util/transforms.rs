//! Transforms between the fixed-size game canvas and screen pixels.

use egui::{Pos2, Rect, Vec2};

/// A uniform scale plus translation that fits a canvas rect, centered, inside a
/// screen rect while preserving its aspect ratio (letterboxing the rest).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Letterbox {
    scale: f32,
    offset: Vec2,
}

impl Letterbox {
    /// Creates a `Letterbox` mapping `canvas` into the middle of `screen`, scaled as
    /// large as fits.
    pub fn fit(canvas: Rect, screen: Rect) -> Self {
        let scale = (screen.width() / canvas.width()).min(screen.height() / canvas.height());
        let offset = screen.center().to_vec2() - canvas.center().to_vec2() * scale;
        Self { scale, offset }
    }

    /// Screen pixels per canvas pixel.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Maps a canvas point to the screen.
    pub fn to_screen(&self, p: Pos2) -> Pos2 {
        (p.to_vec2() * self.scale + self.offset).to_pos2()
    }

    /// Maps a screen point back onto the canvas. A collapsed screen rect (zero
    /// scale) yields non-finite coordinates, which land on no cell.
    pub fn to_canvas(&self, p: Pos2) -> Pos2 {
        ((p.to_vec2() - self.offset) / self.scale).to_pos2()
    }

    pub fn to_screen_rect(&self, r: Rect) -> Rect {
        Rect::from_min_max(self.to_screen(r.min), self.to_screen(r.max))
    }

    /// Scales a canvas length (font size, stroke width) to screen pixels.
    pub fn scale_len(&self, len: f32) -> f32 {
        len * self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    fn canvas() -> Rect {
        Rect::from_min_max(pos2(0.0, 0.0), pos2(500.0, 500.0))
    }

    #[test]
    fn test_identity_when_sizes_match() {
        let t = Letterbox::fit(canvas(), canvas());
        assert_eq!(t.scale(), 1.0);
        assert_eq!(t.to_screen(pos2(120.0, 40.0)), pos2(120.0, 40.0));
        assert_eq!(t.to_canvas(pos2(499.0, 0.0)), pos2(499.0, 0.0));
    }

    #[test]
    fn test_wide_screen_pads_horizontally() {
        let screen = Rect::from_min_max(pos2(0.0, 0.0), pos2(1000.0, 500.0));
        let t = Letterbox::fit(canvas(), screen);
        assert_eq!(t.scale(), 1.0);
        assert_eq!(t.to_screen(pos2(0.0, 0.0)), pos2(250.0, 0.0));
        assert_eq!(t.to_screen(pos2(500.0, 500.0)), pos2(750.0, 500.0));
        // the left padding is off-canvas
        assert!(t.to_canvas(pos2(100.0, 10.0)).x < 0.0);
    }

    #[test]
    fn test_tall_screen_pads_vertically_and_scales() {
        let screen = Rect::from_min_max(pos2(0.0, 0.0), pos2(250.0, 1000.0));
        let t = Letterbox::fit(canvas(), screen);
        assert_eq!(t.scale(), 0.5);
        assert_eq!(t.to_screen(pos2(0.0, 0.0)), pos2(0.0, 375.0));
        assert_eq!(t.to_screen(pos2(500.0, 500.0)), pos2(250.0, 625.0));
        assert_eq!(t.scale_len(24.0), 12.0);
        assert_eq!(
            t.to_screen_rect(canvas()),
            Rect::from_min_max(pos2(0.0, 375.0), pos2(250.0, 625.0))
        );
    }

    #[test]
    fn test_to_canvas_inverts_to_screen() {
        let screen = Rect::from_min_max(pos2(30.0, 60.0), pos2(830.0, 1060.0));
        let t = Letterbox::fit(canvas(), screen);
        for p in [pos2(0.0, 0.0), pos2(125.0, 375.0), pos2(500.0, 250.0)] {
            let back = t.to_canvas(t.to_screen(p));
            assert!((back - p).length() < 1e-3, "{p:?} came back as {back:?}");
        }
    }

    #[test]
    fn test_collapsed_screen_maps_nowhere() {
        let screen = Rect::from_min_max(pos2(10.0, 10.0), pos2(10.0, 300.0));
        let t = Letterbox::fit(canvas(), screen);
        let p = t.to_canvas(pos2(10.0, 100.0));
        assert!(!p.x.is_finite() || !p.y.is_finite());
    }
}
