//! Raster drawing target
//!
//! [`Surface`] is the small set of drawing calls the room needs. [`Canvas`]
//! implements it over an [`RgbaImage`] with source-over compositing, so
//! translucent fills (the light falloff) darken or tint what is below them.
//!
//! Geometry is in floating-point room space. A rectangle covers every pixel
//! whose center lies inside it (left/top edges inclusive, right/bottom
//! exclusive), so integer rectangles map one-to-one onto pixels.

use image::{Rgba, RgbaImage};
use thiserror::Error;

use crate::color::{blend_over, lerp};
use crate::font;

/// Failure to obtain a drawing target.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    #[error("unable to obtain a {width}x{height} drawing surface")]
    Unavailable { width: u32, height: u32 },
}

/// Two-stop-or-more radial gradient between two concentric circles.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    pub cx: f64,
    pub cy: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
    stops: Vec<(f64, Rgba<u8>)>,
}

impl RadialGradient {
    pub fn new(cx: f64, cy: f64, inner_radius: f64, outer_radius: f64) -> Self {
        Self { cx, cy, inner_radius, outer_radius, stops: Vec::new() }
    }

    /// Add a color stop at `offset` (clamped to `[0, 1]`); stops stay sorted.
    pub fn add_stop(mut self, offset: f64, color: Rgba<u8>) -> Self {
        let offset = offset.clamp(0.0, 1.0);
        let at = self.stops.partition_point(|(o, _)| *o <= offset);
        self.stops.insert(at, (offset, color));
        self
    }

    /// Gradient color at a point in room space.
    pub fn color_at(&self, x: f64, y: f64) -> Rgba<u8> {
        let (first, last) = match (self.stops.first(), self.stops.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return Rgba([0, 0, 0, 0]),
        };

        let span = self.outer_radius - self.inner_radius;
        let distance = ((x - self.cx).powi(2) + (y - self.cy).powi(2)).sqrt();
        let t = if span > 0.0 { ((distance - self.inner_radius) / span).clamp(0.0, 1.0) } else { 1.0 };

        if t <= first.0 {
            return first.1;
        }
        if t >= last.0 {
            return last.1;
        }
        for pair in self.stops.windows(2) {
            let (o0, c0) = pair[0];
            let (o1, c1) = pair[1];
            if t >= o0 && t <= o1 {
                let local = if o1 > o0 { (t - o0) / (o1 - o0) } else { 1.0 };
                return lerp(c0, c1, local);
            }
        }
        last.1
    }
}

/// The drawing calls used by the room renderer.
pub trait Surface {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Composite a solid rectangle.
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgba<u8>);

    /// Composite a single 1x1 cell.
    fn fill_pixel(&mut self, x: f64, y: f64, color: Rgba<u8>) {
        self.fill_rect(x, y, 1.0, 1.0, color);
    }

    /// Composite a radial gradient over a rectangle.
    fn fill_radial_gradient(&mut self, gradient: &RadialGradient, x: f64, y: f64, w: f64, h: f64);

    /// One-pixel outline around the rectangle's edges.
    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgba<u8>) {
        self.fill_rect(x, y, w + 1.0, 1.0, color);
        self.fill_rect(x, y + h, w + 1.0, 1.0, color);
        self.fill_rect(x, y + 1.0, 1.0, h - 1.0, color);
        self.fill_rect(x + w, y + 1.0, 1.0, h - 1.0, color);
    }

    /// Draw text with its baseline at `y`.
    fn fill_text(&mut self, text: &str, x: f64, y: f64, color: Rgba<u8>);
}

/// Pixel range `[start, end)` covered by the span `[origin, origin + len)`.
fn covered(origin: f64, len: f64, limit: u32) -> (u32, u32) {
    if !(origin.is_finite() && len.is_finite()) || len <= 0.0 {
        return (0, 0);
    }
    let start = (origin - 0.5).ceil().max(0.0);
    let end = (origin + len - 0.5).ceil().min(limit as f64);
    if end <= start {
        return (0, 0);
    }
    (start as u32, end as u32)
}

/// An in-memory RGBA surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Create a fully transparent canvas.
    ///
    /// A zero-sized surface cannot be drawn on and is reported as unavailable.
    pub fn new(width: u32, height: u32) -> Result<Self, SurfaceError> {
        if width == 0 || height == 0 {
            return Err(SurfaceError::Unavailable { width, height });
        }
        Ok(Self { image: RgbaImage::new(width, height) })
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.image.get_pixel(x, y)
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    fn composite(&mut self, x: u32, y: u32, color: Rgba<u8>) {
        let dst = self.image.get_pixel_mut(x, y);
        *dst = blend_over(*dst, color);
    }
}

impl Surface for Canvas {
    fn width(&self) -> u32 {
        self.image.width()
    }

    fn height(&self) -> u32 {
        self.image.height()
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgba<u8>) {
        let (x0, x1) = covered(x, w, self.image.width());
        let (y0, y1) = covered(y, h, self.image.height());
        for py in y0..y1 {
            for px in x0..x1 {
                self.composite(px, py, color);
            }
        }
    }

    fn fill_radial_gradient(&mut self, gradient: &RadialGradient, x: f64, y: f64, w: f64, h: f64) {
        let (x0, x1) = covered(x, w, self.image.width());
        let (y0, y1) = covered(y, h, self.image.height());
        for py in y0..y1 {
            for px in x0..x1 {
                let color = gradient.color_at(px as f64 + 0.5, py as f64 + 0.5);
                self.composite(px, py, color);
            }
        }
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, color: Rgba<u8>) {
        let top = y - font::GLYPH_HEIGHT as f64;
        for (i, ch) in text.chars().enumerate() {
            let Some(glyph) = font::glyph(ch) else { continue };
            let left = x + (i * font::ADVANCE) as f64;
            for (row, bits) in glyph.iter().enumerate() {
                for col in 0..font::GLYPH_WIDTH {
                    if bits & (1 << (font::GLYPH_WIDTH - 1 - col)) != 0 {
                        self.fill_pixel(left + col as f64, top + row as f64, color);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::rgb;

    const RED: Rgba<u8> = rgb(255, 0, 0);

    fn painted(canvas: &Canvas) -> Vec<(u32, u32)> {
        let mut out = Vec::new();
        for (x, y, p) in canvas.image().enumerate_pixels() {
            if p[3] != 0 {
                out.push((x, y));
            }
        }
        out
    }

    #[test]
    fn test_zero_sized_canvas_is_unavailable() {
        assert_eq!(Canvas::new(0, 10), Err(SurfaceError::Unavailable { width: 0, height: 10 }));
        assert!(Canvas::new(256, 224).is_ok());
    }

    #[test]
    fn test_integer_rect_maps_to_pixels() {
        let mut canvas = Canvas::new(8, 8).unwrap();
        canvas.fill_rect(2.0, 3.0, 2.0, 1.0, RED);
        assert_eq!(painted(&canvas), vec![(2, 3), (3, 3)]);
    }

    #[test]
    fn test_fractional_pixel_snaps_to_center_rule() {
        let mut canvas = Canvas::new(8, 8).unwrap();
        canvas.fill_pixel(3.5, 1.4, RED);
        assert_eq!(painted(&canvas), vec![(3, 1)]);

        let mut canvas = Canvas::new(8, 8).unwrap();
        canvas.fill_pixel(3.6, 1.6, RED);
        assert_eq!(painted(&canvas), vec![(4, 2)]);
    }

    #[test]
    fn test_rect_is_clipped() {
        let mut canvas = Canvas::new(4, 4).unwrap();
        canvas.fill_rect(-10.0, -10.0, 100.0, 100.0, RED);
        assert_eq!(painted(&canvas).len(), 16);
        canvas.fill_pixel(f64::NAN, 0.0, rgb(0, 0, 255));
        assert_eq!(canvas.pixel(0, 0), RED);
    }

    #[test]
    fn test_translucent_fill_composites() {
        let mut canvas = Canvas::new(1, 1).unwrap();
        canvas.fill_rect(0.0, 0.0, 1.0, 1.0, rgb(200, 200, 200));
        canvas.fill_rect(0.0, 0.0, 1.0, 1.0, Rgba([0, 0, 0, 128]));
        let p = canvas.pixel(0, 0);
        assert_eq!(p[3], 255);
        assert!(p[0] < 120);
    }

    #[test]
    fn test_gradient_stops() {
        let g = RadialGradient::new(0.0, 0.0, 10.0, 20.0)
            .add_stop(1.0, rgb(0, 0, 0))
            .add_stop(0.0, rgb(200, 0, 0));
        assert_eq!(g.color_at(0.0, 0.0), rgb(200, 0, 0));
        assert_eq!(g.color_at(15.0, 0.0), rgb(100, 0, 0));
        assert_eq!(g.color_at(0.0, 50.0), rgb(0, 0, 0));
    }

    #[test]
    fn test_gradient_without_stops_is_clear() {
        let g = RadialGradient::new(0.0, 0.0, 1.0, 2.0);
        assert_eq!(g.color_at(0.0, 0.0), Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn test_stroke_rect_outline_only() {
        let mut canvas = Canvas::new(6, 6).unwrap();
        canvas.stroke_rect(1.0, 1.0, 3.0, 3.0, RED);
        assert_eq!(canvas.pixel(1, 1), RED);
        assert_eq!(canvas.pixel(4, 4), RED);
        assert_eq!(canvas.pixel(4, 1), RED);
        assert_eq!(canvas.pixel(2, 2)[3], 0);
        assert_eq!(painted(&canvas).len(), 12);
    }

    #[test]
    fn test_fill_text_draws_known_glyphs() {
        let mut canvas = Canvas::new(16, 8).unwrap();
        canvas.fill_text("1?", 0.0, 6.0, RED);
        let pixels = painted(&canvas);
        assert!(!pixels.is_empty());
        assert!(pixels.iter().all(|(x, y)| *x < 3 && *y >= 1 && *y < 6));
    }
}
