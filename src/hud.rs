//! Heads-up display drawn over the room

use image::Rgba;

use crate::color::rgb;
use crate::surface::Surface;

const PANEL: Rgba<u8> = rgb(0x0a, 0x06, 0x04);
const INK: Rgba<u8> = rgb(0xf6, 0xe6, 0xc5);
const HEART_FULL: Rgba<u8> = rgb(0xd7, 0x54, 0x5c);
const HEART_EMPTY: Rgba<u8> = rgb(0x3c, 0x1b, 0x24);

const HEART: [&str; 6] = [".XX..XX.", "XXXXXXXX", "XXXXXXXX", ".XXXXXX.", "..XXXX..", "...XX..."];

/// Item button labels with their baselines.
const LABELS: [(&str, f64, f64); 3] = [("B", 20.0, 22.0), ("Y", 32.0, 22.0), ("X", 44.0, 22.0)];
/// Counters: rupees, bombs, arrows.
const COUNTERS: [(&str, f64, f64); 3] = [("000", 68.0, 20.0), ("00", 108.0, 20.0), ("30", 138.0, 20.0)];
const HEARTS: [(f64, f64); 3] = [(190.0, 12.0), (204.0, 12.0), (218.0, 12.0)];

/// Draw the HUD strip: panel, item frame, labels, counters and hearts.
pub fn draw_hud<S: Surface + ?Sized>(surface: &mut S) {
    surface.fill_rect(12.0, 6.0, 232.0, 24.0, PANEL);
    surface.stroke_rect(14.0, 8.0, 38.0, 20.0, INK);

    for (text, x, y) in LABELS.iter().chain(COUNTERS.iter()) {
        surface.fill_text(text, *x, *y, INK);
    }

    for (x, y) in HEARTS {
        draw_heart(surface, x, y, true);
    }
}

/// Draw one 8x6 heart with its top-left at `(x, y)`.
pub fn draw_heart<S: Surface + ?Sized>(surface: &mut S, x: f64, y: f64, filled: bool) {
    let color = if filled { HEART_FULL } else { HEART_EMPTY };
    for (row, line) in HEART.iter().enumerate() {
        for (col, cell) in line.chars().enumerate() {
            if cell == 'X' {
                surface.fill_pixel(x + col as f64, y + row as f64, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Canvas;

    #[test]
    fn test_heart_shape() {
        let mut canvas = Canvas::new(8, 6).unwrap();
        draw_heart(&mut canvas, 0.0, 0.0, true);
        assert_eq!(canvas.pixel(0, 0)[3], 0);
        assert_eq!(canvas.pixel(1, 0), HEART_FULL);
        assert_eq!(canvas.pixel(0, 1), HEART_FULL);
        assert_eq!(canvas.pixel(3, 5), HEART_FULL);
        assert_eq!(canvas.pixel(2, 5)[3], 0);
        let filled = canvas.image().pixels().filter(|p| p[3] != 0).count();
        assert_eq!(filled, 4 + 8 + 8 + 6 + 4 + 2);
    }

    #[test]
    fn test_empty_heart_color() {
        let mut canvas = Canvas::new(8, 6).unwrap();
        draw_heart(&mut canvas, 0.0, 0.0, false);
        assert_eq!(canvas.pixel(1, 0), HEART_EMPTY);
    }

    #[test]
    fn test_hud_layout() {
        let mut canvas = Canvas::new(256, 224).unwrap();
        draw_hud(&mut canvas);
        // panel corner, frame corner, heart row
        assert_eq!(canvas.pixel(12, 6), PANEL);
        assert_eq!(canvas.pixel(14, 8), INK);
        assert_eq!(canvas.pixel(52, 28), INK);
        assert_eq!(canvas.pixel(191, 12), HEART_FULL);
        assert_eq!(canvas.pixel(219, 13), HEART_FULL);
        // nothing outside the panel
        assert_eq!(canvas.pixel(11, 6)[3], 0);
        assert_eq!(canvas.pixel(128, 40)[3], 0);
    }
}
