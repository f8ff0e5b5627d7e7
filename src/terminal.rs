//! Terminal preview of rendered frames
//!
//! Uses ANSI 24-bit color escapes and the upper half block so that each text
//! cell shows two pixel rows.

use image::{Rgba, RgbaImage};

/// ANSI escape sequence to reset all formatting
pub const ANSI_RESET: &str = "\x1b[0m";

/// 256-color gray shown where pixels are transparent.
const TRANSPARENT_BG: &str = "\x1b[48;5;236m";
const TRANSPARENT_FG: &str = "\x1b[38;5;236m";

/// Convert RGBA color to ANSI 24-bit background escape sequence.
///
/// Transparent colors (alpha = 0) are rendered as a dark gray background.
///
/// ```
/// use image::Rgba;
/// use pixel_room::terminal::color_to_ansi_bg;
///
/// assert_eq!(color_to_ansi_bg(Rgba([255, 0, 0, 255])), "\x1b[48;2;255;0;0m");
/// assert_eq!(color_to_ansi_bg(Rgba([0, 0, 0, 0])), "\x1b[48;5;236m");
/// ```
pub fn color_to_ansi_bg(rgba: Rgba<u8>) -> String {
    if rgba[3] == 0 {
        TRANSPARENT_BG.to_string()
    } else {
        format!("\x1b[48;2;{};{};{}m", rgba[0], rgba[1], rgba[2])
    }
}

/// Convert RGBA color to ANSI 24-bit foreground escape sequence.
pub fn color_to_ansi_fg(rgba: Rgba<u8>) -> String {
    if rgba[3] == 0 {
        TRANSPARENT_FG.to_string()
    } else {
        format!("\x1b[38;2;{};{};{}m", rgba[0], rgba[1], rgba[2])
    }
}

/// Render an image with half-block characters, two pixel rows per line.
///
/// Foreground is the top pixel, background the bottom one. Odd-height images
/// get a transparent bottom row.
pub fn render_image_ansi(image: &RgbaImage) -> String {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return String::new();
    }

    let mut output = String::new();
    for y in (0..height).step_by(2) {
        for x in 0..width {
            let top = *image.get_pixel(x, y);
            let bottom = if y + 1 < height { *image.get_pixel(x, y + 1) } else { Rgba([0, 0, 0, 0]) };
            output.push_str(&color_to_ansi_bg(bottom));
            output.push_str(&color_to_ansi_fg(top));
            output.push('▀');
        }
        output.push_str(ANSI_RESET);
        output.push('\n');
    }

    output
}
