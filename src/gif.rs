//! GIF animation rendering

use crate::output::{ensure_parent, OutputError};
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Frame, RgbaImage};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Render a sequence of frames as an animated GIF.
///
/// GIF delays are stored in centiseconds, so `frame_ms` is rounded to the
/// nearest 10 ms (minimum 10 ms). An empty frame list writes nothing.
///
/// # Arguments
///
/// * `frames` - The image frames to include in the animation
/// * `frame_ms` - Delay per frame in milliseconds
/// * `loop_anim` - Whether the animation should loop infinitely
/// * `path` - Output file path
pub fn render_gif(frames: &[RgbaImage], frame_ms: f64, loop_anim: bool, path: &Path) -> Result<(), OutputError> {
    if frames.is_empty() {
        return Ok(());
    }

    ensure_parent(path)?;

    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let mut encoder = GifEncoder::new(writer);

    let repeat = if loop_anim { Repeat::Infinite } else { Repeat::Finite(0) };
    encoder.set_repeat(repeat)?;

    let delay_cs = gif_delay_cs(frame_ms);
    for rgba_image in frames {
        let delay = image::Delay::from_numer_denom_ms(delay_cs * 10, 1);
        let frame = Frame::from_parts(rgba_image.clone(), 0, 0, delay);
        encoder.encode_frame(frame)?;
    }

    log::info!("wrote {} ({} frames)", path.display(), frames.len());
    Ok(())
}

/// Frame delay in centiseconds for a frame interval in milliseconds.
fn gif_delay_cs(frame_ms: f64) -> u32 {
    if !frame_ms.is_finite() {
        return 1;
    }
    ((frame_ms / 10.0).round() as u32).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use tempfile::tempdir;

    fn solid(width: u32, height: u32, color: Rgba<u8>) -> RgbaImage {
        RgbaImage::from_pixel(width, height, color)
    }

    #[test]
    fn test_render_gif_creates_valid_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("walk.gif");

        let frames = vec![solid(2, 2, Rgba([255, 0, 0, 255])), solid(2, 2, Rgba([0, 255, 0, 255]))];

        render_gif(&frames, 100.0, true, &path).unwrap();
        assert!(path.exists());
        assert!(image::open(&path).is_ok());
    }

    #[test]
    fn test_render_gif_empty_writes_nothing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.gif");
        render_gif(&[], 100.0, true, &path).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_render_gif_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a").join("b").join("walk.gif");
        render_gif(&[solid(1, 1, Rgba([0, 0, 0, 255]))], 16.7, false, &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_delay_rounding() {
        assert_eq!(gif_delay_cs(1000.0 / 60.0), 2);
        assert_eq!(gif_delay_cs(100.0), 10);
        assert_eq!(gif_delay_cs(1.0), 1);
        assert_eq!(gif_delay_cs(f64::NAN), 1);
    }
}
