//! Sprite-related types.

use thiserror::Error;

use crate::palette::NO_PAINT;

/// Error constructing an animated sprite.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpriteError {
    /// Animation declared without frames
    #[error("animated sprite has no frames")]
    NoFrames,
    /// Cycle duration is zero, negative or not finite
    #[error("animated sprite duration must be a positive number of milliseconds, got {0}")]
    InvalidDuration(f64),
}

/// A static pixel-grid sprite.
///
/// Each row is a string of single-character palette keys. Rows may differ in
/// length; missing cells past a row's end read as [`NO_PAINT`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    name: String,
    rows: Vec<String>,
    cells: Vec<Vec<char>>,
    width: usize,
}

impl Sprite {
    /// Create a sprite; width and height are derived from `rows`.
    ///
    /// ```
    /// use pixel_room::models::Sprite;
    ///
    /// let sprite = Sprite::new("step", ["kk", "kkkk", "k"]);
    /// assert_eq!(sprite.width(), 4);
    /// assert_eq!(sprite.height(), 3);
    /// assert_eq!(sprite.key_at(3, 2), '.');
    /// ```
    pub fn new<I, S>(name: impl Into<String>, rows: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rows: Vec<String> = rows.into_iter().map(Into::into).collect();
        let cells: Vec<Vec<char>> = rows.iter().map(|r| r.chars().collect()).collect();
        let width = cells.iter().map(Vec::len).max().unwrap_or(0);
        Self { name: name.into(), rows, cells, width }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Longest row length, in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Row count.
    pub fn height(&self) -> usize {
        self.cells.len()
    }

    /// Key at `(col, row)`; out-of-range cells are [`NO_PAINT`].
    pub fn key_at(&self, col: usize, row: usize) -> char {
        self.cells.get(row).and_then(|r| r.get(col)).copied().unwrap_or(NO_PAINT)
    }

    /// Distinct keys used by this sprite, excluding [`NO_PAINT`], in first-seen order.
    pub fn keys(&self) -> Vec<char> {
        let mut seen = Vec::new();
        for &key in self.cells.iter().flatten() {
            if key != NO_PAINT && !seen.contains(&key) {
                seen.push(key);
            }
        }
        seen
    }
}

/// An ordered frame sequence played over a fixed cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimatedSprite {
    frames: Vec<Sprite>,
    duration: f64,
}

impl AnimatedSprite {
    /// Build an animation; fails fast on an empty frame list or a bad duration.
    pub fn new(frames: Vec<Sprite>, duration_ms: f64) -> Result<Self, SpriteError> {
        if frames.is_empty() {
            return Err(SpriteError::NoFrames);
        }
        if !duration_ms.is_finite() || duration_ms <= 0.0 {
            return Err(SpriteError::InvalidDuration(duration_ms));
        }
        Ok(Self { frames, duration: duration_ms })
    }

    pub fn frames(&self) -> &[Sprite] {
        &self.frames
    }

    /// Total cycle length in milliseconds.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Display time of a single frame.
    pub fn frame_window(&self) -> f64 {
        self.duration / self.frames.len() as f64
    }
}

/// Anything that can be placed in the room.
#[derive(Debug, Clone, PartialEq)]
pub enum Drawable {
    Static(Sprite),
    Animated(AnimatedSprite),
}

impl Drawable {
    /// Name of the sprite, or of the first frame for animations.
    pub fn name(&self) -> &str {
        match self {
            Drawable::Static(sprite) => sprite.name(),
            Drawable::Animated(anim) => anim.frames[0].name(),
        }
    }
}

impl From<Sprite> for Drawable {
    fn from(sprite: Sprite) -> Self {
        Drawable::Static(sprite)
    }
}

impl From<AnimatedSprite> for Drawable {
    fn from(anim: AnimatedSprite) -> Self {
        Drawable::Animated(anim)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_are_derived() {
        let sprite = Sprite::new("s", ["..kk..", "kkkkkkkk", "k"]);
        assert_eq!(sprite.width(), 8);
        assert_eq!(sprite.height(), 3);
    }

    #[test]
    fn test_empty_sprite() {
        let sprite = Sprite::new("empty", Vec::<String>::new());
        assert_eq!(sprite.width(), 0);
        assert_eq!(sprite.height(), 0);
        assert_eq!(sprite.key_at(0, 0), NO_PAINT);
    }

    #[test]
    fn test_short_rows_pad_with_no_paint() {
        let sprite = Sprite::new("s", ["ab", "abcd"]);
        assert_eq!(sprite.key_at(1, 0), 'b');
        assert_eq!(sprite.key_at(2, 0), NO_PAINT);
        assert_eq!(sprite.key_at(3, 1), 'd');
        assert_eq!(sprite.key_at(0, 9), NO_PAINT);
    }

    #[test]
    fn test_keys_skip_no_paint() {
        let sprite = Sprite::new("s", [".ab.", "ba.c"]);
        assert_eq!(sprite.keys(), vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_animated_requires_frames() {
        assert_eq!(AnimatedSprite::new(Vec::new(), 100.0), Err(SpriteError::NoFrames));
    }

    #[test]
    fn test_animated_requires_positive_duration() {
        let frames = vec![Sprite::new("a", ["k"])];
        assert_eq!(
            AnimatedSprite::new(frames.clone(), 0.0),
            Err(SpriteError::InvalidDuration(0.0))
        );
        assert!(AnimatedSprite::new(frames.clone(), -5.0).is_err());
        assert!(AnimatedSprite::new(frames, f64::NAN).is_err());
    }

    #[test]
    fn test_frame_window() {
        let frames = vec![Sprite::new("a", ["k"]), Sprite::new("b", ["k"])];
        let anim = AnimatedSprite::new(frames, 2800.0).unwrap();
        assert_eq!(anim.frame_window(), 1400.0);
    }

    #[test]
    fn test_drawable_name() {
        let frames = vec![Sprite::new("idle", ["k"]), Sprite::new("blink", ["k"])];
        let anim: Drawable = AnimatedSprite::new(frames, 10.0).unwrap().into();
        assert_eq!(anim.name(), "idle");
        let still: Drawable = Sprite::new("bed", ["k"]).into();
        assert_eq!(still.name(), "bed");
    }
}
