//! Animation sampling: resolve a drawable to the sprite shown at a timestamp

use crate::models::{Drawable, Sprite};

/// Resolve `drawable` to the static sprite to render at `time` (ms).
///
/// Animated drawables pick frame `floor((time mod duration) / window)` where
/// `window = duration / frames`. Only the timestamp matters, never how many
/// ticks have passed, so frame-rate jitter cannot drift the cycle.
///
/// ```
/// use pixel_room::animation::sample;
/// use pixel_room::models::{AnimatedSprite, Drawable, Sprite};
///
/// let anim = AnimatedSprite::new(
///     vec![Sprite::new("open", ["k"]), Sprite::new("shut", ["k"])],
///     1000.0,
/// )
/// .unwrap();
/// let drawable = Drawable::Animated(anim);
/// assert_eq!(sample(&drawable, 250.0).name(), "open");
/// assert_eq!(sample(&drawable, 750.0).name(), "shut");
/// assert_eq!(sample(&drawable, 1250.0).name(), "open");
/// ```
pub fn sample(drawable: &Drawable, time: f64) -> &Sprite {
    match drawable {
        Drawable::Static(sprite) => sprite,
        Drawable::Animated(anim) => {
            let frames = anim.frames();
            let phase = if time.is_finite() { time.rem_euclid(anim.duration()) } else { 0.0 };
            let index = (phase / anim.frame_window()).floor() as usize;
            &frames[index.min(frames.len() - 1)]
        }
    }
}

/// Index of the frame [`sample`] picks; always 0 for static sprites.
pub fn frame_index(drawable: &Drawable, time: f64) -> usize {
    match drawable {
        Drawable::Static(_) => 0,
        Drawable::Animated(anim) => {
            let picked = sample(drawable, time);
            anim.frames().iter().position(|f| std::ptr::eq(f, picked)).unwrap_or(0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AnimatedSprite;

    fn two_frame(duration: f64) -> Drawable {
        let frames = vec![Sprite::new("a", ["k"]), Sprite::new("b", ["kk"])];
        Drawable::Animated(AnimatedSprite::new(frames, duration).unwrap())
    }

    #[test]
    fn test_static_returns_itself() {
        let sprite = Sprite::new("bed", ["kk"]);
        let drawable = Drawable::Static(sprite.clone());
        assert_eq!(sample(&drawable, 0.0), &sprite);
        assert_eq!(sample(&drawable, 99999.0), &sprite);
        assert_eq!(frame_index(&drawable, 42.0), 0);
    }

    #[test]
    fn test_two_frames_split_the_cycle() {
        let d = two_frame(2800.0);
        for t in [0.0, 1.0, 700.0, 1399.9] {
            assert_eq!(sample(&d, t).name(), "a", "t={t}");
        }
        for t in [1400.0, 2000.0, 2799.9] {
            assert_eq!(sample(&d, t).name(), "b", "t={t}");
        }
    }

    #[test]
    fn test_sampling_is_periodic() {
        let d = two_frame(2800.0);
        for t in [0.0, 13.5, 1400.0, 2100.0, 2799.0] {
            assert_eq!(sample(&d, t), sample(&d, t + 2800.0));
            assert_eq!(sample(&d, t), sample(&d, t + 5.0 * 2800.0));
        }
    }

    #[test]
    fn test_negative_time_wraps() {
        let d = two_frame(1000.0);
        assert_eq!(sample(&d, -250.0).name(), "b");
        assert_eq!(sample(&d, -750.0).name(), "a");
    }

    #[test]
    fn test_non_finite_time_picks_first_frame() {
        let d = two_frame(1000.0);
        assert_eq!(sample(&d, f64::NAN).name(), "a");
        assert_eq!(sample(&d, f64::INFINITY).name(), "a");
    }

    #[test]
    fn test_three_frames() {
        let frames = vec![Sprite::new("a", ["k"]), Sprite::new("b", ["k"]), Sprite::new("c", ["k"])];
        let d = Drawable::Animated(AnimatedSprite::new(frames, 300.0).unwrap());
        assert_eq!(frame_index(&d, 50.0), 0);
        assert_eq!(frame_index(&d, 150.0), 1);
        assert_eq!(frame_index(&d, 299.0), 2);
        assert_eq!(frame_index(&d, 300.0), 0);
    }
}
