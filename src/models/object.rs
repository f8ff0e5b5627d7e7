//! Placed objects: scenery, the hero and the bounds it walks in.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::sprite::Drawable;

/// Where a sprite's bounding box sits relative to its `(x, y)` position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
    /// `(x, y)` is the top-left corner
    #[default]
    TopLeft,
    /// `(x, y)` is the box center
    Center,
    /// `(x, y)` is the left end of the bottom edge
    Bottom,
}

/// A drawable placed in room space.
///
/// The optional bob adds `sin(t * bob_speed) * bob_amplitude` to `y` at render
/// time only; the stored position never changes because of it.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub sprite: Arc<Drawable>,
    pub x: f64,
    pub y: f64,
    pub anchor: Anchor,
    pub bob_amplitude: f64,
    pub bob_speed: f64,
}

impl SceneObject {
    pub fn new(sprite: Arc<Drawable>, x: f64, y: f64) -> Self {
        Self { sprite, x, y, anchor: Anchor::TopLeft, bob_amplitude: 0.0, bob_speed: 0.0 }
    }

    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn with_bob(mut self, amplitude: f64, speed: f64) -> Self {
        self.bob_amplitude = amplitude;
        self.bob_speed = speed;
        self
    }

    /// Vertical bob offset at `time` (ms); zero unless both amplitude and speed are set.
    pub fn bob_offset(&self, time: f64) -> f64 {
        if self.bob_amplitude != 0.0 && self.bob_speed != 0.0 {
            (time * self.bob_speed).sin() * self.bob_amplitude
        } else {
            0.0
        }
    }
}

/// The player-controlled object.
#[derive(Debug, Clone, PartialEq)]
pub struct Hero {
    pub body: SceneObject,
    /// Room units per millisecond
    pub speed: f64,
    /// Whether the last update had a non-zero direction
    pub moving: bool,
    /// Reserved for collision; not read by the motion loop
    pub radius: f64,
}

impl Hero {
    pub fn new(body: SceneObject, speed: f64, radius: f64) -> Self {
        Self { body, speed, moving: false, radius }
    }

    pub fn position(&self) -> (f64, f64) {
        (self.body.x, self.body.y)
    }
}

/// The objects that move: the hero and the shadow that follows it.
#[derive(Debug, Clone, PartialEq)]
pub struct Actors {
    pub hero: Hero,
    pub shadow: SceneObject,
}

impl Actors {
    /// Pair a hero with its shadow and place the shadow `shadow_offset` above the hero.
    pub fn new(hero: Hero, shadow: SceneObject, shadow_offset: f64) -> Self {
        let mut actors = Self { hero, shadow };
        actors.follow(shadow_offset);
        actors
    }

    /// Move the shadow to `(hero.x, hero.y - shadow_offset)`.
    pub fn follow(&mut self, shadow_offset: f64) {
        self.shadow.x = self.hero.body.x;
        self.shadow.y = self.hero.body.y - shadow_offset;
    }
}

/// Rectangle the hero's position is clamped to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    pub const fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        Self { min_x, max_x, min_y, max_y }
    }

    pub fn clamp_x(&self, x: f64) -> f64 {
        self.min_x.max(self.max_x.min(x))
    }

    pub fn clamp_y(&self, y: f64) -> f64 {
        self.min_y.max(self.max_y.min(y))
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sprite;

    fn dot() -> Arc<Drawable> {
        Arc::new(Sprite::new("dot", ["k"]).into())
    }

    #[test]
    fn test_scene_object_defaults() {
        let obj = SceneObject::new(dot(), 3.0, 4.0);
        assert_eq!(obj.anchor, Anchor::TopLeft);
        assert_eq!(obj.bob_amplitude, 0.0);
        assert_eq!(obj.bob_speed, 0.0);
        assert_eq!(obj.bob_offset(12345.0), 0.0);
    }

    #[test]
    fn test_bob_needs_both_amplitude_and_speed() {
        let amp_only = SceneObject::new(dot(), 0.0, 0.0).with_bob(2.0, 0.0);
        assert_eq!(amp_only.bob_offset(100.0), 0.0);
        let speed_only = SceneObject::new(dot(), 0.0, 0.0).with_bob(0.0, 0.5);
        assert_eq!(speed_only.bob_offset(100.0), 0.0);
    }

    #[test]
    fn test_bob_offset_is_sinusoidal() {
        let obj = SceneObject::new(dot(), 0.0, 10.0).with_bob(0.6, 0.004);
        let quarter = std::f64::consts::FRAC_PI_2 / 0.004;
        assert!((obj.bob_offset(quarter) - 0.6).abs() < 1e-9);
        assert!(obj.bob_offset(0.0).abs() < 1e-12);
        assert_eq!(obj.y, 10.0);
    }

    #[test]
    fn test_bounds_clamp() {
        let b = Bounds::new(20.0, 236.0, 90.0, 210.0);
        assert_eq!(b.clamp_x(0.0), 20.0);
        assert_eq!(b.clamp_x(300.0), 236.0);
        assert_eq!(b.clamp_x(100.0), 100.0);
        assert_eq!(b.clamp_y(-1.0), 90.0);
        assert_eq!(b.clamp_y(211.0), 210.0);
        assert!(b.contains(20.0, 210.0));
        assert!(!b.contains(19.9, 100.0));
    }

    #[test]
    fn test_shadow_follows_hero() {
        let hero = Hero::new(SceneObject::new(dot(), 50.0, 100.0), 0.08, 3.0);
        let mut actors = Actors::new(hero, SceneObject::new(dot(), 0.0, 0.0), 2.0);
        assert_eq!((actors.shadow.x, actors.shadow.y), (50.0, 98.0));
        actors.hero.body.x = 60.0;
        actors.follow(2.0);
        assert_eq!((actors.shadow.x, actors.shadow.y), (60.0, 98.0));
    }

    #[test]
    fn test_anchor_serde_names() {
        let json = serde_json::to_string(&Anchor::TopLeft).unwrap();
        assert_eq!(json, "\"top-left\"");
        let parsed: Anchor = serde_json::from_str("\"bottom\"").unwrap();
        assert_eq!(parsed, Anchor::Bottom);
    }
}
