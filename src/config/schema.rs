//! Configuration schema types for `room.toml`
//!
//! Every section is optional; a missing file or section yields the built-in
//! room defaults.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::assets::{HERO_BOB_AMPLITUDE, HERO_BOB_SPEED, HERO_BOUNDS, HERO_SPEED, HERO_START, SHADOW_OFFSET};
use crate::color::{is_transparent_keyword, parse_color};
use crate::models::Bounds;

/// Largest integer upscale accepted for written images.
pub const MAX_SCALE: u32 = 16;
/// Largest playback frame rate.
pub const MAX_FPS: u32 = 240;

/// Hero tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    /// Starting position `[x, y]`
    pub start: [f64; 2],
    /// Room units per millisecond
    pub speed: f64,
    /// Idle bob amplitude
    pub bob_amplitude: f64,
    /// Idle bob angular speed (radians per millisecond)
    pub bob_speed: f64,
    /// Distance the shadow sits above the hero's anchor
    pub shadow_offset: f64,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            start: [HERO_START.0, HERO_START.1],
            speed: HERO_SPEED,
            bob_amplitude: HERO_BOB_AMPLITUDE,
            bob_speed: HERO_BOB_SPEED,
            shadow_offset: SHADOW_OFFSET,
        }
    }
}

/// Output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Integer upscale of written images
    pub scale: u32,
    /// Playback frame rate
    pub fps: u32,
    /// Draw the HUD strip
    pub hud: bool,
    /// Timestamp (ms) of the first frame
    pub start_time: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { scale: 1, fps: 60, hud: true, start_time: 0.0 }
    }
}

impl RenderConfig {
    /// Milliseconds between playback frames.
    pub fn frame_ms(&self) -> f64 {
        1000.0 / self.fps.max(1) as f64
    }
}

/// Complete room.toml configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomConfig {
    pub hero: HeroConfig,
    pub bounds: Bounds,
    pub render: RenderConfig,
    /// Per-key color overrides, any CSS color or `transparent`
    pub palette: BTreeMap<String, String>,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            hero: HeroConfig::default(),
            bounds: HERO_BOUNDS,
            render: RenderConfig::default(),
            palette: BTreeMap::new(),
        }
    }
}

/// Configuration validation error
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "hero.speed")
    pub field: String,
    /// Error message
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "room.toml: '{}' {}", self.field, self.message)
    }
}

impl RoomConfig {
    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();
        let mut push = |field: String, message: &str| {
            errors.push(ConfigValidationError { field, message: message.to_string() });
        };

        let hero = &self.hero;
        if !hero.speed.is_finite() || hero.speed < 0.0 {
            push("hero.speed".to_string(), "must be a finite, non-negative number");
        }
        for (name, value) in [
            ("hero.bob_amplitude", hero.bob_amplitude),
            ("hero.bob_speed", hero.bob_speed),
            ("hero.shadow_offset", hero.shadow_offset),
        ] {
            if !value.is_finite() {
                push(name.to_string(), "must be a finite number");
            }
        }

        let b = &self.bounds;
        let finite = [b.min_x, b.max_x, b.min_y, b.max_y].iter().all(|v| v.is_finite());
        if !finite {
            push("bounds".to_string(), "must be finite numbers");
        } else {
            if b.min_x > b.max_x {
                push("bounds.min_x".to_string(), "must not exceed bounds.max_x");
            }
            if b.min_y > b.max_y {
                push("bounds.min_y".to_string(), "must not exceed bounds.max_y");
            }
            if b.min_x <= b.max_x && b.min_y <= b.max_y && !b.contains(hero.start[0], hero.start[1]) {
                push("hero.start".to_string(), "must lie inside bounds");
            }
        }

        if self.render.scale == 0 || self.render.scale > MAX_SCALE {
            push("render.scale".to_string(), "must be between 1 and 16");
        }
        if self.render.fps == 0 || self.render.fps > MAX_FPS {
            push("render.fps".to_string(), "must be between 1 and 240");
        }
        if !self.render.start_time.is_finite() {
            push("render.start_time".to_string(), "must be a finite number");
        }

        for (key, value) in &self.palette {
            if key.chars().count() != 1 {
                push(format!("palette.{}", key), "key must be a single character");
            } else if !is_transparent_keyword(value) && parse_color(value).is_err() {
                push(format!("palette.{}", key), "is not a valid color");
            }
        }

        errors
    }

    /// Check if validation passed
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Hero start position as a tuple.
    pub fn start(&self) -> (f64, f64) {
        (self.hero.start[0], self.hero.start[1])
    }
}
