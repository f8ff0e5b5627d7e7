//! Asset validation
//!
//! Drawing never fails on bad content: unknown keys are skipped and short rows
//! read as no-paint. This module reports those cases so they can be surfaced as
//! warnings, or made fatal with `--strict`.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use crate::models::{Drawable, Sprite};
use crate::palette::{PaletteTable, NO_PAINT};
use crate::tiles::Tile;

/// A non-fatal problem found in the room content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub message: String,
}

impl Warning {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Check sprites and tiles against the palette.
///
/// Produces one warning per `(sprite or tile, key)` pair whose key is neither
/// no-paint nor in the palette, and one per sprite row shorter than the sprite.
/// Frames of animated sprites are checked individually.
pub fn validate_assets(palette: &PaletteTable, sprites: &[Arc<Drawable>], tiles: &[Tile]) -> Vec<Warning> {
    let mut warnings = Vec::new();

    for drawable in sprites {
        match drawable.as_ref() {
            Drawable::Static(sprite) => check_sprite(palette, sprite, &mut warnings),
            Drawable::Animated(anim) => {
                for frame in anim.frames() {
                    check_sprite(palette, frame, &mut warnings);
                }
            }
        }
    }

    for tile in tiles {
        let keys: BTreeSet<char> = tile.rows().iter().flat_map(|row| row.chars()).collect();
        for key in keys {
            if key != NO_PAINT && !palette.knows(key) {
                warnings.push(Warning::new(format!(
                    "tile '{}': key '{}' is not in the palette",
                    tile.name(),
                    key
                )));
            }
        }
    }

    for warning in &warnings {
        log::debug!("asset check: {}", warning);
    }
    warnings
}

fn check_sprite(palette: &PaletteTable, sprite: &Sprite, warnings: &mut Vec<Warning>) {
    for key in sprite.keys() {
        if !palette.knows(key) {
            warnings.push(Warning::new(format!(
                "sprite '{}': key '{}' is not in the palette",
                sprite.name(),
                key
            )));
        }
    }

    for (index, row) in sprite.rows().iter().enumerate() {
        let len = row.chars().count();
        if len < sprite.width() {
            warnings.push(Warning::new(format!(
                "sprite '{}': row {} has {} cells, expected {}",
                sprite.name(),
                index + 1,
                len,
                sprite.width()
            )));
        }
    }
}
