//! Palette table: single-character keys mapped to colors

use crate::color::{is_transparent_keyword, parse_color, ColorError};
use image::Rgba;
use std::collections::BTreeMap;
use thiserror::Error;

/// The key that never paints, whether or not the table lists it.
pub const NO_PAINT: char = '.';

/// One palette slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteEntry {
    /// Paint this color
    Color(Rgba<u8>),
    /// Leave the destination pixel untouched
    Transparent,
}

/// Error building a palette.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    /// A value could not be parsed as a color
    #[error("palette key '{key}' has invalid color '{value}': {source}")]
    InvalidColor {
        key: char,
        value: String,
        #[source]
        source: ColorError,
    },
    /// A key was not exactly one character
    #[error("palette key '{0}' must be a single character")]
    InvalidKey(String),
}

/// Immutable lookup from symbolic key to color.
///
/// Built once at startup and shared read-only by every draw call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaletteTable {
    entries: BTreeMap<char, PaletteEntry>,
}

impl PaletteTable {
    /// Build a table from `(key, color)` pairs.
    ///
    /// Colors use any syntax accepted by [`parse_color`]; `"transparent"` and
    /// `"none"` produce [`PaletteEntry::Transparent`]. Later pairs replace
    /// earlier ones with the same key.
    ///
    /// ```
    /// use pixel_room::palette::PaletteTable;
    ///
    /// let palette = PaletteTable::from_pairs([('.', "transparent"), ('k', "#2a150a")]).unwrap();
    /// assert_eq!(palette.color('k'), Some(image::Rgba([0x2a, 0x15, 0x0a, 255])));
    /// assert_eq!(palette.color('.'), None);
    /// assert_eq!(palette.color('?'), None);
    /// ```
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, PaletteError>
    where
        I: IntoIterator<Item = (char, &'a str)>,
    {
        let mut table = Self::default();
        for (key, value) in pairs {
            table.set(key, value)?;
        }
        Ok(table)
    }

    /// Return a copy with string-keyed overrides applied (config `[palette]` tables).
    pub fn with_overrides<'a, I>(&self, overrides: I) -> Result<Self, PaletteError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut table = self.clone();
        for (key, value) in overrides {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(k), None) => table.set(k, value)?,
                _ => return Err(PaletteError::InvalidKey(key.to_string())),
            }
        }
        Ok(table)
    }

    fn set(&mut self, key: char, value: &str) -> Result<(), PaletteError> {
        let entry = if is_transparent_keyword(value) {
            PaletteEntry::Transparent
        } else {
            let rgba = parse_color(value).map_err(|source| PaletteError::InvalidColor {
                key,
                value: value.to_string(),
                source,
            })?;
            PaletteEntry::Color(rgba)
        };
        self.entries.insert(key, entry);
        Ok(())
    }

    /// Raw entry for a key, if the table has one.
    pub fn entry(&self, key: char) -> Option<PaletteEntry> {
        self.entries.get(&key).copied()
    }

    /// Color to paint for `key`, or `None` when nothing should be painted.
    pub fn color(&self, key: char) -> Option<Rgba<u8>> {
        if key == NO_PAINT {
            return None;
        }
        match self.entries.get(&key) {
            Some(PaletteEntry::Color(rgba)) => Some(*rgba),
            _ => None,
        }
    }

    /// Whether `key` resolves (as color or no-paint) without falling through.
    pub fn knows(&self, key: char) -> bool {
        key == NO_PAINT || self.entries.contains_key(&key)
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (char, PaletteEntry)> + '_ {
        self.entries.iter().map(|(k, v)| (*k, *v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
