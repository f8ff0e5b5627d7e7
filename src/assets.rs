//! Built-in content: the room palette, sprites and furniture layout.
//!
//! Everything here is constant data; [`RoomAssets::load`] turns it into the
//! typed tables the renderer reads.

use std::sync::Arc;

use crate::models::{AnimatedSprite, Anchor, Bounds, Drawable, SceneObject, Sprite, SpriteError};
use crate::palette::{PaletteError, PaletteTable};

/// Room width in pixels.
pub const ROOM_WIDTH: u32 = 256;
/// Room height in pixels.
pub const ROOM_HEIGHT: u32 = 224;

/// Hero start position.
pub const HERO_START: (f64, f64) = (128.0, 180.0);
/// Hero speed in room units per millisecond.
pub const HERO_SPEED: f64 = 0.08;
/// Idle bob amplitude restored whenever the hero stops.
pub const HERO_BOB_AMPLITUDE: f64 = 0.6;
pub const HERO_BOB_SPEED: f64 = 0.004;
pub const HERO_RADIUS: f64 = 3.0;
/// The shadow sits this far above the hero's anchor point.
pub const SHADOW_OFFSET: f64 = 2.0;
/// Hero blink cycle.
pub const HERO_CYCLE_MS: f64 = 2800.0;

pub const HERO_BOUNDS: Bounds = Bounds::new(20.0, 236.0, 90.0, 210.0);

/// The room palette. Keys not listed here are skipped when drawing.
pub const ROOM_PALETTE: &[(char, &str)] = &[
    ('.', "transparent"),
    ('k', "#2a150a"),
    ('L', "#8b4e24"),
    ('f', "#f4ead0"),
    ('H', "#f8dcaa"),
    ('B', "#335289"),
    ('u', "#f7c9a4"),
    ('b', "#263b6b"),
    ('G', "#3d6d3f"),
    ('V', "#7cb349"),
    ('y', "#c9965b"),
    ('s', "#a36f3f"),
    ('c', "#4a2b15"),
    ('C', "#2c170c"),
    ('P', "#dec497"),
    ('M', "#c8773c"),
    ('w', "#5c351a"),
    ('m', "#915521"),
    ('Y', "#f3d386"),
    ('A', "#cda041"),
    ('a', "#b37d33"),
    ('r', "#69361a"),
    ('t', "#3d2a1a"),
    ('p', "#b44c4c"),
    ('q', "#2d5c1f"),
    ('Q', "#4f8c32"),
    ('g', "#6b8d2b"),
    ('l', "#f8f1df"),
    ('e', "#f2d9b1"),
    ('E', "#c49b72"),
    ('d', "#8b5639"),
    ('D', "#5b2f1a"),
    ('n', "#6b3c20"),
    ('N', "#472412"),
    ('i', "#1c1209"),
    ('I', "#2b180d"),
    ('x', "#4f2a19"),
    ('X', "#6c3b22"),
    ('z', "#a83640"),
    ('Z', "#e58b76"),
    ('v', "#7a2b33"),
    ('h', "#3b1d11"),
];

const BED: &[&str] = &[
    "....kkkkkkkkkkkkkkkkkkkkkkkk....",
    "..kkLLLLLLLLLLLLLLLLLLLLLLLLkk..",
    ".kLLLLLLLLLLLLLLLLLLLLLLLLLLLLk.",
    ".kLLffffffffffHHHHffffffffffLLk.",
    ".kLLffBBBBBBBBBBBBBBBBBBBBffLLk.",
    ".kLLffBBBBBuUUUUuBBBBBBBBffLLk.",
    ".kLLffBBBBBuUUUUuBBBBBBBBffLLk.",
    ".kLLffbbbbbbbbbbbbbbbbbbffLLk.",
    ".kLLffGGGGGGGGGGGGGGGGGGffLLk.",
    ".kLLffGGGVVVVVVVVVVGGGGGffLLk.",
    ".kLLffffffffffffffffffffffLLk.",
    ".kLLLLLLLLLLLLLLLLLLLLLLLLLLk.",
    ".kLLLLLLLLLLLLLLLLLLLLLLLLLLk.",
    "..kkkkkkkkkkkkkkkkkkkkkkkkkk..",
];

const JAR_SHELF: &[&str] = &[
    "....yyyyyyyy........",
    "..yyLLLLLLLLyy......",
    "..yyLLLLLLLLyy......",
    "..yyLLLLLLLLyy......",
    "..yyLLLLLLLLyy......",
    "..yyssssssssyy......",
    "....yyyyyyyy........",
    "..ccPPPPPPPPcc......",
    ".cPPffffffPPPc......",
    ".cPPffffffPPPc......",
    ".cPPPPPPPPPPPc......",
    "..ccPPPPPPPPcc......",
    "....yyyyyyyy........",
    "..ccPPPPPPPPcc......",
    ".cPPffffffPPPc......",
    ".cPPffffffPPPc......",
    ".cPPPPPPPPPPPc......",
    "..ccPPPPPPPPcc......",
];

const WALL_SHELF: &[&str] = &[
    "cccccccccccccccc",
    "CCCCCCCCCCCCCCCC",
    "LLLLLLLLLLLLLLLL",
    "LLLLLLLLLLLLLLLL",
    "ssssssssssssssss",
    "ssssssssssssssss",
];

const TABLE: &[&str] = &[
    "....yyyyyyyyyyyyyyyyyyyy....",
    "..yyLLLLLLLLLLLLLLLLLLLLyy..",
    "..yyLLLLLLLLLLLLLLLLLLLLyy..",
    "..yyLLLLLLLLLLLLLLLLLLLLyy..",
    "..yyLLLLLLLLLLLLLLLLLLLLyy..",
    "..yyMMMMMMMMMMMMMMMMMMMMyy..",
    "..yyMMMMMMMMMMMMMMMMMMMMyy..",
    "..yyMMMMMMMMMMMMMMMMMMMMyy..",
    "..yyMMMMMMMMMMMMMMMMMMMMyy..",
    "....wwwwwwwwwwwwwwwwwwww....",
    "....wwwwwwwwwwwwwwwwwwww....",
    "....ww....ww......ww....ww....",
    "....ww....ww......ww....ww....",
];

const BENCH: &[&str] = &[
    "....LLLLLLLLLLLLLLLL....",
    "..LLmmmmmmmmmmmmmmLL..",
    "..LLmmmmmmmmmmmmmmLL..",
    "..LLmmmmmmmmmmmmmmLL..",
    "..wwLLLLLLLLLLLLLLww..",
    "..wwwwwwwwwwwwwwwwww..",
];

const CHEST: &[&str] = &[
    "....cccccccccccc....",
    "..ccYYYYYYYYYYYYcc..",
    ".cYYAAAAAAAAAAAAYYc.",
    ".cYYAAAAAAAAAAAAYYc.",
    ".cYYaaaaaaaaaaaaYYc.",
    ".cYYaaaaaaaaaaaaYYc.",
    ".cYYMMMMMMMMMMMMYYc.",
    "..ccMMMMMMMMMMMMcc..",
    "....ccrrrrrrrrcc....",
];

const CRATE: &[&str] = &[
    "..rrrrrrrrrrrr..",
    ".rLLLLLLLLLLLLr.",
    ".rLrrLLLLLLrrLr.",
    ".rLrrLLLLLLrrLr.",
    ".rLLLLrrrrLLLLr.",
    ".rLLLLrrrrLLLLr.",
    ".rLLLLLLLLLLLLr.",
    "..rrrrrrrrrrrr..",
];

const LAMP: &[&str] = &[
    "....gggg....",
    "..ggGGGGgg..",
    "..ggGGGGgg..",
    "....GGGG....",
    "....GGGG....",
    "....gggg....",
    "....gggg....",
    "....llll....",
];

const LINK_IDLE: &[&str] = &[
    "....qqqqqq....",
    "..qqQQQQQQqq..",
    "..qqQQAAQQqq..",
    "..qqQAAAAQqq..",
    "..qqQAAuAQqq..",
    "..qqqquuqqqq..",
    "..qqqqppqqqq..",
    "..LLttttttLL..",
    ".LLttttttttLL.",
    ".wwttwwwwttww.",
    ".wwttwwwwttww.",
    "....ww..ww....",
];

const LINK_BLINK: &[&str] = &[
    "....qqqqqq....",
    "..qqQQQQQQqq..",
    "..qqQQQQQQqq..",
    "..qqQAAAAQqq..",
    "..qqQAAuAQqq..",
    "..qqqquuqqqq..",
    "..qqqqppqqqq..",
    "..LLttttttLL..",
    ".LLttttttttLL.",
    ".wwttwwwwttww.",
    ".wwttwwwwttww.",
    "....ww..ww....",
];

const FLOOR_SHADOW: &[&str] = &[
    "................",
    "....kkkkkkkk....",
    "..kkkkkkkkkkkk..",
    "..kkkkkkkkkkkk..",
    "..kkkkkkkkkkkk..",
    "..kkkkkkkkkkkk..",
    "..kkkkkkkkkkkk..",
    "....kkkkkkkk....",
    "................",
];

/// Sprite table in declaration order: `(name, rows)`.
pub const SPRITE_TABLE: &[(&str, &[&str])] = &[
    ("bed", BED),
    ("jarShelf", JAR_SHELF),
    ("wallShelf", WALL_SHELF),
    ("table", TABLE),
    ("bench", BENCH),
    ("chest", CHEST),
    ("crate", CRATE),
    ("lamp", LAMP),
    ("linkIdle", LINK_IDLE),
    ("linkBlink", LINK_BLINK),
    ("floorShadow", FLOOR_SHADOW),
];

/// Furniture placements, drawn in this order: `(sprite, x, y)`.
pub const FURNITURE: &[(&str, f64, f64)] = &[
    ("wallShelf", 30.0, 56.0),
    ("jarShelf", 20.0, 76.0),
    ("bed", 52.0, 92.0),
    ("table", 96.0, 128.0),
    ("lamp", 122.0, 108.0),
    ("bench", 76.0, 174.0),
    ("bench", 150.0, 174.0),
    ("chest", 186.0, 172.0),
    ("crate", 40.0, 180.0),
];

/// Parsed room content.
#[derive(Debug, Clone)]
pub struct RoomAssets {
    pub palette: PaletteTable,
    pub sprites: Vec<Arc<Drawable>>,
    pub hero: Arc<Drawable>,
    pub shadow: Arc<Drawable>,
}

/// Error building the built-in assets.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AssetError {
    #[error(transparent)]
    Palette(#[from] PaletteError),
    #[error(transparent)]
    Sprite(#[from] SpriteError),
    #[error("unknown sprite '{0}'")]
    UnknownSprite(String),
}

impl RoomAssets {
    /// Build the palette, sprites and hero animation.
    pub fn load() -> Result<Self, AssetError> {
        let palette = PaletteTable::from_pairs(ROOM_PALETTE.iter().copied())?;
        let sprites: Vec<Arc<Drawable>> = SPRITE_TABLE
            .iter()
            .map(|(name, rows)| Arc::new(Drawable::Static(Sprite::new(*name, rows.iter().copied()))))
            .collect();

        let frames = vec![
            static_sprite(&sprites, "linkIdle")?,
            static_sprite(&sprites, "linkBlink")?,
        ];
        let hero: Arc<Drawable> = Arc::new(AnimatedSprite::new(frames, HERO_CYCLE_MS)?.into());
        let shadow = find_sprite(&sprites, "floorShadow")?;

        Ok(Self { palette, sprites, hero, shadow })
    }

    /// Shared handle to a named sprite.
    pub fn sprite(&self, name: &str) -> Result<Arc<Drawable>, AssetError> {
        find_sprite(&self.sprites, name)
    }

    /// Furniture placed in the room, in draw order.
    pub fn furniture(&self) -> Result<Vec<SceneObject>, AssetError> {
        FURNITURE
            .iter()
            .map(|(name, x, y)| Ok(SceneObject::new(self.sprite(name)?, *x, *y)))
            .collect()
    }

    /// The hero body at `start`, bottom-anchored with the idle bob.
    pub fn hero_body(&self, start: (f64, f64)) -> SceneObject {
        SceneObject::new(self.hero.clone(), start.0, start.1)
            .with_anchor(Anchor::Bottom)
            .with_bob(HERO_BOB_AMPLITUDE, HERO_BOB_SPEED)
    }

    /// The floor shadow, centered.
    pub fn shadow_object(&self, x: f64, y: f64) -> SceneObject {
        SceneObject::new(self.shadow.clone(), x, y).with_anchor(Anchor::Center)
    }
}

fn find_sprite(sprites: &[Arc<Drawable>], name: &str) -> Result<Arc<Drawable>, AssetError> {
    sprites
        .iter()
        .find(|s| s.name() == name)
        .cloned()
        .ok_or_else(|| AssetError::UnknownSprite(name.to_string()))
}

fn static_sprite(sprites: &[Arc<Drawable>], name: &str) -> Result<Sprite, AssetError> {
    match find_sprite(sprites, name)?.as_ref() {
        Drawable::Static(sprite) => Ok(sprite.clone()),
        Drawable::Animated(_) => Err(AssetError::UnknownSprite(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assets_load() {
        let assets = RoomAssets::load().unwrap();
        assert_eq!(assets.sprites.len(), SPRITE_TABLE.len());
        assert_eq!(assets.palette.len(), ROOM_PALETTE.len());
        assert!(matches!(assets.hero.as_ref(), Drawable::Animated(a) if a.frames().len() == 2));
        assert_eq!(assets.shadow.name(), "floorShadow");
    }

    #[test]
    fn test_sprite_dimensions_from_rows() {
        let assets = RoomAssets::load().unwrap();
        match assets.sprite("bed").unwrap().as_ref() {
            Drawable::Static(bed) => {
                assert_eq!(bed.width(), 32);
                assert_eq!(bed.height(), 14);
            }
            other => panic!("bed should be static, got {other:?}"),
        }
        match assets.sprite("table").unwrap().as_ref() {
            Drawable::Static(table) => assert_eq!(table.width(), 30),
            other => panic!("table should be static, got {other:?}"),
        }
    }

    #[test]
    fn test_furniture_order() {
        let assets = RoomAssets::load().unwrap();
        let furniture = assets.furniture().unwrap();
        let names: Vec<&str> = furniture.iter().map(|o| o.sprite.name()).collect();
        assert_eq!(
            names,
            vec!["wallShelf", "jarShelf", "bed", "table", "lamp", "bench", "bench", "chest", "crate"]
        );
        assert!(furniture.iter().all(|o| o.anchor == Anchor::TopLeft && o.bob_amplitude == 0.0));
    }

    #[test]
    fn test_unknown_sprite() {
        let assets = RoomAssets::load().unwrap();
        assert_eq!(assets.sprite("piano"), Err(AssetError::UnknownSprite("piano".to_string())));
    }

    #[test]
    fn test_hero_body_defaults() {
        let assets = RoomAssets::load().unwrap();
        let body = assets.hero_body(HERO_START);
        assert_eq!((body.x, body.y), (128.0, 180.0));
        assert_eq!(body.anchor, Anchor::Bottom);
        assert_eq!(body.bob_amplitude, HERO_BOB_AMPLITUDE);
    }
}
