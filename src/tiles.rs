//! 8x8 indexed tiles and the tile stamper

use crate::palette::{PaletteTable, NO_PAINT};
use crate::surface::Surface;

/// Tile edge length in pixels.
pub const TILE_SIZE: i32 = 8;

type TileRows = [&'static str; TILE_SIZE as usize];

/// Every tile in the room's tile set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    WallCap,
    WallInset,
    WallPanel,
    WallShadow,
    WallBase,
    FloorPlankLight,
    FloorPlankDark,
    FloorNail,
    RugCenter,
    RugInner,
    RugEdgeHorizontal,
    RugEdgeVerticalLeft,
    RugEdgeVerticalRight,
    RugCornerNw,
    RugCornerNe,
    RugCornerSw,
    RugCornerSe,
    RugFringe,
}

impl Tile {
    pub const ALL: [Tile; 18] = [
        Tile::WallCap,
        Tile::WallInset,
        Tile::WallPanel,
        Tile::WallShadow,
        Tile::WallBase,
        Tile::FloorPlankLight,
        Tile::FloorPlankDark,
        Tile::FloorNail,
        Tile::RugCenter,
        Tile::RugInner,
        Tile::RugEdgeHorizontal,
        Tile::RugEdgeVerticalLeft,
        Tile::RugEdgeVerticalRight,
        Tile::RugCornerNw,
        Tile::RugCornerNe,
        Tile::RugCornerSw,
        Tile::RugCornerSe,
        Tile::RugFringe,
    ];

    /// Name used in the tile table.
    pub fn name(self) -> &'static str {
        match self {
            Tile::WallCap => "wallCap",
            Tile::WallInset => "wallInset",
            Tile::WallPanel => "wallPanel",
            Tile::WallShadow => "wallShadow",
            Tile::WallBase => "wallBase",
            Tile::FloorPlankLight => "floorPlankLight",
            Tile::FloorPlankDark => "floorPlankDark",
            Tile::FloorNail => "floorNail",
            Tile::RugCenter => "rugCenter",
            Tile::RugInner => "rugInner",
            Tile::RugEdgeHorizontal => "rugEdgeHorizontal",
            Tile::RugEdgeVerticalLeft => "rugEdgeVerticalLeft",
            Tile::RugEdgeVerticalRight => "rugEdgeVerticalRight",
            Tile::RugCornerNw => "rugCornerNW",
            Tile::RugCornerNe => "rugCornerNE",
            Tile::RugCornerSw => "rugCornerSW",
            Tile::RugCornerSe => "rugCornerSE",
            Tile::RugFringe => "rugFringe",
        }
    }

    /// Look a tile up by its table name.
    pub fn from_name(name: &str) -> Option<Tile> {
        Tile::ALL.into_iter().find(|t| t.name() == name)
    }

    /// The tile's symbolic rows.
    pub fn rows(self) -> &'static TileRows {
        match self {
            Tile::WallCap => &WALL_CAP,
            Tile::WallInset => &WALL_INSET,
            Tile::WallPanel => &WALL_PANEL,
            Tile::WallShadow => &WALL_SHADOW,
            Tile::WallBase => &WALL_BASE,
            Tile::FloorPlankLight => &FLOOR_PLANK_LIGHT,
            Tile::FloorPlankDark => &FLOOR_PLANK_DARK,
            Tile::FloorNail => &FLOOR_NAIL,
            Tile::RugCenter => &RUG_CENTER,
            Tile::RugInner => &RUG_INNER,
            Tile::RugEdgeHorizontal => &RUG_EDGE_HORIZONTAL,
            Tile::RugEdgeVerticalLeft | Tile::RugEdgeVerticalRight => &RUG_EDGE_VERTICAL,
            Tile::RugCornerNw => &RUG_CORNER_NW,
            Tile::RugCornerNe => &RUG_CORNER_NE,
            Tile::RugCornerSw => &RUG_CORNER_SW,
            Tile::RugCornerSe => &RUG_CORNER_SE,
            Tile::RugFringe => &RUG_FRINGE,
        }
    }

    /// Key at `(col, row)`; cells past a row's end read as no-paint.
    pub fn key_at(self, col: usize, row: usize) -> char {
        self.rows().get(row).and_then(|line| line.chars().nth(col)).unwrap_or(NO_PAINT)
    }
}

/// Paint one tile with its top-left at pixel `(tile_x * 8, tile_y * 8)`.
///
/// No-paint cells and keys missing from the palette leave the surface as is.
pub fn stamp_tile<S: Surface + ?Sized>(
    surface: &mut S,
    palette: &PaletteTable,
    tile: Tile,
    tile_x: i32,
    tile_y: i32,
) {
    let base_x = tile_x * TILE_SIZE;
    let base_y = tile_y * TILE_SIZE;
    for (row, line) in tile.rows().iter().enumerate() {
        for (col, key) in line.chars().take(TILE_SIZE as usize).enumerate() {
            if let Some(color) = palette.color(key) {
                surface.fill_pixel((base_x + col as i32) as f64, (base_y + row as i32) as f64, color);
            }
        }
    }
}

/// Stamp `tile` over a `width` x `height` block of tile cells.
pub fn fill_tiles<S: Surface + ?Sized>(
    surface: &mut S,
    palette: &PaletteTable,
    tile: Tile,
    start_x: i32,
    start_y: i32,
    width: i32,
    height: i32,
) {
    for tile_y in start_y..start_y + height {
        for tile_x in start_x..start_x + width {
            stamp_tile(surface, palette, tile, tile_x, tile_y);
        }
    }
}

const WALL_CAP: TileRows =
    ["iiiiiiii", "IIIIIIII", "iiiiiiii", "IIIIIIII", "iiiiiiii", "IIIIIIII", "iiiiiiii", "IIIIIIII"];

const WALL_INSET: TileRows =
    ["EEEEEEEE", "EEEEEEEE", "eeeeeeee", "eeeeeeee", "EEEEEEEE", "EEEEEEEE", "eeeeeeee", "eeeeeeee"];

const WALL_PANEL: TileRows =
    ["dddddddd", "DDDDDDDD", "dddddddd", "DDDDDDDD", "dddddddd", "DDDDDDDD", "dddddddd", "DDDDDDDD"];

const WALL_SHADOW: TileRows =
    ["hhhhhhhh", "HHHHHHHH", "hhhhhhhh", "HHHHHHHH", "hhhhhhhh", "HHHHHHHH", "hhhhhhhh", "HHHHHHHH"];

const WALL_BASE: TileRows =
    ["nnnnnnnn", "NNNNNNNN", "nnnnnnnn", "NNNNNNNN", "nnnnnnnn", "NNNNNNNN", "nnnnnnnn", "NNNNNNNN"];

const FLOOR_PLANK_LIGHT: TileRows =
    ["AAaaAAaa", "AAAAaaaa", "AAaaAAaa", "AAAAaaaa", "AAaaAAaa", "AAAAaaaa", "AAaaAAaa", "AAAAaaaa"];

const FLOOR_PLANK_DARK: TileRows =
    ["ttTTttTT", "ttTTttTT", "tTTttTTt", "ttTTttTT", "ttTTttTT", "tTTttTTt", "ttTTttTT", "ttTTttTT"];

const FLOOR_NAIL: TileRows =
    ["ttTTttTT", "ttTTttTT", "tTTttTTt", "ttTTttTT", "tttNNttt", "ttTTttTT", "ttTTttTT", "ttTTttTT"];

const RUG_CENTER: TileRows =
    ["pppppppp", "PPPPPPPP", "pppppppp", "PPPPPPPP", "pppppppp", "PPPPPPPP", "pppppppp", "PPPPPPPP"];

const RUG_INNER: TileRows =
    ["zzzzzzzz", "zZZZZZzz", "zzzzzzzz", "zZZZZZzz", "zzzzzzzz", "zZZZZZzz", "zzzzzzzz", "zZZZZZzz"];

const RUG_EDGE_HORIZONTAL: TileRows =
    ["rrrrrrrr", "rrrrrrrr", "rrrrrrrr", "zzzzzzzz", "ZZZZZZZZ", "pppppppp", "pppppppp", "pppppppp"];

// Left and right vertical edges share one pattern.
const RUG_EDGE_VERTICAL: TileRows =
    ["rrrrrrrr", "zzzzzzzz", "ZZZZZZZZ", "pppppppp", "pppppppp", "ZZZZZZZZ", "zzzzzzzz", "rrrrrrrr"];

const RUG_CORNER_NW: TileRows =
    ["rrrrrrrr", "rrrrrrrr", "rrzzzzzz", "rrzzzzzz", "rrZZZZZZ", "rrZZZZZZ", "rrpppppp", "rrpppppp"];

const RUG_CORNER_NE: TileRows =
    ["rrrrrrrr", "rrrrrrrr", "zzzzzzrr", "zzzzzzrr", "ZZZZZZrr", "ZZZZZZrr", "pppppprr", "pppppprr"];

const RUG_CORNER_SW: TileRows =
    ["rrpppppp", "rrpppppp", "rrZZZZZZ", "rrZZZZZZ", "rrzzzzzz", "rrzzzzzz", "rrrrrrrr", "rrrrrrrr"];

const RUG_CORNER_SE: TileRows =
    ["pppppprr", "pppppprr", "ZZZZZZrr", "ZZZZZZrr", "zzzzzzrr", "zzzzzzrr", "rrrrrrrr", "rrrrrrrr"];

const RUG_FRINGE: TileRows =
    ["........", "YYYYYYYY", "........", "YYYYYYYY", "........", "YYYYYYYY", "........", "YYYYYYYY"];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::rgb;
    use crate::surface::Canvas;
    use image::Rgba;

    fn palette() -> PaletteTable {
        PaletteTable::from_pairs([('.', "transparent"), ('Y', "#f3d386"), ('i', "#1c1209")]).unwrap()
    }

    #[test]
    fn test_every_tile_is_eight_by_eight() {
        for tile in Tile::ALL {
            assert_eq!(tile.rows().len(), 8, "{}", tile.name());
            assert!(tile.rows().iter().all(|r| r.chars().count() == 8), "{}", tile.name());
        }
    }

    #[test]
    fn test_names_round_trip() {
        for tile in Tile::ALL {
            assert_eq!(Tile::from_name(tile.name()), Some(tile));
        }
        assert_eq!(Tile::from_name("lava"), None);
    }

    #[test]
    fn test_stamp_places_tile_on_grid() {
        let mut canvas = Canvas::new(32, 32).unwrap();
        stamp_tile(&mut canvas, &palette(), Tile::WallCap, 1, 2);
        // 'i' rows are painted, 'I' has no palette entry here and is skipped
        assert_eq!(canvas.pixel(8, 16), rgb(0x1c, 0x12, 0x09));
        assert_eq!(canvas.pixel(15, 16), rgb(0x1c, 0x12, 0x09));
        assert_eq!(canvas.pixel(8, 17)[3], 0);
        assert_eq!(canvas.pixel(7, 16)[3], 0);
        assert_eq!(canvas.pixel(16, 16)[3], 0);
    }

    #[test]
    fn test_stamp_skips_no_paint_cells() {
        let mut canvas = Canvas::new(8, 8).unwrap();
        canvas.fill_rect(0.0, 0.0, 8.0, 8.0, rgb(1, 2, 3));
        stamp_tile(&mut canvas, &palette(), Tile::RugFringe, 0, 0);
        assert_eq!(canvas.pixel(0, 0), rgb(1, 2, 3));
        assert_eq!(canvas.pixel(0, 1), rgb(0xf3, 0xd3, 0x86));
    }

    #[test]
    fn test_fill_tiles_covers_region() {
        let mut canvas = Canvas::new(40, 24).unwrap();
        fill_tiles(&mut canvas, &palette(), Tile::RugFringe, 1, 1, 3, 1);
        assert_eq!(canvas.pixel(8, 9), rgb(0xf3, 0xd3, 0x86));
        assert_eq!(canvas.pixel(31, 15), rgb(0xf3, 0xd3, 0x86));
        assert_eq!(canvas.pixel(32, 9), Rgba([0, 0, 0, 0]));
        assert_eq!(canvas.pixel(8, 17), Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn test_key_at_out_of_range() {
        assert_eq!(Tile::FloorNail.key_at(3, 4), 'N');
        assert_eq!(Tile::FloorNail.key_at(8, 0), NO_PAINT);
        assert_eq!(Tile::FloorNail.key_at(0, 8), NO_PAINT);
    }
}
