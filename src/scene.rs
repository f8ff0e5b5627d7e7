//! Procedural room background
//!
//! The background is a pure function of constants: every call paints the same
//! pixels, so it is simply redrawn at the start of each frame.

use image::Rgba;

use crate::assets::{ROOM_HEIGHT, ROOM_WIDTH};
use crate::color::rgb;
use crate::palette::PaletteTable;
use crate::surface::{RadialGradient, Surface};
use crate::tiles::{fill_tiles, stamp_tile, Tile};

const BACKDROP: Rgba<u8> = rgb(0x0c, 0x05, 0x03);

const DOOR_FILL: Rgba<u8> = rgb(0x1f, 0x0d, 0x06);
const DOOR_TRIM: Rgba<u8> = rgb(0xd9, 0xc0, 0x8c);
const DOOR_INLAY: Rgba<u8> = rgb(0xb9, 0x8d, 0x4f);
const DOOR_SILL: Rgba<u8> = rgb(0x71, 0x3d, 0x1c);
const DOOR_SILL_TOP: Rgba<u8> = rgb(0xc0, 0x91, 0x58);

/// Carved panel above the door; `1` is trim, `8` is inlay, `0` is left alone.
const DOOR_GLYPH: [&str; 9] = [
    "..111100001111..",
    ".1000000000001.",
    ".1088001108801.",
    ".1000000000001.",
    ".1110011110011.",
    ".1000000000001.",
    ".1088001108801.",
    ".1000000000001.",
    "..111100001111..",
];
const DOOR_GLYPH_ORIGIN: (f64, f64) = (110.0, 20.0);

const STEP_UPPER: Rgba<u8> = rgb(0x44, 0x23, 0x12);
const STEP_LOWER: Rgba<u8> = rgb(0x64, 0x33, 0x1a);
const THRESHOLD: Rgba<u8> = rgb(0x1d, 0x0b, 0x05);

/// Warm glow at the center of the light.
const LIGHT_INNER: Rgba<u8> = Rgba([255, 220, 150, 38]);
/// Darkness toward the corners.
const LIGHT_OUTER: Rgba<u8> = Rgba([0, 0, 0, 166]);

/// Floor board region in tile units: `(x, y, width, height)`.
pub const FLOOR_REGION: (i32, i32, i32, i32) = (2, 9, 28, 16);
/// Rug region in tile units: `(x, y, width, height)`.
pub const RUG_REGION: (i32, i32, i32, i32) = (9, 13, 14, 8);

/// Paint the full room background in its fixed order.
pub fn draw_background<S: Surface + ?Sized>(surface: &mut S, palette: &PaletteTable) {
    surface.fill_rect(0.0, 0.0, ROOM_WIDTH as f64, ROOM_HEIGHT as f64, BACKDROP);
    draw_walls(surface, palette);
    draw_doorway(surface);
    draw_floor_boards(surface, palette);
    draw_rug(surface, palette);
    draw_entry_step(surface);
    draw_light_falloff(surface);
}

fn draw_walls<S: Surface + ?Sized>(surface: &mut S, palette: &PaletteTable) {
    fill_tiles(surface, palette, Tile::WallCap, 0, 0, 32, 1);
    fill_tiles(surface, palette, Tile::WallInset, 1, 1, 30, 1);
    fill_tiles(surface, palette, Tile::WallPanel, 1, 2, 30, 1);
    fill_tiles(surface, palette, Tile::WallShadow, 0, 3, 32, 1);
    fill_tiles(surface, palette, Tile::WallBase, 0, 4, 32, 2);
}

fn draw_doorway<S: Surface + ?Sized>(surface: &mut S) {
    surface.fill_rect(104.0, 16.0, 48.0, 56.0, DOOR_FILL);

    let (origin_x, origin_y) = DOOR_GLYPH_ORIGIN;
    for (y, row) in DOOR_GLYPH.iter().enumerate() {
        for (x, cell) in row.chars().enumerate() {
            let color = match cell {
                '1' => DOOR_TRIM,
                '8' => DOOR_INLAY,
                _ => continue,
            };
            surface.fill_pixel(origin_x + x as f64, origin_y + y as f64, color);
        }
    }

    surface.fill_rect(112.0, 58.0, 32.0, 10.0, DOOR_SILL);
    surface.fill_rect(116.0, 60.0, 24.0, 6.0, DOOR_SILL_TOP);
}

/// Floor tile for local tile coordinates inside [`FLOOR_REGION`].
pub fn floor_tile_at(tx: i32, ty: i32) -> Tile {
    if (tx + ty) % 7 == 0 && ty % 4 == 0 {
        Tile::FloorNail
    } else if (tx + ty) % 2 == 0 {
        Tile::FloorPlankLight
    } else {
        Tile::FloorPlankDark
    }
}

fn draw_floor_boards<S: Surface + ?Sized>(surface: &mut S, palette: &PaletteTable) {
    let (start_x, start_y, width, height) = FLOOR_REGION;
    for ty in 0..height {
        for tx in 0..width {
            stamp_tile(surface, palette, floor_tile_at(tx, ty), start_x + tx, start_y + ty);
        }
    }
}

/// Rug tile for local tile coordinates in a `width` x `height` rug.
pub fn rug_tile_at(tx: i32, ty: i32, width: i32, height: i32) -> Tile {
    let left = tx == 0;
    let right = tx == width - 1;
    let top = ty == 0;
    let bottom = ty == height - 1;

    match (top, bottom, left, right) {
        (true, _, true, _) => Tile::RugCornerNw,
        (true, _, _, true) => Tile::RugCornerNe,
        (_, true, true, _) => Tile::RugCornerSw,
        (_, true, _, true) => Tile::RugCornerSe,
        (true, _, _, _) | (_, true, _, _) => Tile::RugEdgeHorizontal,
        (_, _, true, _) => Tile::RugEdgeVerticalLeft,
        (_, _, _, true) => Tile::RugEdgeVerticalRight,
        _ if (tx + ty) % 2 == 0 => Tile::RugInner,
        _ => Tile::RugCenter,
    }
}

fn draw_rug<S: Surface + ?Sized>(surface: &mut S, palette: &PaletteTable) {
    let (x, y, width, height) = RUG_REGION;
    for ty in 0..height {
        for tx in 0..width {
            stamp_tile(surface, palette, rug_tile_at(tx, ty, width, height), x + tx, y + ty);
        }
    }
    fill_tiles(surface, palette, Tile::RugFringe, x, y - 1, width, 1);
    fill_tiles(surface, palette, Tile::RugFringe, x, y + height, width, 1);
}

fn draw_entry_step<S: Surface + ?Sized>(surface: &mut S) {
    surface.fill_rect(48.0, 196.0, 160.0, 8.0, STEP_UPPER);
    surface.fill_rect(60.0, 204.0, 136.0, 6.0, STEP_LOWER);
    surface.fill_rect(0.0, 208.0, ROOM_WIDTH as f64, 16.0, THRESHOLD);
}

fn draw_light_falloff<S: Surface + ?Sized>(surface: &mut S) {
    let gradient = RadialGradient::new(128.0, 120.0, 20.0, 180.0)
        .add_stop(0.0, LIGHT_INNER)
        .add_stop(1.0, LIGHT_OUTER);
    surface.fill_radial_gradient(&gradient, 0.0, 0.0, ROOM_WIDTH as f64, ROOM_HEIGHT as f64);
}
