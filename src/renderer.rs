//! Sprite blitting onto a surface and standalone sprite rendering

use image::{Rgba, RgbaImage};

use crate::models::{Anchor, Sprite};
use crate::palette::PaletteTable;
use crate::surface::{Canvas, Surface};
use crate::validate::Warning;

/// Transparent color used for empty images
const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Top-left corner at which a `width` x `height` box anchored at `(x, y)` is drawn.
///
/// ```
/// use pixel_room::models::Anchor;
/// use pixel_room::renderer::anchor_origin;
///
/// assert_eq!(anchor_origin(14, 12, 128.0, 180.0, Anchor::TopLeft), (128.0, 180.0));
/// assert_eq!(anchor_origin(14, 12, 128.0, 180.0, Anchor::Center), (121.0, 174.0));
/// assert_eq!(anchor_origin(14, 12, 128.0, 180.0, Anchor::Bottom), (128.0, 168.0));
/// ```
pub fn anchor_origin(width: usize, height: usize, x: f64, y: f64, anchor: Anchor) -> (f64, f64) {
    match anchor {
        Anchor::TopLeft => (x, y),
        Anchor::Center => (x - width as f64 / 2.0, y - height as f64 / 2.0),
        Anchor::Bottom => (x, y - height as f64),
    }
}

/// Draw `sprite` anchored at `(x, y)`, one 1x1 cell per key.
///
/// Cells are visited row-major. No-paint cells and keys the palette does not
/// know are skipped without touching the surface.
pub fn draw_sprite<S: Surface + ?Sized>(
    surface: &mut S,
    palette: &PaletteTable,
    sprite: &Sprite,
    x: f64,
    y: f64,
    anchor: Anchor,
) {
    let (origin_x, origin_y) = anchor_origin(sprite.width(), sprite.height(), x, y, anchor);
    for row in 0..sprite.height() {
        for col in 0..sprite.width() {
            if let Some(color) = palette.color(sprite.key_at(col, row)) {
                surface.fill_pixel(origin_x + col as f64, origin_y + row as f64, color);
            }
        }
    }
}

/// Render a sprite on its own into a tightly sized RGBA image.
///
/// Returns the image and warnings for keys missing from the palette. An empty
/// sprite yields a 1x1 transparent image with a warning.
///
/// # Examples
///
/// ```
/// use pixel_room::models::Sprite;
/// use pixel_room::palette::PaletteTable;
/// use pixel_room::renderer::render_sprite;
///
/// let palette = PaletteTable::from_pairs([('r', "#FF0000")]).unwrap();
/// let sprite = Sprite::new("dot", [".r"]);
/// let (image, warnings) = render_sprite(&sprite, &palette);
/// assert_eq!(image.dimensions(), (2, 1));
/// assert_eq!(*image.get_pixel(1, 0), image::Rgba([255, 0, 0, 255]));
/// assert!(warnings.is_empty());
/// ```
pub fn render_sprite(sprite: &Sprite, palette: &PaletteTable) -> (RgbaImage, Vec<Warning>) {
    let mut warnings = Vec::new();

    let canvas = Canvas::new(sprite.width() as u32, sprite.height() as u32);
    let Ok(mut canvas) = canvas else {
        warnings.push(Warning::new(format!("Empty grid in sprite '{}'", sprite.name())));
        return (RgbaImage::from_pixel(1, 1, TRANSPARENT), warnings);
    };

    for key in sprite.keys() {
        if !palette.knows(key) {
            warnings.push(Warning::new(format!(
                "Unknown key '{}' in sprite '{}', leaving those pixels empty",
                key,
                sprite.name()
            )));
        }
    }

    draw_sprite(&mut canvas, palette, sprite, 0.0, 0.0, Anchor::TopLeft);
    (canvas.into_image(), warnings)
}
