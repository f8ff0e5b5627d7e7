//! The room: static stage, moving actors and the per-tick update/render pass
//!
//! Rendering is a pure function of `(stage, actors, timestamp)`, which lets
//! already-simulated frames be rendered independently of the update loop.

use image::RgbaImage;

use crate::animation::sample;
use crate::assets::{RoomAssets, HERO_RADIUS, ROOM_HEIGHT, ROOM_WIDTH};
use crate::config::RoomConfig;
use crate::error::RoomError;
use crate::hud::draw_hud;
use crate::models::{Actors, Hero, SceneObject};
use crate::motion::{HeldDirections, MotionController};
use crate::palette::PaletteTable;
use crate::renderer::draw_sprite;
use crate::scene::draw_background;
use crate::surface::{Canvas, Surface, SurfaceError};

/// Everything that never changes after construction.
#[derive(Debug, Clone)]
pub struct Stage {
    pub palette: PaletteTable,
    /// Decorations, drawn in order
    pub objects: Vec<SceneObject>,
    pub hud: bool,
}

/// A fully assembled room.
#[derive(Debug)]
pub struct Room {
    pub stage: Stage,
    pub actors: Actors,
    pub motion: MotionController,
}

impl Room {
    /// The room with its built-in defaults.
    pub fn new() -> Result<Self, RoomError> {
        Self::from_config(&RoomConfig::default())
    }

    /// Build the room, applying hero tuning, bounds and palette overrides.
    pub fn from_config(config: &RoomConfig) -> Result<Self, RoomError> {
        let assets = RoomAssets::load()?;
        let palette = assets
            .palette
            .with_overrides(config.palette.iter().map(|(k, v)| (k.as_str(), v.as_str())))?;
        let objects = assets.furniture()?;

        let hero_cfg = &config.hero;
        let body = assets
            .hero_body(config.start())
            .with_bob(hero_cfg.bob_amplitude, hero_cfg.bob_speed);
        let hero = Hero::new(body, hero_cfg.speed, HERO_RADIUS);
        let shadow = assets.shadow_object(0.0, 0.0);
        let actors = Actors::new(hero, shadow, hero_cfg.shadow_offset);

        let motion = MotionController::new(config.bounds)
            .with_rest_bob(hero_cfg.bob_amplitude)
            .with_shadow_offset(hero_cfg.shadow_offset);

        log::debug!(
            "room ready: {} objects, {} palette keys, hero at {:?}",
            objects.len(),
            palette.len(),
            actors.hero.position()
        );

        Ok(Self { stage: Stage { palette, objects, hud: config.render.hud }, actors, motion })
    }

    /// Move the hero for one tick.
    pub fn update(&mut self, held: &HeldDirections, elapsed_ms: f64) {
        self.motion.update(&mut self.actors, held, elapsed_ms);
    }

    /// Draw the current state at `timestamp`.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S, timestamp: f64) {
        render_frame(surface, &self.stage, &self.actors, timestamp);
    }

    /// One full tick: update, then render.
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S, held: &HeldDirections, elapsed_ms: f64, timestamp: f64) {
        self.update(held, elapsed_ms);
        log::trace!("tick t={timestamp} held={held} hero={:?}", self.actors.hero.position());
        self.render(surface, timestamp);
    }

    /// Render the current state into a fresh room-sized image.
    pub fn snapshot(&self, timestamp: f64) -> Result<RgbaImage, SurfaceError> {
        render_image(&self.stage, &self.actors, timestamp)
    }
}

/// Draw a frame: background, decorations with their bob, shadow, hero, HUD.
///
/// Only the decorations bob. The hero's `bob_amplitude` is motion state and
/// never offsets where it is drawn.
pub fn render_frame<S: Surface + ?Sized>(surface: &mut S, stage: &Stage, actors: &Actors, timestamp: f64) {
    draw_background(surface, &stage.palette);
    for object in &stage.objects {
        draw_object(surface, &stage.palette, object, timestamp);
    }
    draw_object(surface, &stage.palette, &actors.shadow, timestamp);
    let body = &actors.hero.body;
    draw_sprite(surface, &stage.palette, sample(&body.sprite, timestamp), body.x, body.y, body.anchor);
    if stage.hud {
        draw_hud(surface);
    }
}

fn draw_object<S: Surface + ?Sized>(surface: &mut S, palette: &PaletteTable, object: &SceneObject, timestamp: f64) {
    let sprite = sample(&object.sprite, timestamp);
    let y = object.y + object.bob_offset(timestamp);
    draw_sprite(surface, palette, sprite, object.x, y, object.anchor);
}

/// Render a frame into a new 256x224 image.
pub fn render_image(stage: &Stage, actors: &Actors, timestamp: f64) -> Result<RgbaImage, SurfaceError> {
    let mut canvas = Canvas::new(ROOM_WIDTH, ROOM_HEIGHT)?;
    render_frame(&mut canvas, stage, actors, timestamp);
    Ok(canvas.into_image())
}
