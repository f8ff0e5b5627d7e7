//! End-to-end tests for the room library
//!
//! These drive the public API the way the CLI does: build a room, feed it held
//! keys over time, and check positions and rendered pixels.

use image::{Rgba, RgbaImage};
use sha2::{Digest, Sha256};

use pixel_room::assets::{RoomAssets, HERO_BOUNDS, ROOM_HEIGHT, ROOM_WIDTH};
use pixel_room::clock::FrameClock;
use pixel_room::config::RoomConfig;
use pixel_room::motion::{Direction, HeldDirections, MotionController};
use pixel_room::playback::{render_frames, simulate};
use pixel_room::script::InputScript;
use pixel_room::surface::Canvas;
use pixel_room::tiles::Tile;
use pixel_room::validate::validate_assets;
use pixel_room::Room;

// ============================================================================
// Test Utilities
// ============================================================================

fn image_digest(image: &RgbaImage) -> String {
    let mut hasher = Sha256::new();
    hasher.update(image.as_raw());
    format!("{:x}", hasher.finalize())
}

fn held(keys: &[Direction]) -> HeldDirections {
    keys.iter().copied().collect()
}

/// Tick the room at a fixed interval, the way a display loop would.
fn run_for(room: &mut Room, keys: &HeldDirections, total_ms: f64, step_ms: f64) {
    let mut clock = FrameClock::new();
    let mut t = 0.0;
    room.update(keys, clock.advance(t));
    while t < total_ms {
        t += step_ms;
        room.update(keys, clock.advance(t));
    }
}

// ============================================================================
// Motion
// ============================================================================

#[test]
fn test_holding_right_for_one_second() {
    let mut room = Room::new().unwrap();
    run_for(&mut room, &held(&[Direction::Right]), 1000.0, 16.0);

    let (x, y) = room.actors.hero.position();
    // last step overshoots to 1008 ms
    assert!((x - (128.0 + 0.08 * 1008.0)).abs() < 1e-6, "x = {x}");
    assert_eq!(y, 180.0);
    assert!(room.actors.hero.moving);
    assert_eq!(room.actors.hero.body.bob_amplitude, 0.0);
}

#[test]
fn test_single_update_right_1000ms() {
    let mut room = Room::new().unwrap();
    room.update(&held(&[Direction::Right]), 1000.0);
    assert_eq!(room.actors.hero.position(), (208.0, 180.0));
}

#[test]
fn test_scripted_right_reaches_208() {
    let mut room = Room::new().unwrap();
    let script: InputScript = "right:1000".parse().unwrap();
    let states = simulate(&mut room, &script, 1000.0 / 50.0, 0.0);

    let (x, _) = states.last().unwrap().actors.hero.position();
    assert!((x - 208.0).abs() < 1e-6, "x = {x}");
}

#[test]
fn test_opposing_keys_cancel() {
    let mut room = Room::new().unwrap();
    run_for(&mut room, &held(&[Direction::Left, Direction::Right]), 500.0, 20.0);
    assert_eq!(room.actors.hero.position(), (128.0, 180.0));
    assert!(!room.actors.hero.moving);
}

#[test]
fn test_hero_stays_inside_bounds() {
    let mut room = Room::new().unwrap();
    run_for(&mut room, &held(&[Direction::Up, Direction::Left]), 10_000.0, 50.0);
    assert_eq!(room.actors.hero.position(), (HERO_BOUNDS.min_x, HERO_BOUNDS.min_y));

    run_for(&mut room, &held(&[Direction::Down, Direction::Right]), 10_000.0, 50.0);
    assert_eq!(room.actors.hero.position(), (HERO_BOUNDS.max_x, HERO_BOUNDS.max_y));
}

#[test]
fn test_obstruction_blocks_one_axis_only() {
    let mut room = Room::new().unwrap();
    // a wall at x > 140
    room.motion = MotionController::new(HERO_BOUNDS).with_obstruction(|x: f64, _y: f64| x > 140.0);

    run_for(&mut room, &held(&[Direction::Right, Direction::Down]), 1000.0, 10.0);
    let (x, y) = room.actors.hero.position();
    assert!(x <= 140.0, "x = {x}");
    assert!(y > 180.0, "y = {y}");
}

#[test]
fn test_shadow_follows_hero() {
    let mut room = Room::new().unwrap();
    run_for(&mut room, &held(&[Direction::Left]), 200.0, 20.0);
    let (x, y) = room.actors.hero.position();
    assert_eq!((room.actors.shadow.x, room.actors.shadow.y), (x, y - 2.0));
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_render_is_deterministic() {
    let room = Room::new().unwrap();
    let a = room.snapshot(500.0).unwrap();
    let b = room.snapshot(500.0).unwrap();
    assert_eq!(a.dimensions(), (ROOM_WIDTH, ROOM_HEIGHT));
    assert_eq!(image_digest(&a), image_digest(&b));
}

#[test]
fn test_moving_changes_the_frame() {
    let mut room = Room::new().unwrap();
    let before = image_digest(&room.snapshot(0.0).unwrap());
    run_for(&mut room, &held(&[Direction::Up]), 300.0, 20.0);
    let after = image_digest(&room.snapshot(0.0).unwrap());
    assert_ne!(before, after);
}

#[test]
fn test_frame_is_fully_opaque() {
    let image = Room::new().unwrap().snapshot(0.0).unwrap();
    assert!(image.pixels().all(|p: &Rgba<u8>| p[3] == 255));
}

#[test]
fn test_tick_matches_snapshot() {
    let mut room = Room::new().unwrap();
    let mut canvas = Canvas::new(ROOM_WIDTH, ROOM_HEIGHT).unwrap();
    room.tick(&mut canvas, &held(&[Direction::Down]), 50.0, 50.0);
    assert_eq!(image_digest(canvas.image()), image_digest(&room.snapshot(50.0).unwrap()));
}

#[test]
fn test_parallel_playback_matches_snapshots() {
    let mut room = Room::new().unwrap();
    let script: InputScript = "down:40,idle:40".parse().unwrap();
    let states = simulate(&mut room, &script, 20.0, 0.0);
    let frames = render_frames(&room.stage, &states).unwrap();

    let last = states.last().unwrap();
    let mut replay = Room::new().unwrap();
    replay.actors = last.actors.clone();
    assert_eq!(frames.last().unwrap(), &replay.snapshot(last.timestamp).unwrap());
}

#[test]
fn test_hud_toggle_changes_frame() {
    let mut config = RoomConfig::default();
    config.render.hud = false;
    let plain = Room::from_config(&config).unwrap().snapshot(0.0).unwrap();
    let with_hud = Room::new().unwrap().snapshot(0.0).unwrap();
    assert_ne!(image_digest(&plain), image_digest(&with_hud));
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_builtin_assets_flag_missing_keys() {
    let assets = RoomAssets::load().unwrap();
    let warnings = validate_assets(&assets.palette, &assets.sprites, &Tile::ALL);
    let messages: Vec<String> = warnings.iter().map(|w| w.to_string()).collect();

    assert!(messages.contains(&"sprite 'bed': key 'U' is not in the palette".to_string()), "{messages:?}");
    assert!(
        messages.contains(&"tile 'floorPlankDark': key 'T' is not in the palette".to_string()),
        "{messages:?}"
    );
}

#[test]
fn test_palette_override_silences_warning() {
    let assets = RoomAssets::load().unwrap();
    let palette = assets.palette.with_overrides([("U", "#f7c9a4"), ("T", "#3d2a1a")]).unwrap();
    let warnings = validate_assets(&palette, &assets.sprites, &Tile::ALL);
    assert!(warnings.iter().all(|w| !w.message.contains("is not in the palette")), "{warnings:?}");
}
