//! Render and sprite command implementations

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::animation::sample;
use crate::assets::{RoomAssets, ROOM_HEIGHT, ROOM_WIDTH, SPRITE_TABLE};
use crate::config::{load_config, CliOverrides};
use crate::motion::HeldDirections;
use crate::output::{save_png, scale_image};
use crate::renderer::render_sprite;
use crate::suggest::{format_suggestion, suggest};
use crate::surface::Canvas;
use crate::tiles::Tile;
use crate::validate::validate_assets;

use super::{prepare_room, report_warnings, EXIT_ERROR, EXIT_SUCCESS};

/// Execute the render command: one tick with `held`, then a PNG of the frame.
pub fn run_render(
    config_path: Option<&Path>,
    overrides: &CliOverrides,
    output: &Path,
    time: f64,
    held: HeldDirections,
    strict: bool,
) -> ExitCode {
    let (config, mut room) = match prepare_room(config_path, overrides) {
        Ok(prepared) => prepared,
        Err(code) => return code,
    };

    if strict {
        let assets = match RoomAssets::load() {
            Ok(a) => a,
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::from(EXIT_ERROR);
            }
        };
        let warnings = validate_assets(&room.stage.palette, &assets.sprites, &Tile::ALL);
        if let Err(code) = report_warnings(&warnings, true) {
            return code;
        }
    }

    let mut canvas = match Canvas::new(ROOM_WIDTH, ROOM_HEIGHT) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };
    // a single first tick: no time has passed, but held keys still mark the hero as moving
    room.tick(&mut canvas, &held, 0.0, time);

    let image = scale_image(canvas.into_image(), config.render.scale);
    if let Err(e) = save_png(&image, output) {
        eprintln!("Error: {}", e);
        return ExitCode::from(EXIT_ERROR);
    }

    println!("Saved {}", output.display());
    ExitCode::from(EXIT_SUCCESS)
}

/// Execute the sprite command: export one built-in sprite on its own.
pub fn run_sprite(config_path: Option<&Path>, name: &str, output: Option<&Path>, time: f64, scale: u32) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let assets = match RoomAssets::load() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };
    let palette = match assets.palette.with_overrides(config.palette.iter().map(|(k, v)| (k.as_str(), v.as_str()))) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let drawable = if name == "hero" {
        assets.hero.clone()
    } else {
        match assets.sprite(name) {
            Ok(d) => d,
            Err(e) => {
                eprintln!("Error: {}", e);
                let mut names: Vec<&str> = SPRITE_TABLE.iter().map(|(n, _)| *n).collect();
                names.push("hero");
                if let Some(suggestion) = format_suggestion(&suggest(name, &names, 3)) {
                    eprintln!("{}", suggestion);
                }
                return ExitCode::from(EXIT_ERROR);
            }
        }
    };

    let (image, warnings) = render_sprite(sample(&drawable, time), &palette);
    for warning in &warnings {
        eprintln!("Warning: {}", warning);
    }

    let output = output.map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from(format!("{}.png", name)));
    if let Err(e) = save_png(&scale_image(image, scale), &output) {
        eprintln!("Error: {}", e);
        return ExitCode::from(EXIT_ERROR);
    }

    println!("Saved {}", output.display());
    ExitCode::from(EXIT_SUCCESS)
}
