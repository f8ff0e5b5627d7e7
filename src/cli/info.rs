//! Informational commands: palette listing and asset validation

use std::path::Path;
use std::process::ExitCode;

use image::Rgba;
use serde::Serialize;

use crate::assets::RoomAssets;
use crate::config::load_config;
use crate::palette::{PaletteEntry, PaletteTable};
use crate::tiles::Tile;
use crate::validate::validate_assets;

use super::{EXIT_ERROR, EXIT_SUCCESS};

/// One palette row as printed by `room palette --json`.
#[derive(Debug, Serialize)]
struct PaletteRow {
    key: String,
    color: String,
}

fn hex(color: Rgba<u8>) -> String {
    if color[3] == 255 {
        format!("#{:02x}{:02x}{:02x}", color[0], color[1], color[2])
    } else {
        format!("#{:02x}{:02x}{:02x}{:02x}", color[0], color[1], color[2], color[3])
    }
}

fn palette_rows(palette: &PaletteTable) -> Vec<PaletteRow> {
    palette
        .iter()
        .map(|(key, entry)| PaletteRow {
            key: key.to_string(),
            color: match entry {
                PaletteEntry::Color(c) => hex(c),
                PaletteEntry::Transparent => "transparent".to_string(),
            },
        })
        .collect()
}

/// Load the built-in assets with any palette overrides from room.toml applied.
fn load_assets(config_path: Option<&Path>) -> Result<RoomAssets, ExitCode> {
    let config = load_config(config_path).map_err(|e| {
        eprintln!("Error: {}", e);
        ExitCode::from(EXIT_ERROR)
    })?;
    let mut assets = RoomAssets::load().map_err(|e| {
        eprintln!("Error: {}", e);
        ExitCode::from(EXIT_ERROR)
    })?;
    assets.palette = assets
        .palette
        .with_overrides(config.palette.iter().map(|(k, v)| (k.as_str(), v.as_str())))
        .map_err(|e| {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        })?;
    Ok(assets)
}

/// Execute the palette command
pub fn run_palette(config_path: Option<&Path>, json: bool) -> ExitCode {
    let assets = match load_assets(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };
    let rows = palette_rows(&assets.palette);

    if json {
        match serde_json::to_string_pretty(&rows) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::from(EXIT_ERROR);
            }
        }
    } else {
        println!("Room palette ({} keys):", rows.len());
        println!();
        for row in &rows {
            println!("  {} => {}", row.key, row.color);
        }
    }
    ExitCode::from(EXIT_SUCCESS)
}

/// Execute the validate command
pub fn run_validate(config_path: Option<&Path>, strict: bool) -> ExitCode {
    let assets = match load_assets(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    println!("Validating {} sprites and {} tiles...", assets.sprites.len(), Tile::ALL.len());
    let warnings = validate_assets(&assets.palette, &assets.sprites, &Tile::ALL);

    println!();
    if warnings.is_empty() {
        println!("No issues found.");
        return ExitCode::from(EXIT_SUCCESS);
    }

    for warning in &warnings {
        eprintln!("WARNING - {}", warning);
    }
    println!();
    let count = warnings.len();
    println!("Found {} warning{}.", count, if count == 1 { "" } else { "s" });

    if strict {
        ExitCode::from(EXIT_ERROR)
    } else {
        println!("Hint: Run with --strict to treat warnings as errors.");
        ExitCode::from(EXIT_SUCCESS)
    }
}
