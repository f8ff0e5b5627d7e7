//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod info;
mod play;
mod render;
mod show;

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::config::{load_config, merge_cli_overrides, CliOverrides, RoomConfig};
use crate::motion::HeldDirections;
use crate::room::Room;
use crate::script::parse_keys;
use crate::validate::Warning;

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// pixel-room - Render the pixel-art room headlessly
#[derive(Parser)]
#[command(name = "room")]
#[command(about = "pixel-room - Render a 16-bit style pixel-art room to PNG, GIF or the terminal")]
#[command(version)]
pub struct Cli {
    /// Path to room.toml (default: discovered from the current directory, then XDG config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a single frame of the room to PNG
    Render {
        /// Output PNG path
        #[arg(short, long, default_value = "room.png")]
        output: PathBuf,

        /// Timestamp in milliseconds (drives the hero's blink)
        #[arg(long, default_value = "0", value_parser = parse_time, allow_negative_numbers = true)]
        time: f64,

        /// Hero position as X,Y (clamped to the walkable bounds)
        #[arg(long, value_parser = parse_point, allow_negative_numbers = true)]
        at: Option<(f64, f64)>,

        /// Held direction keys for the frame, e.g. "left+up"
        #[arg(long, value_parser = parse_held)]
        hold: Option<HeldDirections>,

        /// Integer upscale (1-16)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=16))]
        scale: Option<u32>,

        /// Do not draw the HUD
        #[arg(long)]
        no_hud: bool,

        /// Strict mode: treat asset warnings as errors
        #[arg(long)]
        strict: bool,
    },

    /// Play an input script and write the frames as a GIF
    Play {
        /// Script of keys:milliseconds steps, e.g. "right:1000,left+up:250,idle:200"
        script: String,

        /// Output GIF path
        #[arg(short, long, default_value = "room.gif")]
        output: PathBuf,

        /// Also write every frame as a numbered PNG into this directory
        #[arg(long)]
        frames: Option<PathBuf>,

        /// Frames per second (1-240)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=240))]
        fps: Option<u32>,

        /// Integer upscale (1-16)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=16))]
        scale: Option<u32>,

        /// Do not draw the HUD
        #[arg(long)]
        no_hud: bool,
    },

    /// Preview a frame in the terminal using 24-bit color
    Show {
        /// Timestamp in milliseconds
        #[arg(long, default_value = "0", value_parser = parse_time, allow_negative_numbers = true)]
        time: f64,

        /// Hero position as X,Y
        #[arg(long, value_parser = parse_point, allow_negative_numbers = true)]
        at: Option<(f64, f64)>,

        /// Held direction keys for the frame
        #[arg(long, value_parser = parse_held)]
        hold: Option<HeldDirections>,

        /// Do not draw the HUD
        #[arg(long)]
        no_hud: bool,

        /// Print escape codes even when stdout is not a terminal
        #[arg(long)]
        force: bool,
    },

    /// Export one built-in sprite to PNG
    Sprite {
        /// Sprite name (e.g. bed, lamp, linkIdle), or "hero" for the animated hero
        name: String,

        /// Output PNG path (default: {name}.png)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Timestamp used to pick the hero's animation frame
        #[arg(long, default_value = "0", value_parser = parse_time, allow_negative_numbers = true)]
        time: f64,

        /// Integer upscale (1-16)
        #[arg(long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..=16))]
        scale: u32,
    },

    /// List the room palette
    Palette {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check the built-in sprites and tiles against the palette
    Validate {
        /// Exit with an error when any warning is found
        #[arg(long)]
        strict: bool,
    },
}

/// Parse `X,Y` into a point.
fn parse_point(s: &str) -> Result<(f64, f64), String> {
    let (x, y) = s.split_once(',').ok_or_else(|| format!("expected X,Y but got '{}'", s))?;
    let parse = |v: &str| -> Result<f64, String> {
        v.trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .ok_or_else(|| format!("'{}' is not a number", v.trim()))
    };
    Ok((parse(x)?, parse(y)?))
}

/// Parse a finite timestamp in milliseconds.
fn parse_time(s: &str) -> Result<f64, String> {
    s.trim()
        .parse::<f64>()
        .ok()
        .filter(|t| t.is_finite())
        .ok_or_else(|| format!("'{}' is not a finite number of milliseconds", s.trim()))
}

fn parse_held(s: &str) -> Result<HeldDirections, String> {
    parse_keys(s).map_err(|e| e.to_string())
}

/// Load config, apply overrides and build the room, reporting failures on stderr.
pub(crate) fn prepare_room(
    config_path: Option<&Path>,
    overrides: &CliOverrides,
) -> Result<(RoomConfig, Room), ExitCode> {
    let mut config = match load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Err(ExitCode::from(EXIT_ERROR));
        }
    };

    if let Err(e) = merge_cli_overrides(&mut config, overrides) {
        eprintln!("Error: {}", e);
        return Err(ExitCode::from(EXIT_INVALID_ARGS));
    }

    match Room::from_config(&config) {
        Ok(room) => Ok((config, room)),
        Err(e) => {
            eprintln!("Error: {}", e);
            Err(ExitCode::from(EXIT_ERROR))
        }
    }
}

/// Print warnings to stderr; in strict mode any warning is an error.
pub(crate) fn report_warnings(warnings: &[Warning], strict: bool) -> Result<(), ExitCode> {
    for warning in warnings {
        eprintln!("Warning: {}", warning);
    }
    if strict && !warnings.is_empty() {
        eprintln!("Error: {} warning(s) in strict mode", warnings.len());
        return Err(ExitCode::from(EXIT_ERROR));
    }
    Ok(())
}

/// Parse arguments and run the selected command.
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    let config = cli.config.as_deref();

    match cli.command {
        Commands::Render { output, time, at, hold, scale, no_hud, strict } => {
            let overrides = CliOverrides {
                start: at,
                scale,
                hud: no_hud.then_some(false),
                ..Default::default()
            };
            render::run_render(config, &overrides, &output, time, hold.unwrap_or_default(), strict)
        }
        Commands::Play { script, output, frames, fps, scale, no_hud } => {
            let overrides = CliOverrides { scale, fps, hud: no_hud.then_some(false), ..Default::default() };
            play::run_play(config, &overrides, &script, &output, frames.as_deref())
        }
        Commands::Show { time, at, hold, no_hud, force } => {
            let overrides = CliOverrides { start: at, hud: no_hud.then_some(false), ..Default::default() };
            show::run_show(config, &overrides, time, hold.unwrap_or_default(), force)
        }
        Commands::Sprite { name, output, time, scale } => {
            render::run_sprite(config, &name, output.as_deref(), time, scale)
        }
        Commands::Palette { json } => info::run_palette(config, json),
        Commands::Validate { strict } => info::run_validate(config, strict),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::Direction;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_point() {
        assert_eq!(parse_point("40,120"), Ok((40.0, 120.0)));
        assert_eq!(parse_point(" 40.5 , -3 "), Ok((40.5, -3.0)));
        assert!(parse_point("40").is_err());
        assert!(parse_point("a,b").is_err());
    }

    #[test]
    fn test_parse_time() {
        assert_eq!(parse_time("392.7"), Ok(392.7));
        assert_eq!(parse_time("-5"), Ok(-5.0));
        assert!(parse_time("NaN").is_err());
        assert!(parse_time("inf").is_err());
        assert!(parse_time("-infinity").is_err());
        assert!(Cli::try_parse_from(["room", "render", "--time", "NaN"]).is_err());
        assert!(Cli::try_parse_from(["room", "show", "--time", "inf"]).is_err());
        assert!(Cli::try_parse_from(["room", "sprite", "hero", "--time", "nan"]).is_err());
    }

    #[test]
    fn test_parse_held() {
        let held = parse_held("left+up").unwrap();
        assert!(held.contains(Direction::Left) && held.contains(Direction::Up));
        assert!(parse_held("sideways").is_err());
    }

    #[test]
    fn test_render_args() {
        let cli = Cli::try_parse_from(["room", "render", "-o", "out.png", "--at", "40,120", "--hold", "right", "--scale", "2"])
            .unwrap();
        match cli.command {
            Commands::Render { output, at, hold, scale, .. } => {
                assert_eq!(output, PathBuf::from("out.png"));
                assert_eq!(at, Some((40.0, 120.0)));
                assert!(hold.unwrap().contains(Direction::Right));
                assert_eq!(scale, Some(2));
            }
            _ => panic!("expected render"),
        }
    }

    #[test]
    fn test_scale_out_of_range_rejected() {
        assert!(Cli::try_parse_from(["room", "render", "--scale", "17"]).is_err());
        assert!(Cli::try_parse_from(["room", "play", "right:10", "--fps", "0"]).is_err());
    }
}
