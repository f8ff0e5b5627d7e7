//! Show command implementation (terminal display)

use std::path::Path;
use std::process::ExitCode;

use crate::assets::{ROOM_HEIGHT, ROOM_WIDTH};
use crate::config::CliOverrides;
use crate::motion::HeldDirections;
use crate::surface::Canvas;
use crate::terminal::render_image_ansi;

use super::{prepare_room, EXIT_ERROR, EXIT_SUCCESS};

/// Execute the show command - print one frame with colored terminal output
pub fn run_show(
    config_path: Option<&Path>,
    overrides: &CliOverrides,
    time: f64,
    held: HeldDirections,
    force: bool,
) -> ExitCode {
    if !force && !atty::is(atty::Stream::Stdout) {
        eprintln!("Notice: stdout is not a terminal; use `room render` for a PNG or pass --force");
        return ExitCode::from(EXIT_SUCCESS);
    }

    let (_, mut room) = match prepare_room(config_path, overrides) {
        Ok(prepared) => prepared,
        Err(code) => return code,
    };

    let mut canvas = match Canvas::new(ROOM_WIDTH, ROOM_HEIGHT) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };
    room.tick(&mut canvas, &held, 0.0, time);

    print!("{}", render_image_ansi(canvas.image()));
    ExitCode::from(EXIT_SUCCESS)
}
