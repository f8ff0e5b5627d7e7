//! Play command implementation (scripted animation to GIF)

use std::path::Path;
use std::process::ExitCode;

use crate::config::CliOverrides;
use crate::gif::render_gif;
use crate::output::{save_frames, scale_image};
use crate::playback::{render_frames, simulate};
use crate::script::InputScript;

use super::{prepare_room, EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// Execute the play command
pub fn run_play(
    config_path: Option<&Path>,
    overrides: &CliOverrides,
    script: &str,
    output: &Path,
    frames_dir: Option<&Path>,
) -> ExitCode {
    let script: InputScript = match script.parse() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: Invalid script: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    let (config, mut room) = match prepare_room(config_path, overrides) {
        Ok(prepared) => prepared,
        Err(code) => return code,
    };

    let frame_ms = config.render.frame_ms();
    let states = simulate(&mut room, &script, frame_ms, config.render.start_time);
    let frames = match render_frames(&room.stage, &states) {
        Ok(frames) => frames,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };
    let frames: Vec<_> = frames.into_iter().map(|f| scale_image(f, config.render.scale)).collect();

    if let Some(dir) = frames_dir {
        match save_frames(&frames, dir) {
            Ok(paths) => println!("Saved {} frames to {}", paths.len(), dir.display()),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::from(EXIT_ERROR);
            }
        }
    }

    if let Err(e) = render_gif(&frames, frame_ms, true, output) {
        eprintln!("Error: {}", e);
        return ExitCode::from(EXIT_ERROR);
    }

    let (x, y) = room.actors.hero.position();
    println!("Saved {} ({} frames, hero ends at {:.1},{:.1})", output.display(), frames.len(), x, y);
    ExitCode::from(EXIT_SUCCESS)
}
