//! pixel-room - Command-line tool for rendering the pixel-art room headlessly

use std::process::ExitCode;

use env_logger::Env;
use pixel_room::cli;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    cli::run()
}
