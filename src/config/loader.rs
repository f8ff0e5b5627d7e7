//! Configuration loading and discovery for `room.toml`
//!
//! Provides functions to find, load, and merge configuration.

use super::schema::RoomConfig;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name looked for during discovery.
pub const CONFIG_FILE: &str = "room.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse room.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CliOverrides {
    /// Override hero start position
    pub start: Option<(f64, f64)>,
    /// Override image scale
    pub scale: Option<u32>,
    /// Override playback frame rate
    pub fps: Option<u32>,
    /// Force the HUD on or off
    pub hud: Option<bool>,
    /// Override the first frame's timestamp
    pub start_time: Option<f64>,
}

/// Find room.toml by walking up from the current working directory.
///
/// Search order:
/// 1. Walk up from current directory looking for room.toml
/// 2. Check XDG_CONFIG_HOME/pixel-room/room.toml (or ~/.config/pixel-room/room.toml)
pub fn find_config() -> Option<PathBuf> {
    if let Ok(cwd) = env::current_dir() {
        if let Some(path) = find_config_from(cwd) {
            return Some(path);
        }
    }

    find_xdg_config()
}

/// Find room.toml in the XDG config directory.
pub fn find_xdg_config() -> Option<PathBuf> {
    let xdg_config = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok()?;

    let config_path = xdg_config.join("pixel-room").join(CONFIG_FILE);
    if config_path.exists() {
        Some(config_path)
    } else {
        None
    }
}

/// Find room.toml by walking up from a specific directory.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration from a room.toml file.
///
/// If a path is provided, loads from that file. Otherwise, uses `find_config()`
/// to locate the config file. If no config file is found, returns the built-in
/// defaults.
///
/// # Example
/// ```ignore
/// let config = load_config(None)?;
/// let config = load_config(Some(Path::new("levels/room.toml")))?;
/// ```
pub fn load_config(path: Option<&Path>) -> Result<RoomConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => {
            log::debug!("loading config from {}", p.display());
            load_config_file(&p)
        }
        None => Ok(RoomConfig::default()),
    }
}

/// Load configuration from a specific file path.
fn load_config_file(path: &Path) -> Result<RoomConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: RoomConfig = toml::from_str(&contents)?;
    check(&config)?;
    Ok(config)
}

fn check(config: &RoomConfig) -> Result<(), ConfigError> {
    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }
    Ok(())
}

/// Merge CLI overrides into a configuration and re-validate it.
///
/// CLI arguments take precedence over config file values. A `--at` start
/// outside the configured bounds is clamped into them rather than rejected.
pub fn merge_cli_overrides(config: &mut RoomConfig, overrides: &CliOverrides) -> Result<(), ConfigError> {
    if let Some((x, y)) = overrides.start {
        config.hero.start = [config.bounds.clamp_x(x), config.bounds.clamp_y(y)];
    }

    if let Some(scale) = overrides.scale {
        config.render.scale = scale;
    }

    if let Some(fps) = overrides.fps {
        config.render.fps = fps;
    }

    if let Some(hud) = overrides.hud {
        config.render.hud = hud;
    }

    if let Some(start_time) = overrides.start_time {
        config.render.start_time = start_time;
    }

    check(config)
}
