//! Top-level error type

use thiserror::Error;

use crate::assets::AssetError;
use crate::config::ConfigError;
use crate::output::OutputError;
use crate::palette::PaletteError;
use crate::script::ScriptError;
use crate::surface::SurfaceError;

/// Anything that can stop the room from being built, driven or written out.
#[derive(Debug, Error)]
pub enum RoomError {
    #[error(transparent)]
    Asset(#[from] AssetError),
    #[error(transparent)]
    Palette(#[from] PaletteError),
    #[error(transparent)]
    Surface(#[from] SurfaceError),
    #[error(transparent)]
    Script(#[from] ScriptError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Output(#[from] OutputError),
}
