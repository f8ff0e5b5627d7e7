//! pixel-room - Library for rendering a 16-bit style pixel-art room
//!
//! This library provides functionality to:
//! - Build the room palette, sprites and 8x8 tiles from built-in text grids
//! - Composite the background, furniture, hero and HUD into 256x224 frames
//! - Move the hero with held direction keys inside walkable bounds
//! - Write frames as PNG, GIF or 24-bit terminal output

pub mod animation;
pub mod assets;
pub mod cli;
pub mod clock;
pub mod color;
pub mod config;
pub mod error;
pub mod font;
pub mod gif;
pub mod hud;
pub mod models;
pub mod motion;
pub mod output;
pub mod palette;
pub mod playback;
pub mod renderer;
pub mod room;
pub mod scene;
pub mod script;
pub mod suggest;
pub mod surface;
pub mod terminal;
pub mod tiles;
pub mod validate;

pub use error::RoomError;
pub use room::{Room, Stage};
