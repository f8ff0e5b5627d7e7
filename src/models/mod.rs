//! Data models for the room: sprites, animations and placed objects

mod object;
mod sprite;

pub use object::{Actors, Anchor, Bounds, Hero, SceneObject};
pub use sprite::{AnimatedSprite, Drawable, Sprite, SpriteError};
