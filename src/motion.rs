//! Hero motion: held directions and elapsed time in, clamped position out
//!
//! Each update resolves the held keys to a unit direction, advances the hero by
//! `speed * elapsed`, clamps each axis to the bounds and commits the axes one at
//! a time against an [`Obstruction`] check, so a wall on one axis never stops
//! sliding along the other.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use pixel_room::models::{Actors, Bounds, Hero, SceneObject, Sprite};
//! use pixel_room::motion::{Direction, HeldDirections, MotionController};
//!
//! let dot = Arc::new(Sprite::new("dot", ["k"]).into());
//! let hero = Hero::new(SceneObject::new(Arc::clone(&dot), 128.0, 180.0), 0.08, 3.0);
//! let mut actors = Actors::new(hero, SceneObject::new(dot, 0.0, 0.0), 2.0);
//! let motion = MotionController::new(Bounds::new(20.0, 236.0, 90.0, 210.0));
//!
//! let held: HeldDirections = [Direction::Right].into_iter().collect();
//! motion.update(&mut actors, &held, 1000.0);
//! assert_eq!(actors.hero.position(), (208.0, 180.0));
//! assert_eq!((actors.shadow.x, actors.shadow.y), (208.0, 178.0));
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::assets::{HERO_BOB_AMPLITUDE, SHADOW_OFFSET};
use crate::models::{Actors, Bounds};

/// One of the four movement keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub fn name(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A direction name that is not one of `up`, `down`, `left`, `right`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown direction '{0}' (expected up, down, left or right)")]
pub struct UnknownDirection(pub String);

impl FromStr for Direction {
    type Err = UnknownDirection;

    /// Accepts the plain names and the browser key names (`ArrowUp`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let name = lower.strip_prefix("arrow").unwrap_or(lower.as_str());
        match name {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(UnknownDirection(s.to_string())),
        }
    }
}

/// The set of directional keys currently held down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeldDirections {
    up: bool,
    down: bool,
    left: bool,
    right: bool,
}

impl HeldDirections {
    /// Nothing held.
    pub fn none() -> Self {
        Self::default()
    }

    fn slot(&mut self, direction: Direction) -> &mut bool {
        match direction {
            Direction::Up => &mut self.up,
            Direction::Down => &mut self.down,
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        }
    }

    pub fn insert(&mut self, direction: Direction) {
        *self.slot(direction) = true;
    }

    pub fn remove(&mut self, direction: Direction) {
        *self.slot(direction) = false;
    }

    pub fn contains(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.up || self.down || self.left || self.right)
    }

    /// Held directions in `up, down, left, right` order.
    pub fn iter(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL.into_iter().filter(|d| self.contains(*d))
    }
}

impl FromIterator<Direction> for HeldDirections {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut held = Self::default();
        for direction in iter {
            held.insert(direction);
        }
        held
    }
}

impl fmt::Display for HeldDirections {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("idle");
        }
        let names: Vec<&str> = self.iter().map(Direction::name).collect();
        f.write_str(&names.join("+"))
    }
}

/// Unit direction vector for the held keys; opposing keys cancel.
///
/// Diagonals are normalized so they move no faster than a single axis. No keys,
/// or only cancelling keys, give `(0, 0)`.
pub fn direction_vector(held: &HeldDirections) -> (f64, f64) {
    let mut dx = 0.0;
    let mut dy = 0.0;
    if held.contains(Direction::Left) {
        dx -= 1.0;
    }
    if held.contains(Direction::Right) {
        dx += 1.0;
    }
    if held.contains(Direction::Up) {
        dy -= 1.0;
    }
    if held.contains(Direction::Down) {
        dy += 1.0;
    }

    if dx == 0.0 && dy == 0.0 {
        return (0.0, 0.0);
    }
    let length = f64::hypot(dx, dy);
    let length = if length == 0.0 { 1.0 } else { length };
    (dx / length, dy / length)
}

/// Decides whether the hero may occupy a point.
pub trait Obstruction {
    fn is_obstructed(&self, x: f64, y: f64) -> bool;
}

/// Nothing in the room blocks movement.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unobstructed;

impl Obstruction for Unobstructed {
    fn is_obstructed(&self, _x: f64, _y: f64) -> bool {
        false
    }
}

impl<F> Obstruction for F
where
    F: Fn(f64, f64) -> bool,
{
    fn is_obstructed(&self, x: f64, y: f64) -> bool {
        self(x, y)
    }
}

/// Moves the hero inside its bounds.
pub struct MotionController {
    bounds: Bounds,
    rest_bob_amplitude: f64,
    shadow_offset: f64,
    obstruction: Box<dyn Obstruction + Send + Sync>,
}

impl fmt::Debug for MotionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MotionController")
            .field("bounds", &self.bounds)
            .field("rest_bob_amplitude", &self.rest_bob_amplitude)
            .field("shadow_offset", &self.shadow_offset)
            .finish_non_exhaustive()
    }
}

impl MotionController {
    /// Controller with the room's default bob, shadow offset and no obstructions.
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            rest_bob_amplitude: HERO_BOB_AMPLITUDE,
            shadow_offset: SHADOW_OFFSET,
            obstruction: Box::new(Unobstructed),
        }
    }

    /// Bob amplitude restored whenever the hero stands still.
    pub fn with_rest_bob(mut self, amplitude: f64) -> Self {
        self.rest_bob_amplitude = amplitude;
        self
    }

    pub fn with_shadow_offset(mut self, offset: f64) -> Self {
        self.shadow_offset = offset;
        self
    }

    pub fn with_obstruction(mut self, obstruction: impl Obstruction + Send + Sync + 'static) -> Self {
        self.obstruction = Box::new(obstruction);
        self
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn shadow_offset(&self) -> f64 {
        self.shadow_offset
    }

    /// Advance the hero by `elapsed_ms` with `held` keys down.
    ///
    /// Negative or non-finite elapsed time moves nothing. X is committed first,
    /// tested at the current `y`; Y is then tested at the committed `x`. The
    /// shadow follows the hero afterwards whether or not it moved.
    pub fn update(&self, actors: &mut Actors, held: &HeldDirections, elapsed_ms: f64) {
        let (dx, dy) = direction_vector(held);
        let hero = &mut actors.hero;

        if dx != 0.0 || dy != 0.0 {
            hero.moving = true;
            hero.body.bob_amplitude = 0.0;
        } else {
            hero.moving = false;
            hero.body.bob_amplitude = self.rest_bob_amplitude;
        }

        let elapsed = if elapsed_ms.is_finite() { elapsed_ms.max(0.0) } else { 0.0 };
        let distance = hero.speed * elapsed;
        let target_x = self.bounds.clamp_x(hero.body.x + dx * distance);
        let target_y = self.bounds.clamp_y(hero.body.y + dy * distance);

        if !self.obstruction.is_obstructed(target_x, hero.body.y) {
            hero.body.x = target_x;
        }
        if !self.obstruction.is_obstructed(hero.body.x, target_y) {
            hero.body.y = target_y;
        }

        actors.follow(self.shadow_offset);
    }
}
