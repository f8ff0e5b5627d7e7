//! Headless playback: drive a room through a script and render the frames
//!
//! Simulation is sequential, one fixed-interval tick at a time. Rendering the
//! captured states is independent per frame and runs on the rayon pool.

use image::RgbaImage;
use rayon::prelude::*;

use crate::clock::FrameClock;
use crate::config::MAX_FPS;
use crate::models::Actors;
use crate::room::{render_image, Room, Stage};
use crate::script::{InputScript, MAX_SCRIPT_MS};
use crate::surface::SurfaceError;

/// Most frames one playback produces: the longest script at the highest frame rate.
pub const MAX_FRAMES: usize = (MAX_SCRIPT_MS as usize / 1000) * MAX_FPS as usize + 1;

/// Actor state captured after one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameState {
    pub timestamp: f64,
    pub actors: Actors,
}

/// Tick `room` every `frame_ms` from `start_time` until the script ends.
///
/// Held keys for each tick are looked up at the tick's offset into the script.
/// The first tick has zero elapsed time, matching a fresh [`FrameClock`].
/// A script of zero length still yields the single starting frame. Longer
/// runs stop after [`MAX_FRAMES`] ticks.
pub fn simulate(room: &mut Room, script: &InputScript, frame_ms: f64, start_time: f64) -> Vec<FrameState> {
    let frame_ms = if frame_ms.is_finite() && frame_ms > 0.0 { frame_ms } else { 1000.0 / 60.0 };
    let total = script.duration();
    let count = frame_count(total, frame_ms);

    let mut clock = FrameClock::new();
    let mut states = Vec::with_capacity(count);
    for index in 0..count {
        let offset = index as f64 * frame_ms;
        let timestamp = start_time + offset;
        let elapsed = clock.advance(timestamp);
        // keys applied over the interval that ends at this tick
        let held = script.held_at((offset - elapsed).max(0.0));
        room.update(&held, elapsed);
        states.push(FrameState { timestamp, actors: room.actors.clone() });
    }

    log::debug!("simulated {} frames over {} ms", states.len(), total);
    states
}

/// Frames needed to cover `total_ms`, including the starting frame, capped at [`MAX_FRAMES`].
fn frame_count(total_ms: f64, frame_ms: f64) -> usize {
    let intervals = (total_ms / frame_ms).ceil();
    if !intervals.is_finite() || intervals < 0.0 {
        return if intervals == f64::INFINITY { MAX_FRAMES } else { 1 };
    }
    // float-to-int casts saturate
    (intervals as usize).saturating_add(1).min(MAX_FRAMES)
}

/// Render captured states in parallel, preserving order.
pub fn render_frames(stage: &Stage, states: &[FrameState]) -> Result<Vec<RgbaImage>, SurfaceError> {
    states.par_iter().map(|state| render_image(stage, &state.actors, state.timestamp)).collect()
}
