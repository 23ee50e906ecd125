//! Time update system.
//!
//! Updates the shared [`WorldTime`](crate::resources::worldtime::WorldTime)
//! resource once per update step, applying `time_scale` to the provided delta.
use bevy_ecs::prelude::*;

use crate::resources::gamestate::{GameState, GameStates};
use crate::resources::worldtime::WorldTime;

/// Update delta, elapsed time and the step counter on `WorldTime`.
///
/// `dt` is the unscaled step length in seconds. `delta` is always refreshed
/// so camera panning keeps working while paused; `elapsed` only advances
/// while the game is playing.
pub fn update_world_time(world: &mut World, dt: f32) {
    let playing = world
        .get_resource::<GameState>()
        .is_none_or(|state| *state.get() == GameStates::Playing);
    let mut wt = world.resource_mut::<WorldTime>();
    let scaled_dt = dt * wt.time_scale;
    wt.delta = scaled_dt;
    wt.frame_count += 1;
    if playing {
        wt.elapsed += scaled_dt;
    }
}
