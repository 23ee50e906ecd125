//! Simulation clock.
//!
//! `delta` is the length of the current update step and is refreshed every
//! step, paused or not, because camera panning still needs it. `elapsed`
//! only advances while the game is playing.
use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    /// Seconds of unpaused simulation since entering play.
    pub elapsed: f32,
    /// Seconds covered by the current update step, scaled.
    pub delta: f32,
    pub time_scale: f32,
    /// Number of update steps run so far, paused ones included.
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            frame_count: 0,
        }
    }
}

impl WorldTime {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }
}
