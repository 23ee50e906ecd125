//! Rolling frames-per-second average for the FPS overlay.
use bevy_ecs::prelude::Resource;
use std::collections::VecDeque;

/// How many recent frames the average covers.
pub const MAXIMUM_SAMPLES: usize = 100;
/// Largest value the overlay label shows. Rect textures for the label
/// background are pre-generated up to this value.
pub const MAX_DISPLAYED_FPS: u32 = 999;

#[derive(Resource, Debug, Clone, Default)]
pub struct FrameCounter {
    samples: VecDeque<f32>,
    pub total_frames: u64,
    pub total_seconds: f64,
}

impl FrameCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one rendered frame that took `dt` seconds.
    ///
    /// Non-positive deltas carry no rate information and are ignored.
    pub fn update(&mut self, dt: f32) {
        if dt <= 0.0 || !dt.is_finite() {
            return;
        }
        if self.samples.len() == MAXIMUM_SAMPLES {
            self.samples.pop_front();
        }
        self.samples.push_back(1.0 / dt);
        self.total_frames += 1;
        self.total_seconds += dt as f64;
    }

    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    pub fn average_fps(&self) -> f32 {
        if self.samples.is_empty() {
            return 0.0;
        }
        self.samples.iter().sum::<f32>() / self.samples.len() as f32
    }

    /// Rounded average clamped to the displayable range.
    pub fn displayed_fps(&self) -> u32 {
        (self.average_fps().round() as u32).min(MAX_DISPLAYED_FPS)
    }

    pub fn label(&self) -> String {
        fps_label(self.displayed_fps())
    }
}

/// Overlay text for a given frame rate.
pub fn fps_label(fps: u32) -> String {
    format!("FPS:{}", fps)
}
