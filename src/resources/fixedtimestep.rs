//! Fixed-timestep accumulator.
//!
//! Rendering runs once per raylib frame, the simulation in whole steps of
//! `step` seconds. Each frame the wall-clock delta is added to the
//! accumulator and [`FixedTimestep::advance`] reports how many update steps to
//! run. After a long stall only [`MAX_STEPS_PER_FRAME`] are run and the rest of
//! the backlog is dropped, so the game slows down instead of spiralling.

pub const MAX_STEPS_PER_FRAME: u32 = 5;

#[derive(Debug, Clone, Copy)]
pub struct FixedTimestep {
    step: f32,
    accumulator: f32,
}

impl FixedTimestep {
    pub fn new(step: f32) -> Self {
        FixedTimestep {
            step: if step > 0.0 { step } else { 1.0 / 60.0 },
            accumulator: 0.0,
        }
    }

    pub fn from_rate(updates_per_second: u32) -> Self {
        Self::new(1.0 / updates_per_second.max(1) as f32)
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    pub fn accumulator(&self) -> f32 {
        self.accumulator
    }

    /// Feed one frame's wall-clock time and return the number of steps due.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        if frame_dt.is_finite() && frame_dt > 0.0 {
            self.accumulator += frame_dt;
        }
        let due = (self.accumulator / self.step).floor();
        if due >= MAX_STEPS_PER_FRAME as f32 {
            self.accumulator = 0.0;
            return MAX_STEPS_PER_FRAME;
        }
        let due = due as u32;
        self.accumulator -= due as f32 * self.step;
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_step_runs_once() {
        let mut ts = FixedTimestep::new(0.25);
        assert_eq!(ts.advance(0.25), 1);
        assert_eq!(ts.accumulator(), 0.0);
    }

    #[test]
    fn test_short_frames_accumulate() {
        let mut ts = FixedTimestep::new(0.25);
        assert_eq!(ts.advance(0.125), 0);
        assert_eq!(ts.advance(0.125), 1);
        assert_eq!(ts.advance(0.5), 2);
    }

    #[test]
    fn test_remainder_is_kept() {
        let mut ts = FixedTimestep::new(0.25);
        assert_eq!(ts.advance(0.375), 1);
        assert_eq!(ts.accumulator(), 0.125);
    }

    #[test]
    fn test_backlog_is_capped() {
        let mut ts = FixedTimestep::new(0.25);
        assert_eq!(ts.advance(10.0), MAX_STEPS_PER_FRAME);
        assert_eq!(ts.accumulator(), 0.0);
        assert_eq!(ts.advance(0.0), 0);
    }

    #[test]
    fn test_invalid_input_ignored() {
        let mut ts = FixedTimestep::new(-1.0);
        assert!((ts.step() - 1.0 / 60.0).abs() < 1e-9);
        assert_eq!(ts.advance(f32::NAN), 0);
        assert_eq!(ts.advance(-3.0), 0);
        assert_eq!(FixedTimestep::from_rate(0).step(), 1.0);
    }
}
