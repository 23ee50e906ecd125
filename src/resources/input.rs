//! Per-frame keyboard and mouse snapshots.
//!
//! The shell keeps two snapshots of each device: the one polled this update
//! step and the one from the step before. Toggle hotkeys compare the two so
//! they fire only on the up→down transition, never while a key is held.
//!
//! Only keys named in [`KeyBindings`] are polled; everything else reads as up.
use bevy_ecs::prelude::*;
use raylib::prelude::{KeyboardKey, Vector2};
use smallvec::SmallVec;

/// Keys that were down when the keyboard was polled.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeyboardSnapshot {
    down: SmallVec<[KeyboardKey; 8]>,
}

impl KeyboardSnapshot {
    /// Build a snapshot from the keys currently held.
    pub fn from_keys(keys: impl IntoIterator<Item = KeyboardKey>) -> Self {
        let mut snap = Self::default();
        for key in keys {
            snap.press(key);
        }
        snap
    }

    pub fn press(&mut self, key: KeyboardKey) {
        if !self.down.contains(&key) {
            self.down.push(key);
        }
    }

    pub fn is_key_down(&self, key: KeyboardKey) -> bool {
        self.down.contains(&key)
    }

    pub fn is_key_up(&self, key: KeyboardKey) -> bool {
        !self.is_key_down(key)
    }

    /// Add every key held in `other`.
    pub fn merge(&mut self, other: &KeyboardSnapshot) {
        for key in other.down.iter() {
            self.press(*key);
        }
    }
}

/// Mouse position in window pixels plus button and wheel state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseSnapshot {
    pub position: Vector2,
    pub left: bool,
    pub right: bool,
    /// Wheel movement since the previous poll.
    pub wheel: f32,
}

impl Default for MouseSnapshot {
    fn default() -> Self {
        Self {
            position: Vector2 { x: 0.0, y: 0.0 },
            left: false,
            right: false,
            wheel: 0.0,
        }
    }
}

impl MouseSnapshot {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            position: Vector2 { x, y },
            ..Self::default()
        }
    }
}

/// Input gathered over the frames since the last update step.
///
/// raylib is polled every rendered frame, but a frame may run zero update
/// steps. Keys and buttons seen down in any of those frames stay down, wheel
/// movement adds up and the mouse position is the latest one, so nothing
/// polled between steps is lost.
#[derive(Debug, Clone, Default)]
pub struct InputLatch {
    keyboard: KeyboardSnapshot,
    mouse: MouseSnapshot,
    pending: bool,
}

impl InputLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one frame's poll into the latch.
    pub fn record(&mut self, keyboard: KeyboardSnapshot, mouse: MouseSnapshot) {
        if !self.pending {
            self.keyboard = keyboard;
            self.mouse = mouse;
            self.pending = true;
            return;
        }
        self.keyboard.merge(&keyboard);
        self.mouse = MouseSnapshot {
            position: mouse.position,
            left: self.mouse.left || mouse.left,
            right: self.mouse.right || mouse.right,
            wheel: self.mouse.wheel + mouse.wheel,
        };
    }

    /// Hand the gathered input to the next update step and start over.
    pub fn take(&mut self) -> (KeyboardSnapshot, MouseSnapshot) {
        self.pending = false;
        let keyboard = std::mem::take(&mut self.keyboard);
        let mouse = MouseSnapshot {
            position: self.mouse.position,
            ..MouseSnapshot::default()
        };
        (keyboard, std::mem::replace(&mut self.mouse, mouse))
    }
}

/// Resource holding this step's and the previous step's input snapshots.
#[derive(Resource, Debug, Clone, Default)]
pub struct InputState {
    pub keyboard: KeyboardSnapshot,
    pub old_keyboard: KeyboardSnapshot,
    pub mouse: MouseSnapshot,
    pub old_mouse: MouseSnapshot,
}

impl InputState {
    /// Rotate the current snapshots into the "old" slots and store new ones.
    pub fn begin_step(&mut self, keyboard: KeyboardSnapshot, mouse: MouseSnapshot) {
        self.old_keyboard = std::mem::replace(&mut self.keyboard, keyboard);
        self.old_mouse = std::mem::replace(&mut self.mouse, mouse);
    }

    pub fn is_key_down(&self, key: KeyboardKey) -> bool {
        self.keyboard.is_key_down(key)
    }

    /// Down this step and up the previous one.
    pub fn just_pressed(&self, key: KeyboardKey) -> bool {
        self.keyboard.is_key_down(key) && self.old_keyboard.is_key_up(key)
    }

    /// Up this step and down the previous one.
    pub fn just_released(&self, key: KeyboardKey) -> bool {
        self.keyboard.is_key_up(key) && self.old_keyboard.is_key_down(key)
    }
}

/// Keyboard bindings for the shell and the editor.
#[derive(Resource, Debug, Clone, Copy)]
pub struct KeyBindings {
    pub quit: KeyboardKey,
    pub toggle_debug: KeyboardKey,
    pub toggle_pause: KeyboardKey,
    pub pan_up: KeyboardKey,
    pub pan_down: KeyboardKey,
    pub pan_left: KeyboardKey,
    pub pan_right: KeyboardKey,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            quit: KeyboardKey::KEY_ESCAPE,
            toggle_debug: KeyboardKey::KEY_G,
            toggle_pause: KeyboardKey::KEY_P,
            pan_up: KeyboardKey::KEY_UP,
            pan_down: KeyboardKey::KEY_DOWN,
            pan_left: KeyboardKey::KEY_LEFT,
            pan_right: KeyboardKey::KEY_RIGHT,
        }
    }
}

impl KeyBindings {
    /// Every key the input poller has to sample.
    pub fn tracked_keys(&self) -> [KeyboardKey; 7] {
        [
            self.quit,
            self.toggle_debug,
            self.toggle_pause,
            self.pan_up,
            self.pan_down,
            self.pan_left,
            self.pan_right,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_default_all_up() {
        let snap = KeyboardSnapshot::default();
        assert!(snap.is_key_up(KeyboardKey::KEY_G));
        assert!(snap.is_key_up(KeyboardKey::KEY_ESCAPE));
    }

    #[test]
    fn test_snapshot_press_is_idempotent() {
        let mut snap = KeyboardSnapshot::default();
        snap.press(KeyboardKey::KEY_P);
        snap.press(KeyboardKey::KEY_P);
        assert!(snap.is_key_down(KeyboardKey::KEY_P));
        assert_eq!(snap, KeyboardSnapshot::from_keys([KeyboardKey::KEY_P]));
    }

    #[test]
    fn test_just_pressed_only_on_transition() {
        let mut input = InputState::default();
        let held = KeyboardSnapshot::from_keys([KeyboardKey::KEY_G]);

        input.begin_step(held.clone(), MouseSnapshot::default());
        assert!(input.just_pressed(KeyboardKey::KEY_G));

        input.begin_step(held, MouseSnapshot::default());
        assert!(input.is_key_down(KeyboardKey::KEY_G));
        assert!(!input.just_pressed(KeyboardKey::KEY_G));

        input.begin_step(KeyboardSnapshot::default(), MouseSnapshot::default());
        assert!(input.just_released(KeyboardKey::KEY_G));
        assert!(!input.just_pressed(KeyboardKey::KEY_G));
    }

    #[test]
    fn test_begin_step_rotates_mouse() {
        let mut input = InputState::default();
        input.begin_step(KeyboardSnapshot::default(), MouseSnapshot::at(3.0, 4.0));
        input.begin_step(KeyboardSnapshot::default(), MouseSnapshot::at(5.0, 6.0));
        assert_eq!(input.old_mouse.position.x, 3.0);
        assert_eq!(input.mouse.position.y, 6.0);
    }

    #[test]
    fn test_latch_keeps_keys_between_steps() {
        let mut latch = InputLatch::new();
        latch.record(
            KeyboardSnapshot::from_keys([KeyboardKey::KEY_G]),
            MouseSnapshot::default(),
        );
        latch.record(
            KeyboardSnapshot::from_keys([KeyboardKey::KEY_LEFT]),
            MouseSnapshot::default(),
        );
        let (keyboard, _) = latch.take();
        assert!(keyboard.is_key_down(KeyboardKey::KEY_G));
        assert!(keyboard.is_key_down(KeyboardKey::KEY_LEFT));

        latch.record(KeyboardSnapshot::default(), MouseSnapshot::default());
        let (keyboard, _) = latch.take();
        assert_eq!(keyboard, KeyboardSnapshot::default());
    }

    #[test]
    fn test_latch_sums_wheel_and_keeps_latest_position() {
        let mut latch = InputLatch::new();
        latch.record(
            KeyboardSnapshot::default(),
            MouseSnapshot {
                wheel: 1.0,
                left: true,
                ..MouseSnapshot::at(1.0, 2.0)
            },
        );
        latch.record(
            KeyboardSnapshot::default(),
            MouseSnapshot {
                wheel: -0.5,
                ..MouseSnapshot::at(7.0, 8.0)
            },
        );
        let (_, mouse) = latch.take();
        assert_eq!(mouse.wheel, 0.5);
        assert!(mouse.left);
        assert!(!mouse.right);
        assert_eq!(mouse.position.x, 7.0);
        assert_eq!(mouse.position.y, 8.0);

        let (_, mouse) = latch.take();
        assert_eq!(mouse.wheel, 0.0);
        assert!(!mouse.left);
        assert_eq!(mouse.position.x, 7.0);
    }

    #[test]
    fn test_default_key_bindings() {
        let keys = KeyBindings::default();
        assert_eq!(keys.quit, KeyboardKey::KEY_ESCAPE);
        assert_eq!(keys.toggle_debug, KeyboardKey::KEY_G);
        assert_eq!(keys.toggle_pause, KeyboardKey::KEY_P);
        assert_eq!(keys.pan_up, KeyboardKey::KEY_UP);
        assert_eq!(keys.pan_down, KeyboardKey::KEY_DOWN);
        assert_eq!(keys.pan_left, KeyboardKey::KEY_LEFT);
        assert_eq!(keys.pan_right, KeyboardKey::KEY_RIGHT);
        assert_eq!(keys.tracked_keys().len(), 7);
    }
}
