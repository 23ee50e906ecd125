//! Global hotkeys and camera panning.
//!
//! Runs every update step whether or not the game is paused:
//! - quit key held: switch to [`GameStates::Quitting`]
//! - debug key pressed: [`SwitchDebugEvent`]
//! - pause key pressed: [`SwitchPauseEvent`]
//! - arrow keys held: pan the camera at `pan_speed` pixels per second
//!
//! "Pressed" means down this step and up the previous one.
use bevy_ecs::prelude::*;
use log::info;

use crate::events::switchdebug::SwitchDebugEvent;
use crate::events::switchpause::SwitchPauseEvent;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameState, GameStates};
use crate::resources::input::{InputState, KeyBindings};
use crate::resources::worldtime::WorldTime;

pub fn controls(
    input: Res<InputState>,
    keys: Res<KeyBindings>,
    config: Res<GameConfig>,
    time: Res<WorldTime>,
    mut state: ResMut<GameState>,
    mut camera: ResMut<Camera2DRes>,
    mut commands: Commands,
) {
    if input.is_key_down(keys.quit) && *state.get() != GameStates::Quitting {
        info!("Quit requested");
        state.set(GameStates::Quitting);
    }

    if input.just_pressed(keys.toggle_debug) {
        commands.trigger(SwitchDebugEvent {});
    }

    if input.just_pressed(keys.toggle_pause) {
        commands.trigger(SwitchPauseEvent {});
    }

    let (dx, dy) = pan_delta(&input, &keys, config.pan_speed * time.delta);
    if dx != 0.0 || dy != 0.0 {
        camera.pan(dx, dy);
    }
}

/// Camera offset change for the held arrow keys.
///
/// Up/left move the offset positive so the world scrolls down/right on
/// screen, revealing what lies above/left.
pub fn pan_delta(input: &InputState, keys: &KeyBindings, step: f32) -> (f32, f32) {
    let mut dx = 0.0;
    let mut dy = 0.0;
    if input.is_key_down(keys.pan_up) {
        dy += step;
    }
    if input.is_key_down(keys.pan_down) {
        dy -= step;
    }
    if input.is_key_down(keys.pan_left) {
        dx += step;
    }
    if input.is_key_down(keys.pan_right) {
        dx -= step;
    }
    (dx, dy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::input::{KeyboardSnapshot, MouseSnapshot};
    use raylib::prelude::KeyboardKey;

    fn holding(keys: &[KeyboardKey]) -> InputState {
        let mut input = InputState::default();
        input.begin_step(
            KeyboardSnapshot::from_keys(keys.iter().copied()),
            MouseSnapshot::default(),
        );
        input
    }

    #[test]
    fn test_no_keys_no_pan() {
        let keys = KeyBindings::default();
        assert_eq!(pan_delta(&holding(&[]), &keys, 3.0), (0.0, 0.0));
    }

    #[test]
    fn test_each_direction() {
        let keys = KeyBindings::default();
        assert_eq!(pan_delta(&holding(&[KeyboardKey::KEY_UP]), &keys, 2.0), (0.0, 2.0));
        assert_eq!(pan_delta(&holding(&[KeyboardKey::KEY_DOWN]), &keys, 2.0), (0.0, -2.0));
        assert_eq!(pan_delta(&holding(&[KeyboardKey::KEY_LEFT]), &keys, 2.0), (2.0, 0.0));
        assert_eq!(pan_delta(&holding(&[KeyboardKey::KEY_RIGHT]), &keys, 2.0), (-2.0, 0.0));
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let keys = KeyBindings::default();
        let input = holding(&[
            KeyboardKey::KEY_UP,
            KeyboardKey::KEY_DOWN,
            KeyboardKey::KEY_LEFT,
        ]);
        assert_eq!(pan_delta(&input, &keys, 5.0), (5.0, 0.0));
    }
}
