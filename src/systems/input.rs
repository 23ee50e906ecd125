//! Input systems.
//!
//! [`poll_input`] samples raylib once per rendered frame and the main loop
//! folds it into an [`InputLatch`](crate::resources::input::InputLatch) until
//! an update step is due. The latched snapshot is then fed to every fixed
//! update step through [`apply_input`], which rotates the previous snapshot
//! out so edge detection compares consecutive steps.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::resources::input::{InputState, KeyBindings, KeyboardSnapshot, MouseSnapshot};

/// Read the bound keys and the mouse from raylib.
pub fn poll_input(rl: &RaylibHandle, keys: &KeyBindings) -> (KeyboardSnapshot, MouseSnapshot) {
    let keyboard = KeyboardSnapshot::from_keys(
        keys.tracked_keys()
            .into_iter()
            .filter(|key| rl.is_key_down(*key)),
    );
    let mouse = MouseSnapshot {
        position: rl.get_mouse_position(),
        left: rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT),
        right: rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_RIGHT),
        wheel: rl.get_mouse_wheel_move(),
    };
    (keyboard, mouse)
}

/// Store a fresh snapshot pair for the coming update step.
pub fn apply_input(world: &mut World, keyboard: KeyboardSnapshot, mouse: MouseSnapshot) {
    world.resource_mut::<InputState>().begin_step(keyboard, mouse);
}
