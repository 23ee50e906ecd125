//! Debug grid hotkey event and observer.
//!
//! The controls system fires [`SwitchDebugEvent`] on a fresh press of the
//! debug key. The renderer draws the grid overlay and the diagnostics panel
//! only while the [`DebugMode`] resource exists.
use crate::resources::debugmode::DebugMode;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

#[derive(Event, Debug, Clone, Copy)]
pub struct SwitchDebugEvent {}

/// Insert [`DebugMode`] when absent, remove it when present.
pub fn switch_debug_observer(
    _trigger: On<SwitchDebugEvent>,
    mut commands: Commands,
    debug_mode: Option<Res<DebugMode>>,
) {
    match debug_mode {
        Some(_) => {
            commands.remove_resource::<DebugMode>();
            info!("Debug grid off");
        }
        None => {
            commands.insert_resource(DebugMode {});
            info!("Debug grid on");
        }
    }
}
