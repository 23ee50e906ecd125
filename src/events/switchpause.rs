//! Pause toggle event and observer.
//!
//! The controls system fires [`SwitchPauseEvent`] on a fresh press of the
//! pause key; [`switch_pause_observer`] flips [`GameState`] between playing
//! and paused. Any other state (setup, quitting) ignores the request.
use crate::resources::gamestate::GameState;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info};

#[derive(Event, Debug, Clone, Copy)]
pub struct SwitchPauseEvent {}

pub fn switch_pause_observer(_trigger: On<SwitchPauseEvent>, mut state: ResMut<GameState>) {
    if state.toggle_pause() {
        if state.is_paused() {
            info!("Game paused");
        } else {
            info!("Game resumed");
        }
    } else {
        debug!("Pause ignored in state {:?}", state.get());
    }
}
