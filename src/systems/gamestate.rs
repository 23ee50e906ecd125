use crate::resources::gamestate::{GameState, GameStates};
use bevy_ecs::prelude::*;

/// Run condition: world and editor systems only run while playing.
pub fn state_is_playing(state: Res<GameState>) -> bool {
    matches!(state.get(), GameStates::Playing)
}

