//! High-level game state resource.
//!
//! Tracks whether the shell is still loading, running, paused or about to
//! quit. The pause hotkey flips between [`GameStates::Playing`] and
//! [`GameStates::Paused`]; world and editor systems only run while playing.

use bevy_ecs::prelude::Resource;

/// Discrete high-level states the game can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStates {
    #[default]
    Setup,
    Playing,
    Paused,
    Quitting,
}

/// Authoritative current game state.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GameState {
    current: GameStates,
}

impl GameState {
    /// Start in [`GameStates::Setup`].
    pub fn new() -> Self {
        GameState {
            current: GameStates::Setup,
        }
    }
    /// Read-only access to the current state.
    pub fn get(&self) -> &GameStates {
        &self.current
    }
    /// Update the current state immediately.
    pub fn set(&mut self, state: GameStates) {
        self.current = state;
    }

    pub fn is_paused(&self) -> bool {
        self.current == GameStates::Paused
    }

    /// Flip between playing and paused.
    ///
    /// Other states are left untouched and `false` is returned.
    pub fn toggle_pause(&mut self) -> bool {
        match self.current {
            GameStates::Playing => self.current = GameStates::Paused,
            GameStates::Paused => self.current = GameStates::Playing,
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_in_setup() {
        assert_eq!(*GameState::new().get(), GameStates::Setup);
        assert_eq!(*GameState::default().get(), GameStates::Setup);
    }

    #[test]
    fn test_toggle_pause_round_trip() {
        let mut state = GameState::new();
        state.set(GameStates::Playing);
        assert!(state.toggle_pause());
        assert!(state.is_paused());
        assert!(state.toggle_pause());
        assert_eq!(*state.get(), GameStates::Playing);
    }

    #[test]
    fn test_toggle_pause_ignored_outside_play() {
        let mut state = GameState::new();
        state.set(GameStates::Quitting);
        assert!(!state.toggle_pause());
        assert_eq!(*state.get(), GameStates::Quitting);

        let mut state = GameState::new();
        assert_eq!(*state.get(), GameStates::Setup);
        assert!(!state.toggle_pause());
        assert_eq!(*state.get(), GameStates::Setup);
    }
}
