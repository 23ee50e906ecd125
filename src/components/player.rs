//! Player marker component.
//!
//! Tags the entity the world keeps standing on the terrain surface.
use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Player;
