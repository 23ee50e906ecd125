//! World-space position component.
//!
//! `pos` is the entity's pivot in world pixels; the sprite's `origin` is drawn
//! on top of it. For the player the pivot is the middle of the feet.
use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct MapPosition {
    pub pos: Vector2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        MapPosition {
            pos: Vector2 { x, y },
        }
    }
}
