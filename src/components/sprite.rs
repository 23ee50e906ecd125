use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Sprite is identified by a texture key and its size in world units.
/// The origin selects the pivot point (in pixels) relative to the texture's
/// top-left that is placed on the entity's [`MapPosition`](super::mapposition::MapPosition).
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
    pub width: f32,
    pub height: f32,
    pub origin: Vector2,
}

impl Sprite {
    /// Sprite whose pivot is the bottom-center of the image.
    pub fn anchored_at_feet(tex_key: impl Into<String>, width: f32, height: f32) -> Self {
        Sprite {
            tex_key: tex_key.into(),
            width,
            height,
            origin: Vector2 {
                x: width * 0.5,
                y: height,
            },
        }
    }

    /// World-space top-left corner when the pivot sits at `pos`.
    pub fn top_left(&self, pos: Vector2) -> Vector2 {
        Vector2 {
            x: pos.x - self.origin.x,
            y: pos.y - self.origin.y,
        }
    }
}
