//! Shared 2D camera resource.
//!
//! Wraps raylib's [`raylib::prelude::Camera2D`]. The target stays at the world
//! origin and the camera is moved by translating its `offset`, so
//! `offset.x`/`offset.y` are the world scroll in screen pixels. Arrow keys pan
//! it, the renderer draws blocs through it and the editor maps the mouse back
//! into world space with it.

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Camera2D, Vector2};

/// ECS resource that holds the active 2D camera parameters.
#[derive(Resource, Clone, Copy)]
pub struct Camera2DRes(pub Camera2D);

impl Default for Camera2DRes {
    fn default() -> Self {
        Camera2DRes(Camera2D {
            target: Vector2 { x: 0.0, y: 0.0 },
            offset: Vector2 { x: 0.0, y: 0.0 },
            rotation: 0.0,
            zoom: 1.0,
        })
    }
}

impl Camera2DRes {
    /// Camera scrolled so that world point `(x, y)` lands on the screen origin.
    pub fn at_offset(x: f32, y: f32) -> Self {
        let mut cam = Self::default();
        cam.0.offset = Vector2 { x, y };
        cam
    }

    pub fn offset(&self) -> Vector2 {
        self.0.offset
    }

    /// Translate the camera offset. No bounds are enforced.
    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.0.offset.x += dx;
        self.0.offset.y += dy;
    }

    /// Map a screen-space point to world space. Rotation is not supported.
    pub fn screen_to_world(&self, screen: Vector2) -> Vector2 {
        let cam = &self.0;
        let zoom = if cam.zoom == 0.0 { 1.0 } else { cam.zoom };
        Vector2 {
            x: (screen.x - cam.offset.x) / zoom + cam.target.x,
            y: (screen.y - cam.offset.y) / zoom + cam.target.y,
        }
    }

    /// Map a world-space point to screen space. Rotation is not supported.
    pub fn world_to_screen(&self, world: Vector2) -> Vector2 {
        let cam = &self.0;
        Vector2 {
            x: (world.x - cam.target.x) * cam.zoom + cam.offset.x,
            y: (world.y - cam.target.y) * cam.zoom + cam.offset.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_camera_is_identity() {
        let cam = Camera2DRes::default();
        let p = Vector2 { x: 12.0, y: -4.0 };
        let w = cam.screen_to_world(p);
        assert_eq!(w.x, 12.0);
        assert_eq!(w.y, -4.0);
    }

    #[test]
    fn test_pan_accumulates() {
        let mut cam = Camera2DRes::default();
        cam.pan(10.0, -5.0);
        cam.pan(2.5, 1.0);
        assert_eq!(cam.offset().x, 12.5);
        assert_eq!(cam.offset().y, -4.0);
    }

    #[test]
    fn test_screen_world_round_trip_with_offset() {
        let cam = Camera2DRes::at_offset(-100.0, 40.0);
        let screen = Vector2 { x: 50.0, y: 60.0 };
        let world = cam.screen_to_world(screen);
        assert_eq!(world.x, 150.0);
        assert_eq!(world.y, 20.0);
        let back = cam.world_to_screen(world);
        assert_eq!(back.x, screen.x);
        assert_eq!(back.y, screen.y);
    }
}
