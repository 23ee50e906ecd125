//! Window client size.
//!
//! Fixed at startup from the `[window]` config section; the platformer window
//! is not resizable. Bloc culling, the debug grid cell count, backdrop tiling
//! and the right-aligned FPS label all read it.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenSize {
    pub w: i32,
    pub h: i32,
}

impl ScreenSize {
    /// Size of a `width`×`height` window, saturated into raylib's `i32`.
    pub fn from_window(width: u32, height: u32) -> Self {
        ScreenSize {
            w: i32::try_from(width).unwrap_or(i32::MAX),
            h: i32::try_from(height).unwrap_or(i32::MAX),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_window() {
        assert_eq!(ScreenSize::from_window(1200, 800), ScreenSize { w: 1200, h: 800 });
        assert_eq!(ScreenSize::from_window(u32::MAX, 1).w, i32::MAX);
    }
}
