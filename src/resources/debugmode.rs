//! Debug overlay switch.
//!
//! While [`DebugMode`] is in the world, the renderer tiles the bloc grid over
//! the level and shows the camera, hovered cell, time, pause and bloc count
//! panel in the top-left corner. The G hotkey inserts or removes it through
//! [`switch_debug_observer`](crate::events::switchdebug::switch_debug_observer).

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct DebugMode {}
