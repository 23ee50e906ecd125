//! Game systems.
//!
//! Submodules overview
//! - [`content`] – load assets and build procedural textures (needs raylib)
//! - [`controls`] – global hotkeys and camera panning, active while paused
//! - [`editor`] – paint and erase blocs under the mouse
//! - [`gamestate`] – run conditions on [`crate::resources::gamestate::GameState`]
//! - [`input`] – poll raylib and feed [`crate::resources::input::InputState`]
//! - [`render`] – draw world, editor and the FPS overlay
//! - [`time`] – advance [`crate::resources::worldtime::WorldTime`]
//! - [`world`] – keep the player on the terrain surface

pub mod content;
pub mod controls;
pub mod editor;
pub mod gamestate;
pub mod input;
pub mod render;
pub mod time;
pub mod world;
