//! ECS resources made available to systems.
//!
//! Long-lived data injected into the ECS world: input snapshots, timing,
//! the content registry, the world grid and the editor.
//!
//! Overview
//! - `camera2d` – world scroll offset shared by rendering, controls and editor
//! - `content` – fixed asset manifest and generated texture keys
//! - `debugmode` – presence enables the debug grid and diagnostics panel
//! - `editor` – hovered cell, brush and edit count of the level editor
//! - `fixedtimestep` – accumulator turning frame time into update steps
//! - `fontstore` / `texturestore` – the content registry
//! - `framecounter` – rolling FPS average for the overlay
//! - `gameconfig` – INI-backed settings
//! - `gamestate` – setup / playing / paused / quitting
//! - `input` – current and previous keyboard and mouse snapshots
//! - `screensize` – window client size in pixels
//! - `tilegrid` – the bloc grid making up the world
//! - `worldtime` – simulation time and delta
pub mod camera2d;
pub mod content;
pub mod debugmode;
pub mod editor;
pub mod fixedtimestep;
pub mod fontstore;
pub mod framecounter;
pub mod gameconfig;
pub mod gamestate;
pub mod input;
pub mod screensize;
pub mod texturestore;
pub mod tilegrid;
pub mod worldtime;
