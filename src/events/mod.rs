//! Event types and observers.
//!
//! Hotkeys raise events instead of flipping flags directly so the toggle
//! logic lives in one observer per concern.
//!
//! Submodules:
//! - [`switchdebug`] – toggle the debug grid and diagnostics panel
//! - [`switchpause`] – pause and resume world and editor updates
pub mod switchdebug;
pub mod switchpause;
