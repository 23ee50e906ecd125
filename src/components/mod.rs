//! ECS components for entities.
//!
//! Submodules overview:
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`player`] – marker for the player entity
//! - [`sprite`] – 2D sprite rendering component

pub mod mapposition;
pub mod player;
pub mod sprite;
