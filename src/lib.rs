//! Shadewalk library.
//!
//! Core of a 2D top-down stealth game: cone-of-sight detection against a
//! sparse occupancy grid, per-variant enemy AI, swept player collision,
//! and level persistence, all on bevy_ecs. The windowing, asset and audio
//! shells consume this crate through the render queue, the input state
//! and the audio bridge.

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
