//! ECS resources: world-global state shared by systems.
//!
//! Submodules overview:
//! - [`animationstore`] – animation definitions, incl. directional expansion
//! - [`audio`] – channel bridge toward the external audio mixer
//! - [`camera`] – world/screen transform, shake and clamp bounds
//! - [`debugmode`] – marker enabling debug overlays
//! - [`gameconfig`] – INI-backed tuning values
//! - [`input`] – per-frame logical input state
//! - [`level`] – level JSON load/save and geometry building
//! - [`occupancy`] – sparse solid-tile set for sight and movement queries
//! - [`renderqueue`] – per-frame draw command output
//! - [`screensize`] – internal render resolution
//! - [`tilemap`] – decorative tile layers
//! - [`timers`] – one-shot delayed signals
//! - [`walls`] – static wall rectangles
//! - [`worldsignals`] – global signal maps for cross-system communication
//! - [`worldtime`] – frame-stepped clock

pub mod animationstore;
pub mod audio;
pub mod camera;
pub mod debugmode;
pub mod gameconfig;
pub mod input;
pub mod level;
pub mod occupancy;
pub mod renderqueue;
pub mod screensize;
pub mod tilemap;
pub mod timers;
pub mod walls;
pub mod worldsignals;
pub mod worldtime;
