//! ECS systems: per-frame behavior.
//!
//! Submodules overview:
//! - [`animation`] – animation playback and sprite frame updates
//! - [`audio`] – audio command forwarding toward the mixer bridge
//! - [`culling`] – active-entity window and camera follow
//! - [`movement`] – kinematic integration for non-player bodies
//! - [`patrol`] – patrol guard AI
//! - [`playercontroller`] – player movement, wall collision, animation
//! - [`render`] – render queue construction
//! - [`reset`] – scene reset after a capture
//! - [`securitycamera`] – sweeping camera AI
//! - [`spotlight`] – spotlight AI
//! - [`time`] – world clock update
//! - [`timers`] – delayed-signal timers
//! - [`trigger`] – edge-triggered buttons, checkpoints, boundaries
//! - [`zombie`] – leash-bound chaser AI

pub mod animation;
pub mod audio;
pub mod culling;
pub mod movement;
pub mod patrol;
pub mod playercontroller;
pub mod render;
pub mod reset;
pub mod securitycamera;
pub mod spotlight;
pub mod time;
pub mod timers;
pub mod trigger;
pub mod zombie;
