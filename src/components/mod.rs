//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the game world.
//!
//! Submodules overview:
//! - [`active`] – marker for entities inside the camera activity window
//! - [`animation`] – playback state plus compass-direction helpers
//! - [`boxcollider`] – axis-aligned rectangular collider
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`path`] – waypoint loop shared by the walking enemy variants
//! - [`patrol`] – patrol guard enemy
//! - [`player`] – player marker and facing state
//! - [`rigidbody`] – kinematic body storing velocity and acceleration
//! - [`securitycamera`] – sweeping wall camera enemy
//! - [`sightcone`] – cone-of-sight raycaster used by vision-capable enemies
//! - [`spotlight`] – waypoint-following light circle enemy
//! - [`sprite`] – 2D sprite rendering component
//! - [`terraincutoff`] – vertical draw-order threshold for actors
//! - [`trigger`] – buttons, checkpoints and camera boundaries
//! - [`zombie`] – leash-bound chaser enemy

pub mod active;
pub mod animation;
pub mod boxcollider;
pub mod mapposition;
pub mod path;
pub mod patrol;
pub mod player;
pub mod rigidbody;
pub mod securitycamera;
pub mod sightcone;
pub mod spotlight;
pub mod sprite;
pub mod terraincutoff;
pub mod trigger;
pub mod zombie;
