//! Moving spotlight variant.
//!
//! Spotlights glide directly between waypoints (no turning) and detect the
//! player with a plain distance test against their light circle; the
//! occupancy grid plays no part.

use bevy_ecs::prelude::Component;
use glam::Vec2;

use super::path::Path;

pub const SPOTLIGHT_SPEED: f32 = 30.0;
pub const SPOTLIGHT_ARRIVE_RADIUS: f32 = 2.0;

#[derive(Component, Debug, Clone)]
pub struct Spotlight {
    pub path: Path,
    /// Light circle radius; the player is caught when their center enters it.
    pub radius: f32,
    pub speed: f32,
    pub spawn: Vec2,
}

impl Spotlight {
    pub fn new(spawn: Vec2, waypoints: impl IntoIterator<Item = Vec2>, radius: f32) -> Self {
        Self {
            path: Path::new(waypoints),
            radius,
            speed: SPOTLIGHT_SPEED,
            spawn,
        }
    }

    pub fn reset(&mut self) {
        self.path.reset();
    }
}
