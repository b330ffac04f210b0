//! Static trigger variants: buttons, checkpoints and camera boundaries.
//!
//! Triggers never move and never capture. They watch for the false->true
//! transition of "player overlaps me" and mutate progression state on that
//! edge: buttons raise a world flag, checkpoints move the respawn point,
//! camera boundaries install camera clamp bounds.

use bevy_ecs::prelude::Component;
use glam::Vec2;

pub const BUTTON_HITBOX: f32 = 14.0;
pub const CHECKPOINT_HITBOX: f32 = 24.0;

#[derive(Component, Debug, Clone)]
pub struct Button {
    pub id: String,
    pub pressed: bool,
    pub was_overlapping: bool,
}

impl Button {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            pressed: false,
            was_overlapping: false,
        }
    }
}

#[derive(Component, Debug, Clone)]
pub struct Checkpoint {
    pub id: String,
    pub activated: bool,
    pub was_overlapping: bool,
}

impl Checkpoint {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            activated: false,
            was_overlapping: false,
        }
    }
}

/// Region that, when entered, clamps the camera target to its bounds.
/// The rectangle is anchored at the entity position.
#[derive(Component, Debug, Clone)]
pub struct CameraBoundary {
    pub size: Vec2,
    pub was_overlapping: bool,
}

impl CameraBoundary {
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            was_overlapping: false,
        }
    }

    /// World-space (min, max) of the boundary region.
    pub fn bounds(&self, position: Vec2) -> (Vec2, Vec2) {
        (position, position + self.size)
    }
}
