//! Static wall rectangles.
//!
//! Freeform collision geometry the player's swept movement resolves
//! against, independent of the tile grid. Read-only during a frame.

use bevy_ecs::prelude::Resource;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned wall rectangle in world units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl WallRect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn max(&self) -> Vec2 {
        Vec2::new(self.x + self.w, self.y + self.h)
    }

    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x <= self.x + self.w && p.y >= self.y && p.y <= self.y + self.h
    }
}

/// The level's static wall list.
#[derive(Resource, Debug, Clone, Default)]
pub struct WallSet {
    pub rects: Vec<WallRect>,
}

impl WallSet {
    pub fn new(rects: Vec<WallRect>) -> Self {
        Self { rects }
    }
}
