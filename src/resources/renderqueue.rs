//! Frame render output.
//!
//! The core does not draw; it rebuilds this queue of screen-space
//! primitives every frame, already in draw order, and the presenting shell
//! drains it. Colors are plain RGBA bytes so the queue stays free of any
//! graphics-library types.

use bevy_ecs::prelude::Resource;
use glam::Vec2;

pub type Rgba = (u8, u8, u8, u8);

/// One draw command in screen space.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderPrimitive {
    /// Textured quad: `src` is (x, y, w, h) inside the texture, `dest` is
    /// the screen position of the sprite pivot, `origin` the pivot offset
    /// from the frame's top-left.
    Sprite {
        tex_key: String,
        src: (f32, f32, f32, f32),
        dest: Vec2,
        origin: Vec2,
        flip_h: bool,
    },
    /// Filled fan, first point is the fan center.
    Polygon { points: Vec<Vec2>, color: Rgba },
    /// Filled circle.
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
    /// Rectangle outline (debug overlays).
    RectLines { min: Vec2, max: Vec2, color: Rgba },
}

#[derive(Resource, Debug, Clone, Default)]
pub struct RenderQueue {
    pub items: Vec<RenderPrimitive>,
}

impl RenderQueue {
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn push(&mut self, primitive: RenderPrimitive) {
        self.items.push(primitive);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
