use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Sprite is identified by a texture key, its size in world units and an offset
/// if the texture is a spritesheet. The offset selects the current frame from
/// the sheet. The origin selects the pivot point (in pixels) relative to the
/// texture's top-left used for placement when rendering.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
    pub width: f32,
    pub height: f32,
    pub offset: Vec2,
    pub origin: Vec2,
    pub flip_h: bool,
}

impl Sprite {
    /// Sprite with the pivot at the bottom-center of the frame, the usual
    /// placement for top-down actors standing on the ground.
    pub fn actor(tex_key: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            tex_key: tex_key.into(),
            width,
            height,
            offset: Vec2::ZERO,
            origin: Vec2::new(width * 0.5, height),
            flip_h: false,
        }
    }
}
