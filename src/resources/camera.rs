//! Shared 2D camera resource.
//!
//! Systems agree on a single world/screen transform through [`GameCamera`].
//! The shake displacement is written by the external effects layer and
//! simply folded into the transform here; camera boundary triggers install
//! clamp bounds so the view stays inside the current room.

use bevy_ecs::prelude::Resource;
use glam::Vec2;

/// ECS resource that holds the active 2D camera parameters.
#[derive(Resource, Debug, Clone)]
pub struct GameCamera {
    /// World point shown at the screen center.
    pub target: Vec2,
    /// Screen-space point the target maps to (usually the screen center).
    pub offset: Vec2,
    pub zoom: f32,
    /// Shake displacement in screen pixels, owned by the effects layer.
    pub shake: Vec2,
    /// Optional world-space (min, max) clamp region for the target.
    pub bounds: Option<(Vec2, Vec2)>,
}

impl Default for GameCamera {
    fn default() -> Self {
        Self {
            target: Vec2::ZERO,
            offset: Vec2::ZERO,
            zoom: 1.0,
            shake: Vec2::ZERO,
            bounds: None,
        }
    }
}

impl GameCamera {
    pub fn world_to_screen(&self, p: Vec2) -> Vec2 {
        (p - self.target) * self.zoom + self.offset + self.shake
    }

    pub fn screen_to_world(&self, s: Vec2) -> Vec2 {
        (s - self.offset - self.shake) / self.zoom + self.target
    }

    /// World-space (min, max) rectangle visible on a screen of the given size.
    pub fn view_rect(&self, screen_w: f32, screen_h: f32) -> (Vec2, Vec2) {
        let tl = self.screen_to_world(Vec2::ZERO);
        let br = self.screen_to_world(Vec2::new(screen_w, screen_h));
        (
            Vec2::new(tl.x.min(br.x), tl.y.min(br.y)),
            Vec2::new(tl.x.max(br.x), tl.y.max(br.y)),
        )
    }

    /// Clamp the target into the installed bounds, if any.
    pub fn apply_bounds(&mut self) {
        if let Some((min, max)) = self.bounds {
            self.target.x = self.target.x.clamp(min.x, max.x);
            self.target.y = self.target.y.clamp(min.y, max.y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_screen_roundtrip() {
        let camera = GameCamera {
            target: Vec2::new(100.0, 50.0),
            offset: Vec2::new(320.0, 180.0),
            zoom: 2.0,
            ..Default::default()
        };
        let p = Vec2::new(140.0, 90.0);
        let s = camera.world_to_screen(p);
        assert_eq!(camera.screen_to_world(s), p);
    }

    #[test]
    fn test_view_rect_centered_on_target() {
        let camera = GameCamera {
            target: Vec2::new(0.0, 0.0),
            offset: Vec2::new(320.0, 180.0),
            zoom: 1.0,
            ..Default::default()
        };
        let (min, max) = camera.view_rect(640.0, 360.0);
        assert_eq!(min, Vec2::new(-320.0, -180.0));
        assert_eq!(max, Vec2::new(320.0, 180.0));
    }

    #[test]
    fn test_apply_bounds_clamps_target() {
        let mut camera = GameCamera {
            target: Vec2::new(500.0, -50.0),
            bounds: Some((Vec2::ZERO, Vec2::new(320.0, 180.0))),
            ..Default::default()
        };
        camera.apply_bounds();
        assert_eq!(camera.target, Vec2::new(320.0, 0.0));
    }
}
