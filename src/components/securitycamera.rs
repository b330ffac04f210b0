//! Wall-mounted security camera variant.
//!
//! Cameras never move; they sweep their sight cone back and forth between
//! `base_facing - swivel` and `base_facing + swivel` at a fixed angular
//! speed, reversing at each extreme. The cone is recompiled every frame
//! while the camera is active.

use bevy_ecs::prelude::Component;

pub const CAMERA_SWEEP_SPEED: f32 = 35.0;
pub const CAMERA_SIGHT_RADIUS: f32 = 120.0;
pub const CAMERA_SIGHT_ANGLE: f32 = 40.0;
pub const CAMERA_SIGHT_Z: f32 = 12.0;

#[derive(Component, Debug, Clone)]
pub struct SecurityCamera {
    /// Center of the sweep arc in degrees.
    pub base_facing: f32,
    /// Half-amplitude of the sweep in degrees.
    pub swivel: f32,
    /// Sweep speed in degrees per second.
    pub sweep_speed: f32,
    /// Current facing in degrees.
    pub facing: f32,
    /// Sweep direction, +1.0 or -1.0.
    pub sweep_dir: f32,
}

impl SecurityCamera {
    pub fn new(base_facing: f32, swivel: f32) -> Self {
        Self {
            base_facing,
            swivel,
            sweep_speed: CAMERA_SWEEP_SPEED,
            facing: base_facing,
            sweep_dir: 1.0,
        }
    }

    pub fn reset(&mut self) {
        self.facing = self.base_facing;
        self.sweep_dir = 1.0;
    }

    /// Advance the sweep by `dt` seconds, reversing at the extremes.
    pub fn sweep(&mut self, dt: f32) {
        self.facing += self.sweep_dir * self.sweep_speed * dt;
        let offset = self.facing - self.base_facing;
        if offset > self.swivel {
            self.facing = self.base_facing + self.swivel;
            self.sweep_dir = -1.0;
        } else if offset < -self.swivel {
            self.facing = self.base_facing - self.swivel;
            self.sweep_dir = 1.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sweep_reverses_at_extremes() {
        let mut cam = SecurityCamera::new(0.0, 30.0);
        cam.sweep_speed = 60.0;
        cam.sweep(0.6); // would reach +36, clamps to +30 and reverses
        assert_eq!(cam.facing, 30.0);
        assert_eq!(cam.sweep_dir, -1.0);
        cam.sweep(0.5);
        assert_eq!(cam.facing, 0.0);
        cam.sweep(0.6); // down to -36, clamps to -30 and reverses again
        assert_eq!(cam.facing, -30.0);
        assert_eq!(cam.sweep_dir, 1.0);
    }

    #[test]
    fn test_reset_recenters() {
        let mut cam = SecurityCamera::new(90.0, 45.0);
        cam.sweep(1.0);
        cam.reset();
        assert_eq!(cam.facing, 90.0);
        assert_eq!(cam.sweep_dir, 1.0);
    }
}
