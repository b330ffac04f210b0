//! Kinematic body component.
//!
//! The [`RigidBody`] component stores the velocity and acceleration of an
//! entity. The movement system integrates it into
//! [`MapPosition`](super::mapposition::MapPosition) once per frame with
//! semi-implicit Euler: velocity accumulates acceleration first, then
//! position accumulates velocity.
//!
//! The `frozen` flag temporarily disables all movement calculations, used
//! while the player's capture countdown runs and by tests.

use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Kinematic body storing velocity and acceleration.
///
/// No clamping or damping is applied; controllers are responsible for
/// zeroing velocity/acceleration when an entity should stop.
#[derive(Component, Clone, Copy, Debug)]
pub struct RigidBody {
    /// Current velocity in world units per second.
    pub velocity: Vec2,
    /// Current acceleration in world units per second squared.
    pub acceleration: Vec2,
    /// When true, the movement system skips this entity. Position can still
    /// be modified externally.
    pub frozen: bool,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new()
    }
}

impl RigidBody {
    /// Create a RigidBody at rest.
    pub fn new() -> Self {
        Self {
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            frozen: false,
        }
    }

    /// Create a RigidBody with an initial velocity.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn with_velocity(velocity: Vec2) -> Self {
        Self {
            velocity,
            acceleration: Vec2::ZERO,
            frozen: false,
        }
    }

    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    /// Advance velocity and position by `dt` seconds (semi-implicit Euler).
    /// Mutates the body's velocity and returns the positional displacement.
    pub fn integrate(&mut self, dt: f32) -> Vec2 {
        self.velocity += self.acceleration * dt;
        self.velocity * dt
    }

    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    pub fn unfreeze(&mut self) {
        self.frozen = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_rigidbody_new_at_rest() {
        let rb = RigidBody::new();
        assert_eq!(rb.velocity, Vec2::ZERO);
        assert_eq!(rb.acceleration, Vec2::ZERO);
        assert!(!rb.frozen);
    }

    #[test]
    fn test_integrate_velocity_before_position() {
        // Semi-implicit: the displacement already contains this step's
        // acceleration contribution.
        let mut rb = RigidBody::new();
        rb.acceleration = Vec2::new(2.0, 0.0);
        let delta = rb.integrate(1.0);
        assert!(approx_eq(rb.velocity.x, 2.0));
        assert!(approx_eq(delta.x, 2.0));
    }

    #[test]
    fn test_integrate_constant_acceleration_sequence() {
        // a = (0, 100), dt = 1/60, 60 steps: v = a * dt * n.
        let mut rb = RigidBody::new();
        rb.acceleration = Vec2::new(0.0, 100.0);
        let dt = 1.0 / 60.0;
        let mut travelled = Vec2::ZERO;
        for _ in 0..60 {
            travelled += rb.integrate(dt);
        }
        assert!((rb.velocity.y - 100.0).abs() < 1e-2);
        // Closed-form Euler accumulation: sum_{n=1..60} (a * dt * n) * dt
        let expected: f32 = (1..=60).map(|n| 100.0 * dt * n as f32 * dt).sum();
        assert!((travelled.y - expected).abs() < 1e-2);
    }

    #[test]
    fn test_freeze_unfreeze() {
        let mut rb = RigidBody::new();
        rb.freeze();
        assert!(rb.frozen);
        rb.unfreeze();
        assert!(!rb.frozen);
    }
}
