//! Patrol guard variant.
//!
//! Guards walk an authored waypoint loop, turning toward the next waypoint
//! at a capped angular rate before translating. They carry a forward-facing
//! [`SightCone`](super::sightcone::SightCone) that is recompiled while they
//! move (or if it has never been compiled) and catch the player either on
//! hitbox overlap or on cone visibility.

use bevy_ecs::prelude::Component;
use glam::Vec2;

use super::path::Path;

/// Walk speed in world units per second.
pub const PATROL_SPEED: f32 = 40.0;
/// Maximum turn rate in degrees per second.
pub const PATROL_TURN_RATE: f32 = 240.0;
/// Sight cone reach in world units.
pub const PATROL_SIGHT_RADIUS: f32 = 96.0;
/// Full sight cone aperture in degrees.
pub const PATROL_SIGHT_ANGLE: f32 = 70.0;
/// Eye height above the guard's pivot.
pub const PATROL_SIGHT_Z: f32 = 6.0;
/// Distance at which a waypoint counts as reached.
pub const PATROL_ARRIVE_RADIUS: f32 = 2.0;
/// Residual misalignment (degrees) below which the guard starts walking.
pub const PATROL_ALIGN_TOLERANCE: f32 = 1.0;
/// Guard hitbox side length.
pub const PATROL_HITBOX: f32 = 12.0;

#[derive(Component, Debug, Clone)]
pub struct Patrol {
    pub path: Path,
    /// Current facing in degrees; also the sight cone direction.
    pub facing: f32,
    pub speed: f32,
    pub turn_rate: f32,
    /// Authored pose, restored by `reset`.
    pub spawn: Vec2,
    pub spawn_facing: f32,
}

impl Patrol {
    pub fn new(spawn: Vec2, waypoints: impl IntoIterator<Item = Vec2>, facing: f32) -> Self {
        Self {
            path: Path::new(waypoints),
            facing,
            speed: PATROL_SPEED,
            turn_rate: PATROL_TURN_RATE,
            spawn,
            spawn_facing: facing,
        }
    }

    /// Restore the authored pose. Idempotent.
    pub fn reset(&mut self) {
        self.path.reset();
        self.facing = self.spawn_facing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_restores_authored_pose() {
        let mut patrol = Patrol::new(Vec2::new(5.0, 5.0), [Vec2::ZERO, Vec2::ONE], 45.0);
        patrol.facing = -120.0;
        patrol.path.advance();
        patrol.reset();
        assert_eq!(patrol.facing, 45.0);
        assert_eq!(patrol.path.current, 0);
        // calling reset again changes nothing
        patrol.reset();
        assert_eq!(patrol.facing, 45.0);
    }
}
