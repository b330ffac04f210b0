//! Zombie chaser variant.
//!
//! Zombies shamble toward the player while they remain within a leash
//! radius of their home point, and shuffle back home once the leash is
//! exceeded. Every mode switch re-rolls the walk speed and emits an audio
//! cue. They catch the player only on direct hitbox overlap; they have no
//! sight cone.

use bevy_ecs::prelude::Component;
use glam::Vec2;

pub const ZOMBIE_SPEED_MIN: f32 = 18.0;
pub const ZOMBIE_SPEED_MAX: f32 = 42.0;
pub const ZOMBIE_ARRIVE_RADIUS: f32 = 2.0;
pub const ZOMBIE_HITBOX: f32 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZombieMode {
    Chasing,
    Returning,
}

#[derive(Component, Debug, Clone)]
pub struct Zombie {
    /// Anchor the leash is measured from; also the reset position.
    pub home: Vec2,
    /// Maximum distance from home before the chase breaks off.
    pub leash: f32,
    pub mode: ZombieMode,
    /// Current walk speed; re-rolled on every mode switch.
    pub speed: f32,
}

impl Zombie {
    pub fn new(home: Vec2, leash: f32) -> Self {
        Self {
            home,
            leash,
            mode: ZombieMode::Chasing,
            speed: reroll_speed(),
        }
    }

    pub fn reset(&mut self) {
        self.mode = ZombieMode::Chasing;
        self.speed = reroll_speed();
    }

    /// Switch mode and re-roll the walk speed. Returns the new mode.
    pub fn switch_mode(&mut self) -> ZombieMode {
        self.mode = match self.mode {
            ZombieMode::Chasing => ZombieMode::Returning,
            ZombieMode::Returning => ZombieMode::Chasing,
        };
        self.speed = reroll_speed();
        self.mode
    }
}

/// Random walk speed in [ZOMBIE_SPEED_MIN, ZOMBIE_SPEED_MAX).
pub fn reroll_speed() -> f32 {
    ZOMBIE_SPEED_MIN + fastrand::f32() * (ZOMBIE_SPEED_MAX - ZOMBIE_SPEED_MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switch_mode_toggles() {
        let mut zombie = Zombie::new(Vec2::ZERO, 100.0);
        assert_eq!(zombie.mode, ZombieMode::Chasing);
        assert_eq!(zombie.switch_mode(), ZombieMode::Returning);
        assert_eq!(zombie.switch_mode(), ZombieMode::Chasing);
    }

    #[test]
    fn test_speed_stays_in_range() {
        for _ in 0..32 {
            let speed = reroll_speed();
            assert!((ZOMBIE_SPEED_MIN..ZOMBIE_SPEED_MAX).contains(&speed));
        }
    }

    #[test]
    fn test_reset_returns_to_chasing() {
        let mut zombie = Zombie::new(Vec2::new(10.0, 10.0), 50.0);
        zombie.switch_mode();
        zombie.reset();
        assert_eq!(zombie.mode, ZombieMode::Chasing);
    }
}
