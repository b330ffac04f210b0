//! Player movement, collision and animation.
//!
//! Reads the shared [`InputState`](crate::resources::input::InputState) and
//! turns the 8-directional intent into velocity, with diagonal movement
//! normalized so diagonal speed equals axial speed. Displacement is then
//! resolved one axis at a time against the static wall list: each axis is
//! integrated with the other axis's velocity zeroed, and an overlapping
//! hitbox snaps to the wall's near edge and zeroes that axis's velocity.
//! Resolving the axes separately is what prevents diagonal wall clipping.
//!
//! While the `player_caught` flag is set the player ignores movement input
//! entirely; the capture observer and reset system own that window.

use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::animation::{Animation, Direction8, switch_animation};
use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;
use crate::resources::animationstore::AnimationStore;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::walls::{WallRect, WallSet};
use crate::resources::worldsignals::WorldSignals;
use crate::resources::worldtime::WorldTime;

pub fn player_controller(
    time: Res<WorldTime>,
    input: Res<InputState>,
    config: Res<GameConfig>,
    walls: Res<WallSet>,
    signals: Res<WorldSignals>,
    store: Res<AnimationStore>,
    mut query: Query<(
        &mut Player,
        &mut MapPosition,
        &mut RigidBody,
        &mut Animation,
        &BoxCollider,
    )>,
) {
    let Ok((mut player, mut pos, mut rb, mut anim, collider)) = query.single_mut() else {
        return;
    };

    if signals.has_flag("player_caught") {
        rb.velocity = Vec2::ZERO;
        player.moving = false;
        let key = format!("player_idle/{}", player.facing.suffix());
        switch_animation(&mut anim, &store, &key);
        return;
    }

    let mut intent = Vec2::ZERO;
    if input.move_up.active {
        intent.y -= 1.0;
    }
    if input.move_down.active {
        intent.y += 1.0;
    }
    if input.move_left.active {
        intent.x -= 1.0;
    }
    if input.move_right.active {
        intent.x += 1.0;
    }
    if intent.x != 0.0 && intent.y != 0.0 {
        intent *= std::f32::consts::FRAC_1_SQRT_2;
    }
    rb.velocity = intent * config.walk_speed;

    resolve_axis_x(&mut pos, &mut rb, collider, &walls, time.delta);
    resolve_axis_y(&mut pos, &mut rb, collider, &walls, time.delta);

    if let Some(dir) = Direction8::from_vector(intent) {
        player.facing = dir;
        player.moving = true;
    } else {
        player.moving = false;
    }
    let base = if player.moving {
        "player_walk"
    } else {
        "player_idle"
    };
    let key = format!("{}/{}", base, player.facing.suffix());
    switch_animation(&mut anim, &store, &key);
}

/// Apply horizontal displacement, snapping to the first overlapped wall.
/// Walls are checked in list order; the first hit wins.
fn resolve_axis_x(
    pos: &mut MapPosition,
    rb: &mut RigidBody,
    collider: &BoxCollider,
    walls: &WallSet,
    dt: f32,
) {
    if rb.velocity.x == 0.0 {
        return;
    }
    let new_x = pos.pos.x + rb.velocity.x * dt;
    let probe = Vec2::new(new_x, pos.pos.y);
    for wall in &walls.rects {
        if collider.overlaps_wall(probe, wall) {
            pos.pos.x = snap_x(rb.velocity.x, collider, wall);
            rb.velocity.x = 0.0;
            return;
        }
    }
    pos.pos.x = new_x;
}

/// Apply vertical displacement, snapping to the first overlapped wall.
fn resolve_axis_y(
    pos: &mut MapPosition,
    rb: &mut RigidBody,
    collider: &BoxCollider,
    walls: &WallSet,
    dt: f32,
) {
    if rb.velocity.y == 0.0 {
        return;
    }
    let new_y = pos.pos.y + rb.velocity.y * dt;
    let probe = Vec2::new(pos.pos.x, new_y);
    for wall in &walls.rects {
        if collider.overlaps_wall(probe, wall) {
            pos.pos.y = snap_y(rb.velocity.y, collider, wall);
            rb.velocity.y = 0.0;
            return;
        }
    }
    pos.pos.y = new_y;
}

/// Entity x position that puts the hitbox flush against the wall edge the
/// movement direction points at.
fn snap_x(vel_x: f32, collider: &BoxCollider, wall: &WallRect) -> f32 {
    if vel_x > 0.0 {
        wall.x - collider.offset.x - collider.size.x
    } else {
        wall.x + wall.w - collider.offset.x
    }
}

fn snap_y(vel_y: f32, collider: &BoxCollider, wall: &WallRect) -> f32 {
    if vel_y > 0.0 {
        wall.y - collider.offset.y - collider.size.y
    } else {
        wall.y + wall.h - collider.offset.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_x_against_left_edge() {
        let collider = BoxCollider::new(12.0, 12.0).with_offset(Vec2::new(-6.0, -6.0));
        let wall = WallRect::new(32.0, -16.0, 16.0, 64.0);
        // moving right: hitbox max.x must land exactly on wall.x
        let x = snap_x(1.0, &collider, &wall);
        assert_eq!(x + collider.offset.x + collider.size.x, wall.x);
        // moving left: hitbox min.x lands on the wall's right edge
        let x = snap_x(-1.0, &collider, &wall);
        assert_eq!(x + collider.offset.x, wall.x + wall.w);
    }

    #[test]
    fn test_snap_y_against_top_edge() {
        let collider = BoxCollider::new(10.0, 14.0).with_offset(Vec2::new(-5.0, -7.0));
        let wall = WallRect::new(0.0, 48.0, 64.0, 16.0);
        let y = snap_y(1.0, &collider, &wall);
        assert_eq!(y + collider.offset.y + collider.size.y, wall.y);
        let y = snap_y(-1.0, &collider, &wall);
        assert_eq!(y + collider.offset.y, wall.y + wall.h);
    }
}
