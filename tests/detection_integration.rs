//! Detection integration tests: patrol sight, camera sweep, spotlight and
//! zombie behavior driven through their systems.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use glam::Vec2;

use shadewalk::components::active::Active;
use shadewalk::components::animation::Animation;
use shadewalk::components::boxcollider::BoxCollider;
use shadewalk::components::mapposition::MapPosition;
use shadewalk::components::patrol::{PATROL_HITBOX, Patrol};
use shadewalk::components::player::{PLAYER_HITBOX_H, PLAYER_HITBOX_W, Player};
use shadewalk::components::rigidbody::RigidBody;
use shadewalk::components::securitycamera::SecurityCamera;
use shadewalk::components::sightcone::SightCone;
use shadewalk::components::spotlight::Spotlight;
use shadewalk::components::zombie::{ZOMBIE_HITBOX, Zombie, ZombieMode};
use shadewalk::events::audio::AudioCmd;
use shadewalk::events::caught::caught_observer;
use shadewalk::game::register_animations;
use shadewalk::resources::animationstore::AnimationStore;
use shadewalk::resources::gameconfig::GameConfig;
use shadewalk::resources::occupancy::OccupancyGrid;
use shadewalk::resources::timers::Timers;
use shadewalk::resources::worldsignals::WorldSignals;
use shadewalk::resources::worldtime::WorldTime;
use shadewalk::systems::patrol::patrol_system;
use shadewalk::systems::securitycamera::securitycamera_system;
use shadewalk::systems::spotlight::spotlight_system;
use shadewalk::systems::zombie::zombie_system;

fn make_world(delta: f32) -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime {
        elapsed: 0.0,
        delta,
        time_scale: 1.0,
        frame_count: 0,
    });
    world.insert_resource(WorldSignals::default());
    world.insert_resource(Timers::default());
    world.insert_resource(GameConfig::new());
    world.insert_resource(OccupancyGrid::new(16.0));
    world.init_resource::<Messages<AudioCmd>>();
    let mut store = AnimationStore::new();
    register_animations(&mut store);
    world.insert_resource(store);
    world.spawn(Observer::new(caught_observer));
    world.flush();
    world
}

fn tick_patrol(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(patrol_system);
    schedule.run(world);
}

fn tick_camera(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(securitycamera_system);
    schedule.run(world);
}

fn tick_spotlight(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(spotlight_system);
    schedule.run(world);
}

fn tick_zombie(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(zombie_system);
    schedule.run(world);
}

fn spawn_player_at(world: &mut World, pos: Vec2) -> Entity {
    world
        .spawn((
            Player::default(),
            MapPosition::new(pos.x, pos.y),
            RigidBody::new(),
            BoxCollider::new(PLAYER_HITBOX_W, PLAYER_HITBOX_H)
                .with_offset(Vec2::new(-PLAYER_HITBOX_W * 0.5, -PLAYER_HITBOX_H)),
        ))
        .id()
}

fn spawn_patrol_at(world: &mut World, pos: Vec2, waypoints: Vec<Vec2>, facing: f32) -> Entity {
    world
        .spawn((
            MapPosition::new(pos.x, pos.y),
            RigidBody::new(),
            BoxCollider::centered(PATROL_HITBOX, PATROL_HITBOX),
            Patrol::new(pos, waypoints, facing),
            SightCone::new(96.0, 70.0, 6.0),
            Animation::new("guard_idle/s"),
            Active,
        ))
        .id()
}

#[test]
fn patrol_compiles_cone_and_spots_player_at_center() {
    // End to end: patrol with a 2-point path, empty occupancy grid, and the
    // player standing at the patrol's own position. One update must leave a
    // compiled cone that reports the player visible, and the caught flag set.
    let mut world = make_world(1.0 / 60.0);
    // Player pivot sits at the feet; placing it half a hitbox below the
    // guard puts the player's center exactly on the cone apex.
    let player = spawn_player_at(&mut world, Vec2::new(50.0, 56.0));
    let guard = spawn_patrol_at(
        &mut world,
        Vec2::new(50.0, 50.0),
        vec![Vec2::new(50.0, 50.0), Vec2::new(120.0, 50.0)],
        0.0,
    );

    tick_patrol(&mut world);

    let cone = world.get::<SightCone>(guard).unwrap();
    assert!(cone.compiled());
    let player_center = {
        let pos = world.get::<MapPosition>(player).unwrap().pos;
        let collider = world.get::<BoxCollider>(player).unwrap();
        collider.center(pos)
    };
    assert!(world.get::<SightCone>(guard).unwrap().sees(player_center));
    assert!(world.resource::<WorldSignals>().has_flag("player_caught"));
}

#[test]
fn patrol_turns_before_translating() {
    let mut world = make_world(0.1);
    spawn_player_at(&mut world, Vec2::new(500.0, 500.0));
    // Guard faces east, waypoint due south: 90 degrees to turn at
    // 240 deg/s means no translation for the first ticks.
    let guard = spawn_patrol_at(
        &mut world,
        Vec2::ZERO,
        vec![Vec2::new(0.0, 40.0)],
        0.0,
    );

    tick_patrol(&mut world);
    assert_eq!(world.get::<RigidBody>(guard).unwrap().velocity, Vec2::ZERO);

    for _ in 0..4 {
        tick_patrol(&mut world);
    }
    let patrol = world.get::<Patrol>(guard).unwrap();
    assert!((patrol.facing - 90.0).abs() < 1e-3);
    let rb = world.get::<RigidBody>(guard).unwrap();
    assert!(rb.velocity.y > 0.0);
}

#[test]
fn patrol_idle_cone_compiles_only_once() {
    let mut world = make_world(0.1);
    spawn_player_at(&mut world, Vec2::new(500.0, 500.0));
    // Empty path: the guard never moves, so after the initial compile the
    // depths stay untouched even when the grid changes under it.
    let guard = spawn_patrol_at(&mut world, Vec2::ZERO, vec![], 0.0);

    tick_patrol(&mut world);
    assert!(world.get::<SightCone>(guard).unwrap().compiled());
    let before = world.get::<SightCone>(guard).unwrap().depths().to_vec();

    world
        .resource_mut::<OccupancyGrid>()
        .set_solid(2, 0);
    tick_patrol(&mut world);
    let after = world.get::<SightCone>(guard).unwrap().depths().to_vec();
    assert_eq!(before, after);
}

#[test]
fn security_camera_recompiles_every_frame_and_detects() {
    let mut world = make_world(1.0 / 60.0);
    spawn_player_at(&mut world, Vec2::new(60.0, 12.0));
    let cam = world
        .spawn((
            MapPosition::new(0.0, 0.0),
            SecurityCamera::new(0.0, 40.0),
            SightCone::new(120.0, 40.0, 12.0),
            Active,
        ))
        .id();

    tick_camera(&mut world);

    let cone = world.get::<SightCone>(cam).unwrap();
    assert!(cone.compiled());
    assert!(world.resource::<WorldSignals>().has_flag("player_caught"));

    // The sweep moved the facing off base.
    let camera = world.get::<SecurityCamera>(cam).unwrap();
    assert!(camera.facing > 0.0);
}

#[test]
fn spotlight_catches_player_inside_circle() {
    let mut world = make_world(1.0 / 60.0);
    spawn_player_at(&mut world, Vec2::new(10.0, 10.0));
    world.spawn((
        MapPosition::new(0.0, 0.0),
        RigidBody::new(),
        Spotlight::new(Vec2::ZERO, vec![], 40.0),
        Active,
    ));

    tick_spotlight(&mut world);
    assert!(world.resource::<WorldSignals>().has_flag("player_caught"));
}

#[test]
fn spotlight_ignores_player_outside_circle() {
    let mut world = make_world(1.0 / 60.0);
    spawn_player_at(&mut world, Vec2::new(100.0, 0.0));
    world.spawn((
        MapPosition::new(0.0, 0.0),
        RigidBody::new(),
        Spotlight::new(Vec2::ZERO, vec![], 40.0),
        Active,
    ));

    tick_spotlight(&mut world);
    assert!(!world.resource::<WorldSignals>().has_flag("player_caught"));
}

#[test]
fn zombie_chases_player_within_leash() {
    let mut world = make_world(1.0 / 60.0);
    spawn_player_at(&mut world, Vec2::new(40.0, 0.0));
    let zombie = world
        .spawn((
            MapPosition::new(0.0, 0.0),
            RigidBody::new(),
            BoxCollider::centered(ZOMBIE_HITBOX, ZOMBIE_HITBOX),
            Zombie::new(Vec2::ZERO, 100.0),
            Animation::new("zombie_idle/s"),
            Active,
        ))
        .id();

    tick_zombie(&mut world);

    let rb = world.get::<RigidBody>(zombie).unwrap();
    assert!(rb.velocity.x > 0.0);
    assert_eq!(world.get::<Zombie>(zombie).unwrap().mode, ZombieMode::Chasing);
}

#[test]
fn zombie_exceeding_leash_returns_home_with_audio_cue() {
    let mut world = make_world(1.0 / 60.0);
    spawn_player_at(&mut world, Vec2::new(300.0, 0.0));
    // Dragged past its leash: mode flips to Returning and a cue is emitted.
    let zombie = world
        .spawn((
            MapPosition::new(150.0, 0.0),
            RigidBody::new(),
            BoxCollider::centered(ZOMBIE_HITBOX, ZOMBIE_HITBOX),
            Zombie::new(Vec2::ZERO, 100.0),
            Animation::new("zombie_idle/s"),
            Active,
        ))
        .id();

    tick_zombie(&mut world);
    assert_eq!(
        world.get::<Zombie>(zombie).unwrap().mode,
        ZombieMode::Returning
    );
    assert!(!world.resource::<Messages<AudioCmd>>().is_empty());

    // Next tick it walks home (negative x).
    tick_zombie(&mut world);
    let rb = world.get::<RigidBody>(zombie).unwrap();
    assert!(rb.velocity.x < 0.0);
}

#[test]
fn zombie_catches_on_contact() {
    let mut world = make_world(1.0 / 60.0);
    spawn_player_at(&mut world, Vec2::new(2.0, 2.0));
    world.spawn((
        MapPosition::new(0.0, 0.0),
        RigidBody::new(),
        BoxCollider::centered(ZOMBIE_HITBOX, ZOMBIE_HITBOX),
        Zombie::new(Vec2::ZERO, 100.0),
        Animation::new("zombie_idle/s"),
        Active,
    ));

    tick_zombie(&mut world);
    assert!(world.resource::<WorldSignals>().has_flag("player_caught"));
}

#[test]
fn inactive_enemies_are_skipped() {
    let mut world = make_world(1.0 / 60.0);
    spawn_player_at(&mut world, Vec2::new(10.0, 10.0));
    // No Active marker: the spotlight must not detect anything.
    world.spawn((
        MapPosition::new(0.0, 0.0),
        RigidBody::new(),
        Spotlight::new(Vec2::ZERO, vec![], 40.0),
    ));

    tick_spotlight(&mut world);
    assert!(!world.resource::<WorldSignals>().has_flag("player_caught"));
}
