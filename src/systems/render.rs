//! Render pass.
//!
//! The core draws nothing itself: this system rebuilds the
//! [`RenderQueue`](crate::resources::renderqueue::RenderQueue) every frame,
//! already in draw order, and the presenting shell replays it.
//!
//! Order within a frame:
//! 1. ground tiles (layer z <= 0, view-culled, sorted by layer)
//! 2. light circles and compiled sight cones
//! 3. actors, sorted by their terrain cutoff line so entities lower on
//!    screen occlude the ones behind them
//! 4. overhang tiles (layer z > 0)
//! 5. debug overlays when [`DebugMode`] is present

use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::sightcone::SightCone;
use crate::components::spotlight::Spotlight;
use crate::components::sprite::Sprite;
use crate::components::terraincutoff::TerrainCutoff;
use crate::resources::camera::GameCamera;
use crate::resources::debugmode::DebugMode;
use crate::resources::gameconfig::GameConfig;
use crate::resources::renderqueue::{RenderPrimitive, RenderQueue};
use crate::resources::screensize::ScreenSize;
use crate::resources::tilemap::TileMap;
use crate::resources::walls::WallSet;

const CONE_COLOR: (u8, u8, u8, u8) = (255, 235, 120, 70);
const LIGHT_COLOR: (u8, u8, u8, u8) = (255, 255, 200, 60);
const HITBOX_COLOR: (u8, u8, u8, u8) = (255, 0, 0, 255);
const WALL_COLOR: (u8, u8, u8, u8) = (0, 160, 255, 255);

#[allow(clippy::too_many_arguments)]
pub fn render_system(
    mut queue: ResMut<RenderQueue>,
    camera: Res<GameCamera>,
    screen: Res<ScreenSize>,
    config: Res<GameConfig>,
    tiles: Res<TileMap>,
    walls: Res<WallSet>,
    debug: Option<Res<DebugMode>>,
    actors: Query<(&Sprite, &MapPosition, Option<&TerrainCutoff>)>,
    cones: Query<&SightCone>,
    lights: Query<(&Spotlight, &MapPosition)>,
    colliders: Query<(&BoxCollider, &MapPosition)>,
) {
    queue.clear();

    let (view_min, view_max) = camera.view_rect(screen.w as f32, screen.h as f32);
    let tile_size = config.tile_size;

    // Ground and overhang tiles, view-culled by integer tile range.
    let x0 = (view_min.x / tile_size).floor() as i32;
    let x1 = (view_max.x / tile_size).floor() as i32;
    let y0 = (view_min.y / tile_size).floor() as i32;
    let y1 = (view_max.y / tile_size).floor() as i32;

    let mut ground: Vec<(i32, RenderPrimitive)> = Vec::new();
    let mut overhang: Vec<(i32, RenderPrimitive)> = Vec::new();
    for ty_world in y0..=y1 {
        for tx_world in x0..=x1 {
            let Some(stamps) = tiles.tiles.get(&(tx_world, ty_world)) else {
                continue;
            };
            let world = Vec2::new(tx_world as f32 * tile_size, ty_world as f32 * tile_size);
            for stamp in stamps {
                let prim = RenderPrimitive::Sprite {
                    tex_key: "tileset".to_string(),
                    src: (
                        stamp.tx as f32 * tile_size,
                        stamp.ty as f32 * tile_size,
                        tile_size,
                        tile_size,
                    ),
                    dest: camera.world_to_screen(world),
                    origin: Vec2::ZERO,
                    flip_h: false,
                };
                if stamp.z <= 0 {
                    ground.push((stamp.z, prim));
                } else {
                    overhang.push((stamp.z, prim));
                }
            }
        }
    }
    ground.sort_by_key(|(z, _)| *z);
    for (_, prim) in ground {
        queue.push(prim);
    }

    // Detection shapes under the actors.
    for (spotlight, pos) in lights.iter() {
        queue.push(RenderPrimitive::Circle {
            center: camera.world_to_screen(pos.pos),
            radius: spotlight.radius * camera.zoom,
            color: LIGHT_COLOR,
        });
    }
    for cone in cones.iter() {
        if !cone.compiled() {
            continue;
        }
        queue.push(RenderPrimitive::Polygon {
            points: cone
                .polygon()
                .iter()
                .map(|p| camera.world_to_screen(*p))
                .collect(),
            color: CONE_COLOR,
        });
    }

    // Actors, view-culled and sorted by terrain cutoff.
    let mut to_draw: Vec<(f32, RenderPrimitive)> = actors
        .iter()
        .filter_map(|(sprite, pos, cutoff)| {
            let min = pos.pos - sprite.origin;
            let max = min + Vec2::new(sprite.width, sprite.height);
            let visible = !(max.x < view_min.x
                || min.x > view_max.x
                || max.y < view_min.y
                || min.y > view_max.y);
            if !visible {
                return None;
            }
            let cutoff_y = pos.pos.y + cutoff.map(|c| c.offset).unwrap_or(0.0);
            Some((
                cutoff_y,
                RenderPrimitive::Sprite {
                    tex_key: sprite.tex_key.clone(),
                    src: (sprite.offset.x, sprite.offset.y, sprite.width, sprite.height),
                    dest: camera.world_to_screen(pos.pos),
                    origin: sprite.origin,
                    flip_h: sprite.flip_h,
                },
            ))
        })
        .collect();
    to_draw.sort_by(|(a, _), (b, _)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    for (_, prim) in to_draw {
        queue.push(prim);
    }

    overhang.sort_by_key(|(z, _)| *z);
    for (_, prim) in overhang {
        queue.push(prim);
    }

    if debug.is_some() {
        for (collider, pos) in colliders.iter() {
            let (min, max) = collider.aabb(pos.pos);
            queue.push(RenderPrimitive::RectLines {
                min: camera.world_to_screen(min),
                max: camera.world_to_screen(max),
                color: HITBOX_COLOR,
            });
        }
        for wall in &walls.rects {
            queue.push(RenderPrimitive::RectLines {
                min: camera.world_to_screen(wall.min()),
                max: camera.world_to_screen(wall.max()),
                color: WALL_COLOR,
            });
        }
    }
}
