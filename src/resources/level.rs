//! Level persistence.
//!
//! A level is one JSON document:
//!
//! ```json
//! {
//!   "grid_collision": [[x, y], ...],
//!   "grid_tiles": { "x,y": [[tx, ty, z], ...], ... },
//!   "walls": [[x, y, w, h], ...],
//!   "enemies": [{ "class": "patrol", ... }, ...]
//! }
//! ```
//!
//! Loading tolerates malformed input: a parse failure is logged and the
//! load aborts with `Err`, leaving whatever was previously in memory
//! untouched. Saving serializes the exact inverse shape, with tile keys
//! formatted as `"x,y"` string pairs.

use std::path::Path;

use bevy_ecs::prelude::World;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::components::mapposition::MapPosition;
use crate::components::patrol::Patrol;
use crate::components::securitycamera::SecurityCamera;
use crate::components::spotlight::Spotlight;
use crate::components::trigger::{Button, CameraBoundary, Checkpoint};
use crate::components::zombie::Zombie;
use crate::resources::occupancy::OccupancyGrid;
use crate::resources::tilemap::TileMap;
use crate::resources::walls::{WallRect, WallSet};

/// Serialized form of one placed enemy, tagged by variant name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "class", rename_all = "snake_case")]
pub enum EnemySpec {
    Patrol {
        x: f32,
        y: f32,
        #[serde(default)]
        path: Vec<(f32, f32)>,
        #[serde(default)]
        facing: f32,
    },
    Spotlight {
        x: f32,
        y: f32,
        #[serde(default)]
        path: Vec<(f32, f32)>,
        radius: f32,
    },
    SecurityCamera {
        x: f32,
        y: f32,
        facing: f32,
        swivel: f32,
    },
    Zombie {
        x: f32,
        y: f32,
        leash: f32,
    },
    Button {
        x: f32,
        y: f32,
        id: String,
    },
    Checkpoint {
        x: f32,
        y: f32,
        id: String,
    },
    CameraBoundary {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
    },
}

/// The full persisted level document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LevelData {
    #[serde(default)]
    pub grid_collision: Vec<(i32, i32)>,
    #[serde(default)]
    pub grid_tiles: FxHashMap<String, Vec<(i32, i32, i32)>>,
    #[serde(default)]
    pub walls: Vec<(f32, f32, f32, f32)>,
    #[serde(default)]
    pub enemies: Vec<EnemySpec>,
}

impl LevelData {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("failed to parse level JSON: {}", e))
    }

    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| format!("failed to serialize level: {}", e))
    }
}

/// Load a level document from disk.
///
/// On failure the error is logged and returned; callers keep their current
/// in-memory level.
pub fn load_level_file(path: &Path) -> Result<LevelData, String> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
    match LevelData::from_json(&json) {
        Ok(level) => Ok(level),
        Err(e) => {
            log::error!("{}: {}", path.display(), e);
            Err(e)
        }
    }
}

/// Save a level document to disk.
pub fn save_level_file(path: &Path, level: &LevelData) -> Result<(), String> {
    let json = level.to_json()?;
    std::fs::write(path, json).map_err(|e| format!("failed to write {}: {}", path.display(), e))
}

/// Capture the world's current level geometry and authored enemy placements
/// back into a [`LevelData`] document (the editor's save path).
pub fn snapshot_level(world: &mut World) -> LevelData {
    let mut grid_collision: Vec<(i32, i32)> = world
        .resource::<OccupancyGrid>()
        .iter()
        .collect();
    grid_collision.sort_unstable();

    let grid_tiles = world.resource::<TileMap>().to_keyed();

    let walls = world
        .resource::<WallSet>()
        .rects
        .iter()
        .map(|r| (r.x, r.y, r.w, r.h))
        .collect();

    let mut enemies = Vec::new();
    let mut patrols = world.query::<&Patrol>();
    for patrol in patrols.iter(world) {
        enemies.push(EnemySpec::Patrol {
            x: patrol.spawn.x,
            y: patrol.spawn.y,
            path: patrol.path.points.iter().map(|p| (p.x, p.y)).collect(),
            facing: patrol.spawn_facing,
        });
    }
    let mut spotlights = world.query::<&Spotlight>();
    for spotlight in spotlights.iter(world) {
        enemies.push(EnemySpec::Spotlight {
            x: spotlight.spawn.x,
            y: spotlight.spawn.y,
            path: spotlight.path.points.iter().map(|p| (p.x, p.y)).collect(),
            radius: spotlight.radius,
        });
    }
    let mut cameras = world.query::<(&SecurityCamera, &MapPosition)>();
    for (camera, pos) in cameras.iter(world) {
        enemies.push(EnemySpec::SecurityCamera {
            x: pos.pos.x,
            y: pos.pos.y,
            facing: camera.base_facing,
            swivel: camera.swivel,
        });
    }
    let mut zombies = world.query::<&Zombie>();
    for zombie in zombies.iter(world) {
        enemies.push(EnemySpec::Zombie {
            x: zombie.home.x,
            y: zombie.home.y,
            leash: zombie.leash,
        });
    }
    let mut buttons = world.query::<(&Button, &MapPosition)>();
    for (button, pos) in buttons.iter(world) {
        enemies.push(EnemySpec::Button {
            x: pos.pos.x,
            y: pos.pos.y,
            id: button.id.clone(),
        });
    }
    let mut checkpoints = world.query::<(&Checkpoint, &MapPosition)>();
    for (checkpoint, pos) in checkpoints.iter(world) {
        enemies.push(EnemySpec::Checkpoint {
            x: pos.pos.x,
            y: pos.pos.y,
            id: checkpoint.id.clone(),
        });
    }
    let mut boundaries = world.query::<(&CameraBoundary, &MapPosition)>();
    for (boundary, pos) in boundaries.iter(world) {
        enemies.push(EnemySpec::CameraBoundary {
            x: pos.pos.x,
            y: pos.pos.y,
            w: boundary.size.x,
            h: boundary.size.y,
        });
    }

    LevelData {
        grid_collision,
        grid_tiles,
        walls,
        enemies,
    }
}

/// Build the geometry resources described by a level document.
pub fn build_geometry(level: &LevelData, tile_size: f32) -> (OccupancyGrid, WallSet, TileMap) {
    let grid = OccupancyGrid::from_pairs(tile_size, level.grid_collision.iter().copied());
    let walls = WallSet::new(
        level
            .walls
            .iter()
            .map(|&(x, y, w, h)| WallRect::new(x, y, w, h))
            .collect(),
    );
    let tiles = TileMap::from_keyed(&level.grid_tiles);
    (grid, walls, tiles)
}
