//! Decorative tile layers.
//!
//! Tiles are not entities; they live in this resource keyed by world tile
//! coordinate and are emitted straight into the render queue with view
//! culling. Each entry points into the tileset texture and carries a layer
//! index: layers <= 0 draw under actors, layers > 0 draw over them
//! (overhangs).

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;

/// One tile stamped at a world tile coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileRef {
    /// Column of the tile inside the tileset texture.
    pub tx: i32,
    /// Row of the tile inside the tileset texture.
    pub ty: i32,
    /// Layer index; <= 0 under actors, > 0 over actors.
    pub z: i32,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct TileMap {
    pub tiles: FxHashMap<(i32, i32), Vec<TileRef>>,
}

impl TileMap {
    /// Build from the persisted `"x,y" -> [[tx, ty, z], ...]` map; malformed
    /// keys are logged and skipped (content error, not fatal).
    pub fn from_keyed(map: &FxHashMap<String, Vec<(i32, i32, i32)>>) -> Self {
        let mut tiles: FxHashMap<(i32, i32), Vec<TileRef>> = FxHashMap::default();
        for (key, stamps) in map {
            let Some(coord) = parse_tile_key(key) else {
                log::warn!("skipping malformed tile key '{}'", key);
                continue;
            };
            tiles.insert(
                coord,
                stamps
                    .iter()
                    .map(|&(tx, ty, z)| TileRef { tx, ty, z })
                    .collect(),
            );
        }
        Self { tiles }
    }

    /// Inverse of [`TileMap::from_keyed`]: the persisted `"x,y"`-keyed map.
    pub fn to_keyed(&self) -> FxHashMap<String, Vec<(i32, i32, i32)>> {
        self.tiles
            .iter()
            .map(|(&(x, y), stamps)| {
                (
                    format!("{},{}", x, y),
                    stamps.iter().map(|t| (t.tx, t.ty, t.z)).collect(),
                )
            })
            .collect()
    }
}

fn parse_tile_key(key: &str) -> Option<(i32, i32)> {
    let (x, y) = key.split_once(',')?;
    Some((x.trim().parse().ok()?, y.trim().parse().ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyed_roundtrip() {
        let mut keyed: FxHashMap<String, Vec<(i32, i32, i32)>> = FxHashMap::default();
        keyed.insert("2,-3".to_string(), vec![(0, 1, 0), (4, 4, 1)]);
        keyed.insert("0,0".to_string(), vec![(1, 0, 0)]);
        let map = TileMap::from_keyed(&keyed);
        assert_eq!(map.tiles.len(), 2);
        assert_eq!(
            map.tiles[&(2, -3)],
            vec![TileRef { tx: 0, ty: 1, z: 0 }, TileRef { tx: 4, ty: 4, z: 1 }]
        );
        assert_eq!(map.to_keyed(), keyed);
    }

    #[test]
    fn test_malformed_keys_are_skipped() {
        let mut keyed: FxHashMap<String, Vec<(i32, i32, i32)>> = FxHashMap::default();
        keyed.insert("not-a-key".to_string(), vec![(0, 0, 0)]);
        keyed.insert("1,2".to_string(), vec![(0, 0, 0)]);
        let map = TileMap::from_keyed(&keyed);
        assert_eq!(map.tiles.len(), 1);
        assert!(map.tiles.contains_key(&(1, 2)));
    }
}
