//! The immutable world model: maps, portals and mobs.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::geom::{Bounds, Point};
use crate::ids::{MapId, MobId};
use crate::records::{MiniMap, RawData, RawMap, RawMob, SPAWN_POINT};

/// Name reported for maps that are missing or unnamed.
pub const UNKNOWN_MAP_NAME: &str = "Unknown";

// ---------------------------------------------------------------------------
// Build options
// ---------------------------------------------------------------------------

/// Adjustments applied while turning [`RawData`] into a [`World`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildOptions {
    /// Maps dropped entirely: never entered, never a mob location.
    pub excluded_maps: BTreeSet<MapId>,
    /// Extra spawns the exported data is missing.
    pub spawn_patches: Vec<SpawnPatch>,
}

/// Add one spawn of each of `mobs` to each of `maps`, unless that mob id
/// already spawns there.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SpawnPatch {
    pub mobs: Vec<MobId>,
    pub maps: Vec<MapId>,
}

// ---------------------------------------------------------------------------
// Nodes
// ---------------------------------------------------------------------------

/// An outgoing portal of a map.
#[derive(Clone, Debug, PartialEq)]
pub struct Portal {
    pub to: Option<MapId>,
    pub pos: Point,
    pub kind: Option<i32>,
    pub unknown_exit: bool,
}

impl Portal {
    /// Whether the portal itself qualifies as an exit. The destination must
    /// still resolve, see [`World::destination`].
    #[inline]
    pub fn is_exit(&self) -> bool {
        self.to.is_some() && self.kind != Some(SPAWN_POINT) && !self.unknown_exit
    }
}

/// A map in the world graph.
#[derive(Clone, Debug)]
pub struct MapNode {
    pub id: MapId,
    pub name: Option<String>,
    pub spawns: Vec<MobId>,
    pub portals: Vec<Portal>,
    pub minimap: Option<MiniMap>,
    pub bounds: Option<Bounds>,
}

impl MapNode {
    fn from_raw(id: MapId, raw: RawMap) -> Self {
        Self {
            id,
            name: raw.name.filter(|n| !n.is_empty()),
            spawns: raw.mobs.into_iter().filter_map(|s| s.id).collect(),
            portals: raw
                .portals
                .into_iter()
                .map(|p| Portal {
                    to: p.to_map,
                    pos: Point::new(p.x, p.y),
                    kind: p.kind,
                    unknown_exit: p.unknown_exit,
                })
                .collect(),
            minimap: raw.mini_map,
            bounds: raw.vr_bounds,
        }
    }

    /// Display name, [`UNKNOWN_MAP_NAME`] when the data has none.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNKNOWN_MAP_NAME)
    }
}

/// A raw mob reduced to what routing needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mob {
    pub id: MobId,
    pub name: String,
    pub level: Option<i32>,
}

impl Mob {
    fn from_raw(key: MobId, raw: RawMob) -> Self {
        Self {
            id: raw.id.unwrap_or(key),
            name: raw.name,
            level: raw.meta.level,
        }
    }
}

// ---------------------------------------------------------------------------
// World
// ---------------------------------------------------------------------------

/// Read-only lookups over maps and mobs. Built once, never mutated.
#[derive(Clone, Debug, Default)]
pub struct World {
    maps: BTreeMap<MapId, MapNode>,
    mobs: BTreeMap<MobId, Mob>,
}

impl World {
    /// Build a world with default options.
    pub fn from_raw(raw: RawData) -> Self {
        Self::build(raw, &BuildOptions::default())
    }

    /// Build a world, applying exclusions and spawn patches.
    pub fn build(raw: RawData, opts: &BuildOptions) -> Self {
        let mobs: BTreeMap<MobId, Mob> = raw
            .mobs
            .into_iter()
            .map(|(k, m)| (k.clone(), Mob::from_raw(k, m)))
            .collect();

        let mut maps: BTreeMap<MapId, MapNode> = raw
            .maps
            .into_iter()
            .filter(|(id, _)| !opts.excluded_maps.contains(id))
            .map(|(id, m)| (id.clone(), MapNode::from_raw(id, m)))
            .collect();

        for patch in &opts.spawn_patches {
            for map_id in &patch.maps {
                let Some(node) = maps.get_mut(map_id) else {
                    log::warn!("spawn patch: map {map_id} not found, skipped");
                    continue;
                };
                for mob_id in &patch.mobs {
                    if !mobs.contains_key(mob_id) {
                        log::warn!("spawn patch: mob {mob_id} not found, skipped");
                        continue;
                    }
                    if !node.spawns.contains(mob_id) {
                        node.spawns.push(mob_id.clone());
                    }
                }
            }
        }

        log::debug!(
            "world built: {} maps, {} mobs ({} excluded)",
            maps.len(),
            mobs.len(),
            opts.excluded_maps.len()
        );
        Self { maps, mobs }
    }

    #[inline]
    pub fn map(&self, id: &MapId) -> Option<&MapNode> {
        self.maps.get(id)
    }

    #[inline]
    pub fn mob(&self, id: &MobId) -> Option<&Mob> {
        self.mobs.get(id)
    }

    #[inline]
    pub fn contains(&self, id: &MapId) -> bool {
        self.maps.contains_key(id)
    }

    /// All maps in id order.
    pub fn maps(&self) -> impl Iterator<Item = &MapNode> {
        self.maps.values()
    }

    /// All mobs in id order.
    pub fn mobs(&self) -> impl Iterator<Item = &Mob> {
        self.mobs.values()
    }

    pub fn map_count(&self) -> usize {
        self.maps.len()
    }

    pub fn mob_count(&self) -> usize {
        self.mobs.len()
    }

    /// Display name of a map, [`UNKNOWN_MAP_NAME`] if absent.
    pub fn map_name(&self, id: &MapId) -> &str {
        self.maps.get(id).map_or(UNKNOWN_MAP_NAME, MapNode::name)
    }

    /// Name of the mob a spawn entry refers to, if it resolves to a named mob.
    pub fn mob_name(&self, id: &MobId) -> Option<&str> {
        self.mobs
            .get(id)
            .map(|m| m.name.as_str())
            .filter(|n| !n.is_empty())
    }

    /// Mob name → number of spawns in a map. Empty for unknown maps.
    pub fn mobs_in_map(&self, id: &MapId) -> BTreeMap<String, u32> {
        let mut counts = BTreeMap::new();
        let Some(node) = self.maps.get(id) else {
            return counts;
        };
        for spawn in &node.spawns {
            if let Some(name) = self.mob_name(spawn) {
                *counts.entry(name.to_owned()).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Whether any spawn of `map` resolves to `mob_name`.
    pub fn spawns_in(&self, map: &MapId, mob_name: &str) -> bool {
        self.maps.get(map).is_some_and(|node| {
            node.spawns
                .iter()
                .any(|s| self.mob_name(s) == Some(mob_name))
        })
    }

    /// The map a portal leads to, or `None` when the portal is not
    /// traversable (spawn point, unknown exit, unresolvable target).
    pub fn destination(&self, portal: &Portal) -> Option<&MapNode> {
        if !portal.is_exit() {
            return None;
        }
        portal.to.as_ref().and_then(|to| self.maps.get(to))
    }

    /// Traversable portals of `id` with their destinations, in portal order.
    pub fn exits<'a>(
        &'a self,
        id: &MapId,
    ) -> impl Iterator<Item = (&'a Portal, &'a MapNode)> + use<'a> {
        self.maps
            .get(id)
            .into_iter()
            .flat_map(|node| node.portals.iter())
            .filter_map(move |p| self.destination(p).map(|dest| (p, dest)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw() -> RawData {
        serde_json::from_value(json!({
            "maps": {
                "1": {
                    "name": "Bent Tree",
                    "mobs": [{"id": 10}, {"id": 10}, {"id": 11}, {"id": 99}, {}],
                    "portals": [
                        {"toMap": 2, "x": 10, "y": 10, "type": 2},
                        {"toMap": 2, "x": 0, "y": 0, "type": 0},
                        {"toMap": 3, "x": 0, "y": 0, "type": 2, "unknownExit": true},
                        {"toMap": 999999999, "x": 0, "y": 0, "type": 2},
                        {"x": 0, "y": 0, "type": 2}
                    ]
                },
                "2": {"name": "", "mobs": [{"id": 12}]},
                "3": {"name": "Dead Man's Gorge"}
            },
            "mobs": {
                "10": {"id": 10, "name": "Phantom Tree", "meta": {"level": 135}},
                "11": {"id": 11, "name": "Elderwraith", "meta": {"level": 136}},
                "12": {"id": 12, "name": "Phantom Tree", "meta": {"level": 140}},
                "13": {"id": 13, "name": "Krakian Spirit", "meta": {"level": 150}}
            }
        }))
        .unwrap()
    }

    #[test]
    fn mobs_in_map_counts_by_name() {
        let w = World::from_raw(raw());
        let counts = w.mobs_in_map(&"1".into());
        assert_eq!(counts.len(), 2);
        assert_eq!(counts["Phantom Tree"], 2);
        assert_eq!(counts["Elderwraith"], 1);
        assert!(w.mobs_in_map(&"404".into()).is_empty());
        assert!(w.spawns_in(&"2".into(), "Phantom Tree"));
        assert!(!w.spawns_in(&"2".into(), "Elderwraith"));
    }

    #[test]
    fn map_names() {
        let w = World::from_raw(raw());
        assert_eq!(w.map_name(&"1".into()), "Bent Tree");
        assert_eq!(w.map_name(&"2".into()), UNKNOWN_MAP_NAME);
        assert_eq!(w.map_name(&"404".into()), UNKNOWN_MAP_NAME);
    }

    #[test]
    fn only_real_exits_are_traversable() {
        let w = World::from_raw(raw());
        let exits: Vec<_> = w.exits(&"1".into()).map(|(p, d)| (p.pos, d.id.clone())).collect();
        assert_eq!(exits, vec![(Point::new(10, 10), MapId::from("2"))]);
        assert_eq!(w.exits(&"404".into()).count(), 0);
    }

    #[test]
    fn excluded_maps_are_dropped() {
        let opts = BuildOptions {
            excluded_maps: ["2".into()].into_iter().collect(),
            ..Default::default()
        };
        let w = World::build(raw(), &opts);
        assert!(!w.contains(&"2".into()));
        assert_eq!(w.exits(&"1".into()).count(), 0);
    }

    #[test]
    fn spawn_patches_add_missing_spawns_once() {
        let opts = BuildOptions {
            spawn_patches: vec![SpawnPatch {
                mobs: vec!["13".into(), "10".into(), "404".into()],
                maps: vec!["1".into(), "3".into(), "405".into()],
            }],
            ..Default::default()
        };
        let w = World::build(raw(), &opts);
        let counts = w.mobs_in_map(&"1".into());
        assert_eq!(counts["Krakian Spirit"], 1);
        assert_eq!(counts["Phantom Tree"], 2);
        let counts = w.mobs_in_map(&"3".into());
        assert_eq!(counts["Krakian Spirit"], 1);
        assert_eq!(counts["Phantom Tree"], 1);
    }
}
