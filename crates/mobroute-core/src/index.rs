//! Mob index: one entry per distinct mob name with the maps it spawns in.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ids::{MapId, MobId};
use crate::world::World;

/// All raw mobs sharing one name, with the maps where any of them spawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsolidatedMob {
    /// Lowest raw id carrying this name.
    pub id: MobId,
    pub name: String,
    /// Maps with at least one spawn, deduplicated, in map id order.
    pub locations: Vec<MapId>,
}

/// Name-sorted list of [`ConsolidatedMob`]s. Excludes mobs that spawn nowhere.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MobIndex {
    mobs: Vec<ConsolidatedMob>,
}

impl MobIndex {
    /// Scan every (map, spawn) pair of `world` once.
    ///
    /// The result depends only on `world`, so calling this twice on the
    /// same world yields identical indexes.
    pub fn consolidate(world: &World) -> Self {
        let mut by_name: BTreeMap<&str, ConsolidatedMob> = BTreeMap::new();

        // Mobs iterate in id order, so the first id seen per name is the lowest.
        for mob in world.mobs() {
            if mob.name.is_empty() {
                continue;
            }
            by_name
                .entry(mob.name.as_str())
                .or_insert_with(|| ConsolidatedMob {
                    id: mob.id.clone(),
                    name: mob.name.clone(),
                    locations: Vec::new(),
                });
        }

        for map in world.maps() {
            for spawn in &map.spawns {
                let Some(name) = world.mob_name(spawn) else {
                    continue;
                };
                if let Some(entry) = by_name.get_mut(name) {
                    // Maps are visited in order, so only the tail can repeat.
                    if entry.locations.last() != Some(&map.id) {
                        entry.locations.push(map.id.clone());
                    }
                }
            }
        }

        let mobs: Vec<ConsolidatedMob> = by_name
            .into_values()
            .filter(|m| !m.locations.is_empty())
            .collect();
        log::debug!("mob index: {} named mobs with locations", mobs.len());
        Self { mobs }
    }

    /// Every consolidated mob, sorted by name.
    #[inline]
    pub fn all(&self) -> &[ConsolidatedMob] {
        &self.mobs
    }

    pub fn get(&self, name: &str) -> Option<&ConsolidatedMob> {
        self.mobs
            .binary_search_by(|m| m.name.as_str().cmp(name))
            .ok()
            .map(|i| &self.mobs[i])
    }

    /// Maps where `name` spawns; empty for unknown names.
    pub fn locations(&self, name: &str) -> &[MapId] {
        self.get(name)
            .map(|m| m.locations.as_slice())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.mobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mobs.is_empty()
    }
}
