//! Small hand-built worlds shared by the router tests.

use mobroute_core::{Bounds, MapId, MiniMap, RawData, RawMap, RawMob, RawPortal, RawSpawn, World};

/// Portal type used for ordinary exits in fixtures.
pub const EXIT: i32 = 2;

#[derive(Default)]
pub struct WorldBuilder {
    raw: RawData,
}

impl WorldBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a raw mob.
    pub fn mob(mut self, id: &str, name: &str) -> Self {
        self.raw.mobs.insert(
            id.into(),
            RawMob {
                id: Some(id.into()),
                name: name.to_owned(),
                ..Default::default()
            },
        );
        self
    }

    /// Declare a map with the given spawns (raw mob ids, repeated for counts).
    pub fn map(mut self, id: &str, spawns: &[&str]) -> Self {
        let entry = self.raw.maps.entry(id.into()).or_insert_with(|| RawMap {
            name: Some(format!("Map {id}")),
            ..Default::default()
        });
        entry.mobs.extend(spawns.iter().map(|s| RawSpawn::new(*s)));
        self
    }

    /// Attach minimap metadata to an already declared map.
    pub fn minimap(mut self, id: &str, bounds: Option<Bounds>) -> Self {
        if let Some(m) = self.raw.maps.get_mut(&MapId::from(id)) {
            m.mini_map = Some(MiniMap {
                width: 200,
                height: 100,
                ..Default::default()
            });
            m.vr_bounds = bounds;
        }
        self
    }

    /// One-way exit portal at `(x, y)` on `from`.
    pub fn portal_at(self, from: &str, to: &str, x: i32, y: i32) -> Self {
        self.raw_portal(from, RawPortal {
            to_map: Some(to.into()),
            x,
            y,
            kind: Some(EXIT),
            unknown_exit: false,
        })
    }

    /// One-way exit portal at the top-left corner of `from`.
    pub fn portal(self, from: &str, to: &str) -> Self {
        self.portal_at(from, to, 0, 0)
    }

    /// Exit portals both ways.
    pub fn link(self, a: &str, b: &str) -> Self {
        self.portal(a, b).portal(b, a)
    }

    pub fn raw_portal(mut self, from: &str, portal: RawPortal) -> Self {
        let entry = self.raw.maps.entry(from.into()).or_insert_with(|| RawMap {
            name: Some(format!("Map {from}")),
            ..Default::default()
        });
        entry.portals.push(portal);
        self
    }

    pub fn raw(self) -> RawData {
        self.raw
    }

    pub fn build(self) -> World {
        World::from_raw(self.raw)
    }
}

/// `A → B → C` with "Slime" only in C.
pub fn linear() -> World {
    WorldBuilder::new()
        .mob("1", "Slime")
        .map("A", &[])
        .map("B", &[])
        .map("C", &["1"])
        .portal_at("A", "B", 790, 300)
        .portal_at("B", "C", 10, 590)
        .build()
}

/// Two disjoint branches from A: `A → B1 → B2` ("Slime" in B2) and
/// `A → C1` ("Ghoul" in C1), with return portals.
pub fn branches() -> World {
    WorldBuilder::new()
        .mob("1", "Slime")
        .mob("2", "Ghoul")
        .map("A", &[])
        .map("B1", &[])
        .map("B2", &["1"])
        .map("C1", &["2"])
        .link("A", "B1")
        .link("B1", "B2")
        .link("A", "C1")
        .build()
}
