use std::collections::BTreeMap;

use mobroute_core::{Bounds, MapId, MiniMap, Point};
use serde::{Deserialize, Serialize};

/// Minimap metadata copied onto a step for display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MinimapInfo {
    pub width: i32,
    pub height: i32,
    pub center_x: i32,
    pub center_y: i32,
    pub magnification: Option<f64>,
    /// `data:` URL of the minimap image, when the data embeds one.
    pub image: Option<String>,
    /// World rectangle the image covers; without it no overlay is drawn.
    pub bounds: Option<Bounds>,
}

impl MinimapInfo {
    pub fn new(mm: &MiniMap, bounds: Option<Bounds>) -> Self {
        Self {
            width: mm.width,
            height: mm.height,
            center_x: mm.center_x,
            center_y: mm.center_y,
            magnification: mm.magnification,
            image: mm.data_url(),
            bounds,
        }
    }
}

/// One hop of a route.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathStep {
    pub map_id: MapId,
    pub map_name: String,
    /// Where the portal into this map sits on the previous map. `None` for
    /// the first step.
    pub direction: Option<String>,
    /// World coordinates of that portal on the previous map.
    pub portal: Option<Point>,
    pub minimap: Option<MinimapInfo>,
    /// Mob name → spawn count on this map.
    pub mobs: BTreeMap<String, u32>,
}

/// A route from a start map to a map where `target_mob` spawns.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Path {
    pub steps: Vec<PathStep>,
    pub target_mob: String,
    /// Maps of this path where the target was found (the terminal map).
    pub mob_locations: Vec<MapId>,
    /// Ranking score, set by the single-target router.
    pub score: Option<f64>,
}

impl Path {
    /// Number of steps, counting the start map.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn start(&self) -> Option<&PathStep> {
        self.steps.first()
    }

    pub fn terminal(&self) -> Option<&PathStep> {
        self.steps.last()
    }

    /// Map ids in order.
    pub fn map_ids(&self) -> impl Iterator<Item = &MapId> {
        self.steps.iter().map(|s| &s.map_id)
    }
}
