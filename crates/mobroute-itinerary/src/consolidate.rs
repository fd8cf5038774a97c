//! Merge the steps of one or more paths into one stop per map.

use std::collections::{BTreeMap, HashMap};

use mobroute_core::{MapId, Point};
use mobroute_paths::{MinimapInfo, Path};
use serde::{Deserialize, Serialize};

use crate::overlay::Overlay;
use crate::palette::{Rgb, marker_color};

/// How mob counts of a map seen more than once are merged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TallyPolicy {
    /// Keep the largest count seen per mob.
    #[default]
    Max,
    /// Add the counts of every occurrence.
    Sum,
}

impl TallyPolicy {
    #[inline]
    fn merge(self, into: &mut u32, count: u32) {
        match self {
            Self::Max => *into = (*into).max(count),
            Self::Sum => *into += count,
        }
    }
}

/// A portal taken out of a stop toward the next map of some path.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Exit {
    pub direction: String,
    pub toward: MapId,
    /// World coordinates of the portal on this stop's map.
    pub portal: Option<Point>,
    /// Marker position on this stop's minimap.
    pub overlay: Option<Overlay>,
    /// `overlay` in minimap image pixels.
    pub marker: Option<(f64, f64)>,
    pub color: Rgb,
}

/// Everything the itinerary shows for one map.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    pub map_id: MapId,
    pub map_name: String,
    pub mobs: BTreeMap<String, u32>,
    /// Target mobs of the paths that end here.
    pub targets: Vec<String>,
    pub exits: Vec<Exit>,
    pub minimap: Option<MinimapInfo>,
}

impl Stop {
    fn new(step: &mobroute_paths::PathStep) -> Self {
        Self {
            map_id: step.map_id.clone(),
            map_name: step.map_name.clone(),
            mobs: BTreeMap::new(),
            targets: Vec::new(),
            exits: Vec::new(),
            minimap: step.minimap.clone(),
        }
    }
}

/// One [`Stop`] per map across `paths`, in order of first appearance.
///
/// Steps without minimap data or portal coordinates are fine; their stops
/// or exits simply carry no overlay.
pub fn consolidate(paths: &[Path], policy: TallyPolicy) -> Vec<Stop> {
    let mut stops: Vec<Stop> = Vec::new();
    let mut slots: HashMap<MapId, usize> = HashMap::new();

    for path in paths {
        let last = path.steps.len().saturating_sub(1);
        for (i, step) in path.steps.iter().enumerate() {
            let slot = *slots.entry(step.map_id.clone()).or_insert_with(|| {
                stops.push(Stop::new(step));
                stops.len() - 1
            });
            let stop = &mut stops[slot];

            if stop.minimap.is_none() {
                stop.minimap = step.minimap.clone();
            }
            for (name, &count) in &step.mobs {
                policy.merge(stop.mobs.entry(name.clone()).or_insert(0), count);
            }
            if i == last && !stop.targets.contains(&path.target_mob) {
                stop.targets.push(path.target_mob.clone());
            }

            let Some(next) = path.steps.get(i + 1) else {
                continue;
            };
            let Some(direction) = next.direction.as_ref() else {
                continue;
            };
            let seen = stop
                .exits
                .iter()
                .any(|e| e.direction == *direction && e.toward == next.map_id);
            if !seen {
                let color = marker_color(direction, stop.exits.len());
                stop.exits.push(Exit {
                    direction: direction.clone(),
                    toward: next.map_id.clone(),
                    portal: next.portal,
                    overlay: None,
                    marker: None,
                    color,
                });
            }
        }
    }

    for stop in &mut stops {
        let minimap = stop.minimap.as_ref();
        for exit in &mut stop.exits {
            exit.overlay = exit.portal.and_then(|p| Overlay::project(minimap, p));
            exit.marker = exit
                .overlay
                .zip(minimap)
                .map(|(o, mm)| o.scaled(f64::from(mm.width), f64::from(mm.height)));
        }
    }

    log::debug!("consolidated {} path(s) into {} stop(s)", paths.len(), stops.len());
    stops
}
