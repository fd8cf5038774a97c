use std::collections::BTreeMap;

use mobroute_core::MapId;
use serde::{Deserialize, Serialize};

use crate::direction::{REFERENCE_HEIGHT, REFERENCE_WIDTH};

/// Weights of the single-target ranking score.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    /// Per step of the path.
    pub step: f64,
    /// Per target mob spawn along the path.
    pub target: f64,
    /// Per other mob spawn along the path.
    pub other: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            step: -5.0,
            target: 2.0,
            other: 0.5,
        }
    }
}

/// Tunables of the [`Router`](crate::Router). Every field has a default.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Longest single-target candidate, in steps (start included).
    pub max_steps_single: usize,
    /// Longest point-to-point leg, in steps (start included).
    pub max_steps_leg: usize,
    /// Number of single-target candidates returned.
    pub max_results: usize,
    /// Map size used to label portal directions.
    pub reference_width: i32,
    pub reference_height: i32,
    pub weights: ScoreWeights,
    /// Designer-curated routes per mob name: each is a list of map ids from
    /// a start map to a map where the mob spawns.
    pub pins: BTreeMap<String, Vec<Vec<MapId>>>,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            max_steps_single: 8,
            max_steps_leg: 30,
            max_results: 5,
            reference_width: REFERENCE_WIDTH,
            reference_height: REFERENCE_HEIGHT,
            weights: ScoreWeights::default(),
            pins: BTreeMap::new(),
        }
    }
}
