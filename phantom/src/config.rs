//! Front end configuration, read from an optional JSON file.

use std::fs;
use std::path::Path;

use mobroute_core::{BuildOptions, MapId, MobId, SpawnPatch};
use mobroute_itinerary::TallyPolicy;
use mobroute_paths::RouterConfig;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Bent Tree, the entrance of Phantom Forest.
pub const DEFAULT_START: &str = "610010000";

/// Dead Man's Gorge.
const GORGE: &str = "610010004";

const PHANTOM_TREE_MAPS: [u64; 13] = [
    610010001, 610010003, 610010200, 610010201, 610010202, 610010005, 610010012, 610010013,
    610010100, 610010101, 610010102, 610010103, 610010104,
];

const KRAKIAN_SPIRITS: [u64; 4] = [9601331, 9601332, 9601264, 9601263];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub build: BuildOptions,
    pub router: RouterConfig,
    pub tally: TallyPolicy,
    pub start: Option<MapId>,
}

impl Default for Config {
    /// Phantom Forest presets: the gorge is left out and Krakian Spirits,
    /// which the exported data lacks, spawn wherever Phantom Trees do.
    fn default() -> Self {
        let build = BuildOptions {
            excluded_maps: [MapId::from(GORGE)].into_iter().collect(),
            spawn_patches: vec![SpawnPatch {
                mobs: KRAKIAN_SPIRITS.iter().copied().map(MobId::from).collect(),
                maps: PHANTOM_TREE_MAPS.iter().copied().map(MapId::from).collect(),
            }],
        };
        Self {
            build,
            router: RouterConfig::default(),
            tally: TallyPolicy::default(),
            start: None,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, Error> {
        let text = fs::read_to_string(path).map_err(|source| Error::ConfigIo {
            path: path.to_owned(),
            source,
        })?;
        let config = serde_json::from_str(&text).map_err(|source| Error::Config {
            path: path.to_owned(),
            source,
        })?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// `path` if given, the presets otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, Error> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    /// Where routes start when the command line does not say.
    pub fn start_map(&self) -> MapId {
        self.start.clone().unwrap_or_else(|| MapId::from(DEFAULT_START))
    }
}
