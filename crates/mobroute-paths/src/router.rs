use std::sync::Arc;

use mobroute_core::{ConsolidatedMob, MapId, MobIndex, World};

use crate::config::RouterConfig;
use crate::direction::portal_direction;
use crate::search::{Trail, TrailStep};
use crate::step::{MinimapInfo, Path, PathStep};

/// Route queries over one immutable [`World`] and its [`MobIndex`].
///
/// A `Router` never mutates its data; every query allocates its own search
/// state, so one router can serve concurrent queries from several threads.
#[derive(Clone, Debug)]
pub struct Router {
    pub(crate) world: Arc<World>,
    pub(crate) index: Arc<MobIndex>,
    pub(crate) config: RouterConfig,
}

impl Router {
    /// Build the mob index for `world` and wrap both.
    pub fn new(world: World, config: RouterConfig) -> Self {
        let index = MobIndex::consolidate(&world);
        Self::with_index(Arc::new(world), Arc::new(index), config)
    }

    /// Use an already built index. `index` must come from `world`.
    pub fn with_index(world: Arc<World>, index: Arc<MobIndex>, config: RouterConfig) -> Self {
        Self {
            world,
            index,
            config,
        }
    }

    #[inline]
    pub fn world(&self) -> &World {
        &self.world
    }

    #[inline]
    pub fn index(&self) -> &MobIndex {
        &self.index
    }

    #[inline]
    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Every mob that spawns somewhere, sorted by name.
    pub fn all_mobs(&self) -> &[ConsolidatedMob] {
        self.index.all()
    }

    /// Display name of a map, `"Unknown"` if absent.
    pub fn map_name(&self, id: &MapId) -> &str {
        self.world.map_name(id)
    }

    pub(crate) fn direction_label(&self, x: i32, y: i32) -> String {
        portal_direction(
            x,
            y,
            self.config.reference_width,
            self.config.reference_height,
        )
    }

    /// Snapshot a map into a display step.
    pub(crate) fn make_step(&self, ts: &TrailStep) -> PathStep {
        let node = self.world.map(&ts.map);
        PathStep {
            map_id: ts.map.clone(),
            map_name: self.world.map_name(&ts.map).to_owned(),
            direction: ts.portal.map(|p| self.direction_label(p.x, p.y)),
            portal: ts.portal,
            minimap: node.and_then(|n| {
                n.minimap
                    .as_ref()
                    .map(|mm| MinimapInfo::new(mm, n.bounds))
            }),
            mobs: self.world.mobs_in_map(&ts.map),
        }
    }

    pub(crate) fn make_steps(&self, trail: &Trail) -> Vec<PathStep> {
        trail.iter().map(|ts| self.make_step(ts)).collect()
    }

    /// Wrap a trail ending where `mob` spawns into a [`Path`].
    pub(crate) fn make_path(&self, trail: &Trail, mob: &str) -> Path {
        Path {
            steps: self.make_steps(trail),
            target_mob: mob.to_owned(),
            mob_locations: trail.last().map(|t| t.map.clone()).into_iter().collect(),
            score: None,
        }
    }
}
