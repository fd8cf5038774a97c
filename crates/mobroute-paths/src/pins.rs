//! Designer-pinned routes.
//!
//! Some mobs have a known-good route that the generic search ranks poorly
//! (for instance a longer walk through dense spawns). [`RouterConfig::pins`]
//! lists such routes per mob name; the single-target router puts every valid
//! pin for the current start ahead of its searched candidates.
//!
//! [`RouterConfig::pins`]: crate::RouterConfig::pins

use mobroute_core::MapId;

use crate::router::Router;
use crate::search::{Trail, TrailStep};

impl Router {
    /// Valid pinned trails for `mob` that begin at `start`, in config order.
    pub(crate) fn pinned_trails(&self, start: &MapId, mob: &str) -> Vec<Trail> {
        let Some(routes) = self.config.pins.get(mob) else {
            return Vec::new();
        };
        routes
            .iter()
            .filter(|maps| maps.first() == Some(start))
            .filter_map(|maps| self.resolve_pin(maps, mob))
            .collect()
    }

    /// Turn a list of map ids into a trail, checking every hop against the
    /// world. Returns `None` (and logs why) when the pin is unusable.
    fn resolve_pin(&self, maps: &[MapId], mob: &str) -> Option<Trail> {
        let first = maps.first()?;
        if !self.world.contains(first) {
            log::warn!("pin for {mob:?}: start map {first} not in world");
            return None;
        }

        let mut trail = vec![TrailStep {
            map: first.clone(),
            portal: None,
        }];
        for pair in maps.windows(2) {
            let (from, to) = (&pair[0], &pair[1]);
            let Some((portal, _)) = self.world.exits(from).find(|(_, dest)| dest.id == *to) else {
                log::warn!("pin for {mob:?}: no traversable portal {from} -> {to}");
                return None;
            };
            trail.push(TrailStep {
                map: to.clone(),
                portal: Some(portal.pos),
            });
        }

        let last = &trail[trail.len() - 1].map;
        if !self.world.spawns_in(last, mob) {
            log::warn!("pin for {mob:?}: {mob} does not spawn in {last}");
            return None;
        }
        Some(trail)
    }
}
