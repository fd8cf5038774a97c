use mobroute_core::MapId;

use crate::router::Router;
use crate::search::bfs_first;
use crate::step::PathStep;

impl Router {
    /// Fewest-steps route from `from` to `to`, at most `max_steps_leg` maps
    /// long.
    ///
    /// Returns `[from]` when both are the same map, and an empty list when
    /// `from` is unknown or `to` is out of reach.
    pub fn find_shortest_path(&self, from: &MapId, to: &MapId) -> Vec<PathStep> {
        match bfs_first(&*self.world, from, to, self.config.max_steps_leg) {
            Some(trail) => self.make_steps(&trail),
            None => {
                log::debug!("no route from {from} to {to}");
                Vec::new()
            }
        }
    }
}
