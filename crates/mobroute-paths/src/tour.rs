//! Multi-target tours: visit several mobs, nearest first.
//!
//! This is a greedy nearest-next heuristic, not an optimal tour. Each round
//! picks the closest remaining mob from the current position, so an early
//! cheap leg can force a long one later.

use mobroute_core::MapId;

use crate::router::Router;
use crate::search::{Trail, bfs_first};
use crate::step::Path;

struct Pick<'a> {
    slot: usize,
    mob: &'a str,
    trail: Trail,
}

impl Router {
    /// One leg per reachable mob, in visiting order.
    ///
    /// Each round runs a point-to-point search from the current map to every
    /// location of every unvisited mob and keeps the strictly shortest route;
    /// on ties the first one found wins, which follows the order of `mobs`
    /// and then map id order. That tie-break is incidental, not a guarantee.
    /// Every leg starts where the previous one ended. When no remaining mob
    /// is reachable the legs found so far are returned.
    pub fn find_path_to_multiple_mobs<S: AsRef<str>>(
        &self,
        start: &MapId,
        mobs: &[S],
    ) -> Vec<Path> {
        let mut unvisited: Vec<&str> = Vec::with_capacity(mobs.len());
        for m in mobs {
            let m = m.as_ref();
            if !unvisited.contains(&m) {
                unvisited.push(m);
            }
        }

        let world = &*self.world;
        let mut legs = Vec::new();
        let mut current = start.clone();

        while !unvisited.is_empty() {
            let mut best: Option<Pick<'_>> = None;
            for (slot, &mob) in unvisited.iter().enumerate() {
                for loc in self.index.locations(mob) {
                    let leg = bfs_first(world, &current, loc, self.config.max_steps_leg);
                    let Some(trail) = leg else {
                        continue;
                    };
                    if best.as_ref().is_none_or(|b| trail.len() < b.trail.len()) {
                        best = Some(Pick { slot, mob, trail });
                    }
                }
            }

            let Some(pick) = best else {
                log::debug!("no route from {current} to remaining mobs {unvisited:?}");
                break;
            };
            log::debug!(
                "leg {}: {} in {} steps",
                legs.len() + 1,
                pick.mob,
                pick.trail.len()
            );
            let path = self.make_path(&pick.trail, pick.mob);
            if let Some(end) = pick.trail.last() {
                current = end.map.clone();
            }
            legs.push(path);
            unvisited.remove(pick.slot);
        }
        legs
    }
}

#[cfg(test)]
mod tests {
    use crate::config::RouterConfig;
    use crate::fixtures::{WorldBuilder, branches};
    use crate::router::Router;
    use crate::step::Path;
    use mobroute_core::MapId;

    fn ids(p: &Path) -> Vec<&str> {
        p.map_ids().map(MapId::as_str).collect()
    }

    #[test]
    fn disjoint_branches_chain_legs() {
        let r = Router::new(branches(), RouterConfig::default());
        let legs = r.find_path_to_multiple_mobs(&"A".into(), &["Slime", "Ghoul"]);
        assert_eq!(legs.len(), 2);
        // Ghoul is nearer (A → C1), so it goes first.
        assert_eq!(legs[0].target_mob, "Ghoul");
        assert_eq!(ids(&legs[0]), ["A", "C1"]);
        assert_eq!(legs[1].target_mob, "Slime");
        assert_eq!(ids(&legs[1]), ["C1", "A", "B1", "B2"]);
        assert_eq!(legs[1].steps[0].map_id, *legs[0].mob_locations.last().unwrap());
        assert!(legs.iter().all(|l| l.steps[0].direction.is_none()));
    }

    #[test]
    fn empty_request_gives_nothing() {
        let r = Router::new(branches(), RouterConfig::default());
        let none: [&str; 0] = [];
        assert!(r.find_path_to_multiple_mobs(&"A".into(), &none).is_empty());
    }

    #[test]
    fn unreachable_mobs_give_partial_result() {
        let r = Router::new(branches(), RouterConfig::default());
        let legs = r.find_path_to_multiple_mobs(&"A".into(), &["Ghost", "Slime", "Slime"]);
        assert_eq!(legs.len(), 1);
        assert_eq!(legs[0].target_mob, "Slime");
    }

    #[test]
    fn mob_on_current_map_is_a_one_step_leg() {
        let r = Router::new(branches(), RouterConfig::default());
        let legs = r.find_path_to_multiple_mobs(&"C1".into(), &["Ghoul"]);
        assert_eq!(legs.len(), 1);
        assert_eq!(ids(&legs[0]), ["C1"]);
    }

    #[test]
    fn ties_go_to_first_requested_mob() {
        let w = WorldBuilder::new()
            .mob("1", "Slime")
            .mob("2", "Ghoul")
            .map("A", &[])
            .map("S", &["1"])
            .map("G", &["2"])
            .portal("A", "S")
            .portal("A", "G")
            .build();
        let r = Router::new(w, RouterConfig::default());
        let legs = r.find_path_to_multiple_mobs(&"A".into(), &["Ghoul", "Slime"]);
        assert_eq!(legs[0].target_mob, "Ghoul");
        // G has no exits, so Slime is unreachable afterwards.
        assert_eq!(legs.len(), 1);
    }

    #[test]
    fn legs_are_joined_by_exits() {
        let w = branches();
        let r = Router::new(w.clone(), RouterConfig::default());
        let legs = r.find_path_to_multiple_mobs(&"B2".into(), &["Ghoul", "Slime"]);
        assert_eq!(legs.len(), 2);
        for leg in &legs {
            assert!(leg.steps[0].direction.is_none());
            for pair in leg.steps.windows(2) {
                assert!(pair[1].direction.is_some());
                let joined = w.exits(&pair[0].map_id).any(|(portal, dest)| {
                    dest.id == pair[1].map_id && Some(portal.pos) == pair[1].portal
                });
                assert!(joined, "{} -> {}", pair[0].map_id, pair[1].map_id);
            }
        }
        assert_eq!(legs[1].steps[0].map_id, legs[0].steps.last().unwrap().map_id);
    }

    #[test]
    fn legs_are_capped_at_thirty_steps() {
        let mut b = WorldBuilder::new().mob("1", "Near").mob("2", "Far");
        for i in 0..31 {
            let spawns: &[&str] = match i {
                29 => &["1"],
                30 => &["2"],
                _ => &[],
            };
            b = b.map(&format!("M{i:02}"), spawns);
        }
        for i in 0..30 {
            b = b.portal(&format!("M{i:02}"), &format!("M{:02}", i + 1));
        }
        let r = Router::new(b.build(), RouterConfig::default());

        let near = r.find_path_to_multiple_mobs(&"M00".into(), &["Near"]);
        assert_eq!(near.len(), 1);
        assert_eq!(near[0].len(), 30);
        assert!(r.find_path_to_multiple_mobs(&"M00".into(), &["Far"]).is_empty());
    }

    #[test]
    fn unknown_start_gives_nothing() {
        let r = Router::new(branches(), RouterConfig::default());
        assert!(r.find_path_to_multiple_mobs(&"nowhere".into(), &["Slime"]).is_empty());
    }
}
