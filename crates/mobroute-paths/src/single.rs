//! Single-target routing: ranked candidate routes to one mob.

use std::cmp::Ordering;

use mobroute_core::MapId;

use crate::config::ScoreWeights;
use crate::router::Router;
use crate::search::{Trail, bfs_collect};
use crate::step::Path;

/// A searched trail with its ranking key.
struct Candidate {
    trail: Trail,
    score: f64,
}

impl Router {
    /// Up to `max_results` routes from `start` to maps where `mob` spawns.
    ///
    /// Routes are ordered by ascending step count, then by descending score
    /// (see [`score_counts`]); equal keys keep discovery order. Valid pins for
    /// `mob` come first. Unknown mobs, unknown starts and unreachable targets
    /// all give an empty list.
    pub fn find_paths_to_mob(&self, start: &MapId, mob: &str) -> Vec<Path> {
        if self.index.locations(mob).is_empty() {
            log::debug!("no maps contain mob {mob:?}");
            return Vec::new();
        }

        let world = &*self.world;
        let trails = bfs_collect(world, start, self.config.max_steps_single, |m| {
            world.spawns_in(m, mob)
        });

        let mut candidates: Vec<Candidate> = trails
            .into_iter()
            .map(|trail| {
                let score = self.trail_score(&trail, mob);
                Candidate { trail, score }
            })
            .collect();
        // Stable: ties keep discovery order.
        candidates.sort_by(|a, b| {
            a.trail
                .len()
                .cmp(&b.trail.len())
                .then_with(|| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal))
        });

        let mut out: Vec<Path> = Vec::with_capacity(self.config.max_results);
        for trail in self.pinned_trails(start, mob) {
            let score = self.trail_score(&trail, mob);
            let mut path = self.make_path(&trail, mob);
            path.score = Some(score);
            out.push(path);
        }
        let pinned = out.len();

        for c in candidates {
            if out.len() >= self.config.max_results {
                break;
            }
            let duplicate = out[..pinned]
                .iter()
                .any(|p| p.map_ids().eq(c.trail.iter().map(|t| &t.map)));
            if duplicate {
                continue;
            }
            let mut path = self.make_path(&c.trail, mob);
            path.score = Some(c.score);
            out.push(path);
        }
        out.truncate(self.config.max_results);

        log::debug!("{} route(s) from {start} to {mob:?}", out.len());
        out
    }

    /// Score a trail from the spawn tallies of every map on it.
    fn trail_score(&self, trail: &Trail, mob: &str) -> f64 {
        let mut target = 0u32;
        let mut other = 0u32;
        for step in trail {
            for (name, count) in self.world.mobs_in_map(&step.map) {
                if name == mob {
                    target += count;
                } else {
                    other += count;
                }
            }
        }
        score_counts(&self.config.weights, trail.len(), target, other)
    }
}

/// `step × steps + target × target_count + other × other_count`.
///
/// With the default weights each extra map costs as much as two and a half
/// target spawns, so shorter routes dominate.
pub fn score_counts(w: &ScoreWeights, steps: usize, target: u32, other: u32) -> f64 {
    w.step * steps as f64 + w.target * target as f64 + w.other * other as f64
}
