//! Breadth-first search over a [`PortalGraph`].
//!
//! Maps are marked visited when dequeued, not when enqueued: several
//! frontier entries may point at the same map, but only the first one
//! dequeued (the one with the fewest steps) is expanded. Frontier entries
//! live in an arena and link to their parent, so a trail is only
//! materialised when it is reported.

use std::collections::{HashSet, VecDeque};

use mobroute_core::{MapId, Point};

use crate::traits::{Hop, PortalGraph};

/// One map on a trail and the portal taken to get there (`None` for the
/// starting map).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrailStep {
    pub map: MapId,
    pub portal: Option<Point>,
}

/// A sequence of maps joined by traversable portals, start first.
pub type Trail = Vec<TrailStep>;

struct Crumb {
    map: MapId,
    portal: Option<Point>,
    parent: usize,
    len: usize,
}

const ROOT: usize = usize::MAX;

struct Frontier {
    arena: Vec<Crumb>,
    queue: VecDeque<usize>,
    visited: HashSet<MapId>,
    hops: Vec<Hop>,
}

impl Frontier {
    fn new(start: &MapId) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back(0);
        Self {
            arena: vec![Crumb {
                map: start.clone(),
                portal: None,
                parent: ROOT,
                len: 1,
            }],
            queue,
            visited: HashSet::new(),
            hops: Vec::new(),
        }
    }

    /// Pop the next unvisited entry, marking its map visited.
    fn next(&mut self) -> Option<usize> {
        while let Some(ci) = self.queue.pop_front() {
            if self.visited.insert(self.arena[ci].map.clone()) {
                return Some(ci);
            }
        }
        None
    }

    /// Enqueue every exit of entry `ci` that leads to an unvisited map.
    fn expand<G: PortalGraph>(&mut self, graph: &G, ci: usize) {
        let mut hops = std::mem::take(&mut self.hops);
        hops.clear();
        graph.exits(&self.arena[ci].map, &mut hops);

        let len = self.arena[ci].len + 1;
        for hop in hops.drain(..) {
            if self.visited.contains(&hop.to) {
                continue;
            }
            self.arena.push(Crumb {
                map: hop.to,
                portal: Some(hop.portal),
                parent: ci,
                len,
            });
            self.queue.push_back(self.arena.len() - 1);
        }
        self.hops = hops;
    }

    fn trail(&self, mut ci: usize) -> Trail {
        let mut out = Vec::with_capacity(self.arena[ci].len);
        while ci != ROOT {
            let c = &self.arena[ci];
            out.push(TrailStep {
                map: c.map.clone(),
                portal: c.portal,
            });
            ci = c.parent;
        }
        out.reverse();
        out
    }
}

/// Collect a trail to every map satisfying `is_goal`, in discovery order.
///
/// Trails never exceed `max_steps` maps (the start counts as one). A start
/// outside the graph yields nothing.
pub fn bfs_collect<G, F>(graph: &G, start: &MapId, max_steps: usize, mut is_goal: F) -> Vec<Trail>
where
    G: PortalGraph,
    F: FnMut(&MapId) -> bool,
{
    let mut found = Vec::new();
    if !graph.contains(start) || max_steps == 0 {
        return found;
    }

    let mut frontier = Frontier::new(start);
    while let Some(ci) = frontier.next() {
        if is_goal(&frontier.arena[ci].map) {
            found.push(frontier.trail(ci));
        }
        if frontier.arena[ci].len < max_steps {
            frontier.expand(graph, ci);
        }
    }
    log::debug!(
        "bfs from {start}: {} goals, {} maps visited",
        found.len(),
        frontier.visited.len()
    );
    found
}

/// The first (fewest-steps) trail from `from` to `to`, at most `max_steps`
/// maps long. `None` when `from` is not in the graph or `to` is out of reach.
pub fn bfs_first<G: PortalGraph>(
    graph: &G,
    from: &MapId,
    to: &MapId,
    max_steps: usize,
) -> Option<Trail> {
    if !graph.contains(from) || max_steps == 0 {
        return None;
    }

    let mut frontier = Frontier::new(from);
    while let Some(ci) = frontier.next() {
        if frontier.arena[ci].map == *to {
            return Some(frontier.trail(ci));
        }
        if frontier.arena[ci].len < max_steps {
            frontier.expand(graph, ci);
        }
    }
    None
}
