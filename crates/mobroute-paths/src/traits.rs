use mobroute_core::{MapId, Point, World};

/// One traversable portal: where it leads and where it sits on its map.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hop {
    pub to: MapId,
    pub portal: Point,
}

/// Minimal route-search interface over a portal graph.
pub trait PortalGraph {
    /// Whether `map` is a node of the graph.
    fn contains(&self, map: &MapId) -> bool;

    /// Append the traversable exits of `map` into `buf`, in portal order.
    /// The caller clears `buf` before calling.
    fn exits(&self, map: &MapId, buf: &mut Vec<Hop>);
}

impl PortalGraph for World {
    fn contains(&self, map: &MapId) -> bool {
        World::contains(self, map)
    }

    fn exits(&self, map: &MapId, buf: &mut Vec<Hop>) {
        buf.extend(World::exits(self, map).map(|(portal, dest)| Hop {
            to: dest.id.clone(),
            portal: portal.pos,
        }));
    }
}
