//! Route finding over a map/portal graph.
//!
//! This crate answers "how do I get from this map to that mob?":
//!
//! - **Single target** ranked candidate routes ([`Router::find_paths_to_mob`])
//! - **Point to point** fewest-steps route ([`Router::find_shortest_path`])
//! - **Multi target** greedy nearest-next tour
//!   ([`Router::find_path_to_multiple_mobs`])
//!
//! All searches are breadth-first over a [`PortalGraph`], mark maps visited
//! when dequeued, and are bounded by a maximum number of steps, which keeps
//! them finite on the (cyclic) portal graph. [`Engine`] wraps a router
//! behind lazy, retryable initialisation from a data source.
//!
//! # Traversability
//!
//! A portal is followed only if its destination is a known map, its type is
//! not the spawn-point type and it is not flagged as an unknown exit.

mod config;
mod direction;
mod engine;
mod pins;
mod router;
mod search;
mod shortest;
mod single;
mod step;
mod tour;
mod traits;

#[cfg(test)]
mod fixtures;

pub use config::{RouterConfig, ScoreWeights};
pub use direction::{REFERENCE_HEIGHT, REFERENCE_WIDTH, portal_direction};
pub use engine::Engine;
pub use router::Router;
pub use search::{Trail, TrailStep, bfs_collect, bfs_first};
pub use single::score_counts;
pub use step::{MinimapInfo, Path, PathStep};
pub use traits::{Hop, PortalGraph};
