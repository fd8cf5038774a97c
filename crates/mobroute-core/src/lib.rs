//! **mobroute-core**: the world model behind mob route finding.
//!
//! This crate turns raw map and mob records into an immutable [`World`]
//! (maps, portals, spawns) and a [`MobIndex`] (mob name → maps where it
//! spawns). Both are built once and only read afterwards, so they can be
//! shared freely between concurrent route queries.
//!
//! Raw records come from a [`DataSource`]; [`JsonBundle`] and [`JsonDir`]
//! read the usual exported JSON layouts.

pub mod error;
pub mod geom;
pub mod ids;
pub mod index;
pub mod records;
pub mod source;
pub mod world;

pub use error::LoadError;
pub use geom::{Bounds, Point};
pub use ids::{MapId, MobId};
pub use index::{ConsolidatedMob, MobIndex};
pub use records::{MiniMap, RawData, RawMap, RawMob, RawPortal, RawSpawn, SPAWN_POINT};
pub use source::{DataSource, JsonBundle, JsonDir};
pub use world::{BuildOptions, MapNode, Mob, Portal, SpawnPatch, UNKNOWN_MAP_NAME, World};
