//! Raw map and mob records as they arrive from the data files.
//!
//! Every field the exporters sometimes omit is optional or defaulted, and
//! `null` list fields are read as empty lists.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::geom::Bounds;
use crate::ids::{MapId, MobId};

/// Portal type code for a spawn point. Never traversable.
pub const SPAWN_POINT: i32 = 0;

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Everything a [`DataSource`](crate::DataSource) hands to the world builder.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RawData {
    pub maps: BTreeMap<MapId, RawMap>,
    pub mobs: BTreeMap<MobId, RawMob>,
}

/// One map record.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMap {
    #[serde(default)]
    pub name: Option<String>,
    /// Spawn entries; a mob id repeated `n` times spawns `n` of that mob.
    #[serde(default, deserialize_with = "null_as_default")]
    pub mobs: Vec<RawSpawn>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub portals: Vec<RawPortal>,
    #[serde(default)]
    pub mini_map: Option<MiniMap>,
    #[serde(default)]
    pub vr_bounds: Option<Bounds>,
}

/// A spawn entry inside a map.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSpawn {
    #[serde(default)]
    pub id: Option<MobId>,
}

impl RawSpawn {
    pub fn new(id: impl Into<MobId>) -> Self {
        Self {
            id: Some(id.into()),
        }
    }
}

/// An outgoing portal.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPortal {
    #[serde(default)]
    pub to_map: Option<MapId>,
    #[serde(default)]
    pub x: i32,
    #[serde(default)]
    pub y: i32,
    /// Portal type code; [`SPAWN_POINT`] marks a non-exit.
    #[serde(default, rename = "type")]
    pub kind: Option<i32>,
    #[serde(default)]
    pub unknown_exit: bool,
}

/// Minimap image metadata.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MiniMap {
    #[serde(default)]
    pub width: i32,
    #[serde(default)]
    pub height: i32,
    #[serde(default)]
    pub center_x: i32,
    #[serde(default)]
    pub center_y: i32,
    #[serde(default)]
    pub magnification: Option<f64>,
    /// Base64-encoded PNG.
    #[serde(default)]
    pub canvas: Option<String>,
}

impl MiniMap {
    /// `data:` URL for the embedded image, if any.
    pub fn data_url(&self) -> Option<String> {
        self.canvas
            .as_deref()
            .filter(|c| !c.is_empty())
            .map(|c| format!("data:image/png;base64,{c}"))
    }
}

/// One raw mob record. Several records may share a `name`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RawMob {
    #[serde(default)]
    pub id: Option<MobId>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub meta: MobMeta,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MobMeta {
    #[serde(default)]
    pub level: Option<i32>,
    /// Fields the router does not interpret.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}
