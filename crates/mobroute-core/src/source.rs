//! Data sources: where raw map and mob records come from.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::error::LoadError;
use crate::ids::{MapId, MobId};
use crate::records::RawData;

/// Something that can produce [`RawData`].
///
/// Loading is the one fallible step of the engine; a failed load must leave
/// no partial state behind, so implementations return the whole data set or
/// an error.
pub trait DataSource {
    fn load(&self) -> Result<RawData, LoadError>;
}

/// In-memory data is its own source.
impl DataSource for RawData {
    fn load(&self) -> Result<RawData, LoadError> {
        Ok(self.clone())
    }
}

/// Two combined JSON files: `{mapId: map}` and `{mobId: mob}`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JsonBundle {
    pub maps: PathBuf,
    pub mobs: PathBuf,
}

impl JsonBundle {
    pub fn new(maps: impl Into<PathBuf>, mobs: impl Into<PathBuf>) -> Self {
        Self {
            maps: maps.into(),
            mobs: mobs.into(),
        }
    }
}

impl DataSource for JsonBundle {
    fn load(&self) -> Result<RawData, LoadError> {
        let maps: BTreeMap<MapId, _> = read_json(&self.maps)?;
        log::info!("loaded {} maps from {}", maps.len(), self.maps.display());
        let mobs: BTreeMap<MobId, _> = read_json(&self.mobs)?;
        log::info!("loaded {} mobs from {}", mobs.len(), self.mobs.display());
        non_empty(RawData { maps, mobs })
    }
}

/// Two directories of per-record files named `<id>.json`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JsonDir {
    pub maps: PathBuf,
    pub mobs: PathBuf,
}

impl JsonDir {
    pub fn new(maps: impl Into<PathBuf>, mobs: impl Into<PathBuf>) -> Self {
        Self {
            maps: maps.into(),
            mobs: mobs.into(),
        }
    }
}

impl DataSource for JsonDir {
    fn load(&self) -> Result<RawData, LoadError> {
        let maps = read_dir_records(&self.maps)?;
        log::info!("loaded {} maps from {}/", maps.len(), self.maps.display());
        let mobs = read_dir_records(&self.mobs)?;
        log::info!("loaded {} mobs from {}/", mobs.len(), self.mobs.display());
        non_empty(RawData { maps, mobs })
    }
}

fn non_empty(raw: RawData) -> Result<RawData, LoadError> {
    if raw.maps.is_empty() {
        return Err(LoadError::NoMaps);
    }
    Ok(raw)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let text = fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
    serde_json::from_str(&text).map_err(|e| LoadError::json(path, e))
}

/// Read every `*.json` file of `dir`, keyed by file stem. Files are read in
/// name order so the result does not depend on directory iteration order.
fn read_dir_records<K, T>(dir: &Path) -> Result<BTreeMap<K, T>, LoadError>
where
    K: Ord + From<String>,
    T: DeserializeOwned,
{
    let entries = fs::read_dir(dir).map_err(|e| LoadError::io(dir, e))?;
    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| LoadError::io(dir, e))?.path();
        if path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort();

    let mut out = BTreeMap::new();
    for path in files {
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        let key = K::from(stem.to_owned());
        out.insert(key, read_json(&path)?);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write(path: &Path, text: &str) {
        let mut f = fs::File::create(path).unwrap();
        f.write_all(text.as_bytes()).unwrap();
    }

    #[test]
    fn bundle_loads_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let maps = dir.path().join("maps.json");
        let mobs = dir.path().join("mobs.json");
        write(&maps, r#"{"1": {"name": "A", "mobs": [{"id": 7}], "portals": []}}"#);
        write(&mobs, r#"{"7": {"id": 7, "name": "Elderwraith", "meta": {"level": 136}}}"#);

        let raw = JsonBundle::new(&maps, &mobs).load().unwrap();
        assert_eq!(raw.maps.len(), 1);
        assert_eq!(raw.mobs[&MobId::from("7")].name, "Elderwraith");
    }

    #[test]
    fn bundle_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = JsonBundle::new(dir.path().join("nope.json"), dir.path().join("mobs.json"))
            .load()
            .unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("nope.json"));
    }

    #[test]
    fn bundle_reports_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let maps = dir.path().join("maps.json");
        write(&maps, "{not json");
        let err = JsonBundle::new(&maps, dir.path().join("mobs.json"))
            .load()
            .unwrap_err();
        assert!(matches!(err, LoadError::Json { .. }));
    }

    #[test]
    fn empty_bundle_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let maps = dir.path().join("maps.json");
        let mobs = dir.path().join("mobs.json");
        write(&maps, "{}");
        write(&mobs, "{}");
        let err = JsonBundle::new(&maps, &mobs).load().unwrap_err();
        assert!(matches!(err, LoadError::NoMaps));
    }

    #[test]
    fn dir_source_keys_by_file_stem() {
        let root = tempfile::tempdir().unwrap();
        let maps = root.path().join("maps");
        let mobs = root.path().join("mobs");
        fs::create_dir(&maps).unwrap();
        fs::create_dir(&mobs).unwrap();
        write(
            &maps.join("610010000.json"),
            r#"{"name": "Bent Tree", "portals": [{"toMap": 610010001, "x": 1, "y": 2, "type":2}]}"#,
        );
        write(&maps.join("610010001.json"), r#"{"name": "Phantom Forest"}"#);
        write(&maps.join("notes.txt"), "ignored");
        write(&mobs.join("9601263.json"), r#"{"id": 9601263, "name": "Phantom Tree"}"#);

        let raw = JsonDir::new(&maps, &mobs).load().unwrap();
        let keys: Vec<&str> = raw.maps.keys().map(MapId::as_str).collect();
        assert_eq!(keys, ["610010000", "610010001"]);
        assert_eq!(raw.mobs.len(), 1);
    }

    #[test]
    fn raw_data_is_a_source() {
        let mut raw = RawData::default();
        raw.maps.insert("1".into(), Default::default());
        assert_eq!(raw.load().unwrap().maps.len(), 1);
    }
}
