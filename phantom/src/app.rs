//! What the `phantom` binary does once its arguments are parsed.

use std::io::Write;
use std::path::PathBuf;

use mobroute_core::{DataSource, JsonBundle, JsonDir, LoadError, MapId, RawData};
use mobroute_itinerary::{consolidate, format_itinerary, format_path};
use mobroute_paths::{Engine, Path};

use crate::config::Config;
use crate::error::Error;
use crate::quests::{self, QUESTS};

/// Where map and mob data is read from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    Bundle(JsonBundle),
    Dir(JsonDir),
}

impl Source {
    /// Directories win when both are given, the two bundle files otherwise.
    pub fn pick(
        maps: PathBuf,
        mobs: PathBuf,
        maps_dir: Option<PathBuf>,
        mobs_dir: Option<PathBuf>,
    ) -> Self {
        match (maps_dir, mobs_dir) {
            (Some(maps), Some(mobs)) => Self::Dir(JsonDir::new(maps, mobs)),
            (None, None) => Self::Bundle(JsonBundle::new(maps, mobs)),
            _ => {
                log::warn!(
                    "--maps-dir and --mobs-dir go together; reading {}",
                    maps.display()
                );
                Self::Bundle(JsonBundle::new(maps, mobs))
            }
        }
    }
}

impl DataSource for Source {
    fn load(&self) -> Result<RawData, LoadError> {
        match self {
            Self::Bundle(b) => b.load(),
            Self::Dir(d) => d.load(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    ListMobs,
    ListQuests,
    Route { mobs: Vec<String>, quests: Vec<String> },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Request {
    pub command: Command,
    pub start: Option<MapId>,
    /// Print one stop per map instead of each path.
    pub itinerary: bool,
    pub json: bool,
}

/// Run `req` against `engine`, writing the report to `out`.
pub fn run<S: DataSource, W: Write>(
    engine: &Engine<S>,
    config: &Config,
    req: &Request,
    out: &mut W,
) -> Result<(), Error> {
    match &req.command {
        Command::ListQuests => list_quests(out),
        Command::ListMobs => list_mobs(engine, req.json, out),
        Command::Route { mobs, quests } => {
            let start = req.start.clone().unwrap_or_else(|| config.start_map());
            route(engine, config, req, &start, mobs, quests, out)
        }
    }
}

fn list_quests<W: Write>(out: &mut W) -> Result<(), Error> {
    for q in &QUESTS {
        writeln!(out, "{}. {} - {}", q.id, q.title, q.description)?;
        if let Some(reason) = q.reroll {
            writeln!(out, "   reroll recommended: {reason}")?;
        }
    }
    Ok(())
}

fn list_mobs<S: DataSource, W: Write>(
    engine: &Engine<S>,
    json: bool,
    out: &mut W,
) -> Result<(), Error> {
    let mobs = engine.all_mobs()?;
    if json {
        serde_json::to_writer_pretty(&mut *out, &mobs)?;
        writeln!(out)?;
        return Ok(());
    }
    for m in &mobs {
        writeln!(out, "{} ({} maps)", m.name, m.locations.len())?;
    }
    Ok(())
}

fn route<S: DataSource, W: Write>(
    engine: &Engine<S>,
    config: &Config,
    req: &Request,
    start: &MapId,
    mobs: &[String],
    quest_ids: &[String],
    out: &mut W,
) -> Result<(), Error> {
    let picked = quests::select(quest_ids)?;
    let mut targets = mobs.to_vec();
    targets.extend(quests::targets(&picked));
    if targets.is_empty() {
        return Err(Error::NoTargets);
    }

    log::info!("routing from {start} to {}", targets.join(", "));
    let paths: Vec<Path> = if targets.len() == 1 && picked.is_empty() {
        engine.find_paths_to_mob(start, &targets[0])?
    } else {
        engine.find_path_to_multiple_mobs(start, &targets)?
    };

    if req.itinerary {
        let stops = consolidate(&paths, config.tally);
        if req.json {
            serde_json::to_writer_pretty(&mut *out, &stops)?;
            writeln!(out)?;
        } else {
            write!(out, "{}", format_itinerary(&stops))?;
        }
        return Ok(());
    }
    if req.json {
        serde_json::to_writer_pretty(&mut *out, &paths)?;
        writeln!(out)?;
        return Ok(());
    }

    if paths.is_empty() {
        writeln!(out, "No paths found to {}", targets.join(", "))?;
        return Ok(());
    }
    writeln!(out, "Found {} path(s) from {}:", paths.len(), engine.map_name(start)?)?;
    for (i, p) in paths.iter().enumerate() {
        writeln!(out, "\nPath {}:\n{}", i + 1, format_path(p))?;
    }
    Ok(())
}
