use std::io;
use std::path::PathBuf;

use mobroute_core::MapId;
use mobroute_paths::Engine;
use phantom::{Command, Config, Request, Source};

const DEFAULT_MAPS_FILE: &str = "maps.json";
const DEFAULT_MOBS_FILE: &str = "mobs.json";

struct Args {
    source: Source,
    config: Option<PathBuf>,
    request: Request,
}

impl Args {
    fn parser() -> impl meap::Parser<Item = Self> {
        meap::let_map! {
            let {
                maps = opt_opt("PATH", 'm').name("maps").desc("combined maps file")
                    .with_default(DEFAULT_MAPS_FILE.to_string());
                mobs = opt_opt("PATH", 'b').name("mobs").desc("combined mobs file")
                    .with_default(DEFAULT_MOBS_FILE.to_string());
                maps_dir = opt_opt::<String, _>("DIR", "maps-dir")
                    .desc("directory of <mapId>.json files");
                mobs_dir = opt_opt::<String, _>("DIR", "mobs-dir")
                    .desc("directory of <mobId>.json files");
                config = opt_opt::<String, _>("PATH", 'c').name("config").desc("config file");
                start = opt_opt::<String, _>("MAP", 's').name("start").desc("start map id");
                mob = opt_multi::<String, _>("NAME", "mob").desc("target mob (repeatable)");
                quest = opt_multi::<String, _>("ID", "quest")
                    .desc("daily quest id (repeatable, at most 3)");
                list_mobs = flag("list-mobs").desc("list mobs and how many maps they spawn in");
                list_quests = flag("list-quests").desc("list the daily quests");
                itinerary = flag("itinerary").desc("print one stop per map");
                json = flag("json").desc("print JSON");
            } in {{
                let command = if list_quests {
                    Command::ListQuests
                } else if list_mobs {
                    Command::ListMobs
                } else {
                    Command::Route { mobs: mob, quests: quest }
                };
                Self {
                    source: Source::pick(
                        maps.into(),
                        mobs.into(),
                        maps_dir.map(PathBuf::from),
                        mobs_dir.map(PathBuf::from),
                    ),
                    config: config.map(PathBuf::from),
                    request: Request {
                        command,
                        start: start.map(MapId::from),
                        itinerary,
                        json,
                    },
                }
            }}
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    use meap::Parser;
    env_logger::init();
    let Args {
        source,
        config,
        request,
    } = Args::parser().with_help_default().parse_env_or_exit();
    let config = Config::load_or_default(config.as_deref())?;
    let engine = Engine::new(source, config.build.clone(), config.router.clone());
    let stdout = io::stdout();
    phantom::run(&engine, &config, &request, &mut stdout.lock())?;
    Ok(())
}
