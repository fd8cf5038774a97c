use std::io;
use std::path::PathBuf;

use mobroute_core::LoadError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("failed to read config {}: {source}", path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown quest {0:?}")]
    UnknownQuest(String),

    #[error("at most {max} quests can be selected, got {got}")]
    TooManyQuests { max: usize, got: usize },

    #[error("no target mob given (use --mob or --quest)")]
    NoTargets,

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),

    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
}
