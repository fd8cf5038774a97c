//! Load errors: the only failures the routing engine surfaces.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to obtain map or mob data from a [`DataSource`](crate::DataSource).
#[derive(Debug, Error)]
pub enum LoadError {
    /// A file or directory could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A file was read but is not valid map/mob JSON.
    #[error("failed to parse {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The source loaded successfully but contained no maps.
    #[error("data source contains no maps")]
    NoMaps,
}

impl LoadError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }
}
