//! Phantom Forest route planner.
//!
//! Loads map and mob exports, then answers "where is this mob and how do I
//! get there" for single mobs and for the daily "[Wanted]" quests.

pub mod app;
pub mod config;
pub mod error;
pub mod quests;

pub use app::{Command, Request, Source, run};
pub use config::{Config, DEFAULT_START};
pub use error::Error;
