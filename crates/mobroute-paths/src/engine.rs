//! Lazily initialised routing engine.
//!
//! An [`Engine`] owns a [`DataSource`] and builds its [`Router`] on first
//! use. Initialisation runs at most once successfully: concurrent callers
//! wait on the same lock, and a failed load leaves the engine empty so the
//! next call retries from scratch.

use std::sync::{Arc, Mutex, PoisonError};

use mobroute_core::{BuildOptions, ConsolidatedMob, DataSource, LoadError, MapId, World};

use crate::config::RouterConfig;
use crate::router::Router;
use crate::step::Path;

pub struct Engine<S> {
    source: S,
    options: BuildOptions,
    config: RouterConfig,
    ready: Mutex<Option<Arc<Router>>>,
}

impl<S: DataSource> Engine<S> {
    pub fn new(source: S, options: BuildOptions, config: RouterConfig) -> Self {
        Self {
            source,
            options,
            config,
            ready: Mutex::new(None),
        }
    }

    /// Whether the router has been built.
    pub fn is_ready(&self) -> bool {
        self.ready
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// The router, loading and indexing the data on first call.
    ///
    /// Load errors are returned unchanged and nothing is cached, so a later
    /// call tries again.
    pub fn router(&self) -> Result<Arc<Router>, LoadError> {
        // Nothing is stored until the router is complete, so a poisoned
        // lock still guards a consistent value.
        let mut slot = self.ready.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(router) = slot.as_ref() {
            return Ok(Arc::clone(router));
        }

        log::info!("initialising route engine");
        let raw = self.source.load()?;
        let world = World::build(raw, &self.options);
        let router = Arc::new(Router::new(world, self.config.clone()));
        log::info!(
            "route engine ready: {} maps, {} mobs indexed",
            router.world().map_count(),
            router.index().len()
        );
        *slot = Some(Arc::clone(&router));
        Ok(router)
    }

    pub fn all_mobs(&self) -> Result<Vec<ConsolidatedMob>, LoadError> {
        Ok(self.router()?.all_mobs().to_vec())
    }

    pub fn find_paths_to_mob(&self, start: &MapId, mob: &str) -> Result<Vec<Path>, LoadError> {
        Ok(self.router()?.find_paths_to_mob(start, mob))
    }

    pub fn find_path_to_multiple_mobs<T: AsRef<str>>(
        &self,
        start: &MapId,
        mobs: &[T],
    ) -> Result<Vec<Path>, LoadError> {
        Ok(self.router()?.find_path_to_multiple_mobs(start, mobs))
    }

    pub fn map_name(&self, id: &MapId) -> Result<String, LoadError> {
        Ok(self.router()?.map_name(id).to_owned())
    }
}
