use std::sync::Arc;

use crate::{config::Config, db::CatalogStore, services::RandomSource};

/// Shared application state.
///
/// The catalog is loaded once before serving starts and is read-only
/// afterwards, so handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<CatalogStore>,
    pub config: Arc<Config>,
    pub random: RandomSource,
}

impl AppState {
    pub fn new(store: CatalogStore, config: Config) -> Self {
        let random = RandomSource::from_seed(config.rng_seed);
        Self {
            store: Arc::new(store),
            config: Arc::new(config),
            random,
        }
    }
}
