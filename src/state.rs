use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::Config;
use crate::db::Store;
use crate::services::{
    AnimeService, GuessService, SeaOrmAnimeService, SeaOrmGuessService, SeaOrmSessionService,
    SessionService,
};

#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<RwLock<Config>>,

    pub store: Store,

    pub anime_service: Arc<dyn AnimeService>,

    pub session_service: Arc<dyn SessionService>,

    pub guess_service: Arc<dyn GuessService>,
}

impl SharedState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store = Store::with_pool_options(
            &config.general.database_path,
            config.general.max_db_connections,
            config.general.min_db_connections,
        )
        .await?;

        Ok(Self::with_store(config, store))
    }

    /// Wires the services over an already connected store.
    #[must_use]
    pub fn with_store(config: Config, store: Store) -> Self {
        let config_arc = Arc::new(RwLock::new(config));
        let store_arc = Arc::new(store.clone());

        let anime_service = Arc::new(SeaOrmAnimeService::new(
            store_arc.clone(),
            config_arc.clone(),
        )) as Arc<dyn AnimeService>;

        let session_service = Arc::new(SeaOrmSessionService::new(
            store_arc.clone(),
            config_arc.clone(),
        )) as Arc<dyn SessionService>;

        let guess_service = Arc::new(SeaOrmGuessService::new(store_arc, config_arc.clone()))
            as Arc<dyn GuessService>;

        Self {
            config: config_arc,
            store,
            anime_service,
            session_service,
            guess_service,
        }
    }
}
