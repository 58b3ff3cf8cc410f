//! `SeaORM` implementation of the `AnimeService` trait.

use crate::config::Config;
use crate::db::Store;
use crate::domain::AnimeId;
use crate::models::anime::{Anime, AnimeTitle};
use crate::models::import::AnimeRecord;
use crate::services::anime_service::{AnimeError, AnimeService, filter_titles};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

/// SeaORM-based implementation of [`AnimeService`].
pub struct SeaOrmAnimeService {
    store: Arc<Store>,
    config: Arc<RwLock<Config>>,
}

impl SeaOrmAnimeService {
    #[must_use]
    pub const fn new(store: Arc<Store>, config: Arc<RwLock<Config>>) -> Self {
        Self { store, config }
    }
}

fn db_err(e: anyhow::Error) -> AnimeError {
    AnimeError::Database(e.to_string())
}

#[async_trait::async_trait]
impl AnimeService for SeaOrmAnimeService {
    async fn list_anime(&self) -> Result<Vec<Anime>, AnimeError> {
        self.store.list_anime().await.map_err(db_err)
    }

    async fn get_anime(&self, id: AnimeId) -> Result<Anime, AnimeError> {
        self.store
            .get_anime(id.value())
            .await
            .map_err(db_err)?
            .ok_or(AnimeError::NotFound(id))
    }

    async fn random_anime(&self) -> Result<Anime, AnimeError> {
        self.store
            .random_anime()
            .await
            .map_err(db_err)?
            .ok_or(AnimeError::EmptyCatalogue)
    }

    async fn list_titles(
        &self,
        query: Option<&str>,
        limit: Option<usize>,
    ) -> Result<Vec<AnimeTitle>, AnimeError> {
        let titles = self.store.list_titles().await.map_err(db_err)?;

        let searching = query.is_some_and(|q| !q.trim().is_empty());
        let limit = if limit.is_none() && searching {
            Some(self.config.read().await.game.title_search_limit)
        } else {
            limit
        };

        Ok(filter_titles(titles, query, limit))
    }

    async fn list_genres(&self) -> Result<Vec<String>, AnimeError> {
        self.store.list_genres().await.map_err(db_err)
    }

    async fn list_studios(&self) -> Result<Vec<String>, AnimeError> {
        self.store.list_studios().await.map_err(db_err)
    }

    async fn import_anime(&self, records: &[AnimeRecord]) -> Result<usize, AnimeError> {
        if let Some(bad) = records.iter().find(|r| r.title.trim().is_empty()) {
            return Err(AnimeError::InvalidData(format!(
                "anime {} has no title",
                bad.mal_id
            )));
        }
        if let Some(bad) = records.iter().find(|r| r.mal_id <= 0) {
            return Err(AnimeError::InvalidData(format!(
                "invalid anime id {} for \"{}\"",
                bad.mal_id, bad.title
            )));
        }

        let mut imported = 0;
        for record in records {
            if let Err(e) = self.store.upsert_anime(record).await {
                warn!(anime_id = record.mal_id, error = %e, "Failed to import anime");
                return Err(db_err(e));
            }
            imported += 1;
        }

        info!(imported, "Catalogue import finished");
        Ok(imported)
    }
}
