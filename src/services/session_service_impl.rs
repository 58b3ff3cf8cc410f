//! `SeaORM` implementation of the `SessionService` trait.

use crate::config::Config;
use crate::db::Store;
use crate::domain::{AnimeId, RoundEndPolicy, RoundState};
use crate::services::session_service::{SessionError, SessionService};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

pub struct SeaOrmSessionService {
    store: Arc<Store>,
    config: Arc<RwLock<Config>>,
}

impl SeaOrmSessionService {
    #[must_use]
    pub const fn new(store: Arc<Store>, config: Arc<RwLock<Config>>) -> Self {
        Self { store, config }
    }
}

fn db_err(e: anyhow::Error) -> SessionError {
    SessionError::Database(e.to_string())
}

/// Reads the session row and guess history and derives the round state.
pub(crate) async fn load_round_state(
    store: &Store,
    policy: RoundEndPolicy,
) -> anyhow::Result<RoundState> {
    let Some(session) = store.get_session().await? else {
        return Ok(RoundState::Idle);
    };

    let (guesses, solved) = store.guess_stats(session.anime_id).await?;

    let guesses = usize::try_from(guesses).unwrap_or(usize::MAX);
    Ok(RoundState::derive(
        Some(AnimeId::new(session.anime_id)),
        guesses,
        solved,
        policy,
    ))
}

#[async_trait::async_trait]
impl SessionService for SeaOrmSessionService {
    async fn get_session(&self) -> Result<Option<AnimeId>, SessionError> {
        let session = self.store.get_session().await.map_err(db_err)?;
        Ok(session.map(|s| AnimeId::new(s.anime_id)))
    }

    async fn create_session(&self, anime_id: AnimeId) -> Result<bool, SessionError> {
        if !self
            .store
            .anime_exists(anime_id.value())
            .await
            .map_err(db_err)?
        {
            return Err(SessionError::AnimeNotFound(anime_id));
        }

        let created = self
            .store
            .create_session(anime_id.value())
            .await
            .map_err(db_err)?;

        if created {
            info!(%anime_id, "Game session created");
        }
        Ok(created)
    }

    async fn delete_session(&self) -> Result<bool, SessionError> {
        let deleted = self.store.delete_session().await.map_err(db_err)?;
        if deleted {
            info!("Game session deleted");
        }
        Ok(deleted)
    }

    async fn start_round(&self, anime_id: Option<AnimeId>) -> Result<AnimeId, SessionError> {
        let answer = match anime_id {
            Some(id) => {
                if !self.store.anime_exists(id.value()).await.map_err(db_err)? {
                    return Err(SessionError::AnimeNotFound(id));
                }
                id
            }
            None => self
                .store
                .random_anime()
                .await
                .map_err(db_err)?
                .map(|a| AnimeId::new(a.mal_id))
                .ok_or(SessionError::EmptyCatalogue)?,
        };

        self.store
            .start_round(answer.value())
            .await
            .map_err(db_err)?;

        Ok(answer)
    }

    async fn round_state(&self) -> Result<RoundState, SessionError> {
        let policy = self.config.read().await.game.round_end_policy;
        load_round_state(&self.store, policy).await.map_err(db_err)
    }
}
