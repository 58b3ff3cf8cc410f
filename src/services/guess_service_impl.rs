//! `SeaORM` implementation of the `GuessService` trait.

use crate::config::Config;
use crate::db::Store;
use crate::domain::{AnimeId, GuessComparison, RoundState, compare::compare};
use crate::models::guess::{GuessOutcome, GuessRecord};
use crate::services::guess_service::{GuessError, GuessService};
use crate::services::session_service_impl::load_round_state;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

pub struct SeaOrmGuessService {
    store: Arc<Store>,
    config: Arc<RwLock<Config>>,
}

impl SeaOrmGuessService {
    #[must_use]
    pub const fn new(store: Arc<Store>, config: Arc<RwLock<Config>>) -> Self {
        Self { store, config }
    }
}

fn db_err(e: anyhow::Error) -> GuessError {
    GuessError::Database(e.to_string())
}

#[async_trait::async_trait]
impl GuessService for SeaOrmGuessService {
    async fn list_guesses(&self) -> Result<Vec<GuessRecord>, GuessError> {
        self.store.list_guesses().await.map_err(db_err)
    }

    async fn submit_guess(&self, anime_id: AnimeId) -> Result<GuessOutcome, GuessError> {
        if !self
            .store
            .anime_exists(anime_id.value())
            .await
            .map_err(db_err)?
        {
            return Err(GuessError::AnimeNotFound(anime_id));
        }

        let policy = self.config.read().await.game.round_end_policy;
        let state = load_round_state(&self.store, policy)
            .await
            .map_err(db_err)?;

        match state {
            RoundState::Idle => return Err(GuessError::NoActiveRound),
            RoundState::Finished { answer, .. } => {
                // A repeat of an already recorded guess is still answered.
                let guessed = self.store.guessed_anime_ids().await.map_err(db_err)?;
                if guessed.contains(&anime_id.value()) {
                    return Ok(GuessOutcome {
                        correct: answer == anime_id,
                        duplicate: true,
                    });
                }
                return Err(GuessError::RoundOver);
            }
            RoundState::Active { .. } => {}
        }

        let outcome = self
            .store
            .submit_guess(anime_id.value())
            .await
            .map_err(db_err)?
            .ok_or(GuessError::NoActiveRound)?;

        if outcome.duplicate {
            debug!(%anime_id, "Duplicate guess ignored");
        } else {
            info!(%anime_id, correct = outcome.correct, "Guess recorded");
        }

        Ok(outcome)
    }

    async fn clear_guesses(&self) -> Result<u64, GuessError> {
        let cleared = self.store.clear_guesses().await.map_err(db_err)?;
        info!(cleared, "Guesses cleared");
        Ok(cleared)
    }

    async fn hints(&self) -> Result<Vec<GuessComparison>, GuessError> {
        let session = self
            .store
            .get_session()
            .await
            .map_err(db_err)?
            .ok_or(GuessError::NoActiveRound)?;

        let (answer, guesses) = tokio::try_join!(
            self.store.get_anime(session.anime_id),
            self.store.list_guesses()
        )
        .map_err(db_err)?;

        let answer = answer.ok_or(GuessError::AnimeNotFound(AnimeId::new(session.anime_id)))?;

        Ok(guesses
            .iter()
            .map(|guess| compare(&guess.anime, &answer))
            .collect())
    }
}
