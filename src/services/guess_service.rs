//! Domain service for guesses and the hints derived from them.

use crate::domain::{AnimeId, GuessComparison};
use crate::models::guess::{GuessOutcome, GuessRecord};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GuessError {
    #[error("No active round")]
    NoActiveRound,

    #[error("The round is over")]
    RoundOver,

    #[error("Anime not found: {0}")]
    AnimeNotFound(AnimeId),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sea_orm::DbErr> for GuessError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

#[async_trait::async_trait]
pub trait GuessService: Send + Sync {
    /// Guesses of the current round with the guessed anime, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`GuessError::Database`] on connection failures.
    async fn list_guesses(&self) -> Result<Vec<GuessRecord>, GuessError>;

    /// Records a guess. Correctness is id equality with the session's answer
    /// at the time of the write. Repeating a guess changes nothing and is
    /// reported as a duplicate.
    ///
    /// # Errors
    ///
    /// - Returns [`GuessError::AnimeNotFound`] if the id is not in the catalogue
    /// - Returns [`GuessError::NoActiveRound`] if there is no session
    /// - Returns [`GuessError::RoundOver`] if the round-end policy closed the round
    /// - Returns [`GuessError::Database`] on connection failures
    async fn submit_guess(&self, anime_id: AnimeId) -> Result<GuessOutcome, GuessError>;

    /// Deletes every guess. Returns how many were removed.
    ///
    /// # Errors
    ///
    /// Returns [`GuessError::Database`] on connection failures.
    async fn clear_guesses(&self) -> Result<u64, GuessError>;

    /// Compares every guess of the round with the answer, newest first.
    ///
    /// # Errors
    ///
    /// - Returns [`GuessError::NoActiveRound`] if there is no session
    /// - Returns [`GuessError::Database`] on connection failures
    async fn hints(&self) -> Result<Vec<GuessComparison>, GuessError>;
}
