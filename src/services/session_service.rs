//! Domain service for the game session and the round lifecycle.

use crate::domain::{AnimeId, RoundState};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Anime not found: {0}")]
    AnimeNotFound(AnimeId),

    #[error("The anime catalogue is empty")]
    EmptyCatalogue,

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sea_orm::DbErr> for SessionError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

/// The single persisted session row and the round derived from it.
#[async_trait::async_trait]
pub trait SessionService: Send + Sync {
    /// The current answer, if a round is running.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Database`] on connection failures.
    async fn get_session(&self) -> Result<Option<AnimeId>, SessionError>;

    /// Writes the session unless one exists. An existing answer is never
    /// overwritten. Returns whether a session was created.
    ///
    /// # Errors
    ///
    /// - Returns [`SessionError::AnimeNotFound`] if the id is not in the catalogue
    /// - Returns [`SessionError::Database`] on connection failures
    async fn create_session(&self, anime_id: AnimeId) -> Result<bool, SessionError>;

    /// Removes the session. Returns whether there was one.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Database`] on connection failures.
    async fn delete_session(&self) -> Result<bool, SessionError>;

    /// Clears all guesses and replaces the answer atomically. Without an
    /// explicit id a random anime is chosen.
    ///
    /// # Errors
    ///
    /// - Returns [`SessionError::AnimeNotFound`] for an unknown explicit id
    /// - Returns [`SessionError::EmptyCatalogue`] if there is nothing to pick
    /// - Returns [`SessionError::Database`] on connection failures
    async fn start_round(&self, anime_id: Option<AnimeId>) -> Result<AnimeId, SessionError>;

    /// # Errors
    ///
    /// Returns [`SessionError::Database`] on connection failures.
    async fn round_state(&self) -> Result<RoundState, SessionError>;
}
