//! Domain service for catalogue queries.
//!
//! Handlers read the anime catalogue through this trait and never touch the
//! store directly.

use crate::domain::AnimeId;
use crate::models::anime::{Anime, AnimeTitle};
use crate::models::import::AnimeRecord;
use thiserror::Error;

/// Domain errors for catalogue operations.
#[derive(Debug, Error)]
pub enum AnimeError {
    #[error("Anime not found: {0}")]
    NotFound(AnimeId),

    #[error("The anime catalogue is empty")]
    EmptyCatalogue,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Invalid anime data: {0}")]
    InvalidData(String),
}

impl From<sea_orm::DbErr> for AnimeError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

/// Read access to the catalogue, plus the bulk import used for seeding.
///
/// # Examples
///
/// ```rust,ignore
/// use guess_anime::services::{AnimeService, AnimeError};
/// use guess_anime::domain::AnimeId;
/// use std::sync::Arc;
///
/// async fn example(service: Arc<dyn AnimeService>) -> Result<(), AnimeError> {
///     let anime = service.get_anime(AnimeId::new(5114)).await?;
///     println!("{}", anime.title);
///     Ok(())
/// }
/// ```
#[async_trait::async_trait]
pub trait AnimeService: Send + Sync {
    /// Lists every anime with its genres and studios.
    ///
    /// # Errors
    ///
    /// Returns [`AnimeError::Database`] on connection failures.
    async fn list_anime(&self) -> Result<Vec<Anime>, AnimeError>;

    /// Fetches one anime.
    ///
    /// # Errors
    ///
    /// - Returns [`AnimeError::NotFound`] if the id is not in the catalogue
    /// - Returns [`AnimeError::Database`] on connection failures
    async fn get_anime(&self, id: AnimeId) -> Result<Anime, AnimeError>;

    /// Picks one anime uniformly at random.
    ///
    /// # Errors
    ///
    /// - Returns [`AnimeError::EmptyCatalogue`] if nothing has been imported
    /// - Returns [`AnimeError::Database`] on connection failures
    async fn random_anime(&self) -> Result<Anime, AnimeError>;

    /// Lists searchable titles. With a query, only case-insensitive substring
    /// matches are returned, capped at `limit` or the configured default.
    ///
    /// # Errors
    ///
    /// Returns [`AnimeError::Database`] on connection failures.
    async fn list_titles(
        &self,
        query: Option<&str>,
        limit: Option<usize>,
    ) -> Result<Vec<AnimeTitle>, AnimeError>;

    /// # Errors
    ///
    /// Returns [`AnimeError::Database`] on connection failures.
    async fn list_genres(&self) -> Result<Vec<String>, AnimeError>;

    /// # Errors
    ///
    /// Returns [`AnimeError::Database`] on connection failures.
    async fn list_studios(&self) -> Result<Vec<String>, AnimeError>;

    /// Inserts or refreshes each record. Returns how many were written.
    ///
    /// # Errors
    ///
    /// - Returns [`AnimeError::InvalidData`] for a record without a title
    /// - Returns [`AnimeError::Database`] on connection failures
    async fn import_anime(&self, records: &[AnimeRecord]) -> Result<usize, AnimeError>;
}

/// Case-insensitive substring filter over the title list.
///
/// A blank query keeps every title. `limit` caps the result either way.
///
/// # Examples
///
/// ```
/// # use guess_anime::services::filter_titles;
/// # use guess_anime::models::anime::AnimeTitle;
/// let titles = vec![
///     AnimeTitle { anime_id: 1, title: "Steins;Gate".into() },
///     AnimeTitle { anime_id: 2, title: "Gintama".into() },
/// ];
/// let hits = filter_titles(titles, Some("gate"), None);
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].anime_id, 1);
/// ```
#[must_use]
pub fn filter_titles(
    titles: Vec<AnimeTitle>,
    query: Option<&str>,
    limit: Option<usize>,
) -> Vec<AnimeTitle> {
    let needle = query
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(str::to_lowercase);

    let matching = titles.into_iter().filter(|t| {
        needle
            .as_deref()
            .is_none_or(|needle| t.title.to_lowercase().contains(needle))
    });

    match limit {
        Some(limit) => matching.take(limit).collect(),
        None => matching.collect(),
    }
}
