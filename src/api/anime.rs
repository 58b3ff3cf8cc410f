use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;

use super::{ApiError, AppState};
use crate::api::validation::{normalize_search_query, validate_anime_id, validate_limit};
use crate::domain::AnimeId;
use crate::models::anime::{Anime, AnimeTitle};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimeQuery {
    pub anime_id: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct TitleQuery {
    pub q: Option<String>,
    pub limit: Option<usize>,
}

fn query_error(rejection: &QueryRejection) -> ApiError {
    ApiError::validation(format!("Invalid query string: {}", rejection.body_text()))
}

/// `GET /anime` lists the catalogue; `GET /anime?animeId=<id>` returns one anime.
pub async fn get_anime(
    State(state): State<Arc<AppState>>,
    query: Result<Query<AnimeQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(query) = query.map_err(|e| query_error(&e))?;

    match query.anime_id {
        Some(id) => {
            let id = validate_anime_id(id)?;
            let anime = state.anime_service().get_anime(AnimeId::new(id)).await?;
            Ok(Json(anime).into_response())
        }
        None => {
            let anime = state.anime_service().list_anime().await?;
            Ok(Json(anime).into_response())
        }
    }
}

/// `GET /random-anime`
pub async fn random_anime(State(state): State<Arc<AppState>>) -> Result<Json<Anime>, ApiError> {
    Ok(Json(state.anime_service().random_anime().await?))
}

/// `GET /anime-titles[?q=&limit=]`
pub async fn list_titles(
    State(state): State<Arc<AppState>>,
    query: Result<Query<TitleQuery>, QueryRejection>,
) -> Result<Json<Vec<AnimeTitle>>, ApiError> {
    let Query(query) = query.map_err(|e| query_error(&e))?;

    let limit = query.limit.map(validate_limit).transpose()?;
    let search = normalize_search_query(query.q.as_deref());

    let titles = state.anime_service().list_titles(search, limit).await?;
    Ok(Json(titles))
}

/// `GET /anime-genres`
pub async fn list_genres(State(state): State<Arc<AppState>>) -> Result<Json<Vec<String>>, ApiError> {
    Ok(Json(state.anime_service().list_genres().await?))
}

/// `GET /anime-studios`
pub async fn list_studios(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<String>>, ApiError> {
    Ok(Json(state.anime_service().list_studios().await?))
}
