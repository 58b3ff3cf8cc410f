use axum::{
    Extension, Json,
    extract::{State, rejection::JsonRejection},
};
use std::sync::Arc;

use super::guess::body_error;
use super::observability::GameEvent;
use super::{
    AnimeIdRequest, ApiError, AppState, CreateSessionResponse, MessageResponse,
    NewRoundResponse, RoundStateDto, SessionDto,
};
use crate::api::validation::validate_anime_id;
use crate::domain::AnimeId;

/// `GET /session/`: `{ "animeId": <id> }`, or `null` without a session.
pub async fn get_session(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Option<SessionDto>>, ApiError> {
    let session = state.session_service().get_session().await?;
    Ok(Json(session.map(|anime_id| SessionDto { anime_id })))
}

/// `POST /session/`: creates the session if none exists. An existing
/// answer is kept.
pub async fn post_session(
    State(state): State<Arc<AppState>>,
    body: Result<Json<AnimeIdRequest>, JsonRejection>,
) -> Result<(Extension<GameEvent>, Json<CreateSessionResponse>), ApiError> {
    let Json(request) = body.map_err(|e| body_error(&e))?;
    let anime_id = validate_anime_id(request.anime_id)?;

    let created = state
        .session_service()
        .create_session(AnimeId::new(anime_id))
        .await?;

    let (message, event) = if created {
        ("Successfully posted game session.", GameEvent::SessionCreated)
    } else {
        ("A game session already exists.", GameEvent::SessionKept)
    };

    Ok((Extension(event), Json(CreateSessionResponse { message, created })))
}

/// `DELETE /session/`: ends the round, dropping its guesses too.
pub async fn delete_session(
    State(state): State<Arc<AppState>>,
) -> Result<(Option<Extension<GameEvent>>, Json<MessageResponse>), ApiError> {
    let deleted = state.session_service().delete_session().await?;
    Ok((
        deleted.then_some(Extension(GameEvent::SessionEnded)),
        Json(MessageResponse {
            message: "Successfully deleted game session.",
        }),
    ))
}

/// `POST /session/new-round`: clears guesses and picks a new random answer.
pub async fn new_round(
    State(state): State<Arc<AppState>>,
) -> Result<(Extension<GameEvent>, Json<NewRoundResponse>), ApiError> {
    let anime_id = state.session_service().start_round(None).await?;
    Ok((
        Extension(GameEvent::RoundStarted),
        Json(NewRoundResponse { anime_id }),
    ))
}

/// `GET /session/state`
pub async fn round_state(
    State(state): State<Arc<AppState>>,
) -> Result<Json<RoundStateDto>, ApiError> {
    let round = state.session_service().round_state().await?;
    Ok(Json(round.into()))
}
