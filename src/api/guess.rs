use axum::{
    Extension, Json,
    extract::{State, rejection::JsonRejection},
};
use std::sync::Arc;

use super::observability::GameEvent;
use super::{AnimeIdRequest, ApiError, AppState, GuessDto, MessageResponse, PostGuessResponse};
use crate::api::validation::validate_anime_id;
use crate::domain::{AnimeId, GuessComparison};

pub(super) fn body_error(rejection: &JsonRejection) -> ApiError {
    ApiError::validation(format!("Invalid request body: {}", rejection.body_text()))
}

/// `GET /guess/`: guesses of the current round, newest first.
pub async fn list_guesses(State(state): State<Arc<AppState>>) -> Result<Json<Vec<GuessDto>>, ApiError> {
    let guesses = state.guess_service().list_guesses().await?;
    Ok(Json(guesses.into_iter().map(GuessDto::from).collect()))
}

/// `POST /guess/` with `{ "animeId": <id> }`.
pub async fn post_guess(
    State(state): State<Arc<AppState>>,
    body: Result<Json<AnimeIdRequest>, JsonRejection>,
) -> Result<(Extension<GameEvent>, Json<PostGuessResponse>), ApiError> {
    let Json(request) = body.map_err(|e| body_error(&e))?;
    let anime_id = validate_anime_id(request.anime_id)?;

    let outcome = state
        .guess_service()
        .submit_guess(AnimeId::new(anime_id))
        .await?;

    let message = if outcome.duplicate {
        "Guess was already recorded."
    } else {
        "Successfully posted guess."
    };

    Ok((
        Extension(GameEvent::for_guess(outcome.correct, outcome.duplicate)),
        Json(PostGuessResponse {
            message,
            correct: outcome.correct,
            duplicate: outcome.duplicate,
        }),
    ))
}

/// `DELETE /guess/`
pub async fn delete_guesses(
    State(state): State<Arc<AppState>>,
) -> Result<(Extension<GameEvent>, Json<MessageResponse>), ApiError> {
    state.guess_service().clear_guesses().await?;
    Ok((
        Extension(GameEvent::GuessesCleared),
        Json(MessageResponse {
            message: "Successfully deleted all guesses.",
        }),
    ))
}

/// `GET /guess/hints`: every guess compared with the answer.
pub async fn hints(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<GuessComparison>>, ApiError> {
    Ok(Json(state.guess_service().hints().await?))
}
