use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;

use super::ErrorBody;
use crate::services::{AnimeError, GuessError, SessionError};

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),

    DatabaseError(String),

    ValidationError(String),

    Conflict(String),

    InternalError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(msg) => write!(f, "Not found: {msg}"),
            Self::DatabaseError(msg) => write!(f, "Database error: {msg}"),
            Self::ValidationError(msg) => write!(f, "Validation error: {msg}"),
            Self::Conflict(msg) => write!(f, "Conflict: {msg}"),
            Self::InternalError(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            Self::DatabaseError(msg) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "A database error occurred".to_string(),
                )
            }
            Self::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Self::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        (status, Json(ErrorBody::new(error_message))).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::InternalError(err.to_string())
    }
}

impl From<AnimeError> for ApiError {
    fn from(err: AnimeError) -> Self {
        match err {
            AnimeError::NotFound(id) => Self::anime_not_found(id),
            AnimeError::EmptyCatalogue => Self::NotFound(err.to_string()),
            AnimeError::InvalidData(msg) => Self::validation(msg),
            AnimeError::Database(msg) => Self::DatabaseError(msg),
        }
    }
}

impl From<SessionError> for ApiError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::AnimeNotFound(id) => Self::anime_not_found(id),
            SessionError::EmptyCatalogue => Self::NotFound(err.to_string()),
            SessionError::Database(msg) => Self::DatabaseError(msg),
        }
    }
}

impl From<GuessError> for ApiError {
    fn from(err: GuessError) -> Self {
        match err {
            GuessError::AnimeNotFound(id) => Self::anime_not_found(id),
            GuessError::NoActiveRound => Self::Conflict("no active round".to_string()),
            GuessError::RoundOver => Self::Conflict("round is over".to_string()),
            GuessError::Database(msg) => Self::DatabaseError(msg),
        }
    }
}

impl ApiError {
    pub fn anime_not_found(id: impl fmt::Display) -> Self {
        Self::NotFound(format!("Anime {id} not found"))
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }
}
