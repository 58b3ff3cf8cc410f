use serde::{Deserialize, Serialize};

use crate::domain::{AnimeId, RoundState};
use crate::models::guess::GuessRecord;

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimeIdRequest {
    pub anime_id: i32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionDto {
    pub anime_id: AnimeId,
}

#[derive(Debug, Serialize)]
pub struct CreateSessionResponse {
    pub message: &'static str,
    pub created: bool,
}

#[derive(Debug, Serialize)]
pub struct PostGuessResponse {
    pub message: &'static str,
    pub correct: bool,
    pub duplicate: bool,
}

/// A guess flattened with the guessed anime's display fields.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessDto {
    pub anime_id: i32,
    pub correct: bool,
    pub title: String,
    pub thumbnail: Option<String>,
    pub source: Option<String>,
    pub start_season: Option<String>,
    pub mean: Option<f64>,
    pub media_type: Option<String>,
    pub genres: Vec<String>,
    pub studios: Vec<String>,
    pub created_at: String,
}

impl From<GuessRecord> for GuessDto {
    fn from(record: GuessRecord) -> Self {
        let anime = record.anime;
        Self {
            anime_id: anime.mal_id,
            correct: record.correct,
            title: anime.title,
            thumbnail: anime.thumbnail,
            source: anime.source,
            start_season: anime.start_season,
            mean: anime.mean,
            media_type: anime.media_type,
            genres: anime.genres,
            studios: anime.studios,
            created_at: record.created_at,
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RoundStateDto {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anime_id: Option<AnimeId>,
    pub guess_count: usize,
    pub solved: bool,
}

impl From<RoundState> for RoundStateDto {
    fn from(state: RoundState) -> Self {
        match state {
            RoundState::Idle => Self {
                status: "idle",
                anime_id: None,
                guess_count: 0,
                solved: false,
            },
            RoundState::Active { answer, guesses } => Self {
                status: "active",
                anime_id: Some(answer),
                guess_count: guesses,
                solved: false,
            },
            RoundState::Finished {
                answer,
                guesses,
                solved,
            } => Self {
                status: "finished",
                anime_id: Some(answer),
                guess_count: guesses,
                solved,
            },
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRoundResponse {
    pub anime_id: AnimeId,
}

#[derive(Debug, Serialize)]
pub struct HealthLiveResponse {
    pub status: &'static str,
    pub uptime_seconds: u64,
}

#[derive(Debug, Serialize)]
pub struct HealthReadinessChecks {
    pub database: bool,
}

#[derive(Debug, Serialize)]
pub struct HealthReadyResponse {
    pub ready: bool,
    pub checks: HealthReadinessChecks,
}
