use serde::{Deserialize, Serialize};

/// An anime with its genre and studio names aggregated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Anime {
    pub mal_id: i32,
    pub title: String,
    pub source: Option<String>,
    pub start_season: Option<String>,
    pub mean: Option<f64>,
    pub media_type: Option<String>,
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub studios: Vec<String>,
}

/// One searchable alias of an anime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimeTitle {
    pub anime_id: i32,
    pub title: String,
}
