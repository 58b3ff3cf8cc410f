#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use guess_anime::api::{AppState, GameEvent};
use guess_anime::config::Config;
use guess_anime::domain::RoundEndPolicy;
use guess_anime::models::import::AnimeRecord;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

pub struct TestApp {
    pub state: Arc<AppState>,
    pub router: Router,
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with_policy(RoundEndPolicy::default()).await
}

pub async fn spawn_app_with_policy(policy: RoundEndPolicy) -> TestApp {
    let db_path =
        std::env::temp_dir().join(format!("guess-anime-test-{}.db", uuid::Uuid::new_v4()));

    let mut config = Config::default();
    config.general.database_path = format!("sqlite:{}", db_path.display());
    config.game.round_end_policy = policy;

    let state = guess_anime::api::create_app_state_from_config(config, None)
        .await
        .expect("failed to create app state");

    let router = guess_anime::api::router(state.clone()).await;
    TestApp { state, router }
}

pub fn record(value: Value) -> AnimeRecord {
    serde_json::from_value(value).expect("invalid test record")
}

impl TestApp {
    /// Seeds three anime with overlapping genres and studios.
    pub async fn seed(&self) {
        let records = vec![
            record(json!({
                "malId": 1,
                "title": "Steins;Gate",
                "source": "visual_novel",
                "startSeason": "spring 2011",
                "mean": 9.07,
                "mediaType": "tv",
                "alternativeTitles": ["Steins Gate", "シュタインズ・ゲート"],
                "genres": ["Drama", "Sci-Fi", "Suspense"],
                "studios": ["White Fox"]
            })),
            record(json!({
                "malId": 2,
                "title": "Re:Zero",
                "source": "light_novel",
                "startSeason": "spring 2016",
                "mean": 8.23,
                "mediaType": "tv",
                "genres": ["Drama", "Fantasy"],
                "studios": ["White Fox"]
            })),
            record(json!({
                "malId": 3,
                "title": "Gintama",
                "source": "manga",
                "startSeason": "spring 2006",
                "mean": 8.94,
                "mediaType": "tv",
                "genres": ["Action", "Comedy", "Sci-Fi"],
                "studios": ["Sunrise"]
            })),
        ];

        self.state
            .anime_service()
            .import_anime(&records)
            .await
            .expect("failed to seed catalogue");
    }

    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };
        (status, value)
    }

    /// The game event a request attached to its response, if any.
    pub async fn game_event(&self, method: Method, uri: &str, body: Option<Value>) -> Option<GameEvent> {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        response.extensions().get::<GameEvent>().copied()
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::DELETE, uri, None).await
    }

    pub async fn guess(&self, anime_id: i32) -> (StatusCode, Value) {
        self.post("/guess/", json!({ "animeId": anime_id })).await
    }
}
