mod common;

use axum::http::StatusCode;
use common::spawn_app;
use serde_json::json;

#[tokio::test]
async fn test_anime_by_id_returns_requested_anime() {
    let app = spawn_app().await;
    app.seed().await;

    let (status, body) = app.get("/anime?animeId=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["malId"], 2);
    assert_eq!(body["title"], "Re:Zero");
    assert_eq!(body["startSeason"], "spring 2016");
    assert_eq!(body["mediaType"], "tv");
    assert_eq!(body["genres"], json!(["Drama", "Fantasy"]));
    assert_eq!(body["studios"], json!(["White Fox"]));
}

#[tokio::test]
async fn test_anime_list_aggregates_every_anime() {
    let app = spawn_app().await;
    app.seed().await;

    let (status, body) = app.get("/anime").await;
    assert_eq!(status, StatusCode::OK);
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 3);

    let gintama = list.iter().find(|a| a["malId"] == 3).unwrap();
    assert_eq!(gintama["genres"], json!(["Action", "Comedy", "Sci-Fi"]));
    assert_eq!(gintama["studios"], json!(["Sunrise"]));
}

#[tokio::test]
async fn test_unknown_anime_is_not_found() {
    let app = spawn_app().await;
    app.seed().await;

    let (status, body) = app.get("/anime?animeId=999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Anime 999 not found");
}

#[tokio::test]
async fn test_malformed_anime_id_is_a_bad_request() {
    let app = spawn_app().await;

    let (status, body) = app.get("/anime?animeId=abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("Invalid query string"));

    let (status, _) = app.get("/anime?animeId=-4").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_genres_and_studios_are_distinct_and_sorted() {
    let app = spawn_app().await;
    app.seed().await;

    let (status, genres) = app.get("/anime-genres").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        genres,
        json!(["Action", "Comedy", "Drama", "Fantasy", "Sci-Fi", "Suspense"])
    );

    let (status, studios) = app.get("/anime-studios").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(studios, json!(["Sunrise", "White Fox"]));
}

#[tokio::test]
async fn test_titles_include_aliases_and_filter() {
    let app = spawn_app().await;
    app.seed().await;

    let (status, body) = app.get("/anime-titles").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 5);

    let (_, body) = app.get("/anime-titles?q=steins").await;
    let hits = body.as_array().unwrap();
    assert_eq!(hits.len(), 2);
    assert!(hits.iter().all(|t| t["animeId"] == 1));

    let (_, body) = app.get("/anime-titles?q=a&limit=1").await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (status, _) = app.get("/anime-titles?limit=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_random_anime_needs_a_catalogue() {
    let app = spawn_app().await;

    let (status, body) = app.get("/random-anime").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());

    app.seed().await;
    let (status, body) = app.get("/random-anime").await;
    assert_eq!(status, StatusCode::OK);
    let id = body["malId"].as_i64().unwrap();
    assert!((1..=3).contains(&id));
}

#[tokio::test]
async fn test_session_is_null_before_any_round() {
    let app = spawn_app().await;

    let (status, body) = app.get("/session/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_null());

    let (status, body) = app.get("/session/state").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "idle");
    assert_eq!(body["guessCount"], 0);
}

#[tokio::test]
async fn test_session_for_unknown_anime_is_rejected() {
    let app = spawn_app().await;
    app.seed().await;

    let (status, _) = app.post("/session/", json!({ "animeId": 404 })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = app.post("/session/", json!({ "anime": 1 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("Invalid request body"));
}

#[tokio::test]
async fn test_guess_without_session_is_a_conflict() {
    let app = spawn_app().await;
    app.seed().await;

    let (status, body) = app.guess(1).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "no active round");

    let (status, body) = app.get("/guess/hints").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "no active round");
}

#[tokio::test]
async fn test_guess_for_unknown_anime_is_not_found() {
    let app = spawn_app().await;
    app.seed().await;
    app.post("/session/", json!({ "animeId": 1 })).await;

    let (status, _) = app.guess(12345).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = app.get("/guess/").await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_legacy_route_aliases() {
    let app = spawn_app().await;
    app.seed().await;

    let (status, body) = app
        .post("/session/post-session", json!({ "animeId": 3 }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["created"], true);

    let (_, body) = app.get("/session/get-session").await;
    assert_eq!(body["animeId"], 3);

    let (status, body) = app
        .post("/guess/post-guess", json!({ "animeId": 3 }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["correct"], true);

    let (_, body) = app.get("/guess/get-guesses").await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    let (_, body) = app.get("/guess/guesses").await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (status, _) = app.delete("/guess/delete-guesses").await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = app.delete("/session/delete-session").await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = app.get("/session").await;
    assert!(body.is_null());
}

#[tokio::test]
async fn test_health_endpoints() {
    let app = spawn_app().await;

    let (status, body) = app.get("/health/live").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "alive");

    let (status, body) = app.get("/health/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ready"], true);
    assert_eq!(body["checks"]["database"], true);
}

#[tokio::test]
async fn test_metrics_without_recorder() {
    let app = spawn_app().await;

    let (status, body) = app.get("/metrics").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Metrics not enabled or failed to initialize");
}
