//! End-to-end rounds driven through the HTTP API.

mod common;

use axum::http::StatusCode;
use common::{spawn_app, spawn_app_with_policy};
use guess_anime::domain::RoundEndPolicy;
use serde_json::json;

#[tokio::test]
async fn test_scenario_wrong_then_right_guess() {
    let app = spawn_app().await;
    app.seed().await;

    let (status, _) = app.post("/session/", json!({ "animeId": 1 })).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app.guess(2).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["correct"], false);
    assert_eq!(body["duplicate"], false);

    let (status, body) = app.guess(1).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["correct"], true);
    assert_eq!(body["message"], "Successfully posted guess.");

    let (status, body) = app.get("/guess/").await;
    assert_eq!(status, StatusCode::OK);
    let guesses = body.as_array().unwrap();
    assert_eq!(guesses.len(), 2);
    assert_eq!(guesses[0]["animeId"], 1);
    assert_eq!(guesses[0]["correct"], true);
    assert_eq!(guesses[0]["title"], "Steins;Gate");
    assert_eq!(guesses[0]["genres"], json!(["Drama", "Sci-Fi", "Suspense"]));
    assert_eq!(guesses[1]["animeId"], 2);
    assert_eq!(guesses[1]["correct"], false);
}

#[tokio::test]
async fn test_repeated_correct_guess_is_stored_once() {
    let app = spawn_app().await;
    app.seed().await;
    app.post("/session/", json!({ "animeId": 3 })).await;

    let (_, first) = app.guess(3).await;
    assert_eq!(first["correct"], true);
    assert_eq!(first["duplicate"], false);

    let (status, second) = app.guess(3).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second["correct"], true);
    assert_eq!(second["duplicate"], true);

    let (_, body) = app.get("/guess/").await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_repeated_wrong_guess_is_stored_once() {
    let app = spawn_app().await;
    app.seed().await;
    app.post("/session/", json!({ "animeId": 3 })).await;

    app.guess(1).await;
    let (status, body) = app.guess(1).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["correct"], false);
    assert_eq!(body["duplicate"], true);

    let (_, body) = app.get("/session/state").await;
    assert_eq!(body["guessCount"], 1);
}

#[tokio::test]
async fn test_second_session_never_overwrites_the_answer() {
    let app = spawn_app().await;
    app.seed().await;

    let (_, body) = app.post("/session/", json!({ "animeId": 1 })).await;
    assert_eq!(body["created"], true);

    let (status, body) = app.post("/session/", json!({ "animeId": 2 })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["created"], false);

    let (_, body) = app.get("/session/").await;
    assert_eq!(body["animeId"], 1);
}

#[tokio::test]
async fn test_concurrent_session_creation_leaves_one_session() {
    let app = spawn_app().await;
    app.seed().await;

    let mut tasks = tokio::task::JoinSet::new();
    for round in 0..12 {
        let router = app.router.clone();
        let anime_id = (round % 3) + 1;
        tasks.spawn(async move {
            use axum::body::Body;
            use axum::http::Request;
            use http_body_util::BodyExt;
            use tower::ServiceExt;

            let request = Request::builder()
                .method("POST")
                .uri("/session/")
                .header("content-type", "application/json")
                .body(Body::from(json!({ "animeId": anime_id }).to_string()))
                .unwrap();
            let response = router.oneshot(request).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            let bytes = response.into_body().collect().await.unwrap().to_bytes();
            let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
            (anime_id, body["created"].as_bool().unwrap())
        });
    }

    let mut winners = Vec::new();
    while let Some(result) = tasks.join_next().await {
        let (anime_id, created) = result.unwrap();
        if created {
            winners.push(anime_id);
        }
    }

    assert_eq!(winners.len(), 1);
    let (_, body) = app.get("/session/").await;
    assert_eq!(body["animeId"], winners[0]);
}

#[tokio::test]
async fn test_clearing_guesses_empties_the_list() {
    let app = spawn_app().await;
    app.seed().await;
    app.post("/session/", json!({ "animeId": 2 })).await;
    app.guess(1).await;
    app.guess(3).await;

    let (status, body) = app.delete("/guess/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Successfully deleted all guesses.");

    let (_, body) = app.get("/guess/").await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_replaced_session_does_not_leak_the_old_answer() {
    let app = spawn_app().await;
    app.seed().await;

    app.post("/session/", json!({ "animeId": 1 })).await;
    let (_, body) = app.guess(1).await;
    assert_eq!(body["correct"], true);

    app.delete("/session/").await;
    app.post("/session/", json!({ "animeId": 2 })).await;

    let (status, body) = app.guess(1).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["correct"], false);

    let (_, body) = app.guess(2).await;
    assert_eq!(body["correct"], true);
}

#[tokio::test]
async fn test_solved_round_does_not_carry_into_the_next_session() {
    let app = spawn_app().await;
    app.seed().await;

    app.post("/session/", json!({ "animeId": 1 })).await;
    app.guess(1).await;
    let (_, state) = app.get("/session/state").await;
    assert_eq!(state["status"], "finished");

    let (status, _) = app.delete("/session/").await;
    assert_eq!(status, StatusCode::OK);
    let (_, body) = app.get("/guess/").await;
    assert!(body.as_array().unwrap().is_empty());

    app.post("/session/", json!({ "animeId": 2 })).await;
    let (_, state) = app.get("/session/state").await;
    assert_eq!(state["status"], "active");
    assert_eq!(state["animeId"], 2);
    assert_eq!(state["guessCount"], 0);

    let (status, body) = app.guess(3).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["correct"], false);

    let (status, body) = app.guess(2).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["correct"], true);
    assert_eq!(body["duplicate"], false);
}

#[tokio::test]
async fn test_new_round_resets_guesses_and_answer() {
    let app = spawn_app().await;
    app.seed().await;
    app.post("/session/", json!({ "animeId": 1 })).await;
    app.guess(2).await;

    let (status, body) = app
        .request(axum::http::Method::POST, "/session/new-round", None)
        .await;
    assert_eq!(status, StatusCode::OK);
    let answer = body["animeId"].as_i64().unwrap();
    assert!((1..=3).contains(&answer));

    let (_, body) = app.get("/guess/").await;
    assert!(body.as_array().unwrap().is_empty());

    let (_, body) = app.get("/session/").await;
    assert_eq!(body["animeId"], answer);

    let (_, state) = app.get("/session/state").await;
    assert_eq!(state["status"], "active");
    assert_eq!(state["animeId"], answer);
    assert_eq!(state["guessCount"], 0);
}

#[tokio::test]
async fn test_round_finishes_on_correct_guess() {
    let app = spawn_app().await;
    app.seed().await;
    app.post("/session/", json!({ "animeId": 2 })).await;

    app.guess(1).await;
    let (_, state) = app.get("/session/state").await;
    assert_eq!(state["status"], "active");

    app.guess(2).await;
    let (_, state) = app.get("/session/state").await;
    assert_eq!(state["status"], "finished");
    assert_eq!(state["solved"], true);
    assert_eq!(state["guessCount"], 2);

    let (status, body) = app.guess(3).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "round is over");
}

#[tokio::test]
async fn test_continue_policy_keeps_accepting_guesses() {
    let app = spawn_app_with_policy(RoundEndPolicy::Continue).await;
    app.seed().await;
    app.post("/session/", json!({ "animeId": 2 })).await;

    app.guess(2).await;
    let (status, body) = app.guess(3).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["correct"], false);

    let (_, state) = app.get("/session/state").await;
    assert_eq!(state["status"], "active");
    assert_eq!(state["guessCount"], 2);
}

#[tokio::test]
async fn test_end_on_any_guess_policy_allows_one_guess() {
    let app = spawn_app_with_policy(RoundEndPolicy::EndOnAnyGuess).await;
    app.seed().await;
    app.post("/session/", json!({ "animeId": 2 })).await;

    let (status, body) = app.guess(1).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["correct"], false);

    let (_, state) = app.get("/session/state").await;
    assert_eq!(state["status"], "finished");
    assert_eq!(state["solved"], false);

    let (status, _) = app.guess(2).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_hints_compare_each_guess_with_the_answer() {
    let app = spawn_app().await;
    app.seed().await;
    // Answer: Re:Zero, spring 2016, 8.23, light_novel, White Fox.
    app.post("/session/", json!({ "animeId": 2 })).await;
    app.guess(3).await;
    app.guess(1).await;

    let (status, body) = app.get("/guess/hints").await;
    assert_eq!(status, StatusCode::OK);
    let hints = body.as_array().unwrap();
    assert_eq!(hints.len(), 2);

    let steins_gate = &hints[0];
    assert_eq!(steins_gate["animeId"], 1);
    assert_eq!(steins_gate["correct"], false);
    assert_eq!(steins_gate["startSeason"]["seasonMatches"], true);
    assert_eq!(steins_gate["startSeason"]["yearMatches"], false);
    assert_eq!(steins_gate["startSeason"]["yearDirection"], "up");
    assert_eq!(steins_gate["studios"], json!([{ "value": "White Fox", "present": true }]));
    assert_eq!(steins_gate["sourceMatches"], false);
    assert_eq!(steins_gate["mediaTypeMatches"], true);
    assert_eq!(steins_gate["mean"]["matches"], false);
    assert_eq!(steins_gate["mean"]["direction"], "down");

    let gintama = &hints[1];
    assert_eq!(gintama["animeId"], 3);
    assert_eq!(
        gintama["genres"],
        json!([
            { "value": "Action", "present": false },
            { "value": "Comedy", "present": false },
            { "value": "Sci-Fi", "present": false }
        ])
    );
    assert_eq!(gintama["studios"], json!([{ "value": "Sunrise", "present": false }]));
}

#[tokio::test]
async fn test_game_requests_carry_their_event() {
    use axum::http::Method;
    use guess_anime::api::GameEvent;

    let app = spawn_app().await;
    app.seed().await;

    let created = app
        .game_event(Method::POST, "/session/", Some(json!({ "animeId": 2 })))
        .await;
    assert_eq!(created, Some(GameEvent::SessionCreated));

    let kept = app
        .game_event(Method::POST, "/session/", Some(json!({ "animeId": 3 })))
        .await;
    assert_eq!(kept, Some(GameEvent::SessionKept));

    let wrong = app
        .game_event(Method::POST, "/guess/", Some(json!({ "animeId": 1 })))
        .await;
    assert_eq!(wrong, Some(GameEvent::GuessWrong));

    let repeat = app
        .game_event(Method::POST, "/guess/", Some(json!({ "animeId": 1 })))
        .await;
    assert_eq!(repeat, Some(GameEvent::GuessDuplicate));

    let right = app
        .game_event(Method::POST, "/guess/", Some(json!({ "animeId": 2 })))
        .await;
    assert_eq!(right, Some(GameEvent::GuessCorrect));

    assert_eq!(app.game_event(Method::GET, "/session/state", None).await, None);

    let ended = app.game_event(Method::DELETE, "/session/", None).await;
    assert_eq!(ended, Some(GameEvent::SessionEnded));
    assert_eq!(app.game_event(Method::DELETE, "/session/", None).await, None);
}
