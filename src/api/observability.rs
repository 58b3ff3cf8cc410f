use crate::api::AppState;
use axum::{extract::State, response::IntoResponse};
use std::sync::Arc;

/// `GET /metrics`
pub async fn get_metrics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    state.prometheus_handle.as_ref().map_or_else(
        || "Metrics not enabled or failed to initialize".to_string(),
        metrics_exporter_prometheus::PrometheusHandle::render,
    )
}

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{Instrument, info, info_span};
use uuid::Uuid;

/// What a request did to the game. Handlers attach it to their response
/// as an [`axum::Extension`]; the middleware turns it into a metric label
/// and a log field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    GuessCorrect,
    GuessWrong,
    GuessDuplicate,
    GuessesCleared,
    SessionCreated,
    SessionKept,
    SessionEnded,
    RoundStarted,
}

impl GameEvent {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GuessCorrect => "guess_correct",
            Self::GuessWrong => "guess_wrong",
            Self::GuessDuplicate => "guess_duplicate",
            Self::GuessesCleared => "guesses_cleared",
            Self::SessionCreated => "session_created",
            Self::SessionKept => "session_kept",
            Self::SessionEnded => "session_ended",
            Self::RoundStarted => "round_started",
        }
    }

    #[must_use]
    pub const fn for_guess(correct: bool, duplicate: bool) -> Self {
        match (duplicate, correct) {
            (true, _) => Self::GuessDuplicate,
            (false, true) => Self::GuessCorrect,
            (false, false) => Self::GuessWrong,
        }
    }
}

/// Game requests rejected with 409 are labelled by the route they hit.
fn rejected_event(route: &str) -> Option<&'static str> {
    if route.starts_with("/guess") {
        Some("guess_rejected")
    } else if route.starts_with("/session") {
        Some("session_rejected")
    } else {
        None
    }
}

/// Per-request span with a request id, plus HTTP and game metrics.
/// Method, URI and latency logging is left to `TraceLayer`.
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let request_id = Uuid::new_v4();

    let method = req.method().to_string();
    let route = req
        .extensions()
        .get::<axum::extract::MatchedPath>()
        .map_or_else(|| "unmatched".to_string(), |mp| mp.as_str().to_string());

    let span = info_span!(
        "request",
        %request_id,
        route = %route,
        game_event = tracing::field::Empty,
    );

    async move {
        let response = next.run(req).await;
        let status = response.status();

        let labels = [
            ("method", method),
            ("path", route.clone()),
            ("status", status.as_u16().to_string()),
        ];
        metrics::counter!("http_requests_total", &labels).increment(1);
        metrics::histogram!("http_request_duration_seconds", &labels)
            .record(start.elapsed().as_secs_f64());

        let event = response
            .extensions()
            .get::<GameEvent>()
            .map(|e| e.as_str())
            .or_else(|| {
                (status == axum::http::StatusCode::CONFLICT)
                    .then(|| rejected_event(&route))
                    .flatten()
            });

        if let Some(event) = event {
            tracing::Span::current().record("game_event", event);
            metrics::counter!("game_events_total", "event" => event).increment(1);
            info!(status = status.as_u16(), "Game request finished");
        }

        response
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guess_events_follow_the_outcome() {
        assert_eq!(GameEvent::for_guess(true, false), GameEvent::GuessCorrect);
        assert_eq!(GameEvent::for_guess(false, false), GameEvent::GuessWrong);
        assert_eq!(GameEvent::for_guess(true, true), GameEvent::GuessDuplicate);
        assert_eq!(GameEvent::GuessCorrect.as_str(), "guess_correct");
    }

    #[test]
    fn conflicts_are_labelled_by_route() {
        assert_eq!(rejected_event("/guess/"), Some("guess_rejected"));
        assert_eq!(rejected_event("/guess/post-guess"), Some("guess_rejected"));
        assert_eq!(rejected_event("/session/new-round"), Some("session_rejected"));
        assert_eq!(rejected_event("/anime"), None);
    }
}
