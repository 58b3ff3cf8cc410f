use axum::{
    Router,
    http::HeaderValue,
    middleware,
    routing::{MethodRouter, delete, get, post},
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::services::{AnimeService, GuessService, SessionService};
use crate::state::SharedState;

mod anime;
mod error;
mod guess;
mod health;
mod observability;
mod session;
mod types;
mod validation;

pub use error::ApiError;
pub use observability::GameEvent;
pub use types::*;

use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub struct AppState {
    pub shared: Arc<SharedState>,

    pub start_time: std::time::Instant,

    pub prometheus_handle: Option<PrometheusHandle>,
}

impl AppState {
    #[must_use]
    pub fn config(&self) -> &Arc<RwLock<Config>> {
        &self.shared.config
    }

    #[must_use]
    pub fn store(&self) -> &crate::db::Store {
        &self.shared.store
    }

    #[must_use]
    pub fn anime_service(&self) -> &Arc<dyn AnimeService> {
        &self.shared.anime_service
    }

    #[must_use]
    pub fn session_service(&self) -> &Arc<dyn SessionService> {
        &self.shared.session_service
    }

    #[must_use]
    pub fn guess_service(&self) -> &Arc<dyn GuessService> {
        &self.shared.guess_service
    }
}

#[must_use]
pub fn create_app_state(
    shared: Arc<SharedState>,
    prometheus_handle: Option<PrometheusHandle>,
) -> Arc<AppState> {
    Arc::new(AppState {
        shared,
        start_time: std::time::Instant::now(),
        prometheus_handle,
    })
}

pub async fn create_app_state_from_config(
    config: Config,
    prometheus_handle: Option<PrometheusHandle>,
) -> anyhow::Result<Arc<AppState>> {
    let shared = Arc::new(SharedState::new(config).await?);
    Ok(create_app_state(shared, prometheus_handle))
}

pub async fn router(state: Arc<AppState>) -> Router {
    let cors_origins = state.config().read().await.server.cors_allowed_origins.clone();

    let cors_layer = if cors_origins.is_empty() || cors_origins.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> =
            cors_origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins)
    };

    Router::new()
        .merge(anime_routes())
        .merge(guess_routes())
        .merge(session_routes())
        .route("/health/live", get(health::health_live))
        .route("/health/ready", get(health::health_ready))
        .route("/metrics", get(observability::get_metrics))
        .with_state(state)
        .layer(cors_layer.allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(observability::logging_middleware))
}

fn anime_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/anime", get(anime::get_anime))
        .route("/random-anime", get(anime::random_anime))
        .route("/anime-titles", get(anime::list_titles))
        .route("/anime-genres", get(anime::list_genres))
        .route("/anime-studios", get(anime::list_studios))
}

fn guess_root() -> MethodRouter<Arc<AppState>> {
    get(guess::list_guesses)
        .post(guess::post_guess)
        .delete(guess::delete_guesses)
}

fn guess_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/guess", guess_root())
        .route("/guess/", guess_root())
        .route("/guess/guesses", get(guess::list_guesses))
        .route("/guess/get-guesses", get(guess::list_guesses))
        .route("/guess/post-guess", post(guess::post_guess))
        .route("/guess/delete-guesses", delete(guess::delete_guesses))
        .route("/guess/hints", get(guess::hints))
}

fn session_root() -> MethodRouter<Arc<AppState>> {
    get(session::get_session)
        .post(session::post_session)
        .delete(session::delete_session)
}

fn session_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/session", session_root())
        .route("/session/", session_root())
        .route("/session/get-session", get(session::get_session))
        .route("/session/post-session", post(session::post_session))
        .route("/session/delete-session", delete(session::delete_session))
        .route("/session/new-round", post(session::new_round))
        .route("/session/state", get(session::round_state))
}
