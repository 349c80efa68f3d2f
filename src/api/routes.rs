use crate::api::{handlers, AppState};
use crate::config::Config;
use axum::{
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};

/// Build the main API router
///
/// Unmatched paths fall through to the static frontend bundle, with the
/// index document as not-found fallback so client-side routes resolve.
pub fn build_router(state: AppState, config: &Config) -> Router {
    let index = config.static_files.index_path();
    let frontend =
        ServeDir::new(&config.static_files.dir).fallback(ServeFile::new(index.clone()));

    Router::new()
        // Health endpoint
        .route("/health", get(handlers::health))
        // Prediction endpoints
        .route("/predict/diabetes", post(handlers::predict_diabetes))
        .route("/predict/heart", post(handlers::predict_heart))
        .route("/predict/liver", post(handlers::predict_liver))
        .route(
            "/predict/mental-health",
            post(handlers::predict_mental_health),
        )
        .route(
            "/predict/recommendations",
            post(handlers::predict_recommendations),
        )
        // Static frontend
        .route_service("/home", ServeFile::new(index))
        // Add state
        .with_state(state)
        .fallback_service(frontend)
        // Add middleware
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new())
                .on_response(DefaultOnResponse::new()),
        )
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(CorsLayer::permissive())
}
