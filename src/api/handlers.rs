use crate::api::AppState;
use crate::error::Result;
use crate::models::{Condition, ModelStatus, RawInput, RecommendationResult, RiskResult};
use crate::recommendations::{self, RecommendationInput};
use axum::{extract::State, Json};
use serde::Serialize;

/// Health check: process status plus per-condition artifact load state
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "online".to_string(),
        models: state.registry.status(),
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub models: ModelStatus,
}

/// Diabetes risk prediction
pub async fn predict_diabetes(
    State(state): State<AppState>,
    Json(data): Json<RawInput>,
) -> Result<Json<RiskResult>> {
    Ok(Json(state.registry.predict(Condition::Diabetes, &data)?))
}

/// Heart disease risk prediction
pub async fn predict_heart(
    State(state): State<AppState>,
    Json(data): Json<RawInput>,
) -> Result<Json<RiskResult>> {
    Ok(Json(state.registry.predict(Condition::Heart, &data)?))
}

/// Liver disease risk prediction
pub async fn predict_liver(
    State(state): State<AppState>,
    Json(data): Json<RawInput>,
) -> Result<Json<RiskResult>> {
    Ok(Json(state.registry.predict(Condition::Liver, &data)?))
}

/// Mental health risk prediction
pub async fn predict_mental_health(
    State(state): State<AppState>,
    Json(data): Json<RawInput>,
) -> Result<Json<RiskResult>> {
    Ok(Json(state.registry.predict(Condition::MentalHealth, &data)?))
}

/// Lifestyle recommendations from aggregated raw inputs
pub async fn predict_recommendations(
    Json(input): Json<RecommendationInput>,
) -> Result<Json<RecommendationResult>> {
    Ok(Json(recommendations::generate(&input)?))
}
