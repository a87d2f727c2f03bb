use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use chrono::Local;

use super::domain::{ClaimDetails, PredictionResult};
use super::explanation::ExplanationProvider;
use super::form::ClaimForm;
use super::scoring::RngJitter;
use super::service::FraudAnalysisService;
use super::showcase::{DashboardSnapshot, ModelCard};
use crate::error::AppError;

/// Router builder exposing the prediction and showcase endpoints.
pub fn fraud_router<E>(service: Arc<FraudAnalysisService<E>>) -> Router
where
    E: ExplanationProvider + 'static,
{
    Router::new()
        .route("/api/v1/claims/sample", get(sample_handler))
        .route("/api/v1/claims/predict", post(predict_handler::<E>))
        .route("/api/v1/dashboard", get(dashboard_handler))
        .route("/api/v1/model", get(model_handler))
        .with_state(service)
}

pub(crate) async fn sample_handler() -> Json<ClaimDetails> {
    let today = Local::now().date_naive();
    Json(ClaimDetails::sample(today, &mut rand::thread_rng()))
}

pub(crate) async fn predict_handler<E>(
    State(service): State<Arc<FraudAnalysisService<E>>>,
    payload: Result<Json<ClaimForm>, JsonRejection>,
) -> Result<Json<PredictionResult>, AppError>
where
    E: ExplanationProvider + 'static,
{
    let Json(form) = payload.map_err(|rejection| {
        tracing::info!(error = %rejection.body_text(), "claim body rejected");
        AppError::from(rejection)
    })?;
    let mut jitter = RngJitter::from_entropy();
    let result = service.predict(&form, &mut jitter).await.map_err(|error| {
        tracing::info!(error = %error, "claim form rejected");
        AppError::from(error)
    })?;

    tracing::info!(
        probability = result.probability,
        risk_level = %result.risk_level,
        is_fraud = result.is_fraud,
        "claim scored"
    );
    Ok(Json(result))
}

pub(crate) async fn dashboard_handler() -> Json<DashboardSnapshot> {
    Json(DashboardSnapshot::showcase())
}

pub(crate) async fn model_handler() -> Json<ModelCard> {
    Json(ModelCard::showcase())
}
