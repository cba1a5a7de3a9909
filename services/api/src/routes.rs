use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use intime::error::AppError;
use intime::workflows::crm::{BantAssessment, BantScore};
use intime::workflows::submissions::{submission_router, SubmissionService};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

pub(crate) fn with_platform_routes(service: Arc<SubmissionService>) -> axum::Router {
    submission_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/crm/leads/qualify",
            axum::routing::post(qualify_lead_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn qualify_lead_endpoint(
    Json(assessment): Json<BantAssessment>,
) -> Result<Json<BantScore>, AppError> {
    let score = assessment.score()?;
    info!(total = score.total, tier = score.label, "lead qualified");
    Ok(Json(score))
}
