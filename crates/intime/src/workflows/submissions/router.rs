use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use serde_json::json;

use super::builder::BuilderView;
use super::domain::{CandidateId, JobId, SubmissionAction, SubmissionId};
use super::service::{SubmissionService, SubmissionServiceError};
use super::transition::available_actions;

/// Router builder exposing the submission lifecycle over HTTP.
pub fn submission_router(service: Arc<SubmissionService>) -> Router {
    Router::new()
        .route("/api/v1/submissions", get(list_handler))
        .route("/api/v1/submissions/pipeline", get(pipeline_handler))
        .route("/api/v1/submissions/:submission_id", get(detail_handler))
        .route(
            "/api/v1/submissions/:submission_id/actions",
            post(action_handler),
        )
        .route(
            "/api/v1/builder/:candidate_id/:job_id",
            get(builder_view_handler),
        )
        .route(
            "/api/v1/builder/:candidate_id/:job_id/confirm",
            post(confirm_handler),
        )
        .with_state(service)
}

#[derive(Debug, Serialize)]
struct BuilderResponse {
    candidate_id: CandidateId,
    job_id: JobId,
    back_link: String,
    view: BuilderView,
    available_actions: Vec<&'static str>,
}

pub(crate) async fn list_handler(State(service): State<Arc<SubmissionService>>) -> Response {
    (StatusCode::OK, axum::Json(service.list())).into_response()
}

pub(crate) async fn pipeline_handler(State(service): State<Arc<SubmissionService>>) -> Response {
    (StatusCode::OK, axum::Json(service.pipeline())).into_response()
}

pub(crate) async fn detail_handler(
    State(service): State<Arc<SubmissionService>>,
    Path(submission_id): Path<String>,
) -> Response {
    match service.get(&SubmissionId(submission_id)) {
        Ok(submission) => {
            let actions = available_actions(submission.status);
            let payload = json!({
                "submission": submission,
                "available_actions": actions,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(err) => error_response(err),
    }
}

pub(crate) async fn action_handler(
    State(service): State<Arc<SubmissionService>>,
    Path(submission_id): Path<String>,
    axum::Json(action): axum::Json<SubmissionAction>,
) -> Response {
    match service.apply(&SubmissionId(submission_id), &action) {
        Ok(outcome) => (StatusCode::OK, axum::Json(outcome)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn builder_view_handler(
    State(service): State<Arc<SubmissionService>>,
    Path((candidate_id, job_id)): Path<(String, String)>,
) -> Response {
    let candidate_id = CandidateId(candidate_id);
    let job_id = JobId(job_id);
    match service.open_builder(&candidate_id, &job_id) {
        Ok(builder) => {
            let available = builder
                .submission()
                .map(|submission| available_actions(submission.status))
                .unwrap_or_default();
            let body = BuilderResponse {
                candidate_id,
                job_id,
                back_link: builder.back_link(),
                view: builder.view(),
                available_actions: available,
            };
            builder.close();
            (StatusCode::OK, axum::Json(body)).into_response()
        }
        Err(err) => error_response(err),
    }
}

pub(crate) async fn confirm_handler(
    State(service): State<Arc<SubmissionService>>,
    Path((candidate_id, job_id)): Path<(String, String)>,
) -> Response {
    match service
        .submit_package(&CandidateId(candidate_id), &JobId(job_id))
        .await
    {
        Ok(submission) => (StatusCode::CREATED, axum::Json(submission)).into_response(),
        Err(err) => error_response(err),
    }
}

fn error_response(err: SubmissionServiceError) -> Response {
    let payload = json!({ "error": err.to_string() });
    (err.status_code(), axum::Json(payload)).into_response()
}
