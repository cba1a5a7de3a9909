use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use super::common::{read_json_body, seeded_store, service, store_with_fresh_pair};
use crate::store::StoreHandle;
use crate::workflows::submissions::submission_router;

fn router(store: StoreHandle) -> axum::Router {
    submission_router(Arc::new(service(store)))
}

fn post_json(uri: &str, payload: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

#[tokio::test]
async fn lists_seeded_submissions() {
    let (store, _) = seeded_store();
    let response = router(store)
        .oneshot(get("/api/v1/submissions"))
        .await
        .expect("list response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json_body(response).await;
    let items = body.as_array().expect("array payload");
    assert_eq!(items.len(), 5);
    assert_eq!(items[0]["id"], "s1");
    assert_eq!(items[0]["status"], "submitted_to_client");
    assert_eq!(items[1]["interviewRound"], 1);
}

#[tokio::test]
async fn detail_includes_available_actions() {
    let (store, _) = seeded_store();
    let response = router(store)
        .oneshot(get("/api/v1/submissions/s2"))
        .await
        .expect("detail response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json_body(response).await;
    assert_eq!(body["submission"]["status"], "client_interview");
    assert_eq!(
        body["available_actions"],
        json!(["advance_round", "make_offer", "reject"])
    );
}

#[tokio::test]
async fn unknown_submission_is_not_found() {
    let (store, _) = seeded_store();
    let response = router(store)
        .oneshot(get("/api/v1/submissions/s404"))
        .await
        .expect("detail response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = read_json_body(response).await;
    assert!(body["error"]
        .as_str()
        .expect("error message")
        .contains("s404"));
}

#[tokio::test]
async fn action_applies_transition_and_persists() {
    let (store, persistence) = seeded_store();
    let response = router(store.clone())
        .oneshot(post_json(
            "/api/v1/submissions/s1/actions",
            json!({ "action": "request_interview", "note": "Tech screen booked" }),
        ))
        .await
        .expect("action response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json_body(response).await;
    assert_eq!(body["submission"]["status"], "client_interview");
    assert_eq!(
        body["submission"]["lastActivity"],
        "Client Requested Interview: Tech screen booked"
    );
    assert_eq!(body["transition"]["from"], "submitted_to_client");

    let saved = persistence.last_saved().expect("snapshot saved");
    let s1 = saved
        .submissions
        .iter()
        .find(|submission| submission.id.0 == "s1")
        .expect("s1 persisted");
    assert_eq!(s1.last_activity, "Client Requested Interview: Tech screen booked");
}

#[tokio::test]
async fn refused_action_is_a_conflict() {
    let (store, _) = seeded_store();
    let before = store.snapshot();
    let response = router(store.clone())
        .oneshot(post_json(
            "/api/v1/submissions/s3/actions",
            json!({ "action": "make_offer" }),
        ))
        .await
        .expect("action response");
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(store.snapshot(), before);
}

#[tokio::test]
async fn offer_action_returns_handoff_route() {
    let (store, _) = seeded_store();
    let response = router(store)
        .oneshot(post_json(
            "/api/v1/submissions/s2/actions",
            json!({ "action": "make_offer" }),
        ))
        .await
        .expect("action response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json_body(response).await;
    assert_eq!(body["transition"]["route"], "/employee/recruiting/offer/s2");
}

#[tokio::test]
async fn pipeline_endpoint_reports_column_counts() {
    let (store, _) = seeded_store();
    let response = router(store)
        .oneshot(get("/api/v1/submissions/pipeline"))
        .await
        .expect("pipeline response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json_body(response).await;
    assert_eq!(body["total_active"], 5);
    assert_eq!(body["columns"][3]["label"], "Submitted");
    assert_eq!(body["columns"][3]["count"], 3);
}

#[tokio::test]
async fn builder_view_for_bench_candidate() {
    let (store, _) = seeded_store();
    let response = router(store)
        .oneshot(get("/api/v1/builder/c4/j3"))
        .await
        .expect("builder response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json_body(response).await;
    assert_eq!(body["back_link"], "/employee/bench/talent/c4");
    assert_eq!(body["view"]["view"], "drafting");
    assert_eq!(body["view"]["step"], "resume");
    assert_eq!(body["available_actions"], json!(["screen", "submit_to_client"]));
}

#[tokio::test]
async fn builder_view_for_unknown_job_is_not_found() {
    let (store, _) = seeded_store();
    let response = router(store)
        .oneshot(get("/api/v1/builder/c1/ext-404"))
        .await
        .expect("builder response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn confirm_creates_submission() {
    let store = store_with_fresh_pair();
    let response = router(store.clone())
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/builder/c10/j9/confirm")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("confirm response");
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = read_json_body(response).await;
    assert_eq!(body["status"], "submitted_to_client");
    assert!(body["id"].as_str().expect("id").starts_with("sub"));
    assert_eq!(store.submissions().len(), 6);
}
