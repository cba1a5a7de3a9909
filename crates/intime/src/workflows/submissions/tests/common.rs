use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::store::{AppStore, Candidate, CandidateKind, Job, MemoryPersistence, StoreHandle};
use crate::workflows::submissions::domain::{
    CandidateId, JobId, Submission, SubmissionId, SubmissionStatus,
};
use crate::workflows::submissions::{SimulatedLatency, SubmissionService};

pub(super) fn submission(id: &str, status: SubmissionStatus) -> Submission {
    Submission {
        id: SubmissionId(id.to_string()),
        job_id: JobId("j2".to_string()),
        candidate_id: CandidateId("c2".to_string()),
        status,
        created_at: "2024-10-12".to_string(),
        last_activity: "2024-10-18".to_string(),
        match_score: 88,
        interview_round: 1,
    }
}

pub(super) fn candidate(id: &str, kind: CandidateKind) -> Candidate {
    Candidate {
        id: CandidateId(id.to_string()),
        name: "Nadia Brooks".to_string(),
        role: "ClaimCenter Dev".to_string(),
        status: "active".to_string(),
        kind,
        skills: vec![
            "ClaimCenter".to_string(),
            "Gosu".to_string(),
            "Integration".to_string(),
            "SQL".to_string(),
        ],
        experience: "5 Yrs".to_string(),
        location: "Remote".to_string(),
        rate: "$95/hr".to_string(),
        email: "nadia@example.com".to_string(),
        score: 91,
        source: "Academy".to_string(),
        notes: String::new(),
        owner_id: "e3".to_string(),
    }
}

pub(super) fn job(id: &str) -> Job {
    Job {
        id: JobId(id.to_string()),
        account_id: "a2".to_string(),
        client: "Global Mutual".to_string(),
        title: "ClaimCenter Consultant".to_string(),
        status: "open".to_string(),
        kind: "Contract".to_string(),
        rate: "$90-100/hr".to_string(),
        location: "Remote".to_string(),
        owner_id: "e3".to_string(),
        description: "Claims modernisation.".to_string(),
    }
}

/// Seeded store plus the persistence it writes to, so tests can count saves.
pub(super) fn seeded_store() -> (StoreHandle, Arc<MemoryPersistence>) {
    let persistence = Arc::new(MemoryPersistence::default());
    let store = AppStore::open(crate::store::seed::seed_snapshot(), persistence.clone())
        .expect("memory store opens")
        .into_handle();
    (store, persistence)
}

/// Seeded store with candidate c10 and job j9 and no submission between them.
pub(super) fn store_with_fresh_pair() -> StoreHandle {
    let (store, _) = seeded_store();
    store
        .add_candidate(candidate("c10", CandidateKind::External))
        .expect("candidate added");
    store.add_job(job("j9")).expect("job added");
    store
}

pub(super) fn service(store: StoreHandle) -> SubmissionService {
    SubmissionService::new(store, SimulatedLatency::none())
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
