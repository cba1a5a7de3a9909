//! End-to-end submission scenarios driven through the public service facade, so the lifecycle
//! is exercised the way the API binary and CLI use it.

mod common {
    use std::sync::Arc;

    use intime::store::{seed::seed_snapshot, AppStore, Candidate, CandidateKind, Job};
    use intime::store::{MemoryPersistence, StoreHandle};
    use intime::workflows::submissions::{CandidateId, JobId, SimulatedLatency, SubmissionService};

    pub(super) fn service() -> (SubmissionService, Arc<MemoryPersistence>) {
        let persistence = Arc::new(MemoryPersistence::default());
        let store: StoreHandle = AppStore::open(seed_snapshot(), persistence.clone())
            .expect("store opens")
            .into_handle();
        (
            SubmissionService::new(store, SimulatedLatency::none()),
            persistence,
        )
    }

    pub(super) fn onboard_pair(service: &SubmissionService) -> (CandidateId, JobId) {
        let candidate = Candidate {
            id: CandidateId("c10".to_string()),
            name: "Jordan Ellis".to_string(),
            role: "PolicyCenter Config".to_string(),
            status: "new".to_string(),
            kind: CandidateKind::Student,
            skills: vec!["PolicyCenter".to_string(), "Gosu".to_string()],
            experience: "2 Yrs".to_string(),
            location: "Remote".to_string(),
            rate: "$70/hr".to_string(),
            email: "jordan@example.com".to_string(),
            score: 84,
            source: "Academy".to_string(),
            notes: String::new(),
            owner_id: "e3".to_string(),
        };
        let job = Job {
            id: JobId("j9".to_string()),
            account_id: "a3".to_string(),
            client: "Summit Re".to_string(),
            title: "PolicyCenter Configurator".to_string(),
            status: "open".to_string(),
            kind: "Contract".to_string(),
            rate: "$75-85/hr".to_string(),
            location: "Remote".to_string(),
            owner_id: "e3".to_string(),
            description: String::new(),
        };

        let store = service.store();
        store.add_candidate(candidate).expect("candidate added");
        store.add_job(job).expect("job added");
        (CandidateId("c10".to_string()), JobId("j9".to_string()))
    }
}

use intime::workflows::submissions::{
    BuilderView, DraftStep, SubmissionAction, SubmissionId, SubmissionStatus,
};

#[tokio::test]
async fn new_pair_is_submitted_interviewed_offered_and_placed() {
    let (service, persistence) = common::service();
    let (candidate, job) = common::onboard_pair(&service);

    let builder = service
        .open_builder(&candidate, &job)
        .expect("builder opens");
    assert_eq!(
        builder.view(),
        BuilderView::Drafting {
            step: DraftStep::Resume
        }
    );
    builder.close();

    let created = service
        .submit_package(&candidate, &job)
        .await
        .expect("package submitted");
    assert!(created.id.0.starts_with("sub"));
    assert_eq!(created.status, SubmissionStatus::SubmittedToClient);

    let steps = [
        (
            SubmissionAction::RequestInterview { note: None },
            SubmissionStatus::ClientInterview,
            1,
        ),
        (
            SubmissionAction::AdvanceRound {
                note: Some("Strong technical round".to_string()),
            },
            SubmissionStatus::ClientInterview,
            2,
        ),
        (SubmissionAction::MakeOffer, SubmissionStatus::Offer, 2),
        (SubmissionAction::ConfirmPlacement, SubmissionStatus::Placed, 2),
    ];

    for (action, expected, round) in steps {
        let outcome = service
            .apply(&created.id, &action)
            .expect("transition accepted");
        assert_eq!(outcome.submission.status, expected);
        assert_eq!(outcome.submission.interview_round, round);
    }

    let placed = service.get(&created.id).expect("submission stored");
    assert_eq!(placed.last_activity, "Placement Confirmed");
    let saved = persistence.last_saved().expect("snapshot persisted");
    assert!(saved.submissions.contains(&placed));

    let refused = service
        .apply(&created.id, &SubmissionAction::Reject)
        .expect_err("placed is final");
    assert!(refused.is_refused_transition());
}

#[test]
fn seeded_submission_moves_to_interview_with_activity() {
    let (service, _) = common::service();
    let s1 = SubmissionId("s1".to_string());

    let outcome = service
        .apply(&s1, &SubmissionAction::RequestInterview { note: None })
        .expect("interview request accepted");

    assert_eq!(outcome.submission.status, SubmissionStatus::ClientInterview);
    assert!(!outcome.submission.last_activity.is_empty());
    assert_eq!(service.get(&s1).expect("s1 stored"), outcome.submission);
}

#[test]
fn pipeline_reflects_applied_transitions() {
    let (service, _) = common::service();
    let board = service.pipeline();
    assert_eq!(board.total_active, 5);

    service
        .apply(
            &SubmissionId("s1".to_string()),
            &SubmissionAction::ClientRejected,
        )
        .expect("rejection accepted");

    let board = service.pipeline();
    assert_eq!(board.total_active, 4);
    assert_eq!(board.rejected.len(), 1);
}
