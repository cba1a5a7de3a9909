use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{Local, Utc};
use serde::Serialize;
use tokio::task::{JoinError, JoinSet};
use tracing::{debug, info, warn};

use super::domain::{
    first_round, CandidateId, JobId, Submission, SubmissionAction, SubmissionId, SubmissionStatus,
};
use super::draft::{compose_pitch, DraftStep, SubmissionDraft};
use super::latency::SimulatedLatency;
use super::transition::{collaborator_route, transition, Transition, TransitionError};
use crate::store::{Candidate, CandidateKind, Job, StoreError, StoreHandle};

/// What the builder shows for a submission's current status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum BuilderView {
    Drafting {
        step: DraftStep,
    },
    SubmittedToClient {
        submission_id: SubmissionId,
        created_at: String,
    },
    InterviewLoop {
        round: u32,
        rounds: Vec<InterviewRoundView>,
    },
    OfferStage {
        route: String,
    },
    Placed {
        route: String,
    },
    Archived {
        last_activity: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterviewRoundView {
    pub round: u32,
    pub in_progress: bool,
}

impl BuilderView {
    /// Direct mapping from status to view. No submission yet means a fresh draft.
    pub fn select(submission: Option<&Submission>, draft_step: DraftStep) -> BuilderView {
        let Some(submission) = submission else {
            return BuilderView::Drafting { step: draft_step };
        };

        match submission.status {
            SubmissionStatus::Sourced
            | SubmissionStatus::Screening
            | SubmissionStatus::SubmissionReady => BuilderView::Drafting { step: draft_step },
            SubmissionStatus::SubmittedToClient => BuilderView::SubmittedToClient {
                submission_id: submission.id.clone(),
                created_at: submission.created_at.clone(),
            },
            SubmissionStatus::ClientInterview => {
                let round = submission.interview_round.max(1);
                BuilderView::InterviewLoop {
                    round,
                    rounds: (1..=round)
                        .map(|n| InterviewRoundView {
                            round: n,
                            in_progress: n == round,
                        })
                        .collect(),
                }
            }
            SubmissionStatus::Offer | SubmissionStatus::Placed => {
                let route = collaborator_route(submission.status, &submission.id)
                    .unwrap_or_default();
                if submission.status == SubmissionStatus::Offer {
                    BuilderView::OfferStage { route }
                } else {
                    BuilderView::Placed { route }
                }
            }
            SubmissionStatus::Rejected => BuilderView::Archived {
                last_activity: submission.last_activity.clone(),
            },
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BuilderError {
    #[error("candidate {0} not found")]
    CandidateNotFound(CandidateId),
    #[error("job {0} not found; external jobs must be added to the market board first")]
    JobNotFound(JobId),
    #[error("no submission exists yet for candidate {candidate} on job {job}")]
    NoSubmission { candidate: CandidateId, job: JobId },
    #[error("submission package is still at the {step} step")]
    DraftIncomplete { step: &'static str },
    #[error("document checklist has no entry {0}")]
    UnknownDocument(usize),
    #[error("pending builder work was cancelled")]
    Cancelled,
    #[error("pending builder work panicked")]
    TaskPanicked,
    #[error(transparent)]
    Transition(#[from] TransitionError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Submission record after a transition, along with how it got there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransitionOutcome {
    pub submission: Submission,
    pub transition: Transition,
}

static SUBMISSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_submission_id() -> SubmissionId {
    let seq = SUBMISSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    SubmissionId(format!("sub{}-{seq}", Utc::now().timestamp_millis()))
}

/// Fetch-transition-store for one submission. Shared by the builder and the HTTP surface.
pub(crate) fn apply_to_stored(
    store: &StoreHandle,
    submission: &Submission,
    action: &SubmissionAction,
) -> Result<TransitionOutcome, BuilderError> {
    let step = transition(submission, action)?;
    let updated = step.apply_to(submission);
    store.update_submission(updated.clone())?;
    info!(
        submission_id = %updated.id,
        from = step.from.label(),
        to = step.to.label(),
        action = action.label(),
        "submission transitioned"
    );
    Ok(TransitionOutcome {
        submission: updated,
        transition: step,
    })
}

/// Flatten a joined task result. Aborted work is a cancellation; a panic is reported as such.
pub(crate) fn joined_outcome(
    joined: Result<Result<TransitionOutcome, BuilderError>, JoinError>,
) -> Result<TransitionOutcome, BuilderError> {
    match joined {
        Ok(outcome) => outcome,
        Err(err) if err.is_panic() => {
            warn!(error = %err, "queued builder action panicked");
            Err(BuilderError::TaskPanicked)
        }
        Err(_) => Err(BuilderError::Cancelled),
    }
}

/// One recruiter's builder session for a (candidate, job) pair.
///
/// Work started through [`SubmissionBuilder::dispatch`] belongs to the session: closing or
/// dropping the builder aborts it, so a late completion can never touch the store.
pub struct SubmissionBuilder {
    store: StoreHandle,
    latency: SimulatedLatency,
    candidate: Candidate,
    job: Job,
    draft: SubmissionDraft,
    pending: JoinSet<Result<TransitionOutcome, BuilderError>>,
}

impl std::fmt::Debug for SubmissionBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubmissionBuilder")
            .field("candidate", &self.candidate.id)
            .field("job", &self.job.id)
            .field("step", &self.draft.step())
            .field("pending", &self.pending.len())
            .finish()
    }
}

impl SubmissionBuilder {
    pub fn open(
        store: StoreHandle,
        latency: SimulatedLatency,
        candidate_id: &CandidateId,
        job_id: &JobId,
    ) -> Result<Self, BuilderError> {
        let candidate = store
            .candidate(candidate_id)
            .ok_or_else(|| BuilderError::CandidateNotFound(candidate_id.clone()))?;
        let job = store
            .job(job_id)
            .ok_or_else(|| BuilderError::JobNotFound(job_id.clone()))?;

        Ok(Self {
            store,
            latency,
            candidate,
            job,
            draft: SubmissionDraft::default(),
            pending: JoinSet::new(),
        })
    }

    pub fn candidate(&self) -> &Candidate {
        &self.candidate
    }

    pub fn job(&self) -> &Job {
        &self.job
    }

    /// Current stored submission for this pair, re-read on every call.
    pub fn submission(&self) -> Option<Submission> {
        self.store.find_submission(&self.candidate.id, &self.job.id)
    }

    pub fn view(&self) -> BuilderView {
        BuilderView::select(self.submission().as_ref(), self.draft.step())
    }

    /// Bench consultants go back to their talent page; everyone else to the job.
    pub fn back_link(&self) -> String {
        match self.candidate.kind {
            CandidateKind::InternalBench => {
                format!("/employee/bench/talent/{}", self.candidate.id)
            }
            CandidateKind::Student | CandidateKind::External => {
                format!("/employee/recruiting/jobs/{}", self.job.id)
            }
        }
    }

    pub fn draft(&self) -> &SubmissionDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut SubmissionDraft {
        &mut self.draft
    }

    pub fn toggle_document(&mut self, index: usize) -> Result<bool, BuilderError> {
        self.draft
            .toggle_document(index)
            .ok_or(BuilderError::UnknownDocument(index))
    }

    /// Render the pitch e-mail and move the draft to the documents step.
    pub async fn generate_pitch(&mut self) -> &str {
        self.latency.settle().await;
        let pitch = compose_pitch(&self.candidate, &self.job);
        self.draft.accept_pitch(pitch);
        self.draft.email_body()
    }

    /// Send the package: update the existing pair's submission, or create a new one.
    pub async fn confirm(&mut self) -> Result<Submission, BuilderError> {
        if !self.draft.ready_to_confirm() {
            return Err(BuilderError::DraftIncomplete {
                step: self.draft.step().label(),
            });
        }

        self.latency.settle().await;

        if let Some(existing) = self.submission() {
            let outcome =
                apply_to_stored(&self.store, &existing, &SubmissionAction::SubmitToClient)?;
            return Ok(outcome.submission);
        }

        let submission = Submission {
            id: next_submission_id(),
            job_id: self.job.id.clone(),
            candidate_id: self.candidate.id.clone(),
            status: SubmissionStatus::SubmittedToClient,
            created_at: Local::now().format("%Y-%m-%d").to_string(),
            last_activity: "Submitted to Client".to_string(),
            match_score: self.candidate.score.min(100),
            interview_round: first_round(),
        };
        self.store.add_submission(submission.clone())?;
        Ok(submission)
    }

    /// Apply a status action to the pair's submission right away.
    pub fn apply(&self, action: &SubmissionAction) -> Result<TransitionOutcome, BuilderError> {
        let submission = self.submission().ok_or_else(|| BuilderError::NoSubmission {
            candidate: self.candidate.id.clone(),
            job: self.job.id.clone(),
        })?;
        apply_to_stored(&self.store, &submission, action)
    }

    /// Queue a status action behind the simulated round trip. The session owns the task.
    pub fn dispatch(&mut self, action: SubmissionAction) {
        let store = self.store.clone();
        let latency = self.latency;
        let candidate = self.candidate.id.clone();
        let job = self.job.id.clone();

        self.pending.spawn(async move {
            latency.settle().await;
            let submission = store.find_submission(&candidate, &job).ok_or_else(|| {
                BuilderError::NoSubmission {
                    candidate: candidate.clone(),
                    job: job.clone(),
                }
            })?;
            apply_to_stored(&store, &submission, &action)
        });
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Wait for every queued action, in completion order.
    pub async fn settle(&mut self) -> Vec<Result<TransitionOutcome, BuilderError>> {
        let mut results = Vec::with_capacity(self.pending.len());
        while let Some(joined) = self.pending.join_next().await {
            results.push(joined_outcome(joined));
        }
        results
    }

    /// End the session and abort anything still queued.
    pub fn close(mut self) {
        if !self.pending.is_empty() {
            debug!(
                candidate = %self.candidate.id,
                job = %self.job.id,
                aborted = self.pending.len(),
                "closing builder with queued work"
            );
        }
        self.pending.abort_all();
    }
}
