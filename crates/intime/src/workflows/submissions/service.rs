use axum::http::StatusCode;

use super::builder::{apply_to_stored, BuilderError, SubmissionBuilder, TransitionOutcome};
use super::domain::{CandidateId, JobId, Submission, SubmissionAction, SubmissionId};
use super::draft::DraftStep;
use super::latency::SimulatedLatency;
use super::pipeline::PipelineBoard;
use super::transition::TransitionError;
use crate::store::{StoreError, StoreHandle};

/// Facade over the store for the submission lifecycle, used by the HTTP router and CLI.
#[derive(Debug, Clone)]
pub struct SubmissionService {
    store: StoreHandle,
    latency: SimulatedLatency,
}

impl SubmissionService {
    pub fn new(store: StoreHandle, latency: SimulatedLatency) -> Self {
        Self { store, latency }
    }

    pub fn store(&self) -> &StoreHandle {
        &self.store
    }

    pub fn list(&self) -> Vec<Submission> {
        self.store.submissions()
    }

    pub fn get(&self, id: &SubmissionId) -> Result<Submission, SubmissionServiceError> {
        self.store
            .submission(id)
            .ok_or_else(|| SubmissionServiceError::NotFound(id.clone()))
    }

    pub fn pipeline(&self) -> PipelineBoard {
        PipelineBoard::from_submissions(&self.store.submissions())
    }

    /// Apply one action to a stored submission and persist the replacement record.
    pub fn apply(
        &self,
        id: &SubmissionId,
        action: &SubmissionAction,
    ) -> Result<TransitionOutcome, SubmissionServiceError> {
        let submission = self.get(id)?;
        Ok(apply_to_stored(&self.store, &submission, action)?)
    }

    pub fn open_builder(
        &self,
        candidate: &CandidateId,
        job: &JobId,
    ) -> Result<SubmissionBuilder, SubmissionServiceError> {
        Ok(SubmissionBuilder::open(
            self.store.clone(),
            self.latency,
            candidate,
            job,
        )?)
    }

    /// Walk a fresh draft through every wizard step and send it, as a recruiter would.
    pub async fn submit_package(
        &self,
        candidate: &CandidateId,
        job: &JobId,
    ) -> Result<Submission, SubmissionServiceError> {
        let mut builder = self.open_builder(candidate, job)?;
        builder.generate_pitch().await;
        builder.draft_mut().go_to(DraftStep::Email);
        builder.draft_mut().advance();
        let submission = builder.confirm().await?;
        builder.close();
        Ok(submission)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SubmissionServiceError {
    #[error("submission {0} not found")]
    NotFound(SubmissionId),
    #[error(transparent)]
    Builder(#[from] BuilderError),
}

impl SubmissionServiceError {
    /// HTTP status for this failure, shared by the submission router and `AppError`.
    pub fn status_code(&self) -> StatusCode {
        match self {
            SubmissionServiceError::NotFound(_)
            | SubmissionServiceError::Builder(
                BuilderError::CandidateNotFound(_) | BuilderError::JobNotFound(_),
            ) => StatusCode::NOT_FOUND,
            SubmissionServiceError::Builder(BuilderError::Transition(_)) => StatusCode::CONFLICT,
            SubmissionServiceError::Builder(
                BuilderError::NoSubmission { .. }
                | BuilderError::DraftIncomplete { .. }
                | BuilderError::UnknownDocument(_),
            ) => StatusCode::UNPROCESSABLE_ENTITY,
            SubmissionServiceError::Builder(
                BuilderError::Cancelled | BuilderError::TaskPanicked | BuilderError::Store(_),
            ) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn is_refused_transition(&self) -> bool {
        matches!(
            self,
            SubmissionServiceError::Builder(BuilderError::Transition(
                TransitionError::NotPermitted { .. }
            ))
        )
    }
}

impl From<StoreError> for SubmissionServiceError {
    fn from(value: StoreError) -> Self {
        Self::Builder(BuilderError::Store(value))
    }
}
