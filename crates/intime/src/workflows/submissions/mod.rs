//! Candidate submission lifecycle: status rules, the builder that drives them, and the
//! pipeline board recruiters work from.

pub mod builder;
pub mod domain;
pub mod draft;
pub mod export;
mod latency;
pub mod pipeline;
pub mod router;
pub mod service;
pub mod transition;

#[cfg(test)]
mod tests;

pub use builder::{
    BuilderError, BuilderView, InterviewRoundView, SubmissionBuilder, TransitionOutcome,
};
pub use domain::{
    CandidateId, DocumentChecklistItem, JobId, Submission, SubmissionAction, SubmissionId,
    SubmissionStatus,
};
pub use draft::{compose_pitch, DraftStep, SubmissionDraft};
pub use latency::SimulatedLatency;
pub use pipeline::{PipelineBoard, PipelineColumn, PipelineStage};
pub use router::submission_router;
pub use service::{SubmissionService, SubmissionServiceError};
pub use transition::{available_actions, transition, Transition, TransitionError};
