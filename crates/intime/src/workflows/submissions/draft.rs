use serde::Serialize;

use super::domain::DocumentChecklistItem;
use crate::store::{Candidate, Job};

/// Steps of the drafting wizard, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftStep {
    Resume,
    Documents,
    Email,
    Review,
}

impl DraftStep {
    pub const ORDER: [DraftStep; 4] = [
        DraftStep::Resume,
        DraftStep::Documents,
        DraftStep::Email,
        DraftStep::Review,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            DraftStep::Resume => "resume",
            DraftStep::Documents => "documents",
            DraftStep::Email => "email",
            DraftStep::Review => "review",
        }
    }

    pub const fn next(self) -> DraftStep {
        match self {
            DraftStep::Resume => DraftStep::Documents,
            DraftStep::Documents => DraftStep::Email,
            DraftStep::Email | DraftStep::Review => DraftStep::Review,
        }
    }

    pub const fn previous(self) -> DraftStep {
        match self {
            DraftStep::Resume | DraftStep::Documents => DraftStep::Resume,
            DraftStep::Email => DraftStep::Documents,
            DraftStep::Review => DraftStep::Email,
        }
    }
}

/// Working copy of a submission package. Never persisted; discarded with the builder.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionDraft {
    step: DraftStep,
    documents: Vec<DocumentChecklistItem>,
    email_body: String,
}

impl Default for SubmissionDraft {
    fn default() -> Self {
        Self {
            step: DraftStep::Resume,
            documents: DocumentChecklistItem::default_checklist(),
            email_body: String::new(),
        }
    }
}

impl SubmissionDraft {
    pub fn step(&self) -> DraftStep {
        self.step
    }

    /// Jump straight to a step, as the wizard's tab bar allows.
    pub fn go_to(&mut self, step: DraftStep) {
        self.step = step;
    }

    pub fn advance(&mut self) -> DraftStep {
        self.step = self.step.next();
        self.step
    }

    pub fn back(&mut self) -> DraftStep {
        self.step = self.step.previous();
        self.step
    }

    pub fn documents(&self) -> &[DocumentChecklistItem] {
        &self.documents
    }

    /// Flip the uploaded flag of one checklist entry, returning the new flag.
    pub fn toggle_document(&mut self, index: usize) -> Option<bool> {
        let document = self.documents.get_mut(index)?;
        document.uploaded = !document.uploaded;
        Some(document.uploaded)
    }

    pub fn email_body(&self) -> &str {
        &self.email_body
    }

    pub fn set_email_body(&mut self, body: impl Into<String>) {
        self.email_body = body.into();
    }

    /// Install a generated pitch and move on to the documents step.
    pub(crate) fn accept_pitch(&mut self, body: String) {
        self.email_body = body;
        self.step = DraftStep::Documents;
    }

    pub fn ready_to_confirm(&self) -> bool {
        self.step == DraftStep::Review
    }
}

/// Pitch e-mail presenting the candidate to the job's hiring manager.
pub fn compose_pitch(candidate: &Candidate, job: &Job) -> String {
    let highlighted_skills = candidate
        .skills
        .iter()
        .take(3)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Subject: Strong Match: {title} - {name}\n\n\
         Hi [Hiring Manager Name],\n\n\
         I'm excited to present {name} for the {title} role at {client}.\n\n\
         {name} brings {experience} of specialized experience, with a strong focus on the exact \
         skills you need: {highlighted_skills}.\n\n\
         Location: {location}. Rate: {rate}.\n\n\
         I've attached the tailored resume and all compliance documents. They are available for \
         an interview this week.\n\n\
         Best,\n[Your Name]",
        title = job.title,
        client = job.client,
        name = candidate.name,
        experience = candidate.experience,
        location = candidate.location,
        rate = candidate.rate,
    )
}
