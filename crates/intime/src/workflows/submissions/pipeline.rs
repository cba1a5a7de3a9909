use serde::Serialize;

use super::domain::{Submission, SubmissionStatus};

/// Columns of the recruiter pipeline board. Everything past submission shares the last column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    Sourced,
    Screening,
    SubmissionReady,
    SubmittedToClient,
}

impl PipelineStage {
    pub const ALL: [PipelineStage; 4] = [
        PipelineStage::Sourced,
        PipelineStage::Screening,
        PipelineStage::SubmissionReady,
        PipelineStage::SubmittedToClient,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            PipelineStage::Sourced => "Sourced",
            PipelineStage::Screening => "Screening",
            PipelineStage::SubmissionReady => "Ready to Submit",
            PipelineStage::SubmittedToClient => "Submitted",
        }
    }

    /// `None` for rejected submissions, which sit outside the board.
    pub const fn for_status(status: SubmissionStatus) -> Option<PipelineStage> {
        match status {
            SubmissionStatus::Sourced => Some(PipelineStage::Sourced),
            SubmissionStatus::Screening => Some(PipelineStage::Screening),
            SubmissionStatus::SubmissionReady => Some(PipelineStage::SubmissionReady),
            SubmissionStatus::SubmittedToClient
            | SubmissionStatus::ClientInterview
            | SubmissionStatus::Offer
            | SubmissionStatus::Placed => Some(PipelineStage::SubmittedToClient),
            SubmissionStatus::Rejected => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PipelineColumn {
    pub stage: PipelineStage,
    pub label: &'static str,
    pub count: usize,
    pub submissions: Vec<Submission>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PipelineBoard {
    pub columns: Vec<PipelineColumn>,
    pub rejected: Vec<Submission>,
    pub total_active: usize,
}

impl PipelineBoard {
    pub fn from_submissions<'a>(submissions: impl IntoIterator<Item = &'a Submission>) -> Self {
        let mut columns: Vec<PipelineColumn> = PipelineStage::ALL
            .into_iter()
            .map(|stage| PipelineColumn {
                stage,
                label: stage.label(),
                count: 0,
                submissions: Vec::new(),
            })
            .collect();
        let mut rejected = Vec::new();

        for submission in submissions {
            match PipelineStage::for_status(submission.status) {
                Some(stage) => {
                    if let Some(column) = columns.iter_mut().find(|c| c.stage == stage) {
                        column.submissions.push(submission.clone());
                        column.count += 1;
                    }
                }
                None => rejected.push(submission.clone()),
            }
        }

        let total_active = columns.iter().map(|column| column.count).sum();
        Self {
            columns,
            rejected,
            total_active,
        }
    }

    pub fn count(&self, stage: PipelineStage) -> usize {
        self.columns
            .iter()
            .find(|column| column.stage == stage)
            .map_or(0, |column| column.count)
    }
}
