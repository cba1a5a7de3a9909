use serde::{Deserialize, Serialize};

/// Identifier wrapper for candidate submissions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SubmissionId(pub String);

/// Identifier wrapper for candidates referenced by a submission.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CandidateId(pub String);

/// Identifier wrapper for job requisitions referenced by a submission.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct JobId(pub String);

macro_rules! display_id {
    ($($ty:ty),+) => {
        $(impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        })+
    };
}

display_id!(SubmissionId, CandidateId, JobId);

/// One candidate's application against one job requisition.
///
/// The store owns every `Submission`; callers work on clones and hand a full
/// replacement back through `AppStore::update_submission`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: SubmissionId,
    pub job_id: JobId,
    pub candidate_id: CandidateId,
    pub status: SubmissionStatus,
    pub created_at: String,
    pub last_activity: String,
    pub match_score: u8,
    #[serde(default = "first_round")]
    pub interview_round: u32,
}

pub(crate) const fn first_round() -> u32 {
    1
}

/// Lifecycle status for a submission. The set is closed; every consumer matches exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    Sourced,
    Screening,
    SubmissionReady,
    SubmittedToClient,
    ClientInterview,
    Offer,
    Placed,
    Rejected,
}

impl SubmissionStatus {
    pub const ALL: [SubmissionStatus; 8] = [
        SubmissionStatus::Sourced,
        SubmissionStatus::Screening,
        SubmissionStatus::SubmissionReady,
        SubmissionStatus::SubmittedToClient,
        SubmissionStatus::ClientInterview,
        SubmissionStatus::Offer,
        SubmissionStatus::Placed,
        SubmissionStatus::Rejected,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            SubmissionStatus::Sourced => "sourced",
            SubmissionStatus::Screening => "screening",
            SubmissionStatus::SubmissionReady => "submission_ready",
            SubmissionStatus::SubmittedToClient => "submitted_to_client",
            SubmissionStatus::ClientInterview => "client_interview",
            SubmissionStatus::Offer => "offer",
            SubmissionStatus::Placed => "placed",
            SubmissionStatus::Rejected => "rejected",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.label().eq_ignore_ascii_case(value.trim()))
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, SubmissionStatus::Placed | SubmissionStatus::Rejected)
    }
}

/// Recruiter or client driven actions applied to a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum SubmissionAction {
    Screen,
    MarkReady,
    SubmitToClient,
    RequestInterview {
        #[serde(default)]
        note: Option<String>,
    },
    ClientRejected,
    AdvanceRound {
        #[serde(default)]
        note: Option<String>,
    },
    MakeOffer,
    Reject,
    ConfirmPlacement,
}

impl SubmissionAction {
    pub const fn label(&self) -> &'static str {
        match self {
            SubmissionAction::Screen => "screen",
            SubmissionAction::MarkReady => "mark_ready",
            SubmissionAction::SubmitToClient => "submit_to_client",
            SubmissionAction::RequestInterview { .. } => "request_interview",
            SubmissionAction::ClientRejected => "client_rejected",
            SubmissionAction::AdvanceRound { .. } => "advance_round",
            SubmissionAction::MakeOffer => "make_offer",
            SubmissionAction::Reject => "reject",
            SubmissionAction::ConfirmPlacement => "confirm_placement",
        }
    }

    /// Build an action from its wire label, attaching the note where the action records one.
    pub fn from_label(label: &str, note: Option<String>) -> Option<Self> {
        let action = match label.trim().to_ascii_lowercase().as_str() {
            "screen" => SubmissionAction::Screen,
            "mark_ready" => SubmissionAction::MarkReady,
            "submit_to_client" => SubmissionAction::SubmitToClient,
            "request_interview" => SubmissionAction::RequestInterview { note },
            "client_rejected" => SubmissionAction::ClientRejected,
            "advance_round" | "next_round" => SubmissionAction::AdvanceRound { note },
            "make_offer" => SubmissionAction::MakeOffer,
            "reject" => SubmissionAction::Reject,
            "confirm_placement" => SubmissionAction::ConfirmPlacement,
            _ => return None,
        };
        Some(action)
    }
}

/// Checklist entry attached to a draft package. Lives only as long as the draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentChecklistItem {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub uploaded: bool,
}

impl DocumentChecklistItem {
    fn new(name: &str, kind: &str, uploaded: bool) -> Self {
        Self {
            name: name.to_string(),
            kind: kind.to_string(),
            uploaded,
        }
    }

    pub fn default_checklist() -> Vec<DocumentChecklistItem> {
        vec![
            Self::new("Technical_Assessment.pdf", "Assessment", true),
            Self::new("Right_to_Represent.pdf", "Compliance", false),
            Self::new("Certifications.zip", "Credentials", false),
        ]
    }
}
