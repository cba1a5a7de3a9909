use serde::Serialize;

use super::domain::{Submission, SubmissionAction, SubmissionId, SubmissionStatus};

pub const OFFER_ROUTE_PREFIX: &str = "/employee/recruiting/offer";
pub const PLACEMENT_ROUTE_PREFIX: &str = "/employee/recruiting/placement";

/// Result of applying an action: the next status plus what gets written back to the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transition {
    pub from: SubmissionStatus,
    pub to: SubmissionStatus,
    pub activity: String,
    pub interview_round: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
}

impl Transition {
    /// Full replacement record with the transition applied.
    pub fn apply_to(&self, submission: &Submission) -> Submission {
        Submission {
            status: self.to,
            last_activity: self.activity.clone(),
            interview_round: self.interview_round,
            ..submission.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    #[error("action '{action}' is not permitted while a submission is {from}")]
    NotPermitted {
        from: &'static str,
        action: &'static str,
    },
}

/// Route handed to the external collaborator that owns the next stage, if any.
pub fn collaborator_route(status: SubmissionStatus, id: &SubmissionId) -> Option<String> {
    match status {
        SubmissionStatus::Offer => Some(format!("{OFFER_ROUTE_PREFIX}/{id}")),
        SubmissionStatus::Placed => Some(format!("{PLACEMENT_ROUTE_PREFIX}/{id}")),
        SubmissionStatus::Sourced
        | SubmissionStatus::Screening
        | SubmissionStatus::SubmissionReady
        | SubmissionStatus::SubmittedToClient
        | SubmissionStatus::ClientInterview
        | SubmissionStatus::Rejected => None,
    }
}

/// Pure transition function over the submission lifecycle.
///
/// `placed` and `rejected` accept no action. Interview rounds are carried on the record, so
/// advancing a round never depends on the wording of `last_activity`.
pub fn transition(
    submission: &Submission,
    action: &SubmissionAction,
) -> Result<Transition, TransitionError> {
    use SubmissionAction as A;
    use SubmissionStatus as S;

    let from = submission.status;
    let round = submission.interview_round.max(1);

    let (to, activity, interview_round) = match (from, action) {
        (S::Sourced, A::Screen) => (S::Screening, "Moved to Screening".to_string(), round),
        (S::Screening, A::MarkReady) => {
            (S::SubmissionReady, "Passed Screening".to_string(), round)
        }
        (S::Sourced | S::Screening | S::SubmissionReady, A::SubmitToClient) => (
            S::SubmittedToClient,
            "Submitted to Client".to_string(),
            round,
        ),
        (S::SubmittedToClient, A::RequestInterview { note }) => (
            S::ClientInterview,
            with_note("Client Requested Interview", note.as_deref()),
            1,
        ),
        (S::SubmittedToClient, A::ClientRejected) => {
            (S::Rejected, "Client Rejected".to_string(), round)
        }
        (S::ClientInterview, A::AdvanceRound { note }) => {
            let next = round + 1;
            (
                S::ClientInterview,
                with_note(
                    &format!("Completed Round {round}, Advancing to Round {next}"),
                    note.as_deref(),
                ),
                next,
            )
        }
        (S::ClientInterview, A::MakeOffer) => {
            (S::Offer, "Moving to Offer Stage".to_string(), round)
        }
        (S::ClientInterview, A::Reject) => (S::Rejected, "Failed at Interview".to_string(), round),
        (S::Offer, A::ConfirmPlacement) => (S::Placed, "Placement Confirmed".to_string(), round),
        (from, action) => {
            return Err(TransitionError::NotPermitted {
                from: from.label(),
                action: action.label(),
            })
        }
    };

    Ok(Transition {
        from,
        to,
        activity,
        interview_round,
        route: collaborator_route(to, &submission.id),
    })
}

/// Actions accepted from the given status, in the order a recruiter is offered them.
pub fn available_actions(status: SubmissionStatus) -> Vec<&'static str> {
    match status {
        SubmissionStatus::Sourced => vec!["screen", "submit_to_client"],
        SubmissionStatus::Screening => vec!["mark_ready", "submit_to_client"],
        SubmissionStatus::SubmissionReady => vec!["submit_to_client"],
        SubmissionStatus::SubmittedToClient => vec!["request_interview", "client_rejected"],
        SubmissionStatus::ClientInterview => vec!["advance_round", "make_offer", "reject"],
        SubmissionStatus::Offer => vec!["confirm_placement"],
        SubmissionStatus::Placed | SubmissionStatus::Rejected => Vec::new(),
    }
}

fn with_note(activity: &str, note: Option<&str>) -> String {
    match note.map(str::trim).filter(|note| !note.is_empty()) {
        Some(note) => format!("{activity}: {note}"),
        None => activity.to_string(),
    }
}
