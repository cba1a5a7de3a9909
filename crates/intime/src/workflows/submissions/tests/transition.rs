use super::common::submission;
use crate::workflows::submissions::domain::{SubmissionAction, SubmissionStatus};
use crate::workflows::submissions::transition::{available_actions, transition, TransitionError};

fn every_action() -> Vec<SubmissionAction> {
    vec![
        SubmissionAction::Screen,
        SubmissionAction::MarkReady,
        SubmissionAction::SubmitToClient,
        SubmissionAction::RequestInterview { note: None },
        SubmissionAction::ClientRejected,
        SubmissionAction::AdvanceRound { note: None },
        SubmissionAction::MakeOffer,
        SubmissionAction::Reject,
        SubmissionAction::ConfirmPlacement,
    ]
}

#[test]
fn every_accepted_transition_lands_on_a_known_status() {
    for status in SubmissionStatus::ALL {
        for action in every_action() {
            if let Ok(step) = transition(&submission("s-any", status), &action) {
                assert!(SubmissionStatus::ALL.contains(&step.to));
                assert_eq!(step.from, status);
                assert!(!step.activity.is_empty());
            }
        }
    }
}

#[test]
fn terminal_statuses_refuse_every_action() {
    for status in [SubmissionStatus::Placed, SubmissionStatus::Rejected] {
        for action in every_action() {
            match transition(&submission("s-done", status), &action) {
                Err(TransitionError::NotPermitted { from, .. }) => {
                    assert_eq!(from, status.label());
                }
                other => panic!("expected refusal from {status:?}, got {other:?}"),
            }
        }
        assert!(status.is_terminal());
        assert!(available_actions(status).is_empty());
    }
}

#[test]
fn only_placed_and_rejected_are_terminal() {
    let terminal: Vec<SubmissionStatus> = SubmissionStatus::ALL
        .into_iter()
        .filter(|status| status.is_terminal())
        .collect();
    assert_eq!(
        terminal,
        vec![SubmissionStatus::Placed, SubmissionStatus::Rejected]
    );
}

#[test]
fn available_actions_match_what_transition_accepts() {
    for status in SubmissionStatus::ALL {
        let offered = available_actions(status);
        for action in every_action() {
            let accepted = transition(&submission("s-any", status), &action).is_ok();
            assert_eq!(
                accepted,
                offered.contains(&action.label()),
                "{status:?} / {}",
                action.label()
            );
        }
    }
}

#[test]
fn interview_request_resets_round_and_records_note() {
    let mut record = submission("s1", SubmissionStatus::SubmittedToClient);
    record.interview_round = 4;

    let step = transition(
        &record,
        &SubmissionAction::RequestInterview {
            note: Some("Panel on Thursday".to_string()),
        },
    )
    .expect("interview request accepted");

    assert_eq!(step.to, SubmissionStatus::ClientInterview);
    assert_eq!(step.interview_round, 1);
    assert_eq!(step.activity, "Client Requested Interview: Panel on Thursday");
    assert!(step.route.is_none());
}

#[test]
fn blank_note_is_not_appended() {
    let step = transition(
        &submission("s1", SubmissionStatus::SubmittedToClient),
        &SubmissionAction::RequestInterview {
            note: Some("   ".to_string()),
        },
    )
    .expect("interview request accepted");
    assert_eq!(step.activity, "Client Requested Interview");
}

#[test]
fn advancing_a_round_increments_it_by_one() {
    let mut record = submission("s2", SubmissionStatus::ClientInterview);
    record.interview_round = 2;

    let step = transition(&record, &SubmissionAction::AdvanceRound { note: None })
        .expect("round advance accepted");
    assert_eq!(step.to, SubmissionStatus::ClientInterview);
    assert_eq!(step.interview_round, 3);
    assert_eq!(step.activity, "Completed Round 2, Advancing to Round 3");

    let updated = step.apply_to(&record);
    let again = transition(&updated, &SubmissionAction::AdvanceRound { note: None })
        .expect("second advance accepted");
    assert_eq!(again.interview_round, 4);
}

#[test]
fn round_advance_ignores_activity_wording() {
    let mut record = submission("s2", SubmissionStatus::ClientInterview);
    record.last_activity = "Completed Round 7, Advancing to Round 8".to_string();

    let step = transition(&record, &SubmissionAction::AdvanceRound { note: None })
        .expect("round advance accepted");
    assert_eq!(step.interview_round, 2);
}

#[test]
fn offer_hands_off_to_offer_route() {
    let step = transition(
        &submission("s2", SubmissionStatus::ClientInterview),
        &SubmissionAction::MakeOffer,
    )
    .expect("offer accepted");
    assert_eq!(step.to, SubmissionStatus::Offer);
    assert_eq!(step.route.as_deref(), Some("/employee/recruiting/offer/s2"));
}

#[test]
fn placement_hands_off_to_placement_route() {
    let step = transition(
        &submission("s9", SubmissionStatus::Offer),
        &SubmissionAction::ConfirmPlacement,
    )
    .expect("placement accepted");
    assert_eq!(step.to, SubmissionStatus::Placed);
    assert_eq!(
        step.route.as_deref(),
        Some("/employee/recruiting/placement/s9")
    );
}

#[test]
fn client_and_interview_rejections_archive() {
    let client = transition(
        &submission("s1", SubmissionStatus::SubmittedToClient),
        &SubmissionAction::ClientRejected,
    )
    .expect("client rejection accepted");
    assert_eq!(client.to, SubmissionStatus::Rejected);
    assert_eq!(client.activity, "Client Rejected");

    let interview = transition(
        &submission("s2", SubmissionStatus::ClientInterview),
        &SubmissionAction::Reject,
    )
    .expect("interview rejection accepted");
    assert_eq!(interview.to, SubmissionStatus::Rejected);
    assert_eq!(interview.activity, "Failed at Interview");
}

#[test]
fn action_labels_parse_back() {
    for action in every_action() {
        let parsed = SubmissionAction::from_label(action.label(), None).expect("label parses");
        assert_eq!(parsed, action);
    }
    assert_eq!(
        SubmissionAction::from_label("next_round", Some("went well".to_string())),
        Some(SubmissionAction::AdvanceRound {
            note: Some("went well".to_string())
        })
    );
    assert!(SubmissionAction::from_label("withdraw", None).is_none());
}

#[test]
fn status_labels_parse_case_insensitively() {
    assert_eq!(
        SubmissionStatus::parse(" Client_Interview "),
        Some(SubmissionStatus::ClientInterview)
    );
    assert_eq!(SubmissionStatus::parse("interviewing"), None);
}
