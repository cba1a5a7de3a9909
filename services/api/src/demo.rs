use crate::infra::ephemeral_service;
use clap::Args;
use intime::error::AppError;
use intime::store::{Candidate, CandidateKind, Job};
use intime::workflows::submissions::{
    BuilderView, CandidateId, DraftStep, JobId, SubmissionAction, SubmissionService,
};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print the generated pitch e-mail in full.
    #[arg(long)]
    pub(crate) show_pitch: bool,
    /// Stop after the package is submitted; skip the interview loop.
    #[arg(long)]
    pub(crate) skip_interviews: bool,
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        show_pitch,
        skip_interviews,
    } = args;

    let service = ephemeral_service();
    println!("InTime submission lifecycle demo");
    render_pipeline(&service, "Seeded pipeline");

    let (candidate_id, job_id) = onboard_demo_pair(&service)?;
    println!("\nSubmission builder for {candidate_id} on {job_id}");

    let mut builder = service.open_builder(&candidate_id, &job_id)?;
    println!("- back link: {}", builder.back_link());
    println!("- view: {}", describe_view(&builder.view()));

    let pitch = builder.generate_pitch().await.to_string();
    match pitch.lines().next() {
        Some(subject) if !show_pitch => println!("- pitch drafted ({subject})"),
        _ => println!("- pitch drafted:\n{pitch}"),
    }

    for document in builder.draft().documents() {
        println!(
            "  [{}] {} ({})",
            if document.uploaded { "x" } else { " " },
            document.name,
            document.kind
        );
    }
    builder.toggle_document(1)?;
    while builder.draft().step() != DraftStep::Review {
        let step = builder.draft_mut().advance();
        println!("- wizard step: {}", step.label());
    }

    let submission = builder.confirm().await?;
    println!(
        "- confirmed {} -> {} (match score {})",
        submission.id,
        submission.status.label(),
        submission.match_score
    );
    println!("- view: {}", describe_view(&builder.view()));

    if !skip_interviews {
        println!("\nInterview loop");
        let actions = [
            SubmissionAction::RequestInterview {
                note: Some("Technical screen with the hiring manager".to_string()),
            },
            SubmissionAction::AdvanceRound { note: None },
            SubmissionAction::MakeOffer,
        ];
        for action in &actions {
            let outcome = builder.apply(action)?;
            println!(
                "- {}: {} (round {})",
                action.label(),
                outcome.transition.activity,
                outcome.submission.interview_round
            );
            if let Some(route) = &outcome.transition.route {
                println!("  handing off to {route}");
            }
        }
        println!("- view: {}", describe_view(&builder.view()));

        match builder.apply(&SubmissionAction::SubmitToClient) {
            Ok(_) => println!("- resubmission unexpectedly accepted"),
            Err(err) => println!("- resubmission refused: {err}"),
        }
    }
    builder.close();

    render_pipeline(&service, "\nPipeline after demo");
    Ok(())
}

fn onboard_demo_pair(service: &SubmissionService) -> Result<(CandidateId, JobId), AppError> {
    let candidate_id = CandidateId("c10".to_string());
    let job_id = JobId("j9".to_string());
    let store = service.store();

    store.add_candidate(Candidate {
        id: candidate_id.clone(),
        name: "Dana Okafor".to_string(),
        role: "PolicyCenter Dev".to_string(),
        status: "active".to_string(),
        kind: CandidateKind::Student,
        skills: vec![
            "PolicyCenter".to_string(),
            "Gosu".to_string(),
            "Java".to_string(),
            "Jenkins".to_string(),
        ],
        experience: "3 Yrs".to_string(),
        location: "Remote (US)".to_string(),
        rate: "$85/hr".to_string(),
        email: "dana.o@example.com".to_string(),
        score: 89,
        source: "Academy".to_string(),
        notes: "Capstone on rating engine upgrades.".to_string(),
        owner_id: "e3".to_string(),
    })?;
    store.add_job(Job {
        id: job_id.clone(),
        account_id: "a2".to_string(),
        client: "Global Mutual".to_string(),
        title: "PolicyCenter Developer".to_string(),
        status: "open".to_string(),
        kind: "Contract".to_string(),
        rate: "$85-95/hr".to_string(),
        location: "Remote".to_string(),
        owner_id: "e3".to_string(),
        description: "Personal lines product configuration.".to_string(),
    })?;

    Ok((candidate_id, job_id))
}

fn describe_view(view: &BuilderView) -> String {
    match view {
        BuilderView::Drafting { step } => format!("drafting ({})", step.label()),
        BuilderView::SubmittedToClient {
            submission_id,
            created_at,
        } => format!("submitted to client as {submission_id} on {created_at}"),
        BuilderView::InterviewLoop { round, .. } => format!("interview loop, round {round}"),
        BuilderView::OfferStage { route } => format!("offer stage at {route}"),
        BuilderView::Placed { route } => format!("placed, finish at {route}"),
        BuilderView::Archived { last_activity } => format!("archived ({last_activity})"),
    }
}

fn render_pipeline(service: &SubmissionService, heading: &str) {
    let board = service.pipeline();
    println!("{heading} ({} active)", board.total_active);
    for column in &board.columns {
        println!("- {}: {}", column.label, column.count);
    }
    if !board.rejected.is_empty() {
        println!("- Rejected: {}", board.rejected.len());
    }
}
