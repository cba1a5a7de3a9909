use crate::demo::{run_demo, DemoArgs};
use crate::infra::{parse_action, submission_service};
use crate::server;
use clap::{Args, Parser, Subcommand};
use intime::config::AppConfig;
use intime::error::AppError;
use intime::workflows::submissions::export::write_submissions_csv;
use intime::workflows::submissions::{SubmissionId, SubmissionService};

#[derive(Parser, Debug)]
#[command(
    name = "InTime Submissions",
    about = "Run the InTime submission lifecycle service or work submissions from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Inspect or advance stored submissions
    Submissions {
        #[command(subcommand)]
        command: SubmissionsCommand,
    },
    /// Walk a fresh submission through the builder against an in-memory store
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum SubmissionsCommand {
    /// List submissions with their status and interview round
    List(ListArgs),
    /// Apply a lifecycle action to one submission
    Act(ActArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

#[derive(Args, Debug)]
struct ListArgs {
    /// Write CSV to stdout instead of a table
    #[arg(long)]
    csv: bool,
}

#[derive(Args, Debug)]
struct ActArgs {
    /// Submission id, e.g. s1
    id: String,
    /// Action label, e.g. request_interview or make_offer
    action: String,
    /// Note appended to the activity for interview actions
    #[arg(long)]
    note: Option<String>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Submissions { command } => {
            let config = AppConfig::load()?;
            let service = submission_service(&config.store)?;
            match command {
                SubmissionsCommand::List(args) => list_submissions(&service, args),
                SubmissionsCommand::Act(args) => act_on_submission(&service, args),
            }
        }
        Command::Demo(args) => run_demo(args).await,
    }
}

fn list_submissions(service: &SubmissionService, args: ListArgs) -> Result<(), AppError> {
    let submissions = service.list();

    if args.csv {
        let store = service.store();
        return Ok(write_submissions_csv(
            std::io::stdout().lock(),
            &submissions,
            &store.candidates(),
            &store.jobs(),
        )?);
    }

    println!(
        "{:<18} {:<8} {:<8} {:<20} {:>5}  last activity",
        "id", "cand", "job", "status", "round"
    );
    for submission in &submissions {
        println!(
            "{:<18} {:<8} {:<8} {:<20} {:>5}  {}",
            submission.id,
            submission.candidate_id,
            submission.job_id,
            submission.status.label(),
            submission.interview_round,
            submission.last_activity
        );
    }
    Ok(())
}

fn act_on_submission(service: &SubmissionService, args: ActArgs) -> Result<(), AppError> {
    let ActArgs { id, action, note } = args;
    let action = parse_action(&action, note).map_err(AppError::Usage)?;
    let outcome = service.apply(&SubmissionId(id), &action)?;

    println!(
        "{}: {} -> {} ({})",
        outcome.submission.id,
        outcome.transition.from.label(),
        outcome.transition.to.label(),
        outcome.transition.activity
    );
    if let Some(route) = &outcome.transition.route {
        println!("  continue at {route}");
    }
    Ok(())
}
