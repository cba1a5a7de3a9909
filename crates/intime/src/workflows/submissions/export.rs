use std::io::Write;

use serde::Serialize;

use super::domain::Submission;
use crate::store::{Candidate, Job};

#[derive(Debug, Serialize)]
struct SubmissionRow<'a> {
    #[serde(rename = "Submission ID")]
    id: &'a str,
    #[serde(rename = "Candidate")]
    candidate: &'a str,
    #[serde(rename = "Client")]
    client: &'a str,
    #[serde(rename = "Job")]
    job: &'a str,
    #[serde(rename = "Status")]
    status: &'static str,
    #[serde(rename = "Interview Round")]
    interview_round: u32,
    #[serde(rename = "Match Score")]
    match_score: u8,
    #[serde(rename = "Created At")]
    created_at: &'a str,
    #[serde(rename = "Last Activity")]
    last_activity: &'a str,
}

/// Write one CSV row per submission, resolving candidate and job names where known.
pub fn write_submissions_csv<W: Write>(
    writer: W,
    submissions: &[Submission],
    candidates: &[Candidate],
    jobs: &[Job],
) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for submission in submissions {
        let candidate = candidates
            .iter()
            .find(|candidate| candidate.id == submission.candidate_id);
        let job = jobs.iter().find(|job| job.id == submission.job_id);

        csv_writer.serialize(SubmissionRow {
            id: &submission.id.0,
            candidate: candidate.map_or(submission.candidate_id.0.as_str(), |c| c.name.as_str()),
            client: job.map_or("", |job| job.client.as_str()),
            job: job.map_or(submission.job_id.0.as_str(), |job| job.title.as_str()),
            status: submission.status.label(),
            interview_round: submission.interview_round,
            match_score: submission.match_score,
            created_at: &submission.created_at,
            last_activity: &submission.last_activity,
        })?;
    }

    csv_writer.flush()?;
    Ok(())
}
