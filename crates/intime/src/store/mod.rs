//! Application state container for the staffing workspace.
//!
//! `AppStore` is created once at startup and shared as a [`StoreHandle`]. Every mutation
//! replaces records by id and writes the full snapshot through the configured
//! [`SnapshotPersistence`] before returning.

pub mod entities;
mod persistence;
pub mod seed;
mod snapshot;


use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use tracing::{debug, info, warn};

pub use entities::{
    Account, ApprovalRequest, ApprovalStatus, Candidate, CandidateKind, Deal, Employee, Job,
    Keyed, Lead, LessonProgress, LessonStatus, PayrollRun, PointOfContact, Role,
};
pub use persistence::{
    JsonFilePersistence, MemoryPersistence, PersistenceError, SnapshotPersistence,
};
pub use snapshot::{AppSnapshot, PersistedState, STORAGE_KEY};

use crate::workflows::submissions::domain::{CandidateId, JobId, Submission, SubmissionId};

/// Shared handle passed to every component that reads or mutates application state.
pub type StoreHandle = Arc<AppStore>;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

pub struct AppStore {
    state: RwLock<AppSnapshot>,
    persistence: Arc<dyn SnapshotPersistence>,
}

impl std::fmt::Debug for AppStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppStore").finish_non_exhaustive()
    }
}

impl AppStore {
    /// Start from `base`, overlay whatever the persistence layer already holds.
    pub fn open(
        base: AppSnapshot,
        persistence: Arc<dyn SnapshotPersistence>,
    ) -> Result<Self, StoreError> {
        let state = match persistence.load()? {
            Some(persisted) => {
                info!("restored persisted application state");
                persisted.merge_into(base)
            }
            None => base,
        };

        Ok(Self {
            state: RwLock::new(state),
            persistence,
        })
    }

    /// In-memory store seeded with the demo workspace.
    pub fn seeded() -> Self {
        Self {
            state: RwLock::new(seed::seed_snapshot()),
            persistence: Arc::new(MemoryPersistence::default()),
        }
    }

    pub fn into_handle(self) -> StoreHandle {
        Arc::new(self)
    }

    pub fn snapshot(&self) -> AppSnapshot {
        self.read().clone()
    }

    fn read(&self) -> RwLockReadGuard<'_, AppSnapshot> {
        self.state.read().expect("store lock poisoned")
    }

    fn write(&self) -> RwLockWriteGuard<'_, AppSnapshot> {
        self.state.write().expect("store lock poisoned")
    }

    /// Apply `mutate` under the write lock, then persist the resulting snapshot.
    fn mutate<T>(&self, mutate: impl FnOnce(&mut AppSnapshot) -> T) -> Result<T, StoreError> {
        let mut state = self.write();
        let outcome = mutate(&mut state);
        if let Err(err) = self.persistence.save(&state) {
            warn!(error = %err, "failed to persist application state");
            return Err(err.into());
        }
        Ok(outcome)
    }

    // --- submissions ---

    pub fn submissions(&self) -> Vec<Submission> {
        self.read().submissions.clone()
    }

    pub fn submission(&self, id: &SubmissionId) -> Option<Submission> {
        self.read()
            .submissions
            .iter()
            .find(|submission| &submission.id == id)
            .cloned()
    }

    pub fn find_submission(&self, candidate: &CandidateId, job: &JobId) -> Option<Submission> {
        self.read()
            .submissions
            .iter()
            .find(|submission| &submission.candidate_id == candidate && &submission.job_id == job)
            .cloned()
    }

    pub fn add_submission(&self, submission: Submission) -> Result<(), StoreError> {
        info!(
            submission_id = %submission.id,
            status = submission.status.label(),
            "adding submission"
        );
        self.mutate(|state| prepend(&mut state.submissions, submission))
    }

    /// Replace the stored submission with the same id. Unknown ids are ignored.
    pub fn update_submission(&self, submission: Submission) -> Result<bool, StoreError> {
        let id = submission.id.clone();
        let status = submission.status;
        let replaced = self.mutate(|state| replace(&mut state.submissions, submission))?;
        if replaced {
            info!(submission_id = %id, status = status.label(), "submission updated");
        } else {
            debug!(submission_id = %id, "update ignored for unknown submission");
        }
        Ok(replaced)
    }

    // --- candidates & jobs ---

    pub fn candidates(&self) -> Vec<Candidate> {
        self.read().candidates.clone()
    }

    pub fn candidate(&self, id: &CandidateId) -> Option<Candidate> {
        self.read()
            .candidates
            .iter()
            .find(|candidate| &candidate.id == id)
            .cloned()
    }

    pub fn add_candidate(&self, candidate: Candidate) -> Result<(), StoreError> {
        self.mutate(|state| prepend(&mut state.candidates, candidate))
    }

    pub fn update_candidate(&self, candidate: Candidate) -> Result<bool, StoreError> {
        self.mutate(|state| replace(&mut state.candidates, candidate))
    }

    pub fn jobs(&self) -> Vec<Job> {
        self.read().jobs.clone()
    }

    pub fn job(&self, id: &JobId) -> Option<Job> {
        self.read().jobs.iter().find(|job| &job.id == id).cloned()
    }

    pub fn add_job(&self, job: Job) -> Result<(), StoreError> {
        self.mutate(|state| prepend(&mut state.jobs, job))
    }

    pub fn update_job(&self, job: Job) -> Result<bool, StoreError> {
        self.mutate(|state| replace(&mut state.jobs, job))
    }

    // --- CRM & people ---

    pub fn leads(&self) -> Vec<Lead> {
        self.read().leads.clone()
    }

    pub fn add_lead(&self, lead: Lead) -> Result<(), StoreError> {
        self.mutate(|state| prepend(&mut state.leads, lead))
    }

    pub fn update_lead(&self, lead: Lead) -> Result<bool, StoreError> {
        self.mutate(|state| replace(&mut state.leads, lead))
    }

    pub fn deals(&self) -> Vec<Deal> {
        self.read().deals.clone()
    }

    pub fn add_deal(&self, deal: Deal) -> Result<(), StoreError> {
        self.mutate(|state| prepend(&mut state.deals, deal))
    }

    pub fn update_deal(&self, deal: Deal) -> Result<bool, StoreError> {
        self.mutate(|state| replace(&mut state.deals, deal))
    }

    pub fn accounts(&self) -> Vec<Account> {
        self.read().accounts.clone()
    }

    pub fn add_account(&self, account: Account) -> Result<(), StoreError> {
        self.mutate(|state| prepend(&mut state.accounts, account))
    }

    pub fn update_account(&self, account: Account) -> Result<bool, StoreError> {
        self.mutate(|state| replace(&mut state.accounts, account))
    }

    pub fn employees(&self) -> Vec<Employee> {
        self.read().employees.clone()
    }

    pub fn add_employee(&self, employee: Employee) -> Result<(), StoreError> {
        self.mutate(|state| prepend(&mut state.employees, employee))
    }

    pub fn update_employee(&self, employee: Employee) -> Result<bool, StoreError> {
        self.mutate(|state| replace(&mut state.employees, employee))
    }

    // --- HR ---

    pub fn approval_requests(&self) -> Vec<ApprovalRequest> {
        self.read().approval_requests.clone()
    }

    pub fn update_approval_request(
        &self,
        id: &str,
        status: ApprovalStatus,
    ) -> Result<bool, StoreError> {
        self.mutate(|state| {
            match state
                .approval_requests
                .iter_mut()
                .find(|request| request.id == id)
            {
                Some(request) => {
                    request.status = status;
                    true
                }
                None => false,
            }
        })
    }

    pub fn payroll_run(&self) -> PayrollRun {
        self.read().payroll_run.clone()
    }

    /// Set the payroll status; `step` overrides the completed step count when given.
    pub fn update_payroll_status(
        &self,
        status: impl Into<String>,
        step: Option<u32>,
    ) -> Result<(), StoreError> {
        let status = status.into();
        self.mutate(|state| {
            state.payroll_run.status = status;
            if let Some(step) = step {
                state.payroll_run.steps_completed = step;
            }
        })
    }

    // --- academy & workspace ---

    pub fn academy_progress(&self) -> std::collections::BTreeMap<String, LessonProgress> {
        self.read().academy_progress.clone()
    }

    /// Record lesson progress under `"{module}-{lesson}"`. Omitted score or artifact keep the
    /// previous value; completion stamps the current time.
    pub fn update_lesson_status(
        &self,
        module_id: u32,
        lesson_id: &str,
        status: LessonStatus,
        score: Option<u32>,
        artifact: Option<String>,
    ) -> Result<LessonProgress, StoreError> {
        let key = format!("{module_id}-{lesson_id}");
        self.mutate(|state| {
            let current = state.academy_progress.get(&key).cloned();
            let completed_at = if status == LessonStatus::Completed {
                Some(Utc::now().to_rfc3339())
            } else {
                current.as_ref().and_then(|c| c.completed_at.clone())
            };
            let progress = LessonProgress {
                status,
                score: score.or_else(|| current.as_ref().and_then(|c| c.score)),
                lab_artifact: artifact
                    .or_else(|| current.as_ref().and_then(|c| c.lab_artifact.clone())),
                completed_at,
            };
            state.academy_progress.insert(key, progress.clone());
            progress
        })
    }

    /// Pre-populate demo progress. Does nothing once any progress exists.
    pub fn initialize_academy(&self) -> Result<bool, StoreError> {
        if !self.read().academy_progress.is_empty() {
            return Ok(false);
        }
        self.mutate(|state| {
            if !state.academy_progress.is_empty() {
                return false;
            }
            state.academy_progress = initial_academy_progress();
            true
        })
    }

    pub fn reset_progress(&self) -> Result<(), StoreError> {
        self.mutate(|state| state.academy_progress.clear())
    }

    pub fn is_sprint_active(&self) -> bool {
        self.read().is_sprint_active
    }

    pub fn join_sprint(&self) -> Result<(), StoreError> {
        self.mutate(|state| state.is_sprint_active = true)
    }

    pub fn active_role(&self) -> Role {
        self.read().active_role.clone()
    }

    pub fn set_active_role(&self, role: Role) -> Result<(), StoreError> {
        self.mutate(|state| state.active_role = role)
    }
}

fn prepend<T>(records: &mut Vec<T>, record: T) {
    records.insert(0, record);
}

fn replace<T: Keyed>(records: &mut [T], record: T) -> bool {
    match records.iter_mut().find(|existing| existing.key() == record.key()) {
        Some(slot) => {
            *slot = record;
            true
        }
        None => false,
    }
}

fn initial_academy_progress() -> std::collections::BTreeMap<String, LessonProgress> {
    let completed = |score: u32, date: &str| LessonProgress {
        status: LessonStatus::Completed,
        score: Some(score),
        lab_artifact: None,
        completed_at: Some(format!("{date}T00:00:00+00:00")),
    };

    [
        ("1-m1-l1", completed(95, "2024-10-01")),
        ("1-m1-l2", completed(100, "2024-10-02")),
        ("1-m1-l3", completed(85, "2024-10-03")),
        ("3-m3-l1", completed(90, "2024-10-05")),
        ("3-m3-l2", completed(80, "2024-10-06")),
        ("3-m3-l3", completed(100, "2024-10-07")),
        ("5-m5-l1", completed(92, "2024-10-10")),
        ("5-m5-l2", completed(88, "2024-10-12")),
        (
            "5-m5-l3",
            LessonProgress {
                status: LessonStatus::Unlocked,
                score: None,
                lab_artifact: None,
                completed_at: None,
            },
        ),
    ]
    .into_iter()
    .map(|(key, progress)| (key.to_string(), progress))
    .collect()
}
