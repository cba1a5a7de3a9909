use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::entities::{
    Account, ApprovalRequest, Candidate, Deal, Employee, Job, Lead, LessonProgress, PayrollRun,
    Role,
};
use crate::workflows::submissions::domain::Submission;

/// Storage key the snapshot is written under, shared with earlier browser builds.
pub const STORAGE_KEY: &str = "intime-academy-storage";

/// Complete application state held by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSnapshot {
    pub academy_progress: BTreeMap<String, LessonProgress>,
    pub is_sprint_active: bool,
    pub active_role: Role,
    pub leads: Vec<Lead>,
    pub deals: Vec<Deal>,
    pub accounts: Vec<Account>,
    pub jobs: Vec<Job>,
    pub candidates: Vec<Candidate>,
    pub submissions: Vec<Submission>,
    pub employees: Vec<Employee>,
    pub approval_requests: Vec<ApprovalRequest>,
    pub payroll_run: PayrollRun,
}

/// Persisted form of the snapshot. Every field is optional so older files that predate a
/// field still load; missing fields fall back to the seed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    pub academy_progress: Option<BTreeMap<String, LessonProgress>>,
    pub is_sprint_active: Option<bool>,
    pub active_role: Option<Role>,
    pub leads: Option<Vec<Lead>>,
    pub deals: Option<Vec<Deal>>,
    pub accounts: Option<Vec<Account>>,
    pub jobs: Option<Vec<Job>>,
    pub candidates: Option<Vec<Candidate>>,
    pub submissions: Option<Vec<Submission>>,
    pub employees: Option<Vec<Employee>>,
    pub approval_requests: Option<Vec<ApprovalRequest>>,
    pub payroll_run: Option<PayrollRun>,
}

impl PersistedState {
    /// Shallow merge: each top-level field present on disk replaces the seed value.
    pub fn merge_into(self, mut base: AppSnapshot) -> AppSnapshot {
        macro_rules! take {
            ($($field:ident),+) => {
                $(if let Some(value) = self.$field {
                    base.$field = value;
                })+
            };
        }

        take!(
            academy_progress,
            is_sprint_active,
            active_role,
            leads,
            deals,
            accounts,
            jobs,
            candidates,
            submissions,
            employees,
            approval_requests,
            payroll_run
        );
        base
    }
}

/// On-disk envelope: `{ "intime-academy-storage": { "state": {...} } }`.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct StorageEnvelope<T> {
    #[serde(rename = "intime-academy-storage")]
    pub entry: StorageEntry<T>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct StorageEntry<T> {
    pub state: T,
}
