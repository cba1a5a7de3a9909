use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::workflows::submissions::domain::{CandidateId, JobId};

/// Records kept in the store that are replaced wholesale by id.
pub trait Keyed {
    fn key(&self) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateKind {
    Student,
    External,
    InternalBench,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: CandidateId,
    pub name: String,
    pub role: String,
    pub status: String,
    #[serde(rename = "type")]
    pub kind: CandidateKind,
    pub skills: Vec<String>,
    pub experience: String,
    pub location: String,
    pub rate: String,
    pub email: String,
    pub score: u8,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub owner_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: JobId,
    pub account_id: String,
    pub client: String,
    pub title: String,
    pub status: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub rate: String,
    pub location: String,
    pub owner_id: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointOfContact {
    pub id: String,
    pub name: String,
    pub role: String,
    pub email: String,
    pub preference: String,
    pub influence: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub name: String,
    pub industry: String,
    pub status: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub account_manager_id: String,
    pub responsiveness: String,
    pub preference: String,
    pub description: String,
    #[serde(default)]
    pub pocs: Vec<PointOfContact>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: String,
    pub company: String,
    pub first_name: String,
    pub last_name: String,
    pub title: String,
    pub contact: String,
    pub email: String,
    pub status: String,
    pub value: String,
    pub last_action: String,
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    pub id: String,
    pub lead_id: String,
    pub company: String,
    pub title: String,
    pub value: String,
    pub stage: String,
    pub probability: u8,
    pub expected_close: String,
    pub owner_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
    pub department: String,
    pub start_date: String,
    pub status: String,
    pub manager: String,
    pub location: String,
    pub salary: String,
    pub pod: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Denied,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalRequest {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub employee_name: String,
    pub employee_id: String,
    pub date: String,
    pub status: ApprovalStatus,
    #[serde(default)]
    pub details: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollRun {
    pub id: String,
    pub period_start: String,
    pub period_end: String,
    pub status: String,
    pub total_amount: u64,
    pub employee_count: u32,
    pub steps_completed: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LessonStatus {
    Locked,
    Unlocked,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonProgress {
    pub status: LessonStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lab_artifact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
}

/// Workspace role the user is currently acting as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role(pub String);

impl Default for Role {
    fn default() -> Self {
        Role("student".to_string())
    }
}

impl Keyed for Candidate {
    fn key(&self) -> &str {
        &self.id.0
    }
}

impl Keyed for Job {
    fn key(&self) -> &str {
        &self.id.0
    }
}

impl Keyed for crate::workflows::submissions::domain::Submission {
    fn key(&self) -> &str {
        &self.id.0
    }
}

macro_rules! keyed_by_id {
    ($($ty:ty),+) => {
        $(impl Keyed for $ty {
            fn key(&self) -> &str {
                &self.id
            }
        })+
    };
}

keyed_by_id!(Account, Lead, Deal, Employee, ApprovalRequest);
