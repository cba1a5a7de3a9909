use std::collections::BTreeMap;

use serde_json::json;

use super::entities::{
    Account, ApprovalRequest, ApprovalStatus, Candidate, CandidateKind, Deal, Employee, Job,
    Lead, PayrollRun, PointOfContact, Role,
};
use super::snapshot::AppSnapshot;
use crate::workflows::submissions::domain::{
    CandidateId, JobId, Submission, SubmissionId, SubmissionStatus,
};

/// Demo workspace the store starts from before any persisted state is merged in.
pub fn seed_snapshot() -> AppSnapshot {
    AppSnapshot {
        academy_progress: BTreeMap::new(),
        is_sprint_active: false,
        active_role: Role::default(),
        leads: leads(),
        deals: deals(),
        accounts: accounts(),
        jobs: jobs(),
        candidates: candidates(),
        submissions: submissions(),
        employees: employees(),
        approval_requests: approval_requests(),
        payroll_run: PayrollRun {
            id: "pay-nov-1".to_string(),
            period_start: "Nov 1".to_string(),
            period_end: "Nov 15, 2025".to_string(),
            status: "Ready for Approval".to_string(),
            total_amount: 218_450,
            employee_count: 47,
            steps_completed: 0,
        },
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn poc(
    id: &str,
    name: &str,
    role: &str,
    email: &str,
    preference: &str,
    influence: &str,
) -> PointOfContact {
    PointOfContact {
        id: id.to_string(),
        name: name.to_string(),
        role: role.to_string(),
        email: email.to_string(),
        preference: preference.to_string(),
        influence: influence.to_string(),
    }
}

fn accounts() -> Vec<Account> {
    let account = |id: &str,
                   name: &str,
                   industry: &str,
                   status: &str,
                   kind: &str,
                   manager: &str,
                   responsiveness: &str,
                   preference: &str,
                   description: &str,
                   pocs: Vec<PointOfContact>| Account {
        id: id.to_string(),
        name: name.to_string(),
        industry: industry.to_string(),
        status: status.to_string(),
        kind: kind.to_string(),
        account_manager_id: manager.to_string(),
        responsiveness: responsiveness.to_string(),
        preference: preference.to_string(),
        description: description.to_string(),
        pocs,
    };

    vec![
        account(
            "a1",
            "TechFlow Insurance",
            "P&C Insurance",
            "Active",
            "Direct Client",
            "e2",
            "High",
            "Quality",
            "Tier 1 carrier focused on digital transformation.",
            vec![
                poc("poc1", "Sarah Jenkins", "VP Engineering", "sarah@techflow.com", "Email", "Decision Maker"),
                poc("poc2", "Mike Ross", "TA Lead", "mike@techflow.com", "Phone", "Gatekeeper"),
            ],
        ),
        account(
            "a2",
            "Global Mutual",
            "Life Insurance",
            "Active",
            "Implementation Partner",
            "e2",
            "Medium",
            "Quantity",
            "Large SI partner needing bulk staffing for upgrades.",
            vec![poc("poc3", "David Chen", "Delivery Director", "dchen@global.com", "Email", "Decision Maker")],
        ),
        account(
            "a3",
            "SafeGuard",
            "Commercial Lines",
            "Prospect",
            "Direct Client",
            "e4",
            "Low",
            "Speed",
            "Mid-market carrier with urgent needs.",
            Vec::new(),
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn candidate(
    id: &str,
    name: &str,
    role: &str,
    status: &str,
    kind: CandidateKind,
    skills: &[&str],
    experience: &str,
    location: &str,
    rate: &str,
    email: &str,
    score: u8,
    source: &str,
    notes: &str,
    owner_id: &str,
) -> Candidate {
    Candidate {
        id: CandidateId(id.to_string()),
        name: name.to_string(),
        role: role.to_string(),
        status: status.to_string(),
        kind,
        skills: strings(skills),
        experience: experience.to_string(),
        location: location.to_string(),
        rate: rate.to_string(),
        email: email.to_string(),
        score,
        source: source.to_string(),
        notes: notes.to_string(),
        owner_id: owner_id.to_string(),
    }
}

#[rustfmt::skip]
fn candidates() -> Vec<Candidate> {
    use CandidateKind::{External, InternalBench, Student};

    vec![
        candidate("c1", "Sarah Jenkins", "PolicyCenter Dev", "active", Student, &["PolicyCenter", "Gosu", "Java", "Agile"], "4 Yrs", "Remote (US)", "$95/hr", "sarah.j@example.com", 92, "Academy", "Strong communicator. Certified in PC 10.", "e3"),
        candidate("c2", "Mike Chen", "BillingCenter Lead", "active", External, &["BillingCenter", "SQL", "Integration", "REST API"], "6 Yrs", "Chicago, IL", "$110/hr", "mike.c@example.com", 88, "LinkedIn", "Expert in billing workflows.", "e3"),
        candidate("c3", "Priya Sharma", "Senior Dev", "placed", External, &["PolicyCenter", "Cloud", "Gosu", "React"], "7 Yrs", "Remote", "$100/hr", "priya@example.com", 98, "Academy", "Top of class. Capstone project was excellent.", "e2"),
        candidate("c4", "Amit Kumar", "Integration Architect", "bench", InternalBench, &["Integration", "Gosu", "MuleSoft"], "8 Yrs", "Hybrid (NJ)", "$120/hr", "amit.k@example.com", 90, "Referral", "Available immediately.", "e4"),
        candidate("c5", "Vikram Patel", "ClaimCenter Dev", "bench", InternalBench, &["ClaimCenter", "Gosu"], "5 Yrs", "Remote", "$90/hr", "vikram@example.com", 85, "Academy", "H-1B Transfer needed.", "e4"),
        candidate("c6", "Emily Davis", "Guidewire QA", "new", External, &["Testing", "Selenium", "Gosu"], "3 Yrs", "Boston, MA", "$75/hr", "emily.d@example.com", 82, "LinkedIn", "Looking for contract work.", "e3"),
    ]
}

#[rustfmt::skip]
fn jobs() -> Vec<Job> {
    let job = |id: &str,
               account_id: &str,
               client: &str,
               title: &str,
               status: &str,
               kind: &str,
               rate: &str,
               location: &str,
               owner_id: &str,
               description: &str| Job {
        id: JobId(id.to_string()),
        account_id: account_id.to_string(),
        client: client.to_string(),
        title: title.to_string(),
        status: status.to_string(),
        kind: kind.to_string(),
        rate: rate.to_string(),
        location: location.to_string(),
        owner_id: owner_id.to_string(),
        description: description.to_string(),
    };

    vec![
        job("j1", "a1", "TechFlow Insurance", "Senior PolicyCenter Dev", "urgent", "Contract", "$90-110/hr", "Remote", "e3", "Lead migration from v8 to v10."),
        job("j2", "a1", "TechFlow Insurance", "BillingCenter Architect", "open", "Contract", "$120-140/hr", "Hybrid (NY)", "e3", "Architect new billing flow."),
        job("j3", "a2", "Global Mutual", "Integration Specialist", "open", "C2H", "$85-95/hr", "Remote", "e5", "MuleSoft integration work."),
        job("ext-1", "ext", "Cognizant (Portal)", "Guidewire Developer", "open", "Contract", "$90/hr", "Remote", "market", "External job scraped from Cognizant portal."),
        job("ext-2", "ext", "Deloitte", "PolicyCenter Lead", "open", "Contract", "$110/hr", "Chicago, IL", "market", "External job found on Indeed."),
        job("ext-3", "ext", "Capgemini", "ClaimCenter Config", "open", "Contract", "$85/hr", "Hartford, CT", "market", "Vendor portal requirement."),
    ]
}

#[rustfmt::skip]
fn submissions() -> Vec<Submission> {
    let submission = |id: &str,
                      job_id: &str,
                      candidate_id: &str,
                      status: SubmissionStatus,
                      created_at: &str,
                      last_activity: &str,
                      match_score: u8| Submission {
        id: SubmissionId(id.to_string()),
        job_id: JobId(job_id.to_string()),
        candidate_id: CandidateId(candidate_id.to_string()),
        status,
        created_at: created_at.to_string(),
        last_activity: last_activity.to_string(),
        match_score,
        interview_round: 1,
    };

    vec![
        submission("s1", "j1", "c1", SubmissionStatus::SubmittedToClient, "2024-10-15", "2024-10-16", 92),
        submission("s2", "j2", "c2", SubmissionStatus::ClientInterview, "2024-10-12", "2024-10-18", 88),
        submission("s3", "j1", "c3", SubmissionStatus::Placed, "2024-09-01", "2024-09-20", 98),
        submission("s4", "j3", "c4", SubmissionStatus::Sourced, "2024-10-20", "Sourced today", 90),
        submission("s5", "j3", "c5", SubmissionStatus::SubmissionReady, "2024-10-19", "Passed Screening", 85),
    ]
}

#[rustfmt::skip]
fn leads() -> Vec<Lead> {
    let lead = |id: &str,
                company: &str,
                first_name: &str,
                last_name: &str,
                title: &str,
                email: &str,
                status: &str,
                value: &str,
                last_action: &str,
                source: &str| Lead {
        id: id.to_string(),
        company: company.to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        title: title.to_string(),
        contact: format!("{first_name} {last_name}"),
        email: email.to_string(),
        status: status.to_string(),
        value: value.to_string(),
        last_action: last_action.to_string(),
        source: source.to_string(),
    };

    vec![
        lead("l1", "Acme Insure", "John", "Doe", "CTO", "john@acme.com", "warm", "$200k", "Replied to email 2h ago", "LinkedIn"),
        lead("l2", "Global Life", "Jane", "Smith", "VP HR", "jane@globallife.com", "new", "$150k", "Connected on LinkedIn", "Referral"),
        lead("l3", "MidWest Mutual", "Mike", "Ross", "Director", "mike@midwest.com", "cold", "$80k", "Email sent 1 week ago", "Cold Outreach"),
    ]
}

#[rustfmt::skip]
fn deals() -> Vec<Deal> {
    let deal = |id: &str,
                lead_id: &str,
                company: &str,
                title: &str,
                value: &str,
                stage: &str,
                probability: u8,
                expected_close: &str,
                owner_id: &str| Deal {
        id: id.to_string(),
        lead_id: lead_id.to_string(),
        company: company.to_string(),
        title: title.to_string(),
        value: value.to_string(),
        stage: stage.to_string(),
        probability,
        expected_close: expected_close.to_string(),
        owner_id: owner_id.to_string(),
    };

    vec![
        deal("d1", "l1", "Acme Insure", "Q4 Staffing Contract", "$200,000", "Negotiation", 75, "2024-11-30", "e2"),
        deal("d2", "l2", "Global Life", "BillingCenter Implementation", "$450,000", "Proposal", 40, "2024-12-15", "e2"),
        deal("d3", "l4", "RapidSure", "Initial Discovery", "$50,000", "Discovery", 20, "2025-01-15", "e3"),
    ]
}

#[rustfmt::skip]
fn employees() -> Vec<Employee> {
    let employee = |id: &str,
                    first_name: &str,
                    last_name: &str,
                    email: &str,
                    role: &str,
                    department: &str,
                    start_date: &str,
                    status: &str,
                    manager: &str,
                    location: &str,
                    salary: &str,
                    pod: &str| Employee {
        id: id.to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: email.to_string(),
        role: role.to_string(),
        department: department.to_string(),
        start_date: start_date.to_string(),
        status: status.to_string(),
        manager: manager.to_string(),
        location: location.to_string(),
        salary: salary.to_string(),
        pod: pod.to_string(),
    };

    vec![
        employee("e1", "Elena", "Rodriguez", "elena@intime.com", "Head of People", "HR", "2023-01-15", "Active", "CEO", "New York", "$140,000", "Leadership"),
        employee("e2", "David", "Kim", "david.k@intime.com", "Senior Account Manager", "Recruiting", "2023-03-01", "Active", "Elena Rodriguez", "Remote", "$110,000 + Comm", "Recruiting Pod A"),
        employee("e3", "Sarah", "Lao", "sarah.l@intime.com", "Technical Recruiter", "Recruiting", "2023-06-12", "Active", "David Kim", "Austin, TX", "$85,000 + Comm", "Recruiting Pod A"),
        employee("e4", "James", "Wilson", "james.w@intime.com", "Bench Sales Lead", "Bench Sales", "2023-08-01", "Active", "CEO", "Chicago, IL", "$100,000 + Comm", "Sales Pod 1"),
        employee("e5", "Marcus", "Johnson", "marcus.j@intime.com", "Junior Recruiter", "Recruiting", "2024-01-10", "Onboarding", "David Kim", "Remote", "$60,000", "Recruiting Pod B"),
        employee("e6", "Alice", "Wong", "alice@intime.com", "QA Engineer", "Engineering", "2024-02-01", "Active", "CTO", "Remote", "$95,000", "Product"),
        employee("e7", "Bob", "Smith", "bob@intime.com", "Account Executive", "Sales", "2024-03-10", "Active", "James Wilson", "New York", "$90,000", "Sales Pod 1"),
        employee("e8", "Charlie", "Brown", "charlie@intime.com", "HR Coordinator", "HR", "2024-04-05", "Onboarding", "Elena Rodriguez", "Austin, TX", "$55,000", "Leadership"),
        employee("e9", "Diana", "Prince", "diana@intime.com", "Product Manager", "Product", "2024-01-20", "Active", "CEO", "San Francisco", "$130,000", "Product"),
        employee("e10", "Evan", "Wright", "evan@intime.com", "DevOps Engineer", "Engineering", "2023-11-15", "Active", "CTO", "Remote", "$115,000", "Engineering"),
        employee("e11", "Fiona", "Gallagher", "fiona@intime.com", "Legal Counsel", "HR", "2023-09-01", "Active", "CEO", "Chicago", "$150,000", "Leadership"),
    ]
}

fn approval_requests() -> Vec<ApprovalRequest> {
    let request = |id: &str,
                   kind: &str,
                   employee_name: &str,
                   employee_id: &str,
                   date: &str,
                   details: serde_json::Value| ApprovalRequest {
        id: id.to_string(),
        kind: kind.to_string(),
        employee_name: employee_name.to_string(),
        employee_id: employee_id.to_string(),
        date: date.to_string(),
        status: ApprovalStatus::Pending,
        details: match details {
            serde_json::Value::Object(map) => map.into_iter().collect(),
            _ => BTreeMap::new(),
        },
    };

    vec![
        request(
            "req1",
            "Time Off",
            "David Kim",
            "e2",
            "2025-12-20",
            json!({ "start": "Dec 20", "end": "Dec 27", "days": 5, "reason": "Family Vacation" }),
        ),
        request(
            "req2",
            "Commission",
            "Sarah Lao",
            "e3",
            "2025-11-15",
            json!({
                "amount": "$1,500",
                "client": "Acme Corp",
                "placement": "John Smith",
                "dealValue": "$75,000",
                "contractValue": "$75,000"
            }),
        ),
        request(
            "req3",
            "Expense",
            "James Wilson",
            "e4",
            "2025-11-12",
            json!({ "amount": "$284.50", "items": 3, "category": "Client Entertainment" }),
        ),
    ]
}
