use serde::{Deserialize, Serialize};

/// Ceiling for each BANT component; four components make a 100 point scale.
pub const COMPONENT_MAX: u8 = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    Confirmed,
    Likely,
    Unclear,
    NoBudget,
}

impl BudgetStatus {
    pub const fn score(self) -> u8 {
        match self {
            BudgetStatus::Confirmed => 25,
            BudgetStatus::Likely => 15,
            BudgetStatus::Unclear => 5,
            BudgetStatus::NoBudget => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthorityLevel {
    DecisionMaker,
    Influencer,
    Gatekeeper,
    NoAuthority,
}

impl AuthorityLevel {
    pub const fn score(self) -> u8 {
        match self {
            AuthorityLevel::DecisionMaker => 25,
            AuthorityLevel::Influencer => 20,
            AuthorityLevel::Gatekeeper => 10,
            AuthorityLevel::NoAuthority => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Immediate,
    High,
    Medium,
    Low,
}

impl Urgency {
    pub const fn score(self) -> u8 {
        match self {
            Urgency::Immediate => 25,
            Urgency::High => 20,
            Urgency::Medium => 10,
            Urgency::Low => 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualificationResult {
    QualifiedConvert,
    QualifiedNurture,
    NotQualified,
}

/// Recruiter's BANT assessment of a lead.
///
/// Picking a budget status, authority level, or urgency sets the matching component to that
/// option's score, overriding the raw slider value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BantAssessment {
    #[serde(default)]
    pub bant_budget: u8,
    #[serde(default)]
    pub bant_authority: u8,
    #[serde(default)]
    pub bant_need: u8,
    #[serde(default)]
    pub bant_timeline: u8,
    #[serde(default)]
    pub budget_status: Option<BudgetStatus>,
    #[serde(default)]
    pub authority_level: Option<AuthorityLevel>,
    #[serde(default)]
    pub urgency: Option<Urgency>,
    #[serde(default)]
    pub positions_count: Option<u32>,
    #[serde(default)]
    pub skills_needed: Vec<String>,
    pub qualification_result: QualificationResult,
    #[serde(default)]
    pub qualification_notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QualificationTier {
    HighlyQualified,
    GoodProspect,
    NeedsDevelopment,
    LowPriority,
}

impl QualificationTier {
    pub const fn for_total(total: u8) -> Self {
        match total {
            75..=u8::MAX => QualificationTier::HighlyQualified,
            50..=74 => QualificationTier::GoodProspect,
            25..=49 => QualificationTier::NeedsDevelopment,
            _ => QualificationTier::LowPriority,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            QualificationTier::HighlyQualified => "Highly Qualified",
            QualificationTier::GoodProspect => "Good Prospect",
            QualificationTier::NeedsDevelopment => "Needs Development",
            QualificationTier::LowPriority => "Low Priority",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BantScore {
    pub budget: u8,
    pub authority: u8,
    pub need: u8,
    pub timeline: u8,
    pub total: u8,
    pub tier: QualificationTier,
    pub label: &'static str,
    pub result: QualificationResult,
    pub skills_needed: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QualificationError {
    #[error("lead qualification is invalid: {}", summarize(.0))]
    Invalid(Vec<FieldError>),
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|error| format!("{} {}", error.field, error.message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl BantAssessment {
    pub fn validate(&self) -> Result<(), QualificationError> {
        let mut errors = Vec::new();

        for (field, value) in [
            ("bantBudget", self.bant_budget),
            ("bantAuthority", self.bant_authority),
            ("bantNeed", self.bant_need),
            ("bantTimeline", self.bant_timeline),
        ] {
            if value > COMPONENT_MAX {
                errors.push(FieldError {
                    field,
                    message: format!("must be between 0 and {COMPONENT_MAX}, got {value}"),
                });
            }
        }

        if let Some(count) = self.positions_count {
            if !(1..=100).contains(&count) {
                errors.push(FieldError {
                    field: "positionsCount",
                    message: format!("must be between 1 and 100, got {count}"),
                });
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(QualificationError::Invalid(errors))
        }
    }

    /// Validate, resolve option overrides, and total the four components.
    pub fn score(&self) -> Result<BantScore, QualificationError> {
        self.validate()?;

        let budget = self.budget_status.map_or(self.bant_budget, BudgetStatus::score);
        let authority = self
            .authority_level
            .map_or(self.bant_authority, AuthorityLevel::score);
        let need = self.bant_need;
        let timeline = self.urgency.map_or(self.bant_timeline, Urgency::score);
        let total = budget + authority + need + timeline;
        let tier = QualificationTier::for_total(total);

        let mut skills_needed: Vec<String> = Vec::new();
        for skill in self.skills_needed.iter().map(|skill| skill.trim()) {
            if !skill.is_empty() && !skills_needed.iter().any(|known| known == skill) {
                skills_needed.push(skill.to_string());
            }
        }

        Ok(BantScore {
            budget,
            authority,
            need,
            timeline,
            total,
            tier,
            label: tier.label(),
            result: self.qualification_result,
            skills_needed,
        })
    }
}
