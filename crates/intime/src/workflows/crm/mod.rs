//! CRM lead qualification using the BANT rubric.

pub mod qualification;

pub use qualification::{
    AuthorityLevel, BantAssessment, BantScore, BudgetStatus, FieldError, QualificationError,
    QualificationResult, QualificationTier, Urgency,
};

#[cfg(test)]
mod tests {
    use super::*;

    fn assessment() -> BantAssessment {
        BantAssessment {
            bant_budget: 10,
            bant_authority: 10,
            bant_need: 20,
            bant_timeline: 5,
            budget_status: None,
            authority_level: None,
            urgency: None,
            positions_count: Some(3),
            skills_needed: vec![
                "Gosu".to_string(),
                " Gosu ".to_string(),
                "PolicyCenter".to_string(),
            ],
            qualification_result: QualificationResult::QualifiedNurture,
            qualification_notes: None,
        }
    }

    #[test]
    fn totals_raw_component_scores() {
        let score = assessment().score().expect("valid assessment");
        assert_eq!(score.total, 45);
        assert_eq!(score.tier, QualificationTier::NeedsDevelopment);
        assert_eq!(score.label, "Needs Development");
        assert_eq!(score.skills_needed, vec!["Gosu", "PolicyCenter"]);
    }

    #[test]
    fn selected_options_override_component_scores() {
        let mut input = assessment();
        input.budget_status = Some(BudgetStatus::Confirmed);
        input.authority_level = Some(AuthorityLevel::DecisionMaker);
        input.urgency = Some(Urgency::High);

        let score = input.score().expect("valid assessment");
        assert_eq!((score.budget, score.authority, score.timeline), (25, 25, 20));
        assert_eq!(score.total, 90);
        assert_eq!(score.tier, QualificationTier::HighlyQualified);
    }

    #[test]
    fn tier_boundaries_follow_rubric() {
        assert_eq!(QualificationTier::for_total(100), QualificationTier::HighlyQualified);
        assert_eq!(QualificationTier::for_total(75), QualificationTier::HighlyQualified);
        assert_eq!(QualificationTier::for_total(74), QualificationTier::GoodProspect);
        assert_eq!(QualificationTier::for_total(50), QualificationTier::GoodProspect);
        assert_eq!(QualificationTier::for_total(25), QualificationTier::NeedsDevelopment);
        assert_eq!(QualificationTier::for_total(24), QualificationTier::LowPriority);
        assert_eq!(QualificationTier::for_total(0).label(), "Low Priority");
    }

    #[test]
    fn rejects_out_of_range_fields() {
        let mut input = assessment();
        input.bant_need = 30;
        input.positions_count = Some(0);

        match input.score() {
            Err(QualificationError::Invalid(errors)) => {
                let fields: Vec<_> = errors.iter().map(|error| error.field).collect();
                assert_eq!(fields, vec!["bantNeed", "positionsCount"]);
            }
            other => panic!("expected validation failure, got {other:?}"),
        }
    }
}
