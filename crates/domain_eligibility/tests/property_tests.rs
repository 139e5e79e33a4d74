//! Property-Based Eligibility Tests
//!
//! These tests check the decision invariants over randomly generated
//! applicants:
//!
//! - Totality: the standard service always returns a decision
//! - Mutual exclusion: a decision is either a surcharge or a reason
//! - Additivity: an eligible surcharge is the exact sum of rule contributions
//! - Determinism: the same applicant always gets the same decision
//! - Precedence: the reported reason is the first one in rule order

use domain_eligibility::{standard_rules, EligibilityRule, EligibilityService};
use proptest::prelude::*;
use rust_decimal::Decimal;
use test_utils::{
    applicant_strategy, assert_shapes_exclusive, extreme_applicant_strategy,
    insurable_applicant_strategy,
};

proptest! {
    /// Every valid applicant gets a well-formed decision
    #[test]
    fn prop_evaluation_is_total(applicant in applicant_strategy()) {
        let result = EligibilityService::standard().evaluate(&applicant);

        prop_assert!(result.is_ok());
        assert_shapes_exclusive(&result.unwrap());
    }

    /// Measurements anywhere in decimal range still get a decision
    #[test]
    fn prop_evaluation_is_total_for_extreme_measurements(applicant in extreme_applicant_strategy()) {
        let result = EligibilityService::standard().evaluate(&applicant);

        prop_assert!(result.is_ok());
        assert_shapes_exclusive(&result.unwrap());
        prop_assert!(!(applicant.is_underweight() && applicant.is_obese()));
    }

    /// An eligible surcharge equals the sum of non-negative rule contributions
    #[test]
    fn prop_surcharge_is_additive(applicant in applicant_strategy()) {
        let result = EligibilityService::standard().evaluate(&applicant).unwrap();
        prop_assume!(result.is_eligible());

        let contributions: Vec<Decimal> = standard_rules()
            .iter()
            .map(|rule| rule.surcharge_factor(&applicant))
            .collect();

        prop_assert!(contributions.iter().all(|c| *c >= Decimal::ZERO));
        prop_assert_eq!(result.surcharge_factor(), contributions.iter().copied().sum::<Decimal>());
    }

    /// Repeated evaluation yields identical results
    #[test]
    fn prop_evaluation_is_deterministic(applicant in applicant_strategy()) {
        let service = EligibilityService::standard();
        let first = service.evaluate(&applicant).unwrap();
        let second = service.evaluate(&applicant.clone()).unwrap();

        prop_assert_eq!(first, second);
    }

    /// The reported reason is the first non-empty one in rule order
    #[test]
    fn prop_first_reason_wins(applicant in applicant_strategy()) {
        let result = EligibilityService::standard().evaluate(&applicant).unwrap();
        let expected = standard_rules()
            .iter()
            .find_map(|rule| rule.rejection_reason(&applicant));

        prop_assert_eq!(result.rejection_reason(), expected);
    }

    /// Each rule's verdict agrees with its reason
    #[test]
    fn prop_verdict_matches_reason(applicant in applicant_strategy()) {
        for rule in standard_rules() {
            prop_assert_eq!(rule.is_eligible(&applicant), rule.rejection_reason(&applicant).is_none());
        }
    }

    /// Insurable applicants are only ever declined as a high-risk combination
    #[test]
    fn prop_insurable_applicants_only_fail_on_combinations(applicant in insurable_applicant_strategy()) {
        let assessment = EligibilityService::standard().assess(&applicant).unwrap();

        if let Some(rule) = assessment.rejected_by {
            prop_assert_eq!(rule, "high_risk");
        }
    }
}
