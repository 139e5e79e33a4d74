//! Eligibility domain services
//!
//! [`EligibilityService`] coordinates an ordered list of rules into a single
//! decision, in two phases:
//!
//! 1. **Rejection scan**: rules are asked for a rejection reason in list
//!    order. The first non-blank reason declines the applicant and stops the
//!    evaluation; no later rule is consulted.
//! 2. **Surcharge sum**: if no rule declines, every rule's surcharge
//!    contribution is computed and the contributions are added together.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, warn};

use crate::applicant::Applicant;
use crate::error::EligibilityError;
use crate::result::{EligibilityResult, SurchargeFactor};
use crate::rules::{standard_rules, EligibilityRule};

/// One rule's share of the total surcharge
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SurchargeContribution {
    pub rule: &'static str,
    pub factor: Decimal,
}

/// A decision together with how it was reached
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assessment {
    /// The final decision
    pub result: EligibilityResult,
    /// Name of the rule that declined the applicant, if any
    pub rejected_by: Option<&'static str>,
    /// Per-rule surcharge contributions, in rule order; empty when declined
    pub contributions: Vec<SurchargeContribution>,
}

/// Service deciding eligibility and surcharge for applicants
///
/// The service owns its rules and holds no other state, so a single instance
/// can be shared across threads and reused for any number of evaluations.
#[derive(Debug)]
pub struct EligibilityService {
    rules: Vec<Box<dyn EligibilityRule>>,
}

impl EligibilityService {
    /// Creates a service over an explicit, ordered rule list
    ///
    /// # Arguments
    ///
    /// * `rules` - Rules in evaluation order; the order decides which
    ///   rejection reason is reported when several rules decline
    pub fn new(rules: Vec<Box<dyn EligibilityRule>>) -> Self {
        Self { rules }
    }

    /// Creates a service with the standard rules:
    /// age, chronic disease, smoker, BMI, high-risk combinations
    pub fn standard() -> Self {
        Self::new(standard_rules())
    }

    /// Names of the rules, in evaluation order
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    /// Evaluates an applicant
    ///
    /// # Arguments
    ///
    /// * `applicant` - The applicant to evaluate
    ///
    /// # Returns
    ///
    /// `NotEligible` with the first rejection reason in rule order, or
    /// `Eligible` with the sum of every rule's surcharge
    ///
    /// # Errors
    ///
    /// Only a rule that breaks its contract can make this fail: a negative
    /// surcharge contribution yielding a negative total is reported as
    /// `NegativeSurcharge`. The standard rules never do.
    ///
    /// # Example
    ///
    /// ```rust
    /// use domain_eligibility::{Applicant, ChronicDiseases, EligibilityService};
    /// use rust_decimal_macros::dec;
    ///
    /// let service = EligibilityService::standard();
    /// let applicant = Applicant::new(80, true, dec!(50), dec!(1.75), ChronicDiseases::none())?;
    ///
    /// let result = service.evaluate(&applicant)?;
    /// assert!(result.is_eligible());
    /// assert_eq!(result.surcharge_factor(), dec!(0.35));
    /// # Ok::<(), domain_eligibility::EligibilityError>(())
    /// ```
    pub fn evaluate(&self, applicant: &Applicant) -> Result<EligibilityResult, EligibilityError> {
        self.assess(applicant).map(|assessment| assessment.result)
    }

    /// Evaluates an applicant and reports how the decision was reached
    ///
    /// Follows exactly the same two phases as [`evaluate`](Self::evaluate);
    /// a declined applicant gets no surcharge breakdown.
    pub fn assess(&self, applicant: &Applicant) -> Result<Assessment, EligibilityError> {
        if let Some((rule, reason)) = self.first_rejection(applicant) {
            debug!(rule, reason, "Applicant not eligible");
            return Ok(Assessment {
                result: EligibilityResult::not_eligible(reason)?,
                rejected_by: Some(rule),
                contributions: Vec::new(),
            });
        }

        let contributions: Vec<SurchargeContribution> = self
            .rules
            .iter()
            .map(|rule| SurchargeContribution {
                rule: rule.name(),
                factor: rule.surcharge_factor(applicant),
            })
            .collect();

        for contribution in contributions.iter().filter(|c| c.factor < Decimal::ZERO) {
            warn!(
                rule = contribution.rule,
                factor = %contribution.factor,
                "Rule returned a negative surcharge"
            );
        }

        let total: Decimal = contributions.iter().map(|c| c.factor).sum();
        let surcharge_factor = SurchargeFactor::new(total)?;

        debug!(surcharge = %surcharge_factor, "Applicant eligible");

        Ok(Assessment {
            result: EligibilityResult::Eligible { surcharge_factor },
            rejected_by: None,
            contributions,
        })
    }

    /// Finds the first rule, in order, that declines the applicant
    fn first_rejection(&self, applicant: &Applicant) -> Option<(&'static str, &'static str)> {
        self.rules.iter().find_map(|rule| {
            let reason = rule.rejection_reason(applicant)?;
            if reason.trim().is_empty() {
                warn!(rule = rule.name(), "Rule returned a blank rejection reason; ignoring");
                return None;
            }
            Some((rule.name(), reason))
        })
    }
}

impl Default for EligibilityService {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::disease::{ChronicDisease, ChronicDiseases};
    use rust_decimal_macros::dec;

    #[derive(Debug)]
    struct NegativeRule;

    impl EligibilityRule for NegativeRule {
        fn name(&self) -> &'static str {
            "negative"
        }

        fn surcharge_factor(&self, _applicant: &Applicant) -> Decimal {
            dec!(-0.50)
        }
    }

    #[derive(Debug)]
    struct BlankReasonRule;

    impl EligibilityRule for BlankReasonRule {
        fn name(&self) -> &'static str {
            "blank_reason"
        }

        fn rejection_reason(&self, _applicant: &Applicant) -> Option<&'static str> {
            Some("   ")
        }
    }

    fn healthy_adult() -> Applicant {
        Applicant::new(30, false, dec!(70), dec!(1.75), ChronicDiseases::none()).unwrap()
    }

    #[test]
    fn test_standard_service_accepts_healthy_adult() {
        let service = EligibilityService::standard();
        let result = service.evaluate(&healthy_adult()).unwrap();

        assert!(result.is_eligible());
        assert_eq!(result.surcharge_factor(), dec!(0));
    }

    #[test]
    fn test_assessment_breakdown() {
        let service = EligibilityService::standard();
        let applicant = Applicant::new(80, true, dec!(50), dec!(1.75), ChronicDiseases::none()).unwrap();

        let assessment = service.assess(&applicant).unwrap();

        assert_eq!(assessment.rejected_by, None);
        assert_eq!(assessment.contributions.len(), 5);
        assert_eq!(assessment.contributions[0].factor, dec!(0.15));
        assert_eq!(assessment.contributions[2].factor, dec!(0.10));
        assert_eq!(assessment.contributions[3].factor, dec!(0.10));
        assert_eq!(assessment.result.surcharge_factor(), dec!(0.35));
    }

    #[test]
    fn test_rejection_has_no_breakdown() {
        let service = EligibilityService::standard();
        let applicant = Applicant::new(
            30,
            false,
            dec!(70),
            dec!(1.75),
            ChronicDisease::Cancer,
        )
        .unwrap();

        let assessment = service.assess(&applicant).unwrap();

        assert_eq!(assessment.rejected_by, Some("chronic_disease"));
        assert!(assessment.contributions.is_empty());
    }

    #[test]
    fn test_negative_total_is_reported() {
        let service = EligibilityService::new(vec![Box::new(NegativeRule)]);

        assert_eq!(
            service.evaluate(&healthy_adult()),
            Err(EligibilityError::NegativeSurcharge(dec!(-0.50)))
        );
    }

    #[test]
    fn test_blank_reason_is_ignored() {
        let service = EligibilityService::new(vec![Box::new(BlankReasonRule)]);
        let result = service.evaluate(&healthy_adult()).unwrap();

        assert!(result.is_eligible());
    }

    #[test]
    fn test_empty_rule_list_accepts_everyone() {
        let service = EligibilityService::new(Vec::new());
        let result = service.evaluate(&healthy_adult()).unwrap();

        assert_eq!(result, EligibilityResult::eligible(dec!(0)).unwrap());
    }
}
