//! High-risk combination rule
//!
//! Some risk factors are acceptable on their own but not together. This rule
//! reads the same derived predicates the other rules use (obesity, age,
//! smoking, manageable conditions) and declines the applicant when any
//! dangerous combination is present. It never adds a surcharge.
//!
//! # Canonical combinations
//!
//! | Name | All of | Any of |
//! |---|---|---|
//! | `obesity_diabetes` | obese, diabetes | - |
//! | `obesity_hypertension_elderly` | obese, hypertension, elderly | - |
//! | `aggravated_diabetes_hypertension` | diabetes, hypertension | dyslipidemia, elderly, smoker |
//! | `smoker_hypertension_elderly` | smoker, hypertension, elderly | - |

use serde::Serialize;
use tracing::debug;

use crate::applicant::Applicant;
use crate::rules::EligibilityRule;

pub const HIGH_RISK_COMBINATION_REASON: &str =
    "Combination of risk factors creates an unacceptably high risk profile";

/// A single risk signal derived from an applicant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactor {
    Obese,
    Elderly,
    Smoker,
    Diabetes,
    Hypertension,
    Dyslipidemia,
}

impl RiskFactor {
    /// Returns true if the factor applies to the applicant
    pub fn is_present_in(self, applicant: &Applicant) -> bool {
        match self {
            RiskFactor::Obese => applicant.is_obese(),
            RiskFactor::Elderly => applicant.is_elderly(),
            RiskFactor::Smoker => applicant.is_smoker(),
            RiskFactor::Diabetes => applicant.has_diabetes(),
            RiskFactor::Hypertension => applicant.has_hypertension(),
            RiskFactor::Dyslipidemia => applicant.has_dyslipidemia(),
        }
    }
}

/// A named set of co-occurring risk factors
///
/// Holds when every `all_of` factor is present and, if `any_of` is not
/// empty, at least one `any_of` factor is present too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskCombination {
    pub name: &'static str,
    pub all_of: &'static [RiskFactor],
    pub any_of: &'static [RiskFactor],
}

impl RiskCombination {
    pub fn matches(&self, applicant: &Applicant) -> bool {
        let required = self
            .all_of
            .iter()
            .all(|factor| factor.is_present_in(applicant));
        let aggravating = self.any_of.is_empty()
            || self.any_of.iter().any(|factor| factor.is_present_in(applicant));

        required && aggravating
    }
}

/// The canonical dangerous combinations
pub const STANDARD_COMBINATIONS: &[RiskCombination] = &[
    RiskCombination {
        name: "obesity_diabetes",
        all_of: &[RiskFactor::Obese, RiskFactor::Diabetes],
        any_of: &[],
    },
    RiskCombination {
        name: "obesity_hypertension_elderly",
        all_of: &[RiskFactor::Obese, RiskFactor::Hypertension, RiskFactor::Elderly],
        any_of: &[],
    },
    RiskCombination {
        name: "aggravated_diabetes_hypertension",
        all_of: &[RiskFactor::Diabetes, RiskFactor::Hypertension],
        any_of: &[RiskFactor::Dyslipidemia, RiskFactor::Elderly, RiskFactor::Smoker],
    },
    RiskCombination {
        name: "smoker_hypertension_elderly",
        all_of: &[RiskFactor::Smoker, RiskFactor::Hypertension, RiskFactor::Elderly],
        any_of: &[],
    },
];

/// Declines applicants presenting any dangerous risk combination
#[derive(Debug, Clone, Copy)]
pub struct HighRiskRule {
    combinations: &'static [RiskCombination],
}

impl HighRiskRule {
    /// Creates the rule over another compiled combination set
    pub const fn with_combinations(combinations: &'static [RiskCombination]) -> Self {
        Self { combinations }
    }

    pub fn combinations(&self) -> &'static [RiskCombination] {
        self.combinations
    }

    /// Names of every combination the applicant presents
    pub fn matching_combinations(&self, applicant: &Applicant) -> Vec<&'static str> {
        self.combinations
            .iter()
            .filter(|combination| combination.matches(applicant))
            .map(|combination| combination.name)
            .collect()
    }

    fn has_high_risk_combination(&self, applicant: &Applicant) -> bool {
        self.combinations
            .iter()
            .any(|combination| combination.matches(applicant))
    }
}

impl Default for HighRiskRule {
    fn default() -> Self {
        Self::with_combinations(STANDARD_COMBINATIONS)
    }
}

impl EligibilityRule for HighRiskRule {
    fn name(&self) -> &'static str {
        "high_risk"
    }

    fn rejection_reason(&self, applicant: &Applicant) -> Option<&'static str> {
        if !self.has_high_risk_combination(applicant) {
            return None;
        }
        debug!(
            combinations = ?self.matching_combinations(applicant),
            "High-risk combination present"
        );
        Some(HIGH_RISK_COMBINATION_REASON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::disease::{ChronicDisease, ChronicDiseases};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn applicant(
        age: i32,
        is_smoker: bool,
        weight_kg: Decimal,
        diseases: impl Into<ChronicDiseases>,
    ) -> Applicant {
        Applicant::new(age, is_smoker, weight_kg, dec!(1.75), diseases).unwrap()
    }

    #[test]
    fn test_obesity_with_diabetes() {
        let rule = HighRiskRule::default();
        let applicant = applicant(30, false, dec!(100), ChronicDisease::Diabetes);

        assert_eq!(rule.rejection_reason(&applicant), Some(HIGH_RISK_COMBINATION_REASON));
        assert_eq!(rule.matching_combinations(&applicant), vec!["obesity_diabetes"]);
    }

    #[test]
    fn test_any_of_requires_an_aggravating_factor() {
        let rule = HighRiskRule::default();
        let both = ChronicDisease::Diabetes | ChronicDisease::Hypertension;

        assert!(rule.is_eligible(&applicant(30, false, dec!(70), both)));
        assert!(!rule.is_eligible(&applicant(80, false, dec!(70), both)));
        assert!(!rule.is_eligible(&applicant(30, true, dec!(70), both)));
        assert!(!rule.is_eligible(&applicant(
            30,
            false,
            dec!(70),
            both | ChronicDisease::Dyslipidemia
        )));
    }

    #[test]
    fn test_multiple_combinations_can_match() {
        let rule = HighRiskRule::default();
        let applicant = applicant(
            80,
            true,
            dec!(100),
            ChronicDisease::Diabetes | ChronicDisease::Hypertension,
        );

        assert_eq!(rule.matching_combinations(&applicant).len(), 4);
    }

    #[test]
    fn test_empty_combination_set_never_declines() {
        let rule = HighRiskRule::with_combinations(&[]);
        let applicant = applicant(30, false, dec!(100), ChronicDisease::Diabetes);

        assert!(rule.is_eligible(&applicant));
    }

    #[test]
    fn test_no_surcharge() {
        let rule = HighRiskRule::default();
        let applicant = applicant(80, true, dec!(50), ChronicDiseases::none());

        assert_eq!(rule.surcharge_factor(&applicant), dec!(0));
    }
}
