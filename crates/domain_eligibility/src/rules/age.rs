//! Age rule: entry age limits and the elderly loading

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::applicant::Applicant;
use crate::rules::EligibilityRule;

/// Youngest accepted age
pub const MINIMUM_AGE: u32 = 18;

/// First declined age at the upper end
pub const MAXIMUM_AGE: u32 = 100;

const ELDERLY_SURCHARGE: Decimal = dec!(0.15);

pub const BELOW_MINIMUM_AGE_REASON: &str = "Applicant must be at least 18 years old";
pub const ABOVE_MAXIMUM_AGE_REASON: &str = "Applicant must be under 100 years old";

/// Declines applicants outside `[18, 100)`; loads applicants over 75 by 15%
#[derive(Debug, Clone, Copy, Default)]
pub struct AgeRule;

impl EligibilityRule for AgeRule {
    fn name(&self) -> &'static str {
        "age"
    }

    fn rejection_reason(&self, applicant: &Applicant) -> Option<&'static str> {
        if applicant.age() < MINIMUM_AGE {
            Some(BELOW_MINIMUM_AGE_REASON)
        } else if applicant.age() >= MAXIMUM_AGE {
            Some(ABOVE_MAXIMUM_AGE_REASON)
        } else {
            None
        }
    }

    fn surcharge_factor(&self, applicant: &Applicant) -> Decimal {
        if applicant.is_elderly() {
            ELDERLY_SURCHARGE
        } else {
            Decimal::ZERO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::disease::ChronicDiseases;

    fn aged(age: i32) -> Applicant {
        Applicant::new(age, false, dec!(70), dec!(1.75), ChronicDiseases::none()).unwrap()
    }

    #[test]
    fn test_age_limits() {
        assert_eq!(AgeRule.rejection_reason(&aged(0)), Some(BELOW_MINIMUM_AGE_REASON));
        assert_eq!(AgeRule.rejection_reason(&aged(17)), Some(BELOW_MINIMUM_AGE_REASON));
        assert_eq!(AgeRule.rejection_reason(&aged(18)), None);
        assert_eq!(AgeRule.rejection_reason(&aged(99)), None);
        assert_eq!(AgeRule.rejection_reason(&aged(100)), Some(ABOVE_MAXIMUM_AGE_REASON));
        assert!(!AgeRule.is_eligible(&aged(120)));
    }

    #[test]
    fn test_elderly_surcharge() {
        assert_eq!(AgeRule.surcharge_factor(&aged(75)), dec!(0));
        assert_eq!(AgeRule.surcharge_factor(&aged(76)), dec!(0.15));
    }
}
