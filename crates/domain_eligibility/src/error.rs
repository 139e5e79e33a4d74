//! Eligibility domain errors
//!
//! Both kinds of failure are construction-time precondition violations.
//! Evaluating a valid applicant against well-behaved rules never fails.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur in the eligibility domain
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EligibilityError {
    /// Applicant age below zero
    #[error("Age cannot be negative (got {0})")]
    NegativeAge(i32),

    /// Applicant weight of zero or less
    #[error("Weight must be positive (got {0} kg)")]
    NonPositiveWeight(Decimal),

    /// Applicant height of zero or less
    #[error("Height must be positive (got {0} m)")]
    NonPositiveHeight(Decimal),

    /// Eligible result built with a negative surcharge
    #[error("Surcharge factor cannot be negative (got {0})")]
    NegativeSurcharge(Decimal),

    /// Not-eligible result built without a usable reason
    #[error("Rejection reason is required for non-eligible applicants")]
    MissingRejectionReason,
}

impl EligibilityError {
    /// Returns the name of the argument that failed validation
    pub fn field(&self) -> &'static str {
        match self {
            EligibilityError::NegativeAge(_) => "age",
            EligibilityError::NonPositiveWeight(_) => "weight_kg",
            EligibilityError::NonPositiveHeight(_) => "height_m",
            EligibilityError::NegativeSurcharge(_) => "surcharge_factor",
            EligibilityError::MissingRejectionReason => "rejection_reason",
        }
    }

    /// Returns true if the error comes from applicant construction
    pub fn is_applicant_error(&self) -> bool {
        matches!(
            self,
            EligibilityError::NegativeAge(_)
                | EligibilityError::NonPositiveWeight(_)
                | EligibilityError::NonPositiveHeight(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_field_names() {
        assert_eq!(EligibilityError::NegativeAge(-1).field(), "age");
        assert_eq!(EligibilityError::NonPositiveWeight(dec!(0)).field(), "weight_kg");
        assert_eq!(EligibilityError::NonPositiveHeight(dec!(-1.75)).field(), "height_m");
        assert_eq!(EligibilityError::NegativeSurcharge(dec!(-0.1)).field(), "surcharge_factor");
        assert_eq!(EligibilityError::MissingRejectionReason.field(), "rejection_reason");
    }

    #[test]
    fn test_error_kind() {
        assert!(EligibilityError::NegativeAge(-1).is_applicant_error());
        assert!(!EligibilityError::MissingRejectionReason.is_applicant_error());
    }

    #[test]
    fn test_display() {
        let error = EligibilityError::NonPositiveWeight(dec!(-70));
        assert_eq!(error.to_string(), "Weight must be positive (got -70 kg)");
    }
}
