//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for eligibility results that give
//! more meaningful failure messages than standard assertions.

use domain_eligibility::EligibilityResult;
use rust_decimal::Decimal;

/// Asserts that a result is eligible with exactly the expected surcharge
///
/// # Panics
///
/// Panics if the result is not eligible or the surcharge differs
pub fn assert_eligible_with(result: &EligibilityResult, expected_surcharge: Decimal) {
    assert!(
        result.is_eligible(),
        "Expected eligible but got rejection: {:?}",
        result.rejection_reason()
    );
    assert_eq!(
        result.surcharge_factor(),
        expected_surcharge,
        "Surcharge mismatch: actual={}, expected={}",
        result.surcharge_factor(),
        expected_surcharge
    );
}

/// Asserts that a result is a rejection with exactly the expected reason
///
/// # Panics
///
/// Panics if the result is eligible or the reason differs
pub fn assert_rejected_with(result: &EligibilityResult, expected_reason: &str) {
    assert!(
        !result.is_eligible(),
        "Expected rejection '{}' but applicant was eligible with surcharge {}",
        expected_reason,
        result.surcharge_factor()
    );
    assert_eq!(result.rejection_reason(), Some(expected_reason));
}

/// Asserts that a result carries either a surcharge or a reason, never both
///
/// # Panics
///
/// Panics if the result mixes the two shapes
pub fn assert_shapes_exclusive(result: &EligibilityResult) {
    match result.rejection_reason() {
        Some(reason) => {
            assert!(!reason.trim().is_empty(), "Rejection reason is blank");
            assert!(
                result.surcharge_factor().is_zero(),
                "Rejected result carries surcharge {}",
                result.surcharge_factor()
            );
        }
        None => {
            assert!(result.is_eligible(), "Result without reason is not eligible");
            assert!(
                result.surcharge_factor() >= Decimal::ZERO,
                "Negative surcharge {}",
                result.surcharge_factor()
            );
        }
    }
}
