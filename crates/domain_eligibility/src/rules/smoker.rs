//! Smoker rule: flat loading, never declines

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::applicant::Applicant;
use crate::rules::EligibilityRule;

const SMOKER_SURCHARGE: Decimal = dec!(0.10);

#[derive(Debug, Clone, Copy, Default)]
pub struct SmokerRule;

impl EligibilityRule for SmokerRule {
    fn name(&self) -> &'static str {
        "smoker"
    }

    fn surcharge_factor(&self, applicant: &Applicant) -> Decimal {
        if applicant.is_smoker() {
            SMOKER_SURCHARGE
        } else {
            Decimal::ZERO
        }
    }
}
