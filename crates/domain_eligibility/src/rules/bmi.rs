//! BMI rule: underweight or obese loading, never declines

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::applicant::Applicant;
use crate::rules::EligibilityRule;

const UNDERWEIGHT_SURCHARGE: Decimal = dec!(0.10);
const OBESITY_SURCHARGE: Decimal = dec!(0.15);

#[derive(Debug, Clone, Copy, Default)]
pub struct BmiRule;

impl EligibilityRule for BmiRule {
    fn name(&self) -> &'static str {
        "bmi"
    }

    fn surcharge_factor(&self, applicant: &Applicant) -> Decimal {
        // Bands are exclusive; underweight is checked first
        if applicant.is_underweight() {
            UNDERWEIGHT_SURCHARGE
        } else if applicant.is_obese() {
            OBESITY_SURCHARGE
        } else {
            Decimal::ZERO
        }
    }
}
