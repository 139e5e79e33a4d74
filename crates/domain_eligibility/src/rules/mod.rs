//! Eligibility rules
//!
//! Each rule covers one risk dimension and answers three questions about an
//! applicant: is the applicant acceptable under this dimension, why not, and
//! what surcharge does the dimension add. Rules hold no mutable state.
//!
//! # Standard rule order
//!
//! ```text
//! Age -> ChronicDisease -> Smoker -> Bmi -> HighRisk
//! ```
//!
//! The order is part of the public contract: when several rules would
//! decline the same applicant, the reason of the first one in this order is
//! the one reported.

use rust_decimal::Decimal;
use std::fmt::Debug;

use crate::applicant::Applicant;

pub mod age;
pub mod bmi;
pub mod chronic_disease;
pub mod high_risk;
pub mod smoker;

pub use age::AgeRule;
pub use bmi::BmiRule;
pub use chronic_disease::ChronicDiseaseRule;
pub use high_risk::{HighRiskRule, RiskCombination, RiskFactor, STANDARD_COMBINATIONS};
pub use smoker::SmokerRule;

/// A single, self-contained eligibility rule
///
/// Every method has a permissive default, so a rule only overrides what it
/// actually constrains. `rejection_reason` is the single source of truth for
/// a decline: the default `is_eligible` is derived from it, and the
/// coordinator only ever reads the reason.
pub trait EligibilityRule: Send + Sync + Debug {
    /// Stable identifier used in logs and surcharge breakdowns
    fn name(&self) -> &'static str;

    /// Reason this rule declines the applicant, or `None` if it accepts
    fn rejection_reason(&self, _applicant: &Applicant) -> Option<&'static str> {
        None
    }

    /// Whether the applicant is acceptable under this rule
    fn is_eligible(&self, applicant: &Applicant) -> bool {
        self.rejection_reason(applicant).is_none()
    }

    /// Surcharge added by this rule for an applicant it accepts
    fn surcharge_factor(&self, _applicant: &Applicant) -> Decimal {
        Decimal::ZERO
    }
}

/// Builds the standard rule list, in evaluation order
pub fn standard_rules() -> Vec<Box<dyn EligibilityRule>> {
    vec![
        Box::new(AgeRule),
        Box::new(ChronicDiseaseRule),
        Box::new(SmokerRule),
        Box::new(BmiRule),
        Box::new(HighRiskRule::default()),
    ]
}
