//! Chronic disease rule
//!
//! Severe conditions (heart disease, cancer, kidney disease) decline the
//! applicant outright. The manageable conditions each add their own loading;
//! loadings for co-occurring conditions are summed.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::applicant::Applicant;
use crate::disease::ChronicDisease;
use crate::rules::EligibilityRule;

pub const SEVERE_DISEASE_REASON: &str = "Applicant has a terminal or severe chronic disease";

/// Returns the loading for a manageable condition
fn loading_for(disease: ChronicDisease) -> Decimal {
    match disease {
        ChronicDisease::Diabetes => dec!(0.20),
        ChronicDisease::Hypertension => dec!(0.15),
        ChronicDisease::Dyslipidemia => dec!(0.10),
        // Severe conditions decline before any loading is computed
        ChronicDisease::HeartDisease | ChronicDisease::Cancer | ChronicDisease::KidneyDisease => {
            Decimal::ZERO
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ChronicDiseaseRule;

impl EligibilityRule for ChronicDiseaseRule {
    fn name(&self) -> &'static str {
        "chronic_disease"
    }

    fn rejection_reason(&self, applicant: &Applicant) -> Option<&'static str> {
        applicant
            .has_severe_disease()
            .then_some(SEVERE_DISEASE_REASON)
    }

    fn surcharge_factor(&self, applicant: &Applicant) -> Decimal {
        applicant.diseases().iter().map(loading_for).sum()
    }
}
