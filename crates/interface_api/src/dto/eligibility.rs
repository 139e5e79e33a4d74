//! Eligibility DTOs

use chrono::{DateTime, Utc};
use domain_eligibility::{Applicant, Assessment, ChronicDiseases, EligibilityError};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct EligibilityRequest {
    pub age: i32,
    #[serde(default)]
    pub is_smoker: bool,
    pub weight_kg: Decimal,
    pub height_m: Decimal,
    #[serde(default)]
    pub diseases: ChronicDiseases,
    /// Optional base premium to apply the surcharge to
    pub base_premium: Option<Decimal>,
}

impl EligibilityRequest {
    /// Converts the raw request into a validated applicant
    pub fn to_applicant(&self) -> Result<Applicant, EligibilityError> {
        Applicant::new(
            self.age,
            self.is_smoker,
            self.weight_kg,
            self.height_m,
            self.diseases,
        )
    }
}

#[derive(Debug, Serialize)]
pub struct SurchargeLine {
    pub rule: String,
    pub factor: Decimal,
}

/// Decision record returned for one evaluation
#[derive(Debug, Serialize)]
pub struct EligibilityResponse {
    pub decision_id: Uuid,
    pub evaluated_at: DateTime<Utc>,
    pub eligible: bool,
    pub surcharge_factor: Decimal,
    pub rejection_reason: Option<String>,
    pub rejected_by: Option<String>,
    pub surcharges: Vec<SurchargeLine>,
    /// Omitted when the measurements put BMI outside decimal range
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bmi: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loaded_premium: Option<Decimal>,
}

impl EligibilityResponse {
    /// Builds the decision record for an assessed applicant
    pub fn from_assessment(
        assessment: Assessment,
        applicant: &Applicant,
        base_premium: Option<Decimal>,
    ) -> Self {
        let result = &assessment.result;
        let loaded_premium = base_premium
            .and_then(|base| result.loaded_premium(base))
            .map(|premium| premium.round_dp(2));

        Self {
            decision_id: Uuid::new_v4(),
            evaluated_at: Utc::now(),
            eligible: result.is_eligible(),
            surcharge_factor: result.surcharge_factor(),
            rejection_reason: result.rejection_reason().map(str::to_string),
            rejected_by: assessment.rejected_by.map(str::to_string),
            surcharges: assessment
                .contributions
                .iter()
                .map(|c| SurchargeLine {
                    rule: c.rule.to_string(),
                    factor: c.factor,
                })
                .collect(),
            bmi: applicant.bmi().map(|bmi| bmi.round_dp(2)),
            loaded_premium,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RulesResponse {
    pub rules: Vec<String>,
}
