//! Pre-built Test Fixtures
//!
//! Provides ready-to-use applicants and the exact rejection messages for the
//! canonical eligibility scenarios.

use domain_eligibility::{Applicant, ChronicDisease};

use crate::builders::ApplicantBuilder;

/// Exact rejection messages produced by the standard rules
pub struct ReasonFixtures;

impl ReasonFixtures {
    pub const TOO_YOUNG: &'static str = "Applicant must be at least 18 years old";
    pub const TOO_OLD: &'static str = "Applicant must be under 100 years old";
    pub const SEVERE_DISEASE: &'static str = "Applicant has a terminal or severe chronic disease";
    pub const HIGH_RISK: &'static str =
        "Combination of risk factors creates an unacceptably high risk profile";
}

/// Fixture for applicant test data
pub struct ApplicantFixtures;

impl ApplicantFixtures {
    /// 30, non-smoker, 70 kg, 1.75 m, no conditions
    pub fn healthy_adult() -> Applicant {
        ApplicantBuilder::new().build()
    }

    /// 17, otherwise healthy
    pub fn minor() -> Applicant {
        ApplicantBuilder::new().age(17).build()
    }

    /// 100, otherwise healthy
    pub fn centenarian() -> Applicant {
        ApplicantBuilder::new().age(100).build()
    }

    /// 80, smoker, 50 kg: accepted with 0.35
    pub fn elderly_underweight_smoker() -> Applicant {
        ApplicantBuilder::new().elderly().smoker().underweight().build()
    }

    /// 30, 100 kg, diabetic: declined as high risk
    pub fn obese_diabetic() -> Applicant {
        ApplicantBuilder::new()
            .obese()
            .with_disease(ChronicDisease::Diabetes)
            .build()
    }

    /// 30, heart disease: declined as severe
    pub fn heart_patient() -> Applicant {
        ApplicantBuilder::new()
            .with_disease(ChronicDisease::HeartDisease)
            .build()
    }

    /// 30, diabetic and hypertensive: accepted with 0.35
    pub fn diabetic_hypertensive() -> Applicant {
        ApplicantBuilder::new()
            .with_diseases(ChronicDisease::Diabetes | ChronicDisease::Hypertension)
            .build()
    }
}
