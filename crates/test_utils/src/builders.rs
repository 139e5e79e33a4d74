//! Test Data Builders
//!
//! Provides a builder for applicants with sensible defaults. Tests specify
//! only the attributes relevant to them; everything else describes a healthy
//! 30-year-old non-smoker of normal weight (70 kg, 1.75 m, BMI ~22.9).

use domain_eligibility::{Applicant, ChronicDisease, ChronicDiseases, EligibilityError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Builder for constructing test applicants
#[derive(Debug, Clone)]
pub struct ApplicantBuilder {
    age: i32,
    is_smoker: bool,
    weight_kg: Decimal,
    height_m: Decimal,
    diseases: ChronicDiseases,
}

impl Default for ApplicantBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ApplicantBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            age: 30,
            is_smoker: false,
            weight_kg: dec!(70),
            height_m: dec!(1.75),
            diseases: ChronicDiseases::none(),
        }
    }

    /// Sets the age
    pub fn age(mut self, age: i32) -> Self {
        self.age = age;
        self
    }

    /// Marks the applicant as a smoker
    pub fn smoker(mut self) -> Self {
        self.is_smoker = true;
        self
    }

    /// Sets the smoking status
    pub fn with_smoker(mut self, is_smoker: bool) -> Self {
        self.is_smoker = is_smoker;
        self
    }

    /// Sets the weight in kilograms
    pub fn weight_kg(mut self, weight_kg: Decimal) -> Self {
        self.weight_kg = weight_kg;
        self
    }

    /// Sets the height in meters
    pub fn height_m(mut self, height_m: Decimal) -> Self {
        self.height_m = height_m;
        self
    }

    /// Adds a chronic condition
    pub fn with_disease(mut self, disease: ChronicDisease) -> Self {
        self.diseases.insert(disease);
        self
    }

    /// Replaces the chronic conditions
    pub fn with_diseases(mut self, diseases: impl Into<ChronicDiseases>) -> Self {
        self.diseases = diseases.into();
        self
    }

    /// 50 kg at 1.75 m (BMI ~16.3)
    pub fn underweight(self) -> Self {
        self.weight_kg(dec!(50)).height_m(dec!(1.75))
    }

    /// 100 kg at 1.75 m (BMI ~32.7)
    pub fn obese(self) -> Self {
        self.weight_kg(dec!(100)).height_m(dec!(1.75))
    }

    /// Age 80
    pub fn elderly(self) -> Self {
        self.age(80)
    }

    /// Builds the applicant, surfacing construction errors
    pub fn try_build(self) -> Result<Applicant, EligibilityError> {
        Applicant::new(
            self.age,
            self.is_smoker,
            self.weight_kg,
            self.height_m,
            self.diseases,
        )
    }

    /// Builds the applicant
    ///
    /// # Panics
    ///
    /// Panics if the configured attributes are invalid
    pub fn build(self) -> Applicant {
        self.try_build().expect("Invalid test applicant")
    }
}
