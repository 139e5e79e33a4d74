//! Applicant risk profile
//!
//! An [`Applicant`] is an immutable snapshot of the attributes underwriting
//! looks at. Invariants are checked once, in [`Applicant::new`]; every
//! instance that exists is valid. Health predicates (BMI bands, elderliness,
//! per-condition flags) are derived on read and never stored.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::disease::{ChronicDisease, ChronicDiseases};
use crate::error::EligibilityError;

/// BMI below which an applicant is underweight
pub const UNDERWEIGHT_BMI_THRESHOLD: Decimal = dec!(18.5);

/// BMI from which an applicant is obese
pub const OBESITY_BMI_THRESHOLD: Decimal = dec!(30);

/// Age above which an applicant is elderly
pub const ELDERLY_AGE_THRESHOLD: u32 = 75;

/// An individual applying for life cover
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Applicant {
    age: u32,
    is_smoker: bool,
    weight_kg: Decimal,
    height_m: Decimal,
    diseases: ChronicDiseases,
}

impl Applicant {
    /// Creates a validated applicant
    ///
    /// # Arguments
    ///
    /// * `age` - Age in whole years, zero or more
    /// * `is_smoker` - Current smoking status
    /// * `weight_kg` - Body mass in kilograms, strictly positive
    /// * `height_m` - Height in meters, strictly positive
    /// * `diseases` - Declared chronic conditions (a single condition, a set, or none)
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant, checked in argument order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use domain_eligibility::{Applicant, ChronicDisease, ChronicDiseases};
    /// use rust_decimal_macros::dec;
    ///
    /// let healthy = Applicant::new(30, false, dec!(70), dec!(1.75), ChronicDiseases::none())?;
    /// let diabetic = Applicant::new(45, true, dec!(82), dec!(1.80), ChronicDisease::Diabetes)?;
    /// assert!(Applicant::new(-1, false, dec!(70), dec!(1.75), ChronicDiseases::none()).is_err());
    /// # Ok::<(), domain_eligibility::EligibilityError>(())
    /// ```
    pub fn new(
        age: i32,
        is_smoker: bool,
        weight_kg: Decimal,
        height_m: Decimal,
        diseases: impl Into<ChronicDiseases>,
    ) -> Result<Self, EligibilityError> {
        let age = u32::try_from(age).map_err(|_| EligibilityError::NegativeAge(age))?;

        if weight_kg <= Decimal::ZERO {
            return Err(EligibilityError::NonPositiveWeight(weight_kg));
        }

        if height_m <= Decimal::ZERO {
            return Err(EligibilityError::NonPositiveHeight(height_m));
        }

        Ok(Self {
            age,
            is_smoker,
            weight_kg,
            height_m,
            diseases: diseases.into(),
        })
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn is_smoker(&self) -> bool {
        self.is_smoker
    }

    pub fn weight_kg(&self) -> Decimal {
        self.weight_kg
    }

    pub fn height_m(&self) -> Decimal {
        self.height_m
    }

    pub fn diseases(&self) -> ChronicDiseases {
        self.diseases
    }

    /// Body-mass index: weight / height²
    ///
    /// `None` when the quotient is not representable: height² overflows,
    /// rounds to zero, or the division overflows.
    pub fn bmi(&self) -> Option<Decimal> {
        self.weight_kg.checked_div(self.height_squared()?)
    }

    /// BMI strictly below 18.5
    ///
    /// Compared as `weight < 18.5 × height²`. A product too large to
    /// represent counts as underweight.
    pub fn is_underweight(&self) -> bool {
        match self.weight_floor(UNDERWEIGHT_BMI_THRESHOLD) {
            Some(floor) => self.weight_kg < floor,
            None => true,
        }
    }

    /// BMI of 30 or more
    ///
    /// Compared as `weight ≥ 30 × height²`. A product too large to represent
    /// is never reached; a height² that rounds to zero always is.
    pub fn is_obese(&self) -> bool {
        match self.weight_floor(OBESITY_BMI_THRESHOLD) {
            Some(floor) => self.weight_kg >= floor,
            None => false,
        }
    }

    /// Older than 75
    pub fn is_elderly(&self) -> bool {
        self.age > ELDERLY_AGE_THRESHOLD
    }

    pub fn has_disease(&self, disease: ChronicDisease) -> bool {
        self.diseases.contains(disease)
    }

    pub fn has_diabetes(&self) -> bool {
        self.has_disease(ChronicDisease::Diabetes)
    }

    pub fn has_hypertension(&self) -> bool {
        self.has_disease(ChronicDisease::Hypertension)
    }

    pub fn has_dyslipidemia(&self) -> bool {
        self.has_disease(ChronicDisease::Dyslipidemia)
    }

    /// Returns true if any terminal or severe condition is declared
    pub fn has_severe_disease(&self) -> bool {
        self.diseases.intersects(ChronicDiseases::SEVERE)
    }

    fn height_squared(&self) -> Option<Decimal> {
        self.height_m.checked_mul(self.height_m)
    }

    /// Weight at which BMI reaches `threshold`; `None` on overflow
    fn weight_floor(&self, threshold: Decimal) -> Option<Decimal> {
        self.height_squared()?.checked_mul(threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn applicant(age: i32, weight_kg: Decimal, height_m: Decimal) -> Applicant {
        Applicant::new(age, false, weight_kg, height_m, ChronicDiseases::none()).unwrap()
    }

    #[test]
    fn test_bmi_calculation() {
        let bmi = applicant(30, dec!(70), dec!(1.75)).bmi().unwrap();
        assert!((bmi - dec!(22.86)).abs() < dec!(0.01)); // ~22.857
    }

    #[test]
    fn test_bmi_bands() {
        let underweight = applicant(30, dec!(50), dec!(1.75));
        assert!(underweight.is_underweight());
        assert!(!underweight.is_obese());

        let normal = applicant(30, dec!(70), dec!(1.75));
        assert!(!normal.is_underweight());
        assert!(!normal.is_obese());

        let obese = applicant(30, dec!(100), dec!(1.75));
        assert!(obese.is_obese());
        assert!(!obese.is_underweight());
    }

    #[test]
    fn test_obesity_threshold_is_inclusive() {
        // 30 kg / 1 m² is exactly 30
        assert!(applicant(30, dec!(30), dec!(1)).is_obese());
        assert!(!applicant(30, dec!(18.5), dec!(1)).is_underweight());
    }

    #[test]
    fn test_elderly_threshold() {
        assert!(!applicant(75, dec!(70), dec!(1.75)).is_elderly());
        assert!(applicant(76, dec!(70), dec!(1.75)).is_elderly());
    }

    #[test]
    fn test_zero_age_is_valid() {
        assert_eq!(applicant(0, dec!(3.5), dec!(0.5)).age(), 0);
    }

    #[test]
    fn test_rejects_invalid_attributes() {
        let none = ChronicDiseases::none();
        assert_eq!(
            Applicant::new(-1, false, dec!(70), dec!(1.75), none),
            Err(EligibilityError::NegativeAge(-1))
        );
        assert_eq!(
            Applicant::new(30, false, dec!(0), dec!(1.75), none),
            Err(EligibilityError::NonPositiveWeight(dec!(0)))
        );
        assert_eq!(
            Applicant::new(30, false, dec!(70), dec!(-1.75), none),
            Err(EligibilityError::NonPositiveHeight(dec!(-1.75)))
        );
    }

    #[test]
    fn test_disease_predicates() {
        let applicant = Applicant::new(
            40,
            false,
            dec!(70),
            dec!(1.75),
            ChronicDisease::Diabetes | ChronicDisease::Dyslipidemia,
        )
        .unwrap();

        assert!(applicant.has_diabetes());
        assert!(!applicant.has_hypertension());
        assert!(applicant.has_dyslipidemia());
        assert!(!applicant.has_severe_disease());
    }

    #[test]
    fn test_vanishing_height() {
        // 1e-15 squared rounds to zero at 28 decimal places
        let tiny = applicant(30, dec!(70), dec!(0.000000000000001));
        assert_eq!(tiny.bmi(), None);
        assert!(tiny.is_obese());
        assert!(!tiny.is_underweight());
    }

    #[test]
    fn test_overflowing_weight() {
        let heavy = applicant(30, Decimal::MAX, dec!(0.5));
        assert_eq!(heavy.bmi(), None);
        assert!(heavy.is_obese());
        assert!(!heavy.is_underweight());
    }

    #[test]
    fn test_overflowing_height() {
        let tall = applicant(30, dec!(70), Decimal::MAX);
        assert_eq!(tall.bmi(), None);
        assert!(tall.is_underweight());
        assert!(!tall.is_obese());
    }

    #[test]
    fn test_bands_match_bmi_at_boundaries() {
        // 1.75² = 3.0625, so 18.5 × 3.0625 = 56.65625 and 30 × 3.0625 = 91.875
        assert!(applicant(30, dec!(56.65624), dec!(1.75)).is_underweight());
        assert!(!applicant(30, dec!(56.65625), dec!(1.75)).is_underweight());
        assert!(!applicant(30, dec!(91.87499), dec!(1.75)).is_obese());
        assert!(applicant(30, dec!(91.875), dec!(1.75)).is_obese());
    }
}
