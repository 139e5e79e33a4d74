//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random applicants that
//! always satisfy the construction invariants.

use domain_eligibility::{Applicant, ChronicDisease, ChronicDiseases};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for generating a single chronic condition
pub fn disease_strategy() -> impl Strategy<Value = ChronicDisease> {
    proptest::sample::select(ChronicDisease::ALL.to_vec())
}

/// Strategy for generating any combination of conditions, including none
pub fn diseases_strategy() -> impl Strategy<Value = ChronicDiseases> {
    proptest::collection::vec(disease_strategy(), 0..=6)
        .prop_map(|diseases| diseases.into_iter().collect())
}

/// Strategy for generating combinations of manageable conditions only
pub fn manageable_diseases_strategy() -> impl Strategy<Value = ChronicDiseases> {
    diseases_strategy().prop_map(|diseases| {
        diseases
            .iter()
            .filter(|disease| !disease.is_severe())
            .collect()
    })
}

/// Strategy for generating valid ages (0 to 120)
pub fn age_strategy() -> impl Strategy<Value = i32> {
    0i32..=120i32
}

/// Strategy for generating ages the age rule accepts (18 to 99)
pub fn insurable_age_strategy() -> impl Strategy<Value = i32> {
    18i32..100i32
}

/// Strategy for generating valid weights (30.0 to 200.0 kg, one decimal)
pub fn weight_strategy() -> impl Strategy<Value = Decimal> {
    (300i64..=2000i64).prop_map(|n| Decimal::new(n, 1))
}

/// Strategy for generating valid heights (1.40 to 2.20 m, two decimals)
pub fn height_strategy() -> impl Strategy<Value = Decimal> {
    (140i64..=220i64).prop_map(|n| Decimal::new(n, 2))
}

/// Strategy for generating any positive decimal, from 1e-28 up to `Decimal::MAX`
pub fn positive_decimal_strategy() -> impl Strategy<Value = Decimal> {
    prop_oneof![
        (1i128..(1i128 << 96), 0u32..=28u32)
            .prop_map(|(mantissa, scale)| Decimal::from_i128_with_scale(mantissa, scale)),
        Just(Decimal::MAX),
        Just(Decimal::new(1, 28)),
    ]
}

/// Strategy for generating valid applicants with unconstrained measurements
pub fn extreme_applicant_strategy() -> impl Strategy<Value = Applicant> {
    (
        age_strategy(),
        any::<bool>(),
        positive_decimal_strategy(),
        positive_decimal_strategy(),
        diseases_strategy(),
    )
        .prop_map(|(age, is_smoker, weight_kg, height_m, diseases)| {
            Applicant::new(age, is_smoker, weight_kg, height_m, diseases)
                .expect("Strategy produces valid applicants")
        })
}

/// Strategy for generating any valid applicant
pub fn applicant_strategy() -> impl Strategy<Value = Applicant> {
    (
        age_strategy(),
        any::<bool>(),
        weight_strategy(),
        height_strategy(),
        diseases_strategy(),
    )
        .prop_map(|(age, is_smoker, weight_kg, height_m, diseases)| {
            Applicant::new(age, is_smoker, weight_kg, height_m, diseases)
                .expect("Strategy produces valid applicants")
        })
}

/// Strategy for generating applicants with an insurable age and no severe condition
pub fn insurable_applicant_strategy() -> impl Strategy<Value = Applicant> {
    (
        insurable_age_strategy(),
        any::<bool>(),
        weight_strategy(),
        height_strategy(),
        manageable_diseases_strategy(),
    )
        .prop_map(|(age, is_smoker, weight_kg, height_m, diseases)| {
            Applicant::new(age, is_smoker, weight_kg, height_m, diseases)
                .expect("Strategy produces valid applicants")
        })
}
