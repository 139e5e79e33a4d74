//! Life-Insurance Eligibility Domain
//!
//! This crate decides whether an applicant qualifies for life cover and, if
//! so, which surcharge their risk profile warrants. It is a pure decision
//! function: no I/O, no shared mutable state, the same answer for the same
//! applicant every time.
//!
//! # Architecture
//!
//! - **Value Objects**: Applicant, ChronicDiseases, EligibilityResult
//! - **Rules**: one per risk dimension, behind the `EligibilityRule` trait
//! - **Domain Service**: `EligibilityService` combines the rules
//!
//! # Decision flow
//!
//! ```text
//! Applicant -> rejection scan (first reason wins) -> NotEligible(reason)
//!                    \-> surcharge sum over all rules -> Eligible(factor)
//! ```
//!
//! # Example
//!
//! ```rust
//! use domain_eligibility::{Applicant, ChronicDisease, EligibilityService};
//! use rust_decimal_macros::dec;
//!
//! let service = EligibilityService::standard();
//! let applicant = Applicant::new(
//!     30,
//!     false,
//!     dec!(70),
//!     dec!(1.75),
//!     ChronicDisease::Diabetes | ChronicDisease::Hypertension,
//! )?;
//!
//! let result = service.evaluate(&applicant)?;
//! assert_eq!(result.surcharge_factor(), dec!(0.35));
//! # Ok::<(), domain_eligibility::EligibilityError>(())
//! ```

pub mod applicant;
pub mod disease;
pub mod error;
pub mod result;
pub mod rules;
pub mod services;

pub use applicant::Applicant;
pub use disease::{ChronicDisease, ChronicDiseases};
pub use error::EligibilityError;
pub use result::{EligibilityResult, RejectionReason, SurchargeFactor};
pub use rules::{
    standard_rules, AgeRule, BmiRule, ChronicDiseaseRule, EligibilityRule, HighRiskRule,
    RiskCombination, RiskFactor, SmokerRule,
};
pub use services::{Assessment, EligibilityService, SurchargeContribution};
