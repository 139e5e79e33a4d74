//! Eligibility outcome
//!
//! An [`EligibilityResult`] is either eligible with a surcharge factor, or not
//! eligible with a reason. Both payloads are validated newtypes, so a result
//! carrying a negative surcharge or a blank reason cannot be built.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use crate::error::EligibilityError;

/// A non-negative fractional price loading (0.25 = +25%)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct SurchargeFactor(Decimal);

impl SurchargeFactor {
    /// No loading
    pub const ZERO: SurchargeFactor = SurchargeFactor(Decimal::ZERO);

    /// Creates a surcharge factor
    ///
    /// # Errors
    ///
    /// Returns `NegativeSurcharge` if `value` is below zero
    pub fn new(value: Decimal) -> Result<Self, EligibilityError> {
        if value < Decimal::ZERO {
            return Err(EligibilityError::NegativeSurcharge(value));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns the loading as a percentage (0.35 -> 35)
    pub fn as_percent(&self) -> Decimal {
        self.0 * dec!(100)
    }

    /// Applies the loading to a base premium: `base * (1 + factor)`
    ///
    /// `None` if the loaded premium overflows.
    pub fn apply_to(&self, base_premium: Decimal) -> Option<Decimal> {
        base_premium.checked_mul(Decimal::ONE.checked_add(self.0)?)
    }
}

impl Add for SurchargeFactor {
    type Output = SurchargeFactor;

    fn add(self, rhs: SurchargeFactor) -> SurchargeFactor {
        SurchargeFactor(self.0 + rhs.0)
    }
}

impl Sum for SurchargeFactor {
    fn sum<I: Iterator<Item = SurchargeFactor>>(iter: I) -> Self {
        iter.fold(SurchargeFactor::ZERO, Add::add)
    }
}

impl TryFrom<Decimal> for SurchargeFactor {
    type Error = EligibilityError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        SurchargeFactor::new(value)
    }
}

impl fmt::Display for SurchargeFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Why an applicant was declined; never empty or blank
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RejectionReason(String);

impl RejectionReason {
    /// Creates a rejection reason
    ///
    /// # Errors
    ///
    /// Returns `MissingRejectionReason` if `reason` is empty or whitespace only
    pub fn new(reason: impl Into<String>) -> Result<Self, EligibilityError> {
        let reason = reason.into();
        if reason.trim().is_empty() {
            return Err(EligibilityError::MissingRejectionReason);
        }
        Ok(Self(reason))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Final eligibility decision for one applicant
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum EligibilityResult {
    /// Accepted, with the cumulative surcharge of every rule
    Eligible { surcharge_factor: SurchargeFactor },
    /// Declined by the first rejecting rule
    NotEligible { rejection_reason: RejectionReason },
}

impl EligibilityResult {
    /// Creates an eligible result
    ///
    /// # Errors
    ///
    /// Returns `NegativeSurcharge` if `surcharge_factor` is below zero
    pub fn eligible(surcharge_factor: Decimal) -> Result<Self, EligibilityError> {
        Ok(EligibilityResult::Eligible {
            surcharge_factor: SurchargeFactor::new(surcharge_factor)?,
        })
    }

    /// Creates a not-eligible result
    ///
    /// # Errors
    ///
    /// Returns `MissingRejectionReason` if `reason` is empty or blank
    pub fn not_eligible(reason: impl Into<String>) -> Result<Self, EligibilityError> {
        Ok(EligibilityResult::NotEligible {
            rejection_reason: RejectionReason::new(reason)?,
        })
    }

    pub fn is_eligible(&self) -> bool {
        matches!(self, EligibilityResult::Eligible { .. })
    }

    /// Surcharge factor; zero for a not-eligible result
    pub fn surcharge_factor(&self) -> Decimal {
        match self {
            EligibilityResult::Eligible { surcharge_factor } => surcharge_factor.value(),
            EligibilityResult::NotEligible { .. } => Decimal::ZERO,
        }
    }

    /// Rejection reason; `None` for an eligible result
    pub fn rejection_reason(&self) -> Option<&str> {
        match self {
            EligibilityResult::Eligible { .. } => None,
            EligibilityResult::NotEligible { rejection_reason } => Some(rejection_reason.as_str()),
        }
    }

    /// Base premium with the surcharge applied
    ///
    /// `None` for a not-eligible result or when the loaded premium overflows.
    pub fn loaded_premium(&self, base_premium: Decimal) -> Option<Decimal> {
        match self {
            EligibilityResult::Eligible { surcharge_factor } => {
                surcharge_factor.apply_to(base_premium)
            }
            EligibilityResult::NotEligible { .. } => None,
        }
    }
}

impl fmt::Display for EligibilityResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EligibilityResult::Eligible { surcharge_factor } => {
                write!(f, "Eligible (surcharge {}%)", surcharge_factor.as_percent().normalize())
            }
            EligibilityResult::NotEligible { rejection_reason } => {
                write!(f, "Not eligible: {}", rejection_reason)
            }
        }
    }
}
