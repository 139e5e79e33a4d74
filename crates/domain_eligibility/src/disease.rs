//! Chronic conditions declared by an applicant
//!
//! Conditions are independent of each other; an applicant may declare any
//! combination of them, including none. [`ChronicDiseases`] stores the
//! combination as a compact bit-set with constant-time membership tests.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// A named chronic condition relevant to underwriting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChronicDisease {
    Diabetes,
    Hypertension,
    Dyslipidemia,
    HeartDisease,
    Cancer,
    KidneyDisease,
}

impl ChronicDisease {
    /// Every condition, in declaration order
    pub const ALL: [ChronicDisease; 6] = [
        ChronicDisease::Diabetes,
        ChronicDisease::Hypertension,
        ChronicDisease::Dyslipidemia,
        ChronicDisease::HeartDisease,
        ChronicDisease::Cancer,
        ChronicDisease::KidneyDisease,
    ];

    const fn bit(self) -> u8 {
        match self {
            ChronicDisease::Diabetes => 1,
            ChronicDisease::Hypertension => 1 << 1,
            ChronicDisease::Dyslipidemia => 1 << 2,
            ChronicDisease::HeartDisease => 1 << 3,
            ChronicDisease::Cancer => 1 << 4,
            ChronicDisease::KidneyDisease => 1 << 5,
        }
    }

    /// Returns true for conditions that exclude an applicant outright
    pub fn is_severe(self) -> bool {
        ChronicDiseases::SEVERE.contains(self)
    }

    /// Returns the snake_case code used on the wire
    pub fn code(self) -> &'static str {
        match self {
            ChronicDisease::Diabetes => "diabetes",
            ChronicDisease::Hypertension => "hypertension",
            ChronicDisease::Dyslipidemia => "dyslipidemia",
            ChronicDisease::HeartDisease => "heart_disease",
            ChronicDisease::Cancer => "cancer",
            ChronicDisease::KidneyDisease => "kidney_disease",
        }
    }
}

impl fmt::Display for ChronicDisease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A set of chronic conditions
///
/// Serializes as a JSON array of condition codes, e.g.
/// `["diabetes", "hypertension"]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<ChronicDisease>", into = "Vec<ChronicDisease>")]
pub struct ChronicDiseases(u8);

impl ChronicDiseases {
    /// Terminal or severe conditions: heart disease, cancer, kidney disease
    pub const SEVERE: ChronicDiseases = ChronicDiseases(
        ChronicDisease::HeartDisease.bit()
            | ChronicDisease::Cancer.bit()
            | ChronicDisease::KidneyDisease.bit(),
    );

    /// The empty set
    pub const fn none() -> Self {
        Self(0)
    }

    /// Set containing a single condition
    pub const fn of(disease: ChronicDisease) -> Self {
        Self(disease.bit())
    }

    /// Returns a copy of the set with `disease` added
    pub const fn with(self, disease: ChronicDisease) -> Self {
        Self(self.0 | disease.bit())
    }

    /// Adds a condition to the set
    pub fn insert(&mut self, disease: ChronicDisease) {
        self.0 |= disease.bit();
    }

    pub fn contains(&self, disease: ChronicDisease) -> bool {
        self.0 & disease.bit() != 0
    }

    /// Returns true if the two sets share at least one condition
    pub fn intersects(&self, other: ChronicDiseases) -> bool {
        self.0 & other.0 != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterates the conditions in declaration order
    pub fn iter(&self) -> impl Iterator<Item = ChronicDisease> + '_ {
        ChronicDisease::ALL
            .into_iter()
            .filter(move |disease| self.contains(*disease))
    }
}

impl From<ChronicDisease> for ChronicDiseases {
    fn from(disease: ChronicDisease) -> Self {
        Self::of(disease)
    }
}

impl BitOr for ChronicDisease {
    type Output = ChronicDiseases;

    fn bitor(self, rhs: ChronicDisease) -> ChronicDiseases {
        ChronicDiseases::of(self).with(rhs)
    }
}

impl BitOr<ChronicDisease> for ChronicDiseases {
    type Output = ChronicDiseases;

    fn bitor(self, rhs: ChronicDisease) -> ChronicDiseases {
        self.with(rhs)
    }
}

impl BitOr for ChronicDiseases {
    type Output = ChronicDiseases;

    fn bitor(self, rhs: ChronicDiseases) -> ChronicDiseases {
        ChronicDiseases(self.0 | rhs.0)
    }
}

impl BitOrAssign<ChronicDisease> for ChronicDiseases {
    fn bitor_assign(&mut self, rhs: ChronicDisease) {
        self.insert(rhs);
    }
}

impl FromIterator<ChronicDisease> for ChronicDiseases {
    fn from_iter<I: IntoIterator<Item = ChronicDisease>>(iter: I) -> Self {
        iter.into_iter()
            .fold(ChronicDiseases::none(), ChronicDiseases::with)
    }
}

impl From<Vec<ChronicDisease>> for ChronicDiseases {
    fn from(diseases: Vec<ChronicDisease>) -> Self {
        diseases.into_iter().collect()
    }
}

impl From<ChronicDiseases> for Vec<ChronicDisease> {
    fn from(diseases: ChronicDiseases) -> Self {
        diseases.iter().collect()
    }
}

impl fmt::Display for ChronicDiseases {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        let codes: Vec<&str> = self.iter().map(ChronicDisease::code).collect();
        f.write_str(&codes.join("|"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_set() {
        let set = ChronicDiseases::none();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert!(ChronicDisease::ALL.iter().all(|d| !set.contains(*d)));
    }

    #[test]
    fn test_combination_membership() {
        let set = ChronicDisease::Diabetes | ChronicDisease::Hypertension;
        assert!(set.contains(ChronicDisease::Diabetes));
        assert!(set.contains(ChronicDisease::Hypertension));
        assert!(!set.contains(ChronicDisease::Dyslipidemia));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut set = ChronicDiseases::of(ChronicDisease::Cancer);
        set.insert(ChronicDisease::Cancer);
        set |= ChronicDisease::Cancer;
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_severe_conditions() {
        assert!(ChronicDisease::HeartDisease.is_severe());
        assert!(ChronicDisease::Cancer.is_severe());
        assert!(ChronicDisease::KidneyDisease.is_severe());
        assert!(!ChronicDisease::Diabetes.is_severe());
        assert!(!ChronicDisease::Hypertension.is_severe());
        assert!(!ChronicDisease::Dyslipidemia.is_severe());
    }

    #[test]
    fn test_iteration_follows_declaration_order() {
        let set: ChronicDiseases = [ChronicDisease::KidneyDisease, ChronicDisease::Diabetes]
            .into_iter()
            .collect();
        let listed: Vec<ChronicDisease> = set.iter().collect();
        assert_eq!(listed, vec![ChronicDisease::Diabetes, ChronicDisease::KidneyDisease]);
    }

    #[test]
    fn test_serde_as_code_list() {
        let set = ChronicDisease::Diabetes | ChronicDisease::HeartDisease;
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["diabetes","heart_disease"]"#);

        let parsed: ChronicDiseases = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, set);
    }

    #[test]
    fn test_display() {
        assert_eq!(ChronicDiseases::none().to_string(), "none");
        let set = ChronicDisease::Hypertension | ChronicDisease::Dyslipidemia;
        assert_eq!(set.to_string(), "hypertension|dyslipidemia");
    }
}
