//! Request and response bodies

pub mod eligibility;
