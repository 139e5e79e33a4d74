//! Request handlers

pub mod eligibility;
pub mod health;
