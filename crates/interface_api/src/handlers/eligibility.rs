//! Eligibility handlers

use axum::{extract::{rejection::JsonRejection, State}, Json};
use tracing::info;

use crate::{AppState, error::ApiError};
use crate::dto::eligibility::*;

/// Evaluates an applicant and returns the decision record
pub async fn evaluate(
    State(state): State<AppState>,
    payload: Result<Json<EligibilityRequest>, JsonRejection>,
) -> Result<Json<EligibilityResponse>, ApiError> {
    let Json(request) = payload?;
    let applicant = request.to_applicant()?;
    let assessment = state.service.assess(&applicant)?;

    let response = EligibilityResponse::from_assessment(assessment, &applicant, request.base_premium);

    info!(
        decision_id = %response.decision_id,
        eligible = response.eligible,
        surcharge = %response.surcharge_factor,
        rejected_by = response.rejected_by.as_deref().unwrap_or("-"),
        "Eligibility decision"
    );

    Ok(Json(response))
}

/// Lists the rules in evaluation order
pub async fn list_rules(State(state): State<AppState>) -> Json<RulesResponse> {
    Json(RulesResponse {
        rules: state
            .service
            .rule_names()
            .into_iter()
            .map(str::to_string)
            .collect(),
    })
}
