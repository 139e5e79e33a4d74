//! HTTP API Layer
//!
//! This crate exposes the eligibility decision service over HTTP using Axum.
//! It parses untrusted input into a validated applicant, delegates the
//! decision to the domain, and renders the result as a decision record.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for eligibility and health
//! - **Middleware**: Tracing, audit logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router();
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;

use std::sync::Arc;

use axum::{
    Router,
    http::HeaderName,
    routing::{get, post},
    middleware as axum_middleware,
};
use domain_eligibility::EligibilityService;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tower_http::cors::{CorsLayer, Any};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};

use crate::middleware::audit_middleware;
use crate::handlers::{eligibility, health};

/// Header carrying the per-request correlation id
pub static REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<EligibilityService>,
}

/// Creates the main API router with the standard rules
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router() -> Router {
    create_router_with_service(EligibilityService::standard())
}

/// Creates the API router around a specific eligibility service
pub fn create_router_with_service(service: EligibilityService) -> Router {
    let state = AppState {
        service: Arc::new(service),
    };

    // Public routes
    let public_routes = Router::new()
        .route("/health", get(health::health_check));

    // Eligibility routes
    let eligibility_routes = Router::new()
        .route("/", post(eligibility::evaluate))
        .route("/rules", get(eligibility::list_rules));

    let api_routes = Router::new()
        .nest("/eligibility", eligibility_routes)
        .layer(axum_middleware::from_fn(audit_middleware));

    // Combine all routes
    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(REQUEST_ID_HEADER.clone(), MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::new(REQUEST_ID_HEADER.clone()))
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}
