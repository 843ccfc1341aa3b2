pub mod btu;
pub mod extension;
pub mod health;
pub mod leads;

use axum::{extract::rejection::JsonRejection, routing::get, routing::post, Json, Router};
use std::sync::Arc;

use crate::app::AppState;
use crate::error::{ApiError, ApiResult};

/// Build the API router with all routes
pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health::health_check))
        // Heating calculator
        .route("/estimates/btu", post(btu::calculate))
        .route("/estimates/btu/validate", post(btu::validate))
        // Extension calculator
        .route("/estimates/extension", post(extension::calculate))
        .route("/estimates/extension/validate", post(extension::validate))
        .route("/estimates/extension/cost-range", get(extension::cost_range))
        .route("/estimates/extension/timeline", get(extension::timeline))
        .route("/estimates/extension/catalog", get(extension::catalog))
        // Lead capture
        .route("/leads", post(leads::create_lead))
}

/// Unwrap a JSON body, turning axum's rejection into our error envelope.
pub(crate) fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> ApiResult<T> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| ApiError::bad_request(rejection.body_text()))
}

/// Gate a computation on pre-flight validation when strict mode is on.
pub(crate) fn enforce_validation(state: &AppState, errors: Vec<String>) -> ApiResult<()> {
    if state.settings.strict_validation && !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }
    Ok(())
}
