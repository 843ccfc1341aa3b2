//! Heating (BTU) calculator routes

use axum::{extract::rejection::JsonRejection, extract::State, http::HeaderMap, Json};
use std::sync::Arc;

use super::{enforce_validation, json_body};
use crate::api::DataResponse;
use crate::app::AppState;
use crate::domain::{BtuInput, BtuResult, ValidationReport};
use crate::error::ApiResult;
use crate::estimation;
use crate::middleware::RequestIdExt;

/// POST /estimates/btu
pub async fn calculate(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    payload: Result<Json<BtuInput>, JsonRejection>,
) -> ApiResult<DataResponse<BtuResult>> {
    let input = json_body(payload)?;
    enforce_validation(&state, estimation::validate_btu_input(&input))?;

    let result = estimation::calculate_btu(&input);

    tracing::info!(
        request_id = headers.request_id().unwrap_or("-"),
        room_type = %input.room_type,
        heating_type = %input.heating_type,
        total_btu = result.total_btu,
        "BTU estimate calculated"
    );

    Ok(DataResponse::new(result))
}

/// POST /estimates/btu/validate
pub async fn validate(
    payload: Result<Json<BtuInput>, JsonRejection>,
) -> ApiResult<DataResponse<ValidationReport>> {
    let input = json_body(payload)?;
    Ok(DataResponse::new(estimation::validate_btu_input(&input).into()))
}
