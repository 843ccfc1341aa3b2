//! Lead capture route
//!
//! Accepts the visitor's email alongside their estimate when they export it.
//! Forwarding happens in the background; the response never depends on it.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use std::sync::Arc;

use super::json_body;
use crate::api::{Accepted, MessageResponse};
use crate::app::AppState;
use crate::domain::{CreateLeadRequest, LeadPayload};
use crate::error::{ApiError, ApiResult};

/// POST /leads
pub async fn create_lead(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateLeadRequest>, JsonRejection>,
) -> ApiResult<Accepted<MessageResponse>> {
    let req = json_body(payload)?;

    if !req.has_plausible_email() {
        return Err(ApiError::bad_request("A valid email address is required"));
    }

    let lead = LeadPayload::from(req);
    let lead_id = lead.id;

    tracing::info!(
        lead_id = %lead_id,
        calculator = ?lead.calculator,
        "Lead received"
    );

    state.lead_capture.submit(lead);

    Ok(Accepted(MessageResponse::with_code(
        format!("Lead {} accepted", lead_id),
        "LEAD_ACCEPTED",
    )))
}
