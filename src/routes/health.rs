use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::app::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub lead_capture: String,
}

/// Liveness probe. The engines have no dependencies, so this only reports
/// whether lead forwarding is configured.
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let lead_capture = if state.lead_capture.is_enabled() {
        "enabled"
    } else {
        "disabled"
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        lead_capture: lead_capture.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::routes::test_support::{app, get};

    #[tokio::test]
    async fn reports_healthy() {
        let (status, body) = get(app(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["leadCapture"], "disabled");
    }
}
