//! Extension cost calculator routes

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::HeaderMap,
    Json,
};
use std::sync::Arc;

use super::{enforce_validation, json_body};
use crate::api::DataResponse;
use crate::app::AppState;
use crate::domain::{
    CostRange, CostRangeQuery, ExtensionCatalog, ExtensionInput, ExtensionResult,
    TimelineEstimate, TimelineQuery, ValidationReport,
};
use crate::error::{ApiError, ApiResult};
use crate::estimation::{self, extension};
use crate::middleware::RequestIdExt;

fn query_params<T>(query: Result<Query<T>, QueryRejection>) -> ApiResult<T> {
    query
        .map(|Query(value)| value)
        .map_err(|rejection| ApiError::bad_request(rejection.body_text()))
}

fn size_errors(size: f64) -> Vec<String> {
    if size > 0.0 {
        Vec::new()
    } else {
        vec!["Extension size must be greater than 0".to_string()]
    }
}

/// POST /estimates/extension
pub async fn calculate(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    payload: Result<Json<ExtensionInput>, JsonRejection>,
) -> ApiResult<DataResponse<ExtensionResult>> {
    let input = json_body(payload)?;
    enforce_validation(&state, estimation::validate_extension_input(&input))?;

    let result = estimation::calculate_total_cost(&input)?;

    tracing::info!(
        request_id = headers.request_id().unwrap_or("-"),
        extension_type = %input.extension_type,
        size = input.size,
        features = input.additional_features.len(),
        total = result.total,
        "Extension estimate calculated"
    );

    Ok(DataResponse::new(result))
}

/// POST /estimates/extension/validate
pub async fn validate(
    payload: Result<Json<ExtensionInput>, JsonRejection>,
) -> ApiResult<DataResponse<ValidationReport>> {
    let input = json_body(payload)?;
    Ok(DataResponse::new(
        estimation::validate_extension_input(&input).into(),
    ))
}

/// GET /estimates/extension/cost-range?extensionType=..&size=..
pub async fn cost_range(
    State(state): State<Arc<AppState>>,
    query: Result<Query<CostRangeQuery>, QueryRejection>,
) -> ApiResult<DataResponse<CostRange>> {
    let params = query_params(query)?;
    enforce_validation(&state, size_errors(params.size))?;

    let range = estimation::get_cost_range(&params.extension_type, params.size)?;
    Ok(DataResponse::new(range))
}

/// GET /estimates/extension/timeline?extensionType=..&size=..&complexity=..
pub async fn timeline(
    State(state): State<Arc<AppState>>,
    query: Result<Query<TimelineQuery>, QueryRejection>,
) -> ApiResult<DataResponse<TimelineEstimate>> {
    let params = query_params(query)?;
    enforce_validation(&state, size_errors(params.size))?;

    let timeline =
        estimation::get_estimated_timeline(&params.extension_type, params.size, &params.complexity)?;
    Ok(DataResponse::new(timeline))
}

/// GET /estimates/extension/catalog
pub async fn catalog() -> DataResponse<ExtensionCatalog> {
    DataResponse::new(extension::catalog())
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::config::Settings;
    use crate::routes::test_support::{app, app_with, get, post_json};

    fn terraced_single_storey() -> serde_json::Value {
        json!({
            "extensionType": "singleStorey",
            "size": 30,
            "propertyType": "terraced",
            "location": "zone3",
            "complexity": "simple",
            "additionalFeatures": [],
            "planningServices": []
        })
    }

    #[tokio::test]
    async fn calculates_terraced_single_storey() {
        let (status, body) =
            post_json(app(), "/estimates/extension", terraced_single_storey()).await;

        assert_eq!(status, StatusCode::OK);
        let data = &body["data"];
        assert_eq!(data["total"], 117_000);
        assert_eq!(data["costPerSqm"], 3_900);
        assert_eq!(data["breakdown"]["baseCost"], 75_000);
        assert_eq!(data["breakdown"]["locationMultiplier"], 1.2);
        assert_eq!(data["breakdown"]["contingency"], 9_000);
        assert_eq!(data["breakdown"]["vat"], 18_000);
    }

    #[tokio::test]
    async fn feature_lists_are_optional() {
        let mut input = terraced_single_storey();
        let obj = input.as_object_mut().unwrap();
        obj.remove("additionalFeatures");
        obj.remove("planningServices");

        let (status, body) = post_json(app(), "/estimates/extension", input).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["breakdown"]["featuresCost"], 0);
    }

    #[tokio::test]
    async fn unknown_extension_type_fails_the_calculation() {
        let mut input = terraced_single_storey();
        input["extensionType"] = json!("bogus");
        input["size"] = json!(10);

        let (status, body) = post_json(app(), "/estimates/extension", input).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "CALCULATION_FAILED");
        assert_eq!(body["message"], "Calculation failed, please try again");
        assert_eq!(body["details"][0], "Invalid extension type: bogus");
    }

    #[tokio::test]
    async fn zero_size_is_rejected_before_division() {
        let mut input = terraced_single_storey();
        input["size"] = json!(0);

        let (status, body) = post_json(app(), "/estimates/extension", input).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["details"][0], "Extension size must be greater than 0");
    }

    #[tokio::test]
    async fn validate_endpoint() {
        let (status, body) =
            post_json(app(), "/estimates/extension/validate", json!({ "size": 12 })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["valid"], false);
        assert_eq!(body["data"]["errors"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn cost_range() {
        let (status, body) = get(
            app(),
            "/estimates/extension/cost-range?extensionType=singleStorey&size=50",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["min"], 146_250);
        assert_eq!(body["data"]["max"], 407_532);
        assert_eq!(body["data"]["average"], 276_891);
    }

    #[tokio::test]
    async fn cost_range_requires_size() {
        let (status, _) = get(app(), "/estimates/extension/cost-range?extensionType=loft").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn timeline() {
        let (status, body) = get(
            app(),
            "/estimates/extension/timeline?extensionType=basement&size=60&complexity=complex",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["estimatedWeeks"], 38);
        assert_eq!(body["data"]["minWeeks"], 32);
        assert_eq!(body["data"]["maxWeeks"], 48);
    }

    #[tokio::test]
    async fn timeline_rejects_non_positive_size() {
        let (status, body) = get(
            app(),
            "/estimates/extension/timeline?extensionType=loft&size=-5&complexity=simple",
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["details"][0], "Extension size must be greater than 0");
    }

    #[tokio::test]
    async fn timeline_passes_through_when_validation_is_relaxed() {
        let settings = Settings {
            strict_validation: false,
            ..Settings::for_tests()
        };
        let (status, body) = get(
            app_with(settings),
            "/estimates/extension/timeline?extensionType=loft&size=-5&complexity=simple",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["estimatedWeeks"], 8);
    }

    #[tokio::test]
    async fn catalog_lists_features_and_services() {
        let (status, body) = get(app(), "/estimates/extension/catalog").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["features"].as_array().unwrap().len(), 17);
        assert_eq!(body["data"]["planningServices"].as_array().unwrap().len(), 5);
        assert_eq!(body["data"]["planningServices"][0]["id"], "architecturalDrawings");
    }
}
