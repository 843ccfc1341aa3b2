use serde::{Deserialize, Serialize};

/// Extension cost calculator input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtensionInput {
    pub extension_type: String,
    /// Square metres
    pub size: f64,
    pub property_type: String,
    pub location: String,
    pub complexity: String,
    /// Feature ids; unknown ids cost nothing
    pub additional_features: Vec<String>,
    /// Planning service ids; unknown ids cost nothing
    pub planning_services: Vec<String>,
}

/// Itemised cost figures. Currency fields are whole pounds, multipliers are raw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub base_cost: i64,
    pub size_multiplier: f64,
    pub location_multiplier: f64,
    pub property_multiplier: f64,
    pub complexity_multiplier: f64,
    pub adjusted_cost: i64,
    pub features_cost: i64,
    pub planning_cost: i64,
    pub contingency: i64,
    pub vat: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionResult {
    pub breakdown: CostBreakdown,
    pub total: i64,
    pub cost_per_sqm: i64,
}

/// Spread of totals between the cheapest and dearest reference projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostRange {
    pub min: i64,
    pub max: i64,
    pub average: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEstimate {
    pub estimated_weeks: i64,
    pub min_weeks: i64,
    pub max_weeks: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostRangeQuery {
    pub extension_type: String,
    pub size: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineQuery {
    pub extension_type: String,
    pub size: f64,
    #[serde(default)]
    pub complexity: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogItem {
    pub id: &'static str,
    pub cost: f64,
}

/// Selectable add-ons for the wizard's options step.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionCatalog {
    pub features: Vec<CatalogItem>,
    pub planning_services: Vec<CatalogItem>,
}
