use serde::{Deserialize, Serialize};

/// Heating calculator input, as assembled by the wizard.
///
/// Categorical fields stay as strings so unknown values reach the engine
/// and fall back to neutral multipliers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BtuInput {
    /// Metres
    pub room_length: f64,
    /// Metres
    pub room_width: f64,
    /// Metres
    pub room_height: f64,
    pub room_type: String,
    pub insulation_level: String,
    pub heating_type: String,
    pub window_count: u32,
    pub door_count: u32,
    pub outside_wall_count: u32,
}

/// Every factor applied on the way from floor area to the final figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BtuAdjustments {
    pub ceiling_height_multiplier: f64,
    pub room_type_multiplier: f64,
    pub insulation_multiplier: f64,
    pub heating_type_multiplier: f64,
    pub windows: f64,
    pub doors: f64,
    pub external_walls: f64,
    pub occupancy: f64,
    pub appliances: f64,
    pub safety_margin: f64,
}

impl BtuAdjustments {
    pub fn multiplier_product(&self) -> f64 {
        self.ceiling_height_multiplier
            * self.room_type_multiplier
            * self.insulation_multiplier
            * self.heating_type_multiplier
    }

    pub fn additive_total(&self) -> f64 {
        self.windows + self.doors + self.external_walls + self.occupancy + self.appliances
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadiatorRecommendation {
    #[serde(rename = "type")]
    pub kind: String,
    pub count: u32,
    pub btu_per_radiator: i64,
    pub description: String,
    pub placement: String,
}

/// Emitter and installation pricing, pounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BtuCostEstimate {
    pub radiator_cost: i64,
    pub installation_cost: i64,
    pub total_cost: i64,
    #[serde(rename = "costPerBTU")]
    pub cost_per_btu: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BtuResult {
    #[serde(rename = "totalBTU")]
    pub total_btu: i64,
    #[serde(rename = "baseBTU")]
    pub base_btu: i64,
    /// Unrounded floor-area figure that the adjustments are applied to
    #[serde(rename = "floorBTU")]
    pub floor_btu: f64,
    /// Square metres, 2 dp
    pub room_area: f64,
    /// Cubic metres, 2 dp
    pub room_volume: f64,
    pub adjustments: BtuAdjustments,
    pub radiator_recommendations: Vec<RadiatorRecommendation>,
    pub cost_estimate: BtuCostEstimate,
}
