//! Extension (building work) cost calculator.
//!
//! The base rate for the extension type is scaled by a chain of
//! multipliers, then flat feature and planning fees are added. Contingency
//! and VAT are computed on that adjusted figure.
//!
//! The multiplier chain runs on unrounded values. Currency fields are rounded
//! once the adjusted cost is known, and the total is the sum of the rounded
//! breakdown so the itemised figures always add up.

use super::extension_tables::*;
use super::lookup::{lookup_or_default, required_lookup, CatalogKey};
use super::{round_half_up, round_whole, EstimateError};
use crate::domain::extension::{
    CatalogItem, CostBreakdown, CostRange, ExtensionCatalog, ExtensionInput, ExtensionResult,
    TimelineEstimate,
};

/// Price an extension project.
///
/// Fails only when `extension_type` is not in the catalog; every other
/// unknown value falls back to a neutral default.
pub fn calculate_total_cost(input: &ExtensionInput) -> Result<ExtensionResult, EstimateError> {
    let base_cost = required_lookup(BASE_COST_PER_SQM, &input.extension_type)? * input.size;

    let size_multiplier = size_multiplier(input.size);
    let location_multiplier =
        lookup_or_default(LOCATION_MULTIPLIERS, &input.location, DEFAULT_MULTIPLIER);
    let property_multiplier =
        lookup_or_default(PROPERTY_MULTIPLIERS, &input.property_type, DEFAULT_MULTIPLIER);
    let complexity_multiplier =
        lookup_or_default(COMPLEXITY_MULTIPLIERS, &input.complexity, DEFAULT_MULTIPLIER);

    let features_cost = features_cost(&input.additional_features);
    let planning_cost = planning_cost(&input.planning_services);

    let adjusted_cost = base_cost
        * size_multiplier
        * location_multiplier
        * property_multiplier
        * complexity_multiplier
        + features_cost
        + planning_cost;

    let adjusted_cost = round_half_up(adjusted_cost);
    let contingency = round_half_up(adjusted_cost * contingency_rate(&input.complexity));
    let vat = round_half_up(adjusted_cost * VAT_RATE);
    let total = adjusted_cost + contingency + vat;

    let breakdown = CostBreakdown {
        base_cost: round_whole(base_cost),
        size_multiplier,
        location_multiplier,
        property_multiplier,
        complexity_multiplier,
        adjusted_cost: adjusted_cost as i64,
        features_cost: round_whole(features_cost),
        planning_cost: round_whole(planning_cost),
        contingency: contingency as i64,
        vat: vat as i64,
    };

    tracing::debug!(
        extension_type = %input.extension_type,
        size = input.size,
        adjusted_cost = breakdown.adjusted_cost,
        total,
        "Extension cost calculated"
    );

    Ok(ExtensionResult {
        breakdown,
        total: total as i64,
        // No zero-size guard: callers validate size first
        cost_per_sqm: round_whole(total / input.size),
    })
}

/// Economies-of-scale multiplier for a floor area in square metres.
pub fn size_multiplier(size: f64) -> f64 {
    SIZE_BANDS
        .iter()
        .find(|band| band.contains(size))
        .map(|band| band.multiplier)
        .unwrap_or(DEFAULT_SIZE_MULTIPLIER)
}

/// Contingency rate for a complexity key; unknown keys take the standard rate.
pub fn contingency_rate(complexity: &str) -> f64 {
    Complexity::from_key(complexity)
        .map(|c| ContingencyTier::for_complexity(c).rate())
        .unwrap_or(DEFAULT_CONTINGENCY_RATE)
}

/// Sum of catalog costs for the selected features. Unknown ids add nothing.
pub fn features_cost(ids: &[String]) -> f64 {
    ids.iter()
        .map(|id| lookup_or_default(FEATURE_COSTS, id, 0.0))
        .sum()
}

/// Sum of fees for the selected planning services. Unknown ids add nothing.
pub fn planning_cost(ids: &[String]) -> f64 {
    ids.iter()
        .map(|id| lookup_or_default(PLANNING_FEES, id, 0.0))
        .sum()
}

/// Totals for the cheapest and dearest reference projects of this type and size.
///
/// The cheapest is a simple terraced project in zone5; the dearest a very
/// complex flat in zone1. Neither includes features or planning services.
pub fn get_cost_range(extension_type: &str, size: f64) -> Result<CostRange, EstimateError> {
    let reference = |property: PropertyType, location: LocationZone, complexity: Complexity| {
        ExtensionInput {
            extension_type: extension_type.to_string(),
            size,
            property_type: property.key().to_string(),
            location: location.key().to_string(),
            complexity: complexity.key().to_string(),
            additional_features: Vec::new(),
            planning_services: Vec::new(),
        }
    };

    let min = calculate_total_cost(&reference(
        PropertyType::Terraced,
        LocationZone::Zone5,
        Complexity::Simple,
    ))?
    .total;
    let max = calculate_total_cost(&reference(
        PropertyType::Flat,
        LocationZone::Zone1,
        Complexity::VeryComplex,
    ))?
    .total;

    Ok(CostRange {
        min,
        max,
        average: round_whole((min + max) as f64 / 2.0),
    })
}

/// Build duration in weeks. Independent of cost.
pub fn get_estimated_timeline(
    extension_type: &str,
    size: f64,
    complexity: &str,
) -> Result<TimelineEstimate, EstimateError> {
    let base_weeks = required_lookup(BASE_BUILD_WEEKS, extension_type)?;

    let size_factor = TIMELINE_SIZE_FACTORS
        .iter()
        .find(|(upper, _)| size <= *upper)
        .map(|(_, factor)| *factor)
        .unwrap_or(TIMELINE_LARGE_SIZE_FACTOR);
    let complexity_factor =
        lookup_or_default(COMPLEXITY_TIMELINE_FACTORS, complexity, DEFAULT_MULTIPLIER);

    let estimated_weeks = (base_weeks * size_factor * complexity_factor).ceil() as i64;

    Ok(TimelineEstimate {
        estimated_weeks,
        min_weeks: round_whole(estimated_weeks as f64 * 0.85).max(1),
        max_weeks: round_whole(estimated_weeks as f64 * 1.25),
    })
}

/// Selectable features and planning services with their prices.
pub fn catalog() -> ExtensionCatalog {
    ExtensionCatalog {
        features: FEATURE_COSTS
            .iter()
            .map(|(feature, cost)| CatalogItem {
                id: feature.key(),
                cost: *cost,
            })
            .collect(),
        planning_services: PLANNING_FEES
            .iter()
            .map(|(service, cost)| CatalogItem {
                id: service.key(),
                cost: *cost,
            })
            .collect(),
    }
}
