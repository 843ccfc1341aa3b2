//! Heating load (BTU) calculator.
//!
//! Sizes a room's heating requirement from floor area, then applies ceiling
//! height, room use, insulation and emitter adjustments plus fixed additive
//! heat losses, and finally a 15% safety margin.
//!
//! No bounds checking is performed: non-positive geometry yields a
//! degenerate (possibly negative) figure rather than an error. Callers are
//! expected to run [`super::validate_btu_input`] first.

use super::btu_tables::*;
use super::lookup::{lookup_or_default, CatalogKey};
use super::{round_to, round_whole};
use crate::domain::btu::{
    BtuAdjustments, BtuCostEstimate, BtuInput, BtuResult, RadiatorRecommendation,
};

/// Compute the heating requirement for a single room.
pub fn calculate_btu(input: &BtuInput) -> BtuResult {
    let room_area = input.room_length * input.room_width;
    let room_volume = room_area * input.room_height;

    let area_sq_ft = room_area * SQ_FT_PER_SQ_M;
    let height_ft = input.room_height * FT_PER_M;

    let floor_btu = area_sq_ft * BTU_PER_SQ_FT;

    let ceiling_height_multiplier = if height_ft > STANDARD_CEILING_FT {
        1.0 + (height_ft - STANDARD_CEILING_FT) * CEILING_SURCHARGE_PER_FT
    } else {
        1.0
    };

    let room_type_multiplier =
        lookup_or_default(ROOM_TYPE_MULTIPLIERS, &input.room_type, DEFAULT_MULTIPLIER);
    let insulation_multiplier = lookup_or_default(
        INSULATION_MULTIPLIERS,
        &input.insulation_level,
        DEFAULT_MULTIPLIER,
    );
    let heating_type_multiplier =
        lookup_or_default(HEATING_TYPE_MULTIPLIERS, &input.heating_type, DEFAULT_MULTIPLIER);

    let appliances = if RoomType::from_key(&input.room_type) == Some(RoomType::Kitchen) {
        KITCHEN_APPLIANCE_BTU
    } else {
        DEFAULT_APPLIANCE_BTU
    };

    let adjustments = BtuAdjustments {
        ceiling_height_multiplier,
        room_type_multiplier,
        insulation_multiplier,
        heating_type_multiplier,
        windows: f64::from(input.window_count) * BTU_PER_WINDOW,
        doors: f64::from(input.door_count) * BTU_PER_DOOR,
        external_walls: f64::from(input.outside_wall_count) * BTU_PER_OUTSIDE_WALL,
        occupancy: OCCUPANCY_BTU,
        appliances,
        safety_margin: SAFETY_MARGIN,
    };

    // Multiplicative stage first, then the additive heat losses
    let adjusted_btu =
        floor_btu * adjustments.multiplier_product() + adjustments.additive_total();

    let total_btu = round_whole(adjusted_btu * SAFETY_MARGIN);

    tracing::debug!(
        room_type = %input.room_type,
        room_area,
        floor_btu,
        adjusted_btu,
        total_btu,
        "BTU requirement calculated"
    );

    BtuResult {
        total_btu,
        base_btu: round_whole(floor_btu),
        floor_btu,
        room_area: round_to(room_area, 2),
        room_volume: round_to(room_volume, 2),
        adjustments,
        radiator_recommendations: radiator_recommendations(total_btu),
        cost_estimate: cost_estimate(total_btu, &input.heating_type),
    }
}

/// Radiator layouts able to deliver `total_btu`, smallest count first.
pub fn radiator_recommendations(total_btu: i64) -> Vec<RadiatorRecommendation> {
    let mut options = vec![RadiatorRecommendation {
        kind: "Single Radiator".to_string(),
        count: 1,
        btu_per_radiator: total_btu,
        description: format!("One radiator rated at {} BTU", total_btu),
        placement: "Under the main window or on the coldest outside wall".to_string(),
    }];

    if total_btu > TWO_RADIATOR_THRESHOLD {
        let each = round_whole(total_btu as f64 / 2.0);
        options.push(RadiatorRecommendation {
            kind: "Two Radiators".to_string(),
            count: 2,
            btu_per_radiator: each,
            description: format!("Two radiators rated at {} BTU each", each),
            placement: "One under the window, one on the opposite wall".to_string(),
        });
    }

    if total_btu > THREE_RADIATOR_THRESHOLD {
        let each = round_whole(total_btu as f64 / 3.0);
        options.push(RadiatorRecommendation {
            kind: "Three Radiators".to_string(),
            count: 3,
            btu_per_radiator: each,
            description: format!("Three radiators rated at {} BTU each", each),
            placement: "Spread evenly around the room, prioritising outside walls".to_string(),
        });
    }

    options
}

/// Emitter and installation pricing for the chosen heating type.
pub fn cost_estimate(total_btu: i64, heating_type: &str) -> BtuCostEstimate {
    let cost_per_btu = lookup_or_default(COST_PER_BTU, heating_type, DEFAULT_COST_PER_BTU);
    let installation_fee =
        lookup_or_default(INSTALLATION_FEES, heating_type, DEFAULT_INSTALLATION_FEE);

    let radiator_cost = round_whole(total_btu as f64 * cost_per_btu);
    let installation_cost = round_whole(installation_fee);

    BtuCostEstimate {
        radiator_cost,
        installation_cost,
        total_cost: radiator_cost + installation_cost,
        cost_per_btu,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    fn living_room() -> BtuInput {
        BtuInput {
            room_length: 4.0,
            room_width: 3.0,
            room_height: 2.4,
            room_type: "Living Room".to_string(),
            insulation_level: "Good".to_string(),
            heating_type: "Gas Radiator".to_string(),
            window_count: 1,
            door_count: 1,
            outside_wall_count: 1,
        }
    }

    #[test]
    fn living_room_scenario() {
        let result = calculate_btu(&living_room());

        assert_eq!(result.room_area, 12.0);
        assert_eq!(result.room_volume, 28.8);
        assert_eq!(result.base_btu, 2325);
        assert_eq!(result.total_btu, 4169);

        let adj = &result.adjustments;
        assert_eq!(adj.ceiling_height_multiplier, 1.0);
        assert_eq!(adj.room_type_multiplier, 1.0);
        assert_eq!(adj.insulation_multiplier, 1.0);
        assert_eq!(adj.heating_type_multiplier, 1.0);
        assert_eq!(adj.additive_total(), 1300.0);

        // 4169 > 3000, so all three layouts are offered
        assert_eq!(result.radiator_recommendations.len(), 3);
        assert_eq!(result.radiator_recommendations[1].btu_per_radiator, 2085);
        assert_eq!(result.radiator_recommendations[2].btu_per_radiator, 1390);

        assert_eq!(result.cost_estimate.radiator_cost, 417);
        assert_eq!(result.cost_estimate.installation_cost, 300);
        assert_eq!(result.cost_estimate.total_cost, 717);
        assert_eq!(result.cost_estimate.cost_per_btu, 0.10);
    }

    #[test]
    fn is_deterministic() {
        let input = BtuInput {
            room_height: 3.1,
            room_type: "Kitchen".to_string(),
            insulation_level: "Poor".to_string(),
            heating_type: "Underfloor Heating".to_string(),
            ..living_room()
        };
        assert_eq!(calculate_btu(&input), calculate_btu(&input));
    }

    #[test]
    fn tall_ceilings_add_ten_percent_per_foot() {
        let input = BtuInput {
            room_height: 3.0,
            ..living_room()
        };
        let result = calculate_btu(&input);

        let height_ft = 3.0 * FT_PER_M;
        assert_relative_eq!(
            result.adjustments.ceiling_height_multiplier,
            1.0 + (height_ft - 8.0) * 0.10,
            epsilon = 1e-12
        );
        assert!(result.total_btu > calculate_btu(&living_room()).total_btu);
    }

    #[test]
    fn kitchen_gets_appliance_allowance() {
        let input = BtuInput {
            room_type: "Kitchen".to_string(),
            ..living_room()
        };
        let result = calculate_btu(&input);
        assert_eq!(result.adjustments.appliances, 500.0);
        assert_eq!(result.adjustments.room_type_multiplier, 0.9);
    }

    #[test]
    fn unknown_categories_fall_back_to_neutral_values() {
        let input = BtuInput {
            room_type: "bogus".to_string(),
            insulation_level: "".to_string(),
            heating_type: "Heat Pump".to_string(),
            ..living_room()
        };
        let result = calculate_btu(&input);

        assert_eq!(result.adjustments.room_type_multiplier, 1.0);
        assert_eq!(result.adjustments.insulation_multiplier, 1.0);
        assert_eq!(result.adjustments.heating_type_multiplier, 1.0);
        assert_eq!(result.adjustments.appliances, 100.0);
        assert_eq!(result.cost_estimate.cost_per_btu, 0.40);
        assert_eq!(result.cost_estimate.installation_cost, 200);
    }

    #[test]
    fn safety_margin_is_reconstructable_from_breakdown() {
        let mut inputs = vec![
            living_room(),
            BtuInput {
                room_length: 2.2,
                room_width: 1.1,
                room_type: "Hallway".to_string(),
                insulation_level: "Excellent".to_string(),
                ..living_room()
            },
        ];

        // Tall rooms with the steepest multipliers amplify any rounding in the floor figure
        for length_cm in (137..=1580).step_by(7) {
            for height_cm in (240..=500).step_by(10) {
                inputs.push(BtuInput {
                    room_length: f64::from(length_cm) / 100.0,
                    room_width: 4.7,
                    room_height: f64::from(height_cm) / 100.0,
                    room_type: "Bathroom".to_string(),
                    insulation_level: "Poor".to_string(),
                    heating_type: "Electric Radiator".to_string(),
                    window_count: 3,
                    door_count: 2,
                    outside_wall_count: 2,
                });
            }
        }

        for input in inputs {
            let result = calculate_btu(&input);
            let adj = &result.adjustments;
            let pre_margin = result.floor_btu * adj.multiplier_product() + adj.additive_total();
            let expected = round_whole(pre_margin * adj.safety_margin);
            assert!(
                (result.total_btu - expected).abs() <= 1,
                "{:?}: {} vs {}",
                input,
                result.total_btu,
                expected
            );
            assert_eq!(result.base_btu, round_whole(result.floor_btu));
        }
    }

    #[test]
    fn growing_any_dimension_or_count_never_lowers_the_total() {
        let base = living_room();
        let base_total = calculate_btu(&base).total_btu;

        let variants = [
            BtuInput {
                room_length: 5.0,
                ..base.clone()
            },
            BtuInput {
                room_width: 3.5,
                ..base.clone()
            },
            BtuInput {
                room_height: 2.7,
                ..base.clone()
            },
            BtuInput {
                window_count: 4,
                ..base.clone()
            },
            BtuInput {
                door_count: 2,
                ..base.clone()
            },
            BtuInput {
                outside_wall_count: 3,
                ..base.clone()
            },
        ];

        for variant in variants {
            assert!(calculate_btu(&variant).total_btu >= base_total, "{:?}", variant);
        }
    }

    #[rstest]
    #[case(0, 1)]
    #[case(1500, 1)]
    #[case(1501, 2)]
    #[case(3000, 2)]
    #[case(3001, 3)]
    #[case(12000, 3)]
    fn radiator_tiers_follow_fixed_thresholds(#[case] total_btu: i64, #[case] options: usize) {
        let recommendations = radiator_recommendations(total_btu);
        assert_eq!(recommendations.len(), options);
        assert_eq!(recommendations[0].count, 1);
        assert_eq!(recommendations[0].btu_per_radiator, total_btu);
    }

    // Invalid geometry is not rejected here; validation is the caller's job.
    #[test]
    fn negative_geometry_yields_degenerate_output() {
        let input = BtuInput {
            room_length: -4.0,
            ..living_room()
        };
        let result = calculate_btu(&input);
        assert!(result.room_area < 0.0);
        assert!(result.total_btu < calculate_btu(&living_room()).total_btu);
    }
}
