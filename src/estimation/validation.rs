//! Pre-flight checks for wizard input.
//!
//! Advisory only: the engines never call these. An empty list means valid.

use crate::domain::btu::BtuInput;
use crate::domain::extension::ExtensionInput;

/// Check that room geometry is positive and every selection was made.
pub fn validate_btu_input(input: &BtuInput) -> Vec<String> {
    let mut errors = Vec::new();

    require_positive(&mut errors, input.room_length, "Room length");
    require_positive(&mut errors, input.room_width, "Room width");
    require_positive(&mut errors, input.room_height, "Room height");

    require_selected(&mut errors, &input.room_type, "a room type");
    require_selected(&mut errors, &input.insulation_level, "an insulation level");
    require_selected(&mut errors, &input.heating_type, "a heating type");

    errors
}

/// Check that the extension has a positive size and every selection was made.
///
/// Feature and planning service lists are optional and never checked.
pub fn validate_extension_input(input: &ExtensionInput) -> Vec<String> {
    let mut errors = Vec::new();

    require_selected(&mut errors, &input.extension_type, "an extension type");
    require_positive(&mut errors, input.size, "Extension size");
    require_selected(&mut errors, &input.property_type, "a property type");
    require_selected(&mut errors, &input.location, "a location");
    require_selected(&mut errors, &input.complexity, "a complexity level");

    errors
}

fn require_positive(errors: &mut Vec<String>, value: f64, label: &str) {
    // NaN fails the comparison too
    if !(value > 0.0) {
        errors.push(format!("{} must be greater than 0", label));
    }
}

fn require_selected(errors: &mut Vec<String>, value: &str, what: &str) {
    if value.trim().is_empty() {
        errors.push(format!("Please select {}", what));
    }
}
