//! Estimation engines behind the renovation wizards.
//!
//! Both engines are pure functions over static tables: no I/O, no shared
//! mutable state. They can be called from any number of tasks at once.

pub mod btu;
pub mod btu_tables;
pub mod extension;
pub mod extension_tables;
pub mod lookup;
pub mod validation;

pub use btu::calculate_btu;
pub use extension::{calculate_total_cost, get_cost_range, get_estimated_timeline};
pub use validation::{validate_btu_input, validate_extension_input};

use thiserror::Error;

/// Hard failures raised by the engines.
///
/// Every other unrecognised categorical value degrades to a neutral default.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EstimateError {
    #[error("Invalid {catalog}: {key}")]
    InvalidKey { catalog: &'static str, key: String },
}

/// Round half up, so `x.5` always goes towards positive infinity.
pub(crate) fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Round to a whole currency/BTU unit for output.
pub(crate) fn round_whole(value: f64) -> i64 {
    round_half_up(value) as i64
}

/// Round to `places` decimal places for display.
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    round_half_up(value * factor) / factor
}
