//! Request and response records for the estimation endpoints.
//!
//! Field names mirror the wizard's camelCase JSON.

pub mod btu;
pub mod extension;
pub mod leads;

pub use btu::*;
pub use extension::*;
pub use leads::*;

use serde::Serialize;

/// Outcome of a pre-flight validation run.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl From<Vec<String>> for ValidationReport {
    fn from(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}
