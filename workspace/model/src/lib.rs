//! Domain types for the turbine readings dashboard.
//! Shared between the chart computation crate and the frontend so both sides
//! agree on field order, labels, and the prediction rule.

pub mod form;
pub mod prediction;

pub use form::{FormState, SensorField};
pub use prediction::{FAILURE_THRESHOLD, PredictionResult, PredictionStatus};
