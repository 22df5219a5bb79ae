use serde::{Deserialize, Serialize};

/// Decision threshold applied to a raw model score.
pub const FAILURE_THRESHOLD: f64 = 50.0;

/// Binary turbine condition derived from the score. Scores above the
/// threshold flag the turbine as failing; the polarity is deliberate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PredictionStatus {
    Success,
    Failure,
}

impl PredictionStatus {
    /// Bar-chart encoding: Failure plots as 0, Success as 1.
    pub fn as_datum(&self) -> u8 {
        match self {
            PredictionStatus::Failure => 0,
            PredictionStatus::Success => 1,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PredictionStatus::Success => "Success",
            PredictionStatus::Failure => "Failure",
        }
    }
}

/// Outcome of one Predict action. A new result replaces the previous one;
/// no history is kept.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub score: f64,
    pub status: PredictionStatus,
}

impl PredictionResult {
    /// Applies the threshold rule to a score drawn from [0, 100). A score of
    /// exactly 50 still counts as Success.
    pub fn from_score(score: f64) -> Self {
        let status = if score > FAILURE_THRESHOLD {
            PredictionStatus::Failure
        } else {
            PredictionStatus::Success
        };
        Self { score, status }
    }
}
