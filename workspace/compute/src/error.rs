use thiserror::Error;

/// Error types for chart construction.
#[derive(Error, Debug)]
pub enum ChartError {
    /// The charting backend rejected a trace or layout payload.
    #[error("chart backend error: {0}")]
    Backend(String),
}

/// Type alias for Result with ChartError
pub type Result<T> = std::result::Result<T, ChartError>;
