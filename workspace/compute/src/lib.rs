//! Chart construction and surface lifecycle for the dashboard.
//!
//! This crate owns everything the frontend needs to decide *what* each chart
//! shows: the fixed palette, the per-surface spec builders, and the
//! [`ChartSurface`] type enforcing the one-live-instance rule. It knows
//! nothing about the concrete charting backend beyond the
//! [`ChartBackend`] trait, so tests can swap in an instrumented double.

pub mod chart;
pub mod error;
pub mod surface;

pub use chart::{ChartKind, ChartSpec, Dataset, YAxis};
pub use error::{ChartError, Result};
pub use surface::{ChartBackend, ChartSurface};
