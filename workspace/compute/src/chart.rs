use model::{FormState, PredictionStatus, SensorField};
use serde_json::Value;

/// Chart families the dashboard draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Line,
    Doughnut,
}

/// The fixed dashboard palette. Fills carry 0.2 alpha, borders are opaque.
pub mod palette {
    pub const RED_FILL: &str = "rgba(255, 99, 132, 0.2)";
    pub const RED_BORDER: &str = "rgba(255, 99, 132, 1)";
    pub const BLUE_FILL: &str = "rgba(54, 162, 235, 0.2)";
    pub const BLUE_BORDER: &str = "rgba(54, 162, 235, 1)";
    pub const YELLOW_FILL: &str = "rgba(255, 206, 86, 0.2)";
    pub const YELLOW_BORDER: &str = "rgba(255, 206, 86, 1)";
    pub const TEAL_FILL: &str = "rgba(75, 192, 192, 0.2)";
    pub const TEAL_BORDER: &str = "rgba(75, 192, 192, 1)";
    pub const PURPLE_FILL: &str = "rgba(153, 102, 255, 0.2)";
    pub const PURPLE_BORDER: &str = "rgba(153, 102, 255, 1)";

    /// One color per reading slice, in field display order.
    pub const SLICE_FILLS: [&str; 5] =
        [RED_FILL, BLUE_FILL, YELLOW_FILL, TEAL_FILL, PURPLE_FILL];
    pub const SLICE_BORDERS: [&str; 5] =
        [RED_BORDER, BLUE_BORDER, YELLOW_BORDER, TEAL_BORDER, PURPLE_BORDER];
}

/// A single series. `fill_colors`/`border_colors` carry one entry per point
/// for sliced charts and a single entry for whole-series coloring.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub label: Option<&'static str>,
    pub values: Vec<Value>,
    pub fill_colors: Vec<&'static str>,
    pub border_colors: Vec<&'static str>,
    pub border_width: u32,
}

/// Value-axis bounds. Absent entirely on charts without axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YAxis {
    pub begin_at_zero: bool,
    pub max: Option<f64>,
}

/// Backend-agnostic description of one chart: what the construct call of a
/// [`crate::ChartBackend`] receives.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub labels: Vec<&'static str>,
    pub dataset: Dataset,
    pub y_axis: Option<YAxis>,
}

fn reading_labels() -> Vec<&'static str> {
    SensorField::ALL.iter().map(|field| field.label()).collect()
}

fn reading_values(form: &FormState) -> Vec<Value> {
    // Raw text as entered. The backend decides what a non-numeric string
    // draws as.
    form.values()
        .iter()
        .map(|value| Value::String((*value).to_string()))
        .collect()
}

/// Bar chart over the latest prediction status: a single datum, 0 for
/// Failure and 1 for Success, null before the first prediction. Red palette
/// on Failure, teal otherwise.
pub fn status_bar(status: Option<PredictionStatus>) -> ChartSpec {
    let datum = match status {
        Some(status) => Value::from(status.as_datum()),
        None => Value::Null,
    };
    let failed = status == Some(PredictionStatus::Failure);

    ChartSpec {
        kind: ChartKind::Bar,
        labels: vec!["Prediction Status"],
        dataset: Dataset {
            label: Some("Turbine Status"),
            values: vec![datum],
            fill_colors: vec![if failed { palette::RED_FILL } else { palette::TEAL_FILL }],
            border_colors: vec![if failed { palette::RED_BORDER } else { palette::TEAL_BORDER }],
            border_width: 1,
        },
        y_axis: Some(YAxis { begin_at_zero: true, max: Some(1.0) }),
    }
}

/// Line chart over all five readings in field order, one purple series.
pub fn readings_line(form: &FormState) -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Line,
        labels: reading_labels(),
        dataset: Dataset {
            label: Some("Values"),
            values: reading_values(form),
            fill_colors: vec![palette::PURPLE_FILL],
            border_colors: vec![palette::PURPLE_BORDER],
            border_width: 1,
        },
        y_axis: Some(YAxis { begin_at_zero: true, max: None }),
    }
}

/// Doughnut chart over all five readings, one palette color per slice.
pub fn readings_doughnut(form: &FormState) -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Doughnut,
        labels: reading_labels(),
        dataset: Dataset {
            label: None,
            values: reading_values(form),
            fill_colors: palette::SLICE_FILLS.to_vec(),
            border_colors: palette::SLICE_BORDERS.to_vec(),
            border_width: 1,
        },
        y_axis: None,
    }
}
