//! Plotly-backed implementation of the chart backend contract. Talks to the
//! globally loaded Plotly bundle through `wasm_bindgen`.

use compute::chart::{ChartKind, ChartSpec};
use compute::{ChartBackend, ChartError, Result};
use serde_json::{Value, json};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);

    #[wasm_bindgen(js_namespace = Plotly)]
    fn purge(div_id: &str);
}

/// Draws into a target element by id; the id doubles as the instance handle,
/// which is what `Plotly.purge` keys on.
pub struct PlotlyBackend;

fn trace(spec: &ChartSpec) -> Value {
    match spec.kind {
        ChartKind::Bar => json!({
            "type": "bar",
            "name": spec.dataset.label,
            "x": spec.labels,
            "y": spec.dataset.values,
            "marker": {
                "color": spec.dataset.fill_colors,
                "line": {
                    "color": spec.dataset.border_colors,
                    "width": spec.dataset.border_width,
                },
            },
        }),
        ChartKind::Line => json!({
            "type": "scatter",
            "mode": "lines+markers",
            "name": spec.dataset.label,
            "x": spec.labels,
            "y": spec.dataset.values,
            "line": {
                "color": spec.dataset.border_colors.first(),
                "width": spec.dataset.border_width,
            },
            "marker": {"color": spec.dataset.border_colors.first()},
        }),
        ChartKind::Doughnut => json!({
            "type": "pie",
            "hole": 0.5,
            "labels": spec.labels,
            "values": spec.dataset.values,
            "sort": false,
            "marker": {
                "colors": spec.dataset.fill_colors,
                "line": {
                    "color": spec.dataset.border_colors,
                    "width": spec.dataset.border_width,
                },
            },
        }),
    }
}

fn layout(spec: &ChartSpec) -> Value {
    let mut layout = json!({
        "margin": {"t": 10, "r": 10, "l": 50, "b": 30},
        "paper_bgcolor": "rgba(0,0,0,0)",
        "plot_bgcolor": "rgba(0,0,0,0)",
    });
    if let Some(axis) = &spec.y_axis {
        layout["xaxis"] = json!({"showgrid": false});
        let mut y_axis = json!({"showgrid": true, "gridcolor": "#eee"});
        match axis.max {
            Some(max) => y_axis["range"] = json!([0.0, max]),
            None if axis.begin_at_zero => y_axis["rangemode"] = json!("tozero"),
            None => {}
        }
        layout["yaxis"] = y_axis;
    }
    layout
}

impl ChartBackend for PlotlyBackend {
    type Handle = String;

    fn construct(&self, target: &str, spec: &ChartSpec) -> Result<String> {
        let data = serde_wasm_bindgen::to_value(&json!([trace(spec)]))
            .map_err(|err| ChartError::Backend(err.to_string()))?;
        let layout = serde_wasm_bindgen::to_value(&layout(spec))
            .map_err(|err| ChartError::Backend(err.to_string()))?;
        let config = serde_wasm_bindgen::to_value(&json!({
            "responsive": true,
            "displayModeBar": false,
        }))
        .map_err(|err| ChartError::Backend(err.to_string()))?;

        newPlot(target, data, layout, config);
        Ok(target.to_string())
    }

    fn destroy(&self, handle: String) {
        // The node may already be gone when a surface drops on unmount.
        let node = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(&handle));
        if node.is_some() {
            purge(&handle);
        }
    }
}
