//! End-to-end flow over the chart layer: edit readings, run predictions with
//! mocked draws, and watch each surface rebuild against an instrumented
//! backend.

use compute::chart::{palette, readings_doughnut, readings_line, status_bar};
use compute::{ChartBackend, ChartSpec, ChartSurface, Result};
use model::{FormState, PredictionResult, SensorField};
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Default)]
struct RecordingBackend {
    constructed: Rc<RefCell<usize>>,
    destroyed: Rc<RefCell<usize>>,
    last_spec: Rc<RefCell<Option<ChartSpec>>>,
}

impl RecordingBackend {
    fn live(&self) -> usize {
        *self.constructed.borrow() - *self.destroyed.borrow()
    }
}

impl ChartBackend for RecordingBackend {
    type Handle = ();

    fn construct(&self, _target: &str, spec: &ChartSpec) -> Result<()> {
        *self.constructed.borrow_mut() += 1;
        *self.last_spec.borrow_mut() = Some(spec.clone());
        Ok(())
    }

    fn destroy(&self, _handle: ()) {
        *self.destroyed.borrow_mut() += 1;
    }
}

#[test]
fn test_full_dashboard_session() {
    let bar_backend = RecordingBackend::default();
    let line_backend = RecordingBackend::default();
    let doughnut_backend = RecordingBackend::default();

    let mut bar = ChartSurface::new(bar_backend.clone(), "chart-status-bar");
    let mut line = ChartSurface::new(line_backend.clone(), "chart-readings-line");
    let mut doughnut = ChartSurface::new(doughnut_backend.clone(), "chart-readings-doughnut");

    let mut form = FormState::default();
    let mut result: Option<PredictionResult> = None;

    // Initial render: all three surfaces come up, bar with a null datum.
    bar.rebuild(&status_bar(result.map(|r| r.status))).unwrap();
    line.rebuild(&readings_line(&form)).unwrap();
    doughnut.rebuild(&readings_doughnut(&form)).unwrap();

    assert_eq!(
        bar_backend.last_spec.borrow().as_ref().unwrap().dataset.values,
        vec![serde_json::Value::Null]
    );

    // Enter the five readings; each edit rebuilds line and doughnut only.
    let edits = [
        (SensorField::WindSpeed, "5.2"),
        (SensorField::TheoreticalPowerCurve, "400"),
        (SensorField::WindDirection, "270"),
        (SensorField::LvActivePower, "380"),
        (SensorField::PowerDeficit, "20"),
    ];
    for (field, value) in edits {
        form.set(field, value.to_string());
        line.rebuild(&readings_line(&form)).unwrap();
        doughnut.rebuild(&readings_doughnut(&form)).unwrap();
        assert_eq!(line_backend.live(), 1);
        assert_eq!(doughnut_backend.live(), 1);
    }
    assert_eq!(bar_backend.live(), 1);
    assert_eq!(*bar_backend.constructed.borrow(), 1);

    let expected_values =
        vec![json!("5.2"), json!("400"), json!("270"), json!("380"), json!("20")];
    assert_eq!(
        line_backend.last_spec.borrow().as_ref().unwrap().dataset.values,
        expected_values
    );
    assert_eq!(
        doughnut_backend.last_spec.borrow().as_ref().unwrap().dataset.values,
        expected_values
    );

    // Predict with a mocked draw of 73: failure, bar shows 0 in red.
    result = Some(PredictionResult::from_score(73.0));
    bar.rebuild(&status_bar(result.map(|r| r.status))).unwrap();

    {
        let spec = bar_backend.last_spec.borrow();
        let spec = spec.as_ref().unwrap();
        assert_eq!(spec.dataset.values, vec![json!(0)]);
        assert_eq!(spec.dataset.fill_colors, vec![palette::RED_FILL]);
    }

    // Predict again with a mocked draw of 12: success replaces the failure.
    result = Some(PredictionResult::from_score(12.0));
    bar.rebuild(&status_bar(result.map(|r| r.status))).unwrap();

    {
        let spec = bar_backend.last_spec.borrow();
        let spec = spec.as_ref().unwrap();
        assert_eq!(spec.dataset.values, vec![json!(1)]);
        assert_eq!(spec.dataset.fill_colors, vec![palette::TEAL_FILL]);
    }

    // Still exactly one live instance per surface after the whole session.
    assert_eq!(bar_backend.live(), 1);
    assert_eq!(line_backend.live(), 1);
    assert_eq!(doughnut_backend.live(), 1);

    // Teardown releases everything.
    bar.teardown();
    line.teardown();
    doughnut.teardown();
    assert_eq!(bar_backend.live(), 0);
    assert_eq!(line_backend.live(), 0);
    assert_eq!(doughnut_backend.live(), 0);
}
