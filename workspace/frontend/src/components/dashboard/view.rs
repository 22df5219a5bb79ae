use compute::chart;
use model::{FormState, PredictionResult, PredictionStatus, SensorField};
use yew::prelude::*;

use super::chart::ChartHost;
use super::form::SensorForm;
use super::stats::Stats;
use crate::common::toast::ToastContext;

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let form = use_state(FormState::default);
    let result = use_state(|| None::<PredictionResult>);
    let toast = use_context::<ToastContext>();

    let on_change = {
        let form = form.clone();
        Callback::from(move |(field, value): (SensorField, String)| {
            let mut next = (*form).clone();
            next.set(field, value);
            form.set(next);
        })
    };

    let on_predict = {
        let result = result.clone();
        let toast = toast.clone();
        Callback::from(move |_| {
            // Placeholder model: a uniform draw from [0, 100) stands in for
            // real inference.
            let score = js_sys::Math::random() * 100.0;
            let prediction = PredictionResult::from_score(score);
            log::info!(
                "prediction: score {:.2} -> {}",
                score,
                prediction.status.label()
            );

            if let Some(toast) = &toast {
                match prediction.status {
                    PredictionStatus::Success => {
                        toast.show_success(format!("Score {:.1}: turbine healthy", score))
                    }
                    PredictionStatus::Failure => {
                        toast.show_error(format!("Score {:.1}: failure predicted", score))
                    }
                }
            }

            result.set(Some(prediction));
        })
    };

    let status = (*result).map(|r| r.status);

    html! {
        <>
            <Stats form={(*form).clone()} result={*result} />
            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6 mt-6">
                <SensorForm
                    form={(*form).clone()}
                    on_change={on_change}
                    on_predict={on_predict}
                />
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title">{"Prediction Status"}</h2>
                        <ChartHost id="chart-status-bar" spec={chart::status_bar(status)} />
                    </div>
                </div>
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title">{"Reading Breakdown"}</h2>
                        <ChartHost id="chart-readings-doughnut" spec={chart::readings_doughnut(&form)} />
                    </div>
                </div>
            </div>
            <div class="card bg-base-100 shadow mt-6">
                <div class="card-body">
                    <h2 class="card-title">{"Readings"}</h2>
                    <ChartHost id="chart-readings-line" spec={chart::readings_line(&form)} />
                </div>
            </div>
        </>
    }
}
