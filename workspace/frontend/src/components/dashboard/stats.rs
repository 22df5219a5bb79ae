use model::{FormState, PredictionResult, PredictionStatus};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub form: FormState,
    pub result: Option<PredictionResult>,
}

#[function_component(Stats)]
pub fn stats(props: &Props) -> Html {
    let (score_text, status_text, status_class) = match props.result {
        Some(result) => (
            format!("{:.1}", result.score),
            result.status.label(),
            match result.status {
                PredictionStatus::Success => "text-success",
                PredictionStatus::Failure => "text-error",
            },
        ),
        None => ("-".to_string(), "Not evaluated", "text-base-content"),
    };

    html! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
            <div class="stats shadow bg-base-100">
                <div class="stat">
                    <div class="stat-title">{"Prediction Score"}</div>
                    <div class="stat-value">{score_text}</div>
                    <div class="stat-desc">{"Latest draw, 0 to 100"}</div>
                </div>
            </div>
            <div class="stats shadow bg-base-100">
                <div class="stat">
                    <div class="stat-title">{"Turbine Status"}</div>
                    <div class={classes!("stat-value", status_class)}>{status_text}</div>
                </div>
            </div>
            <div class="stats shadow bg-base-100">
                <div class="stat">
                    <div class="stat-title">{"Readings Entered"}</div>
                    <div class="stat-value">{format!("{}/5", props.form.filled_count())}</div>
                </div>
            </div>
        </div>
    }
}
