use model::{FormState, SensorField};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub form: FormState,
    pub on_change: Callback<(SensorField, String)>,
    pub on_predict: Callback<()>,
}

/// The five reading inputs and the Predict button. Input is free-form text;
/// whatever the user types is committed as-is on every keystroke.
#[function_component(SensorForm)]
pub fn sensor_form(props: &Props) -> Html {
    let on_predict = {
        let on_predict = props.on_predict.clone();
        Callback::from(move |_| on_predict.emit(()))
    };

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">{"Turbine Readings"}</h2>

                {for SensorField::ALL.iter().map(|&field| {
                    let on_change = props.on_change.clone();
                    let oninput = Callback::from(move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        on_change.emit((field, input.value()));
                    });

                    html! {
                        <div class="form-control">
                            <label class="label"><span class="label-text">{field.label()}</span></label>
                            <input
                                type="text"
                                name={field.name()}
                                class="input input-bordered w-full"
                                value={props.form.value(field).to_string()}
                                {oninput}
                            />
                        </div>
                    }
                })}

                <div class="card-actions mt-4">
                    <button class="btn btn-primary w-full" onclick={on_predict}>
                        {"Predict"}
                    </button>
                </div>
            </div>
        </div>
    }
}
