use log::Level;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::common::toast::ToastContext;
use crate::settings;

const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

fn parse_level(value: &str) -> Level {
    match value {
        "error" => Level::Error,
        "warn" => Level::Warn,
        "debug" => Level::Debug,
        "trace" => Level::Trace,
        _ => Level::Info,
    }
}

#[function_component(Settings)]
pub fn settings_page() -> Html {
    let current = settings::get_settings();
    let toast = use_context::<ToastContext>();

    let log_level = use_state(|| format!("{:?}", current.log_level).to_lowercase());
    let toast_duration = use_state(|| current.toast_duration_ms.to_string());

    let on_level_change = {
        let log_level = log_level.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            log_level.set(select.value());
        })
    };

    let on_duration_input = {
        let toast_duration = toast_duration.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            toast_duration.set(input.value());
        })
    };

    let on_save = {
        let log_level = log_level.clone();
        let toast_duration = toast_duration.clone();
        let toast = toast.clone();
        Callback::from(move |_| {
            let level = parse_level(&log_level);
            let duration = toast_duration.parse::<u32>().unwrap_or(5000);

            settings::update_settings(|s| {
                s.log_level = level;
                s.toast_duration_ms = duration;
            });

            match settings::get_settings().save_to_storage() {
                Ok(()) => {
                    log::info!("settings saved: level {:?}, toast {}ms", level, duration);
                    if let Some(toast) = &toast {
                        toast.show_success("Settings saved. Log level applies after reload.");
                    }
                }
                Err(err) => {
                    log::error!("failed to persist settings: {:?}", err);
                    if let Some(toast) = &toast {
                        toast.show_error("Could not persist settings");
                    }
                }
            }
        })
    };

    html! {
        <div class="card bg-base-100 shadow max-w-2xl">
            <div class="card-body space-y-4">
                <h2 class="card-title">{"Application Settings"}</h2>

                <div class="form-control">
                    <label class="label"><span class="label-text">{"Log Level"}</span></label>
                    <select class="select select-bordered w-full" onchange={on_level_change}>
                        {for LEVELS.iter().map(|&level| html! {
                            <option value={level} selected={*log_level == level}>{level}</option>
                        })}
                    </select>
                </div>

                <div class="form-control">
                    <label class="label"><span class="label-text">{"Toast Duration (ms)"}</span></label>
                    <input
                        type="number"
                        class="input input-bordered w-full"
                        value={(*toast_duration).clone()}
                        oninput={on_duration_input}
                    />
                </div>

                <div class="card-actions justify-end">
                    <button class="btn btn-primary" onclick={on_save}>{"Save"}</button>
                </div>

                {if current.debug_mode {
                    html! { <p class="text-sm text-gray-500">{"Debug mode active (local host detected)."}</p> }
                } else {
                    html! {}
                }}
            </div>
        </div>
    }
}
