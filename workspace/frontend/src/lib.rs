use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod plotly;
pub mod common;
pub mod settings;

use common::toast::ToastProvider;
use components::dashboard::Dashboard;
use components::layout::layout::Layout;
use components::settings::Settings;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/dashboard")]
    Dashboard,
    #[at("/settings")]
    Settings,
    #[at("/about")]
    About,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Home | Route::Dashboard => {
            html! { <Layout title="Dashboard"><Dashboard /></Layout> }
        }
        Route::Settings => {
            html! { <Layout title="Settings"><Settings /></Layout> }
        }
        Route::About => {
            html! {
                <Layout title="About">
                    <div class="card bg-base-100 shadow">
                        <div class="card-body">
                            <h2 class="card-title">{"Windrust"}</h2>
                            <p>{"A wind turbine readings dashboard. Enter the five sensor \
                                readings, press Predict, and the charts reflect the inputs \
                                and the predicted turbine condition."}</p>
                            <p class="text-sm text-gray-500">{"The prediction itself is a \
                                placeholder draw, not a trained model."}</p>
                        </div>
                    </div>
                </Layout>
            }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! { <Layout title="404"><h1>{"404 Not Found"}</h1></Layout> }
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ToastProvider>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ToastProvider>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first so the logger picks up the configured level
    settings::init_settings();

    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Windrust Dashboard Starting ===");
    log::debug!("Application settings: {:?}", settings);

    yew::Renderer::<App>::new().render();
}
