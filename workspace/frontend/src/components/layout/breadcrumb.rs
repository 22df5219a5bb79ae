use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;

#[derive(Clone, PartialEq)]
struct BreadcrumbItem {
    label: String,
    route: Route,
}

fn trail(route: Route) -> Vec<BreadcrumbItem> {
    let home = BreadcrumbItem {
        label: "Home".to_string(),
        route: Route::Dashboard,
    };
    match route {
        Route::Home | Route::Dashboard => vec![home],
        Route::Settings => vec![
            home,
            BreadcrumbItem { label: "Settings".to_string(), route: Route::Settings },
        ],
        Route::About => vec![
            home,
            BreadcrumbItem { label: "About".to_string(), route: Route::About },
        ],
        Route::NotFound => vec![
            home,
            BreadcrumbItem { label: "404".to_string(), route: Route::NotFound },
        ],
    }
}

#[function_component(Breadcrumb)]
pub fn breadcrumb() -> Html {
    let location = use_location();

    let items = location
        .as_ref()
        .and_then(|loc| Route::recognize(loc.path()))
        .map(trail)
        .unwrap_or_else(|| trail(Route::Dashboard));

    html! {
        <div class="breadcrumbs text-sm px-6 py-2 bg-base-100">
            <ul>
                {for items.iter().enumerate().map(|(idx, item)| {
                    let is_last = idx == items.len() - 1;
                    html! {
                        <li>
                            if is_last {
                                <span class="text-primary font-semibold">{&item.label}</span>
                            } else {
                                <Link<Route> to={item.route.clone()} classes="hover:text-primary">
                                    {&item.label}
                                </Link<Route>>
                            }
                        </li>
                    }
                })}
            </ul>
        </div>
    }
}
