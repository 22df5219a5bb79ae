use compute::{ChartSpec, ChartSurface};
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::plotly::PlotlyBackend;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: AttrValue,
    pub spec: ChartSpec,
    #[prop_or(300)]
    pub height: u32,
}

/// Mounts one chart surface on a div and rebuilds it whenever the spec
/// changes. The surface persists across renders; dropping it on unmount
/// releases the last live instance.
#[function_component(ChartHost)]
pub fn chart_host(props: &Props) -> Html {
    let container_ref = use_node_ref();
    let surface = use_mut_ref(|| None::<ChartSurface<PlotlyBackend>>);

    use_effect_with(
        (container_ref.clone(), props.id.clone(), props.spec.clone()),
        move |(container_ref, id, spec)| {
            if let Some(element) = container_ref.cast::<HtmlElement>() {
                element.set_id(id);

                let mut slot = surface.borrow_mut();
                let surface = slot
                    .get_or_insert_with(|| ChartSurface::new(PlotlyBackend, id.to_string()));
                if let Err(err) = surface.rebuild(spec) {
                    log::error!("chart #{} rebuild failed: {}", id, err);
                }
            }
            || ()
        },
    );

    html! {
        <div
            ref={container_ref}
            class="chart-container"
            style={format!("height: {}px; width: 100%;", props.height)}
        ></div>
    }
}
