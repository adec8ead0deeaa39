//! Martian Atmosphere Composition
//!
//! Pie chart of the gases in the Martian atmosphere. Three views (share of
//! the Martian atmosphere, share of Earth's, seasonal variation), a
//! minimum-percentage slider, a gas list and a detail panel for the selected
//! gas.
//!
//! Data flow:
//! 1. The gas table is embedded in `mars-atmo` and parsed once on mount.
//! 2. View buttons, the slider, the gas list and the pie arcs mutate the model
//!    in `AppState`. Arc hovers and clicks arrive from JS through
//!    `window.__marsSelectGas` and are applied by a coroutine.
//! 3. One effect re-renders the pie chart through `D3Sink` whenever the model
//!    changes; the gas list and detail panel are plain RSX reading the model.

use dioxus::prelude::*;
use futures::StreamExt;
use mars_atmo::composition::CompositionModel;
use mars_atmo::render::render_composition;
use mars_chart_ui::components::{
    ChartContainer, ChartHeader, ErrorDisplay, GasDetailPanel, GasList, LoadingSpinner,
    ThresholdSlider, ViewSelector,
};
use mars_chart_ui::js_bridge::{self, ChartIds, D3Sink};
use mars_chart_ui::state::AppState;

/// DOM id for the D3 pie chart container div.
const CHART_CONTAINER_ID: &str = "composition-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("atmosphere-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Gas selection from the pie chart ───
    let gas_selector = use_coroutine(move |mut names: UnboundedReceiver<String>| async move {
        while let Some(name) = names.next().await {
            state.select_gas(&name);
        }
    });

    // ─── Effect 1: Parse the gas table once on mount ───
    use_effect(move || {
        match CompositionModel::mars() {
            Ok(model) => {
                log::info!("Loaded {} gases", model.records().len());
                state.composition.set(Some(model));
            }
            Err(e) => {
                log::error!("Failed to parse gas table: {}", e);
                state
                    .error_msg
                    .set(Some(format!("Failed to load atmosphere data: {}", e)));
            }
        }
        state.loading.set(false);

        // Initialize D3 chart scripts and the arc selection callback (one-time)
        js_bridge::init_charts();
        js_bridge::register_gas_selector(move |name| gas_selector.send(name));
    });

    // ─── Effect 2: Re-render the pie chart on any model change ───
    use_effect(move || {
        if (state.loading)() {
            return;
        }
        if let Some(model) = &*state.composition.read() {
            let mut sink = D3Sink::new(ChartIds {
                composition: Some(CHART_CONTAINER_ID),
                ..ChartIds::default()
            });
            render_composition(model, &mut sink);
        }
    });

    let loaded = state.composition.read().is_some();

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 900px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }

            if *state.loading.read() {
                LoadingSpinner {}
            } else if loaded {
                ChartHeader {
                    title: "Martian Atmosphere Composition".to_string(),
                    unit: "Percent of atmospheric volume; seasonal view ranks variation Low / Medium / High".to_string(),
                }

                ViewSelector {}
                ThresholdSlider {}

                div {
                    style: "display: flex; gap: 16px; flex-wrap: wrap; align-items: flex-start;",
                    ChartContainer {
                        id: CHART_CONTAINER_ID.to_string(),
                        min_height: 400,
                        caption: "Hover or click an arc, or pick a gas from the list, for details.".to_string(),
                    }
                    div {
                        style: "flex: 1; min-width: 220px;",
                        GasList {}
                        GasDetailPanel {}
                    }
                }
            }
        }
    }
}
