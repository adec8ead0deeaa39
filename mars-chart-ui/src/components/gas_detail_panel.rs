//! Detail panel for the selected gas.

use crate::state::AppState;
use dioxus::prelude::*;
use mars_atmo::render::GasDetailView;
use mars_utils::units::format_percent;

/// Shows the selected gas, or a hint when nothing is selected.
#[component]
pub fn GasDetailPanel() -> Element {
    let state = use_context::<AppState>();
    match state.with_composition(|model| model.detail()).flatten() {
        Some(detail) => rsx! {
            GasDetailCard { detail }
        },
        None => rsx! {
            div {
                id: "gasInfo",
                style: "padding: 12px; color: #888; font-size: 13px;",
                "Select a gas to see its details."
            }
        },
    }
}

#[component]
fn GasDetailCard(detail: GasDetailView) -> Element {
    let heading = detail.heading();
    let value = format_percent(detail.value);
    let earth_value = format_percent(detail.earth_value);
    let variation = detail.seasonal_variation.as_str();

    rsx! {
        div {
            id: "gasInfo",
            style: "padding: 12px; border: 1px solid #e0e0e0; border-radius: 4px; font-size: 13px;",
            h3 { style: "margin: 0 0 8px 0;", "{heading}" }
            p { "{detail.description}" }
            p { strong { "Effects: " } "{detail.effects}" }
            p { strong { "Seasonal Behavior: " } "{detail.seasonal_behavior}" }
            p { strong { "Significance: " } "{detail.significance}" }
            p { strong { "Current Percentage: " } "{value}" }
            p { strong { "Earth Percentage: " } "{earth_value}" }
            p { strong { "Seasonal Variation: " } "{variation}" }
        }
    }
}
