//! Minimum-percentage slider for the composition chart.

use crate::state::AppState;
use dioxus::prelude::*;
use mars_atmo::composition::{DEFAULT_THRESHOLD, THRESHOLD_MAX, THRESHOLD_MIN, THRESHOLD_STEP};
use mars_utils::units::format_percent;

/// Range input bound to the composition threshold. Gases at or below the
/// threshold are hidden from the chart and the gas list.
#[component]
pub fn ThresholdSlider() -> Element {
    let mut state = use_context::<AppState>();
    let threshold = state
        .with_composition(|model| model.threshold())
        .unwrap_or(DEFAULT_THRESHOLD);
    let shown = format_percent(threshold);

    let on_input = move |evt: Event<FormData>| {
        let raw = evt.value();
        match raw.parse::<f64>() {
            Ok(value) => state.update_composition(|model| {
                model.set_threshold(value.clamp(THRESHOLD_MIN, THRESHOLD_MAX))
            }),
            Err(e) => log::warn!("Ignoring threshold input {:?}: {}", raw, e),
        }
    };

    rsx! {
        div {
            class: "filter-control",
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
            label {
                r#for: "threshold-input",
                style: "font-weight: bold;",
                "Show gases above: "
            }
            span {
                class: "filter-value",
                style: "min-width: 48px;",
                "{shown}"
            }
            input {
                id: "threshold-input",
                r#type: "range",
                min: "{THRESHOLD_MIN}",
                max: "{THRESHOLD_MAX}",
                step: "{THRESHOLD_STEP}",
                value: "{threshold}",
                oninput: on_input,
            }
        }
    }
}
