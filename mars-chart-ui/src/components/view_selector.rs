//! View mode buttons for the composition chart.

use crate::state::AppState;
use dioxus::prelude::*;
use mars_atmo::composition::ViewMode;

const BUTTON_STYLE: &str = "padding: 6px 12px; border: 1px solid #c1440e; border-radius: 4px; background: white; color: #c1440e; cursor: pointer;";
const ACTIVE_STYLE: &str = "padding: 6px 12px; border: 1px solid #c1440e; border-radius: 4px; background: #c1440e; color: white; cursor: pointer;";

/// One button per view mode; the active view is highlighted.
#[component]
pub fn ViewSelector() -> Element {
    let mut state = use_context::<AppState>();
    let current = state.with_composition(|model| model.view()).unwrap_or_default();
    let buttons: Vec<(ViewMode, &'static str, &'static str, bool)> = ViewMode::ALL
        .into_iter()
        .map(|mode| (mode, mode.slug(), mode.label(), mode == current))
        .collect();

    rsx! {
        div {
            class: "view-controls",
            style: "margin: 8px 0; display: flex; gap: 8px;",
            for (mode, slug, label, active) in buttons {
                button {
                    key: "{slug}",
                    class: if active { "active" } else { "" },
                    style: if active { ACTIVE_STYLE } else { BUTTON_STYLE },
                    onclick: move |_| state.update_composition(|model| model.set_view(mode)),
                    "{label}"
                }
            }
        }
    }
}
