//! Clickable list of the gases the current threshold shows.

use crate::state::AppState;
use dioxus::prelude::*;

/// Gas list with color swatches. Clicking a gas selects it for the detail panel.
#[component]
pub fn GasList() -> Element {
    let mut state = use_context::<AppState>();
    let gases: Vec<(String, String, bool)> = state
        .with_composition(|model| {
            model
                .filtered_records()
                .into_iter()
                .map(|gas| (gas.name.clone(), gas.color.clone(), model.is_selected(gas)))
                .collect()
        })
        .unwrap_or_default();

    rsx! {
        div {
            class: "gas-list",
            style: "display: flex; flex-direction: column; gap: 4px; margin: 8px 0;",
            if gases.is_empty() {
                p {
                    style: "color: #888; font-size: 12px;",
                    "No gases above the current threshold."
                }
            }
            for (name, color, selected) in gases {
                div {
                    key: "{name}",
                    class: if selected { "gas-item selected" } else { "gas-item" },
                    style: if selected { "display: flex; align-items: center; gap: 8px; cursor: pointer; font-weight: bold;" } else { "display: flex; align-items: center; gap: 8px; cursor: pointer;" },
                    onclick: {
                        let name = name.clone();
                        move |_| state.update_composition(|model| {
                            model.select_by_name(&name);
                        })
                    },
                    span {
                        class: "gas-color",
                        style: "display: inline-block; width: 12px; height: 12px; border-radius: 2px; background-color: {color};",
                    }
                    span {
                        class: "gas-name",
                        "{name}"
                    }
                }
            }
        }
    }
}
