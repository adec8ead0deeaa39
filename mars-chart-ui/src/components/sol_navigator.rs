//! Previous/next sol buttons.

use crate::state::AppState;
use dioxus::prelude::*;

/// The only controls that move the sol cursor. Buttons are disabled at the
/// ends of the series.
#[component]
pub fn SolNavigator() -> Element {
    let mut state = use_context::<AppState>();
    let (has_previous, has_next, position, count) = match state.weather.read().loaded() {
        Some(timeline) => (
            timeline.has_previous(),
            timeline.has_next(),
            timeline.position() + 1,
            timeline.len(),
        ),
        None => (false, false, 0, 0),
    };

    rsx! {
        div {
            class: "sol-navigation",
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center; justify-content: center;",
            button {
                id: "prev-sol",
                disabled: !has_previous,
                onclick: move |_| {
                    state.previous_sol();
                },
                "◀ Previous Sol"
            }
            span {
                style: "font-size: 12px; color: #666;",
                "{position} / {count}"
            }
            button {
                id: "next-sol",
                disabled: !has_next,
                onclick: move |_| {
                    state.next_sol();
                },
                "Next Sol ▶"
            }
        }
    }
}
