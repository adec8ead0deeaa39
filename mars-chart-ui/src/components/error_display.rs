//! Persistent error panel.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    #[props(default = "Error".to_string())]
    pub title: String,
    pub message: String,
}

/// Error box. Nothing dismisses it; the page stays in its error state.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            role: "alert",
            style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            strong { "{props.title}: " }
            "{props.message}"
        }
    }
}
