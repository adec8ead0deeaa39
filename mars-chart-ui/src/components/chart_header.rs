//! Section header with a title and optional unit line.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    pub title: String,
    /// e.g. "°C, average with daily min/max"
    #[props(default = String::new())]
    pub unit: String,
}

#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 8px;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 16px;",
                "{props.title}"
            }
            if !props.unit.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; color: #666;",
                    "{props.unit}"
                }
            }
        }
    }
}
