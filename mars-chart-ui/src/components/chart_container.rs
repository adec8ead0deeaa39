//! Chart container component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// DOM id D3 renders into
    pub id: String,
    /// Minimum height in pixels, reserved so the page doesn't jump while D3 loads
    #[props(default = 220)]
    pub min_height: u32,
    /// Optional caption under the chart
    #[props(default = String::new())]
    pub caption: String,
}

/// A sized div for a D3.js chart, with an optional caption.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; display: flex; flex-direction: column; align-items: center;",
        props.min_height
    );

    rsx! {
        div {
            style: "{style}",
            div {
                id: "{props.id}",
            }
            if !props.caption.is_empty() {
                p {
                    style: "font-size: 11px; color: #888; margin: 4px 0 0 0;",
                    "{props.caption}"
                }
            }
        }
    }
}
