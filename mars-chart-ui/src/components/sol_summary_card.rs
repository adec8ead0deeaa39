//! Current-sol card: date, season and the day's readings.

use dioxus::prelude::*;
use mars_atmo::render::SolSummary;

const CARD_STYLE: &str = "flex: 1; padding: 8px 12px; border: 1px solid #e0e0e0; border-radius: 4px;";

#[component]
pub fn SolSummaryCard(summary: SolSummary) -> Element {
    let temperature = summary.temperature_or_na();
    let wind = summary.wind_or_na();
    let pressure = summary.pressure_or_na();

    rsx! {
        div {
            class: "current-sol",
            style: "margin: 8px 0;",
            h3 { id: "current-sol", style: "margin: 0;", "{summary.sol_label}" }
            p { id: "current-earth-date", style: "margin: 2px 0; color: #666;", "{summary.earth_date}" }
            p { id: "current-season", style: "margin: 2px 0; color: #666;", "{summary.season}" }
            div {
                style: "display: flex; gap: 8px; margin-top: 8px;",
                div {
                    style: CARD_STYLE,
                    h4 { style: "margin: 0 0 4px 0;", "Temperature" }
                    p { id: "avg-temp", style: "margin: 0; font-size: 20px;", "{temperature.avg}" }
                    p { id: "min-temp", style: "margin: 0; font-size: 12px;", "{temperature.min}" }
                    p { id: "max-temp", style: "margin: 0; font-size: 12px;", "{temperature.max}" }
                }
                div {
                    style: CARD_STYLE,
                    h4 { style: "margin: 0 0 4px 0;", "Wind Speed" }
                    p { id: "wind-speed", style: "margin: 0; font-size: 20px;", "{wind}" }
                }
                div {
                    style: CARD_STYLE,
                    h4 { style: "margin: 0 0 4px 0;", "Pressure" }
                    p { id: "pressure", style: "margin: 0; font-size: 20px;", "{pressure}" }
                }
            }
        }
    }
}
