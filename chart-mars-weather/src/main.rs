//! Mars Weather
//!
//! Daily weather from NASA's InSight lander: a current-sol card, previous/next
//! sol navigation, and temperature, wind speed and pressure charts over the
//! whole feed with the current sol highlighted.
//!
//! Data flow:
//! 1. On mount, one request to the InSight feed settles `AppState::weather`
//!    as `Loaded` or `Failed`. There is no retry; a failure stays on screen.
//! 2. The sol navigator moves the timeline cursor.
//! 3. One effect re-renders all three charts through `D3Sink` whenever the
//!    timeline changes; the current-sol card is plain RSX.

use dioxus::prelude::*;
use mars_atmo::feed::FeedConfig;
use mars_atmo::render::render_weather;
use mars_atmo::timeline::{LoadedTimeline, WeatherTimeline};
use mars_chart_ui::components::{
    ChartContainer, ChartHeader, ErrorDisplay, LoadingSpinner, SolNavigator, SolSummaryCard,
};
use mars_chart_ui::fetch;
use mars_chart_ui::js_bridge::{self, ChartIds, D3Sink};
use mars_chart_ui::state::AppState;

const TEMPERATURE_CHART_ID: &str = "temp-chart";
const WIND_CHART_ID: &str = "wind-speed-chart";
const PRESSURE_CHART_ID: &str = "pressure-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("mars-weather-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Effect 1: Fetch the feed once on mount ───
    use_effect(move || {
        js_bridge::init_charts();

        spawn(async move {
            let config = FeedConfig::default();
            let result = fetch::fetch_feed(&config).await;
            WeatherTimeline::resolve(&mut state.weather.write(), result);

            let error = state.weather.read().error().map(|e| e.to_string());
            if error.is_some() {
                state.error_msg.set(error);
            }
            state.loading.set(false);
        });
    });

    // ─── Effect 2: Re-render all charts when the timeline changes ───
    use_effect(move || {
        let weather = state.weather.read();
        let Some(timeline) = weather.loaded() else {
            return;
        };
        let mut sink = D3Sink::new(ChartIds {
            temperature: Some(TEMPERATURE_CHART_ID),
            wind: Some(WIND_CHART_ID),
            pressure: Some(PRESSURE_CHART_ID),
            ..ChartIds::default()
        })
        .with_current_sol(timeline.current().sol.clone());
        render_weather(timeline, &mut sink);
    });

    let summary = state.weather.read().loaded().map(LoadedTimeline::summary);

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 960px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            ChartHeader {
                title: "Mars Weather".to_string(),
                unit: "Daily readings from NASA's InSight lander at Elysium Planitia".to_string(),
            }

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay {
                    title: "Weather data unavailable".to_string(),
                    message: err.clone(),
                }
            }

            if *state.loading.read() {
                LoadingSpinner { message: "Fetching Mars weather...".to_string() }
            }

            if let Some(summary) = summary {
                div {
                    id: "weather-dashboard",
                    SolSummaryCard { summary }
                    SolNavigator {}

                    div {
                        style: "display: flex; gap: 12px; flex-wrap: wrap; justify-content: center;",
                        div {
                            ChartHeader {
                                title: "Temperature".to_string(),
                                unit: "°C, daily average with min/max range".to_string(),
                            }
                            ChartContainer { id: TEMPERATURE_CHART_ID.to_string() }
                        }
                        div {
                            ChartHeader {
                                title: "Wind Speed".to_string(),
                                unit: "m/s, daily average".to_string(),
                            }
                            ChartContainer { id: WIND_CHART_ID.to_string() }
                        }
                        div {
                            ChartHeader {
                                title: "Pressure".to_string(),
                                unit: "Pa, daily average".to_string(),
                            }
                            ChartContainer { id: PRESSURE_CHART_ID.to_string() }
                        }
                    }
                }
            }
        }
    }
}
