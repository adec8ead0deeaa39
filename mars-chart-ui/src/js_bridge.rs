//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js chart functions live in `assets/js/*.js`, are embedded at compile time
//! and evaluated as globals once D3 has loaded. `D3Sink` turns the core's
//! `RenderSink` calls into calls to those globals.

use mars_atmo::composition::ViewMode;
use mars_atmo::render::{AveragePoint, CompositionSlice, RenderSink, TemperaturePoint};
use serde::Serialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;

static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static PIE_CHART_JS: &str = include_str!("../assets/js/pie-chart.js");
static TEMPERATURE_CHART_JS: &str = include_str!("../assets/js/temperature-chart.js");
static SOL_LINE_CHART_JS: &str = include_str!("../assets/js/sol-line-chart.js");

/// Globals the chart scripts define; promoted to `window.*` after evaluation.
const CHART_FUNCTIONS: [&str; 6] = [
    "renderPieChart",
    "renderTemperatureChart",
    "renderSolLineChart",
    "initTooltip",
    "showTooltip",
    "hideTooltip",
];

/// `window` property the pie chart calls with a gas name on hover or click.
pub const GAS_SELECT_CALLBACK: &str = "__marsSelectGas";

/// Polls run every 100 ms; give up after 30 s.
const POLL_INTERVAL_MS: u32 = 100;
const MAX_POLLS: u32 = 300;

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Mars JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize chart scripts with a wait-for-D3 polling loop. Call once at app startup.
///
/// The scripts are stashed on `window` and evaluated at global scope with an
/// indirect eval from inside the polling callback, so their `function`
/// declarations don't end up block-scoped.
pub fn init_charts() {
    let all_js = [
        TOOLTIP_JS,
        PIE_CHART_JS,
        TEMPERATURE_CHART_JS,
        SOL_LINE_CHART_JS,
    ]
    .join("\n");

    let store_js = format!(
        "window.__marsChartScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let promote: String = CHART_FUNCTIONS
        .iter()
        .map(|name| format!("if (typeof {0} !== 'undefined') window.{0} = {0};", name))
        .collect::<Vec<_>>()
        .join("\n");

    let _ = js_sys::eval(&init_script(&promote));
}

fn init_script(promote: &str) -> String {
    format!(
        r#"
        (function() {{
            var attempts = 0;
            var waitForD3 = setInterval(function() {{
                if (typeof d3 !== 'undefined') {{
                    clearInterval(waitForD3);
                    (0, eval)(window.__marsChartScripts);
                    delete window.__marsChartScripts;
                    {promote}
                    window.__marsChartsReady = true;
                    console.log('Mars charts initialized');
                }} else if (++attempts >= {MAX_POLLS}) {{
                    clearInterval(waitForD3);
                    console.error('[Mars] D3 never loaded, charts disabled');
                }}
            }}, {POLL_INTERVAL_MS});
        }})();
        "#
    )
}

/// Expose `on_select` to the pie chart as `window.__marsSelectGas(name)`.
///
/// The closure lives for the rest of the page. It runs outside the Dioxus
/// runtime, so it should only hand the name off (e.g. to a coroutine).
pub fn register_gas_selector(on_select: impl FnMut(String) + 'static) {
    let Some(window) = web_sys::window() else {
        log::warn!("No window; pie chart selection disabled");
        return;
    };
    let closure = Closure::wrap(Box::new(on_select) as Box<dyn FnMut(String)>);
    if js_sys::Reflect::set(
        &window,
        &JsValue::from_str(GAS_SELECT_CALLBACK),
        closure.as_ref(),
    )
    .is_err()
    {
        log::warn!("Could not register {}", GAS_SELECT_CALLBACK);
    }
    closure.forget();
}

/// Escape a JSON document for embedding in a single-quoted JS string literal.
fn escape_for_js(json: &str) -> String {
    json.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "")
}

/// Call `window.<function>(container_id, data, config)` once the charts are
/// initialized and the container exists in the DOM.
///
/// Gives up with a console warning if that never happens, so a container that
/// is not mounted does not leave an interval running.
fn render_when_ready(function: &str, container_id: &str, data_json: &str, config_json: &str) {
    call_js(&ready_script(function, container_id, data_json, config_json));
}

fn ready_script(function: &str, container_id: &str, data_json: &str, config_json: &str) -> String {
    let data = escape_for_js(data_json);
    let config = escape_for_js(config_json);
    format!(
        r#"
        (function() {{
            var attempts = 0;
            var poll = setInterval(function() {{
                if (window.__marsChartsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.{function}('{container_id}', '{data}', '{config}');
                    }} catch(e) {{ console.error('[Mars] {function} error:', e); }}
                }} else if (++attempts >= {MAX_POLLS}) {{
                    clearInterval(poll);
                    console.warn('[Mars] gave up waiting for #{container_id}');
                }}
            }}, {POLL_INTERVAL_MS});
        }})();
        "#,
    )
}

/// Render the composition pie chart.
pub fn render_pie_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderPieChart", container_id, data_json, config_json);
}

/// Render the temperature bar chart with min/max whiskers.
pub fn render_temperature_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderTemperatureChart", container_id, data_json, config_json);
}

/// Render a per-sol line chart (wind speed, pressure).
pub fn render_sol_line_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderSolLineChart", container_id, data_json, config_json);
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        log::error!("Failed to serialize chart data: {}", e);
        "[]".to_string()
    })
}

/// DOM ids of the chart containers a page provides.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartIds {
    pub composition: Option<&'static str>,
    pub temperature: Option<&'static str>,
    pub wind: Option<&'static str>,
    pub pressure: Option<&'static str>,
}

/// `RenderSink` that draws with the embedded D3 scripts.
///
/// Charts without a container id are skipped. `current_sol` highlights the
/// cursor's sol in the weather charts.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct D3Sink {
    pub ids: ChartIds,
    pub current_sol: Option<String>,
}

impl D3Sink {
    pub fn new(ids: ChartIds) -> Self {
        Self {
            ids,
            current_sol: None,
        }
    }

    pub fn with_current_sol(mut self, sol: impl Into<String>) -> Self {
        self.current_sol = Some(sol.into());
        self
    }

    fn line_chart(&self, container_id: &str, points: &[AveragePoint], config: serde_json::Value) {
        render_sol_line_chart(container_id, &to_json(points), &config.to_string());
    }
}

fn pie_config(view: ViewMode) -> serde_json::Value {
    serde_json::json!({
        "title": view.label(),
        "size": 400,
        "selectCallback": GAS_SELECT_CALLBACK,
    })
}

impl RenderSink for D3Sink {
    fn composition(&mut self, view: ViewMode, slices: &[CompositionSlice]) {
        let Some(id) = self.ids.composition else {
            return;
        };
        render_pie_chart(id, &to_json(slices), &pie_config(view).to_string());
    }

    fn temperature(&mut self, points: &[TemperaturePoint]) {
        let Some(id) = self.ids.temperature else {
            return;
        };
        let config = serde_json::json!({
            "currentSol": self.current_sol,
            "color": "#ff6b6b",
        });
        render_temperature_chart(id, &to_json(points), &config.to_string());
    }

    fn wind(&mut self, points: &[AveragePoint]) {
        let Some(id) = self.ids.wind else {
            return;
        };
        let config = serde_json::json!({
            "title": "Wind Speed",
            "unit": "m/s",
            "decimals": 1,
            "color": "#4ecdc4",
            "fromZero": true,
            "currentSol": self.current_sol,
        });
        self.line_chart(id, points, config);
    }

    fn pressure(&mut self, points: &[AveragePoint]) {
        let Some(id) = self.ids.pressure else {
            return;
        };
        let config = serde_json::json!({
            "title": "Pressure",
            "unit": "Pa",
            "decimals": 0,
            "color": "#ff6b6b",
            "padding": 10,
            "currentSol": self.current_sol,
        });
        self.line_chart(id, points, config);
    }
}
