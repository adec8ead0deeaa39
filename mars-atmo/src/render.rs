//! Chart payloads and the sink that draws them.
//!
//! Rendering is a pure function from model state to `RenderSink` calls. The
//! browser apps implement the sink with D3.js; the CLI implements it by
//! printing; tests implement it by recording.

use crate::composition::{CompositionModel, ViewMode};
use crate::gas::SeasonalVariation;
use crate::timeline::LoadedTimeline;
use serde::Serialize;

/// One arc of the composition chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositionSlice {
    /// Gas name; what an arc click hands back for selection
    pub label: String,
    /// Arc and tooltip text, e.g. "Nitrogen: 2.7%"
    pub display_label: String,
    pub value: f64,
    pub color: String,
    pub selected: bool,
}

/// One bar of the temperature chart, in degrees Celsius.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemperaturePoint {
    pub sol: String,
    pub avg: f64,
    pub min: f64,
    pub max: f64,
}

/// A single averaged value per sol (wind speed in m/s, pressure in Pa).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AveragePoint {
    pub sol: String,
    pub avg: f64,
}

/// Everything the gas detail panel shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GasDetailView {
    pub name: String,
    pub formula: Option<String>,
    pub description: String,
    pub effects: String,
    pub seasonal_behavior: String,
    pub significance: String,
    pub value: f64,
    pub earth_value: f64,
    pub seasonal_variation: SeasonalVariation,
}

impl GasDetailView {
    /// Panel heading, e.g. "Carbon Dioxide (CO₂)"
    pub fn heading(&self) -> String {
        match &self.formula {
            Some(formula) => format!("{} ({})", self.name, formula),
            None => self.name.clone(),
        }
    }
}

/// Formatted temperature readings for the current-sol card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemperatureSummary {
    pub avg: String,
    pub min: String,
    pub max: String,
}

/// The current-sol card, already formatted for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolSummary {
    /// e.g. "Sol 678"
    pub sol_label: String,
    /// e.g. "October 22, 2020"
    pub earth_date: String,
    /// e.g. "Season: fall", or "Season: N/A"
    pub season: String,
    pub temperature: Option<TemperatureSummary>,
    pub wind: Option<String>,
    pub pressure: Option<String>,
    pub has_previous: bool,
    pub has_next: bool,
}

impl SolSummary {
    /// Shown in place of a reading the sol has no data for.
    pub const NOT_AVAILABLE: &'static str = "N/A";

    /// Temperature lines, with "N/A" placeholders when the sol has no `AT` group.
    pub fn temperature_or_na(&self) -> TemperatureSummary {
        self.temperature.clone().unwrap_or_else(|| TemperatureSummary {
            avg: Self::NOT_AVAILABLE.to_string(),
            min: format!("Min: {}", Self::NOT_AVAILABLE),
            max: format!("Max: {}", Self::NOT_AVAILABLE),
        })
    }

    pub fn wind_or_na(&self) -> &str {
        self.wind.as_deref().unwrap_or(Self::NOT_AVAILABLE)
    }

    pub fn pressure_or_na(&self) -> &str {
        self.pressure.as_deref().unwrap_or(Self::NOT_AVAILABLE)
    }
}

/// Receives derived chart data. Every method defaults to doing nothing so a
/// renderer only implements the charts it owns.
pub trait RenderSink {
    fn composition(&mut self, _view: ViewMode, _slices: &[CompositionSlice]) {}
    fn gas_detail(&mut self, _detail: &GasDetailView) {}
    fn sol_summary(&mut self, _summary: &SolSummary) {}
    fn temperature(&mut self, _points: &[TemperaturePoint]) {}
    fn wind(&mut self, _points: &[AveragePoint]) {}
    fn pressure(&mut self, _points: &[AveragePoint]) {}
}

/// Push the composition chart and, if something is selected, its detail panel.
pub fn render_composition<S: RenderSink + ?Sized>(model: &CompositionModel, sink: &mut S) {
    sink.composition(model.view(), &model.slices());
    if let Some(detail) = model.detail() {
        sink.gas_detail(&detail);
    }
}

/// Push the current-sol card and all three weather charts.
pub fn render_weather<S: RenderSink + ?Sized>(timeline: &LoadedTimeline, sink: &mut S) {
    sink.sol_summary(&timeline.summary());
    sink.temperature(&timeline.temperature_series());
    sink.wind(&timeline.wind_series());
    sink.pressure(&timeline.pressure_series());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gas::GasRecord;

    #[derive(Default)]
    struct RecordingSink {
        calls: Vec<String>,
        slices: Vec<CompositionSlice>,
        detail: Option<GasDetailView>,
        summary: Option<SolSummary>,
        wind: Vec<AveragePoint>,
    }

    impl RenderSink for RecordingSink {
        fn composition(&mut self, view: ViewMode, slices: &[CompositionSlice]) {
            self.calls.push(format!("composition:{}", view.slug()));
            self.slices = slices.to_vec();
        }
        fn gas_detail(&mut self, detail: &GasDetailView) {
            self.calls.push("detail".to_string());
            self.detail = Some(detail.clone());
        }
        fn sol_summary(&mut self, summary: &SolSummary) {
            self.calls.push("summary".to_string());
            self.summary = Some(summary.clone());
        }
        fn temperature(&mut self, _points: &[TemperaturePoint]) {
            self.calls.push("temperature".to_string());
        }
        fn wind(&mut self, points: &[AveragePoint]) {
            self.calls.push("wind".to_string());
            self.wind = points.to_vec();
        }
        fn pressure(&mut self, _points: &[AveragePoint]) {
            self.calls.push("pressure".to_string());
        }
    }

    #[test]
    fn test_render_composition_without_selection() {
        let model = CompositionModel::new(GasRecord::mars_atmosphere().unwrap());
        let mut sink = RecordingSink::default();
        render_composition(&model, &mut sink);
        assert_eq!(sink.calls, vec!["composition:composition"]);
        // Default threshold of 1% hides Oxygen and the trace gases
        assert_eq!(sink.slices.len(), 3);
        assert!(sink.detail.is_none());
    }

    #[test]
    fn test_render_composition_with_selection() {
        let mut model = CompositionModel::new(GasRecord::mars_atmosphere().unwrap());
        model.set_view(ViewMode::EarthComparison);
        assert!(model.select_by_name("Nitrogen"));
        let mut sink = RecordingSink::default();
        render_composition(&model, &mut sink);
        assert_eq!(sink.calls, vec!["composition:earth-comparison", "detail"]);
        let detail = sink.detail.unwrap();
        assert_eq!(detail.heading(), "Nitrogen (N₂)");
        assert_eq!(detail.earth_value, 78.0);
        assert_eq!(sink.slices[1].value, 78.0);
    }

    #[test]
    fn test_render_weather_order() {
        let payload = include_str!("../../fixtures/insight_weather.json");
        let timeline = LoadedTimeline::load(payload).unwrap();
        let mut sink = RecordingSink::default();
        render_weather(&timeline, &mut sink);
        assert_eq!(sink.calls, vec!["summary", "temperature", "wind", "pressure"]);
        let summary = sink.summary.unwrap();
        assert_eq!(summary.sol_label, "Sol 678");
        assert!(!summary.has_next);
        assert!(summary.has_previous);
        assert_eq!(sink.wind.len(), 3);
    }

    #[test]
    fn test_missing_readings_read_na() {
        let payload = include_str!("../../fixtures/insight_weather.json");
        let mut timeline = LoadedTimeline::load(payload).unwrap();
        let latest = timeline.summary();
        assert_eq!(latest.wind_or_na(), "8.1 m/s");
        assert_eq!(latest.temperature_or_na().min, "Min: -95.4°C");

        // Sol 677 has no temperature, 676 no wind
        timeline.previous();
        let no_temperature = timeline.summary().temperature_or_na();
        assert_eq!(no_temperature.avg, "N/A");
        assert_eq!(no_temperature.min, "Min: N/A");
        assert_eq!(no_temperature.max, "Max: N/A");
        timeline.previous();
        assert_eq!(timeline.summary().wind_or_na(), "N/A");
        assert!(timeline.summary().pressure_or_na().ends_with(" Pa"));
    }

    #[test]
    fn test_detail_json_is_camel_case() {
        let detail = GasDetailView {
            name: "Argon".to_string(),
            formula: Some("Ar".to_string()),
            description: String::new(),
            effects: String::new(),
            seasonal_behavior: "Constant".to_string(),
            significance: String::new(),
            value: 1.6,
            earth_value: 0.93,
            seasonal_variation: SeasonalVariation::Low,
        };
        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["seasonalBehavior"], "Constant");
        assert_eq!(json["earthValue"], 0.93);
        assert_eq!(json["seasonalVariation"], "Low");
    }
}
