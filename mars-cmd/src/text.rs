//! Plain-text rendering of chart payloads for the terminal.

use mars_atmo::composition::ViewMode;
use mars_atmo::render::{
    AveragePoint, CompositionSlice, GasDetailView, RenderSink, SolSummary, TemperaturePoint,
};
use mars_atmo::timeline::Measurement;
use mars_utils::units;

/// Marker printed next to the highlighted sol in each series.
const CURRENT_MARKER: &str = " <";

/// A `RenderSink` that accumulates a text report.
#[derive(Debug, Default)]
pub struct TextSink {
    pub output: String,
    /// Sol to mark in the series tables
    pub current_sol: Option<String>,
}

impl TextSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_current_sol(mut self, sol: impl Into<String>) -> Self {
        self.current_sol = Some(sol.into());
        self
    }

    fn marker(&self, sol: &str) -> &'static str {
        if self.current_sol.as_deref() == Some(sol) {
            CURRENT_MARKER
        } else {
            ""
        }
    }

    fn line(&mut self, text: impl AsRef<str>) {
        self.output.push_str(text.as_ref());
        self.output.push('\n');
    }

    fn average_series(&mut self, kind: Measurement, points: &[AveragePoint], decimals: usize) {
        self.line(format!("{} ({})", kind.title(), kind.unit()));
        if points.is_empty() {
            self.line("  no readings");
            return;
        }
        for point in points {
            let marker = self.marker(&point.sol);
            self.line(format!(
                "  Sol {:>5}  {:>9.*}{}",
                point.sol, decimals, point.avg, marker
            ));
        }
    }
}

impl RenderSink for TextSink {
    fn composition(&mut self, view: ViewMode, slices: &[CompositionSlice]) {
        self.line(format!("Martian Atmosphere Composition: {}", view.label()));
        if slices.is_empty() {
            self.line("  no gases above the threshold");
            return;
        }
        let width = slices
            .iter()
            .map(|s| s.display_label.chars().count())
            .max()
            .unwrap_or(0);
        for slice in slices {
            let marker = if slice.selected { " *" } else { "" };
            self.line(format!(
                "  {:<width$}  {}{}",
                slice.display_label,
                slice.color,
                marker,
                width = width
            ));
        }
    }

    fn gas_detail(&mut self, detail: &GasDetailView) {
        self.line("");
        self.line(detail.heading());
        self.line(format!("  {}", detail.description));
        self.line(format!(
            "  Mars: {}  Earth: {}  Seasonal variation: {}",
            units::format_percent(detail.value),
            units::format_percent(detail.earth_value),
            detail.seasonal_variation
        ));
        self.line(format!("  Effects: {}", detail.effects));
        self.line(format!("  Seasonal behavior: {}", detail.seasonal_behavior));
        self.line(format!("  Significance: {}", detail.significance));
    }

    fn sol_summary(&mut self, summary: &SolSummary) {
        self.line(format!("{} ({})", summary.sol_label, summary.earth_date));
        self.line(format!("  {}", summary.season));
        let t = summary.temperature_or_na();
        self.line(format!("  Temperature: {}  {}  {}", t.avg, t.min, t.max));
        self.line(format!("  Wind speed: {}", summary.wind_or_na()));
        self.line(format!("  Pressure: {}", summary.pressure_or_na()));
        let mut nav = String::new();
        if summary.has_previous {
            nav.push_str("[previous] ");
        }
        if summary.has_next {
            nav.push_str("[next]");
        }
        if !nav.is_empty() {
            self.line(format!("  {}", nav.trim_end()));
        }
        self.line("");
    }

    fn temperature(&mut self, points: &[TemperaturePoint]) {
        let kind = Measurement::Temperature;
        self.line(format!("{} ({})", kind.title(), kind.unit()));
        if points.is_empty() {
            self.line("  no readings");
            return;
        }
        for point in points {
            let marker = self.marker(&point.sol);
            self.line(format!(
                "  Sol {:>5}  avg {:>7.1}  min {:>7.1}  max {:>7.1}{}",
                point.sol, point.avg, point.min, point.max, marker
            ));
        }
    }

    fn wind(&mut self, points: &[AveragePoint]) {
        self.average_series(Measurement::Wind, points, 1);
    }

    fn pressure(&mut self, points: &[AveragePoint]) {
        self.average_series(Measurement::Pressure, points, 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slice(label: &str, display_label: &str, selected: bool) -> CompositionSlice {
        CompositionSlice {
            label: label.to_string(),
            display_label: display_label.to_string(),
            value: 0.0,
            color: "#000000".to_string(),
            selected,
        }
    }

    #[test]
    fn test_slices_print_display_labels() {
        let mut sink = TextSink::new();
        sink.composition(
            ViewMode::SeasonalVariation,
            &[
                slice("Carbon Dioxide", "Carbon Dioxide: High", false),
                slice("Oxygen", "Oxygen: Medium", true),
            ],
        );
        assert!(sink.output.starts_with("Martian Atmosphere Composition: "));
        let rows: Vec<&str> = sink.output.lines().skip(1).collect();
        assert!(rows[0].contains("Carbon Dioxide: High"));
        assert!(!rows[0].ends_with('*'));
        assert!(rows[1].contains("Oxygen: Medium"));
        assert!(rows[1].ends_with('*'));
    }

    #[test]
    fn test_empty_composition() {
        let mut sink = TextSink::new();
        sink.composition(ViewMode::Composition, &[]);
        assert!(sink.output.contains("no gases above the threshold"));
    }

    #[test]
    fn test_current_sol_marked() {
        let mut sink = TextSink::new().with_current_sol("101");
        sink.wind(&[
            AveragePoint { sol: "100".to_string(), avg: 4.5 },
            AveragePoint { sol: "101".to_string(), avg: 6.25 },
        ]);
        let marked: Vec<&str> = sink.output.lines().filter(|l| l.ends_with(CURRENT_MARKER)).collect();
        assert_eq!(marked.len(), 1);
        assert!(marked[0].contains("101"));
    }

    #[test]
    fn test_summary_without_readings() {
        let summary = SolSummary {
            sol_label: "Sol 9".to_string(),
            earth_date: "January 1, 2019".to_string(),
            season: "Season: N/A".to_string(),
            temperature: None,
            wind: None,
            pressure: None,
            has_previous: false,
            has_next: false,
        };
        let mut sink = TextSink::new();
        sink.sol_summary(&summary);
        assert!(sink.output.contains("Temperature: N/A  Min: N/A  Max: N/A"));
        assert!(sink.output.contains("Wind speed: N/A"));
        assert!(sink.output.contains("Pressure: N/A"));
    }

    #[test]
    fn test_missing_series() {
        let mut sink = TextSink::new();
        sink.pressure(&[]);
        assert!(sink.output.contains("no readings"));
    }
}
