//! Atmosphere composition report.

use crate::text::TextSink;
use log::{info, warn};
use mars_atmo::composition::{CompositionModel, ViewMode};
use mars_atmo::render::{render_composition, CompositionSlice, GasDetailView};
use serde::Serialize;

/// JSON form of the composition report.
#[derive(Debug, Serialize)]
pub struct AtmosphereReport {
    pub view: ViewMode,
    pub threshold: f64,
    pub slices: Vec<CompositionSlice>,
    pub selected: Option<GasDetailView>,
}

impl AtmosphereReport {
    pub fn from_model(model: &CompositionModel) -> Self {
        Self {
            view: model.view(),
            threshold: model.threshold(),
            slices: model.slices(),
            selected: model.detail(),
        }
    }
}

/// Build the composition model for the given controls.
///
/// Selecting an unknown or hidden gas is reported and otherwise ignored.
pub fn build_model(
    view: ViewMode,
    threshold: f64,
    select: Option<&str>,
) -> anyhow::Result<CompositionModel> {
    let mut model = CompositionModel::mars()?;
    model.set_view(view);
    model.set_threshold(threshold);
    if let Some(name) = select {
        if !model.select_by_name(name) {
            warn!("'{}' is not a visible gas at threshold {}", name, model.threshold());
        }
    }
    Ok(model)
}

/// Text report of the chart and, if a gas is selected, its detail panel.
pub fn atmosphere_report(model: &CompositionModel) -> String {
    let mut sink = TextSink::new();
    render_composition(model, &mut sink);
    sink.output
}

/// Print the atmosphere composition for the given controls.
pub fn run_atmosphere(
    view: ViewMode,
    threshold: f64,
    select: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let model = build_model(view, threshold, select)?;
    info!(
        "Rendering {} of {} gases in {} view",
        model.filtered_records().len(),
        model.records().len(),
        model.view()
    );

    if json {
        let report = AtmosphereReport::from_model(&model);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", atmosphere_report(&model));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_report() {
        let model = build_model(ViewMode::Composition, 1.0, None).unwrap();
        let report = atmosphere_report(&model);
        assert!(report.contains("Carbon Dioxide"));
        assert!(report.contains("Nitrogen"));
        assert!(report.contains("Argon"));
        assert!(!report.contains("Oxygen"));
        assert!(!report.contains("Other Trace Gases"));
    }

    #[test]
    fn test_selection_adds_detail() {
        let model = build_model(ViewMode::EarthComparison, 1.0, Some("Argon")).unwrap();
        let report = atmosphere_report(&model);
        assert!(report.contains("Argon (Ar)"));
        assert!(report.contains("0.93%"));
    }

    #[test]
    fn test_hidden_selection_ignored() {
        let model = build_model(ViewMode::Composition, 1.0, Some("Oxygen")).unwrap();
        assert!(model.selected().is_none());

        let model = build_model(ViewMode::Composition, 0.1, Some("Oxygen")).unwrap();
        assert_eq!(model.selected().map(|g| g.name.as_str()), Some("Oxygen"));
    }

    #[test]
    fn test_json_report() {
        let model = build_model(ViewMode::SeasonalVariation, 50.0, Some("Carbon Dioxide")).unwrap();
        let value = serde_json::to_value(AtmosphereReport::from_model(&model)).unwrap();
        assert_eq!(value["threshold"], 50.0);
        assert_eq!(value["slices"][0]["label"], "Carbon Dioxide");
        assert_eq!(value["slices"][0]["value"], 3.0);
        assert_eq!(value["selected"]["formula"], "CO₂");
    }
}
