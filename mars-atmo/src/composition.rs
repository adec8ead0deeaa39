//! The atmosphere composition model.
//!
//! Holds the fixed gas list together with the two user controls (view mode
//! and threshold) and the selected gas, and derives what the pie chart, gas
//! list and detail panel show.

use crate::gas::GasRecord;
use crate::render::{CompositionSlice, GasDetailView};
use crate::selection::{Identified, Selection};
use log::{debug, warn};
use mars_utils::units::format_percent;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Initial slider position, in percent.
pub const DEFAULT_THRESHOLD: f64 = 1.0;
/// Slider bounds and step, in percent.
pub const THRESHOLD_MIN: f64 = 0.0;
pub const THRESHOLD_MAX: f64 = 100.0;
pub const THRESHOLD_STEP: f64 = 0.1;

/// Which scalar of a gas record the chart plots.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default, Serialize, Deserialize)]
pub enum ViewMode {
    #[default]
    Composition,
    EarthComparison,
    SeasonalVariation,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [
        ViewMode::Composition,
        ViewMode::EarthComparison,
        ViewMode::SeasonalVariation,
    ];

    /// Stable identifier used by the view buttons and the CLI.
    pub fn slug(self) -> &'static str {
        match self {
            ViewMode::Composition => "composition",
            ViewMode::EarthComparison => "earth-comparison",
            ViewMode::SeasonalVariation => "seasonal-variation",
        }
    }

    /// Button caption.
    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Composition => "Composition",
            ViewMode::EarthComparison => "Earth Comparison",
            ViewMode::SeasonalVariation => "Seasonal Variation",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for ViewMode {
    type Err = String;

    /// Accepts a slug ("earth-comparison") or a caption ("Earth Comparison").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(' ', "-");
        ViewMode::ALL
            .into_iter()
            .find(|mode| mode.slug() == normalized)
            .ok_or_else(|| {
                format!(
                    "unknown view '{}', expected one of: composition, earth-comparison, seasonal-variation",
                    s
                )
            })
    }
}

/// State behind the atmosphere dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositionModel {
    records: Vec<GasRecord>,
    view: ViewMode,
    threshold: f64,
    selection: Selection,
}

impl CompositionModel {
    pub fn new(records: Vec<GasRecord>) -> Self {
        Self {
            records,
            view: ViewMode::default(),
            threshold: DEFAULT_THRESHOLD,
            selection: Selection::new(),
        }
    }

    /// Model over the embedded Martian atmosphere table.
    pub fn mars() -> anyhow::Result<Self> {
        Ok(Self::new(GasRecord::mars_atmosphere()?))
    }

    pub fn records(&self) -> &[GasRecord] {
        &self.records
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn set_view(&mut self, view: ViewMode) {
        self.view = view;
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Set the minimum-exclusive percentage filter.
    ///
    /// Values outside the slider's [0, 100] range are accepted as given; NaN is
    /// ignored. A selected gas hidden by the new threshold is deselected.
    pub fn set_threshold(&mut self, threshold: f64) {
        if threshold.is_nan() {
            warn!("Ignoring NaN threshold, keeping {}", self.threshold);
            return;
        }
        self.threshold = threshold;
        let records = &self.records;
        let dropped = self.selection.retain(|name| {
            records
                .iter()
                .any(|gas| gas.name == name && gas.value > threshold)
        });
        if dropped {
            debug!("Selection cleared: hidden by threshold {}", threshold);
        }
    }

    /// Records strictly above the threshold, in declaration order.
    pub fn filtered_records(&self) -> Vec<&GasRecord> {
        self.records
            .iter()
            .filter(|gas| gas.value > self.threshold)
            .collect()
    }

    pub fn is_visible(&self, record: &GasRecord) -> bool {
        record.value > self.threshold
    }

    /// The scalar the chart plots for `record` under `view`.
    pub fn display_value(record: &GasRecord, view: ViewMode) -> f64 {
        match view {
            ViewMode::Composition => record.value,
            ViewMode::EarthComparison => record.earth_value,
            ViewMode::SeasonalVariation => f64::from(record.seasonal_variation.level()),
        }
    }

    /// `display_value` under the current view.
    pub fn current_value(&self, record: &GasRecord) -> f64 {
        CompositionModel::display_value(record, self.view)
    }

    /// Arc label and tooltip text, e.g. "Nitrogen: 2.7%" or "Nitrogen: Low".
    pub fn label_for(&self, record: &GasRecord) -> String {
        match self.view {
            ViewMode::SeasonalVariation => {
                format!("{}: {}", record.name, record.seasonal_variation)
            }
            _ => format!("{}: {}", record.name, format_percent(self.current_value(record))),
        }
    }

    /// Chart payload for the current view and threshold.
    pub fn slices(&self) -> Vec<CompositionSlice> {
        self.filtered_records()
            .into_iter()
            .map(|gas| CompositionSlice {
                label: gas.name.clone(),
                display_label: self.label_for(gas),
                value: self.current_value(gas),
                color: gas.color.clone(),
                selected: self.is_selected(gas),
            })
            .collect()
    }

    /// Select a gas for the detail panel.
    ///
    /// Only gases from the dataset that the current threshold shows can be
    /// selected; returns whether the selection was taken.
    pub fn select(&mut self, record: &GasRecord) -> bool {
        self.select_by_name(record.id())
    }

    pub fn select_by_name(&mut self, name: &str) -> bool {
        let Some(gas) = self.records.iter().find(|gas| gas.name == name) else {
            warn!("Cannot select unknown gas '{}'", name);
            return false;
        };
        if !self.is_visible(gas) {
            debug!("Not selecting '{}': below threshold {}", name, self.threshold);
            return false;
        }
        self.selection.select(gas);
        true
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn selected(&self) -> Option<&GasRecord> {
        self.selection.resolve(&self.records)
    }

    pub fn is_selected(&self, record: &GasRecord) -> bool {
        self.selection.is_selected(record)
    }

    /// Detail panel content for the selected gas.
    pub fn detail(&self) -> Option<GasDetailView> {
        self.selected().map(|gas| GasDetailView {
            name: gas.name.clone(),
            formula: gas.details.formula.clone(),
            description: gas.details.description.clone(),
            effects: gas.details.effects.clone(),
            seasonal_behavior: gas.details.seasonal_behavior.clone(),
            significance: gas.details.significance.clone(),
            value: gas.value,
            earth_value: gas.earth_value,
            seasonal_variation: gas.seasonal_variation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> CompositionModel {
        CompositionModel::mars().unwrap()
    }

    fn names(records: &[&GasRecord]) -> Vec<String> {
        records.iter().map(|g| g.name.clone()).collect()
    }

    #[test]
    fn test_defaults() {
        let model = model();
        assert_eq!(model.view(), ViewMode::Composition);
        assert_eq!(model.threshold(), DEFAULT_THRESHOLD);
        assert!(model.selected().is_none());
    }

    #[test]
    fn test_filter_is_strictly_greater_and_ordered() {
        let mut model = model();
        for threshold in [0.0, 0.13, 0.5, 0.57, 1.0, 1.6, 2.7, 50.0, 95.0, 100.0] {
            model.set_threshold(threshold);
            let expected: Vec<String> = model
                .records()
                .iter()
                .filter(|g| g.value > threshold)
                .map(|g| g.name.clone())
                .collect();
            assert_eq!(names(&model.filtered_records()), expected, "threshold {}", threshold);
        }
    }

    #[test]
    fn test_filter_boundaries() {
        let mut model = model();
        model.set_threshold(100.0);
        assert!(model.filtered_records().is_empty());
        assert!(model.slices().is_empty());

        model.set_threshold(0.0);
        assert_eq!(model.filtered_records().len(), 5);

        model.set_threshold(0.13);
        let visible = names(&model.filtered_records());
        assert_eq!(visible.len(), 4);
        assert!(!visible.contains(&"Oxygen".to_string()));
    }

    #[test]
    fn test_out_of_range_threshold_accepted() {
        let mut model = model();
        model.set_threshold(-5.0);
        assert_eq!(model.threshold(), -5.0);
        assert_eq!(model.filtered_records().len(), 5);
        model.set_threshold(250.0);
        assert!(model.filtered_records().is_empty());
    }

    #[test]
    fn test_nan_threshold_ignored() {
        let mut model = model();
        model.set_threshold(2.0);
        model.set_threshold(f64::NAN);
        assert_eq!(model.threshold(), 2.0);
    }

    #[test]
    fn test_display_values() {
        let model = model();
        let co2 = &model.records()[0];
        assert_eq!(CompositionModel::display_value(co2, ViewMode::Composition), 95.0);
        assert_eq!(CompositionModel::display_value(co2, ViewMode::EarthComparison), 0.04);
        assert_eq!(CompositionModel::display_value(co2, ViewMode::SeasonalVariation), 3.0);
    }

    #[test]
    fn test_seasonal_view_ignores_threshold() {
        let mut model = model();
        let expected = [3.0, 1.0, 1.0, 2.0, 3.0];
        for threshold in [0.0, 50.0, 100.0] {
            model.set_threshold(threshold);
            for (gas, level) in model.records().iter().zip(expected) {
                assert_eq!(
                    CompositionModel::display_value(gas, ViewMode::SeasonalVariation),
                    level
                );
            }
        }
    }

    #[test]
    fn test_slices_follow_view() {
        let mut model = model();
        model.set_view(ViewMode::EarthComparison);
        let slices = model.slices();
        assert_eq!(slices.len(), 3);
        assert_eq!(slices[0].label, "Carbon Dioxide");
        assert_eq!(slices[0].value, 0.04);
        assert_eq!(slices[0].color, "#FF4D4D");
        assert_eq!(slices[1].value, 78.0);

        model.set_view(ViewMode::SeasonalVariation);
        let values: Vec<f64> = model.slices().iter().map(|s| s.value).collect();
        assert_eq!(values, vec![3.0, 1.0, 1.0]);
    }

    #[test]
    fn test_labels() {
        let mut model = model();
        let nitrogen = model.records()[1].clone();
        assert_eq!(model.label_for(&nitrogen), "Nitrogen: 2.7%");
        model.set_view(ViewMode::EarthComparison);
        assert_eq!(model.label_for(&nitrogen), "Nitrogen: 78%");
        model.set_view(ViewMode::SeasonalVariation);
        assert_eq!(model.label_for(&nitrogen), "Nitrogen: Low");
    }

    #[test]
    fn test_slices_carry_labels_and_selection() {
        let mut model = model();
        assert!(model.select_by_name("Argon"));
        let slices = model.slices();
        let labels: Vec<&str> = slices.iter().map(|s| s.display_label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Carbon Dioxide: 95%", "Nitrogen: 2.7%", "Argon: 1.6%"]
        );
        let selected: Vec<&str> = slices
            .iter()
            .filter(|s| s.selected)
            .map(|s| s.label.as_str())
            .collect();
        assert_eq!(selected, vec!["Argon"]);

        model.set_view(ViewMode::SeasonalVariation);
        assert_eq!(model.slices()[0].display_label, "Carbon Dioxide: High");
    }

    #[test]
    fn test_select_visible_record() {
        let mut model = model();
        let argon = model.records()[2].clone();
        assert!(model.select(&argon));
        assert_eq!(model.selected().map(|g| g.name.as_str()), Some("Argon"));
        assert!(model.is_selected(&argon));
        assert_eq!(model.detail().unwrap().heading(), "Argon (Ar)");
    }

    #[test]
    fn test_select_hidden_record_rejected() {
        let mut model = model();
        let oxygen = model.records()[3].clone();
        assert!(!model.select(&oxygen));
        assert!(model.selected().is_none());
        assert!(!model.select_by_name("Xenon"));
    }

    #[test]
    fn test_threshold_change_drops_hidden_selection() {
        let mut model = model();
        assert!(model.select_by_name("Nitrogen"));
        model.set_threshold(2.0);
        assert_eq!(model.selected().map(|g| g.name.as_str()), Some("Nitrogen"));
        model.set_threshold(2.7);
        assert!(model.selected().is_none());
        // Lowering the threshold again does not bring it back
        model.set_threshold(0.0);
        assert!(model.selected().is_none());
    }

    #[test]
    fn test_view_change_keeps_selection() {
        let mut model = model();
        assert!(model.select_by_name("Carbon Dioxide"));
        model.set_view(ViewMode::SeasonalVariation);
        assert!(model.selected().is_some());
        model.clear_selection();
        assert!(model.detail().is_none());
    }

    #[test]
    fn test_view_mode_from_str() {
        assert_eq!("composition".parse::<ViewMode>(), Ok(ViewMode::Composition));
        assert_eq!("Earth Comparison".parse::<ViewMode>(), Ok(ViewMode::EarthComparison));
        assert_eq!(
            "seasonal-variation".parse::<ViewMode>(),
            Ok(ViewMode::SeasonalVariation)
        );
        assert!("pie".parse::<ViewMode>().is_err());
        for mode in ViewMode::ALL {
            assert_eq!(mode.label().parse::<ViewMode>(), Ok(mode));
        }
    }
}
