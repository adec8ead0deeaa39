//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//! Each control mutates the models through the methods here, and each chart
//! re-renders from an effect reading the signal; controls never render directly.

use dioxus::prelude::*;
use mars_atmo::composition::CompositionModel;
use mars_atmo::timeline::WeatherTimeline;

/// Shared application state for the Mars dashboards.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Atmosphere composition model (None until the gas table is parsed)
    pub composition: Signal<Option<CompositionModel>>,
    /// Weather feed lifecycle and sol cursor
    pub weather: Signal<WeatherTimeline>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            composition: Signal::new(None),
            weather: Signal::new(WeatherTimeline::Loading),
        }
    }

    /// Read from the composition model, if one is loaded. Subscribes the caller.
    pub fn with_composition<R>(&self, f: impl FnOnce(&CompositionModel) -> R) -> Option<R> {
        match &*self.composition.read() {
            Some(model) => Some(f(model)),
            None => None,
        }
    }

    /// Apply `f` to the composition model, if one is loaded.
    pub fn update_composition(&mut self, f: impl FnOnce(&mut CompositionModel)) {
        if let Some(model) = &mut *self.composition.write() {
            f(model);
        }
    }

    /// Select a gas by name unless it is already selected.
    ///
    /// Only writes the signal on a change, so a chart re-render caused by the
    /// selection cannot trigger another one.
    pub fn select_gas(&mut self, name: &str) -> bool {
        let unchanged = self
            .with_composition(|model| model.selected().is_some_and(|gas| gas.name == name))
            .unwrap_or(true);
        if unchanged {
            return false;
        }
        let mut selected = false;
        self.update_composition(|model| selected = model.select_by_name(name));
        selected
    }

    /// Move the sol cursor back one step. Returns whether it moved.
    pub fn previous_sol(&mut self) -> bool {
        WeatherTimeline::previous(&mut self.weather.write())
    }

    /// Move the sol cursor forward one step. Returns whether it moved.
    pub fn next_sol(&mut self) -> bool {
        WeatherTimeline::next(&mut self.weather.write())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
