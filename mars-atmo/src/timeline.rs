//! Per-sol navigation over the weather feed.
//!
//! `WeatherTimeline` is the dashboard's lifecycle: it starts `Loading`, and the
//! single fetch moves it to `Loaded` or `Failed`. Only a `LoadedTimeline` can
//! answer `current()`, and it can only be built from a non-empty feed, so the
//! cursor is always valid.

use crate::error::DataUnavailable;
use crate::render::{AveragePoint, SolSummary, TemperaturePoint, TemperatureSummary};
use crate::sol::{parse_feed, SolReading};
use log::{error, info, warn};
use mars_utils::{dates, units};

/// The three charted measurements.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Measurement {
    Temperature,
    Wind,
    Pressure,
}

impl Measurement {
    pub const ALL: [Measurement; 3] = [
        Measurement::Temperature,
        Measurement::Wind,
        Measurement::Pressure,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Measurement::Temperature => "Temperature",
            Measurement::Wind => "Wind Speed",
            Measurement::Pressure => "Pressure",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Measurement::Temperature => "°C",
            Measurement::Wind => "m/s",
            Measurement::Pressure => "Pa",
        }
    }
}

/// A chart series, shaped by measurement.
#[derive(Debug, Clone, PartialEq)]
pub enum Series {
    Temperature(Vec<TemperaturePoint>),
    Wind(Vec<AveragePoint>),
    Pressure(Vec<AveragePoint>),
}

impl Series {
    pub fn len(&self) -> usize {
        match self {
            Series::Temperature(points) => points.len(),
            Series::Wind(points) | Series::Pressure(points) => points.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sols present in the series, in order.
    pub fn sols(&self) -> Vec<&str> {
        match self {
            Series::Temperature(points) => points.iter().map(|p| p.sol.as_str()).collect(),
            Series::Wind(points) | Series::Pressure(points) => {
                points.iter().map(|p| p.sol.as_str()).collect()
            }
        }
    }
}

/// A non-empty, loaded sol series with a cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedTimeline {
    readings: Vec<SolReading>,
    cursor: usize,
}

impl LoadedTimeline {
    /// Parse a feed body; the cursor starts on the most recent sol.
    pub fn load(payload: &str) -> Result<Self, DataUnavailable> {
        LoadedTimeline::from_readings(parse_feed(payload)?)
    }

    pub fn from_readings(readings: Vec<SolReading>) -> Result<Self, DataUnavailable> {
        if readings.is_empty() {
            return Err(DataUnavailable::NoSols);
        }
        let cursor = readings.len() - 1;
        Ok(Self { readings, cursor })
    }

    pub fn current(&self) -> &SolReading {
        &self.readings[self.cursor]
    }

    /// Step back one sol. Returns whether the cursor moved.
    pub fn previous(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    /// Step forward one sol. Returns whether the cursor moved.
    pub fn next(&mut self) -> bool {
        if self.cursor + 1 < self.readings.len() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    pub fn has_previous(&self) -> bool {
        self.cursor > 0
    }

    pub fn has_next(&self) -> bool {
        self.cursor + 1 < self.readings.len()
    }

    /// Jump to `sol`. Returns false (and stays put) if the feed has no such sol.
    pub fn select(&mut self, sol: &str) -> bool {
        match self.readings.iter().position(|r| r.sol == sol) {
            Some(index) => {
                self.cursor = index;
                true
            }
            None => false,
        }
    }

    /// Cursor index, 0 for the oldest sol.
    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    pub fn readings(&self) -> &[SolReading] {
        &self.readings
    }

    pub fn sol_keys(&self) -> Vec<&str> {
        self.readings.iter().map(|r| r.sol.as_str()).collect()
    }

    pub fn get(&self, sol: &str) -> Option<&SolReading> {
        self.readings.iter().find(|r| r.sol == sol)
    }

    pub fn temperature_series(&self) -> Vec<TemperaturePoint> {
        self.readings
            .iter()
            .filter_map(|r| {
                r.temperature.map(|t| TemperaturePoint {
                    sol: r.sol.clone(),
                    avg: t.avg,
                    min: t.min,
                    max: t.max,
                })
            })
            .collect()
    }

    pub fn wind_series(&self) -> Vec<AveragePoint> {
        self.readings
            .iter()
            .filter_map(|r| {
                r.wind.map(|w| AveragePoint {
                    sol: r.sol.clone(),
                    avg: w.avg,
                })
            })
            .collect()
    }

    pub fn pressure_series(&self) -> Vec<AveragePoint> {
        self.readings
            .iter()
            .filter_map(|r| {
                r.pressure.map(|p| AveragePoint {
                    sol: r.sol.clone(),
                    avg: p.avg,
                })
            })
            .collect()
    }

    /// Chart series for `kind`, skipping sols without that measurement.
    pub fn series_for(&self, kind: Measurement) -> Series {
        match kind {
            Measurement::Temperature => Series::Temperature(self.temperature_series()),
            Measurement::Wind => Series::Wind(self.wind_series()),
            Measurement::Pressure => Series::Pressure(self.pressure_series()),
        }
    }

    /// The current-sol card.
    pub fn summary(&self) -> SolSummary {
        let reading = self.current();
        SolSummary {
            sol_label: format!("Sol {}", reading.sol),
            earth_date: dates::format_earth_date(&reading.first_utc),
            season: format!("Season: {}", reading.season.as_deref().unwrap_or(SolSummary::NOT_AVAILABLE)),
            temperature: reading.temperature.map(|t| TemperatureSummary {
                avg: units::format_temperature(t.avg),
                min: format!("Min: {}", units::format_temperature(t.min)),
                max: format!("Max: {}", units::format_temperature(t.max)),
            }),
            wind: reading.wind.map(|w| units::format_wind_speed(w.avg)),
            pressure: reading.pressure.map(|p| units::format_pressure(p.avg)),
            has_previous: self.has_previous(),
            has_next: self.has_next(),
        }
    }
}

/// Lifecycle of the weather dashboard.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum WeatherTimeline {
    #[default]
    Loading,
    Loaded(LoadedTimeline),
    Failed(DataUnavailable),
}

impl WeatherTimeline {
    /// Build the settled state from the outcome of the one feed request.
    pub fn from_fetch(result: Result<String, DataUnavailable>) -> Self {
        match result.and_then(|payload| LoadedTimeline::load(&payload)) {
            Ok(timeline) => {
                info!(
                    "Weather timeline loaded: {} sols, current sol {}",
                    timeline.len(),
                    timeline.current().sol
                );
                WeatherTimeline::Loaded(timeline)
            }
            Err(e) => {
                error!("Weather data unavailable: {}", e);
                WeatherTimeline::Failed(e)
            }
        }
    }

    /// Settle a `Loading` timeline with the fetch outcome.
    ///
    /// A timeline settles once; returns false and leaves the state alone if it
    /// already has.
    pub fn resolve(&mut self, result: Result<String, DataUnavailable>) -> bool {
        if !self.is_loading() {
            warn!("Ignoring weather feed result: timeline already settled");
            return false;
        }
        *self = WeatherTimeline::from_fetch(result);
        true
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, WeatherTimeline::Loading)
    }

    pub fn loaded(&self) -> Option<&LoadedTimeline> {
        match self {
            WeatherTimeline::Loaded(timeline) => Some(timeline),
            _ => None,
        }
    }

    pub fn loaded_mut(&mut self) -> Option<&mut LoadedTimeline> {
        match self {
            WeatherTimeline::Loaded(timeline) => Some(timeline),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&DataUnavailable> {
        match self {
            WeatherTimeline::Failed(e) => Some(e),
            _ => None,
        }
    }

    /// `LoadedTimeline::previous`, or false when nothing is loaded.
    pub fn previous(&mut self) -> bool {
        self.loaded_mut().is_some_and(LoadedTimeline::previous)
    }

    /// `LoadedTimeline::next`, or false when nothing is loaded.
    pub fn next(&mut self) -> bool {
        self.loaded_mut().is_some_and(LoadedTimeline::next)
    }
}
