//! Mars weather report from the InSight feed.

use crate::text::TextSink;
use log::{info, warn};
use mars_atmo::error::DataUnavailable;
use mars_atmo::feed::{self, FeedConfig};
use mars_atmo::render::{render_weather, AveragePoint, SolSummary, TemperaturePoint};
use mars_atmo::timeline::{LoadedTimeline, WeatherTimeline};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

/// Where the feed payload comes from.
#[derive(Debug, Clone)]
pub enum FeedSource {
    Remote(FeedConfig),
    File(PathBuf),
}

impl FeedSource {
    /// A saved payload takes precedence over the remote feed.
    pub fn new(api_key: Option<String>, endpoint: Option<String>, input: Option<PathBuf>) -> Self {
        if let Some(path) = input {
            return FeedSource::File(path);
        }
        let mut config = FeedConfig::default();
        if let Some(key) = api_key {
            config = config.with_api_key(key);
        }
        if let Some(endpoint) = endpoint {
            config = config.with_endpoint(endpoint);
        }
        FeedSource::Remote(config)
    }

    /// Read the raw payload. One attempt, no retries.
    pub async fn load(&self) -> Result<String, DataUnavailable> {
        match self {
            FeedSource::Remote(config) => {
                let client = reqwest::Client::builder()
                    .timeout(Duration::from_secs(30))
                    .build()
                    .map_err(|e| DataUnavailable::Request(e.to_string()))?;
                feed::fetch_feed(&client, config).await
            }
            FeedSource::File(path) => {
                info!("Reading weather feed from {}", path.display());
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|e| DataUnavailable::Request(format!("{}: {}", path.display(), e)))
            }
        }
    }
}

/// JSON form of the weather report.
#[derive(Debug, Serialize)]
pub struct WeatherReport {
    pub sols: Vec<String>,
    pub current: SolSummary,
    pub temperature: Vec<TemperaturePoint>,
    pub wind: Vec<AveragePoint>,
    pub pressure: Vec<AveragePoint>,
}

impl WeatherReport {
    pub fn from_timeline(timeline: &LoadedTimeline) -> Self {
        Self {
            sols: timeline.sol_keys().into_iter().map(str::to_string).collect(),
            current: timeline.summary(),
            temperature: timeline.temperature_series(),
            wind: timeline.wind_series(),
            pressure: timeline.pressure_series(),
        }
    }
}

/// Move the cursor back `back` sols from the latest, stopping at the first.
/// Returns how many steps were taken.
pub fn step_back(timeline: &mut LoadedTimeline, back: usize) -> usize {
    let mut steps = 0;
    while steps < back && timeline.previous() {
        steps += 1;
    }
    if steps < back {
        warn!(
            "Only {} earlier sols in the feed, showing sol {}",
            steps,
            timeline.current().sol
        );
    }
    steps
}

/// Text report of the current-sol card and the three series.
pub fn weather_report(timeline: &LoadedTimeline) -> String {
    let mut sink = TextSink::new().with_current_sol(timeline.current().sol.clone());
    render_weather(timeline, &mut sink);
    sink.output
}

/// Load the feed once and print the sol `back` steps before the latest.
pub async fn run_weather(source: FeedSource, back: usize, json: bool) -> anyhow::Result<()> {
    let timeline = WeatherTimeline::from_fetch(source.load().await);
    let mut timeline = match timeline {
        WeatherTimeline::Loaded(timeline) => timeline,
        WeatherTimeline::Failed(e) => return Err(e.into()),
        WeatherTimeline::Loading => anyhow::bail!("weather feed did not settle"),
    };
    step_back(&mut timeline, back);

    if json {
        let report = WeatherReport::from_timeline(&timeline);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", weather_report(&timeline));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = include_str!("../../fixtures/insight_weather.json");

    fn fixture_path() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../fixtures/insight_weather.json")
    }

    #[test]
    fn test_source_selection() {
        let source = FeedSource::new(Some("abc".to_string()), None, None);
        match source {
            FeedSource::Remote(config) => {
                assert_eq!(config.api_key, "abc");
                assert_eq!(config.endpoint, feed::INSIGHT_ENDPOINT);
            }
            other => panic!("expected remote source, got {:?}", other),
        }

        let source = FeedSource::new(Some("abc".to_string()), None, Some(fixture_path()));
        assert!(matches!(source, FeedSource::File(_)));
    }

    #[test]
    fn test_step_back_stops_at_first_sol() {
        let mut timeline = LoadedTimeline::load(FIXTURE).unwrap();
        assert_eq!(timeline.current().sol, "678");
        assert_eq!(step_back(&mut timeline, 1), 1);
        assert_eq!(timeline.current().sol, "677");
        assert_eq!(step_back(&mut timeline, 10), 2);
        assert_eq!(timeline.current().sol, "675");
    }

    #[test]
    fn test_weather_report() {
        let timeline = LoadedTimeline::load(FIXTURE).unwrap();
        let report = weather_report(&timeline);
        assert!(report.starts_with("Sol 678 (October 22, 2020)"));
        assert!(report.contains("Season: fall"));
        assert!(report.contains("-61.0°C"));
        assert!(report.contains("8.1 m/s"));
        assert!(report.contains("747 Pa"));
        assert!(report.contains("[previous]"));
    }

    #[test]
    fn test_json_report_skips_missing_readings() {
        let timeline = LoadedTimeline::load(FIXTURE).unwrap();
        let value = serde_json::to_value(WeatherReport::from_timeline(&timeline)).unwrap();
        assert_eq!(value["sols"].as_array().unwrap().len(), 4);
        assert_eq!(value["current"]["solLabel"], "Sol 678");
        assert_eq!(value["current"]["hasNext"], false);
        // 676 has no wind group, 677 no temperature group
        assert_eq!(value["wind"].as_array().unwrap().len(), 3);
        assert_eq!(value["temperature"].as_array().unwrap().len(), 3);
        assert_eq!(value["pressure"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_file_source() {
        let payload = FeedSource::File(fixture_path()).load().await.unwrap();
        assert!(LoadedTimeline::load(&payload).is_ok());

        let missing = FeedSource::File(PathBuf::from("does/not/exist.json"));
        assert!(matches!(missing.load().await, Err(DataUnavailable::Request(_))));
    }

    #[tokio::test]
    async fn test_run_weather_fails_on_bad_input() {
        let missing = FeedSource::File(PathBuf::from("does/not/exist.json"));
        assert!(run_weather(missing, 0, false).await.is_err());
    }
}
