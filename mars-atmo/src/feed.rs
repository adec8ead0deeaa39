//! Location of the InSight weather feed, and the native client for it.

use serde::{Deserialize, Serialize};

#[cfg(feature = "api")]
use crate::{error::DataUnavailable, timeline::WeatherTimeline};
#[cfg(feature = "api")]
use log::{info, warn};
#[cfg(feature = "api")]
use reqwest::Client;

/// NASA InSight Mars weather service.
pub const INSIGHT_ENDPOINT: &str = "https://api.nasa.gov/insight_weather/";

/// NASA's shared, rate-limited demo key.
pub const DEFAULT_API_KEY: &str = "DEMO_KEY";

/// Where and how to request the weather feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedConfig {
    pub endpoint: String,
    pub api_key: String,
    pub feed_type: String,
    pub version: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            endpoint: INSIGHT_ENDPOINT.to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
            feed_type: "json".to_string(),
            version: "1.0".to_string(),
        }
    }
}

impl FeedConfig {
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Full request URL including the query string.
    pub fn url(&self) -> String {
        format!(
            "{}?api_key={}&feedtype={}&ver={}",
            self.endpoint, self.api_key, self.feed_type, self.version
        )
    }
}

/// Fetch the raw feed body. One attempt, no retries.
#[cfg(feature = "api")]
pub async fn fetch_feed(client: &Client, config: &FeedConfig) -> Result<String, DataUnavailable> {
    info!("Requesting Mars weather feed from {}", config.endpoint);
    let response = client
        .get(config.url())
        .send()
        .await
        .map_err(|e| DataUnavailable::Request(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        warn!("Weather feed answered {}", status);
        return Err(DataUnavailable::Status(status.as_u16()));
    }

    response
        .text()
        .await
        .map_err(|e| DataUnavailable::Request(e.to_string()))
}

/// Fetch the feed and settle a timeline from the outcome.
#[cfg(feature = "api")]
pub async fn fetch_timeline(client: &Client, config: &FeedConfig) -> WeatherTimeline {
    WeatherTimeline::from_fetch(fetch_feed(client, config).await)
}
