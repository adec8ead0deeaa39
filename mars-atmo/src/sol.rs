//! Parsing of the InSight weather feed into per-sol readings.
//!
//! Feed shape:
//!
//! ```json
//! { "sol_keys": ["675", ...],
//!   "675": { "First_UTC": "...", "Season": "fall",
//!            "AT": {"av": .., "mn": .., "mx": ..}, "HWS": {"av": ..}, "PRE": {"av": ..} },
//!   ... }
//! ```
//!
//! Measurement groups are optional per sol (sensor outages). A group that is
//! present but unreadable is dropped for that sol rather than failing the feed.

use crate::error::DataUnavailable;
use crate::selection::Identified;
use chrono::{DateTime, Utc};
use log::{info, warn};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;

/// Atmospheric temperature, degrees Celsius.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct Temperature {
    #[serde(rename = "av")]
    pub avg: f64,
    #[serde(rename = "mn")]
    pub min: f64,
    #[serde(rename = "mx")]
    pub max: f64,
}

/// Horizontal wind speed, metres per second.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct WindSpeed {
    #[serde(rename = "av")]
    pub avg: f64,
}

/// Atmospheric pressure, pascals.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct Pressure {
    #[serde(rename = "av")]
    pub avg: f64,
}

/// One Martian day of the weather feed.
#[derive(Debug, PartialEq, Clone)]
pub struct SolReading {
    pub sol: String,
    /// Start of the sol's measurement window
    pub first_utc: DateTime<Utc>,
    pub season: Option<String>,
    pub temperature: Option<Temperature>,
    pub wind: Option<WindSpeed>,
    pub pressure: Option<Pressure>,
}

impl Identified for SolReading {
    fn id(&self) -> &str {
        &self.sol
    }
}

/// A sol bundle as it appears in the feed. Groups stay raw until validated.
#[derive(Debug, Deserialize)]
struct RawSol {
    #[serde(rename = "First_UTC")]
    first_utc: String,
    #[serde(rename = "Season", default)]
    season: Option<String>,
    #[serde(rename = "AT", default)]
    temperature: Option<Value>,
    #[serde(rename = "HWS", default)]
    wind: Option<Value>,
    #[serde(rename = "PRE", default)]
    pressure: Option<Value>,
}

/// Parse a raw feed body into readings in `sol_keys` order.
pub fn parse_feed(payload: &str) -> Result<Vec<SolReading>, DataUnavailable> {
    let value: Value = serde_json::from_str(payload)?;
    let feed = value
        .as_object()
        .ok_or_else(|| DataUnavailable::Malformed("feed is not a JSON object".to_string()))?;
    let sol_keys = parse_sol_keys(feed)?;
    if sol_keys.is_empty() {
        return Err(DataUnavailable::NoSols);
    }

    let readings = sol_keys
        .iter()
        .map(|key| {
            let bundle = feed.get(&key.raw).ok_or_else(|| {
                DataUnavailable::Malformed(format!("sol {} is listed but has no data", key.sol))
            })?;
            parse_sol(&key.sol, bundle)
        })
        .collect::<Result<Vec<SolReading>, DataUnavailable>>()?;

    info!(
        "Parsed {} sols ({} to {})",
        readings.len(),
        readings[0].sol,
        readings[readings.len() - 1].sol
    );
    Ok(readings)
}

/// A `sol_keys` entry: the key as written, which names the sol's bundle, and
/// the trimmed sol identifier.
struct SolKey {
    raw: String,
    sol: String,
}

/// `sol_keys` entries are integer-like strings; bare integers are accepted too.
fn parse_sol_keys(feed: &Map<String, Value>) -> Result<Vec<SolKey>, DataUnavailable> {
    let keys = feed
        .get("sol_keys")
        .and_then(Value::as_array)
        .ok_or_else(|| DataUnavailable::Malformed("missing sol_keys array".to_string()))?;

    let mut seen: HashSet<String> = HashSet::new();
    let mut sol_keys = Vec::with_capacity(keys.len());
    for key in keys {
        let raw = match key {
            Value::String(s) => s.clone(),
            Value::Number(n) if n.is_u64() => n.to_string(),
            other => {
                return Err(DataUnavailable::Malformed(format!(
                    "sol key {} is not a sol number",
                    other
                )))
            }
        };
        let sol = raw.trim().to_string();
        if !seen.insert(sol.clone()) {
            return Err(DataUnavailable::Malformed(format!(
                "sol {} listed twice",
                sol
            )));
        }
        sol_keys.push(SolKey { raw, sol });
    }
    Ok(sol_keys)
}

fn parse_sol(sol: &str, bundle: &Value) -> Result<SolReading, DataUnavailable> {
    let raw = RawSol::deserialize(bundle)
        .map_err(|e| DataUnavailable::Malformed(format!("sol {}: {}", sol, e)))?;
    let first_utc = mars_utils::dates::parse_utc(&raw.first_utc)
        .map_err(|e| DataUnavailable::Malformed(format!("sol {} First_UTC: {}", sol, e)))?;

    Ok(SolReading {
        sol: sol.to_string(),
        first_utc,
        season: raw.season.filter(|s| !s.trim().is_empty()),
        temperature: measurement_group(sol, "AT", raw.temperature),
        wind: measurement_group(sol, "HWS", raw.wind),
        pressure: measurement_group(sol, "PRE", raw.pressure),
    })
}

fn measurement_group<T: DeserializeOwned>(sol: &str, field: &str, raw: Option<Value>) -> Option<T> {
    let raw = raw?;
    match serde_json::from_value(raw) {
        Ok(group) => Some(group),
        Err(e) => {
            warn!("Sol {}: ignoring unreadable {} group: {}", sol, field, e);
            None
        }
    }
}
