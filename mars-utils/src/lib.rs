//! Shared utility functions for the Mars dashboard crates.

/// Date utility functions
pub mod dates {
    use chrono::{DateTime, Utc};

    /// Format used for the Earth date shown under the current sol, e.g. "October 19, 2020"
    pub const EARTH_DATE_FORMAT: &str = "%B %-d, %Y";

    /// Parse an RFC 3339 timestamp as sent in the feed's `First_UTC` field
    pub fn parse_utc(s: &str) -> anyhow::Result<DateTime<Utc>> {
        Ok(DateTime::parse_from_rfc3339(s.trim())?.with_timezone(&Utc))
    }

    /// Format a UTC timestamp as a long Earth calendar date.
    pub fn format_earth_date(timestamp: &DateTime<Utc>) -> String {
        timestamp.format(EARTH_DATE_FORMAT).to_string()
    }

}

/// Unit formatting for displayed measurements.
///
/// Temperature and wind speed use one decimal place, pressure none, matching
/// the precision the weather feed reports in.
pub mod units {
    /// Format a temperature in degrees Celsius, e.g. "-62.3°C"
    pub fn format_temperature(celsius: f64) -> String {
        format!("{:.1}°C", celsius)
    }

    /// Format a horizontal wind speed, e.g. "7.2 m/s"
    pub fn format_wind_speed(metres_per_second: f64) -> String {
        format!("{:.1} m/s", metres_per_second)
    }

    /// Format an atmospheric pressure, e.g. "721 Pa"
    pub fn format_pressure(pascals: f64) -> String {
        format!("{:.0} Pa", pascals)
    }

    /// Format a percentage with the shortest representation, e.g. "95%" or "0.13%"
    pub fn format_percent(value: f64) -> String {
        format!("{}%", value)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_format_temperature() {
            assert_eq!(format_temperature(-62.314), "-62.3°C");
            assert_eq!(format_temperature(-4.0), "-4.0°C");
        }

        #[test]
        fn test_format_wind_speed() {
            assert_eq!(format_wind_speed(7.233), "7.2 m/s");
        }

        #[test]
        fn test_format_pressure() {
            assert_eq!(format_pressure(721.7), "722 Pa");
            assert_eq!(format_pressure(750.0), "750 Pa");
        }

        #[test]
        fn test_format_percent() {
            assert_eq!(format_percent(95.0), "95%");
            assert_eq!(format_percent(0.13), "0.13%");
            assert_eq!(format_percent(2.0), "2%");
        }
    }
}
