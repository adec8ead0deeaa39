use std::fmt;

/// Reasons the weather feed could not be turned into a timeline.
///
/// Every variant means the same thing to the dashboard: no weather data, show
/// the error panel. The variants only exist so the message says why.
#[derive(Debug, Clone, PartialEq)]
pub enum DataUnavailable {
    /// The request never produced a response (DNS, connection refused, CORS, ...)
    Request(String),
    /// The server answered with a non-success status code
    Status(u16),
    /// The body was not valid JSON
    Json(String),
    /// The JSON did not have the feed's shape
    Malformed(String),
    /// The feed listed no sols at all
    NoSols,
}

impl fmt::Display for DataUnavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataUnavailable::Request(e) => write!(f, "Weather feed request failed: {}", e),
            DataUnavailable::Status(code) => write!(f, "Weather feed returned HTTP {}", code),
            DataUnavailable::Json(e) => write!(f, "Weather feed is not valid JSON: {}", e),
            DataUnavailable::Malformed(e) => write!(f, "Unexpected weather feed shape: {}", e),
            DataUnavailable::NoSols => write!(f, "Weather feed contains no sols"),
        }
    }
}

impl std::error::Error for DataUnavailable {}

impl From<serde_json::Error> for DataUnavailable {
    fn from(e: serde_json::Error) -> Self {
        DataUnavailable::Json(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::DataUnavailable;

    #[test]
    fn test_display() {
        assert_eq!(
            DataUnavailable::Status(503).to_string(),
            "Weather feed returned HTTP 503"
        );
        assert_eq!(
            DataUnavailable::NoSols.to_string(),
            "Weather feed contains no sols"
        );
    }

    #[test]
    fn test_from_json_error() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        assert!(matches!(DataUnavailable::from(err), DataUnavailable::Json(_)));
    }
}
