//! Torn API fetch and payload parsing.
//!
//! [`StatusFetcher`] issues one GET through an [`HttpClient`] and turns the
//! body into a [`TravelStatus`]. Both failure kinds are surfaced as a
//! [`FetchError`] whose `Display` text is what ends up on the screen.
//!
//! # Example
//!
//! ```rust
//! use torn_travel::{parse_travel_status, FetchError};
//!
//! let body = br#"{"status":{"state":"Traveling"},"travel":{"destination":"Japan","time_left":42}}"#;
//! let status = parse_travel_status(body).unwrap();
//! assert_eq!(status.destination, "Japan");
//! assert_eq!(status.seconds_remaining, 42);
//!
//! let err = parse_travel_status(b"not json").unwrap_err();
//! assert!(err.to_string().starts_with("JSON err: "));
//! ```

extern crate alloc;
use alloc::string::{String, ToString};

use log::{debug, info, warn};
use serde::Deserialize;

use crate::config::ApiConfig;
use crate::status::TravelStatus;
use crate::traits::{HttpClient, StatusSource};

/// Why a fetch produced no status.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The request never got a response (DNS, TLS, connection failure).
    #[error("HTTP error: {0}")]
    Transport(String),
    /// The response body was not the expected JSON shape.
    #[error("JSON err: {0}")]
    Parse(String),
}

impl FetchError {
    /// Returns true for transport failures.
    pub fn is_transport(&self) -> bool {
        matches!(self, FetchError::Transport(_))
    }
}

// Only the three fields the display needs; everything else in the
// response is ignored.
#[derive(Deserialize)]
struct UserPayload {
    status: StatusSection,
    travel: TravelSection,
}

#[derive(Deserialize)]
struct StatusSection {
    state: String,
}

#[derive(Deserialize)]
struct TravelSection {
    destination: String,
    time_left: i64,
}

/// Parses a `user?selections=travel,basic` response body.
///
/// `time_left` is clamped into `0..=u32::MAX`.
///
/// # Errors
///
/// Returns [`FetchError::Parse`] carrying the parser's diagnostic if the
/// body is not JSON or lacks one of `status.state`, `travel.destination`,
/// `travel.time_left`.
pub fn parse_travel_status(body: &[u8]) -> Result<TravelStatus, FetchError> {
    let payload: UserPayload =
        serde_json::from_slice(body).map_err(|e| FetchError::Parse(e.to_string()))?;

    let seconds_remaining = payload.travel.time_left.clamp(0, u32::MAX as i64) as u32;

    Ok(TravelStatus {
        state: payload.status.state,
        destination: payload.travel.destination,
        seconds_remaining,
    })
}

/// Fetches travel status from the Torn API.
///
/// The request URL is built once from [`ApiConfig`]; the API key is never
/// logged.
///
/// # Example
///
/// ```rust
/// use torn_travel::config::ApiConfig;
/// use torn_travel::hal::MockHttp;
/// use torn_travel::traits::StatusSource;
/// use torn_travel::StatusFetcher;
///
/// let mut http = MockHttp::new();
/// http.queue_ok(r#"{"status":{"state":"Okay"},"travel":{"destination":"Torn","time_left":0}}"#);
///
/// let api = ApiConfig::default().with_key("abc123");
/// let mut fetcher = StatusFetcher::new(http, &api);
/// let status = fetcher.fetch().unwrap();
/// assert!(status.is_home());
/// ```
pub struct StatusFetcher<C: HttpClient> {
    client: C,
    url: String,
    redacted_url: String,
}

impl<C: HttpClient> StatusFetcher<C> {
    /// Creates a fetcher for the configured endpoint.
    pub fn new(client: C, api: &ApiConfig) -> Self {
        Self {
            client,
            url: api.url(),
            redacted_url: api.redacted_url(),
        }
    }

    /// The full request URL, including the key.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns a reference to the underlying HTTP client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Returns a mutable reference to the underlying HTTP client.
    pub fn client_mut(&mut self) -> &mut C {
        &mut self.client
    }
}

impl<C: HttpClient> StatusSource for StatusFetcher<C> {
    fn fetch(&mut self) -> Result<TravelStatus, FetchError> {
        debug!("[Fetch] GET {}", self.redacted_url);

        let reply = self.client.get(&self.url).map_err(|e| {
            let err = FetchError::Transport(e.to_string());
            warn!("[Fetch] {}", err);
            err
        })?;

        if !reply.is_success() {
            // The body is still parsed: it may carry a usable payload, and if
            // not the parse diagnostic is what gets shown.
            warn!("[Fetch] Unexpected HTTP status {}", reply.status);
        }

        let status = parse_travel_status(&reply.body).inspect_err(|err| {
            warn!("[Fetch] {}", err);
        })?;

        info!(
            "[Fetch] {} -> {} ({}s left)",
            status.state, status.destination, status.seconds_remaining
        );
        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hal::MockHttp;

    const TRAVELLING: &str = r#"{
        "level": 15,
        "name": "Player",
        "status": {"description": "Traveling to Mexico", "state": "Traveling", "color": "blue"},
        "travel": {"destination": "Mexico", "method": "Standard", "timestamp": 1700000000,
                   "departed": 1699998920, "time_left": 1080}
    }"#;

    #[test]
    fn parse_full_payload() {
        let status = parse_travel_status(TRAVELLING.as_bytes()).unwrap();
        assert_eq!(status.state, "Traveling");
        assert_eq!(status.destination, "Mexico");
        assert_eq!(status.seconds_remaining, 1080);
    }

    #[test]
    fn parse_idle_payload() {
        let body = br#"{"status":{"state":"Okay"},"travel":{"destination":"Torn","time_left":0}}"#;
        let status = parse_travel_status(body).unwrap();
        assert_eq!(status, TravelStatus::new("Okay", "Torn", 0));
    }

    #[test]
    fn parse_negative_time_left_clamps_to_zero() {
        let body = br#"{"status":{"state":"Okay"},"travel":{"destination":"Torn","time_left":-5}}"#;
        assert_eq!(parse_travel_status(body).unwrap().seconds_remaining, 0);
    }

    #[test]
    fn parse_huge_time_left_clamps_to_u32() {
        let body = br#"{"status":{"state":"x"},"travel":{"destination":"y","time_left":99999999999}}"#;
        assert_eq!(parse_travel_status(body).unwrap().seconds_remaining, u32::MAX);
    }

    #[test]
    fn parse_malformed_json() {
        let err = parse_travel_status(b"{\"status\":").unwrap_err();
        assert!(matches!(err, FetchError::Parse(_)));
        assert!(err.to_string().starts_with("JSON err: "));
    }

    #[test]
    fn parse_missing_travel_section() {
        // What the API returns for a bad key
        let body = br#"{"error":{"code":2,"error":"Incorrect key"}}"#;
        let err = parse_travel_status(body).unwrap_err();
        assert!(err.to_string().starts_with("JSON err: "));
        assert!(err.to_string().contains("status"));
    }

    #[test]
    fn parse_wrong_field_type() {
        let body = br#"{"status":{"state":"Okay"},"travel":{"destination":"Torn","time_left":"soon"}}"#;
        assert!(matches!(parse_travel_status(body), Err(FetchError::Parse(_))));
    }

    #[test]
    fn transport_error_display() {
        let err = FetchError::Transport("ESP_ERR_HTTP_CONNECT".into());
        assert_eq!(err.to_string(), "HTTP error: ESP_ERR_HTTP_CONNECT");
        assert!(err.is_transport());
        assert!(!FetchError::Parse("x".into()).is_transport());
    }

    #[test]
    fn fetcher_requests_configured_url() {
        let mut http = MockHttp::new();
        http.queue_ok(TRAVELLING);

        let api = ApiConfig::default().with_key("KEY");
        let mut fetcher = StatusFetcher::new(http, &api);
        fetcher.fetch().unwrap();

        assert_eq!(
            fetcher.client().requested,
            vec!["https://api.torn.com/user/?selections=travel,basic&key=KEY".to_string()]
        );
    }

    #[test]
    fn fetcher_maps_transport_failure() {
        let mut http = MockHttp::new();
        http.queue_transport_error("connection refused");

        let mut fetcher = StatusFetcher::new(http, &ApiConfig::default());
        let err = fetcher.fetch().unwrap_err();
        assert_eq!(err, FetchError::Transport("connection refused".into()));
        assert_eq!(err.to_string(), "HTTP error: connection refused");
    }

    #[test]
    fn fetcher_parses_body_of_error_status() {
        let mut http = MockHttp::new();
        http.queue_reply(503, "<html>Service Unavailable</html>");

        let mut fetcher = StatusFetcher::new(http, &ApiConfig::default());
        let err = fetcher.fetch().unwrap_err();
        assert!(matches!(err, FetchError::Parse(_)));
    }

    #[test]
    fn fetcher_with_empty_queue_is_transport_error() {
        let mut fetcher = StatusFetcher::new(MockHttp::new(), &ApiConfig::default());
        assert!(fetcher.fetch().unwrap_err().is_transport());
    }
}
