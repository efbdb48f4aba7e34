//! Compile-time configuration for the travel display.
//!
//! Uses `heapless::String` for `no_std` compatibility while remaining
//! ergonomic to use on desktop with `std`. The firmware fills it from
//! `option_env!` values baked in at build time.
//!
//! # Example
//!
//! ```rust
//! use torn_travel::config::{ApiConfig, Config, RefreshConfig, WifiConfig};
//!
//! // Use defaults
//! let config = Config::default();
//! assert_eq!(config.refresh.refresh_every_ticks, 60);
//!
//! // Or customize
//! let config = Config::default()
//!     .with_wifi(WifiConfig::default().with_ssid("HomeWifi"))
//!     .with_api(ApiConfig::default().with_key("abc123"))
//!     .with_refresh(RefreshConfig::default().with_refresh_every_ticks(30));
//! ```

extern crate alloc;
use alloc::format;
use alloc::string::String;

use heapless::String as HString;

/// Maximum length for short config strings (SSIDs, keys)
pub const MAX_SHORT_STRING: usize = 64;

/// Maximum length for longer config strings (URLs, fingerprints)
pub const MAX_LONG_STRING: usize = 128;

/// Type alias for short config strings
pub type ShortString = HString<MAX_SHORT_STRING>;

/// Type alias for longer config strings
pub type LongString = HString<MAX_LONG_STRING>;

// ============================================================================
// Helper for creating heapless strings
// ============================================================================

/// Copy as much of `s` as fits into `N` bytes, stopping on a char boundary.
fn truncated<const N: usize>(s: &str) -> HString<N> {
    let mut hs = HString::new();
    for c in s.chars() {
        if hs.push(c).is_err() {
            break;
        }
    }
    hs
}

/// Create a ShortString from a &str, truncating if too long
pub fn short_string(s: &str) -> ShortString {
    truncated(s)
}

/// Create a LongString from a &str, truncating if too long
pub fn long_string(s: &str) -> LongString {
    truncated(s)
}

// ============================================================================
// Main Config
// ============================================================================

/// Complete application configuration
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// WiFi connection configuration
    pub wifi: WifiConfig,
    /// Torn API endpoint and credential
    pub api: ApiConfig,
    /// Tick, refresh and animation cadence
    pub refresh: RefreshConfig,
    /// Device identification
    pub device: DeviceConfig,
}

impl Config {
    /// Set WiFi configuration
    pub fn with_wifi(mut self, wifi: WifiConfig) -> Self {
        self.wifi = wifi;
        self
    }

    /// Set API configuration
    pub fn with_api(mut self, api: ApiConfig) -> Self {
        self.api = api;
        self
    }

    /// Set refresh configuration
    pub fn with_refresh(mut self, refresh: RefreshConfig) -> Self {
        self.refresh = refresh;
        self
    }

    /// Set device configuration
    pub fn with_device(mut self, device: DeviceConfig) -> Self {
        self.device = device;
        self
    }
}

// ============================================================================
// API Config
// ============================================================================

/// Torn API endpoint configuration
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Endpoint without query string
    pub base_url: LongString,
    /// Comma-separated `selections` query value
    pub selections: ShortString,
    /// API key sent as the `key` query value
    pub key: ShortString,
    /// SHA-1 fingerprint of the API certificate (informational)
    pub tls_fingerprint: LongString,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: long_string("https://api.torn.com/user/"),
            selections: short_string("travel,basic"),
            key: ShortString::new(),
            tls_fingerprint: LongString::new(),
        }
    }
}

impl ApiConfig {
    /// Set the endpoint
    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = long_string(url);
        self
    }

    /// Set the selections
    pub fn with_selections(mut self, selections: &str) -> Self {
        self.selections = short_string(selections);
        self
    }

    /// Set the API key
    pub fn with_key(mut self, key: &str) -> Self {
        self.key = short_string(key);
        self
    }

    /// Set the certificate fingerprint
    pub fn with_tls_fingerprint(mut self, fingerprint: &str) -> Self {
        self.tls_fingerprint = long_string(fingerprint);
        self
    }

    /// Check if an API key is configured
    pub fn has_key(&self) -> bool {
        !self.key.is_empty()
    }

    /// Full request URL including the key
    pub fn url(&self) -> String {
        format!(
            "{}?selections={}&key={}",
            self.base_url, self.selections, self.key
        )
    }

    /// Request URL with the key masked, safe for logs
    pub fn redacted_url(&self) -> String {
        format!("{}?selections={}&key=***", self.base_url, self.selections)
    }
}

// ============================================================================
// Refresh Config
// ============================================================================

/// Loop cadence configuration
#[derive(Clone, Debug)]
pub struct RefreshConfig {
    /// Countdown tick period in milliseconds
    pub tick_ms: u32,
    /// Marker animation frame period in milliseconds
    pub frame_ms: u32,
    /// Re-fetch every N ticks regardless of state (0 = only on arrival)
    pub refresh_every_ticks: u32,
    /// Number of discrete marker positions before wrapping
    pub marker_positions: u8,
    /// How long the "Connected" splash stays up, in milliseconds
    pub splash_ms: u32,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            tick_ms: 1000,
            frame_ms: 500,
            refresh_every_ticks: 60,
            marker_positions: 8,
            splash_ms: 1000,
        }
    }
}

impl RefreshConfig {
    /// Set the tick period
    pub fn with_tick_ms(mut self, ms: u32) -> Self {
        self.tick_ms = ms.max(1);
        self
    }

    /// Set the animation frame period
    pub fn with_frame_ms(mut self, ms: u32) -> Self {
        self.frame_ms = ms.max(1);
        self
    }

    /// Set the periodic refresh cadence
    pub fn with_refresh_every_ticks(mut self, ticks: u32) -> Self {
        self.refresh_every_ticks = ticks;
        self
    }

    /// Set the marker position count
    pub fn with_marker_positions(mut self, positions: u8) -> Self {
        self.marker_positions = positions.max(1);
        self
    }

    /// Set the splash duration
    pub fn with_splash_ms(mut self, ms: u32) -> Self {
        self.splash_ms = ms;
        self
    }

    /// Check if the periodic refresh is enabled
    pub fn periodic_refresh(&self) -> bool {
        self.refresh_every_ticks > 0
    }
}

// ============================================================================
// WiFi Config
// ============================================================================

/// WiFi connection configuration
#[derive(Clone, Debug, Default)]
pub struct WifiConfig {
    /// WiFi network SSID
    pub ssid: ShortString,
    /// WiFi password
    pub password: ShortString,
}

impl WifiConfig {
    /// Set the SSID
    pub fn with_ssid(mut self, ssid: &str) -> Self {
        self.ssid = short_string(ssid);
        self
    }

    /// Set the password
    pub fn with_password(mut self, password: &str) -> Self {
        self.password = short_string(password);
        self
    }

    /// Check if WiFi credentials are configured
    pub fn is_configured(&self) -> bool {
        !self.ssid.is_empty()
    }
}

// ============================================================================
// Device Config
// ============================================================================

/// Device identification configuration
#[derive(Clone, Debug)]
pub struct DeviceConfig {
    /// Human-readable device name, shown on the splash screen
    pub name: ShortString,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            name: short_string("torn-travel"),
        }
    }
}

impl DeviceConfig {
    /// Set the device name
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = short_string(name);
        self
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.refresh.tick_ms, 1000);
        assert_eq!(config.refresh.frame_ms, 500);
        assert!(!config.wifi.is_configured());
        assert!(!config.api.has_key());
    }

    #[test]
    fn api_url_building() {
        let api = ApiConfig::default().with_key("abc123");
        assert_eq!(
            api.url(),
            "https://api.torn.com/user/?selections=travel,basic&key=abc123"
        );
    }

    #[test]
    fn api_redacted_url_hides_key() {
        let api = ApiConfig::default().with_key("secret-key");
        let redacted = api.redacted_url();
        assert!(!redacted.contains("secret-key"));
        assert!(redacted.ends_with("key=***"));
    }

    #[test]
    fn api_config_builder() {
        let api = ApiConfig::default()
            .with_base_url("http://localhost:8000/user/")
            .with_selections("travel")
            .with_key("k")
            .with_tls_fingerprint("AA:BB:CC");

        assert_eq!(api.url(), "http://localhost:8000/user/?selections=travel&key=k");
        assert_eq!(api.tls_fingerprint.as_str(), "AA:BB:CC");
        assert!(api.has_key());
    }

    #[test]
    fn refresh_config_default() {
        let refresh = RefreshConfig::default();
        assert_eq!(refresh.refresh_every_ticks, 60);
        assert_eq!(refresh.marker_positions, 8);
        assert_eq!(refresh.splash_ms, 1000);
        assert!(refresh.periodic_refresh());
    }

    #[test]
    fn refresh_config_builder() {
        let refresh = RefreshConfig::default()
            .with_tick_ms(250)
            .with_frame_ms(125)
            .with_refresh_every_ticks(0)
            .with_marker_positions(4)
            .with_splash_ms(0);

        assert_eq!(refresh.tick_ms, 250);
        assert_eq!(refresh.frame_ms, 125);
        assert!(!refresh.periodic_refresh());
        assert_eq!(refresh.marker_positions, 4);
        assert_eq!(refresh.splash_ms, 0);
    }

    #[test]
    fn refresh_config_rejects_zero_periods() {
        let refresh = RefreshConfig::default()
            .with_tick_ms(0)
            .with_frame_ms(0)
            .with_marker_positions(0);

        assert_eq!(refresh.tick_ms, 1);
        assert_eq!(refresh.frame_ms, 1);
        assert_eq!(refresh.marker_positions, 1);
    }

    #[test]
    fn wifi_config_is_configured() {
        let unconfigured = WifiConfig::default();
        assert!(!unconfigured.is_configured());

        let configured = WifiConfig::default().with_ssid("MyNetwork");
        assert!(configured.is_configured());

        let empty_ssid = WifiConfig::default().with_ssid("");
        assert!(!empty_ssid.is_configured());
    }

    #[test]
    fn builder_pattern() {
        let config = Config::default()
            .with_wifi(
                WifiConfig::default()
                    .with_ssid("TestNetwork")
                    .with_password("secret123"),
            )
            .with_device(DeviceConfig::default().with_name("Desk Display"));

        assert_eq!(config.wifi.ssid.as_str(), "TestNetwork");
        assert_eq!(config.wifi.password.as_str(), "secret123");
        assert_eq!(config.device.name.as_str(), "Desk Display");
    }

    #[test]
    fn short_string_truncation() {
        let long_input = "a".repeat(100);
        let s = short_string(&long_input);
        assert_eq!(s.len(), MAX_SHORT_STRING);
    }

    #[test]
    fn long_string_truncation() {
        let long_input = "b".repeat(200);
        let s = long_string(&long_input);
        assert_eq!(s.len(), MAX_LONG_STRING);
    }

    #[test]
    fn string_helpers_utf8_boundary() {
        // 4-byte chars: 17 of them is 68 bytes, only 16 fit
        let input = "🛫".repeat(17);
        let s = short_string(&input);
        assert_eq!(s.len(), 64);
        assert_eq!(s.chars().count(), 16);
    }
}
