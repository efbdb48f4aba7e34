//! # torn-travel
//!
//! Desk display for a Torn player's travel status: an ESP32 with a 128x64
//! SSD1306 OLED that fetches the player's status over HTTPS and counts the
//! flight down locally between fetches.
//!
//! ## Features
//!
//! - **Local countdown**: one decrement per second, never below zero
//! - **Reconciliation**: re-fetch when the countdown reaches zero and on a
//!   fixed tick cadence, so a trip booked mid-idle is picked up
//! - **Error display**: fetch failures replace the destination line while the
//!   cached countdown keeps running
//! - **Direction marker**: animated marker sweeping away from or towards home
//! - **Sleep button**: polled each tick, clears the screen and deep-sleeps
//!
//! ## Architecture
//!
//! The crate is structured to allow testing on desktop without hardware:
//!
//! - `status` - The travel record and countdown formatting
//! - `fetch` - JSON decoding and the HTTP-backed status source
//! - `schedule` - Deadline-based tick and animation cadence
//! - `monitor` - Countdown/refresh reconciliation, owns source and display
//! - `view` / `render` - What to draw, and drawing it with embedded-graphics
//! - `hal` - Concrete implementations (mock for testing, esp32 for hardware)
//!
//! ## Example
//!
//! ```rust
//! use torn_travel::config::ApiConfig;
//! use torn_travel::hal::{MockDisplay, MockHttp};
//! use torn_travel::{StatusFetcher, TickOutcome, TravelMonitor};
//! use torn_travel::config::RefreshConfig;
//!
//! let mut http = MockHttp::new();
//! http.queue_ok(r#"{"status":{"state":"Traveling"},"travel":{"destination":"Mexico","time_left":1}}"#);
//! http.queue_ok(r#"{"status":{"state":"Abroad"},"travel":{"destination":"Mexico","time_left":0}}"#);
//!
//! let fetcher = StatusFetcher::new(http, &ApiConfig::default().with_key("KEY"));
//! let mut monitor = TravelMonitor::new(fetcher, MockDisplay::new(), RefreshConfig::default());
//!
//! monitor.boot(0);
//! assert_eq!(monitor.tick(1000), TickOutcome::Arrived);
//! assert_eq!(monitor.view(1000).header.text(), "Arrived: Mexico");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

/// Compile-time configuration for WiFi, API and cadence.
pub mod config;
/// Torn API response decoding and the HTTP-backed status source.
pub mod fetch;
/// Hardware abstraction layer with mock implementations for testing.
pub mod hal;
/// Countdown and refresh reconciliation.
pub mod monitor;
/// Tick and animation-frame deadlines.
pub mod schedule;
/// Travel status record and countdown formatting.
pub mod status;
/// Core traits for hardware, network and display abstraction.
pub mod traits;
/// Hardware-independent description of a frame.
pub mod view;

/// Drawing a view onto any embedded-graphics target.
#[cfg(feature = "graphics")]
pub mod render;

// Re-exports for convenience
pub use fetch::{parse_travel_status, FetchError, StatusFetcher};
pub use monitor::{Step, TickOutcome, TravelMonitor};
pub use schedule::{ScheduleEvent, TickSchedule};
pub use status::{format_countdown, TravelDirection, TravelStatus, HOME_DESTINATION};
pub use traits::{
    // Hardware
    Clock,
    // Network
    BodyBuffer,
    BodyTooLarge,
    HttpClient,
    HttpReply,
    PowerControl,
    SleepButton,
    StatusSource,
    // Display
    TravelDisplay,
};
pub use view::{Body, Header, Marker, TravelView};

// Config re-exports
pub use config::{ApiConfig, Config, DeviceConfig, RefreshConfig, WifiConfig};
