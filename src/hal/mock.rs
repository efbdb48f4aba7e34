//! Mock implementations for testing without hardware.
//!
//! This module provides test doubles for all hardware and network traits,
//! enabling development and testing on desktop without the board, the OLED
//! or a Torn API key.
//!
//! # Available Mocks
//!
//! | Mock | Trait | Purpose |
//! |------|-------|---------|
//! | [`MockClock`] | [`Clock`] | Controllable time source |
//! | [`MockHttp`] | [`HttpClient`] | Scripted replies, records requested URLs |
//! | [`MockSource`] | [`StatusSource`] | Scripted statuses and fetch errors |
//! | [`MockDisplay`] | [`TravelDisplay`] | Records every draw call |
//! | [`MockButton`] | [`SleepButton`] | Settable button state |
//! | [`MockPower`] | [`PowerControl`] | Records halt requests |
//!
//! # Example
//!
//! ```rust
//! use torn_travel::config::RefreshConfig;
//! use torn_travel::hal::{MockDisplay, MockSource};
//! use torn_travel::{TravelMonitor, TravelStatus};
//!
//! let mut source = MockSource::new();
//! source.queue_status(TravelStatus::new("Traveling", "Japan", 90));
//!
//! let mut monitor = TravelMonitor::new(source, MockDisplay::new(), RefreshConfig::default());
//! monitor.boot(0);
//! monitor.tick(1000);
//!
//! assert_eq!(monitor.display().last_lines().unwrap(), &["Japan", "0:01:29"]);
//! ```
//!
//! [`Clock`]: crate::traits::Clock
//! [`HttpClient`]: crate::traits::HttpClient
//! [`StatusSource`]: crate::traits::StatusSource
//! [`TravelDisplay`]: crate::traits::TravelDisplay
//! [`SleepButton`]: crate::traits::SleepButton
//! [`PowerControl`]: crate::traits::PowerControl

extern crate alloc;
use alloc::collections::VecDeque;
use alloc::string::String;
use alloc::vec::Vec;

use crate::fetch::FetchError;
use crate::status::TravelStatus;
use crate::traits::{
    Clock, HttpClient, HttpReply, PowerControl, SleepButton, StatusSource, TravelDisplay,
};
use crate::view::{Marker, TravelView};

/// Error text returned by scripted mocks once their queue runs dry.
pub const NOTHING_QUEUED: &str = "no response queued";

// ============================================================================
// Hardware Mocks
// ============================================================================

/// Mock clock for testing.
///
/// Provides a controllable time source for testing time-dependent behavior.
///
/// # Example
///
/// ```rust
/// use torn_travel::hal::MockClock;
/// use torn_travel::traits::Clock;
///
/// let mut clock = MockClock::new();
/// assert_eq!(clock.now_ms(), 0);
///
/// clock.set(1000);
/// assert_eq!(clock.now_ms(), 1000);
///
/// clock.advance(500);
/// assert_eq!(clock.now_ms(), 1500);
/// ```
#[derive(Debug, Default)]
pub struct MockClock {
    current_ms: u64,
}

impl MockClock {
    /// Creates a new mock clock starting at 0ms.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the current time in milliseconds.
    pub fn set(&mut self, ms: u64) {
        self.current_ms = ms;
    }

    /// Advances the clock by the given duration.
    pub fn advance(&mut self, ms: u64) {
        self.current_ms += ms;
    }
}

impl Clock for MockClock {
    fn now_ms(&self) -> u64 {
        self.current_ms
    }
}

/// Mock sleep button.
///
/// Stays pressed until released, like a held key.
#[derive(Debug, Default)]
pub struct MockButton {
    /// Whether the button is currently held.
    pub pressed: bool,
    /// Number of times the button was polled.
    pub polls: usize,
}

impl MockButton {
    /// Creates a released button.
    pub fn new() -> Self {
        Self::default()
    }

    /// Holds the button down.
    pub fn press(&mut self) {
        self.pressed = true;
    }

    /// Lets go of the button.
    pub fn release(&mut self) {
        self.pressed = false;
    }
}

impl SleepButton for MockButton {
    fn is_pressed(&mut self) -> bool {
        self.polls += 1;
        self.pressed
    }
}

/// Mock power control. Records halts instead of sleeping.
#[derive(Debug, Default)]
pub struct MockPower {
    /// Whether `halt` was called at least once.
    pub halted: bool,
    /// Number of times `halt` was called.
    pub halt_count: usize,
}

impl MockPower {
    /// Creates a running device.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PowerControl for MockPower {
    fn halt(&mut self) {
        self.halted = true;
        self.halt_count += 1;
    }
}

// ============================================================================
// Network Mocks
// ============================================================================

/// Mock HTTP client for testing.
///
/// Replies are returned in the order they were queued. Every requested URL
/// is recorded. An empty queue behaves like an unreachable host.
///
/// # Example
///
/// ```rust
/// use torn_travel::hal::MockHttp;
/// use torn_travel::traits::HttpClient;
///
/// let mut http = MockHttp::new();
/// http.queue_reply(404, "not found");
/// http.queue_transport_error("connection reset");
///
/// assert_eq!(http.get("https://a/").unwrap().status, 404);
/// assert_eq!(http.get("https://b/").unwrap_err(), "connection reset");
/// assert_eq!(http.requested, vec!["https://a/", "https://b/"]);
/// ```
#[derive(Debug, Default)]
pub struct MockHttp {
    /// URLs passed to `get`, oldest first.
    pub requested: Vec<String>,
    replies: VecDeque<Result<HttpReply, String>>,
}

impl MockHttp {
    /// Creates a mock client with nothing queued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a 200 reply with the given body
    pub fn queue_ok(&mut self, body: &str) {
        self.replies.push_back(Ok(HttpReply::ok(body.as_bytes())));
    }

    /// Queue a reply with an arbitrary status code
    pub fn queue_reply(&mut self, status: u16, body: &str) {
        self.replies
            .push_back(Ok(HttpReply::new(status, body.as_bytes())));
    }

    /// Queue a transport failure
    pub fn queue_transport_error(&mut self, message: &str) {
        self.replies.push_back(Err(message.into()));
    }

    /// Number of replies not yet consumed.
    pub fn pending(&self) -> usize {
        self.replies.len()
    }
}

impl HttpClient for MockHttp {
    type Error = String;

    fn get(&mut self, url: &str) -> Result<HttpReply, String> {
        self.requested.push(url.into());
        self.replies
            .pop_front()
            .unwrap_or_else(|| Err(NOTHING_QUEUED.into()))
    }
}

/// Mock status source for testing the monitor without HTTP or JSON.
///
/// # Example
///
/// ```rust
/// use torn_travel::hal::MockSource;
/// use torn_travel::traits::StatusSource;
/// use torn_travel::{FetchError, TravelStatus};
///
/// let mut source = MockSource::new();
/// source.queue_status(TravelStatus::new("Okay", "Torn", 0));
/// source.queue_error(FetchError::Parse("bad".into()));
///
/// assert!(source.fetch().unwrap().is_home());
/// assert!(source.fetch().is_err());
/// assert!(source.fetch().unwrap_err().is_transport()); // queue exhausted
/// assert_eq!(source.fetch_count, 3);
/// ```
#[derive(Debug, Default)]
pub struct MockSource {
    /// Number of times `fetch` was called.
    pub fetch_count: usize,
    results: VecDeque<Result<TravelStatus, FetchError>>,
}

impl MockSource {
    /// Creates a source with nothing queued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful fetch
    pub fn queue_status(&mut self, status: TravelStatus) {
        self.results.push_back(Ok(status));
    }

    /// Queue a failed fetch
    pub fn queue_error(&mut self, error: FetchError) {
        self.results.push_back(Err(error));
    }
}

impl StatusSource for MockSource {
    fn fetch(&mut self) -> Result<TravelStatus, FetchError> {
        self.fetch_count += 1;
        self.results
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::Transport(NOTHING_QUEUED.into())))
    }
}

// ============================================================================
// Display Mocks
// ============================================================================

/// One call recorded by [`MockDisplay`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DisplayOp {
    /// `init()`
    Init,
    /// `clear()`
    Clear,
    /// `blank()`
    Blank,
    /// `render()`, with the text lines of the view.
    Render(Vec<String>),
    /// `render_marker()`
    Marker(Marker),
    /// `show_message()`
    Message(String, Option<String>),
}

/// Mock display for testing UI rendering.
///
/// Records every call in order so tests can check that a clear came before
/// a draw.
///
/// # Example
///
/// ```
/// use torn_travel::hal::{DisplayOp, MockDisplay};
/// use torn_travel::traits::TravelDisplay;
///
/// let mut display = MockDisplay::new();
/// display.init().unwrap();
/// display.show_message("Connecting to:", Some("HomeWifi")).unwrap();
///
/// assert!(display.initialized);
/// assert_eq!(display.ops[0], DisplayOp::Init);
/// assert_eq!(display.render_count(), 0);
/// ```
#[derive(Debug, Default)]
pub struct MockDisplay {
    /// Every call, oldest first.
    pub ops: Vec<DisplayOp>,
    /// Marker from the last `render_marker()` call.
    pub last_marker: Option<Marker>,
    /// Last message shown via show_message().
    pub last_message: Option<(String, Option<String>)>,
    /// Whether init() was called.
    pub initialized: bool,
}

impl MockDisplay {
    /// Creates a new mock display.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `render()` calls.
    pub fn render_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DisplayOp::Render(_)))
            .count()
    }

    /// Number of `clear()` calls.
    pub fn clear_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DisplayOp::Clear))
            .count()
    }

    /// Text lines of the most recent `render()`.
    pub fn last_lines(&self) -> Option<&[String]> {
        self.ops.iter().rev().find_map(|op| match op {
            DisplayOp::Render(lines) => Some(lines.as_slice()),
            _ => None,
        })
    }
}

impl TravelDisplay for MockDisplay {
    type Error = ();

    fn init(&mut self) -> Result<(), ()> {
        self.initialized = true;
        self.ops.push(DisplayOp::Init);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), ()> {
        self.ops.push(DisplayOp::Clear);
        Ok(())
    }

    fn blank(&mut self) -> Result<(), ()> {
        self.ops.push(DisplayOp::Blank);
        Ok(())
    }

    fn render(&mut self, view: &TravelView<'_>) -> Result<(), ()> {
        self.ops.push(DisplayOp::Render(view.lines()));
        Ok(())
    }

    fn render_marker(&mut self, marker: &Marker) -> Result<(), ()> {
        self.last_marker = Some(*marker);
        self.ops.push(DisplayOp::Marker(*marker));
        Ok(())
    }

    fn show_message(&mut self, line1: &str, line2: Option<&str>) -> Result<(), ()> {
        self.last_message = Some((line1.into(), line2.map(Into::into)));
        self.ops
            .push(DisplayOp::Message(line1.into(), line2.map(Into::into)));
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::TravelDirection;

    // =========================================================================
    // MockClock Tests
    // =========================================================================

    #[test]
    fn mock_clock_default() {
        let clock = MockClock::new();
        assert_eq!(clock.now_ms(), 0);
    }

    #[test]
    fn mock_clock_set_and_advance() {
        let mut clock = MockClock::new();
        clock.set(1000);
        clock.advance(250);
        assert_eq!(clock.now_ms(), 1250);
    }

    // =========================================================================
    // MockButton / MockPower Tests
    // =========================================================================

    #[test]
    fn mock_button_holds_until_released() {
        let mut button = MockButton::new();
        assert!(!button.is_pressed());

        button.press();
        assert!(button.is_pressed());
        assert!(button.is_pressed());

        button.release();
        assert!(!button.is_pressed());
        assert_eq!(button.polls, 4);
    }

    #[test]
    fn mock_power_records_halts() {
        let mut power = MockPower::new();
        assert!(!power.halted);
        power.halt();
        assert!(power.halted);
        assert_eq!(power.halt_count, 1);
    }

    // =========================================================================
    // MockHttp Tests
    // =========================================================================

    #[test]
    fn mock_http_replies_in_order() {
        let mut http = MockHttp::new();
        http.queue_ok("first");
        http.queue_reply(500, "second");
        assert_eq!(http.pending(), 2);

        let a = http.get("u1").unwrap();
        let b = http.get("u2").unwrap();
        assert_eq!(a, HttpReply::ok("first"));
        assert_eq!(b.status, 500);
        assert_eq!(b.body_str(), Some("second"));
        assert_eq!(http.pending(), 0);
    }

    #[test]
    fn mock_http_empty_queue_fails() {
        let mut http = MockHttp::new();
        assert_eq!(http.get("u").unwrap_err(), NOTHING_QUEUED);
        assert_eq!(http.requested.len(), 1);
    }

    // =========================================================================
    // MockSource Tests
    // =========================================================================

    #[test]
    fn mock_source_scripted_results() {
        let mut source = MockSource::new();
        source.queue_error(FetchError::Transport("-1".into()));
        source.queue_status(TravelStatus::new("Abroad", "UK", 0));

        assert_eq!(
            source.fetch().unwrap_err(),
            FetchError::Transport("-1".into())
        );
        assert_eq!(source.fetch().unwrap().destination, "UK");
        assert_eq!(source.fetch_count, 2);
    }

    #[test]
    fn mock_source_exhausted_repeats_same_error() {
        let mut source = MockSource::new();
        assert_eq!(source.fetch().unwrap_err(), source.fetch().unwrap_err());
    }

    // =========================================================================
    // MockDisplay Tests
    // =========================================================================

    #[test]
    fn mock_display_default() {
        let display = MockDisplay::new();
        assert!(display.ops.is_empty());
        assert!(display.last_lines().is_none());
        assert!(display.last_marker.is_none());
        assert!(!display.initialized);
    }

    #[test]
    fn mock_display_records_render_lines() {
        let mut display = MockDisplay::new();
        let status = TravelStatus::new("Okay", "Torn", 0);
        display.clear().unwrap();
        display.render(&TravelView::new(&status, None, 0, 500, 8)).unwrap();

        assert_eq!(display.clear_count(), 1);
        assert_eq!(display.render_count(), 1);
        assert_eq!(display.last_lines().unwrap()[0], "At: Torn City");
    }

    #[test]
    fn mock_display_blank_is_not_a_clear() {
        let mut display = MockDisplay::new();
        display.blank().unwrap();

        assert_eq!(display.clear_count(), 0);
        assert_eq!(display.ops, vec![DisplayOp::Blank]);
    }

    #[test]
    fn mock_display_records_marker() {
        let mut display = MockDisplay::new();
        let marker = Marker::at(TravelDirection::Outbound, 1000, 500, 8);
        display.render_marker(&marker).unwrap();

        assert_eq!(display.last_marker, Some(marker));
        assert_eq!(display.ops, vec![DisplayOp::Marker(marker)]);
    }

    #[test]
    fn mock_display_show_message() {
        let mut display = MockDisplay::new();
        display.show_message("Connected.", Some("IP: 10.0.0.7")).unwrap();
        display.show_message("Only one line", None).unwrap();

        let (line1, line2) = display.last_message.as_ref().unwrap();
        assert_eq!(line1, "Only one line");
        assert!(line2.is_none());
        assert_eq!(
            display.ops[0],
            DisplayOp::Message("Connected.".into(), Some("IP: 10.0.0.7".into()))
        );
    }
}
