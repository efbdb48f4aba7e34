//! Travel status record and the helpers that interpret it.
//!
//! A [`TravelStatus`] is the device's whole model of the outside world. It is
//! replaced wholesale on every successful fetch; between fetches only the
//! countdown is touched.
//!
//! # Example
//!
//! ```rust
//! use torn_travel::{format_countdown, TravelDirection, TravelStatus};
//!
//! let status = TravelStatus::new("Traveling", "Mexico", 3661);
//! assert!(status.is_travelling());
//! assert_eq!(status.direction(), Some(TravelDirection::Outbound));
//! assert_eq!(format_countdown(status.seconds_remaining).as_str(), "1:01:01");
//! ```

extern crate alloc;
use alloc::string::String;
use core::fmt::Write;

/// Destination value the API reports when the player is at home.
pub const HOME_DESTINATION: &str = "Torn";

/// Player travel status as reported by the API.
///
/// `seconds_remaining == 0` is the only signal for "not travelling".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TravelStatus {
    /// Player status label (e.g. "Okay", "Traveling", "Abroad").
    pub state: String,
    /// Place name; [`HOME_DESTINATION`] means home.
    pub destination: String,
    /// Seconds until arrival, 0 when stationary.
    pub seconds_remaining: u32,
}

impl TravelStatus {
    /// Creates a status record.
    pub fn new(state: impl Into<String>, destination: impl Into<String>, seconds_remaining: u32) -> Self {
        Self {
            state: state.into(),
            destination: destination.into(),
            seconds_remaining,
        }
    }

    /// Returns true while a countdown is running.
    #[inline]
    pub fn is_travelling(&self) -> bool {
        self.seconds_remaining > 0
    }

    /// Returns true if the destination is the home sentinel.
    #[inline]
    pub fn is_home(&self) -> bool {
        self.destination == HOME_DESTINATION
    }

    /// Returns true if the player is stationary somewhere other than home.
    pub fn has_arrived_abroad(&self) -> bool {
        !self.is_travelling() && !self.is_home()
    }

    /// Direction of the current trip, or `None` when not travelling.
    pub fn direction(&self) -> Option<TravelDirection> {
        if !self.is_travelling() {
            None
        } else if self.is_home() {
            Some(TravelDirection::Returning)
        } else {
            Some(TravelDirection::Outbound)
        }
    }

    /// Decrements the countdown by one second.
    ///
    /// Returns true if this call brought the countdown to zero. A countdown
    /// that is already zero stays at zero and returns false.
    pub fn tick_down(&mut self) -> bool {
        if self.seconds_remaining == 0 {
            return false;
        }
        self.seconds_remaining -= 1;
        self.seconds_remaining == 0
    }
}

/// Which way the player is flying.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TravelDirection {
    /// Leaving home for a destination abroad.
    Outbound,
    /// Flying back home.
    Returning,
}

impl TravelDirection {
    /// Returns the direction as a lowercase string.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            TravelDirection::Outbound => "outbound",
            TravelDirection::Returning => "returning",
        }
    }
}

/// Fixed-size buffer holding a formatted countdown.
pub type CountdownText = heapless::String<16>;

/// Formats seconds as `H:MM:SS` with unpadded hours.
///
/// ```rust
/// use torn_travel::format_countdown;
///
/// assert_eq!(format_countdown(3661).as_str(), "1:01:01");
/// assert_eq!(format_countdown(59).as_str(), "0:00:59");
/// assert_eq!(format_countdown(0).as_str(), "0:00:00");
/// ```
pub fn format_countdown(seconds: u32) -> CountdownText {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    let mut text = CountdownText::new();
    // u32::MAX hours fits in 16 bytes, write cannot fail
    let _ = write!(text, "{}:{:02}:{:02}", hours, minutes, secs);
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_status_is_idle() {
        let status = TravelStatus::default();
        assert!(!status.is_travelling());
        assert!(status.state.is_empty());
        assert!(status.destination.is_empty());
        assert_eq!(status.direction(), None);
    }

    #[test]
    fn home_sentinel() {
        assert!(TravelStatus::new("Okay", "Torn", 0).is_home());
        assert!(!TravelStatus::new("Okay", "torn", 0).is_home());
        assert!(!TravelStatus::new("Okay", "Japan", 0).is_home());
    }

    #[test]
    fn arrived_abroad_only_when_stationary() {
        assert!(TravelStatus::new("Abroad", "Japan", 0).has_arrived_abroad());
        assert!(!TravelStatus::new("Traveling", "Japan", 10).has_arrived_abroad());
        assert!(!TravelStatus::new("Okay", "Torn", 0).has_arrived_abroad());
    }

    #[test]
    fn direction_follows_destination() {
        let out = TravelStatus::new("Traveling", "Cayman Islands", 120);
        assert_eq!(out.direction(), Some(TravelDirection::Outbound));

        let back = TravelStatus::new("Traveling", "Torn", 120);
        assert_eq!(back.direction(), Some(TravelDirection::Returning));
    }

    #[test]
    fn tick_down_decrements_by_one() {
        let mut status = TravelStatus::new("Traveling", "UAE", 3);
        assert!(!status.tick_down());
        assert_eq!(status.seconds_remaining, 2);
        assert!(!status.tick_down());
        assert!(status.tick_down());
        assert_eq!(status.seconds_remaining, 0);
    }

    #[test]
    fn tick_down_never_goes_below_zero() {
        let mut status = TravelStatus::new("Okay", "Torn", 0);
        assert!(!status.tick_down());
        assert_eq!(status.seconds_remaining, 0);
    }

    #[test]
    fn countdown_formatting() {
        assert_eq!(format_countdown(3661).as_str(), "1:01:01");
        assert_eq!(format_countdown(59).as_str(), "0:00:59");
        assert_eq!(format_countdown(60).as_str(), "0:01:00");
        assert_eq!(format_countdown(36_000).as_str(), "10:00:00");
        assert_eq!(format_countdown(u32::MAX).as_str(), "1193046:28:15");
    }

    #[test]
    fn direction_as_str() {
        assert_eq!(TravelDirection::Outbound.as_str(), "outbound");
        assert_eq!(TravelDirection::Returning.as_str(), "returning");
    }
}
