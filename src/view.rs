//! What to draw for a reconciled travel status.
//!
//! [`TravelView`] is a pure description of the screen, independent of the
//! display hardware. The monitor builds one per tick; display drivers turn it
//! into pixels.
//!
//! # Layout
//!
//! ```text
//! Travelling                  Idle (home)               Idle (abroad)
//! ┌──────────────────────┐    ┌──────────────────────┐  ┌──────────────────────┐
//! │       Mexico         │    │    At: Torn City     │  │   Arrived: Mexico    │
//! │                      │    │No travel detected :( │  │                      │
//! │      0:17:59         │    │Status:               │  │Status:               │
//! │                      │    │Okay                  │  │Abroad                │
//! │  ▶                   │    │                      │  │                      │
//! └──────────────────────┘    └──────────────────────┘  └──────────────────────┘
//! ```
//!
//! A fetch error replaces the header text; the rest of the view still comes
//! from the cached status.

extern crate alloc;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use alloc::format;

use crate::fetch::FetchError;
use crate::status::{format_countdown, TravelDirection, TravelStatus};

/// Header text shown when idle at home.
pub const AT_HOME_TEXT: &str = "At: Torn City";

/// Second line shown when idle at home.
pub const NOT_TRAVELLING_TEXT: &str = "No travel detected :(";

/// Label drawn above the raw status text while idle.
pub const STATUS_LABEL: &str = "Status:";

/// Top line of the screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Header<'a> {
    /// Travelling: the destination name, centered.
    Destination(&'a str),
    /// Idle abroad: "Arrived: <destination>".
    Arrived(&'a str),
    /// Idle at home.
    AtHome,
    /// Last fetch failed: the error text in place of the destination.
    Error(&'a FetchError),
}

impl Header<'_> {
    /// Text to draw.
    pub fn text(&self) -> String {
        match self {
            Header::Destination(destination) => (*destination).to_string(),
            Header::Arrived(destination) => format!("Arrived: {}", destination),
            Header::AtHome => AT_HOME_TEXT.to_string(),
            Header::Error(err) => err.to_string(),
        }
    }

    /// Returns true if the header shows a fetch error.
    pub fn is_error(&self) -> bool {
        matches!(self, Header::Error(_))
    }
}

/// Direction marker position within the animation band.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Marker {
    /// Which way the marker points and sweeps.
    pub direction: TravelDirection,
    /// Slot index from the left edge of the band, `0..positions`.
    pub position: u8,
    /// Number of slots in the band.
    pub positions: u8,
}

impl Marker {
    /// Marker for the given wall-clock time.
    ///
    /// Advances one slot every `frame_ms` and wraps after `positions` slots.
    /// Outbound markers sweep left to right (away from home), returning
    /// markers sweep right to left.
    ///
    /// ```rust
    /// use torn_travel::{Marker, TravelDirection};
    ///
    /// let m = Marker::at(TravelDirection::Outbound, 1500, 500, 8);
    /// assert_eq!(m.position, 3);
    ///
    /// let m = Marker::at(TravelDirection::Returning, 1500, 500, 8);
    /// assert_eq!(m.position, 4);
    /// ```
    pub fn at(direction: TravelDirection, now_ms: u64, frame_ms: u32, positions: u8) -> Self {
        let positions = positions.max(1);
        let frame = now_ms / u64::from(frame_ms.max(1));
        let step = (frame % u64::from(positions)) as u8;
        let position = match direction {
            TravelDirection::Outbound => step,
            TravelDirection::Returning => positions - 1 - step,
        };
        Self {
            direction,
            position,
            positions,
        }
    }
}

/// Main area below the header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Body<'a> {
    /// Travelling: large `H:MM:SS` countdown plus the direction marker.
    Countdown {
        /// Seconds until arrival.
        seconds_remaining: u32,
        /// Marker for the current animation frame.
        marker: Marker,
    },
    /// Idle: the raw status label from the API.
    Status(&'a str),
}

/// Everything the display needs for one frame.
///
/// # Example
///
/// ```rust
/// use torn_travel::{TravelStatus, TravelView};
///
/// let status = TravelStatus::new("Okay", "Torn", 0);
/// let view = TravelView::new(&status, None, 0, 500, 8);
/// assert_eq!(view.lines(), vec!["At: Torn City", "No travel detected :(", "Status:", "Okay"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TravelView<'a> {
    /// Top line.
    pub header: Header<'a>,
    /// Extra line under the header (idle at home only).
    pub subtitle: Option<&'static str>,
    /// Countdown or status label.
    pub body: Body<'a>,
}

impl<'a> TravelView<'a> {
    /// Builds the view for a cached status and the last fetch error.
    pub fn new(
        status: &'a TravelStatus,
        error: Option<&'a FetchError>,
        now_ms: u64,
        frame_ms: u32,
        marker_positions: u8,
    ) -> Self {
        let header = match error {
            Some(err) => Header::Error(err),
            None if status.is_travelling() => Header::Destination(&status.destination),
            None if status.is_home() => Header::AtHome,
            None => Header::Arrived(&status.destination),
        };

        let subtitle = if !status.is_travelling() && status.is_home() {
            Some(NOT_TRAVELLING_TEXT)
        } else {
            None
        };

        let body = match status.direction() {
            Some(direction) => Body::Countdown {
                seconds_remaining: status.seconds_remaining,
                marker: Marker::at(direction, now_ms, frame_ms, marker_positions),
            },
            None => Body::Status(&status.state),
        };

        Self {
            header,
            subtitle,
            body,
        }
    }

    /// Returns true if the view shows a running countdown.
    pub fn is_travelling(&self) -> bool {
        matches!(self.body, Body::Countdown { .. })
    }

    /// The direction marker, while travelling.
    pub fn marker(&self) -> Option<Marker> {
        match self.body {
            Body::Countdown { marker, .. } => Some(marker),
            Body::Status(_) => None,
        }
    }

    /// Text lines top to bottom, without the marker.
    ///
    /// Used for logging and by test displays.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(4);
        lines.push(self.header.text());
        if let Some(subtitle) = self.subtitle {
            lines.push(subtitle.to_string());
        }
        match &self.body {
            Body::Countdown {
                seconds_remaining, ..
            } => lines.push(format_countdown(*seconds_remaining).as_str().to_string()),
            Body::Status(state) => {
                lines.push(STATUS_LABEL.to_string());
                lines.push((*state).to_string());
            }
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view_of(status: &TravelStatus) -> TravelView<'_> {
        TravelView::new(status, None, 0, 500, 8)
    }

    #[test]
    fn travelling_outbound() {
        let status = TravelStatus::new("Traveling", "Mexico", 3661);
        let view = view_of(&status);

        assert_eq!(view.header, Header::Destination("Mexico"));
        assert_eq!(view.subtitle, None);
        assert!(view.is_travelling());
        assert_eq!(view.lines(), vec!["Mexico", "1:01:01"]);
        assert_eq!(view.marker().unwrap().direction, TravelDirection::Outbound);
    }

    #[test]
    fn travelling_home_shows_returning_marker() {
        let status = TravelStatus::new("Traveling", "Torn", 59);
        let view = view_of(&status);

        assert_eq!(view.header, Header::Destination("Torn"));
        assert_eq!(view.lines(), vec!["Torn", "0:00:59"]);
        assert_eq!(view.marker().unwrap().direction, TravelDirection::Returning);
    }

    #[test]
    fn idle_home_shows_home_text() {
        let status = TravelStatus::new("Okay", "Torn", 0);
        let view = view_of(&status);

        assert_eq!(view.header, Header::AtHome);
        assert_eq!(view.subtitle, Some(NOT_TRAVELLING_TEXT));
        assert_eq!(view.body, Body::Status("Okay"));
        assert!(view.marker().is_none());
    }

    #[test]
    fn idle_abroad_shows_arrived_text() {
        let status = TravelStatus::new("Abroad", "South Africa", 0);
        let view = view_of(&status);

        assert_eq!(view.header.text(), "Arrived: South Africa");
        assert_eq!(view.subtitle, None);
        assert_eq!(
            view.lines(),
            vec!["Arrived: South Africa", "Status:", "Abroad"]
        );
    }

    #[test]
    fn error_replaces_destination() {
        let status = TravelStatus::new("Traveling", "Canada", 100);
        let err = FetchError::Transport("timeout".into());
        let view = TravelView::new(&status, Some(&err), 0, 500, 8);

        assert!(view.header.is_error());
        assert_eq!(view.header.text(), "HTTP error: timeout");
        // Countdown keeps running from the cached status
        assert_eq!(view.lines()[1], "0:01:40");
    }

    #[test]
    fn error_on_fresh_status_shows_empty_state() {
        let status = TravelStatus::default();
        let err = FetchError::Parse("EOF while parsing".into());
        let view = TravelView::new(&status, Some(&err), 0, 500, 8);

        assert_eq!(view.header.text(), "JSON err: EOF while parsing");
        assert_eq!(view.body, Body::Status(""));
    }

    #[test]
    fn marker_advances_every_frame_and_wraps() {
        let positions: Vec<u8> = (0..10)
            .map(|frame| Marker::at(TravelDirection::Outbound, frame * 500, 500, 8).position)
            .collect();
        assert_eq!(positions, vec![0, 1, 2, 3, 4, 5, 6, 7, 0, 1]);
    }

    #[test]
    fn marker_holds_within_a_frame() {
        let a = Marker::at(TravelDirection::Outbound, 1000, 500, 8);
        let b = Marker::at(TravelDirection::Outbound, 1499, 500, 8);
        assert_eq!(a, b);
    }

    #[test]
    fn returning_marker_sweeps_right_to_left() {
        let positions: Vec<u8> = (0..9)
            .map(|frame| Marker::at(TravelDirection::Returning, frame * 500, 500, 8).position)
            .collect();
        assert_eq!(positions, vec![7, 6, 5, 4, 3, 2, 1, 0, 7]);
    }

    #[test]
    fn single_position_marker_is_static() {
        let m = Marker::at(TravelDirection::Returning, 12_345, 500, 1);
        assert_eq!(m.position, 0);
        let m = Marker::at(TravelDirection::Outbound, 12_345, 0, 0);
        assert_eq!(m.position, 0);
        assert_eq!(m.positions, 1);
    }
}
