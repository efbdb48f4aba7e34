//! Countdown and refresh reconciliation.
//!
//! [`TravelMonitor`] is the single owning context of the firmware: it holds
//! the status source, the display, the cached [`TravelStatus`] and the tick
//! counters, and decides on every tick whether to trust the local countdown
//! or re-fetch.
//!
//! # State machine
//!
//! ```text
//!              fetch returns time_left > 0
//!        ┌──────────────────────────────────────┐
//!        │                                      ▼
//!   ┌─────────┐                           ┌────────────┐
//!   │  Idle   │◄── countdown hits 0 ──────│ Travelling │
//!   │ (0 s)   │    (re-fetch once)        │  (> 0 s)   │
//!   └─────────┘                           └────────────┘
//!        ▲ every `refresh_every_ticks` ticks: re-fetch │
//!        └─────────────────────────────────────────────┘
//! ```
//!
//! - A tick decrements the countdown by exactly one second, never below zero.
//! - The tick that brings it to zero re-fetches before anything else happens.
//! - Every `refresh_every_ticks` ticks a re-fetch happens regardless of state.
//! - A fetch that changes the record (or the error) clears the display before
//!   the next draw; otherwise frames are drawn over the previous one.
//! - A failed fetch keeps the cached status and shows the error in place of
//!   the destination.
//!
//! # Example
//!
//! ```rust
//! use torn_travel::config::RefreshConfig;
//! use torn_travel::hal::{MockDisplay, MockSource};
//! use torn_travel::{TickOutcome, TravelMonitor, TravelStatus};
//!
//! let mut source = MockSource::new();
//! source.queue_status(TravelStatus::new("Traveling", "Mexico", 2));
//! source.queue_status(TravelStatus::new("Abroad", "Mexico", 0));
//!
//! let mut monitor = TravelMonitor::new(source, MockDisplay::new(), RefreshConfig::default());
//! monitor.boot(0);
//! assert!(monitor.status().is_travelling());
//!
//! assert_eq!(monitor.tick(1000), TickOutcome::Counted);
//! assert_eq!(monitor.tick(2000), TickOutcome::Arrived);
//! assert_eq!(monitor.status().state, "Abroad");
//! ```

use log::{debug, info, warn};

use crate::config::RefreshConfig;
use crate::fetch::FetchError;
use crate::schedule::{ScheduleEvent, TickSchedule};
use crate::status::TravelStatus;
use crate::traits::{PowerControl, SleepButton, StatusSource, TravelDisplay};
use crate::view::TravelView;

/// What a tick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Countdown decremented (or idle), no fetch.
    Counted,
    /// Countdown reached zero and a fetch was issued.
    Arrived,
    /// The periodic refresh cadence elapsed and a fetch was issued.
    Refreshed,
}

impl TickOutcome {
    /// Returns true if the tick issued a fetch.
    pub fn fetched(&self) -> bool {
        !matches!(self, TickOutcome::Counted)
    }
}

/// What one loop step did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Nothing due; sleep this many milliseconds.
    Sleep(u64),
    /// A tick ran.
    Ticked(TickOutcome),
    /// An animation frame was drawn.
    Animated,
    /// The sleep button was pressed and the device was halted.
    Halted,
}

/// Owning context for the status display.
///
/// # Type Parameters
///
/// - `S`: where fresh status comes from ([`StatusSource`])
/// - `D`: where frames go ([`TravelDisplay`])
pub struct TravelMonitor<S: StatusSource, D: TravelDisplay> {
    source: S,
    display: D,
    config: RefreshConfig,
    status: TravelStatus,
    error: Option<FetchError>,
    ticks_since_fetch: u32,
    fetch_count: u32,
    needs_clear: bool,
    drawn_travelling: Option<bool>,
}

impl<S: StatusSource, D: TravelDisplay> TravelMonitor<S, D> {
    /// Creates a monitor with an empty, idle status.
    pub fn new(source: S, display: D, config: RefreshConfig) -> Self {
        Self {
            source,
            display,
            config,
            status: TravelStatus::default(),
            error: None,
            ticks_since_fetch: 0,
            fetch_count: 0,
            needs_clear: true,
            drawn_travelling: None,
        }
    }

    /// Fetches the initial status and draws the first frame.
    pub fn boot(&mut self, now_ms: u64) {
        info!("[Monitor] Initial fetch");
        self.refresh();
        self.redraw(now_ms);
    }

    /// Runs one countdown second.
    ///
    /// Decrements the countdown, re-fetches if it reached zero or if the
    /// periodic cadence elapsed, then redraws.
    pub fn tick(&mut self, now_ms: u64) -> TickOutcome {
        self.ticks_since_fetch = self.ticks_since_fetch.saturating_add(1);

        let arrived = self.status.tick_down();
        let periodic = self.config.periodic_refresh()
            && self.ticks_since_fetch >= self.config.refresh_every_ticks;

        let outcome = if arrived {
            info!("[Monitor] Countdown finished, refreshing");
            self.refresh();
            TickOutcome::Arrived
        } else if periodic {
            debug!("[Monitor] Periodic refresh");
            self.refresh();
            TickOutcome::Refreshed
        } else {
            TickOutcome::Counted
        };

        self.redraw(now_ms);
        outcome
    }

    /// Advances the direction marker. Does nothing while idle.
    pub fn animate(&mut self, now_ms: u64) {
        let marker = self.view(now_ms).marker();
        if let Some(marker) = marker {
            if let Err(e) = self.display.render_marker(&marker) {
                warn!("[Monitor] Marker draw failed: {:?}", e);
            }
        }
    }

    /// Blanks the panel ahead of a halt.
    pub fn shutdown(&mut self) {
        info!("[Monitor] Sleep requested, blanking display");
        if let Err(e) = self.display.blank() {
            warn!("[Monitor] Blank failed: {:?}", e);
        }
    }

    /// Runs whatever the schedule says is due.
    ///
    /// The sleep button is polled once per tick, before the countdown. When
    /// it is pressed the display is blanked and `power` is halted.
    pub fn step<B: SleepButton, P: PowerControl>(
        &mut self,
        schedule: &mut TickSchedule,
        button: &mut B,
        power: &mut P,
        now_ms: u64,
    ) -> Step {
        match schedule.poll(now_ms) {
            Some(ScheduleEvent::Tick) => {
                if button.is_pressed() {
                    self.shutdown();
                    power.halt();
                    return Step::Halted;
                }
                Step::Ticked(self.tick(now_ms))
            }
            Some(ScheduleEvent::Frame) => {
                self.animate(now_ms);
                Step::Animated
            }
            None => Step::Sleep(schedule.sleep_ms(now_ms)),
        }
    }

    /// Builds the view of the current state.
    pub fn view(&self, now_ms: u64) -> TravelView<'_> {
        TravelView::new(
            &self.status,
            self.error.as_ref(),
            now_ms,
            self.config.frame_ms,
            self.config.marker_positions,
        )
    }

    /// Cached status.
    pub fn status(&self) -> &TravelStatus {
        &self.status
    }

    /// Error from the last fetch, if it failed.
    pub fn error(&self) -> Option<&FetchError> {
        self.error.as_ref()
    }

    /// Seconds left on the local countdown.
    #[inline]
    pub fn seconds_remaining(&self) -> u32 {
        self.status.seconds_remaining
    }

    /// Number of fetches issued so far.
    pub fn fetch_count(&self) -> u32 {
        self.fetch_count
    }

    /// Ticks since the last fetch.
    pub fn ticks_since_fetch(&self) -> u32 {
        self.ticks_since_fetch
    }

    /// Returns a reference to the display.
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Returns a mutable reference to the display.
    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// Returns a reference to the status source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns a mutable reference to the status source.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Fetches and reconciles.
    ///
    /// Success replaces the cached record wholesale. Failure keeps it and
    /// records the error. Either way the refresh counter restarts.
    fn refresh(&mut self) {
        self.ticks_since_fetch = 0;
        self.fetch_count = self.fetch_count.saturating_add(1);

        let changed = match self.source.fetch() {
            Ok(status) => {
                let changed = status != self.status || self.error.is_some();
                self.status = status;
                self.error = None;
                changed
            }
            Err(err) => {
                let changed = self.error.as_ref() != Some(&err);
                self.error = Some(err);
                changed
            }
        };

        if changed {
            self.needs_clear = true;
        }
    }

    fn redraw(&mut self, now_ms: u64) {
        // Travelling and idle layouts use different rows; neither fully
        // erases the other
        let travelling = self.status.is_travelling();
        if self.drawn_travelling != Some(travelling) {
            self.needs_clear = true;
        }
        self.drawn_travelling = Some(travelling);

        if self.needs_clear {
            self.needs_clear = false;
            if let Err(e) = self.display.clear() {
                warn!("[Monitor] Clear failed: {:?}", e);
            }
        }

        let view = TravelView::new(
            &self.status,
            self.error.as_ref(),
            now_ms,
            self.config.frame_ms,
            self.config.marker_positions,
        );
        if let Err(e) = self.display.render(&view) {
            warn!("[Monitor] Render failed: {:?}", e);
        }
    }
}
